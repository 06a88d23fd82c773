// src/gui/actions/mod.rs
//
// Button "executive" actions for the export bar.
// Layout stays in components/export_bar.rs; the operational logic lives here.
// Every action updates the status line and logs; none of them panic.

mod analyze;
mod copy;
mod export;

pub use analyze::analyze;
pub use copy::copy;
pub use export::{export, open_output_folder};
