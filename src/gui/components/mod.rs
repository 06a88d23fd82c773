// src/gui/components/mod.rs
pub mod category_panel;
pub mod data_table;
pub mod export_bar;
pub mod tabs;
