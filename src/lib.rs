// src/lib.rs
// #![allow(dead_code)]
// #![allow(unused)]

#[macro_use]
pub mod macros;
#[macro_use]
pub mod log;

pub mod analysis;
pub mod cli;
pub mod config;
pub mod core;
pub mod csv;
pub mod file;
pub mod gui;
pub mod pipeline;
pub mod progress;
pub mod records;
pub mod report;
pub mod runner;
pub mod store;
pub mod taxonomy;
