// src/core/mod.rs
// Primitive, domain-agnostic helpers.
pub mod sanitize;
