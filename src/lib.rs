// src/lib.rs
pub mod convention;
pub mod errors;
pub mod fmt;
pub mod frontend;
pub mod runtime;
pub mod transform;
