//! modelscan-core: errors, configuration, scan events, tracing, and shared
//! constants for the modelscan schema extractor.
//!
//! This crate carries no parsing machinery; the extraction pipeline lives in
//! `modelscan-analysis` and depends on the types defined here.

pub mod config;
pub mod constants;
pub mod errors;
pub mod events;
pub mod tracing;
