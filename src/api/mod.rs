//! Data loaders for the catalog and per-episode payloads
//!
//! - Catalog: drama → season → episode tree with data references
//! - Episode data: title and line items of a single episode

pub mod client;

pub use client::{DataClient, LoadError, Location, DEFAULT_CATALOG_PATH};
