//! # dune-core
//!
//! Core types shared across all dunecover crates.
//!
//! This crate provides:
//! - Transect composite keys and the text normalization used to build them
//! - Entity structs for positional transects, observations, and reference entries
//! - Zone and aggregation-axis enums, including the `pctcov_<axis>_<zone>` column naming
//! - The cover result table and its builder
//! - Run diagnostics and CLI response types

pub mod axes;
pub mod diagnostics;
pub mod entities;
pub mod keys;
pub mod responses;
pub mod table;
pub mod zones;
