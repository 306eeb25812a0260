//! # dune-cover
//!
//! The transect percent-cover pipeline.
//!
//! Stages, leaves first:
//! - [`reference`]: resolves each species/cover code to a native flag and a cover type
//! - [`zones`]: classifies each observation interval into the dune and vegetated zones
//! - [`aggregate`]: sums corrected lengths per transect under a filter and divides by
//!   the zone length
//! - [`pipeline`]: runs the stages over every declared axis and zone and assembles the
//!   cover table
//!
//! [`export`] writes the table as CSV.
//!
//! The pipeline is a pure function of its input tables: it holds no global
//! state, and recoverable data problems are reported through
//! [`dune_core::diagnostics::RunDiagnostics`] rather than as errors.

pub mod aggregate;
pub mod error;
pub mod export;
pub mod pipeline;
pub mod reference;
pub mod zones;

pub use error::CoverError;
pub use pipeline::{CoverRun, run};
