//! Home value index aggregation.
//!
//! [`county`] averages a single target date per normalized county name, and
//! [`series`] averages every date column across all records to build a time
//! series. Both finalize into a [`types::Summary`] for export.

pub mod county;
pub mod series;
pub mod types;
pub mod utility;
