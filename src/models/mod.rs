//! Data transfer objects for commit records and aggregation results.
//!
//! These structs are deserialized from the Commit Source's JSON and
//! serialized into chart descriptor data rows.
//! - `commit`: Commit record plus timestamp helpers
//! - `stats`: CategoryCount, DateTypeCount aggregation rows

pub mod commit;
pub mod stats;

pub use commit::*;
pub use stats::*;
