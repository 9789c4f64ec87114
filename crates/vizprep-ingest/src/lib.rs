//! Loading delimited files into the vizprep data model.
//!
//! The core pipeline never touches the filesystem; this crate is the boundary
//! that turns CSV input into [`RawTable`](vizprep_model::RawTable) snapshots
//! and keyed choropleth values.

pub mod csv_table;
pub mod error;
pub mod keyed;

pub use csv_table::{READER_ORIGIN, parse_raw_table, read_raw_table};
pub use error::{IngestError, Result};
pub use keyed::{keyed_values, read_keyed_values};
pub use vizprep_model::normalize_key;
