//! Data model shared by the vizprep crates.
//!
//! Everything here is plain, immutable-after-construction data: the raw input
//! table, the inferred column roles, canonical records, aggregated series and
//! the scale domains handed to a renderer.

pub mod domains;
pub mod error;
pub mod keyed;
pub mod options;
pub mod record;
pub mod roles;
pub mod series;
pub mod table;

pub use domains::{DivergingDomain, PeriodExtent, ScaleDomains, ValueRange};
pub use error::{NoDataReason, Result, ShapeError};
pub use keyed::{KeyedValue, KeyedValues, normalize_key};
pub use options::{DEFAULT_GAMMA, DomainOptions};
pub use record::{CanonicalRecord, Layout};
pub use roles::{ColumnRole, ColumnRoles, RuleHit};
pub use series::{AggregateResult, Series, SeriesPoint};
pub use table::{RawTable, RowView};
