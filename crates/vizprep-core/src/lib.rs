//! Schema inference and tabular normalization for chart rendering.
//!
//! This crate turns a loosely structured table into chart-ready data:
//!
//! - **parse**: tolerant year and magnitude parsers
//! - **roles**: ordered rule table that sniffs period, category and measure columns
//! - **layout**: long/wide layout resolution into canonical records
//! - **aggregate**: grouped sums aligned to one period axis
//! - **domains**: linear, ordinal and diverging scale domains
//! - **diverging**: symmetric color scale with a gamma contrast curve
//! - **ticks**: round tick steps and bound extension
//! - **pipeline**: the three boundary operations plus a one-shot helper

pub mod aggregate;
pub mod diverging;
pub mod domains;
pub mod layout;
pub mod parse;
pub mod pipeline;
pub mod roles;
pub mod ticks;

pub use aggregate::aggregate;
pub use diverging::{DivergingScale, LegendStop, derive_diverging};
pub use domains::{derive_domains, value_range};
pub use layout::{Normalized, normalize};
pub use parse::{parse_magnitude, parse_period};
pub use pipeline::{PreparedChart, normalize_and_aggregate, prepare_chart};
pub use roles::{FALLBACK_PERIOD_COLUMN, ROLE_RULES, RoleRule, infer_roles, infer_roles_from_headers};
