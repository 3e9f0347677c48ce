//! Output rendering for path reports.
//!
//! Reports are sequences of `(label, value)` rows rendered as
//! `"LABEL: value"` lines. Rows sourced from unordered mappings are
//! sorted by label before rendering so output is deterministic across
//! runs.

mod rows;

pub use rows::RowSet;
