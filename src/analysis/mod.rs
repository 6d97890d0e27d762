//! Diagnostics computed from finished grids

/// Row run counts and the post-fill parity invariant
pub mod balance;
/// Tag counts and area estimates
pub mod summary;

pub use balance::{RowBalance, row_balance, unbalanced_rows};
pub use summary::GridSummary;
