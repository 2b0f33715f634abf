//! Reusable widget components.

pub mod detail;
pub mod filter;
pub mod progress;
pub mod stat;

pub use detail::DetailPanel;
pub use filter::{FilterBar, FilterOption};
pub use progress::ProgressBar;
pub use stat::StatCard;
