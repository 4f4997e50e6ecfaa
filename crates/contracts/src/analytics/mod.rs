pub mod filter;
pub mod summary;

pub use filter::{filter_orders, FilterState};
pub use summary::{summarize, DashboardSummary};
