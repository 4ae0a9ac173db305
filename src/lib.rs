// Library exports for the hotelmenu order ranking tool
pub mod config;
pub mod errors;
pub mod pipeline;
pub mod report;
pub mod types;

// Re-export key types for convenience
pub use config::HotelMenuConfig;
pub use errors::{ErrorCode, ErrorKind, Field, OrderError};
pub use pipeline::{fetch_top_three_ordered_items, OrderPipeline, PipelineOutput};
pub use report::{ReportFormat, TopItemsReport};
pub use types::{EaterId, ItemCounts, MenuItemId, Order, RankedItem};
