//! Pipeline stage implementations.

mod aggregate;
mod file_gate;
mod parse;
mod rank;

pub use aggregate::{count_ordered_items, AggregateStage};
pub use file_gate::{check_extension, FileGateStage};
pub use parse::{parse_line, parse_orders, read_orders, ParseStage};
pub use rank::{sort_items_by_count_desc, RankStage};
