//! 4-stage order log pipeline with stop-on-first-error semantics.
//!
//! The pipeline turns an order log into a popularity ranking:
//! 1. FileGate - Rejects paths without a `.txt` extension
//! 2. Parse - Reads `eater_id,foodmenu_id` lines into orders
//! 3. Aggregate - Counts orders per menu item, rejecting duplicates
//! 4. Rank - Sorts menu items by descending count

mod execution;
mod stages;
#[cfg(test)]
mod tests;
mod types;

pub use types::{PipelineContext, PipelineOutput, PipelineStage};

pub use execution::{fetch_top_three_ordered_items, OrderPipeline};

pub use stages::{
    check_extension, count_ordered_items, parse_line, parse_orders, read_orders,
    sort_items_by_count_desc, AggregateStage, FileGateStage, ParseStage, RankStage,
};
