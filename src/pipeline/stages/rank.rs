//! Rank stage - orders menu items by popularity.

use tracing::debug;

use crate::errors::OrderError;
use crate::pipeline::types::{PipelineContext, PipelineStage};
use crate::types::{ItemCounts, MenuItemId};

/// Menu item IDs by descending count; equal counts by ascending ID.
pub fn sort_items_by_count_desc(counts: &ItemCounts) -> Vec<MenuItemId> {
    let mut ids: Vec<MenuItemId> = counts.keys().copied().collect();
    ids.sort_unstable_by(|a, b| counts[b].cmp(&counts[a]).then_with(|| a.cmp(b)));
    ids
}

/// Rank stage - sorts the counted items
pub struct RankStage;

impl PipelineStage for RankStage {
    fn name(&self) -> &str {
        "Rank"
    }

    fn execute(&self, mut ctx: PipelineContext) -> Result<PipelineContext, OrderError> {
        ctx.ranked = sort_items_by_count_desc(&ctx.item_counts);
        debug!("Ranking: {:?}", ctx.ranked);
        Ok(ctx)
    }
}
