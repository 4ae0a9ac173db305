//! Aggregate stage - counts orders per menu item.

use std::collections::HashMap;
use tracing::debug;

use crate::errors::OrderError;
use crate::pipeline::types::{PipelineContext, PipelineStage};
use crate::types::{EaterId, ItemCounts, MenuItemId, Order};

/// Count valid orders per menu item.
///
/// Only the most recent item of each eater is remembered: an eater repeating
/// that item is a duplicate, while X, Y, X is not. A duplicate aborts the
/// count and no partial tally is returned.
pub fn count_ordered_items(orders: &[Order]) -> Result<ItemCounts, OrderError> {
    let mut counts = ItemCounts::new();
    let mut last_item: HashMap<EaterId, MenuItemId> = HashMap::new();

    for order in orders {
        if last_item.get(&order.eater_id) == Some(&order.food_menu_id) {
            debug!(
                "Duplicate order at line {}: eater {} item {}",
                order.line, order.eater_id, order.food_menu_id
            );
            return Err(OrderError::DuplicateEntry {
                eater_id: order.eater_id,
                food_menu_id: order.food_menu_id,
                line: order.line,
            });
        }

        *counts.entry(order.food_menu_id).or_insert(0) += 1;
        last_item.insert(order.eater_id, order.food_menu_id);
    }

    Ok(counts)
}

/// Aggregate stage - builds the item count map
pub struct AggregateStage;

impl PipelineStage for AggregateStage {
    fn name(&self) -> &str {
        "Aggregate"
    }

    fn execute(&self, mut ctx: PipelineContext) -> Result<PipelineContext, OrderError> {
        ctx.item_counts = count_ordered_items(&ctx.orders)?;
        debug!("Counted {} distinct menu items", ctx.item_counts.len());
        Ok(ctx)
    }
}
