//! Pipeline types and trait definitions.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::errors::OrderError;
use crate::types::{ItemCounts, MenuItemId, Order, RankedItem};

/// Context passed between pipeline stages
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PipelineContext {
    /// Order log being processed
    pub input_path: PathBuf,

    /// Parsed orders, in file order
    pub orders: Vec<Order>,

    /// Valid orders per menu item
    pub item_counts: ItemCounts,

    /// Menu item IDs by descending count
    pub ranked: Vec<MenuItemId>,
}

impl PipelineContext {
    pub fn new(input_path: PathBuf) -> Self {
        Self {
            input_path,
            orders: Vec::new(),
            item_counts: ItemCounts::new(),
            ranked: Vec::new(),
        }
    }

    /// Get final output artifacts
    pub fn output(self) -> PipelineOutput {
        PipelineOutput {
            total_orders: self.orders.len(),
            ranked: self.ranked,
            item_counts: self.item_counts,
        }
    }
}

/// Final output from the pipeline
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PipelineOutput {
    pub ranked: Vec<MenuItemId>,
    pub item_counts: ItemCounts,
    pub total_orders: usize,
}

impl PipelineOutput {
    /// The first `n` ranked items with their counts (fewer if fewer exist)
    pub fn top(&self, n: usize) -> Vec<RankedItem> {
        self.ranked
            .iter()
            .take(n)
            .enumerate()
            .map(|(idx, &menu_id)| RankedItem {
                rank: idx + 1,
                menu_id,
                count: self.item_counts.get(&menu_id).copied().unwrap_or(0),
            })
            .collect()
    }

    pub fn distinct_items(&self) -> usize {
        self.item_counts.len()
    }
}

/// Trait for pipeline stages
pub trait PipelineStage {
    /// Name of this stage
    fn name(&self) -> &str;

    /// Execute this stage
    fn execute(&self, ctx: PipelineContext) -> Result<PipelineContext, OrderError>;
}
