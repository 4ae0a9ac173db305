//! Pipeline execution engine.

use std::path::Path;
use std::time::Instant;
use tracing::{debug, info, warn};

use super::stages::{AggregateStage, FileGateStage, ParseStage, RankStage};
use super::types::{PipelineContext, PipelineOutput, PipelineStage};
use crate::errors::OrderError;
use crate::types::{ItemCounts, MenuItemId};

/// Sequential order-log pipeline; stops at the first failing stage
pub struct OrderPipeline {
    pub(crate) stages: Vec<Box<dyn PipelineStage>>,
}

impl OrderPipeline {
    pub fn new() -> Self {
        Self { stages: Vec::new() }
    }

    /// File gate, parse, aggregate, rank
    pub fn standard() -> Self {
        Self::new()
            .add_stage(Box::new(FileGateStage))
            .add_stage(Box::new(ParseStage))
            .add_stage(Box::new(AggregateStage))
            .add_stage(Box::new(RankStage))
    }

    /// Add a stage to the pipeline
    pub fn add_stage(mut self, stage: Box<dyn PipelineStage>) -> Self {
        self.stages.push(stage);
        self
    }

    /// Run the complete pipeline
    pub fn run(&self, input: &Path) -> Result<PipelineOutput, OrderError> {
        info!("Starting pipeline with {} stages", self.stages.len());
        let started = Instant::now();

        let mut ctx = PipelineContext::new(input.to_path_buf());

        for (idx, stage) in self.stages.iter().enumerate() {
            debug!(
                "Running stage {}/{}: {}",
                idx + 1,
                self.stages.len(),
                stage.name()
            );

            ctx = stage.execute(ctx).map_err(|err| {
                warn!(
                    "Stage '{}' failed [{} {}]: {}",
                    stage.name(),
                    err.kind(),
                    err.code(),
                    err
                );
                err
            })?;
        }

        info!("Pipeline completed in {:?}", started.elapsed());
        Ok(ctx.output())
    }
}

impl Default for OrderPipeline {
    fn default() -> Self {
        Self::standard()
    }
}

/// Rank the menu items of the order log at `path`.
///
/// Returns the menu item IDs by descending order count together with the
/// count per item. Any failure returns only the error.
pub fn fetch_top_three_ordered_items(
    path: impl AsRef<Path>,
) -> Result<(Vec<MenuItemId>, ItemCounts), OrderError> {
    let output = OrderPipeline::standard().run(path.as_ref())?;
    Ok((output.ranked, output.item_counts))
}
