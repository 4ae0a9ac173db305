//! File gate stage - rejects paths without a `.txt` extension.

use std::path::Path;
use tracing::debug;

use crate::errors::OrderError;
use crate::pipeline::types::{PipelineContext, PipelineStage};

const LOG_EXTENSION: &str = "txt";

/// Check that `path` names a `.txt` file (case-insensitive). No I/O.
pub fn check_extension(path: &Path) -> Result<(), OrderError> {
    match path.extension().and_then(|ext| ext.to_str()) {
        Some(ext) if ext.eq_ignore_ascii_case(LOG_EXTENSION) => Ok(()),
        _ => Err(OrderError::InvalidFile {
            path: path.to_path_buf(),
        }),
    }
}

/// File gate stage - validates the input extension before any read
pub struct FileGateStage;

impl PipelineStage for FileGateStage {
    fn name(&self) -> &str {
        "FileGate"
    }

    fn execute(&self, ctx: PipelineContext) -> Result<PipelineContext, OrderError> {
        debug!("Checking extension of {:?}", ctx.input_path);
        check_extension(&ctx.input_path)?;
        Ok(ctx)
    }
}
