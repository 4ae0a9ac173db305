//! Report generation for ranked menu items

use crate::pipeline::PipelineOutput;
use crate::types::RankedItem;
use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Most-ordered menu items of one order log
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TopItemsReport {
    pub source: PathBuf,
    /// Number of entries requested
    pub requested: usize,
    pub total_orders: usize,
    pub distinct_items: usize,
    pub top: Vec<RankedItem>,
}

impl TopItemsReport {
    pub fn new(source: PathBuf, output: &PipelineOutput, requested: usize) -> Self {
        Self {
            source,
            requested,
            total_orders: output.total_orders,
            distinct_items: output.distinct_items(),
            top: output.top(requested),
        }
    }

    /// Generate plain text report
    pub fn to_text(&self) -> String {
        let mut text = format!("Top {} menu items consumed:\n", self.requested);
        for item in &self.top {
            text.push_str(&format!("{}\n", item));
        }
        text
    }

    /// Generate Markdown report
    pub fn to_markdown(&self) -> String {
        let mut md = String::new();

        md.push_str(&format!("# Top {} menu items consumed\n\n", self.requested));
        md.push_str(&format!("**Source:** `{}`\n\n", self.source.display()));
        md.push_str(&format!(
            "**Orders:** {} across {} menu items\n\n",
            self.total_orders, self.distinct_items
        ));

        md.push_str("| Rank | Menu ID | Orders |\n");
        md.push_str("|------|---------|--------|\n");
        for item in &self.top {
            md.push_str(&format!(
                "| {} | {} | {} |\n",
                item.rank, item.menu_id, item.count
            ));
        }

        md
    }

    /// Generate JSON report
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn render(&self, format: ReportFormat) -> Result<String> {
        Ok(match format {
            ReportFormat::Text => self.to_text(),
            ReportFormat::Markdown => self.to_markdown(),
            ReportFormat::Json => self.to_json()?,
        })
    }

    /// Save report to file
    pub fn save(&self, path: &Path, format: ReportFormat) -> Result<()> {
        std::fs::write(path, self.render(format)?)?;
        Ok(())
    }
}

/// Report output format
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum ReportFormat {
    #[default]
    Text,
    Markdown,
    Json,
}
