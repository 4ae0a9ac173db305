//! Parse stage - reads the order log into [`Order`] records.
//!
//! Each non-empty line must hold exactly two comma-separated fields,
//! `eater_id,foodmenu_id`, both base-10 integers with optional surrounding
//! spaces. The first bad line aborts the whole read and no orders are
//! returned.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use tracing::{debug, info};

use crate::errors::{Field, OrderError};
use crate::pipeline::types::{PipelineContext, PipelineStage};
use crate::types::Order;

const FIELD_SEPARATOR: char = ',';

/// Parse one log line. `line_no` is 1-based and only used in errors.
pub fn parse_line(text: &str, line_no: usize) -> Result<Order, OrderError> {
    let parts: Vec<&str> = text.split(FIELD_SEPARATOR).collect();
    let [eater, food] = parts.as_slice() else {
        return Err(OrderError::MalformedLine {
            line: line_no,
            content: text.to_string(),
        });
    };

    let eater_id = parse_field(eater, Field::EaterId, line_no)?;
    let food_menu_id = parse_field(food, Field::FoodMenuId, line_no)?;

    Ok(Order::new(eater_id, food_menu_id, line_no))
}

fn parse_field(raw: &str, field: Field, line_no: usize) -> Result<i64, OrderError> {
    raw.trim_matches(' ')
        .parse::<i64>()
        .map_err(|_| OrderError::InvalidField {
            field,
            line: line_no,
            value: raw.to_string(),
        })
}

/// Parse every order from a reader.
///
/// Lines are split on raw `\n` bytes so a line holding invalid UTF-8 is
/// reported as bad input for that line, not as a read failure.
pub fn parse_orders<R: BufRead>(reader: R, path: &Path) -> Result<Vec<Order>, OrderError> {
    let mut orders = Vec::new();

    for (idx, line) in reader.split(b'\n').enumerate() {
        let mut bytes = line.map_err(|e| OrderError::Read {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;
        if bytes.last() == Some(&b'\r') {
            bytes.pop();
        }
        if bytes.is_empty() {
            continue;
        }
        // Invalid sequences become U+FFFD, which never parses as a digit
        // and never hides a separator byte.
        let text = String::from_utf8_lossy(&bytes);
        orders.push(parse_line(&text, idx + 1)?);
    }

    Ok(orders)
}

/// Open `path` and parse its orders
pub fn read_orders(path: &Path) -> Result<Vec<Order>, OrderError> {
    let not_found = |reason: String| OrderError::FileNotFound {
        path: path.to_path_buf(),
        reason,
    };

    let file = File::open(path).map_err(|e| not_found(e.to_string()))?;
    let metadata = file.metadata().map_err(|e| not_found(e.to_string()))?;
    if metadata.is_dir() {
        return Err(not_found("is a directory".to_string()));
    }

    parse_orders(BufReader::new(file), path)
}

/// Parse stage - turns log lines into orders
pub struct ParseStage;

impl PipelineStage for ParseStage {
    fn name(&self) -> &str {
        "Parse"
    }

    fn execute(&self, mut ctx: PipelineContext) -> Result<PipelineContext, OrderError> {
        debug!("Reading orders from {:?}", ctx.input_path);
        ctx.orders = read_orders(&ctx.input_path)?;
        info!("Parsed {} orders", ctx.orders.len());
        Ok(ctx)
    }
}
