use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Identifies the person placing an order
pub type EaterId = i64;

/// Identifies a menu item
pub type MenuItemId = i64;

/// Number of valid orders per menu item
pub type ItemCounts = HashMap<MenuItemId, u64>;

/// One order parsed from a log line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Order {
    pub eater_id: EaterId,
    pub food_menu_id: MenuItemId,
    /// 1-based line number in the source log
    pub line: usize,
}

impl Order {
    pub fn new(eater_id: EaterId, food_menu_id: MenuItemId, line: usize) -> Self {
        Self {
            eater_id,
            food_menu_id,
            line,
        }
    }
}

/// A menu item with its position in the ranking
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RankedItem {
    /// 1-based rank
    pub rank: usize,
    pub menu_id: MenuItemId,
    pub count: u64,
}

impl std::fmt::Display for RankedItem {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}. {} ({})", self.rank, self.menu_id, self.count)
    }
}
