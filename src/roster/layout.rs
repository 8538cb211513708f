use anyhow::{bail, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Cabin seat grid: rows numbered from 1, columns lettered
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeatLayout {
    pub rows: u32,
    pub columns: String,
}

impl Default for SeatLayout {
    /// 20 rows of A-F, the grid used when an aircraft has no layout of its own
    fn default() -> Self {
        Self {
            rows: 20,
            columns: "ABCDEF".to_string(),
        }
    }
}

impl SeatLayout {
    pub fn new(rows: u32, columns: impl Into<String>) -> Self {
        Self {
            rows,
            columns: columns.into(),
        }
    }

    pub fn capacity(&self) -> usize {
        self.rows as usize * self.columns.chars().count()
    }

    /// Every seat label, row by row, columns in declared order ("1A", "1B", ...)
    pub fn labels(&self) -> impl Iterator<Item = String> + '_ {
        (1..=self.rows).flat_map(move |row| self.columns.chars().map(move |col| format!("{}{}", row, col)))
    }

    /// Labels of a single row
    pub fn row_labels(&self, row: u32) -> Vec<String> {
        self.columns.chars().map(|col| format!("{}{}", row, col)).collect()
    }

    pub fn validate(&self) -> Result<()> {
        if self.rows == 0 {
            bail!("rows must be at least 1");
        }
        if self.columns.is_empty() {
            bail!("columns must not be empty");
        }

        let mut seen = HashSet::new();
        for col in self.columns.chars() {
            if !col.is_ascii_alphabetic() {
                bail!("column '{}' is not a letter", col);
            }
            if !seen.insert(col) {
                bail!("column '{}' appears more than once", col);
            }
        }

        Ok(())
    }
}
