//! The roster of spinnable items
//!
//! An ordered list with validated mutation. Index order defines angular
//! position on the wheel. The roster is session state only and is never
//! persisted.

use serde::{Deserialize, Serialize};

use super::color::Color;
use super::error::WheelError;
use crate::consts::MAX_ITEMS;

/// One labeled, colored wheel entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    pub name: String,
    pub color: Color,
}

/// Ordered item list, bounded to `MAX_ITEMS`
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Roster {
    items: Vec<Item>,
}

impl Roster {
    pub fn new() -> Self {
        Self { items: Vec::new() }
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.items.len() >= MAX_ITEMS
    }

    /// Append an item. The name is trimmed; empty names and a full roster
    /// are rejected without mutating anything.
    pub fn add(&mut self, name: &str, color: Color) -> Result<(), WheelError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(WheelError::EmptyName);
        }
        if self.is_full() {
            return Err(WheelError::RosterFull);
        }
        self.items.push(Item {
            name: name.to_string(),
            color,
        });
        Ok(())
    }

    /// Remove the item at `index`
    pub fn remove(&mut self, index: usize) -> Result<Item, WheelError> {
        self.check_index(index)?;
        Ok(self.items.remove(index))
    }

    /// Rename in place. Unlike `add`, an empty name is allowed here so the
    /// settings UI can clear a field mid-edit without losing the row.
    pub fn rename(&mut self, index: usize, name: &str) -> Result<(), WheelError> {
        self.check_index(index)?;
        self.items[index].name = name.to_string();
        Ok(())
    }

    /// Recolor in place
    pub fn recolor(&mut self, index: usize, color: Color) -> Result<(), WheelError> {
        self.check_index(index)?;
        self.items[index].color = color;
        Ok(())
    }

    fn check_index(&self, index: usize) -> Result<(), WheelError> {
        if index < self.items.len() {
            Ok(())
        } else {
            Err(WheelError::IndexOutOfBounds {
                index,
                len: self.items.len(),
            })
        }
    }
}
