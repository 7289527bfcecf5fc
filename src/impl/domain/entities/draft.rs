use fractic_server_error::ServerError;

use crate::errors::DraftIndexOutOfRange;

/// Line items staged locally by a multi-step form (quotations, purchase
/// orders) before being submitted to the API in a single call.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Draft<T> {
    items: Vec<T>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct LineItem {
    pub designation: String,
    pub quantity: f64,
    pub unit_price: f64,
}

// --

impl<T> Draft<T> {
    pub fn new() -> Self {
        Self { items: Vec::new() }
    }

    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn add(&mut self, item: T) {
        self.items.push(item);
    }

    pub fn edit(&mut self, index: usize, item: T) -> Result<(), ServerError> {
        let len = self.items.len();
        let slot = self
            .items
            .get_mut(index)
            .ok_or_else(|| DraftIndexOutOfRange::new(index, len))?;
        *slot = item;
        Ok(())
    }

    pub fn remove(&mut self, index: usize) -> Result<T, ServerError> {
        self.check_index(index)?;
        Ok(self.items.remove(index))
    }

    /// Moves the item at `from` so that it ends up at position `to`.
    pub fn move_item(&mut self, from: usize, to: usize) -> Result<(), ServerError> {
        self.check_index(from)?;
        self.check_index(to)?;
        let item = self.items.remove(from);
        self.items.insert(to, item);
        Ok(())
    }

    /// Consumes the draft, yielding the items to submit.
    pub fn commit(self) -> Vec<T> {
        self.items
    }

    fn check_index(&self, index: usize) -> Result<(), ServerError> {
        if index < self.items.len() {
            Ok(())
        } else {
            Err(DraftIndexOutOfRange::new(index, self.items.len()))
        }
    }
}

impl LineItem {
    pub fn new(designation: impl Into<String>, quantity: f64, unit_price: f64) -> Self {
        Self {
            designation: designation.into(),
            quantity,
            unit_price,
        }
    }

    pub fn total(&self) -> f64 {
        self.quantity * self.unit_price
    }
}

impl Draft<LineItem> {
    pub fn total(&self) -> f64 {
        self.items.iter().map(LineItem::total).sum()
    }
}
