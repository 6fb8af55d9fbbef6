use std::collections::BTreeMap;

use crate::errors::{ExResult, UiConfigError};
use crate::model::{now, AttributeRow, AttributeRowPatch, NewAttributeRow};

/// Durable CRUD over attribute rows
///
/// Implementations hold their own connection handle; callers receive the
/// store explicitly rather than reaching for a global. No resolution logic
/// lives behind this trait.
///
/// Ordering contract: `rows_for_component` returns rows in ascending `id`
/// order, and ids are assigned in insertion order and never reused.
pub trait ConfigStore {
    /// Insert a new row, assigning `id`, `created_at` and `updated_at`
    ///
    /// # Errors
    ///
    /// Returns a `Persistence` error if the backing store rejects the write.
    fn insert_row(&mut self, row: NewAttributeRow) -> ExResult<AttributeRow>;

    /// All rows whose type and id match exactly, in ascending id order
    ///
    /// # Errors
    ///
    /// Returns a `Persistence` error if the backing store cannot be read.
    fn rows_for_component(
        &self,
        component_type: &str,
        component_id: &str,
    ) -> ExResult<Vec<AttributeRow>>;

    /// Apply `patch` to the row with `id` and refresh `updated_at`
    ///
    /// # Errors
    ///
    /// Returns `NotFound` (store unchanged) when no row has `id`, or a
    /// `Persistence` error if the write fails.
    fn update_row(&mut self, id: i64, patch: &AttributeRowPatch) -> ExResult<AttributeRow>;
}

/// In-memory store for attribute rows
///
/// A BTreeMap keyed by id, so iteration order is id order. Not thread-safe;
/// intended for tests and for embedding without a database.
#[derive(Debug, Clone)]
pub struct MemoryStore {
    rows: BTreeMap<i64, AttributeRow>,
    next_id: i64,
    unavailable: bool,
}

impl MemoryStore {
    /// Create a new empty store; the first row gets id 1
    pub fn new() -> Self {
        Self {
            rows: BTreeMap::new(),
            next_id: 1,
            unavailable: false,
        }
    }

    /// Simulate an unreachable backend: every call fails with a storage error
    pub fn set_unavailable(&mut self, unavailable: bool) {
        self.unavailable = unavailable;
    }

    /// Every row, in id order
    pub fn all_rows(&self) -> Vec<AttributeRow> {
        self.rows.values().cloned().collect()
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    fn check_available(&self) -> ExResult<()> {
        if self.unavailable {
            return Err(UiConfigError::Storage {
                reason: "memory store marked unavailable".to_string(),
            }
            .into());
        }
        Ok(())
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl ConfigStore for MemoryStore {
    fn insert_row(&mut self, row: NewAttributeRow) -> ExResult<AttributeRow> {
        self.check_available()?;

        let id = self.next_id;
        self.next_id += 1;

        let row = AttributeRow::from_new(id, row, now());
        self.rows.insert(id, row.clone());
        Ok(row)
    }

    fn rows_for_component(
        &self,
        component_type: &str,
        component_id: &str,
    ) -> ExResult<Vec<AttributeRow>> {
        self.check_available()?;

        Ok(self
            .rows
            .values()
            .filter(|row| row.belongs_to(component_type, component_id))
            .cloned()
            .collect())
    }

    fn update_row(&mut self, id: i64, patch: &AttributeRowPatch) -> ExResult<AttributeRow> {
        self.check_available()?;

        let row = self
            .rows
            .get_mut(&id)
            .ok_or(UiConfigError::RowNotFound { id })?;
        row.apply_patch(patch, now());
        Ok(row.clone())
    }
}
