use slotmap::SlotMap;

use crate::error::{Result, StoreError};
use crate::geometry::CurveShape;

slotmap::new_key_type! {
    /// Unique identifier for a curve in the curve store.
    pub struct CurveId;
}

/// Central arena that owns every generated curve.
///
/// Views over the collection (such as the circle-only subset) hold
/// [`CurveId`]s or borrows into the store rather than copies. The
/// insertion order of the primary sequence is kept separately, since
/// slotmap iteration order is not guaranteed to follow it.
#[derive(Debug, Default)]
pub struct CurveStore {
    curves: SlotMap<CurveId, CurveShape>,
    order: Vec<CurveId>,
}

impl CurveStore {
    /// Creates a new, empty curve store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a curve to the primary sequence and returns its ID.
    pub fn add(&mut self, shape: impl Into<CurveShape>) -> CurveId {
        let id = self.curves.insert(shape.into());
        self.order.push(id);
        id
    }

    /// Returns a reference to the curve, or an error if not found.
    ///
    /// # Errors
    ///
    /// Returns an error if the ID does not belong to this store.
    pub fn curve(&self, id: CurveId) -> Result<&CurveShape> {
        self.curves
            .get(id)
            .ok_or_else(|| StoreError::EntityNotFound("curve".into()).into())
    }

    /// Number of curves in the primary sequence.
    #[must_use]
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// Returns whether the store holds no curves.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// IDs of the primary sequence, in insertion order.
    #[must_use]
    pub fn ids(&self) -> &[CurveId] {
        &self.order
    }

    /// Iterates the primary sequence in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (CurveId, &CurveShape)> + '_ {
        self.order
            .iter()
            .filter_map(|&id| self.curves.get(id).map(|shape| (id, shape)))
    }
}
