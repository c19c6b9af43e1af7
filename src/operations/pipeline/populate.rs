use rand::Rng;

use crate::operations::CurveFactory;
use crate::store::{CurveId, CurveStore};

/// Fills a curve store with freshly generated curves.
pub struct Populate {
    count: usize,
}

impl Populate {
    /// Creates a new `Populate` operation generating `count` curves.
    #[must_use]
    pub fn new(count: usize) -> Self {
        Self { count }
    }

    /// Executes the operation, appending to `store` in generation order.
    ///
    /// Returns the IDs of the curves added by this call.
    pub fn execute<R: Rng>(
        &self,
        factory: &mut CurveFactory<R>,
        store: &mut CurveStore,
    ) -> Vec<CurveId> {
        let ids: Vec<_> = (0..self.count)
            .map(|_| store.add(factory.generate()))
            .collect();
        tracing::debug!(count = ids.len(), total = store.len(), "populated curve store");
        ids
    }
}
