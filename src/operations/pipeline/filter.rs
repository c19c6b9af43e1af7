use crate::geometry::Circle;
use crate::store::{CurveId, CurveStore};

/// A circle borrowed from a [`CurveStore`], paired with its ID.
#[derive(Debug, Clone, Copy)]
pub struct CircleEntry<'a> {
    /// ID of the circle in the store.
    pub id: CurveId,
    /// The circle itself.
    pub circle: &'a Circle,
}

/// The circle-only secondary sequence.
///
/// Holds borrows into the store, so no curve is duplicated and the
/// store cannot change while a view is alive.
#[derive(Debug, Clone, Default)]
pub struct CircleView<'a> {
    entries: Vec<CircleEntry<'a>>,
}

impl<'a> CircleView<'a> {
    /// Returns the entries in their current order.
    #[must_use]
    pub fn entries(&self) -> &[CircleEntry<'a>] {
        &self.entries
    }

    /// Returns the number of circles in the view.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns whether the view holds no circles.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns the radii in the current order.
    #[must_use]
    pub fn radii(&self) -> Vec<f64> {
        self.entries.iter().map(|e| e.circle.radius()).collect()
    }

    /// Sums the radius of every circle in the view.
    #[must_use]
    pub fn sum_radii(&self) -> f64 {
        self.entries.iter().map(|e| e.circle.radius()).sum()
    }

    /// Reorders the view in place by ascending radius.
    ///
    /// Ties may end up in any relative order.
    pub fn sort_by_radius(&mut self) {
        self.entries
            .sort_unstable_by(|a, b| a.circle.radius().total_cmp(&b.circle.radius()));
    }
}

/// Selects the circles of the primary sequence.
#[derive(Debug, Default)]
pub struct FilterCircles;

impl FilterCircles {
    /// Creates a new `FilterCircles` query.
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Executes the filter, keeping primary-sequence order.
    #[must_use]
    pub fn execute<'a>(&self, store: &'a CurveStore) -> CircleView<'a> {
        let entries: Vec<_> = store
            .iter()
            .filter_map(|(id, shape)| shape.as_circle().map(|circle| CircleEntry { id, circle }))
            .collect();
        tracing::debug!(
            circles = entries.len(),
            total = store.len(),
            "filtered circles"
        );
        CircleView { entries }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::{Ellipse, Helix};
    use crate::math::Point3;
    use crate::operations::{CurveFactory, Populate};

    fn mixed_store() -> (CurveStore, Vec<CurveId>) {
        let mut store = CurveStore::new();
        let mut circles = Vec::new();
        circles.push(store.add(Circle::at_origin(4.0)));
        store.add(Ellipse::at_origin(9.0, 9.0));
        circles.push(store.add(Circle::new(Point3::new(1.0, 1.0, 1.0), 1.5)));
        store.add(Helix::at_origin(7.0, 3.0));
        circles.push(store.add(Circle::at_origin(2.5)));
        circles.push(store.add(Circle::at_origin(1.5)));
        (store, circles)
    }

    #[test]
    fn keeps_only_circles_in_primary_order() {
        let (store, circles) = mixed_store();
        let view = FilterCircles::new().execute(&store);
        let ids: Vec<_> = view.entries().iter().map(|e| e.id).collect();
        assert_eq!(ids, circles);
        assert_eq!(view.radii(), vec![4.0, 1.5, 2.5, 1.5]);
    }

    #[test]
    fn sum_ignores_non_circles() {
        let (store, _) = mixed_store();
        let view = FilterCircles::new().execute(&store);
        assert!((view.sum_radii() - 9.5).abs() < 1e-12);
    }

    #[test]
    fn sum_unchanged_by_sorting() {
        let mut store = CurveStore::new();
        Populate::new(200).execute(&mut CurveFactory::from_seed(5), &mut store);
        let mut view = FilterCircles::new().execute(&store);
        let before = view.sum_radii();
        view.sort_by_radius();
        assert!((view.sum_radii() - before).abs() < 1e-9);
    }

    #[test]
    fn sort_is_ascending_and_idempotent() {
        let mut store = CurveStore::new();
        Populate::new(200).execute(&mut CurveFactory::from_seed(8), &mut store);
        let mut view = FilterCircles::new().execute(&store);
        view.sort_by_radius();
        let once = view.radii();
        assert!(once.windows(2).all(|w| w[0] <= w[1]));

        view.sort_by_radius();
        assert_eq!(view.radii(), once);
    }

    #[test]
    fn sort_handles_ties() {
        let (store, _) = mixed_store();
        let mut view = FilterCircles::new().execute(&store);
        view.sort_by_radius();
        assert_eq!(view.radii(), vec![1.5, 1.5, 2.5, 4.0]);
    }

    #[test]
    fn no_circles_gives_empty_view() {
        let mut store = CurveStore::new();
        store.add(Ellipse::at_origin(1.0, 2.0));
        store.add(Helix::at_origin(1.0, 2.0));
        let view = FilterCircles::new().execute(&store);
        assert!(view.is_empty());
        assert!(view.sum_radii().abs() < f64::EPSILON);
    }
}
