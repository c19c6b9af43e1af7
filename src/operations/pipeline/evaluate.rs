use crate::geometry::{Curve, CurveKind};
use crate::math::{Point3, Tangent3};
use crate::store::{CurveId, CurveStore};

/// Position and derivative of one curve at the evaluation parameter.
#[derive(Debug, Clone, PartialEq)]
pub struct EvaluationRecord {
    /// Curve the record was taken from.
    pub id: CurveId,
    /// Variant of that curve.
    pub kind: CurveKind,
    /// `evaluate(t)`.
    pub position: Point3,
    /// `tangent(t)`.
    pub tangent: Tangent3,
}

/// Evaluates every curve of the primary sequence at a single parameter.
pub struct EvaluateAll {
    t: f64,
}

impl EvaluateAll {
    /// Creates a new `EvaluateAll` query at parameter `t`.
    #[must_use]
    pub fn new(t: f64) -> Self {
        Self { t }
    }

    /// Executes the query. Records follow insertion order.
    #[must_use]
    pub fn execute(&self, store: &CurveStore) -> Vec<EvaluationRecord> {
        store
            .iter()
            .map(|(id, shape)| EvaluationRecord {
                id,
                kind: shape.kind(),
                position: shape.evaluate(self.t),
                tangent: shape.tangent(self.t),
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::{Circle, Ellipse, Helix};
    use approx::assert_abs_diff_eq;
    use std::f64::consts::{FRAC_PI_2, FRAC_PI_4, SQRT_2};

    #[test]
    fn records_follow_insertion_order() {
        let mut store = CurveStore::new();
        let ids = [
            store.add(Ellipse::at_origin(1.0, 2.0)),
            store.add(Helix::at_origin(1.0, 1.0)),
            store.add(Circle::at_origin(3.0)),
        ];
        let records = EvaluateAll::new(FRAC_PI_4).execute(&store);
        let got: Vec<_> = records.iter().map(|r| (r.id, r.kind)).collect();
        assert_eq!(
            got,
            vec![
                (ids[0], CurveKind::Ellipse),
                (ids[1], CurveKind::Helix),
                (ids[2], CurveKind::Circle),
            ]
        );
    }

    #[test]
    fn circle_at_quarter_pi() {
        let mut store = CurveStore::new();
        store.add(Circle::new(Point3::new(1.0, 1.0, 1.0), SQRT_2));
        let record = &EvaluateAll::new(FRAC_PI_4).execute(&store)[0];
        assert_abs_diff_eq!(record.position, Point3::new(2.0, 2.0, 1.0), epsilon = 1e-12);
        assert_abs_diff_eq!(record.tangent, Tangent3::new(-1.0, 1.0, 0.0), epsilon = 1e-12);
    }

    #[test]
    fn parameter_is_applied() {
        let mut store = CurveStore::new();
        store.add(Ellipse::at_origin(3.0, 1.0));
        let record = &EvaluateAll::new(FRAC_PI_2).execute(&store)[0];
        assert_abs_diff_eq!(record.position, Point3::new(0.0, 1.0, 0.0), epsilon = 1e-12);
    }

    #[test]
    fn empty_store_yields_no_records() {
        assert!(EvaluateAll::new(0.0).execute(&CurveStore::new()).is_empty());
    }
}
