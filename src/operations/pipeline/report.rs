use std::fmt;

use super::EvaluationRecord;

/// Everything a pipeline run produces, in reporting order.
#[derive(Debug, Clone, PartialEq)]
pub struct Report {
    /// Parameter the curves were evaluated at.
    pub parameter: f64,
    /// One record per curve, in primary-sequence order.
    pub evaluations: Vec<EvaluationRecord>,
    /// Circle radii, ascending.
    pub sorted_radii: Vec<f64>,
    /// Sum of the circle radii, taken before sorting.
    pub sum_of_radii: f64,
}

impl Report {
    fn parameter_label(&self) -> String {
        if (self.parameter - std::f64::consts::FRAC_PI_4).abs() < f64::EPSILON {
            "PI/4".to_owned()
        } else {
            self.parameter.to_string()
        }
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let t = self.parameter_label();
        for record in &self.evaluations {
            let p = &record.position;
            let d = &record.tangent;
            writeln!(f, "This is {}", record.kind)?;
            writeln!(f, "Coordinates of point at t = {t}: {} {} {}", p.x, p.y, p.z)?;
            writeln!(f, "Derivative at t = {t}: {} {} {}", d.x, d.y, d.z)?;
            writeln!(f)?;
        }
        writeln!(f, "Sorted vector of circles:")?;
        for radius in &self.sorted_radii {
            writeln!(f, "{radius}")?;
        }
        writeln!(f, "Sum of radii: {}", self.sum_of_radii)
    }
}
