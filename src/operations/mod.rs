pub mod generate;
pub mod pipeline;

pub use generate::CurveFactory;
pub use pipeline::{
    CircleEntry, CircleView, EvaluateAll, EvaluationRecord, FilterCircles, Pipeline, Populate,
    Report,
};
