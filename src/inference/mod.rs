//! Classifier inference
//!
//! The fitted logistic classifier and the scoring pipeline that wires
//! encoding, scaling, and prediction together behind an immutable context.

mod classifier;
mod pipeline;

pub use classifier::{Decision, LogisticClassifier, Prediction};
pub use pipeline::{ScoringConfig, ScoringContext};
