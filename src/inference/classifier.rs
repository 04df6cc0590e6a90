//! Fitted logistic classifier

use crate::error::{LoanlensError, Result};
use ndarray::{Array1, Array2};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Binary approval decision
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Decision {
    Approved,
    Declined,
}

impl Decision {
    /// Decision line as rendered in the report.
    pub fn banner(&self) -> &'static str {
        match self {
            Decision::Approved => "✅ LOAN APPROVED",
            Decision::Declined => "❌ LOAN NOT APPROVED",
        }
    }

    /// Numeric class label (1 = approved).
    pub fn label(&self) -> i64 {
        match self {
            Decision::Approved => 1,
            Decision::Declined => 0,
        }
    }
}

impl fmt::Display for Decision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.banner())
    }
}

/// Outcome of scoring one application
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Prediction {
    pub decision: Decision,
    /// Positive-class (approval) probability in [0, 1]
    pub probability: f64,
}

/// Pre-trained logistic model: a coefficient per schema column plus an
/// intercept. Inference only; fitting happened offline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogisticClassifier {
    coefficients: Array1<f64>,
    intercept: f64,
}

impl LogisticClassifier {
    pub fn new(coefficients: Array1<f64>, intercept: f64) -> Self {
        Self { coefficients, intercept }
    }

    /// Number of features the model expects.
    pub fn n_features(&self) -> usize {
        self.coefficients.len()
    }

    pub fn intercept(&self) -> f64 {
        self.intercept
    }

    fn sigmoid(z: f64) -> f64 {
        1.0 / (1.0 + (-z).exp())
    }

    /// Positive-class probability for one scaled feature row.
    pub fn predict_proba(&self, x: &Array1<f64>) -> Result<f64> {
        if x.len() != self.coefficients.len() {
            return Err(LoanlensError::ShapeError {
                expected: format!("{} features", self.coefficients.len()),
                actual: format!("{} features", x.len()),
            });
        }
        Ok(Self::sigmoid(self.coefficients.dot(x) + self.intercept))
    }

    /// Positive-class probabilities for a batch of scaled rows.
    pub fn predict_proba_batch(&self, x: &Array2<f64>) -> Result<Array1<f64>> {
        if x.ncols() != self.coefficients.len() {
            return Err(LoanlensError::ShapeError {
                expected: format!("{} features", self.coefficients.len()),
                actual: format!("{} features", x.ncols()),
            });
        }
        let linear = x.dot(&self.coefficients) + self.intercept;
        Ok(linear.mapv(Self::sigmoid))
    }

    /// Decision at the given probability threshold.
    pub fn predict(&self, x: &Array1<f64>, threshold: f64) -> Result<Prediction> {
        let probability = self.predict_proba(x)?;
        let decision = if probability >= threshold {
            Decision::Approved
        } else {
            Decision::Declined
        };
        Ok(Prediction { decision, probability })
    }
}
