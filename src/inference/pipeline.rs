//! The scoring pipeline behind an immutable context

use crate::applicant::ApplicantRecord;
use crate::error::{LoanlensError, Result};
use crate::inference::{LogisticClassifier, Prediction};
use crate::preprocessing::{encode, StandardScaler};
use crate::schema::FeatureSchema;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Scoring configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoringConfig {
    /// Probability threshold for approval
    pub threshold: f64,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self { threshold: 0.5 }
    }
}

impl ScoringConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_threshold(mut self, threshold: f64) -> Self {
        self.threshold = threshold;
        self
    }
}

/// Everything needed to score an application: schema, fitted scaler, fitted
/// classifier, and configuration. Built once at startup from the artifact
/// bundle, then shared read-only; concurrent scoring needs no locking.
#[derive(Debug, Clone)]
pub struct ScoringContext {
    schema: FeatureSchema,
    scaler: StandardScaler,
    classifier: LogisticClassifier,
    config: ScoringConfig,
}

impl ScoringContext {
    /// Assemble a context, cross-checking scaler and classifier widths
    /// against the schema.
    pub fn new(
        schema: FeatureSchema,
        scaler: StandardScaler,
        classifier: LogisticClassifier,
        config: ScoringConfig,
    ) -> Result<Self> {
        scaler.validate_schema(&schema)?;
        if classifier.n_features() != schema.len() {
            return Err(LoanlensError::ShapeError {
                expected: format!("{} coefficients", schema.len()),
                actual: format!("{} coefficients", classifier.n_features()),
            });
        }
        Ok(Self { schema, scaler, classifier, config })
    }

    pub fn schema(&self) -> &FeatureSchema {
        &self.schema
    }

    pub fn config(&self) -> &ScoringConfig {
        &self.config
    }

    /// Run the full pipeline for one application:
    /// encode → scale → predict.
    pub fn score(&self, record: &ApplicantRecord) -> Result<Prediction> {
        let encoded = encode(record, &self.schema)?;
        let scaled = self.scaler.transform(encoded.values())?;
        let prediction = self.classifier.predict(&scaled, self.config.threshold)?;
        debug!(
            probability = prediction.probability,
            decision = ?prediction.decision,
            "scored application"
        );
        Ok(prediction)
    }

    /// Score many independent applications in parallel. Output order matches
    /// input order.
    pub fn score_batch(&self, records: &[ApplicantRecord]) -> Result<Vec<Prediction>> {
        records
            .par_iter()
            .map(|record| self.score(record))
            .collect::<Result<Vec<_>>>()
    }
}
