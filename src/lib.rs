//! Loanlens - Loan approval scoring over a pre-trained classifier
//!
//! Everything needed to turn raw applicant inputs into an approval decision:
//! categorical normalization, one-hot encoding over a fixed feature schema,
//! application of fitted scaling parameters, logistic inference, and a
//! fixed-layout textual report.
//!
//! # Modules
//!
//! - [`applicant`] - Applicant records and categorical normalization
//! - [`schema`] - The fixed feature schema the classifier was trained on
//! - [`preprocessing`] - One-hot encoding and fitted feature scaling
//! - [`inference`] - The logistic classifier and the scoring pipeline
//! - [`artifacts`] - Loading/saving the model, scaler, and column artifacts
//! - [`report`] - The plain-text application summary
//! - [`utils`] - CSV loading and saving for batch scoring
//!
//! The artifacts are loaded once at startup into an immutable
//! [`inference::ScoringContext`]; every submission runs the same synchronous
//! pipeline against it.

pub mod error;

pub mod applicant;
pub mod schema;
pub mod preprocessing;
pub mod inference;
pub mod artifacts;
pub mod report;
pub mod utils;

pub use error::{LoanlensError, Result};

/// Re-export commonly used types
pub mod prelude {
    pub use crate::error::{LoanlensError, Result};

    pub use crate::applicant::{
        bounds, ApplicantRecord, Education, FieldBounds, Gender, HomeOwnership, LoanIntent,
        PriorDefaults,
    };

    pub use crate::schema::{ColumnKind, ColumnSpec, FeatureSchema};

    pub use crate::preprocessing::{encode, ColumnScale, EncodedFeatures, StandardScaler};

    pub use crate::inference::{
        Decision, LogisticClassifier, Prediction, ScoringConfig, ScoringContext,
    };

    pub use crate::artifacts::{ArtifactBundle, ArtifactPaths};

    pub use crate::report::render;
}
