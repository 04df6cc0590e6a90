//! Loading and saving the pre-trained artifacts
//!
//! Three JSON files make up a model directory: `model.json` (logistic
//! coefficients + intercept), `scaler.json` (ordered per-column center/scale
//! parameters), and `columns.json` (the ordered training column list). All
//! three are read once at startup; any inconsistency with the built-in
//! reference schema is fatal.

use crate::error::{LoanlensError, Result};
use crate::inference::{LogisticClassifier, ScoringConfig, ScoringContext};
use crate::preprocessing::StandardScaler;
use crate::schema::FeatureSchema;
use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::{Path, PathBuf};
use tracing::info;

pub const MODEL_FILE: &str = "model.json";
pub const SCALER_FILE: &str = "scaler.json";
pub const COLUMNS_FILE: &str = "columns.json";

/// Locations of the three artifact files.
#[derive(Debug, Clone)]
pub struct ArtifactPaths {
    pub model: PathBuf,
    pub scaler: PathBuf,
    pub columns: PathBuf,
}

impl ArtifactPaths {
    /// Standard file names inside a model directory.
    pub fn from_dir(dir: impl AsRef<Path>) -> Self {
        let dir = dir.as_ref();
        Self {
            model: dir.join(MODEL_FILE),
            scaler: dir.join(SCALER_FILE),
            columns: dir.join(COLUMNS_FILE),
        }
    }
}

/// The deserialized artifact set.
#[derive(Debug, Clone)]
pub struct ArtifactBundle {
    pub classifier: LogisticClassifier,
    pub scaler: StandardScaler,
    pub columns: Vec<String>,
}

impl ArtifactBundle {
    /// Read all three artifacts.
    pub fn load(paths: &ArtifactPaths) -> Result<Self> {
        let classifier: LogisticClassifier = read_json(&paths.model)?;
        let scaler: StandardScaler = read_json(&paths.scaler)?;
        let columns: Vec<String> = read_json(&paths.columns)?;
        info!(
            n_coefficients = classifier.n_features(),
            n_scaler_params = scaler.len(),
            n_columns = columns.len(),
            "loaded artifacts"
        );
        Ok(Self { classifier, scaler, columns })
    }

    /// Write all three artifacts, creating the parent directory if needed.
    pub fn save(&self, paths: &ArtifactPaths) -> Result<()> {
        if let Some(parent) = paths.model.parent() {
            std::fs::create_dir_all(parent)?;
        }
        write_json(&paths.model, &self.classifier)?;
        write_json(&paths.scaler, &self.scaler)?;
        write_json(&paths.columns, &self.columns)?;
        Ok(())
    }

    /// Validate the bundle against the reference schema and assemble the
    /// immutable scoring context.
    pub fn into_context(self, config: ScoringConfig) -> Result<ScoringContext> {
        let schema = FeatureSchema::reference();
        schema.validate_columns(&self.columns)?;
        ScoringContext::new(schema, self.scaler, self.classifier, config)
    }
}

fn read_json<T: serde::de::DeserializeOwned>(path: &Path) -> Result<T> {
    let file = File::open(path).map_err(|e| {
        LoanlensError::ArtifactError(format!("cannot open {}: {}", path.display(), e))
    })?;
    serde_json::from_reader(BufReader::new(file)).map_err(|e| {
        LoanlensError::ArtifactError(format!("cannot parse {}: {}", path.display(), e))
    })
}

fn write_json<T: serde::Serialize>(path: &Path, value: &T) -> Result<()> {
    let file = File::create(path)?;
    serde_json::to_writer_pretty(BufWriter::new(file), value)?;
    Ok(())
}
