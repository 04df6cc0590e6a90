//! Application of fitted feature-scaling parameters

use crate::error::{LoanlensError, Result};
use crate::schema::FeatureSchema;
use ndarray::{Array1, Array2, Axis};
use serde::{Deserialize, Serialize};

/// Fitted (center, scale) parameters for one schema column.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColumnScale {
    pub column: String,
    pub center: f64,
    pub scale: f64,
}

/// Standard scaler holding previously fitted parameters, one per schema
/// column in schema order. Transform only; fitting happened at training time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StandardScaler {
    params: Vec<ColumnScale>,
}

impl StandardScaler {
    pub fn new(params: Vec<ColumnScale>) -> Self {
        Self { params }
    }

    /// A no-op scaler (center 0, scale 1) over the given schema.
    pub fn identity(schema: &FeatureSchema) -> Self {
        let params = schema
            .names()
            .map(|name| ColumnScale {
                column: name.to_string(),
                center: 0.0,
                scale: 1.0,
            })
            .collect();
        Self { params }
    }

    pub fn len(&self) -> usize {
        self.params.len()
    }

    pub fn is_empty(&self) -> bool {
        self.params.is_empty()
    }

    /// Parameter column names in order.
    pub fn columns(&self) -> impl Iterator<Item = &str> {
        self.params.iter().map(|p| p.column.as_str())
    }

    /// Check that parameters line up with a schema, name for name.
    pub fn validate_schema(&self, schema: &FeatureSchema) -> Result<()> {
        if self.params.len() != schema.len() {
            return Err(LoanlensError::ShapeError {
                expected: format!("{} scaler parameters", schema.len()),
                actual: format!("{} scaler parameters", self.params.len()),
            });
        }
        for (param, spec) in self.params.iter().zip(schema.columns()) {
            if param.column != spec.name {
                return Err(LoanlensError::SchemaError(format!(
                    "scaler parameter for '{}' where schema expects '{}'",
                    param.column, spec.name
                )));
            }
        }
        Ok(())
    }

    /// Apply (x - center) / scale per column. A stored scale of 0 (constant
    /// training column) divides by 1 instead.
    pub fn transform(&self, x: &Array1<f64>) -> Result<Array1<f64>> {
        if x.len() != self.params.len() {
            return Err(LoanlensError::ShapeError {
                expected: format!("{} features", self.params.len()),
                actual: format!("{} features", x.len()),
            });
        }

        let scaled = x
            .iter()
            .zip(self.params.iter())
            .map(|(v, p)| (v - p.center) / effective_scale(p.scale))
            .collect();
        Ok(Array1::from_vec(scaled))
    }

    /// Row-wise transform of a batch.
    pub fn transform_batch(&self, x: &Array2<f64>) -> Result<Array2<f64>> {
        if x.ncols() != self.params.len() {
            return Err(LoanlensError::ShapeError {
                expected: format!("{} features", self.params.len()),
                actual: format!("{} features", x.ncols()),
            });
        }

        let mut scaled = x.clone();
        for (j, p) in self.params.iter().enumerate() {
            let scale = effective_scale(p.scale);
            let mut col = scaled.index_axis_mut(Axis(1), j);
            col.mapv_inplace(|v| (v - p.center) / scale);
        }
        Ok(scaled)
    }
}

fn effective_scale(scale: f64) -> f64 {
    if scale == 0.0 {
        1.0
    } else {
        scale
    }
}
