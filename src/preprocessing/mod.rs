//! Feature preprocessing
//!
//! One-hot encoding against the fixed schema and application of fitted
//! scaling parameters. No fitting happens here; scaler parameters come from
//! the artifact bundle.

mod encoder;
mod scaler;

pub use encoder::{encode, EncodedFeatures};
pub use scaler::{ColumnScale, StandardScaler};
