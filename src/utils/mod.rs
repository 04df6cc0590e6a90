//! Utilities

pub mod data_loader;

pub use data_loader::{read_applicants_csv, write_scores_csv};
