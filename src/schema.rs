//! The fixed feature schema the classifier was trained on
//!
//! Encoding is addressed by this schema (column name + kind, in training
//! order) rather than by dynamic column reindexing. The `columns.json`
//! artifact is validated against [`FeatureSchema::reference`] at startup.

use crate::error::{LoanlensError, Result};

/// Kind of a schema column
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnKind {
    /// Raw numeric input passed through unchanged
    Numeric,
    /// One-hot indicator for a categorical value (0 or 1)
    Indicator,
}

/// One column of the feature schema
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnSpec {
    pub name: &'static str,
    pub kind: ColumnKind,
}

const fn numeric(name: &'static str) -> ColumnSpec {
    ColumnSpec { name, kind: ColumnKind::Numeric }
}

const fn indicator(name: &'static str) -> ColumnSpec {
    ColumnSpec { name, kind: ColumnKind::Indicator }
}

/// Training-time column set: 8 numeric inputs followed by the one-hot
/// expansions of the 5 categorical fields, categories in alphabetical order
/// within each field.
const REFERENCE_COLUMNS: &[ColumnSpec] = &[
    numeric("person_age"),
    numeric("person_income"),
    numeric("person_emp_exp"),
    numeric("loan_amnt"),
    numeric("loan_int_rate"),
    numeric("loan_percent_income"),
    numeric("cb_person_cred_hist_length"),
    numeric("credit_score"),
    indicator("person_gender_female"),
    indicator("person_gender_male"),
    indicator("person_education_Associate"),
    indicator("person_education_Bachelor"),
    indicator("person_education_Doctorate"),
    indicator("person_education_High School"),
    indicator("person_education_Master"),
    indicator("person_home_ownership_MORTGAGE"),
    indicator("person_home_ownership_OTHER"),
    indicator("person_home_ownership_OWN"),
    indicator("person_home_ownership_RENT"),
    indicator("loan_intent_DEBTCONSOLIDATION"),
    indicator("loan_intent_EDUCATION"),
    indicator("loan_intent_HOMEIMPROVEMENT"),
    indicator("loan_intent_MEDICAL"),
    indicator("loan_intent_PERSONAL"),
    indicator("loan_intent_VENTURE"),
    indicator("previous_loan_defaults_on_file_No"),
    indicator("previous_loan_defaults_on_file_Yes"),
];

/// Ordered feature schema
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeatureSchema {
    columns: &'static [ColumnSpec],
}

impl FeatureSchema {
    /// The schema the shipped classifier was trained on.
    pub fn reference() -> Self {
        Self { columns: REFERENCE_COLUMNS }
    }

    /// Number of columns.
    pub fn len(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    /// Columns in order.
    pub fn columns(&self) -> &[ColumnSpec] {
        self.columns
    }

    /// Column names in order.
    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.columns.iter().map(|c| c.name)
    }

    /// Position of a column by name.
    pub fn index_of(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|c| c.name == name)
    }

    /// Validate an artifact column list against this schema (order-sensitive).
    pub fn validate_columns(&self, columns: &[String]) -> Result<()> {
        if columns.len() != self.columns.len() {
            return Err(LoanlensError::SchemaError(format!(
                "expected {} columns, artifact lists {}",
                self.columns.len(),
                columns.len()
            )));
        }

        for (i, (expected, actual)) in self.columns.iter().zip(columns.iter()).enumerate() {
            if expected.name != actual {
                return Err(LoanlensError::SchemaError(format!(
                    "column {} should be '{}', artifact lists '{}'",
                    i, expected.name, actual
                )));
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::applicant::{Education, Gender, HomeOwnership, LoanIntent, PriorDefaults};

    #[test]
    fn test_reference_schema_width() {
        let schema = FeatureSchema::reference();
        assert_eq!(schema.len(), 27);
        assert_eq!(
            schema.columns().iter().filter(|c| c.kind == ColumnKind::Numeric).count(),
            8
        );
    }

    #[test]
    fn test_reference_schema_unique_names() {
        let schema = FeatureSchema::reference();
        let names: Vec<_> = schema.names().collect();
        let mut deduped = names.clone();
        deduped.sort();
        deduped.dedup();
        assert_eq!(names.len(), deduped.len());
    }

    #[test]
    fn test_every_indicator_column_is_in_schema() {
        let schema = FeatureSchema::reference();
        for g in Gender::ALL {
            assert!(schema.index_of(g.column()).is_some(), "{}", g.column());
        }
        for e in Education::ALL {
            assert!(schema.index_of(e.column()).is_some(), "{}", e.column());
        }
        for h in HomeOwnership::ALL {
            assert!(schema.index_of(h.column()).is_some(), "{}", h.column());
        }
        for l in LoanIntent::ALL {
            assert!(schema.index_of(l.column()).is_some(), "{}", l.column());
        }
        for p in PriorDefaults::ALL {
            assert!(schema.index_of(p.column()).is_some(), "{}", p.column());
        }
    }

    #[test]
    fn test_validate_columns_accepts_reference() {
        let schema = FeatureSchema::reference();
        let names: Vec<String> = schema.names().map(String::from).collect();
        assert!(schema.validate_columns(&names).is_ok());
    }

    #[test]
    fn test_validate_columns_rejects_reorder() {
        let schema = FeatureSchema::reference();
        let mut names: Vec<String> = schema.names().map(String::from).collect();
        names.swap(0, 1);
        assert!(matches!(
            schema.validate_columns(&names),
            Err(LoanlensError::SchemaError(_))
        ));
    }

    #[test]
    fn test_validate_columns_rejects_truncation() {
        let schema = FeatureSchema::reference();
        let names: Vec<String> = schema.names().map(String::from).take(20).collect();
        assert!(schema.validate_columns(&names).is_err());
    }
}
