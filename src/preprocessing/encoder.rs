//! One-hot feature encoding addressed by the fixed schema

use crate::applicant::ApplicantRecord;
use crate::error::{LoanlensError, Result};
use crate::schema::FeatureSchema;
use ndarray::Array1;

/// A one-hot-expanded feature row, column-aligned with its schema.
///
/// Invariant: `values.len() == schema width`; every indicator column the
/// record did not trigger holds 0.
#[derive(Debug, Clone, PartialEq)]
pub struct EncodedFeatures {
    values: Array1<f64>,
}

impl EncodedFeatures {
    pub fn values(&self) -> &Array1<f64> {
        &self.values
    }

    pub fn into_values(self) -> Array1<f64> {
        self.values
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

/// Encode a record into the schema's column order.
///
/// Numeric fields pass through unchanged; each categorical field sets exactly
/// one indicator column to 1. Every schema column is present in the output.
pub fn encode(record: &ApplicantRecord, schema: &FeatureSchema) -> Result<EncodedFeatures> {
    let mut values = Array1::zeros(schema.len());

    for (name, value) in record.numeric_features() {
        let idx = schema
            .index_of(name)
            .ok_or_else(|| LoanlensError::FeatureNotFound(name.to_string()))?;
        values[idx] = value;
    }

    for column in record.indicator_columns() {
        let idx = schema
            .index_of(column)
            .ok_or_else(|| LoanlensError::FeatureNotFound(column.to_string()))?;
        values[idx] = 1.0;
    }

    Ok(EncodedFeatures { values })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::applicant::{Education, Gender, HomeOwnership, LoanIntent, PriorDefaults};
    use crate::schema::ColumnKind;

    #[test]
    fn test_encoded_width_matches_schema() {
        let schema = FeatureSchema::reference();
        let encoded = encode(&ApplicantRecord::default(), &schema).unwrap();
        assert_eq!(encoded.len(), schema.len());
    }

    #[test]
    fn test_numeric_passthrough() {
        let schema = FeatureSchema::reference();
        let record = ApplicantRecord {
            age: 42,
            income: 87_500.0,
            ..ApplicantRecord::default()
        };
        let encoded = encode(&record, &schema).unwrap();

        assert_eq!(encoded.values()[schema.index_of("person_age").unwrap()], 42.0);
        assert_eq!(encoded.values()[schema.index_of("person_income").unwrap()], 87_500.0);
    }

    #[test]
    fn test_one_indicator_per_categorical_field() {
        let schema = FeatureSchema::reference();
        let record = ApplicantRecord {
            gender: Gender::Female,
            education: Education::Doctorate,
            home_ownership: HomeOwnership::Own,
            loan_intent: LoanIntent::Medical,
            prior_defaults: PriorDefaults::Yes,
            ..ApplicantRecord::default()
        };
        let encoded = encode(&record, &schema).unwrap();

        let indicator_sum: f64 = schema
            .columns()
            .iter()
            .enumerate()
            .filter(|(_, c)| c.kind == ColumnKind::Indicator)
            .map(|(i, _)| encoded.values()[i])
            .sum();
        assert_eq!(indicator_sum, 5.0);

        assert_eq!(encoded.values()[schema.index_of("person_gender_female").unwrap()], 1.0);
        assert_eq!(encoded.values()[schema.index_of("person_gender_male").unwrap()], 0.0);
        assert_eq!(encoded.values()[schema.index_of("loan_intent_MEDICAL").unwrap()], 1.0);
        assert_eq!(encoded.values()[schema.index_of("loan_intent_PERSONAL").unwrap()], 0.0);
    }

    #[test]
    fn test_column_set_constant_across_categorical_combos() {
        let schema = FeatureSchema::reference();
        for home in HomeOwnership::ALL {
            for intent in LoanIntent::ALL {
                let record = ApplicantRecord {
                    home_ownership: home,
                    loan_intent: intent,
                    ..ApplicantRecord::default()
                };
                let encoded = encode(&record, &schema).unwrap();
                assert_eq!(encoded.len(), schema.len());
            }
        }
    }
}
