//! CSV loading and saving for batch scoring
//!
//! Input files use the training column names for the 13 raw fields. Rows are
//! read leniently, matching the bounded-form contract: blank or unmapped
//! categorical cells fall back to the field default, missing numeric cells
//! fall back to the documented form default. A missing column is an error.

use crate::applicant::{
    bounds, ApplicantRecord, Education, Gender, HomeOwnership, LoanIntent, PriorDefaults,
};
use crate::error::{LoanlensError, Result};
use crate::inference::Prediction;
use polars::prelude::*;
use std::fs::File;
use std::path::Path;
use tracing::info;

fn numeric_column(df: &DataFrame, name: &str) -> Result<Float64Chunked> {
    let column = df
        .column(name)
        .map_err(|_| LoanlensError::FeatureNotFound(name.to_string()))?;
    let series = column.as_materialized_series();
    let ca = series.cast(&DataType::Float64)?.f64()?.clone();
    Ok(ca)
}

fn string_column(df: &DataFrame, name: &str) -> Result<StringChunked> {
    let column = df
        .column(name)
        .map_err(|_| LoanlensError::FeatureNotFound(name.to_string()))?;
    let series = column.as_materialized_series();
    let ca = series.cast(&DataType::String)?.str()?.clone();
    Ok(ca)
}

/// Load applicant records from a CSV file.
pub fn read_applicants_csv(path: &Path) -> Result<Vec<ApplicantRecord>> {
    let file = File::open(path)?;
    let df = CsvReadOptions::default()
        .with_has_header(true)
        .with_infer_schema_length(Some(100))
        .into_reader_with_file_handle(file)
        .finish()?;

    let age = numeric_column(&df, "person_age")?;
    let income = numeric_column(&df, "person_income")?;
    let emp_exp = numeric_column(&df, "person_emp_exp")?;
    let loan_amnt = numeric_column(&df, "loan_amnt")?;
    let int_rate = numeric_column(&df, "loan_int_rate")?;
    let percent_income = numeric_column(&df, "loan_percent_income")?;
    let cred_hist = numeric_column(&df, "cb_person_cred_hist_length")?;
    let credit_score = numeric_column(&df, "credit_score")?;

    let gender = string_column(&df, "person_gender")?;
    let education = string_column(&df, "person_education")?;
    let home = string_column(&df, "person_home_ownership")?;
    let intent = string_column(&df, "loan_intent")?;
    let defaults = string_column(&df, "previous_loan_defaults_on_file")?;

    let records = (0..df.height())
        .map(|i| {
            ApplicantRecord {
                age: age.get(i).unwrap_or(bounds::AGE.default) as u32,
                income: income.get(i).unwrap_or(bounds::INCOME.default),
                employment_years: emp_exp.get(i).unwrap_or(bounds::EMPLOYMENT_YEARS.default),
                loan_amount: loan_amnt.get(i).unwrap_or(bounds::LOAN_AMOUNT.default),
                interest_rate: int_rate.get(i).unwrap_or(bounds::INTEREST_RATE.default),
                loan_percent_income: percent_income
                    .get(i)
                    .unwrap_or(bounds::LOAN_PERCENT_INCOME.default),
                credit_history_years: cred_hist
                    .get(i)
                    .unwrap_or(bounds::CREDIT_HISTORY_YEARS.default),
                credit_score: credit_score.get(i).unwrap_or(bounds::CREDIT_SCORE.default),
                gender: Gender::parse_lenient(gender.get(i).unwrap_or_default()),
                education: Education::parse_lenient(education.get(i).unwrap_or_default()),
                home_ownership: HomeOwnership::parse_lenient(home.get(i).unwrap_or_default()),
                loan_intent: LoanIntent::parse_lenient(intent.get(i).unwrap_or_default()),
                prior_defaults: PriorDefaults::parse_lenient(defaults.get(i).unwrap_or_default()),
            }
            .clamped()
        })
        .collect::<Vec<_>>();

    info!(rows = records.len(), path = %path.display(), "loaded applicants");
    Ok(records)
}

/// Write scored records to a CSV file: the 13 raw fields plus `loan_status`
/// (1 = approved) and `approval_probability`. Row order matches the input.
pub fn write_scores_csv(
    path: &Path,
    records: &[ApplicantRecord],
    predictions: &[Prediction],
) -> Result<()> {
    if records.len() != predictions.len() {
        return Err(LoanlensError::ShapeError {
            expected: format!("{} predictions", records.len()),
            actual: format!("{} predictions", predictions.len()),
        });
    }

    let mut df = DataFrame::new(vec![
        Column::new(
            "person_age".into(),
            records.iter().map(|r| r.age as i64).collect::<Vec<_>>(),
        ),
        Column::new(
            "person_income".into(),
            records.iter().map(|r| r.income).collect::<Vec<_>>(),
        ),
        Column::new(
            "person_emp_exp".into(),
            records.iter().map(|r| r.employment_years).collect::<Vec<_>>(),
        ),
        Column::new(
            "loan_amnt".into(),
            records.iter().map(|r| r.loan_amount).collect::<Vec<_>>(),
        ),
        Column::new(
            "loan_int_rate".into(),
            records.iter().map(|r| r.interest_rate).collect::<Vec<_>>(),
        ),
        Column::new(
            "loan_percent_income".into(),
            records.iter().map(|r| r.loan_percent_income).collect::<Vec<_>>(),
        ),
        Column::new(
            "cb_person_cred_hist_length".into(),
            records.iter().map(|r| r.credit_history_years).collect::<Vec<_>>(),
        ),
        Column::new(
            "credit_score".into(),
            records.iter().map(|r| r.credit_score).collect::<Vec<_>>(),
        ),
        Column::new(
            "person_gender".into(),
            records.iter().map(|r| r.gender.label()).collect::<Vec<_>>(),
        ),
        Column::new(
            "person_education".into(),
            records.iter().map(|r| r.education.label()).collect::<Vec<_>>(),
        ),
        Column::new(
            "person_home_ownership".into(),
            records.iter().map(|r| r.home_ownership.label()).collect::<Vec<_>>(),
        ),
        Column::new(
            "loan_intent".into(),
            records.iter().map(|r| r.loan_intent.label()).collect::<Vec<_>>(),
        ),
        Column::new(
            "previous_loan_defaults_on_file".into(),
            records.iter().map(|r| r.prior_defaults.label()).collect::<Vec<_>>(),
        ),
        Column::new(
            "loan_status".into(),
            predictions.iter().map(|p| p.decision.label()).collect::<Vec<_>>(),
        ),
        Column::new(
            "approval_probability".into(),
            predictions.iter().map(|p| p.probability).collect::<Vec<_>>(),
        ),
    ])?;

    let mut file = File::create(path)?;
    CsvWriter::new(&mut file).finish(&mut df)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::inference::Decision;
    use std::io::Write;

    fn sample_csv() -> tempfile::NamedTempFile {
        let mut file = tempfile::Builder::new().suffix(".csv").tempfile().unwrap();
        writeln!(
            file,
            "person_age,person_income,person_emp_exp,loan_amnt,loan_int_rate,\
             loan_percent_income,cb_person_cred_hist_length,credit_score,person_gender,\
             person_education,person_home_ownership,loan_intent,previous_loan_defaults_on_file"
        )
        .unwrap();
        writeln!(file, "30,50000,5,10000,10,0.2,5,650,Male,Master,Rent,Personal,No").unwrap();
        writeln!(file, "45,90000,12,25000,7.5,0.28,15,720,Female,Doctorate,Own,Medical,Yes").unwrap();
        file
    }

    #[test]
    fn test_read_applicants_csv() {
        let file = sample_csv();
        let records = read_applicants_csv(file.path()).unwrap();

        assert_eq!(records.len(), 2);
        assert_eq!(records[0].age, 30);
        assert_eq!(records[0].loan_intent, LoanIntent::Personal);
        assert_eq!(records[1].gender, Gender::Female);
        assert_eq!(records[1].prior_defaults, PriorDefaults::Yes);
        assert_eq!(records[1].interest_rate, 7.5);
    }

    #[test]
    fn test_read_missing_column_is_error() {
        let mut file = tempfile::Builder::new().suffix(".csv").tempfile().unwrap();
        writeln!(file, "person_age,person_income").unwrap();
        writeln!(file, "30,50000").unwrap();

        assert!(matches!(
            read_applicants_csv(file.path()),
            Err(LoanlensError::FeatureNotFound(_))
        ));
    }

    #[test]
    fn test_read_garbled_categorical_falls_back() {
        let mut file = tempfile::Builder::new().suffix(".csv").tempfile().unwrap();
        writeln!(
            file,
            "person_age,person_income,person_emp_exp,loan_amnt,loan_int_rate,\
             loan_percent_income,cb_person_cred_hist_length,credit_score,person_gender,\
             person_education,person_home_ownership,loan_intent,previous_loan_defaults_on_file"
        )
        .unwrap();
        writeln!(file, "30,50000,5,10000,10,0.2,5,650,Robot,Unschooled,Castle,Yacht,Perhaps").unwrap();

        let records = read_applicants_csv(file.path()).unwrap();
        assert_eq!(records[0].gender, Gender::Male);
        assert_eq!(records[0].education, Education::HighSchool);
        assert_eq!(records[0].home_ownership, HomeOwnership::Rent);
        assert_eq!(records[0].loan_intent, LoanIntent::Personal);
        assert_eq!(records[0].prior_defaults, PriorDefaults::No);
    }

    #[test]
    fn test_write_then_read_preserves_rows() {
        let file = sample_csv();
        let records = read_applicants_csv(file.path()).unwrap();
        let predictions = vec![
            Prediction { decision: Decision::Approved, probability: 0.8 },
            Prediction { decision: Decision::Declined, probability: 0.3 },
        ];

        let out = tempfile::Builder::new().suffix(".csv").tempfile().unwrap();
        write_scores_csv(out.path(), &records, &predictions).unwrap();

        let round_tripped = read_applicants_csv(out.path()).unwrap();
        assert_eq!(round_tripped.len(), records.len());
        assert_eq!(round_tripped[1].education, Education::Doctorate);
    }

    #[test]
    fn test_write_rejects_length_mismatch() {
        let file = sample_csv();
        let records = read_applicants_csv(file.path()).unwrap();
        let predictions = vec![Prediction { decision: Decision::Approved, probability: 0.8 }];

        let out = tempfile::Builder::new().suffix(".csv").tempfile().unwrap();
        assert!(write_scores_csv(out.path(), &records, &predictions).is_err());
    }
}
