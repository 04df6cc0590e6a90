//! Applicant records and categorical field normalization
//!
//! Each categorical field is a closed enum whose `parse_lenient` constructor
//! implements the normalization contract: lower-case the raw input, map it to
//! the token the model was trained on, and fall back to the field default for
//! anything unrecognized. Parsing is total and idempotent.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Inclusive input range and form default for a numeric field.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FieldBounds {
    pub min: f64,
    pub max: f64,
    pub default: f64,
}

impl FieldBounds {
    /// Clamp a value into the documented input range.
    pub fn clamp(&self, value: f64) -> f64 {
        value.clamp(self.min, self.max)
    }
}

/// Documented min/max/default for each numeric input field.
pub mod bounds {
    use super::FieldBounds;

    pub const AGE: FieldBounds = FieldBounds { min: 18.0, max: 100.0, default: 30.0 };
    pub const INCOME: FieldBounds = FieldBounds { min: 0.0, max: 1_000_000.0, default: 50_000.0 };
    pub const EMPLOYMENT_YEARS: FieldBounds = FieldBounds { min: 0.0, max: 50.0, default: 5.0 };
    pub const LOAN_AMOUNT: FieldBounds = FieldBounds { min: 0.0, max: 1_000_000.0, default: 10_000.0 };
    pub const INTEREST_RATE: FieldBounds = FieldBounds { min: 0.0, max: 100.0, default: 10.0 };
    pub const LOAN_PERCENT_INCOME: FieldBounds = FieldBounds { min: 0.0, max: 1.0, default: 0.2 };
    pub const CREDIT_HISTORY_YEARS: FieldBounds = FieldBounds { min: 0.0, max: 50.0, default: 5.0 };
    pub const CREDIT_SCORE: FieldBounds = FieldBounds { min: 300.0, max: 900.0, default: 650.0 };
}

/// Applicant gender
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Gender {
    Female,
    Male,
}

impl Gender {
    pub const ALL: [Gender; 2] = [Gender::Female, Gender::Male];

    /// Normalize a raw input string; unrecognized values fall back to `Male`.
    pub fn parse_lenient(raw: &str) -> Self {
        match raw.trim().to_lowercase().as_str() {
            "female" => Gender::Female,
            "male" => Gender::Male,
            _ => Gender::Male,
        }
    }

    /// Training-time token for this value.
    pub fn token(&self) -> &'static str {
        match self {
            Gender::Female => "female",
            Gender::Male => "male",
        }
    }

    /// Form label shown to the user.
    pub fn label(&self) -> &'static str {
        match self {
            Gender::Female => "Female",
            Gender::Male => "Male",
        }
    }

    /// One-hot indicator column name.
    pub fn column(&self) -> &'static str {
        match self {
            Gender::Female => "person_gender_female",
            Gender::Male => "person_gender_male",
        }
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Highest education level attained
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Education {
    Associate,
    Bachelor,
    Doctorate,
    HighSchool,
    Master,
}

impl Education {
    pub const ALL: [Education; 5] = [
        Education::Associate,
        Education::Bachelor,
        Education::Doctorate,
        Education::HighSchool,
        Education::Master,
    ];

    /// Normalize a raw input string; unrecognized values fall back to `HighSchool`.
    pub fn parse_lenient(raw: &str) -> Self {
        match raw.trim().to_lowercase().as_str() {
            "associate" => Education::Associate,
            "bachelor" => Education::Bachelor,
            "doctorate" => Education::Doctorate,
            "high school" => Education::HighSchool,
            "master" => Education::Master,
            _ => Education::HighSchool,
        }
    }

    pub fn token(&self) -> &'static str {
        match self {
            Education::Associate => "Associate",
            Education::Bachelor => "Bachelor",
            Education::Doctorate => "Doctorate",
            Education::HighSchool => "High School",
            Education::Master => "Master",
        }
    }

    pub fn label(&self) -> &'static str {
        self.token()
    }

    pub fn column(&self) -> &'static str {
        match self {
            Education::Associate => "person_education_Associate",
            Education::Bachelor => "person_education_Bachelor",
            Education::Doctorate => "person_education_Doctorate",
            Education::HighSchool => "person_education_High School",
            Education::Master => "person_education_Master",
        }
    }
}

impl fmt::Display for Education {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Home ownership status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum HomeOwnership {
    Mortgage,
    Other,
    Own,
    Rent,
}

impl HomeOwnership {
    pub const ALL: [HomeOwnership; 4] = [
        HomeOwnership::Mortgage,
        HomeOwnership::Other,
        HomeOwnership::Own,
        HomeOwnership::Rent,
    ];

    /// Normalize a raw input string; unrecognized values fall back to `Rent`.
    pub fn parse_lenient(raw: &str) -> Self {
        match raw.trim().to_lowercase().as_str() {
            "mortgage" => HomeOwnership::Mortgage,
            "other" => HomeOwnership::Other,
            "own" => HomeOwnership::Own,
            "rent" => HomeOwnership::Rent,
            _ => HomeOwnership::Rent,
        }
    }

    pub fn token(&self) -> &'static str {
        match self {
            HomeOwnership::Mortgage => "MORTGAGE",
            HomeOwnership::Other => "OTHER",
            HomeOwnership::Own => "OWN",
            HomeOwnership::Rent => "RENT",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            HomeOwnership::Mortgage => "Mortgage",
            HomeOwnership::Other => "Other",
            HomeOwnership::Own => "Own",
            HomeOwnership::Rent => "Rent",
        }
    }

    pub fn column(&self) -> &'static str {
        match self {
            HomeOwnership::Mortgage => "person_home_ownership_MORTGAGE",
            HomeOwnership::Other => "person_home_ownership_OTHER",
            HomeOwnership::Own => "person_home_ownership_OWN",
            HomeOwnership::Rent => "person_home_ownership_RENT",
        }
    }
}

impl fmt::Display for HomeOwnership {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Stated purpose of the loan
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LoanIntent {
    DebtConsolidation,
    Education,
    HomeImprovement,
    Medical,
    Personal,
    Venture,
}

impl LoanIntent {
    pub const ALL: [LoanIntent; 6] = [
        LoanIntent::DebtConsolidation,
        LoanIntent::Education,
        LoanIntent::HomeImprovement,
        LoanIntent::Medical,
        LoanIntent::Personal,
        LoanIntent::Venture,
    ];

    /// Normalize a raw input string; unrecognized values fall back to `Personal`.
    pub fn parse_lenient(raw: &str) -> Self {
        match raw.trim().to_lowercase().as_str() {
            "debtconsolidation" => LoanIntent::DebtConsolidation,
            "education" => LoanIntent::Education,
            "homeimprovement" => LoanIntent::HomeImprovement,
            "medical" => LoanIntent::Medical,
            "personal" => LoanIntent::Personal,
            "venture" => LoanIntent::Venture,
            _ => LoanIntent::Personal,
        }
    }

    pub fn token(&self) -> &'static str {
        match self {
            LoanIntent::DebtConsolidation => "DEBTCONSOLIDATION",
            LoanIntent::Education => "EDUCATION",
            LoanIntent::HomeImprovement => "HOMEIMPROVEMENT",
            LoanIntent::Medical => "MEDICAL",
            LoanIntent::Personal => "PERSONAL",
            LoanIntent::Venture => "VENTURE",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            LoanIntent::DebtConsolidation => "Debtconsolidation",
            LoanIntent::Education => "Education",
            LoanIntent::HomeImprovement => "Homeimprovement",
            LoanIntent::Medical => "Medical",
            LoanIntent::Personal => "Personal",
            LoanIntent::Venture => "Venture",
        }
    }

    pub fn column(&self) -> &'static str {
        match self {
            LoanIntent::DebtConsolidation => "loan_intent_DEBTCONSOLIDATION",
            LoanIntent::Education => "loan_intent_EDUCATION",
            LoanIntent::HomeImprovement => "loan_intent_HOMEIMPROVEMENT",
            LoanIntent::Medical => "loan_intent_MEDICAL",
            LoanIntent::Personal => "loan_intent_PERSONAL",
            LoanIntent::Venture => "loan_intent_VENTURE",
        }
    }
}

impl fmt::Display for LoanIntent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Whether the applicant has prior loan defaults on file
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PriorDefaults {
    No,
    Yes,
}

impl PriorDefaults {
    pub const ALL: [PriorDefaults; 2] = [PriorDefaults::No, PriorDefaults::Yes];

    /// Normalize a raw input string; unrecognized values fall back to `No`.
    pub fn parse_lenient(raw: &str) -> Self {
        match raw.trim().to_lowercase().as_str() {
            "no" => PriorDefaults::No,
            "yes" => PriorDefaults::Yes,
            _ => PriorDefaults::No,
        }
    }

    pub fn token(&self) -> &'static str {
        match self {
            PriorDefaults::No => "No",
            PriorDefaults::Yes => "Yes",
        }
    }

    pub fn label(&self) -> &'static str {
        self.token()
    }

    pub fn column(&self) -> &'static str {
        match self {
            PriorDefaults::No => "previous_loan_defaults_on_file_No",
            PriorDefaults::Yes => "previous_loan_defaults_on_file_Yes",
        }
    }
}

impl fmt::Display for PriorDefaults {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One loan application, as entered on the form.
///
/// Numeric fields carry the raw (already range-bounded) input values;
/// categorical fields are normalized enums. Constructed fresh per submission
/// and never mutated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApplicantRecord {
    pub age: u32,
    pub income: f64,
    pub employment_years: f64,
    pub loan_amount: f64,
    pub interest_rate: f64,
    pub loan_percent_income: f64,
    pub credit_history_years: f64,
    pub credit_score: f64,
    pub gender: Gender,
    pub education: Education,
    pub home_ownership: HomeOwnership,
    pub loan_intent: LoanIntent,
    pub prior_defaults: PriorDefaults,
}

impl Default for ApplicantRecord {
    fn default() -> Self {
        Self {
            age: bounds::AGE.default as u32,
            income: bounds::INCOME.default,
            employment_years: bounds::EMPLOYMENT_YEARS.default,
            loan_amount: bounds::LOAN_AMOUNT.default,
            interest_rate: bounds::INTEREST_RATE.default,
            loan_percent_income: bounds::LOAN_PERCENT_INCOME.default,
            credit_history_years: bounds::CREDIT_HISTORY_YEARS.default,
            credit_score: bounds::CREDIT_SCORE.default,
            gender: Gender::Male,
            education: Education::Master,
            home_ownership: HomeOwnership::Rent,
            loan_intent: LoanIntent::Personal,
            prior_defaults: PriorDefaults::No,
        }
    }
}

impl ApplicantRecord {
    /// Clamp every numeric field into its documented input range.
    pub fn clamped(mut self) -> Self {
        self.age = bounds::AGE.clamp(self.age as f64) as u32;
        self.income = bounds::INCOME.clamp(self.income);
        self.employment_years = bounds::EMPLOYMENT_YEARS.clamp(self.employment_years);
        self.loan_amount = bounds::LOAN_AMOUNT.clamp(self.loan_amount);
        self.interest_rate = bounds::INTEREST_RATE.clamp(self.interest_rate);
        self.loan_percent_income = bounds::LOAN_PERCENT_INCOME.clamp(self.loan_percent_income);
        self.credit_history_years = bounds::CREDIT_HISTORY_YEARS.clamp(self.credit_history_years);
        self.credit_score = bounds::CREDIT_SCORE.clamp(self.credit_score);
        self
    }

    /// Numeric features as (training column name, value) pairs, in schema order.
    pub fn numeric_features(&self) -> [(&'static str, f64); 8] {
        [
            ("person_age", self.age as f64),
            ("person_income", self.income),
            ("person_emp_exp", self.employment_years),
            ("loan_amnt", self.loan_amount),
            ("loan_int_rate", self.interest_rate),
            ("loan_percent_income", self.loan_percent_income),
            ("cb_person_cred_hist_length", self.credit_history_years),
            ("credit_score", self.credit_score),
        ]
    }

    /// Indicator columns triggered by this record, one per categorical field.
    pub fn indicator_columns(&self) -> [&'static str; 5] {
        [
            self.gender.column(),
            self.education.column(),
            self.home_ownership.column(),
            self.loan_intent.column(),
            self.prior_defaults.column(),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_lenient_known_values() {
        assert_eq!(Gender::parse_lenient("Female"), Gender::Female);
        assert_eq!(Education::parse_lenient("High School"), Education::HighSchool);
        assert_eq!(HomeOwnership::parse_lenient("MORTGAGE"), HomeOwnership::Mortgage);
        assert_eq!(LoanIntent::parse_lenient("Debtconsolidation"), LoanIntent::DebtConsolidation);
        assert_eq!(PriorDefaults::parse_lenient("yes"), PriorDefaults::Yes);
    }

    #[test]
    fn test_parse_lenient_unknown_falls_back() {
        assert_eq!(Gender::parse_lenient("???"), Gender::Male);
        assert_eq!(Education::parse_lenient("kindergarten"), Education::HighSchool);
        assert_eq!(HomeOwnership::parse_lenient(""), HomeOwnership::Rent);
        assert_eq!(LoanIntent::parse_lenient("yacht"), LoanIntent::Personal);
        assert_eq!(PriorDefaults::parse_lenient("maybe"), PriorDefaults::No);
    }

    #[test]
    fn test_parse_lenient_idempotent() {
        for intent in LoanIntent::ALL {
            assert_eq!(LoanIntent::parse_lenient(intent.label()), intent);
            assert_eq!(LoanIntent::parse_lenient(intent.token()), intent);
        }
        for edu in Education::ALL {
            assert_eq!(Education::parse_lenient(edu.label()), edu);
        }
        for home in HomeOwnership::ALL {
            assert_eq!(HomeOwnership::parse_lenient(home.label()), home);
            assert_eq!(HomeOwnership::parse_lenient(home.token()), home);
        }
    }

    #[test]
    fn test_default_record_matches_form_defaults() {
        let record = ApplicantRecord::default();
        assert_eq!(record.age, 30);
        assert_eq!(record.income, 50_000.0);
        assert_eq!(record.loan_amount, 10_000.0);
        assert_eq!(record.loan_percent_income, 0.2);
        assert_eq!(record.credit_score, 650.0);
        assert_eq!(record.prior_defaults, PriorDefaults::No);
    }

    #[test]
    fn test_clamped_enforces_bounds() {
        let record = ApplicantRecord {
            age: 5,
            income: 2_000_000.0,
            credit_score: 100.0,
            ..ApplicantRecord::default()
        }
        .clamped();

        assert_eq!(record.age, 18);
        assert_eq!(record.income, 1_000_000.0);
        assert_eq!(record.credit_score, 300.0);
    }
}
