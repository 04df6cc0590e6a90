//! Fixed-layout application summary
//!
//! Pure text rendering of the applicant details and the final decision.
//! Values are aligned at column 27; currency is rounded to whole units with
//! thousands separators.

use crate::applicant::ApplicantRecord;
use crate::inference::Prediction;
use std::fmt::Write;

const RULE_HEAVY: &str = "========================================";
const RULE_LIGHT: &str = "----------------------------------------";

/// Render the loan application summary for one scored record.
pub fn render(record: &ApplicantRecord, prediction: &Prediction) -> String {
    let mut out = String::with_capacity(1024);

    let _ = writeln!(out, "{}", RULE_HEAVY);
    let _ = writeln!(out, "         LOAN APPLICATION SUMMARY");
    let _ = writeln!(out, "{}", RULE_HEAVY);

    let _ = writeln!(out, "Applicant Details:");
    let _ = writeln!(out, "{}", RULE_LIGHT);
    let _ = writeln!(out, "{:<26}{} YEARS", "Age:", record.age);
    let _ = writeln!(out, "{:<26}{}", "Gender:", record.gender.label().to_uppercase());
    let _ = writeln!(out, "{:<26}{}", "Education Level:", record.education.label().to_uppercase());
    let _ = writeln!(out, "{:<26}{}", "Annual Income:", currency(record.income));
    let _ = writeln!(out, "{:<26}{} YEARS", "Employment Experience:", number(record.employment_years));
    let _ = writeln!(out, "{:<26}{}", "Home Ownership:", record.home_ownership.label().to_uppercase());
    let _ = writeln!(out);

    let _ = writeln!(out, "Loan Details:");
    let _ = writeln!(out, "{}", RULE_LIGHT);
    let _ = writeln!(out, "{:<26}{}", "Loan Amount:", currency(record.loan_amount));
    let _ = writeln!(out, "{:<26}{}", "Loan Purpose:", record.loan_intent.label().to_uppercase());
    let _ = writeln!(out, "{:<26}{}%", "Interest Rate:", number(record.interest_rate));
    let _ = writeln!(out, "{:<26}{:.0}%", "Loan/Income Ratio:", record.loan_percent_income * 100.0);
    let _ = writeln!(out);

    let _ = writeln!(out, "Credit Information:");
    let _ = writeln!(out, "{}", RULE_LIGHT);
    let _ = writeln!(out, "{:<26}{} YEARS", "Credit History Length:", number(record.credit_history_years));
    let _ = writeln!(out, "{:<26}{}", "Credit Score:", number(record.credit_score));
    let _ = writeln!(out, "{:<26}{}", "Previous Defaults:", record.prior_defaults.label().to_uppercase());
    let _ = writeln!(out);

    let _ = writeln!(out, "{}", RULE_HEAVY);
    let _ = writeln!(out, "          FINAL DECISION");
    let _ = writeln!(out, "{}", RULE_HEAVY);
    let _ = writeln!(out, "{}", prediction.decision.banner());

    out
}

/// Whole-unit currency with thousands separators, e.g. `$50,000`.
fn currency(value: f64) -> String {
    let whole = value.round() as i64;
    format!("${}", group_thousands(whole))
}

fn group_thousands(n: i64) -> String {
    let digits = n.abs().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    if n < 0 {
        format!("-{}", grouped)
    } else {
        grouped
    }
}

/// Compact numeric rendering: whole values without a trailing `.0`.
fn number(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{:.0}", value)
    } else {
        format!("{}", value)
    }
}
