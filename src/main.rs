//! Loanlens CLI
//!
//! Score a single application from flags, batch-score a CSV, or inspect the
//! loaded artifacts.

use clap::{Parser, Subcommand};
use colored::*;
use std::path::PathBuf;
use std::time::Instant;
use tracing_subscriber::EnvFilter;

use loanlens::applicant::{
    bounds, ApplicantRecord, Education, Gender, HomeOwnership, LoanIntent, PriorDefaults,
};
use loanlens::artifacts::{ArtifactBundle, ArtifactPaths};
use loanlens::inference::{Decision, ScoringConfig, ScoringContext};
use loanlens::report;
use loanlens::utils::{read_applicants_csv, write_scores_csv};
use loanlens::Result;

#[derive(Parser)]
#[command(name = "loanlens")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Loan approval scoring over a pre-trained classifier", long_about = None)]
struct Cli {
    /// Directory containing model.json, scaler.json, and columns.json
    #[arg(long, default_value = "artifacts", global = true)]
    artifacts: PathBuf,

    /// Approval probability threshold
    #[arg(long, default_value_t = 0.5, global = true)]
    threshold: f64,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Score a single application and print the summary report
    Score {
        /// Applicant age (18-100)
        #[arg(long, default_value_t = 30)]
        age: u32,

        /// Gender (Male, Female)
        #[arg(long, default_value = "Male")]
        gender: String,

        /// Education level (Master, High School, Bachelor, Associate, Doctorate)
        #[arg(long, default_value = "Master")]
        education: String,

        /// Annual income (0-1,000,000)
        #[arg(long, default_value_t = bounds::INCOME.default)]
        income: f64,

        /// Employment experience in years (0-50)
        #[arg(long, default_value_t = bounds::EMPLOYMENT_YEARS.default)]
        employment_years: f64,

        /// Home ownership (Rent, Own, Mortgage, Other)
        #[arg(long, default_value = "Rent")]
        home_ownership: String,

        /// Loan amount (0-1,000,000)
        #[arg(long, default_value_t = bounds::LOAN_AMOUNT.default)]
        loan_amount: f64,

        /// Loan purpose (Personal, Education, Medical, Venture,
        /// Homeimprovement, Debtconsolidation)
        #[arg(long, default_value = "Personal")]
        loan_intent: String,

        /// Interest rate in percent (0-100)
        #[arg(long, default_value_t = bounds::INTEREST_RATE.default)]
        interest_rate: f64,

        /// Loan amount as a fraction of income (0-1)
        #[arg(long, default_value_t = bounds::LOAN_PERCENT_INCOME.default)]
        loan_percent_income: f64,

        /// Credit history length in years (0-50)
        #[arg(long, default_value_t = bounds::CREDIT_HISTORY_YEARS.default)]
        credit_history: f64,

        /// Credit score (300-900)
        #[arg(long, default_value_t = bounds::CREDIT_SCORE.default)]
        credit_score: f64,

        /// Previous loan defaults on file (No, Yes)
        #[arg(long, default_value = "No")]
        prior_defaults: String,
    },

    /// Score every row of a CSV file
    Batch {
        /// Input CSV with the 13 applicant columns
        #[arg(short, long)]
        data: PathBuf,

        /// Output CSV; adds loan_status and approval_probability columns
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Show artifact and schema information
    Info,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    if let Err(e) = run() {
        eprintln!("{} {}", "error:".red().bold(), e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    let paths = ArtifactPaths::from_dir(&cli.artifacts);
    let config = ScoringConfig::new().with_threshold(cli.threshold);
    let context = ArtifactBundle::load(&paths)?.into_context(config)?;

    match cli.command {
        Commands::Score {
            age,
            gender,
            education,
            income,
            employment_years,
            home_ownership,
            loan_amount,
            loan_intent,
            interest_rate,
            loan_percent_income,
            credit_history,
            credit_score,
            prior_defaults,
        } => {
            let record = ApplicantRecord {
                age,
                income,
                employment_years,
                loan_amount,
                interest_rate,
                loan_percent_income,
                credit_history_years: credit_history,
                credit_score,
                gender: Gender::parse_lenient(&gender),
                education: Education::parse_lenient(&education),
                home_ownership: HomeOwnership::parse_lenient(&home_ownership),
                loan_intent: LoanIntent::parse_lenient(&loan_intent),
                prior_defaults: PriorDefaults::parse_lenient(&prior_defaults),
            }
            .clamped();

            let prediction = context.score(&record)?;
            print!("{}", report::render(&record, &prediction));

            let decision = match prediction.decision {
                Decision::Approved => prediction.decision.banner().green().bold(),
                Decision::Declined => prediction.decision.banner().red().bold(),
            };
            println!();
            println!(
                "{} (approval probability {:.1}%)",
                decision,
                prediction.probability * 100.0
            );
        }

        Commands::Batch { data, output } => {
            let start = Instant::now();
            let records = read_applicants_csv(&data)?;
            let predictions = context.score_batch(&records)?;

            let approved = predictions
                .iter()
                .filter(|p| p.decision == Decision::Approved)
                .count();
            println!(
                "Scored {} applications in {:.2}s: {} approved, {} declined",
                records.len(),
                start.elapsed().as_secs_f64(),
                approved.to_string().green(),
                (records.len() - approved).to_string().red()
            );

            if let Some(output) = output {
                write_scores_csv(&output, &records, &predictions)?;
                println!("Wrote scores to {}", output.display().to_string().cyan());
            }
        }

        Commands::Info => {
            let schema = context.schema();
            println!("{}", "Artifacts".bold());
            println!("  directory:  {}", cli.artifacts.display());
            println!("  threshold:  {}", context.config().threshold);
            println!("{}", "Schema".bold());
            println!("  columns:    {}", schema.len());
            for spec in schema.columns() {
                println!("    {:<38}{:?}", spec.name, spec.kind);
            }
        }
    }

    Ok(())
}
