use chrono::{Local, NaiveDate};
use clap::Args;
use loan_decision::decision::{Decision, DecisionEngine, LoanRequest};
use loan_decision::error::AppError;

#[derive(Args, Debug)]
pub(crate) struct DecideArgs {
    /// Applicant personal identification code
    #[arg(long)]
    pub(crate) personal_code: String,
    /// Requested loan amount
    #[arg(long, allow_negative_numbers = true)]
    pub(crate) amount: i64,
    /// Requested loan period in months
    #[arg(long, allow_negative_numbers = true)]
    pub(crate) period: i64,
    /// Evaluation date (YYYY-MM-DD, defaults to today)
    #[arg(long, value_parser = crate::infra::parse_date)]
    pub(crate) as_of: Option<NaiveDate>,
    /// ISO country code selecting the expected lifespan
    #[arg(long)]
    pub(crate) country: Option<String>,
}

pub(crate) fn run_decide(args: DecideArgs) -> Result<(), AppError> {
    let DecideArgs {
        personal_code,
        amount,
        period,
        as_of,
        country,
    } = args;

    let as_of = as_of.unwrap_or_else(|| Local::now().date_naive());
    let engine = DecisionEngine::for_country(country.as_deref());
    let request = LoanRequest::new(personal_code, amount, period);
    let decision = engine.evaluate(&request, as_of)?;

    println!("{}", render_decision(&request, &decision, as_of));
    Ok(())
}

fn render_decision(request: &LoanRequest, decision: &Decision, as_of: NaiveDate) -> String {
    let mut lines = vec![format!(
        "Requested {} over {} months (evaluated {})",
        request.amount, request.period_months, as_of
    )];

    match decision {
        Decision::Approved(offer) => {
            lines.push(format!("Approved amount: {}", offer.amount));
            lines.push(format!("Approved period: {} months", offer.period_months));
        }
        Decision::Rejected(error) => {
            lines.push(format!("Rejected: {error}"));
        }
    }

    lines.join("\n")
}
