use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::post,
    Router,
};
use chrono::{Local, NaiveDate};
use serde::{Deserialize, Serialize};
use serde_json::json;
use tracing::error;

use super::engine::{DecisionEngine, LoanRequest};
use super::identity::IdentityCodeValidator;
use super::outcome::Decision;

/// JSON body accepted by the decision endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoanDecisionPayload {
    pub personal_code: String,
    pub loan_amount: i64,
    pub loan_period: i64,
    #[serde(default)]
    pub as_of: Option<NaiveDate>,
}

impl LoanDecisionPayload {
    fn into_request(self) -> (LoanRequest, Option<NaiveDate>) {
        (
            LoanRequest::new(self.personal_code, self.loan_amount, self.loan_period),
            self.as_of,
        )
    }
}

/// Router builder exposing the loan decision endpoint.
pub fn decision_router<V>(engine: Arc<DecisionEngine<V>>) -> Router
where
    V: IdentityCodeValidator + 'static,
{
    Router::new()
        .route("/api/loan-decisions", post(decision_handler::<V>))
        .with_state(engine)
}

fn status_for(decision: &Decision) -> StatusCode {
    match decision.error() {
        None => StatusCode::OK,
        Some(error) if error.is_input_error() => StatusCode::BAD_REQUEST,
        Some(_) => StatusCode::NOT_FOUND,
    }
}

pub(crate) async fn decision_handler<V>(
    State(engine): State<Arc<DecisionEngine<V>>>,
    axum::Json(payload): axum::Json<LoanDecisionPayload>,
) -> Response
where
    V: IdentityCodeValidator + 'static,
{
    let (request, as_of) = payload.into_request();
    let as_of = as_of.unwrap_or_else(|| Local::now().date_naive());

    match engine.evaluate(&request, as_of) {
        Ok(decision) => (status_for(&decision), axum::Json(decision.view())).into_response(),
        Err(err) => {
            error!(%err, "loan decision failed unexpectedly");
            let payload = json!({
                "error": err.to_string(),
            });
            (StatusCode::INTERNAL_SERVER_ERROR, axum::Json(payload)).into_response()
        }
    }
}
