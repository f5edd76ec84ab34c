//! End-to-end scenarios for the loan decision engine through its public facade and router.

use std::sync::Arc;

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use chrono::NaiveDate;
use serde_json::{json, Value};
use tower::ServiceExt;

use loan_decision::decision::{
    decision_router, AgePolicy, Decision, DecisionEngine, DecisionView, IdentityCodeValidator,
    LifespanTable, LoanRequest,
};

fn as_of() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 1, 15).expect("valid date")
}

/// Stand-in for a national registry check that only knows a fixed set of codes.
struct RegistryValidator {
    known: Vec<&'static str>,
}

impl IdentityCodeValidator for RegistryValidator {
    fn is_valid(&self, code: &str) -> bool {
        self.known.contains(&code)
    }
}

#[test]
fn custom_validator_gates_evaluation() {
    let engine = DecisionEngine::new(
        RegistryValidator {
            known: vec!["38411266610"],
        },
        AgePolicy::for_country(Some("LV"), &LifespanTable::default()),
    );

    let known = engine
        .evaluate(&LoanRequest::new("38411266610", 2000, 12), as_of())
        .expect("evaluates");
    assert_eq!(known.loan_amount(), Some(3600));
    assert_eq!(known.loan_period(), Some(12));

    let unknown = engine
        .evaluate(&LoanRequest::new("50307172740", 2000, 12), as_of())
        .expect("evaluates");
    assert_eq!(
        unknown.error_message().as_deref(),
        Some("Invalid personal ID code!")
    );
}

#[test]
fn decision_views_populate_exactly_one_side() {
    let engine = DecisionEngine::for_country(None);
    let requests = [
        LoanRequest::new("50307172740", 4000, 12),
        LoanRequest::new("37605030299", 4000, 12),
        LoanRequest::new("35006069515", 4000, 12),
        LoanRequest::new("nonsense", 4000, 12),
        LoanRequest::new("38411266610", 9000, 70),
    ];

    for request in requests {
        let decision = engine.evaluate(&request, as_of()).expect("evaluates");
        let view = DecisionView::from(&decision);
        match decision {
            Decision::Approved(_) => {
                assert!(view.loan_amount.is_some() && view.loan_period.is_some());
                assert!(view.error_message.is_none());
            }
            Decision::Rejected(_) => {
                assert!(view.loan_amount.is_none() && view.loan_period.is_none());
                assert!(view.error_message.is_some());
            }
        }
    }
}

#[tokio::test]
async fn router_round_trips_decision_payloads() {
    let router = decision_router(Arc::new(DecisionEngine::for_country(None)));

    let response = router
        .oneshot(
            Request::post("/api/loan-decisions")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(
                    serde_json::to_vec(&json!({
                        "personalCode": "38411266610",
                        "loanAmount": 4000,
                        "loanPeriod": 12,
                        "asOf": "2025-01-15",
                    }))
                    .unwrap(),
                ))
                .unwrap(),
        )
        .await
        .expect("route executes");

    assert_eq!(response.status(), StatusCode::OK);
    let body = axum::body::to_bytes(response.into_body(), 1024)
        .await
        .expect("read body");
    let payload: Value = serde_json::from_slice(&body).expect("json payload");
    assert_eq!(payload["loanAmount"], json!(4000));
    assert_eq!(payload["loanPeriod"], json!(14));
}
