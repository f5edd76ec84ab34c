use std::sync::Arc;

use axum::response::Response;
use chrono::NaiveDate;
use serde_json::Value;

use crate::decision::{
    decision_router, AgePolicy, DecisionEngine, IdentityCodeValidator, LoanRequest,
    StructuralCodeValidator,
};

pub(super) const DEBTOR_CODE: &str = "37605030299";
pub(super) const SEGMENT1_CODE: &str = "50307172740";
pub(super) const SEGMENT2_CODE: &str = "38411266610";
pub(super) const SEGMENT3_CODE: &str = "49001017777";
pub(super) const ELDERLY_SEGMENT3_CODE: &str = "35006069515";

pub(super) fn as_of() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 1, 15).expect("valid date")
}

pub(super) fn engine() -> DecisionEngine<StructuralCodeValidator> {
    DecisionEngine::default()
}

pub(super) fn request(code: &str, amount: i64, period_months: i64) -> LoanRequest {
    LoanRequest::new(code, amount, period_months)
}

/// Validator that trusts every code, letting tests reach the segmentation contract check.
#[derive(Debug, Clone, Copy, Default)]
pub(super) struct TrustingValidator;

impl IdentityCodeValidator for TrustingValidator {
    fn is_valid(&self, _code: &str) -> bool {
        true
    }
}

pub(super) fn trusting_engine() -> DecisionEngine<TrustingValidator> {
    DecisionEngine::new(TrustingValidator, AgePolicy::default())
}

pub(super) fn router() -> axum::Router {
    decision_router(Arc::new(engine()))
}

pub(super) fn trusting_router() -> axum::Router {
    decision_router(Arc::new(trusting_engine()))
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}
