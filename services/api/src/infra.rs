use chrono::NaiveDate;
use loan_decision::config::DecisionSettings;
use loan_decision::decision::{DecisionEngine, StructuralCodeValidator};
use metrics_exporter_prometheus::PrometheusHandle;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

pub(crate) fn decision_engine(
    settings: &DecisionSettings,
) -> DecisionEngine<StructuralCodeValidator> {
    DecisionEngine::for_country(settings.country.as_deref())
}

pub(crate) fn parse_date(raw: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d")
        .map_err(|err| format!("failed to parse '{raw}' as YYYY-MM-DD ({err})"))
}
