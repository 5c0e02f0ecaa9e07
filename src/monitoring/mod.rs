use anyhow::Result;
use once_cell::sync::Lazy;
use prometheus::{register_counter_vec, CounterVec, Encoder, TextEncoder};

pub static GATE_DECISIONS: Lazy<CounterVec> = Lazy::new(|| {
    register_counter_vec!(
        "launchpad_gate_decisions_total",
        "Routing policy outcomes for gated requests",
        &["decision"]
    )
    .unwrap()
});

pub static PAGE_VIEWS: Lazy<CounterVec> = Lazy::new(|| {
    register_counter_vec!(
        "launchpad_page_views_total",
        "Rendered pages",
        &["page", "signed_in"]
    )
    .unwrap()
});

pub static ERROR_COUNT: Lazy<CounterVec> = Lazy::new(|| {
    register_counter_vec!(
        "launchpad_errors_total",
        "Total number of errors",
        &["error_type"]
    )
    .unwrap()
});

pub fn record_page_view(page: &str, signed_in: bool) {
    PAGE_VIEWS
        .with_label_values(&[page, if signed_in { "true" } else { "false" }])
        .inc();
}

/// Prometheus text exposition of every registered metric
pub fn gather_text() -> Result<String> {
    let encoder = TextEncoder::new();
    let metric_families = prometheus::gather();
    let mut buffer = vec![];
    encoder.encode(&metric_families, &mut buffer)?;
    Ok(String::from_utf8(buffer)?)
}
