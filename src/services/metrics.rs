use lazy_static::lazy_static;
use prometheus::{register_counter, register_counter_vec, Counter, CounterVec};

lazy_static! {
    pub static ref HTTP_REQUESTS_COUNTER: CounterVec = register_counter_vec!(
        "mealplan_http_requests_total",
        "Completed HTTP requests by method and status",
        &["method", "status"]
    ).unwrap();

    pub static ref GATE_REJECTIONS_COUNTER: CounterVec = register_counter_vec!(
        "mealplan_gate_rejections_total",
        "Requests stopped by the access gate, by reason",
        &["reason"]
    ).unwrap();

    pub static ref MEALS_SAVED_COUNTER: Counter = register_counter!(
        "mealplan_meals_saved_total",
        "Meal slots written through POST /api/meals"
    ).unwrap();
}

/// Label values the `method` label may take; anything else counts as `OTHER`.
const KNOWN_METHODS: &[&str] = &["GET", "POST", "PUT", "DELETE", "OPTIONS", "HEAD", "PATCH"];

pub fn method_label(method: &str) -> &'static str {
    KNOWN_METHODS
        .iter()
        .copied()
        .find(|known| *known == method)
        .unwrap_or("OTHER")
}

pub fn record_request(method: &str, status: u16) {
    HTTP_REQUESTS_COUNTER
        .with_label_values(&[method_label(method), &status.to_string()])
        .inc();
}

pub fn record_rejection(reason: &str) {
    GATE_REJECTIONS_COUNTER.with_label_values(&[reason]).inc();
}
