use metrics_exporter_prometheus::PrometheusHandle;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

/// Parses a currency amount typed with optional thousands separators, e.g. `10,000`.
pub(crate) fn parse_amount(raw: &str) -> Result<f64, String> {
    let cleaned: String = raw.trim().chars().filter(|c| *c != ',').collect();
    let value = cleaned
        .parse::<f64>()
        .map_err(|err| format!("failed to parse '{raw}' as an amount ({err})"))?;
    if value.is_finite() {
        Ok(value)
    } else {
        Err(format!("'{raw}' is not a finite amount"))
    }
}

/// Formats an amount with thousands separators and no decimals, flooring like the calculator
/// display does.
pub(crate) fn format_amount(value: f64) -> String {
    let whole = value.floor();
    let digits = format!("{:.0}", whole.abs());
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (index, ch) in digits.chars().enumerate() {
        if index > 0 && (digits.len() - index) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    if whole < 0.0 {
        format!("-{grouped}")
    } else {
        grouped
    }
}
