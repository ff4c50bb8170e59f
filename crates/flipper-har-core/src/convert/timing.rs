//! Capture timestamps (epoch milliseconds) to HAR timing fields.

use chrono::DateTime;
use serde_json::Number;

const MICROS_PER_SEC: i64 = 1_000_000;

/// Formats epoch milliseconds as `YYYY-MM-DDTHH:MM:SS[.ffffff]Z`.
///
/// Precision is microseconds; the fractional part is omitted when it is
/// zero. Returns `None` for values outside the representable date range.
pub fn started_date_time(epoch_ms: &Number) -> Option<String> {
    let micros = epoch_micros(epoch_ms)?;
    let secs = micros.div_euclid(MICROS_PER_SEC);
    let sub_micros = micros.rem_euclid(MICROS_PER_SEC);
    let dt = DateTime::from_timestamp(secs, (sub_micros * 1_000) as u32)?;

    let mut out = dt.format("%Y-%m-%dT%H:%M:%S").to_string();
    if sub_micros != 0 {
        out.push_str(&format!(".{sub_micros:06}"));
    }
    out.push('Z');
    Some(out)
}

fn epoch_micros(epoch_ms: &Number) -> Option<i64> {
    if let Some(ms) = epoch_ms.as_i64() {
        return ms.checked_mul(1_000);
    }
    let micros = (epoch_ms.as_f64()? * 1_000.0).round();
    if micros.is_finite() && micros.abs() < i64::MAX as f64 {
        Some(micros as i64)
    } else {
        None
    }
}

/// `response - request` in milliseconds, or 0 when either is missing.
///
/// Stays an integer when both inputs are integers.
pub fn elapsed(request_ms: Option<&Number>, response_ms: Option<&Number>) -> Number {
    let (Some(req), Some(resp)) = (request_ms, response_ms) else {
        return Number::from(0);
    };
    if let (Some(a), Some(b)) = (resp.as_i64(), req.as_i64()) {
        if let Some(diff) = a.checked_sub(b) {
            return Number::from(diff);
        }
    }
    match (resp.as_f64(), req.as_f64()) {
        (Some(a), Some(b)) => Number::from_f64(a - b).unwrap_or_else(|| Number::from(0)),
        _ => Number::from(0),
    }
}
