//! Display helpers for the loosely-typed scalars in an analysis report.
//!
//! Numbers are formatted without `format!` on floats: float `Display` has hit
//! wasm-side panics in some toolchain/browser combinations, so finite values
//! are scaled and rounded into an `i64` and printed as integers.

use serde_json::Value;

/// Shown for any missing scalar.
pub const MISSING: &str = "N/A";

/// Fixed-point formatting with trailing zeros (and a bare dot) removed.
pub fn fmt_f64_trimmed(v: f64, max_decimals: usize) -> String {
    let fixed = fmt_f64_fixed(v, max_decimals);
    if !fixed.contains('.') {
        return fixed;
    }
    let trimmed = fixed.trim_end_matches('0').trim_end_matches('.');
    if trimmed == "-0" {
        "0".to_string()
    } else {
        trimmed.to_string()
    }
}

pub fn fmt_f64_fixed(v: f64, decimals: usize) -> String {
    if !v.is_finite() {
        return if v.is_nan() {
            "NaN".to_string()
        } else if v.is_sign_positive() {
            "Inf".to_string()
        } else {
            "-Inf".to_string()
        };
    }

    let decimals = decimals.min(9);
    let scale_i64 = 10_i64.checked_pow(decimals as u32).unwrap_or(1_i64);
    let scaled = (v * scale_i64 as f64).round();

    // Past i64 range.
    if !scaled.is_finite() || scaled.abs() > (i64::MAX as f64) {
        return if v.is_sign_negative() {
            "-Inf".to_string()
        } else {
            "Inf".to_string()
        };
    }

    let scaled_i = scaled as i64;
    let abs_i = scaled_i.abs();
    let int_part = abs_i / scale_i64;
    let frac_part = abs_i % scale_i64;

    let mut out = String::new();
    if scaled_i < 0 {
        out.push('-');
    }
    out.push_str(&int_part.to_string());

    if decimals > 0 {
        out.push('.');
        let frac_str = frac_part.to_string();
        for _ in 0..decimals.saturating_sub(frac_str.len()) {
            out.push('0');
        }
        out.push_str(&frac_str);
    }
    out
}

const SCALAR_DECIMALS: usize = 4;

/// True if `v` survives the scale-and-round in `fmt_f64_fixed`.
fn fits_fixed(v: f64, decimals: usize) -> bool {
    let scale = 10_i64.checked_pow(decimals.min(9) as u32).unwrap_or(1) as f64;
    v.is_finite() && (v * scale).abs() < i64::MAX as f64
}

/// Text for a scalar report field; `N/A` when absent or null.
pub fn scalar_text(v: Option<&Value>) -> String {
    match v {
        None | Some(Value::Null) => MISSING.to_string(),
        Some(Value::String(s)) => s.clone(),
        Some(Value::Bool(b)) => b.to_string(),
        Some(Value::Number(n)) => {
            if let Some(i) = n.as_i64() {
                i.to_string()
            } else if let Some(u) = n.as_u64() {
                u.to_string()
            } else {
                match n.as_f64() {
                    Some(f) if fits_fixed(f, SCALAR_DECIMALS) => {
                        fmt_f64_trimmed(f, SCALAR_DECIMALS)
                    }
                    // Past i64 once scaled; use serde_json's shortest form.
                    _ => n.to_string(),
                }
            }
        }
        Some(other) => other.to_string(),
    }
}

/// Renders an ISO-8601 timestamp as `YYYY-MM-DD HH:MM:SS`, dropping fractional
/// seconds and any offset. Anything else is returned unchanged.
pub fn fmt_timestamp(raw: &str) -> String {
    let s = raw.trim();
    let b = s.as_bytes();
    if b.len() < 19 {
        return s.to_string();
    }

    let digits = [0, 1, 2, 3, 5, 6, 8, 9, 11, 12, 14, 15, 17, 18];
    let shaped = digits.iter().all(|&i| b[i].is_ascii_digit())
        && b[4] == b'-'
        && b[7] == b'-'
        && (b[10] == b'T' || b[10] == b' ')
        && b[13] == b':'
        && b[16] == b':';
    if !shaped {
        return s.to_string();
    }

    format!("{} {}", &s[..10], &s[11..19])
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn trims_trailing_zeros() {
        assert_eq!(fmt_f64_trimmed(23.5, 4), "23.5");
        assert_eq!(fmt_f64_trimmed(0.57, 4), "0.57");
        assert_eq!(fmt_f64_trimmed(12.0, 4), "12");
        assert_eq!(fmt_f64_trimmed(-0.00001, 2), "0");
        assert_eq!(fmt_f64_trimmed(1.23456, 2), "1.23");
    }

    #[test]
    fn fixed_pads_fraction() {
        assert_eq!(fmt_f64_fixed(1.05, 3), "1.050");
        assert_eq!(fmt_f64_fixed(-2.5, 1), "-2.5");
        assert_eq!(fmt_f64_fixed(f64::NAN, 2), "NaN");
    }

    #[test]
    fn scalars() {
        assert_eq!(scalar_text(None), "N/A");
        assert_eq!(scalar_text(Some(&Value::Null)), "N/A");
        assert_eq!(scalar_text(Some(&json!(72))), "72");
        assert_eq!(scalar_text(Some(&json!(0.6))), "0.6");
        assert_eq!(scalar_text(Some(&json!("AI + Heuristic"))), "AI + Heuristic");
        assert_eq!(scalar_text(Some(&json!(true))), "true");
    }

    #[test]
    fn huge_floats_fall_back_to_json_text() {
        let big = json!(1e20);
        let text = scalar_text(Some(&big));
        assert_ne!(text, "Inf");
        assert_eq!(text, big.to_string());
        assert_eq!(scalar_text(Some(&json!(-3.5e18))), json!(-3.5e18).to_string());
        assert_eq!(scalar_text(Some(&json!(123456.5))), "123456.5");
    }

    #[test]
    fn timestamps() {
        assert_eq!(
            fmt_timestamp("2025-03-14T09:26:53.589793"),
            "2025-03-14 09:26:53"
        );
        assert_eq!(
            fmt_timestamp("2025-03-14T09:26:53+04:00"),
            "2025-03-14 09:26:53"
        );
        assert_eq!(fmt_timestamp("yesterday"), "yesterday");
        assert_eq!(fmt_timestamp("2025-03-14"), "2025-03-14");
    }
}
