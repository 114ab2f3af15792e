//! # STAR 值格式化
//!
//! 将 [`Datum`] 写回 CIF 文本：数值带标准不确定度 `5.4307(2)`，
//! 可精修但无不确定度的数值写作 `1.5()`，字符串按需加引号。
//!
//! 输出对相同输入逐字节稳定，且再次解析后得到相同的数值。
//!
//! ## 依赖关系
//! - 被 `cif/writer.rs` 使用
//! - 使用 `star/dom.rs`

use super::dom::{Datum, Value};

/// 不确定度最多保留的小数位
const MAX_DECIMALS: i32 = 12;

/// 判定不确定度已是整数时允许的误差
const SU_TOLERANCE: f64 = 1e-6;

/// 格式化单个值
pub fn format_datum(datum: &Datum) -> String {
    match (datum.number, &datum.value) {
        (Some(n), _) => format_number(n, datum.error, datum.fixed),
        (None, Value::Str(s)) => quote_text(s),
        (None, Value::Inapplicable) => ".".to_string(),
        (None, Value::Unknown) => "?".to_string(),
    }
}

/// 格式化数值
pub fn format_number(value: f64, error: Option<f64>, fixed: Option<bool>) -> String {
    match error {
        Some(err) if err > 0.0 && err.is_finite() => {
            let (decimals, su) = su_digits(err);
            format!("{:.*}({})", decimals, value, su)
        }
        _ => {
            let text = shortest(value);
            if fixed == Some(false) {
                format!("{}()", text)
            } else {
                text
            }
        }
    }
}

/// 不确定度的小数位与括号内整数：取使其成为整数 (≥ 1) 的最少小数位，
/// `0.0012` → (4, 12)，`25` → (0, 25)
fn su_digits(err: f64) -> (usize, u64) {
    for decimals in 0..=MAX_DECIMALS {
        let scaled = err * 10f64.powi(decimals);
        let rounded = scaled.round();
        if rounded >= 1.0 && (scaled - rounded).abs() <= SU_TOLERANCE {
            return (decimals as usize, rounded as u64);
        }
    }
    let scaled = (err * 10f64.powi(MAX_DECIMALS)).round().max(1.0);
    (MAX_DECIMALS as usize, scaled as u64)
}

/// 可往返的最短十进制表示，`-0` 写作 `0`
fn shortest(value: f64) -> String {
    if value == 0.0 {
        "0".to_string()
    } else {
        value.to_string()
    }
}

/// 按 CIF 规则为字符串加引号
pub fn quote_text(s: &str) -> String {
    if s.contains('\n') {
        return format!("\n;{}\n;", s);
    }
    let needs_quote = s.is_empty()
        || s.chars().any(|c| c.is_whitespace())
        || s.starts_with(['_', '#', '$', '\'', '"', ';', '[', ']'])
        || s == "."
        || s == "?"
        || {
            let lower = s.to_ascii_lowercase();
            lower.starts_with("data_")
                || lower.starts_with("save_")
                || lower == "loop_"
                || lower == "stop_"
                || lower == "global_"
        };
    if !needs_quote {
        s.to_string()
    } else if !s.contains("' ") && !s.ends_with('\'') {
        format!("'{}'", s)
    } else if !s.contains("\" ") && !s.ends_with('"') {
        format!("\"{}\"", s)
    } else {
        format!("\n;{}\n;", s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::star::dom::parse_number;

    #[test]
    fn test_format_with_uncertainty() {
        assert_eq!(format_number(5.4307, Some(0.0002), Some(false)), "5.4307(2)");
        assert_eq!(format_number(123.0, Some(25.0), Some(false)), "123(25)");
        assert_eq!(format_number(0.25, Some(0.0013), Some(false)), "0.2500(13)");
    }

    #[test]
    fn test_format_keeps_two_digit_uncertainty() {
        assert_eq!(format_number(5.4307, Some(0.0012), Some(false)), "5.4307(12)");
        assert_eq!(format_number(0.1235, Some(0.0015), Some(false)), "0.1235(15)");
        assert_eq!(format_number(0.0213, Some(0.0017), Some(false)), "0.0213(17)");
        assert_eq!(format_number(123.0, Some(2.5), Some(false)), "123.0(25)");
    }

    #[test]
    fn test_format_plain_and_refinable() {
        assert_eq!(format_number(90.0, None, None), "90");
        assert_eq!(format_number(0.125, None, Some(true)), "0.125");
        assert_eq!(format_number(1.5, None, Some(false)), "1.5()");
        assert_eq!(format_number(-0.0, None, None), "0");
    }

    #[test]
    fn test_format_then_parse_is_stable() {
        for text in ["5.4307(2)", "5.4307(12)", "0.1235(15)", "0.02(3)", "90", "1.5()", "0.6666666666666666"] {
            let (v, e, f) = parse_number(text).unwrap();
            let once = format_number(v, e, f);
            let (v2, e2, f2) = parse_number(&once).unwrap();
            assert_eq!(once, format_number(v2, e2, f2), "unstable for {}", text);
        }
    }

    #[test]
    fn test_quote_text() {
        assert_eq!(quote_text("Si1"), "Si1");
        assert_eq!(quote_text("F d -3 m"), "'F d -3 m'");
        assert_eq!(quote_text("it' s"), "\"it' s\"");
        assert_eq!(quote_text(""), "''");
        assert_eq!(quote_text("_tag"), "'_tag'");
        assert_eq!(quote_text("a\nb"), "\n;a\nb\n;");
    }

    #[test]
    fn test_format_special_values() {
        assert_eq!(format_datum(&Datum::from_value(Value::Unknown)), "?");
        assert_eq!(format_datum(&Datum::from_value(Value::Inapplicable)), ".");
        assert_eq!(format_datum(&Datum::text("Uiso")), "Uiso");
    }
}
