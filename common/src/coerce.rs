//! 数値文字列の変換
//!
//! APIは数値を文字列で返す。空文字列はゼロ値として扱い、
//! それ以外で数値として読めないものはエラーにする。

use crate::error::{Error, Result};
use regex::Regex;

lazy_static::lazy_static! {
    static ref INT_RE: Regex = Regex::new(r"^-?[0-9]+$").unwrap();
    static ref FLOAT_RE: Regex =
        Regex::new(r"^[-+]?([0-9]+(\.[0-9]*)?|\.[0-9]+)([eE][-+]?[0-9]+)?$").unwrap();
}

/// 整数に変換
///
/// # Arguments
/// * `field` - エラー時に報告するフィールド名
/// * `raw` - APIから受け取った文字列
///
/// # Examples
/// ```
/// use dmm_enhanced_common::coerce::parse_int;
///
/// assert_eq!(parse_int("bust", "").unwrap(), 0);
/// assert_eq!(parse_int("bust", "88").unwrap(), 88);
/// assert!(parse_int("bust", "abc").is_err());
/// ```
pub fn parse_int(field: &str, raw: &str) -> Result<i64> {
    if raw.is_empty() {
        return Ok(0);
    }
    // str::parse は先頭の '+' を受け付けるので、書式は正規表現で先に絞る
    if !INT_RE.is_match(raw) {
        return Err(Error::malformed_numeric(field, raw));
    }
    raw.parse::<i64>()
        .map_err(|_| Error::malformed_numeric(field, raw))
}

/// 浮動小数点数に変換
///
/// 整数と違い先頭の `+` は受け付ける。
/// `inf` / `NaN` のような表記や、オーバーフローして有限でなくなる値は不正扱い。
pub fn parse_float(field: &str, raw: &str) -> Result<f64> {
    if raw.is_empty() {
        return Ok(0.0);
    }
    if !FLOAT_RE.is_match(raw) {
        return Err(Error::malformed_numeric(field, raw));
    }
    match raw.parse::<f64>() {
        Ok(value) if value.is_finite() => Ok(value),
        _ => Err(Error::malformed_numeric(field, raw)),
    }
}
