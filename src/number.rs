//! Exact-where-possible parsing of JSONH number literals.
//!
//! This module is a pure function: given the literal text already carved
//! out by the tokenizer (digit separators and all), it returns the number's
//! value as a [`BigDecimal`]. It never looks at a [`crate::cursor::CharCursor`]
//! and never raises a positioned [`crate::Error`] — the tokenizer attaches
//! line/column information to whatever message this module returns.
//!
//! ## Why exact?
//!
//! Bases 2, 8, and 16 are all powers of two, so a fractional digit run in
//! one of those bases always terminates after a finite number of decimal
//! places: `1 / 2^n == 5^n / 10^n`. That lets the fractional part be
//! computed as an integer scaled by a power of five rather than approximated
//! with floating point. Base-10 mantissas are simply parsed by
//! [`BigDecimal`]'s own (exact) decimal parser.
//!
//! An *integer* exponent (`1.5e10`) is applied exactly by shifting the
//! decimal's internal scale. A *fractional* exponent (`1.2e3.4`) has no
//! exact decimal representation — `10^3.4` is irrational — so it is
//! approximated with `f64::powf` and rounded to `decimals` places.

use bigdecimal::BigDecimal;
use num_bigint::{BigInt, BigUint};
use num_traits::{ToPrimitive, Zero};
use std::str::FromStr;

/// Parses a JSONH number literal into its exact (or best-effort) decimal value.
///
/// `text` is the literal exactly as it appeared in the source, with digit
/// separators (`_`) still present. `decimals` bounds the precision used when
/// a fractional exponent forces an approximation.
///
/// # Examples
///
/// ```rust
/// use jsonh::number::parse;
///
/// assert_eq!(parse("0x5e3", 15).unwrap().to_string(), "1507");
/// assert_eq!(parse("0x5e+3", 15).unwrap().to_string(), "5000");
/// assert_eq!(parse("1_000.5", 15).unwrap().to_string(), "1000.5");
/// ```
pub fn parse(text: &str, decimals: u32) -> Result<BigDecimal, String> {
    let cleaned: String = text.chars().filter(|&c| c != '_').collect();
    let mut rest = cleaned.as_str();

    let negative = match rest.as_bytes().first() {
        Some(b'+') => {
            rest = &rest[1..];
            false
        }
        Some(b'-') => {
            rest = &rest[1..];
            true
        }
        _ => false,
    };

    let (base, bits_per_digit, body) = if let Some(hex) = rest.strip_prefix("0x").or_else(|| rest.strip_prefix("0X")) {
        (16u32, 4u32, hex)
    } else if let Some(oct) = rest.strip_prefix("0o").or_else(|| rest.strip_prefix("0O")) {
        (8u32, 3u32, oct)
    } else if let Some(bin) = rest.strip_prefix("0b").or_else(|| rest.strip_prefix("0B")) {
        (2u32, 1u32, bin)
    } else {
        (10u32, 0u32, rest)
    };

    if body.is_empty() {
        return Err("number literal has no digits".to_string());
    }

    let (mantissa_str, exponent_str) = split_exponent(body, base);

    let (int_digits, frac_digits) = match mantissa_str.split_once('.') {
        Some((i, f)) => (i, f),
        None => (mantissa_str, ""),
    };
    if int_digits.is_empty() && frac_digits.is_empty() {
        return Err("number literal has no digits".to_string());
    }

    let mut mantissa = if base == 10 {
        parse_decimal_mantissa(int_digits, frac_digits)?
    } else {
        parse_radix_mantissa(int_digits, frac_digits, base, bits_per_digit)?
    };

    if let Some(exp) = exponent_str {
        mantissa = apply_exponent(mantissa, exp, decimals)?;
    }

    if negative {
        mantissa = -mantissa;
    }

    Ok(mantissa)
}

/// Splits `body` into `(mantissa, exponent)`. For base 16, `e`/`E` is part of
/// the mantissa's hex digits unless immediately followed by a sign, since a
/// bare `e` cannot otherwise be distinguished from the hex digit `0xe`.
fn split_exponent(body: &str, base: u32) -> (&str, Option<&str>) {
    let bytes = body.as_bytes();
    for (i, &b) in bytes.iter().enumerate() {
        if b == b'e' || b == b'E' {
            if base == 16 {
                let signed = matches!(bytes.get(i + 1), Some(b'+') | Some(b'-'));
                if !signed {
                    continue;
                }
            }
            return (&body[..i], Some(&body[i + 1..]));
        }
    }
    (body, None)
}

fn parse_decimal_mantissa(int_digits: &str, frac_digits: &str) -> Result<BigDecimal, String> {
    let text = if frac_digits.is_empty() {
        int_digits.to_string()
    } else {
        format!("{}.{}", int_digits, frac_digits)
    };
    let text = if text.starts_with('.') {
        format!("0{text}")
    } else {
        text
    };
    BigDecimal::from_str(&text).map_err(|e| format!("invalid decimal mantissa: {e}"))
}

fn parse_radix_mantissa(
    int_digits: &str,
    frac_digits: &str,
    base: u32,
    bits_per_digit: u32,
) -> Result<BigDecimal, String> {
    let int_val = if int_digits.is_empty() {
        BigInt::zero()
    } else {
        BigInt::parse_bytes(int_digits.as_bytes(), base)
            .ok_or_else(|| format!("invalid base-{base} digits: {int_digits:?}"))?
    };

    if frac_digits.is_empty() {
        return Ok(BigDecimal::new(int_val, 0));
    }

    let frac_val = BigUint::parse_bytes(frac_digits.as_bytes(), base)
        .ok_or_else(|| format!("invalid base-{base} digits: {frac_digits:?}"))?;

    // 1 / base^n == 5^(bits_per_digit*n) / 10^(bits_per_digit*n) because base is a power of two.
    let scale = bits_per_digit * frac_digits.len() as u32;
    let five_pow = BigInt::from(5).pow(scale);
    let ten_pow = BigInt::from(10).pow(scale);

    let numerator = int_val * &ten_pow + BigInt::from(frac_val) * five_pow;
    Ok(BigDecimal::new(numerator, scale as i64))
}

fn apply_exponent(mantissa: BigDecimal, exponent: &str, decimals: u32) -> Result<BigDecimal, String> {
    if exponent.is_empty() {
        return Err("empty exponent".to_string());
    }

    if exponent.contains('.') {
        let exp_value: f64 = exponent
            .parse()
            .map_err(|_| format!("invalid exponent {exponent:?}"))?;
        let base = mantissa.to_f64().unwrap_or(f64::INFINITY);
        let approx = base * 10f64.powf(exp_value);
        if !approx.is_finite() {
            return Ok(if approx.is_sign_negative() {
                BigDecimal::from_str("-1e400").unwrap_or_default()
            } else {
                BigDecimal::from_str("1e400").unwrap_or_default()
            });
        }
        let mut result = BigDecimal::try_from(approx).map_err(|e| e.to_string())?;
        result = result.with_scale(decimals as i64);
        Ok(result)
    } else {
        let exp_value: i64 = exponent
            .parse()
            .map_err(|_| format!("invalid exponent {exponent:?}"))?;
        let (digits, scale) = mantissa.as_bigint_and_exponent();
        Ok(BigDecimal::new(digits, scale - exp_value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_decimal() {
        assert_eq!(parse("42", 15).unwrap().to_string(), "42");
        assert_eq!(parse("-3.5", 15).unwrap().to_string(), "-3.5");
    }

    #[test]
    fn test_digit_separators() {
        assert_eq!(parse("1_000_000", 15).unwrap().to_string(), "1000000");
    }

    #[test]
    fn test_hex_mantissa_absorbs_bare_e() {
        // 0x5e3 is the hex digits 5, e, 3 -- not "5 times 10^3".
        assert_eq!(parse("0x5e3", 15).unwrap().to_string(), "1507");
    }

    #[test]
    fn test_hex_exponent_requires_sign() {
        assert_eq!(parse("0x5e+3", 15).unwrap().to_string(), "5000");
    }

    #[test]
    fn test_octal_and_binary() {
        assert_eq!(parse("0o17", 15).unwrap().to_string(), "15");
        assert_eq!(parse("0b101", 15).unwrap().to_string(), "5");
    }

    #[test]
    fn test_binary_fraction_is_exact() {
        // 0b0.1 == 1/2 == 0.5 exactly.
        assert_eq!(parse("0b0.1", 15).unwrap().to_string(), "0.5");
    }

    #[test]
    fn test_integer_exponent_is_exact() {
        assert_eq!(parse("1.5e3", 15).unwrap().to_string(), "1500");
        assert_eq!(parse("1.5e-3", 15).unwrap().to_string(), "0.0015");
    }

    #[test]
    fn test_fractional_exponent_truncates_to_decimals() {
        // 1.2e3.4 is inherently approximate; just check it lands near 3014.
        let value = parse("1.2e3.4", 15).unwrap();
        let approx = bigdecimal::ToPrimitive::to_f64(&value).unwrap();
        assert!((approx - 3014.0).abs() < 50.0);
    }

    #[test]
    fn test_empty_digits_is_error() {
        assert!(parse("0x", 15).is_err());
        assert!(parse(".", 15).is_err());
    }
}
