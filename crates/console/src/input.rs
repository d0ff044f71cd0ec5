//! Prompt/parse helpers for the menu loops.

use std::io::{self, BufRead, Write};

use stockdesk_core::{DomainError, DomainResult};

/// Print `label`, then read one trimmed line.
///
/// Returns `None` on end of input, which the menus treat as "leave".
pub fn prompt<R: BufRead, W: Write>(
    reader: &mut R,
    writer: &mut W,
    label: &str,
) -> io::Result<Option<String>> {
    write!(writer, "{label}")?;
    writer.flush()?;

    let mut line = String::new();
    if reader.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}

/// Parse a decimal price string ("12.34") into cents.
///
/// Strict: at most two fractional digits, no sign, no stray characters.
pub fn parse_price_cents(raw: &str) -> DomainResult<u64> {
    let raw = raw.trim();
    let (whole, frac) = match raw.split_once('.') {
        Some((whole, frac)) => (whole, frac),
        None => (raw, ""),
    };

    if whole.is_empty() && frac.is_empty() {
        return Err(DomainError::validation("price cannot be empty"));
    }
    if frac.len() > 2 {
        return Err(DomainError::validation(
            "price supports at most two decimal places",
        ));
    }

    let units: u64 = if whole.is_empty() {
        0
    } else {
        whole
            .parse()
            .map_err(|_| DomainError::validation(format!("invalid price: {raw}")))?
    };
    let cents: u64 = if frac.is_empty() {
        0
    } else {
        // "5" means 50 cents, "05" means 5.
        let padded = format!("{frac:0<2}");
        padded
            .parse()
            .map_err(|_| DomainError::validation(format!("invalid price: {raw}")))?
    };

    units
        .checked_mul(100)
        .and_then(|c| c.checked_add(cents))
        .ok_or_else(|| DomainError::validation(format!("price out of range: {raw}")))
}

/// Parse a signed stock quantity or adjustment delta.
pub fn parse_quantity(raw: &str) -> DomainResult<i64> {
    raw.trim()
        .parse()
        .map_err(|_| DomainError::validation(format!("invalid quantity: {raw}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn price_parses_whole_and_fractional_forms() {
        assert_eq!(parse_price_cents("12.34").unwrap(), 1234);
        assert_eq!(parse_price_cents("12").unwrap(), 1200);
        assert_eq!(parse_price_cents("12.5").unwrap(), 1250);
        assert_eq!(parse_price_cents("12.05").unwrap(), 1205);
        assert_eq!(parse_price_cents("0.99").unwrap(), 99);
        assert_eq!(parse_price_cents(".5").unwrap(), 50);
        assert_eq!(parse_price_cents("0").unwrap(), 0);
    }

    #[test]
    fn price_rejects_malformed_input() {
        for raw in ["", ".", "-3", "12.345", "12,34", "abc", "1.2.3"] {
            assert!(parse_price_cents(raw).is_err(), "{raw:?} should be rejected");
        }
    }

    #[test]
    fn quantity_parses_signed_integers() {
        assert_eq!(parse_quantity("12").unwrap(), 12);
        assert_eq!(parse_quantity("-5").unwrap(), -5);
        assert!(parse_quantity("five").is_err());
        assert!(parse_quantity("1.5").is_err());
    }

    #[test]
    fn prompt_trims_and_signals_eof() {
        let mut output = Vec::new();

        let mut input = "  hello  \n".as_bytes();
        let line = prompt(&mut input, &mut output, "> ").unwrap();
        assert_eq!(line.as_deref(), Some("hello"));

        let mut empty = "".as_bytes();
        assert_eq!(prompt(&mut empty, &mut output, "> ").unwrap(), None);
    }
}
