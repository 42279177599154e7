//! Price validity rules.
//!
//! A price gates two things: whether a record can take part in a price sort,
//! and whether it is rendered at all. The predicate is narrow:
//! only missing values, zero and a fixed set of zero spellings are rejected.
//! Anything else, including text that is not a number, passes.

use crate::model::Scalar;

/// Textual spellings of zero that the source uses for "no price".
pub const ZERO_PRICE_SPELLINGS: [&str; 4] = ["R$ 0,00", "0.00", "0.0", "0"];

/// Returns whether `price` is usable for sorting and display.
pub fn is_valid_price(price: Option<&Scalar>) -> bool {
    match price {
        None => false,
        Some(Scalar::Number(n)) => *n != 0.0,
        Some(Scalar::Text(s)) => !s.is_empty() && !ZERO_PRICE_SPELLINGS.contains(&s.as_str()),
    }
}

/// A price after numeric coercion.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PriceValue {
    Number(f64),
    /// Passed the validity check but is not a number.
    Unparseable,
}

/// Coerces a price that already passed [`is_valid_price`].
pub fn coerce_price(price: Option<&Scalar>) -> PriceValue {
    match price.and_then(Scalar::as_number) {
        Some(n) => PriceValue::Number(n),
        None => PriceValue::Unparseable,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text(s: &str) -> Option<Scalar> {
        Some(Scalar::from(s))
    }

    #[test]
    fn rejects_missing_empty_and_zero() {
        assert!(!is_valid_price(None));
        assert!(!is_valid_price(text("").as_ref()));
        assert!(!is_valid_price(Some(&Scalar::Number(0.0))));
        for zero in ZERO_PRICE_SPELLINGS {
            assert!(!is_valid_price(text(zero).as_ref()), "{zero} should be invalid");
        }
    }

    #[test]
    fn accepts_everything_else() {
        assert!(is_valid_price(text("10").as_ref()));
        assert!(is_valid_price(text("0.01").as_ref()));
        assert!(is_valid_price(Some(&Scalar::Number(3.5))));
        // Unknown formats pass here and only fail at coercion.
        assert!(is_valid_price(text("R$ 1,00").as_ref()));
        assert!(is_valid_price(text("free").as_ref()));
        assert!(is_valid_price(text("0,00").as_ref()));
        assert!(is_valid_price(text(" ").as_ref()));
    }

    #[test]
    fn coercion_separates_numbers_from_malformed_text() {
        assert_eq!(coerce_price(text("12.5").as_ref()), PriceValue::Number(12.5));
        assert_eq!(coerce_price(Some(&Scalar::Number(7.0))), PriceValue::Number(7.0));
        assert_eq!(coerce_price(text("free").as_ref()), PriceValue::Unparseable);
        assert_eq!(coerce_price(text("  ").as_ref()), PriceValue::Number(0.0));
    }
}
