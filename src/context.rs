//! Precision and rounding control for multi-step decimal arithmetic.
//!
//! The context type is [`bigdecimal::Context`]: a decimal digit precision plus
//! a [`RoundingMode`]. It is accepted opaquely by every `_with` operation in
//! this crate and funneled through [`round`], the single rounding primitive.

use bigdecimal::BigDecimal;

pub use bigdecimal::{Context, RoundingMode};

/// Rounds `value` to the context's digit precision with its rounding mode.
///
/// This is the per-step rounding applied by every context-aware reduction
/// (dot products, norm sums): intermediate results are rounded as they are
/// produced, not only at the end, so repeated arithmetic cannot grow the
/// representation without bound.
#[must_use]
pub fn round(ctx: &Context, value: BigDecimal) -> BigDecimal {
    value.with_precision_round(ctx.precision(), ctx.rounding_mode())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::num::NonZeroU64;
    use std::str::FromStr;

    fn ctx(digits: u64, mode: RoundingMode) -> Context {
        Context::new(NonZeroU64::new(digits).expect("nonzero digits"), mode)
    }

    #[test]
    fn round_truncates_to_digit_precision() {
        let value = BigDecimal::from_str("2.893730").expect("valid decimal");
        let rounded = round(&ctx(3, RoundingMode::HalfUp), value);
        assert_eq!(rounded, BigDecimal::from_str("2.89").expect("valid decimal"));
    }

    #[test]
    fn round_half_up_at_boundary() {
        let value = BigDecimal::from_str("1.250").expect("valid decimal");
        assert_eq!(
            round(&ctx(2, RoundingMode::HalfUp), value.clone()),
            BigDecimal::from_str("1.3").expect("valid decimal")
        );
        assert_eq!(
            round(&ctx(2, RoundingMode::HalfEven), value),
            BigDecimal::from_str("1.2").expect("valid decimal")
        );
    }

    #[test]
    fn round_is_identity_below_precision() {
        let value = BigDecimal::from_str("1.5").expect("valid decimal");
        assert_eq!(round(&ctx(10, RoundingMode::HalfEven), value.clone()), value);
    }
}
