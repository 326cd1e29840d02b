//! Shared shape predicates and thresholds.
//!
//! Detectors classify a candle's anatomy against its own high-low range, so
//! every threshold here is a ratio of that range (or of the real body for the
//! "shadow longer than body" checks). A zero-range bar has zero body and zero
//! shadows and therefore counts as a doji with very short shadows.

use crate::{Candle, DetectorFault};

/// Body is doji-thin: body ≤ 0.1 × range.
pub const DOJI_RATIO: f64 = 0.1;
/// Body is short: body ≤ 0.3 × range.
pub const BODY_SHORT_RATIO: f64 = 0.3;
/// Body is long: body ≥ 0.7 × range.
pub const BODY_LONG_RATIO: f64 = 0.7;
/// Shadow is long: shadow ≥ 0.3 × range.
pub const SHADOW_LONG_RATIO: f64 = 0.3;
/// Shadow is very long: shadow ≥ 0.4 × range.
pub const SHADOW_VERY_LONG_RATIO: f64 = 0.4;
/// Shadow is very short: shadow ≤ 0.1 × range.
pub const SHADOW_VERY_SHORT_RATIO: f64 = 0.1;
/// Two prices are equal within 0.05 × reference range.
pub const EQUAL_RATIO: f64 = 0.05;
/// Two prices are near within 0.2 × reference range.
pub const NEAR_RATIO: f64 = 0.2;

/// Real body within the doji band. A zero-body bar is always a doji.
#[inline]
pub fn is_doji(c: &Candle) -> bool {
    c.body() <= DOJI_RATIO * c.range()
}

/// Real body within the short band (includes doji-thin bodies).
#[inline]
pub fn is_short_body(c: &Candle) -> bool {
    c.body() <= BODY_SHORT_RATIO * c.range()
}

/// Real body dominates the range.
#[inline]
pub fn is_long_body(c: &Candle) -> bool {
    c.range() > 0.0 && c.body() >= BODY_LONG_RATIO * c.range()
}

#[inline]
pub fn upper_very_short(c: &Candle) -> bool {
    c.upper_shadow() <= SHADOW_VERY_SHORT_RATIO * c.range()
}

#[inline]
pub fn lower_very_short(c: &Candle) -> bool {
    c.lower_shadow() <= SHADOW_VERY_SHORT_RATIO * c.range()
}

/// Shadow exceeds the real body (TA-Lib ShadowLong with period 0: when the
/// body is zero any positive shadow qualifies).
#[inline]
pub fn shadow_longer_than_body(shadow: f64, c: &Candle) -> bool {
    shadow > c.body()
}

/// Shadow at least twice the real body.
#[inline]
pub fn shadow_twice_body(shadow: f64, c: &Candle) -> bool {
    shadow > 2.0 * c.body()
}

/// Long body with both shadows very short.
#[inline]
pub fn is_marubozu(c: &Candle) -> bool {
    is_long_body(c) && upper_very_short(c) && lower_very_short(c)
}

/// Prices equal within the equality band of `reference`'s range.
#[inline]
pub fn prices_equal(a: f64, b: f64, reference: &Candle) -> bool {
    (a - b).abs() <= EQUAL_RATIO * reference.range()
}

/// Prices near within the nearness band of `reference`'s range.
#[inline]
pub fn prices_near(a: f64, b: f64, reference: &Candle) -> bool {
    (a - b).abs() <= NEAR_RATIO * reference.range()
}

/// Real body of `later` sits entirely above the real body of `earlier`.
#[inline]
pub fn body_gap_up(earlier: &Candle, later: &Candle) -> bool {
    later.body_bottom() > earlier.body_top()
}

/// Real body of `later` sits entirely below the real body of `earlier`.
#[inline]
pub fn body_gap_down(earlier: &Candle, later: &Candle) -> bool {
    later.body_top() < earlier.body_bottom()
}

/// Full-range gap: `later` trades entirely above `earlier`.
#[inline]
pub fn gap_up(earlier: &Candle, later: &Candle) -> bool {
    later.low > earlier.high
}

/// Full-range gap: `later` trades entirely below `earlier`.
#[inline]
pub fn gap_down(earlier: &Candle, later: &Candle) -> bool {
    later.high < earlier.low
}

/// TA-Lib candle color: close at or above open counts white (+1).
#[inline]
pub fn color(c: &Candle) -> i32 {
    if c.close >= c.open {
        1
    } else {
        -1
    }
}

/// Checked division for genuine ratio computations. A zero or degenerate
/// denominator yields a fault for the scan engine to contain.
#[inline]
pub fn div(num: f64, den: f64) -> std::result::Result<f64, DetectorFault> {
    let q = num / den;
    if q.is_finite() {
        Ok(q)
    } else {
        Err(DetectorFault)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_range_bar_is_doji_with_very_short_shadows() {
        let c = Candle::new(5.0, 5.0, 5.0, 5.0);
        assert!(is_doji(&c));
        assert!(upper_very_short(&c));
        assert!(lower_very_short(&c));
        assert!(!is_long_body(&c));
    }

    #[test]
    fn test_body_bands() {
        let long = Candle::new(100.0, 110.0, 99.0, 109.0); // body 9, range 11
        assert!(is_long_body(&long));
        assert!(!is_short_body(&long));

        let short = Candle::new(100.0, 104.0, 96.0, 101.0); // body 1, range 8
        assert!(is_short_body(&short));
        assert!(!is_long_body(&short));
        assert!(!is_doji(&short));
    }

    #[test]
    fn test_gap_predicates() {
        let a = Candle::new(10.0, 11.0, 9.0, 10.5);
        let b = Candle::new(11.0, 12.5, 10.9, 12.0);
        assert!(body_gap_up(&a, &b));
        assert!(!gap_up(&a, &b)); // lows overlap the earlier high
        assert!(body_gap_down(&b, &a));
    }

    #[test]
    fn test_div_faults_on_zero_denominator() {
        assert!(div(1.0, 0.0).is_err());
        assert!(div(0.0, 0.0).is_err());
        assert_eq!(div(1.0, 2.0), Ok(0.5));
    }
}
