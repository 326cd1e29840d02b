//! Two-candle pattern rules.
//!
//! CDLHAMMER, CDLHANGINGMAN, CDLINVERTEDHAMMER, CDLSHOOTINGSTAR,
//! CDLENGULFING, CDLHARAMI, CDLHARAMICROSS, CDLPIERCING, CDLDARKCLOUDCOVER,
//! CDLDOJISTAR, CDLCOUNTERATTACK, CDLINNECK, CDLONNECK, CDLTHRUSTING,
//! CDLKICKING, CDLKICKINGBYLENGTH, CDLMATCHINGLOW, CDLHOMINGPIGEON,
//! CDLSEPARATINGLINES.
//!
//! Windows are `[prev, curr]`. The hammer family lives here rather than in
//! `single_bar` because its position checks (body near the prior bar's low or
//! high, real-body gaps) need the preceding candle. Detection is shape-only:
//! no preceding-trend context is consulted.

use super::helpers::{
    body_gap_down, body_gap_up, color, is_doji, is_long_body, is_marubozu, is_short_body,
    lower_very_short, prices_equal, shadow_twice_body, upper_very_short, EQUAL_RATIO, NEAR_RATIO,
};
use super::DetectorResult;
use crate::Candle;

/// CDLHAMMER: small body at the top of the range, lower shadow at least twice
/// the body, negligible upper shadow, body at or near the prior bar's low.
pub fn hammer(w: &[Candle]) -> DetectorResult {
    let [prev, c] = w else { return Ok(0) };
    Ok(
        if is_short_body(c)
            && c.range() > 0.0
            && shadow_twice_body(c.lower_shadow(), c)
            && upper_very_short(c)
            && c.body_bottom() <= prev.low + NEAR_RATIO * prev.range()
        {
            100
        } else {
            0
        },
    )
}

/// CDLHANGINGMAN: hammer shape with the body at or near the prior bar's high.
pub fn hanging_man(w: &[Candle]) -> DetectorResult {
    let [prev, c] = w else { return Ok(0) };
    Ok(
        if is_short_body(c)
            && c.range() > 0.0
            && shadow_twice_body(c.lower_shadow(), c)
            && upper_very_short(c)
            && c.body_bottom() >= prev.high - NEAR_RATIO * prev.range()
        {
            -100
        } else {
            0
        },
    )
}

/// CDLINVERTEDHAMMER: small body gapping down from the prior body, upper
/// shadow at least twice the body, negligible lower shadow.
pub fn inverted_hammer(w: &[Candle]) -> DetectorResult {
    let [prev, c] = w else { return Ok(0) };
    Ok(
        if body_gap_down(prev, c)
            && is_short_body(c)
            && c.range() > 0.0
            && shadow_twice_body(c.upper_shadow(), c)
            && lower_very_short(c)
        {
            100
        } else {
            0
        },
    )
}

/// CDLSHOOTINGSTAR: inverted-hammer shape gapping up from the prior body.
pub fn shooting_star(w: &[Candle]) -> DetectorResult {
    let [prev, c] = w else { return Ok(0) };
    Ok(
        if body_gap_up(prev, c)
            && is_short_body(c)
            && c.range() > 0.0
            && shadow_twice_body(c.upper_shadow(), c)
            && lower_very_short(c)
        {
            -100
        } else {
            0
        },
    )
}

/// CDLENGULFING: the current body strictly contains the prior body with the
/// opposite color. Bullish case is evaluated first.
pub fn engulfing(w: &[Candle]) -> DetectorResult {
    let [prev, c] = w else { return Ok(0) };
    if prev.is_bearish() && c.is_bullish() && c.open < prev.close && c.close > prev.open {
        return Ok(100);
    }
    if prev.is_bullish() && c.is_bearish() && c.open > prev.close && c.close < prev.open {
        return Ok(-100);
    }
    Ok(0)
}

/// CDLHARAMI: long body followed by a short body strictly inside it.
/// Signals against the first candle's color.
pub fn harami(w: &[Candle]) -> DetectorResult {
    let [prev, c] = w else { return Ok(0) };
    Ok(
        if is_long_body(prev)
            && is_short_body(c)
            && c.body_top() < prev.body_top()
            && c.body_bottom() > prev.body_bottom()
        {
            if prev.is_bearish() {
                100
            } else {
                -100
            }
        } else {
            0
        },
    )
}

/// CDLHARAMICROSS: harami whose second candle is a doji.
pub fn harami_cross(w: &[Candle]) -> DetectorResult {
    let [prev, c] = w else { return Ok(0) };
    Ok(
        if is_long_body(prev)
            && is_doji(c)
            && c.body_top() < prev.body_top()
            && c.body_bottom() > prev.body_bottom()
        {
            if prev.is_bearish() {
                100
            } else {
                -100
            }
        } else {
            0
        },
    )
}

/// CDLPIERCING: after a long black candle, a white candle opens below the
/// prior low and closes above the midpoint of the prior body but below the
/// prior open.
pub fn piercing(w: &[Candle]) -> DetectorResult {
    let [prev, c] = w else { return Ok(0) };
    Ok(
        if prev.is_bearish()
            && is_long_body(prev)
            && c.is_bullish()
            && c.open < prev.low
            && c.close > prev.close + 0.5 * prev.body()
            && c.close < prev.open
        {
            100
        } else {
            0
        },
    )
}

/// CDLDARKCLOUDCOVER: after a long white candle, a black candle opens above
/// the prior high and closes below the midpoint of the prior body but above
/// the prior open.
pub fn dark_cloud_cover(w: &[Candle]) -> DetectorResult {
    let [prev, c] = w else { return Ok(0) };
    Ok(
        if prev.is_bullish()
            && is_long_body(prev)
            && c.is_bearish()
            && c.open > prev.high
            && c.close < prev.close - 0.5 * prev.body()
            && c.close > prev.open
        {
            -100
        } else {
            0
        },
    )
}

/// CDLDOJISTAR: doji whose body gaps away from a long candle, in the
/// direction of that candle. A star above a white candle warns bearish, a
/// star below a black candle warns bullish.
pub fn doji_star(w: &[Candle]) -> DetectorResult {
    let [prev, c] = w else { return Ok(0) };
    if !is_long_body(prev) || !is_doji(c) {
        return Ok(0);
    }
    if prev.is_bullish() && body_gap_up(prev, c) {
        return Ok(-100);
    }
    if prev.is_bearish() && body_gap_down(prev, c) {
        return Ok(100);
    }
    Ok(0)
}

/// CDLCOUNTERATTACK: two long candles of opposite color closing at the same
/// price. Signed by the current candle's color.
pub fn counterattack(w: &[Candle]) -> DetectorResult {
    let [prev, c] = w else { return Ok(0) };
    Ok(
        if prev.is_bullish() != c.is_bullish()
            && prev.is_bearish() != c.is_bearish()
            && is_long_body(prev)
            && is_long_body(c)
            && prices_equal(prev.close, c.close, prev)
        {
            color(c) * 100
        } else {
            0
        },
    )
}

/// CDLINNECK: after a long black candle, a white candle opens below the prior
/// low and closes just barely into the prior body (at or marginally above the
/// prior close).
pub fn in_neck(w: &[Candle]) -> DetectorResult {
    let [prev, c] = w else { return Ok(0) };
    Ok(
        if prev.is_bearish()
            && is_long_body(prev)
            && c.is_bullish()
            && c.open < prev.low
            && c.close >= prev.close
            && c.close <= prev.close + EQUAL_RATIO * prev.range()
        {
            -100
        } else {
            0
        },
    )
}

/// CDLONNECK: like the in-neck but closing at the prior low instead of the
/// prior close.
pub fn on_neck(w: &[Candle]) -> DetectorResult {
    let [prev, c] = w else { return Ok(0) };
    Ok(
        if prev.is_bearish()
            && is_long_body(prev)
            && c.is_bullish()
            && c.open < prev.low
            && prices_equal(c.close, prev.low, prev)
        {
            -100
        } else {
            0
        },
    )
}

/// CDLTHRUSTING: after a long black candle, a white candle opens below the
/// prior low and closes clearly above the prior close but no higher than the
/// midpoint of the prior body. The equality band separates it from the
/// in-neck; the midpoint cap separates it from the piercing.
pub fn thrusting(w: &[Candle]) -> DetectorResult {
    let [prev, c] = w else { return Ok(0) };
    Ok(
        if prev.is_bearish()
            && is_long_body(prev)
            && c.is_bullish()
            && c.open < prev.low
            && c.close > prev.close + EQUAL_RATIO * prev.range()
            && c.close <= prev.close + 0.5 * prev.body()
        {
            -100
        } else {
            0
        },
    )
}

/// CDLKICKING: two opposite-color marubozu with a full gap between them, in
/// the direction of the second.
pub fn kicking(w: &[Candle]) -> DetectorResult {
    let [prev, c] = w else { return Ok(0) };
    if !is_marubozu(prev) || !is_marubozu(c) {
        return Ok(0);
    }
    if prev.is_bearish() && c.is_bullish() && c.low > prev.high {
        return Ok(100);
    }
    if prev.is_bullish() && c.is_bearish() && c.high < prev.low {
        return Ok(-100);
    }
    Ok(0)
}

/// CDLKICKINGBYLENGTH: kicking, signed by the color of the longer marubozu.
pub fn kicking_by_length(w: &[Candle]) -> DetectorResult {
    let [prev, c] = w else { return Ok(0) };
    if !is_marubozu(prev) || !is_marubozu(c) {
        return Ok(0);
    }
    let gapped = (prev.is_bearish() && c.is_bullish() && c.low > prev.high)
        || (prev.is_bullish() && c.is_bearish() && c.high < prev.low);
    if !gapped {
        return Ok(0);
    }
    let longer = if c.body() >= prev.body() { c } else { prev };
    Ok(color(longer) * 100)
}

/// CDLMATCHINGLOW: two black candles closing at the same price.
pub fn matching_low(w: &[Candle]) -> DetectorResult {
    let [prev, c] = w else { return Ok(0) };
    Ok(
        if prev.is_bearish() && c.is_bearish() && prices_equal(prev.close, c.close, prev) {
            100
        } else {
            0
        },
    )
}

/// CDLHOMINGPIGEON: a long black candle followed by a short black candle
/// whose body sits inside the first body.
pub fn homing_pigeon(w: &[Candle]) -> DetectorResult {
    let [prev, c] = w else { return Ok(0) };
    Ok(
        if prev.is_bearish()
            && c.is_bearish()
            && is_long_body(prev)
            && is_short_body(c)
            && c.open < prev.open
            && c.close > prev.close
        {
            100
        } else {
            0
        },
    )
}

/// CDLSEPARATINGLINES: opposite colors opening at the same price, the second
/// candle long and resuming its own direction. Signed by the current color.
pub fn separating_lines(w: &[Candle]) -> DetectorResult {
    let [prev, c] = w else { return Ok(0) };
    Ok(
        if prev.is_bullish() != c.is_bullish()
            && prev.is_bearish() != c.is_bearish()
            && prices_equal(c.open, prev.open, prev)
            && is_long_body(c)
        {
            color(c) * 100
        } else {
            0
        },
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hammer_at_prior_low() {
        let w = [
            Candle::new(62.0, 63.0, 60.0, 60.5),
            Candle::new(60.0, 60.1, 55.0, 60.05),
        ];
        assert_eq!(hammer(&w), Ok(100));
        assert_eq!(hanging_man(&w), Ok(0));
    }

    #[test]
    fn test_hanging_man_at_prior_high() {
        let w = [
            Candle::new(58.0, 60.2, 57.0, 59.5),
            Candle::new(60.0, 60.1, 55.0, 60.05),
        ];
        assert_eq!(hanging_man(&w), Ok(-100));
        assert_eq!(hammer(&w), Ok(0));
    }

    #[test]
    fn test_inverted_hammer_gaps_down() {
        let w = [
            Candle::new(62.0, 63.0, 60.0, 60.5),
            Candle::new(59.0, 62.0, 58.9, 59.3),
        ];
        assert_eq!(inverted_hammer(&w), Ok(100));
        assert_eq!(shooting_star(&w), Ok(0));
    }

    #[test]
    fn test_shooting_star_gaps_up() {
        let w = [
            Candle::new(58.0, 60.0, 57.0, 59.5),
            Candle::new(60.0, 63.0, 59.9, 60.3),
        ];
        assert_eq!(shooting_star(&w), Ok(-100));
        assert_eq!(inverted_hammer(&w), Ok(0));
    }

    #[test]
    fn test_bullish_engulfing() {
        let w = [
            Candle::new(10.0, 11.0, 9.0, 9.5),
            Candle::new(9.0, 12.0, 8.5, 11.5),
        ];
        assert_eq!(engulfing(&w), Ok(100));
    }

    #[test]
    fn test_bearish_engulfing() {
        let w = [
            Candle::new(9.5, 11.0, 9.0, 10.5),
            Candle::new(11.0, 11.5, 8.5, 9.0),
        ];
        assert_eq!(engulfing(&w), Ok(-100));
    }

    #[test]
    fn test_engulfing_requires_color_flip() {
        let w = [
            Candle::new(9.5, 11.0, 9.0, 10.5),
            Candle::new(9.0, 12.0, 8.5, 11.5),
        ];
        assert_eq!(engulfing(&w), Ok(0));
    }

    #[test]
    fn test_harami_and_harami_cross() {
        let prev = Candle::new(110.0, 110.5, 99.5, 100.0);

        let w = [prev, Candle::new(104.0, 106.5, 103.0, 105.0)];
        assert_eq!(harami(&w), Ok(100));
        assert_eq!(harami_cross(&w), Ok(0)); // second body is no doji

        let w = [prev, Candle::new(104.0, 105.0, 103.0, 104.1)];
        assert_eq!(harami_cross(&w), Ok(100));
    }

    #[test]
    fn test_piercing() {
        let w = [
            Candle::new(110.0, 111.0, 99.5, 100.0),
            Candle::new(99.0, 107.0, 98.5, 106.0),
        ];
        assert_eq!(piercing(&w), Ok(100));
    }

    #[test]
    fn test_dark_cloud_cover() {
        let w = [
            Candle::new(100.0, 110.5, 99.5, 110.0),
            Candle::new(111.0, 112.0, 102.0, 103.0),
        ];
        assert_eq!(dark_cloud_cover(&w), Ok(-100));
    }

    #[test]
    fn test_doji_star_signs_against_prior_trend() {
        let up = [
            Candle::new(100.0, 110.5, 99.5, 110.0),
            Candle::new(111.0, 112.0, 110.8, 111.05),
        ];
        assert_eq!(doji_star(&up), Ok(-100));

        let down = [
            Candle::new(110.0, 110.5, 99.5, 100.0),
            Candle::new(98.0, 99.2, 97.8, 98.05),
        ];
        assert_eq!(doji_star(&down), Ok(100));
    }

    #[test]
    fn test_counterattack_matches_closes() {
        let w = [
            Candle::new(110.0, 110.5, 99.5, 100.0),
            Candle::new(90.0, 100.6, 89.8, 100.2),
        ];
        assert_eq!(counterattack(&w), Ok(100));
    }

    #[test]
    fn test_neck_family_is_mutually_exclusive() {
        let prev = Candle::new(110.0, 111.0, 99.5, 100.0);

        let in_neck_bar = Candle::new(98.0, 100.5, 97.5, 100.3);
        assert_eq!(in_neck(&[prev, in_neck_bar]), Ok(-100));
        assert_eq!(on_neck(&[prev, in_neck_bar]), Ok(0));
        assert_eq!(thrusting(&[prev, in_neck_bar]), Ok(0));

        let on_neck_bar = Candle::new(98.0, 99.8, 97.5, 99.6);
        assert_eq!(on_neck(&[prev, on_neck_bar]), Ok(-100));
        assert_eq!(in_neck(&[prev, on_neck_bar]), Ok(0));

        let thrusting_bar = Candle::new(98.0, 104.0, 97.5, 103.0);
        assert_eq!(thrusting(&[prev, thrusting_bar]), Ok(-100));
        assert_eq!(in_neck(&[prev, thrusting_bar]), Ok(0));
        assert_eq!(piercing(&[prev, thrusting_bar]), Ok(0));
    }

    #[test]
    fn test_kicking_needs_gapping_marubozu() {
        let w = [
            Candle::new(110.0, 110.2, 100.0, 100.2),
            Candle::new(111.0, 121.0, 110.9, 120.9),
        ];
        assert_eq!(kicking(&w), Ok(100));
        assert_eq!(kicking_by_length(&w), Ok(100));
    }

    #[test]
    fn test_kicking_by_length_follows_longer_body() {
        // bearish marubozu is twice the size of the bullish one
        let w = [
            Candle::new(120.0, 120.2, 100.0, 100.1),
            Candle::new(121.0, 126.0, 120.9, 125.9),
        ];
        assert_eq!(kicking_by_length(&w), Ok(-100));
        // plain kicking still reports the second candle's direction
        assert_eq!(kicking(&w), Ok(100));
    }

    #[test]
    fn test_matching_low() {
        let w = [
            Candle::new(105.0, 105.5, 99.8, 100.0),
            Candle::new(103.0, 103.5, 99.9, 100.02),
        ];
        assert_eq!(matching_low(&w), Ok(100));
    }

    #[test]
    fn test_homing_pigeon() {
        let w = [
            Candle::new(110.0, 110.5, 99.5, 100.0),
            Candle::new(106.0, 107.0, 103.0, 104.8),
        ];
        assert_eq!(homing_pigeon(&w), Ok(100));
    }

    #[test]
    fn test_separating_lines() {
        let w = [
            Candle::new(100.0, 104.5, 99.5, 104.0),
            Candle::new(100.1, 100.6, 95.0, 95.5),
        ];
        assert_eq!(separating_lines(&w), Ok(-100));
    }
}
