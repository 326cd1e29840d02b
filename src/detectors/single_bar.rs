//! One-candle pattern rules.
//!
//! CDLDOJI, CDLDRAGONFLYDOJI, CDLGRAVESTONEDOJI, CDLLONGLEGGEDDOJI,
//! CDLRICKSHAWMAN, CDLTAKURI, CDLMARUBOZU, CDLCLOSINGMARUBOZU, CDLBELTHOLD,
//! CDLLONGLINE, CDLSHORTLINE, CDLSPINNINGTOP, CDLHIGHWAVE.
//!
//! Color-signed patterns (marubozu family, lines, spinning top, high wave)
//! report the TA-Lib candle color: close at or above open is bullish. That is
//! the fixed tie-break for a zero-body bar.

use super::helpers::{
    color, div, is_doji, is_long_body, is_short_body, lower_very_short, shadow_longer_than_body,
    shadow_twice_body, upper_very_short, DOJI_RATIO, NEAR_RATIO, SHADOW_LONG_RATIO,
    SHADOW_VERY_LONG_RATIO,
};
use super::DetectorResult;
use crate::Candle;

/// CDLDOJI: real body within a tenth of the bar's range.
pub fn doji(w: &[Candle]) -> DetectorResult {
    let [c] = w else { return Ok(0) };
    Ok(if is_doji(c) { 100 } else { 0 })
}

/// CDLDRAGONFLYDOJI: doji with no upper shadow and a meaningful lower shadow.
///
/// The upper-shadow condition is evaluated first; a zero-range bar satisfies
/// it but fails the lower-shadow condition, so it matches neither dragonfly
/// nor gravestone.
pub fn dragonfly_doji(w: &[Candle]) -> DetectorResult {
    let [c] = w else { return Ok(0) };
    Ok(if is_doji(c) && upper_very_short(c) && !lower_very_short(c) {
        100
    } else {
        0
    })
}

/// CDLGRAVESTONEDOJI: doji with no lower shadow and a meaningful upper shadow.
pub fn gravestone_doji(w: &[Candle]) -> DetectorResult {
    let [c] = w else { return Ok(0) };
    Ok(if is_doji(c) && lower_very_short(c) && !upper_very_short(c) {
        100
    } else {
        0
    })
}

/// CDLLONGLEGGEDDOJI: doji with both shadows long.
///
/// The shadow proportions are genuine ratios, so a zero-range bar (which
/// still counts as a doji) faults here and is contained by the scan engine.
pub fn long_legged_doji(w: &[Candle]) -> DetectorResult {
    let [c] = w else { return Ok(0) };
    if !is_doji(c) {
        return Ok(0);
    }
    let upper = div(c.upper_shadow(), c.range())?;
    let lower = div(c.lower_shadow(), c.range())?;
    Ok(if upper >= SHADOW_LONG_RATIO && lower >= SHADOW_LONG_RATIO {
        100
    } else {
        0
    })
}

/// CDLRICKSHAWMAN: doji with both shadows longer than the body and the body
/// sitting at the middle of the range.
pub fn rickshaw_man(w: &[Candle]) -> DetectorResult {
    let [c] = w else { return Ok(0) };
    let range = c.range();
    if range <= 0.0 || !is_doji(c) {
        return Ok(0);
    }
    if !shadow_longer_than_body(c.upper_shadow(), c) || !shadow_longer_than_body(c.lower_shadow(), c)
    {
        return Ok(0);
    }
    let body_mid = (c.open + c.close) / 2.0;
    let range_mid = c.low + range / 2.0;
    Ok(if (body_mid - range_mid).abs() <= NEAR_RATIO * range {
        100
    } else {
        0
    })
}

/// CDLTAKURI: dragonfly with a very long lower shadow.
pub fn takuri(w: &[Candle]) -> DetectorResult {
    let [c] = w else { return Ok(0) };
    Ok(
        if c.range() > 0.0
            && is_doji(c)
            && upper_very_short(c)
            && c.lower_shadow() >= SHADOW_VERY_LONG_RATIO * c.range()
        {
            100
        } else {
            0
        },
    )
}

/// CDLMARUBOZU: long body, both shadows very short. Signed by candle color.
pub fn marubozu(w: &[Candle]) -> DetectorResult {
    let [c] = w else { return Ok(0) };
    Ok(if is_long_body(c) && upper_very_short(c) && lower_very_short(c) {
        color(c) * 100
    } else {
        0
    })
}

/// CDLCLOSINGMARUBOZU: long body with no shadow on the close side.
pub fn closing_marubozu(w: &[Candle]) -> DetectorResult {
    let [c] = w else { return Ok(0) };
    if !is_long_body(c) {
        return Ok(0);
    }
    let clean_close_side = if color(c) > 0 {
        upper_very_short(c)
    } else {
        lower_very_short(c)
    };
    Ok(if clean_close_side { color(c) * 100 } else { 0 })
}

/// CDLBELTHOLD: long body with no shadow on the open side.
pub fn belt_hold(w: &[Candle]) -> DetectorResult {
    let [c] = w else { return Ok(0) };
    if !is_long_body(c) {
        return Ok(0);
    }
    let clean_open_side = if color(c) > 0 {
        lower_very_short(c)
    } else {
        upper_very_short(c)
    };
    Ok(if clean_open_side { color(c) * 100 } else { 0 })
}

/// CDLLONGLINE: real body dominates the range. Signed by candle color.
pub fn long_line(w: &[Candle]) -> DetectorResult {
    let [c] = w else { return Ok(0) };
    Ok(if is_long_body(c) { color(c) * 100 } else { 0 })
}

/// CDLSHORTLINE: short — but not doji-thin — real body.
///
/// Ratio thresholds alone cannot demand short shadows as well (body and
/// shadows sum to the range), so the short line is the band between the doji
/// and short-body thresholds.
pub fn short_line(w: &[Candle]) -> DetectorResult {
    let [c] = w else { return Ok(0) };
    Ok(if is_short_body(c) && c.body() > DOJI_RATIO * c.range() {
        color(c) * 100
    } else {
        0
    })
}

/// CDLSPINNINGTOP: short body with both shadows longer than the body.
pub fn spinning_top(w: &[Candle]) -> DetectorResult {
    let [c] = w else { return Ok(0) };
    let body = c.body();
    Ok(
        if is_short_body(c) && c.range() > 0.0 && c.upper_shadow() > body && c.lower_shadow() > body
        {
            color(c) * 100
        } else {
            0
        },
    )
}

/// CDLHIGHWAVE: short body with both shadows at least twice the body.
pub fn high_wave(w: &[Candle]) -> DetectorResult {
    let [c] = w else { return Ok(0) };
    Ok(
        if is_short_body(c)
            && c.range() > 0.0
            && shadow_twice_body(c.upper_shadow(), c)
            && shadow_twice_body(c.lower_shadow(), c)
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
    fn test_doji_fires_on_thin_body() {
        let w = [Candle::new(100.0, 101.0, 99.0, 100.05)];
        assert_eq!(doji(&w), Ok(100));
    }

    #[test]
    fn test_doji_rejects_real_body() {
        let w = [Candle::new(100.0, 101.0, 99.0, 100.8)];
        assert_eq!(doji(&w), Ok(0));
    }

    #[test]
    fn test_dragonfly_and_gravestone_are_exclusive() {
        let dragonfly = [Candle::new(80.0, 80.1, 70.0, 80.0)];
        assert_eq!(dragonfly_doji(&dragonfly), Ok(100));
        assert_eq!(gravestone_doji(&dragonfly), Ok(0));

        let gravestone = [Candle::new(120.0, 130.0, 119.9, 120.0)];
        assert_eq!(gravestone_doji(&gravestone), Ok(100));
        assert_eq!(dragonfly_doji(&gravestone), Ok(0));

        // degenerate zero-range bar matches neither
        let flat = [Candle::new(100.0, 100.0, 100.0, 100.0)];
        assert_eq!(dragonfly_doji(&flat), Ok(0));
        assert_eq!(gravestone_doji(&flat), Ok(0));
    }

    #[test]
    fn test_long_legged_requires_both_shadows() {
        let both = [Candle::new(100.0, 101.0, 99.0, 100.0)];
        assert_eq!(long_legged_doji(&both), Ok(100));

        let one_sided = [Candle::new(100.0, 101.8, 99.8, 100.0)];
        assert_eq!(long_legged_doji(&one_sided), Ok(0));
    }

    #[test]
    fn test_long_legged_faults_on_zero_range() {
        // zero range is a doji, but its shadow ratios are undefined
        let flat = [Candle::new(100.0, 100.0, 100.0, 100.0)];
        assert!(long_legged_doji(&flat).is_err());
    }

    #[test]
    fn test_rickshaw_man_needs_centered_body() {
        let centered = [Candle::new(100.0, 101.0, 99.0, 100.0)];
        assert_eq!(rickshaw_man(&centered), Ok(100));

        // legs on both sides but body riding the top of the range
        let off_center = [Candle::new(100.55, 100.9, 99.0, 100.6)];
        assert_eq!(rickshaw_man(&off_center), Ok(0));
    }

    #[test]
    fn test_takuri_needs_very_long_lower_shadow() {
        let w = [Candle::new(80.0, 80.1, 75.0, 80.05)];
        assert_eq!(takuri(&w), Ok(100));
    }

    #[test]
    fn test_marubozu_signed_by_color() {
        let bull = [Candle::new(100.0, 110.0, 100.0, 110.0)];
        assert_eq!(marubozu(&bull), Ok(100));

        let bear = [Candle::new(110.0, 110.0, 100.0, 100.0)];
        assert_eq!(marubozu(&bear), Ok(-100));

        let shadowed = [Candle::new(100.0, 112.0, 98.0, 110.0)];
        assert_eq!(marubozu(&shadowed), Ok(0));
    }

    #[test]
    fn test_closing_marubozu_checks_close_side_only() {
        // bullish: flat top, a real shadow at the bottom is allowed
        let w = [Candle::new(101.5, 110.0, 100.0, 110.0)];
        assert_eq!(closing_marubozu(&w), Ok(100));
        assert_eq!(marubozu(&w), Ok(0));
    }

    #[test]
    fn test_belt_hold_checks_open_side_only() {
        // bearish: opens at the high, lower shadow allowed
        let w = [Candle::new(110.0, 110.0, 100.0, 101.5)];
        assert_eq!(belt_hold(&w), Ok(-100));
        assert_eq!(marubozu(&w), Ok(0));
    }

    #[test]
    fn test_short_line_band_excludes_doji() {
        let doji_bar = [Candle::new(100.0, 101.0, 99.0, 100.05)];
        assert_eq!(short_line(&doji_bar), Ok(0));

        let short_bar = [Candle::new(100.0, 101.0, 99.0, 100.4)];
        assert_eq!(short_line(&short_bar), Ok(100));
    }

    #[test]
    fn test_spinning_top_and_high_wave() {
        let spin = [Candle::new(100.0, 101.2, 98.8, 100.5)];
        assert_eq!(spinning_top(&spin), Ok(100));
        assert_eq!(high_wave(&spin), Ok(0)); // shadows not twice the body

        let wave = [Candle::new(100.0, 101.6, 98.4, 100.5)];
        assert_eq!(high_wave(&wave), Ok(100));
        // the spinning-top shape also holds on a high-wave bar
        assert_eq!(spinning_top(&wave), Ok(100));
    }

    #[test]
    fn test_wrong_window_length_is_no_detection() {
        let w = [
            Candle::new(100.0, 101.0, 99.0, 100.0),
            Candle::new(100.0, 101.0, 99.0, 100.0),
        ];
        assert_eq!(doji(&w), Ok(0));
    }
}
