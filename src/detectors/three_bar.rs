//! Three-candle pattern rules.
//!
//! CDLGAPSIDESIDEWHITE, CDL2CROWS, CDL3BLACKCROWS, CDL3WHITESOLDIERS,
//! CDL3INSIDE, CDL3OUTSIDE, CDL3STARSINSOUTH, CDLMORNINGSTAR,
//! CDLMORNINGDOJISTAR, CDLEVENINGSTAR, CDLEVENINGDOJISTAR, CDLABANDONEDBABY,
//! CDLADVANCEBLOCK, CDLSTALLEDPATTERN, CDLSTICKSANDWICH, CDLTASUKIGAP,
//! CDLTRISTAR, CDLUNIQUE3RIVER, CDLUPSIDEGAP2CROWS, CDLIDENTICAL3CROWS,
//! CDLXSIDEGAP3METHODS, CDLHIKKAKE.
//!
//! Windows are `[first, second, third]`, oldest first. Star patterns use the
//! real-body gap (body entirely beyond the neighbor's body); the abandoned
//! baby demands the full-range gap.

use super::helpers::{
    body_gap_down, body_gap_up, gap_down, gap_up, is_doji, is_long_body, is_short_body,
    lower_very_short, prices_equal, prices_near, upper_very_short, NEAR_RATIO, SHADOW_LONG_RATIO,
};
use super::DetectorResult;
use crate::Candle;

/// Morning/evening star penetration: the third close must retrace at least
/// this fraction of the first body.
const STAR_PENETRATION: f64 = 0.3;

/// CDLGAPSIDESIDEWHITE: two similar white candles side by side, both gapping
/// (up or down) from the first bar's body.
pub fn gap_side_side_white(w: &[Candle]) -> DetectorResult {
    let [a, b, c] = w else { return Ok(0) };
    if !b.is_bullish() || !c.is_bullish() {
        return Ok(0);
    }
    if !prices_near(b.body(), c.body(), b) || !prices_near(c.open, b.open, b) {
        return Ok(0);
    }
    if body_gap_up(a, b) && body_gap_up(a, c) {
        return Ok(100);
    }
    if body_gap_down(a, b) && body_gap_down(a, c) {
        return Ok(-100);
    }
    Ok(0)
}

/// CDL2CROWS: a long white candle, a black candle gapping above it, and a
/// second black candle opening inside the first crow's body and closing
/// inside the white body.
pub fn two_crows(w: &[Candle]) -> DetectorResult {
    let [a, b, c] = w else { return Ok(0) };
    Ok(
        if a.is_bullish()
            && is_long_body(a)
            && b.is_bearish()
            && body_gap_up(a, b)
            && c.is_bearish()
            && c.open > b.close
            && c.open < b.open
            && c.close > a.open
            && c.close < a.close
        {
            -100
        } else {
            0
        },
    )
}

/// CDL3BLACKCROWS: three black candles with declining closes, each opening
/// within the prior body and closing at its low.
pub fn three_black_crows(w: &[Candle]) -> DetectorResult {
    let [a, b, c] = w else { return Ok(0) };
    if !a.is_bearish() || !b.is_bearish() || !c.is_bearish() {
        return Ok(0);
    }
    if b.close >= a.close || c.close >= b.close {
        return Ok(0);
    }
    if b.open >= a.open || b.open <= a.close || c.open >= b.open || c.open <= b.close {
        return Ok(0);
    }
    Ok(if lower_very_short(a) && lower_very_short(b) && lower_very_short(c) {
        -100
    } else {
        0
    })
}

/// CDL3WHITESOLDIERS: three white candles with rising closes, each opening
/// within the prior body and closing at its high; the last body is no dwarf.
pub fn three_white_soldiers(w: &[Candle]) -> DetectorResult {
    let [a, b, c] = w else { return Ok(0) };
    if !a.is_bullish() || !b.is_bullish() || !c.is_bullish() {
        return Ok(0);
    }
    if b.close <= a.close || c.close <= b.close {
        return Ok(0);
    }
    if b.open <= a.open || b.open >= a.close || c.open <= b.open || c.open >= b.close {
        return Ok(0);
    }
    if !upper_very_short(a) || !upper_very_short(b) || !upper_very_short(c) {
        return Ok(0);
    }
    Ok(if is_short_body(c) { 0 } else { 100 })
}

/// CDL3INSIDE: harami (long body, short body strictly inside) confirmed by
/// the third close beyond the first open.
pub fn three_inside(w: &[Candle]) -> DetectorResult {
    let [a, b, c] = w else { return Ok(0) };
    if !is_long_body(a)
        || !is_short_body(b)
        || b.body_top() >= a.body_top()
        || b.body_bottom() <= a.body_bottom()
    {
        return Ok(0);
    }
    if a.is_bearish() && c.is_bullish() && c.close > a.open {
        return Ok(100);
    }
    if a.is_bullish() && c.is_bearish() && c.close < a.open {
        return Ok(-100);
    }
    Ok(0)
}

/// CDL3OUTSIDE: engulfing confirmed by the third close beyond the second.
pub fn three_outside(w: &[Candle]) -> DetectorResult {
    let [a, b, c] = w else { return Ok(0) };
    if a.is_bearish() && b.is_bullish() && b.open < a.close && b.close > a.open && c.close > b.close
    {
        return Ok(100);
    }
    if a.is_bullish() && b.is_bearish() && b.open > a.close && b.close < a.open && c.close < b.close
    {
        return Ok(-100);
    }
    Ok(0)
}

/// CDL3STARSINSOUTH: a long-shadowed black candle, a smaller black candle
/// holding a higher low, and a small shadowless black candle inside the
/// second's range — a decelerating decline.
pub fn three_stars_in_south(w: &[Candle]) -> DetectorResult {
    let [a, b, c] = w else { return Ok(0) };
    if !a.is_bearish() || !b.is_bearish() || !c.is_bearish() {
        return Ok(0);
    }
    if is_short_body(a) || a.lower_shadow() < SHADOW_LONG_RATIO * a.range() {
        return Ok(0);
    }
    if b.body() >= a.body() || b.low <= a.low || b.open > a.high || b.open < a.low {
        return Ok(0);
    }
    Ok(
        if upper_very_short(c)
            && lower_very_short(c)
            && c.high <= b.high
            && c.low >= b.low
        {
            100
        } else {
            0
        },
    )
}

/// CDLMORNINGSTAR: long black candle, short body gapping below it, then a
/// white candle closing well into the first body.
pub fn morning_star(w: &[Candle]) -> DetectorResult {
    let [a, b, c] = w else { return Ok(0) };
    Ok(
        if a.is_bearish()
            && is_long_body(a)
            && is_short_body(b)
            && body_gap_down(a, b)
            && c.is_bullish()
            && c.close > a.close + STAR_PENETRATION * a.body()
        {
            100
        } else {
            0
        },
    )
}

/// CDLMORNINGDOJISTAR: morning star whose middle candle is a doji.
pub fn morning_doji_star(w: &[Candle]) -> DetectorResult {
    let [a, b, c] = w else { return Ok(0) };
    Ok(
        if a.is_bearish()
            && is_long_body(a)
            && is_doji(b)
            && body_gap_down(a, b)
            && c.is_bullish()
            && c.close > a.close + STAR_PENETRATION * a.body()
        {
            100
        } else {
            0
        },
    )
}

/// CDLEVENINGSTAR: long white candle, short body gapping above it, then a
/// black candle closing well into the first body.
pub fn evening_star(w: &[Candle]) -> DetectorResult {
    let [a, b, c] = w else { return Ok(0) };
    Ok(
        if a.is_bullish()
            && is_long_body(a)
            && is_short_body(b)
            && body_gap_up(a, b)
            && c.is_bearish()
            && c.close < a.close - STAR_PENETRATION * a.body()
        {
            -100
        } else {
            0
        },
    )
}

/// CDLEVENINGDOJISTAR: evening star whose middle candle is a doji.
pub fn evening_doji_star(w: &[Candle]) -> DetectorResult {
    let [a, b, c] = w else { return Ok(0) };
    Ok(
        if a.is_bullish()
            && is_long_body(a)
            && is_doji(b)
            && body_gap_up(a, b)
            && c.is_bearish()
            && c.close < a.close - STAR_PENETRATION * a.body()
        {
            -100
        } else {
            0
        },
    )
}

/// CDLABANDONEDBABY: a doji isolated by full-range gaps on both sides.
/// Bullish below a black candle, bearish above a white one.
pub fn abandoned_baby(w: &[Candle]) -> DetectorResult {
    let [a, b, c] = w else { return Ok(0) };
    if !is_doji(b) {
        return Ok(0);
    }
    if a.is_bearish() && is_long_body(a) && gap_down(a, b) && c.is_bullish() && gap_up(b, c) {
        return Ok(100);
    }
    if a.is_bullish() && is_long_body(a) && gap_up(a, b) && c.is_bearish() && gap_down(b, c) {
        return Ok(-100);
    }
    Ok(0)
}

/// CDLADVANCEBLOCK: three advancing white candles whose bodies shrink while
/// upper shadows grow — the rally is running out of buyers.
pub fn advance_block(w: &[Candle]) -> DetectorResult {
    let [a, b, c] = w else { return Ok(0) };
    if !a.is_bullish() || !b.is_bullish() || !c.is_bullish() {
        return Ok(0);
    }
    if b.close <= a.close || c.close <= b.close {
        return Ok(0);
    }
    if b.open <= a.open || b.open >= a.close || c.open <= b.open || c.open >= b.close {
        return Ok(0);
    }
    if b.body() >= a.body() || c.body() >= b.body() {
        return Ok(0);
    }
    Ok(if !upper_very_short(b) && !upper_very_short(c) {
        -100
    } else {
        0
    })
}

/// CDLSTALLEDPATTERN: two long advancing white candles, then a small white
/// candle riding the second's close — deliberation before a top.
pub fn stalled_pattern(w: &[Candle]) -> DetectorResult {
    let [a, b, c] = w else { return Ok(0) };
    Ok(
        if a.is_bullish()
            && b.is_bullish()
            && c.is_bullish()
            && is_long_body(a)
            && is_long_body(b)
            && b.close > a.close
            && b.open > a.open
            && b.open < a.close
            && is_short_body(c)
            && c.close > b.close
            && c.open >= b.close - NEAR_RATIO * b.range()
        {
            -100
        } else {
            0
        },
    )
}

/// CDLSTICKSANDWICH: black candle, a white candle trading above its close,
/// then a black candle closing right back at the first close.
pub fn stick_sandwich(w: &[Candle]) -> DetectorResult {
    let [a, b, c] = w else { return Ok(0) };
    Ok(
        if a.is_bearish()
            && b.is_bullish()
            && b.low > a.close
            && c.is_bearish()
            && prices_equal(c.close, a.close, a)
        {
            100
        } else {
            0
        },
    )
}

/// CDLTASUKIGAP: a body gap continued by a same-direction candle, then an
/// opposite candle closing into — but not filling — the gap. The two candles
/// around the gap have near-equal bodies.
pub fn tasuki_gap(w: &[Candle]) -> DetectorResult {
    let [a, b, c] = w else { return Ok(0) };
    let band = NEAR_RATIO * b.range();

    // upside: white gap up, black tasuki
    if b.is_bullish() && c.is_bearish() && body_gap_up(a, b) {
        if c.open > b.open
            && c.open < b.close
            && c.close < b.open
            && c.close > a.body_top()
            && (b.body() - c.body()).abs() <= band
        {
            return Ok(100);
        }
        return Ok(0);
    }

    // downside: black gap down, white tasuki
    if b.is_bearish() && c.is_bullish() && body_gap_down(a, b) {
        if c.open < b.open
            && c.open > b.close
            && c.close > b.open
            && c.close < a.body_bottom()
            && (b.body() - c.body()).abs() <= band
        {
            return Ok(-100);
        }
    }
    Ok(0)
}

/// CDLTRISTAR: three dojis, the middle one's body gapping beyond both
/// neighbors. The bearish (gap-up) arm is evaluated first.
pub fn tristar(w: &[Candle]) -> DetectorResult {
    let [a, b, c] = w else { return Ok(0) };
    if !is_doji(a) || !is_doji(b) || !is_doji(c) {
        return Ok(0);
    }
    if body_gap_up(a, b) && c.body_top() < b.body_top() {
        return Ok(-100);
    }
    if body_gap_down(a, b) && c.body_bottom() > b.body_bottom() {
        return Ok(100);
    }
    Ok(0)
}

/// CDLUNIQUE3RIVER: long black candle; a black harami-like candle closing
/// higher but probing a new low; a small white candle opening above that low.
pub fn unique_three_river(w: &[Candle]) -> DetectorResult {
    let [a, b, c] = w else { return Ok(0) };
    Ok(
        if a.is_bearish()
            && is_long_body(a)
            && b.is_bearish()
            && b.close > a.close
            && b.open <= a.open
            && b.low < a.low
            && c.is_bullish()
            && is_short_body(c)
            && c.open > b.low
        {
            100
        } else {
            0
        },
    )
}

/// CDLUPSIDEGAP2CROWS: a gap-up black candle engulfed by a second black
/// candle that still closes above the white candle's close.
pub fn upside_gap_two_crows(w: &[Candle]) -> DetectorResult {
    let [a, b, c] = w else { return Ok(0) };
    Ok(
        if a.is_bullish()
            && is_long_body(a)
            && b.is_bearish()
            && body_gap_up(a, b)
            && c.is_bearish()
            && c.open > b.open
            && c.close < b.close
            && c.close > a.close
        {
            -100
        } else {
            0
        },
    )
}

/// CDLIDENTICAL3CROWS: three black candles, each opening at the prior close.
pub fn identical_three_crows(w: &[Candle]) -> DetectorResult {
    let [a, b, c] = w else { return Ok(0) };
    Ok(
        if a.is_bearish()
            && b.is_bearish()
            && c.is_bearish()
            && b.close < a.close
            && c.close < b.close
            && prices_equal(b.open, a.close, a)
            && prices_equal(c.open, b.close, b)
        {
            -100
        } else {
            0
        },
    )
}

/// CDLXSIDEGAP3METHODS: a body gap between two same-color candles, closed by
/// an opposite candle that opens in the second body and closes in the first.
pub fn xside_gap_three_methods(w: &[Candle]) -> DetectorResult {
    let [a, b, c] = w else { return Ok(0) };
    if a.is_bullish() != b.is_bullish() || b.is_bullish() == c.is_bullish() {
        return Ok(0);
    }
    if c.open <= b.body_bottom() || c.open >= b.body_top() {
        return Ok(0);
    }
    if c.close <= a.body_bottom() || c.close >= a.body_top() {
        return Ok(0);
    }
    if a.is_bullish() && body_gap_up(a, b) {
        return Ok(100);
    }
    if a.is_bearish() && body_gap_down(a, b) {
        return Ok(-100);
    }
    Ok(0)
}

/// CDLHIKKAKE: an inside bar followed by a false breakout — both extremes of
/// the third bar shift below (bullish trap) or above (bearish trap) the
/// inside bar.
pub fn hikkake(w: &[Candle]) -> DetectorResult {
    let [a, b, c] = w else { return Ok(0) };
    if b.high >= a.high || b.low <= a.low {
        return Ok(0);
    }
    if c.high < b.high && c.low < b.low {
        return Ok(100);
    }
    if c.high > b.high && c.low > b.low {
        return Ok(-100);
    }
    Ok(0)
}
