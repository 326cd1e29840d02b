//! Four- and five-candle pattern rules.
//!
//! CDLHIKKAKEMOD, CDL3LINESTRIKE, CDLCONCEALBABYSWALL (4 bars);
//! CDLBREAKAWAY, CDLLADDERBOTTOM, CDLMATHOLD, CDLRISEFALL3METHODS (5 bars).

use super::helpers::{
    body_gap_down, body_gap_up, color, div, is_long_body, is_marubozu, is_short_body,
    upper_very_short, NEAR_RATIO, SHADOW_LONG_RATIO,
};
use super::DetectorResult;
use crate::Candle;

/// CDLHIKKAKEMOD: modified hikkake — two nested inside bars, the outer one
/// closing near the extreme the trap later breaks away from.
pub fn hikkake_mod(w: &[Candle]) -> DetectorResult {
    let [a, b, c, d] = w else { return Ok(0) };
    if b.high >= a.high || b.low <= a.low {
        return Ok(0);
    }
    if c.high >= b.high || c.low <= b.low {
        return Ok(0);
    }
    let band = NEAR_RATIO * b.range();
    if d.high < c.high && d.low < c.low && b.close <= b.low + band {
        return Ok(100);
    }
    if d.high > c.high && d.low > c.low && b.close >= b.high - band {
        return Ok(-100);
    }
    Ok(0)
}

/// CDL3LINESTRIKE: three same-color candles with progressing closes, each
/// opening within the prior body, then an opposite candle that opens beyond
/// the third close and strikes back through the first open. Signed by the
/// color of the first three.
pub fn three_line_strike(w: &[Candle]) -> DetectorResult {
    let [a, b, c, d] = w else { return Ok(0) };
    let ca = color(a);
    if color(b) != ca || color(c) != ca || color(d) == ca {
        return Ok(0);
    }
    if b.open <= a.body_bottom() || b.open >= a.body_top() {
        return Ok(0);
    }
    if c.open <= b.body_bottom() || c.open >= b.body_top() {
        return Ok(0);
    }
    if ca > 0 {
        Ok(
            if b.close > a.close && c.close > b.close && d.open > c.close && d.close < a.open {
                100
            } else {
                0
            },
        )
    } else {
        Ok(
            if b.close < a.close && c.close < b.close && d.open < c.close && d.close > a.open {
                -100
            } else {
                0
            },
        )
    }
}

/// CDLCONCEALBABYSWALL: four black candles — two marubozu, a gapped-down
/// candle whose upper shadow probes back into the prior body, and a final
/// candle engulfing that probe entirely, shadows included.
pub fn conceal_baby_swallow(w: &[Candle]) -> DetectorResult {
    let [a, b, c, d] = w else { return Ok(0) };
    if !a.is_bearish() || !b.is_bearish() || !c.is_bearish() || !d.is_bearish() {
        return Ok(0);
    }
    if !is_marubozu(a) || !is_marubozu(b) {
        return Ok(0);
    }
    if c.open >= b.close || c.high <= b.close {
        return Ok(0);
    }
    // the probing shadow must be a real feature of the third bar
    if div(c.upper_shadow(), c.range())? < SHADOW_LONG_RATIO {
        return Ok(0);
    }
    Ok(if d.open >= c.high && d.close <= c.low { 100 } else { 0 })
}

/// CDLBREAKAWAY: a long candle, a same-color body gap, two more bars
/// drifting the same way, then an opposite candle closing back inside the
/// gap. Reverses the move it breaks away from.
pub fn breakaway(w: &[Candle]) -> DetectorResult {
    let [a, b, c, d, e] = w else { return Ok(0) };
    let ca = color(a);
    if color(b) != ca || color(d) != ca || color(e) == ca {
        return Ok(0);
    }
    if !is_long_body(a) {
        return Ok(0);
    }
    if ca < 0 {
        // downside breakaway, bullish resolution
        if !body_gap_down(a, b) {
            return Ok(0);
        }
        if c.high >= b.high || c.low >= b.low || d.high >= c.high || d.low >= c.low {
            return Ok(0);
        }
        Ok(if e.close > b.open && e.close < a.close { 100 } else { 0 })
    } else {
        // upside breakaway, bearish resolution
        if !body_gap_up(a, b) {
            return Ok(0);
        }
        if c.high <= b.high || c.low <= b.low || d.high <= c.high || d.low <= c.low {
            return Ok(0);
        }
        Ok(if e.close < b.open && e.close > a.close { -100 } else { 0 })
    }
}

/// CDLLADDERBOTTOM: three black candles stepping down, a fourth black candle
/// showing an upper-shadow probe, then a white candle gapping open above it.
pub fn ladder_bottom(w: &[Candle]) -> DetectorResult {
    let [a, b, c, d, e] = w else { return Ok(0) };
    if !a.is_bearish() || !b.is_bearish() || !c.is_bearish() || !d.is_bearish() {
        return Ok(0);
    }
    if b.open >= a.open || c.open >= b.open || b.close >= a.close || c.close >= b.close {
        return Ok(0);
    }
    if upper_very_short(d) {
        return Ok(0);
    }
    Ok(if e.is_bullish() && e.open > d.open && e.close > d.high {
        100
    } else {
        0
    })
}

/// CDLMATHOLD: a long white candle, a short black candle gapping above it,
/// two more short reaction bars sagging into — but holding the upper half of
/// — the first body, then a white candle clearing the reaction highs.
pub fn mat_hold(w: &[Candle]) -> DetectorResult {
    let [a, b, c, d, e] = w else { return Ok(0) };
    if !a.is_bullish() || !b.is_bearish() || !e.is_bullish() {
        return Ok(0);
    }
    if !is_long_body(a) || !is_short_body(b) || !is_short_body(c) || !is_short_body(d) {
        return Ok(0);
    }
    if !body_gap_up(a, b) {
        return Ok(0);
    }
    let floor = a.close - 0.5 * a.body();
    for reaction in [c, d] {
        if reaction.body_bottom() >= a.close || reaction.body_bottom() <= floor {
            return Ok(0);
        }
    }
    if c.body_top() >= b.open || d.body_top() >= c.body_top() {
        return Ok(0);
    }
    let reaction_high = b.high.max(c.high).max(d.high);
    Ok(if e.open > d.close && e.close > reaction_high {
        100
    } else {
        0
    })
}

/// CDLRISEFALL3METHODS: a long candle, three short opposite-color bars held
/// inside its range and drifting against it, then a long same-color candle
/// closing beyond the first close. Signed by the first candle's color.
pub fn rise_fall_three_methods(w: &[Candle]) -> DetectorResult {
    let [a, b, c, d, e] = w else { return Ok(0) };
    let ca = color(a);
    if color(b) == ca || color(c) == ca || color(d) == ca || color(e) != ca {
        return Ok(0);
    }
    if !is_long_body(a) || !is_long_body(e) {
        return Ok(0);
    }
    if !is_short_body(b) || !is_short_body(c) || !is_short_body(d) {
        return Ok(0);
    }
    // reaction bodies stay within the first bar's high-low range
    for reaction in [b, c, d] {
        if reaction.body_bottom() >= a.high || reaction.body_top() <= a.low {
            return Ok(0);
        }
    }
    let cf = ca as f64;
    if c.close * cf >= b.close * cf || d.close * cf >= c.close * cf {
        return Ok(0);
    }
    if e.open * cf <= d.close * cf || e.close * cf <= a.close * cf {
        return Ok(0);
    }
    Ok(ca * 100)
}
