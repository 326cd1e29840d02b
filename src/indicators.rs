//! Smoothed technical indicators over a closing-price series.
//!
//! Every series function returns one entry per input close; entries inside
//! the warm-up period of the underlying recursion are `None`, never zero, so
//! a legitimate zero value (e.g. a MACD histogram crossing the axis) stays
//! unambiguous.

use crate::{EngineError, Result};

/// Wilder RSI period.
pub const RSI_PERIOD: usize = 14;
/// MACD fast EMA period.
pub const MACD_FAST: usize = 12;
/// MACD slow EMA period.
pub const MACD_SLOW: usize = 26;
/// MACD signal-line EMA period.
pub const MACD_SIGNAL: usize = 9;
/// Fast EMA period of the default request.
pub const EMA_FAST: usize = 7;
/// Slow EMA period of the default request.
pub const EMA_SLOW: usize = 25;

/// Exponential moving average.
///
/// Seeded with the simple average of the first `period` closes at index
/// `period - 1`; smoothed with `α = 2 / (period + 1)` from there on. Entries
/// before the seed are `None`.
pub fn ema(closes: &[f64], period: usize) -> Vec<Option<f64>> {
    let mut out = vec![None; closes.len()];
    if period == 0 || closes.len() < period {
        return out;
    }

    let alpha = 2.0 / (period as f64 + 1.0);
    let mut value = closes[..period].iter().sum::<f64>() / period as f64;
    out[period - 1] = Some(value);
    for i in period..closes.len() {
        value = alpha * closes[i] + (1.0 - alpha) * value;
        out[i] = Some(value);
    }
    out
}

/// Wilder's relative strength index.
///
/// Average gain and loss are seeded from the simple average of the first
/// `period` bar-over-bar moves, then smoothed with factor `1/period`. A zero
/// average loss saturates to 100 rather than dividing. The first `period`
/// entries are `None`.
pub fn rsi(closes: &[f64], period: usize) -> Vec<Option<f64>> {
    let mut out = vec![None; closes.len()];
    if period == 0 || closes.len() <= period {
        return out;
    }

    let mut avg_gain = 0.0;
    let mut avg_loss = 0.0;
    for i in 1..=period {
        let delta = closes[i] - closes[i - 1];
        if delta > 0.0 {
            avg_gain += delta;
        } else {
            avg_loss -= delta;
        }
    }
    avg_gain /= period as f64;
    avg_loss /= period as f64;
    out[period] = Some(rsi_value(avg_gain, avg_loss));

    let smoothing = period as f64;
    for i in period + 1..closes.len() {
        let delta = closes[i] - closes[i - 1];
        let (gain, loss) = if delta > 0.0 { (delta, 0.0) } else { (0.0, -delta) };
        avg_gain = (avg_gain * (smoothing - 1.0) + gain) / smoothing;
        avg_loss = (avg_loss * (smoothing - 1.0) + loss) / smoothing;
        out[i] = Some(rsi_value(avg_gain, avg_loss));
    }
    out
}

fn rsi_value(avg_gain: f64, avg_loss: f64) -> f64 {
    if avg_loss == 0.0 {
        100.0
    } else {
        100.0 - 100.0 / (1.0 + avg_gain / avg_loss)
    }
}

/// The three MACD output series, index-aligned with the input closes.
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct MacdSeries {
    pub macd: Vec<Option<f64>>,
    pub signal: Vec<Option<f64>>,
    pub histogram: Vec<Option<f64>>,
}

/// MACD(12, 26, 9): macd line = EMA12 − EMA26, signal = EMA9 of the macd
/// line, histogram = macd − signal. Each series is `None` until its own
/// recursion is seeded.
pub fn macd(closes: &[f64]) -> MacdSeries {
    let fast = ema(closes, MACD_FAST);
    let slow = ema(closes, MACD_SLOW);

    let macd_line: Vec<Option<f64>> = fast
        .iter()
        .zip(&slow)
        .map(|(f, s)| match (f, s) {
            (Some(f), Some(s)) => Some(f - s),
            _ => None,
        })
        .collect();

    // the signal line smooths only the defined portion of the macd line
    let defined: Vec<f64> = macd_line.iter().flatten().copied().collect();
    let start = macd_line.len() - defined.len();
    let mut signal = vec![None; macd_line.len()];
    for (offset, value) in ema(&defined, MACD_SIGNAL).into_iter().enumerate() {
        signal[start + offset] = value;
    }

    let histogram: Vec<Option<f64>> = macd_line
        .iter()
        .zip(&signal)
        .map(|(m, s)| match (m, s) {
            (Some(m), Some(s)) => Some(m - s),
            _ => None,
        })
        .collect();

    MacdSeries {
        macd: macd_line,
        signal,
        histogram,
    }
}

/// An indicator the engine knows how to compute.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum IndicatorKind {
    Rsi,
    Macd,
    Ema,
}

impl IndicatorKind {
    /// Parse a request name, case-insensitively. Unknown names are `None`
    /// (the request layer drops them rather than erroring).
    pub fn parse(name: &str) -> Option<Self> {
        if name.eq_ignore_ascii_case("rsi") {
            Some(Self::Rsi)
        } else if name.eq_ignore_ascii_case("macd") {
            Some(Self::Macd)
        } else if name.eq_ignore_ascii_case("ema") {
            Some(Self::Ema)
        } else {
            None
        }
    }
}

/// Computed series for one indicator request. Fields stay `None` (and off
/// the wire) unless the corresponding indicator was requested.
#[derive(Debug, Clone, Default, PartialEq, serde::Serialize)]
pub struct IndicatorReport {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rsi: Option<Vec<Option<f64>>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub macd: Option<MacdSeries>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ema7: Option<Vec<Option<f64>>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ema25: Option<Vec<Option<f64>>>,
}

/// Compute the requested indicators over a closing-price series.
///
/// The EMA request computes both default periods (7 and 25). Requesting the
/// same indicator twice is harmless.
///
/// # Errors
///
/// [`EngineError::EmptySeries`] for an empty series,
/// [`EngineError::NonFinite`] if any close is NaN or infinite.
pub fn compute(closes: &[f64], kinds: &[IndicatorKind]) -> Result<IndicatorReport> {
    validate_closes(closes)?;

    let mut report = IndicatorReport::default();
    for kind in kinds {
        match kind {
            IndicatorKind::Rsi => report.rsi = Some(rsi(closes, RSI_PERIOD)),
            IndicatorKind::Macd => report.macd = Some(macd(closes)),
            IndicatorKind::Ema => {
                report.ema7 = Some(ema(closes, EMA_FAST));
                report.ema25 = Some(ema(closes, EMA_SLOW));
            }
        }
    }
    Ok(report)
}

/// [`compute`] over raw request names; unrecognized names are ignored.
pub fn compute_named<S: AsRef<str>>(closes: &[f64], names: &[S]) -> Result<IndicatorReport> {
    let kinds: Vec<IndicatorKind> = names
        .iter()
        .filter_map(|name| IndicatorKind::parse(name.as_ref()))
        .collect();
    compute(closes, &kinds)
}

fn validate_closes(closes: &[f64]) -> Result<()> {
    if closes.is_empty() {
        return Err(EngineError::EmptySeries);
    }
    if let Some(index) = closes.iter().position(|v| !v.is_finite()) {
        return Err(EngineError::NonFinite {
            field: "close",
            index,
        });
    }
    Ok(())
}
