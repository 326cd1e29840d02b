//! # candlescan
//!
//! Candlestick pattern recognition and technical indicator engine.
//!
//! The crate takes an ordered, oldest-first sequence of OHLC candles and
//! reports which of the 61 registered candlestick formations complete at the
//! most recent candle, and separately computes RSI / MACD / EMA series over a
//! closing-price sequence. It is the numeric core behind a charting backend;
//! transport, JSON shaping and process lifecycle belong to the caller.
//!
//! ## Quick Start
//!
//! ```rust
//! use candlescan::prelude::*;
//!
//! let candles = vec![
//!     Candle::new(10.0, 11.0, 9.0, 9.5),
//!     Candle::new(10.0, 11.0, 9.0, 9.5),
//!     Candle::new(9.0, 12.0, 8.5, 11.5),
//! ];
//!
//! let report = scan(&candles).unwrap();
//! for d in &report.detections {
//!     println!("{} {} ({:?}, confidence {})", d.code, d.display_name, d.signal, d.confidence);
//! }
//! ```
//!
//! All entry points are pure functions over their arguments; the only
//! process-wide state is the read-only pattern catalog, so concurrent calls
//! need no synchronization.

pub mod catalog;
pub mod detectors;
pub mod indicators;
mod scan;

pub use scan::{scan, scan_parallel, InstrumentError, InstrumentReport, MIN_CANDLES};

pub mod prelude {
    pub use crate::{
        catalog::{self, PatternDef, PatternInfo},
        detectors::{DetectorFn, DetectorResult},
        indicators::{self, IndicatorKind, IndicatorReport, MacdSeries},
        scan::{scan, scan_parallel, InstrumentError, InstrumentReport, MIN_CANDLES},
        Candle, Classification, Detection, DetectorFault, EngineError, Result, ScanReport, Signal,
    };
}

// ============================================================
// ERRORS
// ============================================================

pub type Result<T> = std::result::Result<T, EngineError>;

/// Errors surfaced to callers of the scan and indicator engines.
///
/// `LengthMismatch`, `NonFinite` and `EmptySeries` are the malformed-input
/// (validation) kinds; `InsufficientData` is the too-few-candles kind. No
/// error is ever retried internally — inputs are deterministic, so a retry
/// would reproduce the same failure.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EngineError {
    #[error("{field} has {got} values, expected {expected}")]
    LengthMismatch {
        field: &'static str,
        got: usize,
        expected: usize,
    },

    #[error("non-finite {field} value at index {index}")]
    NonFinite { field: &'static str, index: usize },

    #[error("closing-price series is empty")]
    EmptySeries,

    #[error("insufficient data: need at least {need} candles, got {got}")]
    InsufficientData { need: usize, got: usize },
}

/// Internal per-detector failure: a rule's arithmetic produced a non-finite
/// intermediate (e.g. a ratio over a zero range).
///
/// Never surfaced through [`scan`] — the scan engine logs it and treats the
/// pattern as not detected, so one degenerate rule cannot deny results for
/// the other detectors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("detector arithmetic produced a non-finite value")]
pub struct DetectorFault;

// ============================================================
// CANDLE MODEL
// ============================================================

/// One OHLC price bar.
///
/// Derived geometry is computed on demand and never cached. The only
/// validated invariants are those of [`Candle::from_series`]; bars whose
/// close falls outside `[low, high]` are accepted as-is, so the shadow
/// accessors may legally return negative values and detectors tolerate that.
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Candle {
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub close: f64,
}

impl Candle {
    pub fn new(open: f64, high: f64, low: f64, close: f64) -> Self {
        Self {
            open,
            high,
            low,
            close,
        }
    }

    /// Build a candle sequence from parallel OHLC arrays.
    ///
    /// Fails with [`EngineError::LengthMismatch`] if the arrays differ in
    /// length and [`EngineError::NonFinite`] if any value is NaN or infinite.
    /// No geometric consistency is enforced.
    pub fn from_series(open: &[f64], high: &[f64], low: &[f64], close: &[f64]) -> Result<Vec<Self>> {
        let expected = open.len();
        for (field, series) in [("high", high), ("low", low), ("close", close)] {
            if series.len() != expected {
                return Err(EngineError::LengthMismatch {
                    field,
                    got: series.len(),
                    expected,
                });
            }
        }
        for (field, series) in [("open", open), ("high", high), ("low", low), ("close", close)] {
            if let Some(index) = series.iter().position(|v| !v.is_finite()) {
                return Err(EngineError::NonFinite { field, index });
            }
        }

        Ok((0..expected)
            .map(|i| Self::new(open[i], high[i], low[i], close[i]))
            .collect())
    }

    #[inline]
    pub fn body(&self) -> f64 {
        (self.close - self.open).abs()
    }

    #[inline]
    pub fn range(&self) -> f64 {
        self.high - self.low
    }

    #[inline]
    pub fn upper_shadow(&self) -> f64 {
        self.high - self.open.max(self.close)
    }

    #[inline]
    pub fn lower_shadow(&self) -> f64 {
        self.open.min(self.close) - self.low
    }

    /// Upper edge of the real body.
    #[inline]
    pub fn body_top(&self) -> f64 {
        self.open.max(self.close)
    }

    /// Lower edge of the real body.
    #[inline]
    pub fn body_bottom(&self) -> f64 {
        self.open.min(self.close)
    }

    #[inline]
    pub fn is_bullish(&self) -> bool {
        self.close > self.open
    }

    #[inline]
    pub fn is_bearish(&self) -> bool {
        self.close < self.open
    }
}

// ============================================================
// DETECTION RESULTS
// ============================================================

/// Direction of a fired signal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Signal {
    Bullish,
    Bearish,
}

/// Catalog classification of a pattern (static metadata, not the per-scan
/// signal — e.g. an engulfing is classified `reversal` but signals bullish
/// or bearish depending on the candles).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Classification {
    Bullish,
    Bearish,
    Neutral,
    Reversal,
    Continuation,
}

/// One pattern that completed at the last candle of a scanned sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Detection {
    pub code: &'static str,
    pub display_name: &'static str,
    pub classification: Classification,
    pub signal: Signal,
    /// Match strength, 1..=100. Zero-strength results are never emitted.
    pub confidence: u8,
}

/// Result of scanning one candle sequence: detections in catalog order.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScanReport {
    pub detections: Vec<Detection>,
    pub total: usize,
}

// ============================================================
// TESTS
// ============================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_candle_geometry() {
        let c = Candle::new(100.0, 110.0, 90.0, 105.0);
        assert_eq!(c.body(), 5.0);
        assert_eq!(c.range(), 20.0);
        assert_eq!(c.upper_shadow(), 5.0);
        assert_eq!(c.lower_shadow(), 10.0);
        assert_eq!(c.body_top(), 105.0);
        assert_eq!(c.body_bottom(), 100.0);
        assert!(c.is_bullish());
        assert!(!c.is_bearish());
    }

    #[test]
    fn test_flat_candle_is_neither_bullish_nor_bearish() {
        let c = Candle::new(100.0, 100.0, 100.0, 100.0);
        assert!(!c.is_bullish());
        assert!(!c.is_bearish());
        assert_eq!(c.body(), 0.0);
        assert_eq!(c.range(), 0.0);
    }

    #[test]
    fn test_inconsistent_candle_yields_negative_shadows() {
        // close above high — accepted, shadows go negative rather than panic
        let c = Candle::new(100.0, 101.0, 99.0, 103.0);
        assert!(c.upper_shadow() < 0.0);
    }

    #[test]
    fn test_from_series_builds_candles() {
        let candles =
            Candle::from_series(&[10.0, 9.0], &[11.0, 12.0], &[9.0, 8.5], &[9.5, 11.5]).unwrap();
        assert_eq!(candles.len(), 2);
        assert_eq!(candles[1], Candle::new(9.0, 12.0, 8.5, 11.5));
    }

    #[test]
    fn test_from_series_length_mismatch() {
        let err = Candle::from_series(&[1.0, 2.0], &[1.0], &[1.0, 2.0], &[1.0, 2.0]).unwrap_err();
        assert_eq!(
            err,
            EngineError::LengthMismatch {
                field: "high",
                got: 1,
                expected: 2
            }
        );
    }

    #[test]
    fn test_from_series_rejects_non_finite() {
        let err = Candle::from_series(&[1.0], &[f64::NAN], &[1.0], &[1.0]).unwrap_err();
        assert_eq!(
            err,
            EngineError::NonFinite {
                field: "high",
                index: 0
            }
        );

        let err = Candle::from_series(&[1.0], &[2.0], &[f64::INFINITY], &[1.0]).unwrap_err();
        assert!(matches!(err, EngineError::NonFinite { field: "low", .. }));
    }

    #[test]
    fn test_detection_wire_shape() {
        let d = Detection {
            code: "CDLENGULFING",
            display_name: "Engulfing Pattern",
            classification: Classification::Reversal,
            signal: Signal::Bullish,
            confidence: 100,
        };
        let json = serde_json::to_value(d).unwrap();
        assert_eq!(json["code"], "CDLENGULFING");
        assert_eq!(json["displayName"], "Engulfing Pattern");
        assert_eq!(json["classification"], "reversal");
        assert_eq!(json["signal"], "bullish");
        assert_eq!(json["confidence"], 100);
    }
}
