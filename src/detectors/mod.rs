//! Candlestick pattern detectors.
//!
//! Each detector is a pure function over its exact trailing window of
//! candles (oldest first, the pattern completing at the last element) and
//! returns a signed strength:
//!
//! - `+100` — bullish signal
//! - `-100` — bearish signal
//! - `0` — not detected
//!
//! The sign convention follows TA-Lib's outputs, so a handful of patterns
//! whose catalog classification is bearish (e.g. the gravestone doji) still
//! report a positive value when they fire.
//!
//! A detector handed a window of the wrong length reports no detection; a
//! detector whose arithmetic degenerates (ratio over a zero range) returns
//! [`DetectorFault`](crate::DetectorFault), which the scan engine contains.
//!
//! # Modules by window size
//!
//! - [`single_bar`] — 13 one-candle rules (doji family, marubozu family, lines)
//! - [`two_bar`] — 19 two-candle rules (engulfing, harami, necks, kicking, …)
//! - [`three_bar`] — 22 three-candle rules (stars, soldiers/crows, gaps, …)
//! - [`multi_bar`] — 7 four/five-candle rules (breakaway, mat hold, …)

pub mod helpers;
pub mod multi_bar;
pub mod single_bar;
pub mod three_bar;
pub mod two_bar;

use crate::{Candle, DetectorFault};

/// Outcome of one detector evaluation: a signed strength, or a contained
/// arithmetic fault.
pub type DetectorResult = std::result::Result<i32, DetectorFault>;

/// A pattern rule over a trailing candle window.
pub type DetectorFn = fn(&[Candle]) -> DetectorResult;
