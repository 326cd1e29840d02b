//! The pattern scan engine.
//!
//! Runs every catalog detector against the trailing window ending at the
//! most recent candle of a sequence and collects the non-zero results.

use rayon::prelude::*;

use crate::catalog;
use crate::{Candle, Detection, EngineError, Result, ScanReport, Signal};

/// Minimum sequence length for any pattern evaluation.
pub const MIN_CANDLES: usize = 3;

/// Scan a candle sequence for patterns completing at its last candle.
///
/// Detectors whose window exceeds the sequence length are skipped silently.
/// A detector fault is logged and treated as "not detected" for that pattern
/// alone; the rest of the scan proceeds. Detections come back in catalog
/// order.
///
/// # Errors
///
/// [`EngineError::InsufficientData`] if fewer than [`MIN_CANDLES`] candles
/// are supplied.
pub fn scan(candles: &[Candle]) -> Result<ScanReport> {
    if candles.len() < MIN_CANDLES {
        return Err(EngineError::InsufficientData {
            need: MIN_CANDLES,
            got: candles.len(),
        });
    }

    let mut detections = Vec::new();
    for def in catalog::all() {
        if def.window > candles.len() {
            continue;
        }
        let window = &candles[candles.len() - def.window..];
        match (def.detect)(window) {
            Ok(0) => {}
            Ok(strength) => detections.push(Detection {
                code: def.code,
                display_name: def.display_name,
                classification: def.classification,
                signal: if strength > 0 {
                    Signal::Bullish
                } else {
                    Signal::Bearish
                },
                confidence: strength.unsigned_abs().min(100) as u8,
            }),
            Err(fault) => {
                tracing::warn!(pattern = def.code, %fault, "detector fault, skipping pattern");
            }
        }
    }

    let total = detections.len();
    Ok(ScanReport { detections, total })
}

/// Per-instrument scan result from [`scan_parallel`].
#[derive(Debug, Clone)]
pub struct InstrumentReport {
    pub symbol: String,
    pub report: ScanReport,
}

/// Per-instrument scan failure from [`scan_parallel`].
#[derive(Debug, Clone)]
pub struct InstrumentError {
    pub symbol: String,
    pub error: EngineError,
}

/// Scan many instruments concurrently, splitting successes from failures.
///
/// One bad instrument (e.g. too few candles) does not abort the batch.
pub fn scan_parallel<'a, I>(instruments: I) -> (Vec<InstrumentReport>, Vec<InstrumentError>)
where
    I: IntoParallelIterator<Item = (&'a str, &'a [Candle])>,
{
    let results: Vec<_> = instruments
        .into_par_iter()
        .map(|(symbol, candles)| {
            scan(candles)
                .map(|report| InstrumentReport {
                    symbol: symbol.to_string(),
                    report,
                })
                .map_err(|error| InstrumentError {
                    symbol: symbol.to_string(),
                    error,
                })
        })
        .collect();

    let mut reports = Vec::new();
    let mut errors = Vec::new();
    for result in results {
        match result {
            Ok(r) => reports.push(r),
            Err(e) => errors.push(e),
        }
    }

    (reports, errors)
}
