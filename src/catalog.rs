//! The pattern catalog: a process-wide, read-only registry of every
//! detectable formation.
//!
//! Entries are declared once, in a fixed order, and scanning reports
//! detections in this order. Each entry binds a pattern code to its display
//! metadata, the number of trailing candles its rule needs, and the rule
//! itself — a closed set resolved at compile time, with no name lookup at
//! call time.

use crate::detectors::{multi_bar, single_bar, three_bar, two_bar, DetectorFn};
use crate::Classification;

/// Static definition of one pattern.
#[derive(Debug, Clone, Copy)]
pub struct PatternDef {
    /// Stable identifier, also the code emitted in scan results.
    pub code: &'static str,
    pub display_name: &'static str,
    pub classification: Classification,
    /// Trailing candles the rule consumes, 1..=5.
    pub window: usize,
    pub detect: DetectorFn,
}

macro_rules! define_catalog {
    ($($code:literal => $window:literal, $class:ident, $detect:path, $name:literal;)*) => {
        static CATALOG: &[PatternDef] = &[
            $(PatternDef {
                code: $code,
                display_name: $name,
                classification: Classification::$class,
                window: $window,
                detect: $detect,
            },)*
        ];
    };
}

define_catalog! {
    "CDL2CROWS"           => 3, Bearish,      three_bar::two_crows,              "Two Crows";
    "CDL3BLACKCROWS"      => 3, Bearish,      three_bar::three_black_crows,      "Three Black Crows";
    "CDL3INSIDE"          => 3, Bullish,      three_bar::three_inside,           "Three Inside Up/Down";
    "CDL3LINESTRIKE"      => 4, Bullish,      multi_bar::three_line_strike,      "Three-Line Strike";
    "CDL3OUTSIDE"         => 3, Bullish,      three_bar::three_outside,          "Three Outside Up/Down";
    "CDL3STARSINSOUTH"    => 3, Bullish,      three_bar::three_stars_in_south,   "Three Stars in the South";
    "CDL3WHITESOLDIERS"   => 3, Bullish,      three_bar::three_white_soldiers,   "Three White Soldiers";
    "CDLABANDONEDBABY"    => 3, Reversal,     three_bar::abandoned_baby,         "Abandoned Baby";
    "CDLADVANCEBLOCK"     => 3, Bearish,      three_bar::advance_block,          "Advance Block";
    "CDLBELTHOLD"         => 1, Reversal,     single_bar::belt_hold,             "Belt-hold";
    "CDLBREAKAWAY"        => 5, Reversal,     multi_bar::breakaway,              "Breakaway";
    "CDLCLOSINGMARUBOZU"  => 1, Continuation, single_bar::closing_marubozu,      "Closing Marubozu";
    "CDLCONCEALBABYSWALL" => 4, Bullish,      multi_bar::conceal_baby_swallow,   "Concealing Baby Swallow";
    "CDLCOUNTERATTACK"    => 2, Reversal,     two_bar::counterattack,            "Counterattack";
    "CDLDARKCLOUDCOVER"   => 2, Bearish,      two_bar::dark_cloud_cover,         "Dark Cloud Cover";
    "CDLDOJI"             => 1, Neutral,      single_bar::doji,                  "Doji";
    "CDLDOJISTAR"         => 2, Reversal,     two_bar::doji_star,                "Doji Star";
    "CDLDRAGONFLYDOJI"    => 1, Bullish,      single_bar::dragonfly_doji,        "Dragonfly Doji";
    "CDLENGULFING"        => 2, Reversal,     two_bar::engulfing,                "Engulfing Pattern";
    "CDLEVENINGDOJISTAR"  => 3, Bearish,      three_bar::evening_doji_star,      "Evening Doji Star";
    "CDLEVENINGSTAR"      => 3, Bearish,      three_bar::evening_star,           "Evening Star";
    "CDLGAPSIDESIDEWHITE" => 3, Bullish,      three_bar::gap_side_side_white,    "Up/Down-gap Side-by-side White Lines";
    "CDLGRAVESTONEDOJI"   => 1, Bearish,      single_bar::gravestone_doji,       "Gravestone Doji";
    "CDLHAMMER"           => 2, Bullish,      two_bar::hammer,                   "Hammer";
    "CDLHANGINGMAN"       => 2, Bearish,      two_bar::hanging_man,              "Hanging Man";
    "CDLHARAMI"           => 2, Reversal,     two_bar::harami,                   "Harami Pattern";
    "CDLHARAMICROSS"      => 2, Reversal,     two_bar::harami_cross,             "Harami Cross Pattern";
    "CDLHIGHWAVE"         => 1, Neutral,      single_bar::high_wave,             "High-Wave Candle";
    "CDLHIKKAKE"          => 3, Reversal,     three_bar::hikkake,                "Hikkake Pattern";
    "CDLHIKKAKEMOD"       => 4, Reversal,     multi_bar::hikkake_mod,            "Modified Hikkake Pattern";
    "CDLHOMINGPIGEON"     => 2, Bullish,      two_bar::homing_pigeon,            "Homing Pigeon";
    "CDLIDENTICAL3CROWS"  => 3, Bearish,      three_bar::identical_three_crows,  "Identical Three Crows";
    "CDLINNECK"           => 2, Bearish,      two_bar::in_neck,                  "In-Neck Pattern";
    "CDLINVERTEDHAMMER"   => 2, Bullish,      two_bar::inverted_hammer,          "Inverted Hammer";
    "CDLKICKING"          => 2, Reversal,     two_bar::kicking,                  "Kicking";
    "CDLKICKINGBYLENGTH"  => 2, Reversal,     two_bar::kicking_by_length,        "Kicking by Length";
    "CDLLADDERBOTTOM"     => 5, Bullish,      multi_bar::ladder_bottom,          "Ladder Bottom";
    "CDLLONGLEGGEDDOJI"   => 1, Neutral,      single_bar::long_legged_doji,      "Long-Legged Doji";
    "CDLLONGLINE"         => 1, Continuation, single_bar::long_line,             "Long Line Candle";
    "CDLMARUBOZU"         => 1, Continuation, single_bar::marubozu,              "Marubozu";
    "CDLMATCHINGLOW"      => 2, Bullish,      two_bar::matching_low,             "Matching Low";
    "CDLMATHOLD"          => 5, Bullish,      multi_bar::mat_hold,               "Mat Hold";
    "CDLMORNINGDOJISTAR"  => 3, Bullish,      three_bar::morning_doji_star,      "Morning Doji Star";
    "CDLMORNINGSTAR"      => 3, Bullish,      three_bar::morning_star,           "Morning Star";
    "CDLONNECK"           => 2, Bearish,      two_bar::on_neck,                  "On-Neck Pattern";
    "CDLPIERCING"         => 2, Bullish,      two_bar::piercing,                 "Piercing Pattern";
    "CDLRICKSHAWMAN"      => 1, Neutral,      single_bar::rickshaw_man,          "Rickshaw Man";
    "CDLRISEFALL3METHODS" => 5, Continuation, multi_bar::rise_fall_three_methods, "Rising/Falling Three Methods";
    "CDLSEPARATINGLINES"  => 2, Continuation, two_bar::separating_lines,         "Separating Lines";
    "CDLSHOOTINGSTAR"     => 2, Bearish,      two_bar::shooting_star,            "Shooting Star";
    "CDLSHORTLINE"        => 1, Neutral,      single_bar::short_line,            "Short Line Candle";
    "CDLSPINNINGTOP"      => 1, Neutral,      single_bar::spinning_top,          "Spinning Top";
    "CDLSTALLEDPATTERN"   => 3, Bearish,      three_bar::stalled_pattern,        "Stalled Pattern";
    "CDLSTICKSANDWICH"    => 3, Bullish,      three_bar::stick_sandwich,         "Stick Sandwich";
    "CDLTAKURI"           => 1, Bullish,      single_bar::takuri,                "Takuri";
    "CDLTASUKIGAP"        => 3, Continuation, three_bar::tasuki_gap,             "Tasuki Gap";
    "CDLTHRUSTING"        => 2, Bearish,      two_bar::thrusting,                "Thrusting Pattern";
    "CDLTRISTAR"          => 3, Reversal,     three_bar::tristar,                "Tristar Pattern";
    "CDLUNIQUE3RIVER"     => 3, Bullish,      three_bar::unique_three_river,     "Unique 3 River";
    "CDLUPSIDEGAP2CROWS"  => 3, Bearish,      three_bar::upside_gap_two_crows,   "Upside Gap Two Crows";
    "CDLXSIDEGAP3METHODS" => 3, Continuation, three_bar::xside_gap_three_methods, "Upside/Downside Gap Three Methods";
}

/// Every registered pattern, in declaration order.
pub fn all() -> &'static [PatternDef] {
    CATALOG
}

/// Look up a pattern by its code.
pub fn find(code: &str) -> Option<&'static PatternDef> {
    CATALOG.iter().find(|def| def.code == code)
}

/// Wire-facing description of one catalog entry, for UI population.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PatternInfo {
    pub code: &'static str,
    pub display_name: &'static str,
    pub classification: Classification,
}

/// The catalog as serializable records, in declaration order.
pub fn listing() -> Vec<PatternInfo> {
    CATALOG
        .iter()
        .map(|def| PatternInfo {
            code: def.code,
            display_name: def.display_name,
            classification: def.classification,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_catalog_has_sixty_one_patterns() {
        assert_eq!(all().len(), 61);
    }

    #[test]
    fn test_codes_are_unique() {
        let codes: HashSet<_> = all().iter().map(|d| d.code).collect();
        assert_eq!(codes.len(), all().len());
    }

    #[test]
    fn test_windows_are_within_bounds() {
        for def in all() {
            assert!(
                (1..=5).contains(&def.window),
                "{} has window {}",
                def.code,
                def.window
            );
        }
    }

    #[test]
    fn test_find_by_code() {
        let doji = find("CDLDOJI").unwrap();
        assert_eq!(doji.display_name, "Doji");
        assert_eq!(doji.classification, Classification::Neutral);
        assert_eq!(doji.window, 1);

        assert!(find("CDLNOSUCH").is_none());
    }

    #[test]
    fn test_declaration_order_is_original_order() {
        assert_eq!(all()[0].code, "CDL2CROWS");
        assert_eq!(all()[15].code, "CDLDOJI");
        assert_eq!(all()[60].code, "CDLXSIDEGAP3METHODS");
    }

    #[test]
    fn test_listing_mirrors_the_catalog() {
        let listing = listing();
        assert_eq!(listing.len(), all().len());
        for (info, def) in listing.iter().zip(all()) {
            assert_eq!(info.code, def.code);
            assert_eq!(info.display_name, def.display_name);
            assert_eq!(info.classification, def.classification);
        }
    }
}
