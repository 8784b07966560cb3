//! Fixed table of legal single-dart outcomes.
//!
//! The table is built once on first access and shared read-only by every
//! caller. Enumeration order is ascending segment number with the bull
//! entries appended after the 1-20 run of their group.

use std::fmt;

use once_cell::sync::Lazy;
use serde::Serialize;

use crate::error::{Error, Result};

/// Highest numbered segment on the board.
pub const BOARD_NUMBERS: u32 = 20;

/// Score of the outer bullseye.
pub const BULL_VALUE: u32 = 25;

/// Score of the inner (double) bullseye.
pub const DOUBLE_BULL_VALUE: u32 = 50;

const BULL_CODE: &str = "BULL";
const DOUBLE_BULL_CODE: &str = "DBULL";

/// Minimum Jaro-Winkler similarity for a code to be offered as a suggestion.
const SUGGESTION_THRESHOLD: f64 = 0.8;

/// Maximum number of suggestions attached to an unknown-code error.
const MAX_SUGGESTIONS: usize = 3;

/// Category of a board segment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SegmentKind {
    Single,
    Double,
    Triple,
    Bull,
    DoubleBull,
}

impl SegmentKind {
    /// Whether a dart of this kind may end a checkout.
    pub fn is_finishing(self) -> bool {
        matches!(self, SegmentKind::Double | SegmentKind::DoubleBull)
    }
}

impl fmt::Display for SegmentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let value = match self {
            SegmentKind::Single => "single",
            SegmentKind::Double => "double",
            SegmentKind::Triple => "triple",
            SegmentKind::Bull => "bull",
            SegmentKind::DoubleBull => "double_bull",
        };
        f.write_str(value)
    }
}

/// A legal single-dart outcome.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Segment {
    code: String,
    value: u32,
    kind: SegmentKind,
}

impl Segment {
    fn new(code: impl Into<String>, value: u32, kind: SegmentKind) -> Self {
        Self {
            code: code.into(),
            value,
            kind,
        }
    }

    /// Unique symbolic code, e.g. `T20`, `D16`, `BULL`.
    pub fn code(&self) -> &str {
        &self.code
    }

    /// Points scored by this dart.
    pub fn value(&self) -> u32 {
        self.value
    }

    pub fn kind(&self) -> SegmentKind {
        self.kind
    }

    /// Whether this segment may be the last dart of a checkout.
    pub fn is_finishing(&self) -> bool {
        self.kind.is_finishing()
    }

    /// Human-readable label used by renderers.
    pub fn label(&self) -> String {
        match self.kind {
            SegmentKind::Bull => format!("Bull ({})", self.value),
            SegmentKind::DoubleBull => format!("Double Bull ({})", self.value),
            _ => self.code.clone(),
        }
    }
}

impl fmt::Display for Segment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.code)
    }
}

/// The 62 legal dart outcomes grouped by multiplier.
#[derive(Debug, Clone)]
pub struct SegmentTable {
    singles: Vec<Segment>,
    doubles: Vec<Segment>,
    triples: Vec<Segment>,
    all: Vec<Segment>,
}

static SEGMENTS: Lazy<SegmentTable> = Lazy::new(SegmentTable::build);

/// Process-wide segment table.
pub fn segments() -> &'static SegmentTable {
    &SEGMENTS
}

impl SegmentTable {
    fn build() -> Self {
        let mut singles: Vec<Segment> = (1..=BOARD_NUMBERS)
            .map(|n| Segment::new(format!("S{n}"), n, SegmentKind::Single))
            .collect();
        singles.push(Segment::new(BULL_CODE, BULL_VALUE, SegmentKind::Bull));

        let mut doubles: Vec<Segment> = (1..=BOARD_NUMBERS)
            .map(|n| Segment::new(format!("D{n}"), 2 * n, SegmentKind::Double))
            .collect();
        doubles.push(Segment::new(
            DOUBLE_BULL_CODE,
            DOUBLE_BULL_VALUE,
            SegmentKind::DoubleBull,
        ));

        let triples: Vec<Segment> = (1..=BOARD_NUMBERS)
            .map(|n| Segment::new(format!("T{n}"), 3 * n, SegmentKind::Triple))
            .collect();

        let all = singles
            .iter()
            .chain(doubles.iter())
            .chain(triples.iter())
            .cloned()
            .collect();

        Self {
            singles,
            doubles,
            triples,
            all,
        }
    }

    /// Singles 1-20 followed by the outer bull.
    pub fn singles(&self) -> &[Segment] {
        &self.singles
    }

    /// Doubles 1-20 followed by the double bull.
    pub fn doubles(&self) -> &[Segment] {
        &self.doubles
    }

    pub fn triples(&self) -> &[Segment] {
        &self.triples
    }

    /// Every segment: singles, then doubles, then triples.
    ///
    /// This is the pool of setup darts for all but the last dart of a route.
    pub fn all(&self) -> &[Segment] {
        &self.all
    }

    /// Segments allowed to end a checkout.
    pub fn finishing(&self) -> &[Segment] {
        &self.doubles
    }

    pub fn len(&self) -> usize {
        self.all.len()
    }

    pub fn is_empty(&self) -> bool {
        self.all.is_empty()
    }

    /// Exact, case-sensitive lookup by code.
    pub fn get(&self, code: &str) -> Option<&Segment> {
        self.all.iter().find(|segment| segment.code == code)
    }

    /// Look up a segment, attaching close matches when the code is unknown.
    pub fn resolve(&self, code: &str) -> Result<&Segment> {
        self.get(code).ok_or_else(|| Error::UnknownSegment {
            code: code.to_string(),
            suggestions: self.fuzzy_matches(code, MAX_SUGGESTIONS),
        })
    }

    /// Look up a segment that must be able to finish a checkout.
    pub fn resolve_finishing(&self, code: &str) -> Result<&Segment> {
        let segment = self.resolve(code)?;
        if segment.is_finishing() {
            Ok(segment)
        } else {
            Err(Error::NotFinishingSegment {
                code: segment.code.clone(),
            })
        }
    }

    /// Codes similar to `code`, best match first, at most `limit` entries.
    pub fn fuzzy_matches(&self, code: &str, limit: usize) -> Vec<String> {
        let needle = code.trim().to_ascii_uppercase();
        let mut scored: Vec<(f64, &str)> = self
            .all
            .iter()
            .map(|segment| (strsim::jaro_winkler(&needle, &segment.code), segment.code()))
            .filter(|(score, _)| *score >= SUGGESTION_THRESHOLD)
            .collect();

        scored.sort_by(|a, b| b.0.total_cmp(&a.0).then_with(|| a.1.cmp(b.1)));

        scored
            .into_iter()
            .take(limit)
            .map(|(_, code)| code.to_string())
            .collect()
    }
}
