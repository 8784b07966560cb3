use std::fmt::Write;

use serde::Serialize;

use crate::checkout::{CheckoutConfig, CheckoutOutcome, CheckoutResult, Route};
use crate::segment::{segments, Segment, SegmentKind, BOARD_NUMBERS};

/// Reminder printed under the segment cheat sheet.
pub const DOUBLE_OUT_NOTE: &str =
    "Every checkout must finish on a double (D1-D20) or the double bull (DBULL).";

/// Presentation style for turning a [`CheckoutSummary`] into text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CheckoutRenderMode {
    PlainText,
    RichText,
    Compact,
}

/// A single dart as shown to the player.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct DartLine {
    pub code: String,
    pub value: u32,
    pub kind: SegmentKind,
    pub label: String,
}

impl From<&Segment> for DartLine {
    fn from(segment: &Segment) -> Self {
        Self {
            code: segment.code().to_string(),
            value: segment.value(),
            kind: segment.kind(),
            label: segment.label(),
        }
    }
}

/// A ranked route with display labels resolved.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct RouteLine {
    /// 1-based position in the ranking.
    pub rank: usize,
    pub darts: Vec<DartLine>,
    pub total: u32,
    pub preferred_finish: bool,
}

impl RouteLine {
    fn from_route(rank: usize, route: &Route, config: &CheckoutConfig) -> Self {
        Self {
            rank,
            darts: route.darts().iter().map(DartLine::from).collect(),
            total: route.total(),
            preferred_finish: config.is_preferred(route.finish().code()),
        }
    }

    /// Codes joined with commas.
    pub fn codes(&self) -> String {
        self.darts
            .iter()
            .map(|dart| dart.code.as_str())
            .collect::<Vec<_>>()
            .join(",")
    }

    /// Labels joined with `separator`.
    pub fn labels(&self, separator: &str) -> String {
        self.darts
            .iter()
            .map(|dart| dart.label.as_str())
            .collect::<Vec<_>>()
            .join(separator)
    }
}

/// Structured representation of a checkout computation that higher-level
/// consumers can serialise.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct CheckoutSummary {
    pub target: i64,
    pub min_darts: Option<u8>,
    pub outcome: CheckoutOutcome,
    pub headline: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hint: Option<String>,
    pub routes: Vec<RouteLine>,
    /// Preferred codes that are not finishing segments and were ignored.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub ignored_preferred: Vec<String>,
}

impl CheckoutSummary {
    /// Convert a [`CheckoutResult`] into a summary with resolved labels.
    pub fn from_result(target: i64, result: &CheckoutResult, config: &CheckoutConfig) -> Self {
        let routes = result
            .routes
            .iter()
            .enumerate()
            .map(|(index, route)| RouteLine::from_route(index + 1, route, config))
            .collect();

        Self {
            target,
            min_darts: result.min_darts,
            outcome: result.outcome(),
            headline: result.headline(),
            hint: result.hint().map(str::to_string),
            routes,
            ignored_preferred: config.unmatched_preferences(),
        }
    }

    /// Render the summary using the requested textual mode.
    pub fn render(&self, mode: CheckoutRenderMode) -> String {
        match mode {
            CheckoutRenderMode::PlainText => self.render_plain(),
            CheckoutRenderMode::RichText => self.render_rich(),
            CheckoutRenderMode::Compact => self.render_compact(),
        }
    }

    fn render_plain(&self) -> String {
        let mut buffer = String::new();
        let _ = writeln!(buffer, "Checkout {}: {}", self.target, self.headline);
        for line in &self.routes {
            let _ = writeln!(buffer, "{:>3}. {}", line.rank, line.labels(" > "));
        }
        if let Some(hint) = &self.hint {
            let _ = writeln!(buffer, "{hint}");
        }
        buffer
    }

    fn render_rich(&self) -> String {
        let mut buffer = String::new();
        let _ = writeln!(
            buffer,
            "**Checkout {}** — _{}_",
            self.target, self.headline
        );
        for line in &self.routes {
            let darts = line
                .darts
                .iter()
                .enumerate()
                .map(|(i, dart)| {
                    if i + 1 == line.darts.len() {
                        format!("**{}**", dart.label)
                    } else {
                        format!("`{}`", dart.label)
                    }
                })
                .collect::<Vec<_>>()
                .join(" → ");
            let _ = writeln!(buffer, "* {:>2}. {}", line.rank, darts);
        }
        if let Some(hint) = &self.hint {
            let _ = writeln!(buffer, "> {hint}");
        }
        buffer
    }

    fn render_compact(&self) -> String {
        let mut buffer = String::new();
        for line in &self.routes {
            let _ = writeln!(buffer, "{}", line.codes());
        }
        buffer
    }
}

/// Score cheat sheet listing every board number with its single, double and
/// treble value, plus the bull.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct SegmentSheet {
    pub triples: Vec<DartLine>,
    pub doubles: Vec<DartLine>,
    pub singles: Vec<DartLine>,
    pub note: &'static str,
}

impl SegmentSheet {
    /// Build the sheet from the process-wide segment table.
    pub fn build() -> Self {
        let table = segments();
        let lines =
            |group: &[Segment]| -> Vec<DartLine> { group.iter().map(DartLine::from).collect() };
        Self {
            triples: lines(table.triples()),
            doubles: lines(table.doubles()),
            singles: lines(table.singles()),
            note: DOUBLE_OUT_NOTE,
        }
    }

    /// Render the sheet using the requested textual mode.
    pub fn render(&self, mode: CheckoutRenderMode) -> String {
        match mode {
            CheckoutRenderMode::PlainText => self.render_plain(),
            CheckoutRenderMode::RichText => self.render_rich(),
            CheckoutRenderMode::Compact => self.render_compact(),
        }
    }

    /// Rows of (number label, single, double, treble), highest number first.
    fn rows(&self) -> Vec<(String, u32, u32, Option<u32>)> {
        let numbers = BOARD_NUMBERS as usize;
        let mut rows: Vec<_> = (0..numbers)
            .rev()
            .filter_map(|i| {
                Some((
                    (i + 1).to_string(),
                    self.singles.get(i)?.value,
                    self.doubles.get(i)?.value,
                    self.triples.get(i).map(|t| t.value),
                ))
            })
            .collect();
        if let (Some(bull), Some(double_bull)) =
            (self.singles.get(numbers), self.doubles.get(numbers))
        {
            rows.push(("Bull".to_string(), bull.value, double_bull.value, None));
        }
        rows
    }

    fn render_plain(&self) -> String {
        let mut buffer = String::new();
        let _ = writeln!(
            buffer,
            "{:>6}  {:>6}  {:>6}  {:>6}",
            "Number", "Single", "Double", "Treble"
        );
        for (number, single, double, treble) in self.rows() {
            let treble = treble.map_or_else(|| "-".to_string(), |v| v.to_string());
            let _ = writeln!(
                buffer,
                "{number:>6}  {single:>6}  {double:>6}  {treble:>6}"
            );
        }
        let _ = writeln!(buffer, "{}", self.note);
        buffer
    }

    fn render_rich(&self) -> String {
        let mut buffer = String::new();
        let _ = writeln!(buffer, "| Number | Single | Double | Treble |");
        let _ = writeln!(buffer, "|-------:|-------:|-------:|-------:|");
        for (number, single, double, treble) in self.rows() {
            let treble = treble.map_or_else(|| "-".to_string(), |v| v.to_string());
            let _ = writeln!(buffer, "| {number} | {single} | **{double}** | {treble} |");
        }
        let _ = writeln!(buffer, "\n> {}", self.note);
        buffer
    }

    fn render_compact(&self) -> String {
        let mut buffer = String::new();
        for dart in self.triples.iter().chain(&self.doubles) {
            let _ = writeln!(buffer, "{}={}", dart.code, dart.value);
        }
        buffer
    }
}
