//! Lays analysis records out as one flat spreadsheet grid.
//!
//! Rows are only ever appended. A merge region is computed from the row index
//! at the moment its row is pushed, so each record is laid out without knowing
//! how many records precede or follow it. Styles are fixed by the block that
//! emits a row and are never inferred from cell text afterwards.

use crate::analyze::scoring::display_score;
use crate::types::campaign::AnalysisRecord;
use serde::Serialize;

pub const REPORT_COLUMNS: usize = 8;
pub const LAST_COLUMN: usize = REPORT_COLUMNS - 1;
const HALF_SPLIT: usize = REPORT_COLUMNS / 2;

pub const COLUMN_WIDTHS: [f64; REPORT_COLUMNS] = [20.0, 18.0, 15.0, 15.0, 15.0, 15.0, 15.0, 15.0];

/// Longest text a spreadsheet cell accepts, in characters.
pub const MAX_CELL_CHARS: usize = 32_767;

/// Blank rows between the end of one record and the start of the next.
pub const RECORD_GAP_ROWS: usize = 2;
/// Rows occupied by a single record, its inner spacers included.
pub const RECORD_ROWS: usize = 16;

pub const CAMPAIGN_LABEL: &str = "Campaign Message:";
pub const CTA_LABEL: &str = "Call to Action:";
pub const SCORE_SECTION: &str = "Granular Score Breakdown";
pub const SCORE_ROW_LABEL: &str = "Score";
pub const JUSTIFICATION_ROW_LABEL: &str = "Justification";
pub const SCORE_COLUMNS: [&str; 7] = [
    "Confidence Score",
    "Strategic Fit",
    "Emotion",
    "Clarity",
    "CTA Strength",
    "Relevance",
    "Shareability",
];
pub const SUMMARY_SECTION: &str = "AI Strategic Summary";
pub const STRENGTHS_LABEL: &str = "Key Strengths";
pub const REVISIONS_LABEL: &str = "Areas for Revision";
pub const SUGGESTION_SECTION: &str = "AI Suggested Revision";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CellStyle {
    Header,
    Subheader,
    Body,
    ScoreHeader,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum Cell {
    Empty,
    Styled(String, CellStyle),
}

impl Cell {
    pub fn text(&self) -> Option<&str> {
        match self {
            Self::Empty => None,
            Self::Styled(text, _) => Some(text),
        }
    }

    pub fn style(&self) -> Option<CellStyle> {
        match self {
            Self::Empty => None,
            Self::Styled(_, style) => Some(*style),
        }
    }
}

/// What a row is, decided by the block that emits it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RowKind {
    /// Label cell plus the campaign text it names.
    Identification,
    SectionHeader,
    ScoreColumns,
    Body,
    Spacer,
}

impl RowKind {
    /// Spacer rows never carry cells, so their arm is never consulted.
    fn cell_style(self, column: usize) -> CellStyle {
        match self {
            Self::Identification if column == 0 => CellStyle::Subheader,
            Self::Identification | Self::Body | Self::Spacer => CellStyle::Body,
            Self::SectionHeader => CellStyle::Header,
            Self::ScoreColumns => CellStyle::ScoreHeader,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Row {
    pub kind: RowKind,
    pub cells: Vec<Cell>,
}

/// Inclusive rectangle in absolute grid coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MergeRegion {
    pub start_row: usize,
    pub start_col: usize,
    pub end_row: usize,
    pub end_col: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportGrid {
    pub rows: Vec<Row>,
    pub merges: Vec<MergeRegion>,
    pub column_widths: [f64; REPORT_COLUMNS],
}

/// Append-only accumulator; the next free row index is the row count.
#[derive(Debug, Default)]
struct GridBuilder {
    rows: Vec<Row>,
    merges: Vec<MergeRegion>,
}

impl GridBuilder {
    fn cursor(&self) -> usize {
        self.rows.len()
    }

    /// `None` leaves a column empty; styles come from the row kind.
    fn push(&mut self, kind: RowKind, values: Vec<Option<String>>) -> usize {
        let row = self.cursor();
        let cells = values
            .into_iter()
            .enumerate()
            .map(|(column, value)| match value {
                None => Cell::Empty,
                Some(text) => Cell::Styled(fit_cell_text(text), kind.cell_style(column)),
            })
            .collect();
        self.rows.push(Row { kind, cells });
        row
    }

    /// Pushes a row and merges each `(first, last)` column span of it.
    fn push_merged(
        &mut self,
        kind: RowKind,
        values: Vec<Option<String>>,
        spans: &[(usize, usize)],
    ) {
        let row = self.push(kind, values);
        self.merges
            .extend(spans.iter().map(|&(start_col, end_col)| MergeRegion {
                start_row: row,
                start_col,
                end_row: row,
                end_col,
            }));
    }

    fn spacer(&mut self, count: usize) {
        for _ in 0..count {
            self.rows.push(Row {
                kind: RowKind::Spacer,
                cells: Vec::new(),
            });
        }
    }

    fn finish(self) -> ReportGrid {
        ReportGrid {
            rows: self.rows,
            merges: self.merges,
            column_widths: COLUMN_WIDTHS,
        }
    }
}

const FULL_WIDTH: &[(usize, usize)] = &[(0, LAST_COLUMN)];
const AFTER_LABEL: &[(usize, usize)] = &[(1, LAST_COLUMN)];
const HALVES: &[(usize, usize)] = &[(0, HALF_SPLIT - 1), (HALF_SPLIT, LAST_COLUMN)];

/// Lays out records in input order; an empty slice yields an empty grid.
pub fn serialize(records: &[AnalysisRecord]) -> ReportGrid {
    let mut builder = GridBuilder::default();
    for (index, record) in records.iter().enumerate() {
        if index > 0 {
            builder.spacer(RECORD_GAP_ROWS);
        }
        let start = builder.cursor();
        emit_record(&mut builder, record);
        debug_assert_eq!(builder.cursor() - start, RECORD_ROWS);
    }

    let grid = builder.finish();
    tracing::info!(
        records = records.len(),
        rows = grid.rows.len(),
        merges = grid.merges.len(),
        "report grid laid out"
    );
    grid
}

fn emit_record(builder: &mut GridBuilder, record: &AnalysisRecord) {
    identification_block(builder, record);
    builder.spacer(1);
    score_block(builder, record);
    builder.spacer(1);
    summary_block(builder, record);
    builder.spacer(1);
    coaching_block(builder, record);
    builder.spacer(1);
    suggestion_block(builder, record);
}

fn identification_block(builder: &mut GridBuilder, record: &AnalysisRecord) {
    builder.push_merged(
        RowKind::Identification,
        vec![
            Some(CAMPAIGN_LABEL.to_string()),
            Some(record.campaign.campaign_message.clone()),
        ],
        AFTER_LABEL,
    );
    builder.push_merged(
        RowKind::Identification,
        vec![
            Some(CTA_LABEL.to_string()),
            Some(record.campaign.call_to_action.clone()),
        ],
        AFTER_LABEL,
    );
}

fn score_block(builder: &mut GridBuilder, record: &AnalysisRecord) {
    let scores = &record.scores;
    builder.push_merged(
        RowKind::SectionHeader,
        vec![Some(SCORE_SECTION.to_string())],
        FULL_WIDTH,
    );

    let mut columns = vec![None];
    columns.extend(SCORE_COLUMNS.iter().map(|name| Some(name.to_string())));
    builder.push(RowKind::ScoreColumns, columns);

    builder.push(
        RowKind::Body,
        vec![
            Some(SCORE_ROW_LABEL.to_string()),
            Some(format!("{:.2}", record.confidence_score)),
            Some(display_score(scores.subjective_fit.score)),
            Some(display_score(scores.emotion.score)),
            Some(display_score(scores.clarity_and_impact.score)),
            Some(display_score(scores.cta_strength.score)),
            Some(display_score(scores.trend_relevance.score)),
            Some(display_score(scores.shareability.score)),
        ],
    );

    // Confidence is dominated by strategic fit, so both columns carry the fit justification.
    builder.push(
        RowKind::Body,
        vec![
            Some(JUSTIFICATION_ROW_LABEL.to_string()),
            Some(scores.subjective_fit.justification.clone()),
            Some(scores.subjective_fit.justification.clone()),
            Some(scores.emotion.justification.clone()),
            Some(scores.clarity_and_impact.justification.clone()),
            Some(scores.cta_strength.justification.clone()),
            Some(scores.trend_relevance.justification.clone()),
            Some(scores.shareability.justification.clone()),
        ],
    );
}

fn summary_block(builder: &mut GridBuilder, record: &AnalysisRecord) {
    builder.push_merged(
        RowKind::SectionHeader,
        vec![Some(SUMMARY_SECTION.to_string())],
        FULL_WIDTH,
    );
    builder.push_merged(
        RowKind::Body,
        vec![Some(record.recommendation.summary.clone())],
        FULL_WIDTH,
    );
}

fn coaching_block(builder: &mut GridBuilder, record: &AnalysisRecord) {
    builder.push_merged(
        RowKind::SectionHeader,
        half_split_row(STRENGTHS_LABEL.to_string(), REVISIONS_LABEL.to_string()),
        HALVES,
    );
    builder.push_merged(
        RowKind::Body,
        half_split_row(
            numbered(&record.recommendation.strengths),
            numbered(&record.recommendation.revisions),
        ),
        HALVES,
    );
}

fn suggestion_block(builder: &mut GridBuilder, record: &AnalysisRecord) {
    builder.push_merged(
        RowKind::SectionHeader,
        vec![Some(SUGGESTION_SECTION.to_string())],
        FULL_WIDTH,
    );
    builder.push_merged(
        RowKind::Body,
        vec![Some(format!("\"{}\"", record.recommendation.suggestion))],
        FULL_WIDTH,
    );
}

/// Collaborator text is unbounded; anything past the cell limit is cut off.
fn fit_cell_text(text: String) -> String {
    match text.char_indices().nth(MAX_CELL_CHARS) {
        Some((cut, _)) => {
            tracing::warn!(
                chars = text.chars().count(),
                limit = MAX_CELL_CHARS,
                "cell text truncated"
            );
            text[..cut].to_string()
        }
        None => text,
    }
}

fn half_split_row(left: String, right: String) -> Vec<Option<String>> {
    let mut values = vec![None; HALF_SPLIT + 1];
    values[0] = Some(left);
    values[HALF_SPLIT] = Some(right);
    values
}

fn numbered(items: &[String]) -> String {
    items
        .iter()
        .enumerate()
        .map(|(index, item)| format!("{}. {}", index + 1, item))
        .collect::<Vec<_>>()
        .join("\n")
}
