use super::grid::{Cell, CellStyle, MergeRegion, ReportGrid};
use crate::error::Result;
use crate::import::{CALL_TO_ACTION_COLUMN, CAMPAIGN_MESSAGE_COLUMN, KEYWORD_COLUMN};
use rust_xlsxwriter::{Color, ColNum, Format, FormatAlign, RowNum, Workbook, XlsxError};
use std::collections::HashSet;
use std::path::Path;

const HEADER_FILL: u32 = 0x4F46E5;
const HEADER_FONT_SIZE: u32 = 12;
const TEMPLATE_SHEET: &str = "Sheet1";
const TEMPLATE_COLUMN_WIDTH: f64 = 30.0;

/// Blank input workbooks users fill in before an analysis run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TemplateKind {
    Keywords,
    Campaigns,
}

impl TemplateKind {
    pub fn file_name(self) -> &'static str {
        match self {
            Self::Keywords => "Keywords_Template.xlsx",
            Self::Campaigns => "Campaigns_Template.xlsx",
        }
    }

    pub fn headers(self) -> &'static [&'static str] {
        match self {
            Self::Keywords => &[KEYWORD_COLUMN],
            Self::Campaigns => &[CAMPAIGN_MESSAGE_COLUMN, CALL_TO_ACTION_COLUMN],
        }
    }
}

fn format_for(style: CellStyle) -> Format {
    match style {
        CellStyle::Header => Format::new()
            .set_bold()
            .set_font_size(HEADER_FONT_SIZE)
            .set_font_color(Color::White)
            .set_background_color(Color::RGB(HEADER_FILL))
            .set_align(FormatAlign::Center)
            .set_align(FormatAlign::VerticalCenter),
        CellStyle::Subheader => Format::new()
            .set_bold()
            .set_text_wrap()
            .set_align(FormatAlign::Top),
        CellStyle::Body => Format::new().set_text_wrap().set_align(FormatAlign::Top),
        CellStyle::ScoreHeader => Format::new().set_bold().set_align(FormatAlign::Center),
    }
}

fn row_num(row: usize) -> Result<RowNum> {
    Ok(RowNum::try_from(row).map_err(|_| XlsxError::RowColumnLimitError)?)
}

fn col_num(col: usize) -> Result<ColNum> {
    Ok(ColNum::try_from(col).map_err(|_| XlsxError::RowColumnLimitError)?)
}

/// Writes the grid as the single sheet of a new workbook at `path`.
///
/// A merge takes its text and style from its top-left cell; the other cells
/// it covers are not written.
pub fn write_report(grid: &ReportGrid, path: &Path, sheet_name: &str) -> Result<()> {
    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();
    worksheet.set_name(sheet_name)?;

    for (col, width) in grid.column_widths.iter().enumerate() {
        worksheet.set_column_width(col_num(col)?, *width)?;
    }

    let covered: HashSet<(usize, usize)> = grid
        .merges
        .iter()
        .flat_map(|merge| {
            (merge.start_row..=merge.end_row).flat_map(move |row| {
                (merge.start_col..=merge.end_col).map(move |col| (row, col))
            })
        })
        .collect();

    for merge in &grid.merges {
        let anchor = anchor_cell(grid, merge);
        let format = anchor.style().map(format_for).unwrap_or_else(Format::new);
        worksheet.merge_range(
            row_num(merge.start_row)?,
            col_num(merge.start_col)?,
            row_num(merge.end_row)?,
            col_num(merge.end_col)?,
            anchor.text().unwrap_or_default(),
            &format,
        )?;
    }

    for (row_index, row) in grid.rows.iter().enumerate() {
        for (col_index, cell) in row.cells.iter().enumerate() {
            if covered.contains(&(row_index, col_index)) {
                continue;
            }
            let (row, col) = (row_num(row_index)?, col_num(col_index)?);
            if let Cell::Styled(text, style) = cell {
                worksheet.write_string_with_format(row, col, text, &format_for(*style))?;
            }
        }
    }

    workbook.save(path)?;
    tracing::info!(
        path = %path.display(),
        sheet = sheet_name,
        rows = grid.rows.len(),
        "report workbook written"
    );
    Ok(())
}

fn anchor_cell<'a>(grid: &'a ReportGrid, merge: &MergeRegion) -> &'a Cell {
    grid.rows
        .get(merge.start_row)
        .and_then(|row| row.cells.get(merge.start_col))
        .unwrap_or(&Cell::Empty)
}

/// Writes a header-only workbook for `kind` into `dir` and returns its path.
pub fn write_template(kind: TemplateKind, dir: &Path) -> Result<std::path::PathBuf> {
    let path = dir.join(kind.file_name());
    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();
    worksheet.set_name(TEMPLATE_SHEET)?;

    let bold = Format::new().set_bold();
    for (col, header) in kind.headers().iter().enumerate() {
        let col = col_num(col)?;
        worksheet.write_string_with_format(0, col, *header, &bold)?;
        worksheet.set_column_width(col, TEMPLATE_COLUMN_WIDTH)?;
    }

    workbook.save(&path)?;
    tracing::info!(path = %path.display(), "template workbook written");
    Ok(path)
}
