//! Template rendering for CLI output using outstanding

use console::Style;
use outstanding::Theme;
use repoloclib::{FileRow, ReportTable, TableRow};
use serde::Serialize;

/// Include template at compile time
const REPORT_TEMPLATE: &str = include_str!("../templates/report.jinja");

/// Width of the language column
const LANGUAGE_WIDTH: usize = 12;
/// Width of the file path column
const PATH_WIDTH: usize = 50;

/// How results are written to stdout.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Table,
    Json,
}

impl OutputFormat {
    pub fn from_name(name: &str) -> Self {
        match name {
            "json" => OutputFormat::Json,
            _ => OutputFormat::Table,
        }
    }
}

/// File row data for template rendering
#[derive(Debug, Serialize)]
struct TemplateFile {
    /// Pre-padded path (left-aligned, padded to PATH_WIDTH)
    path: String,
    lines: String,
    percentage: String,
}

/// Language row data for template rendering
#[derive(Debug, Serialize)]
struct TemplateRow {
    /// Pre-padded language name
    name: String,
    lines: String,
    percentage: String,
    files: Vec<TemplateFile>,
    more_files: Option<String>,
}

/// Data context for the report template
#[derive(Debug, Serialize)]
struct ReportContext {
    title: String,
    total_lines: String,
    has_lines: bool,
    rows: Vec<TemplateRow>,
    footer: String,
}

fn to_template_file(file: &FileRow) -> TemplateFile {
    TemplateFile {
        path: format!("{:<width$}", file.path, width = PATH_WIDTH),
        lines: file.lines.clone(),
        percentage: file.percentage.clone(),
    }
}

fn to_template_row(row: &TableRow) -> TemplateRow {
    TemplateRow {
        name: format!("{:<width$}", row.label, width = LANGUAGE_WIDTH),
        lines: row.lines.clone(),
        percentage: row.percentage.clone(),
        files: row.files.iter().map(to_template_file).collect(),
        more_files: row.more_files.clone(),
    }
}

/// Create the theme with styles
fn create_theme() -> Theme {
    Theme::new().add("title", Style::new().bold())
}

/// Render a report in the requested format.
pub fn render_report(table: &ReportTable, format: OutputFormat) -> anyhow::Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(table)?),
        OutputFormat::Table => {
            let context = ReportContext {
                title: table.title.clone(),
                total_lines: table.total_lines.clone(),
                has_lines: table.has_lines,
                rows: table.rows.iter().map(to_template_row).collect(),
                footer: table.footer.clone(),
            };
            let value = serde_json::to_value(&context)?;
            let theme = create_theme();
            outstanding::render(REPORT_TEMPLATE, &value, &theme)
                .map_err(|e| anyhow::anyhow!("failed to render report: {e}"))
        }
    }
}
