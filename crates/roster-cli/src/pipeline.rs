//! End-to-end flows wiring ingestion, transformation, and output.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing::{info, info_span};

use roster_ingest::{
    ATTENDANCE_HEADER_TOKENS, ROSTER_HEADER_TOKENS, load_grid, locate_table, normalize_batch,
};
use roster_model::ProcessOptions;
use roster_output::{
    SheetLayout, build_attendance_sheet, build_grade_sheets, build_stats_sheet, build_summary,
    build_team_sheets, build_team_summary, write_workbook,
};
use roster_transform::{assemble, assemble_teams, build_attendance_rows, team_stats};

/// Row count per written sheet, for the run summary table.
#[derive(Debug, Clone)]
pub struct SheetCount {
    pub name: String,
    pub rows: usize,
}

/// Outcome of one pipeline run.
#[derive(Debug)]
pub struct RunResult {
    pub output: PathBuf,
    /// Zero-based row offset where the header was found.
    pub header_offset: usize,
    pub input_rows: usize,
    pub kept_rows: usize,
    pub sheets: Vec<SheetCount>,
}

/// Default output path: a timestamped file next to the input.
pub fn default_output_path(input: &Path, prefix: &str) -> PathBuf {
    let stamp = chrono::Local::now().format("%Y%m%d-%H%M%S");
    input.with_file_name(format!("{prefix}-{stamp}.xlsx"))
}

fn finish(
    output: PathBuf,
    header_offset: usize,
    input_rows: usize,
    kept_rows: usize,
    sheets: Vec<SheetLayout>,
) -> Result<RunResult> {
    let counts: Vec<SheetCount> = sheets
        .iter()
        .map(|sheet| SheetCount {
            name: sheet.name.clone(),
            rows: sheet.data_rows(),
        })
        .collect();
    write_workbook(&output, &sheets)
        .with_context(|| format!("write workbook {}", output.display()))?;
    Ok(RunResult {
        output,
        header_offset,
        input_rows,
        kept_rows,
        sheets: counts,
    })
}

/// Organizes a registration sheet into per-grade roster sheets with
/// sibling columns, plus the all-students summary.
pub fn run_organize(input: &Path, output: PathBuf, options: &ProcessOptions) -> Result<RunResult> {
    let span = info_span!("organize", input = %input.display());
    let _guard = span.enter();

    let grid = load_grid(input).with_context(|| format!("read {}", input.display()))?;
    let table = locate_table(&grid, ROSTER_HEADER_TOKENS)?;
    let records = normalize_batch(&table.records);
    info!(rows = records.len(), header_offset = table.header_offset, "input loaded");

    let batch = assemble(&records, options);
    let mut sheets = build_grade_sheets(&batch.groups);
    sheets.push(build_summary(&batch.all, options.sort_by));

    finish(output, table.header_offset, records.len(), batch.all.len(), sheets)
}

/// Divides a registration sheet into team buckets: one sheet per
/// canonical grade bucket, a lookup-backed summary, and statistics.
pub fn run_teams(input: &Path, output: PathBuf, options: &ProcessOptions) -> Result<RunResult> {
    let span = info_span!("teams", input = %input.display());
    let _guard = span.enter();

    let grid = load_grid(input).with_context(|| format!("read {}", input.display()))?;
    let table = locate_table(&grid, ROSTER_HEADER_TOKENS)?;
    let records = normalize_batch(&table.records);
    info!(rows = records.len(), header_offset = table.header_offset, "input loaded");

    let batch = assemble_teams(&records, options);
    let mut sheets = build_team_sheets(&batch.groups);
    sheets.push(build_team_summary(&batch.all, options.sort_by));
    sheets.push(build_stats_sheet(&team_stats(&batch.groups)));

    finish(output, table.header_offset, records.len(), batch.all.len(), sheets)
}

/// Builds a check-in sheet from a worker name roster.
pub fn run_attendance(input: &Path, output: PathBuf) -> Result<RunResult> {
    let span = info_span!("attendance", input = %input.display());
    let _guard = span.enter();

    let grid = load_grid(input).with_context(|| format!("read {}", input.display()))?;
    let table = locate_table(&grid, ATTENDANCE_HEADER_TOKENS)?;
    let records = normalize_batch(&table.records);
    info!(rows = records.len(), header_offset = table.header_offset, "input loaded");

    let rows = build_attendance_rows(&records)?;
    let sheet = build_attendance_sheet(&rows);

    finish(output, table.header_offset, records.len(), rows.len(), vec![sheet])
}
