use crate::config::ExportConfig;
use crate::core::report::FinalReport;
use crate::core::score::DetailRow;
use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

const CSV_HEADER: &str = "Dimension,Question,Rating\n";

/// Detail table as CSV, one row per answered question.
pub fn detail_csv(rows: &[DetailRow]) -> String {
    let mut out = String::from(CSV_HEADER);

    for row in rows {
        out.push_str(&format!(
            "{},{},{}\n",
            csv_escape(&row.dimension),
            csv_escape(&row.question),
            row.rating
        ));
    }

    out
}

/// Writes the detail CSV and the summary text into `out_dir`, creating it
/// first if needed. Returns the CSV path and the summary path.
pub fn write_exports(
    out_dir: &Path,
    files: &ExportConfig,
    report: &FinalReport,
) -> Result<(PathBuf, PathBuf)> {
    fs::create_dir_all(out_dir).with_context(|| format!("failed creating {}", out_dir.display()))?;

    let csv_path = out_dir.join(&files.csv_file);
    let summary_path = out_dir.join(&files.summary_file);
    write_detail_csv(&csv_path, &report.details)?;
    write_summary(&summary_path, &report.executive_summary)?;
    Ok((csv_path, summary_path))
}

pub fn write_detail_csv(path: &Path, rows: &[DetailRow]) -> Result<()> {
    fs::write(path, detail_csv(rows)).with_context(|| format!("failed writing {}", path.display()))
}

pub fn write_summary(path: &Path, summary: &str) -> Result<()> {
    fs::write(path, summary).with_context(|| format!("failed writing {}", path.display()))
}

/// Quote a field if it contains a comma, a quote or a line break.
fn csv_escape(s: &str) -> String {
    if s.contains(',') || s.contains('"') || s.contains('\n') || s.contains('\r') {
        format!("\"{}\"", s.replace('"', "\"\""))
    } else {
        s.to_string()
    }
}
