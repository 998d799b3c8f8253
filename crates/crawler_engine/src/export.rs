use std::path::{Path, PathBuf};

use serde_json::Value;

use crate::persist::{AtomicFileWriter, PersistError};

/// Prefix that keeps spreadsheet tools reading the file as UTF-8.
const UTF8_BOM: &str = "\u{FEFF}";

/// One CSV row's worth of crawl output.
#[derive(Debug, Clone, PartialEq)]
pub struct ExportRecord {
    pub url: String,
    pub status: u16,
    pub data: Option<Value>,
    pub html: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportSummary {
    pub row_count: usize,
    pub output_path: PathBuf,
}

#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("persist error: {0}")]
    Persist(#[from] PersistError),
}

/// Serializes results to CSV bytes: UTF-8 BOM, a `URL,Status,Result` header,
/// one row per record, rows joined with `\n` and no trailing newline.
///
/// The Result column carries the literal `HTML content` when a fragment is
/// present, else the string form of `data` (empty when absent or null).
/// Callers export only after a run has fully completed; partial result sets
/// are a caller error this function cannot detect.
pub fn results_to_csv(records: &[ExportRecord]) -> Vec<u8> {
    let mut rows = Vec::with_capacity(records.len() + 1);
    rows.push("URL,Status,Result".to_string());
    for record in records {
        rows.push(format!(
            "{},{},{}",
            quote_field(&record.url),
            record.status,
            quote_field(&result_column(record)),
        ));
    }

    let mut buffer = String::from(UTF8_BOM);
    buffer.push_str(&rows.join("\n"));
    buffer.into_bytes()
}

/// `url-results-<date>.csv`; the caller supplies the ISO date so this crate
/// stays clock-free.
pub fn export_filename(date_iso: &str) -> String {
    format!("url-results-{date_iso}.csv")
}

/// Serializes and writes the CSV artifact through the atomic writer.
pub fn write_results_csv(
    output_dir: &Path,
    filename: &str,
    records: &[ExportRecord],
) -> Result<ExportSummary, ExportError> {
    let bytes = results_to_csv(records);
    let writer = AtomicFileWriter::new(output_dir.to_path_buf());
    let output_path = writer.write(filename, &bytes)?;
    log::info!("exported {} rows to {:?}", records.len(), output_path);
    Ok(ExportSummary {
        row_count: records.len(),
        output_path,
    })
}

// Wraps the field in double quotes, doubling embedded quotes per RFC 4180.
fn quote_field(value: &str) -> String {
    format!("\"{}\"", value.replace('"', "\"\""))
}

fn result_column(record: &ExportRecord) -> String {
    if record.html.is_some() {
        return "HTML content".to_string();
    }
    match &record.data {
        None | Some(Value::Null) => String::new(),
        Some(Value::String(text)) => text.clone(),
        Some(other) => other.to_string(),
    }
}
