// Directory batch mode: summarize every supported document under a directory
// in parallel and write one JSON report.
use std::fs::File;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use indicatif::{ProgressBar, ProgressDrawTarget, ProgressStyle};
use parking_lot::Mutex;
use rayon::prelude::*;
use serde::Serialize;
use tracing::{info, warn};

use crate::document::{collect_documents, read_document};
use crate::nlp::summarization::{Summarizer, SummaryOptions, SummaryResult};

#[derive(Debug, Serialize)]
pub struct FileSummary {
    pub path: String,
    pub result: SummaryResult,
}

#[derive(Debug, Clone, Serialize)]
pub struct FileFailure {
    pub path: String,
    pub error: String,
}

#[derive(Debug, Serialize)]
pub struct BatchReport {
    pub generated_at: DateTime<Utc>,
    pub total_files: usize,
    pub summaries: Vec<FileSummary>,
    pub failures: Vec<FileFailure>,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct BatchSettings {
    /// Zero processes every file.
    pub limit: usize,
    pub show_progress: bool,
}

fn summarize_file(summarizer: &Summarizer, path: &Path, options: &SummaryOptions) -> Result<SummaryResult> {
    let text = read_document(path)?;
    let result = summarizer
        .summarize(&text, options)
        .with_context(|| format!("failed to summarize {}", path.display()))?;
    Ok(result)
}

pub fn summarize_dir(
    summarizer: &Summarizer,
    dir: &Path,
    options: &SummaryOptions,
    settings: BatchSettings,
) -> Result<BatchReport> {
    let mut files: Vec<PathBuf> = collect_documents(dir);
    if settings.limit > 0 && files.len() > settings.limit {
        info!(found = files.len(), limit = settings.limit, "truncating batch");
        files.truncate(settings.limit);
    }

    let pb = ProgressBar::new(files.len() as u64);
    if settings.show_progress {
        pb.set_style(
            ProgressStyle::with_template("{spinner:.green} [{elapsed_precise}] {wide_bar} {pos}/{len} {msg}")?
                .progress_chars("=>-"),
        );
    } else {
        pb.set_draw_target(ProgressDrawTarget::hidden());
    }

    let failures: Mutex<Vec<FileFailure>> = Mutex::new(Vec::new());
    let summaries: Vec<FileSummary> = files
        .par_iter()
        .filter_map(|p| {
            let outcome = summarize_file(summarizer, p, options);
            pb.inc(1);
            match outcome {
                Ok(result) => Some(FileSummary { path: p.to_string_lossy().to_string(), result }),
                Err(e) => {
                    warn!(path = %p.display(), error = %e, "skipping file");
                    failures.lock().push(FileFailure {
                        path: p.to_string_lossy().to_string(),
                        error: format!("{e:#}"),
                    });
                    None
                }
            }
        })
        .collect();

    pb.finish_with_message("summarizing files");

    let mut failures = failures.into_inner();
    failures.sort_by(|a, b| a.path.cmp(&b.path));

    info!(summarized = summaries.len(), failed = failures.len(), "batch complete");

    Ok(BatchReport {
        generated_at: Utc::now(),
        total_files: files.len(),
        summaries,
        failures,
    })
}

pub fn write_report(report: &BatchReport, out: &Path) -> Result<()> {
    let fout = File::create(out).with_context(|| format!("failed to create {}", out.display()))?;
    serde_json::to_writer_pretty(fout, report)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_summarize_dir_collects_results() -> Result<()> {
        let dir = TempDir::new()?;
        std::fs::write(
            dir.path().join("doc1.txt"),
            "Rust is fast. Rust is safe. Rust has a great community. Python is easy.",
        )?;
        std::fs::write(dir.path().join("doc2.md"), "One line only")?;
        std::fs::write(dir.path().join("ignored.png"), "binary")?;

        let report = summarize_dir(&Summarizer::new(), dir.path(), &SummaryOptions::default(), BatchSettings::default())?;
        assert_eq!(report.total_files, 2);
        assert_eq!(report.summaries.len(), 2);
        assert!(report.failures.is_empty());
        assert!(report.summaries[0].path.ends_with("doc1.txt"));
        Ok(())
    }

    #[test]
    fn test_summarize_dir_records_failures() -> Result<()> {
        let dir = TempDir::new()?;
        std::fs::write(dir.path().join("bad.txt"), [0xff_u8, 0xfe, 0x00])?;
        std::fs::write(dir.path().join("good.txt"), "Fine text. More text.")?;

        let report = summarize_dir(&Summarizer::new(), dir.path(), &SummaryOptions::default(), BatchSettings::default())?;
        assert_eq!(report.summaries.len(), 1);
        assert_eq!(report.failures.len(), 1);
        assert!(report.failures[0].path.ends_with("bad.txt"));
        Ok(())
    }

    #[test]
    fn test_summarize_dir_survives_broken_pdf() -> Result<()> {
        let dir = TempDir::new()?;
        std::fs::write(dir.path().join("broken.pdf"), b"%PDF-1.7\ntruncated xref")?;
        std::fs::write(dir.path().join("good.txt"), "Fine text. More text.")?;

        let report = summarize_dir(&Summarizer::new(), dir.path(), &SummaryOptions::default(), BatchSettings::default())?;
        assert_eq!(report.summaries.len(), 1);
        assert_eq!(report.failures.len(), 1);
        assert!(report.failures[0].path.ends_with("broken.pdf"));
        assert!(report.failures[0].error.contains("PDF extraction"));
        Ok(())
    }

    #[test]
    fn test_summarize_dir_respects_limit() -> Result<()> {
        let dir = TempDir::new()?;
        for i in 0..4 {
            std::fs::write(dir.path().join(format!("doc{i}.txt")), "A. B.")?;
        }
        let settings = BatchSettings { limit: 3, show_progress: false };
        let report = summarize_dir(&Summarizer::new(), dir.path(), &SummaryOptions::default(), settings)?;
        assert_eq!(report.total_files, 3);
        Ok(())
    }

    #[test]
    fn test_write_report() -> Result<()> {
        let dir = TempDir::new()?;
        std::fs::write(dir.path().join("doc.txt"), "Alpha beta. Gamma delta.")?;
        let report = summarize_dir(&Summarizer::new(), dir.path(), &SummaryOptions::default(), BatchSettings::default())?;

        let out = dir.path().join("report.json");
        write_report(&report, &out)?;
        let json: serde_json::Value = serde_json::from_reader(File::open(&out)?)?;
        assert_eq!(json["total_files"], 1);
        assert_eq!(json["summaries"].as_array().map(Vec::len), Some(1));
        Ok(())
    }
}
