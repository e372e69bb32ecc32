// Reading input documents from disk.
use std::fs::File;
use std::io::Read;
use std::panic;
use std::path::{Path, PathBuf};

use anyhow::{anyhow, bail, Context, Result};
use walkdir::WalkDir;

/// Extensions treated as summarizable documents. Anything else (images, archives,
/// build output) is skipped when walking a directory.
pub const ALLOWED_EXTENSIONS: [&str; 5] = ["txt", "md", "csv", "json", "pdf"];

pub fn read_text_file(p: &Path) -> Result<String> {
    let mut s = String::new();
    let mut f = File::open(p).with_context(|| format!("failed to open {}", p.display()))?;
    f.read_to_string(&mut s)
        .with_context(|| format!("failed to read {} as UTF-8", p.display()))?;
    Ok(s)
}

fn extension(p: &Path) -> &str {
    p.extension().and_then(|s| s.to_str()).unwrap_or("")
}

pub fn is_supported_document(p: &Path) -> bool {
    ALLOWED_EXTENSIONS.contains(&extension(p))
}

// pdf-extract panics on some malformed files; turn that into an error so a
// batch run records the file instead of unwinding.
fn read_pdf(p: &Path) -> Result<String> {
    match panic::catch_unwind(|| pdf_extract::extract_text(p)) {
        Ok(Ok(text)) => Ok(text),
        Ok(Err(e)) => Err(anyhow!("PDF extraction failed: {}", e)),
        Err(_) => Err(anyhow!("PDF extraction panicked on {}", p.display())),
    }
}

pub fn read_document(p: &Path) -> Result<String> {
    match extension(p) {
        "pdf" => read_pdf(p),
        "txt" | "md" | "csv" | "json" => read_text_file(p),
        other => bail!("Unsupported file format: {}", other),
    }
}

/// Supported documents under `dir`, sorted by path.
pub fn collect_documents(dir: &Path) -> Vec<PathBuf> {
    let mut files: Vec<PathBuf> = WalkDir::new(dir)
        .into_iter()
        .filter_map(|e| e.ok())
        .filter(|e| e.file_type().is_file())
        .filter(|e| is_supported_document(e.path()))
        .map(|e| e.path().to_path_buf())
        .collect();
    files.sort();
    files
}
