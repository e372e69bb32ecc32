// Command-line front end for the sankshep summarizer.
use std::io::{self, IsTerminal, Read, Write};
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use termcolor::{Color, ColorChoice, ColorSpec, StandardStream, WriteColor};
use tracing::info;

use sankshep::batch::{summarize_dir, write_report, BatchSettings};
use sankshep::document::read_document;
use sankshep::nlp::language::{script_profile, LANGUAGES};
use sankshep::nlp::stats::readability;
use sankshep::validation::{validate_language_code, validate_max_keywords};
use sankshep::{
    detect_language, extract_keywords, get_text_stats, setup_logging, Config, SummaryLength,
    SummaryOptions, SummaryResult,
};

#[derive(Parser)]
#[command(name = "sankshep", about = "Multilingual extractive text summarizer")]
struct Cli {
    /// Emit logs as JSON lines on stderr.
    #[arg(long, global = true)]
    log_json: bool,
    #[command(subcommand)]
    command: Commands,
}

#[derive(clap::Args, Debug, Clone)]
struct Input {
    /// Read the text from a file (txt, md, csv, json, pdf).
    #[arg(short, long, conflicts_with = "text")]
    file: Option<PathBuf>,
    /// Text given inline. Without --file or --text, stdin is read.
    #[arg(short, long)]
    text: Option<String>,
}

#[derive(Subcommand)]
enum Commands {
    Summarize {
        #[command(flatten)]
        input: Input,
        /// short, medium or long. Defaults to SANKSHEP_LENGTH or medium.
        #[arg(short, long)]
        length: Option<SummaryLength>,
        /// Language code; detected from the script when omitted.
        #[arg(long)]
        language: Option<String>,
        #[arg(long)]
        preserve_formatting: bool,
        #[arg(long)]
        no_keywords: bool,
        #[arg(short = 'k', long)]
        max_keywords: Option<usize>,
        /// Skip the minimum-length and language checks.
        #[arg(long)]
        no_validate: bool,
        #[arg(long)]
        json: bool,
    },
    Stats {
        #[command(flatten)]
        input: Input,
        /// Include a readability estimate.
        #[arg(long)]
        readability: bool,
    },
    Detect {
        #[command(flatten)]
        input: Input,
        /// Also print per-script character counts.
        #[arg(long)]
        scripts: bool,
    },
    Keywords {
        #[command(flatten)]
        input: Input,
        #[arg(short, long, default_value_t = 10)]
        count: usize,
        #[arg(long)]
        language: Option<String>,
    },
    /// List supported languages.
    Languages,
    /// Summarize every supported document under a directory.
    Batch {
        #[arg(short, long)]
        dir: PathBuf,
        #[arg(short, long, default_value = "sankshep_report.json")]
        out: PathBuf,
        #[arg(short, long)]
        length: Option<SummaryLength>,
        /// Maximum number of files; overrides SANKSHEP_BATCH_LIMIT.
        #[arg(long)]
        limit: Option<usize>,
    },
}

fn read_input(input: &Input) -> Result<String> {
    if let Some(text) = &input.text {
        return Ok(text.clone());
    }
    if let Some(path) = &input.file {
        return read_document(path);
    }
    if io::stdin().is_terminal() {
        bail!("no input: pass --file, --text, or pipe text on stdin");
    }
    let mut s = String::new();
    io::stdin().read_to_string(&mut s).context("failed to read stdin")?;
    Ok(s)
}

fn heading<W: WriteColor>(out: &mut W, label: &str) -> io::Result<()> {
    out.set_color(ColorSpec::new().set_fg(Some(Color::Cyan)).set_bold(true))?;
    write!(out, "{label}")?;
    out.reset()
}

fn render_summary<W: WriteColor>(out: &mut W, result: &SummaryResult) -> io::Result<()> {
    heading(out, "Summary")?;
    writeln!(out, " ({})", result.detected_language)?;
    writeln!(out, "{}", result.summary)?;
    writeln!(out)?;
    if !result.keywords.is_empty() {
        heading(out, "Keywords: ")?;
        writeln!(out, "{}", result.keywords.join(", "))?;
    }
    heading(out, "Words: ")?;
    writeln!(
        out,
        "{} -> {} (ratio {:.2})",
        result.original_stats.words, result.summary_stats.words, result.compression_ratio
    )?;
    heading(out, "Confidence: ")?;
    writeln!(out, "{:.2}", result.confidence)
}

fn run_summarize(
    config: &Config,
    text: &str,
    options: &SummaryOptions,
    validate: bool,
) -> Result<SummaryResult> {
    if validate {
        config.validation_policy().validate_text(text)?;
        validate_max_keywords(options.max_keywords)?;
        if let Some(code) = &options.language {
            validate_language_code(code)?;
        }
    }
    let result = config.summarizer().summarize(text, options)?;
    Ok(result)
}

fn run_batch(config: &Config, dir: &Path, out: &Path, options: &SummaryOptions, limit: usize) -> Result<()> {
    let settings = BatchSettings { limit, show_progress: io::stderr().is_terminal() };
    let report = summarize_dir(&config.summarizer(), dir, options, settings)?;
    write_report(&report, out)?;
    info!(path = %out.display(), "wrote batch report");
    println!(
        "Wrote {} summaries ({} failed) to {}",
        report.summaries.len(),
        report.failures.len(),
        out.display()
    );
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    setup_logging(cli.log_json);
    let config = Config::from_env();
    let mut stdout = StandardStream::stdout(if io::stdout().is_terminal() {
        ColorChoice::Auto
    } else {
        ColorChoice::Never
    });

    match cli.command {
        Commands::Summarize {
            input,
            length,
            language,
            preserve_formatting,
            no_keywords,
            max_keywords,
            no_validate,
            json,
        } => {
            let text = read_input(&input)?;
            let options = SummaryOptions {
                length: length.unwrap_or(config.default_length),
                language,
                preserve_formatting,
                include_keywords: !no_keywords,
                max_keywords: max_keywords.unwrap_or(config.max_keywords),
            };
            let result = run_summarize(&config, &text, &options, !no_validate)?;
            if json {
                serde_json::to_writer_pretty(&mut stdout, &result)?;
                writeln!(stdout)?;
            } else {
                render_summary(&mut stdout, &result)?;
            }
        }
        Commands::Stats { input, readability: with_readability } => {
            let text = read_input(&input)?;
            let mut value = serde_json::to_value(get_text_stats(&text))?;
            if with_readability {
                value["readability"] = serde_json::to_value(readability(&text))?;
            }
            serde_json::to_writer_pretty(&mut stdout, &value)?;
            writeln!(stdout)?;
        }
        Commands::Detect { input, scripts } => {
            let text = read_input(&input)?;
            writeln!(stdout, "{}", detect_language(&text))?;
            if scripts {
                for (script, count) in script_profile(&text).into_iter().filter(|(_, n)| *n > 0) {
                    writeln!(stdout, "  {script}: {count}")?;
                }
            }
        }
        Commands::Keywords { input, count, language } => {
            let text = read_input(&input)?;
            let language = language.unwrap_or_else(|| detect_language(&text));
            for keyword in extract_keywords(&text, &language, count) {
                writeln!(stdout, "{keyword}")?;
            }
        }
        Commands::Languages => {
            for lang in LANGUAGES.iter() {
                writeln!(
                    stdout,
                    "{:<4} {:<10} {:<12} {}",
                    lang.code, lang.name, lang.native_name, lang.script
                )?;
            }
        }
        Commands::Batch { dir, out, length, limit } => {
            let options = SummaryOptions {
                length: length.unwrap_or(config.default_length),
                ..config.summary_options()
            };
            run_batch(&config, &dir, &out, &options, limit.unwrap_or(config.batch_limit))?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use termcolor::NoColor;

    #[test]
    fn test_cli_parses_summarize() {
        let cli = Cli::try_parse_from(["sankshep", "summarize", "--text", "Hi. There.", "-l", "short"]).unwrap();
        match cli.command {
            Commands::Summarize { input, length, .. } => {
                assert_eq!(input.text.as_deref(), Some("Hi. There."));
                assert_eq!(length, Some(SummaryLength::Short));
            }
            _ => panic!("expected summarize"),
        }
    }

    #[test]
    fn test_cli_rejects_bad_length() {
        assert!(Cli::try_parse_from(["sankshep", "summarize", "--text", "x", "-l", "tiny"]).is_err());
    }

    #[test]
    fn test_cli_file_and_text_conflict() {
        assert!(Cli::try_parse_from(["sankshep", "stats", "--text", "x", "--file", "a.txt"]).is_err());
    }

    #[test]
    fn test_read_input_from_file() -> Result<()> {
        let dir = tempfile::tempdir()?;
        let path = dir.path().join("input.txt");
        std::fs::write(&path, "From a file.")?;
        let input = Input { file: Some(path), text: None };
        assert_eq!(read_input(&input)?, "From a file.");
        Ok(())
    }

    #[test]
    fn test_run_summarize_validates() {
        let config = Config::default();
        let options = SummaryOptions::default();
        assert!(run_summarize(&config, "too short", &options, true).is_err());
        assert!(run_summarize(&config, "too short", &options, false).is_ok());

        let fr = SummaryOptions::default().with_language("fr");
        let text = "one two three four five six seven eight nine ten eleven.";
        assert!(run_summarize(&config, text, &fr, true).is_err());
    }

    #[test]
    fn test_render_summary() -> Result<()> {
        let config = Config::default();
        let result = run_summarize(
            &config,
            "Rust is fast. Rust is safe. Python is easy.",
            &SummaryOptions::default(),
            false,
        )?;
        let mut out = NoColor::new(Vec::new());
        render_summary(&mut out, &result)?;
        let rendered = String::from_utf8(out.into_inner())?;
        assert!(rendered.starts_with("Summary (en)"));
        assert!(rendered.contains("Keywords: rust"));
        assert!(rendered.contains("Confidence: "));
        Ok(())
    }

    #[test]
    fn test_run_batch_writes_report() -> Result<()> {
        let dir = tempfile::tempdir()?;
        std::fs::write(dir.path().join("a.txt"), "Alpha beta. Gamma delta.")?;
        let out = dir.path().join("out.json");
        run_batch(&Config::default(), dir.path(), &out, &SummaryOptions::default(), 0)?;
        assert!(out.exists());
        Ok(())
    }
}
