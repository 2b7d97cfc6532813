//! Print a Chinese/English character census for PDF files
//!
//! Usage:
//!   cargo run --release --bin census_report -- paper.pdf other.pdf
//!   cargo run --release --bin census_report -- --format json --zh paper.pdf

use pdf_census::converters::{render_statistics, ReportFormat, ReportOptions};
use pdf_census::extractors::LopdfExtractor;
use pdf_census::{CensusConfig, CensusSession};
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Debug)]
struct ReportConfig {
    paths: Vec<PathBuf>,
    format: ReportFormat,
    chinese_labels: bool,
    strict: bool,
}

impl ReportConfig {
    fn from_args() -> Result<Self, String> {
        let args: Vec<String> = std::env::args().skip(1).collect();
        Self::parse(&args)
    }

    /// Parse arguments, program name excluded. Everything after `--` is a path.
    fn parse(args: &[String]) -> Result<Self, String> {
        let mut paths = Vec::new();
        let mut format = ReportFormat::PlainText;
        let mut chinese_labels = false;
        let mut strict = false;

        let mut only_paths = false;
        let mut i = 0;
        while i < args.len() {
            if only_paths {
                paths.push(PathBuf::from(&args[i]));
                i += 1;
                continue;
            }
            match args[i].as_str() {
                "--format" | "-f" => {
                    i += 1;
                    format = match args.get(i).map(String::as_str) {
                        Some("text") => ReportFormat::PlainText,
                        Some("markdown") | Some("md") => ReportFormat::Markdown,
                        Some("json") => ReportFormat::Json,
                        Some(other) => return Err(format!("unknown format '{}'", other)),
                        None => return Err("--format needs a value".to_string()),
                    };
                },
                "--zh" => {
                    chinese_labels = true;
                },
                "--strict" => {
                    strict = true;
                },
                "--" => {
                    only_paths = true;
                },
                other if other.starts_with('-') && other != "-" => {
                    return Err(format!("unknown option '{}'", other));
                },
                other => paths.push(PathBuf::from(other)),
            }
            i += 1;
        }

        if paths.is_empty() {
            return Err("no input files".to_string());
        }

        Ok(Self {
            paths,
            format,
            chinese_labels,
            strict,
        })
    }
}

fn main() -> ExitCode {
    env_logger::init();

    let config = match ReportConfig::from_args() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {}", e);
            eprintln!("Usage: census_report [--format text|markdown|json] [--zh] [--strict] FILE...");
            return ExitCode::from(2);
        },
    };

    let census_config = if config.strict {
        CensusConfig::strict()
    } else {
        CensusConfig::lenient()
    };
    let mut session = CensusSession::with_config(census_config);
    let mut error_count = 0;

    for path in &config.paths {
        if let Err(e) = session.load_file(path, &LopdfExtractor) {
            eprintln!("{}: {} ({})", path.display(), e.user_message(), e);
            error_count += 1;
            continue;
        }

        let options = ReportOptions {
            format: config.format,
            chinese_labels: config.chinese_labels,
            file_name: session.file_name().map(str::to_string),
        };
        match render_statistics(session.statistics(), &options) {
            Ok(report) => println!("{}", report),
            Err(e) => {
                eprintln!("{}: {}", path.display(), e);
                error_count += 1;
            },
        }
    }

    if error_count > 0 {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}
