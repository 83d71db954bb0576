mod common;
mod logic;

use anyhow::{Context, Result, bail};
use clap::{Parser, ValueEnum};
use colored::Colorize;
use std::fs::File;
use std::io::{BufWriter, Write, stdout};
use std::path::PathBuf;
use std::time::Instant;

use common::split_csv;
use logic::{Report, SweepConfig, load_document, play_path, run_sweep, summarize};

const DEFAULT_DATA: &str = concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/../matchquiz-web/static/quiz-data.json"
);

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum TestMode {
    /// Parse and validate the quiz document
    Validate,
    /// Play one answer path given with --answers
    Play,
    /// Score every answer path (or a seeded sample of them)
    Sweep,
}

#[derive(Debug, Parser)]
#[command(name = "matchquiz-tester", version)]
#[command(about = "QA tooling for the Matchquiz funnel - document validation and answer-path sweeps")]
struct Args {
    /// Test mode: validate, play, or sweep
    #[arg(long, value_enum, default_value_t = TestMode::Validate)]
    mode: TestMode,

    /// Quiz document to test
    #[arg(long, default_value = DEFAULT_DATA)]
    data: PathBuf,

    /// Option ids to pick, one per question (comma-separated, play mode only)
    #[arg(long, default_value = "")]
    answers: String,

    /// Largest answer space swept exhaustively before falling back to sampling
    #[arg(long, default_value_t = 100_000)]
    limit: u64,

    /// Paths drawn when sampling
    #[arg(long, default_value_t = 1_000)]
    samples: usize,

    /// Seed for sampled sweeps
    #[arg(long, default_value_t = 1337)]
    seed: u64,

    /// Output report format
    #[arg(long, default_value = "console")]
    #[arg(value_parser = ["json", "markdown", "console"])]
    report: String,

    /// Optional path to write the report output instead of stdout
    #[arg(long)]
    output: Option<PathBuf>,

    /// Print every swept path and its winner
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    if args.report == "console" {
        announce_banner();
    }
    let start_time = Instant::now();

    let document = load_document(&args.data)?;
    log::info!(
        "loaded {} ({} questions, {} destinations)",
        args.data.display(),
        document.quiz.questions.len(),
        document.sites.len()
    );

    let report = build_report(&args, &document)?;
    write_report(&args, &report, start_time)?;

    if !report.passed() {
        std::process::exit(1);
    }

    Ok(())
}

fn announce_banner() {
    println!("{}", "💘 Matchquiz Tester".bright_cyan().bold());
    println!("{}", "===================".cyan());
}

fn build_report(args: &Args, document: &matchquiz_core::QuizDocument) -> Result<Report> {
    match args.mode {
        TestMode::Validate => Ok(Report::Validate(summarize(document))),
        TestMode::Play => {
            let answers = split_csv(&args.answers);
            if answers.is_empty() {
                bail!("--answers is required in play mode");
            }
            Ok(Report::Play(play_path(document, &answers)?))
        }
        TestMode::Sweep => {
            let config = SweepConfig {
                limit: u128::from(args.limit),
                samples: args.samples,
                seed: args.seed,
                verbose: args.verbose,
            };
            Ok(Report::Sweep(run_sweep(document, &config)))
        }
    }
}

fn write_report(args: &Args, report: &Report, start_time: Instant) -> Result<()> {
    let mut output_target = OutputTarget::new(args.output.clone())?;

    match args.report.as_str() {
        "json" => logic::reports::generate_json_report(&mut output_target, report)?,
        "markdown" => logic::reports::generate_markdown_report(&mut output_target, report)?,
        _ => logic::reports::generate_console_report(
            &mut output_target,
            report,
            start_time.elapsed(),
        )?,
    }

    output_target.flush_inner()?;
    Ok(())
}

enum OutputTarget {
    Stdout(BufWriter<std::io::Stdout>),
    File(BufWriter<File>),
}

impl OutputTarget {
    fn new(path: Option<PathBuf>) -> Result<Self> {
        if let Some(path) = path {
            let file = File::create(&path)
                .with_context(|| format!("failed to create {}", path.display()))?;
            Ok(Self::File(BufWriter::new(file)))
        } else {
            Ok(Self::Stdout(BufWriter::new(stdout())))
        }
    }

    fn writer(&mut self) -> &mut dyn Write {
        match self {
            Self::Stdout(w) => w,
            Self::File(w) => w,
        }
    }

    fn flush_inner(&mut self) -> std::io::Result<()> {
        match self {
            Self::Stdout(w) => w.flush(),
            Self::File(w) => w.flush(),
        }
    }
}

impl Write for OutputTarget {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.writer().write(buf)
    }

    fn flush(&mut self) -> std::io::Result<()> {
        self.flush_inner()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use matchquiz_core::QuizDocument;

    fn base_args() -> Args {
        Args {
            mode: TestMode::Validate,
            data: PathBuf::from(DEFAULT_DATA),
            answers: String::new(),
            limit: 100_000,
            samples: 10,
            seed: 1337,
            report: "json".to_string(),
            output: None,
            verbose: false,
        }
    }

    fn bundled() -> QuizDocument {
        load_document(&PathBuf::from(DEFAULT_DATA)).unwrap()
    }

    fn temp_path(label: &str) -> PathBuf {
        std::env::temp_dir().join(format!(
            "matchquiz-main-{label}-{}",
            std::time::SystemTime::now()
                .duration_since(std::time::UNIX_EPOCH)
                .unwrap_or_default()
                .as_nanos()
        ))
    }

    #[test]
    fn play_mode_requires_answers() {
        let args = Args {
            mode: TestMode::Play,
            ..base_args()
        };
        let err = build_report(&args, &bundled()).unwrap_err();
        assert!(err.to_string().contains("--answers"));
    }

    #[test]
    fn sweep_mode_honours_limit() {
        let args = Args {
            mode: TestMode::Sweep,
            limit: 1,
            ..base_args()
        };
        let Report::Sweep(sweep) = build_report(&args, &bundled()).unwrap() else {
            panic!("expected sweep report");
        };
        assert_eq!(sweep.paths_checked, 10);
    }

    #[test]
    fn write_report_to_file() {
        let path = temp_path("report");
        let args = Args {
            output: Some(path.clone()),
            ..base_args()
        };
        let report = build_report(&args, &bundled()).unwrap();
        write_report(&args, &report, Instant::now()).unwrap();
        let content = std::fs::read_to_string(&path).unwrap();
        assert!(content.contains("\"mode\": \"validate\""));
        let _ = std::fs::remove_file(path);
    }

    #[test]
    fn output_target_rejects_missing_directory() {
        let missing = std::env::temp_dir()
            .join("matchquiz-missing-dir")
            .join("nested")
            .join("report.json");
        assert!(OutputTarget::new(Some(missing)).is_err());
    }

    #[test]
    fn args_parse_from_command_line() {
        let args = Args::try_parse_from([
            "matchquiz-tester",
            "--mode",
            "play",
            "--answers",
            "40s,casual,asap,bad,speed",
            "--report",
            "markdown",
        ])
        .unwrap();
        assert!(matches!(args.mode, TestMode::Play));
        assert_eq!(split_csv(&args.answers).len(), 5);
        assert_eq!(args.report, "markdown");
        assert!(Args::try_parse_from(["matchquiz-tester", "--report", "csv"]).is_err());
    }
}
