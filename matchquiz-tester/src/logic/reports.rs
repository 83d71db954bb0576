use anyhow::Result;
use colored::Colorize;
use std::io::Write;
use std::time::Duration;

use super::{PlayOutcome, Report, SweepReport, SweepStrategy, ValidationSummary};

pub fn generate_console_report<W: Write + ?Sized>(
    out: &mut W,
    report: &Report,
    total_duration: Duration,
) -> Result<()> {
    writeln!(out)?;
    writeln!(out, "{}", "📊 Matchquiz Test Results".bright_cyan().bold())?;
    writeln!(out, "{}", "=========================".cyan())?;

    match report {
        Report::Validate(summary) => console_validation(out, summary)?,
        Report::Play(outcome) => console_play(out, outcome)?,
        Report::Sweep(sweep) => console_sweep(out, sweep)?,
    }

    let status = if report.passed() {
        "✅ PASS".green()
    } else {
        "❌ FAIL".red()
    };
    writeln!(out)?;
    writeln!(out, "{status}")?;
    writeln!(out, "Total time: {total_duration:?}")?;
    Ok(())
}

fn console_validation<W: Write + ?Sized>(out: &mut W, summary: &ValidationSummary) -> Result<()> {
    writeln!(out, "Quiz: {}", summary.title.bold())?;
    writeln!(out, "Questions: {}", summary.questions)?;
    writeln!(out, "Destinations: {}", summary.sites.join(", "))?;
    writeln!(out, "Answer paths: {}", summary.answer_paths)?;
    if !summary.gaps.is_empty() {
        writeln!(out, "Catalog gaps:")?;
        for gap in &summary.gaps {
            writeln!(
                out,
                "  • {}",
                format!(
                    "question {} option '{}' scores unknown destination '{}'",
                    gap.question_id, gap.option_id, gap.key
                )
                .red()
            )?;
        }
    }
    Ok(())
}

fn console_play<W: Write + ?Sized>(out: &mut W, outcome: &PlayOutcome) -> Result<()> {
    writeln!(out, "Answers: {}", outcome.answers.join(" → "))?;
    writeln!(out, "Winner: {}", outcome.winner.green().bold())?;
    writeln!(out, "Hand-off: ?{}", outcome.handoff)?;
    match &outcome.site_name {
        Some(name) => writeln!(out, "Result: {name}")?,
        None => writeln!(out, "Result: {}", "not found".red())?,
    }
    writeln!(out, "Ranking:")?;
    for (key, score) in &outcome.ranking {
        writeln!(out, "  {key:12} {score:>4}")?;
    }
    Ok(())
}

fn console_sweep<W: Write + ?Sized>(out: &mut W, sweep: &SweepReport) -> Result<()> {
    writeln!(out, "Strategy: {}", strategy_label(sweep.strategy))?;
    writeln!(
        out,
        "Paths checked: {}/{}",
        sweep.paths_checked, sweep.total_paths
    )?;
    writeln!(out, "Winner distribution:")?;
    for (key, count) in &sweep.winners {
        writeln!(out, "  {key:12} {count:>6} ({:.1}%)", share(*count, sweep.paths_checked))?;
    }
    if !sweep.never_won.is_empty() {
        writeln!(
            out,
            "Never won: {}",
            sweep.never_won.join(", ").yellow()
        )?;
    }
    if !sweep.failures.is_empty() {
        writeln!(out, "Failures:")?;
        for failure in &sweep.failures {
            writeln!(out, "  • {}", failure.red())?;
        }
    }
    Ok(())
}

pub fn generate_json_report<W: Write + ?Sized>(out: &mut W, report: &Report) -> Result<()> {
    let json_output = serde_json::to_string_pretty(report)?;
    writeln!(out, "{json_output}")?;
    Ok(())
}

pub fn generate_markdown_report<W: Write + ?Sized>(out: &mut W, report: &Report) -> Result<()> {
    writeln!(out, "# Matchquiz Test Results\n")?;
    let status = if report.passed() { "✅" } else { "❌" };

    match report {
        Report::Validate(summary) => {
            writeln!(out, "## {status} Validation\n")?;
            writeln!(out, "- **Quiz**: {}", summary.title)?;
            writeln!(out, "- **Questions**: {}", summary.questions)?;
            writeln!(out, "- **Destinations**: {}", summary.sites.join(", "))?;
            writeln!(out, "- **Answer paths**: {}", summary.answer_paths)?;
            for gap in &summary.gaps {
                writeln!(
                    out,
                    "- **Gap**: question {} option `{}` → `{}`",
                    gap.question_id, gap.option_id, gap.key
                )?;
            }
        }
        Report::Play(outcome) => {
            writeln!(out, "## {status} Play\n")?;
            writeln!(out, "- **Answers**: {}", outcome.answers.join(", "))?;
            writeln!(out, "- **Winner**: `{}`", outcome.winner)?;
            writeln!(
                out,
                "- **Result**: {}",
                outcome.site_name.as_deref().unwrap_or("not found")
            )?;
            writeln!(out, "\n| Destination | Score |\n|---|---|")?;
            for (key, score) in &outcome.ranking {
                writeln!(out, "| {key} | {score} |")?;
            }
        }
        Report::Sweep(sweep) => {
            writeln!(out, "## {status} Sweep\n")?;
            writeln!(out, "- **Strategy**: {}", strategy_label(sweep.strategy))?;
            writeln!(
                out,
                "- **Paths checked**: {}/{}",
                sweep.paths_checked, sweep.total_paths
            )?;
            writeln!(out, "\n| Destination | Wins | Share |\n|---|---|---|")?;
            for (key, count) in &sweep.winners {
                writeln!(
                    out,
                    "| {key} | {count} | {:.1}% |",
                    share(*count, sweep.paths_checked)
                )?;
            }
            if !sweep.failures.is_empty() {
                writeln!(out, "\n### Failures\n")?;
                for failure in &sweep.failures {
                    writeln!(out, "- {failure}")?;
                }
            }
        }
    }
    Ok(())
}

fn strategy_label(strategy: SweepStrategy) -> String {
    match strategy {
        SweepStrategy::Exhaustive => String::from("exhaustive"),
        SweepStrategy::Sampled { samples, seed } => format!("sampled ({samples} paths, seed {seed})"),
    }
}

#[allow(clippy::cast_precision_loss)]
fn share(count: usize, total: usize) -> f64 {
    if total == 0 {
        0.0
    } else {
        count as f64 / total as f64 * 100.0
    }
}
