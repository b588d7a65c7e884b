use anyhow::Result;
use colored::Colorize;
use serde::Serialize;
use std::io::Write;
use std::time::Duration;

use crate::tester::ScenarioResult;
use crate::util::report_timestamp;

#[derive(Serialize)]
struct JsonReport<'a> {
    generated_at: String,
    passed: usize,
    failed: usize,
    results: &'a [ScenarioResult],
}

fn tally(results: &[ScenarioResult]) -> (usize, usize) {
    let passed = results.iter().filter(|r| r.passed).count();
    (passed, results.len() - passed)
}

#[allow(clippy::cast_precision_loss)]
fn success_rate(passed: usize, total: usize) -> f64 {
    if total == 0 {
        return 0.0;
    }
    (passed as f64 / total as f64) * 100.0
}

pub fn generate_console_report(
    out: &mut dyn Write,
    results: &[ScenarioResult],
    total_duration: Duration,
) -> Result<()> {
    writeln!(out)?;
    writeln!(out, "{}", "📊 Cart Scenario Results".bright_cyan().bold())?;
    writeln!(out, "{}", "========================".cyan())?;

    let (passed, failed) = tally(results);
    writeln!(out, "Total scenarios: {}", results.len())?;
    writeln!(out, "Passed: {}", passed.to_string().green())?;
    writeln!(out, "Failed: {}", failed.to_string().red())?;
    writeln!(
        out,
        "Success rate: {:.1}%",
        success_rate(passed, results.len())
    )?;
    writeln!(out, "Total time: {total_duration:?}")?;
    writeln!(out)?;

    for result in results {
        let status = if result.passed {
            "✅ PASS".green()
        } else {
            "❌ FAIL".red()
        };
        writeln!(out, "{} {}", status, result.scenario_name.bold())?;
        writeln!(
            out,
            "   Iterations: {}/{} successful",
            result.successful_iterations, result.iterations_run
        )?;
        writeln!(out, "   Average time: {:?}", result.average_duration)?;
        if !result.failures.is_empty() {
            writeln!(out, "   Failures:")?;
            for failure in &result.failures {
                writeln!(out, "     • {}", failure.red())?;
            }
        }
        writeln!(out)?;
    }

    let fastest = results.iter().min_by_key(|r| r.average_duration);
    let slowest = results.iter().max_by_key(|r| r.average_duration);
    if let (Some(fastest), Some(slowest)) = (fastest, slowest) {
        writeln!(out, "{}", "⚡ Performance Summary".bright_yellow().bold())?;
        writeln!(out, "{}", "=====================".yellow())?;
        writeln!(
            out,
            "Fastest: {} ({:?})",
            fastest.scenario_name.green(),
            fastest.average_duration
        )?;
        writeln!(
            out,
            "Slowest: {} ({:?})",
            slowest.scenario_name.yellow(),
            slowest.average_duration
        )?;
    }
    Ok(())
}

pub fn generate_json_report(out: &mut dyn Write, results: &[ScenarioResult]) -> Result<()> {
    let (passed, failed) = tally(results);
    let report = JsonReport {
        generated_at: report_timestamp(),
        passed,
        failed,
        results,
    };
    writeln!(out, "{}", serde_json::to_string_pretty(&report)?)?;
    Ok(())
}

pub fn generate_markdown_report(out: &mut dyn Write, results: &[ScenarioResult]) -> Result<()> {
    writeln!(out, "# Keyshop Cart Scenario Results\n")?;
    writeln!(out, "_Generated {}_\n", report_timestamp())?;

    let (passed, failed) = tally(results);
    writeln!(out, "## Summary\n")?;
    writeln!(out, "- **Total scenarios**: {}", results.len())?;
    writeln!(out, "- **Passed**: {passed}")?;
    writeln!(out, "- **Failed**: {failed}")?;
    writeln!(
        out,
        "- **Success rate**: {:.1}%\n",
        success_rate(passed, results.len())
    )?;

    writeln!(out, "## Detailed Results\n")?;
    for result in results {
        let status = if result.passed { "✅" } else { "❌" };
        writeln!(out, "### {} {}\n", status, result.scenario_name)?;
        writeln!(
            out,
            "- **Iterations**: {}/{} successful",
            result.successful_iterations, result.iterations_run
        )?;
        writeln!(out, "- **Average time**: {:?}", result.average_duration)?;
        if !result.failures.is_empty() {
            writeln!(out, "- **Failures**:")?;
            for failure in &result.failures {
                writeln!(out, "  - {failure}")?;
            }
        }
        writeln!(out)?;
    }
    Ok(())
}
