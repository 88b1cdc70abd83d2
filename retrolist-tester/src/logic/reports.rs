use anyhow::Result;
use colored::Colorize;
use retrolist_eval::Summary;
use std::io::Write;

use crate::common::title_case;

pub fn generate_console_report<W: Write + ?Sized>(out: &mut W, summary: &Summary) -> Result<()> {
    writeln!(out)?;
    writeln!(out, "{}", "📊 Evaluation Summary".bright_cyan().bold())?;
    writeln!(out, "{}", "=".repeat(60).cyan())?;
    writeln!(out, "Total Evaluations: {}", summary.total_evaluations)?;

    for (metric, stats) in &summary.metrics {
        writeln!(out)?;
        writeln!(out, "{}:", title_case(metric.name()).bold())?;
        writeln!(out, "  Average Score: {:.2}/1.0", stats.average_score)?;
        writeln!(
            out,
            "  Score Range: {:.2} - {:.2}",
            stats.min_score, stats.max_score
        )?;
        writeln!(out, "  Pass Rate: {}", stats.pass_rate)?;
        writeln!(
            out,
            "  Results: {} passed, {} failed out of {}",
            stats.passed.to_string().green(),
            stats.failed.to_string().red(),
            stats.total_tests
        )?;
    }

    if let Some(overall) = &summary.overall {
        writeln!(out)?;
        writeln!(out, "{}", "🎯 Overall Results:".bright_yellow().bold())?;
        writeln!(out, "  Average Score: {:.2}/1.0", overall.average_score)?;
        writeln!(
            out,
            "  Score Range: {:.2} - {:.2}",
            overall.min_score, overall.max_score
        )?;
        writeln!(out, "  Pass Rate: {}", overall.overall_pass_rate)?;
        writeln!(
            out,
            "  Total Metric Evaluations: {}",
            overall.total_metric_evaluations
        )?;
    }

    if !summary.by_query_type.is_empty() {
        writeln!(out)?;
        writeln!(out, "{}", "📋 Results by Query Type:".bright_blue().bold())?;
        for (query_type, stats) in summary.by_query_type.iter() {
            writeln!(
                out,
                "  {query_type}: {} tests, avg score {:.2}",
                stats.count, stats.avg_score
            )?;
        }
    }

    writeln!(out)?;
    writeln!(out, "{}", "=".repeat(60).cyan())?;
    Ok(())
}

pub fn generate_json_report<W: Write + ?Sized>(out: &mut W, summary: &Summary) -> Result<()> {
    let json_output = serde_json::to_string_pretty(summary)?;
    writeln!(out, "{json_output}")?;
    Ok(())
}

pub fn generate_markdown_report<W: Write + ?Sized>(out: &mut W, summary: &Summary) -> Result<()> {
    writeln!(out, "# Retro Game List Evaluation Results\n")?;
    writeln!(out, "_Generated {}_\n", summary.timestamp)?;

    writeln!(out, "## Summary\n")?;
    writeln!(
        out,
        "- **Total evaluations**: {}",
        summary.total_evaluations
    )?;
    if let Some(overall) = &summary.overall {
        writeln!(
            out,
            "- **Overall average score**: {:.3}",
            overall.average_score
        )?;
        writeln!(
            out,
            "- **Overall pass rate**: {}",
            overall.overall_pass_rate
        )?;
        writeln!(
            out,
            "- **Metric evaluations**: {}",
            overall.total_metric_evaluations
        )?;
    } else {
        writeln!(out, "\n_No evaluations recorded._")?;
        return Ok(());
    }
    writeln!(out)?;

    writeln!(out, "## Metrics\n")?;
    writeln!(
        out,
        "| Metric | Average | Min | Max | Passed | Failed | Pass rate |"
    )?;
    writeln!(out, "|---|---|---|---|---|---|---|")?;
    for (metric, stats) in &summary.metrics {
        writeln!(
            out,
            "| {} | {:.3} | {:.3} | {:.3} | {} | {} | {} |",
            title_case(metric.name()),
            stats.average_score,
            stats.min_score,
            stats.max_score,
            stats.passed,
            stats.failed,
            stats.pass_rate
        )?;
    }
    writeln!(out)?;

    writeln!(out, "## Query Types\n")?;
    writeln!(out, "| Query type | Tests | Average score |")?;
    writeln!(out, "|---|---|---|")?;
    for (query_type, stats) in summary.by_query_type.iter() {
        writeln!(
            out,
            "| {query_type} | {} | {:.3} |",
            stats.count, stats.avg_score
        )?;
    }
    Ok(())
}
