//! Ranking output.

use std::io::Write;

use clap::ValueEnum;
use climate_core::SurveyConfig;
use climate_survey::SurveyReport;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub(crate) enum ReportFormat {
    /// `feeling average`, one per line
    Text,
    Json,
    Markdown,
}

/// Score the configured survey dump and write the ranking to `out`.
///
/// # Errors
///
/// Returns an error if the dump cannot be read or `out` cannot be written.
pub(crate) fn run_rank(
    config: &SurveyConfig,
    format: ReportFormat,
    out: &mut impl Write,
) -> anyhow::Result<()> {
    let report = climate_survey::run_survey_file(config)?;

    if report.skipped_blocks > 0 {
        tracing::warn!(
            skipped = report.skipped_blocks,
            selected = report.selected_blocks,
            "some blocks were skipped; they are not ranked"
        );
    }

    write_report(&report, format, out)
}

pub(crate) fn write_report(
    report: &SurveyReport,
    format: ReportFormat,
    out: &mut impl Write,
) -> anyhow::Result<()> {
    match format {
        ReportFormat::Text => {
            for ranked in &report.rankings {
                writeln!(out, "{} {}", ranked.feeling, format_average(ranked.average_weight))?;
            }
        }
        ReportFormat::Json => {
            serde_json::to_writer_pretty(&mut *out, report)?;
            writeln!(out)?;
        }
        ReportFormat::Markdown => write_markdown(report, out)?,
    }
    Ok(())
}

/// Shortest round-trip decimal, always with a fractional part (`1.0`, not
/// `1`); undefined averages print as `nan`.
pub(crate) fn format_average(average: f64) -> String {
    if average.is_nan() {
        "nan".to_string()
    } else {
        format!("{average:?}")
    }
}

fn write_markdown(report: &SurveyReport, out: &mut impl Write) -> std::io::Result<()> {
    writeln!(out, "# Emotional Climate Report")?;
    writeln!(out)?;
    writeln!(out, "**Blocks selected**: {}", report.selected_blocks)?;
    writeln!(out, "**Blocks skipped**: {}", report.skipped_blocks)?;
    writeln!(out, "**Average policy**: {}", report.average_policy)?;
    writeln!(out)?;

    if report.rankings.is_empty() {
        writeln!(out, "_No feelings could be extracted._")?;
        return Ok(());
    }

    writeln!(out, "| Rank | Feeling | Average | Responses | Unmapped |")?;
    writeln!(out, "|------|---------|---------|-----------|----------|")?;
    for (position, ranked) in report.rankings.iter().enumerate() {
        let average = if ranked.average_weight.is_nan() {
            "n/a".to_string()
        } else {
            format!("{:.3}", ranked.average_weight)
        };
        writeln!(
            out,
            "| {} | {} | {} | {} | {} |",
            position + 1,
            ranked.feeling,
            average,
            ranked.responses,
            ranked.unmapped
        )?;
    }
    Ok(())
}
