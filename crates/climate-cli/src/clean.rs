use std::io::Write;

use climate_core::SurveyConfig;
use climate_survey::{clean_block, BlockOutcome};

/// Print the cleaning outcome of every selected block.
///
/// Block numbers are positions in the full dump, so they line up with
/// non-negative `--start`/`--end` values.
///
/// # Errors
///
/// Returns an error if the dump cannot be read or segmented, or `out` cannot
/// be written.
pub(crate) fn run_clean(config: &SurveyConfig, out: &mut impl Write) -> anyhow::Result<()> {
    let source = climate_survey::load_source(&config.input_path)?;
    write_clean_outcomes(&source, config, out)
}

pub(crate) fn write_clean_outcomes(
    source: &str,
    config: &SurveyConfig,
    out: &mut impl Write,
) -> anyhow::Result<()> {
    let blocks = climate_survey::segment(source, &config.delimiter, config.block_range)?;
    let total = source.split(config.delimiter.as_str()).count();
    let first = config.block_range.resolve(total).start;

    for (offset, block) in blocks.iter().enumerate() {
        let number = first + offset;
        match clean_block(block, config.label_index) {
            BlockOutcome::Cleaned(pair) => {
                writeln!(out, "{number}\t[{}]\t{}", pair.feeling, pair.body)?;
            }
            BlockOutcome::Skipped(e) => {
                writeln!(out, "{number}\tskipped\t{e}")?;
            }
        }
    }
    Ok(())
}
