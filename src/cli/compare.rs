use crate::cli::commands::Cli;
use crate::compare::{compare_texts, read_source};
use crate::config::{CompareOptions, OutputFormat};
use crate::errors::CompareError;
use crate::normalize::normalized_lines;
use crate::reporting::{format_json_report, format_line_diff, format_text_report};
use tracing::{debug, info};

pub fn handle_compare(cli: &Cli) -> Result<(), CompareError> {
    info!(
        original = %cli.original.display(),
        converted = %cli.converted.display(),
        "Comparing files"
    );

    let original = read_source(&cli.original)?;
    let converted = read_source(&cli.converted)?;

    print!("{}", render_comparison(&original, &converted, &cli.options())?);
    Ok(())
}

/// Score two texts and render the report the way `options` asks for.
pub fn render_comparison(
    original: &str,
    converted: &str,
    options: &CompareOptions,
) -> Result<String, CompareError> {
    let report = compare_texts(original, converted);
    info!(
        format = %options.format,
        char_similarity = report.char_similarity,
        line_similarity = report.line_similarity,
        "Comparison finished"
    );

    let mut out = match options.format {
        OutputFormat::Text => format_text_report(&report),
        OutputFormat::Json => format_json_report(&report)? + "\n",
    };

    if options.show_diff {
        let original_lines = normalized_lines(original);
        let converted_lines = normalized_lines(converted);
        debug!(
            original_lines = original_lines.len(),
            converted_lines = converted_lines.len(),
            "Rendering line diff"
        );
        out.push('\n');
        out.push_str(&format_line_diff(&original_lines, &converted_lines));
    }

    Ok(out)
}
