//! `scanwire convert` command handler

use std::io::Write;
use std::path::{Path, PathBuf};

use serde::Serialize;
use tracing::{info, warn};

use scanwire_codec::{FileFormat, wire};
use scanwire_core::config::OutputConfig;

use crate::cli::ConvertArgs;
use crate::error::CliError;
use crate::output::{OutputWriter, Render};

/// Execute the `convert` command.
///
/// The input is decoded into the domain model and encoded again, so values
/// the decoder drops (unresolvable vulnerabilities, malformed secrets) are
/// absent from the output and reported in the summary.
pub async fn execute(
    args: ConvertArgs,
    config_path: &Path,
    writer: &OutputWriter,
) -> Result<(), CliError> {
    let config = super::load_config(config_path).await?;

    let input_format = FileFormat::from_path(&args.input)?;
    let (output, output_format) = resolve_output(&args, &config.output)?;
    if same_file(&args.input, &output).await {
        return Err(CliError::Command(format!(
            "output {} would overwrite the input",
            output.display()
        )));
    }

    info!(
        input = %args.input.display(),
        output = %output.display(),
        from = %input_format,
        to = %output_format,
        "converting scan result"
    );

    let input = args.input;
    let report = tokio::task::spawn_blocking(move || {
        convert_file(input, input_format, output, output_format)
    })
    .await??;

    writer.render(&report)?;
    Ok(())
}

/// Pick the output path and format.
///
/// 1. `--format` forces the encoding; the path extension is not checked.
/// 2. `--out` alone derives the format from its extension.
/// 3. Neither: the `[output]` config section picks the format and the
///    output lands next to the input.
fn resolve_output(
    args: &ConvertArgs,
    output_config: &OutputConfig,
) -> Result<(PathBuf, FileFormat), CliError> {
    if let Some(name) = &args.format {
        let format = FileFormat::from_name(name)?.with_gzip(args.gzip);
        let path = args
            .out
            .clone()
            .unwrap_or_else(|| sibling_path(&args.input, format));
        return Ok((path, format));
    }

    if let Some(path) = &args.out {
        return Ok((path.clone(), FileFormat::from_path(path)?));
    }

    let format = FileFormat::from_name(&output_config.format)?.with_gzip(output_config.gzip);
    Ok((sibling_path(&args.input, format), format))
}

/// Whether both paths resolve to the same existing file.
///
/// A path that does not exist cannot be the input, so failing to resolve
/// either side counts as different.
async fn same_file(input: &Path, output: &Path) -> bool {
    if input == output {
        return true;
    }
    match (
        tokio::fs::canonicalize(input).await,
        tokio::fs::canonicalize(output).await,
    ) {
        (Ok(input), Ok(output)) => input == output,
        _ => false,
    }
}

/// `scan.binproto.gz` -> `scan.<format extension>`
fn sibling_path(input: &Path, format: FileFormat) -> PathBuf {
    let mut base = input.to_path_buf();
    if base.extension().is_some_and(|ext| ext == "gz") {
        base.set_extension("");
    }
    base.set_extension("");
    let mut name = base.into_os_string();
    name.push(".");
    name.push(format.extension());
    PathBuf::from(name)
}

fn convert_file(
    input: PathBuf,
    input_format: FileFormat,
    output: PathBuf,
    output_format: FileFormat,
) -> Result<ConvertReport, CliError> {
    let message: wire::ScanResult = scanwire_codec::read_as(&input, input_format)?;
    let codec = scanwire_codec::global();
    let result = codec.decode_scan_result(&message);
    let encoded = codec.encode_scan_result(&result)?;
    scanwire_codec::write_as(&output, &encoded, output_format)?;

    let before = message.inventory.as_ref();
    let dropped_vulns = before
        .map_or(0, |inv| inv.package_vulns.len())
        .saturating_sub(result.inventory.package_vulns.len());
    let dropped_secrets = before
        .map_or(0, |inv| inv.secrets.len())
        .saturating_sub(result.inventory.secrets.len());
    if dropped_vulns + dropped_secrets > 0 {
        warn!(
            dropped_vulns,
            dropped_secrets, "some inventory entries could not be decoded and were dropped"
        );
    }

    Ok(ConvertReport {
        input: input.display().to_string(),
        input_format: input_format.to_string(),
        output: output.display().to_string(),
        output_format: output_format.to_string(),
        packages: result.inventory.packages.len(),
        package_vulns: result.inventory.package_vulns.len(),
        dropped_vulns,
        dropped_secrets,
    })
}

/// Conversion summary.
#[derive(Debug, Serialize)]
pub struct ConvertReport {
    pub input: String,
    pub input_format: String,
    pub output: String,
    pub output_format: String,
    pub packages: usize,
    pub package_vulns: usize,
    pub dropped_vulns: usize,
    pub dropped_secrets: usize,
}

impl Render for ConvertReport {
    fn render_text(&self, w: &mut dyn Write) -> std::io::Result<()> {
        use colored::Colorize;

        writeln!(
            w,
            "Converted {} ({}) -> {} ({})",
            self.input.bold(),
            self.input_format,
            self.output.bold(),
            self.output_format
        )?;
        writeln!(w, "  Packages:      {}", self.packages)?;
        writeln!(w, "  Package vulns: {}", self.package_vulns)?;
        if self.dropped_vulns > 0 {
            writeln!(
                w,
                "  {}",
                format!("Dropped {} unresolvable vulns", self.dropped_vulns).yellow()
            )?;
        }
        if self.dropped_secrets > 0 {
            writeln!(
                w,
                "  {}",
                format!("Dropped {} malformed secrets", self.dropped_secrets).yellow()
            )?;
        }
        Ok(())
    }
}
