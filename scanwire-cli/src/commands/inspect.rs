//! `scanwire inspect` command handler

use std::collections::BTreeMap;
use std::io::Write;
use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

use serde::Serialize;
use tracing::info;

use scanwire_codec::{FileFormat, wire};
use scanwire_core::model::{ScanResult, ScanState, ScanStatus};

use crate::cli::InspectArgs;
use crate::error::CliError;
use crate::output::{OutputWriter, Render};

/// Execute the `inspect` command.
pub async fn execute(args: InspectArgs, writer: &OutputWriter) -> Result<(), CliError> {
    let format = match &args.format {
        Some(name) => FileFormat::from_name(name)?,
        None => FileFormat::from_path(&args.path)?,
    };
    info!(path = %args.path.display(), format = %format, "inspecting scan result");

    let path = args.path;
    let report = tokio::task::spawn_blocking(move || -> Result<InspectReport, CliError> {
        let message: wire::ScanResult = scanwire_codec::read_as(&path, format)?;
        let result = scanwire_codec::global().decode_scan_result(&message);
        Ok(InspectReport::new(path, format, &result))
    })
    .await??;

    writer.render(&report)?;
    Ok(())
}

fn state_label(state: ScanState) -> &'static str {
    match state {
        ScanState::Unspecified => "unspecified",
        ScanState::Succeeded => "succeeded",
        ScanState::PartiallySucceeded => "partially_succeeded",
        ScanState::Failed => "failed",
    }
}

fn unix_secs(time: SystemTime) -> u64 {
    time.duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or_default()
}

/// Scan result summary.
#[derive(Debug, Serialize)]
pub struct InspectReport {
    pub path: String,
    pub format: String,
    pub version: String,
    pub status: StatusSummary,
    pub start_time_unix: u64,
    pub end_time_unix: u64,
    pub plugins: Vec<PluginSummary>,
    pub counts: InventoryCounts,
    /// Package count per ecosystem (`unknown` when the purl type is not recognized).
    pub ecosystems: BTreeMap<String, usize>,
}

#[derive(Debug, Serialize)]
pub struct StatusSummary {
    pub state: &'static str,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub failure_reason: String,
}

impl From<&ScanStatus> for StatusSummary {
    fn from(status: &ScanStatus) -> Self {
        Self {
            state: state_label(status.state),
            failure_reason: status.failure_reason.clone(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct PluginSummary {
    pub name: String,
    pub version: u32,
    pub status: StatusSummary,
}

#[derive(Debug, Default, Serialize)]
pub struct InventoryCounts {
    pub packages: usize,
    pub package_vulns: usize,
    pub generic_findings: usize,
    pub secrets: usize,
    pub container_images: usize,
}

impl InspectReport {
    fn new(path: PathBuf, format: FileFormat, result: &ScanResult) -> Self {
        let inventory = &result.inventory;
        let mut ecosystems = BTreeMap::new();
        for pkg in &inventory.packages {
            let ecosystem = match pkg.ecosystem() {
                "" => "unknown",
                other => other,
            };
            *ecosystems.entry(ecosystem.to_owned()).or_insert(0) += 1;
        }

        Self {
            path: path.display().to_string(),
            format: format.to_string(),
            version: result.version.clone(),
            status: StatusSummary::from(&result.status),
            start_time_unix: unix_secs(result.start_time),
            end_time_unix: unix_secs(result.end_time),
            plugins: result
                .plugin_status
                .iter()
                .map(|plugin| PluginSummary {
                    name: plugin.name.clone(),
                    version: plugin.version,
                    status: StatusSummary::from(&plugin.status),
                })
                .collect(),
            counts: InventoryCounts {
                packages: inventory.packages.len(),
                package_vulns: inventory.package_vulns.len(),
                generic_findings: inventory.generic_findings.len(),
                secrets: inventory.secrets.len(),
                container_images: inventory.container_image_metadata.len(),
            },
            ecosystems,
        }
    }
}

impl Render for InspectReport {
    fn render_text(&self, w: &mut dyn Write) -> std::io::Result<()> {
        use colored::Colorize;

        writeln!(w, "Scan Result: {} ({})", self.path.bold(), self.format)?;
        writeln!(w, "  Scanner version: {}", self.version)?;

        let state = match self.status.state {
            "succeeded" => self.status.state.green().bold(),
            "failed" => self.status.state.red().bold(),
            other => other.yellow().bold(),
        };
        writeln!(w, "  Status: {}", state)?;
        if !self.status.failure_reason.is_empty() {
            writeln!(w, "  Failure: {}", self.status.failure_reason.red())?;
        }
        writeln!(
            w,
            "  Duration: {}s",
            self.end_time_unix.saturating_sub(self.start_time_unix)
        )?;

        writeln!(w)?;
        writeln!(w, "Plugins ({}):", self.plugins.len())?;
        for plugin in &self.plugins {
            writeln!(
                w,
                "  {:<32} v{:<4} {}",
                plugin.name, plugin.version, plugin.status.state
            )?;
        }

        writeln!(w)?;
        writeln!(w, "Inventory:")?;
        writeln!(w, "  Packages:         {}", self.counts.packages)?;
        for (ecosystem, count) in &self.ecosystems {
            writeln!(w, "    {:<16} {}", ecosystem, count)?;
        }
        writeln!(w, "  Package vulns:    {}", self.counts.package_vulns)?;
        writeln!(w, "  Generic findings: {}", self.counts.generic_findings)?;
        writeln!(w, "  Secrets:          {}", self.counts.secrets)?;
        writeln!(w, "  Container images: {}", self.counts.container_images)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::time::Duration;

    use scanwire_core::model::{Package, PluginStatus};

    fn result() -> ScanResult {
        let mut result = ScanResult::new("1.2.3");
        result.start_time = UNIX_EPOCH + Duration::from_secs(100);
        result.end_time = UNIX_EPOCH + Duration::from_secs(130);
        result.status = ScanStatus::failed("plugin crashed");
        result.plugin_status.push(PluginStatus {
            name: "os/dpkg".to_owned(),
            version: 2,
            status: ScanStatus::succeeded(),
        });
        for (name, purl_type) in [("bash", "deb"), ("curl", "deb"), ("mystery", "")] {
            result.inventory.packages.push(Arc::new(Package {
                name: name.to_owned(),
                purl_type: purl_type.to_owned(),
                ..Default::default()
            }));
        }
        result
    }

    #[test]
    fn test_inspect_report_counts_and_status() {
        let report = InspectReport::new(PathBuf::from("scan.textproto"), FileFormat::TEXT, &result());
        assert_eq!(report.version, "1.2.3");
        assert_eq!(report.status.state, "failed");
        assert_eq!(report.status.failure_reason, "plugin crashed");
        assert_eq!(report.counts.packages, 3);
        assert_eq!(report.plugins[0].status.state, "succeeded");
        assert_eq!(report.ecosystems.get("unknown"), Some(&1));
        assert_eq!(report.ecosystems.values().sum::<usize>(), 3);
    }

    #[test]
    fn test_inspect_report_render_text() {
        let report = InspectReport::new(PathBuf::from("scan.textproto"), FileFormat::TEXT, &result());
        let mut buffer = Vec::new();
        report.render_text(&mut buffer).expect("render");
        let output = String::from_utf8(buffer).expect("valid UTF-8");
        assert!(output.contains("scan.textproto"));
        assert!(output.contains("Duration: 30s"));
        assert!(output.contains("os/dpkg"));
        assert!(output.contains("plugin crashed"));
    }

    #[test]
    fn test_inspect_report_json_omits_empty_failure_reason() {
        let mut result = result();
        result.status = ScanStatus::succeeded();
        let report = InspectReport::new(PathBuf::from("scan.binproto"), FileFormat::BINARY, &result);
        let json = serde_json::to_value(&report).expect("json");
        assert_eq!(json["status"]["state"], "succeeded");
        assert!(json["status"].get("failure_reason").is_none());
        assert_eq!(json["counts"]["packages"], 3);
        assert_eq!(json["format"], "binproto");
    }
}
