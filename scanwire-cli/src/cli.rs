//! CLI argument parsing using clap derive API
//!
//! Purely declarative: no side effects or I/O happen here.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

/// scanwire -- convert and inspect scan result files.
///
/// Use `scanwire <COMMAND> --help` for subcommand details.
#[derive(Parser, Debug)]
#[command(name = "scanwire", version, about, long_about = None)]
pub struct Cli {
    /// Path to the scanwire.toml configuration file.
    #[arg(short, long, default_value = "scanwire.toml")]
    pub config: PathBuf,

    /// Override log level (trace, debug, info, warn, error).
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Output format.
    #[arg(long, global = true, default_value = "text")]
    pub output: OutputFormat,

    #[command(subcommand)]
    pub command: Commands,
}

/// Supported output formats.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable text output.
    Text,
    /// Machine-readable JSON.
    Json,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Re-encode a scan result file into another format.
    Convert(ConvertArgs),

    /// Summarize the contents of a scan result file.
    Inspect(InspectArgs),

    /// Manage configuration.
    Config(ConfigArgs),
}

// ---- convert ----

/// Read a scan result, decode it into the domain model and write it back out.
#[derive(Args, Debug)]
pub struct ConvertArgs {
    /// Input file (.textproto, .binproto, optionally .gz).
    pub input: PathBuf,

    /// Output file. Defaults to the input stem with the configured `[output]` extension.
    #[arg(short = 'o', long)]
    pub out: Option<PathBuf>,

    /// Force the output encoding (textproto, binproto) regardless of the file extension.
    #[arg(long)]
    pub format: Option<String>,

    /// Gzip the output. Only meaningful together with `--format`.
    #[arg(long, requires = "format")]
    pub gzip: bool,
}

// ---- inspect ----

/// Print scan metadata and inventory counts.
#[derive(Args, Debug)]
pub struct InspectArgs {
    /// Scan result file to inspect.
    pub path: PathBuf,

    /// Read with an explicit encoding (textproto, binproto) instead of the file extension.
    #[arg(long)]
    pub format: Option<String>,
}

// ---- config ----

/// Manage scanwire configuration.
#[derive(Args, Debug)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub action: ConfigAction,
}

#[derive(Subcommand, Debug)]
pub enum ConfigAction {
    /// Validate the configuration file and report errors.
    Validate,
    /// Show the effective configuration (file + env overrides + defaults).
    Show {
        /// Show only a specific section (general, output).
        #[arg(long)]
        section: Option<String>,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_parse_convert_defaults() {
        let args = Cli::try_parse_from(["scanwire", "convert", "scan.binproto"]);
        assert!(args.is_ok(), "should parse 'convert' subcommand");
        let cli = args.expect("parse succeeded");
        match cli.command {
            Commands::Convert(convert_args) => {
                assert_eq!(convert_args.input, PathBuf::from("scan.binproto"));
                assert!(convert_args.out.is_none(), "out should be None");
                assert!(convert_args.format.is_none(), "format should be None");
                assert!(!convert_args.gzip, "gzip should default to false");
            }
            _ => panic!("expected Convert command"),
        }
    }

    #[test]
    fn test_cli_parse_convert_with_output() {
        let args = Cli::try_parse_from([
            "scanwire",
            "convert",
            "scan.binproto",
            "-o",
            "scan.textproto.gz",
        ]);
        let cli = args.expect("parse succeeded");
        match cli.command {
            Commands::Convert(convert_args) => {
                assert_eq!(convert_args.out, Some(PathBuf::from("scan.textproto.gz")));
            }
            _ => panic!("expected Convert command"),
        }
    }

    #[test]
    fn test_cli_parse_convert_with_format_and_gzip() {
        let args = Cli::try_parse_from([
            "scanwire",
            "convert",
            "scan.textproto",
            "--out",
            "result.bin",
            "--format",
            "binproto",
            "--gzip",
        ]);
        let cli = args.expect("parse succeeded");
        match cli.command {
            Commands::Convert(convert_args) => {
                assert_eq!(convert_args.format, Some("binproto".to_owned()));
                assert!(convert_args.gzip, "gzip should be true");
            }
            _ => panic!("expected Convert command"),
        }
    }

    #[test]
    fn test_cli_parse_convert_gzip_requires_format() {
        let args = Cli::try_parse_from(["scanwire", "convert", "scan.textproto", "--gzip"]);
        assert!(args.is_err(), "--gzip without --format should fail");
    }

    #[test]
    fn test_cli_parse_convert_missing_input_fails() {
        let args = Cli::try_parse_from(["scanwire", "convert"]);
        assert!(args.is_err(), "convert without input should fail");
    }

    #[test]
    fn test_cli_parse_inspect() {
        let args = Cli::try_parse_from(["scanwire", "inspect", "scan.textproto.gz"]);
        let cli = args.expect("parse succeeded");
        match cli.command {
            Commands::Inspect(inspect_args) => {
                assert_eq!(inspect_args.path, PathBuf::from("scan.textproto.gz"));
                assert!(inspect_args.format.is_none());
            }
            _ => panic!("expected Inspect command"),
        }
    }

    #[test]
    fn test_cli_parse_inspect_with_format() {
        let args = Cli::try_parse_from(["scanwire", "inspect", "result.out", "--format", "binproto"]);
        let cli = args.expect("parse succeeded");
        match cli.command {
            Commands::Inspect(inspect_args) => {
                assert_eq!(inspect_args.format, Some("binproto".to_owned()));
            }
            _ => panic!("expected Inspect command"),
        }
    }

    #[test]
    fn test_cli_parse_config_validate() {
        let args = Cli::try_parse_from(["scanwire", "config", "validate"]);
        let cli = args.expect("parse succeeded");
        match cli.command {
            Commands::Config(config_args) => match config_args.action {
                ConfigAction::Validate => {}
                _ => panic!("expected Validate action"),
            },
            _ => panic!("expected Config command"),
        }
    }

    #[test]
    fn test_cli_parse_config_show_section() {
        let args = Cli::try_parse_from(["scanwire", "config", "show", "--section", "output"]);
        let cli = args.expect("parse succeeded");
        match cli.command {
            Commands::Config(config_args) => match config_args.action {
                ConfigAction::Show { section } => {
                    assert_eq!(section, Some("output".to_owned()));
                }
                _ => panic!("expected Show action"),
            },
            _ => panic!("expected Config command"),
        }
    }

    #[test]
    fn test_cli_parse_custom_config_path() {
        let args = Cli::try_parse_from(["scanwire", "-c", "/custom/config.toml", "config", "validate"]);
        let cli = args.expect("parse succeeded");
        assert_eq!(cli.config, PathBuf::from("/custom/config.toml"));
    }

    #[test]
    fn test_cli_parse_log_level_and_json_output() {
        let args = Cli::try_parse_from([
            "scanwire",
            "inspect",
            "scan.textproto",
            "--log-level",
            "debug",
            "--output",
            "json",
        ]);
        let cli = args.expect("parse succeeded");
        assert_eq!(cli.log_level, Some("debug".to_owned()));
        assert!(matches!(cli.output, OutputFormat::Json));
    }

    #[test]
    fn test_cli_parse_missing_command_fails() {
        let args = Cli::try_parse_from(["scanwire"]);
        assert!(args.is_err(), "should fail when no command provided");
    }

    #[test]
    fn test_cli_verify_command_structure() {
        let cmd = Cli::command();
        assert_eq!(cmd.get_name(), "scanwire");

        let subcommands: Vec<_> = cmd.get_subcommands().map(|s| s.get_name()).collect();
        assert_eq!(subcommands, ["convert", "inspect", "config"]);
        cmd.debug_assert();
    }
}
