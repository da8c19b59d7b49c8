use clap::{ArgAction, Parser, Subcommand};
use tracing::Level;

/// Settings shared by every command; `None` falls back to the config file or built-in defaults.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SourceOptions {
    pub config_path: Option<String>,
    pub manifest_path: Option<String>,
    pub output_dir: Option<String>,
    pub base_url: Option<String>,
    pub timeout_secs: Option<u64>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Fetch { source: SourceOptions },
    Plan { source: SourceOptions },
}

pub struct Args {
    pub command: Command,
    pub log_level: Level,
}

#[derive(Debug, Parser)]
#[command(
    name = "iconfetch",
    version,
    about = "Download every support card and character icon listed in an event data manifest"
)]
struct Cli {
    #[arg(
        short = 'v',
        long = "verbose",
        help = "Sets the level of verbosity",
        action = ArgAction::Count,
        global = true
    )]
    verbose: u8,

    #[command(subcommand)]
    command: Option<CliCommand>,
}

#[derive(Debug, Default, clap::Args)]
struct SourceArgs {
    #[arg(
        short = 'c',
        long = "config",
        value_name = "FILE",
        help = "Optional config file (TOML, YAML or JSON)"
    )]
    config: Option<String>,

    #[arg(
        short = 'm',
        long = "manifest",
        value_name = "FILE",
        help = "Overrides the manifest path (default: icon.json)"
    )]
    manifest: Option<String>,

    #[arg(
        short = 'o',
        long = "output-dir",
        value_name = "DIR",
        help = "Overrides the existing directory icons are written to (default: icon)"
    )]
    output_dir: Option<String>,

    #[arg(
        long = "base-url",
        value_name = "URL",
        help = "Overrides the URL icon identifiers are appended to (default: the gamewith gacha image directory)"
    )]
    base_url: Option<String>,

    #[arg(
        long = "timeout-secs",
        value_name = "N",
        help = "Overrides the per-request timeout in seconds (default: 30)"
    )]
    timeout_secs: Option<u64>,
}

impl From<SourceArgs> for SourceOptions {
    fn from(args: SourceArgs) -> Self {
        Self {
            config_path: args.config,
            manifest_path: args.manifest,
            output_dir: args.output_dir,
            base_url: args.base_url,
            timeout_secs: args.timeout_secs,
        }
    }
}

#[derive(Debug, Subcommand)]
enum CliCommand {
    /// Download every icon in the manifest (the default when no command is given)
    Fetch(SourceArgs),

    /// Print the icons and URLs that would be fetched, without downloading anything
    Plan(SourceArgs),
}

fn init_tracing(log_level: Level) {
    tracing_subscriber::fmt()
        .with_max_level(log_level)
        .with_env_filter(
            tracing_subscriber::EnvFilter::builder()
                .with_default_directive(log_level.into())
                .from_env_lossy()
                .add_directive("hyper_util=warn".parse().expect("static directive")),
        )
        .init();
}

pub fn parse_args() -> Args {
    let cli = Cli::parse();

    let log_level = match cli.verbose {
        0 => Level::INFO,
        1 => Level::DEBUG,
        _ => Level::TRACE,
    };
    init_tracing(log_level);

    let command = match cli.command {
        None => Command::Fetch {
            source: SourceArgs::default().into(),
        },
        Some(CliCommand::Fetch(source)) => Command::Fetch {
            source: source.into(),
        },
        Some(CliCommand::Plan(source)) => Command::Plan {
            source: source.into(),
        },
    };

    Args { command, log_level }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_no_arguments_parses() {
        let cli = Cli::try_parse_from(["iconfetch"]).unwrap();
        assert_eq!(cli.verbose, 0);
        assert!(cli.command.is_none());
    }

    #[test]
    fn test_fetch_overrides_parse() {
        let cli = Cli::try_parse_from([
            "iconfetch",
            "-vv",
            "fetch",
            "-m",
            "owners.json",
            "--output-dir",
            "out",
            "--timeout-secs",
            "5",
        ])
        .unwrap();
        assert_eq!(cli.verbose, 2);
        let Some(CliCommand::Fetch(source)) = cli.command else {
            panic!("expected fetch command");
        };
        let source = SourceOptions::from(source);
        assert_eq!(source.manifest_path.as_deref(), Some("owners.json"));
        assert_eq!(source.output_dir.as_deref(), Some("out"));
        assert_eq!(source.timeout_secs, Some(5));
        assert_eq!(source.config_path, None);
    }
}
