use std::path::PathBuf;
use std::time::Duration;

use clap::{ArgAction, Parser, Subcommand};
use clap_complete::Shell;

use crate::config::{Config, ENDPOINT_VAR, OUTPUT_VAR, TIMEOUT_VAR};
use crate::error::Result;

#[derive(Parser, Debug)]
#[command(author, version, about = "Fetch tasks from an API, filter by status and save them to a JSON file", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Keep only tasks with this status: concluida or pendente
    /// (also read from TASKFETCH_STATUS)
    #[arg(long, value_name = "STATUS", num_args = 0..=1, action = ArgAction::Append)]
    pub status: Vec<String>,

    /// Endpoint to fetch the task list from
    #[arg(long, value_name = "URL")]
    pub url: Option<String>,

    /// Where to save the filtered tasks
    #[arg(short, long, value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Request timeout in milliseconds
    #[arg(long, value_name = "MS", value_parser = clap::value_parser!(u64).range(1..))]
    pub timeout_ms: Option<u64>,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print shell completions
    Completions {
        #[arg(value_name = "SHELL")]
        shell: Shell,
    },
}

impl Cli {
    /// Resolves the run configuration. Environment values that a flag
    /// overrides are not read, so a bad one cannot fail the run.
    pub fn config<F>(&self, lookup: F) -> Result<Config>
    where
        F: Fn(&str) -> Option<String>,
    {
        let config = Config::from_lookup(|key| {
            let overridden = match key {
                ENDPOINT_VAR => self.url.is_some(),
                OUTPUT_VAR => self.output.is_some(),
                TIMEOUT_VAR => self.timeout_ms.is_some(),
                _ => false,
            };
            if overridden {
                None
            } else {
                lookup(key)
            }
        })?;
        Ok(self.apply(config))
    }

    /// Flags win over whatever the environment configured.
    pub fn apply(&self, mut config: Config) -> Config {
        if let Some(url) = &self.url {
            config = config.with_endpoint(url.clone());
        }
        if let Some(output) = &self.output {
            config = config.with_output_path(output.clone());
        }
        if let Some(ms) = self.timeout_ms {
            config = config.with_timeout(Duration::from_millis(ms));
        }
        config
    }

    pub fn log_level(&self) -> &'static str {
        match self.verbose {
            0 => "warn",
            1 => "info",
            _ => "debug",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flags_override_config() {
        let cli = Cli::parse_from([
            "taskfetch",
            "--url",
            "http://localhost:9000/t",
            "--output",
            "tarefas.json",
            "--timeout-ms",
            "500",
        ]);
        let config = cli.apply(Config::default());

        assert_eq!(config.endpoint, "http://localhost:9000/t");
        assert_eq!(config.output_path, PathBuf::from("tarefas.json"));
        assert_eq!(config.timeout, Duration::from_millis(500));
    }

    #[test]
    fn timeout_flag_shadows_a_bad_environment_value() {
        let env = |key: &str| (key == TIMEOUT_VAR).then(|| "abc".to_string());

        let cli = Cli::parse_from(["taskfetch", "--timeout-ms", "750"]);
        let config = cli.config(env).expect("flag wins over the environment");
        assert_eq!(config.timeout, Duration::from_millis(750));

        let cli = Cli::parse_from(["taskfetch"]);
        assert!(matches!(
            cli.config(env),
            Err(crate::error::TaskFetchError::Config(_))
        ));
    }

    #[test]
    fn environment_fills_what_flags_leave_out() {
        let env = |key: &str| match key {
            ENDPOINT_VAR => Some("http://env/tarefas".to_string()),
            OUTPUT_VAR => Some("env.json".to_string()),
            _ => None,
        };
        let cli = Cli::parse_from(["taskfetch", "--output", "flag.json"]);
        let config = cli.config(env).unwrap();

        assert_eq!(config.endpoint, "http://env/tarefas");
        assert_eq!(config.output_path, PathBuf::from("flag.json"));
    }

    #[test]
    fn no_flags_keep_config() {
        let cli = Cli::parse_from(["taskfetch"]);
        assert_eq!(cli.apply(Config::default()), Config::default());
        assert_eq!(cli.log_level(), "warn");
    }

    #[test]
    fn status_forms_are_accepted() {
        for args in [
            vec!["taskfetch", "--status=pendente"],
            vec!["taskfetch", "--status", "concluida"],
            vec!["taskfetch", "--status", "--no-color"],
            vec!["taskfetch", "--status", "x", "--status=y"],
        ] {
            assert!(Cli::try_parse_from(args.iter().copied()).is_ok(), "{args:?}");
        }
    }

    #[test]
    fn verbosity_counts() {
        assert_eq!(Cli::parse_from(["taskfetch", "-v"]).log_level(), "info");
        assert_eq!(Cli::parse_from(["taskfetch", "-vv"]).log_level(), "debug");
    }

    #[test]
    fn completions_subcommand_parses_shell() {
        let cli = Cli::parse_from(["taskfetch", "completions", "zsh"]);
        assert!(matches!(cli.command, Some(Commands::Completions { shell: Shell::Zsh })));
    }
}
