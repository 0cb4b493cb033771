use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(version, about)]
pub struct Cli {
    #[arg(short = 'c', long = "config")]
    pub config: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Print every configured list
    List,
    /// Print the addresses of one list
    Resolve { name: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_resolve_with_config() {
        let cli = Cli::try_parse_from([
            "recipient-resolver",
            "-c",
            "lists.yaml",
            "resolve",
            "alerts",
        ])
        .unwrap();
        assert_eq!(cli.config.as_deref(), Some("lists.yaml"));
        assert!(matches!(cli.command, Command::Resolve { name } if name == "alerts"));
    }

    #[test]
    fn config_is_optional() {
        let cli = Cli::try_parse_from(["recipient-resolver", "list"]).unwrap();
        assert!(cli.config.is_none());
        assert!(matches!(cli.command, Command::List));
    }

    #[test]
    fn resolve_requires_a_name() {
        assert!(Cli::try_parse_from(["recipient-resolver", "resolve"]).is_err());
    }
}
