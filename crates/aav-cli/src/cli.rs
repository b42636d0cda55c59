//! CLI argument parsing using clap derive

use clap::{Parser, Subcommand};

/// aav - Synchronize AppSync resolver mapping templates with a local tree
#[derive(Parser, Debug)]
#[command(name = "aav")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// AppSync API id
    #[arg(long, global = true, env = "API_ID")]
    pub api_id: Option<String>,

    /// Root directory of the resolver templates
    #[arg(long, global = true, env = "RESOLVERS_PATH")]
    pub resolvers_path: Option<String>,

    /// AWS region of the API (falls back to AWS_DEFAULT_REGION)
    #[arg(long, global = true, env = "AWS_REGION")]
    pub region: Option<String>,

    /// Override the AppSync control plane endpoint
    #[arg(long, global = true, env = "APPSYNC_ENDPOINT")]
    pub endpoint: Option<String>,

    /// The command to run
    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Pull Query resolvers into the local tree
    ///
    /// Writes request.vm, response.vm and meta.json for every resolver that
    /// has at least one mapping template.
    Pull {
        /// Automatic yes to prompts. Assume "yes" as answer to all prompts and run
        /// non-interactively
        #[arg(short = 'y', long = "yes")]
        yes: bool,

        /// Output the report as JSON
        #[arg(long)]
        json: bool,
    },

    /// Create or update remote resolvers from local templates
    Push {
        /// Automatic yes to prompts. Assume "yes" as answer to all prompts and run
        /// non-interactively
        #[arg(short = 'y', long = "yes")]
        yes: bool,

        /// Output the report as JSON
        #[arg(long)]
        json: bool,
    },

    /// Remove type or resolver
    Rm {
        #[command(subcommand)]
        target: RmTarget,
    },
}

/// What `rm` removes
#[derive(Subcommand, Debug, Clone, Copy, PartialEq, Eq)]
pub enum RmTarget {
    /// Remove a type
    Type,
    /// Remove a resolver
    Resolver,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(args).unwrap()
    }

    #[test]
    fn parses_pull_with_yes() {
        let cli = parse(&["aav", "pull", "-y"]);
        assert_eq!(
            cli.command,
            Commands::Pull {
                yes: true,
                json: false
            }
        );
    }

    #[test]
    fn parses_push_without_flags() {
        let cli = parse(&["aav", "push"]);
        assert_eq!(
            cli.command,
            Commands::Push {
                yes: false,
                json: false
            }
        );
    }

    #[test]
    fn parses_rm_targets() {
        assert_eq!(
            parse(&["aav", "rm", "type"]).command,
            Commands::Rm {
                target: RmTarget::Type
            }
        );
        assert_eq!(
            parse(&["aav", "rm", "resolver"]).command,
            Commands::Rm {
                target: RmTarget::Resolver
            }
        );
    }

    #[test]
    fn global_flags_after_subcommand() {
        let cli = parse(&[
            "aav",
            "pull",
            "--api-id",
            "abc",
            "--resolvers-path",
            "./resolvers",
            "--region",
            "eu-west-1",
            "--verbose",
        ]);
        assert_eq!(cli.api_id.as_deref(), Some("abc"));
        assert_eq!(cli.resolvers_path.as_deref(), Some("./resolvers"));
        assert_eq!(cli.region.as_deref(), Some("eu-west-1"));
        assert!(cli.verbose);
    }

    #[test]
    fn rm_requires_target() {
        assert!(Cli::try_parse_from(["aav", "rm"]).is_err());
    }

    #[test]
    fn command_is_required() {
        assert!(Cli::try_parse_from(["aav"]).is_err());
    }

    #[test]
    fn verify_cli() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
