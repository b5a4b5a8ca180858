/// CLI argument definitions via clap derive.
///
/// clap's help and version flags are disabled: every invocation that is not one
/// of the three commands gets the usage text and exit code 1. Arguments past the
/// ones a command needs are accepted and ignored.
use clap::{Parser, Subcommand};

/// apt-groupinstall: query package groups from the comps catalog.
#[derive(Debug, Parser)]
#[command(
    name = "apt-groupinstall",
    about = "Query package groups from the comps catalog",
    disable_help_flag = true,
    disable_version_flag = true,
    disable_help_subcommand = true
)]
pub struct Cli {
    /// Print results as JSON instead of plain text.
    #[arg(long, global = true)]
    pub json: bool,

    /// Log catalog loading and group resolution to stderr.
    #[arg(long, global = true)]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Command,
}

/// All subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// List every group as "<id> (<name>)".
    #[command(name = "showgroups", disable_help_flag = true)]
    ShowGroups(ListArgs),
    /// Show a group's id, description and packages.
    #[command(name = "showgroup", disable_help_flag = true)]
    ShowGroup(GroupArgs),
    /// List a group's packages, one per line.
    #[command(name = "grouppkgs", disable_help_flag = true)]
    GroupPkgs(GroupArgs),
}

impl Command {
    /// Trailing arguments the command accepted but does not use.
    #[must_use]
    pub fn ignored_args(&self) -> &[String] {
        match self {
            Self::ShowGroups(args) => &args.rest,
            Self::ShowGroup(args) | Self::GroupPkgs(args) => &args.rest,
        }
    }
}

/// Arguments for `showgroups`.
#[derive(Debug, Parser)]
pub struct ListArgs {
    /// Ignored.
    #[arg(trailing_var_arg = true, allow_hyphen_values = true, hide = true)]
    pub rest: Vec<String>,
}

/// Arguments shared by the single-group commands.
#[derive(Debug, Parser)]
pub struct GroupArgs {
    /// Group name or id. Taken verbatim, even when it starts with '-'.
    #[arg(allow_hyphen_values = true)]
    pub group: String,

    /// Ignored.
    #[arg(trailing_var_arg = true, allow_hyphen_values = true, hide = true)]
    pub rest: Vec<String>,
}

impl GroupArgs {
    /// Arguments for looking up `group` with nothing trailing.
    #[cfg(test)]
    #[must_use]
    pub fn new(group: impl Into<String>) -> Self {
        Self {
            group: group.into(),
            rest: Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;
    use clap::error::ErrorKind;

    use super::*;

    fn parse(args: &[&str]) -> Result<Cli, clap::Error> {
        Cli::try_parse_from(std::iter::once("apt-groupinstall").chain(args.iter().copied()))
    }

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_showgroup() {
        let cli = parse(&["showgroup", "base"]).unwrap();
        assert!(matches!(cli.command, Command::ShowGroup(ref a) if a.group == "base"));
        assert!(!cli.json);
    }

    #[test]
    fn test_global_flag_after_subcommand() {
        let cli = parse(&["grouppkgs", "--json", "base"]).unwrap();
        assert!(cli.json);
        assert!(matches!(cli.command, Command::GroupPkgs(ref a) if a.group == "base"));
    }

    #[test]
    fn test_missing_group_argument_is_an_error() {
        let err = parse(&["showgroup"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::MissingRequiredArgument);
    }

    #[test]
    fn test_missing_subcommand_is_an_error() {
        assert!(parse(&[]).is_err());
    }

    #[test]
    fn test_trailing_arguments_are_ignored() {
        let cli = parse(&["showgroups", "stray"]).unwrap();
        assert!(matches!(cli.command, Command::ShowGroups(_)));
        assert_eq!(cli.command.ignored_args(), ["stray"]);

        let cli = parse(&["grouppkgs", "base", "x", "-y"]).unwrap();
        assert!(matches!(cli.command, Command::GroupPkgs(ref a) if a.group == "base"));
        assert_eq!(cli.command.ignored_args(), ["x", "-y"]);
    }

    #[test]
    fn test_hyphen_leading_group_is_a_value() {
        let cli = parse(&["showgroup", "-x"]).unwrap();
        assert!(matches!(cli.command, Command::ShowGroup(ref a) if a.group == "-x"));

        let cli = parse(&["showgroup", "--help"]).unwrap();
        assert!(matches!(cli.command, Command::ShowGroup(ref a) if a.group == "--help"));

        let cli = parse(&["grouppkgs", "-h"]).unwrap();
        assert!(matches!(cli.command, Command::GroupPkgs(ref a) if a.group == "-h"));
    }

    #[test]
    fn test_help_and_version_flags_are_not_recognized() {
        for flag in ["--help", "-h", "--version", "-V", "help"] {
            let err = parse(&[flag]).unwrap_err();
            assert!(
                !matches!(err.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion),
                "{flag} should be a usage error"
            );
        }
    }
}
