use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::batch::Task;
use crate::legal_form::{DictionarySources, StripMode};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Legal-form list to use instead of the embedded one (.txt, .json or .yaml)
    #[arg(long, global = true, value_name = "PATH")]
    pub legal_forms: Option<PathBuf>,

    /// Alias table to use instead of the embedded one (.json or .yaml)
    #[arg(long, global = true, value_name = "PATH")]
    pub aliases: Option<PathBuf>,

    /// Output file path (defaults to stdout)
    #[arg(short, long, global = true, value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Log matching decisions to stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Split a trailing legal form off company names
    Strip(NameArgs),

    /// Find a legal form anywhere after the first word
    StripMiddle(NameArgs),

    /// Resolve legal forms to their short alias
    Alias {
        /// Country code, e.g. DE
        #[arg(short, long)]
        country: String,

        /// Legal forms to resolve; read from stdin when omitted
        #[arg(value_name = "LEGAL_FORM")]
        forms: Vec<String>,
    },

    /// Strip and resolve the alias in one step
    Normalize {
        /// Country code; only country-independent aliases apply without one
        #[arg(short, long)]
        country: Option<String>,

        /// Accept a legal form followed by other text
        #[arg(long)]
        anywhere: bool,

        #[command(flatten)]
        names: NameArgs,
    },
}

#[derive(Args, Debug)]
pub struct NameArgs {
    /// Company names; read from stdin (one per line) when omitted
    #[arg(value_name = "NAME")]
    pub names: Vec<String>,
}

impl Cli {
    pub fn dictionary_sources(&self) -> DictionarySources {
        DictionarySources {
            legal_forms: self.legal_forms.clone(),
            aliases: self.aliases.clone(),
        }
    }
}

impl Command {
    /// Positional inputs given on the command line.
    pub fn inputs(&self) -> &[String] {
        match self {
            Command::Strip(args) | Command::StripMiddle(args) => &args.names,
            Command::Alias { forms, .. } => forms,
            Command::Normalize { names, .. } => &names.names,
        }
    }

    pub fn task(&self) -> Task {
        match self {
            Command::Strip(_) => Task::Strip,
            Command::StripMiddle(_) => Task::StripMiddle,
            Command::Alias { country, .. } => Task::Alias {
                country: country.clone(),
            },
            Command::Normalize {
                country, anywhere, ..
            } => Task::Normalize {
                country: country.clone(),
                mode: if *anywhere {
                    StripMode::Anywhere
                } else {
                    StripMode::Suffix
                },
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_strip_names() {
        let cli = Cli::parse_from(["legalform", "strip", "Example LLC", "Acme GmbH"]);
        assert_eq!(cli.command.task(), Task::Strip);
        assert_eq!(cli.command.inputs(), ["Example LLC", "Acme GmbH"]);
        assert!(cli.output.is_none());
    }

    #[test]
    fn test_parse_normalize_options() {
        let cli = Cli::parse_from([
            "legalform",
            "normalize",
            "--country",
            "DE",
            "--anywhere",
            "--legal-forms",
            "forms.txt",
            "-v",
        ]);
        assert_eq!(
            cli.command.task(),
            Task::Normalize {
                country: Some("DE".to_string()),
                mode: StripMode::Anywhere,
            }
        );
        assert!(cli.command.inputs().is_empty());
        assert!(cli.verbose);
        assert_eq!(
            cli.dictionary_sources().legal_forms,
            Some(PathBuf::from("forms.txt"))
        );
    }

    #[test]
    fn test_alias_requires_country() {
        assert!(Cli::try_parse_from(["legalform", "alias", "GmbH"]).is_err());
    }
}
