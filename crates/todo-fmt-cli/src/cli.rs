//! Command-line arguments for todo-fmt.

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

use crate::line_range::LineRange;

/// todo-fmt - Sort todo lists and notes by bullet priority
#[derive(Parser, Debug)]
#[command(name = "todo-fmt")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Config file to use instead of ~/.config/todo-fmt/config.toml
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Log more (-v info, -vv debug, -vvv trace). RUST_LOG also works.
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Format files in place, or stdin to stdout when no files are given
    Format(FormatArgs),

    /// Relabel lines with a named bullet
    Mark {
        /// Bullet name, e.g. "done"
        style: String,

        file: PathBuf,

        /// 1-based inclusive range, "A:B" or a single line "A"
        #[arg(long, value_name = "A:B")]
        lines: LineRange,
    },

    /// Move bullets one rank up (or down with --down)
    Promote {
        file: PathBuf,

        /// 1-based inclusive range, "A:B" or a single line "A"
        #[arg(long, value_name = "A:B")]
        lines: LineRange,

        /// Lower the priority instead
        #[arg(long)]
        down: bool,
    },

    /// Print the active bullet catalog
    Bullets,
}

#[derive(Args, Debug)]
pub struct FormatArgs {
    pub files: Vec<PathBuf>,

    /// Format as notes regardless of file name
    #[arg(long, conflicts_with = "todo")]
    pub notes: bool,

    /// Format as a todo list regardless of file name
    #[arg(long)]
    pub todo: bool,

    /// Write nothing; exit with status 1 if any file would change
    #[arg(long, conflicts_with = "stdout")]
    pub check: bool,

    /// Print formatted files instead of rewriting them
    #[arg(long)]
    pub stdout: bool,

    /// Drop completed items while formatting. The config's
    /// remove_completed_on_save is not consulted.
    #[arg(long)]
    pub prune_done: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_mark() {
        let cli = Cli::try_parse_from([
            "todo-fmt", "mark", "done", "list.todo", "--lines", "2:3",
        ])
        .unwrap();
        match cli.command {
            Commands::Mark { style, file, lines } => {
                assert_eq!(style, "done");
                assert_eq!(file, PathBuf::from("list.todo"));
                assert_eq!(lines, LineRange::new(2, 3).unwrap());
            }
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn notes_and_todo_conflict() {
        assert!(Cli::try_parse_from(["todo-fmt", "format", "--notes", "--todo"]).is_err());
    }

    #[test]
    fn config_is_global() {
        let cli = Cli::try_parse_from(["todo-fmt", "bullets", "--config", "/tmp/c.toml"]).unwrap();
        assert_eq!(cli.config, Some(PathBuf::from("/tmp/c.toml")));
    }
}
