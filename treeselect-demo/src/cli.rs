use std::path::PathBuf;

use clap::Parser;
use treeselect::MatchMode;

/// Tree select demo - pick technologies from a searchable tree
#[derive(Debug, Parser)]
#[command(name = "treeselect-demo")]
#[command(version, about = "Searchable tree select demo", long_about = None)]
pub struct Cli {
    /// JSON file holding an array of tree nodes (built-in sample data if omitted)
    pub tree: Option<PathBuf>,

    /// Match search terms fuzzily instead of by substring
    #[arg(long)]
    pub fuzzy: bool,
}

impl Cli {
    pub fn match_mode(&self) -> MatchMode {
        if self.fuzzy {
            MatchMode::Fuzzy
        } else {
            MatchMode::Substring
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_sample_data_and_substring() {
        let cli = Cli::try_parse_from(["treeselect-demo"]).unwrap();
        assert!(cli.tree.is_none());
        assert_eq!(cli.match_mode(), MatchMode::Substring);
    }

    #[test]
    fn parses_tree_path_and_fuzzy_flag() {
        let cli = Cli::try_parse_from(["treeselect-demo", "--fuzzy", "tree.json"]).unwrap();
        assert_eq!(cli.tree, Some(PathBuf::from("tree.json")));
        assert_eq!(cli.match_mode(), MatchMode::Fuzzy);
    }

    #[test]
    fn rejects_unknown_options() {
        let err = Cli::try_parse_from(["treeselect-demo", "--bogus"]).unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::UnknownArgument);
    }
}
