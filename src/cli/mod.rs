// Command-line interface

pub mod commands;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "recommender")]
#[command(about = "Ingredient-based recipe recommendations", long_about = None)]
pub struct Cli {
    /// Recipe catalog CSV (overrides CATALOG_PATH)
    #[arg(long, global = true)]
    pub catalog: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Recommend recipes for the ingredients you have
    Recommend {
        /// Ingredients, e.g. "chicken, garlic, onion"
        ingredients: String,

        /// Number of recipes to show
        #[arg(short = 'n', long)]
        limit: Option<usize>,

        /// Comma-separated allergens to exclude, e.g. "eggs,soy"
        #[arg(short, long)]
        exclude: Option<String>,
    },

    /// Load the catalog and report what the ranker will see
    Validate,

    /// Start the recommendation API server
    Serve {
        /// Port to listen on
        #[arg(short, long, env = "PORT")]
        port: Option<u16>,

        /// Host to bind to
        #[arg(long, env = "HOST")]
        host: Option<String>,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_recommend() {
        let cli = Cli::parse_from([
            "recommender",
            "--catalog",
            "recipes.csv",
            "recommend",
            "chicken, rice",
            "-n",
            "3",
            "--exclude",
            "eggs,soy",
        ]);

        assert_eq!(cli.catalog, Some(PathBuf::from("recipes.csv")));
        match cli.command {
            Commands::Recommend {
                ingredients,
                limit,
                exclude,
            } => {
                assert_eq!(ingredients, "chicken, rice");
                assert_eq!(limit, Some(3));
                assert_eq!(exclude.as_deref(), Some("eggs,soy"));
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_parse_validate() {
        let cli = Cli::parse_from(["recommender", "validate"]);
        assert!(matches!(cli.command, Commands::Validate));
        assert!(cli.catalog.is_none());
    }
}
