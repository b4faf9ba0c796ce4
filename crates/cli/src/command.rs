use chrono::NaiveDate;
use clap::{Parser, Subcommand};

use catalog_core::ProductId;
use catalog_products::Category;

/// One shell input line.
#[derive(Debug, Parser)]
#[command(
    name = "catalog",
    no_binary_name = true,
    about = "Game catalog shell: one command per line, one JSON document per result",
    after_help = "Examples:\n  create PC_GAME 8 2023-04-01 Half-Life 2\n  update 1 PC_GAME 9 Half-Life 2\n  category PC_GAME"
)]
struct ShellLine {
    #[command(subcommand)]
    command: Command,
}

/// A parsed shell command.
#[derive(Debug, Clone, PartialEq, Eq, Subcommand)]
pub enum Command {
    #[command(about = "List the valid category literals")]
    Categories,
    #[command(about = "Add a product; the name runs to the end of the line")]
    Create {
        category: Category,
        #[arg(allow_hyphen_values = true)]
        rating: i32,
        created_date: NaiveDate,
        #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
        name: Vec<String>,
    },
    #[command(about = "Replace name, category and rating of an existing product")]
    Update {
        id: ProductId,
        category: Category,
        #[arg(allow_hyphen_values = true)]
        rating: i32,
        #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
        name: Vec<String>,
    },
    #[command(about = "Show one product, or null when absent")]
    Get { id: ProductId },
    #[command(about = "List every product")]
    All,
    #[command(name = "category", about = "List one category, sorted by name")]
    ByCategory { category: Category },
    #[command(about = "List products created strictly after a YYYY-MM-DD date")]
    CreatedAfter { date: NaiveDate },
    #[command(about = "List products modified after their creation date")]
    Modified,
    #[command(alias = "exit", about = "End the session")]
    Quit,
}

impl Command {
    /// Parse one input line.
    ///
    /// Help requests come back as errors too; their rendered text is the help page.
    pub fn parse_line(line: &str) -> Result<Self, clap::Error> {
        ShellLine::try_parse_from(line.split_whitespace()).map(|parsed| parsed.command)
    }
}

/// Product names arrive as whitespace-separated words.
pub fn join_name(words: &[String]) -> String {
    words.join(" ")
}
