use std::io::{BufRead, Write};

use serde_json::{json, Value};

use catalog_core::DomainError;
use catalog_infra::CatalogStore;
use catalog_products::{Category, Product};

use clap::error::ErrorKind;

use crate::command::{join_name, Command};

/// Run a command against the store and render the result as JSON.
///
/// `Quit` renders as `null`; [`run`] stops before executing it.
pub fn execute<S>(store: &S, command: Command) -> Result<Value, DomainError>
where
    S: CatalogStore + ?Sized,
{
    let value = match command {
        Command::Categories => json!(Category::ALL),
        Command::Create {
            category,
            rating,
            created_date,
            name,
        } => json!(store.create(&join_name(&name), category, rating, created_date)?),
        Command::Update {
            id,
            category,
            rating,
            name,
        } => json!(store.update(id, &join_name(&name), category, rating)?),
        Command::Get { id } => json!(store.get(id)),
        Command::All => listing(store.all()),
        Command::ByCategory { category } => json!(store.by_category(category)),
        Command::CreatedAfter { date } => listing(store.created_after(date)),
        Command::Modified => listing(store.modified()),
        Command::Quit => Value::Null,
    };
    Ok(value)
}

// Unordered query results are listed by id so output is reproducible.
fn listing(mut products: Vec<Product>) -> Value {
    products.sort_by_key(Product::id);
    json!(products)
}

fn json_error(code: &'static str, message: impl core::fmt::Display) -> Value {
    json!({ "error": code, "message": message.to_string() })
}

fn parse_error(err: clap::Error) -> Value {
    let text = err.render().to_string();
    match err.kind() {
        ErrorKind::DisplayHelp | ErrorKind::DisplayHelpOnMissingArgumentOrSubcommand => {
            json!({ "help": text.trim_end() })
        }
        _ => json_error("parse_error", text.trim_end()),
    }
}

fn domain_error(err: DomainError) -> Value {
    let code = match &err {
        DomainError::Validation(_) => "validation_error",
        DomainError::NotFound(_) => "not_found",
        DomainError::InvalidId(_) => "invalid_id",
        DomainError::InvalidCategory(_) => "invalid_category",
    };
    json_error(code, err)
}

/// Read commands line by line until EOF or `quit`, writing one JSON line per command.
///
/// Bad input is reported on the output stream and the session continues.
pub fn run<S, R, W>(store: &S, input: R, mut output: W) -> anyhow::Result<()>
where
    S: CatalogStore + ?Sized,
    R: BufRead,
    W: Write,
{
    for line in input.lines() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }

        let response = match Command::parse_line(&line) {
            Ok(Command::Quit) => break,
            Ok(command) => execute(store, command).unwrap_or_else(|e| {
                tracing::debug!(error = %e, "command failed");
                domain_error(e)
            }),
            Err(e) => parse_error(e),
        };

        writeln!(output, "{response}")?;
    }

    output.flush()?;
    Ok(())
}
