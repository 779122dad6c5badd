//! Command implementations for all nodeplan commands

use crate::cli::{Commands, TableCommands};
use crate::commands::dispatch::command::{Command, CommandContext};
use crate::commands::{nodes, path, search, table};
use nodeplan_core::error::Result;
use nodeplan_core::solver::SolveOptions;

impl Command for Commands {
    fn execute(&self, ctx: &CommandContext) -> Result<()> {
        match self {
            Commands::Nodes { city } => {
                let network = ctx.load_network()?;
                nodes::execute(ctx.cli, &network, city.as_deref())
            }
            Commands::Path { from, to, prune } => {
                let network = ctx.load_network()?;
                path::execute(
                    ctx.cli,
                    &network,
                    from,
                    to.as_deref(),
                    SolveOptions { prune: *prune },
                )
            }
            Commands::Search { costs, phrase } => {
                let network = ctx.load_network()?;
                search::execute(ctx.cli, &network, &phrase.join(" "), *costs)
            }
            Commands::Table { command } => execute_table(ctx, command),
            Commands::CsvToTable => table::execute_csv(ctx.cli),
        }
    }
}

fn execute_table(ctx: &CommandContext, command: &TableCommands) -> Result<()> {
    match command {
        TableCommands::Search { file, phrase } => {
            table::execute_search(ctx.cli, &ctx.root.join(file), &phrase.join(" "))
        }
        TableCommands::SearchColumn {
            file,
            column,
            phrase,
        } => table::execute_search_column(
            ctx.cli,
            &ctx.root.join(file),
            column,
            &phrase.join(" "),
        ),
    }
}
