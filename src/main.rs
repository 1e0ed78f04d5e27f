mod cli;

use std::io;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use wayfinder::{Decimal, Graph, import::import_csv_file, input::Prompter, session};

use crate::cli::Cli;

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "wayfinder=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let cli = Cli::parse();
    let mut prompter = Prompter::new(io::stdin().lock(), io::stdout());

    let graph: Graph<Decimal> = match &cli.csv {
        Some(path) => import_csv_file(path)
            .with_context(|| format!("failed to import {}", path.display()))?,
        None => session::choose_graph(&mut prompter)?,
    };
    info!(nodes = graph.node_count(), edges = graph.edge_count(), "graph ready");

    let answered = session::run_queries(&graph, &mut prompter, &cli.session_options())?;
    info!(answered, "session finished");

    Ok(())
}
