//! Interactive route finding: build the graph, then answer spoken queries

use crate::errors::{InputError, RouteError};
use crate::graph::Graph;
use crate::graph_algos::find_route;
use crate::import::import_csv_file;
use crate::input::{Console, manual::read_graph, voice::{prompt_location, Transcriber, DEFAULT_ATTEMPTS}};

use std::{fmt::{Debug, Display}, str::FromStr};
use anyhow::Context;
use num_traits::{CheckedAdd, Zero};
use tracing::info;


/// Settings for the query loop
#[derive(Clone, Debug)]
pub struct SessionOptions {
    pub attempts: usize, // tries per location
    pub once: bool,      // stop after one answered query
}

impl Default for SessionOptions {
    fn default() -> Self {
        Self { attempts: DEFAULT_ATTEMPTS, once: false }
    }
}


/// Ask whether places come from manual entry or a CSV file, then build the graph
pub fn choose_graph<C, I>(console: &mut I) -> anyhow::Result<Graph<C>>
where
    C: Zero + Ord + Copy + Debug + FromStr,
    I: Console + ?Sized,
{
    loop {
        let choice = console.ask(
            "Do you want to add places manually or through a file?\n\
             Press 1 for manual entry\n\
             Press 2 for adding a CSV file\n",
        )?;

        match choice.as_str() {
            "1" => return Ok(read_graph(console)?),
            "2" => {
                let path = console.ask("Enter path of the CSV file: ")?;
                return import_csv_file(&path).with_context(|| format!("failed to import {path}"));
            }
            _ => console.say("Please press 1 or 2.")?,
        }
    }
}


/// Answer route queries until the user stops or a location cannot be recognized
/// Returns the number of queries answered
pub fn run_queries<C, I>(graph: &Graph<C>, io: &mut I, options: &SessionOptions) -> Result<usize, InputError>
where
    C: Zero + Ord + Copy + CheckedAdd + Debug + Display,
    I: Console + Transcriber,
{
    let is_known = |label: &str| graph.contains(label);
    let mut answered = 0;

    loop {
        let Some(source) = prompt_location(io, "Speak your source location: ", options.attempts, is_known) else {
            io.say("Failed to recognize the source location after multiple attempts. Exiting.")?;
            break;
        };
        let Some(dest) = prompt_location(io, "Speak your destination location: ", options.attempts, is_known) else {
            io.say("Failed to recognize the destination location after multiple attempts. Exiting.")?;
            break;
        };

        io.say(&format!("The source and destination are: {source} -> {dest}"))?;
        let answer = match find_route(graph, &source, &dest) {
            Ok(route) => format!(
                "The quickest path from {source} to {dest} is {} with a distance of {}.",
                route.labels.join(" -> "),
                route.distance
            ),
            Err(RouteError::NoPathFound { .. }) => format!("No path found from {source} to {dest}."),
            Err(e) => e.to_string(),
        };
        io.say(&answer)?;
        answered += 1;
        info!(source = %source, dest = %dest, "query answered");

        if options.once {
            break;
        }
        match io.ask("Do you want to run again? (y/n): ") {
            Ok(repeat) if repeat.eq_ignore_ascii_case("n") => break,
            Ok(_) => {}
            Err(InputError::EndOfInput) => break,
            Err(e) => return Err(e),
        }
    }

    Ok(answered)
}
