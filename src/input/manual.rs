use super::Console;
use crate::errors::InputError;
use crate::graph::Graph;

use std::{fmt::Debug, str::FromStr};
use num_traits::Zero;
use tracing::{info, warn};

const DONE: &str = "exit";


/// Build a graph by asking for places, then connections between them
/// Each phase ends when the user types `exit`
/// Bad answers are reported and asked again instead of ending the session
pub fn read_graph<C, I>(console: &mut I) -> Result<Graph<C>, InputError>
where
    C: Zero + Ord + Copy + Debug + FromStr,
    I: Console + ?Sized,
{
    let mut graph = Graph::new();

    loop {
        let place = console.ask("Enter a place (type 'exit' when done): ")?;
        if place.eq_ignore_ascii_case(DONE) {
            break;
        }
        if place.is_empty() {
            continue;
        }
        graph.add_node(place);
    }

    loop {
        let first = console.ask("Enter the first place (type 'exit' when done): ")?;
        if first.eq_ignore_ascii_case(DONE) {
            break;
        }
        if !graph.contains(&first) {
            console.say(&format!("'{first}' is not a known place."))?;
            continue;
        }

        let second = console.ask("Enter the second place: ")?;
        if !graph.contains(&second) {
            console.say(&format!("'{second}' is not a known place."))?;
            continue;
        }

        let answer = console.ask("Enter the distance between them: ")?;
        let Ok(distance) = answer.parse::<C>() else {
            console.say(&format!("'{answer}' is not a valid distance."))?;
            continue;
        };

        if let Err(e) = graph.add_connection(&first, &second, distance) {
            warn!(error = %e, "connection rejected");
            console.say("Distance must be a positive number.")?;
        }
    }

    info!(nodes = graph.node_count(), edges = graph.edge_count(), "graph entered manually");
    Ok(graph)
}
