use super::{ShortestPaths, NO_PARENT};

/// Construct the route from the source to `target` by walking predecessors back
/// Returns the ordered labels from source to target
/// A target that was never reached yields just itself, check its distance before trusting the route
pub fn shortest_path<C>(paths: &ShortestPaths<C>, target: &str) -> Vec<String>
where
    C: Copy,
{
    let node_map = paths.node_map();

    let Some(goal_index) = node_map.get_index_of(target) else {
        return vec![target.to_string()];
    };

    let mut path = Vec::new();
    let mut current_index = goal_index;

    // Trace back from goal to start, bounded by the map size
    while current_index != NO_PARENT && path.len() < node_map.len() {
        match node_map.get_index(current_index) {
            Some((node, &(parent_index, _))) => {
                path.push(node.clone());
                current_index = parent_index;
            }
            None => break,
        }
    }

    // The path is in reverse order, so reverse it
    path.reverse();

    path
}
