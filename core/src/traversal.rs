use std::collections::HashMap;

use crate::graph::{Graph, Node, Weight};

/// Separator between station labels in a rendered route (`"A-B-C"`).
pub const ROUTE_DELIMITER: char = '-';

/// Sentinel returned by [`route_distance`] when a named hop has no edge.
pub const NO_ROUTE: i32 = -1;

/// Parse a route string into its station sequence.
///
/// Empty segments are skipped; each segment contributes its leading
/// character.
fn route_stations(route: &str) -> Vec<Node> {
    route
        .split(ROUTE_DELIMITER)
        .filter_map(|segment| segment.chars().next())
        .collect()
}

/// Render the current search path as a route string.
fn render_route(path: &[Node]) -> String {
    let mut route = String::with_capacity(path.len() * 2);
    for (i, &station) in path.iter().enumerate() {
        if i > 0 {
            route.push(ROUTE_DELIMITER);
        }
        route.push(station);
    }
    route
}

/// Total distance of a named route such as `"A-B-C"`.
///
/// Each consecutive pair of stations must be joined by an edge; if any hop
/// has none the result is [`NO_ROUTE`]. Repeated stations and immediate
/// cycles are legal and summed normally. A route naming a single station
/// (or none) has distance 0.
pub fn route_distance(graph: &Graph, route: &str) -> i32 {
    let stations = route_stations(route);
    let mut total = 0;
    for hop in stations.windows(2) {
        match hop_weight(graph, hop[0], hop[1]) {
            Some(weight) => total += weight as i32,
            None => return NO_ROUTE,
        }
    }
    total
}

/// Weight of the edge joining two adjacent stations.
///
/// Scans the full edge set; the bucket invariant makes this equivalent to
/// scanning `edges_from(from)`.
fn hop_weight(graph: &Graph, from: Node, to: Node) -> Option<Weight> {
    graph
        .edges()
        .find(|edge| edge.from == from && edge.to == to)
        .map(|edge| edge.weight)
}

/// Routes from `start` to `end` taking at most `max_stops` hops, in
/// discovery order.
///
/// A route is recorded the moment an edge arrives at `end` and that branch
/// is not extended further. Stations may repeat, so distinct edge sequences
/// through the same stations count separately.
pub fn routes_with_max_stops(
    graph: &Graph,
    start: Node,
    end: Node,
    max_stops: u32,
) -> Vec<String> {
    let mut found = Vec::new();
    let mut path = vec![start];
    max_stops_search(graph, start, end, max_stops, &mut path, &mut found);
    found
}

/// Number of routes from `start` to `end` taking at most `max_stops` hops.
pub fn count_routes_with_max_stops(
    graph: &Graph,
    start: Node,
    end: Node,
    max_stops: u32,
) -> usize {
    routes_with_max_stops(graph, start, end, max_stops).len()
}

fn max_stops_search(
    graph: &Graph,
    current: Node,
    end: Node,
    stops_left: u32,
    path: &mut Vec<Node>,
    found: &mut Vec<String>,
) {
    if stops_left == 0 {
        return;
    }
    for edge in graph.edges_from(current) {
        path.push(edge.to);
        if edge.to == end {
            found.push(render_route(path));
        } else {
            max_stops_search(graph, edge.to, end, stops_left - 1, path, found);
        }
        path.pop();
    }
}

/// Routes from `start` to `end` taking exactly `stops` hops, in discovery
/// order.
///
/// Reaching `end` before the final hop does not count; the search passes
/// through it as an ordinary station while budget remains.
pub fn routes_with_exact_stops(
    graph: &Graph,
    start: Node,
    end: Node,
    stops: u32,
) -> Vec<String> {
    let mut found = Vec::new();
    let mut path = vec![start];
    exact_stops_search(graph, start, end, stops, &mut path, &mut found);
    found
}

/// Number of routes from `start` to `end` taking exactly `stops` hops.
pub fn count_routes_with_exact_stops(
    graph: &Graph,
    start: Node,
    end: Node,
    stops: u32,
) -> usize {
    routes_with_exact_stops(graph, start, end, stops).len()
}

fn exact_stops_search(
    graph: &Graph,
    current: Node,
    end: Node,
    stops_left: u32,
    path: &mut Vec<Node>,
    found: &mut Vec<String>,
) {
    if stops_left == 0 {
        return;
    }
    for edge in graph.edges_from(current) {
        path.push(edge.to);
        if edge.to == end && stops_left == 1 {
            found.push(render_route(path));
        } else {
            exact_stops_search(graph, edge.to, end, stops_left - 1, path, found);
        }
        path.pop();
    }
}

/// Routes from `start` to `end` with total distance strictly less than
/// `max_distance`, in discovery order.
///
/// The search keeps exploring past `end`, so cyclic routes qualify as long
/// as they stay under the limit. A branch is abandoned only once its
/// remaining budget goes negative; expect the route count to grow
/// combinatorially with `max_distance`.
pub fn routes_shorter_than(
    graph: &Graph,
    start: Node,
    end: Node,
    max_distance: u32,
) -> Vec<String> {
    let mut found = Vec::new();
    let mut path = vec![start];
    shorter_than_search(
        graph,
        start,
        end,
        i64::from(max_distance),
        &mut path,
        &mut found,
    );
    found
}

/// Number of routes from `start` to `end` strictly shorter than
/// `max_distance`.
pub fn count_routes_shorter_than(
    graph: &Graph,
    start: Node,
    end: Node,
    max_distance: u32,
) -> usize {
    routes_shorter_than(graph, start, end, max_distance).len()
}

fn shorter_than_search(
    graph: &Graph,
    current: Node,
    end: Node,
    budget: i64,
    path: &mut Vec<Node>,
    found: &mut Vec<String>,
) {
    if budget < 0 {
        return;
    }
    for edge in graph.edges_from(current) {
        path.push(edge.to);
        if edge.to == end && i64::from(edge.weight) < budget {
            found.push(render_route(path));
        }
        shorter_than_search(
            graph,
            edge.to,
            end,
            budget - i64::from(edge.weight),
            path,
            found,
        );
        path.pop();
    }
}

/// Minimum total distance from `start` to `end` over any route, or `None`
/// when `end` is unreachable.
///
/// Label-correcting relaxation: a best-distance map plus a LIFO work stack,
/// re-pushing a station whenever its distance improves. Not priority-ordered
/// Dijkstra; stations are revisited as better distances surface. Assumes
/// non-negative weights.
///
/// `start` is never seeded with distance 0, so `shortest_distance(g, x, x)`
/// is the shortest cycle through `x` (`None` when no cycle exists).
pub fn shortest_distance(graph: &Graph, start: Node, end: Node) -> Option<Weight> {
    let mut best: HashMap<Node, Weight> = HashMap::new();
    let mut work: Vec<Node> = Vec::new();

    for edge in graph.edges_from(start) {
        best.insert(edge.to, edge.weight);
        work.push(edge.to);
    }

    while let Some(station) = work.pop() {
        let Some(&via) = best.get(&station) else {
            continue;
        };
        for edge in graph.edges_from(station) {
            let candidate = via + edge.weight;
            if best.get(&edge.to).map_or(true, |&d| candidate < d) {
                best.insert(edge.to, candidate);
                work.push(edge.to);
            }
        }
    }

    best.get(&end).copied()
}
