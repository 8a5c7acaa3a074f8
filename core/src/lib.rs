//! railnet-core: In-memory route analysis for small rail networks.
//!
//! A pure Rust library that parses a comma-separated edge specification
//! (`"AB5,BC4,..."`) into an adjacency index and answers route queries over
//! it: named-route distance, exhaustive route enumeration bounded by stop
//! count or by total distance, and shortest-distance relaxation.
//!
//! The network is immutable once parsed. Queries read it through a shared
//! reference and allocate only transient local state, so one `Graph` can
//! serve any number of concurrent readers without locking.

mod graph;
mod traversal;

pub use graph::{Edge, Graph, Node, Weight};
pub use traversal::{
    count_routes_shorter_than, count_routes_with_exact_stops, count_routes_with_max_stops,
    route_distance, routes_shorter_than, routes_with_exact_stops, routes_with_max_stops,
    shortest_distance, NO_ROUTE, ROUTE_DELIMITER,
};
