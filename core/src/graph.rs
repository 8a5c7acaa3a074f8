use std::collections::HashSet;
use std::sync::OnceLock;

use indexmap::IndexMap;
use regex::Regex;

/// A station label. Stations are not stored as standalone entities; they
/// exist as the endpoints referenced by edges.
pub type Node = char;

/// Distance of a single connection (one decimal digit in the input format).
pub type Weight = u32;

/// A directed, weighted connection between two stations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Edge {
    pub from: Node,
    pub to: Node,
    pub weight: Weight,
}

/// Valid edge token: origin letter, destination letter, one-digit distance.
fn edge_token_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^[A-Z]{2}[0-9]$").expect("valid regex"))
}

/// In-memory rail network: adjacency lists grouped by origin station.
///
/// Built once from a specification string and read-only thereafter. Buckets
/// and the edges inside them keep first-seen order from the specification,
/// so enumeration order is deterministic.
pub struct Graph {
    outgoing: IndexMap<Node, Vec<Edge>>,
    edge_count: usize,
}

impl Graph {
    /// Build a network from a specification like `"AB5,BC4,CD8"`.
    ///
    /// Tokens are comma-separated; a valid token is two uppercase letters
    /// followed by one digit. Tokens that fail validation are dropped, and
    /// repeated tokens load once. Construction never fails: an empty or
    /// fully malformed specification yields an empty network.
    pub fn parse(spec: &str) -> Self {
        let pattern = edge_token_regex();
        let mut seen: HashSet<&str> = HashSet::new();
        let mut outgoing: IndexMap<Node, Vec<Edge>> = IndexMap::new();
        let mut edge_count = 0;

        for token in spec.split(',') {
            if !pattern.is_match(token) {
                tracing::debug!(token, "skipping malformed edge token");
                continue;
            }
            if !seen.insert(token) {
                continue;
            }

            // The pattern guarantees exactly three ASCII bytes.
            let bytes = token.as_bytes();
            let edge = Edge {
                from: bytes[0] as Node,
                to: bytes[1] as Node,
                weight: Weight::from(bytes[2] - b'0'),
            };
            outgoing.entry(edge.from).or_default().push(edge);
            edge_count += 1;
        }

        tracing::debug!(
            stations = outgoing.len(),
            edges = edge_count,
            "built rail network"
        );
        Self { outgoing, edge_count }
    }

    /// Outgoing edges for a station. Unknown stations have no edges.
    pub fn edges_from(&self, station: Node) -> &[Edge] {
        self.outgoing
            .get(&station)
            .map(|v| v.as_slice())
            .unwrap_or(&[])
    }

    /// Every edge in the network, bucket by bucket in first-seen order.
    pub fn edges(&self) -> impl Iterator<Item = &Edge> + '_ {
        self.outgoing.values().flatten()
    }

    /// Stations with at least one outgoing edge, in first-seen order.
    pub fn stations(&self) -> impl Iterator<Item = Node> + '_ {
        self.outgoing.keys().copied()
    }

    /// Number of stations with at least one outgoing edge.
    pub fn station_count(&self) -> usize {
        self.outgoing.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    pub fn is_empty(&self) -> bool {
        self.edge_count == 0
    }
}
