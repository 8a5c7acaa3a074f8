//! End-to-end checks against the classic nine-edge network.

use railnet_core::{
    count_routes_shorter_than, count_routes_with_exact_stops, count_routes_with_max_stops,
    route_distance, shortest_distance, Graph, NO_ROUTE,
};

const SPEC: &str = "AB5,BC4,CD8,DC8,DE6,AD5,CE2,EB3,AE7";

#[test]
fn answers_the_classic_query_set() {
    let g = Graph::parse(SPEC);

    assert_eq!(route_distance(&g, "A-B-C"), 9);
    assert_eq!(route_distance(&g, "A-D"), 5);
    assert_eq!(route_distance(&g, "A-D-C"), 13);
    assert_eq!(route_distance(&g, "A-E-B-C-D"), 22);
    assert_eq!(route_distance(&g, "A-E-D"), NO_ROUTE);

    assert_eq!(count_routes_with_max_stops(&g, 'C', 'C', 3), 2);
    assert_eq!(count_routes_with_exact_stops(&g, 'A', 'C', 4), 3);

    assert_eq!(shortest_distance(&g, 'A', 'C'), Some(9));
    assert_eq!(shortest_distance(&g, 'B', 'B'), Some(9));

    assert_eq!(count_routes_shorter_than(&g, 'C', 'C', 30), 7);
}

#[test]
fn construction_holds_one_edge_per_distinct_token() {
    let g = Graph::parse(SPEC);
    assert_eq!(g.edge_count(), 9);

    let ab = g
        .edges_from('A')
        .iter()
        .find(|e| e.to == 'B')
        .expect("edge A->B");
    assert_eq!((ab.from, ab.to, ab.weight), ('A', 'B', 5));

    for edge in g.edges() {
        assert_eq!(g.edges_from(edge.from).iter().filter(|e| *e == edge).count(), 1);
    }
}

#[test]
fn construction_is_idempotent() {
    let a = Graph::parse(SPEC);
    let b = Graph::parse(SPEC);

    let stations: Vec<char> = a.stations().collect();
    assert_eq!(stations, b.stations().collect::<Vec<_>>());

    for &from in &stations {
        for &to in &stations {
            assert_eq!(
                shortest_distance(&a, from, to),
                shortest_distance(&b, from, to)
            );
            for budget in 0..20 {
                assert_eq!(
                    count_routes_with_max_stops(&a, from, to, budget),
                    count_routes_with_max_stops(&b, from, to, budget)
                );
                assert_eq!(
                    count_routes_shorter_than(&a, from, to, budget),
                    count_routes_shorter_than(&b, from, to, budget)
                );
            }
        }
    }
}

#[test]
fn malformed_tokens_never_break_construction() {
    let g = Graph::parse("AB55,bc4,C D8,DC,DE66,AD5!,CE2,??,EB3,AE7,");
    // Only the well-formed tokens survive.
    assert_eq!(g.edge_count(), 3);
    assert_eq!(route_distance(&g, "C-E-B"), 5);
    assert_eq!(route_distance(&g, "A-B"), NO_ROUTE);
}
