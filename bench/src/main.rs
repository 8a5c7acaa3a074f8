use railnet_core::Graph;
use std::time::Instant;

fn main() {
    let args: Vec<String> = std::env::args().collect();

    let mode = args.get(1).map(|s| s.as_str()).unwrap_or("all");
    let station_count: usize = args.get(2).and_then(|s| s.parse().ok()).unwrap_or(12);
    let station_count = station_count.clamp(2, 26);

    if mode == "help" || mode == "--help" {
        println!("Usage: railnet-bench [mode] [station_count]");
        println!();
        println!("Modes:");
        println!("  all      Run all generators and benchmark each (default)");
        println!("  ring     Single directed cycle through every station");
        println!("  dense    Complete digraph (every ordered pair connected)");
        println!("  random   Randomly selected edges (deterministic LCG)");
        println!();
        println!("Default station_count: 12 (clamped to 2..=26)");
        return;
    }

    println!("railnet-bench");
    println!("=============");
    println!();

    let generators: Vec<(&str, fn(usize) -> String)> = match mode {
        "ring" => vec![("Ring", gen_ring)],
        "dense" => vec![("Dense (complete digraph)", gen_dense)],
        "random" => vec![("Random (LCG edges)", gen_random)],
        "all" => vec![
            ("Ring", gen_ring as fn(usize) -> String),
            ("Dense (complete digraph)", gen_dense),
            ("Random (LCG edges)", gen_random),
        ],
        _ => {
            eprintln!("Unknown mode: {}. Use --help for options.", mode);
            return;
        }
    };

    for (name, generator) in generators {
        run_benchmark(name, generator, station_count);
    }
}

fn run_benchmark(name: &str, generator: fn(usize) -> String, station_count: usize) {
    println!("--- {} ---", name);
    let spec = generator(station_count);

    let t = Instant::now();
    let graph = Graph::parse(&spec);
    let parse_time = t.elapsed();
    println!(
        "Parsed {} bytes in {:.1}us — {} stations, {} edges",
        spec.len(),
        parse_time.as_secs_f64() * 1_000_000.0,
        graph.station_count(),
        graph.edge_count()
    );

    // Shortest-distance sweep over every ordered station pair
    let stations: Vec<char> = graph.stations().collect();
    let t = Instant::now();
    let mut reachable = 0usize;
    for &from in &stations {
        for &to in &stations {
            if railnet_core::shortest_distance(&graph, from, to).is_some() {
                reachable += 1;
            }
        }
    }
    let elapsed = t.elapsed();
    println!(
        "Shortest-distance sweep: {}/{} pairs reachable in {:.1}us",
        reachable,
        stations.len() * stations.len(),
        elapsed.as_secs_f64() * 1_000_000.0
    );

    let origin = match stations.first() {
        Some(&s) => s,
        None => {
            println!();
            return;
        }
    };

    // Exact-stops enumeration: work grows with the hop budget
    println!();
    println!("{:>8} {:>12} {:>12}", "stops", "routes", "time");
    println!("{:->8} {:->12} {:->12}", "", "", "");
    for stops in [2u32, 3, 4, 5, 6] {
        let t = Instant::now();
        let count = railnet_core::count_routes_with_exact_stops(&graph, origin, origin, stops);
        let elapsed = t.elapsed();
        println!(
            "{:>8} {:>12} {:>10.1}us",
            stops,
            count,
            elapsed.as_secs_f64() * 1_000_000.0
        );
    }

    // Bounded-length enumeration: combinatorial growth with the budget
    println!();
    println!("{:>8} {:>12} {:>12}", "budget", "routes", "time");
    println!("{:->8} {:->12} {:->12}", "", "", "");
    for budget in [5u32, 10, 15, 20, 25] {
        let t = Instant::now();
        let count = railnet_core::count_routes_shorter_than(&graph, origin, origin, budget);
        let elapsed = t.elapsed();
        println!(
            "{:>8} {:>12} {:>10.1}us",
            budget,
            count,
            elapsed.as_secs_f64() * 1_000_000.0
        );
    }
    println!();
}

// ---------------------------------------------------------------------------
// Generators: specification strings over stations 'A'.., deterministic
// ---------------------------------------------------------------------------

/// Simple LCG for deterministic, fast pseudo-random numbers.
struct FastRng(u64);

impl FastRng {
    fn new(seed: u64) -> Self {
        Self(seed)
    }
    fn next(&mut self, max: u64) -> u64 {
        self.0 = self.0.wrapping_mul(6364136223846793005).wrapping_add(1);
        (self.0 >> 33) % max
    }
}

fn station(i: usize) -> char {
    (b'A' + i as u8) as char
}

fn push_token(spec: &mut String, from: char, to: char, weight: u32) {
    if !spec.is_empty() {
        spec.push(',');
    }
    spec.push(from);
    spec.push(to);
    spec.push(char::from_digit(weight, 10).unwrap_or('1'));
}

/// Single directed cycle: every station reaches every other, distances vary.
fn gen_ring(station_count: usize) -> String {
    let mut spec = String::new();
    for i in 0..station_count {
        let weight = (i % 9) as u32 + 1;
        push_token(&mut spec, station(i), station((i + 1) % station_count), weight);
    }
    spec
}

/// Complete digraph. Weights start at 4 so bounded-length sweeps stay sane
/// despite the branching factor.
fn gen_dense(station_count: usize) -> String {
    let mut rng = FastRng::new(42);
    let mut spec = String::new();
    for i in 0..station_count {
        for j in 0..station_count {
            if i != j {
                let weight = 4 + rng.next(6) as u32;
                push_token(&mut spec, station(i), station(j), weight);
            }
        }
    }
    spec
}

/// Random edge selection, about three outgoing edges per station. Weights
/// are derived from the endpoints so repeated picks collapse into exact
/// duplicate tokens, which construction dedupes.
fn gen_random(station_count: usize) -> String {
    let mut rng = FastRng::new(12345);
    let mut spec = String::new();
    let n = station_count as u64;
    for _ in 0..station_count * 3 {
        let i = rng.next(n) as usize;
        let j = rng.next(n) as usize;
        let weight = ((i + 2 * j) % 9) as u32 + 1;
        push_token(&mut spec, station(i), station(j), weight);
    }
    spec
}
