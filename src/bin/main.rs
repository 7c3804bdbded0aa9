use stopwatch::Stopwatch;

use transit_paths::{calc_hop_path, calc_tree, InputGraph, NodeId, SearchGraph, Weight};

/// City transport network: domestic roads inside Ukraine, France, England and
/// the USA plus international flights, weighted by travel time in hours.
const CITIES: [&str; 13] = [
    "Kyiv",
    "Lviv",
    "Odesa",
    "Kharkiv",
    "Paris",
    "Marseille",
    "Lyon",
    "London",
    "Manchester",
    "Liverpool",
    "New York",
    "Los Angeles",
    "Chicago",
];

const START_CITY: &str = "Kyiv";
const GOAL_CITY: &str = "Los Angeles";

fn main() {
    let input_graph = build_city_network();
    println!(
        "number of cities .................. {}",
        input_graph.get_num_nodes()
    );
    println!(
        "number of connections ............. {}",
        input_graph.get_num_edges()
    );
    let graph = SearchGraph::from_input_graph(&input_graph);

    let start = city_id(START_CITY);
    let mut time = Stopwatch::new();
    time.start();
    let tree = calc_tree(&graph, start);
    time.stop();

    println!();
    println!("Fastest travel times from {}:", START_CITY);
    let mut reachable: Vec<NodeId> = (0..graph.get_num_nodes())
        .filter(|&city| city != start && tree.is_reachable(city))
        .collect();
    reachable.sort_by_key(|&city| tree.get_distance(city));
    for city in reachable {
        let path = tree
            .calc_path(city)
            .expect("every reachable city has a path");
        println!(
            "{:12} {:>2} h | {}",
            CITIES[city],
            tree.get_distance(city),
            format_route(path.get_nodes())
        );
    }

    let goal = city_id(GOAL_CITY);
    let mut bfs_time = Stopwatch::new();
    bfs_time.start();
    let hop_path = calc_hop_path(&graph, start, goal).expect("the demo network is connected");
    bfs_time.stop();
    let weight_path = tree.calc_path(goal).expect("the demo network is connected");

    println!();
    println!("BFS vs Dijkstra from {} to {}:", START_CITY, GOAL_CITY);
    println!(
        "fewest hops ...... {} ({} hops, {} h)",
        format_route(hop_path.get_nodes()),
        hop_path.get_hops(),
        hop_path.get_weight()
    );
    println!(
        "fastest route .... {} ({} hops, {} h)",
        format_route(weight_path.get_nodes()),
        weight_path.get_hops(),
        weight_path.get_weight()
    );

    println!();
    println!(
        "dijkstra query time ............... {} ms",
        time.elapsed_ms()
    );
    println!(
        "bfs query time .................... {} ms",
        bfs_time.elapsed_ms()
    );
}

fn build_city_network() -> InputGraph {
    let mut g = InputGraph::new();
    for _ in 0..CITIES.len() {
        g.add_node();
    }

    // domestic roads
    add_connection(&mut g, "Kyiv", "Lviv", 7);
    add_connection(&mut g, "Kyiv", "Kharkiv", 6);
    add_connection(&mut g, "Kyiv", "Odesa", 6);
    add_connection(&mut g, "Lviv", "Odesa", 10);
    add_connection(&mut g, "Kharkiv", "Odesa", 9);

    add_connection(&mut g, "Paris", "Lyon", 5);
    add_connection(&mut g, "Paris", "Marseille", 8);
    add_connection(&mut g, "Lyon", "Marseille", 3);

    add_connection(&mut g, "London", "Manchester", 4);
    add_connection(&mut g, "London", "Liverpool", 4);
    add_connection(&mut g, "Manchester", "Liverpool", 1);

    add_connection(&mut g, "New York", "Chicago", 12);
    add_connection(&mut g, "Chicago", "Los Angeles", 4);
    add_connection(&mut g, "New York", "Los Angeles", 5);

    // international flights
    add_connection(&mut g, "Kyiv", "Paris", 3);
    add_connection(&mut g, "Kyiv", "London", 3);
    add_connection(&mut g, "Lviv", "Paris", 2);
    add_connection(&mut g, "Paris", "London", 1);
    add_connection(&mut g, "Paris", "New York", 8);
    add_connection(&mut g, "London", "New York", 7);
    add_connection(&mut g, "Odesa", "Marseille", 3);

    g.freeze();
    g
}

fn add_connection(g: &mut InputGraph, from: &str, to: &str, hours: Weight) {
    g.add_edge(city_id(from), city_id(to), hours);
}

fn city_id(name: &str) -> NodeId {
    CITIES
        .iter()
        .position(|&city| city == name)
        .expect("unknown city")
}

fn format_route(nodes: &[NodeId]) -> String {
    nodes
        .iter()
        .map(|&node| CITIES[node])
        .collect::<Vec<&str>>()
        .join(" -> ")
}
