use crate::{Body, FlatBody, FlatSummary, GraphBody, GraphTotals, Summary};

/// Derives the consumer-facing totals from a decoded body.
///
/// The quantities mirror what downstream readers compute positionally:
/// ordered sums over `numbers` and `int_array`, the `z` flag, and per-graph
/// adjacency totals of `vertex + sum(neighbors)`. Sums wrap on overflow.
pub fn summarize(body: &Body) -> Summary {
    match body {
        Body::Flat(flat) => Summary::Flat(summarize_flat(flat)),
        Body::Graph(graph) => Summary::Graph(summarize_graph(graph)),
    }
}

fn summarize_flat(body: &FlatBody) -> FlatSummary {
    FlatSummary {
        numbers_total: wrapping_sum(&body.numbers),
        z: body.z,
        strings: body.str_array.len() as u64,
        int_array_total: wrapping_sum(&body.int_array),
    }
}

fn summarize_graph(body: &GraphBody) -> Vec<GraphTotals> {
    body.graphs
        .iter()
        .map(|graph| GraphTotals {
            name: graph.name.clone(),
            adjacency_totals: graph
                .adjacencies
                .iter()
                .map(|adjacency| {
                    adjacency
                        .neighbors
                        .iter()
                        .fold(adjacency.vertex, |total, n| total.wrapping_add(*n))
                })
                .collect(),
        })
        .collect()
}

fn wrapping_sum(values: &[i64]) -> i64 {
    values.iter().fold(0i64, |total, n| total.wrapping_add(*n))
}
