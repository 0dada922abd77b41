//! Writes the golden input fixtures under `tests/golden/`.
//!
//! Run from the crate root after changing the wire layout, then re-run
//! `regenerate_golden` to refresh the expected reports.

use std::fs;
use std::path::PathBuf;
use std::process::ExitCode;

use recdec_core::{
    Adjacency, Body, FlatBody, Graph, GraphBody, encode,
};

fn main() -> ExitCode {
    if let Err(err) = run() {
        eprintln!("error: {}", err);
        return ExitCode::from(1);
    }
    ExitCode::SUCCESS
}

fn run() -> Result<(), String> {
    let root = PathBuf::from("tests").join("golden");
    for (case, body) in fixtures() {
        let dir = root.join(case);
        fs::create_dir_all(&dir)
            .map_err(|err| format!("failed to create {}: {}", dir.display(), err))?;
        let input = dir.join("input.bin");
        fs::write(&input, encode(&body))
            .map_err(|err| format!("failed to write {}: {}", input.display(), err))?;
    }
    Ok(())
}

fn fixtures() -> Vec<(&'static str, Body)> {
    vec![
        (
            "flat_everything",
            Body::Flat(FlatBody {
                numbers: vec![3, -1, 4, 1, 5],
                z: true,
                str_array: vec!["ab".to_string(), "c".to_string()],
                int_array: vec![10, -10],
            }),
        ),
        (
            "flat_empty",
            Body::Flat(FlatBody {
                numbers: vec![],
                z: false,
                str_array: vec![],
                int_array: vec![],
            }),
        ),
        (
            "graph_small",
            Body::Graph(GraphBody {
                graphs: vec![Graph {
                    name: "g0".to_string(),
                    adjacencies: vec![
                        Adjacency {
                            vertex: 1,
                            neighbors: vec![2, 3],
                        },
                        Adjacency {
                            vertex: 2,
                            neighbors: vec![],
                        },
                    ],
                }],
            }),
        ),
        (
            "graph_empty",
            Body::Graph(GraphBody { graphs: vec![] }),
        ),
    ]
}
