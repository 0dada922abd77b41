use crate::wire::error::DecodeError;
use crate::wire::reader::WireReader;
use crate::wire::writer::WireWriter;
use crate::{Adjacency, Graph, GraphBody};

// Vertex and neighbor identifiers are opaque data; nothing here checks that
// they index anything.

fn parse_adjacency(reader: &mut WireReader<'_>) -> Result<Adjacency, DecodeError> {
    let vertex = reader.read_long()?;
    let neighbors = reader.read_sequence(|r| r.read_long())?;
    Ok(Adjacency { vertex, neighbors })
}

fn parse_graph(reader: &mut WireReader<'_>) -> Result<Graph, DecodeError> {
    let name = reader.read_string()?;
    let adjacencies = reader.read_sequence(parse_adjacency)?;
    Ok(Graph { name, adjacencies })
}

pub(crate) fn parse_graph_body(reader: &mut WireReader<'_>) -> Result<GraphBody, DecodeError> {
    let graphs = reader.read_sequence(parse_graph)?;
    Ok(GraphBody { graphs })
}

fn write_adjacency(writer: &mut WireWriter, adjacency: &Adjacency) {
    writer.write_long(adjacency.vertex);
    writer.write_sequence(&adjacency.neighbors, |w, n| w.write_long(*n));
}

fn write_graph(writer: &mut WireWriter, graph: &Graph) {
    writer.write_str(&graph.name);
    writer.write_sequence(&graph.adjacencies, write_adjacency);
}

pub(crate) fn write_graph_body(writer: &mut WireWriter, body: &GraphBody) {
    writer.write_sequence(&body.graphs, write_graph);
}
