//! Clique search procedures.

use std::rc::Rc;

use crate::error::CliqueError;
use crate::graph::{Graph, VertexId, VertexNumbering};

/// parameters of the perturbation search
pub mod params;

/// greedy that finds a clique of "large" size (ranking by coloring)
pub mod greedy_clique;

/// perturbation (remove & rebuild) local search
pub mod perturbation;

pub use crate::clique::verify_clique;

use params::SearchParams;
use perturbation::perturbation_search;

/// builds a graph with `vertex_count` vertices from an edge list (duplicate edges are tolerated)
pub fn build_graph(vertex_count:usize, edges:&[(usize,usize)], numbering:VertexNumbering) -> Result<Graph, CliqueError> {
    Graph::build(vertex_count, edges, numbering)
}

/** runs the greedy construction followed by the perturbation search and returns the vertices
of the best clique found. Fails if the result is not a clique.
*/
pub fn find_clique(graph:Rc<Graph>, params:&SearchParams) -> Result<Vec<VertexId>, CliqueError> {
    let result = perturbation_search(graph, params)?;
    if !result.best.verify() {
        return Err(CliqueError::InvalidClique);
    }
    Ok(result.best.vertices().to_vec())
}
