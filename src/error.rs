use thiserror::Error;

use crate::graph::VertexId;

/** errors raised while reading instances, searching cliques or exporting results */
#[derive(Debug, Error)]
pub enum CliqueError {
    /// the instance (or an output file) cannot be accessed
    #[error("unable to access {path}: {source}")]
    Io {
        /// file path
        path: String,
        /// underlying error
        #[source]
        source: std::io::Error,
    },

    /// a DIMACS line cannot be parsed
    #[error("line {line}: {reason}")]
    Parse {
        /// line number (starting at 1)
        line: usize,
        /// what went wrong
        reason: String,
    },

    /// an edge appears before the "p edge" line (or the line is missing)
    #[error("missing 'p edge <n> <m>' header")]
    MissingHeader,

    /// an edge endpoint is not a vertex of the graph
    #[error("vertex {vertex} out of range (nb vertices: {n})")]
    VertexOutOfRange {
        /// id as given in the input
        vertex: usize,
        /// number of vertices
        n: usize,
    },

    /// no vertex to start a clique from
    #[error("empty graph: no seed vertex")]
    EmptyGraph,

    /// a vertex selected for removal is not part of the clique
    #[error("trying to remove vertex {0} that is not in the clique")]
    InconsistentRemoval(VertexId),

    /// the returned vertices are not a clique
    #[error("incorrect clique")]
    InvalidClique,

    /// a search parameter is out of its domain
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),

    /// CSV report error
    #[error(transparent)]
    Csv(#[from] csv::Error),
}
