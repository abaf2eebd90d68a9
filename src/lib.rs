//! Large clique search guided by DSATUR colorings

// #![warn(clippy::all, clippy::pedantic)]
// useful additional warnings if docs are missing, or crates imported but unused, etc.
#![warn(missing_debug_implementations)]
#![warn(missing_docs)]
#![warn(trivial_casts, trivial_numeric_casts)]
#![warn(unsafe_code)]
#![warn(unused_extern_crates)]
#![warn(variant_size_differences)]

// not sure if already by default in clippy
#![warn(clippy::similar_names)]
#![warn(clippy::shadow_unrelated)]
#![warn(clippy::shadow_same)]
#![warn(clippy::shadow_reuse)]


/// graph (adjacency sets) and induced subgraphs
pub mod graph;

/// errors
pub mod error;

/// read DIMACS formats
pub mod dimacs;

/// DSATUR coloring and color-based vertex ranking
pub mod coloring;

/// clique under construction (vertices + candidates)
pub mod clique;

/// clique search procedures
pub mod search;

/// helper and utility methods for executables
pub mod util;

pub use search::{build_graph, find_clique, verify_clique};
