use std::rc::Rc;

use bit_set::BitSet;
use tracing::warn;

use crate::graph::{Graph, VertexId};

/** clique under construction.
Maintains its vertices (insertion order) and the candidates: vertices that are adjacent to
every vertex of the clique and not part of it.
*/
#[derive(Debug, Clone)]
pub struct Clique {
    /// graph (shared by all cliques of a search)
    graph: Rc<Graph>,
    /// vertices of the clique (insertion order)
    vertices: Vec<VertexId>,
    /// inside[v]: v is in the clique
    inside: BitSet,
    /// vertices that can extend the clique
    candidates: BitSet,
}

impl Clique {

    /** creates the clique {seed}. Its candidates are the neighbors of seed.

# Panics
- if seed is not a vertex of the graph
    */
    pub fn new(seed:VertexId, graph:Rc<Graph>) -> Self {
        assert!(graph.contains(seed), "Clique::new: unknown seed vertex {}", seed);
        let mut inside = BitSet::new();
        inside.insert(seed);
        let candidates = graph.neighbors(seed).clone();
        Self { graph, vertices: vec![seed], inside, candidates }
    }

    /// graph the clique lives in
    pub fn graph(&self) -> &Rc<Graph> { &self.graph }

    /// vertices of the clique (insertion order)
    pub fn vertices(&self) -> &[VertexId] { &self.vertices }

    /// vertices adjacent to every vertex of the clique
    pub fn candidates(&self) -> &BitSet { &self.candidates }

    /// true iff v is a candidate
    pub fn is_candidate(&self, v:VertexId) -> bool { self.candidates.contains(v) }

    /// true iff v is in the clique
    pub fn contains(&self, v:VertexId) -> bool { self.inside.contains(v) }

    /// true iff some vertex can still extend the clique
    pub fn needs_more_candidates(&self) -> bool { !self.candidates.is_empty() }

    /// number of candidates
    pub fn candidates_size(&self) -> usize { self.candidates.len() }

    /// number of vertices in the clique
    pub fn size(&self) -> usize { self.vertices.len() }

    /** inserts v in the clique and keeps only the candidates adjacent to v.
    returns false (and does nothing) if v is already in the clique.
    */
    pub fn add_vertex(&mut self, v:VertexId) -> bool {
        if self.inside.contains(v) { return false; }
        self.vertices.push(v);
        self.inside.insert(v);
        self.candidates.intersect_with(self.graph.neighbors(v));
        true
    }

    /** removes v from the clique and recomputes the candidates from the remaining vertices.
    v and every vertex that was only excluded by v become candidates again.
    returns false (and does nothing) if v is not in the clique.
    */
    pub fn remove_vertex(&mut self, v:VertexId) -> bool {
        if !self.inside.contains(v) { return false; }
        self.vertices.retain(|u| *u != v);
        self.inside.remove(v);
        self.candidates = self.common_neighborhood();
        true
    }

    /** vertices adjacent to all vertices of the clique, minus the clique itself.
    every vertex of the graph qualifies if the clique is empty.
    */
    fn common_neighborhood(&self) -> BitSet {
        let mut it = self.vertices.iter();
        let mut res = match it.next() {
            None => self.graph.vertex_set(),
            Some(first) => self.graph.neighbors(*first).clone(),
        };
        for u in it {
            res.intersect_with(self.graph.neighbors(*u));
        }
        res.difference_with(&self.inside);
        res
    }

    /// checks from scratch that the vertices are unique and pairwise adjacent
    pub fn verify(&self) -> bool {
        verify_clique(&self.graph, &self.vertices)
    }
}

/** true iff `vertices` contains no duplicates, only vertices of the graph, and every pair of
them is adjacent.
*/
pub fn verify_clique(graph:&Graph, vertices:&[VertexId]) -> bool {
    let mut unique = BitSet::new();
    for v in vertices {
        if !graph.contains(*v) {
            warn!("vertex {} is not in the graph", v);
            return false;
        }
        if !unique.insert(*v) {
            warn!("duplicated vertices in the clique");
            return false;
        }
    }
    for (i,a) in vertices.iter().enumerate() {
        for b in &vertices[i+1..] {
            if !graph.has_edge(*a, *b) {
                warn!("returned subgraph is not a clique ({} and {} are not adjacent)", a, b);
                return false;
            }
        }
    }
    true
}
