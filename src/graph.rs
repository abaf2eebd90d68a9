use bit_set::BitSet;
use tracing::info;

use crate::coloring::dsatur;
use crate::dimacs::read_from_file;
use crate::error::CliqueError;

/** Vertex Id */
pub type VertexId = usize;

/** how the vertex ids of an edge list are numbered */
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VertexNumbering {
    /// ids in [0, n)
    ZeroBased,
    /// ids in [1, n] (DIMACS)
    OneBased,
}

/** undirected graph stored as adjacency sets.
Only vertices registered in the graph are "known": adjacency queries on other ids are
precondition violations.
*/
#[derive(Debug, Clone, Default)]
pub struct Graph {
    /// nb vertices
    n: usize,
    /// nb edges
    m: usize,
    /// adj[v]: neighbors of v (None if v is not a vertex of the graph)
    adj: Vec<Option<BitSet>>,
    /// set of known vertices
    members: BitSet,
    /// returned by `neighbors` for vertices without an adjacency entry
    empty: BitSet,
}

impl Graph {

    /** creates a graph with vertices 0..n and no edges */
    pub fn new(n:usize) -> Self {
        let mut members = BitSet::with_capacity(n);
        for v in 0..n { members.insert(v); }
        Self {
            n,
            m: 0,
            adj: vec![Some(BitSet::with_capacity(n)) ; n],
            members,
            empty: BitSet::default(),
        }
    }

    /** builds a graph with n vertices from an edge list.
    Duplicate edges collapse and self-loops are dropped.
    Fails if an endpoint does not belong to the vertex range.
    */
    pub fn build(n:usize, edges:&[(usize,usize)], numbering:VertexNumbering) -> Result<Self, CliqueError> {
        let mut res = Self::new(n);
        for (a,b) in edges {
            let u = res.normalize(*a, numbering)?;
            let v = res.normalize(*b, numbering)?;
            res.add_edge(u, v);
        }
        Ok(res)
    }

    /// creates a graph from a DIMACS file
    pub fn from_file(filename:&str) -> Result<Self, CliqueError> {
        read_from_file(filename)
    }

    /// converts an input id to a vertex id in [0, n)
    fn normalize(&self, id:usize, numbering:VertexNumbering) -> Result<VertexId, CliqueError> {
        let v = match numbering {
            VertexNumbering::ZeroBased => Some(id),
            VertexNumbering::OneBased => id.checked_sub(1),
        };
        match v {
            Some(v) if v < self.n => Ok(v),
            _ => Err(CliqueError::VertexOutOfRange { vertex: id, n: self.n }),
        }
    }

    /// number of vertices
    pub fn nb_vertices(&self) -> usize { self.n }

    /// number of edges
    pub fn nb_edges(&self) -> usize { self.m }

    /// upper bound (exclusive) on the vertex ids of the graph
    pub fn id_bound(&self) -> usize { self.adj.len() }

    /// true iff v is a vertex of the graph
    pub fn contains(&self, v:VertexId) -> bool { self.members.contains(v) }

    /// vertices of the graph (increasing order)
    pub fn vertices(&self) -> impl Iterator<Item=VertexId> + '_ { self.members.iter() }

    /// vertices of the graph as a set
    pub fn vertex_set(&self) -> BitSet { self.members.clone() }

    fn adjacency(&self, v:VertexId) -> Option<&BitSet> {
        self.adj.get(v).and_then(|a| a.as_ref())
    }

    /** true iff u and v are adjacent (checks both directions).

# Panics
- if u or v is not a vertex of the graph
    */
    pub fn has_edge(&self, u:VertexId, v:VertexId) -> bool {
        match (self.adjacency(u), self.adjacency(v)) {
            (Some(adj_u), Some(adj_v)) => adj_u.contains(v) && adj_v.contains(u),
            _ => panic!("has_edge: unknown vertex in ({}, {})", u, v),
        }
    }

    /// neighbors of v (empty if v has no adjacency entry)
    pub fn neighbors(&self, v:VertexId) -> &BitSet {
        self.adjacency(v).unwrap_or(&self.empty)
    }

    /// number of neighbors of v
    pub fn degree(&self, v:VertexId) -> usize { self.neighbors(v).len() }

    /// maximum degree of the graph (0 if the graph is empty)
    pub fn max_degree(&self) -> usize {
        self.vertices().map(|v| self.degree(v)).max().unwrap_or(0)
    }

    /// adds v to the graph if it is not already there
    fn register(&mut self, v:VertexId) {
        if self.adj.len() <= v {
            self.adj.resize(v+1, None);
        }
        if self.adj[v].is_none() {
            self.adj[v] = Some(BitSet::default());
            self.members.insert(v);
            self.n += 1;
        }
    }

    /** adds the edge {u,v} (registers unknown endpoints).
    returns false if the edge already exists or is a self-loop.
    */
    pub fn add_edge(&mut self, u:VertexId, v:VertexId) -> bool {
        if u == v { return false; }
        self.register(u);
        self.register(v);
        let mut inserted = false;
        if let Some(adj_u) = self.adj[u].as_mut() { inserted |= adj_u.insert(v); }
        if let Some(adj_v) = self.adj[v].as_mut() { inserted |= adj_v.insert(u); }
        if inserted { self.m += 1; }
        inserted
    }

    /** removes the edge {u,v}. returns false if the edge did not exist */
    pub fn remove_edge(&mut self, u:VertexId, v:VertexId) -> bool {
        let mut removed = false;
        if let Some(Some(adj_u)) = self.adj.get_mut(u) { removed |= adj_u.remove(v); }
        if let Some(Some(adj_v)) = self.adj.get_mut(v) { removed |= adj_v.remove(u); }
        if removed { self.m -= 1; }
        removed
    }

    /** builds the subgraph induced by a vertex subset.
    vertices keep their ids. The current graph is left untouched.
    */
    pub fn induced_subgraph(&self, subset:&BitSet) -> Self {
        let bound = subset.iter().last().map_or(0, |v| v+1);
        let mut adj:Vec<Option<BitSet>> = vec![None ; bound];
        let mut sum_degrees = 0;
        for v in subset.iter() {
            let mut neighbors = self.neighbors(v).clone();
            neighbors.intersect_with(subset);
            sum_degrees += neighbors.len();
            adj[v] = Some(neighbors);
        }
        Self {
            n: subset.len(),
            m: sum_degrees / 2, // m = (∑ d(v)) / 2
            adj,
            members: subset.clone(),
            empty: BitSet::default(),
        }
    }

    /// print statistics of the graph
    pub fn display_statistics(&self) {
        let degrees:Vec<usize> = self.vertices().map(|v| self.degree(v)).collect();
        info!("\t{} \t vertices", self.nb_vertices());
        info!("\t{} \t edges", self.nb_edges());
        info!("\t{} \t min degree", degrees.iter().min().unwrap_or(&0));
        info!("\t{} \t max degree", degrees.iter().max().unwrap_or(&0));
        info!("\t{} \t DSATUR colors (clique upper bound)", dsatur(self).nb_colors());
    }
}
