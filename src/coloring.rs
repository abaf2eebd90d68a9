use std::cmp::{Ordering, Reverse, max};

use bit_set::BitSet;
use priority_queue::PriorityQueue;

use crate::graph::{Graph, VertexId};

/// priority of an uncolored vertex in the DSATUR queue
#[derive(Debug, PartialEq, Eq)]
struct DSatInfo {
    /// number of distinct colors among the colored neighbors
    dsat: usize,
    /// number of uncolored neighbors
    degree: usize,
    /// vertex id (last tie-break, larger first)
    vertex: VertexId,
}

impl Ord for DSatInfo {
    fn cmp(&self, other: &Self) -> Ordering {
        self.dsat.cmp(&other.dsat)
            .then_with(|| self.degree.cmp(&other.degree))
            .then_with(|| self.vertex.cmp(&other.vertex))
    }
}

// `PartialOrd` needs to be implemented as well.
impl PartialOrd for DSatInfo {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/** vertex coloring (colors are 0, 1, ...) */
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Coloring {
    /// colors[v]: color assigned to vertex v
    colors: Vec<Option<usize>>,
    /// number of colors used
    nb_colors: usize,
}

impl Coloring {
    /// color of v (None if v is not colored)
    pub fn color(&self, v:VertexId) -> Option<usize> {
        self.colors.get(v).cloned().flatten()
    }

    /// number of colors used
    pub fn nb_colors(&self) -> usize { self.nb_colors }

    /// true iff every vertex of the graph is colored and no edge links two vertices of the same color
    pub fn is_proper(&self, graph:&Graph) -> bool {
        graph.vertices().all(|u| {
            match self.color(u) {
                None => false,
                Some(c) => graph.neighbors(u).iter().all(|v| self.color(v) != Some(c)),
            }
        })
    }
}

/** DSATUR greedy coloring.
    1. choose an uncolored vertex that sees the most colors (break ties by the largest
       uncolored degree, then by the largest id)
    2. assign it the first color available
    3. update the saturation and uncolored degree of its uncolored neighbors
    4. repeat until every vertex is colored
*/
pub fn dsatur(graph:&Graph) -> Coloring {
    let bound = graph.id_bound();
    let mut remaining_vertices:PriorityQueue<VertexId, DSatInfo> = PriorityQueue::new();
    for v in graph.vertices() {
        remaining_vertices.push(v, DSatInfo { dsat:0, degree:graph.degree(v), vertex:v });
    }
    let mut colors:Vec<Option<usize>> = vec![None ; bound]; // colors[v] -> color assigned to vertex v
    let mut adj_colors:Vec<BitSet> = vec![BitSet::default() ; bound]; // adj_colors[v] -> colors v sees
    let mut nb_colors:usize = 0;
    while let Some((current_vertex, _)) = remaining_vertices.pop() {
        // assign it the first color available
        let mut color:usize = 0;
        while adj_colors[current_vertex].contains(color) { color += 1; }
        colors[current_vertex] = Some(color);
        nb_colors = max(nb_colors, color+1);
        // update saturation degree information (the queue replaces the stale keys)
        for neighbor in graph.neighbors(current_vertex).iter()
        .filter(|neighbor| colors[*neighbor].is_none()) {
            let new_color = adj_colors[neighbor].insert(color);
            remaining_vertices.change_priority_by(&neighbor, |p| {
                if new_color { p.dsat += 1; }
                p.degree -= 1;
            });
        }
    }
    Coloring { colors, nb_colors }
}

/** vertex of a ranking produced by `rank_by_color` */
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RankedVertex {
    /// vertex id
    pub vertex: VertexId,
    /// number of distinct colors among its neighbors (within the subset)
    pub nb_neighbor_colors: usize,
    /// degree within the subset
    pub degree: usize,
}

/** colors the subgraph induced by `subset` with DSATUR and ranks its vertices by
(distinct neighbor colors, subgraph degree, id), all decreasing.
The graph is not modified.
*/
pub fn rank_by_color(graph:&Graph, subset:&BitSet) -> Vec<RankedVertex> {
    if subset.is_empty() { return Vec::new(); }
    let sub_graph = graph.induced_subgraph(subset);
    let coloring = dsatur(&sub_graph);
    let mut res:Vec<RankedVertex> = sub_graph.vertices().map(|v| {
        let seen:BitSet = sub_graph.neighbors(v).iter()
            .filter_map(|u| coloring.color(u))
            .collect();
        RankedVertex { vertex:v, nb_neighbor_colors:seen.len(), degree:sub_graph.degree(v) }
    }).collect();
    res.sort_by_key(|r| Reverse((r.nb_neighbor_colors, r.degree, r.vertex)));
    res
}


#[cfg(test)]
mod tests {
    use super::*;

    use crate::graph::VertexNumbering;

    fn complete(n:usize) -> Graph {
        let mut g = Graph::new(n);
        for u in 0..n { for v in 0..u { g.add_edge(u, v); } }
        g
    }

    fn star5() -> Graph {
        Graph::build(5, &[(0,1), (0,2), (0,3), (0,4)], VertexNumbering::ZeroBased).unwrap()
    }

    #[test]
    fn test_dsatur_complete() {
        let g = complete(5);
        let coloring = dsatur(&g);
        assert!(coloring.is_proper(&g));
        assert_eq!(coloring.nb_colors(), 5);
        // ties broken by the largest id: 4 is colored first
        assert_eq!(coloring.color(4), Some(0));
        assert_eq!(coloring.color(0), Some(4));
    }

    #[test]
    fn test_dsatur_star() {
        let g = star5();
        let coloring = dsatur(&g);
        assert!(coloring.is_proper(&g));
        assert_eq!(coloring.nb_colors(), 2);
        assert_eq!(coloring.color(0), Some(0));
        for leaf in 1..5 { assert_eq!(coloring.color(leaf), Some(1)); }
    }

    #[test]
    fn test_dsatur_odd_cycle() {
        let g = Graph::build(5, &[(0,1), (1,2), (2,3), (3,4), (4,0)], VertexNumbering::ZeroBased).unwrap();
        let coloring = dsatur(&g);
        assert!(coloring.is_proper(&g));
        assert_eq!(coloring.nb_colors(), 3);
        for v in g.vertices() {
            assert!(coloring.color(v).unwrap() <= g.max_degree());
        }
    }

    #[test]
    fn test_dsatur_sparse_ids() {
        let g = complete(6);
        let subset:BitSet = [1,3,5].iter().cloned().collect();
        let sub = g.induced_subgraph(&subset);
        let coloring = dsatur(&sub);
        assert!(coloring.is_proper(&sub));
        assert_eq!(coloring.nb_colors(), 3);
        assert_eq!(coloring.color(0), None);
    }

    #[test]
    fn test_improper_coloring() {
        let g = complete(2);
        let coloring = Coloring { colors: vec![Some(0), Some(0)], nb_colors: 1 };
        assert!(!coloring.is_proper(&g));
    }

    #[test]
    fn test_rank_empty_subset() {
        assert!(rank_by_color(&star5(), &BitSet::new()).is_empty());
    }

    #[test]
    fn test_rank_star() {
        let g = star5();
        let ranking = rank_by_color(&g, &g.vertex_set());
        assert_eq!(ranking[0], RankedVertex { vertex:0, nb_neighbor_colors:1, degree:4 });
        let leaves:Vec<VertexId> = ranking[1..].iter().map(|r| r.vertex).collect();
        assert_eq!(leaves, vec![4,3,2,1]);
    }

    #[test]
    fn test_rank_subset_uses_induced_degrees() {
        let g = star5();
        let subset:BitSet = [1,2,3].iter().cloned().collect();
        let ranking = rank_by_color(&g, &subset);
        assert_eq!(ranking.len(), 3);
        assert!(ranking.iter().all(|r| r.degree == 0 && r.nb_neighbor_colors == 0));
        assert_eq!(ranking[0].vertex, 3);
    }

    #[test]
    fn test_rank_counts_distinct_colors() {
        // triangle 0-1-2 plus a pendant vertex 3 attached to 0
        let g = Graph::build(4, &[(0,1), (1,2), (0,2), (0,3)], VertexNumbering::ZeroBased).unwrap();
        let ranking = rank_by_color(&g, &g.vertex_set());
        assert_eq!(ranking[0].vertex, 0);
        assert_eq!(ranking[0].degree, 3);
        // 3 is colored like 1 or 2 so 0 sees 2 distinct colors
        assert_eq!(ranking[0].nb_neighbor_colors, 2);
        assert_eq!(ranking[3], RankedVertex { vertex:3, nb_neighbor_colors:1, degree:1 });
    }
}
