use std::rc::Rc;

use tracing::debug;

use crate::clique::Clique;
use crate::coloring::rank_by_color;
use crate::error::CliqueError;
use crate::graph::Graph;

/** extends the clique until no candidate remains.
At each step the candidates are ranked by `rank_by_color` and `pick(nb_ranked)` chooses the
rank of the inserted vertex.
*/
pub fn extend_clique<F>(clique:&mut Clique, mut pick:F) where F: FnMut(usize) -> usize {
    let graph = clique.graph().clone();
    while clique.needs_more_candidates() {
        let ranking = rank_by_color(&graph, clique.candidates());
        let rank = pick(ranking.len()).min(ranking.len()-1);
        clique.add_vertex(ranking[rank].vertex);
    }
}

/** implements a greedy algorithm that finds a "large" clique.
The algorithm ranks all vertices by `rank_by_color` and starts from the first one. Its
neighbors become the candidates. Then, while some candidates remain, rank them the same way
and insert the first one.
*/
pub fn greedy_clique(graph:Rc<Graph>) -> Result<Clique, CliqueError> {
    let ranking = rank_by_color(&graph, &graph.vertex_set());
    let seed = ranking.first().ok_or(CliqueError::EmptyGraph)?.vertex;
    let mut clique = Clique::new(seed, graph);
    extend_clique(&mut clique, |_| 0);
    debug!("greedy clique: {}", clique.size());
    Ok(clique)
}
