use std::rc::Rc;

use bit_set::BitSet;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::Serialize;
use tracing::{debug, info};

use crate::clique::Clique;
use crate::error::CliqueError;
use crate::graph::{Graph, VertexId};
use crate::search::greedy_clique::{extend_clique, greedy_clique};
use crate::search::params::SearchParams;

/** outcome of a perturbation search */
#[derive(Debug, Clone)]
pub struct SearchResult {
    /// best clique found
    pub best: Clique,
    /// primal_list[i]: size of the best clique after round i (0: initial greedy)
    pub primal_list: Vec<usize>,
    /// number of rounds that improved the best clique
    pub nb_improvements: usize,
}

/** search statistics (exported as json) */
#[derive(Debug, Clone, Serialize)]
pub struct SearchStats {
    /// size of the best clique after each round
    pub primal_list: Vec<usize>,
    /// number of improving rounds
    pub nb_improvements: usize,
    /// parameters used
    pub params: SearchParams,
}

impl SearchResult {
    /// statistics of the search
    pub fn stats(&self, params:&SearchParams) -> SearchStats {
        SearchStats {
            primal_list: self.primal_list.clone(),
            nb_improvements: self.nb_improvements,
            params: params.clone(),
        }
    }
}

/** number of vertices removed from a clique of the given size:
round(ratio × size), at least 1, at most size.
*/
pub fn perturbation_size(size:usize, ratio:f64) -> usize {
    let amount = (ratio * size as f64).round() as usize;
    amount.max(1).min(size)
}

/** draws `count` distinct positions in [0, size). Draws that hit an already chosen
position are discarded (requires count <= size).
*/
pub fn pick_positions<R>(size:usize, count:usize, rng:&mut R) -> Vec<usize>
where R: Rng + ?Sized {
    debug_assert!(count <= size);
    let mut chosen = BitSet::with_capacity(size);
    let mut res = Vec::with_capacity(count);
    while res.len() < count {
        let position = rng.gen_range(0..size);
        if chosen.insert(position) {
            res.push(position);
        }
    }
    res
}

/** removes the vertices at the given positions of the clique.
positions refer to the clique before any removal.
On `InconsistentRemoval`, the vertices removed so far stay removed: the clique is partially
perturbed and must be discarded.
*/
pub fn perturb(clique:&mut Clique, positions:&[usize]) -> Result<(), CliqueError> {
    let targets:Vec<VertexId> = positions.iter()
        .filter_map(|p| clique.vertices().get(*p).cloned())
        .collect();
    if targets.len() != positions.len() {
        return Err(CliqueError::InvalidParameter(format!(
            "perturbation positions {:?} out of a clique of size {}", positions, clique.size()
        )));
    }
    for v in targets {
        if !clique.remove_vertex(v) {
            return Err(CliqueError::InconsistentRemoval(v));
        }
    }
    Ok(())
}

/** extends the clique, choosing each vertex uniformly among the `top_k` best ranked candidates */
pub fn rebuild<R>(clique:&mut Clique, top_k:usize, rng:&mut R)
where R: Rng + ?Sized {
    extend_clique(clique, |_| rng.gen_range(0..top_k));
}

/** Perturbation search.
Starts from the greedy clique. At each round, copies the best clique, removes a random
fraction of its vertices, rebuilds it with a randomized greedy and keeps it if it is strictly
larger than the best clique. Runs exactly `params.nb_rounds` rounds.
*/
pub fn perturbation_search(graph:Rc<Graph>, params:&SearchParams) -> Result<SearchResult, CliqueError> {
    params.validate()?;
    let mut rng = ChaCha8Rng::seed_from_u64(params.seed);
    let mut best = greedy_clique(graph)?;
    info!("initial clique: {}", best.size());
    let mut primal_list = vec![best.size()];
    let mut nb_improvements = 0;
    for round in 1..=params.nb_rounds {
        let mut current = best.clone();
        let count = perturbation_size(current.size(), params.perturbation_ratio);
        let positions = pick_positions(current.size(), count, &mut rng);
        perturb(&mut current, &positions)?;
        rebuild(&mut current, params.top_k, &mut rng);
        debug!("round {}: removed {}, rebuilt {} (best: {})", round, count, current.size(), best.size());
        if current.size() > best.size() {
            info!("new best clique! ({}) at round {}", current.size(), round);
            best = current;
            nb_improvements += 1;
        }
        primal_list.push(best.size());
    }
    Ok(SearchResult { best, primal_list, nb_improvements })
}


#[cfg(test)]
mod tests {
    use super::*;

    use crate::graph::VertexNumbering;

    fn build(n:usize, edges:&[(usize,usize)]) -> Rc<Graph> {
        Rc::new(Graph::build(n, edges, VertexNumbering::ZeroBased).unwrap())
    }

    /// two disjoint cliques: {0,1,2} and {3,4,5,6}, plus the edge 2-3
    fn two_cliques() -> Rc<Graph> {
        build(7, &[
            (0,1), (0,2), (1,2),
            (3,4), (3,5), (3,6), (4,5), (4,6), (5,6),
            (2,3),
        ])
    }

    #[test]
    fn test_perturbation_size() {
        assert_eq!(perturbation_size(1, 0.7), 1);
        assert_eq!(perturbation_size(2, 0.7), 1);
        assert_eq!(perturbation_size(5, 0.7), 4);
        assert_eq!(perturbation_size(10, 0.7), 7);
        assert_eq!(perturbation_size(3, 0.), 1);
        assert_eq!(perturbation_size(3, 5.), 3);
    }

    #[test]
    fn test_pick_positions() {
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        for size in 1..10 {
            for count in 1..=size {
                let positions = pick_positions(size, count, &mut rng);
                assert_eq!(positions.len(), count);
                let distinct:BitSet = positions.iter().cloned().collect();
                assert_eq!(distinct.len(), count);
                assert!(positions.iter().all(|p| *p < size));
            }
        }
    }

    #[test]
    fn test_pick_positions_is_reproducible() {
        let a = pick_positions(20, 7, &mut ChaCha8Rng::seed_from_u64(11));
        let b = pick_positions(20, 7, &mut ChaCha8Rng::seed_from_u64(11));
        assert_eq!(a, b);
    }

    #[test]
    fn test_perturb() {
        let g = two_cliques();
        let mut clique = Clique::new(3, g);
        for v in [4,5,6].iter() { clique.add_vertex(*v); }
        perturb(&mut clique, &[0,2]).unwrap();
        assert_eq!(clique.vertices(), &[4,6]);
        let candidates:Vec<VertexId> = clique.candidates().iter().collect();
        assert_eq!(candidates, vec![3,5]);
        assert!(matches!(perturb(&mut clique, &[5]), Err(CliqueError::InvalidParameter(_))));
    }

    #[test]
    fn test_perturb_repeated_position() {
        let g = two_cliques();
        let mut clique = Clique::new(0, g);
        clique.add_vertex(1);
        assert!(matches!(perturb(&mut clique, &[0,0]), Err(CliqueError::InconsistentRemoval(0))));
        // the first removal happened
        assert_eq!(clique.vertices(), &[1]);
    }

    #[test]
    fn test_rebuild_reaches_maximal_clique() {
        let g = two_cliques();
        let mut rng = ChaCha8Rng::seed_from_u64(0);
        let mut clique = Clique::new(4, g);
        rebuild(&mut clique, 2, &mut rng);
        assert_eq!(clique.size(), 4);
        assert!(!clique.needs_more_candidates());
        assert!(clique.verify());
    }

    #[test]
    fn test_search_finds_larger_clique() {
        let result = perturbation_search(two_cliques(), &SearchParams::default()).unwrap();
        assert_eq!(result.best.size(), 4);
        assert!(result.best.verify());
        assert_eq!(result.primal_list.len(), 131);
    }

    #[test]
    fn test_primal_list_is_monotonic() {
        let g = build(8, &[
            (0,1), (1,2), (2,3), (3,0), (0,2),
            (4,5), (5,6), (6,4), (4,7), (5,7), (6,7), (3,4),
        ]);
        for seed in 0..5 {
            let params = SearchParams { nb_rounds: 30, seed, ..SearchParams::default() };
            let result = perturbation_search(g.clone(), &params).unwrap();
            assert!(result.primal_list.windows(2).all(|w| w[0] <= w[1]));
            assert_eq!(*result.primal_list.last().unwrap(), result.best.size());
            assert_eq!(result.best.size(), 4);
        }
    }

    #[test]
    fn test_search_is_reproducible() {
        let g = two_cliques();
        let params = SearchParams { seed: 17, ..SearchParams::default() };
        let a = perturbation_search(g.clone(), &params).unwrap();
        let b = perturbation_search(g, &params).unwrap();
        assert_eq!(a.best.vertices(), b.best.vertices());
        assert_eq!(a.primal_list, b.primal_list);
    }

    #[test]
    fn test_search_small_graphs() {
        let params = SearchParams::default();
        assert_eq!(perturbation_search(build(1, &[]), &params).unwrap().best.size(), 1);
        assert_eq!(perturbation_search(build(6, &[]), &params).unwrap().best.size(), 1);
        let star = build(5, &[(0,1), (0,2), (0,3), (0,4)]);
        assert_eq!(perturbation_search(star, &params).unwrap().best.size(), 2);
        let path = build(4, &[(0,1), (1,2), (2,3)]);
        assert_eq!(perturbation_search(path, &params).unwrap().best.size(), 2);
    }

    #[test]
    fn test_invalid_params() {
        let params = SearchParams { top_k: 0, ..SearchParams::default() };
        assert!(perturbation_search(two_cliques(), &params).is_err());
        assert!(matches!(
            perturbation_search(build(0, &[]), &SearchParams::default()),
            Err(CliqueError::EmptyGraph)
        ));
    }
}
