use serde::{Deserialize, Serialize};

use crate::error::CliqueError;

/// Tunables of the perturbation search.
///
/// * `perturbation_ratio`: fraction of the best clique removed at each round.
/// * `top_k`: the rebuild picks uniformly among the `top_k` best ranked candidates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchParams {
    /// number of perturbation rounds
    pub nb_rounds: usize,
    /// fraction of the clique removed by a perturbation
    pub perturbation_ratio: f64,
    /// width of the randomized choice when rebuilding
    pub top_k: usize,
    /// random generator seed
    pub seed: u64,
}

impl Default for SearchParams {
    fn default() -> Self {
        Self {
            nb_rounds: 130,
            perturbation_ratio: 0.7,
            top_k: 2,
            seed: 0,
        }
    }
}

impl SearchParams {
    /// checks that the parameters can drive a search
    pub fn validate(&self) -> Result<(), CliqueError> {
        if self.top_k == 0 {
            return Err(CliqueError::InvalidParameter("top_k must be at least 1".to_string()));
        }
        if !self.perturbation_ratio.is_finite() || self.perturbation_ratio < 0. {
            return Err(CliqueError::InvalidParameter(format!(
                "perturbation ratio must be a non-negative number (got {})", self.perturbation_ratio
            )));
        }
        Ok(())
    }
}
