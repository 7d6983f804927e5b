use rand::Rng;
use rand_distr::{Distribution, StandardNormal};

use super::utils::select_argmax;

/// Source of rewards for the actions of a bandit problem.
pub trait Environment {
    fn n_actions(&self) -> usize;

    fn act<R: Rng + ?Sized>(&mut self, action: usize, rng: &mut R) -> f64;
}

/// Stationary k-armed bandit. The mean reward of every action is drawn from a
/// standard normal distribution on construction, rewards are then sampled
/// from a normal distribution around that mean with unit variance.
#[derive(Debug, Clone)]
pub struct GaussianBandit {
    means: Vec<f64>,
}

impl GaussianBandit {
    pub fn new<R: Rng + ?Sized>(n_actions: usize, rng: &mut R) -> GaussianBandit {
        assert!(n_actions > 0, "n_actions must be positive");
        let means: Vec<f64> = (0..n_actions)
            .map(|_| StandardNormal.sample(rng))
            .collect();
        GaussianBandit { means }
    }

    /// Bandit with fixed mean rewards.
    pub fn with_means(means: &[f64]) -> GaussianBandit {
        assert!(!means.is_empty(), "n_actions must be positive");
        GaussianBandit {
            means: means.to_vec(),
        }
    }

    pub fn means(&self) -> &[f64] {
        &self.means
    }

    /// Action with the highest expected reward.
    pub fn optimal_action(&self) -> usize {
        select_argmax(&self.means).unwrap_or(0)
    }
}

impl Environment for GaussianBandit {
    fn n_actions(&self) -> usize {
        self.means.len()
    }

    fn act<R: Rng + ?Sized>(&mut self, action: usize, rng: &mut R) -> f64 {
        let noise: f64 = StandardNormal.sample(rng);
        self.means[action] + noise
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn creates_one_arm_per_action() {
        let mut rng = StdRng::seed_from_u64(1);
        let env = GaussianBandit::new(10, &mut rng);
        assert_eq!(env.n_actions(), 10);
        assert_eq!(env.means().len(), 10);
    }

    #[test]
    fn optimal_action_has_highest_mean() {
        let env = GaussianBandit::with_means(&[0.1, 1.5, -0.3, 1.2]);
        assert_eq!(env.optimal_action(), 1);
    }

    #[test]
    fn rewards_centre_on_the_arm_mean() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut env = GaussianBandit::with_means(&[0.0, 3.0]);
        let n = 20_000;
        let total: f64 = (0..n).map(|_| env.act(1, &mut rng)).sum();
        let mean = total / n as f64;
        assert!((mean - 3.0).abs() < 0.05, "sample mean was {mean}");
    }
}
