use super::utils::{log, log_command, select_argmax};
use super::{BanditConfig, MultiArmedBandit};
use rand::Rng;

/// Explores uniformly with probability epsilon, otherwise plays the action
/// with the highest sample-average reward.
#[derive(Debug, PartialEq, Clone)]
pub struct EpsilonGreedy {
    bandit_config: BanditConfig,
    values: Vec<f64>,
    counts: Vec<u64>,
}

impl EpsilonGreedy {
    pub fn new(n_actions: usize, bandit_config: BanditConfig) -> EpsilonGreedy {
        assert!(n_actions > 0, "n_actions must be positive");
        EpsilonGreedy {
            bandit_config,
            values: vec![0.0; n_actions],
            counts: vec![0; n_actions],
        }
    }

    /// `epsilon` is expected in `[0, 1]` and is not checked.
    pub fn select_action<R: Rng + ?Sized>(&self, epsilon: f64, rng: &mut R) -> usize {
        let action = if rng.random::<f64>() < epsilon {
            rng.random_range(0..self.values.len())
        } else {
            select_argmax(&self.values).unwrap_or(0)
        };
        log(&log_command("SELECT", action), &self.bandit_config.log_file);
        action
    }

    pub fn counts(&self) -> &[u64] {
        &self.counts
    }
}

impl MultiArmedBandit for EpsilonGreedy {
    fn n_actions(&self) -> usize {
        self.values.len()
    }

    fn estimates(&self) -> &[f64] {
        &self.values
    }

    fn update(&mut self, action: usize, reward: f64) {
        self.counts[action] += 1;
        let step = 1.0 / self.counts[action] as f64;
        self.values[action] += step * (reward - self.values[action]);
        log(&log_command("UPDATE", action), &self.bandit_config.log_file);
    }
}
