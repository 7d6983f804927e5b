use super::utils::{log, log_command, select_argmax};
use super::{BanditConfig, MultiArmedBandit};

pub static DEFAULT_CONFIG: OptimisticConfig = OptimisticConfig {
    initial_value: 0.0,
    learning_rate: 0.1,
};

#[derive(Debug, PartialEq, Copy, Clone, Serialize, Deserialize)]
pub struct OptimisticConfig {
    /// Starting estimate for every action. Values above the best achievable
    /// reward make the greedy policy try every action early on.
    pub initial_value: f64,
    /// Constant step size in (0, 1].
    pub learning_rate: f64,
}

/// Greedy policy over optimistically initialised estimates, updated with a
/// constant step size (exponential recency-weighted average).
#[derive(Debug, PartialEq, Clone)]
pub struct OptimisticGreedy {
    config: OptimisticConfig,
    bandit_config: BanditConfig,
    values: Vec<f64>,
}

impl OptimisticGreedy {
    pub fn new(
        n_actions: usize,
        bandit_config: BanditConfig,
        config: OptimisticConfig,
    ) -> OptimisticGreedy {
        assert!(n_actions > 0, "n_actions must be positive");
        OptimisticGreedy {
            config,
            bandit_config,
            values: vec![config.initial_value; n_actions],
        }
    }

    pub fn config(&self) -> OptimisticConfig {
        self.config
    }

    pub fn select_action(&self) -> usize {
        let action = select_argmax(&self.values).unwrap_or(0);
        log(&log_command("SELECT", action), &self.bandit_config.log_file);
        action
    }
}

impl MultiArmedBandit for OptimisticGreedy {
    fn n_actions(&self) -> usize {
        self.values.len()
    }

    fn estimates(&self) -> &[f64] {
        &self.values
    }

    fn update(&mut self, action: usize, reward: f64) {
        self.values[action] += self.config.learning_rate * (reward - self.values[action]);
        log(&log_command("UPDATE", action), &self.bandit_config.log_file);
    }
}
