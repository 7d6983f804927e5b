use super::utils::{log, log_command, select_argmax};
use super::{BanditConfig, MultiArmedBandit};

/// Upper confidence bound action selection over sample-average estimates.
///
/// Every action is played once, lowest index first, before the confidence
/// bound is used. Afterwards the action maximising
/// `q[a] + c * sqrt(ln(t) / n[a])` is selected.
#[derive(Debug, PartialEq, Clone)]
pub struct UCB {
    bandit_config: BanditConfig,
    values: Vec<f64>,
    counts: Vec<u64>,
    all_actions_played_at_least_once: bool,
}

impl UCB {
    pub fn new(n_actions: usize, bandit_config: BanditConfig) -> UCB {
        assert!(n_actions > 0, "n_actions must be positive");
        UCB {
            bandit_config,
            values: vec![0.0; n_actions],
            counts: vec![0; n_actions],
            all_actions_played_at_least_once: false,
        }
    }

    /// `t` is the current timestep, counted from 1. A `t` of 0 is treated as 1.
    pub fn select_action(&self, c: f64, t: u64) -> usize {
        let possible_action = if self.all_actions_played_at_least_once {
            self.calculate_best_action(c, t)
        } else {
            self.get_next_unexplored()
        };
        let action = possible_action.unwrap_or(0);
        log(&log_command("SELECT", action), &self.bandit_config.log_file);
        action
    }

    pub fn counts(&self) -> &[u64] {
        &self.counts
    }

    fn check_if_all_played(&self) -> bool {
        self.counts.iter().all(|c| *c > 0)
    }

    fn exploration(&self, c: f64, t: u64, action_count: u64) -> f64 {
        let t = t.max(1) as f64;
        c * (t.ln() / action_count.max(1) as f64).sqrt()
    }

    fn calculate_best_action(&self, c: f64, t: u64) -> Option<usize> {
        let estimations: Vec<f64> = self
            .values
            .iter()
            .zip(self.counts.iter())
            .map(|(value, count)| value + self.exploration(c, t, *count))
            .collect();
        select_argmax(&estimations)
    }

    fn get_next_unexplored(&self) -> Option<usize> {
        self.counts.iter().position(|c| *c == 0)
    }
}

impl MultiArmedBandit for UCB {
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
        if !self.all_actions_played_at_least_once {
            self.all_actions_played_at_least_once = self.check_if_all_played();
        }
        log(&log_command("UPDATE", action), &self.bandit_config.log_file);
    }
}
