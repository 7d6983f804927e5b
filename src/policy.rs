use std::fmt;
use std::str::FromStr;

use rand::Rng;

use super::egreedy::EpsilonGreedy;
use super::error::BanditError;
use super::optimistic::{self, OptimisticConfig, OptimisticGreedy};
use super::ucb::UCB;
use super::{BanditConfig, MultiArmedBandit};

/// Selector for one of the three policies.
#[derive(Debug, PartialEq, Eq, Copy, Clone, Hash, Serialize, Deserialize)]
pub enum PolicyKind {
    #[serde(rename = "egreedy")]
    EpsilonGreedy,
    #[serde(rename = "oi")]
    OptimisticInit,
    #[serde(rename = "ucb")]
    Ucb,
}

impl PolicyKind {
    pub fn selector(&self) -> &'static str {
        match self {
            PolicyKind::EpsilonGreedy => "egreedy",
            PolicyKind::OptimisticInit => "oi",
            PolicyKind::Ucb => "ucb",
        }
    }
}

impl FromStr for PolicyKind {
    type Err = BanditError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "egreedy" => Ok(PolicyKind::EpsilonGreedy),
            "oi" => Ok(PolicyKind::OptimisticInit),
            "ucb" => Ok(PolicyKind::Ucb),
            other => Err(BanditError::InvalidPolicyKind(other.to_string())),
        }
    }
}

impl fmt::Display for PolicyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.selector())
    }
}

/// One instance of any of the three policies.
///
/// The scalar parameter has a different meaning per policy: epsilon for
/// epsilon-greedy, the initial value for optimistic initialisation (fixed at
/// construction) and the exploration constant `c` for UCB.
#[derive(Debug, PartialEq, Clone)]
pub enum Policy {
    EpsilonGreedy(EpsilonGreedy),
    OptimisticInit(OptimisticGreedy),
    Ucb(UCB),
}

impl Policy {
    pub fn new(kind: PolicyKind, n_actions: usize, param: f64, bandit_config: BanditConfig) -> Policy {
        match kind {
            PolicyKind::EpsilonGreedy => {
                Policy::EpsilonGreedy(EpsilonGreedy::new(n_actions, bandit_config))
            }
            PolicyKind::OptimisticInit => {
                let config = OptimisticConfig {
                    initial_value: param,
                    ..optimistic::DEFAULT_CONFIG
                };
                Policy::OptimisticInit(OptimisticGreedy::new(n_actions, bandit_config, config))
            }
            PolicyKind::Ucb => Policy::Ucb(UCB::new(n_actions, bandit_config)),
        }
    }

    pub fn kind(&self) -> PolicyKind {
        match self {
            Policy::EpsilonGreedy(_) => PolicyKind::EpsilonGreedy,
            Policy::OptimisticInit(_) => PolicyKind::OptimisticInit,
            Policy::Ucb(_) => PolicyKind::Ucb,
        }
    }

    /// `t` is the current timestep counted from 1, only UCB uses it.
    pub fn select_action<R: Rng + ?Sized>(&self, param: f64, t: u64, rng: &mut R) -> usize {
        match self {
            Policy::EpsilonGreedy(policy) => policy.select_action(param, rng),
            Policy::OptimisticInit(policy) => policy.select_action(),
            Policy::Ucb(policy) => policy.select_action(param, t),
        }
    }

    fn inner(&self) -> &dyn MultiArmedBandit {
        match self {
            Policy::EpsilonGreedy(policy) => policy,
            Policy::OptimisticInit(policy) => policy,
            Policy::Ucb(policy) => policy,
        }
    }
}

impl MultiArmedBandit for Policy {
    fn n_actions(&self) -> usize {
        self.inner().n_actions()
    }

    fn estimates(&self) -> &[f64] {
        self.inner().estimates()
    }

    fn update(&mut self, action: usize, reward: f64) {
        match self {
            Policy::EpsilonGreedy(policy) => policy.update(action, reward),
            Policy::OptimisticInit(policy) => policy.update(action, reward),
            Policy::Ucb(policy) => policy.update(action, reward),
        }
    }
}
