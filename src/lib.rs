//! Action-selection policies for the stationary k-armed bandit.
//!
//! Three policies share the [`MultiArmedBandit`] contract:
//! - [`EpsilonGreedy`]: random action with probability epsilon, greedy otherwise,
//!   sample-average estimates.
//! - [`OptimisticGreedy`]: purely greedy over optimistically initialised
//!   estimates with a constant step size.
//! - [`UCB`]: greedy over estimate plus an uncertainty bonus, after playing every
//!   action once.
//!
//! The [`experiment`] module drives a policy against a [`GaussianBandit`] for a
//! number of independent repetitions and averages the reward per timestep.

#[macro_use]
extern crate serde_derive;
extern crate rand;
extern crate rand_distr;
extern crate serde;
extern crate serde_json;

use std::path::PathBuf;

pub mod bandit;
pub mod egreedy;
pub mod environment;
pub mod error;
pub mod experiment;
pub mod optimistic;
pub mod policy;
pub mod ucb;
mod utils;

pub use bandit::MultiArmedBandit;
pub use egreedy::EpsilonGreedy;
pub use environment::{Environment, GaussianBandit};
pub use error::{BanditError, Result};
pub use experiment::{ExperimentConfig, RewardCurve, run, simulate, sweep};
pub use optimistic::{OptimisticConfig, OptimisticGreedy};
pub use policy::{Policy, PolicyKind};
pub use ucb::UCB;

pub static DEFAULT_BANDIT_CONFIG: BanditConfig = BanditConfig { log_file: None };

/// Settings shared by all policies.
#[derive(Debug, PartialEq, Clone, Default, Serialize, Deserialize)]
pub struct BanditConfig {
    /// Append a line for every select and update to this file.
    /// No logging happens if `None`.
    pub log_file: Option<PathBuf>,
}
