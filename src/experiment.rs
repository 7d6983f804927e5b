//! Repeated bandit experiments.
//!
//! Every repetition plays a fresh [`GaussianBandit`] with a fresh [`Policy`] for
//! a fixed number of timesteps. The reward obtained at each timestep is averaged
//! over all repetitions with an incremental mean, in repetition order.

use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::environment::{Environment, GaussianBandit};
use super::error::{BanditError, Result};
use super::policy::{Policy, PolicyKind};
use super::{BanditConfig, MultiArmedBandit};

/// Average reward per timestep over a number of repetitions.
#[derive(Debug, PartialEq, Clone)]
pub struct RewardCurve(Vec<f64>);

impl RewardCurve {
    /// Mean of the curve over all timesteps, 0 for an empty curve.
    pub fn mean(&self) -> f64 {
        if self.0.is_empty() {
            return 0.0;
        }
        self.0.iter().sum::<f64>() / self.0.len() as f64
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn as_slice(&self) -> &[f64] {
        &self.0
    }

    pub fn into_inner(self) -> Vec<f64> {
        self.0
    }
}

#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
pub struct ExperimentConfig {
    pub n_actions: usize,
    pub n_timesteps: usize,
    pub n_repetitions: usize,
    pub policy: PolicyKind,
    /// Epsilon, initial value or `c`, depending on `policy`.
    pub param: f64,
    /// Seed for all randomness of the experiment. Drawn from the OS if `None`.
    #[serde(default)]
    pub seed: Option<u64>,
    #[serde(default)]
    pub log_file: Option<PathBuf>,
}

impl ExperimentConfig {
    pub fn new(
        n_actions: usize,
        n_timesteps: usize,
        n_repetitions: usize,
        policy: PolicyKind,
        param: f64,
    ) -> ExperimentConfig {
        ExperimentConfig {
            n_actions,
            n_timesteps,
            n_repetitions,
            policy,
            param,
            seed: None,
            log_file: None,
        }
    }

    pub fn with_seed(mut self, seed: u64) -> ExperimentConfig {
        self.seed = Some(seed);
        self
    }

    /// Reads a JSON config file and validates it.
    pub fn load(path: &Path) -> Result<ExperimentConfig> {
        let mut file = File::open(path)?;
        let mut content = String::new();
        file.read_to_string(&mut content)?;

        let config: ExperimentConfig = serde_json::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        for (name, value) in [
            ("n_actions", self.n_actions),
            ("n_timesteps", self.n_timesteps),
            ("n_repetitions", self.n_repetitions),
        ] {
            if value == 0 {
                return Err(BanditError::InvalidParameter {
                    message: format!("{name} must be positive"),
                });
            }
        }
        Ok(())
    }

    pub fn bandit_config(&self) -> BanditConfig {
        BanditConfig {
            log_file: self.log_file.clone(),
        }
    }

    pub fn run(&self) -> Result<RewardCurve> {
        self.validate()?;
        let mut rng = match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        Ok(run_repetitions(
            self.n_actions,
            self.n_timesteps,
            self.n_repetitions,
            self.policy,
            self.param,
            &self.bandit_config(),
            &mut rng,
        ))
    }
}

/// Runs `n_repetitions` independent trials and returns the average reward per timestep.
///
/// Fails with [`BanditError::InvalidPolicyKind`] if `policy_kind` is not one of
/// `egreedy`, `oi` or `ucb`. Panics if `n_actions` is 0.
pub fn run(
    n_actions: usize,
    n_timesteps: usize,
    n_repetitions: usize,
    policy_kind: &str,
    param: f64,
) -> Result<Vec<f64>> {
    let kind: PolicyKind = policy_kind.parse()?;
    let curve = run_repetitions(
        n_actions,
        n_timesteps,
        n_repetitions,
        kind,
        param,
        &BanditConfig::default(),
        &mut rand::rng(),
    );
    Ok(curve.into_inner())
}

/// Runs the experiment of `config` once for every value in `params`, which
/// replaces `config.param`. Curves are returned in the order of `params`.
pub fn sweep(config: &ExperimentConfig, params: &[f64]) -> Result<Vec<(f64, RewardCurve)>> {
    params
        .iter()
        .map(|param| {
            let point = ExperimentConfig {
                param: *param,
                ..config.clone()
            };
            point.run().map(|curve| (*param, curve))
        })
        .collect()
}

/// A single trial: fresh environment, fresh policy, `n_timesteps` cycles of
/// select, act and update. Returns the reward of every timestep.
pub fn simulate<R: Rng + ?Sized>(
    n_actions: usize,
    n_timesteps: usize,
    kind: PolicyKind,
    param: f64,
    bandit_config: &BanditConfig,
    rng: &mut R,
) -> Vec<f64> {
    let mut env = GaussianBandit::new(n_actions, rng);
    let mut policy = Policy::new(kind, n_actions, param, bandit_config.clone());

    let mut rewards = Vec::with_capacity(n_timesteps);
    for timestep in 0..n_timesteps {
        let action = policy.select_action(param, timestep as u64 + 1, rng);
        let reward = env.act(action, rng);
        policy.update(action, reward);
        rewards.push(reward);
    }
    rewards
}

fn run_repetitions<R: Rng + ?Sized>(
    n_actions: usize,
    n_timesteps: usize,
    n_repetitions: usize,
    kind: PolicyKind,
    param: f64,
    bandit_config: &BanditConfig,
    rng: &mut R,
) -> RewardCurve {
    let mut avg_reward = vec![0.0; n_timesteps];
    for rep in 0..n_repetitions {
        let rewards = simulate(n_actions, n_timesteps, kind, param, bandit_config, rng);
        for (avg, reward) in avg_reward.iter_mut().zip(rewards) {
            *avg += (reward - *avg) / (rep + 1) as f64;
        }
    }
    RewardCurve(avg_reward)
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn curve_mean() {
        let curve = RewardCurve(vec![1.0, 2.0, 3.0, 6.0]);
        assert_eq!(curve.mean(), 3.0);
        assert_eq!(RewardCurve(vec![]).mean(), 0.0);
    }

    #[test]
    fn averages_in_repetition_order() {
        let mut rng = StdRng::seed_from_u64(11);
        let config = BanditConfig::default();
        let curve = run_repetitions(5, 20, 3, PolicyKind::Ucb, 1.0, &config, &mut rng);

        let mut rng = StdRng::seed_from_u64(11);
        let trials: Vec<Vec<f64>> = (0..3)
            .map(|_| simulate(5, 20, PolicyKind::Ucb, 1.0, &config, &mut rng))
            .collect();
        for t in 0..20 {
            let expected = (trials[0][t] + trials[1][t] + trials[2][t]) / 3.0;
            assert!((curve.as_slice()[t] - expected).abs() < 1e-9);
        }
    }

    #[test]
    fn validate_rejects_empty_sizes() {
        let config = ExperimentConfig::new(0, 10, 10, PolicyKind::EpsilonGreedy, 0.1);
        assert!(matches!(
            config.validate(),
            Err(BanditError::InvalidParameter { .. })
        ));
        let config = ExperimentConfig::new(10, 10, 0, PolicyKind::EpsilonGreedy, 0.1);
        assert!(config.run().is_err());
    }

    #[test]
    fn seeded_runs_are_reproducible() {
        let config = ExperimentConfig::new(10, 50, 4, PolicyKind::EpsilonGreedy, 0.1).with_seed(5);
        assert_eq!(config.run().unwrap(), config.run().unwrap());
    }
}
