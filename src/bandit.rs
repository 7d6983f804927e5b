/// Capability shared by every policy. Action selection takes different
/// parameters per policy and lives on the concrete types.
pub trait MultiArmedBandit {
    fn n_actions(&self) -> usize;

    /// Current value estimate per action.
    fn estimates(&self) -> &[f64];

    fn update(&mut self, action: usize, reward: f64);
}
