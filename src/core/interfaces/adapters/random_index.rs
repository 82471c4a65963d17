/// Supplies the index used to pick one entry from a result list.
///
/// Injected into providers so tests can substitute a deterministic pick.
pub trait RandomIndexProvider: Send + Sync {
    /// Return an index in `[0, upper_bound)`. Callers guarantee
    /// `upper_bound > 0`.
    fn pick_index(&self, upper_bound: usize) -> usize;
}
