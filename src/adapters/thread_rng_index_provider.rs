use rand::Rng;

use crate::core::interfaces::adapters::RandomIndexProvider;

/// Draws indexes from the thread-local RNG. Each call is an independent
/// uniform draw; no seeding, no state carried between calls.
pub struct ThreadRngIndexProvider;

impl ThreadRngIndexProvider {
    pub fn new() -> Self {
        Self
    }
}

impl Default for ThreadRngIndexProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl RandomIndexProvider for ThreadRngIndexProvider {
    fn pick_index(&self, upper_bound: usize) -> usize {
        rand::thread_rng().gen_range(0..upper_bound)
    }
}
