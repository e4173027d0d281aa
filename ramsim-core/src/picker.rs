use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

/// Chooses the address that receives the next write.
pub trait SlotPicker {
    /// Picks one of `free`, or `None` when `free` is empty.
    fn pick(&mut self, free: &[usize]) -> Option<usize>;
}

impl<P: SlotPicker + ?Sized> SlotPicker for Box<P> {
    fn pick(&mut self, free: &[usize]) -> Option<usize> {
        (**self).pick(free)
    }
}

/// Uniformly random choice among the free addresses.
pub struct RandomPicker<R: Rng = StdRng> {
    rng: R,
}

impl<R: Rng> RandomPicker<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl RandomPicker<StdRng> {
    pub fn from_entropy() -> Self {
        Self::new(StdRng::from_entropy())
    }

    /// Picker producing the same sequence of choices for the same seed.
    pub fn seeded(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> SlotPicker for RandomPicker<R> {
    fn pick(&mut self, free: &[usize]) -> Option<usize> {
        free.choose(&mut self.rng).copied()
    }
}

/// Always the lowest free address.
#[derive(Debug, Default, Clone, Copy)]
pub struct LowestFree;

impl SlotPicker for LowestFree {
    fn pick(&mut self, free: &[usize]) -> Option<usize> {
        free.iter().min().copied()
    }
}
