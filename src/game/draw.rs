use super::Choice;
use crate::Arbitrary;
use crate::N_CHOICES;
use rand::Rng;
use rand::SeedableRng;
use rand::rngs::SmallRng;
use std::sync::Mutex;

/// Random-value provider for the opponent's choice.
///
/// Every implementation used in play must draw each [`Choice`] with
/// probability 1/3, independently of anything the user submitted.
/// Shared across server workers, hence `Send + Sync`.
pub trait Draw: Send + Sync {
    fn draw(&self) -> Choice;
}

/// Thread-local entropy.
#[derive(Debug, Clone, Copy, Default)]
pub struct Uniform;

impl Draw for Uniform {
    fn draw(&self) -> Choice {
        Choice::random()
    }
}

/// Reproducible sequence from a fixed seed.
#[derive(Debug)]
pub struct Seeded(Mutex<SmallRng>);

impl From<u64> for Seeded {
    fn from(seed: u64) -> Self {
        Self(Mutex::new(SmallRng::seed_from_u64(seed)))
    }
}

impl Draw for Seeded {
    fn draw(&self) -> Choice {
        let mut rng = self.0.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
        Choice::from(rng.random_range(0..N_CHOICES))
    }
}

/// Always the same choice. For tests and demos.
#[derive(Debug, Clone, Copy)]
pub struct Fixed(pub Choice);

impl Draw for Fixed {
    fn draw(&self) -> Choice {
        self.0
    }
}
