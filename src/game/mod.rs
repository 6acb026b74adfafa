//! The decision engine.
//!
//! A round is one user [`Choice`] against one opponent [`Choice`] drawn from
//! a [`Draw`] provider. The [`Dealer`] validates the user's input, draws, and
//! resolves a [`Verdict`] by the cyclic beats-relation, returning an [`Outcome`].
//!
//! - [`Choice`] — Rock, Paper, Scissor
//! - [`Verdict`] — Draw, Win, Lose (from the user's side)
//! - [`Outcome`] — both choices plus the verdict
//! - [`Draw`] — random-value provider ([`Uniform`], [`Seeded`], [`Fixed`])
//! - [`Dealer`] — plays a round
//! - [`InvalidChoice`] — the only failure
mod choice;
mod dealer;
mod draw;
mod error;
mod outcome;
mod verdict;

pub use choice::*;
pub use dealer::*;
pub use draw::*;
pub use error::*;
pub use outcome::*;
pub use verdict::*;
