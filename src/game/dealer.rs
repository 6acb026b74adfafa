use super::Choice;
use super::Draw;
use super::InvalidChoice;
use super::Outcome;

/// Plays single rounds against a [`Draw`] provider.
///
/// Holds no state besides the provider, so one dealer may serve any
/// number of concurrent requests.
#[derive(Debug, Default)]
pub struct Dealer<D: Draw> {
    draw: D,
}

impl<D: Draw> Dealer<D> {
    pub fn new(draw: D) -> Self {
        Self { draw }
    }
    /// Validate the user's choice, draw the opponent's, and resolve.
    ///
    /// Nothing is drawn unless the input names one of the three choices.
    pub fn evaluate(&self, choice: Option<&str>) -> Result<Outcome, InvalidChoice> {
        let user = choice.ok_or(InvalidChoice).and_then(Choice::try_from)?;
        let opponent = self.draw.draw();
        Ok(Outcome::from((user, opponent)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::N_CHOICES;
    use crate::game::*;
    use std::sync::atomic::AtomicUsize;
    use std::sync::atomic::Ordering;

    /// Counts how often the dealer reaches for randomness.
    #[derive(Default)]
    struct Counted(AtomicUsize);
    impl Draw for Counted {
        fn draw(&self) -> Choice {
            self.0.fetch_add(1, Ordering::Relaxed);
            Choice::Rock
        }
    }

    #[test]
    fn rock_beats_scissor() {
        let outcome = Dealer::new(Fixed(Choice::Scissor)).evaluate(Some("rock")).unwrap();
        assert_eq!(outcome.user(), Choice::Rock);
        assert_eq!(outcome.opponent(), Choice::Scissor);
        assert_eq!(outcome.verdict().label(), "You Win!");
    }

    #[test]
    fn paper_draws_paper() {
        let outcome = Dealer::new(Fixed(Choice::Paper)).evaluate(Some("paper")).unwrap();
        assert_eq!(outcome.verdict().label(), "Draw");
    }

    #[test]
    fn scissor_loses_to_rock() {
        let outcome = Dealer::new(Fixed(Choice::Rock)).evaluate(Some("scissor")).unwrap();
        assert_eq!(outcome.verdict().label(), "Computer Wins!");
    }

    #[test]
    fn valid_choices_never_fail() {
        let dealer = Dealer::new(Uniform);
        for choice in Choice::all() {
            for _ in 0..100 {
                let outcome = dealer.evaluate(Some(choice.label())).unwrap();
                assert_eq!(outcome.user(), choice);
                assert_eq!(
                    outcome.verdict(),
                    Verdict::resolve(outcome.user(), outcome.opponent())
                );
            }
        }
    }

    #[test]
    fn invalid_choices_draw_nothing() {
        let dealer = Dealer::new(Counted::default());
        for input in [None, Some(""), Some("lizard"), Some("Rock")] {
            assert_eq!(dealer.evaluate(input), Err(InvalidChoice), "{:?}", input);
        }
        assert_eq!(dealer.draw.0.load(Ordering::Relaxed), 0);
        assert!(dealer.evaluate(Some("rock")).is_ok());
        assert_eq!(dealer.draw.0.load(Ordering::Relaxed), 1);
    }

    #[test]
    fn opponent_is_independent_of_user() {
        const ROUNDS: usize = 12_000;
        let dealer = Dealer::new(Uniform);
        for choice in Choice::all() {
            let mut counts = [0usize; N_CHOICES];
            for _ in 0..ROUNDS {
                let outcome = dealer.evaluate(Some(choice.label())).unwrap();
                counts[usize::from(outcome.opponent())] += 1;
            }
            for n in counts {
                let freq = n as f32 / ROUNDS as f32;
                assert!((freq - 1. / 3.).abs() < 0.025, "{}: {:.4}", choice, freq);
            }
        }
    }
}
