use super::InvalidChoice;
use crate::Arbitrary;
use crate::N_CHOICES;

/// One of the three hands a player may throw.
///
/// The beats-relation is cyclic: each choice beats exactly one other and
/// loses to exactly one other.
/// - Rock beats Scissor
/// - Scissor beats Paper
/// - Paper beats Rock
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub enum Choice {
    Rock = 0isize,
    Paper = 1isize,
    Scissor = 2isize,
}

impl Choice {
    /// All choices in wire order.
    pub const fn all() -> [Self; N_CHOICES] {
        [Self::Rock, Self::Paper, Self::Scissor]
    }
    /// Wire label, as submitted by clients.
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Rock => "rock",
            Self::Paper => "paper",
            Self::Scissor => "scissor",
        }
    }
    /// The one choice this one defeats.
    pub const fn beats(&self) -> Self {
        match self {
            Self::Rock => Self::Scissor,
            Self::Scissor => Self::Paper,
            Self::Paper => Self::Rock,
        }
    }
    /// The one choice that defeats this one.
    pub const fn loses_to(&self) -> Self {
        match self {
            Self::Rock => Self::Paper,
            Self::Paper => Self::Scissor,
            Self::Scissor => Self::Rock,
        }
    }
}

/// Index into [`Choice::all`]. Panics above 2.
impl From<usize> for Choice {
    fn from(n: usize) -> Self {
        match n {
            0 => Self::Rock,
            1 => Self::Paper,
            2 => Self::Scissor,
            x => panic!("no other choices {}", x),
        }
    }
}

impl From<Choice> for usize {
    fn from(choice: Choice) -> Self {
        choice as usize
    }
}

/// Exact, case-sensitive match against the wire labels.
impl TryFrom<&str> for Choice {
    type Error = InvalidChoice;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        Self::all()
            .into_iter()
            .find(|choice| choice.label() == s)
            .ok_or(InvalidChoice)
    }
}

impl std::fmt::Display for Choice {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl Arbitrary for Choice {
    fn random() -> Self {
        Self::from(rand::random_range(0..N_CHOICES))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_wire_labels() {
        assert_eq!(Choice::try_from("rock"), Ok(Choice::Rock));
        assert_eq!(Choice::try_from("paper"), Ok(Choice::Paper));
        assert_eq!(Choice::try_from("scissor"), Ok(Choice::Scissor));
    }

    #[test]
    fn rejects_everything_else() {
        for s in ["", "lizard", "Rock", "PAPER", "scissors", " rock", "rock "] {
            assert_eq!(Choice::try_from(s), Err(InvalidChoice), "{:?}", s);
        }
    }

    #[test]
    fn labels_round_trip() {
        for choice in Choice::all() {
            assert_eq!(Choice::try_from(choice.to_string().as_str()), Ok(choice));
        }
    }

    #[test]
    #[should_panic]
    fn index_past_scissor_panics() {
        let _ = Choice::from(N_CHOICES);
    }

    #[test]
    fn beats_is_a_cycle() {
        for choice in Choice::all() {
            assert_ne!(choice.beats(), choice);
            assert_ne!(choice.loses_to(), choice);
            assert_ne!(choice.beats(), choice.loses_to());
            assert_eq!(choice.beats().loses_to(), choice);
            assert_eq!(choice.beats().beats().beats(), choice);
        }
    }

    #[test]
    fn index_matches_position() {
        for (i, choice) in Choice::all().into_iter().enumerate() {
            assert_eq!(Choice::from(i), choice);
            assert_eq!(usize::from(choice), i);
        }
    }
}
