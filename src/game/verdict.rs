use super::Choice;

/// Result of a round, from the user's side.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub enum Verdict {
    Draw,
    Win,
    Lose,
}

impl Verdict {
    /// Resolve `user` against `opponent` by the beats-relation.
    ///
    /// Both directions are matched explicitly, so a pair that is neither
    /// equal nor related by [`Choice::beats`] cannot be mistaken for a loss.
    pub fn resolve(user: Choice, opponent: Choice) -> Self {
        match (user, opponent) {
            (u, o) if u == o => Self::Draw,
            (u, o) if u.beats() == o => Self::Win,
            (u, o) if u.loses_to() == o => Self::Lose,
            (u, o) => unreachable!("{} and {} are unrelated", u, o),
        }
    }
    /// The same round seen from the opponent's side.
    pub const fn flip(&self) -> Self {
        match self {
            Self::Draw => Self::Draw,
            Self::Win => Self::Lose,
            Self::Lose => Self::Win,
        }
    }
    /// Wire label shown to the user.
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Draw => "Draw",
            Self::Win => "You Win!",
            Self::Lose => "Computer Wins!",
        }
    }
}

impl std::fmt::Display for Verdict {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}
