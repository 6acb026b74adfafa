use super::Choice;
use super::Verdict;

/// One evaluated round. Built per request, discarded after the response.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Outcome {
    user: Choice,
    opponent: Choice,
    verdict: Verdict,
}

impl Outcome {
    pub fn user(&self) -> Choice {
        self.user
    }
    pub fn opponent(&self) -> Choice {
        self.opponent
    }
    pub fn verdict(&self) -> Verdict {
        self.verdict
    }
}

/// The verdict is always derived from the two choices, never supplied.
impl From<(Choice, Choice)> for Outcome {
    fn from((user, opponent): (Choice, Choice)) -> Self {
        Self {
            user,
            opponent,
            verdict: Verdict::resolve(user, opponent),
        }
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{} vs {}: {}", self.user, self.opponent, self.verdict)
    }
}
