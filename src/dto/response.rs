use crate::INVALID_CHOICE;
use crate::game::Outcome;
use serde::Serialize;

#[derive(Debug, PartialEq, Eq, Serialize)]
pub struct PlayResponse {
    pub user_choice: String,
    pub computer_choice: String,
    pub result: String,
}

impl From<Outcome> for PlayResponse {
    fn from(outcome: Outcome) -> Self {
        Self {
            user_choice: outcome.user().to_string(),
            computer_choice: outcome.opponent().to_string(),
            result: outcome.verdict().to_string(),
        }
    }
}

#[derive(Debug, PartialEq, Eq, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl ErrorResponse {
    pub fn invalid_choice() -> Self {
        Self {
            error: INVALID_CHOICE.to_string(),
        }
    }
}
