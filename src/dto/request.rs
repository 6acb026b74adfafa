use serde::Deserialize;

/// Body of `POST /play`. A missing `choice` deserializes to `None`.
#[derive(Debug, Default, Deserialize)]
pub struct PlayRequest {
    #[serde(default)]
    pub choice: Option<String>,
}
