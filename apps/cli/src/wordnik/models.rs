//! Wordnik API response types.
//!
//! Only the fields deckit reads are declared; everything else is ignored.

use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenStatus {
    pub valid: bool,
    #[serde(default)]
    pub total_requests: u64,
    #[serde(default)]
    pub remaining_calls: u64,
    #[serde(default)]
    pub resets_in_millis: i64,
}

#[derive(Debug, Deserialize)]
pub(crate) struct Definition {
    pub text: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct ExampleSearchResults {
    #[serde(default)]
    pub examples: Vec<Example>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct Example {
    pub text: Option<String>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct Bigram {
    pub gram1: Option<String>,
    pub gram2: Option<String>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct Pronunciation {
    pub raw: Option<String>,
}

/// Body of an error response.
#[derive(Debug, Deserialize)]
pub(crate) struct ApiMessage {
    pub message: String,
}
