//! Content and access rules for daily logs.

use serde::{Deserialize, Serialize};

/// Rules applied when logs are submitted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RulesConfig {
    /// Substrings that may not appear in a log's text (case-sensitive).
    #[serde(default = "default_blocked_words")]
    pub blocked_words: Vec<String>,
    /// Message for a blocked word; `{word}` is replaced with the match.
    #[serde(default = "default_blocked_word_message")]
    pub blocked_word_message: String,
    /// Display names that may never create logs.
    #[serde(default = "default_blocked_names")]
    pub blocked_names: Vec<String>,
}

impl Default for RulesConfig {
    fn default() -> Self {
        Self {
            blocked_words: default_blocked_words(),
            blocked_word_message: default_blocked_word_message(),
            blocked_names: default_blocked_names(),
        }
    }
}

fn default_blocked_words() -> Vec<String> {
    vec!["SHIT".to_string()]
}

fn default_blocked_word_message() -> String {
    "Bad word! Don't use {word}. Please!!!".to_string()
}

fn default_blocked_names() -> Vec<String> {
    vec!["Jane Doe".to_string()]
}
