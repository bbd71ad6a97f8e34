//! Inspirational quote shape and the terminal fallback value.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// A single quote produced by exactly one source in the fallback chain.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Quote {
    /// Quote text
    #[schema(example = "The only way to do great work is to love what you do.")]
    pub content: String,
    /// Attributed author
    #[schema(example = "Steve Jobs")]
    pub author: String,
}

impl Quote {
    /// The built-in terminal quote, returned when every upstream source fails.
    pub fn fallback() -> Self {
        Self {
            content: "The only way to do great work is to love what you do.".to_string(),
            author: "Steve Jobs".to_string(),
        }
    }
}
