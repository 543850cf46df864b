//! Runtime configuration read from the environment.
//!
//! | Variable               | Meaning |
//! |------------------------|---------|
//! | `API_KEY`              | Trivia service credential; trivia is disabled without it |
//! | `NUMBER_DRAW_MODEL`    | Model name, default `gemini-2.5-flash` |
//! | `NUMBER_DRAW_LANGUAGE` | Language the trivia is written in, default `English` |
//! | `NUMBER_DRAW_API_BASE` | Service base URL |

use crate::trivia::gemini::{DEFAULT_API_BASE, DEFAULT_MODEL};

pub const DEFAULT_LANGUAGE: &str = "English";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub api_key: Option<String>,
    pub api_base: String,
    pub model: String,
    pub language: String,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            api_key: None,
            api_base: DEFAULT_API_BASE.to_string(),
            model: DEFAULT_MODEL.to_string(),
            language: DEFAULT_LANGUAGE.to_string(),
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Build from any variable source. Blank values count as unset.
    pub fn from_lookup<F>(var: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |name: &str| {
            var(name)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };
        let defaults = Config::default();

        Config {
            api_key: get("API_KEY"),
            api_base: get("NUMBER_DRAW_API_BASE").unwrap_or(defaults.api_base),
            model: get("NUMBER_DRAW_MODEL").unwrap_or(defaults.model),
            language: get("NUMBER_DRAW_LANGUAGE").unwrap_or(defaults.language),
        }
    }
}
