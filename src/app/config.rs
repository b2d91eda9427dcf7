// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! Runtime configuration gathered from the command line and environment.

use std::path::PathBuf;

/// Environment variable naming a page schema file.
pub const SCHEMA_ENV: &str = "FORMCHECK_SCHEMA";
/// Log filter used when `RUST_LOG` is unset.
pub const DEFAULT_LOG_FILTER: &str = "info";

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AppConfig {
    /// Schema file to load; the built-in demo page is used when absent.
    pub schema_path: Option<PathBuf>,
}

impl AppConfig {
    /// First CLI argument wins over `FORMCHECK_SCHEMA`.
    pub fn from_env() -> Self {
        Self::resolve(std::env::args().nth(1), std::env::var(SCHEMA_ENV).ok())
    }

    fn resolve(arg: Option<String>, env: Option<String>) -> Self {
        let schema_path = arg
            .into_iter()
            .chain(env)
            .map(|s| s.trim().to_string())
            .find(|s| !s.is_empty())
            .map(PathBuf::from);
        Self { schema_path }
    }
}
