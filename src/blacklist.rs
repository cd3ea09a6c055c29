//! Common password list and the blacklist-aware scoring strategy.

use std::collections::HashSet;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::scorer::{RuleScorer, StrengthScorer};

/// Environment variable naming the common password file.
pub const BLACKLIST_PATH_ENV: &str = "PWD_METER_BLACKLIST_PATH";

const DEFAULT_BLACKLIST_PATH: &str = "./assets/blacklist.txt";

#[derive(Error, Debug)]
pub enum BlacklistError {
    #[error("Blacklist file not found: {0}")]
    FileNotFound(PathBuf),
    #[error("Failed to read blacklist file: {0}")]
    ReadError(#[from] std::io::Error),
    #[error("Blacklist file is empty")]
    EmptyFile,
}

/// Returns the blacklist file path.
///
/// Priority:
/// 1. Environment variable `PWD_METER_BLACKLIST_PATH`
/// 2. Default path `./assets/blacklist.txt`
pub fn blacklist_path() -> PathBuf {
    std::env::var(BLACKLIST_PATH_ENV)
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from(DEFAULT_BLACKLIST_PATH))
}

/// A set of common passwords, matched case-insensitively.
#[derive(Debug, Clone, Default)]
pub struct Blacklist {
    entries: HashSet<String>,
}

impl Blacklist {
    /// Loads the list from the path returned by [`blacklist_path`].
    pub fn from_env() -> Result<Self, BlacklistError> {
        Self::from_path(blacklist_path())
    }

    /// Loads the list from a file with one password per line.
    ///
    /// Lines are trimmed and lowercased; blank lines are skipped.
    ///
    /// # Errors
    ///
    /// Returns error if:
    /// - File does not exist
    /// - File cannot be read
    /// - File contains only whitespace
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, BlacklistError> {
        let path = path.as_ref();

        if !path.exists() {
            #[cfg(feature = "tracing")]
            tracing::error!("Blacklist loading FAILED: file not found {:?}", path);
            return Err(BlacklistError::FileNotFound(path.to_path_buf()));
        }

        let content = std::fs::read_to_string(path)?;

        if content.trim().is_empty() {
            #[cfg(feature = "tracing")]
            tracing::error!("Blacklist loading FAILED: empty file {:?}", path);
            return Err(BlacklistError::EmptyFile);
        }

        let blacklist = Self::from_entries(content.lines());

        #[cfg(feature = "tracing")]
        tracing::info!("Blacklist loaded: {} passwords from {:?}", blacklist.len(), path);

        Ok(blacklist)
    }

    pub fn from_entries<I, S>(entries: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let entries = entries
            .into_iter()
            .map(|e| e.as_ref().trim().to_lowercase())
            .filter(|e| !e.is_empty())
            .collect();
        Self { entries }
    }

    pub fn contains(&self, password: &str) -> bool {
        self.entries.contains(&password.to_lowercase())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// The five default rules plus a sixth: the password is non-empty and not
/// on the blacklist. Max level is 6.
#[derive(Debug, Clone)]
pub struct BlacklistScorer {
    rules: RuleScorer,
    blacklist: Blacklist,
}

impl BlacklistScorer {
    pub fn new(blacklist: Blacklist) -> Self {
        Self {
            rules: RuleScorer::default(),
            blacklist,
        }
    }

    pub fn blacklist(&self) -> &Blacklist {
        &self.blacklist
    }
}

impl StrengthScorer for BlacklistScorer {
    fn score(&self, password: &str) -> u32 {
        let uncommon = !password.is_empty() && !self.blacklist.contains(password);

        #[cfg(feature = "tracing")]
        tracing::trace!(rule = "uncommon", satisfied = uncommon, "password rule evaluated");

        self.rules.score(password) + u32::from(uncommon)
    }

    fn max_level(&self) -> u32 {
        self.rules.max_level() + 1
    }
}
