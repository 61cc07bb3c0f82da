use std::env;
use std::fmt;
use std::str::FromStr;

use anyhow::Result;

use crate::parse_var;

/// How the user store picks the id of a newly created record.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum IdAllocation {
    /// A counter that only ever grows; ids are never reused.
    #[default]
    Monotonic,
    /// `current length + 1`. Reproduces the legacy behaviour, which hands out
    /// duplicate ids once a record has been deleted.
    CurrentCount,
}

impl FromStr for IdAllocation {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "monotonic" => Ok(Self::Monotonic),
            "count" | "current_count" => Ok(Self::CurrentCount),
            other => Err(format!(
                "unknown id allocation '{other}', expected 'monotonic' or 'count'"
            )),
        }
    }
}

impl fmt::Display for IdAllocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Monotonic => f.write_str("monotonic"),
            Self::CurrentCount => f.write_str("count"),
        }
    }
}

#[derive(Clone, Debug, Default)]
pub struct StoreConfig {
    pub id_allocation: IdAllocation,
}

impl StoreConfig {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        Ok(Self {
            id_allocation: parse_var(&lookup, "USER_ID_ALLOCATION", IdAllocation::default())?,
        })
    }
}
