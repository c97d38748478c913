use anyhow::Context;
use serde::{de::DeserializeOwned, Serialize};
use std::hash::Hash;

/// Identifier types usable as aggregate keys in REST paths.
pub trait AggregateId:
    Clone + Copy + PartialEq + Eq + Hash + Serialize + DeserializeOwned + std::fmt::Debug
{
    fn as_string(&self) -> String;

    fn from_string(s: &str) -> anyhow::Result<Self>;
}

impl AggregateId for uuid::Uuid {
    fn as_string(&self) -> String {
        ToString::to_string(self)
    }

    fn from_string(s: &str) -> anyhow::Result<Self> {
        uuid::Uuid::parse_str(s.trim()).with_context(|| format!("invalid UUID: '{}'", s))
    }
}
