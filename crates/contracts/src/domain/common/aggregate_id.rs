use serde::{de::DeserializeOwned, Serialize};
use std::hash::Hash;

/// Identifier of a record exposed by the company API
pub trait AggregateId:
    Clone + PartialEq + Eq + Hash + Serialize + DeserializeOwned + std::fmt::Debug
{
    /// Render the id the way it appears in URL paths
    fn as_string(&self) -> String;

    /// Parse an id taken from a URL or a form
    fn from_string(s: &str) -> Result<Self, String>;
}
