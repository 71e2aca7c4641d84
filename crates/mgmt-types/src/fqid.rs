use std::{fmt, str::FromStr};

use serde::{Deserialize, Deserializer, Serialize, Serializer};

const SEPARATOR: char = '/';
pub const USER_COLLECTION: &str = "user";

#[derive(thiserror::Error, Debug, PartialEq, Eq)]
pub enum FqidError {
    #[error("Missing separator in FQID: {0}")]
    MissingSeparator(String),
    #[error("Invalid collection in FQID: {0}")]
    InvalidCollection(String),
    #[error("Invalid id in FQID: {0}")]
    InvalidId(String),
}

/// Fully qualified identifier of an entity in the datastore, written as `collection/id`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Fqid {
    collection: String,
    id: u64,
}

fn is_valid_collection(s: &str) -> bool {
    !s.is_empty()
        && s
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '_')
}

impl Fqid {
    pub fn new(collection: impl Into<String>, id: u64) -> Result<Self, FqidError> {
        let collection = collection.into();
        if !is_valid_collection(&collection) {
            return Err(FqidError::InvalidCollection(collection));
        }
        Ok(Fqid { collection, id })
    }

    pub fn user(id: u64) -> Self {
        Fqid {
            collection: USER_COLLECTION.to_string(),
            id,
        }
    }

    pub fn collection(&self) -> &str {
        &self.collection
    }

    pub fn id(&self) -> u64 {
        self.id
    }
}

impl fmt::Display for Fqid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}{}", self.collection, SEPARATOR, self.id)
    }
}

impl FromStr for Fqid {
    type Err = FqidError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (collection, id) = s
            .split_once(SEPARATOR)
            .ok_or_else(|| FqidError::MissingSeparator(s.to_string()))?;
        let id = id
            .parse::<u64>()
            .map_err(|_| FqidError::InvalidId(s.to_string()))?;
        Fqid::new(collection, id)
    }
}

impl Serialize for Fqid {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Fqid {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
