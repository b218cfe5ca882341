// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Switchyard and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::borrow::Borrow;
use std::fmt;
use std::marker::PhantomData;
use std::str::FromStr;

use smol_str::SmolStr;

/// A stable identifier for diagram objects.
///
/// IDs are compared and ordered as plain strings. The only rules enforced are that the value is
/// non-empty and carries no leading/trailing whitespace, so that an ID typed into a config file
/// matches the same ID referenced from a connection.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Id<T> {
    value: SmolStr,
    _marker: PhantomData<fn() -> T>,
}

impl<T> Id<T> {
    pub fn new(value: impl AsRef<str>) -> Result<Self, IdError> {
        let value = value.as_ref();
        validate_id(value)?;
        Ok(Self {
            value: SmolStr::new(value),
            _marker: PhantomData,
        })
    }

    pub fn as_str(&self) -> &str {
        self.value.as_str()
    }
}

impl<T> fmt::Display for Id<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.value)
    }
}

impl<T> AsRef<str> for Id<T> {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl<T> Borrow<str> for Id<T> {
    fn borrow(&self) -> &str {
        self.as_str()
    }
}

impl<T> FromStr for Id<T> {
    type Err = IdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl<T> TryFrom<String> for Id<T> {
    type Error = IdError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl<T> TryFrom<&str> for Id<T> {
    type Error = IdError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IdError {
    Empty,
    Untrimmed,
}

impl fmt::Display for IdError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => f.write_str("id must not be empty"),
            Self::Untrimmed => f.write_str("id must not start or end with whitespace"),
        }
    }
}

impl std::error::Error for IdError {}

fn validate_id(value: &str) -> Result<(), IdError> {
    if value.is_empty() {
        return Err(IdError::Empty);
    }
    if value.trim() != value {
        return Err(IdError::Untrimmed);
    }
    Ok(())
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum BoxIdTag {}
pub type BoxId = Id<BoxIdTag>;

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use super::{BoxId, Id, IdError};

    #[test]
    fn id_rejects_empty() {
        let result: Result<Id<()>, _> = Id::new("");
        assert_eq!(result, Err(IdError::Empty));
    }

    #[test]
    fn id_rejects_surrounding_whitespace() {
        let result: Result<Id<()>, _> = Id::new(" server01");
        assert_eq!(result, Err(IdError::Untrimmed));
        let result: Result<Id<()>, _> = Id::new("server01\n");
        assert_eq!(result, Err(IdError::Untrimmed));
    }

    #[test]
    fn id_allows_inner_whitespace() {
        let id: BoxId = "config server".parse().expect("box id");
        assert_eq!(id.as_str(), "config server");
    }

    #[test]
    fn id_lookup_by_str_via_borrow() {
        let mut map = BTreeMap::<BoxId, usize>::new();
        map.insert(BoxId::new("server11").expect("box id"), 3);
        assert_eq!(map.get("server11"), Some(&3));
        assert_eq!(map.get("server12"), None);
    }
}
