// Copyright (c) Contributors to the opamenv project.
// SPDX-License-Identifier: Apache-2.0

//! Repository names and ordered-set resolution of the repository list.

use std::fmt;

use serde::de;
use serde::{Deserialize, Deserializer, Serialize};

use crate::{Error, Result};

#[cfg(test)]
#[path = "./repository_test.rs"]
mod repository_test;

/// Name of the built-in repository used when configuration says nothing.
pub const DEFAULT_REPOSITORY_NAME: &str = "default";

/// Validated repository identifier.
///
/// Names start with an ASCII letter or digit and may contain letters,
/// digits, `-`, `_`, `+` and `.`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RepositoryName(String);

impl RepositoryName {
    /// Parse and validate a name, tagging failures with the configuration
    /// location they came from.
    pub fn parse_located(name: &str, location: &str) -> Result<Self> {
        let mut chars = name.chars();
        let valid = match chars.next() {
            Some(first) => {
                first.is_ascii_alphanumeric()
                    && chars.all(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '+' | '.'))
            }
            None => false,
        };

        if valid {
            Ok(RepositoryName(name.to_string()))
        } else {
            Err(Error::InvalidRepositoryName {
                name: name.to_string(),
                location: location.to_string(),
            })
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RepositoryName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// The built-in repository list used when configuration says nothing.
pub fn standard_repositories() -> Vec<RepositoryName> {
    vec![RepositoryName(DEFAULT_REPOSITORY_NAME.to_string())]
}

/// One `repositories:` directive.
///
/// The sequence is evaluated left to right against the standard list:
/// `standard` splices in the built-in repositories, `add:` appends a named
/// repository and `remove:` drops a name included earlier.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
#[serde(untagged)]
pub enum RepoDirective {
    Add(AddRepo),
    Remove(RemoveRepo),
    Standard(StandardSet),
}

/// `- add: <name>` directive entry.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
pub struct AddRepo {
    pub add: String,
}

/// `- remove: <name>` directive entry.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
pub struct RemoveRepo {
    pub remove: String,
}

/// The literal `standard` keyword.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StandardSet;

impl<'de> Deserialize<'de> for StandardSet {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let keyword = String::deserialize(deserializer)?;
        if keyword == "standard" {
            Ok(StandardSet)
        } else {
            Err(de::Error::invalid_value(
                de::Unexpected::Str(&keyword),
                &"the keyword 'standard'",
            ))
        }
    }
}

impl Serialize for StandardSet {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str("standard")
    }
}

/// Evaluate repository directives against a standard list.
///
/// `None` means the standard list is used unmodified. Directives apply left
/// to right; the result keeps the order they establish and may not name the
/// same repository twice. Removing a name that is not present is a no-op.
pub fn resolve_repositories(
    directives: Option<&[RepoDirective]>,
    standard: &[RepositoryName],
) -> Result<Vec<RepositoryName>> {
    let Some(directives) = directives else {
        return Ok(standard.to_vec());
    };

    let mut resolved: Vec<RepositoryName> = Vec::new();
    for (index, directive) in directives.iter().enumerate() {
        let location = format!("repositories[{index}]");
        match directive {
            RepoDirective::Standard(_) => {
                for name in standard {
                    push_unique(&mut resolved, name.clone(), &location)?;
                }
            }
            RepoDirective::Add(entry) => {
                let name = RepositoryName::parse_located(&entry.add, &location)?;
                push_unique(&mut resolved, name, &location)?;
            }
            RepoDirective::Remove(entry) => {
                let name = RepositoryName::parse_located(&entry.remove, &location)?;
                resolved.retain(|existing| existing != &name);
            }
        }
    }
    Ok(resolved)
}

fn push_unique(
    resolved: &mut Vec<RepositoryName>,
    name: RepositoryName,
    location: &str,
) -> Result<()> {
    if resolved.contains(&name) {
        return Err(Error::DuplicateRepository {
            name: name.as_str().to_string(),
            location: location.to_string(),
        });
    }
    resolved.push(name);
    Ok(())
}
