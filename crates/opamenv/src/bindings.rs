// Copyright (c) Contributors to the opamenv project.
// SPDX-License-Identifier: Apache-2.0

//! System variable bindings decoded from the `sys:` configuration field.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::variable::SysVar;
use crate::{Error, Result};

#[cfg(test)]
#[path = "./bindings_test.rs"]
mod bindings_test;

/// A single `sys:` entry as written in configuration.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
pub struct SysBinding {
    /// Variable name (must match the system catalog).
    pub var: String,
    /// Bound value.
    pub value: String,
}

/// Validated mapping from system variable to value.
///
/// All mutating-looking operations return a new map; an existing value is
/// never changed in place, so holders of a previous map keep seeing it
/// unchanged.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SysBindings {
    entries: BTreeMap<SysVar, String>,
}

impl SysBindings {
    /// Decode a list of raw entries into a validated map.
    ///
    /// Fails if an entry names an unknown variable or binds the same
    /// variable twice. Either failure rejects the whole list; there is no
    /// partially-decoded result and no last-write-wins.
    pub fn decode(entries: &[SysBinding]) -> Result<Self> {
        let mut map = BTreeMap::new();
        for (index, entry) in entries.iter().enumerate() {
            let var = SysVar::from_name(&entry.var).ok_or_else(|| Error::UnknownVariable {
                name: entry.var.clone(),
                location: format!("sys[{index}]"),
                known: SysVar::ALL.iter().map(|v| v.name().to_string()).collect(),
            })?;

            if let Some(first) = map.insert(var, entry.value.clone()) {
                return Err(Error::DuplicateBinding {
                    name: var.name().to_string(),
                    first,
                    second: entry.value.clone(),
                });
            }
        }
        Ok(Self { entries: map })
    }

    /// Look up the bound value for a variable.
    pub fn get(&self, var: SysVar) -> Option<&str> {
        self.entries.get(&var).map(String::as_str)
    }

    /// Return a new map with `var` bound to `value`, leaving this one
    /// untouched.
    pub fn set(&self, var: SysVar, value: impl Into<String>) -> Self {
        let mut entries = self.entries.clone();
        entries.insert(var, value.into());
        Self { entries }
    }

    /// Layer `overrides` over this map.
    ///
    /// Every variable bound in `overrides` takes its value from there;
    /// variables bound only here keep their value.
    pub fn extend(&self, overrides: &SysBindings) -> Self {
        let mut entries = self.entries.clone();
        for (var, value) in &overrides.entries {
            entries.insert(*var, value.clone());
        }
        Self { entries }
    }

    /// Iterate bound variables in canonical name order.
    pub fn iter(&self) -> impl Iterator<Item = (SysVar, &str)> {
        self.entries
            .iter()
            .map(|(var, value)| (*var, value.as_str()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl fmt::Display for SysBindings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut vars = SysVar::ALL;
        vars.sort();
        for var in vars {
            match self.get(var) {
                Some(value) => writeln!(f, "  {var} = {value}")?,
                None => writeln!(f, "  {var} (unset)")?,
            }
        }
        Ok(())
    }
}
