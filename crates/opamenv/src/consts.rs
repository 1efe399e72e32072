// Copyright (c) Contributors to the opamenv project.
// SPDX-License-Identifier: Apache-2.0

//! Constant bindings supplied by the tool itself.

use std::fmt;

use crate::variable::ConstVar;

#[cfg(test)]
#[path = "./consts_test.rs"]
mod consts_test;

/// Fixed variable bindings computed once at startup.
///
/// Unlike system bindings these are never read from configuration, and every
/// constant variable is always bound.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConstBindings {
    opam_version: String,
}

impl ConstBindings {
    /// Bindings reporting the running tool's own version.
    pub fn current() -> Self {
        Self {
            opam_version: env!("CARGO_PKG_VERSION").to_string(),
        }
    }

    /// Construct bindings with an explicit version.
    ///
    /// Used by tests and by embedding tools that report their own version
    /// identifier.
    pub fn new(opam_version: impl Into<String>) -> Self {
        Self {
            opam_version: opam_version.into(),
        }
    }

    /// Look up the value for a constant variable. Total: every constant
    /// variable is always bound.
    pub fn get(&self, var: ConstVar) -> &str {
        match var {
            ConstVar::OpamVersion => &self.opam_version,
        }
    }

    pub fn opam_version(&self) -> &str {
        &self.opam_version
    }
}

impl fmt::Display for ConstBindings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for var in ConstVar::ALL {
            writeln!(f, "  {var} = {}", self.get(var))?;
        }
        Ok(())
    }
}
