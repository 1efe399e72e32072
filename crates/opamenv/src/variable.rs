// Copyright (c) Contributors to the opamenv project.
// SPDX-License-Identifier: Apache-2.0

//! Variable catalogs and name resolution.

use std::cmp::Ordering;
use std::fmt;

#[cfg(test)]
#[path = "./variable_test.rs"]
mod variable_test;

/// Platform-dependent variables recognized in `sys:` bindings.
///
/// The set is closed; a name outside it never decodes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SysVar {
    Arch,
    Os,
    OsVersion,
    OsDistribution,
    OsFamily,
}

impl SysVar {
    /// Every recognized system variable.
    pub const ALL: [SysVar; 5] = [
        SysVar::Arch,
        SysVar::Os,
        SysVar::OsVersion,
        SysVar::OsDistribution,
        SysVar::OsFamily,
    ];

    /// Canonical configuration name for this variable.
    pub fn name(&self) -> &'static str {
        match self {
            SysVar::Arch => "arch",
            SysVar::Os => "os",
            SysVar::OsVersion => "os-version",
            SysVar::OsDistribution => "os-distribution",
            SysVar::OsFamily => "os-family",
        }
    }

    /// Look up a variable by its canonical name (case-sensitive).
    pub fn from_name(name: &str) -> Option<SysVar> {
        Self::ALL.iter().copied().find(|var| var.name() == name)
    }
}

// Keys order by canonical name so map iteration and rendering enumerate
// variables deterministically.
impl Ord for SysVar {
    fn cmp(&self, other: &Self) -> Ordering {
        self.name().cmp(other.name())
    }
}

impl PartialOrd for SysVar {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for SysVar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Constant variables supplied by the tool itself, never by configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ConstVar {
    OpamVersion,
}

impl ConstVar {
    /// Every recognized constant variable.
    pub const ALL: [ConstVar; 1] = [ConstVar::OpamVersion];

    pub fn name(&self) -> &'static str {
        match self {
            ConstVar::OpamVersion => "opam-version",
        }
    }

    pub fn from_name(name: &str) -> Option<ConstVar> {
        Self::ALL.iter().copied().find(|var| var.name() == name)
    }
}

impl Ord for ConstVar {
    fn cmp(&self, other: &Self) -> Ordering {
        self.name().cmp(other.name())
    }
}

impl PartialOrd for ConstVar {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for ConstVar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A recognized variable, system or constant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Variable {
    Sys(SysVar),
    Const(ConstVar),
}

impl Variable {
    /// Resolve a name against both catalogs.
    ///
    /// The system catalog is consulted first; a constant with the same name
    /// would be shadowed. Existing configurations rely on this precedence.
    pub fn resolve(name: &str) -> Option<Variable> {
        SysVar::from_name(name)
            .map(Variable::Sys)
            .or_else(|| ConstVar::from_name(name).map(Variable::Const))
    }

    /// Canonical name of this variable.
    pub fn name(&self) -> &'static str {
        match self {
            Variable::Sys(var) => var.name(),
            Variable::Const(var) => var.name(),
        }
    }

    /// All recognized variable names, system catalog first.
    pub fn known_names() -> Vec<&'static str> {
        SysVar::ALL
            .iter()
            .map(SysVar::name)
            .chain(ConstVar::ALL.iter().map(ConstVar::name))
            .collect()
    }
}

impl fmt::Display for Variable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
