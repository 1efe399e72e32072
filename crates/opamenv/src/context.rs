// Copyright (c) Contributors to the opamenv project.
// SPDX-License-Identifier: Apache-2.0

//! Context assembly: the decoded aggregate consumed while evaluating
//! package definitions.

use std::fmt;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::bindings::{SysBinding, SysBindings};
use crate::consts::ConstBindings;
use crate::repository::{
    resolve_repositories, standard_repositories, RepoDirective, RepositoryName,
};
use crate::variable::{SysVar, Variable};

#[cfg(test)]
#[path = "./context_test.rs"]
mod context_test;

/// Format version for context fragments.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
pub enum ApiVersion {
    #[serde(rename = "opamenv/v0")]
    V0,
}

impl Default for ApiVersion {
    fn default() -> Self {
        Self::V0
    }
}

/// Raw context fragment as written in configuration.
///
/// This is the serde-facing shape; [`Context::from_config`] validates it
/// into a [`Context`].
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct ContextConfig {
    /// Format version identifier (optional in fragments).
    #[serde(default)]
    pub api: ApiVersion,

    /// System variable bindings.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub sys: Vec<SysBinding>,

    /// Repository directives. Absent means the standard list unmodified.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub repositories: Option<Vec<RepoDirective>>,
}

/// Value obtained by resolving a variable against a context.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VariableValue {
    /// The variable is bound to this value.
    String(String),
    /// A system variable with no binding in this context.
    UnsetSys,
}

impl VariableValue {
    /// The bound value, if any.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            VariableValue::String(value) => Some(value),
            VariableValue::UnsetSys => None,
        }
    }
}

/// Decoded evaluation context: system bindings, tool constants and the
/// resolved repository list.
///
/// A context is immutable once constructed; "updating" one produces a new
/// value, so contexts can be shared freely across threads.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Context {
    sys: SysBindings,
    consts: ConstBindings,
    repositories: Vec<RepositoryName>,
}

impl Context {
    /// Validate a raw fragment into a context.
    ///
    /// Constants always come from `consts`, never from the input. Sub-decode
    /// failures propagate unchanged.
    pub fn from_config(config: &ContextConfig, consts: ConstBindings) -> crate::Result<Self> {
        let sys = SysBindings::decode(&config.sys)?;
        let repositories =
            resolve_repositories(config.repositories.as_deref(), &standard_repositories())?;

        tracing::debug!(
            bindings = sys.len(),
            repositories = repositories.len(),
            "decoded context fragment"
        );

        Ok(Self {
            sys,
            consts,
            repositories,
        })
    }

    /// Parse a context fragment from YAML text.
    pub fn from_yaml<S: Into<String>>(yaml: S, consts: ConstBindings) -> crate::Result<Self> {
        let yaml = yaml.into();
        let config: ContextConfig =
            serde_yaml::from_str(&yaml).map_err(|e| crate::Error::InvalidYaml {
                error: e,
                yaml_content: yaml.clone(),
            })?;

        Self::from_config(&config, consts)
    }

    /// Load a context fragment from a file.
    pub fn load<P: AsRef<Path>>(path: P, consts: ConstBindings) -> crate::Result<Self> {
        let path = path.as_ref();
        let yaml = std::fs::read_to_string(path).map_err(|e| crate::Error::ReadFailed {
            path: path.to_path_buf(),
            error: e,
        })?;

        tracing::debug!(path = %path.display(), "loading context");
        Self::from_yaml(yaml, consts)
    }

    /// Resolve a variable to its value in this context.
    ///
    /// Constant variables are always bound; system variables without a
    /// binding resolve to [`VariableValue::UnsetSys`]. Total for any
    /// variable obtained through [`Variable::resolve`].
    pub fn get(&self, var: Variable) -> VariableValue {
        match var {
            Variable::Sys(sys) => match self.sys.get(sys) {
                Some(value) => VariableValue::String(value.to_string()),
                None => VariableValue::UnsetSys,
            },
            Variable::Const(c) => VariableValue::String(self.consts.get(c).to_string()),
        }
    }

    /// System bindings of this context.
    pub fn sys(&self) -> &SysBindings {
        &self.sys
    }

    /// Constant bindings of this context.
    pub fn consts(&self) -> &ConstBindings {
        &self.consts
    }

    /// Resolved repository list, in priority order.
    pub fn repos(&self) -> &[RepositoryName] {
        &self.repositories
    }

    /// Return a new context with one system variable bound.
    pub fn with_binding(&self, var: SysVar, value: impl Into<String>) -> Self {
        Self {
            sys: self.sys.set(var, value),
            consts: self.consts.clone(),
            repositories: self.repositories.clone(),
        }
    }

    /// Return a new context with `overrides` layered over the system
    /// bindings.
    pub fn extended(&self, overrides: &SysBindings) -> Self {
        Self {
            sys: self.sys.extend(overrides),
            consts: self.consts.clone(),
            repositories: self.repositories.clone(),
        }
    }
}

impl Default for Context {
    fn default() -> Self {
        Self {
            sys: SysBindings::default(),
            consts: ConstBindings::current(),
            repositories: standard_repositories(),
        }
    }
}

impl fmt::Display for Context {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "System Environment Variables:")?;
        write!(f, "{}", self.sys)?;
        writeln!(f, "Constants:")?;
        write!(f, "{}", self.consts)?;
        writeln!(f, "Repositories:")?;
        for name in &self.repositories {
            writeln!(f, "  {name}")?;
        }
        Ok(())
    }
}
