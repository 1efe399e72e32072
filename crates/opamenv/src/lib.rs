// Copyright (c) Contributors to the opamenv project.
// SPDX-License-Identifier: Apache-2.0

//! opamenv - Typed evaluation context for opam-style package environments
//!
//! This crate models the small typed binding store a package manager
//! consults while evaluating package definitions: the closed catalog of
//! platform variables (`arch`, `os`, ...), the constant variables supplied
//! by the tool itself (`opam-version`), and the ordered repository list
//! computed from configuration directives.
//!
//! # Overview
//!
//! A [`Context`] is decoded from a small YAML fragment merged with process
//! defaults. Variable names resolve through [`Variable::resolve`] (system
//! catalog first, then constants) and read through [`Context::get`], which
//! distinguishes bound values from unset system variables. Every value is
//! immutable once constructed; "updates" such as [`SysBindings::set`] and
//! [`SysBindings::extend`] return new values.
//!
//! # Example
//!
//! ```yaml
//! # .opamenv.yaml
//! api: opamenv/v0
//!
//! # System variable bindings
//! sys:
//!   - var: os
//!     value: linux
//!   - var: arch
//!     value: x86_64
//!
//! # Repository directives, applied left to right against the
//! # built-in list (currently just 'default')
//! repositories:
//!   - standard
//!   - add: company-overlay
//! ```

pub mod bindings;
pub mod consts;
pub mod context;
pub mod error;
pub mod repository;
pub mod variable;

pub use bindings::{SysBinding, SysBindings};
pub use consts::ConstBindings;
pub use context::{ApiVersion, Context, ContextConfig, VariableValue};
pub use error::{Error, Result};
pub use repository::{
    resolve_repositories, standard_repositories, AddRepo, RemoveRepo, RepoDirective,
    RepositoryName, StandardSet, DEFAULT_REPOSITORY_NAME,
};
pub use variable::{ConstVar, SysVar, Variable};

/// Well-known filename for context fragments.
pub const OPAMENV_FILENAME: &str = ".opamenv.yaml";
