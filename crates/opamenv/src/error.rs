// Copyright (c) Contributors to the opamenv project.
// SPDX-License-Identifier: Apache-2.0

//! Error types for opamenv operations.

use miette::Diagnostic;
use std::path::PathBuf;
use thiserror::Error;

/// Convenience Result type with opamenv Error.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while decoding or resolving a context.
#[derive(Error, Diagnostic, Debug)]
pub enum Error {
    /// Configuration named a variable outside the catalog
    #[error("Unknown variable '{name}' at {location}")]
    #[diagnostic(
        code(opamenv::unknown_variable),
        help("{}", known_names_message(known))
    )]
    UnknownVariable {
        name: String,
        location: String,
        known: Vec<String>,
    },

    /// Same system variable bound twice in one input list
    #[error("Duplicate binding for variable '{name}': '{first}' and '{second}'")]
    #[diagnostic(
        code(opamenv::duplicate_binding),
        help("Remove one of the conflicting entries; later entries do not override earlier ones")
    )]
    DuplicateBinding {
        name: String,
        first: String,
        second: String,
    },

    /// Repository directive named a malformed identifier
    #[error("Invalid repository name '{name}' at {location}")]
    #[diagnostic(
        code(opamenv::invalid_repository_name),
        help("Repository names start with an ASCII letter or digit and may contain '-', '_', '+' and '.'")
    )]
    InvalidRepositoryName { name: String, location: String },

    /// Repository directives produced the same name twice
    #[error("Repository '{name}' listed more than once (at {location})")]
    #[diagnostic(
        code(opamenv::duplicate_repository),
        help("Each repository may appear at most once in the resolved list")
    )]
    DuplicateRepository { name: String, location: String },

    /// Invalid YAML in a context fragment
    #[error("Invalid context configuration: {error}")]
    #[diagnostic(code(opamenv::invalid_yaml))]
    InvalidYaml {
        #[source]
        error: serde_yaml::Error,
        yaml_content: String,
    },

    /// Failed to read file
    #[error("Failed to read file: {path:?}")]
    #[diagnostic(code(opamenv::read_failed))]
    ReadFailed {
        path: PathBuf,
        #[source]
        error: std::io::Error,
    },
}

fn known_names_message(known: &[String]) -> String {
    format!("Valid variable names are: {}", known.join(", "))
}
