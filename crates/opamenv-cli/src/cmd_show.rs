// Copyright (c) Contributors to the opamenv project.
// SPDX-License-Identifier: Apache-2.0

//! Implementation of the `opamenv show` command.

use std::path::PathBuf;

use clap::Args;
use colored::Colorize;
use miette::Result;

use opamenv::{ConstBindings, ConstVar, Context, SysVar, Variable, VariableValue};

/// Display the decoded evaluation context
#[derive(Debug, Args)]
pub struct CmdShow {
    /// Context file to read
    #[clap(short = 'f', long, default_value = opamenv::OPAMENV_FILENAME)]
    file: PathBuf,

    /// Resolve a single variable instead of showing everything
    #[clap(long = "var")]
    var: Option<String>,

    /// Output format: table, yaml
    #[clap(long, default_value = "table")]
    format: String,
}

impl CmdShow {
    pub fn run(&mut self) -> Result<i32> {
        let context = Context::load(&self.file, ConstBindings::current())?;

        if let Some(name) = &self.var {
            return show_variable(&context, name);
        }

        if self.format == "yaml" {
            show_yaml(&context);
        } else {
            show_table(&context);
        }

        Ok(0)
    }
}

fn show_variable(context: &Context, name: &str) -> Result<i32> {
    let variable = Variable::resolve(name).ok_or_else(|| {
        miette::miette!(
            "No such variable '{}' (valid names: {})",
            name,
            Variable::known_names().join(", ")
        )
    })?;

    match context.get(variable) {
        VariableValue::String(value) => {
            println!("{value}");
            Ok(0)
        }
        VariableValue::UnsetSys => {
            println!("{}", "(unset)".dimmed());
            Ok(2)
        }
    }
}

fn show_table(context: &Context) {
    println!("{}", "System Environment Variables:".bold());
    let mut vars = SysVar::ALL;
    vars.sort();
    for var in vars {
        match context.sys().get(var) {
            Some(value) => println!("  {} = {}", var.to_string().cyan(), value.green()),
            None => println!("  {} {}", var.to_string().cyan(), "(unset)".dimmed()),
        }
    }

    println!();
    println!("{}", "Constants:".bold());
    for var in ConstVar::ALL {
        println!(
            "  {} = {}",
            var.to_string().cyan(),
            context.consts().get(var).green()
        );
    }

    println!();
    println!("{}", "Repositories:".bold());
    if context.repos().is_empty() {
        println!("  {}", "(none)".dimmed());
    } else {
        for (i, name) in context.repos().iter().enumerate() {
            println!("  {}. {}", i + 1, name.to_string().green());
        }
    }
}

/// Re-emit the decoded context as a fragment that resolves to the same
/// bindings and repository list.
fn show_yaml(context: &Context) {
    println!("# Decoded evaluation context");
    println!("api: opamenv/v0");

    if context.sys().is_empty() {
        println!("sys: []");
    } else {
        println!("sys:");
        for (var, value) in context.sys().iter() {
            println!("  - var: {var}");
            println!("    value: {value}");
        }
    }

    if context.repos().is_empty() {
        println!("repositories: []");
    } else {
        println!("repositories:");
        for name in context.repos() {
            println!("  - add: {name}");
        }
    }
}
