// Copyright (c) Contributors to the opamenv project.
// SPDX-License-Identifier: Apache-2.0

//! Implementation of the `opamenv check` command.

use std::path::PathBuf;

use clap::Args;
use colored::Colorize;
use miette::Result;

use opamenv::{ConstBindings, Context};

/// Validate a context file
#[derive(Debug, Args)]
pub struct CmdCheck {
    /// Context file to read
    #[clap(short = 'f', long, default_value = opamenv::OPAMENV_FILENAME)]
    file: PathBuf,

    /// Only set the exit code, print nothing on success
    #[clap(short, long)]
    quiet: bool,
}

impl CmdCheck {
    pub fn run(&mut self) -> Result<i32> {
        match Context::load(&self.file, ConstBindings::current()) {
            Ok(context) => {
                if !self.quiet {
                    println!(
                        "{} {} decodes cleanly",
                        "✓".green(),
                        self.file.display()
                    );
                    println!(
                        "  {} binding(s), {} repository(s)",
                        context.sys().len(),
                        context.repos().len()
                    );
                }
                Ok(0)
            }
            Err(err) => {
                eprintln!("{:?}", miette::Report::new(err));
                Ok(1)
            }
        }
    }
}
