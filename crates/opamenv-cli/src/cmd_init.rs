// Copyright (c) Contributors to the opamenv project.
// SPDX-License-Identifier: Apache-2.0

//! Implementation of the `opamenv init` command.

use std::path::PathBuf;

use clap::Args;
use miette::Result;

#[cfg(test)]
#[path = "./cmd_init_test.rs"]
mod cmd_init_test;

/// Create a new .opamenv.yaml file
#[derive(Debug, Args)]
pub struct CmdInit {
    /// Directory to create the file in
    #[clap(default_value = ".")]
    path: PathBuf,

    /// Template to use: minimal, full
    #[clap(long, default_value = "full")]
    template: String,
}

impl CmdInit {
    pub fn run(&mut self) -> Result<i32> {
        let config_path = self.path.join(opamenv::OPAMENV_FILENAME);

        // Check if file already exists
        if config_path.exists() {
            return Err(miette::miette!(
                "{} already exists at {:?}",
                opamenv::OPAMENV_FILENAME,
                config_path
            ));
        }

        let content = match self.template.as_str() {
            "minimal" => generate_minimal_template(),
            _ => generate_full_template(),
        };

        std::fs::write(&config_path, content).map_err(|e| {
            miette::miette!("Failed to write {}: {}", opamenv::OPAMENV_FILENAME, e)
        })?;

        println!("Created {} at {:?}", opamenv::OPAMENV_FILENAME, config_path);
        println!();
        println!("Next steps:");
        println!("  1. Bind the system variables your packages depend on");
        println!("  2. Run 'opamenv check' to validate the file");
        println!("  3. Run 'opamenv show' to inspect the decoded context");

        Ok(0)
    }
}

fn generate_minimal_template() -> String {
    "api: opamenv/v0\n\
    \n\
    sys: []\n"
        .to_string()
}

fn generate_full_template() -> String {
    "# opamenv evaluation context\n\
    \n\
    api: opamenv/v0\n\
    \n\
    # System variable bindings\n\
    # Recognized names: arch, os, os-version, os-distribution, os-family\n\
    # sys:\n\
    #   - var: os\n\
    #     value: linux\n\
    #   - var: arch\n\
    #     value: x86_64\n\
    \n\
    # Repository directives, applied left to right\n\
    # 'standard' splices in the built-in list (currently just 'default')\n\
    # repositories:\n\
    #   - standard\n\
    #   - add: company-overlay\n\
    #   - remove: default\n"
        .to_string()
}
