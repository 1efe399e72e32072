// Copyright (c) Contributors to the opamenv project.
// SPDX-License-Identifier: Apache-2.0

//! opamenv - Evaluation context inspector CLI

use clap::{Parser, Subcommand};
use miette::Result;

mod cmd_check;
mod cmd_init;
mod cmd_show;

use cmd_check::CmdCheck;
use cmd_init::CmdInit;
use cmd_show::CmdShow;

#[derive(Parser)]
#[clap(
    name = "opamenv",
    about = "Evaluation context inspector for opam-style package environments",
    version,
    long_about = "Decode, validate and inspect the variable bindings and repository list \
                  consulted while evaluating package definitions"
)]
struct Opt {
    #[clap(flatten)]
    logging: Logging,

    #[clap(subcommand)]
    cmd: Command,
}

#[derive(Parser)]
struct Logging {
    /// Increase verbosity (-v, -vv, -vvv)
    #[clap(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress non-error output
    #[clap(short, long)]
    quiet: bool,
}

#[derive(Subcommand)]
enum Command {
    /// Create a new .opamenv.yaml file
    Init(CmdInit),

    /// Display the decoded evaluation context
    Show(CmdShow),

    /// Validate a context file
    Check(CmdCheck),
}

impl Opt {
    fn run(self) -> Result<i32> {
        // Setup logging
        let log_level = match (self.logging.quiet, self.logging.verbose) {
            (true, _) => tracing::Level::ERROR,
            (false, 0) => tracing::Level::WARN,
            (false, 1) => tracing::Level::INFO,
            (false, 2) => tracing::Level::DEBUG,
            (false, _) => tracing::Level::TRACE,
        };

        tracing_subscriber::fmt().with_max_level(log_level).init();

        // Dispatch to command
        match self.cmd {
            Command::Init(mut cmd) => cmd.run(),
            Command::Show(mut cmd) => cmd.run(),
            Command::Check(mut cmd) => cmd.run(),
        }
    }
}

fn main() -> Result<()> {
    let opt = Opt::parse();
    let code = opt.run()?;
    std::process::exit(code);
}
