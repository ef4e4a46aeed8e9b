// file: src/cli/args.rs
// version: 1.0.0
// guid: 9e2b5d8a-0c47-4f16-b3a9-6d1f8e4c2b70

//! Command line argument definitions

use crate::config::WizardConfig;
use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "sshuttle-wizard")]
#[command(about = "Build and run an sshuttle command for a remote host's private subnets")]
#[command(version = env!("CARGO_PKG_VERSION"))]
pub struct Cli {
    #[arg(short, long)]
    pub verbose: bool,

    #[arg(short, long)]
    pub quiet: bool,

    #[arg(short, long, help = "Remote host (e.g. user@example.com); prompted for if omitted")]
    pub remote_host: Option<String>,

    #[arg(
        short,
        long,
        allow_hyphen_values = true,
        help = "Extra sshuttle options (e.g. \"-v\"); prompted for if omitted"
    )]
    pub options: Option<String>,

    #[arg(short = 'n', long, help = "Print the command without offering to run it")]
    pub dry_run: bool,

    #[arg(long, default_value = "ssh", help = "ssh program used to read the remote routing table")]
    pub ssh: String,
}

impl From<Cli> for WizardConfig {
    fn from(cli: Cli) -> Self {
        Self {
            remote_host: cli.remote_host,
            options: cli.options,
            dry_run: cli.dry_run,
            ssh_program: cli.ssh,
            ..Default::default()
        }
    }
}
