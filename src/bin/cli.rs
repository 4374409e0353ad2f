use std::io::Read;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::Context;
use clap::{Parser, Subcommand};
use uuid::Uuid;

use tracker_authz::config::load_env;
use tracker_authz::models::decision::DecisionRequest;
use tracker_authz::{can, Action, Principal, Resource, Role};

#[derive(Parser, Debug)]
#[command(author, version, about = "tracker authorization decisions", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Evaluate one decision request; exits 0 on allow, 1 on deny
    Check {
        /// JSON file holding `{user, action, resource}`, or `-` for stdin
        #[arg(short, long, default_value = "-")]
        input: PathBuf,
    },
    /// Print the decision for every role and action on a resource snapshot
    Matrix {
        /// JSON file holding a tagged resource, or `-` for stdin
        #[arg(short, long, default_value = "-")]
        input: PathBuf,
        /// Identity used for every role (defaults to a fresh id)
        #[arg(long)]
        user_id: Option<Uuid>,
    },
}

fn main() -> anyhow::Result<ExitCode> {
    load_env();
    let cli = Cli::parse();

    match cli.command {
        Commands::Check { input } => {
            let request: DecisionRequest = read_json(&input)?;
            let allowed = can(&request.user, request.action, &request.resource);
            println!("{}", if allowed { "allow" } else { "deny" });
            Ok(if allowed { ExitCode::SUCCESS } else { ExitCode::from(1) })
        }
        Commands::Matrix { input, user_id } => {
            let resource: Resource = read_json(&input)?;
            let user_id = user_id.unwrap_or_else(Uuid::new_v4);
            print_matrix(&resource, user_id);
            Ok(ExitCode::SUCCESS)
        }
    }
}

fn read_json<T: serde::de::DeserializeOwned>(input: &Path) -> anyhow::Result<T> {
    let mut raw = Vec::new();
    if input.as_os_str() == "-" {
        std::io::stdin().read_to_end(&mut raw).context("failed to read stdin")?;
    } else {
        raw = std::fs::read(input).with_context(|| format!("failed to read {}", input.display()))?;
    }

    let de = &mut serde_json::Deserializer::from_slice(&raw);
    serde_path_to_error::deserialize(de).map_err(|err| anyhow::anyhow!("invalid input at `{}`: {}", err.path(), err.inner()))
}

fn print_matrix(resource: &Resource, user_id: Uuid) {
    print!("{:<14}", resource.kind());
    for action in Action::ALL {
        print!(" {:<11}", action);
    }
    println!();

    for role in Role::ALL {
        let principal = Principal::new(user_id, role);
        print!("{:<14}", role);
        for action in Action::ALL {
            let mark = if can(&principal, action, resource) { "allow" } else { "-" };
            print!(" {:<11}", mark);
        }
        println!();
    }
}
