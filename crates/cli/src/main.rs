mod cmd;
mod output;

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use luamachine_lib::{Arch, Platform, VmBackend};
use tracing_subscriber::EnvFilter;

use cmd::{ResolveArgs, cmd_info, cmd_matrix, cmd_resolve};
use output::{OutputFormat, print_error};

/// luamachine - resolve VM backend link inputs for the LuaMachine plugin
#[derive(Parser)]
#[command(name = "luamachine")]
#[command(author, version, about, long_about = None)]
struct Cli {
  /// Enable verbose (debug) logging
  #[arg(short, long, global = true)]
  verbose: bool,

  #[command(subcommand)]
  command: Commands,
}

#[derive(Subcommand)]
enum Commands {
  /// Resolve definitions, libraries, includes and modules for one build
  Resolve {
    /// VM backend (lua53, lua54, luau, luajit, unknown); defaults to the configured one
    #[arg(short, long)]
    backend: Option<VmBackend>,

    /// Target platform (win64, mac, linux, linuxarm64, android, ios); defaults to the host
    #[arg(short, long)]
    platform: Option<Platform>,

    /// Target architecture (x64, arm64, armv7); defaults to the platform's default
    #[arg(short, long)]
    arch: Option<Arch>,

    /// Build with editor support
    #[arg(short, long)]
    editor: bool,

    /// Fail when the backend has no prebuilt libraries for the target
    #[arg(long)]
    strict: bool,

    /// Path to luamachine.toml
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    /// Write the output to a file instead of stdout
    #[arg(short, long)]
    out: Option<PathBuf>,
  },

  /// Show which backend/platform pairs have prebuilt libraries
  Matrix {
    /// Only show this backend
    #[arg(short, long)]
    backend: Option<VmBackend>,

    /// Output as JSON
    #[arg(long)]
    json: bool,
  },

  /// Show the detected host target
  Info,
}

fn main() {
  let cli = Cli::parse();

  let default_level = if cli.verbose { "debug" } else { "warn" };
  tracing_subscriber::fmt()
    .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)))
    .with_writer(std::io::stderr)
    .without_time()
    .init();

  if let Err(e) = run(cli.command) {
    print_error(&format!("{:#}", e));
    std::process::exit(1);
  }
}

fn run(command: Commands) -> Result<()> {
  match command {
    Commands::Resolve {
      backend,
      platform,
      arch,
      editor,
      strict,
      config,
      format,
      out,
    } => cmd_resolve(ResolveArgs {
      backend,
      platform,
      arch,
      editor,
      strict,
      config,
      format,
      out,
    }),
    Commands::Matrix { backend, json } => cmd_matrix(backend, json),
    Commands::Info => {
      cmd_info();
      Ok(())
    }
  }
}
