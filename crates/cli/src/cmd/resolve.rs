//! Implementation of the `luamachine resolve` command.
//!
//! Loads configuration, resolves the module rules for one build and renders
//! them as text, JSON or Cargo directives.

use std::fmt::Write as _;
use std::path::PathBuf;

use anyhow::{Context, Result, anyhow};
use tracing::debug;

use luamachine_lib::util::hash::{Fingerprint, Hashable};
use luamachine_lib::{Arch, BuildRequest, LinkPolicy, ModuleRules, Platform, ResolverConfig, Target, VmBackend, resolve};

use crate::output::{OutputFormat, join_or_dash, print_success};

pub struct ResolveArgs {
  pub backend: Option<VmBackend>,
  pub platform: Option<Platform>,
  pub arch: Option<Arch>,
  pub editor: bool,
  pub strict: bool,
  pub config: Option<PathBuf>,
  pub format: OutputFormat,
  pub out: Option<PathBuf>,
}

pub fn cmd_resolve(args: ResolveArgs) -> Result<()> {
  let mut config = ResolverConfig::load(args.config.as_deref()).context("Failed to load configuration")?;
  if args.strict {
    config.link_policy = LinkPolicy::Strict;
  }

  let backend = args.backend.unwrap_or(config.backend);
  let target = select_target(args.platform, args.arch)?;
  debug!(%backend, %target, policy = ?config.link_policy, "selected build");

  let request = BuildRequest::new(backend, target, args.editor);
  let rules = resolve(&request, &config)?;
  let fingerprint = rules.fingerprint().context("Failed to fingerprint module rules")?;

  let rendered = match args.format {
    OutputFormat::Text => render_text(&rules, &fingerprint),
    OutputFormat::Json => {
      let json = serde_json::json!({ "fingerprint": fingerprint, "rules": rules });
      serde_json::to_string_pretty(&json).context("Failed to serialize to JSON")?
    }
    OutputFormat::Cargo => rules.cargo_directives().join("\n"),
  };

  match args.out {
    Some(path) => {
      std::fs::write(&path, format!("{rendered}\n"))
        .with_context(|| format!("Failed to write rules: {}", path.display()))?;
      print_success(&format!("Wrote {} rules to {}", target, path.display()));
    }
    None => println!("{rendered}"),
  }

  Ok(())
}

/// Explicit platform/arch win; a missing platform falls back to the host platform.
///
/// The host's own CPU is not carried over: an Apple Silicon host resolves `mac-x64`,
/// the only Mac pair with prebuilt libraries. Pass `--arch` to pick another.
fn select_target(platform: Option<Platform>, arch: Option<Arch>) -> Result<Target> {
  let platform = match platform {
    Some(platform) => platform,
    None => {
      Target::current()
        .ok_or_else(|| anyhow!("Could not detect the host target, pass --platform"))?
        .platform
    }
  };
  let target = Target::for_platform(platform);
  Ok(match arch {
    Some(arch) => Target::new(target.platform, arch),
    None => target,
  })
}

fn render_text(rules: &ModuleRules, fingerprint: &Fingerprint) -> String {
  let mut out = String::new();
  let _ = writeln!(out, "Backend: {}", rules.backend);
  let _ = writeln!(out, "Target: {}", rules.target);
  let _ = writeln!(out, "Editor: {}", if rules.editor { "yes" } else { "no" });
  let _ = writeln!(out, "Fingerprint: {}", fingerprint);

  let _ = writeln!(out, "Definitions:");
  for flag in &rules.definitions {
    let _ = writeln!(out, "  {}", flag);
  }

  let _ = writeln!(out, "Libraries:");
  if rules.artifacts.is_empty() {
    let _ = writeln!(out, "  (none)");
  }
  for artifact in &rules.artifacts {
    let _ = writeln!(out, "  {}", artifact.display());
  }

  let _ = writeln!(out, "Public modules: {}", join_or_dash(&rules.dependencies.public));
  let _ = writeln!(out, "Private modules: {}", join_or_dash(&rules.dependencies.private));
  let _ = writeln!(out, "Editor modules: {}", join_or_dash(&rules.dependencies.editor));

  let _ = writeln!(out, "Public includes: {}", display_paths(&rules.includes.public));
  let _ = writeln!(out, "Private includes: {}", display_paths(&rules.includes.private));
  let _ = write!(out, "VM headers: {}", join_or_dash(&rules.vm_headers));
  out
}

fn display_paths(paths: &[PathBuf]) -> String {
  join_or_dash(paths.iter().map(|p| p.display().to_string()))
}
