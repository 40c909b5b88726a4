//! Coverage matrix: which backends ship prebuilt libraries for which platforms.

use anyhow::Result;
use owo_colors::{OwoColorize, Stream};

use luamachine_lib::{VmBackend, coverage_matrix};

use crate::output::{print_json, print_stat, symbols};

pub fn cmd_matrix(backend: Option<VmBackend>, json: bool) -> Result<()> {
  let matrix = coverage_matrix(backend);

  if json {
    return print_json(&matrix);
  }

  for entry in &matrix {
    let status = if entry.is_supported() {
      symbols::SUCCESS.if_supports_color(Stream::Stdout, |s| s.green()).to_string()
    } else {
      symbols::ERROR.if_supports_color(Stream::Stdout, |s| s.red()).to_string()
    };
    println!(
      "{} {:<8} {:<18} {} librar{}",
      status,
      entry.backend.as_str(),
      entry.target.triple(),
      entry.artifacts,
      if entry.artifacts == 1 { "y" } else { "ies" }
    );
  }

  println!();
  let supported = matrix.iter().filter(|e| e.is_supported()).count();
  print_stat("Supported", &format!("{} of {}", supported, matrix.len()));

  Ok(())
}
