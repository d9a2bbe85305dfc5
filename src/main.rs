//! Enteral Nutrition Unit Calculator
//!
//! Reads a calculation request as JSON from a file argument or stdin,
//! resolves density defaults from the catalog, and prints either the
//! result or the validation errors as JSON on stdout.

use std::io::Read;

use serde::Serialize;
use tracing_subscriber::EnvFilter;

use enteral_units::build_info;
use enteral_units::catalog;
use enteral_units::engine;
use enteral_units::models::{CalculationRequest, CalculationResult};

/// Calculation output envelope
#[derive(Debug, Serialize)]
#[serde(untagged)]
enum Output {
    Success {
        result: CalculationResult,
        narrative: String,
        #[serde(skip_serializing_if = "Option::is_none")]
        advisory: Option<&'static str>,
    },
    Failure {
        errors: Vec<String>,
    },
}

fn print_usage() {
    eprintln!("Usage: enteral-units [REQUEST.json | -]");
    eprintln!("       enteral-units --codes");
    eprintln!("       enteral-units --products <CODE>");
    eprintln!();
    eprintln!("Reads a calculation request as JSON from the given file (or stdin)");
    eprintln!("and prints the billing-unit result as JSON on stdout.");
}

/// Read the raw request body from a file argument or stdin
fn read_request(arg: Option<&str>) -> Result<String, Box<dyn std::error::Error>> {
    match arg {
        Some(path) if path != "-" => Ok(std::fs::read_to_string(path)?),
        _ => {
            let mut buf = String::new();
            std::io::stdin().read_to_string(&mut buf)?;
            Ok(buf)
        }
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Logging goes to stderr so stdout stays machine-readable
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env().add_directive("enteral_units=info".parse()?),
        )
        .with_writer(std::io::stderr)
        .init();

    build_info::print_startup_banner();

    let args: Vec<String> = std::env::args().skip(1).collect();

    match args.first().map(String::as_str) {
        Some("--help") | Some("-h") => {
            print_usage();
            return Ok(());
        }
        Some("--codes") => {
            println!("{}", serde_json::to_string_pretty(catalog::HCPCS_CODES)?);
            return Ok(());
        }
        Some("--products") => {
            let code = args
                .get(1)
                .ok_or("--products requires an HCPCS code argument")?;
            let products = catalog::products_for_code(code);
            if catalog::lookup_code(code).is_none() {
                tracing::warn!("unknown HCPCS code: {}", code);
            }
            println!("{}", serde_json::to_string_pretty(&products)?);
            return Ok(());
        }
        _ => {}
    }

    let raw = read_request(args.first().map(String::as_str))?;
    let mut request: CalculationRequest = serde_json::from_str(&raw)?;

    // Default-then-override density resolution: a blank density takes the
    // catalog prefill for the selected product; an explicit value wins.
    let mut advisory = None;
    if request.density_value.is_none() {
        if let Some(prefill) = catalog::prefill_for(&request.hcpcs_code, &request.formula_name) {
            advisory = prefill.advisory();
            request.density_type = prefill.density_type;
            request.density_value = prefill.density_value;
        }
    }
    if let Some(message) = advisory {
        tracing::warn!("{}", message);
    }

    match engine::calculate(&request) {
        Ok(result) => {
            let narrative = engine::format::narrative(&result);
            tracing::info!(
                "calculated {} units for {} ({})",
                result.total_units,
                result.formula_name,
                result.hcpcs_code
            );
            let output = Output::Success {
                result,
                narrative,
                advisory,
            };
            println!("{}", serde_json::to_string_pretty(&output)?);
            Ok(())
        }
        Err(errors) => {
            let output = Output::Failure {
                errors: errors.iter().map(ToString::to_string).collect(),
            };
            println!("{}", serde_json::to_string_pretty(&output)?);
            std::process::exit(1);
        }
    }
}
