//! vatcheck CLI entry point.
//!
//! Validates a single VAT number against VIES and prints the result,
//! exiting with success/failure matching the validation outcome.

use std::process::ExitCode;
use std::time::Duration;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use vatcheck::{ValidationDetails, ValidatorConfig, VatValidator};

/// Validate a European VAT number using the EU VIES service.
#[derive(Parser, Debug)]
#[command(name = "vatcheck", version, about)]
struct Cli {
    /// The VAT number to validate (with or without country prefix).
    vat: String,

    /// Country code used when the VAT number has no prefix (e.g. NL, DE, IT).
    #[arg(short, long)]
    country: Option<String>,

    /// Skip the cache and force a fresh VIES lookup.
    #[arg(long)]
    no_cache: bool,

    /// Override the VIES base URL.
    #[arg(long)]
    base_url: Option<String>,

    /// VIES request timeout in seconds.
    #[arg(long)]
    timeout: Option<u64>,

    /// Print the result as JSON instead of a table.
    #[arg(long)]
    json: bool,

    /// Enable verbose output. Repeat for more verbosity (-v, -vv).
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    let default_level = match cli.verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .init();

    let mut config = ValidatorConfig::from_env();
    if let Some(url) = cli.base_url {
        config.base_url = url;
    }
    if let Some(secs) = cli.timeout {
        config.timeout = Duration::from_secs(secs);
    }
    if cli.no_cache {
        config.cache_enabled = false;
    }

    let validator = match VatValidator::new(config) {
        Ok(v) => v,
        Err(e) => {
            eprintln!("error: {e}");
            return ExitCode::FAILURE;
        }
    };

    match validator.details(&cli.vat, cli.country.as_deref()).await {
        Ok(details) => {
            if cli.json {
                match serde_json::to_string_pretty(&details) {
                    Ok(json) => println!("{json}"),
                    Err(e) => {
                        eprintln!("error: {e}");
                        return ExitCode::FAILURE;
                    }
                }
            } else {
                print_details(&details);
            }
            if details.valid {
                ExitCode::SUCCESS
            } else {
                ExitCode::FAILURE
            }
        }
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn print_details(details: &ValidationDetails) {
    if details.valid {
        println!("✓ VAT number is VALID");
    } else {
        println!("✗ VAT number is INVALID");
    }
    println!();

    let na = "—".to_string();
    println!("  Original VAT:      {}", details.original_vat);
    println!(
        "  Normalized VAT:    {}",
        details.normalized_vat.as_ref().unwrap_or(&na)
    );
    println!(
        "  Country code:      {}",
        details.country_code.as_ref().unwrap_or(&na)
    );
    println!(
        "  Number part:       {}",
        details.number_part.as_ref().unwrap_or(&na)
    );
    if let Some(name) = &details.name {
        println!("  Registered name:   {name}");
    }
    if let Some(address) = &details.address {
        println!("  Address:           {}", address.replace('\n', ", "));
    }
    println!(
        "  Service available: {}",
        if details.service_available { "yes" } else { "no" }
    );
    println!(
        "  Cached:            {}",
        if details.cached { "yes" } else { "no" }
    );
    println!(
        "  Error:             {}",
        details.error.as_ref().unwrap_or(&na)
    );

    if !details.service_available {
        println!();
        println!("⚠ VIES is currently unavailable — the result may not be accurate.");
    }
    if details.cached {
        println!();
        println!("ℹ A cached answer exists for this number; pass --no-cache to ignore it.");
    }
}
