//! Domain Fudge - find unregistered lookalikes of a target domain
//!
//! Generates visually-confusable variants of each target domain across the
//! selected TLD categories, then checks which variants are unregistered via
//! DNS and WHOIS.

use clap::Parser;
use domain_fudge::{
    generate_candidates, resolve_tlds, Availability, AvailabilityChecker, CheckConfig,
    CheckResult, Domain, FudgeError, LookalikeTable, Result, TldSelection,
};
use indicatif::ProgressBar;
use std::path::PathBuf;
use std::process;
use std::sync::Arc;
use std::time::Duration;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "domain-fudge")]
#[command(about = "Finds unregistered domains visually similar to a target domain")]
#[command(version)]
struct Cli {
    /// Domains to fudge; second-level names only (e.g. google.com, amazon.co.uk)
    domain: Vec<String>,

    /// Load domains from the given file, one per line
    #[arg(long)]
    file: Option<PathBuf>,

    /// Also check the original TLDs (.com, .net, .org)
    #[arg(long)]
    original_tlds: bool,

    /// Also check country code TLDs
    #[arg(long)]
    country_code_tlds: bool,

    /// Also check a custom comma-separated list of TLDs
    #[arg(long)]
    custom_tlds: Option<String>,

    /// Do not perform WHOIS checks
    #[arg(long)]
    no_whois: bool,

    /// Disable all active checks; only print generated candidates
    #[arg(long)]
    no_active: bool,

    /// Maximum number of checks in flight at once
    #[arg(long, default_value_t = 10)]
    concurrency: usize,

    /// Per network operation timeout in seconds
    #[arg(long, default_value_t = 10)]
    timeout: u64,

    /// Emit check results as JSON lines instead of plain text
    #[arg(long)]
    json: bool,
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    if let Err(e) = run(cli).await {
        eprintln!("[-] {}", e.user_message());
        process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<()> {
    let targets = load_targets(&cli)?;
    if targets.is_empty() {
        return Err(FudgeError::config(
            "must provide a domain as argument or a file containing domains",
        ));
    }

    let selection = TldSelection {
        original_set: cli.original_tlds,
        country_codes: cli.country_code_tlds,
        custom: cli.custom_tlds.clone(),
    };
    let table = LookalikeTable::builtin();

    let checker = if cli.no_active {
        None
    } else {
        let config = CheckConfig {
            concurrency: cli.concurrency,
            timeout: Duration::from_secs(cli.timeout),
            enable_whois: !cli.no_whois,
        };
        Some(Arc::new(AvailabilityChecker::new(config)))
    };

    // Ctrl-C stops dispatching new checks; in-flight ones finish
    if let Some(checker) = &checker {
        let checker = Arc::clone(checker);
        tokio::spawn(async move {
            if tokio::signal::ctrl_c().await.is_ok() {
                eprintln!("[-] interrupt received, cancelling remaining checks");
                checker.cancel();
            }
        });
    }

    for raw in &targets {
        let domain = match Domain::parse(raw) {
            Ok(domain) => domain,
            Err(e) => {
                // one bad entry must not abort the whole run
                eprintln!("[-] skipping '{}': {}", raw, e.user_message());
                continue;
            }
        };

        let tlds = resolve_tlds(domain.tld(), &selection);
        let candidates = generate_candidates(&domain, &table, &tlds);
        tracing::info!(domain = %domain, candidates = candidates.len(), "generated candidates");

        match &checker {
            None => {
                for candidate in &candidates {
                    println!("{}", candidate);
                }
            }
            Some(checker) => {
                let spinner = ProgressBar::new_spinner();
                spinner.set_message(format!(
                    "checking {} candidates for {}",
                    candidates.len(),
                    domain
                ));
                spinner.enable_steady_tick(Duration::from_millis(120));

                let results = checker.check_all(&candidates).await;

                spinner.finish_and_clear();
                print_results(&results, cli.json);
            }
        }
    }

    if let Some(checker) = &checker {
        let metrics = checker.metrics();
        eprintln!(
            "[+] checked {} candidates: {} registered, {} available, {} errors",
            metrics.checked, metrics.registered, metrics.available, metrics.errors
        );
    }

    Ok(())
}

/// Collect target domains from the input file and positional arguments.
fn load_targets(cli: &Cli) -> Result<Vec<String>> {
    let mut targets = Vec::new();

    if let Some(path) = &cli.file {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| FudgeError::io(e.to_string(), Some(path.display().to_string())))?;
        targets.extend(
            contents
                .lines()
                .map(|line| line.trim().to_string())
                .filter(|line| !line.is_empty()),
        );
    }

    targets.extend(
        cli.domain
            .iter()
            .map(|d| d.trim().to_string())
            .filter(|d| !d.is_empty()),
    );

    Ok(targets)
}

fn print_results(results: &[CheckResult], json: bool) {
    for result in results {
        if json {
            match serde_json::to_string(result) {
                Ok(line) => println!("{}", line),
                Err(e) => eprintln!("[-] could not serialize result for {}: {}", result.domain, e),
            }
            continue;
        }
        match result.status {
            Availability::Available => println!("{}, available", result.domain),
            Availability::Registered => match &result.registrar {
                Some(registrar) => println!("{}, registered ({})", result.domain, registrar),
                None => println!("{}, registered", result.domain),
            },
            Availability::Error => println!(
                "{}, error ({})",
                result.domain,
                result.error_message.as_deref().unwrap_or("unknown")
            ),
        }
    }
}
