//! Sitegate CLI - CI drift gates for static site builds
//!
//! Usage: sitegate <COMMAND>
//!
//! Commands:
//!   brand-gate  Scan public-facing copy for legacy brand tokens
//!   ip-gate     Governance, competitor-brand, and audio-asset guardrails
//!   qa-super    Build-versioning and selector drift checks
//!   all         Run every gate in sequence

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

use sitegate::report::GateReport;
use sitegate::{run_brand_gate, run_ip_gate, run_qa_super, GateError};

/// Sitegate - CI drift gates for static site builds
#[derive(Parser, Debug)]
#[command(name = "sitegate")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Output format for CI
    #[arg(long, default_value = "false")]
    json: bool,

    /// Repository root to scan
    #[arg(long, default_value = ".")]
    root: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Scan public-facing copy for legacy brand tokens
    BrandGate,

    /// Governance, competitor-brand, and audio-asset guardrails
    IpGate,

    /// Build-versioning and selector drift checks
    QaSuper,

    /// Run every gate in sequence
    All,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    if !cli.root.is_dir() {
        return Err(GateError::RootNotFound {
            path: cli.root.clone(),
        }
        .into());
    }

    let reports = match cli.command {
        Commands::BrandGate => vec![run_brand_gate(&cli.root)?],
        Commands::IpGate => vec![run_ip_gate(&cli.root)?],
        Commands::QaSuper => vec![run_qa_super(&cli.root)?],
        Commands::All => vec![
            run_brand_gate(&cli.root)?,
            run_ip_gate(&cli.root)?,
            run_qa_super(&cli.root)?,
        ],
    };

    let mut all_pass = true;
    for report in &reports {
        if !render_report(report, &cli.root, cli.json)? {
            all_pass = false;
        }
    }

    if !all_pass {
        std::process::exit(1);
    }
    Ok(())
}

/// Print one gate's report; returns whether the gate passed.
fn render_report(report: &GateReport, root: &PathBuf, json: bool) -> Result<bool> {
    if json {
        let output = serde_json::json!({
            "event": event_name(report.gate),
            "status": if report.is_success() { "pass" } else { "fail" },
            "ok": report.ok_count(),
            "failures": report.failure_count(),
            "violations": report.failures().map(|e| e.message.clone()).collect::<Vec<_>>(),
        });
        println!("{}", serde_json::to_string(&output)?);
    } else {
        println!("🛡 {}", report.gate);
        println!("Root: {}", root.display());
        for entry in &report.entries {
            println!("  {}: {}", entry.status, entry.message);
        }
        println!();
        if report.is_success() {
            println!("{} PASS ✅", report.gate);
        } else {
            println!("{} FAIL ❌  ({} issues)", report.gate, report.failure_count());
        }
        println!();
    }
    Ok(report.is_success())
}

fn event_name(gate: &str) -> String {
    gate.to_lowercase().replace(' ', "_")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parse_brand_gate() {
        let cli = Cli::try_parse_from(["sitegate", "brand-gate"]).unwrap();
        assert!(matches!(cli.command, Commands::BrandGate));
        assert_eq!(cli.root, PathBuf::from("."));
    }

    #[test]
    fn test_cli_parse_ip_gate_with_root() {
        let cli = Cli::try_parse_from(["sitegate", "--root", "repo", "ip-gate"]).unwrap();
        assert!(matches!(cli.command, Commands::IpGate));
        assert_eq!(cli.root, PathBuf::from("repo"));
    }

    #[test]
    fn test_cli_parse_qa_super() {
        let cli = Cli::try_parse_from(["sitegate", "qa-super"]).unwrap();
        assert!(matches!(cli.command, Commands::QaSuper));
    }

    #[test]
    fn test_cli_parse_all() {
        let cli = Cli::try_parse_from(["sitegate", "all"]).unwrap();
        assert!(matches!(cli.command, Commands::All));
    }

    #[test]
    fn test_cli_json_flag() {
        let cli = Cli::try_parse_from(["sitegate", "--json", "qa-super"]).unwrap();
        assert!(cli.json);
    }

    #[test]
    fn test_event_name() {
        assert_eq!(event_name("BRAND GATE"), "brand_gate");
        assert_eq!(event_name("QA SUPER"), "qa_super");
    }
}
