//! CLI entry point for northwind
//!
//! Prints income and rule standing of customers stored as JSON files.

use anyhow::{Context, Result, bail};
use northwind::application::DependencyContainer;
use northwind::config::RulesConfig;
use northwind::infrastructure::{JsonFileCustomerRepository, LineItemPricing, RuleSetRegistry};
use std::path::PathBuf;
use std::process;
use std::sync::Arc;

#[tokio::main]
async fn main() {
    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 {
        print_usage();
        process::exit(1);
    }

    let command = &args[1];

    match command.as_str() {
        "report" => {
            if let Err(err) = run_report(&args[2..]).await {
                eprintln!("Error: {err:#}");
                process::exit(1);
            }
        }
        "--help" | "-h" => {
            print_usage();
        }
        _ => {
            eprintln!("Error: Unknown command '{}'", command);
            eprintln!();
            print_usage();
            process::exit(1);
        }
    }
}

fn print_usage() {
    println!("northwind - Customer income and rule report");
    println!();
    println!("USAGE:");
    println!("    northwind report <customers-dir> [--rules <rules.json>]");
    println!();
    println!("COMMANDS:");
    println!("    report <dir>    Report every <id>.customer.json file in <dir>");
    println!("    --help, -h      Show this help message");
    println!();
    println!("OPTIONS:");
    println!("    --rules <file>  Rule-set configuration (defaults apply when omitted)");
}

async fn run_report(args: &[String]) -> Result<()> {
    let mut dir: Option<PathBuf> = None;
    let mut rules_path: Option<PathBuf> = None;

    let mut iter = args.iter();
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--rules" => {
                let path = iter.next().context("--rules requires a file path")?;
                rules_path = Some(PathBuf::from(path));
            }
            other if dir.is_none() => dir = Some(PathBuf::from(other)),
            other => bail!("unexpected argument '{other}'"),
        }
    }

    let dir = dir.context("missing customers directory")?;
    let config = match rules_path {
        Some(path) => RulesConfig::load(&path)
            .await
            .with_context(|| format!("loading rules from {}", path.display()))?,
        None => RulesConfig::default(),
    };

    let rules = RuleSetRegistry::from_config(&config).customer_rules()?;
    let container = DependencyContainer::new()
        .register_customer_repository(Arc::new(JsonFileCustomerRepository::new(
            &dir,
            rules.clone(),
        )))
        .register_order_pricing(Arc::new(LineItemPricing))
        .register_customer_rules(rules);

    let use_case = container
        .get_customer_report_use_case()
        .context("report use case is not wired")?;

    let reports = use_case.report_all().await?;
    if reports.is_empty() {
        println!("No customers found in {}", dir.display());
        return Ok(());
    }

    for report in reports {
        println!(
            "{:<8} {:<40} {:>12}  registration={}  orders={}",
            report.id.as_str(),
            report.name,
            report.total_income.round_dp(2),
            if report.valid_for_registration { "ok" } else { "invalid" },
            if report.can_make_orders { "ok" } else { "blocked" },
        );
        for violation in &report.violations {
            println!("         - {violation}");
        }
    }

    Ok(())
}
