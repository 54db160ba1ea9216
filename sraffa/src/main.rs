use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;
use tracing_subscriber::{EnvFilter, prelude::*};

use sraffa::model::{EconomicModel, Evaluation, ModelConfig, PriceOutcome, Snapshot};

/// Evaluate an input-output snapshot: maximum profit rate, prices of
/// production and income distribution.
#[derive(Debug, Parser)]
#[command(name = "sraffa", version, about)]
struct Cli {
    /// Snapshot file (JSON: commodities, input_matrix, profit_rate, wage).
    snapshot: PathBuf,

    /// Model configuration file (JSON). Defaults apply for missing fields.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Also report prices at N+1 evenly spaced profit rates in [0, R].
    #[arg(long, value_name = "N")]
    sweep: Option<usize>,

    /// Print the evaluation as JSON instead of a text report.
    #[arg(long)]
    json: bool,
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => {
            let text = fs::read_to_string(path)
                .with_context(|| format!("reading config {}", path.display()))?;
            ModelConfig::from_json_str(&text)?
        }
        None => ModelConfig::default(),
    };
    let text = fs::read_to_string(&cli.snapshot)
        .with_context(|| format!("reading snapshot {}", cli.snapshot.display()))?;
    let snapshot = Snapshot::from_json_str(&text)?;
    info!(commodities = snapshot.len(), "snapshot loaded");

    let model = EconomicModel::new(config)?;
    let evaluation = model.evaluate(&snapshot)?;
    let sweep = cli
        .sweep
        .map(|steps| model.sweep(&snapshot, steps))
        .transpose()?;

    if cli.json {
        let out = serde_json::json!({ "evaluation": evaluation, "sweep": sweep });
        println!("{}", serde_json::to_string_pretty(&out)?);
        return Ok(());
    }

    print_report(&snapshot, &evaluation);
    if let Some(points) = sweep {
        println!("\n{:>10}  {:>14}  valid", "r", "min price");
        for p in points {
            let min = p
                .min_price
                .map_or_else(|| "singular".to_owned(), |m| format!("{m:.6}"));
            println!("{:>10.4}  {:>14}  {}", p.profit_rate, min, p.is_valid);
        }
    }
    Ok(())
}

fn print_report(snapshot: &Snapshot, ev: &Evaluation) {
    println!(
        "profit rate {:.4}   wage {:.4}   maximum profit rate {:.4}",
        ev.profit_rate, ev.wage, ev.max_profit_rate
    );
    match &ev.prices {
        PriceOutcome::Singular => {
            println!("calculation error: the price system is singular");
            return;
        }
        PriceOutcome::Invalid(_) => {
            println!("warning: non-positive prices; r likely exceeds the maximum profit rate");
        }
        PriceOutcome::Valid(_) => {}
    }

    println!(
        "\n{:<16} {:>12} {:>12} {:>12} {:>12}  basic",
        "commodity", "price", "inputs", "profit", "wages"
    );
    for ((c, b), basic) in snapshot
        .commodities
        .iter()
        .zip(&ev.breakdowns)
        .zip(&ev.basics)
    {
        println!(
            "{:<16} {:>12.6} {:>12.6} {:>12.6} {:>12.6}  {}",
            c.name, b.price, b.constant_capital_value, b.profit, b.wage_cost, basic
        );
    }

    if let Some(d) = &ev.distribution {
        println!(
            "\nwages {:.4} ({:.2}%)   profits {:.4} ({:.2}%)   net product {:.4}   capital {:.4}",
            d.total_wages,
            d.wage_share,
            d.total_profits,
            d.profit_share,
            d.net_product,
            d.total_capital
        );
    }
}

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let stderr_layer = tracing_subscriber::fmt::layer()
        .with_target(false)
        .compact()
        .with_writer(std::io::stderr);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(stderr_layer)
        .init();
}
