//! Load a shop directory and simulate random orders against it.
//!
//! ```text
//! headless_runner <dir> [orders] [seed]
//! ```
//!
//! Logging goes through `RUST_LOG` (default `info`).

use std::path::PathBuf;
use std::process::ExitCode;

use sandwich_data::load_shop;
use tracing_subscriber::EnvFilter;

const DEFAULT_ORDERS: u32 = 100;
const DEFAULT_SEED: u64 = 0x5EED;

fn init_logging(level: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();
}

fn parse_arg<T: std::str::FromStr>(arg: Option<String>, default: T, what: &str) -> Result<T, String> {
    match arg {
        None => Ok(default),
        Some(raw) => raw
            .parse()
            .map_err(|_| format!("invalid {what}: '{raw}'")),
    }
}

fn main() -> ExitCode {
    init_logging("info");

    let mut args = std::env::args().skip(1);
    let Some(dir) = args.next().map(PathBuf::from) else {
        eprintln!("usage: headless_runner <dir> [orders] [seed]");
        return ExitCode::FAILURE;
    };
    let (orders, seed) = match (
        parse_arg(args.next(), DEFAULT_ORDERS, "order count"),
        parse_arg(args.next(), DEFAULT_SEED, "seed"),
    ) {
        (Ok(orders), Ok(seed)) => (orders, seed),
        (Err(e), _) | (_, Err(e)) => {
            eprintln!("{e}");
            return ExitCode::FAILURE;
        }
    };

    let mut shop = match load_shop(&dir, seed) {
        Ok(shop) => shop,
        Err(e) => {
            tracing::error!(error = %e, dir = %dir.display(), "failed to load shop");
            return ExitCode::FAILURE;
        }
    };

    println!("{}", shop.details());
    match shop.simulate(orders) {
        Ok(report) => {
            println!("{report}");
            println!("{}", shop.kitchen().inventory_report());
            ExitCode::SUCCESS
        }
        Err(e) => {
            tracing::error!(error = %e, "simulation failed");
            ExitCode::FAILURE
        }
    }
}
