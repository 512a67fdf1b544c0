use std::path::PathBuf;
use tradewatch_runner::{BatchInput, run_batch};

fn print_help() {
    eprintln!(
        r#"Tradewatch - flag suspicious trades against opposite-side orders

USAGE:
    tradewatch --trades <PATH> --orders <PATH> [OPTIONS]

OPTIONS:
    --trades <PATH>     JSON array of trades
    --orders <PATH>     JSON array of orders
    --config <PATH>     Analyser configuration (JSON)
    --help              Print this help message

ENVIRONMENT VARIABLES:
    RUST_LOG            Log level filter (default: info)

EXAMPLES:
    tradewatch --trades trades.json --orders orders.json

    RUST_LOG=debug tradewatch --trades t.json --orders o.json --config window.json
"#
    );
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    // Parse command line arguments
    let args: Vec<String> = std::env::args().collect();
    let mut trades: Option<PathBuf> = None;
    let mut orders: Option<PathBuf> = None;
    let mut config: Option<PathBuf> = None;

    let mut i = 1;
    while i < args.len() {
        let flag = args[i].as_str();
        match flag {
            "--help" | "-h" => {
                print_help();
                return Ok(());
            }
            "--trades" | "--orders" | "--config" => {
                i += 1;
                if i >= args.len() {
                    eprintln!("Error: {} requires a path argument", flag);
                    std::process::exit(1);
                }
                let path = Some(PathBuf::from(&args[i]));
                match flag {
                    "--trades" => trades = path,
                    "--orders" => orders = path,
                    _ => config = path,
                }
            }
            arg => {
                eprintln!("Unknown argument: {}", arg);
                print_help();
                std::process::exit(1);
            }
        }
        i += 1;
    }

    let (Some(trades), Some(orders)) = (trades, orders) else {
        eprintln!("Error: --trades and --orders are required");
        print_help();
        std::process::exit(1);
    };

    let input = BatchInput {
        trades,
        orders,
        config,
    };
    let flagged = run_batch(&input)?;

    println!("{}", serde_json::to_string_pretty(&flagged)?);
    Ok(())
}
