use clap::Parser;
use coindash::{cli, config::loader::parse_coin_list};

#[derive(Parser)]
#[command(name = "coindash")]
#[command(about = "Terminal cryptocurrency price dashboard")]
struct Args {
    /// Coin ids to track, space- or comma-separated
    /// (default: bitcoin,ethereum,dogecoin,cardano,solana)
    coins: Vec<String>,

    #[arg(long, help = "Refresh continuously instead of printing once")]
    watch: bool,

    #[arg(long, default_value = "10", help = "Refresh interval in seconds for --watch")]
    interval: u64,

    #[arg(long, help = "Enable debug logging")]
    verbose: bool,
}

#[tokio::main]
async fn main() {
    let args = Args::parse();
    init_logging(args.verbose);

    if args.watch && args.interval == 0 {
        eprintln!("Error: interval must be greater than 0");
        std::process::exit(1);
    }

    let opts = cli::CliOptions {
        coins: parse_coin_list(&args.coins.join(",")),
        watch: args.watch,
        interval: args.interval,
    };

    if let Err(err) = cli::run_cli(opts).await {
        eprintln!("Error: {err:#}");
        std::process::exit(1);
    }
}

fn init_logging(verbose: bool) {
    let filter = if verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(filter)).init();
}
