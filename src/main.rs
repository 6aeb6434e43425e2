use clap::Parser;
use std::io::Write;

use lunarfetch::cli::Args;
use lunarfetch::config::Config;
use lunarfetch::fetch::Fetch;
use lunarfetch::info::CommandCache;
use lunarfetch::protocol::SystemEnvironment;
use lunarfetch::terminal::TerminalGeometry;

/// Logging is silent unless `--debug` or `RUST_LOG` asks for it.
fn init_logging(debug: bool) {
    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("off"));
    if debug {
        builder.filter_level(log::LevelFilter::Debug);
    }
    builder.format_timestamp(None).init();
}

fn main() {
    let args = Args::parse();
    init_logging(args.debug);

    let config = match Config::load(args.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Warning: {}", e);
            eprintln!("Using default settings.\n");
            Config::default()
        }
    };

    let env = SystemEnvironment;
    let cache = CommandCache::default();
    let geometry = TerminalGeometry::query();
    let output = Fetch::new(&config, &env, &cache).render(geometry, &mut rand::thread_rng());

    let mut stdout = std::io::stdout().lock();
    if let Err(e) = stdout.write_all(output.as_bytes()).and_then(|()| stdout.flush()) {
        log::debug!("could not write output: {}", e);
    }
}
