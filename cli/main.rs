//! This module contains the main entrypoint to the klang cli.

use clap::Parser;
use colored::Colorize;
use klang_deps::tracing_subscriber::{fmt, EnvFilter};
use klang_util::error::Result;

#[derive(Parser)]
#[clap(
	about = "Explore and predict the water pollution of the Klang river.",
	disable_help_subcommand = true,
)]
enum Options {
	#[clap(name = "app")]
	App(AppOptions),
}

#[derive(Parser, Debug)]
#[clap(about = "run the app")]
#[clap(long_about = "run the water pollution dashboard web app")]
struct AppOptions {
	#[clap(long, default_value = "0.0.0.0")]
	host: std::net::IpAddr,
	#[clap(long, env = "PORT", default_value = "8080")]
	port: u16,
	/// the number of synthetic rows generated for every render of the home page
	#[clap(long, env = "KLANG_ROWS", default_value = "100")]
	rows: usize,
}

fn main() {
	setup_tracing();
	let options = Options::parse();
	let result = match options {
		Options::App(options) => cli_app(options),
	};
	if let Err(error) = result {
		eprintln!("{}: {}", "error".red().bold(), error);
		std::process::exit(1);
	}
}

/// Log to stderr, filtered by `RUST_LOG` and defaulting to `info`.
fn setup_tracing() {
	let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
	fmt()
		.with_env_filter(env_filter)
		.with_writer(std::io::stderr)
		.init();
}

fn cli_app(options: AppOptions) -> Result<()> {
	klang_app::run(klang_app::Options {
		host: options.host,
		port: options.port,
		rows: options.rows,
	})
}

#[test]
fn test_app_options() {
	let Options::App(options) =
		Options::parse_from(&["klang", "app", "--port", "9000", "--rows", "20"]);
	assert_eq!(options.host, std::net::IpAddr::from([0, 0, 0, 0]));
	assert_eq!(options.port, 9000);
	assert_eq!(options.rows, 20);
}
