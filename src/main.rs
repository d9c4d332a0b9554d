// ══════════════════════════════════════════════════════════════════════════════
// TINTLOG DEMO
// ══════════════════════════════════════════════════════════════════════════════
//
// Builds a logger from the command line and walks through everything it can do:
// every level helper, a filtered and an unfiltered `log`, extra values, and a
// successful plus a failing `execute`.

use clap::Parser;
use tintlog::{Color, Extras, Level, Logger, LoggerError, Policy, parse_color};

/// Show off a colored console logger
#[derive(Parser)]
#[command(name = "tintlog")]
#[command(version)]
#[command(about = "Print a sample of every log level", long_about = None)]
struct Cli {
	/// Name shown in every line
	#[arg(short, long, default_value = "DemoLogger")]
	name: String,

	/// Minimum level for filtered output (name or rank)
	#[arg(short, long, default_value = "info")]
	level: Level,

	/// Color override, e.g. `warning=cyan` (repeatable)
	#[arg(short, long = "color", value_name = "LEVEL=COLOR", value_parser = parse_override)]
	colors: Vec<(Level, Color)>,

	/// Make the level helpers respect the minimum level too
	#[arg(short, long)]
	filtered: bool,
}

fn parse_override(raw: &str) -> Result<(Level, Color), LoggerError> {
	let (level, color) = raw
		.split_once('=')
		.ok_or_else(|| LoggerError::UnknownColor(raw.to_string()))?;
	Ok((level.parse()?, parse_color(color)?))
}

fn demonstrate(cli: Cli) -> Result<(), LoggerError> {
	let policy = if cli.filtered { Policy::Filtered } else { Policy::AlwaysEmit };
	let mut logger = Logger::create(cli.name, cli.level)?.with_policy(policy);
	for (level, color) in cli.colors {
		logger.set_color(level, color);
	}

	logger.info(format!("Initialized {}", logger));

	logger.debug("This is a debug message - useful for detailed debugging information");
	logger.info("This is an info message - general information about program execution");
	logger.warning("This is a warning message - indicating potential issues");
	logger.error("This is an error message - something has gone wrong");
	logger.critical("This is a critical message - severe error that needs immediate attention");
	logger.silent("This is a silent message - printed without color");

	logger.log("This message is below the minimum level and won't be logged.", Level::Silent, false);
	logger.log("This message is logged because it is forced.", Level::Debug, true);
	logger.log_with(
		"Messages can carry extra values",
		Level::Warning,
		false,
		&Extras::new().arg(42).kwarg("user", "demo"),
	);

	logger.execute("add", (1, 2), |(a, b)| Ok::<_, String>(a + b));
	logger.execute("divide", (1, 0), |(a, b): (i32, i32)| a.checked_div(b).ok_or("division by zero"));

	if let Err(e) = logger.set_name("renamed") {
		logger.exception(&e, "Renaming a logger is not allowed", false);
	}

	Ok(())
}

fn main() {
	let cli = Cli::parse();

	if let Err(e) = demonstrate(cli) {
		match Logger::create("ErrorHandler", Level::Error) {
			Ok(handler) => handler.critical(format!("Failed to run demonstration: {}", e)),
			Err(_) => eprintln!("Failed to run demonstration: {}", e),
		}
		std::process::exit(1);
	}
}
