use tintlog::{Color, Extras, Level, Logger, LoggerError, MemorySink, Policy};

fn demo(level: Level) -> (Logger<MemorySink>, MemorySink) {
	let sink = MemorySink::new();
	let logger = Logger::with_sink("Demo", level, sink.clone()).unwrap();
	(logger, sink)
}

#[test]
fn debug_below_info_is_dropped() {
	let (logger, sink) = demo(Level::Info);
	logger.log("hi", Level::Debug, false);
	assert!(sink.is_empty());
}

#[test]
fn warning_above_info_is_printed_once_in_color() {
	let (logger, sink) = demo(Level::Info);
	logger.log("hi", Level::Warning, false);

	let lines = sink.lines();
	assert_eq!(lines.len(), 1);
	assert!(lines[0].text.contains("[Demo] [WARNING]: hi"));
	assert_eq!(lines[0].color, Some(Color::BrightYellow));
}

#[test]
fn helpers_print_even_when_minimum_is_critical() {
	let (logger, sink) = demo(Level::Critical);
	logger.debug("still here");
	logger.info("still here");
	assert_eq!(sink.count(Level::Debug), 1);
	assert_eq!(sink.count(Level::Info), 1);
}

#[test]
fn filtered_helpers_follow_level_changes() {
	let (logger, sink) = demo(Level::Error);
	let mut logger = logger.with_policy(Policy::Filtered);

	logger.info("dropped");
	logger.set_level(Level::Debug);
	logger.info("kept");

	assert_eq!(sink.texts().len(), 1);
	assert!(sink.texts()[0].ends_with("[INFO]: kept"));
}

#[test]
fn execute_swallows_failures() {
	let (logger, sink) = demo(Level::Info);
	let parsed = logger.execute("parse_port", "http", |raw: &str| raw.parse::<u16>());

	assert_eq!(parsed, None);
	assert_eq!(sink.count(Level::Error), 1);
	assert!(sink.texts().iter().any(|t| t.contains("Error executing parse_port: ")));

	let port = logger.execute("parse_port", "8080", |raw: &str| raw.parse::<u16>());
	assert_eq!(port, Some(8080));
}

#[test]
fn keyword_extras_show_up_in_line() {
	let (logger, sink) = demo(Level::Info);
	logger.log_with("request", Level::Error, false, &Extras::new().kwarg("status", 503));
	assert!(sink.texts()[0].ends_with("[ERROR]: request {status: 503}"));
}

#[test]
fn name_stays_fixed() {
	let (logger, _) = demo(Level::Info);
	assert!(matches!(
		logger.set_name("Other"),
		Err(LoggerError::ImmutableAttribute { attribute: "name", .. })
	));
	assert_eq!(logger.name(), "Demo");
}
