//! Basic logger usage example
//!
//! Demonstrates leveled logging with typed attributes, derived loggers and
//! the formatting macros over the text handler.
//!
//! Run with: cargo run --example basic_usage

use rust_logger_facade::prelude::*;
use rust_logger_facade::{attr, info, warn};
use std::time::Duration;

fn main() -> Result<()> {
    println!("=== Rust Logger Facade - Basic Usage Example ===\n");

    let logger = Logger::from_handler(TextHandler::console().with_min_level(Level::Debug));

    println!("1. Logging at different levels:");
    logger.debug("This is a debug message", []);
    logger.info("This is an info message", []);
    logger.warn("This is a warning message", []);
    logger.error("This is an error message", []);

    println!("\n2. Typed attributes:");
    logger.info(
        "started",
        [
            attr::string("user", "alice"),
            attr::int("retries", 3),
            attr::bool("cached", false),
            attr::duration("warmup", Duration::from_millis(250)),
            attr::group("build", [attr::string("profile", "release"), attr::float64("ratio", 0.75)]),
        ],
    );

    println!("\n3. Derived loggers:");
    let request_log = logger
        .with([attr::string("service", "checkout")])
        .with_group("req");
    request_log.info("request handled", [attr::int("status", 200)]);
    logger.info("parent logger is unchanged", []);

    println!("\n4. Minimum level and macros:");
    let quiet = Logger::from_handler(TextHandler::console().with_min_level(Level::Warn));
    println!(
        "   INFO enabled: {}",
        quiet.enabled(&Context::background(), Level::Info)
    );
    info!(quiet, "Info message (hidden)");
    warn!(quiet, "Retry {} of {} (visible)", 1, 3);

    println!("\n5. Configured from JSON:");
    let options = HandlerOptions::from_json(r#"{ "level": "info", "colors": false }"#)?;
    options.build_logger().info("built from options", []);

    println!("\n=== Example completed successfully! ===");

    Ok(())
}
