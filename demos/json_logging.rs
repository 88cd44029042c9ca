//! JSON logging example
//!
//! Writes newline-delimited JSON records to a file, showing how groups and
//! bound attributes nest, then prints the file back.
//!
//! Run with: cargo run --example json_logging

use rust_logger_facade::attr;
use rust_logger_facade::prelude::*;
use serde::Serialize;
use std::time::Duration;

#[derive(Serialize)]
struct Order {
    id: u64,
    items: Vec<&'static str>,
}

fn main() -> Result<()> {
    println!("=== Rust Logger Facade - JSON Logging Example ===\n");

    let path = std::env::temp_dir().join("rust_logger_facade_demo.jsonl");
    let handler = JsonHandler::file(&path)?
        .with_min_level(Level::Debug)
        .with_timestamp_format(TimestampFormat::UnixMillis);
    let logger = Logger::from_handler(handler);

    let order = Order {
        id: 1042,
        items: vec!["book", "lamp"],
    };

    let checkout = logger
        .with([attr::string("service", "checkout")])
        .with_group("order");
    checkout.info(
        "order placed",
        [attr::any("detail", &order), attr::float64("total", 59.90)],
    );
    checkout.warn(
        "payment slow",
        [attr::group(
            "timing",
            [
                attr::duration("gateway", Duration::from_millis(1830)),
                attr::duration("db", Duration::from_millis(12)),
            ],
        )],
    );

    let ctx = Context::new().with_timeout(Duration::from_secs(5));
    logger.debug_ctx(&ctx, "within request scope", [attr::bool("retry", false)]);
    ctx.cancel();
    logger.error_ctx(&ctx, "dropped: request cancelled", []);

    println!("Records written to {}:\n", path.display());
    let content = std::fs::read_to_string(&path)?;
    for line in content.lines() {
        println!("{}", line);
    }

    std::fs::remove_file(&path)?;
    println!("\n=== Example completed successfully! ===");

    Ok(())
}
