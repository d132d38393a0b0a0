//! Basic facade usage example
//!
//! Shows a leveled log call and the pretty-print helper.
//!
//! Run with: cargo run --example basic_usage

use f451_logger::prelude::*;
use serde_json::json;

fn main() -> Result<()> {
    let logger = LogFacade::builder().level(LogLevel::Info).build()?;

    println!("\n====== [Demo of f451 Labs Logger] ======");
    println!("Showing log message:");
    logger.log(LogLevel::Info, "Hello world!")?;
    logger.log_debug("Debug message (hidden at INFO)")?;

    println!("\nShowing pretty-print:");
    logger.debug("Hello world!")?;
    logger.debug(&json!({ "sensor": "bme280", "readings": [21.5, 21.7] }))?;

    println!("\nChanging level to DEBUG:");
    logger.set_level(LogLevel::Debug);
    logger.log_debug("Debug message (visible now)")?;

    println!("=============== [End of Demo] ===============\n");

    Ok(())
}
