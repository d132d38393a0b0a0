//! File logging example
//!
//! Configures the facade from a settings mapping, logs to console and file,
//! then moves the file sink to another file.
//!
//! Run with: cargo run --example file_logging

use f451_logger::prelude::*;

fn main() -> Result<()> {
    println!("=== f451 Logger - File Logging Example ===\n");

    let settings = LoggerConfig::from_json_str(
        r#"{ "LOGNAME": "f451-demo", "LOGLVL": 10, "LOGFILE": "application.log" }"#,
    )?;

    // The discrete option wins over LOGLVL from the settings
    let logger = LogFacade::builder()
        .config(settings)
        .level(LogLevel::Info)
        .build()?;

    println!("1. Logging to both console and file:");
    logger.log_info("Application started")?;
    logger.log_debug("Loading configuration...")?;
    logger.log_warning("Using default settings for some options")?;
    logger.log_error("Failed to load optional plugin")?;

    println!("\n2. Moving the file sink to 'errors.log' at ERROR:");
    logger.set_file(LogLevel::Error, "errors.log")?;
    logger.log_info("Console only")?;
    logger.log_error("Console and errors.log")?;

    logger.flush()?;

    println!("\n=== Example completed successfully! ===");
    println!("Check 'application.log' and 'errors.log' for the file output");

    Ok(())
}
