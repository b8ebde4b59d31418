//! Example of loading logger configuration from YAML.
//!
//! `max_size` accepts a byte count or a string with a K/M/G unit.

use std::collections::HashMap;
use std::time::Duration;

const CONFIG: &str = r#"
log:
  level: warning
  path: logs
  name: service.log
  max_size: 5M
  queue_capacity: 1000
"#;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let root: HashMap<String, serde_yaml::Value> = serde_yaml::from_str(CONFIG)?;
    let config: splitlog::LoggerConfig = serde_yaml::from_value(root["log"].clone())?;

    let mut logger = splitlog::FileLogger::new(&config)?;

    splitlog::info!(logger, "This is an info message (filtered out)");
    splitlog::warning!(logger, "Resource not found: {}", "/api/users");
    splitlog::fatal!(logger, "Giving up after {} retries", 3);

    std::thread::sleep(Duration::from_secs(1));
    logger.close();

    Ok(())
}
