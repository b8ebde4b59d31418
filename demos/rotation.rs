use std::time::Duration;

use splitlog::{FileLogger, LoggerConfig};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let temp_dir = tempfile::tempdir()?;

    let config = LoggerConfig::new("test.log")
        .with_path(temp_dir.path())
        .with_level("debug")
        .with_max_size(1024); // 1KB

    let mut logger = FileLogger::new(&config)?;

    for i in 0..100 {
        splitlog::info!(logger, "Log message number {}", i);
        if i % 25 == 0 {
            splitlog::error!(logger, "Error message at iteration {}", i);
        }
        std::thread::sleep(Duration::from_millis(5));
    }

    std::thread::sleep(Duration::from_secs(1));
    logger.close();

    let mut names: Vec<String> = std::fs::read_dir(temp_dir.path())?
        .filter_map(|e| e.ok())
        .map(|e| e.file_name().to_string_lossy().into_owned())
        .collect();
    names.sort();
    for name in names {
        println!("{}", name);
    }

    Ok(())
}
