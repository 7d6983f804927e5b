use std::fs::OpenOptions;
use std::io::Write;
use std::path::PathBuf;
use std::time;

/// Index of the largest value, the first one on ties. `None` only for an empty slice.
pub(crate) fn select_argmax(collection: &[f64]) -> Option<usize> {
    let mut current_max_position = None;
    let mut current_max_value = f64::NEG_INFINITY;
    for (i, x) in collection.iter().enumerate() {
        if current_max_position.is_none() || current_max_value < *x {
            current_max_value = *x;
            current_max_position = Some(i);
        }
    }
    current_max_position
}

pub(crate) fn log_command(cmd: &str, action: usize) -> String {
    format!("{};{};{}", cmd, action, timestamp())
}

pub(crate) fn timestamp() -> u64 {
    match time::SystemTime::now().duration_since(time::UNIX_EPOCH) {
        Ok(since_epoch) => {
            since_epoch.as_secs() * 1_000 + u64::from(since_epoch.subsec_millis())
        }
        Err(_) => 0,
    }
}

pub(crate) fn log(line: &str, path: &Option<PathBuf>) {
    let Some(path) = path else {
        return;
    };

    match OpenOptions::new().append(true).create(true).open(path) {
        Ok(mut file) => {
            if writeln!(file, "{line}").is_err() {
                println!("writing log failed {line}");
            }
        }
        Err(_) => println!("logging failed: {line}"),
    }
}
