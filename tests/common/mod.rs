extern crate bandit_policies;
extern crate regex;

use std::fs::File;
use std::io::Read;
use std::path::Path;

pub const NUM_SELECTS: u32 = 100_000;
const EPSILON: u32 = (NUM_SELECTS as f64 * 0.005) as u32;

pub fn abs_select(prop: f64) -> u32 {
    (f64::from(NUM_SELECTS) * prop) as u32
}

pub fn read_file_content(path: &str) -> String {
    let mut file = File::open(Path::new(path)).unwrap();
    let mut log_content = String::new();
    file.read_to_string(&mut log_content).unwrap();
    log_content
}

pub fn remove_if_exists(path: &str) {
    let file = Path::new(path);
    if file.exists() {
        std::fs::remove_file(file).unwrap();
    }
}

pub fn assert_prop(expected_count: u32, v: u32, action: usize) {
    assert!(
        expected_count - EPSILON < v && v < expected_count + EPSILON,
        "expected {}+-{}, got {} action {}",
        expected_count,
        EPSILON,
        v,
        action
    );
}
