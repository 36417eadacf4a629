use crate::logger;

use sk_config::LogLevel;

use googletest::prelude::*;
use tempfile::TempDir;

// The logger is process-global, so this is the only test that installs it.
#[test]
fn given_log_file_when_initialized_then_records_written_without_colors() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("starter.log");

    logger::initialize(LogLevel::parse_lenient("debug"), Some(path.clone()), true).unwrap();
    log::warn!("storage unreachable");
    log::logger().flush();

    let contents = std::fs::read_to_string(&path).unwrap();
    assert_that!(contents.as_str(), contains_substring("WARN"));
    assert_that!(contents.as_str(), contains_substring("storage unreachable"));
    assert_that!(contents.as_str(), not(contains_substring("\u{1b}[")));
}
