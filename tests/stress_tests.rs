//! Stress tests for concurrent logging
//!
//! These tests verify:
//! - Lines written from many threads through one logger never interleave
//! - Common attributes stay intact under concurrent use
//! - The file sink keeps every line under load

use rust_field_logger::prelude::*;
use std::sync::Arc;
use std::thread;
use tempfile::TempDir;

const THREADS: usize = 8;
const PER_THREAD: usize = 250;

/// Test that concurrent JSON lines arrive whole and carry their own attributes
#[test]
fn test_concurrent_lines_do_not_interleave() {
    let capture = MemoryAppender::new();
    let logger = Arc::new(
        Logger::builder()
            .module("stress")
            .format("json")
            .min_level(LogLevel::Trace)
            .appender(capture.clone())
            .build()
            .expect("Failed to create logger"),
    );

    let handles: Vec<_> = (0..THREADS)
        .map(|t| {
            let logger = Arc::clone(&logger);
            thread::spawn(move || {
                for i in 0..PER_THREAD {
                    let attrs = Attributes::new()
                        .with_field("thread", t as i64)
                        .with_field("seq", i as i64);
                    logger.info("tick", "payload", Some(&attrs), None);
                }
            })
        })
        .collect();

    for handle in handles {
        handle.join().expect("Logging thread panicked");
    }

    let lines = capture.lines();
    assert_eq!(lines.len(), THREADS * PER_THREAD);

    let mut per_thread = vec![0usize; THREADS];
    for line in &lines {
        let event: serde_json::Value =
            serde_json::from_str(line).expect("Interleaved or truncated line");
        assert_eq!(event["module"], "stress");
        per_thread[event["thread"].as_u64().unwrap() as usize] += 1;
    }
    assert!(per_thread.iter().all(|&n| n == PER_THREAD));
    assert_eq!(logger.metrics().total_logged(), (THREADS * PER_THREAD) as u64);
}

/// Test that the file sink keeps every line written from many threads
#[test]
fn test_concurrent_file_logging() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let config = LoggerConfig::new()
        .with_module("stress_file")
        .with_output(Output::File)
        .with_log_dir(temp_dir.path());
    let logger = Arc::new(Logger::new(&config).expect("Failed to create logger"));

    let handles: Vec<_> = (0..THREADS)
        .map(|t| {
            let logger = Arc::clone(&logger);
            thread::spawn(move || {
                for i in 0..PER_THREAD {
                    logger.error(&format!("thread {} message {}", t, i), "", None, None);
                }
            })
        })
        .collect();

    for handle in handles {
        handle.join().expect("Logging thread panicked");
    }
    logger.flush().expect("Failed to flush");

    let path = rust_field_logger::appenders::file::daily_path(temp_dir.path(), "stress_file");
    let content = std::fs::read_to_string(path).expect("Failed to read log file");
    let lines: Vec<&str> = content.lines().collect();

    assert_eq!(lines.len(), THREADS * PER_THREAD);
    assert!(lines
        .iter()
        .all(|line| line.contains("stress_file.error message: thread ")));
}
