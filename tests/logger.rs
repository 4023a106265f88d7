use homedeck::config::LoggingConfig;
use homedeck::logger::{build_dispatch, LogBuffer};

#[test]
fn test_log_buffer_newest_first() {
    let buffer = LogBuffer::new();
    assert!(buffer.is_empty());

    buffer.push("first".to_string());
    buffer.push("second".to_string());

    assert_eq!(buffer.len(), 2);
    assert_eq!(buffer.get_logs(), vec!["second".to_string(), "first".to_string()]);

    buffer.clear();
    assert!(buffer.is_empty());
}

#[test]
fn test_log_buffer_drops_oldest_when_full() {
    let buffer = LogBuffer::with_capacity(3);
    for i in 0..5 {
        buffer.push(format!("line {i}"));
    }

    assert_eq!(buffer.len(), 3);
    assert_eq!(buffer.get_logs(), vec!["line 4", "line 3", "line 2"]);
}

#[test]
fn test_log_buffer_clones_share_entries() {
    let buffer = LogBuffer::new();
    let clone = buffer.clone();
    clone.push("shared".to_string());
    assert_eq!(buffer.len(), 1);
}

#[test]
fn test_dispatch_feeds_buffer() {
    let buffer = LogBuffer::new();
    let config = LoggingConfig::default();

    let (level, logger) = build_dispatch(&config, &buffer).unwrap().into_log();
    assert_eq!(level, log::LevelFilter::Info);

    logger.log(
        &log::Record::builder()
            .args(format_args!("Task: added 'Buy milk'"))
            .level(log::Level::Info)
            .target("homedeck::store")
            .build(),
    );
    logger.log(
        &log::Record::builder()
            .args(format_args!("too chatty"))
            .level(log::Level::Trace)
            .target("homedeck::store")
            .build(),
    );

    let logs = buffer.get_logs();
    assert_eq!(logs.len(), 1);
    assert!(logs[0].contains("INFO"));
    assert!(logs[0].contains("Task: added 'Buy milk'"));
}

#[test]
fn test_dispatch_rejects_bad_level() {
    let config = LoggingConfig {
        enabled: false,
        level: "loud".to_string(),
    };
    assert!(build_dispatch(&config, &LogBuffer::new()).is_err());
}

#[test]
fn test_log_buffer_stays_bounded_under_volume() {
    let buffer = LogBuffer::new();
    for i in 0..10_000 {
        buffer.push(format!("line {i}"));
    }

    let logs = buffer.get_logs();
    assert_eq!(logs.len(), 500);
    assert_eq!(logs[0], "line 9999");
    assert_eq!(logs[499], "line 9500");
}
