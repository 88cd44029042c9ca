//! Property-based tests for rust_logger_facade using proptest

mod common;

use common::RecordingHandler;
use proptest::prelude::*;
use rust_logger_facade::attr;
use rust_logger_facade::prelude::*;

fn any_level() -> impl Strategy<Value = Level> {
    prop_oneof![
        Just(Level::Debug),
        Just(Level::Info),
        Just(Level::Warn),
        Just(Level::Error),
    ]
}

fn any_scalar_attr() -> impl Strategy<Value = Attr> {
    prop_oneof![
        (".{0,12}", ".{0,24}").prop_map(|(k, v)| attr::string(k, v)),
        (".{0,12}", any::<bool>()).prop_map(|(k, v)| attr::bool(k, v)),
        (".{0,12}", any::<i64>()).prop_map(|(k, v)| attr::int(k, v)),
        (".{0,12}", -1.0e9f64..1.0e9).prop_map(|(k, v)| attr::float64(k, v)),
        (".{0,12}", 0u64..10_000_000).prop_map(|(k, ms)| attr::duration(
            k,
            std::time::Duration::from_millis(ms)
        )),
    ]
}

fn any_attr() -> impl Strategy<Value = Attr> {
    any_scalar_attr().prop_recursive(2, 16, 4, |inner| {
        ("[a-z]{1,8}", prop::collection::vec(inner, 0..4))
            .prop_map(|(k, attrs)| attr::group(k, attrs))
    })
}

// ============================================================================
// Level Tests
// ============================================================================

proptest! {
    /// Level string conversions roundtrip, in any case
    #[test]
    fn test_level_str_roundtrip(level in any_level()) {
        let parsed: Level = level.to_str().parse().unwrap();
        prop_assert_eq!(level, parsed);

        let lower: Level = level.to_str().to_lowercase().parse().unwrap();
        prop_assert_eq!(level, lower);
    }

    /// Level ordering agrees with discriminants
    #[test]
    fn test_level_ordering(level1 in any_level(), level2 in any_level()) {
        let val1 = level1 as u8;
        let val2 = level2 as u8;

        prop_assert_eq!(level1 <= level2, val1 <= val2);
        prop_assert_eq!(level1 < level2, val1 < val2);
    }

    /// Unknown level names are rejected
    #[test]
    fn test_level_parse_rejects_garbage(s in "[a-z]{6,12}") {
        prop_assume!(s != "warning");
        prop_assert!(s.parse::<Level>().is_err());
    }
}

// ============================================================================
// Logger Tests
// ============================================================================

proptest! {
    /// A record reaches the handler iff its level is at or above the minimum
    #[test]
    fn test_filtering_follows_handler(min in any_level(), level in any_level()) {
        let (handler, journal) = RecordingHandler::with_min_level(Some(min));
        let logger = Logger::from_handler(handler);

        logger.log(level, "probe", []);

        prop_assert_eq!(journal.handle_count(), usize::from(level >= min));
    }

    /// Attributes arrive unchanged and in call order
    #[test]
    fn test_attrs_preserved(
        level in any_level(),
        message in ".{0,64}",
        attrs in prop::collection::vec(any_attr(), 0..8),
    ) {
        let (handler, journal) = RecordingHandler::new();
        let logger = Logger::from_handler(handler);

        logger.log(level, message.clone(), attrs.clone());

        let records = journal.records();
        prop_assert_eq!(records.len(), 1);
        prop_assert_eq!(&records[0].record.message, &message);
        prop_assert_eq!(records[0].record.level, level);
        prop_assert_eq!(records[0].record.attrs(), attrs.as_slice());
    }

    /// `with` derives exactly when attributes are supplied
    #[test]
    fn test_with_derives_only_when_non_empty(
        attrs in prop::collection::vec(any_scalar_attr(), 0..5),
    ) {
        let (handler, journal) = RecordingHandler::new();
        let logger = Logger::from_handler(handler);

        let derived = logger.with(attrs.clone());

        prop_assert_eq!(derived.ptr_eq(&logger), attrs.is_empty());
        let calls = journal.with_attrs_calls.lock().clone();
        if attrs.is_empty() {
            prop_assert!(calls.is_empty());
        } else {
            prop_assert_eq!(calls, vec![attrs]);
        }
    }

    /// `with_group` derives exactly when the name is non-empty
    #[test]
    fn test_with_group_derives_only_when_named(name in "[a-z]{0,6}") {
        let (handler, journal) = RecordingHandler::new();
        let logger = Logger::from_handler(handler);

        let derived = logger.with_group(&name);

        prop_assert_eq!(derived.ptr_eq(&logger), name.is_empty());
        prop_assert_eq!(journal.with_group_calls.lock().len(), usize::from(!name.is_empty()));
    }
}

// ============================================================================
// Bundled Handler Tests
// ============================================================================

proptest! {
    /// JSON handler output is one parseable line whose record fields survive any attrs
    #[test]
    fn test_json_output_is_one_line(
        message in ".{0,64}",
        attrs in prop::collection::vec(any_attr(), 0..6),
    ) {
        let handler = JsonHandler::to_writer(std::io::sink());
        let record = Record::new(chrono::Utc::now(), Level::Info, message.clone()).with_attrs(attrs);

        let line = serde_json::to_string(&handler.to_json(&record)).unwrap();
        prop_assert!(!line.contains('\n'));

        let parsed: serde_json::Value = serde_json::from_str(&line).unwrap();
        prop_assert_eq!(parsed["msg"].as_str(), Some(message.as_str()));
        prop_assert_eq!(parsed["level"].as_str(), Some("INFO"));
    }

    /// Text handler never splits a record across lines
    #[test]
    fn test_text_output_is_one_line(
        message in ".{0,64}",
        attrs in prop::collection::vec(any_attr(), 0..6),
    ) {
        let handler = TextHandler::to_writer(std::io::sink());
        let record = Record::new(chrono::Utc::now(), Level::Warn, message).with_attrs(attrs);

        let line = handler.format_record(&record);
        prop_assert!(!line.contains('\n'));
        prop_assert!(!line.contains('\r'));
    }
}
