//! Property-based tests for csctrl_logger using proptest

use csctrl_logger::prelude::*;
use csctrl_logger::{map_raw, map_severity};
use proptest::prelude::*;

fn any_severity() -> impl Strategy<Value = Severity> {
    prop_oneof![
        Just(Severity::Trace),
        Just(Severity::Debug),
        Just(Severity::Info),
        Just(Severity::Warn),
        Just(Severity::Error),
        Just(Severity::Critical),
    ]
}

// ============================================================================
// Level mapping
// ============================================================================

proptest! {
    /// The mapping preserves the order of severities
    #[test]
    fn test_mapping_order_preserving(a in any_severity(), b in any_severity()) {
        prop_assert_eq!(a.cmp(&b), map_severity(a).cmp(&map_severity(b)));
    }

    /// Raw discriminants never fail and fall back to Info outside the enum
    #[test]
    fn test_raw_mapping_total(raw in any::<i64>()) {
        let level = map_raw(raw);
        if (0..=5).contains(&raw) {
            prop_assert_eq!(level as i64, raw);
        } else {
            prop_assert_eq!(level, SinkLevel::Info);
        }
    }

    /// Severity string conversions roundtrip
    #[test]
    fn test_severity_str_roundtrip(severity in any_severity()) {
        let parsed: Severity = severity.to_str().parse().unwrap();
        prop_assert_eq!(severity, parsed);
    }
}

// ============================================================================
// Rendering
// ============================================================================

proptest! {
    /// Any message renders as exactly one line ending in the (escaped) message
    #[test]
    fn test_single_line_per_record(message in "(\\PC|[\n\r\t])*", severity in any_severity()) {
        let sink = MemorySink::new();
        let buffer = sink.buffer();
        let logger = Logger::builder()
            .sink(sink)
            .build_mode(BuildMode::Shipping)
            .build();

        logger.log(severity, message.clone());

        let lines = buffer.lines();
        prop_assert_eq!(lines.len(), 1);
        prop_assert!(!lines[0].contains('\n'));
        let escaped = message
            .replace('\n', "\\n")
            .replace('\r', "\\r")
            .replace('\t', "\\t");
        let suffix = format!(": {}", escaped);
        prop_assert!(lines[0].ends_with(&suffix));
    }

    /// Records below the threshold never reach sinks
    #[test]
    fn test_threshold_filters(threshold in any_severity(), severity in any_severity()) {
        let sink = MemorySink::new();
        let buffer = sink.buffer();
        let logger = Logger::builder()
            .sink(sink)
            .min_level(threshold)
            .build_mode(BuildMode::Shipping)
            .build();

        logger.log(severity, "probe");

        prop_assert_eq!(buffer.len(), usize::from(severity >= threshold));
    }
}
