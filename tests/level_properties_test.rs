use proptest::prelude::*;
use rask_logger::domain::{LEVEL_NAMES, priority_of};
use rask_logger::logger::MockWriter;
use rask_logger::{Context, LevelAdapter, LevelLogger, LogError, Logger, Priority};

fn level_name() -> impl Strategy<Value = &'static str> {
    prop::sample::select(LEVEL_NAMES.to_vec())
}

proptest! {
    #[test]
    fn unknown_names_are_rejected_without_dispatch(name in ".*") {
        prop_assume!(!LEVEL_NAMES.contains(&name.as_str()));

        let writer = MockWriter::new();
        let mut logger = Logger::new();
        logger.add_writer(writer.clone());

        let result = LevelAdapter::new(&logger).log(&name, "x", &Context::new());

        let rejected = matches!(result, Err(LogError::InvalidLevel { ref level }) if *level == name);
        prop_assert!(rejected);
        prop_assert!(writer.is_empty());
    }

    #[test]
    fn known_names_dispatch_once(name in level_name(), message in "[a-zA-Z0-9 ]{0,32}") {
        let writer = MockWriter::new();
        let mut logger = Logger::new();
        logger.add_writer(writer.clone());

        LevelAdapter::new(&logger).log(name, &message, &Context::new()).unwrap();

        let events = writer.events();
        prop_assert_eq!(events.len(), 1);
        prop_assert_eq!(events[0].priority, priority_of(name).unwrap());
        prop_assert_eq!(&events[0].message, &message);
    }

    #[test]
    fn lookup_is_pure(name in level_name()) {
        prop_assert_eq!(priority_of(name).unwrap(), priority_of(name).unwrap());
        prop_assert_eq!(priority_of(name).unwrap().level_name(), name);
    }

    #[test]
    fn priority_order_follows_numeric_value(a in 0u8..8, b in 0u8..8) {
        let pa = Priority::try_from(a).unwrap();
        let pb = Priority::try_from(b).unwrap();
        prop_assert_eq!(pa.cmp(&pb), a.cmp(&b));
    }
}
