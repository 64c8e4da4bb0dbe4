use meshscope::config::Config;
use meshscope::watch::{RepeatTracker, Watcher};

#[test]
fn sequential_counts_per_key() {
    let mut tracker = RepeatTracker::new();
    let counts: Vec<u64> = (0..4).map(|_| tracker.observe("A1B2C3D4E5F60718")).collect();
    assert_eq!(counts, vec![1, 2, 3, 4]);
}

#[test]
fn distinct_keys_start_fresh() {
    let mut tracker = RepeatTracker::new();
    assert_eq!(tracker.observe("one"), 1);
    assert_eq!(tracker.observe("two"), 1);
    assert_eq!(tracker.observe("three"), 1);
    assert_eq!(tracker.observe("two"), 2);
    assert_eq!(tracker.unique(), 3);
}

#[test]
fn repeat_flag_appears_on_second_sighting() {
    let mut watcher = Watcher::new(Config::default());
    let line = r#"{"type":"rf","hex":"15021101029988","fp":"D00DFEED"}"#;

    let first = watcher.process_line(line).expect("first report");
    assert!(first.contains("seen:1"));
    assert!(!first.contains("repeat:"));

    let second = watcher.process_line(line).expect("second report");
    assert!(second.contains("seen:2"));
    assert!(second.contains("repeat: YES (likely via repeater)"));
}

#[test]
fn placeholder_fingerprints_share_one_counter() {
    // Records missing `fp` all fall into the placeholder bucket; that is the
    // documented behavior, not a bug.
    let mut watcher = Watcher::new(Config::default());
    let line = r#"{"type":"rf","hex":"42"}"#;
    assert!(watcher.process_line(line).unwrap().contains("seen:1"));
    assert!(watcher.process_line(line).unwrap().contains("seen:2"));
}
