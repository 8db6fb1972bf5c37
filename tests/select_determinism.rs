use randres::{parse, pick, select, WeightedEntry, DEFAULT_RESOLUTIONS};

#[test]
fn same_seed_same_result() {
    let entries = parse(DEFAULT_RESOLUTIONS);
    let a = select(&entries, false, 42);
    let b = select(&entries, false, 42);
    assert_eq!(a, b);
}

#[test]
fn pick_matches_parse_then_select() {
    for seed in 0..50 {
        assert_eq!(
            pick(DEFAULT_RESOLUTIONS, true, seed),
            select(&parse(DEFAULT_RESOLUTIONS), true, seed)
        );
    }
}

#[test]
fn fallback_for_empty_input() {
    let r = select(&[], false, 0);
    assert_eq!(
        r.into_tuple(),
        (1024, 1024, "1024x1024 (fallback)".to_string())
    );
}

#[test]
fn unparseable_text_falls_back() {
    let r = pick("nothing useful here", false, 123);
    assert!(r.fallback);
    assert_eq!((r.width, r.height), (1024, 1024));
}

#[test]
fn inversion_swaps_after_selection() {
    let r = select(&[WeightedEntry::new(800, 600, 1)], true, 0);
    assert_eq!(r.into_tuple(), (600, 800, "800x600 (inverted)".to_string()));
}

#[test]
fn inversion_does_not_change_the_draw() {
    let entries = parse(DEFAULT_RESOLUTIONS);
    for seed in 0..100 {
        let plain = select(&entries, false, seed);
        let inv = select(&entries, true, seed);
        assert_eq!((plain.width, plain.height), (inv.height, inv.width));
        assert_eq!(format!("{} (inverted)", plain.description), inv.description);
    }
}

#[test]
fn zero_weight_entries_are_never_drawn() {
    let entries = [
        WeightedEntry::new(111, 111, 0),
        WeightedEntry::new(222, 222, 1),
        WeightedEntry::new(333, 333, 0),
    ];
    for seed in 0..200 {
        let r = select(&entries, false, seed);
        assert_eq!(r.description, "222x222");
    }
}

#[test]
fn different_seeds_eventually_differ() {
    let entries = parse("1x1\n2x2\n3x3\n4x4");
    let first = select(&entries, false, 0);
    assert!((1..100).any(|s| select(&entries, false, s) != first));
}

#[test]
fn concurrent_calls_are_isolated() {
    let entries = parse(DEFAULT_RESOLUTIONS);
    let expected: Vec<_> = (0..64).map(|s| select(&entries, false, s)).collect();
    let handles: Vec<_> = (0..4)
        .map(|_| {
            let entries = entries.clone();
            std::thread::spawn(move || {
                (0..64).map(|s| select(&entries, false, s)).collect::<Vec<_>>()
            })
        })
        .collect();
    for h in handles {
        assert_eq!(h.join().unwrap(), expected);
    }
}
