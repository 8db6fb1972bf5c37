use honggfuzz::fuzz;

fn main() {
    loop {
        fuzz!(|data: &[u8]| {
            let Some((&flags, rest)) = data.split_first() else {
                return;
            };
            let text = String::from_utf8_lossy(rest);
            let entries = randres::parse(&text);
            let r = randres::select(&entries, flags & 1 == 1, flags as u64);
            assert_eq!(r.inverted, flags & 1 == 1);
            if entries.iter().all(|e| e.weight == 0) {
                assert!(r.fallback);
            }
        });
    }
}
