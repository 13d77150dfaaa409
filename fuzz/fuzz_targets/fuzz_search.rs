#![no_main]

use libfuzzer_sys::fuzz_target;
use selkit_fuzzy::{Fragment, highlight_spans, search};

fuzz_target!(|input: (&str, &str)| {
    let (query, target) = input;
    let result = search(query, target);

    assert_eq!(result.matches.len(), target.chars().count());
    if result.score == 0 {
        assert!(result.matches.iter().all(|m| !m));
    } else {
        assert_eq!(
            result.matches.iter().filter(|m| **m).count(),
            query.chars().count()
        );
    }

    let rebuilt: String = highlight_spans(&result)
        .iter()
        .map(Fragment::as_str)
        .collect();
    assert_eq!(rebuilt, target);
});
