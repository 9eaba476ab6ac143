// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Jonathan D. A. Jewell <hyperpolymath>

#![no_main]

use libfuzzer_sys::fuzz_target;
use resume_sorter::extract::plain::salvage_text;
use resume_sorter::scorer::score;
use resume_sorter::Taxonomy;

fuzz_target!(|data: &[u8]| {
    let Ok(taxonomy) = Taxonomy::builtin() else {
        return;
    };

    // Arbitrary bytes through the legacy .doc salvage path, then scoring
    let text = salvage_text(data);
    let first = score(&text, &taxonomy);
    assert_eq!(first, score(&text, &taxonomy));

    if let Some(best) = first.best() {
        assert!(taxonomy.contains(&best.role));
        assert!(best.score > 0);
    }
});
