#![no_main]

use libfuzzer_sys::fuzz_target;
use shadegen::{SHADE_COUNT, generate_palette, parse, to_hsl};

fuzz_target!(|data: &[u8]| {
    let Ok(text) = std::str::from_utf8(data) else {
        return;
    };
    if text.len() > 256 {
        return;
    }

    // parse must never panic.
    let parsed = parse(text);

    // The pipeline accepts exactly what the parser accepts.
    let generated = generate_palette(text);
    assert_eq!(parsed.is_ok(), generated.is_ok());

    let (Ok(rgb), Ok(generated)) = (parsed, generated) else {
        return;
    };

    // Bare hex is only a color with all six digits.
    let trimmed = text.trim();
    if trimmed.bytes().all(|b| b.is_ascii_hexdigit()) {
        assert_eq!(trimmed.len(), 6);
    }

    // Accepted literals re-parse from their canonical form.
    assert_eq!(parse(&rgb.to_hex()).ok(), Some(rgb));

    assert!(generated.base_index() < SHADE_COUNT);
    assert!(generated.base_color().max_channel_delta(rgb) <= 1);

    for pair in generated.palette().as_array().windows(2) {
        assert!(to_hsl(pair[0]).l >= to_hsl(pair[1]).l);
    }
});
