#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use shadegen::{PaletteGenerator, Rgb, SHADE_COUNT, to_hsl};

/// A color spelled in one of the accepted grammars.
#[derive(Debug, Arbitrary)]
enum Literal {
    Hex { upper: bool, hash: bool },
    Short { upper: bool },
    Functional { pad: u8 },
}

#[derive(Debug, Arbitrary)]
struct Input {
    channels: [u8; 3],
    literal: Literal,
    stops: [u8; SHADE_COUNT],
    falloff: u8,
}

fn spell(rgb: Rgb, literal: &Literal) -> (String, Rgb) {
    match *literal {
        Literal::Hex { upper, hash } => {
            let hex = rgb.to_hex();
            let body = if upper { hex[1..].to_ascii_uppercase() } else { hex[1..].to_string() };
            (if hash { format!("#{body}") } else { body }, rgb)
        }
        Literal::Short { upper } => {
            let short = Rgb::new(rgb.r & 0x0f, rgb.g & 0x0f, rgb.b & 0x0f);
            let body = format!("{:x}{:x}{:x}", short.r, short.g, short.b);
            let body = if upper { body.to_ascii_uppercase() } else { body };
            let expanded = Rgb::new(short.r * 17, short.g * 17, short.b * 17);
            (format!("#{body}"), expanded)
        }
        Literal::Functional { pad } => {
            let pad = " ".repeat(usize::from(pad % 4));
            (
                format!("rgb({pad}{},{pad}{}{pad},{}{pad})", rgb.r, rgb.g, rgb.b),
                rgb,
            )
        }
    }
}

fuzz_target!(|input: Input| {
    let rgb = Rgb::from(input.channels);
    let (text, expected) = spell(rgb, &input.literal);

    let default = PaletteGenerator::new();
    let generated = default.generate(&text).expect("spelled literal must parse");
    assert!(generated.base_color().max_channel_delta(expected) <= 1);

    // Arbitrary stop tables: invalid ones must be rejected, valid ones must
    // still anchor the input.
    let mut stops = input.stops.map(|s| f64::from(s % 101));
    stops.sort_by(|a, b| b.total_cmp(a));
    let falloff = f64::from(input.falloff) / 16.0;
    let Ok(custom) = PaletteGenerator::builder()
        .stops(stops)
        .edge_falloff(falloff)
        .build()
    else {
        return;
    };

    let generated = custom.generate_from_rgb(expected);
    assert!(generated.base_index() < SHADE_COUNT);
    assert!(generated.base_color().max_channel_delta(expected) <= 1);
    let base_l = to_hsl(expected).l;
    assert!(custom.ramp().anchor_index(base_l) == generated.base_index());
});
