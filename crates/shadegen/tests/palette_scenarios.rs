use shadegen::{
    FormatIssue, GeneratedPalette, PaletteGenerator, RampConfigError, Rgb, SHADE_COUNT,
    generate_palette, parse, to_hsl,
};

fn lightness(generated: &GeneratedPalette) -> Vec<f64> {
    generated.palette().iter().map(|c| to_hsl(*c).l).collect()
}

#[test]
fn test_reference_blue_scenario() {
    let generated = generate_palette("#228be6").unwrap();
    let input = parse("#228be6").unwrap();
    let base_hue = to_hsl(input).h;
    assert!((base_hue - 208.0).abs() < 0.5, "hue was {base_hue}");

    assert_eq!(generated.palette().len(), SHADE_COUNT);
    assert_eq!(generated.base_color(), input);
    assert_eq!(generated.palette().to_hex()[generated.base_index()], "#228be6");

    let l = lightness(&generated);
    assert!(l.windows(2).all(|w| w[0] > w[1]), "{l:?}");

    // Every shade but the near-white one is chromatic enough to pin the hue.
    for shade in generated.palette().iter().skip(1) {
        let hue = to_hsl(*shade).h;
        assert!((hue - base_hue).abs() <= 1.0, "{shade} has hue {hue}");
    }
}

#[test]
fn test_canonical_rejections() {
    let cases = [
        ("", FormatIssue::Empty),
        ("notacolor", FormatIssue::Unrecognized),
        ("#12", FormatIssue::InvalidLength),
        ("abc", FormatIssue::InvalidLength),
        ("rgb(300,0,0)", FormatIssue::OutOfRange),
        ("#gggggg", FormatIssue::InvalidHex),
    ];
    for (input, issue) in cases {
        let err = generate_palette(input).unwrap_err();
        assert_eq!(err.issue(), issue, "{input}");
    }
}

#[test]
fn test_red_variants_are_identical() {
    let reference = generate_palette("#ff0000").unwrap();
    assert_eq!(generate_palette("#FF0000").unwrap(), reference);
    assert_eq!(generate_palette("#f00").unwrap(), reference);
    assert_eq!(generate_palette("rgb(255,0,0)").unwrap(), reference);
    assert_eq!(reference.base_index(), 5);
    assert_eq!(reference.base_color(), Rgb::new(255, 0, 0));
}

#[test]
fn test_failed_update_leaves_previous_palette_untouched() {
    // A consumer keeps its last good palette when new input is rejected.
    let mut current = generate_palette("#228be6").unwrap();
    let before = current;

    for input in ["#12", "rgb(300,0,0)", "green"] {
        if let Ok(next) = generate_palette(input) {
            current = next;
        }
    }
    assert_eq!(current, before);

    if let Ok(next) = generate_palette("#3cb371") {
        current = next;
    }
    assert_ne!(current, before);
}

#[test]
fn test_extreme_colors() {
    let white = generate_palette("#ffffff").unwrap();
    assert_eq!(white.base_index(), 0);
    assert_eq!(white.palette().lightest(), Rgb::WHITE);

    let black = generate_palette("rgb(0, 0, 0)").unwrap();
    assert_eq!(black.base_index(), SHADE_COUNT - 1);
    assert_eq!(black.palette().darkest(), Rgb::BLACK);

    for generated in [white, black] {
        let l = lightness(&generated);
        assert!(l.windows(2).all(|w| w[0] >= w[1]), "{l:?}");
    }
}

#[test]
fn test_near_white_shades_are_desaturated() {
    let generated = generate_palette("#ff0000").unwrap();
    let lightest = to_hsl(generated.palette().lightest());
    let mid = to_hsl(generated.palette()[4]);
    assert!(lightest.s < mid.s);
    let darkest = to_hsl(generated.palette().darkest());
    assert!(darkest.s < mid.s);
}

#[test]
fn test_custom_generator() {
    let generator = PaletteGenerator::builder()
        .stops([98.0, 92.0, 84.0, 74.0, 63.0, 52.0, 42.0, 33.0, 24.0, 15.0])
        .edge_falloff(4.0)
        .build()
        .unwrap();

    let generated = generator.generate("#228be6").unwrap();
    assert_eq!(generated.base_index(), 5);
    assert_eq!(generated.base_color(), Rgb::new(0x22, 0x8b, 0xe6));
    let l = lightness(&generated);
    assert!(l.windows(2).all(|w| w[0] >= w[1]), "{l:?}");
}

#[test]
fn test_custom_generator_rejects_rising_stops() {
    let err = PaletteGenerator::builder()
        .stops([90.0, 97.0, 80.0, 69.0, 58.0, 49.0, 40.0, 32.0, 24.0, 14.0])
        .build()
        .unwrap_err();
    assert!(matches!(
        err,
        RampConfigError::StopsNotDecreasing { index: 1, .. }
    ));
}
