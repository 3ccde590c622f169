//! Checks over the built-in theme pair

use petal_theme::*;

#[test]
fn test_bundle_schemes() {
    let bundle = PetalTheme::bundle();
    assert_eq!(bundle.light.color_scheme(), ColorScheme::Light);
    assert_eq!(bundle.dark.color_scheme(), ColorScheme::Dark);
    assert_eq!(bundle.for_scheme(ColorScheme::Dark), &bundle.dark);
}

#[test]
fn test_text_is_readable_on_background() {
    for theme in [PetalTheme::light(), PetalTheme::dark()] {
        let text = theme.color(ColorToken::TextPrimary).luminance();
        let bg = theme.color(ColorToken::Background).luminance();
        assert!(
            (text - bg).abs() > 0.5,
            "{:?}: text/background contrast too low",
            theme.color_scheme()
        );
    }
}

#[test]
fn test_inverse_text_is_white_in_both_schemes() {
    assert_eq!(
        PetalTheme::light().color(ColorToken::TextInverse),
        PetalTheme::dark().color(ColorToken::TextInverse)
    );
}

#[test]
fn test_overlay_is_translucent() {
    for theme in [PetalTheme::light(), PetalTheme::dark()] {
        let overlay = theme.color(ColorToken::Overlay);
        assert!(overlay.a > 0.0 && overlay.a < 1.0);
    }
}

#[test]
fn test_every_token_resolves() {
    let theme = PetalTheme::light();
    for token in ColorToken::ALL {
        let _ = theme.color(token);
    }
    assert_eq!(theme.space(SpacingToken::Md), 16.0);
    assert_eq!(theme.radius(RadiusToken::Full), 9999.0);
    assert_eq!(theme.duration(DurationToken::Normal), 250);
}
