use super::*;
use crate::foundation::core::Vec2;

#[test]
fn defaults_match_generator_conventions() {
    let cfg = GeneratorConfig::default();
    cfg.validate().unwrap();
    assert_eq!(cfg.font, "Verdana");
    assert_eq!(cfg.font_size, 26);
    assert_eq!(cfg.font_scale, 0.5);
    assert_eq!(cfg.sprites_path, "sb/f");
    assert_eq!(cfg.origin, Origin::Centre);
    assert_eq!(cfg.outline.thickness, 3);
}

#[test]
fn partial_json_keeps_defaults() {
    let cfg = GeneratorConfig::from_slice(
        br#"{ "font_size": 40, "layer_name": "Chorus", "glow": { "radius": 4 }, "origin": "TopLeft" }"#,
    )
    .unwrap();
    assert_eq!(cfg.font_size, 40);
    assert_eq!(cfg.layer_name, "Chorus");
    assert_eq!(cfg.glow.radius, 4);
    assert_eq!(cfg.glow.color, Rgba8::new(255, 255, 255, 100));
    assert_eq!(cfg.origin, Origin::TopLeft);
    assert_eq!(cfg.font, "Verdana");
}

#[test]
fn invalid_values_are_rejected() {
    assert!(matches!(
        GeneratorConfig::from_slice(br#"{ "font_size": 0 }"#),
        Err(TextcueError::Validation(_))
    ));
    assert!(matches!(
        GeneratorConfig::from_slice(br#"{ "font_scale": -1.0 }"#),
        Err(TextcueError::Validation(_))
    ));
    assert!(matches!(
        GeneratorConfig::from_slice(br#"{ "fontSize": 12 }"#),
        Err(TextcueError::Parse(_))
    ));
}

#[test]
fn additive_glow_is_not_baked() {
    let mut cfg = GeneratorConfig::default();
    cfg.glow.radius = 6;
    assert_eq!(cfg.font_description(None).glow.radius, 0);
    cfg.additive_glow = false;
    assert_eq!(cfg.font_description(None).glow.radius, 6);
}

#[test]
fn font_padding_comes_from_document_base() {
    let cfg = GeneratorConfig::default();
    let font = cfg.font_description(Some(Pair {
        x: Some(2.0),
        y: None,
    }));
    assert_eq!(font.padding, Vec2::new(2.0, 0.0));
    assert_eq!(font.size, 26);
    assert_eq!(cfg.font_description(None).padding, Vec2::ZERO);
}

#[test]
fn layout_options_carry_pass_through_values() {
    let opts = GeneratorConfig::default().layout_options();
    assert_eq!(opts.layer_name, "Lyrics");
    assert_eq!(opts.base_scale, 0.5);
    assert_eq!(opts.max_depth, DEFAULT_MAX_DEPTH);
}
