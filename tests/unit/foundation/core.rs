use super::*;

#[test]
fn pair_fills_missing_components_from_fallback() {
    let p = Pair {
        x: Some(3.0),
        y: None,
    };
    assert_eq!(p.or(Vec2::new(10.0, 20.0)), Vec2::new(3.0, 20.0));
    assert_eq!(p.or_zero(), Vec2::new(3.0, 0.0));
    assert_eq!(Pair::default().or(Vec2::new(1.0, 2.0)), Vec2::new(1.0, 2.0));
}

#[test]
fn pair_json_accepts_nulls_and_rejects_wrong_length() {
    let p: Pair = serde_json::from_str("[1.5, null]").unwrap();
    assert_eq!(p.x, Some(1.5));
    assert_eq!(p.y, None);

    let p: Pair = serde_json::from_str("[4, 8]").unwrap();
    assert_eq!(p, Pair::new(4.0, 8.0));

    assert!(serde_json::from_str::<Pair>("[1]").is_err());
    assert!(serde_json::from_str::<Pair>("[1, 2, 3]").is_err());
}

#[test]
fn orientation_axes_are_transposed() {
    assert_eq!(Orientation::Horizontal.advance_axis(), Axis::X);
    assert_eq!(Orientation::Horizontal.line_axis(), Axis::Y);
    assert_eq!(Orientation::Vertical.advance_axis(), Axis::Y);
    assert_eq!(Orientation::Vertical.line_axis(), Axis::X);
}

#[test]
fn orientation_parses_from_integers() {
    let h: Orientation = serde_json::from_str("0").unwrap();
    let v: Orientation = serde_json::from_str("1").unwrap();
    assert_eq!(h, Orientation::Horizontal);
    assert_eq!(v, Orientation::Vertical);
    assert!(serde_json::from_str::<Orientation>("2").is_err());
    assert_eq!(serde_json::to_string(&Orientation::Vertical).unwrap(), "1");
}

#[test]
fn axis_mut_writes_single_component() {
    let mut v = Vec2::new(1.0, 2.0);
    *Axis::Y.of_mut(&mut v) += 5.0;
    assert_eq!(v, Vec2::new(1.0, 7.0));
    assert_eq!(Axis::X.of(v), 1.0);
}

#[test]
fn hex_colors_parse_with_optional_alpha() {
    assert_eq!(
        Rgba8::parse_hex("#ff8000").unwrap(),
        Rgba8::new(255, 128, 0, 255)
    );
    assert_eq!(
        Rgba8::parse_hex("10203040").unwrap(),
        Rgba8::new(16, 32, 48, 64)
    );
    assert!(Rgba8::parse_hex("#fff").is_err());
    assert!(Rgba8::parse_hex("#gg0000").is_err());
}

#[test]
fn degrees_convert_to_radians() {
    assert!((deg_to_rad(180.0) - std::f64::consts::PI).abs() < 1e-12);
}
