use super::*;
use crate::foundation::core::{Point, Rgba8};
use crate::glyph::source::AssetHandle;
use crate::placement::record::Origin;

fn placement(layer: &str, ch: &str, x: f64) -> Placement {
    Placement {
        layer: layer.to_string(),
        asset: AssetHandle(format!("sb/f/_{ch}.png")),
        origin: Origin::Centre,
        position: Point::new(x, 240.0),
        start: 1000,
        end: 2000,
        scale: 0.5,
        fade_in: Fade::fade_in(1000, 100),
        fade_out: Fade::fade_out(2000, 0),
        rotation_rad: 0.0,
        color: None,
    }
}

#[test]
fn sprite_block_has_expected_commands() {
    let mut sink = StoryboardSink::new(OsbLayer::Foreground);
    let mut p = placement("Lyrics", "0061", 320.5);
    p.rotation_rad = 0.25;
    p.color = Some(Rgba8::new(255, 128, 0, 255));
    sink.place(p).unwrap();

    let script = sink.to_script();
    let expected_block = "//Storyboard Layer 3 (Foreground)\n\
//textcue layer: Lyrics\n\
Sprite,Foreground,Centre,\"sb/f/_0061.png\",320.5,240\n \
F,0,900,1000,0,1\n \
F,0,2000,,1,0\n \
S,0,1000,,0.5\n \
R,0,1000,,0.25\n \
C,0,1000,,255,128,0\n\
//Storyboard Layer 4 (Overlay)\n";
    assert!(script.starts_with("[Events]\n"), "{script}");
    assert!(script.contains(expected_block), "{script}");
    assert!(script.ends_with("//Storyboard Sound Samples\n"));
    assert_eq!(sink.sprite_count(), 1);
}

#[test]
fn zero_rotation_and_missing_color_are_omitted() {
    let mut sink = StoryboardSink::new(OsbLayer::Overlay);
    sink.place(placement("L", "0062", 0.0)).unwrap();
    let script = sink.to_script();
    assert!(script.contains("Sprite,Overlay,Centre"));
    assert!(!script.contains(" R,"));
    assert!(!script.contains(" C,"));
}

#[test]
fn groups_keep_first_seen_layer_order() {
    let mut sink = StoryboardSink::new(OsbLayer::Foreground);
    sink.place(placement("B", "0001", 1.0)).unwrap();
    sink.place(placement("A", "0002", 2.0)).unwrap();
    sink.place(placement("B", "0003", 3.0)).unwrap();

    let script = sink.to_script();
    let b = script.find("//textcue layer: B").unwrap();
    let a = script.find("//textcue layer: A").unwrap();
    let third = script.find("_0003.png").unwrap();
    assert!(b < third && third < a, "{script}");
}

#[test]
fn write_to_emits_script_bytes() {
    let mut sink = StoryboardSink::new(OsbLayer::Foreground);
    sink.place(placement("L", "0061", 1.0)).unwrap();
    let mut buf = Vec::new();
    sink.write_to(&mut buf).unwrap();
    assert_eq!(String::from_utf8(buf).unwrap(), sink.to_script());
}

#[test]
fn numbers_are_trimmed() {
    assert_eq!(num(320.0), "320");
    assert_eq!(num(0.5), "0.5");
    assert_eq!(num(-0.00001), "0");
    assert_eq!(num(1.23456), "1.2346");
}

#[test]
fn display_renders_the_same_script() {
    let mut sink = StoryboardSink::new(OsbLayer::Background);
    sink.place(placement("L", "0061", 1.0)).unwrap();
    let shown = format!("{sink}");
    assert_eq!(shown, sink.to_script());
    assert!(shown.contains(
        "//Storyboard Layer 0 (Background)\n//textcue layer: L\nSprite,Background,"
    ));
    assert!(shown.contains(" F,0,900,1000,0,1\n F,0,2000,,1,0\n"));
}
