/// End-to-end tests: bytes → selection → composed image.
use identicon::block::Block;
use identicon::canvas::{BACKGROUND, FOREGROUND};
use identicon::compose;
use identicon::geometry::Rotation;
use identicon::select::{self, Selection};
use identicon::{make, Color, Identicon, IdenticonError};

const GOLDEN_EXAMPLE_48: &str = include_str!("golden/example_48.txt");

fn to_ascii(img: &identicon::IdenticonImage) -> String {
    let size = img.size();
    let mut out = String::with_capacity((size * (size + 1)) as usize);
    for y in 0..size {
        for x in 0..size {
            out.push(if img.index(x, y) == FOREGROUND { '#' } else { '.' });
        }
        out.push('\n');
    }
    out
}

#[test]
fn example_matches_golden() {
    let img = make(Color::WHITE, Color::BLACK, 48, b"example").unwrap();
    assert_eq!(to_ascii(&img), GOLDEN_EXAMPLE_48);
}

#[test]
fn example_selection_is_stable() {
    assert_eq!(
        hex::encode(select::digest(b"example")),
        "1a79a4d60de6718e8e5b326e338ae533"
    );
    let sel = Selection::from_bytes(b"example");
    assert_eq!(sel.corner.index(), 13);
    assert_eq!(sel.edge.index(), 2);
    assert_eq!(sel.center.index(), 1);
    assert_eq!(sel.rotation, Rotation::new(1));
}

#[test]
fn repeated_generation_is_identical() {
    let icon = Identicon::new(Color::WHITE, Color::BLACK, 48).unwrap();
    let inputs: [&[u8]; 4] = [b"example", b"", b"alice", b"\x00\xff\x10"];
    for data in inputs {
        let first = icon.make(data);
        let second = icon.make(data);
        assert_eq!(first.indices(), second.indices());
    }
}

#[test]
fn size_15_rejected_16_accepted() {
    assert!(matches!(
        make(Color::WHITE, Color::BLACK, 15, b"x"),
        Err(IdenticonError::SizeTooSmall { size: 15, min: 16 })
    ));
    let img = make(Color::WHITE, Color::BLACK, 16, b"x").unwrap();
    assert_eq!(img.size(), 16);
    assert_eq!(img.indices().len(), 16 * 16);
}

#[test]
fn empty_input_is_deterministic() {
    let a = make(Color::WHITE, Color::BLACK, 16, &[]).unwrap();
    let b = make(Color::WHITE, Color::BLACK, 16, &[]).unwrap();
    assert_eq!(a, b);

    let sel = Selection::from_bytes(&[]);
    assert_eq!(sel.corner.index(), 6);
    assert_eq!(sel.edge.index(), 5);
    assert_eq!(sel.center.index(), 2);
    assert_eq!(sel.rotation, Rotation::NONE);
}

#[test]
fn single_byte_change_usually_changes_selection() {
    let mut changed = 0;
    for i in 0..200 {
        let data = format!("user-{i}").into_bytes();
        let mut flipped = data.clone();
        if let Some(last) = flipped.last_mut() {
            *last ^= 1;
        }
        if Selection::from_bytes(&data) != Selection::from_bytes(&flipped) {
            changed += 1;
        }
    }
    assert!(changed > 180, "only {changed}/200 flips changed the selection");
}

#[test]
fn center_block_is_symmetric_and_rotation_invariant() {
    for i in 0..64u32 {
        let sel = Selection::from_bytes(&i.to_le_bytes());
        assert!(sel.center.is_symmetric());
        assert!(Block::CENTER.contains(&sel.center));

        let placed = compose::placements(&sel, 16);
        assert_eq!(placed[0].block, sel.center);
        assert_eq!(placed[0].rotation, Rotation::NONE);
    }
}

#[test]
fn quadrant_rotations_follow_base_angle() {
    let sel = Selection::from_bytes(b"example");
    let placed = compose::placements(&sel, 16);
    let base = sel.rotation.quarter_turns();
    let angles: Vec<u8> = placed[1..]
        .iter()
        .map(|p| p.rotation.quarter_turns())
        .collect();
    let expected: Vec<u8> = (0..4u8)
        .flat_map(|q| [(base + q) % 4; 2])
        .collect();
    assert_eq!(angles, expected);
}

#[test]
fn leftover_pixels_stay_background() {
    // 50 / 3 = 16, so column and row 48..50 are never painted
    let icon = Identicon::new(Color::WHITE, Color::BLACK, 50).unwrap();
    for i in 0..32u8 {
        let img = icon.make(&[i]);
        for k in 0..50 {
            assert_eq!(img.index(48, k), BACKGROUND);
            assert_eq!(img.index(49, k), BACKGROUND);
            assert_eq!(img.index(k, 48), BACKGROUND);
            assert_eq!(img.index(k, 49), BACKGROUND);
        }
    }
}

#[test]
fn colors_resolve_through_palette() {
    let bg = Color::rgb(240, 240, 240);
    let fg = Color::rgb(51, 102, 153);
    let img = make(bg, fg, 48, b"example").unwrap();
    // top-left pixel of the golden image is foreground
    assert_eq!(img.color(0, 0), fg);
    assert_eq!(img.color(1, 0), bg);
    let rgba = img.to_rgba();
    assert_eq!(&rgba[..4], &[51, 102, 153, 255]);
}
