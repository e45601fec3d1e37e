use asset_tools::sprite::{
    generate_ash_vanguard, generate_ember_guard, ASH_COLOR, EMBER_COLOR, SPRITE_SIZE, TRANSPARENT,
};

#[test]
fn ash_vanguard_file_round_trips_through_png() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("ash_vanguard.png");

    let written = generate_ash_vanguard(&path).unwrap();
    assert_eq!(written, path);

    let img = image::open(&path).unwrap().to_rgba8();
    assert_eq!(img.dimensions(), (SPRITE_SIZE, SPRITE_SIZE));
    assert_eq!(img.get_pixel(SPRITE_SIZE / 2, SPRITE_SIZE / 2).0, ASH_COLOR);
    assert_eq!(img.get_pixel(0, 0).0, TRANSPARENT);
}

#[test]
fn ember_guard_file_round_trips_through_png() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("ember_guard.png");

    generate_ember_guard(&path).unwrap();

    let img = image::open(&path).unwrap().to_rgba8();
    assert_eq!(img.dimensions(), (SPRITE_SIZE, SPRITE_SIZE));
    assert_eq!(img.get_pixel(SPRITE_SIZE / 2, SPRITE_SIZE / 2).0, EMBER_COLOR);
    assert_eq!(img.get_pixel(0, 0).0, TRANSPARENT);
}
