//! End-to-end tests for the single-file conversion pipeline.

mod common;

use common::fixtures;
use eink_quantize::DitherMode;
use inkframe::models::Orientation;
use inkframe::pipeline::convert_file;
use pretty_assertions::assert_eq;

#[test]
fn test_portrait_conversion_produces_480x800_bmp() {
    let dir = tempfile::tempdir().unwrap();
    let input = fixtures::write_photo(dir.path(), "photo.png", 600, 900);

    let output = convert_file(&input, &fixtures::config(input.clone())).unwrap();

    assert_eq!(output, dir.path().join("photo.8b6.bmp"));
    let img = common::load_output(&output);
    assert_eq!(img.dimensions(), (480, 800));
    common::assert_palette_only(&img);
}

#[test]
fn test_landscape_flag_produces_800x480_and_6b8_name() {
    let dir = tempfile::tempdir().unwrap();
    let input = fixtures::write_photo(dir.path(), "photo.png", 1600, 900);

    let config = fixtures::config_with_orientation(input.clone(), Orientation::Landscape);
    let output = convert_file(&input, &config).unwrap();

    assert_eq!(output, dir.path().join("photo.6b8.bmp"));
    let img = common::load_output(&output);
    assert_eq!(img.dimensions(), (800, 480));
}

#[test]
fn test_auto_orientation_follows_source_shape() {
    let dir = tempfile::tempdir().unwrap();

    let wide = fixtures::write_photo(dir.path(), "wide.png", 1200, 800);
    let config = fixtures::config_with_orientation(wide.clone(), Orientation::Auto);
    let output = convert_file(&wide, &config).unwrap();
    let img = common::load_output(&output);
    assert_eq!(img.dimensions(), (800, 480));
    // Auto-selected landscape canvas still takes the portrait suffix; the
    // name tracks the flag, not the computed shape.
    assert_eq!(output, dir.path().join("wide.8b6.bmp"));

    let tall = fixtures::write_photo(dir.path(), "tall.png", 800, 1200);
    let config = fixtures::config_with_orientation(tall.clone(), Orientation::Auto);
    let output = convert_file(&tall, &config).unwrap();
    assert_eq!(common::load_output(&output).dimensions(), (480, 800));
}

#[test]
fn test_output_pixels_restricted_to_palette_without_dithering() {
    let dir = tempfile::tempdir().unwrap();
    let input = fixtures::write_photo(dir.path(), "photo.png", 500, 700);

    let mut config = fixtures::config(input.clone());
    config.dither = DitherMode::None;
    let output = convert_file(&input, &config).unwrap();

    common::assert_palette_only(&common::load_output(&output));
}

#[test]
fn test_conversion_is_idempotent() {
    let dir = tempfile::tempdir().unwrap();
    let input = fixtures::write_photo(dir.path(), "photo.png", 777, 555);
    let config = fixtures::config(input.clone());

    let output = convert_file(&input, &config).unwrap();
    let first = std::fs::read(&output).unwrap();

    let output2 = convert_file(&input, &config).unwrap();
    let second = std::fs::read(&output2).unwrap();

    assert_eq!(output, output2);
    assert_eq!(first, second, "repeated conversion must be byte-identical");
}

#[test]
fn test_output_canvas_always_legal() {
    let dir = tempfile::tempdir().unwrap();
    for (i, (w, h)) in [(50, 50), (3000, 1000), (480, 800), (801, 479)]
        .iter()
        .enumerate()
    {
        let input = fixtures::write_photo(dir.path(), &format!("p{i}.png"), *w, *h);
        let config = fixtures::config_with_orientation(input.clone(), Orientation::Auto);
        let output = convert_file(&input, &config).unwrap();
        common::assert_canvas_dimensions(&common::load_output(&output));
    }
}

#[test]
fn test_tiny_source_is_upscaled_to_cover() {
    let dir = tempfile::tempdir().unwrap();
    let input = fixtures::write_photo(dir.path(), "tiny.png", 10, 10);

    let output = convert_file(&input, &fixtures::config(input.clone())).unwrap();
    assert_eq!(common::load_output(&output).dimensions(), (480, 800));
}

#[test]
fn test_source_file_left_in_place() {
    let dir = tempfile::tempdir().unwrap();
    let input = fixtures::write_photo(dir.path(), "photo.png", 300, 300);
    let before = std::fs::read(&input).unwrap();

    convert_file(&input, &fixtures::config(input.clone())).unwrap();

    assert_eq!(std::fs::read(&input).unwrap(), before);
}
