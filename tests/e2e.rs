mod common;

use std::fs;

use common::synthetic_image::{matrix_text, write_split_png};
use lumaview::{EdgeFilter, GrayscaleMethod, InputKind, ViewParams, render_frame_from_path};

#[test]
fn png_renders_to_luminance_weighted_frame() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("split.png");
    write_split_png(&path, 40, 20, [255, 0, 0], [0, 0, 255]);

    let frame = render_frame_from_path(&path, &ViewParams::default()).unwrap();

    assert_eq!((frame.width, frame.height), (40, 20));
    assert_eq!(frame.data.len(), 800);
    // Rec.601: red -> 76, blue -> 29.
    assert_eq!(frame.data[0], 76);
    assert_eq!(frame.data[39], 29);
}

#[test]
fn sobel_filter_marks_the_color_boundary() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("split.png");
    write_split_png(&path, 32, 32, [0, 0, 0], [255, 255, 255]);

    let params = ViewParams {
        filter: EdgeFilter::Sobel,
        ..Default::default()
    };
    let frame = render_frame_from_path(&path, &params).unwrap();

    let mid_row = &frame.data[15 * 32..16 * 32];
    assert!(mid_row[16] > 0, "expected an edge response at the boundary");
    assert_eq!(mid_row[4], 0, "expected silence inside the flat left half");
    assert_eq!(mid_row[27], 0, "expected silence inside the flat right half");
}

#[test]
fn resize_bounds_the_long_side() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("wide.png");
    write_split_png(&path, 128, 64, [20, 20, 20], [20, 20, 20]);

    let params = ViewParams {
        size: Some(64),
        ..Default::default()
    };
    let frame = render_frame_from_path(&path, &params).unwrap();
    assert_eq!((frame.width, frame.height), (64, 32));
}

#[test]
fn matrix_file_skips_the_grayscale_step() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("gradient.txt");
    fs::write(&path, matrix_text(8, 12, 42)).unwrap();

    let frame = render_frame_from_path(&path, &ViewParams::default()).unwrap();
    assert_eq!((frame.width, frame.height), (12, 8));
    assert!(frame.data.iter().all(|&v| v == 42));
}

#[test]
fn forced_matrix_kind_overrides_the_extension() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("matrix.dat");
    fs::write(&path, matrix_text(3, 3, 7)).unwrap();

    let params = ViewParams {
        input_kind: InputKind::Matrix,
        ..Default::default()
    };
    let frame = render_frame_from_path(&path, &params).unwrap();
    assert_eq!((frame.width, frame.height), (3, 3));
}

#[test]
fn rec709_and_rec601_disagree_on_saturated_color() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("green.png");
    write_split_png(&path, 8, 8, [0, 255, 0], [0, 255, 0]);

    let g601 = render_frame_from_path(
        &path,
        &ViewParams {
            grayscale: GrayscaleMethod::Rec601,
            ..Default::default()
        },
    )
    .unwrap();
    let g709 = render_frame_from_path(
        &path,
        &ViewParams {
            grayscale: GrayscaleMethod::Rec709,
            ..Default::default()
        },
    )
    .unwrap();

    assert_eq!(g601.data[0], 150);
    assert_eq!(g709.data[0], 182);
}
