mod common;

use common::{frame_with_squares, TAPE};
use image::{DynamicImage, Rgb, RgbImage};
use retro_core::detection::{TargetDetector, ThresholdMode};
use retro_core::io::image_io::{load_frame, save_frame_png};
use retro_core::{Frame, RetroError, Target};

#[test]
fn test_png_round_trip_preserves_pixels() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("frame.png");
    let frame = frame_with_squares(64, 48, &[(20, 20)], 4);

    save_frame_png(&frame, &path).unwrap();
    let loaded = load_frame(&path).unwrap();

    assert_eq!(loaded.data, frame.data);
    assert_eq!(loaded.data[[20, 20]], TAPE);
}

#[test]
fn test_loaded_file_feeds_detector() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("tapes.png");
    save_frame_png(&frame_with_squares(640, 480, &[(100, 100), (540, 380)], 10), &path).unwrap();

    let frame = load_frame(&path).unwrap();
    let detector = TargetDetector::new(640, 480, 200.0, ThresholdMode::Binary).unwrap();
    assert_eq!(
        detector.find(&frame).unwrap().targets,
        vec![Target::new(-220.0, -140.0), Target::new(220.0, 140.0)]
    );
}

#[test]
fn test_color_image_is_reduced_to_luma() {
    let mut rgb = RgbImage::new(8, 4);
    rgb.put_pixel(3, 2, Rgb([255, 255, 255]));
    let frame = Frame::from_dynamic(&DynamicImage::ImageRgb8(rgb));

    assert_eq!((frame.width(), frame.height()), (8, 4));
    assert_eq!(frame.data[[2, 3]], 255);
    assert_eq!(frame.data[[0, 0]], 0);
}

#[test]
fn test_from_raw_checks_buffer_length() {
    let frame = Frame::from_raw(4, 2, vec![0; 8]).unwrap();
    assert_eq!((frame.width(), frame.height()), (4, 2));

    let err = Frame::from_raw(4, 2, vec![0; 7]).unwrap_err();
    assert!(matches!(err, RetroError::DetectionFailure(_)), "got {err:?}");
}

#[test]
fn test_missing_file_is_error() {
    let dir = tempfile::tempdir().unwrap();
    assert!(load_frame(&dir.path().join("missing.png")).is_err());
}
