// SPDX-License-Identifier: GPL-3.0-or-later
// tests/session.rs
//
// End-to-end crop sessions: decode, drag, scroll, crop, save, reload.

use std::io::Cursor;
use std::path::PathBuf;

use happy_crop::app::input::WheelInput;
use happy_crop::app::script::parse_script;
use happy_crop::{AppConfig, CropError, CropMessage, CropSession, Outcome, SourceImage};
use image::{DynamicImage, GenericImageView, ImageFormat, Rgb, RgbImage};

fn temp_path(name: &str) -> PathBuf {
    std::env::temp_dir().join(format!("happy-crop-it-{}-{name}", std::process::id()))
}

fn png_bytes(width: u32, height: u32) -> Vec<u8> {
    let img = RgbImage::from_fn(width, height, |x, y| Rgb([x as u8, y as u8, 99]));
    let mut bytes = Vec::new();
    DynamicImage::ImageRgb8(img)
        .write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png)
        .unwrap();
    bytes
}

fn session(width: u32, height: u32, config: &AppConfig) -> CropSession {
    let source = SourceImage::from_bytes(&png_bytes(width, height)).unwrap();
    CropSession::new(source, config)
}

#[test]
fn drag_on_unscrolled_canvas() {
    let mut session = session(200, 150, &AppConfig::default());

    session.update(CropMessage::Press { x: 20.0, y: 20.0 }).unwrap();
    session.update(CropMessage::Drag { x: 120.0, y: 90.0 }).unwrap();
    session.update(CropMessage::Release).unwrap();

    assert_eq!(session.crop_bounds().unwrap().as_tuple(), (20, 20, 120, 90));
    let crop = session.crop().unwrap();
    assert_eq!(crop.dimensions(), (100, 70));
    assert_eq!(crop.get_pixel(0, 0), session.source().image().get_pixel(20, 20));
}

#[test]
fn saved_png_matches_source_region() {
    let mut session = session(200, 150, &AppConfig::default());
    for message in parse_script("press 120 90\ndrag 20 20\nrelease").unwrap() {
        session.update(message).unwrap();
    }

    let path = temp_path("region.png");
    let written = match session.update(CropMessage::Save(path)).unwrap() {
        Outcome::Saved(path) => path,
        other => panic!("unexpected outcome {other:?}"),
    };
    let reloaded = image::open(&written).unwrap().to_rgb8();
    std::fs::remove_file(&written).ok();

    assert_eq!(reloaded.dimensions(), (100, 70));
    assert_eq!(reloaded.get_pixel(0, 0), &Rgb([20, 20, 99]));
    assert_eq!(reloaded.get_pixel(99, 69), &Rgb([119, 89, 99]));
}

#[test]
fn saved_jpeg_has_expected_size() {
    let mut session = session(64, 48, &AppConfig::default());
    session.update(CropMessage::Press { x: 4.0, y: 4.0 }).unwrap();
    session.update(CropMessage::Drag { x: 36.0, y: 20.0 }).unwrap();
    session.update(CropMessage::Release).unwrap();

    let path = temp_path("region.jpg");
    session.save(&path).unwrap();
    let reloaded = image::open(&path).unwrap();
    std::fs::remove_file(&path).ok();

    assert_eq!(reloaded.dimensions(), (32, 16));
}

#[test]
fn wheel_scrolling_shifts_press_into_image_space() {
    let config = AppConfig {
        scroll_increment: 50.0,
        viewport_width: 400,
        viewport_height: 300,
        ..AppConfig::default()
    };
    let mut session = session(1000, 800, &config);

    // Two notches down on Windows, one shifted X11 notch to the right.
    session
        .update(CropMessage::Wheel(WheelInput::Delta {
            delta: -240,
            shift: false,
        }))
        .unwrap();
    session
        .update(CropMessage::Wheel(WheelInput::Button {
            button: 5,
            shift: true,
        }))
        .unwrap();
    assert_eq!(session.viewport().offset(), (50.0, 100.0));

    session.update(CropMessage::Press { x: 10.0, y: 10.0 }).unwrap();
    session.update(CropMessage::Drag { x: 60.0, y: 30.0 }).unwrap();
    session.update(CropMessage::Release).unwrap();

    assert_eq!(session.crop_bounds().unwrap().as_tuple(), (60, 110, 110, 130));
}

#[test]
fn reset_mid_drag_then_new_selection() {
    let mut session = session(100, 100, &AppConfig::default());
    let script = "press 80 80\ndrag 99 99\nreset\npress 5 5\ndrag 15 25\nrelease";
    for message in parse_script(script).unwrap() {
        session.update(message).unwrap();
    }

    assert_eq!(session.crop_bounds().unwrap().as_tuple(), (5, 5, 15, 25));
}

#[test]
fn selection_starting_outside_is_clamped() {
    let mut session = session(100, 100, &AppConfig::default());
    session.update(CropMessage::Press { x: -50.0, y: -50.0 }).unwrap();
    session.update(CropMessage::Drag { x: 50.0, y: 50.0 }).unwrap();
    session.update(CropMessage::Release).unwrap();

    assert_eq!(session.crop_bounds().unwrap().as_tuple(), (0, 0, 50, 50));
}

#[test]
fn crop_while_selecting_can_be_disabled() {
    let config = AppConfig {
        allow_crop_while_selecting: false,
        ..AppConfig::default()
    };
    let mut session = session(100, 100, &config);
    session.update(CropMessage::Press { x: 10.0, y: 10.0 }).unwrap();
    session.update(CropMessage::Drag { x: 50.0, y: 50.0 }).unwrap();

    assert!(matches!(
        session.update(CropMessage::Crop),
        Err(CropError::NoSelection)
    ));

    session.update(CropMessage::Release).unwrap();
    assert!(session.update(CropMessage::Crop).is_ok());
}

#[test]
fn sessions_are_independent() {
    let config = AppConfig::default();
    let mut first = session(100, 100, &config);
    let second = session(100, 100, &config);

    first.update(CropMessage::Press { x: 1.0, y: 1.0 }).unwrap();
    first.update(CropMessage::Drag { x: 9.0, y: 9.0 }).unwrap();
    first.update(CropMessage::Release).unwrap();

    assert!(first.crop_bounds().is_ok());
    assert!(matches!(second.crop_bounds(), Err(CropError::NoSelection)));
}

#[test]
fn extract_runs_off_the_interaction_thread() {
    let mut session = session(40, 40, &AppConfig::default());
    session.press(0.0, 0.0);
    session.drag(20.0, 10.0);
    session.release();

    let bounds = session.crop_bounds().unwrap();
    let source = session.source().image().clone();
    let crop = std::thread::spawn(move || happy_crop::extract_crop(&source, bounds))
        .join()
        .unwrap()
        .unwrap();

    assert_eq!(crop.dimensions(), (20, 10));
}

#[test]
fn sub_pixel_drag_never_crops() {
    let mut session = session(100, 100, &AppConfig::default());
    session.update(CropMessage::Press { x: 10.9, y: 10.9 }).unwrap();
    session.update(CropMessage::Drag { x: 11.1, y: 11.1 }).unwrap();
    session.update(CropMessage::Release).unwrap();

    assert!(matches!(
        session.update(CropMessage::Crop),
        Err(CropError::DegenerateSelection { .. })
    ));
}
