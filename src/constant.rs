// SPDX-License-Identifier: GPL-3.0-or-later
// src/constant.rs
//
// Application constants that should not be changed by the user.

/// Wheel delta reported per notch by delta-style wheels (Windows, macOS).
pub const WHEEL_DELTA_PER_NOTCH: i32 = 120;

/// X11 wheel button: scroll up.
pub const BUTTON_WHEEL_UP: u8 = 4;

/// X11 wheel button: scroll down.
pub const BUTTON_WHEEL_DOWN: u8 = 5;

/// X11 wheel button: scroll left.
pub const BUTTON_WHEEL_LEFT: u8 = 6;

/// X11 wheel button: scroll right.
pub const BUTTON_WHEEL_RIGHT: u8 = 7;

/// Divisor applied to the visible size when no explicit scroll increment is set.
pub const DEFAULT_SCROLL_FRACTION: f32 = 10.0;

/// Visible canvas width used when nothing else is configured.
pub const DEFAULT_VIEWPORT_WIDTH: u32 = 800;

/// Visible canvas height used when nothing else is configured.
pub const DEFAULT_VIEWPORT_HEIGHT: u32 = 600;

/// Smallest crop extent in pixels along either axis.
pub const MIN_CROP_EXTENT: u32 = 1;

/// Default JPEG quality for saved crops.
pub const DEFAULT_JPEG_QUALITY: u8 = 90;

/// Extension appended when the save target has none.
pub const DEFAULT_SAVE_EXT: &str = "png";

/// Suffix added to the input stem for generated output names.
pub const CROPPED_SUFFIX: &str = "_cropped";

/// Config directory name.
pub const CONFIG_DIR: &str = "happy-crop";

/// Config file name inside the config directory.
pub const CONFIG_FILE: &str = "config.yml";

/// Environment variable that points at an explicit config file.
pub const CONFIG_ENV: &str = "HAPPY_CROP_CONFIG";
