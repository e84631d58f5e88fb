// SPDX-License-Identifier: GPL-3.0-or-later
// src/app/input.rs
//
// Normalization of platform wheel events into `scroll(axis, units)`.

use crate::app::view::viewport::ScrollAxis;
use crate::constant::{
    BUTTON_WHEEL_DOWN, BUTTON_WHEEL_LEFT, BUTTON_WHEEL_RIGHT, BUTTON_WHEEL_UP,
    WHEEL_DELTA_PER_NOTCH,
};

/// Raw wheel input as delivered by the host toolkit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WheelInput {
    /// Delta-style wheel (Windows, macOS): multiples of 120 per notch,
    /// positive when the wheel is rotated away from the user.
    Delta { delta: i32, shift: bool },
    /// Button-style wheel (X11): buttons 4/5 vertical, 6/7 horizontal.
    Button { button: u8, shift: bool },
}

/// Turn a wheel event into an axis and a signed unit count.
///
/// Positive units scroll right/down. Shift redirects vertical gestures to
/// the horizontal axis. `natural` inverts the direction. Returns `None` for
/// events that do not scroll (unknown buttons, deltas under one notch).
pub fn normalize_wheel(input: WheelInput, natural: bool) -> Option<(ScrollAxis, i32)> {
    let (axis, units) = match input {
        WheelInput::Delta { delta, shift } => {
            // Integer division truncates toward zero: partial notches are dropped.
            let units = -(delta / WHEEL_DELTA_PER_NOTCH);
            (vertical_or_shifted(shift), units)
        }
        WheelInput::Button { button, shift } => match button {
            BUTTON_WHEEL_UP => (vertical_or_shifted(shift), -1),
            BUTTON_WHEEL_DOWN => (vertical_or_shifted(shift), 1),
            BUTTON_WHEEL_LEFT => (ScrollAxis::Horizontal, -1),
            BUTTON_WHEEL_RIGHT => (ScrollAxis::Horizontal, 1),
            _ => return None,
        },
    };

    if units == 0 {
        return None;
    }

    Some((axis, if natural { -units } else { units }))
}

fn vertical_or_shifted(shift: bool) -> ScrollAxis {
    if shift {
        ScrollAxis::Horizontal
    } else {
        ScrollAxis::Vertical
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn delta_wheel_away_scrolls_up() {
        let input = WheelInput::Delta {
            delta: 240,
            shift: false,
        };
        assert_eq!(normalize_wheel(input, false), Some((ScrollAxis::Vertical, -2)));
    }

    #[test]
    fn delta_wheel_with_shift_scrolls_horizontally() {
        let input = WheelInput::Delta {
            delta: -120,
            shift: true,
        };
        assert_eq!(
            normalize_wheel(input, false),
            Some((ScrollAxis::Horizontal, 1))
        );
    }

    #[test]
    fn partial_notch_is_ignored() {
        let input = WheelInput::Delta {
            delta: 60,
            shift: false,
        };
        assert_eq!(normalize_wheel(input, false), None);
    }

    #[test]
    fn x11_buttons_map_to_units() {
        let up = WheelInput::Button {
            button: 4,
            shift: false,
        };
        let down = WheelInput::Button {
            button: 5,
            shift: false,
        };
        let shift_up = WheelInput::Button {
            button: 4,
            shift: true,
        };
        let right = WheelInput::Button {
            button: 7,
            shift: false,
        };
        assert_eq!(normalize_wheel(up, false), Some((ScrollAxis::Vertical, -1)));
        assert_eq!(normalize_wheel(down, false), Some((ScrollAxis::Vertical, 1)));
        assert_eq!(
            normalize_wheel(shift_up, false),
            Some((ScrollAxis::Horizontal, -1))
        );
        assert_eq!(
            normalize_wheel(right, false),
            Some((ScrollAxis::Horizontal, 1))
        );
    }

    #[test]
    fn platforms_agree_on_direction() {
        let windows = WheelInput::Delta {
            delta: -120,
            shift: false,
        };
        let x11 = WheelInput::Button {
            button: 5,
            shift: false,
        };
        assert_eq!(normalize_wheel(windows, false), normalize_wheel(x11, false));
    }

    #[test]
    fn natural_scrolling_inverts() {
        let down = WheelInput::Button {
            button: 5,
            shift: false,
        };
        assert_eq!(normalize_wheel(down, true), Some((ScrollAxis::Vertical, -1)));
    }

    #[test]
    fn non_wheel_button_is_ignored() {
        let left_click = WheelInput::Button {
            button: 1,
            shift: false,
        };
        assert_eq!(normalize_wheel(left_click, false), None);
    }
}
