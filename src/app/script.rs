// SPDX-License-Identifier: GPL-3.0-or-later
// src/app/script.rs
//
// Line-based event scripts, so a session can be driven without a window.
//
//     # comment
//     press 20 20
//     drag 120 90
//     release
//     wheel -120 shift
//     button 5
//     scroll y 2
//     resize 640 480
//     reset
//     crop
//     save my crops/out.png
//
// `save` takes the rest of the line as its path, so the path may contain
// spaces but not `#`.

use std::path::PathBuf;
use std::str::FromStr;

use crate::app::input::WheelInput;
use crate::app::message::CropMessage;
use crate::app::view::viewport::ScrollAxis;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
#[error("line {line}: {message}")]
pub struct ScriptError {
    pub line: usize,
    pub message: String,
}

/// Parse a whole script. Blank lines and `#` comments are skipped.
pub fn parse_script(input: &str) -> Result<Vec<CropMessage>, ScriptError> {
    input
        .lines()
        .enumerate()
        .filter_map(|(idx, raw)| {
            let line = raw.split('#').next().unwrap_or_default().trim();
            (!line.is_empty()).then_some((idx + 1, line))
        })
        .map(|(line_no, line)| {
            parse_line(line).map_err(|message| ScriptError {
                line: line_no,
                message,
            })
        })
        .collect()
}

fn parse_line(line: &str) -> Result<CropMessage, String> {
    let (command, rest) = line.split_once(char::is_whitespace).unwrap_or((line, ""));
    let command = command.to_ascii_lowercase();

    if command == "save" {
        let path = rest.trim();
        if path.is_empty() {
            return Err("'save' needs a target path".to_owned());
        }
        return Ok(CropMessage::Save(PathBuf::from(path)));
    }

    let args: Vec<&str> = rest.split_whitespace().collect();

    let message = match (command.as_str(), args.as_slice()) {
        ("press", [x, y]) => CropMessage::Press {
            x: number(x)?,
            y: number(y)?,
        },
        ("drag", [x, y]) => CropMessage::Drag {
            x: number(x)?,
            y: number(y)?,
        },
        ("release", []) => CropMessage::Release,
        ("reset", []) => CropMessage::Reset,
        ("crop", []) => CropMessage::Crop,
        ("wheel", [delta, rest @ ..]) => CropMessage::Wheel(WheelInput::Delta {
            delta: number(delta)?,
            shift: shift_flag(rest)?,
        }),
        ("button", [button, rest @ ..]) => CropMessage::Wheel(WheelInput::Button {
            button: number(button)?,
            shift: shift_flag(rest)?,
        }),
        ("scroll", [axis, units]) => CropMessage::Scroll {
            axis: match axis.to_ascii_lowercase().as_str() {
                "x" => ScrollAxis::Horizontal,
                "y" => ScrollAxis::Vertical,
                other => return Err(format!("unknown axis '{other}', expected x or y")),
            },
            units: number(units)?,
        },
        ("scrollto", [x, y]) => CropMessage::ScrollTo {
            x: number(x)?,
            y: number(y)?,
        },
        ("resize", [w, h]) => CropMessage::Resize {
            width: number(w)?,
            height: number(h)?,
        },
        (
            "press" | "drag" | "release" | "reset" | "crop" | "wheel" | "button" | "scroll"
            | "scrollto" | "resize",
            _,
        ) => return Err(format!("wrong number of arguments for '{command}'")),
        _ => return Err(format!("unknown command '{command}'")),
    };

    Ok(message)
}

fn number<T: FromStr>(word: &str) -> Result<T, String> {
    word.parse()
        .map_err(|_| format!("'{word}' is not a valid number"))
}

fn shift_flag(rest: &[&str]) -> Result<bool, String> {
    match rest {
        [] => Ok(false),
        [flag] if flag.eq_ignore_ascii_case("shift") => Ok(true),
        _ => Err(format!("unexpected trailing arguments: {}", rest.join(" "))),
    }
}
