// SPDX-License-Identifier: MPL-2.0
//! Line-oriented viewer driver.
//!
//! Reads one command per line, feeds it to the viewer as a [`Message`] and
//! prints the resulting view. The terminal plays the host: fullscreen
//! requests are granted immediately and reported back, and the scroll lock
//! is only logged.
//!
//! ```text
//! open N | entry N | next | prev | esc | close | wheel DY
//! press X Y | move X Y | release | leave | resize W H
//! fullscreen | fs-changed on|off | key NAME | quit
//! ```

use crate::application::port::ScrollSurface;
use crate::config::Config;
use crate::error::Result;
use crate::gallery::{Category, GalleryBuilder};
use crate::ui::geometry::{Point, Size};
use crate::ui::viewer::{Effect, Key, Message, State, ViewLevel};
use std::fmt::Write as _;
use std::io::{self, BufRead, Write};
use std::rc::Rc;

/// Scroll surface that only reports lock changes to the log.
#[derive(Debug, Default)]
pub struct LoggingSurface;

impl ScrollSurface for LoggingSurface {
    fn set_background_scroll_locked(&self, locked: bool) {
        tracing::info!(locked, "background scroll lock");
    }
}

/// Result of reading one input line.
#[derive(Debug, Clone, PartialEq)]
pub enum Input {
    Message(Message),
    Quit,
}

fn parse_f32(word: Option<&str>) -> Option<f32> {
    word?.parse().ok()
}

fn parse_point<'a>(mut words: impl Iterator<Item = &'a str>) -> Option<Point> {
    Some(Point::new(parse_f32(words.next())?, parse_f32(words.next())?))
}

/// Parses one input line. Blank and unknown lines yield `None`.
#[must_use]
pub fn parse_command(line: &str) -> Option<Input> {
    let mut words = line.split_whitespace();
    let message = match words.next()? {
        "open" => Message::OpenCategory(words.next()?.parse().ok()?),
        "entry" => Message::OpenEntry(words.next()?.parse().ok()?),
        "next" => Message::Next,
        "prev" => Message::Previous,
        "esc" => Message::Escape,
        "close" => Message::Close,
        "wheel" => Message::Wheel {
            delta_y: parse_f32(words.next())?,
        },
        "press" => Message::PointerPressed(parse_point(words)?),
        "move" => Message::PointerMoved(parse_point(words)?),
        "release" => Message::PointerReleased,
        "leave" => Message::PointerLeft,
        "resize" => {
            let Point { x, y } = parse_point(words)?;
            Message::ContainerResized(Size::new(x, y))
        }
        "fullscreen" => Message::ToggleFullscreen,
        "fs-changed" => match words.next()? {
            "on" => Message::FullscreenChanged(true),
            "off" => Message::FullscreenChanged(false),
            _ => return None,
        },
        "key" => Message::Key(Key::from_name(words.next()?)),
        "quit" | "exit" => return Some(Input::Quit),
        _ => return None,
    };
    Some(Input::Message(message))
}

/// Renders the current view as text.
#[must_use]
pub fn describe(state: &State) -> String {
    let mut out = String::new();
    match state.level() {
        ViewLevel::Grid => {
            let _ = writeln!(out, "grid: {} categories", state.categories().len());
            for (index, category) in state.categories().iter().enumerate() {
                let _ = writeln!(
                    out,
                    "  [{index}] {} ({} entries)",
                    category.name,
                    category.entries.len()
                );
            }
        }
        ViewLevel::Folder { .. } if !state.is_auto_expanded() => {
            if let Some(category) = state.current_category() {
                let _ = writeln!(out, "folder: {}", category.name);
                for (index, entry) in category.entries.iter().enumerate() {
                    let _ = writeln!(out, "  [{index}] {:?} {}", entry.kind, entry.name);
                }
            }
        }
        ViewLevel::Folder { .. } | ViewLevel::Item { .. } => describe_item(state, &mut out),
    }
    out
}

fn describe_item(state: &State, out: &mut String) {
    let media = state.current_media().unwrap_or_default();
    let kind = state.current_kind().map_or("-", |kind| kind.as_str());
    let _ = write!(out, "item: {media} ({kind})");
    if let Some(nav) = state.navigation() {
        let _ = write!(out, " {}/{}", nav.position, nav.total);
    }
    let _ = write!(
        out,
        " zoom {:.2} pan ({:.1}, {:.1}) cursor {:?}",
        state.zoom.factor.value(),
        state.zoom.pan.x,
        state.zoom.pan.y,
        state.cursor_hint()
    );
    if state.is_fullscreen() {
        out.push_str(" [fullscreen]");
    }
    if state.scroll_locked() {
        out.push_str(" [scroll locked]");
    }
    out.push('\n');
}

/// Applies one message and plays the host's part for the returned effect.
pub fn apply(state: &mut State, message: Message) -> Effect {
    let effect = state.handle_message(message);
    match effect {
        Effect::None => {}
        Effect::RequestFullscreen => {
            state.handle_message(Message::FullscreenChanged(true));
        }
        Effect::ExitFullscreen => {
            state.handle_message(Message::FullscreenChanged(false));
        }
    }
    effect
}

/// Runs the driver over arbitrary input and output streams.
///
/// # Errors
///
/// Returns [`crate::error::Error::Io`] if reading or writing fails.
pub fn run<R: BufRead, W: Write>(
    categories: Vec<Category>,
    input: R,
    mut output: W,
) -> Result<()> {
    let mut state = State::with_gallery(categories, Rc::new(LoggingSurface));
    output.write_all(describe(&state).as_bytes())?;

    for line in input.lines() {
        let line = line?;
        match parse_command(&line) {
            Some(Input::Quit) => break,
            Some(Input::Message(message)) => {
                let effect = apply(&mut state, message);
                if effect != Effect::None {
                    writeln!(output, "effect: {effect:?}")?;
                }
                output.write_all(describe(&state).as_bytes())?;
            }
            None if line.trim().is_empty() => {}
            None => writeln!(output, "unknown command: {}", line.trim())?,
        }
    }
    output.flush()?;
    Ok(())
}

pub(crate) fn run_stdio(config: &Config, folder: Option<&str>) -> Result<()> {
    let categories = GalleryBuilder::from_config(&config.gallery).build(folder)?;
    let stdin = io::stdin();
    run(categories, stdin.lock(), io::stdout().lock())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gallery::Entry;

    fn categories() -> Vec<Category> {
        vec![Category {
            name: "Set".into(),
            path: "/pics/models/Set".into(),
            entries: vec![
                Entry::media("a.png", "/pics/models/Set/a.png"),
                Entry::media("b.png", "/pics/models/Set/b.png"),
            ],
        }]
    }

    fn session(script: &str) -> String {
        let mut output = Vec::new();
        run(categories(), script.as_bytes(), &mut output).expect("session runs");
        String::from_utf8(output).expect("utf-8 output")
    }

    #[test]
    fn parses_pointer_and_resize_commands() {
        assert_eq!(
            parse_command("press 10 20.5"),
            Some(Input::Message(Message::PointerPressed(Point::new(10.0, 20.5))))
        );
        assert_eq!(
            parse_command("resize 800 600"),
            Some(Input::Message(Message::ContainerResized(Size::new(800.0, 600.0))))
        );
        assert_eq!(parse_command("press 10"), None);
        assert_eq!(parse_command("open x"), None);
        assert_eq!(parse_command(""), None);
        assert_eq!(parse_command("quit"), Some(Input::Quit));
    }

    #[test]
    fn session_walks_into_an_item_and_back() {
        let out = session("open 0\nentry 1\nnext\nesc\nesc\n");
        assert!(out.starts_with("grid: 1 categories"));
        assert!(out.contains("folder: Set"));
        assert!(out.contains("item: /pics/models/Set/b.png (image) 2/2"));
        assert!(out.contains("item: /pics/models/Set/a.png (image) 1/2"));
        assert!(out.trim_end().ends_with("(2 entries)"));
    }

    #[test]
    fn fullscreen_requests_are_granted_by_the_terminal_host() {
        let out = session("open 0\nentry 0\nfullscreen\nesc\nquit\nnext\n");
        assert!(out.contains("effect: RequestFullscreen"));
        assert!(out.contains("[fullscreen]"));
        assert!(out.contains("effect: ExitFullscreen"));
        assert!(!out.contains("2/2"));
    }

    #[test]
    fn unknown_lines_are_reported() {
        let out = session("dance\n\n");
        assert!(out.contains("unknown command: dance"));
    }
}
