//! Text-mode driver for the settings panel.
//!
//! Delivers input one character per key event, the way the settings window
//! forwards key presses, and renders the resulting panel events as text.
//! The end of each line is delivered as an Enter key, so a phrase cannot
//! span lines. Confirmation prompts take their answer from the next input
//! line.

use crate::debug;
use crate::panel::{PanelEvent, SettingsPanel, Toggle};
use anyhow::{Context, Result};
use std::io::{self, BufRead, Write};

/// Run an interactive session until `input` is exhausted.
pub fn run_interactive<R, W>(
    panel: &mut SettingsPanel,
    input: R,
    output: &mut W,
    assume_yes: bool,
) -> Result<()>
where
    R: BufRead,
    W: Write,
{
    let mut lines = input.lines();
    while let Some(line) = lines.next() {
        let line = line.context("failed to read input")?;
        let mut buf = [0u8; 4];
        for ch in line.chars().chain(std::iter::once('\n')) {
            if let Some(phrase) = panel.key_press(ch.encode_utf8(&mut buf)) {
                writeln!(output, "Triggered: {phrase}")?;
            }
            handle_events(panel, &mut lines, output, assume_yes)?;
        }
    }
    Ok(())
}

/// Deliver `text` as a single key event and handle what it raises.
pub fn feed_text<I, W>(
    panel: &mut SettingsPanel,
    text: &str,
    answers: &mut I,
    output: &mut W,
    assume_yes: bool,
) -> Result<()>
where
    I: Iterator<Item = io::Result<String>>,
    W: Write,
{
    match panel.key_press(text) {
        Some(phrase) => writeln!(output, "Triggered: {phrase}")?,
        None => writeln!(output, "No trigger phrase completed")?,
    }
    handle_events(panel, answers, output, assume_yes)
}

/// Print the configured phrases.
pub fn list_bindings<W: Write>(panel: &SettingsPanel, output: &mut W) -> Result<()> {
    if !panel.is_enabled() {
        writeln!(output, "Secret codes are disabled")?;
    }
    for (phrase, action) in panel.bindings() {
        writeln!(output, "{phrase:<16} {action}")?;
    }
    Ok(())
}

/// Render queued panel events, asking for confirmation where needed.
///
/// Confirming a toggle can queue further events, so this drains until the
/// queue stays empty.
pub fn handle_events<I, W>(
    panel: &SettingsPanel,
    answers: &mut I,
    output: &mut W,
    assume_yes: bool,
) -> Result<()>
where
    I: Iterator<Item = io::Result<String>>,
    W: Write,
{
    loop {
        let events = panel.drain_events();
        if events.is_empty() {
            return Ok(());
        }
        for event in events {
            match event {
                PanelEvent::Confirm { message, toggle } => {
                    writeln!(output, "{message}")?;
                    if ask(answers, output, assume_yes)? {
                        let value = panel.confirm(toggle);
                        if toggle == Toggle::DebugMode {
                            debug::apply_debug_mode(value);
                        }
                        writeln!(output, "{:?}: {}", toggle, if value { "on" } else { "off" })?;
                    } else {
                        writeln!(output, "Cancelled")?;
                    }
                }
                PanelEvent::Inform(message) => writeln!(output, "{message}")?,
                PanelEvent::ChooseCustomLanguage => {
                    writeln!(output, "Choose a custom language pack")?
                }
                PanelEvent::OpenPaletteFile { title, filter } => {
                    writeln!(output, "{title}: {filter}")?
                }
                PanelEvent::StartThemeEditor => writeln!(output, "Starting theme editor")?,
                PanelEvent::RequestDifference => writeln!(output, "Requesting difference")?,
                PanelEvent::UserSettingsChanged => writeln!(output, "User settings changed")?,
            }
        }
    }
}

fn ask<I, W>(answers: &mut I, output: &mut W, assume_yes: bool) -> Result<bool>
where
    I: Iterator<Item = io::Result<String>>,
    W: Write,
{
    if assume_yes {
        writeln!(output, "[y/N] y")?;
        return Ok(true);
    }
    write!(output, "[y/N] ")?;
    output.flush()?;
    match answers.next() {
        Some(answer) => {
            let answer = answer.context("failed to read answer")?;
            let answer = answer.trim().to_lowercase();
            Ok(answer == "y" || answer == "yes")
        }
        None => Ok(false),
    }
}
