//! Masked password entry.
use std::io::{self, BufRead, IsTerminal, Write};

use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    terminal,
};
use tracing::debug;

use crate::lib::{errors::PromptError, secret::SecretString};

/// Glyph echoed for every typed character.
pub const MASK_GLYPH: char = '*';
const ERASE_GLYPH: &str = "\u{8} \u{8}";

/// What a key press did to the buffer, and therefore what to echo.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyOutcome {
    Appended,
    Erased,
    Unchanged,
    Submit,
    Cancel,
}

/// Key-by-key password buffer behind the terminal prompt.
#[derive(Debug, Default)]
pub struct MaskedInput {
    buffer: SecretString,
}

impl MaskedInput {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn handle(&mut self, key: KeyEvent) -> KeyOutcome {
        if key.kind == KeyEventKind::Release {
            return KeyOutcome::Unchanged;
        }

        match key.code {
            KeyCode::Enter => KeyOutcome::Submit,
            KeyCode::Char('c') | KeyCode::Char('C')
                if key.modifiers.contains(KeyModifiers::CONTROL) =>
            {
                KeyOutcome::Cancel
            }
            // AltGr arrives as CONTROL | ALT on Windows and yields a real character.
            KeyCode::Char(_)
                if key.modifiers.contains(KeyModifiers::CONTROL)
                    && !key.modifiers.contains(KeyModifiers::ALT) =>
            {
                KeyOutcome::Unchanged
            }
            KeyCode::Char(ch) => {
                self.buffer.push(ch);
                KeyOutcome::Appended
            }
            KeyCode::Tab => {
                self.buffer.push('\t');
                KeyOutcome::Appended
            }
            KeyCode::Backspace => {
                if self.buffer.pop() {
                    KeyOutcome::Erased
                } else {
                    KeyOutcome::Unchanged
                }
            }
            _ => KeyOutcome::Unchanged,
        }
    }

    pub fn len(&self) -> usize {
        self.buffer.char_count()
    }

    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    pub fn into_secret(self) -> SecretString {
        self.buffer
    }
}

/// Restores cooked mode when dropped.
struct RawModeGuard;

impl RawModeGuard {
    fn enable() -> io::Result<Self> {
        terminal::enable_raw_mode()?;
        Ok(Self)
    }
}

impl Drop for RawModeGuard {
    fn drop(&mut self) {
        if let Err(err) = terminal::disable_raw_mode() {
            debug!(
                target: "publish_web::cli",
                reason = %err,
                "Failed to restore terminal mode"
            );
        }
    }
}

/// Prompt on stderr and read a password. Keys are masked on a terminal;
/// otherwise one line is read from stdin. Empty input is rejected.
pub fn read_password(prompt: &str) -> Result<SecretString, PromptError> {
    let mut console = io::stderr();
    write!(console, "{prompt}")?;
    console.flush()?;

    let password = if io::stdin().is_terminal() {
        read_masked(&mut console)?
    } else {
        let password = read_line_from(io::stdin().lock())?;
        writeln!(console)?;
        password
    };

    if password.is_empty() {
        return Err(PromptError::EmptyPassword);
    }
    Ok(password)
}

fn read_masked<W: Write>(echo: &mut W) -> Result<SecretString, PromptError> {
    let _raw = RawModeGuard::enable()?;
    let mut input = MaskedInput::new();

    loop {
        let Event::Key(key) = event::read()? else {
            continue;
        };
        match input.handle(key) {
            KeyOutcome::Appended => write!(echo, "{MASK_GLYPH}")?,
            KeyOutcome::Erased => write!(echo, "{ERASE_GLYPH}")?,
            KeyOutcome::Unchanged => continue,
            KeyOutcome::Submit => {
                write!(echo, "\r\n")?;
                echo.flush()?;
                break;
            }
            KeyOutcome::Cancel => {
                write!(echo, "\r\n")?;
                echo.flush()?;
                return Err(PromptError::Interrupted);
            }
        }
        echo.flush()?;
    }

    Ok(input.into_secret())
}

/// Read one line, without its terminator, as a password.
pub fn read_line_from<R: BufRead>(mut reader: R) -> Result<SecretString, PromptError> {
    let mut line = String::new();
    reader.read_line(&mut line)?;
    while line.ends_with(&['\n', '\r'][..]) {
        line.pop();
    }
    Ok(SecretString::from(line))
}
