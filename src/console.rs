//! Terminal front end for the interactive session.

use std::io::{self, Stdout, Write};

use crossterm::event::{self, Event, KeyCode, KeyEventKind, KeyModifiers};
use crossterm::style::{Attribute, Print, SetAttribute};
use crossterm::terminal::{self, ClearType};
use crossterm::{QueueableCommand, cursor, execute};

use crate::menu::{Key, Menu, TextInput};

/// Screen and keyboard used by [`Session`](crate::session::Session).
pub trait Console {
    fn show_menu(&mut self, menu: &Menu) -> io::Result<()>;
    fn show_prompt(&mut self, input: &TextInput) -> io::Result<()>;
    fn show_message(&mut self, message: &str) -> io::Result<()>;
    /// Block until the next key press.
    fn read_key(&mut self) -> io::Result<Key>;
}

/// Full-screen crossterm console. Raw mode and the alternate screen are
/// restored when it is dropped.
pub struct TerminalConsole {
    out: Stdout,
}

impl TerminalConsole {
    pub fn enter() -> io::Result<Self> {
        terminal::enable_raw_mode()?;
        let mut out = io::stdout();
        if let Err(err) = execute!(out, terminal::EnterAlternateScreen, cursor::Hide) {
            let _ = terminal::disable_raw_mode();
            return Err(err);
        }
        Ok(Self { out })
    }

    fn clear(&mut self) -> io::Result<()> {
        self.out.queue(terminal::Clear(ClearType::All))?;
        self.out.queue(cursor::MoveTo(0, 0))?;
        Ok(())
    }

    fn title(&mut self, text: &str) -> io::Result<()> {
        self.out.queue(SetAttribute(Attribute::Bold))?;
        self.out.queue(Print(text))?;
        self.out.queue(SetAttribute(Attribute::Reset))?;
        Ok(())
    }
}

impl Drop for TerminalConsole {
    fn drop(&mut self) {
        let _ = execute!(self.out, cursor::Show, terminal::LeaveAlternateScreen);
        let _ = terminal::disable_raw_mode();
    }
}

impl Console for TerminalConsole {
    fn show_menu(&mut self, menu: &Menu) -> io::Result<()> {
        self.clear()?;
        self.out.queue(cursor::Hide)?;
        self.title(menu.title())?;
        for (idx, option) in menu.options().iter().enumerate() {
            self.out.queue(cursor::MoveTo(2, idx as u16 + 2))?;
            if idx == menu.selected() {
                self.out.queue(SetAttribute(Attribute::Reverse))?;
                self.out.queue(Print(option))?;
                self.out.queue(SetAttribute(Attribute::Reset))?;
            } else {
                self.out.queue(Print(option))?;
            }
        }
        self.out.flush()
    }

    fn show_prompt(&mut self, input: &TextInput) -> io::Result<()> {
        self.clear()?;
        self.title(input.prompt())?;
        self.out.queue(cursor::MoveTo(0, 1))?;
        self.out.queue(Print(input.buffer()))?;
        self.out.queue(cursor::Show)?;
        self.out.flush()
    }

    fn show_message(&mut self, message: &str) -> io::Result<()> {
        self.clear()?;
        self.out.queue(cursor::Hide)?;
        for (row, line) in message.lines().enumerate() {
            self.out.queue(cursor::MoveTo(0, row as u16))?;
            if row == 0 {
                self.title(line)?;
            } else {
                self.out.queue(Print(line))?;
            }
        }
        self.out.flush()
    }

    fn read_key(&mut self) -> io::Result<Key> {
        loop {
            let Event::Key(key) = event::read()? else {
                continue;
            };
            if key.kind != KeyEventKind::Press {
                continue;
            }
            if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
                return Ok(Key::Interrupt);
            }
            let mapped = match key.code {
                KeyCode::Up => Key::Up,
                KeyCode::Down => Key::Down,
                KeyCode::Enter => Key::Enter,
                KeyCode::Backspace => Key::Backspace,
                KeyCode::Esc => Key::Esc,
                KeyCode::Char(c) => Key::Char(c),
                _ => continue,
            };
            return Ok(mapped);
        }
    }
}
