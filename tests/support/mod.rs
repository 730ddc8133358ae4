use std::collections::VecDeque;
use std::fs;
use std::io;
use std::path::Path;

use cardsmith::console::Console;
use cardsmith::menu::{Key, Menu, TextInput};
use cardsmith::{FontCatalog, FontCatalogEntry};

/// Console fed from a key script. Every drawn screen is recorded; once the
/// script runs out it reports [`Key::Interrupt`], which backs out of any menu.
#[derive(Default)]
pub struct ScriptedConsole {
    keys: VecDeque<Key>,
    pub screens: Vec<String>,
}

impl ScriptedConsole {
    pub fn new(keys: Vec<Key>) -> Self {
        Self {
            keys: keys.into(),
            screens: Vec::new(),
        }
    }

    pub fn saw(&self, needle: &str) -> bool {
        self.screens.iter().any(|screen| screen.contains(needle))
    }

    /// The most recent screen drawn for the menu titled `title`.
    pub fn last_menu(&self, title: &str) -> Option<&String> {
        self.screens.iter().rev().find(|s| s.starts_with(title))
    }
}

impl Console for ScriptedConsole {
    fn show_menu(&mut self, menu: &Menu) -> io::Result<()> {
        let mut screen = menu.title().to_string();
        for (idx, option) in menu.options().iter().enumerate() {
            let marker = if idx == menu.selected() { '>' } else { ' ' };
            screen.push_str(&format!("\n{marker} {option}"));
        }
        self.screens.push(screen);
        Ok(())
    }

    fn show_prompt(&mut self, input: &TextInput) -> io::Result<()> {
        self.screens.push(format!("{}{}", input.prompt(), input.buffer()));
        Ok(())
    }

    fn show_message(&mut self, message: &str) -> io::Result<()> {
        self.screens.push(message.to_string());
        Ok(())
    }

    fn read_key(&mut self) -> io::Result<Key> {
        Ok(self.keys.pop_front().unwrap_or(Key::Interrupt))
    }
}

pub fn typed(text: &str) -> Vec<Key> {
    text.chars().map(Key::Char).chain([Key::Enter]).collect()
}

pub fn down(n: usize) -> Vec<Key> {
    vec![Key::Down; n]
}

/// A catalog whose only font file is not a real font, so rendering
/// exercises the builtin fallback.
pub fn placeholder_catalog(dir: &Path) -> FontCatalog {
    let path = dir.join("Placeholder.ttf");
    fs::write(&path, b"not a font").unwrap();
    FontCatalog::new(vec![FontCatalogEntry {
        name: "Placeholder".into(),
        path,
    }])
}
