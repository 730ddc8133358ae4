//! Selection and text-entry state machines driven one key at a time.

/// A discrete input event, independent of the terminal backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Up,
    Down,
    Enter,
    Backspace,
    Esc,
    Char(char),
    /// Ctrl-C or end of input.
    Interrupt,
}

/// What a menu decided after a key press.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuEvent {
    Pending,
    Selected(usize),
    Cancelled,
}

/// An ordered list of options with one highlighted row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Menu {
    title: String,
    options: Vec<String>,
    selected: usize,
}

impl Menu {
    pub fn new(title: impl Into<String>, options: Vec<String>) -> Self {
        Self {
            title: title.into(),
            options,
            selected: 0,
        }
    }

    /// Start with `row` highlighted (clamped to the last option).
    pub fn with_selected(mut self, row: usize) -> Self {
        self.selected = row.min(self.options.len().saturating_sub(1));
        self
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn options(&self) -> &[String] {
        &self.options
    }

    pub fn selected(&self) -> usize {
        self.selected
    }

    pub fn handle(&mut self, key: Key) -> MenuEvent {
        match key {
            Key::Up => {
                self.selected = self.selected.saturating_sub(1);
                MenuEvent::Pending
            }
            Key::Down => {
                if self.selected + 1 < self.options.len() {
                    self.selected += 1;
                }
                MenuEvent::Pending
            }
            Key::Enter if !self.options.is_empty() => MenuEvent::Selected(self.selected),
            Key::Esc | Key::Interrupt => MenuEvent::Cancelled,
            _ => MenuEvent::Pending,
        }
    }
}

/// What a text prompt decided after a key press.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputEvent {
    Pending,
    Submitted(String),
    Cancelled,
}

/// A single-line text prompt with a maximum length in characters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextInput {
    prompt: String,
    buffer: String,
    max_len: usize,
}

impl TextInput {
    pub fn new(prompt: impl Into<String>, max_len: usize) -> Self {
        Self {
            prompt: prompt.into(),
            buffer: String::new(),
            max_len,
        }
    }

    pub fn prompt(&self) -> &str {
        &self.prompt
    }

    pub fn buffer(&self) -> &str {
        &self.buffer
    }

    pub fn handle(&mut self, key: Key) -> InputEvent {
        match key {
            Key::Enter => InputEvent::Submitted(self.buffer.clone()),
            Key::Esc | Key::Interrupt => InputEvent::Cancelled,
            Key::Backspace => {
                self.buffer.pop();
                InputEvent::Pending
            }
            Key::Char(c) if !c.is_control() && self.buffer.chars().count() < self.max_len => {
                self.buffer.push(c);
                InputEvent::Pending
            }
            _ => InputEvent::Pending,
        }
    }
}
