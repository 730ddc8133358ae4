//! The interactive card session: main menu, configuration flow and sub-menus.
//!
//! Each step draws the current state, reads one key and computes the next
//! state. The card configuration is threaded through as a value and only
//! handed to the renderer on "Preview Card" or "Create Card".

use std::path::PathBuf;

use tracing::{info, warn};

use crate::card::{CardConfig, RepeatCount};
use crate::color::{CardColor, PRESETS};
use crate::console::Console;
use crate::error::CardError;
use crate::fonts::FontCatalog;
use crate::menu::{InputEvent, Menu, MenuEvent, TextInput};
use crate::output::{CardOutput, DeleteOutcome};
use crate::render::render_card;

pub const TITLE_MAX_LEN: usize = 50;
pub const DESCRIPTION_MAX_LEN: usize = 100;
pub const CAPTION_MAX_LEN: usize = 50;
pub const HEX_MAX_LEN: usize = 7;

const MAIN_OPTIONS: [&str; 3] = ["Create Card", "Delete Card", "Exit"];
const CUSTOM_HEX: &str = "Custom Hex Color";
const NO_BORDER: &str = "No Border";
const CONTINUE: &str = "Press any key to continue.";

/// Rows of the configuration menu, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ConfigRow {
    Title,
    Description,
    Font,
    Times,
    BorderColor,
    BackgroundColor,
    TextColor,
    AddCaption,
    Preview,
    Create,
}

const CONFIG_ROWS: [ConfigRow; 10] = [
    ConfigRow::Title,
    ConfigRow::Description,
    ConfigRow::Font,
    ConfigRow::Times,
    ConfigRow::BorderColor,
    ConfigRow::BackgroundColor,
    ConfigRow::TextColor,
    ConfigRow::AddCaption,
    ConfigRow::Preview,
    ConfigRow::Create,
];

/// Outcome of the color sub-menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ColorChoice {
    Color(CardColor),
    NoBorder,
}

/// Labels of the configuration menu, showing the current values.
pub fn config_menu_options(config: &CardConfig) -> Vec<String> {
    let or_not_set = |value: &str| {
        if value.is_empty() {
            "Not Set".to_string()
        } else {
            value.to_string()
        }
    };
    CONFIG_ROWS
        .iter()
        .map(|row| match row {
            ConfigRow::Title => format!("Set Name • {}", or_not_set(&config.title)),
            ConfigRow::Description => format!("Set Desc • {}", or_not_set(&config.description)),
            ConfigRow::Font => format!(
                "Select Font • {}",
                config.font.as_ref().map_or("None", |f| f.name.as_str())
            ),
            ConfigRow::Times => format!("How Many Times • {}", config.times),
            ConfigRow::BorderColor => format!(
                "Border Color • {}",
                config.border_color.map_or("None".to_string(), |c| c.describe())
            ),
            ConfigRow::BackgroundColor => {
                format!("Background Color • {}", config.background_color.describe())
            }
            ConfigRow::TextColor => format!("Text Color • {}", config.text_color.describe()),
            ConfigRow::AddCaption => match config.captions.len() {
                0 => "Add Additional Text".to_string(),
                n => format!("Add Additional Text • {n} added"),
            },
            ConfigRow::Preview => "Preview Card".to_string(),
            ConfigRow::Create => "Create Card".to_string(),
        })
        .collect()
}

/// Drives the menus over a [`Console`].
pub struct Session<'a, C: Console> {
    console: &'a mut C,
    catalog: &'a FontCatalog,
    output: &'a CardOutput,
}

impl<'a, C: Console> Session<'a, C> {
    pub fn new(console: &'a mut C, catalog: &'a FontCatalog, output: &'a CardOutput) -> Self {
        Self {
            console,
            catalog,
            output,
        }
    }

    /// Run the main menu until the user picks "Exit" (or cancels it).
    pub fn run(&mut self) -> Result<(), CardError> {
        let mut row = 0;
        loop {
            let menu = Menu::new("Main Menu", MAIN_OPTIONS.map(String::from).to_vec())
                .with_selected(row);
            let Some(choice) = self.choose(menu)? else {
                return Ok(());
            };
            row = choice;
            match choice {
                0 => {
                    self.create_card()?;
                }
                1 => self.delete_card()?,
                _ => return Ok(()),
            }
        }
    }

    /// Collect a configuration and create the card.
    ///
    /// Returns the saved path, or `None` when the user backed out.
    pub fn create_card(&mut self) -> Result<Option<PathBuf>, CardError> {
        let mut config = CardConfig::new(self.catalog.first().cloned());
        let mut row = 0;
        loop {
            let menu = Menu::new("Card Configuration", config_menu_options(&config))
                .with_selected(row);
            let Some(choice) = self.choose(menu)? else {
                return Ok(None);
            };
            row = choice;
            match CONFIG_ROWS[choice] {
                ConfigRow::Title => {
                    if let Some(title) = self.read_text("Enter the title: ", TITLE_MAX_LEN)? {
                        config = config.with_title(title);
                    }
                }
                ConfigRow::Description => {
                    if let Some(description) =
                        self.read_text("Enter the description: ", DESCRIPTION_MAX_LEN)?
                    {
                        config = config.with_description(description);
                    }
                }
                ConfigRow::Font => config = self.select_font(config)?,
                ConfigRow::Times => config = self.select_times(config)?,
                ConfigRow::BorderColor => {
                    match self.select_color("Border", true)? {
                        Some(ColorChoice::Color(color)) => {
                            config = config.with_border_color(Some(color))
                        }
                        Some(ColorChoice::NoBorder) => config = config.with_border_color(None),
                        None => {}
                    }
                }
                ConfigRow::BackgroundColor => {
                    if let Some(ColorChoice::Color(color)) = self.select_color("Background", false)? {
                        config = config.with_background_color(color);
                    }
                }
                ConfigRow::TextColor => {
                    if let Some(ColorChoice::Color(color)) = self.select_color("Text", false)? {
                        config = config.with_text_color(color);
                    }
                }
                ConfigRow::AddCaption => {
                    if let Some(caption) =
                        self.read_text("Enter additional text: ", CAPTION_MAX_LEN)?
                    {
                        if !caption.is_empty() {
                            config = config.with_caption(caption);
                        }
                    }
                }
                ConfigRow::Preview => {
                    if self.save(&config)?.is_some() {
                        self.notify(&format!("Card previewed! {CONTINUE}"))?;
                    }
                }
                ConfigRow::Create => {
                    if let Err(err) = config.ensure_complete() {
                        self.notify(&format!("{err}.\n{CONTINUE}"))?;
                        continue;
                    }
                    if self.catalog.is_empty() {
                        self.notify(&format!(
                            "No fonts available; add .ttf or .otf files to the font directory.\n{CONTINUE}"
                        ))?;
                        continue;
                    }
                    if let Some(path) = self.save(&config)? {
                        self.notify(&format!("Card saved as {}\n{CONTINUE}", path.display()))?;
                        return Ok(Some(path));
                    }
                }
            }
        }
    }

    /// Delete the saved card, reporting whether one existed.
    pub fn delete_card(&mut self) -> Result<(), CardError> {
        let message = match self.output.delete() {
            Ok(DeleteOutcome::Deleted(path)) => format!("Deleted {}", path.display()),
            Ok(DeleteOutcome::NotFound(dir)) => format!("No card found in {}", dir.display()),
            Err(err) => {
                warn!(error = %err, "delete failed");
                format!("Failed to delete card: {err}")
            }
        };
        self.notify(&format!("{message}\n{CONTINUE}"))
    }

    fn select_font(&mut self, config: CardConfig) -> Result<CardConfig, CardError> {
        if self.catalog.is_empty() {
            self.notify(&format!("No fonts found.\n{CONTINUE}"))?;
            return Ok(config);
        }
        let names = self.catalog.entries().iter().map(|f| f.name.clone()).collect();
        let current = config
            .font
            .as_ref()
            .and_then(|font| self.catalog.entries().iter().position(|f| f == font))
            .unwrap_or(0);
        let menu = Menu::new("Select a Font", names).with_selected(current);
        Ok(match self.choose(menu)?.and_then(|i| self.catalog.get(i)) {
            Some(font) => config.with_font(font.clone()),
            None => config,
        })
    }

    fn select_times(&mut self, config: CardConfig) -> Result<CardConfig, CardError> {
        let choices = RepeatCount::choices();
        let labels = choices.iter().map(|c| c.to_string()).collect();
        let current = choices.iter().position(|c| *c == config.times).unwrap_or(0);
        let menu = Menu::new("Select How Many Times", labels).with_selected(current);
        Ok(match self.choose(menu)? {
            Some(i) => config.with_times(choices[i]),
            None => config,
        })
    }

    fn select_color(&mut self, layer: &str, allow_none: bool) -> Result<Option<ColorChoice>, CardError> {
        let mut options: Vec<String> = PRESETS.iter().map(|(name, _)| name.to_string()).collect();
        options.push(CUSTOM_HEX.to_string());
        if allow_none {
            options.push(NO_BORDER.to_string());
        }
        let mut row = 0;
        loop {
            let menu = Menu::new(format!("Select {layer} Color"), options.clone()).with_selected(row);
            let Some(choice) = self.choose(menu)? else {
                return Ok(None);
            };
            row = choice;
            if let Some((_, color)) = PRESETS.get(choice) {
                return Ok(Some(ColorChoice::Color(*color)));
            }
            if options[choice] == NO_BORDER {
                return Ok(Some(ColorChoice::NoBorder));
            }
            let Some(raw) = self.read_text("Enter hex color (e.g., #FF5733): ", HEX_MAX_LEN)? else {
                continue;
            };
            match CardColor::from_hex(raw.trim()) {
                Ok(color) => return Ok(Some(ColorChoice::Color(color))),
                Err(err) => {
                    info!(error = %err, "rejected custom color");
                    self.notify(&format!("Invalid hex code. Try again.\n{CONTINUE}"))?;
                }
            }
        }
    }

    /// Render and save; failures are shown to the user instead of ending the session.
    fn save(&mut self, config: &CardConfig) -> Result<Option<PathBuf>, CardError> {
        let card = render_card(config);
        match self.output.save(&card) {
            Ok(path) => Ok(Some(path)),
            Err(err) => {
                warn!(error = %err, "failed to save card");
                self.notify(&format!("Failed to save card: {err}\n{CONTINUE}"))?;
                Ok(None)
            }
        }
    }

    fn choose(&mut self, mut menu: Menu) -> Result<Option<usize>, CardError> {
        loop {
            self.console.show_menu(&menu)?;
            match menu.handle(self.console.read_key()?) {
                MenuEvent::Pending => {}
                MenuEvent::Selected(i) => return Ok(Some(i)),
                MenuEvent::Cancelled => return Ok(None),
            }
        }
    }

    fn read_text(&mut self, prompt: &str, max_len: usize) -> Result<Option<String>, CardError> {
        let mut input = TextInput::new(prompt, max_len);
        loop {
            self.console.show_prompt(&input)?;
            match input.handle(self.console.read_key()?) {
                InputEvent::Pending => {}
                InputEvent::Submitted(text) => return Ok(Some(text)),
                InputEvent::Cancelled => return Ok(None),
            }
        }
    }

    fn notify(&mut self, message: &str) -> Result<(), CardError> {
        self.console.show_message(message)?;
        self.console.read_key()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fonts::FontCatalogEntry;
    use pretty_assertions::assert_eq;

    #[test]
    fn config_menu_shows_current_values() {
        let config = CardConfig::new(Some(FontCatalogEntry {
            name: "Serif".into(),
            path: "fonts/Serif.ttf".into(),
        }))
        .with_title("Hello")
        .with_border_color(None)
        .with_text_color(CardColor::new(1, 2, 3))
        .with_caption("extra");
        assert_eq!(
            config_menu_options(&config),
            vec![
                "Set Name • Hello",
                "Set Desc • Not Set",
                "Select Font • Serif",
                "How Many Times • 1",
                "Border Color • None",
                "Background Color • White",
                "Text Color • #010203",
                "Add Additional Text • 1 added",
                "Preview Card",
                "Create Card",
            ]
        );
    }
}
