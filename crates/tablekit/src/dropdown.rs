//! Dropdown menu primitive.
//!
//! A [`DropdownMenu`] is a button that opens a panel of entries. The column
//! toggle and the row actions menu are both built on it. Entries carry an
//! action value of any type; selecting an entry hands its action back to
//! the caller, which decides what it means.
//!
//! ```rust
//! use tablekit::{DropdownMenu, MenuEntry};
//!
//! let mut menu = DropdownMenu::new("Sort")
//!     .entry(MenuEntry::label("Order by"))
//!     .entry(MenuEntry::item("Newest", "newest"))
//!     .entry(MenuEntry::item("Oldest", "oldest").disabled(true));
//!
//! assert_eq!(menu.select(1), None); // closed menus ignore selections
//!
//! menu.toggle();
//! assert_eq!(menu.select(2), None); // disabled
//! assert_eq!(menu.select(1), Some("newest"));
//! assert!(!menu.is_open());
//! ```
//!
//! # Controlled mode
//!
//! With [`on_open_change`](DropdownMenu::on_open_change) the menu reports
//! open/close requests instead of only acting on them, and with
//! [`controlled`](DropdownMenu::controlled) the caller owns the open flag
//! and feeds it back through [`set_open`](DropdownMenu::set_open).

use std::fmt;

use console::Style;
use tablekit_render::{display_width, paint, pad_right, OutputMode, Region, ThemeTokens};
use tracing::trace;

/// Open state change notification.
pub type OpenChangeFn = Box<dyn FnMut(bool)>;

/// One entry of a dropdown panel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MenuEntry<A> {
    /// Non-interactive group heading.
    Label(String),
    /// Clickable entry.
    Item {
        label: String,
        action: A,
        disabled: bool,
        destructive: bool,
    },
    /// Entry with a checked state.
    Checkbox {
        label: String,
        checked: bool,
        action: A,
    },
    Divider,
}

impl<A> MenuEntry<A> {
    pub fn label(text: impl Into<String>) -> Self {
        MenuEntry::Label(text.into())
    }

    pub fn item(label: impl Into<String>, action: A) -> Self {
        MenuEntry::Item {
            label: label.into(),
            action,
            disabled: false,
            destructive: false,
        }
    }

    pub fn checkbox(label: impl Into<String>, checked: bool, action: A) -> Self {
        MenuEntry::Checkbox {
            label: label.into(),
            checked,
            action,
        }
    }

    /// Disables an item. Other entries are returned unchanged.
    pub fn disabled(mut self, value: bool) -> Self {
        if let MenuEntry::Item { disabled, .. } = &mut self {
            *disabled = value;
        }
        self
    }

    /// Marks an item as destructive. Other entries are returned unchanged.
    pub fn destructive(mut self, value: bool) -> Self {
        if let MenuEntry::Item { destructive, .. } = &mut self {
            *destructive = value;
        }
        self
    }

    /// Visible text of the entry, without decoration.
    pub fn text(&self) -> Option<&str> {
        match self {
            MenuEntry::Label(text) => Some(text),
            MenuEntry::Item { label, .. } | MenuEntry::Checkbox { label, .. } => Some(label),
            MenuEntry::Divider => None,
        }
    }

    /// The entry's action, if selecting it does anything.
    pub fn action(&self) -> Option<&A> {
        match self {
            MenuEntry::Item {
                action,
                disabled: false,
                ..
            }
            | MenuEntry::Checkbox { action, .. } => Some(action),
            _ => None,
        }
    }

    fn plain_text(&self) -> Option<String> {
        match self {
            MenuEntry::Label(text) => Some(text.clone()),
            MenuEntry::Item {
                label, disabled, ..
            } => Some(if *disabled {
                format!("{} (disabled)", label)
            } else {
                label.clone()
            }),
            MenuEntry::Checkbox { label, checked, .. } => {
                Some(format!("[{}] {}", if *checked { "x" } else { " " }, label))
            }
            MenuEntry::Divider => None,
        }
    }
}

/// Side of the button the panel lines up with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MenuAlign {
    Left,
    #[default]
    Right,
}

/// Button with a panel of entries.
pub struct DropdownMenu<A> {
    button_label: String,
    entries: Vec<MenuEntry<A>>,
    align: MenuAlign,
    show_caret: bool,
    button_region: Region,
    panel_region: Region,
    open: bool,
    controlled: Option<bool>,
    on_open_change: Option<OpenChangeFn>,
}

impl<A> DropdownMenu<A> {
    /// Creates a closed, right-aligned menu with a caret.
    pub fn new(button_label: impl Into<String>) -> Self {
        DropdownMenu {
            button_label: button_label.into(),
            entries: Vec::new(),
            align: MenuAlign::default(),
            show_caret: true,
            button_region: Region::ToolbarButton,
            panel_region: Region::ToolbarDropdown,
            open: false,
            controlled: None,
            on_open_change: None,
        }
    }

    pub fn entry(mut self, entry: MenuEntry<A>) -> Self {
        self.entries.push(entry);
        self
    }

    pub fn entries(mut self, entries: impl IntoIterator<Item = MenuEntry<A>>) -> Self {
        self.entries.extend(entries);
        self
    }

    pub fn align(mut self, align: MenuAlign) -> Self {
        self.align = align;
        self
    }

    pub fn show_caret(mut self, show: bool) -> Self {
        self.show_caret = show;
        self
    }

    /// Theme regions the button and the panel are painted with.
    pub fn regions(mut self, button: Region, panel: Region) -> Self {
        self.button_region = button;
        self.panel_region = panel;
        self
    }

    /// Makes the open flag caller-owned, starting at `is_open`.
    pub fn controlled(mut self, is_open: bool) -> Self {
        self.controlled = Some(is_open);
        self
    }

    /// Called with the requested open state whenever the menu would open
    /// or close.
    pub fn on_open_change<F>(mut self, f: F) -> Self
    where
        F: FnMut(bool) + 'static,
    {
        self.on_open_change = Some(Box::new(f));
        self
    }

    pub fn set_entries(&mut self, entries: Vec<MenuEntry<A>>) {
        self.entries = entries;
    }

    pub fn get_entries(&self) -> &[MenuEntry<A>] {
        &self.entries
    }

    pub fn button_label(&self) -> &str {
        &self.button_label
    }

    pub fn is_open(&self) -> bool {
        self.controlled.unwrap_or(self.open)
    }

    pub fn is_controlled(&self) -> bool {
        self.controlled.is_some()
    }

    /// Feeds back the caller-owned open flag. Uncontrolled menus take it
    /// as their own state.
    pub fn set_open(&mut self, open: bool) {
        match &mut self.controlled {
            Some(state) => *state = open,
            None => self.open = open,
        }
    }

    /// Button click.
    pub fn toggle(&mut self) {
        self.request(!self.is_open());
    }

    pub fn open(&mut self) {
        self.request(true);
    }

    pub fn close(&mut self) {
        self.request(false);
    }

    /// A click anywhere outside the menu closes it.
    pub fn click_outside(&mut self) {
        self.request(false);
    }

    fn request(&mut self, open: bool) {
        if open == self.is_open() {
            return;
        }
        trace!(menu = %self.button_label, open, "dropdown open change");
        if let Some(cb) = self.on_open_change.as_mut() {
            cb(open);
        }
        if self.controlled.is_none() {
            self.open = open;
        }
    }

    /// Renders the button line, followed by the panel when open.
    pub fn render(&self, theme: &ThemeTokens, mode: OutputMode) -> Vec<String> {
        let button_text = self.button_text();
        let mut lines = vec![theme.paint(self.button_region, &button_text, mode)];
        if !self.is_open() {
            return lines;
        }

        let texts: Vec<Option<String>> = self.entries.iter().map(MenuEntry::plain_text).collect();
        let inner = self.panel_width() - 2;
        let indent = match self.align {
            MenuAlign::Left => 0,
            MenuAlign::Right => display_width(&button_text).saturating_sub(inner + 2),
        };
        let destructive = Style::new().red();

        for (entry, text) in self.entries.iter().zip(texts) {
            let body = match (entry, text) {
                (MenuEntry::Item {
                    destructive: true, ..
                }, Some(text)) => {
                    let padded = pad_right(&text, inner);
                    if mode.is_debug() {
                        theme.paint(self.panel_region, &padded, mode)
                    } else {
                        paint(&destructive, &padded, mode)
                    }
                }
                (_, Some(text)) => theme.paint(self.panel_region, &pad_right(&text, inner), mode),
                (_, None) => theme.paint(self.panel_region, &"─".repeat(inner), mode),
            };
            lines.push(format!("{}  {}", " ".repeat(indent), body));
        }
        lines
    }

    /// Display width of the button.
    pub fn button_width(&self) -> usize {
        display_width(&self.button_text())
    }

    /// Display width of the open panel's lines, before alignment.
    pub fn panel_width(&self) -> usize {
        let inner = self
            .entries
            .iter()
            .filter_map(MenuEntry::plain_text)
            .map(|t| display_width(&t))
            .max()
            .unwrap_or(0)
            .max(3);
        inner + 2
    }

    fn button_text(&self) -> String {
        if self.show_caret {
            format!("[{} ▾]", self.button_label)
        } else {
            format!("[{}]", self.button_label)
        }
    }
}

impl<A: Clone> DropdownMenu<A> {
    /// Clicks the entry at `index`. Items close the menu after a
    /// selection; checkboxes keep it open so several can be flipped.
    /// Returns the entry's action, or `None` when the menu is closed or
    /// the entry is not selectable.
    pub fn select(&mut self, index: usize) -> Option<A> {
        if !self.is_open() {
            return None;
        }
        let entry = self.entries.get(index)?;
        let action = entry.action()?.clone();
        if matches!(entry, MenuEntry::Item { .. }) {
            self.close();
        }
        Some(action)
    }
}

impl<A: fmt::Debug> fmt::Debug for DropdownMenu<A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DropdownMenu")
            .field("button_label", &self.button_label)
            .field("entries", &self.entries)
            .field("align", &self.align)
            .field("open", &self.is_open())
            .field("controlled", &self.controlled.is_some())
            .finish()
    }
}
