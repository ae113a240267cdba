//! Per-row action menu.
//!
//! Only the actions the caller supplied a callback for appear in the menu.
//! Callbacks receive the full row.

use std::fmt;
use std::str::FromStr;

use tablekit_render::Region;
use tracing::debug;

use crate::dropdown::{DropdownMenu, MenuAlign, MenuEntry};

/// Row action callback.
pub type RowCallback<R> = Box<dyn FnMut(&R)>;

/// Actions a row menu can offer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RowAction {
    View,
    Edit,
    Delete,
}

impl RowAction {
    pub fn label(self) -> &'static str {
        match self {
            RowAction::View => "View",
            RowAction::Edit => "Edit",
            RowAction::Delete => "Delete",
        }
    }
}

impl fmt::Display for RowAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for RowAction {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "view" => Ok(RowAction::View),
            "edit" => Ok(RowAction::Edit),
            "delete" => Ok(RowAction::Delete),
            other => Err(format!("unknown row action: {}", other)),
        }
    }
}

/// View, edit and delete callbacks for the rows of a table.
///
/// ```rust
/// use std::cell::RefCell;
/// use std::rc::Rc;
/// use tablekit::{MenuEntry, RowAction, RowActions};
///
/// let deleted = Rc::new(RefCell::new(Vec::new()));
/// let sink = Rc::clone(&deleted);
/// let mut actions = RowActions::new()
///     .on_delete(move |row: &String| sink.borrow_mut().push(row.clone()));
///
/// // no view or edit callback: only Delete is listed
/// let menu = actions.menu();
/// assert_eq!(menu.get_entries().len(), 1);
///
/// assert!(!actions.invoke(RowAction::View, &"a".to_string()));
/// assert!(actions.invoke(RowAction::Delete, &"a".to_string()));
/// assert_eq!(*deleted.borrow(), vec!["a"]);
/// ```
pub struct RowActions<R> {
    on_view: Option<RowCallback<R>>,
    on_edit: Option<RowCallback<R>>,
    on_delete: Option<RowCallback<R>>,
    disabled: bool,
}

impl<R> RowActions<R> {
    pub fn new() -> Self {
        RowActions {
            on_view: None,
            on_edit: None,
            on_delete: None,
            disabled: false,
        }
    }

    pub fn on_view<F>(mut self, f: F) -> Self
    where
        F: FnMut(&R) + 'static,
    {
        self.on_view = Some(Box::new(f));
        self
    }

    pub fn on_edit<F>(mut self, f: F) -> Self
    where
        F: FnMut(&R) + 'static,
    {
        self.on_edit = Some(Box::new(f));
        self
    }

    pub fn on_delete<F>(mut self, f: F) -> Self
    where
        F: FnMut(&R) + 'static,
    {
        self.on_delete = Some(Box::new(f));
        self
    }

    /// Disables every supplied action. Disabled actions are still listed.
    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    pub fn is_disabled(&self) -> bool {
        self.disabled
    }

    /// Whether a callback was supplied for the action.
    pub fn has(&self, action: RowAction) -> bool {
        match action {
            RowAction::View => self.on_view.is_some(),
            RowAction::Edit => self.on_edit.is_some(),
            RowAction::Delete => self.on_delete.is_some(),
        }
    }

    /// Whether any callback was supplied at all.
    pub fn is_empty(&self) -> bool {
        !(self.has(RowAction::View) || self.has(RowAction::Edit) || self.has(RowAction::Delete))
    }

    /// The menu for a row. View and Edit come first, Delete last and
    /// marked destructive, with a divider before it when View is also
    /// listed.
    pub fn menu(&self) -> DropdownMenu<RowAction> {
        let mut entries = Vec::new();
        for action in [RowAction::View, RowAction::Edit] {
            if self.has(action) {
                entries.push(MenuEntry::item(action.label(), action).disabled(self.disabled));
            }
        }
        if self.has(RowAction::View) && self.has(RowAction::Delete) {
            entries.push(MenuEntry::Divider);
        }
        if self.has(RowAction::Delete) {
            entries.push(
                MenuEntry::item(RowAction::Delete.label(), RowAction::Delete)
                    .disabled(self.disabled)
                    .destructive(true),
            );
        }
        DropdownMenu::new("...")
            .show_caret(false)
            .align(MenuAlign::Left)
            .regions(Region::RowActionsButton, Region::ToolbarDropdown)
            .entries(entries)
    }

    /// Runs the action's callback with the row. Returns `false`, doing
    /// nothing, when the action has no callback or actions are disabled.
    pub fn invoke(&mut self, action: RowAction, row: &R) -> bool {
        if self.disabled {
            return false;
        }
        let callback = match action {
            RowAction::View => self.on_view.as_mut(),
            RowAction::Edit => self.on_edit.as_mut(),
            RowAction::Delete => self.on_delete.as_mut(),
        };
        match callback {
            Some(cb) => {
                debug!(%action, "row action");
                cb(row);
                true
            }
            None => false,
        }
    }
}

impl<R> Default for RowActions<R> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R> fmt::Debug for RowActions<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RowActions")
            .field("view", &self.on_view.is_some())
            .field("edit", &self.on_edit.is_some())
            .field("delete", &self.on_delete.is_some())
            .field("disabled", &self.disabled)
            .finish()
    }
}
