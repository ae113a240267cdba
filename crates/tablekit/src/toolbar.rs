//! Toolbar: global filter input and column visibility toggle.

use tablekit_engine::{TableEngine, TableRow};
use tablekit_render::{display_width, pad_right, OutputMode, Region, ThemeTokens};

use crate::dropdown::{DropdownMenu, MenuEntry};

/// Placeholder of the global filter input.
pub const SEARCH_PLACEHOLDER: &str = "Search all columns...";

/// Heading of the column toggle panel.
pub const TOGGLE_COLUMNS_LABEL: &str = "Toggle columns";

const INPUT_WIDTH: usize = 24;

/// Text input bound to the global filter.
///
/// ```rust
/// use tablekit::GlobalFilterInput;
///
/// let mut input = GlobalFilterInput::new();
/// input.insert('O');
/// input.insert('r');
/// input.backspace();
/// assert_eq!(input.value(), "O");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GlobalFilterInput {
    value: String,
    placeholder: String,
}

impl GlobalFilterInput {
    pub fn new() -> Self {
        GlobalFilterInput {
            value: String::new(),
            placeholder: SEARCH_PLACEHOLDER.to_string(),
        }
    }

    pub fn with_placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = placeholder.into();
        self
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn placeholder(&self) -> &str {
        &self.placeholder
    }

    pub fn is_empty(&self) -> bool {
        self.value.is_empty()
    }

    pub fn insert(&mut self, c: char) {
        self.value.push(c);
    }

    pub fn backspace(&mut self) {
        self.value.pop();
    }

    pub fn clear(&mut self) {
        self.value.clear();
    }

    pub fn set(&mut self, text: impl Into<String>) {
        self.value = text.into();
    }

    /// The input box: the value, or the placeholder when empty.
    pub fn render(&self, theme: &ThemeTokens, mode: OutputMode) -> String {
        let (text, region) = if self.value.is_empty() {
            (self.placeholder.as_str(), Region::ToolbarInput)
        } else {
            (self.value.as_str(), Region::ToolbarSearchInput)
        };
        theme.paint(region, &pad_right(text, INPUT_WIDTH), mode)
    }

    fn width(&self) -> usize {
        let text = if self.value.is_empty() {
            &self.placeholder
        } else {
            &self.value
        };
        display_width(text).max(INPUT_WIDTH)
    }
}

impl Default for GlobalFilterInput {
    fn default() -> Self {
        Self::new()
    }
}

/// Dropdown listing every hideable column with its visibility.
///
/// The entries are rebuilt from the engine with [`sync`](Self::sync); the
/// open state survives rebuilding.
#[derive(Debug)]
pub struct ColumnToggle {
    menu: DropdownMenu<String>,
}

impl ColumnToggle {
    pub fn new() -> Self {
        ColumnToggle {
            menu: DropdownMenu::new("Columns").show_caret(false),
        }
    }

    /// Rebuilds the entries from the engine's columns and visibility.
    pub fn sync<R: TableRow>(&mut self, engine: &TableEngine<R>) {
        let mut entries = vec![MenuEntry::label(TOGGLE_COLUMNS_LABEL)];
        entries.extend(engine.hideable_columns().into_iter().map(|column| {
            MenuEntry::checkbox(
                column.display_label(),
                engine.is_column_visible(column.id()),
                column.id().to_string(),
            )
        }));
        self.menu.set_entries(entries);
    }

    pub fn menu(&self) -> &DropdownMenu<String> {
        &self.menu
    }

    pub fn menu_mut(&mut self) -> &mut DropdownMenu<String> {
        &mut self.menu
    }

    /// Clicks the entry at `index`. Returns the column and the visibility
    /// it should get.
    pub fn select(&mut self, index: usize) -> Option<(String, bool)> {
        let checked = match self.menu.get_entries().get(index) {
            Some(MenuEntry::Checkbox { checked, .. }) => *checked,
            _ => return None,
        };
        self.menu.select(index).map(|column| (column, !checked))
    }
}

impl Default for ColumnToggle {
    fn default() -> Self {
        Self::new()
    }
}

/// The bar above the table.
#[derive(Debug, Default)]
pub struct Toolbar {
    pub filter: GlobalFilterInput,
    pub columns: ColumnToggle,
}

impl Toolbar {
    pub fn new() -> Self {
        Self::default()
    }

    /// Renders the filter on the left and the column toggle on the right,
    /// spread over at least `width` columns. The open toggle panel follows,
    /// right-aligned.
    pub fn render(&self, theme: &ThemeTokens, mode: OutputMode, width: usize) -> Vec<String> {
        let menu = self.columns.menu();
        let toggle = menu.render(theme, mode);
        let button_width = menu.button_width();
        let used = self.filter.width() + 2 + button_width;
        let total = used.max(width);

        let mut lines = Vec::with_capacity(toggle.len());
        let mut toggle = toggle.into_iter();
        let button = toggle.next().unwrap_or_default();
        let gap = " ".repeat(total - self.filter.width() - button_width);
        lines.push(format!(
            "{}{}{}",
            self.filter.render(theme, mode),
            theme.paint(Region::Toolbar, &gap, mode),
            button
        ));

        let panel_width = menu.panel_width().max(button_width);
        let indent = " ".repeat(total.saturating_sub(panel_width));
        lines.extend(toggle.map(|line| format!("{}{}", indent, line)));
        lines
    }
}

#[cfg(test)]
mod tests {
    use tablekit_engine::{ColumnDef, Value};

    use super::*;

    struct Row(String);

    impl TableRow for Row {
        fn id(&self) -> &str {
            &self.0
        }

        fn field(&self, _key: &str) -> Value<'_> {
            Value::from(self.0.as_str())
        }
    }

    fn engine() -> TableEngine<Row> {
        TableEngine::new(
            vec![Row("a".into())],
            vec![
                ColumnDef::accessor("signature", "Signature").label("Tx signature"),
                ColumnDef::accessor("slot", "Slot"),
                ColumnDef::accessor("fee", "").hideable(true),
                ColumnDef::display("actions", "").hideable(false),
            ],
        )
    }

    #[test]
    fn toggle_lists_hideable_columns_with_labels() {
        let mut toggle = ColumnToggle::new();
        toggle.sync(&engine());
        let texts: Vec<&str> = toggle
            .menu()
            .get_entries()
            .iter()
            .filter_map(|e| e.text())
            .collect();
        assert_eq!(texts, ["Toggle columns", "Tx signature", "Slot", "fee"]);
    }

    #[test]
    fn select_reports_flipped_visibility() {
        let mut engine = engine();
        let mut toggle = ColumnToggle::new();
        toggle.sync(&engine);
        toggle.menu_mut().open();

        assert_eq!(toggle.select(0), None);
        let (column, visible) = toggle.select(2).unwrap();
        assert_eq!((column.as_str(), visible), ("slot", false));

        engine.toggle_column_visibility(&column, visible);
        toggle.sync(&engine);
        assert!(toggle.menu().is_open());
        assert!(matches!(
            &toggle.menu().get_entries()[2],
            MenuEntry::Checkbox { checked: false, .. }
        ));
        assert_eq!(toggle.select(2), Some(("slot".to_string(), true)));
    }

    #[test]
    fn closed_toggle_ignores_selection() {
        let mut toggle = ColumnToggle::new();
        toggle.sync(&engine());
        assert_eq!(toggle.select(1), None);
    }

    #[test]
    fn input_editing() {
        let mut input = GlobalFilterInput::new();
        assert_eq!(input.placeholder(), "Search all columns...");
        input.set("orca");
        input.backspace();
        assert_eq!(input.value(), "orc");
        input.clear();
        assert!(input.is_empty());
        input.backspace();
        assert!(input.is_empty());
    }

    #[test]
    fn toolbar_line_fills_width() {
        let theme = ThemeTokens::new("plain");
        let toolbar = Toolbar::new();
        let lines = toolbar.render(&theme, OutputMode::Text, 40);
        assert_eq!(
            lines,
            vec![format!("Search all columns...{}[Columns]", " ".repeat(10))]
        );
        assert_eq!(display_width(&lines[0]), 40);
    }

    #[test]
    fn open_panel_lines_up_with_the_right_edge() {
        let theme = ThemeTokens::new("plain");
        let mut toolbar = Toolbar::new();
        toolbar.columns.sync(&engine());
        toolbar.columns.menu_mut().open();

        let lines = toolbar.render(&theme, OutputMode::Text, 40);
        assert_eq!(lines.len(), 5);
        for line in &lines {
            assert_eq!(display_width(line), 40, "{line:?}");
        }
        assert!(lines[1].ends_with("Toggle columns  "));
        assert!(lines[2].ends_with("[x] Tx signature"));
    }
}
