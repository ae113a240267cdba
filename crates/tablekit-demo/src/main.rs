//! tablekit-demo: renders a data table of Solana swaps, or of any JSON
//! array, with interactions scripted from the command line.
//!
//! ```text
//! tablekit-demo --theme windows95 --sort fee --sort fee --page 2
//! tablekit-demo --data rows.json --filter orca --hide slot --plain
//! ```

mod sample;

use std::fs;
use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::Parser;
use tablekit::{
    ColumnDef, DataTable, DataTableProps, JsonRow, OutputMode, PaginationAction, RowActions,
    TableEvent, TableRow, ThemeRegistry, DEFAULT_THEME,
};
use tracing::{debug, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[derive(Debug, Parser)]
#[command(name = "tablekit-demo")]
#[command(about = "Render a themeable data table in the terminal")]
pub struct Cli {
    /// Theme name (built-in: default, windows95)
    #[arg(long, default_value = DEFAULT_THEME)]
    theme: String,

    /// YAML theme file to register; named after its file stem
    #[arg(long = "theme-file", value_name = "PATH")]
    theme_files: Vec<PathBuf>,

    /// JSON array of row objects, each with an "id"
    #[arg(long, value_name = "PATH")]
    data: Option<PathBuf>,

    /// Global filter text
    #[arg(long)]
    filter: Option<String>,

    /// Click a column header; repeat to click again
    #[arg(long = "sort", value_name = "COLUMN")]
    sort: Vec<String>,

    /// Hide a column
    #[arg(long = "hide", value_name = "COLUMN")]
    hide: Vec<String>,

    /// Page to show, 1-based
    #[arg(long)]
    page: Option<String>,

    #[arg(long = "page-size")]
    page_size: Option<usize>,

    /// Page size choices, comma separated
    #[arg(long = "page-size-options", value_delimiter = ',')]
    page_size_options: Vec<usize>,

    /// Total page count for server-side paging
    #[arg(long = "page-count")]
    page_count: Option<usize>,

    /// Show the loading state
    #[arg(long)]
    loading: bool,

    /// Start with no rows
    #[arg(long)]
    empty: bool,

    /// Plain text without colors
    #[arg(long)]
    plain: bool,

    /// Render width; defaults to the terminal width
    #[arg(long)]
    width: Option<usize>,

    /// Open the column toggle menu
    #[arg(long = "open-columns")]
    open_columns: bool,

    /// Open the actions menu of a row
    #[arg(long = "open-actions", value_name = "ROW_ID")]
    open_actions: Option<String>,
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();
    let output = run(&cli)?;
    println!("{}", output);
    Ok(())
}

fn init_tracing() {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn terminal_width() -> Option<usize> {
    terminal_size::terminal_size().map(|(w, _)| w.0 as usize)
}

/// Builds the table the flags describe and renders it.
pub fn run(cli: &Cli) -> Result<String> {
    let mut registry = ThemeRegistry::new();
    for path in &cli.theme_files {
        let name = registry
            .add_file(path)
            .with_context(|| format!("failed to load theme {}", path.display()))?;
        debug!(theme = %name, "theme file loaded");
    }
    if !registry.contains(&cli.theme) {
        info!(theme = %cli.theme, "unknown theme, using default");
    }

    match &cli.data {
        Some(path) => {
            let json = fs::read_to_string(path)
                .with_context(|| format!("failed to read {}", path.display()))?;
            let rows = JsonRow::parse_array(&json)
                .with_context(|| format!("invalid rows in {}", path.display()))?;
            let columns = json_columns(&rows);
            render(cli, &registry, rows, columns, None)
        }
        None => render(
            cli,
            &registry,
            sample::transactions(),
            sample::columns(),
            Some("recent-swaps"),
        ),
    }
}

/// One column per key of the first row, in key order, without the id.
fn json_columns(rows: &[JsonRow]) -> Vec<ColumnDef<JsonRow>> {
    rows.first()
        .map(|row| {
            row.fields()
                .keys()
                .filter(|key| key.as_str() != "id")
                .map(|key| ColumnDef::accessor(key.as_str(), key.as_str()))
                .collect()
        })
        .unwrap_or_default()
}

fn render<R: TableRow + 'static>(
    cli: &Cli,
    registry: &ThemeRegistry,
    rows: Vec<R>,
    columns: Vec<ColumnDef<R>>,
    table_id: Option<&str>,
) -> Result<String> {
    if columns.is_empty() && !cli.empty {
        bail!("no columns: the rows have no fields besides \"id\"");
    }
    for column in cli.sort.iter().chain(&cli.hide) {
        if !columns.iter().any(|c| c.id() == column) {
            bail!("unknown column: {}", column);
        }
    }

    let rows = if cli.empty { Vec::new() } else { rows };
    let mut props = DataTableProps::new(rows, columns)
        .theme(cli.theme.as_str())
        .loading(cli.loading)
        .row_actions(
            RowActions::new()
                .on_view(|row: &R| info!(row = row.id(), "view"))
                .on_edit(|row: &R| info!(row = row.id(), "edit"))
                .on_delete(|row: &R| info!(row = row.id(), "delete")),
        );
    if let Some(id) = table_id {
        props = props.table_id(id);
    }
    if !cli.page_size_options.is_empty() {
        props = props.page_size_options(cli.page_size_options.iter().copied());
    }
    if let Some(count) = cli.page_count {
        props = props
            .page_count(count)
            .on_page_index_change(|index| info!(page_index = index, "page requested"));
    }
    if let Some(size) = cli.page_size {
        props = props.page_size(size);
    }
    if let Some(width) = cli.width.or_else(terminal_width) {
        props = props.width(width);
    }

    let mut table = DataTable::new(props);
    for column in &cli.hide {
        table.handle(TableEvent::SetColumnVisibility {
            column: column.clone(),
            visible: false,
        });
    }
    if let Some(filter) = &cli.filter {
        table.handle(TableEvent::SetFilter(filter.clone()));
    }
    for column in &cli.sort {
        table.handle(TableEvent::HeaderClick(column.clone()));
    }
    if let Some(page) = &cli.page {
        table.handle(TableEvent::Pagination(PaginationAction::GoToPage(page.clone())));
    }
    if cli.open_columns {
        table.handle(TableEvent::ToggleColumnMenu);
    }
    if let Some(row_id) = &cli.open_actions {
        table.handle(TableEvent::ToggleRowActions(row_id.clone()));
    }

    let mode = if cli.plain {
        OutputMode::Text
    } else {
        OutputMode::Auto
    };
    Ok(table.render(registry, mode))
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    fn cli(args: &[&str]) -> Cli {
        let mut argv = vec!["tablekit-demo", "--plain", "--width", "120"];
        argv.extend_from_slice(args);
        Cli::try_parse_from(argv).unwrap()
    }

    #[test]
    fn sample_table_paginates() {
        let out = run(&cli(&[])).unwrap();
        assert!(out.starts_with("recent-swaps\n"));
        assert!(out.contains("sig10"));
        assert!(!out.contains("sig11"));
        assert!(out.contains("Page 1 of 2"));
    }

    #[test]
    fn scripted_interactions() {
        let out = run(&cli(&["--sort", "fee", "--sort", "fee", "--hide", "slot"])).unwrap();
        assert!(out.contains("Fee ▼"));
        assert!(!out.contains("Slot"));
        let first = out.find("0.012500 SOL").unwrap();
        let second = out.find("0.010000 SOL").unwrap();
        assert!(first < second);
    }

    #[test]
    fn second_page_and_actions_menu() {
        let out = run(&cli(&["--page", "2", "--open-actions", "sig11"])).unwrap();
        assert!(out.contains("sig11"));
        assert!(out.contains("View"));
        assert!(out.contains("Delete"));
        assert!(out.contains("Page 2 of 2"));
    }

    #[test]
    fn loading_and_empty_states() {
        let loading = run(&cli(&["--loading", "--empty"])).unwrap();
        assert!(loading.ends_with("Loading data..."));
        let empty = run(&cli(&["--empty"])).unwrap();
        assert_eq!(empty, "No data available.");
        let filtered = run(&cli(&["--filter", "serum"])).unwrap();
        assert!(filtered.starts_with("serum"));
    }

    #[test]
    fn unknown_columns_are_rejected() {
        let err = run(&cli(&["--sort", "amount"])).unwrap_err();
        assert_eq!(err.to_string(), "unknown column: amount");
    }

    #[test]
    fn json_rows_and_theme_files() {
        let dir = tempfile::tempdir().unwrap();
        let data = dir.path().join("rows.json");
        let mut file = fs::File::create(&data).unwrap();
        write!(
            file,
            r#"[{{"id": "a", "name": "alpha", "score": 3}}, {{"id": "b", "name": "beta", "score": 1}}]"#
        )
        .unwrap();
        let theme = dir.path().join("ascii.yaml");
        fs::write(&theme, "border: ascii\n").unwrap();

        let args = [
            "--data",
            data.to_str().unwrap(),
            "--theme-file",
            theme.to_str().unwrap(),
            "--theme",
            "ascii",
            "--sort",
            "score",
        ];
        let out = run(&cli(&args)).unwrap();
        assert!(out.contains("+"));
        assert!(out.find("beta").unwrap() < out.find("alpha").unwrap());
    }

    #[test]
    fn bad_theme_file_reports_path() {
        let dir = tempfile::tempdir().unwrap();
        let theme = dir.path().join("broken.yaml");
        fs::write(&theme, "border: dotted\n").unwrap();
        let err = run(&cli(&["--theme-file", theme.to_str().unwrap()])).unwrap_err();
        assert!(err.to_string().starts_with("failed to load theme"));
    }
}
