//! Scenario tests for the table engine.

use std::cell::RefCell;
use std::rc::Rc;

use tablekit_engine::{
    ColumnDef, InitialState, PaginationMode, SortDirection, SortEntry, TableEngine, TableRow,
    Timestamp, Value,
};

struct Tx {
    id: String,
    signature: String,
    block_time: Option<i64>,
    slot: u64,
    status: &'static str,
    fee: u64,
}

impl TableRow for Tx {
    fn id(&self) -> &str {
        &self.id
    }

    fn field(&self, key: &str) -> Value<'_> {
        match key {
            "signature" => Value::from(self.signature.as_str()),
            "blockTime" => Value::from(self.block_time.map(Timestamp::from_secs)),
            "slot" => Value::from(self.slot),
            "status" => Value::from(self.status),
            "fee" => Value::from(self.fee),
            _ => Value::None,
        }
    }
}

fn txs(count: usize) -> Vec<Tx> {
    (1..=count)
        .map(|i| Tx {
            id: format!("sig{i}"),
            signature: format!("{i}abcXYZ"),
            block_time: if i % 4 == 0 {
                None
            } else {
                Some(1_700_000_000 + (i as i64 % 3) * 60)
            },
            slot: 250_000_000 + i as u64,
            status: if i % 3 == 0 { "failed" } else { "success" },
            fee: 5000,
        })
        .collect()
}

fn columns() -> Vec<ColumnDef<Tx>> {
    vec![
        ColumnDef::accessor("signature", "Signature"),
        ColumnDef::accessor("blockTime", "Time"),
        ColumnDef::accessor("slot", "Slot"),
        ColumnDef::accessor("status", "Status"),
        ColumnDef::accessor("fee", "Fee (SOL)").cell(|tx: &Tx| format!("{:.6}", tx.fee as f64 / 1e9)),
        ColumnDef::display("actions", "").hideable(false),
    ]
}

fn ids(engine: &TableEngine<Tx>) -> Vec<String> {
    engine.visible_rows().iter().map(|t| t.id.clone()).collect()
}

#[test]
fn eleven_rows_make_two_pages() {
    let mut engine = TableEngine::new(txs(11), columns());
    assert_eq!(engine.page_count(), 2);
    assert_eq!(engine.visible_rows().len(), 10);
    assert!(engine.can_next_page());
    assert!(!engine.can_previous_page());

    engine.next_page();
    assert_eq!(ids(&engine), vec!["sig11"]);
    assert!(!engine.can_next_page());
}

#[test]
fn five_rows_fit_on_one_page() {
    let engine = TableEngine::new(txs(5), columns());
    assert_eq!(engine.page_count(), 1);
    assert_eq!(engine.visible_rows().len(), 5);
    assert!(!engine.can_next_page());
}

#[test]
fn three_header_clicks_restore_input_order() {
    let mut engine = TableEngine::new(txs(8), columns());
    let original = ids(&engine);

    engine.toggle_sort("blockTime");
    assert_eq!(engine.column_sort("blockTime"), Some(SortDirection::Asc));
    engine.toggle_sort("blockTime");
    assert_eq!(engine.column_sort("blockTime"), Some(SortDirection::Desc));
    engine.toggle_sort("blockTime");
    assert_eq!(engine.column_sort("blockTime"), None);

    assert_eq!(ids(&engine), original);
}

#[test]
fn null_times_sort_last_ascending_and_first_descending() {
    let mut engine = TableEngine::new(txs(8), columns());
    engine.toggle_sort("blockTime");
    let asc = ids(&engine);
    assert_eq!(&asc[6..], ["sig4", "sig8"]);

    engine.toggle_sort("blockTime");
    let desc = ids(&engine);
    assert_eq!(&desc[..2], ["sig4", "sig8"]);
}

#[test]
fn equal_keys_keep_input_order() {
    let mut engine = TableEngine::new(txs(6), columns());
    engine.toggle_sort("fee");
    assert_eq!(
        ids(&engine),
        vec!["sig1", "sig2", "sig3", "sig4", "sig5", "sig6"]
    );
}

#[test]
fn filter_matches_raw_values_not_rendered_cells() {
    let mut engine = TableEngine::new(txs(5), columns());
    // fee renders as 0.000005 but its raw value is 5000
    engine.set_global_filter("0.000005");
    assert!(engine.is_empty());
    engine.set_global_filter("5000");
    assert_eq!(engine.filtered_row_count(), 5);
}

#[test]
fn filter_is_case_insensitive() {
    let mut engine = TableEngine::new(txs(6), columns());
    engine.set_global_filter("FAILED");
    assert_eq!(ids(&engine), vec!["sig3", "sig6"]);
    engine.set_global_filter("xyz");
    assert_eq!(engine.filtered_row_count(), 6);
}

#[test]
fn hidden_columns_still_filter() {
    let mut engine = TableEngine::new(txs(6), columns());
    engine.toggle_column_visibility("status", false);
    engine.set_global_filter("failed");
    assert_eq!(engine.filtered_row_count(), 2);
}

#[test]
fn filter_with_no_matches_is_empty_not_blank_page() {
    let mut engine = TableEngine::new(txs(30), columns());
    engine.last_page();
    engine.set_global_filter("no such transaction");
    assert!(engine.is_empty());
    assert_eq!(engine.pagination().page_index, 0);
    assert_eq!(engine.page_count(), 0);
}

#[test]
fn controlled_pagination_round_trip() {
    let requested = Rc::new(RefCell::new(None));
    let requested_cb = Rc::clone(&requested);
    let page = txs(10);

    let mut engine = TableEngine::new(page, columns())
        .manual_pagination(12)
        .with_initial_state(InitialState::new().page_index(3))
        .on_page_index_change(move |i| *requested_cb.borrow_mut() = Some(i));

    assert_eq!(engine.mode(), PaginationMode::Manual { page_count: 12 });
    engine.next_page();
    assert_eq!(*requested.borrow(), Some(4));

    // the caller fetches page 4 and hands it back
    engine.set_data(txs(10));
    engine.sync_pagination(Some(4), None);
    assert_eq!(engine.pagination().page_index, 4);
    assert_eq!(engine.visible_rows().len(), 10);
}

#[test]
fn initial_sort_and_visibility() {
    let engine = TableEngine::new(txs(4), columns()).with_initial_state(
        InitialState::new()
            .sort(SortEntry::desc("slot"))
            .hide("signature"),
    );
    assert_eq!(ids(&engine), vec!["sig4", "sig3", "sig2", "sig1"]);
    let headers: Vec<String> = engine.header_groups()[0]
        .headers
        .iter()
        .map(|h| h.text.clone())
        .collect();
    assert_eq!(headers, vec!["Time", "Slot", "Status", "Fee (SOL)", ""]);
}

#[test]
fn row_model_uses_cell_renderers() {
    let engine = TableEngine::new(txs(1), columns());
    let model = engine.row_model();
    let fee = model[0].cell("fee").map(|c| c.text.clone());
    assert_eq!(fee.as_deref(), Some("0.000005"));
    let slot = model[0].cell("slot").map(|c| c.value.clone());
    assert_eq!(slot, Some(Value::from(250_000_001u64)));
}
