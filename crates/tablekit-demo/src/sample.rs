//! Sample Solana swap transactions.

use tablekit::{Align, ColumnDef, TableRow, Timestamp, Value};

/// A confirmed swap.
#[derive(Debug, Clone, PartialEq)]
pub struct Transaction {
    pub signature: String,
    pub slot: u64,
    /// Seconds since the Unix epoch.
    pub block_time: i64,
    pub source: String,
    /// Fee in lamports.
    pub fee: u64,
    pub success: bool,
}

impl TableRow for Transaction {
    fn id(&self) -> &str {
        &self.signature
    }

    fn field(&self, key: &str) -> Value<'_> {
        match key {
            "signature" => Value::from(self.signature.as_str()),
            "slot" => Value::from(self.slot),
            "block_time" => Value::from(Timestamp::from_secs(self.block_time)),
            "source" => Value::from(self.source.as_str()),
            "fee" => Value::from(self.fee),
            "success" => Value::from(self.success),
            _ => Value::None,
        }
    }
}

const LAMPORTS_PER_SOL: f64 = 1_000_000_000.0;

const SAMPLE: [(&str, u64, i64, &str, u64, bool); 11] = [
    ("sig1", 287_104_512, 1_722_470_400, "Orca", 7000, true),
    ("sig2", 287_104_530, 1_722_470_409, "Raydium", 5000, true),
    ("sig3", 287_104_551, 1_722_470_418, "Jupiter", 6000, true),
    ("sig4", 287_104_577, 1_722_470_430, "Meteora", 5000, false),
    ("sig5", 287_104_602, 1_722_470_441, "Orca", 10000, true),
    ("sig6", 287_104_640, 1_722_470_457, "Phoenix", 5000, true),
    ("sig7", 287_104_655, 1_722_470_463, "Raydium", 12500, true),
    ("sig8", 287_104_689, 1_722_470_478, "Jupiter", 5000, false),
    ("sig9", 287_104_702, 1_722_470_484, "Lifinity", 8000, true),
    ("sig10", 287_104_731, 1_722_470_496, "Orca", 5000, true),
    ("sig11", 287_104_760, 1_722_470_509, "Jupiter", 9000, true),
];

/// Eleven swaps, one more than the default page size.
pub fn transactions() -> Vec<Transaction> {
    SAMPLE
        .iter()
        .map(
            |&(signature, slot, block_time, source, fee, success)| Transaction {
                signature: signature.to_string(),
                slot,
                block_time,
                source: source.to_string(),
                fee,
                success,
            },
        )
        .collect()
}

pub fn columns() -> Vec<ColumnDef<Transaction>> {
    vec![
        ColumnDef::accessor("signature", "Signature")
            .label("Tx signature")
            .max_width(12),
        ColumnDef::accessor("slot", "Slot").align(Align::Right),
        ColumnDef::accessor("block_time", "Time (UTC)")
            .cell(|tx: &Transaction| clock(tx.block_time)),
        ColumnDef::accessor("source", "Source"),
        ColumnDef::accessor("fee", "Fee")
            .align(Align::Right)
            .cell(|tx: &Transaction| format!("{:.6} SOL", tx.fee as f64 / LAMPORTS_PER_SOL)),
        ColumnDef::accessor("success", "Status")
            .align(Align::Center)
            .cell(|tx: &Transaction| if tx.success { "ok" } else { "failed" }.to_string()),
    ]
}

/// Time of day of a Unix timestamp, `HH:MM:SS`.
fn clock(secs: i64) -> String {
    let day = secs.rem_euclid(86_400);
    format!("{:02}:{:02}:{:02}", day / 3600, day % 3600 / 60, day % 60)
}
