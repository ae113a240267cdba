//! The row contract.

use crate::value::Value;

/// A record that can be shown in a table.
///
/// The only thing the engine needs from a row is a unique, stable id.
/// Columns built with [`ColumnDef::accessor`](crate::ColumnDef::accessor)
/// read fields through [`TableRow::field`]; columns built with
/// [`ColumnDef::computed`](crate::ColumnDef::computed) never call it, so
/// rows used only with computed columns can keep the default.
///
/// ```
/// use tablekit_engine::{TableRow, Value};
///
/// struct Account {
///     id: String,
///     owner: String,
///     balance: u64,
/// }
///
/// impl TableRow for Account {
///     fn id(&self) -> &str {
///         &self.id
///     }
///
///     fn field(&self, key: &str) -> Value<'_> {
///         match key {
///             "owner" => Value::from(self.owner.as_str()),
///             "balance" => Value::from(self.balance),
///             _ => Value::None,
///         }
///     }
/// }
///
/// let a = Account { id: "a1".into(), owner: "ana".into(), balance: 3 };
/// assert_eq!(a.field("balance").display(), "3");
/// assert!(a.field("missing").is_none());
/// ```
pub trait TableRow {
    /// Unique, stable identifier of this row.
    fn id(&self) -> &str;

    /// Value of a field, or [`Value::None`] if the row has no such field.
    fn field(&self, key: &str) -> Value<'_> {
        let _ = key;
        Value::None
    }
}

impl<T: TableRow + ?Sized> TableRow for Box<T> {
    fn id(&self) -> &str {
        (**self).id()
    }

    fn field(&self, key: &str) -> Value<'_> {
        (**self).field(key)
    }
}
