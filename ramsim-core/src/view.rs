//! What a frontend needs to draw the widget, independent of how it is styled.

use crate::hex;
use crate::memory::MemoryTable;
use crate::notification::Notification;
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct RowView {
    pub address: String,
    pub value: String,
    /// The cell holds a value and is drawn highlighted.
    pub occupied: bool,
    /// Bottom row of the table.
    pub last: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct TableView {
    pub rows: Vec<RowView>,
    pub full: bool,
    /// Warning shown above the table while memory is full.
    pub banner: Option<String>,
    pub assign_enabled: bool,
    pub value_input_enabled: bool,
    pub free_enabled: bool,
    pub value_input: String,
}

impl TableView {
    pub fn new(table: &MemoryTable, value_input: &str) -> Self {
        let last_address = table.len().saturating_sub(1);
        let rows = table
            .cells()
            .iter()
            .map(|cell| RowView {
                address: hex::address(cell.address),
                value: hex::value(cell.value),
                occupied: !cell.is_empty(),
                last: cell.address == last_address,
            })
            .collect();
        let full = table.is_full();

        Self {
            rows,
            full,
            banner: full.then(|| Notification::MEMORY_FULL.to_string()),
            assign_enabled: !full,
            value_input_enabled: !full,
            free_enabled: true,
            value_input: value_input.to_string(),
        }
    }
}

impl fmt::Display for TableView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(banner) = &self.banner {
            writeln!(f, "! {banner}")?;
        }
        let width = self
            .rows
            .iter()
            .map(|row| row.address.len())
            .max()
            .unwrap_or(0)
            .max("Address".len());
        writeln!(f, "{:<width$}  Value", "Address")?;
        for row in &self.rows {
            let marker = if row.occupied { " *" } else { "" };
            writeln!(f, "{:<width$}  {}{}", row.address, row.value, marker)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rows_follow_the_table() {
        let mut table = MemoryTable::new(3);
        table.write(1, 10);
        let view = TableView::new(&table, "4");

        assert_eq!(3, view.rows.len());
        assert_eq!("0x0000", view.rows[0].address);
        assert_eq!("0x00", view.rows[0].value);
        assert!(!view.rows[0].occupied);
        assert_eq!("0x0001", view.rows[1].address);
        assert_eq!("0xa", view.rows[1].value);
        assert!(view.rows[1].occupied);
        assert!(view.rows[2].last);
        assert!(!view.rows[1].last);
        assert_eq!("4", view.value_input);
    }

    #[test]
    fn full_table_disables_assign() {
        let mut table = MemoryTable::new(1);
        let view = TableView::new(&table, "");
        assert!(view.assign_enabled);
        assert_eq!(None, view.banner);

        table.write(0, 1);
        let view = TableView::new(&table, "");
        assert!(view.full);
        assert!(!view.assign_enabled);
        assert!(!view.value_input_enabled);
        assert!(view.free_enabled);
        assert_eq!(Some(Notification::MEMORY_FULL.to_string()), view.banner);
    }

    #[test]
    fn text_rendering() {
        let mut table = MemoryTable::new(2);
        table.write(0, 255);
        let text = TableView::new(&table, "").to_string();
        assert_eq!("Address  Value\n0x0000   0xff *\n0x0001   0x00\n", text);
    }
}
