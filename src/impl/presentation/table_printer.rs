use chrono::FixedOffset;

use crate::entities::{Record, TablePage, Value};

use super::utils::format_number;

/// One column of a plain-text table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Column {
    pub header: String,
    pub field: String,
    /// Cells longer than this are wrapped over several lines.
    pub width: usize,
}

pub(crate) struct TablePrinter {
    columns: Vec<Column>,
    offset: FixedOffset,
}

impl Column {
    pub fn new(header: impl Into<String>, field: impl Into<String>, width: usize) -> Self {
        Self {
            header: header.into(),
            field: field.into(),
            width: width.max(1),
        }
    }
}

impl TablePrinter {
    /// Dates are displayed in `offset`.
    pub(crate) fn new(columns: Vec<Column>, offset: FixedOffset) -> Self {
        Self { columns, offset }
    }

    pub(crate) fn print(&self, page: &TablePage) -> String {
        let mut out = String::new();
        let headers: Vec<String> = self.columns.iter().map(|c| c.header.clone()).collect();
        self.push_row(&mut out, &headers);
        out.push_str(
            &self
                .columns
                .iter()
                .map(|c| "-".repeat(c.width))
                .collect::<Vec<_>>()
                .join("-+-"),
        );
        out.push('\n');
        for record in &page.rows {
            let cells: Vec<String> = self
                .columns
                .iter()
                .map(|c| self.cell(record, &c.field))
                .collect();
            self.push_row(&mut out, &cells);
        }
        out.push_str(&format!(
            "Page {}/{} ({} résultat{})\n",
            page.page,
            page.page_count.max(1),
            page.total,
            if page.total > 1 { "s" } else { "" }
        ));
        out
    }

    fn push_row(&self, out: &mut String, cells: &[String]) {
        let wrapped: Vec<Vec<String>> = self
            .columns
            .iter()
            .zip(cells)
            .map(|(c, cell)| {
                textwrap::wrap(cell, c.width)
                    .into_iter()
                    .map(|l| l.into_owned())
                    .collect()
            })
            .collect();
        let height = wrapped.iter().map(Vec::len).max().unwrap_or(0).max(1);
        for i in 0..height {
            let line = self
                .columns
                .iter()
                .zip(&wrapped)
                .map(|(c, lines)| {
                    let text = lines.get(i).map(String::as_str).unwrap_or("");
                    format!("{:<width$}", text, width = c.width)
                })
                .collect::<Vec<_>>()
                .join(" | ");
            out.push_str(line.trim_end());
            out.push('\n');
        }
    }

    fn cell(&self, record: &Record, field: &str) -> String {
        record
            .get(field)
            .map_or_else(String::new, |v| self.display(v))
    }

    fn display(&self, value: &Value) -> String {
        match value {
            Value::Null => String::new(),
            Value::Bool(true) => "Oui".to_string(),
            Value::Bool(false) => "Non".to_string(),
            Value::Number(n) if n.fract() == 0.0 => format_number(*n, 0),
            Value::Number(n) => format_number(*n, 2),
            Value::Timestamp(t) => t.with_timezone(&self.offset).format("%d/%m/%Y").to_string(),
            // ISO timestamps are shown as dates; other text as is.
            Value::Text(s) => value.as_timestamp(&self.offset).map_or_else(
                || s.clone(),
                |t| t.with_timezone(&self.offset).format("%d/%m/%Y").to_string(),
            ),
            Value::List(items) => items
                .iter()
                .map(|v| self.display(v))
                .collect::<Vec<_>>()
                .join(", "),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn printer() -> TablePrinter {
        TablePrinter::new(
            vec![
                Column::new("Réf.", "reference", 12),
                Column::new("Libellé", "title", 12),
                Column::new("Payée", "paid", 5),
                Column::new("Date", "createdAt", 10),
            ],
            FixedOffset::east_opt(0).unwrap(),
        )
    }

    #[test]
    fn prints_headers_rows_and_footer() {
        let rs = vec![
            Record::new("1")
                .with("reference", "INV-2024-001")
                .with("title", "Loyer")
                .with("paid", true)
                .with("createdAt", "2024-03-05T10:00:00Z"),
            Record::new("2")
                .with("reference", "INV-2024-002")
                .with("title", "Fournitures de bureau")
                .with("paid", false),
        ];
        let page = TablePage {
            rows: rs.iter().collect(),
            page: 1,
            page_size: 10,
            total: 2,
            page_count: 1,
        };
        let lines: Vec<String> = printer().print(&page).lines().map(String::from).collect();
        assert_eq!(lines[0], "Réf.         | Libellé      | Payée | Date");
        assert_eq!(lines[2], "INV-2024-001 | Loyer        | Oui   | 05/03/2024");
        // Long titles wrap onto continuation lines.
        assert_eq!(lines[3], "INV-2024-002 | Fournitures  | Non   |");
        assert!(lines[4].contains("de bureau"));
        assert_eq!(lines.last().unwrap(), "Page 1/1 (2 résultats)");
    }

    #[test]
    fn empty_pages_still_print_a_footer() {
        let page = TablePage {
            rows: vec![],
            page: 1,
            page_size: 10,
            total: 0,
            page_count: 0,
        };
        assert!(printer().print(&page).ends_with("Page 1/1 (0 résultat)\n"));
    }
}
