use std::cmp::Ordering;

use chrono::FixedOffset;

use crate::entities::{PageRequest, Record, SortDirection, SortSpec, TablePage, Value};

pub struct TablePaginator;

impl TablePaginator {
    /// Sorts (stable, record id as tiebreak) and slices the requested page.
    /// Missing values always sort last, whatever the direction. Dates without
    /// an offset are read in `offset`. A page past the end yields no rows.
    pub fn page<'a>(
        rows: &[&'a Record],
        request: &PageRequest,
        fallback_sort: Option<&SortSpec>,
        offset: &FixedOffset,
    ) -> TablePage<'a> {
        let mut sorted: Vec<&'a Record> = rows.to_vec();
        if let Some(sort) = request.sort.as_ref().or(fallback_sort) {
            sorted.sort_by(|a, b| Self::compare(a, b, sort, offset));
        }

        let page = request.page.max(1);
        let page_size = request.page_size.max(1);
        let total = sorted.len();
        let page_count = total.div_ceil(page_size);
        let rows = sorted
            .into_iter()
            .skip((page - 1).saturating_mul(page_size))
            .take(page_size)
            .collect();

        TablePage {
            rows,
            page,
            page_size,
            total,
            page_count,
        }
    }

    fn compare(a: &Record, b: &Record, sort: &SortSpec, offset: &FixedOffset) -> Ordering {
        static NULL: Value = Value::Null;
        let va = a.get(&sort.field).unwrap_or(&NULL);
        let vb = b.get(&sort.field).unwrap_or(&NULL);
        let ordering = match (va.is_null(), vb.is_null()) {
            (true, true) => Ordering::Equal,
            (true, false) => return Ordering::Greater,
            (false, true) => return Ordering::Less,
            (false, false) => match sort.direction {
                SortDirection::Ascending => va.sort_cmp(vb, offset),
                SortDirection::Descending => vb.sort_cmp(va, offset),
            },
        };
        ordering.then_with(|| a.id.cmp(&b.id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rows() -> Vec<Record> {
        vec![
            Record::new("a").with("amount", 300.0).with("name", "Été"),
            Record::new("b").with("amount", 100.0).with("name", "avril"),
            Record::new("c").with("name", "Zoé"),
            Record::new("d").with("amount", 200.0).with("name", "Bureau"),
            Record::new("e").with("amount", 100.0).with("name", "carburant"),
        ]
    }

    fn utc() -> FixedOffset {
        FixedOffset::east_opt(0).unwrap()
    }

    fn ids(page: &TablePage) -> Vec<String> {
        page.rows.iter().map(|r| r.id.to_string()).collect()
    }

    #[test]
    fn sorts_ascending_with_nulls_last_and_id_tiebreak() {
        let rs = rows();
        let refs: Vec<&Record> = rs.iter().collect();
        let page = TablePaginator::page(
            &refs,
            &PageRequest::new(1, 10).sorted_by(SortSpec::ascending("amount")),
            None,
            &utc(),
        );
        assert_eq!(ids(&page), vec!["b", "e", "d", "a", "c"]);
    }

    #[test]
    fn sorts_descending_with_nulls_still_last() {
        let rs = rows();
        let refs: Vec<&Record> = rs.iter().collect();
        let page = TablePaginator::page(
            &refs,
            &PageRequest::new(1, 10).sorted_by(SortSpec::descending("amount")),
            None,
            &utc(),
        );
        assert_eq!(ids(&page), vec!["a", "d", "b", "e", "c"]);
    }

    #[test]
    fn text_sort_ignores_accents_and_case() {
        let rs = rows();
        let refs: Vec<&Record> = rs.iter().collect();
        let page = TablePaginator::page(
            &refs,
            &PageRequest::new(1, 10),
            Some(&SortSpec::ascending("name")),
            &utc(),
        );
        assert_eq!(ids(&page), vec!["b", "d", "e", "a", "c"]);
    }

    #[test]
    fn paginates() {
        let rs = rows();
        let refs: Vec<&Record> = rs.iter().collect();
        let second = TablePaginator::page(&refs, &PageRequest::new(2, 2), None, &utc());
        assert_eq!(ids(&second), vec!["c", "d"]);
        assert_eq!(second.total, 5);
        assert_eq!(second.page_count, 3);

        let last = TablePaginator::page(&refs, &PageRequest::new(3, 2), None, &utc());
        assert_eq!(ids(&last), vec!["e"]);

        let beyond = TablePaginator::page(&refs, &PageRequest::new(9, 2), None, &utc());
        assert!(beyond.rows.is_empty());
        assert_eq!(beyond.page, 9);
    }

    #[test]
    fn empty_input_has_no_pages() {
        let page = TablePaginator::page(&[], &PageRequest::default(), None, &utc());
        assert_eq!(page.total, 0);
        assert_eq!(page.page_count, 0);
        assert!(page.rows.is_empty());
    }

    #[test]
    fn date_text_sorts_by_instant() {
        let rs = vec![
            Record::new("a").with("createdAt", "2024-03-05T09:00:00+02:00"),
            Record::new("b").with("createdAt", "2024-03-05T08:30:00Z"),
            Record::new("c").with("createdAt", "2024-03-05"),
            Record::new("d").with("createdAt", "2024-03-05T08:00:00+01:00"),
        ];
        let refs: Vec<&Record> = rs.iter().collect();
        let page = TablePaginator::page(
            &refs,
            &PageRequest::new(1, 10).sorted_by(SortSpec::ascending("createdAt")),
            None,
            &utc(),
        );
        // 07:00Z, 07:00Z, 08:30Z after midnight UTC.
        assert_eq!(ids(&page), vec!["c", "a", "d", "b"]);
    }
}
