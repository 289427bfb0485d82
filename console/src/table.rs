use crate::cell::Row;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortOrder {
    Ascending,
    Descending,
}

impl SortOrder {
    pub fn toggled(self) -> Self {
        match self {
            SortOrder::Ascending => SortOrder::Descending,
            SortOrder::Descending => SortOrder::Ascending,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
struct Entry {
    row: Row,
    selected: bool,
}

/// A sortable grid whose rows can be multi-selected.
///
/// Selection lives on the row entries, so the selected set can only ever
/// contain rendered rows and survives re-sorting. The selection count shown
/// to the user is a snapshot taken by [`SelectableTable::refresh_count`].
#[derive(Debug, Clone, PartialEq)]
pub struct SelectableTable {
    columns: Vec<String>,
    entries: Vec<Entry>,
    sorted_by: Option<(usize, SortOrder)>,
    displayed_count: usize,
}

impl SelectableTable {
    pub fn new<S: Into<String>>(columns: impl IntoIterator<Item = S>, rows: Vec<Row>) -> Self {
        Self {
            columns: columns.into_iter().map(Into::into).collect(),
            entries: rows
                .into_iter()
                .map(|row| Entry {
                    row,
                    selected: false,
                })
                .collect(),
            sorted_by: None,
            displayed_count: 0,
        }
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Rendered rows in display order, paired with their selection flag.
    pub fn rows(&self) -> impl Iterator<Item = (&Row, bool)> {
        self.entries.iter().map(|e| (&e.row, e.selected))
    }

    pub fn is_selected(&self, index: usize) -> bool {
        self.entries.get(index).is_some_and(|e| e.selected)
    }

    /// Flips the selection of the row at `index`. Returns the new state, or
    /// `None` when no such row is rendered.
    pub fn toggle(&mut self, index: usize) -> Option<bool> {
        let entry = self.entries.get_mut(index)?;
        entry.selected = !entry.selected;
        Some(entry.selected)
    }

    pub fn select_all(&mut self) {
        self.entries.iter_mut().for_each(|e| e.selected = true);
    }

    pub fn clear_selection(&mut self) {
        self.entries.iter_mut().for_each(|e| e.selected = false);
    }

    /// True when there is at least one row and every row is selected.
    pub fn all_selected(&self) -> bool {
        !self.entries.is_empty() && self.entries.iter().all(|e| e.selected)
    }

    /// Header checkbox: selects every row unless all already are, in which
    /// case the selection is cleared.
    pub fn toggle_all(&mut self) {
        if self.all_selected() {
            self.clear_selection();
        } else {
            self.select_all();
        }
    }

    pub fn selected_rows(&self) -> Vec<&Row> {
        self.entries
            .iter()
            .filter(|e| e.selected)
            .map(|e| &e.row)
            .collect()
    }

    pub fn selected_len(&self) -> usize {
        self.entries.iter().filter(|e| e.selected).count()
    }

    /// Takes a snapshot of the selection count for display.
    pub fn refresh_count(&mut self) -> usize {
        self.displayed_count = self.selected_len();
        self.displayed_count
    }

    /// The count as of the last [`refresh_count`](Self::refresh_count).
    pub fn displayed_count(&self) -> usize {
        self.displayed_count
    }

    pub fn sorted_by(&self) -> Option<(usize, SortOrder)> {
        self.sorted_by
    }

    /// Stable sort by the label of `column`. Rows missing the column sort
    /// first.
    pub fn sort_by(&mut self, column: usize, order: SortOrder) {
        self.entries.sort_by(|a, b| {
            let ord = label_at(&a.row, column).cmp(&label_at(&b.row, column));
            match order {
                SortOrder::Ascending => ord,
                SortOrder::Descending => ord.reverse(),
            }
        });
        self.sorted_by = Some((column, order));
    }

    /// Header-click behaviour: ascending first, then flip on repeat clicks.
    pub fn sort_toggle(&mut self, column: usize) {
        let order = match self.sorted_by {
            Some((c, order)) if c == column => order.toggled(),
            _ => SortOrder::Ascending,
        };
        self.sort_by(column, order);
    }
}

fn label_at(row: &Row, column: usize) -> Option<&str> {
    row.cell(column).map(|c| c.label.as_str())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cell::{Cell, group_rows};

    fn table(names: &[&str]) -> SelectableTable {
        let rows = names
            .iter()
            .map(|n| Row::new(vec![Cell::group(n), Cell::text("admin")]))
            .collect();
        SelectableTable::new(["groups", "managed by"], rows)
    }

    #[test]
    fn test_toggle_selects_and_deselects() {
        let mut t = table(&["a", "b", "c"]);
        assert_eq!(t.toggle(1), Some(true));
        assert!(t.is_selected(1));
        assert_eq!(t.toggle(1), Some(false));
        assert_eq!(t.selected_len(), 0);
    }

    #[test]
    fn test_toggle_outside_rendered_rows_is_noop() {
        let mut t = table(&["a"]);
        assert_eq!(t.toggle(5), None);
        assert_eq!(t.selected_len(), 0);
    }

    #[test]
    fn test_count_readout_updates_only_on_refresh() {
        let mut t = table(&["a", "b", "c", "d"]);
        t.toggle(0);
        t.toggle(2);
        t.toggle(3);
        assert_eq!(t.displayed_count(), 0);
        assert_eq!(t.refresh_count(), 3);
        assert_eq!(t.displayed_count(), 3);

        t.toggle(1);
        assert_eq!(t.displayed_count(), 3);
        t.refresh_count();
        assert_eq!(t.displayed_count(), 4);
    }

    #[test]
    fn test_selected_rows_in_display_order() {
        let mut t = table(&["a", "b", "c"]);
        t.toggle(2);
        t.toggle(0);
        let ids: Vec<&str> = t.selected_rows().iter().map(|r| r.identifier(0)).collect();
        assert_eq!(ids, vec!["a", "c"]);
    }

    #[test]
    fn test_selection_follows_rows_when_sorted() {
        let mut t = table(&["b", "c", "a"]);
        t.toggle(0); // "b"
        t.sort_by(0, SortOrder::Ascending);
        assert!(t.is_selected(1));
        assert_eq!(t.selected_rows()[0].identifier(0), "b");

        t.sort_toggle(0);
        assert_eq!(t.sorted_by(), Some((0, SortOrder::Descending)));
        let order: Vec<&str> = t.rows().map(|(r, _)| r.identifier(0)).collect();
        assert_eq!(order, vec!["c", "b", "a"]);
        assert!(t.is_selected(1));
    }

    #[test]
    fn test_toggle_all_from_header() {
        let mut t = table(&["a", "b", "c"]);
        t.toggle(1);
        t.toggle_all();
        assert!(t.all_selected());
        t.toggle_all();
        assert_eq!(t.selected_len(), 0);

        let mut empty = table(&[]);
        empty.toggle_all();
        assert!(!empty.all_selected());
    }

    #[test]
    fn test_select_all_and_clear() {
        let mut t = SelectableTable::new(
            ["groups", "managed by"],
            group_rows(&[vec!["x".into(), "y".into()], vec!["z".into(), "y".into()]]),
        );
        t.select_all();
        assert_eq!(t.selected_len(), 2);
        assert!(t.all_selected());
        t.clear_selection();
        assert!(t.selected_rows().is_empty());
        assert_eq!(t.columns(), ["groups", "managed by"]);
    }
}
