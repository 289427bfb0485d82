use crate::markup::extract_identifier;

/// In-app route of the group membership page.
pub const GROUP_LINK_PREFIX: &str = "/group_users?groupname=";

/// One table cell: what is shown, and the identifier submitted for it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cell {
    pub label: String,
    pub id: Option<String>,
    pub href: Option<String>,
}

impl Cell {
    pub fn text(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            id: None,
            href: None,
        }
    }

    pub fn link(id: impl Into<String>, label: impl Into<String>, href: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            id: Some(id.into()),
            href: Some(href.into()),
        }
    }

    pub fn group(name: &str) -> Self {
        Self::link(name, name, format!("{GROUP_LINK_PREFIX}{name}"))
    }

    /// A user name. Not a link: the console has no per-user page.
    pub fn user(name: &str) -> Self {
        Self {
            label: name.to_string(),
            id: Some(name.to_string()),
            href: None,
        }
    }

    /// Builds a cell from a rendered HTML fragment such as `<a href=..>g1</a>`.
    ///
    /// Plain text without any tag keeps its text as the label; its
    /// identifier is still the (empty) result of the boundary scan.
    pub fn from_markup(fragment: &str) -> Self {
        let id = extract_identifier(fragment);
        let label = if id.is_empty() && !fragment.contains(['<', '>']) {
            fragment
        } else {
            id
        };
        Self {
            label: label.to_string(),
            id: Some(id.to_string()),
            href: None,
        }
    }

    /// The identifier submitted for this cell, falling back to the label.
    pub fn identifier(&self) -> &str {
        self.id.as_deref().unwrap_or(&self.label)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Row {
    pub cells: Vec<Cell>,
}

impl Row {
    pub fn new(cells: Vec<Cell>) -> Self {
        Self { cells }
    }

    pub fn from_markup<S: AsRef<str>>(fragments: &[S]) -> Self {
        Self::new(fragments.iter().map(|f| Cell::from_markup(f.as_ref())).collect())
    }

    pub fn cell(&self, column: usize) -> Option<&Cell> {
        self.cells.get(column)
    }

    /// Identifier of the given column, `""` when the row is too short.
    pub fn identifier(&self, column: usize) -> &str {
        self.cell(column).map(Cell::identifier).unwrap_or("")
    }
}

/// Rows for a `[group, managed_by]` listing. Both columns link to the group.
pub fn group_rows(groups: &[Vec<String>]) -> Vec<Row> {
    groups
        .iter()
        .filter_map(|entry| {
            let group = entry.first()?;
            let managed_by = entry.get(1).map(String::as_str).unwrap_or("");
            let href = format!("{GROUP_LINK_PREFIX}{group}");
            Some(Row::new(vec![
                Cell::group(group),
                Cell::link(managed_by, managed_by, href),
            ]))
        })
        .collect()
}

/// Rows for a `[user, group]` pending action listing.
pub fn pending_action_rows(actions: &[Vec<String>]) -> Vec<Row> {
    actions
        .iter()
        .filter_map(|entry| match entry.as_slice() {
            [user, group, ..] => Some(Row::new(vec![Cell::user(user), Cell::group(group)])),
            _ => None,
        })
        .collect()
}

/// Single-column rows for a list of group or user names.
pub fn name_rows(names: &[String], to_cell: fn(&str) -> Cell) -> Vec<Row> {
    names.iter().map(|n| Row::new(vec![to_cell(n)])).collect()
}
