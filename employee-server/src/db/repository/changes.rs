//! Column allow-list for partial updates
//!
//! Update statements only ever name columns from [`EmployeeColumn`];
//! client-supplied keys never reach SQL text.

use std::collections::BTreeMap;

/// Updatable employee columns
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum EmployeeColumn {
    Name,
    Position,
    Salary,
}

impl EmployeeColumn {
    pub const ALL: [EmployeeColumn; 3] = [Self::Name, Self::Position, Self::Salary];

    /// SQL column name
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Position => "position",
            Self::Salary => "salary",
        }
    }

    /// Match a request key (trimmed, case-insensitive)
    pub fn from_key(key: &str) -> Option<Self> {
        let key = key.trim();
        Self::ALL
            .into_iter()
            .find(|column| column.as_str().eq_ignore_ascii_case(key))
    }
}

impl std::fmt::Display for EmployeeColumn {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A sanitized value bound to a column
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ColumnValue {
    Text(String),
    Integer(i64),
}

/// Validated column changes for one update
///
/// The setters pair each column with its value kind, so a change set can
/// never carry text for `salary` or a number for `name`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EmployeeChanges(BTreeMap<EmployeeColumn, ColumnValue>);

impl EmployeeChanges {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.0
            .insert(EmployeeColumn::Name, ColumnValue::Text(name.into()));
    }

    pub fn set_position(&mut self, position: impl Into<String>) {
        self.0
            .insert(EmployeeColumn::Position, ColumnValue::Text(position.into()));
    }

    pub fn set_salary(&mut self, salary: i64) {
        self.0
            .insert(EmployeeColumn::Salary, ColumnValue::Integer(salary));
    }

    pub fn get(&self, column: EmployeeColumn) -> Option<&ColumnValue> {
        self.0.get(&column)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Changes in column order
    pub fn iter(&self) -> impl Iterator<Item = (EmployeeColumn, &ColumnValue)> {
        self.0.iter().map(|(column, value)| (*column, value))
    }
}
