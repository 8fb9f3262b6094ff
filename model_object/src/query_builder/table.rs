/// A table and its columns, both in storage convention.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Table {
    name: String,
    columns: Vec<String>,
}

impl Table {
    pub fn define<I, S>(name: impl Into<String>, columns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            name: name.into(),
            columns: columns.into_iter().map(Into::into).collect(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    /// Column accessor; `None` when the table does not declare it.
    pub fn column(&self, name: &str) -> Option<&str> {
        self.columns
            .iter()
            .find(|column| column.as_str() == name)
            .map(String::as_str)
    }

    /// Name of the COUNT column a count statement returns, `{table}_count`.
    pub fn count_column(&self) -> String {
        format!("{}_count", self.name)
    }
}
