#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WarningCode {
    NoRowsMatched,
    NoCellsMatched,
    MissingHeaderLabel,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RewriteWarning {
    pub code: WarningCode,
    pub message: String,
    pub table_id: Option<usize>,
    pub row_index: Option<usize>,
}

impl RewriteWarning {
    #[must_use]
    pub fn new(code: WarningCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            table_id: None,
            row_index: None,
        }
    }

    #[must_use]
    pub fn with_table_id(mut self, table_id: usize) -> Self {
        self.table_id = Some(table_id);
        self
    }

    #[must_use]
    pub fn with_row_index(mut self, row_index: usize) -> Self {
        self.row_index = Some(row_index);
        self
    }
}
