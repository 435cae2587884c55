use regex::Captures;

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct TableBlock<'a> {
    pub attributes: &'a str,
    pub head_section: Option<&'a str>,
    pub header_cells: Option<&'a str>,
    pub body_open_tag: &'a str,
    pub body_content: &'a str,
    pub body_close_tag: &'a str,
}

impl<'a> TableBlock<'a> {
    pub(crate) fn from_captures(caps: &Captures<'a>) -> Self {
        let text = |name: &str| caps.name(name).map(|m| m.as_str());
        Self {
            attributes: text("attrs").unwrap_or(""),
            head_section: text("head"),
            header_cells: text("labels"),
            body_open_tag: text("open").unwrap_or(""),
            body_content: text("body").unwrap_or(""),
            body_close_tag: text("close").unwrap_or(""),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct RowMatch<'a> {
    pub open_tag: &'a str,
    pub cells_text: &'a str,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct CellMatch<'a> {
    pub attributes: &'a str,
    pub inner_text: &'a str,
}
