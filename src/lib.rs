mod error;
mod model;
mod options;
mod rebuild;
mod table_match;
mod warning;

use regex::Captures;

use crate::model::TableBlock;
use crate::rebuild::rebuild_table;
use crate::table_match::table_pattern;

pub use error::RewriteError;
pub use options::{FallbackMode, RewriteOptions};
pub use warning::{RewriteWarning, WarningCode};

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RewriteReport {
    pub table_count: usize,
    pub warnings: Vec<RewriteWarning>,
}

pub fn rewrite_with_report(html: &str, options: &RewriteOptions) -> (String, RewriteReport) {
    if !html.contains("<table") {
        return (html.to_string(), RewriteReport::default());
    }

    let mut warnings = Vec::new();
    let mut table_count = 0_usize;

    let rewritten = table_pattern().replace_all(html, |caps: &Captures<'_>| {
        table_count += 1;
        let block = TableBlock::from_captures(caps);
        rebuild_table(&block, options, table_count, &mut warnings)
    });

    (
        rewritten.into_owned(),
        RewriteReport {
            table_count,
            warnings,
        },
    )
}

#[must_use]
pub fn rewrite(html: &str) -> String {
    rewrite_with_report(html, &RewriteOptions::default()).0
}
