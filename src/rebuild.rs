use crate::model::TableBlock;
use crate::options::{FallbackMode, RewriteOptions};
use crate::table_match::{extract_header_labels, match_cells, match_rows};
use crate::warning::{RewriteWarning, WarningCode};

pub(crate) fn rebuild_table(
    block: &TableBlock<'_>,
    options: &RewriteOptions,
    table_id: usize,
    warnings: &mut Vec<RewriteWarning>,
) -> String {
    let mut out = String::new();
    out.push_str("<table");
    out.push_str(block.attributes);
    out.push_str(">\n");

    let mut header_labels = Vec::new();
    if let Some(head_section) = block.head_section {
        out.push_str(head_section);
        header_labels = extract_header_labels(block.header_cells.unwrap_or(""));
    }

    if !block.body_content.is_empty() {
        out.push_str(block.body_open_tag);

        let rows = match_rows(block.body_content);
        if rows.is_empty() {
            if !block.body_content.trim().is_empty() {
                warnings.push(
                    RewriteWarning::new(
                        WarningCode::NoRowsMatched,
                        "table body has content but no recognizable rows",
                    )
                    .with_table_id(table_id),
                );
            }
            if options.fallback == FallbackMode::PreserveInput {
                out.push_str(block.body_content);
            }
        }

        for (row_index, row) in rows.iter().enumerate() {
            out.push_str(row.open_tag);

            let cells = match_cells(row.cells_text);
            if cells.is_empty() {
                if !row.cells_text.trim().is_empty() {
                    warnings.push(
                        RewriteWarning::new(
                            WarningCode::NoCellsMatched,
                            "table row has content but no recognizable cells",
                        )
                        .with_table_id(table_id)
                        .with_row_index(row_index),
                    );
                }
                if options.fallback == FallbackMode::PreserveInput {
                    out.push_str(row.cells_text);
                }
            }

            let first_cell_text = cells.first().map_or("", |cell| cell.inner_text);
            for (cell_index, cell) in cells.iter().enumerate() {
                out.push_str("<td");
                out.push_str(cell.attributes);

                if !header_labels.is_empty() {
                    if let Some(label) = header_labels.get(cell_index) {
                        out.push_str(" data-th=\"");
                        out.push_str(label);
                        out.push('"');
                    } else if cell_index == header_labels.len() {
                        warnings.push(
                            RewriteWarning::new(
                                WarningCode::MissingHeaderLabel,
                                "row has more cells than header labels; data-th omitted",
                            )
                            .with_table_id(table_id)
                            .with_row_index(row_index),
                        );
                    }
                }

                if cell_index > 0 {
                    out.push_str(" data-first-cell=\"");
                    out.push_str(first_cell_text);
                    out.push('"');
                }

                out.push_str(">\n");
                out.push_str(cell.inner_text);
                out.push_str("\n</td>\n");
            }

            out.push_str("</tr>\n");
        }

        out.push_str(block.body_close_tag);
    }

    out.push_str("</table>\n");
    out
}

#[cfg(test)]
mod tests {
    use super::rebuild_table;
    use crate::model::TableBlock;
    use crate::options::{FallbackMode, RewriteOptions};
    use crate::warning::WarningCode;

    fn block<'a>(
        head: Option<(&'a str, &'a str)>,
        body: (&'a str, &'a str, &'a str),
    ) -> TableBlock<'a> {
        TableBlock {
            attributes: "",
            head_section: head.map(|(section, _)| section),
            header_cells: head.map(|(_, cells)| cells),
            body_open_tag: body.0,
            body_content: body.1,
            body_close_tag: body.2,
        }
    }

    #[test]
    fn annotates_cells_with_header_and_first_cell() {
        let block = block(
            Some((
                "<thead><tr><td>Name</td><td>Age</td></tr></thead>",
                "<td>Name</td><td>Age</td>",
            )),
            ("<tbody>", "<tr><td>Alice</td><td>30</td></tr>", "</tbody>"),
        );

        let mut warnings = Vec::new();
        let result = rebuild_table(&block, &RewriteOptions::default(), 1, &mut warnings);

        assert!(result.contains("<td data-th=\"Name\">"));
        assert!(result.contains("<td data-th=\"Age\" data-first-cell=\"Alice\">"));
        assert!(warnings.is_empty());
    }

    #[test]
    fn extra_cells_omit_data_th_and_flag_warning() {
        let block = block(
            Some((
                "<thead><tr><td>Name</td></tr></thead>",
                "<td>Name</td>",
            )),
            ("", "<tr><td>Alice</td><td>30</td><td>NYC</td></tr>", ""),
        );

        let mut warnings = Vec::new();
        let result = rebuild_table(&block, &RewriteOptions::default(), 1, &mut warnings);

        assert!(result.contains("<td data-th=\"Name\">"));
        assert!(result.contains("<td data-first-cell=\"Alice\">\n30"));
        assert!(result.contains("<td data-first-cell=\"Alice\">\nNYC"));
        assert!(!result.contains("data-th=\"\""));
        assert_eq!(warnings.len(), 1);
        assert_eq!(warnings[0].code, WarningCode::MissingHeaderLabel);
        assert_eq!(warnings[0].row_index, Some(0));
    }

    #[test]
    fn unmatched_body_is_preserved_by_default() {
        let block = block(None, ("<tbody>", "no rows here", "</tbody>"));

        let mut warnings = Vec::new();
        let result = rebuild_table(&block, &RewriteOptions::default(), 3, &mut warnings);

        assert_eq!(result, "<table>\n<tbody>no rows here</tbody></table>\n");
        assert_eq!(warnings.len(), 1);
        assert_eq!(warnings[0].code, WarningCode::NoRowsMatched);
        assert_eq!(warnings[0].table_id, Some(3));
    }

    #[test]
    fn unmatched_body_is_dropped_in_legacy_mode() {
        let block = block(None, ("<tbody>", "no rows here", "</tbody>"));
        let options = RewriteOptions {
            fallback: FallbackMode::LegacyDrop,
        };

        let mut warnings = Vec::new();
        let result = rebuild_table(&block, &options, 1, &mut warnings);

        assert_eq!(result, "<table>\n<tbody></tbody></table>\n");
        assert_eq!(warnings.len(), 1);
    }

    #[test]
    fn row_without_cells_keeps_its_content_by_default() {
        let block = block(None, ("", "<tr><th>not a td</th></tr>", ""));

        let mut warnings = Vec::new();
        let result = rebuild_table(&block, &RewriteOptions::default(), 1, &mut warnings);

        assert_eq!(result, "<table>\n<tr><th>not a td</th></tr>\n</table>\n");
        assert_eq!(warnings.len(), 1);
        assert_eq!(warnings[0].code, WarningCode::NoCellsMatched);
    }

    #[test]
    fn empty_body_emits_no_body_wrapper() {
        let block = block(
            Some((
                "<thead><tr><td>Name</td></tr></thead>",
                "<td>Name</td>",
            )),
            ("", "", ""),
        );

        let mut warnings = Vec::new();
        let result = rebuild_table(&block, &RewriteOptions::default(), 1, &mut warnings);

        assert_eq!(
            result,
            "<table>\n<thead><tr><td>Name</td></tr></thead></table>\n"
        );
        assert!(warnings.is_empty());
    }
}
