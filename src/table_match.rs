use regex::Regex;

use crate::model::{CellMatch, RowMatch};

pub(crate) fn table_pattern() -> Regex {
    Regex::new(concat!(
        r"(?is)<table(?P<attrs>.*?)>\s*",
        r"(?P<head><thead.*?>\s*<tr.*?>(?P<labels>.*?)</tr>\s*</thead>)?\s*",
        r"(?P<open><tbody.*?>)?",
        r"(?P<body>.*?)",
        r"(?P<close></tbody>)?\s*",
        r"</table>",
    ))
    .expect("hardcoded table pattern is valid")
}

pub(crate) fn extract_header_labels(header_cells: &str) -> Vec<&str> {
    let label_re = Regex::new(r"(?is)<td[^>]*?>(?P<label>.*?)</td>\s*")
        .expect("hardcoded header cell pattern is valid");
    label_re
        .captures_iter(header_cells)
        .filter_map(|capture| capture.name("label"))
        .map(|label| label.as_str())
        .collect()
}

pub(crate) fn match_rows(body_content: &str) -> Vec<RowMatch<'_>> {
    let row_re = Regex::new(r"(?is)(?P<tr><tr.*?>)\s*(?P<cells>.*?)\s*</tr>")
        .expect("hardcoded row pattern is valid");
    row_re
        .captures_iter(body_content)
        .filter_map(|capture| {
            let open_tag = capture.name("tr")?.as_str();
            let cells_text = capture.name("cells")?.as_str();
            Some(RowMatch {
                open_tag,
                cells_text,
            })
        })
        .collect()
}

pub(crate) fn match_cells(cells_text: &str) -> Vec<CellMatch<'_>> {
    let cell_re = Regex::new(r"(?is)<td(?P<attrs>.*?)>(?P<inner>.*?)</td>")
        .expect("hardcoded cell pattern is valid");
    cell_re
        .captures_iter(cells_text)
        .filter_map(|capture| {
            let attributes = capture.name("attrs")?.as_str();
            let inner_text = capture.name("inner")?.as_str();
            Some(CellMatch {
                attributes,
                inner_text,
            })
        })
        .collect()
}
