// src/core/dom.rs

// Narrow DOM access: every table on the page, as rows of ordered cell texts.
// Everything downstream of here works on plain strings.

use scraper::{Html, Selector};

use crate::core::sanitize::normalize_ws;

/// `<td>` texts for every row of every `<table>`, in page order. Header rows
/// hold `<th>` cells only and therefore come out empty; callers skip the
/// header by position.
pub fn tables(page: &str) -> Vec<Vec<Vec<String>>> {
    let Ok(table_sel) = Selector::parse("table") else {
        return Vec::new();
    };
    let Ok(tr_sel) = Selector::parse("tr") else {
        return Vec::new();
    };
    let Ok(td_sel) = Selector::parse("td") else {
        return Vec::new();
    };

    let doc = Html::parse_document(page);
    doc.select(&table_sel)
        .map(|table| {
            table
                .select(&tr_sel)
                .map(|tr| {
                    tr.select(&td_sel)
                        .map(|td| normalize_ws(&td.text().collect::<String>()))
                        .collect()
                })
                .collect()
        })
        .collect()
}
