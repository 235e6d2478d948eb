//! Parser for the DART daily disclosure listing (`/dsac001/main*.do`).
//!
//! This page is HTML meant for browsers, not a documented contract. Rows that
//! do not have the expected cells are skipped and missing pieces become empty
//! strings, so markup changes produce partial results instead of errors.

use once_cell::sync::Lazy;
use regex::Regex;
use scraper::{ElementRef, Html, Selector};

static PAGE_ITEM: Lazy<Selector> =
    Lazy::new(|| Selector::parse(".pageSkip ul li").expect("Failed to compile PAGE_ITEM"));

static LIST_ROW: Lazy<Selector> =
    Lazy::new(|| Selector::parse(".tbList tbody tr").expect("Failed to compile LIST_ROW"));

static CELL: Lazy<Selector> = Lazy::new(|| Selector::parse("td").expect("Failed to compile CELL"));

static ANCHOR: Lazy<Selector> = Lazy::new(|| Selector::parse("a").expect("Failed to compile ANCHOR"));

static TITLED_SPAN: Lazy<Selector> =
    Lazy::new(|| Selector::parse("span[title]").expect("Failed to compile TITLED_SPAN"));

static SPAN: Lazy<Selector> = Lazy::new(|| Selector::parse("span").expect("Failed to compile SPAN"));

static CORP_CODE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[0-9]{8}").expect("Failed to compile CORP_CODE"));

static RECEIPT_NO: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[0-9]{14}").expect("Failed to compile RECEIPT_NO"));

/// One listed disclosure.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DailyRow {
    pub time: String,
    pub corp_code: String,
    pub corp_cls: String,
    pub corp_name: String,
    pub report_nm: String,
    pub rcept_no: String,
    pub flr_nm: String,
    pub rcept_dt: String,
    pub rm: String,
}

impl DailyRow {
    /// Cells in the order of the daily-list column map.
    pub fn into_cells(self) -> Vec<String> {
        vec![
            self.time,
            self.corp_code,
            self.corp_cls,
            self.corp_name,
            self.report_nm,
            self.rcept_no,
            self.flr_nm,
            self.rcept_dt,
            self.rm,
        ]
    }
}

/// Number of result pages announced by the pager (at least 1).
pub fn parse_page_count(document: &Html) -> usize {
    document.select(&PAGE_ITEM).count().max(1)
}

/// Parses every row of the listing table.
pub fn parse_rows(document: &Html) -> Vec<DailyRow> {
    document.select(&LIST_ROW).filter_map(parse_row).collect()
}

fn parse_row(tr: ElementRef<'_>) -> Option<DailyRow> {
    let cells: Vec<ElementRef<'_>> = tr.select(&CELL).collect();
    if cells.len() < 6 {
        tracing::debug!("skipping daily list row with {} cells", cells.len());
        return None;
    }

    let mut row = DailyRow {
        time: cell_text(&cells[0]),
        flr_nm: cell_text(&cells[3]),
        rcept_dt: cell_text(&cells[4]),
        ..DailyRow::default()
    };

    if let Some(name) = cells[1].select(&ANCHOR).next() {
        row.corp_name = normalize(&name.text().collect::<String>());
        if let Some(code) = name.value().attr("href").and_then(|h| CORP_CODE.find(h)) {
            row.corp_code = code.as_str().to_string();
        }
    }
    if let Some(class) = cells[1].select(&TITLED_SPAN).next() {
        row.corp_cls = class.value().attr("title").unwrap_or_default().to_string();
    }

    if let Some(report) = cells[2].select(&ANCHOR).next() {
        row.report_nm = normalize(&report.text().collect::<String>());
        row.rcept_no = match report.value().attr("id") {
            Some(id) => id.rsplit('_').next().unwrap_or_default().to_string(),
            None => report
                .value()
                .attr("href")
                .and_then(|h| RECEIPT_NO.find(h))
                .map(|m| m.as_str().to_string())
                .unwrap_or_default(),
        };
    }

    row.rm = cells[5]
        .select(&SPAN)
        .map(|span| span.text().collect::<String>().trim().to_string())
        .collect::<Vec<_>>()
        .join(" ");

    Some(row)
}

fn cell_text(cell: &ElementRef<'_>) -> String {
    cell.text().collect::<String>().trim().to_string()
}

/// Treats tabs and line breaks as spaces and collapses runs of spaces.
fn normalize(text: &str) -> String {
    text.split([' ', '\t', '\n', '\r'])
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}
