use async_trait::async_trait;
use chrono::NaiveDate;
use futures_util::future::join_all;
use scraper::Html;

use super::columns::DAILY_DOCUMENT;
use super::core::OpenDart;
use super::error::Result;
use super::options::CorpClassFilter;
use super::parsing::daily::{DailyRow, parse_page_count, parse_rows};
use super::table::Table;
use super::traits::DailyListOperations;

const LISTING_DIR: &str = "dsac001";
const PAGE_SEARCH_PATH: &str = "search.ax";

/// Parses one listing page. `Html` is not `Send`, so it never outlives this call.
fn parse_listing(body: &str) -> (usize, Vec<DailyRow>) {
    let document = Html::parse_document(body);
    (parse_page_count(&document), parse_rows(&document))
}

fn parse_listing_rows(body: &str) -> Vec<DailyRow> {
    parse_rows(&Html::parse_document(body))
}

fn page_form(page: usize, select_date: &str) -> Vec<(String, String)> {
    vec![
        ("currentPage".to_string(), page.to_string()),
        ("selectDate".to_string(), select_date.to_string()),
        ("mdayCnt".to_string(), "0".to_string()),
    ]
}

/// Scrapes the DART website's list of disclosures submitted on one day.
///
/// # Examples
///
/// ```ignore
/// use chrono::NaiveDate;
/// use opendartkit::{CorpClassFilter, DailyListOperations, OpenDart};
///
/// let dart = OpenDart::new("your-api-key")?;
/// let date = NaiveDate::from_ymd_opt(2024, 3, 15).unwrap();
/// let listed = dart
///     .daily_uploaded_documents(date, Some(CorpClassFilter::Kospi))
///     .await?;
/// println!("{} disclosures", listed.len());
/// ```
#[async_trait]
impl DailyListOperations for OpenDart {
    /// Fetches the first listing page, then the remaining pages concurrently.
    ///
    /// Rows keep page order and are then sorted by submission time; rows
    /// sharing a time stay in listing order.
    async fn daily_uploaded_documents(
        &self,
        date: NaiveDate,
        filter: Option<CorpClassFilter>,
    ) -> Result<Table> {
        let select_date = date.format("%Y.%m.%d").to_string();
        tracing::info!("get daily uploaded documents ({})", select_date);

        let url = format!(
            "{}/{}/{}",
            self.dart_url,
            LISTING_DIR,
            CorpClassFilter::page_name(filter)
        );
        let first_page = self
            .get_text(&url, &[("selectDate".to_string(), select_date.clone())])
            .await?;
        let (page_count, mut rows) = parse_listing(&first_page);

        if page_count > 1 {
            tracing::info!("fetching daily list pages 2..={}", page_count);
            let search_url = format!("{}/{}/{}", self.dart_url, LISTING_DIR, PAGE_SEARCH_PATH);
            let forms: Vec<Vec<(String, String)>> =
                (2..=page_count).map(|page| page_form(page, &select_date)).collect();
            let pages = join_all(forms.iter().map(|form| self.post_form(&search_url, form))).await;
            for page in pages {
                rows.extend(parse_listing_rows(&page?));
            }
        }

        let mut table = Table::empty(DAILY_DOCUMENT, self.rename_columns);
        for row in rows {
            table.push_row(row.into_cells());
        }
        let time_column = if self.rename_columns {
            DAILY_DOCUMENT[0].1
        } else {
            DAILY_DOCUMENT[0].0
        };
        table.sort_by_column(time_column);
        Ok(table)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_form() {
        let form = page_form(3, "2024.03.15");
        assert_eq!(form[0], ("currentPage".to_string(), "3".to_string()));
        assert_eq!(form[1].1, "2024.03.15");
        assert_eq!(form[2], ("mdayCnt".to_string(), "0".to_string()));
    }

    #[test]
    fn test_parse_listing_without_pager() {
        let (pages, rows) = parse_listing("<html><body><p>no results</p></body></html>");
        assert_eq!(pages, 1);
        assert!(rows.is_empty());
    }
}
