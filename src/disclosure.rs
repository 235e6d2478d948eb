use async_trait::async_trait;
use serde_json::Value;

use super::columns::{COMPANY, SEARCH_DOCUMENT};
use super::core::OpenDart;
use super::endpoints::{Endpoint, records};
use super::error::{OpenDartError, Result};
use super::options::SearchOptions;
use super::table::Table;
use super::traits::DisclosureOperations;

const SEARCH_ENDPOINT: Endpoint = Endpoint {
    path: "list.json",
    columns: SEARCH_DOCUMENT,
};

const COMPANY_ENDPOINT: Endpoint = Endpoint {
    path: "company.json",
    columns: COMPANY,
};

/// Reads a paging field that the API may send as a number or a string.
fn page_field(value: Option<&Value>) -> Option<u32> {
    match value? {
        Value::Number(n) => n.as_u64().and_then(|n| u32::try_from(n).ok()),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

fn with_page_no(params: &[(String, String)], page: u32) -> Vec<(String, String)> {
    params
        .iter()
        .map(|(key, value)| {
            if key == "page_no" {
                (key.clone(), page.to_string())
            } else {
                (key.clone(), value.clone())
            }
        })
        .collect()
}

/// Disclosure search (`list.json`) and company overview (`company.json`).
///
/// # Examples
///
/// ```ignore
/// use chrono::NaiveDate;
/// use opendartkit::{DisclosureOperations, OpenDart, SearchOptions};
///
/// let dart = OpenDart::new("your-api-key")?;
/// let options = SearchOptions::new()
///     .with_corp_code("00126380")
///     .with_date_range(
///         NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
///         NaiveDate::from_ymd_opt(2024, 3, 31).unwrap(),
///     )
///     .with_disclosure_type("A");
///
/// let documents = dart.search_documents(options).await?;
/// for receipt_no in documents.column("접수번호").unwrap_or_default() {
///     println!("{}", receipt_no);
/// }
/// ```
#[async_trait]
impl DisclosureOperations for OpenDart {
    /// Searches disclosures and merges every following result page.
    ///
    /// The first response declares `page_no` and `total_page`; pages
    /// `page_no + 1 ..= total_page` are then requested one after another and
    /// appended in order. A page that fails with a service status error
    /// contributes no rows.
    async fn search_documents(&self, options: SearchOptions) -> Result<Table> {
        let params = options.to_query_params();
        let query = serde_urlencoded::to_string(&params)
            .map_err(|e| OpenDartError::InvalidResponse(e.to_string()))?;
        tracing::info!("search document ({})", query);

        let body = match self.get_json(SEARCH_ENDPOINT.path, &params).await {
            Ok(body) => body,
            Err(OpenDartError::Api { .. }) => {
                return Ok(Table::empty(SEARCH_ENDPOINT.columns, self.rename_columns));
            }
            Err(e) => return Err(e),
        };

        let mut table = Table::from_records(
            &records(body.get("list")),
            SEARCH_ENDPOINT.columns,
            self.rename_columns,
        );

        let (Some(page_no), Some(total_page)) =
            (page_field(body.get("page_no")), page_field(body.get("total_page")))
        else {
            return Ok(table);
        };

        if total_page > page_no {
            tracing::info!("fetching result pages {}..={}", page_no + 1, total_page);
        }
        for page in page_no + 1..=total_page {
            let page_table = self
                .fetch_table(SEARCH_ENDPOINT, &with_page_no(&params, page))
                .await?;
            table.append(page_table);
        }

        Ok(table)
    }

    async fn company_information(&self, corp_code: &str) -> Result<Table> {
        let corp_code = corp_code.trim();
        tracing::info!("get company information (corp code: {})", corp_code);
        let params = vec![("corp_code".to_string(), corp_code.to_string())];

        match self.get_json(COMPANY_ENDPOINT.path, &params).await {
            Ok(mut body) => {
                body.remove("status");
                body.remove("message");
                Ok(Table::from_records(&[body], COMPANY_ENDPOINT.columns, self.rename_columns))
            }
            Err(OpenDartError::Api { .. }) => {
                Ok(Table::empty(COMPANY_ENDPOINT.columns, self.rename_columns))
            }
            Err(e) => Err(e),
        }
    }
}
