//! Trait definitions organizing OpenDART operations by feature area.
//!
//! The `OpenDart` client implements every trait. Table-returning operations
//! turn a status error reported by the service into an empty table with the
//! endpoint's columns, so results from many calls can be appended without
//! checking which of them failed. Transport and local file errors are
//! returned as `Err`.

use async_trait::async_trait;
#[cfg(feature = "daily")]
use chrono::NaiveDate;
use std::path::PathBuf;
use std::sync::Arc;

use super::endpoints::{
    EquityDisclosure, FinancialStatement, MajorEvent, PeriodicReport, RegistrationStatement,
    TableGroup,
};
use super::error::Result;
#[cfg(feature = "daily")]
use super::options::CorpClassFilter;
use super::options::{DateRangeQuery, ReportCode, ReportQuery, SearchOptions};
use super::registry::{Corporation, CorporationRegistry};
use super::table::Table;

/// Access to the registry of corporations known to DART.
///
/// The registry is downloaded as one ZIP file, cached on disk and reused for
/// the rest of the calendar day it was fetched on.
#[async_trait]
pub trait RegistryOperations {
    /// Returns the loaded registry, fetching it when there is no cache from today or `reload` is set.
    async fn corporations(&self, reload: bool) -> Result<Arc<CorporationRegistry>>;
    /// The registry as a table.
    async fn corporation_table(&self, reload: bool) -> Result<Table>;
    /// Rows whose formal name equals `name` (`exact`) or contains it.
    async fn search_corporations(&self, name: &str, exact: bool) -> Result<Table>;
    /// The listed corporation with the given 6-digit stock code.
    async fn find_corporation_by_stock_code(&self, stock_code: &str) -> Result<Option<Corporation>>;
}

/// Disclosure search and company overview.
#[async_trait]
pub trait DisclosureOperations {
    /// Searches filed disclosures, following every result page after the requested one.
    async fn search_documents(&self, options: SearchOptions) -> Result<Table>;
    /// Company overview as a single-row table.
    async fn company_information(&self, corp_code: &str) -> Result<Table>;
}

/// Key items of business reports.
#[async_trait]
pub trait PeriodicReportOperations {
    async fn periodic_report(&self, report: PeriodicReport, query: &ReportQuery) -> Result<Table>;
}

/// Financial statements of listed companies.
#[async_trait]
pub trait FinancialOperations {
    async fn financial_statement(
        &self,
        statement: FinancialStatement,
        query: &ReportQuery,
    ) -> Result<Table>;
    /// Standard account taxonomy for a statement division such as `BS1` or `IS1`.
    async fn xbrl_taxonomy(&self, statement_division: &str) -> Result<Table>;
}

/// Large holdings and executive ownership reports.
#[async_trait]
pub trait EquityDisclosureOperations {
    async fn equity_disclosure(&self, disclosure: EquityDisclosure, corp_code: &str) -> Result<Table>;
}

/// Major event reports filed within a date window.
#[async_trait]
pub trait MajorEventOperations {
    async fn major_event(&self, event: MajorEvent, query: &DateRangeQuery) -> Result<Table>;
}

/// Securities registration statements. Each response has several titled sections.
#[async_trait]
pub trait RegistrationStatementOperations {
    async fn registration_statement(
        &self,
        statement: RegistrationStatement,
        query: &DateRangeQuery,
    ) -> Result<Vec<TableGroup>>;
}

/// Download and local caching of disclosure documents.
///
/// Files are cached under the data directory by receipt number; a cached
/// file is reused unless `reload` is set. Receipt numbers other than 14
/// digits fail with `OpenDartError::InvalidReceiptNo` before any file is touched.
#[async_trait]
pub trait DocumentOperations {
    /// Downloads the filed XML of a disclosure and repairs it into well-formed UTF-8.
    async fn download_raw_file(&self, receipt_no: &str, reload: bool) -> Result<PathBuf>;
    /// Repaired XML text, or an empty string when no file could be produced.
    async fn read_raw_xml(&self, receipt_no: &str, reload: bool) -> Result<String>;
    /// Saves the web viewer rendering of a disclosure as a standalone HTML file.
    async fn download_as_html(&self, receipt_no: &str, reload: bool) -> Result<PathBuf>;
    /// HTML text, or an empty string when no file could be produced.
    async fn read_html(&self, receipt_no: &str, reload: bool) -> Result<String>;
    /// Downloads and extracts the XBRL package of a periodic report.
    async fn download_financial_statements_raw_file(
        &self,
        receipt_no: &str,
        report_code: ReportCode,
        reload: bool,
    ) -> Result<PathBuf>;
    /// Removes cached `.xml` and `.html` files, returning how many were deleted.
    fn clear_document_files(&self) -> Result<usize>;
}

/// Disclosures listed on the DART website for one day.
#[cfg(feature = "daily")]
#[async_trait]
pub trait DailyListOperations {
    async fn daily_uploaded_documents(
        &self,
        date: NaiveDate,
        filter: Option<CorpClassFilter>,
    ) -> Result<Table>;
}
