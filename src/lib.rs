//! # OpenDartKit - A Rust client for the OpenDART disclosure API
//!
//! OpenDartKit wraps the Korean Financial Supervisory Service's OpenDART
//! API and the DART website. JSON results come back as [`Table`]s whose
//! columns keep the service's field names or use their Korean labels.
//!
//! ## Features
//!
//! - **Rate-limited HTTP client** - one shared client with a request quota
//! - **Corporation registry** - the `corpCode.xml` list, cached for the day
//! - **Disclosure search** - all result pages merged into one table
//! - **Report endpoints** - periodic reports, financial statements, equity
//!   disclosures, major events and registration statements
//! - **Documents** - raw XML repaired to UTF-8, viewer HTML, XBRL packages
//! - **Daily list** - disclosures submitted on a date (feature `daily`)
//!
//! ## Basic Usage
//!
//! ```ignore
//! use opendartkit::{OpenDart, PeriodicReport, PeriodicReportOperations, ReportCode, ReportQuery};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let dart = OpenDart::new("your-api-key")?;
//!
//!     let query = ReportQuery::new("00126380", 2023, ReportCode::Annual);
//!     let dividends = dart
//!         .periodic_report(PeriodicReport::DividendDetail, &query)
//!         .await?;
//!
//!     for row in dividends.iter() {
//!         println!("{:?}", row);
//!     }
//!
//!     Ok(())
//! }
//! ```

pub mod columns;
mod config;
mod core;
#[cfg(feature = "daily")]
mod daily;
mod disclosure;
mod documents;
mod endpoints;
mod error;
pub mod logging;
mod observer;
mod options;
pub mod parsing;
mod registry;
mod table;
mod traits;

pub use config::{OpenDartConfig, OpenDartUrls, Replacement, Settings};
pub use core::OpenDart;
pub use endpoints::{
    Endpoint, EquityDisclosure, FinancialStatement, GroupedEndpoint, MajorEvent, PeriodicReport,
    RegistrationStatement, TableGroup,
};
pub use error::{OpenDartError, Result};
pub use logging::{LogOptions, init_logging};
pub use observer::{DartObserver, NoopObserver};
#[cfg(feature = "daily")]
pub use options::CorpClassFilter;
pub use options::{
    DateRangeQuery, FinancialDivision, MAX_PAGE_COUNT, MIN_BUSINESS_YEAR, ReportCode, ReportQuery,
    SearchOptions,
};
pub use registry::{Corporation, CorporationRegistry, REGISTRY_CACHE_FILE, is_stale};
pub use table::{ColumnMap, Table};

#[cfg(feature = "daily")]
pub use traits::DailyListOperations;
pub use traits::{
    DisclosureOperations, DocumentOperations, EquityDisclosureOperations, FinancialOperations,
    MajorEventOperations, PeriodicReportOperations, RegistrationStatementOperations,
    RegistryOperations,
};

/// Current crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
