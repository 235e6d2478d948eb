//! Registry of corporations that file with DART.
//!
//! OpenDART publishes the registry as a ZIP file (`corpCode.xml`) holding a
//! single `CORPCODE.xml`. The parsed records are cached in the data directory
//! as `Corplist.json`. A cache file written on an earlier calendar day is
//! discarded on the next load, so the registry refreshes at local midnight.

use async_trait::async_trait;
use chrono::{DateTime, Local, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::{Cursor, Read};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Instant;
use zip::ZipArchive;

use super::columns::CORPORATION;
use super::core::OpenDart;
use super::error::{OpenDartError, Result};
use super::parsing::xml::parse_rows;
use super::table::Table;
use super::traits::RegistryOperations;

/// Cache file name inside the data directory.
pub const REGISTRY_CACHE_FILE: &str = "Corplist.json";

const REGISTRY_PATH: &str = "corpCode.xml";
const REGISTRY_ENTRY: &str = "CORPCODE.xml";

/// Placeholder record the service ships for testing.
const TEST_CORP_CODE: &str = "99999999";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Corporation {
    /// 8-digit DART registry code
    pub corp_code: String,
    /// Formal name
    pub corp_name: String,
    /// 6-digit stock code, for listed corporations only
    pub stock_code: Option<String>,
    pub modify_date: NaiveDate,
}

/// The loaded registry. Replaced as a whole on reload, never patched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CorporationRegistry {
    loaded_on: NaiveDate,
    records: Vec<Corporation>,
}

impl CorporationRegistry {
    pub fn new(records: Vec<Corporation>, loaded_on: NaiveDate) -> Self {
        Self { loaded_on, records }
    }

    /// Parses the `<list>` rows of `CORPCODE.xml`.
    ///
    /// The test placeholder record is dropped. Rows without a valid
    /// `modify_date` are skipped with a warning.
    pub fn from_xml(xml: &[u8], loaded_on: NaiveDate) -> Result<Self> {
        let mut records = Vec::new();
        for row in parse_rows(xml, "list")? {
            let corp_code = row.get("corp_code").map(|s| s.trim()).unwrap_or_default();
            if corp_code.is_empty() || corp_code == TEST_CORP_CODE {
                continue;
            }

            let raw_date = row.get("modify_date").map(|s| s.trim()).unwrap_or_default();
            let modify_date = match NaiveDate::parse_from_str(raw_date, "%Y%m%d") {
                Ok(date) => date,
                Err(_) => {
                    tracing::warn!("skipping corporation {} with modify_date '{}'", corp_code, raw_date);
                    continue;
                }
            };

            let stock_code = row
                .get("stock_code")
                .map(|s| s.trim())
                .filter(|s| !s.is_empty())
                .map(str::to_string);

            records.push(Corporation {
                corp_code: corp_code.to_string(),
                corp_name: row.get("corp_name").map(|s| s.trim()).unwrap_or_default().to_string(),
                stock_code,
                modify_date,
            });
        }
        Ok(Self::new(records, loaded_on))
    }

    /// Calendar day this registry was loaded on.
    pub fn loaded_on(&self) -> NaiveDate {
        self.loaded_on
    }

    pub fn records(&self) -> &[Corporation] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Corporations whose formal name equals `name` (`exact`) or contains it.
    pub fn search_by_name(&self, name: &str, exact: bool) -> Vec<&Corporation> {
        self.records
            .iter()
            .filter(|c| {
                if exact {
                    c.corp_name == name
                } else {
                    c.corp_name.contains(name)
                }
            })
            .collect()
    }

    pub fn find_by_stock_code(&self, stock_code: &str) -> Option<&Corporation> {
        let stock_code = stock_code.trim();
        self.records
            .iter()
            .find(|c| c.stock_code.as_deref() == Some(stock_code))
    }

    pub fn to_table(&self, rename: bool) -> Table {
        corporations_table(self.records.iter(), rename)
    }

    fn read_cache(path: &Path, loaded_on: NaiveDate) -> Result<Self> {
        let content = fs::read(path)?;
        let records: Vec<Corporation> = serde_json::from_slice(&content)?;
        Ok(Self::new(records, loaded_on))
    }

    fn write_cache(&self, path: &Path) -> Result<()> {
        fs::write(path, serde_json::to_vec(&self.records)?)?;
        tracing::info!("serialized {} corporations to {}", self.records.len(), path.display());
        Ok(())
    }
}

fn corporations_table<'a>(records: impl Iterator<Item = &'a Corporation>, rename: bool) -> Table {
    let mut table = Table::empty(CORPORATION, rename);
    for corp in records {
        table.push_row(vec![
            corp.corp_code.clone(),
            corp.corp_name.clone(),
            corp.stock_code.clone().unwrap_or_default(),
            corp.modify_date.format("%Y-%m-%d").to_string(),
        ]);
    }
    table
}

/// True when the cache was written on an earlier calendar day than `today`.
pub fn is_stale(modified: DateTime<Local>, today: NaiveDate) -> bool {
    modified.date_naive() < today
}

fn registry_entry(archive: &mut ZipArchive<Cursor<Vec<u8>>>) -> Result<Option<Vec<u8>>> {
    let name = archive
        .file_names()
        .find(|n| n.eq_ignore_ascii_case(REGISTRY_ENTRY))
        .or_else(|| archive.file_names().find(|n| n.to_ascii_lowercase().ends_with(".xml")))
        .map(str::to_string);
    let Some(name) = name else {
        return Ok(None);
    };

    let mut entry = archive.by_name(&name)?;
    let mut bytes = Vec::with_capacity(entry.size() as usize);
    entry.read_to_end(&mut bytes)?;
    Ok(Some(bytes))
}

impl OpenDart {
    pub(crate) fn registry_cache_path(&self) -> PathBuf {
        self.data_dir.join(REGISTRY_CACHE_FILE)
    }

    /// Removes the cache file when `reload` is set or it is from an earlier day.
    fn prepare_registry_cache(&self, path: &Path, reload: bool, today: NaiveDate) -> Result<()> {
        if !path.is_file() {
            return Ok(());
        }
        let discard = reload || {
            let modified: DateTime<Local> = fs::metadata(path)?.modified()?.into();
            is_stale(modified, today)
        };
        if discard {
            fs::remove_file(path)?;
            tracing::info!("removed registry cache {}", path.display());
        }
        Ok(())
    }

    async fn fetch_registry(&self, today: NaiveDate) -> Result<CorporationRegistry> {
        let mut archive = match self.get_zip(REGISTRY_PATH, &[]).await {
            Ok(archive) => archive,
            Err(OpenDartError::Api { .. }) => {
                return Ok(CorporationRegistry::new(Vec::new(), today));
            }
            Err(e) => return Err(e),
        };

        let registry = match registry_entry(&mut archive)? {
            Some(xml) => CorporationRegistry::from_xml(&xml, today)?,
            None => {
                tracing::error!("{} not found in registry archive", REGISTRY_ENTRY);
                return Ok(CorporationRegistry::new(Vec::new(), today));
            }
        };
        registry.write_cache(&self.registry_cache_path())?;
        Ok(registry)
    }

    async fn load_registry(&self, reload: bool) -> Result<Arc<CorporationRegistry>> {
        let today = Local::now().date_naive();
        let mut slot = self.registry.lock().await;

        if !reload {
            if let Some(registry) = slot.as_ref().filter(|r| r.loaded_on == today) {
                return Ok(Arc::clone(registry));
            }
        }

        let started = Instant::now();
        tracing::info!("load corporation list");

        let path = self.registry_cache_path();
        self.prepare_registry_cache(&path, reload, today)?;

        let registry = if path.is_file() {
            match CorporationRegistry::read_cache(&path, today) {
                Ok(registry) => registry,
                Err(e) => {
                    tracing::warn!("unreadable registry cache ({}), fetching again", e);
                    self.fetch_registry(today).await?
                }
            }
        } else {
            self.fetch_registry(today).await?
        };

        tracing::info!(
            "finished loading corporation list ({} records, elapsed: {}ms)",
            registry.len(),
            started.elapsed().as_millis()
        );

        let registry = Arc::new(registry);
        // An empty list means the fetch failed; leave the slot so the next call retries.
        if !registry.is_empty() {
            *slot = Some(Arc::clone(&registry));
        }
        Ok(registry)
    }
}

#[async_trait]
impl RegistryOperations for OpenDart {
    async fn corporations(&self, reload: bool) -> Result<Arc<CorporationRegistry>> {
        self.load_registry(reload).await
    }

    async fn corporation_table(&self, reload: bool) -> Result<Table> {
        Ok(self.load_registry(reload).await?.to_table(self.rename_columns))
    }

    async fn search_corporations(&self, name: &str, exact: bool) -> Result<Table> {
        let registry = self.load_registry(false).await?;
        let matches = registry.search_by_name(name, exact);
        tracing::info!("search corporation '{}' (exact: {}): {} match(es)", name, exact, matches.len());
        Ok(corporations_table(matches.into_iter(), self.rename_columns))
    }

    async fn find_corporation_by_stock_code(&self, stock_code: &str) -> Result<Option<Corporation>> {
        let registry = self.load_registry(false).await?;
        Ok(registry.find_by_stock_code(stock_code).cloned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    const XML: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<result>
    <list>
        <corp_code>00126380</corp_code>
        <corp_name>삼성전자</corp_name>
        <stock_code>005930</stock_code>
        <modify_date>20230110</modify_date>
    </list>
    <list>
        <corp_code>00126371</corp_code>
        <corp_name>삼성전자서비스</corp_name>
        <stock_code> </stock_code>
        <modify_date>20170630</modify_date>
    </list>
    <list>
        <corp_code>99999999</corp_code>
        <corp_name>테스트</corp_name>
        <stock_code> </stock_code>
        <modify_date>20200101</modify_date>
    </list>
    <list>
        <corp_code>00000001</corp_code>
        <corp_name>날짜없음</corp_name>
        <stock_code> </stock_code>
        <modify_date></modify_date>
    </list>
</result>"#;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 5, 2).unwrap()
    }

    #[test]
    fn test_from_xml() {
        let registry = CorporationRegistry::from_xml(XML.as_bytes(), today()).unwrap();
        assert_eq!(registry.len(), 2);
        assert_eq!(registry.records()[0].stock_code.as_deref(), Some("005930"));
        assert_eq!(registry.records()[1].stock_code, None);
        assert_eq!(
            registry.records()[1].modify_date,
            NaiveDate::from_ymd_opt(2017, 6, 30).unwrap()
        );
    }

    #[test]
    fn test_search_by_name() {
        let registry = CorporationRegistry::from_xml(XML.as_bytes(), today()).unwrap();

        let exact = registry.search_by_name("삼성전자", true);
        assert_eq!(exact.len(), 1);
        assert_eq!(exact[0].corp_code, "00126380");

        assert_eq!(registry.search_by_name("삼성전자", false).len(), 2);
        assert!(registry.search_by_name("삼성", true).is_empty());
    }

    #[test]
    fn test_find_by_stock_code() {
        let registry = CorporationRegistry::from_xml(XML.as_bytes(), today()).unwrap();
        assert_eq!(registry.find_by_stock_code("005930").unwrap().corp_name, "삼성전자");
        assert!(registry.find_by_stock_code("000000").is_none());
    }

    #[test]
    fn test_to_table() {
        let registry = CorporationRegistry::from_xml(XML.as_bytes(), today()).unwrap();
        let table = registry.to_table(true);
        assert_eq!(table.columns(), &["고유번호", "정식명칭", "종목코드", "최종변경일자"]);
        assert_eq!(table.get(0, "최종변경일자"), Some("2023-01-10"));
        assert_eq!(table.get(1, "종목코드"), Some(""));

        let empty = CorporationRegistry::new(Vec::new(), today()).to_table(false);
        assert_eq!(empty.columns(), &["corp_code", "corp_name", "stock_code", "modify_date"]);
    }

    #[test]
    fn test_staleness_compares_calendar_days() {
        let late_yesterday = Local.with_ymd_and_hms(2024, 5, 1, 23, 59, 0).unwrap();
        let early_today = Local.with_ymd_and_hms(2024, 5, 2, 0, 1, 0).unwrap();
        assert!(is_stale(late_yesterday, today()));
        assert!(!is_stale(early_today, today()));
    }
}
