//! Catalog of the OpenDART table endpoints and the executor shared by all of them.
//!
//! Each endpoint family is an enum. A variant resolves to a static entry
//! holding the endpoint path and its column map (or, for registration
//! statements, the titled groups of the response), so one generic executor
//! serves every endpoint.

use async_trait::async_trait;
use serde_json::{Map, Value};

use super::columns::*;
use super::core::OpenDart;
use super::error::{OpenDartError, Result};
use super::options::{DateRangeQuery, FinancialDivision, ReportQuery};
use super::table::{ColumnMap, Table};
use super::traits::{
    EquityDisclosureOperations, FinancialOperations, MajorEventOperations,
    PeriodicReportOperations, RegistrationStatementOperations,
};

/// A JSON endpoint answering with a flat `list`.
#[derive(Debug, Clone, Copy)]
pub struct Endpoint {
    pub path: &'static str,
    pub columns: &'static ColumnMap,
}

/// A JSON endpoint answering with titled `group` sections.
#[derive(Debug, Clone, Copy)]
pub struct GroupedEndpoint {
    pub path: &'static str,
    pub groups: &'static [(&'static str, &'static ColumnMap)],
}

/// One titled section of a grouped response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableGroup {
    pub title: String,
    pub table: Table,
}

const fn endpoint(path: &'static str, columns: &'static ColumnMap) -> Endpoint {
    Endpoint { path, columns }
}

/// Business report sections (사업보고서 주요정보).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PeriodicReport {
    ContingentCapitalBalance,
    UnregisteredExecutiveRemuneration,
    CorporateBondBalance,
    ShortTermBondBalance,
    CommercialPaperBalance,
    DebtSecuritiesIssuance,
    PrivatePlacementFundUsage,
    PublicOfferingFundUsage,
    DirectorRemunerationApproved,
    DirectorRemunerationByType,
    TotalStockQuantity,
    AuditorOpinion,
    AuditServiceContracts,
    NonAuditServiceContracts,
    OutsideDirectors,
    HybridSecuritiesBalance,
    CapitalChanges,
    DividendDetail,
    TreasuryStock,
    MajorityShareholders,
    MajorityShareholderChanges,
    MinorityShareholders,
    Executives,
    Employees,
    IndividualDirectorRemuneration,
    EntireDirectorRemuneration,
    TopFiveRemuneration,
    OtherCorporationInvestments,
}

impl PeriodicReport {
    pub const ALL: [PeriodicReport; 28] = [
        Self::ContingentCapitalBalance,
        Self::UnregisteredExecutiveRemuneration,
        Self::CorporateBondBalance,
        Self::ShortTermBondBalance,
        Self::CommercialPaperBalance,
        Self::DebtSecuritiesIssuance,
        Self::PrivatePlacementFundUsage,
        Self::PublicOfferingFundUsage,
        Self::DirectorRemunerationApproved,
        Self::DirectorRemunerationByType,
        Self::TotalStockQuantity,
        Self::AuditorOpinion,
        Self::AuditServiceContracts,
        Self::NonAuditServiceContracts,
        Self::OutsideDirectors,
        Self::HybridSecuritiesBalance,
        Self::CapitalChanges,
        Self::DividendDetail,
        Self::TreasuryStock,
        Self::MajorityShareholders,
        Self::MajorityShareholderChanges,
        Self::MinorityShareholders,
        Self::Executives,
        Self::Employees,
        Self::IndividualDirectorRemuneration,
        Self::EntireDirectorRemuneration,
        Self::TopFiveRemuneration,
        Self::OtherCorporationInvestments,
    ];

    pub fn endpoint(&self) -> Endpoint {
        match self {
            Self::ContingentCapitalBalance => endpoint("cndlCaplScritsNrdmpBlce.json", OUTSTANDING_BALANCE),
            Self::UnregisteredExecutiveRemuneration => endpoint("unrstExctvMendngSttus.json", REMUNERATION),
            Self::CorporateBondBalance => endpoint("cprndNrdmpBlce.json", OUTSTANDING_BALANCE),
            Self::ShortTermBondBalance => endpoint("srtpdPsndbtNrdmpBlce.json", OUTSTANDING_BALANCE),
            Self::CommercialPaperBalance => endpoint("entrprsBilScritsNrdmpBlce.json", OUTSTANDING_BALANCE),
            Self::DebtSecuritiesIssuance => endpoint("detScritsIsuAcmslt.json", DEBT_SECURITIES),
            Self::PrivatePlacementFundUsage => endpoint("prvsrpCptalUseDtls.json", CAPITAL_USAGE_DETAIL),
            Self::PublicOfferingFundUsage => endpoint("pssrpCptalUseDtls.json", CAPITAL_USAGE_DETAIL),
            Self::DirectorRemunerationApproved => {
                endpoint("drctrAdtAllMendngSttusGmtsckConfmAmount.json", REMUNERATION)
            }
            Self::DirectorRemunerationByType => {
                endpoint("drctrAdtAllMendngSttusMendngPymntamtTyCl.json", REMUNERATION)
            }
            Self::TotalStockQuantity => endpoint("stockTotqySttus.json", STOCK_QUANTITY),
            Self::AuditorOpinion => endpoint("accnutAdtorNmNdAdtOpinion.json", AUDIT_OPINION),
            Self::AuditServiceContracts => endpoint("adtServcCnclsSttus.json", AUDIT_SERVICE_CONTRACT),
            Self::NonAuditServiceContracts => {
                endpoint("accnutAdtorNonAdtServcCnclsSttus.json", NON_AUDIT_SERVICE_CONTRACT)
            }
            Self::OutsideDirectors => endpoint("outcmpnyDrctrNdChangeSttus.json", OUTSIDE_DIRECTOR),
            Self::HybridSecuritiesBalance => endpoint("newCaplScritsNrdmpBlce.json", OUTSTANDING_BALANCE),
            Self::CapitalChanges => endpoint("irdsSttus.json", CAPITAL_CHANGE),
            Self::DividendDetail => endpoint("alotMatter.json", DIVIDEND_DETAIL),
            Self::TreasuryStock => endpoint("tesstkAcqsDspsSttus.json", TREASURY_STOCK),
            Self::MajorityShareholders => endpoint("hyslrSttus.json", MAJORITY_SHAREHOLDER),
            Self::MajorityShareholderChanges => endpoint("hyslrChgSttus.json", MAJORITY_SHAREHOLDER_CHANGE),
            Self::MinorityShareholders => endpoint("mrhlSttus.json", MINORITY_SHAREHOLDER),
            Self::Executives => endpoint("exctvSttus.json", EXECUTIVES_STATUS),
            Self::Employees => endpoint("empSttus.json", EMPLOYEE_STATUS),
            Self::IndividualDirectorRemuneration => endpoint("hmvAuditIndvdlBySttus.json", INDIVIDUAL_REMUNERATION),
            Self::EntireDirectorRemuneration => endpoint("hmvAuditAllSttus.json", ENTIRE_REMUNERATION),
            Self::TopFiveRemuneration => endpoint("indvdlByPay.json", INDIVIDUAL_REMUNERATION),
            Self::OtherCorporationInvestments => endpoint("otrCprInvstmntSttus.json", OTHER_CORP_INVESTMENT),
        }
    }
}

/// Financial statement endpoints (상장기업 재무정보).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FinancialStatement {
    /// Key accounts of one company
    SingleAccount,
    /// Key accounts of several companies; use [`ReportQuery::multi`]
    MultiAccount,
    /// Every account of the full statements
    EntireStatements(FinancialDivision),
}

impl FinancialStatement {
    pub fn endpoint(&self) -> Endpoint {
        match self {
            Self::SingleAccount => endpoint("fnlttSinglAcnt.json", FINANCIAL),
            Self::MultiAccount => endpoint("fnlttMultiAcnt.json", FINANCIAL),
            Self::EntireStatements(_) => endpoint("fnlttSinglAcntAll.json", ENTIRE_FINANCIAL_STATEMENTS),
        }
    }

    fn extra_params(&self) -> Vec<(String, String)> {
        match self {
            Self::EntireStatements(division) => {
                vec![("fs_div".to_string(), division.as_str().to_string())]
            }
            _ => Vec::new(),
        }
    }
}

pub(crate) const XBRL_TAXONOMY_ENDPOINT: Endpoint = endpoint("xbrlTaxonomy.json", XBRL_TAXONOMY);

/// Equity disclosure endpoints (지분공시 종합정보).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EquityDisclosure {
    /// Large holdings reports (대량보유 상황보고)
    MajorStock,
    /// Executive and major shareholder ownership reports
    ExecutiveStock,
}

impl EquityDisclosure {
    pub fn endpoint(&self) -> Endpoint {
        match self {
            Self::MajorStock => endpoint("majorstock.json", MAJOR_STOCK),
            Self::ExecutiveStock => endpoint("elestock.json", EXECUTIVE_STOCK),
        }
    }
}

/// Major event reports (주요사항보고서 주요정보).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MajorEvent {
    Bankruptcy,
    BusinessSuspension,
    RehabilitationFiling,
    Dissolution,
    RightsIssue,
    BonusIssue,
    RightsBonusIssue,
    CapitalReduction,
    BankManagementInitiated,
    Litigation,
    OverseasListingDecision,
    OverseasDelistingDecision,
    OverseasListing,
    OverseasDelisting,
    ConvertibleBonds,
    BondsWithWarrants,
    ExchangeableBonds,
    BankManagementStopped,
    WriteDownContingentBonds,
    AssetTransferPutback,
    OtherCorpStockTransfer,
    TangibleAssetTransfer,
    TangibleAssetAcquisition,
    OtherCorpStockAcquisition,
    BusinessTransfer,
    BusinessAcquisition,
    TreasuryTrustTermination,
    TreasuryTrustConclusion,
    TreasuryStockDisposal,
    TreasuryStockAcquisition,
    StockExchangeTransfer,
    CompanyDivisionMerger,
    CompanyDivision,
    CompanyMerger,
    BondsAcquisition,
    BondsTransfer,
}

impl MajorEvent {
    pub const ALL: [MajorEvent; 36] = [
        Self::Bankruptcy,
        Self::BusinessSuspension,
        Self::RehabilitationFiling,
        Self::Dissolution,
        Self::RightsIssue,
        Self::BonusIssue,
        Self::RightsBonusIssue,
        Self::CapitalReduction,
        Self::BankManagementInitiated,
        Self::Litigation,
        Self::OverseasListingDecision,
        Self::OverseasDelistingDecision,
        Self::OverseasListing,
        Self::OverseasDelisting,
        Self::ConvertibleBonds,
        Self::BondsWithWarrants,
        Self::ExchangeableBonds,
        Self::BankManagementStopped,
        Self::WriteDownContingentBonds,
        Self::AssetTransferPutback,
        Self::OtherCorpStockTransfer,
        Self::TangibleAssetTransfer,
        Self::TangibleAssetAcquisition,
        Self::OtherCorpStockAcquisition,
        Self::BusinessTransfer,
        Self::BusinessAcquisition,
        Self::TreasuryTrustTermination,
        Self::TreasuryTrustConclusion,
        Self::TreasuryStockDisposal,
        Self::TreasuryStockAcquisition,
        Self::StockExchangeTransfer,
        Self::CompanyDivisionMerger,
        Self::CompanyDivision,
        Self::CompanyMerger,
        Self::BondsAcquisition,
        Self::BondsTransfer,
    ];

    pub fn endpoint(&self) -> Endpoint {
        match self {
            Self::Bankruptcy => endpoint("dfOcr.json", BANKRUPTCY),
            Self::BusinessSuspension => endpoint("bsnSp.json", BUSINESS_SUSPENSION),
            Self::RehabilitationFiling => endpoint("ctrcvsBgrq.json", REHABILITATION),
            Self::Dissolution => endpoint("dsRsOcr.json", DISSOLUTION),
            Self::RightsIssue => endpoint("piicDecsn.json", RIGHTS_ISSUE),
            Self::BonusIssue => endpoint("fricDecsn.json", BONUS_ISSUE),
            Self::RightsBonusIssue => endpoint("pifricDecsn.json", RIGHTS_BONUS_ISSUE),
            Self::CapitalReduction => endpoint("crDecsn.json", CAPITAL_REDUCTION),
            Self::BankManagementInitiated => endpoint("bnkMngtPcbg.json", BANK_MANAGEMENT_INITIATE),
            Self::Litigation => endpoint("lwstLg.json", LITIGATION),
            Self::OverseasListingDecision => endpoint("ovLstDecsn.json", OVERSEAS_LISTING_DECISION),
            Self::OverseasDelistingDecision => endpoint("ovDlstDecsn.json", OVERSEAS_DELISTING_DECISION),
            Self::OverseasListing => endpoint("ovLst.json", OVERSEAS_LISTING),
            Self::OverseasDelisting => endpoint("ovDlst.json", OVERSEAS_DELISTING),
            Self::ConvertibleBonds => endpoint("cvbdIsDecsn.json", CONVERTIBLE_BONDS),
            Self::BondsWithWarrants => endpoint("bdwtIsDecsn.json", BOND_WITH_WARRANT),
            Self::ExchangeableBonds => endpoint("exbdIsDecsn.json", EXCHANGEABLE_BONDS),
            Self::BankManagementStopped => endpoint("bnkMngtPcsp.json", BANK_MANAGEMENT_STOP),
            Self::WriteDownContingentBonds => endpoint("wdCocobdIsDecsn.json", WRITE_DOWN_CONTINGENT_BONDS),
            Self::AssetTransferPutback => endpoint("astInhtrfEtcPtbkOpt.json", ASSET_TRANSFER_PUTBACK),
            Self::OtherCorpStockTransfer => endpoint("otcprStkInvscrTrfDecsn.json", OTHER_CORP_STOCK_TRANSFER),
            Self::TangibleAssetTransfer => endpoint("tgastTrfDecsn.json", TANGIBLE_ASSET_TRANSFER),
            Self::TangibleAssetAcquisition => endpoint("tgastInhDecsn.json", TANGIBLE_ASSET_ACQUISITION),
            Self::OtherCorpStockAcquisition => {
                endpoint("otcprStkInvscrInhDecsn.json", OTHER_CORP_STOCK_ACQUISITION)
            }
            Self::BusinessTransfer => endpoint("bsnTrfDecsn.json", BUSINESS_TRANSFER),
            Self::BusinessAcquisition => endpoint("bsnInhDecsn.json", BUSINESS_ACQUISITION),
            Self::TreasuryTrustTermination => endpoint("tsstkAqTrctrCcDecsn.json", TREASURY_TRUST_TERMINATION),
            Self::TreasuryTrustConclusion => endpoint("tsstkAqTrctrCnsDecsn.json", TREASURY_TRUST_CONCLUSION),
            Self::TreasuryStockDisposal => endpoint("tsstkDpDecsn.json", TREASURY_STOCK_DISPOSAL),
            Self::TreasuryStockAcquisition => endpoint("tsstkAqDecsn.json", TREASURY_STOCK_ACQUISITION),
            Self::StockExchangeTransfer => endpoint("stkExtrDecsn.json", STOCK_EXCHANGE_TRANSFER),
            Self::CompanyDivisionMerger => endpoint("cmpDvmgDecsn.json", COMPANY_DIVISION_MERGE),
            Self::CompanyDivision => endpoint("cmpDvDecsn.json", COMPANY_DIVISION),
            Self::CompanyMerger => endpoint("cmpMgDecsn.json", COMPANY_MERGE),
            Self::BondsAcquisition => endpoint("stkrtbdInhDecsn.json", BONDS_ACQUISITION),
            Self::BondsTransfer => endpoint("stkrtbdTrfDecsn.json", BONDS_TRANSFER),
        }
    }
}

const RESTRUCTURING_GROUPS: &[(&str, &ColumnMap)] = &[
    ("일반사항", DECLARATION_GENERAL),
    ("발행증권", DECLARATION_SECURITIES),
    ("당사회사에관한사항", DECLARATION_PARTIES),
];

const DEPOSITARY_RECEIPT_GROUPS: &[(&str, &ColumnMap)] = &[
    ("일반사항", DECLARATION_GENERAL),
    ("증권의종류", DECLARATION_SECURITY_TYPE),
    ("인수인정보", DECLARATION_UNDERWRITERS),
    ("자금의사용목적", DECLARATION_FUND_PURPOSE),
    ("매출인에관한사항", DECLARATION_SELLERS),
];

const DEBT_SECURITIES_GROUPS: &[(&str, &ColumnMap)] = &[
    ("일반사항", DECLARATION_GENERAL),
    ("인수인정보", DECLARATION_UNDERWRITERS),
    ("자금의사용목적", DECLARATION_FUND_PURPOSE),
    ("매출인에관한사항", DECLARATION_SELLERS),
];

const EQUITY_SECURITIES_GROUPS: &[(&str, &ColumnMap)] = &[
    ("일반사항", DECLARATION_GENERAL),
    ("증권의종류", DECLARATION_SECURITY_TYPE),
    ("인수인정보", DECLARATION_UNDERWRITERS),
    ("자금의사용목적", DECLARATION_FUND_PURPOSE),
    ("매출인에관한사항", DECLARATION_SELLERS),
    ("일반청약자환매청구권", DECLARATION_PUTBACK),
];

/// Securities registration statements (증권신고서 주요정보).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RegistrationStatement {
    StockExchange,
    Merger,
    DepositaryReceipt,
    DebtSecurities,
    EquitySecurities,
    Division,
}

impl RegistrationStatement {
    pub fn endpoint(&self) -> GroupedEndpoint {
        let (path, groups) = match self {
            Self::StockExchange => ("extrRs.json", RESTRUCTURING_GROUPS),
            Self::Merger => ("mgRs.json", RESTRUCTURING_GROUPS),
            Self::DepositaryReceipt => ("stkdpRs.json", DEPOSITARY_RECEIPT_GROUPS),
            Self::DebtSecurities => ("bdRs.json", DEBT_SECURITIES_GROUPS),
            Self::EquitySecurities => ("estkRs.json", EQUITY_SECURITIES_GROUPS),
            Self::Division => ("dvRs.json", RESTRUCTURING_GROUPS),
        };
        GroupedEndpoint { path, groups }
    }
}

/// Object items of an array value; anything else is skipped.
pub(crate) fn records(value: Option<&Value>) -> Vec<Map<String, Value>> {
    match value {
        Some(Value::Array(items)) => items
            .iter()
            .filter_map(|item| item.as_object().cloned())
            .collect(),
        _ => Vec::new(),
    }
}

/// Shapes every group of a response, in declared order.
pub(crate) fn group_tables(
    body: &Map<String, Value>,
    groups: &[(&'static str, &'static ColumnMap)],
    rename: bool,
) -> Vec<TableGroup> {
    let sections = records(body.get("group"));
    groups
        .iter()
        .map(|(title, columns)| {
            let section = sections
                .iter()
                .find(|s| s.get("title").and_then(Value::as_str) == Some(*title));
            let table = match section {
                Some(section) => Table::from_records(&records(section.get("list")), columns, rename),
                None => {
                    tracing::warn!("group '{}' missing from response", title);
                    Table::empty(columns, rename)
                }
            };
            TableGroup {
                title: title.to_string(),
                table,
            }
        })
        .collect()
}

impl OpenDart {
    /// Calls a `list` endpoint. A status error from the service becomes an
    /// empty table with the endpoint's columns.
    pub(crate) async fn fetch_table(
        &self,
        endpoint: Endpoint,
        params: &[(String, String)],
    ) -> Result<Table> {
        match self.get_json(endpoint.path, params).await {
            Ok(body) => Ok(Table::from_records(
                &records(body.get("list")),
                endpoint.columns,
                self.rename_columns,
            )),
            Err(OpenDartError::Api { .. }) => Ok(Table::empty(endpoint.columns, self.rename_columns)),
            Err(e) => Err(e),
        }
    }

    /// Calls a `group` endpoint; same error handling as [`Self::fetch_table`].
    pub(crate) async fn fetch_groups(
        &self,
        endpoint: GroupedEndpoint,
        params: &[(String, String)],
    ) -> Result<Vec<TableGroup>> {
        match self.get_json(endpoint.path, params).await {
            Ok(body) => Ok(group_tables(&body, endpoint.groups, self.rename_columns)),
            Err(OpenDartError::Api { .. }) => Ok(endpoint
                .groups
                .iter()
                .map(|(title, columns)| TableGroup {
                    title: title.to_string(),
                    table: Table::empty(columns, self.rename_columns),
                })
                .collect()),
            Err(e) => Err(e),
        }
    }
}

#[async_trait]
impl PeriodicReportOperations for OpenDart {
    async fn periodic_report(&self, report: PeriodicReport, query: &ReportQuery) -> Result<Table> {
        tracing::info!(
            "get {:?} (corp code: {}, year: {}, report code: {})",
            report,
            query.corp_code,
            query.year,
            query.report_code
        );
        self.fetch_table(report.endpoint(), &query.to_query_params()).await
    }
}

#[async_trait]
impl FinancialOperations for OpenDart {
    async fn financial_statement(
        &self,
        statement: FinancialStatement,
        query: &ReportQuery,
    ) -> Result<Table> {
        tracing::info!(
            "get {:?} (corp code: {}, year: {}, report code: {})",
            statement,
            query.corp_code,
            query.year,
            query.report_code
        );
        let mut params = query.to_query_params();
        params.extend(statement.extra_params());
        self.fetch_table(statement.endpoint(), &params).await
    }

    async fn xbrl_taxonomy(&self, statement_division: &str) -> Result<Table> {
        let division = statement_division.trim();
        tracing::info!("get xbrl taxonomy (div: {})", division);
        let params = vec![("sj_div".to_string(), division.to_string())];
        self.fetch_table(XBRL_TAXONOMY_ENDPOINT, &params).await
    }
}

#[async_trait]
impl EquityDisclosureOperations for OpenDart {
    async fn equity_disclosure(&self, disclosure: EquityDisclosure, corp_code: &str) -> Result<Table> {
        let corp_code = corp_code.trim();
        tracing::info!("get {:?} (corp code: {})", disclosure, corp_code);
        let params = vec![("corp_code".to_string(), corp_code.to_string())];
        self.fetch_table(disclosure.endpoint(), &params).await
    }
}

#[async_trait]
impl MajorEventOperations for OpenDart {
    async fn major_event(&self, event: MajorEvent, query: &DateRangeQuery) -> Result<Table> {
        tracing::info!(
            "get {:?} (corp code: {}, {} ~ {})",
            event,
            query.corp_code,
            query.begin,
            query.end
        );
        self.fetch_table(event.endpoint(), &query.to_query_params()).await
    }
}

#[async_trait]
impl RegistrationStatementOperations for OpenDart {
    async fn registration_statement(
        &self,
        statement: RegistrationStatement,
        query: &DateRangeQuery,
    ) -> Result<Vec<TableGroup>> {
        tracing::info!(
            "get {:?} registration statement (corp code: {}, {} ~ {})",
            statement,
            query.corp_code,
            query.begin,
            query.end
        );
        self.fetch_groups(statement.endpoint(), &query.to_query_params()).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_endpoint_paths_are_unique() {
        let mut paths: HashSet<&str> = HashSet::new();
        for report in PeriodicReport::ALL {
            assert!(paths.insert(report.endpoint().path), "{:?}", report);
        }
        for event in MajorEvent::ALL {
            assert!(paths.insert(event.endpoint().path), "{:?}", event);
        }
        assert_eq!(paths.len(), 64);
    }

    fn all_column_maps() -> Vec<&'static ColumnMap> {
        let mut maps: Vec<&'static ColumnMap> = vec![
            CORPORATION,
            SEARCH_DOCUMENT,
            COMPANY,
            DAILY_DOCUMENT,
            XBRL_TAXONOMY,
        ];
        maps.extend(PeriodicReport::ALL.iter().map(|r| r.endpoint().columns));
        maps.extend(MajorEvent::ALL.iter().map(|e| e.endpoint().columns));
        maps.extend(
            [
                FinancialStatement::SingleAccount,
                FinancialStatement::MultiAccount,
                FinancialStatement::EntireStatements(FinancialDivision::Consolidated),
            ]
            .iter()
            .map(|s| s.endpoint().columns),
        );
        maps.extend(
            [EquityDisclosure::MajorStock, EquityDisclosure::ExecutiveStock]
                .iter()
                .map(|d| d.endpoint().columns),
        );
        for statement in [
            RegistrationStatement::StockExchange,
            RegistrationStatement::Merger,
            RegistrationStatement::DepositaryReceipt,
            RegistrationStatement::DebtSecurities,
            RegistrationStatement::EquitySecurities,
            RegistrationStatement::Division,
        ] {
            maps.extend(statement.endpoint().groups.iter().map(|(_, columns)| *columns));
        }
        maps
    }

    #[test]
    fn test_column_names_are_distinct_within_each_map() {
        for map in all_column_maps() {
            let keys: HashSet<&str> = map.iter().map(|(key, _)| *key).collect();
            assert_eq!(keys.len(), map.len(), "{:?}", map[0]);
            let displays: HashSet<&str> = map.iter().map(|(_, display)| *display).collect();
            assert_eq!(displays.len(), map.len(), "{:?}", map);
        }
    }

    #[test]
    fn test_appending_bond_tables_keeps_both_kind_columns() {
        let rows: Vec<Map<String, Value>> = serde_json::from_str(
            r#"[{"rcept_no": "20210101000001", "stkrtbd_kndn": "전환사채권", "knd": "무기명식"}]"#,
        )
        .unwrap();
        let mut merged = Table::empty(BONDS_ACQUISITION, true);
        merged.append(Table::from_records(&rows, BONDS_ACQUISITION, true));

        assert_eq!(merged.get(0, "주권 관련 사채권의 종류"), Some("전환사채권"));
        assert_eq!(merged.get(0, "사채권 종류"), Some("무기명식"));
    }

    #[test]
    fn test_entire_statements_send_division() {
        let statement = FinancialStatement::EntireStatements(FinancialDivision::Separate);
        assert_eq!(statement.endpoint().path, "fnlttSinglAcntAll.json");
        assert_eq!(
            statement.extra_params(),
            vec![("fs_div".to_string(), "OFS".to_string())]
        );
        assert!(FinancialStatement::SingleAccount.extra_params().is_empty());
    }

    #[test]
    fn test_group_tables_selects_by_title() {
        let body: Map<String, Value> = serde_json::from_str(
            r#"{
                "status": "000",
                "message": "정상",
                "group": [
                    {"title": "발행증권", "list": [{"rcept_no": "20210101000001", "kndn": "보통주", "cnt": "100"}]},
                    {"title": "일반사항", "list": [{"rcept_no": "20210101000001", "stn": "흡수합병"}]}
                ]
            }"#,
        )
        .unwrap();

        let groups = group_tables(&body, RegistrationStatement::Merger.endpoint().groups, false);
        assert_eq!(groups.len(), 3);
        assert_eq!(groups[0].title, "일반사항");
        assert_eq!(groups[0].table.get(0, "stn"), Some("흡수합병"));
        assert_eq!(groups[1].table.get(0, "cnt"), Some("100"));

        // Missing group: empty but shaped.
        assert_eq!(groups[2].title, "당사회사에관한사항");
        assert_eq!(groups[2].table, Table::empty(DECLARATION_PARTIES, false));
    }

    #[test]
    fn test_equity_securities_has_putback_group() {
        let groups = RegistrationStatement::EquitySecurities.endpoint().groups;
        assert_eq!(groups.len(), 6);
        assert_eq!(groups[5].0, "일반청약자환매청구권");
        assert_eq!(RegistrationStatement::DebtSecurities.endpoint().groups.len(), 4);
    }
}
