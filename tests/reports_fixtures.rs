mod common;

use chrono::NaiveDate;
use common::{opendart, read_fixture};
use opendartkit::{
    DateRangeQuery, EquityDisclosure, EquityDisclosureOperations, FinancialDivision,
    FinancialOperations, FinancialStatement, MajorEvent, MajorEventOperations, PeriodicReport,
    PeriodicReportOperations, RegistrationStatement, RegistrationStatementOperations, ReportCode,
    ReportQuery,
};
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn no_data() -> ResponseTemplate {
    ResponseTemplate::new(200).set_body_string(read_fixture("disclosure/no-data.json"))
}

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

#[tokio::test]
async fn periodic_report_clamps_early_years() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/alotMatter.json"))
        .and(query_param("corp_code", "00126380"))
        .and(query_param("bsns_year", "2015"))
        .and(query_param("reprt_code", "11011"))
        .respond_with(
            ResponseTemplate::new(200).set_body_string(read_fixture("reports/dividend.json")),
        )
        .expect(1)
        .mount(&server)
        .await;

    let dart = opendart(&server.uri(), "periodic-clamp");
    let query = ReportQuery::new("00126380", 2009, ReportCode::Annual);
    let table = dart
        .periodic_report(PeriodicReport::DividendDetail, &query)
        .await
        .unwrap();

    assert_eq!(table.len(), 2);
    assert_eq!(table.get(1, "주식 종류"), Some("보통주"));
    assert_eq!(table.get(0, "주식 종류"), Some(""));
    // Fields without a display name are kept after the declared columns.
    assert_eq!(table.columns().last().map(String::as_str), Some("extra_note"));
}

#[tokio::test]
async fn struct_literal_query_still_clamps_year() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/alotMatter.json"))
        .and(query_param("bsns_year", "2015"))
        .respond_with(no_data())
        .expect(1)
        .mount(&server)
        .await;

    let dart = opendart(&server.uri(), "periodic-literal");
    let query = ReportQuery {
        corp_code: "00126380".to_string(),
        year: 2010,
        report_code: ReportCode::Annual,
    };
    let table = dart
        .periodic_report(PeriodicReport::DividendDetail, &query)
        .await
        .unwrap();
    assert!(table.is_empty());
}

#[tokio::test]
async fn error_table_matches_empty_result_shape() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/alotMatter.json"))
        .respond_with(no_data())
        .mount(&server)
        .await;

    let dart = opendart(&server.uri(), "periodic-error");
    let query = ReportQuery::new("00126380", 2023, ReportCode::HalfYear);
    let table = dart
        .periodic_report(PeriodicReport::DividendDetail, &query)
        .await
        .unwrap();

    assert!(table.is_empty());
    assert_eq!(
        table.columns(),
        [
            "접수번호",
            "법인구분",
            "고유번호",
            "회사명",
            "구분",
            "주식 종류",
            "당기",
            "전기",
            "전전기",
            "결산기준일",
        ]
    );
}

#[tokio::test]
async fn multi_company_query_joins_codes() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/fnlttMultiAcnt.json"))
        .and(query_param("corp_code", "00126380,00164779"))
        .respond_with(no_data())
        .expect(1)
        .mount(&server)
        .await;

    let dart = opendart(&server.uri(), "financial-multi");
    let query = ReportQuery::multi(["00126380", "00164779"], 2023, ReportCode::Annual);
    let table = dart
        .financial_statement(FinancialStatement::MultiAccount, &query)
        .await
        .unwrap();
    assert!(table.is_empty());
}

#[tokio::test]
async fn entire_statements_send_division() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/fnlttSinglAcntAll.json"))
        .and(query_param("fs_div", "OFS"))
        .respond_with(no_data())
        .expect(1)
        .mount(&server)
        .await;

    let dart = opendart(&server.uri(), "financial-entire");
    let query = ReportQuery::new("00126380", 2023, ReportCode::Annual);
    dart.financial_statement(
        FinancialStatement::EntireStatements(FinancialDivision::Separate),
        &query,
    )
    .await
    .unwrap();
}

#[tokio::test]
async fn xbrl_taxonomy_sends_statement_division() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/xbrlTaxonomy.json"))
        .and(query_param("sj_div", "BS1"))
        .respond_with(no_data())
        .expect(1)
        .mount(&server)
        .await;

    let dart = opendart(&server.uri(), "taxonomy");
    assert!(dart.xbrl_taxonomy("BS1").await.unwrap().is_empty());
}

#[tokio::test]
async fn equity_disclosure_uses_corp_code_only() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/elestock.json"))
        .and(query_param("corp_code", "00126380"))
        .respond_with(no_data())
        .expect(1)
        .mount(&server)
        .await;

    let dart = opendart(&server.uri(), "equity");
    dart.equity_disclosure(EquityDisclosure::ExecutiveStock, "00126380")
        .await
        .unwrap();
}

#[tokio::test]
async fn major_event_sends_date_window() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/cvbdIsDecsn.json"))
        .and(query_param("bgn_de", "20240101"))
        .and(query_param("end_de", "20240331"))
        .respond_with(no_data())
        .expect(1)
        .mount(&server)
        .await;

    let dart = opendart(&server.uri(), "major-event");
    let query = DateRangeQuery::new("00126380", date(2024, 1, 1), date(2024, 3, 31));
    let table = dart
        .major_event(MajorEvent::ConvertibleBonds, &query)
        .await
        .unwrap();
    assert!(table.is_empty());
    assert_eq!(table.columns()[0], "접수번호");
}

#[tokio::test]
async fn registration_statement_returns_every_group() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/mgRs.json"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string(read_fixture("reports/merger-registration.json")),
        )
        .mount(&server)
        .await;

    let dart = opendart(&server.uri(), "registration");
    let query = DateRangeQuery::new("00412851", date(2019, 1, 1), date(2019, 12, 31));
    let groups = dart
        .registration_statement(RegistrationStatement::Merger, &query)
        .await
        .unwrap();

    let titles: Vec<&str> = groups.iter().map(|g| g.title.as_str()).collect();
    assert_eq!(titles, ["일반사항", "발행증권", "당사회사에관한사항"]);
    assert_eq!(groups[0].table.len(), 1);
    assert_eq!(groups[1].table.get(0, "접수번호"), Some("20190611000256"));
    assert!(groups[2].table.is_empty());
}

#[tokio::test]
async fn registration_statement_error_keeps_groups() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/estkRs.json"))
        .respond_with(no_data())
        .mount(&server)
        .await;

    let dart = opendart(&server.uri(), "registration-error");
    let query = DateRangeQuery::new("00126380", date(2024, 1, 1), date(2024, 3, 31));
    let groups = dart
        .registration_statement(RegistrationStatement::EquitySecurities, &query)
        .await
        .unwrap();
    assert_eq!(groups.len(), 6);
    assert!(groups.iter().all(|g| g.table.is_empty()));
}
