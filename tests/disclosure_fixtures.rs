mod common;

use chrono::NaiveDate;
use common::{opendart, read_fixture};
use opendartkit::{DisclosureOperations, SearchOptions};
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn options() -> SearchOptions {
    SearchOptions::new()
        .with_corp_code("00126380")
        .with_date_range(
            NaiveDate::from_ymd_opt(2022, 1, 1).unwrap(),
            NaiveDate::from_ymd_opt(2023, 12, 31).unwrap(),
        )
        .with_page_count(2)
}

async fn mount_page(server: &MockServer, page: u32, body: String) {
    Mock::given(method("GET"))
        .and(path("/api/list.json"))
        .and(query_param("page_no", page.to_string()))
        .respond_with(ResponseTemplate::new(200).set_body_string(body))
        .expect(1)
        .mount(server)
        .await;
}

#[tokio::test]
async fn search_documents_merges_every_page() {
    let server = MockServer::start().await;
    mount_page(&server, 1, read_fixture("disclosure/list-page-1.json")).await;
    mount_page(&server, 2, read_fixture("disclosure/list-page-2.json")).await;
    mount_page(&server, 3, read_fixture("disclosure/list-page-3.json")).await;

    let dart = opendart(&server.uri(), "search-pages");
    let table = dart.search_documents(options()).await.unwrap();

    assert_eq!(table.len(), 5);
    assert_eq!(
        table.column("접수번호").unwrap(),
        vec![
            "20231114000288",
            "20230814001854",
            "20230515001524",
            "20230307000542",
            "20221114000376",
        ]
    );
    assert_eq!(table.get(3, "비고"), Some("연"));
}

#[tokio::test]
async fn search_documents_starts_from_requested_page() {
    let server = MockServer::start().await;
    mount_page(&server, 2, read_fixture("disclosure/list-page-2.json")).await;
    mount_page(&server, 3, read_fixture("disclosure/list-page-3.json")).await;

    let dart = opendart(&server.uri(), "search-offset");
    let table = dart
        .search_documents(options().with_page_no(2))
        .await
        .unwrap();
    assert_eq!(table.len(), 3);
}

#[tokio::test]
async fn search_documents_sends_filters() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/list.json"))
        .and(query_param("corp_code", "00126380"))
        .and(query_param("bgn_de", "20220101"))
        .and(query_param("end_de", "20231231"))
        .and(query_param("last_reprt_at", "Y"))
        .and(query_param("pblntf_ty", "A"))
        .and(query_param("page_count", "2"))
        .respond_with(
            ResponseTemplate::new(200).set_body_string(read_fixture("disclosure/no-data.json")),
        )
        .expect(1)
        .mount(&server)
        .await;

    let dart = opendart(&server.uri(), "search-filters");
    let table = dart
        .search_documents(options().with_disclosure_type("A"))
        .await
        .unwrap();
    assert!(table.is_empty());
}

#[tokio::test]
async fn search_error_has_same_shape_as_empty_result() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/list.json"))
        .respond_with(
            ResponseTemplate::new(200).set_body_string(read_fixture("disclosure/no-data.json")),
        )
        .mount(&server)
        .await;

    let dart = opendart(&server.uri(), "search-error");
    let table = dart.search_documents(options()).await.unwrap();
    assert!(table.is_empty());
    assert_eq!(table.columns()[0], "법인구분");
    assert_eq!(table.columns().len(), 9);
}

#[tokio::test]
async fn company_information_is_a_single_row() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/company.json"))
        .and(query_param("corp_code", "00126380"))
        .respond_with(
            ResponseTemplate::new(200).set_body_string(read_fixture("disclosure/company.json")),
        )
        .mount(&server)
        .await;

    let dart = opendart(&server.uri(), "company");
    let table = dart.company_information(" 00126380 ").await.unwrap();

    assert_eq!(table.len(), 1);
    assert_eq!(table.get(0, "정식명칭"), Some("삼성전자(주)"));
    assert_eq!(table.get(0, "결산월"), Some("12"));
    assert!(table.column_index("status").is_none());
}

#[tokio::test]
async fn server_failure_is_an_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/company.json"))
        .respond_with(ResponseTemplate::new(500).set_body_string("Internal Server Error"))
        .mount(&server)
        .await;

    let dart = opendart(&server.uri(), "company-500");
    assert!(dart.company_information("00126380").await.is_err());
}
