mod common;

use std::sync::{Arc, Mutex};

use common::{opendart, opendart_at, read_fixture_bytes, temp_dir, zip_bytes};
use opendartkit::{
    CorporationRegistry, DartObserver, REGISTRY_CACHE_FILE, RegistryOperations,
};
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn registry_zip() -> Vec<u8> {
    let xml = read_fixture_bytes("registry/CORPCODE.xml");
    zip_bytes(&[("CORPCODE.xml", xml.as_slice())])
}

async fn mount_registry(server: &MockServer, expected_calls: u64) {
    Mock::given(method("GET"))
        .and(path("/api/corpCode.xml"))
        .and(query_param("crtfc_key", "test-key"))
        .respond_with(ResponseTemplate::new(200).set_body_bytes(registry_zip()))
        .expect(expected_calls)
        .mount(server)
        .await;
}

#[derive(Default)]
struct RecordingObserver {
    api_errors: Mutex<Vec<(i32, String)>>,
}

impl DartObserver for RecordingObserver {
    fn on_api_error(&self, status: i32, message: &str) {
        self.api_errors.lock().unwrap().push((status, message.to_string()));
    }
}

#[tokio::test]
async fn registry_is_fetched_once_per_day() {
    let server = MockServer::start().await;
    mount_registry(&server, 1).await;

    let root = temp_dir("registry-once");
    let dart = opendart_at(&server.uri(), &root);

    let first = dart.corporations(false).await.unwrap();
    assert_eq!(first.len(), 4);
    assert!(root.join("Data").join(REGISTRY_CACHE_FILE).is_file());

    let second = dart.corporations(false).await.unwrap();
    assert!(Arc::ptr_eq(&first, &second));

    // A new client on the same data directory reads today's cache file.
    let restarted = opendart_at(&server.uri(), &root);
    let cached = restarted.corporations(false).await.unwrap();
    assert_eq!(cached.records(), first.records());
}

#[tokio::test]
async fn registry_reload_fetches_again() {
    let server = MockServer::start().await;
    mount_registry(&server, 2).await;

    let dart = opendart(&server.uri(), "registry-reload");
    dart.corporations(false).await.unwrap();
    let reloaded = dart.corporations(true).await.unwrap();
    assert_eq!(reloaded.len(), 4);
}

#[tokio::test]
async fn registry_skips_the_placeholder_record() {
    let server = MockServer::start().await;
    mount_registry(&server, 1).await;

    let dart = opendart(&server.uri(), "registry-placeholder");
    let registry = dart.corporations(false).await.unwrap();
    assert!(registry.records().iter().all(|c| c.corp_code != "99999999"));

    let unlisted = registry
        .records()
        .iter()
        .find(|c| c.corp_code == "01133217")
        .unwrap();
    assert_eq!(unlisted.stock_code, None);
}

#[tokio::test]
async fn search_corporations_by_name() {
    let server = MockServer::start().await;
    mount_registry(&server, 1).await;

    let dart = opendart(&server.uri(), "registry-search");

    let exact = dart.search_corporations("삼성전자", true).await.unwrap();
    assert_eq!(exact.len(), 1);
    assert_eq!(exact.get(0, "고유번호"), Some("00126380"));
    assert_eq!(exact.get(0, "최종변경일자"), Some("2024-01-02"));

    let partial = dart.search_corporations("삼성전자", false).await.unwrap();
    assert_eq!(partial.column("정식명칭").unwrap(), vec!["삼성전자", "삼성전자판매"]);

    let none = dart.search_corporations("없는회사", false).await.unwrap();
    assert!(none.is_empty());
    assert_eq!(none.columns().len(), 4);
}

#[tokio::test]
async fn find_corporation_by_stock_code() {
    let server = MockServer::start().await;
    mount_registry(&server, 1).await;

    let dart = opendart(&server.uri(), "registry-stock");
    let hynix = dart.find_corporation_by_stock_code("000660").await.unwrap().unwrap();
    assert_eq!(hynix.corp_name, "에스케이하이닉스");
    assert!(dart.find_corporation_by_stock_code("999999").await.unwrap().is_none());
}

#[tokio::test]
async fn registry_error_is_not_cached() {
    let server = MockServer::start().await;
    let envelope = r#"<?xml version="1.0" encoding="UTF-8"?>
<result><status>020</status><message>요청 제한을 초과하였습니다.</message></result>"#;
    Mock::given(method("GET"))
        .and(path("/api/corpCode.xml"))
        .respond_with(ResponseTemplate::new(200).set_body_string(envelope))
        .up_to_n_times(1)
        .expect(1)
        .mount(&server)
        .await;
    mount_registry(&server, 1).await;

    let root = temp_dir("registry-error");
    let mut dart = opendart_at(&server.uri(), &root);
    let observer = Arc::new(RecordingObserver::default());
    dart.set_observer(observer.clone());

    let registry = dart.corporations(false).await.unwrap();
    assert!(registry.is_empty());
    assert!(!root.join("Data").join(REGISTRY_CACHE_FILE).exists());

    {
        let errors = observer.api_errors.lock().unwrap();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].0, 20);
    }

    // The failed fetch is not remembered, so the same day's next call retries.
    let retried = dart.corporations(false).await.unwrap();
    assert_eq!(retried.len(), 4);
    assert!(root.join("Data").join(REGISTRY_CACHE_FILE).is_file());
}

#[tokio::test]
async fn corporation_table_keeps_api_names_without_renaming() {
    let server = MockServer::start().await;
    mount_registry(&server, 1).await;

    let mut dart = opendart(&server.uri(), "registry-table");
    dart.set_rename_columns(false);
    let table = dart.corporation_table(false).await.unwrap();
    assert_eq!(table.columns(), ["corp_code", "corp_name", "stock_code", "modify_date"]);
    assert_eq!(table.len(), 4);
}

#[test]
fn registry_from_fixture_xml() {
    let today = chrono::NaiveDate::from_ymd_opt(2024, 3, 15).unwrap();
    let registry =
        CorporationRegistry::from_xml(&read_fixture_bytes("registry/CORPCODE.xml"), today).unwrap();
    assert_eq!(registry.loaded_on(), today);
    assert_eq!(registry.find_by_stock_code("005930").unwrap().corp_code, "00126380");
}
