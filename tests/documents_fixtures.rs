mod common;

use std::fs;
use std::path::PathBuf;
use std::sync::{Arc, Mutex};

use common::{opendart, opendart_at, read_fixture, temp_dir, zip_bytes};
use encoding_rs::EUC_KR;
use opendartkit::{DartObserver, DocumentOperations, OpenDartError, ReportCode};
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

const RECEIPT_NO: &str = "20240312000736";

const RAW_DOCUMENT: &str = r#"<?xml version="1.0" encoding="euc-kr"?>
<DOCUMENT><TITLE>사업보고서</TITLE><P>M&A 및 R&D 현황<주1></P>&cr;</DOCUMENT>"#;

fn document_zip() -> Vec<u8> {
    let (encoded, _, _) = EUC_KR.encode(RAW_DOCUMENT);
    let attachment = "<DOCUMENT><TITLE>감사보고서</TITLE></DOCUMENT>";
    zip_bytes(&[
        ("20240312000736.xml", encoded.as_ref()),
        ("20240312000736_00760.xml", attachment.as_bytes()),
    ])
}

#[derive(Default)]
struct DownloadLog {
    done: Mutex<Vec<(String, PathBuf)>>,
}

impl DartObserver for DownloadLog {
    fn on_html_download_done(&self, receipt_no: &str, path: &std::path::Path) {
        self.done
            .lock()
            .unwrap()
            .push((receipt_no.to_string(), path.to_path_buf()));
    }
}

#[tokio::test]
async fn raw_document_is_repaired_and_cached() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/document.xml"))
        .and(query_param("rcept_no", RECEIPT_NO))
        .respond_with(ResponseTemplate::new(200).set_body_bytes(document_zip()))
        .expect(1)
        .mount(&server)
        .await;

    let root = temp_dir("raw-document");
    let dart = opendart_at(&server.uri(), &root);

    let path = dart.download_raw_file(RECEIPT_NO, false).await.unwrap();
    assert_eq!(path, root.join("Data").join("20240312000736.xml"));
    assert!(root.join("Data").join("20240312000736_00760.xml").is_file());

    let first = fs::read(&path).unwrap();
    let again = dart.download_raw_file(RECEIPT_NO, false).await.unwrap();
    assert_eq!(fs::read(again).unwrap(), first);

    let text = dart.read_raw_xml(RECEIPT_NO, false).await.unwrap();
    assert!(text.starts_with(r#"<?xml version="1.0" encoding="utf-8"?>"#));
    assert!(text.contains("M&amp;A 및 R&amp;D 현황&lt;주1&gt;"));
    assert!(text.contains("&#13;"));
}

#[tokio::test]
async fn raw_document_reload_fetches_again() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/document.xml"))
        .respond_with(ResponseTemplate::new(200).set_body_bytes(document_zip()))
        .expect(2)
        .mount(&server)
        .await;

    let dart = opendart(&server.uri(), "raw-reload");
    dart.download_raw_file(RECEIPT_NO, false).await.unwrap();
    dart.download_raw_file(RECEIPT_NO, true).await.unwrap();
}

#[tokio::test]
async fn missing_raw_document_reads_as_empty() {
    let server = MockServer::start().await;
    let envelope = r#"<?xml version="1.0" encoding="UTF-8"?>
<result><status>014</status><message>파일이 존재하지 않습니다.</message></result>"#;
    Mock::given(method("GET"))
        .and(path("/api/document.xml"))
        .respond_with(ResponseTemplate::new(200).set_body_string(envelope))
        .mount(&server)
        .await;

    let dart = opendart(&server.uri(), "raw-missing");
    let path = dart.download_raw_file(RECEIPT_NO, false).await.unwrap();
    assert!(!path.exists());
    assert_eq!(dart.read_raw_xml(RECEIPT_NO, false).await.unwrap(), "");
}

async fn mount_viewer(server: &MockServer, viewer: ResponseTemplate) {
    Mock::given(method("GET"))
        .and(path("/dsaf001/main.do"))
        .and(query_param("rcpNo", RECEIPT_NO))
        .respond_with(ResponseTemplate::new(200).set_body_string(read_fixture("documents/main.html")))
        .expect(1)
        .mount(server)
        .await;
    Mock::given(method("GET"))
        .and(path("/report/viewer.do"))
        .and(query_param("rcpNo", RECEIPT_NO))
        .and(query_param("dcmNo", "9731519"))
        .and(query_param("offset", "0"))
        .and(query_param("length", "0"))
        .and(query_param("dtd", "dart4.xsd"))
        .respond_with(viewer)
        .expect(1)
        .mount(server)
        .await;
}

#[tokio::test]
async fn html_download_rewrites_links_and_notifies() {
    let server = MockServer::start().await;
    mount_viewer(
        &server,
        ResponseTemplate::new(200)
            .insert_header("content-type", "text/html; charset=utf-8")
            .set_body_string(read_fixture("documents/viewer.html")),
    )
    .await;

    let mut dart = opendart(&server.uri(), "html");
    let log = Arc::new(DownloadLog::default());
    dart.set_observer(log.clone());

    let path = dart.download_as_html(RECEIPT_NO, false).await.unwrap();
    let html = dart.read_html(RECEIPT_NO, false).await.unwrap();

    assert!(html.contains(&format!(r#"href="{}/css/report_xml.css""#, server.uri())));
    assert!(html.contains(&format!(r#"src="{}/report/images/logo.gif""#, server.uri())));
    assert!(html.contains(r#"href="https://dart.fss.or.kr/""#));

    let done = log.done.lock().unwrap();
    assert_eq!(done.len(), 2);
    assert_eq!(done[0], (RECEIPT_NO.to_string(), path));
}

#[tokio::test]
async fn html_download_keeps_page_encoding() {
    let server = MockServer::start().await;
    let page = r#"<html><head><meta http-equiv="Content-Type" content="text/html; charset=euc-kr"></head>
<body><p>사업보고서</p><img src="/images/seal.gif"></body></html>"#;
    let (encoded, _, _) = EUC_KR.encode(page);
    mount_viewer(
        &server,
        ResponseTemplate::new(200)
            .insert_header("content-type", "text/html; charset=EUC-KR")
            .set_body_bytes(encoded.into_owned()),
    )
    .await;

    let dart = opendart(&server.uri(), "html-euc-kr");
    let path = dart.download_as_html(RECEIPT_NO, false).await.unwrap();

    let saved = fs::read(path).unwrap();
    assert!(std::str::from_utf8(&saved).is_err());
    let (decoded, _, had_errors) = EUC_KR.decode(&saved);
    assert!(!had_errors);
    assert!(decoded.contains("사업보고서"));

    let html = dart.read_html(RECEIPT_NO, false).await.unwrap();
    assert!(html.contains(&format!(r#"src="{}/images/seal.gif""#, server.uri())));
}

#[tokio::test]
async fn html_download_rejects_malformed_receipt_no() {
    let server = MockServer::start().await;
    let dart = opendart(&server.uri(), "html-malformed");
    let result = dart.download_as_html("2024031200073", false).await;
    assert!(matches!(result, Err(OpenDartError::InvalidReceiptNo(_))));
}

#[tokio::test]
async fn financial_statements_package_is_extracted() {
    let server = MockServer::start().await;
    let package = zip_bytes(&[
        ("entity00126380_2023-12-31.xbrl", b"<xbrl/>".as_slice()),
        ("entity00126380_2023-12-31.xsd", b"<schema/>".as_slice()),
    ]);
    Mock::given(method("GET"))
        .and(path("/api/fnlttXbrl.xml"))
        .and(query_param("rcept_no", RECEIPT_NO))
        .and(query_param("reprt_code", "11011"))
        .respond_with(ResponseTemplate::new(200).set_body_bytes(package))
        .expect(1)
        .mount(&server)
        .await;

    let dart = opendart(&server.uri(), "xbrl");
    let dir = dart
        .download_financial_statements_raw_file(RECEIPT_NO, ReportCode::Annual, false)
        .await
        .unwrap();
    assert!(dir.ends_with("fs_20240312000736_11011"));
    assert!(dir.join("entity00126380_2023-12-31.xbrl").is_file());

    let cached = dart
        .download_financial_statements_raw_file(RECEIPT_NO, ReportCode::Annual, false)
        .await
        .unwrap();
    assert_eq!(cached, dir);
}

#[tokio::test]
async fn failed_package_extraction_leaves_no_directory() {
    let server = MockServer::start().await;
    let broken = zip_bytes(&[
        ("entity00126380_2023-12-31.xbrl", b"<xbrl/>".as_slice()),
        ("../entity00126380_2023-12-31.xsd", b"<schema/>".as_slice()),
    ]);
    let package = zip_bytes(&[("entity00126380_2023-12-31.xbrl", b"<xbrl/>".as_slice())]);
    Mock::given(method("GET"))
        .and(path("/api/fnlttXbrl.xml"))
        .respond_with(ResponseTemplate::new(200).set_body_bytes(broken))
        .up_to_n_times(1)
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/fnlttXbrl.xml"))
        .respond_with(ResponseTemplate::new(200).set_body_bytes(package))
        .expect(1)
        .mount(&server)
        .await;

    let root = temp_dir("xbrl-broken");
    let dart = opendart_at(&server.uri(), &root);
    let result = dart
        .download_financial_statements_raw_file(RECEIPT_NO, ReportCode::Annual, false)
        .await;
    assert!(matches!(result, Err(OpenDartError::ZipError(_))));

    let leftovers: Vec<_> = fs::read_dir(root.join("Data"))
        .unwrap()
        .map(|entry| entry.unwrap().file_name())
        .filter(|name| name.to_string_lossy().starts_with("fs_"))
        .collect();
    assert!(leftovers.is_empty(), "{:?}", leftovers);

    let dir = dart
        .download_financial_statements_raw_file(RECEIPT_NO, ReportCode::Annual, false)
        .await
        .unwrap();
    assert!(dir.join("entity00126380_2023-12-31.xbrl").is_file());
}

#[tokio::test]
async fn clear_document_files_keeps_other_files() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/document.xml"))
        .respond_with(ResponseTemplate::new(200).set_body_bytes(document_zip()))
        .mount(&server)
        .await;

    let root = temp_dir("clear");
    let dart = opendart_at(&server.uri(), &root);
    dart.download_raw_file(RECEIPT_NO, false).await.unwrap();
    fs::write(root.join("Data").join("notes.txt"), "keep").unwrap();

    assert_eq!(dart.clear_document_files().unwrap(), 2);
    assert!(root.join("Data").join("notes.txt").is_file());
}
