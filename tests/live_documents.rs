mod common;

use common::live;
use opendartkit::{DocumentOperations, ReportCode};

const RECEIPT_NO: &str = "20240312000736";

#[tokio::test]
#[ignore]
async fn raw_document() {
    let dart = live("live-raw");
    let text = dart.read_raw_xml(RECEIPT_NO, false).await.unwrap();
    assert!(text.contains("utf-8"));
    assert!(!text.contains("<주"));
}

#[tokio::test]
#[ignore]
async fn html_document() {
    let dart = live("live-html");
    let html = dart.read_html(RECEIPT_NO, false).await.unwrap();
    assert!(html.contains("https://dart.fss.or.kr/"));
}

#[tokio::test]
#[ignore]
async fn financial_statements_package() {
    let dart = live("live-xbrl");
    let dir = dart
        .download_financial_statements_raw_file(RECEIPT_NO, ReportCode::Annual, false)
        .await
        .unwrap();
    assert!(std::fs::read_dir(dir).unwrap().count() > 0);
}
