#![cfg(feature = "daily")]

mod common;

use chrono::NaiveDate;
use common::live;
use opendartkit::DailyListOperations;

#[tokio::test]
#[ignore]
async fn daily_uploaded_documents() {
    let dart = live("live-daily");
    let date = NaiveDate::from_ymd_opt(2024, 3, 15).unwrap();
    let table = dart.daily_uploaded_documents(date, None).await.unwrap();
    assert!(table.len() > 100);

    let times = table.column("시간").unwrap();
    assert!(times.windows(2).all(|w| w[0] <= w[1]));
}
