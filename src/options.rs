use chrono::{Duration, Local, NaiveDate};

/// Earliest business year OpenDART serves periodic and financial data for.
pub const MIN_BUSINESS_YEAR: i32 = 2015;

/// Largest `page_count` the disclosure search accepts.
pub const MAX_PAGE_COUNT: u32 = 100;

/// Which periodic report a query targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ReportCode {
    FirstQuarter,
    HalfYear,
    ThirdQuarter,
    Annual,
}

impl ReportCode {
    /// The fixed `reprt_code` value sent to the API.
    pub fn as_str(&self) -> &'static str {
        match self {
            ReportCode::FirstQuarter => "11013",
            ReportCode::HalfYear => "11012",
            ReportCode::ThirdQuarter => "11014",
            ReportCode::Annual => "11011",
        }
    }
}

impl std::fmt::Display for ReportCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Consolidated or separate statements (`fs_div`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum FinancialDivision {
    #[default]
    Consolidated,
    Separate,
}

impl FinancialDivision {
    pub fn as_str(&self) -> &'static str {
        match self {
            FinancialDivision::Consolidated => "CFS",
            FinancialDivision::Separate => "OFS",
        }
    }
}

/// Parameters shared by the periodic report and financial statement endpoints.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportQuery {
    pub corp_code: String,
    pub year: i32,
    pub report_code: ReportCode,
}

impl ReportQuery {
    /// Query for one corporation. Years before 2015 are raised to 2015.
    pub fn new(corp_code: impl AsRef<str>, year: i32, report_code: ReportCode) -> Self {
        Self {
            corp_code: corp_code.as_ref().trim().to_string(),
            year: year.max(MIN_BUSINESS_YEAR),
            report_code,
        }
    }

    /// Query for several corporations at once (multi-company endpoints).
    pub fn multi<I, S>(corp_codes: I, year: i32, report_code: ReportCode) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let joined = corp_codes
            .into_iter()
            .map(|code| code.as_ref().trim().to_string())
            .collect::<Vec<_>>()
            .join(",");
        Self::new(joined, year, report_code)
    }

    /// `bsns_year` never goes below 2015, however the query was built.
    pub fn to_query_params(&self) -> Vec<(String, String)> {
        vec![
            ("corp_code".to_string(), self.corp_code.clone()),
            ("bsns_year".to_string(), self.year.max(MIN_BUSINESS_YEAR).to_string()),
            ("reprt_code".to_string(), self.report_code.as_str().to_string()),
        ]
    }
}

/// `bgn_de`/`end_de` window for major event and registration statement endpoints.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DateRangeQuery {
    pub corp_code: String,
    pub begin: NaiveDate,
    pub end: NaiveDate,
}

impl DateRangeQuery {
    pub fn new(corp_code: impl AsRef<str>, begin: NaiveDate, end: NaiveDate) -> Self {
        Self {
            corp_code: corp_code.as_ref().trim().to_string(),
            begin,
            end,
        }
    }

    pub fn to_query_params(&self) -> Vec<(String, String)> {
        vec![
            ("corp_code".to_string(), self.corp_code.clone()),
            ("bgn_de".to_string(), self.begin.format("%Y%m%d").to_string()),
            ("end_de".to_string(), self.end.format("%Y%m%d").to_string()),
        ]
    }
}

/// Options for the disclosure search (`list.json`).
#[derive(Debug, Clone)]
pub struct SearchOptions {
    pub corp_code: Option<String>,
    pub begin: Option<NaiveDate>,
    pub end: Option<NaiveDate>,
    /// Only the final version of amended reports. Defaults to true.
    pub final_report: bool,
    pub page_no: u32,
    pub page_count: u32,
    pub disclosure_type: Option<String>,
    pub disclosure_detail_type: Option<String>,
    pub corp_class: Option<String>,
}

impl Default for SearchOptions {
    fn default() -> Self {
        Self {
            corp_code: None,
            begin: None,
            end: None,
            final_report: true,
            page_no: 1,
            page_count: MAX_PAGE_COUNT,
            disclosure_type: None,
            disclosure_detail_type: None,
            corp_class: None,
        }
    }
}

impl SearchOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_corp_code(mut self, corp_code: impl Into<String>) -> Self {
        self.corp_code = Some(corp_code.into());
        self
    }

    /// Sets the receipt date window.
    ///
    /// Without an end date the search ends today; without a begin date it
    /// starts 30 days before the end.
    pub fn with_date_range(mut self, begin: NaiveDate, end: NaiveDate) -> Self {
        self.begin = Some(begin);
        self.end = Some(end);
        self
    }

    pub fn with_begin(mut self, begin: NaiveDate) -> Self {
        self.begin = Some(begin);
        self
    }

    pub fn with_end(mut self, end: NaiveDate) -> Self {
        self.end = Some(end);
        self
    }

    pub fn with_final_report(mut self, final_report: bool) -> Self {
        self.final_report = final_report;
        self
    }

    pub fn with_page_no(mut self, page_no: u32) -> Self {
        self.page_no = page_no;
        self
    }

    /// Rows per page, clamped to 1..=100 when sent.
    pub fn with_page_count(mut self, page_count: u32) -> Self {
        self.page_count = page_count;
        self
    }

    /// Disclosure type (`pblntf_ty`, e.g. "A" for periodic reports)
    pub fn with_disclosure_type(mut self, disclosure_type: impl Into<String>) -> Self {
        self.disclosure_type = Some(disclosure_type.into());
        self
    }

    /// Detailed disclosure type (`pblntf_detail_ty`, e.g. "A001")
    pub fn with_disclosure_detail_type(mut self, detail_type: impl Into<String>) -> Self {
        self.disclosure_detail_type = Some(detail_type.into());
        self
    }

    /// Corporation class: Y (KOSPI), K (KOSDAQ), N (KONEX) or E (other)
    pub fn with_corp_class(mut self, corp_class: impl Into<String>) -> Self {
        self.corp_class = Some(corp_class.into());
        self
    }

    pub fn to_query_params(&self) -> Vec<(String, String)> {
        self.query_params_on(Local::now().date_naive())
    }

    pub(crate) fn query_params_on(&self, today: NaiveDate) -> Vec<(String, String)> {
        let end = self.end.unwrap_or(today);
        let begin = self.begin.unwrap_or(end - Duration::days(30));

        let mut params = vec![("end_de".to_string(), end.format("%Y%m%d").to_string())];

        if let Some(ref corp_code) = self.corp_code {
            params.push(("corp_code".to_string(), corp_code.trim().to_string()));
        }

        params.push(("bgn_de".to_string(), begin.format("%Y%m%d").to_string()));
        params.push((
            "last_reprt_at".to_string(),
            if self.final_report { "Y" } else { "N" }.to_string(),
        ));
        params.push(("page_no".to_string(), self.page_no.max(1).to_string()));
        params.push((
            "page_count".to_string(),
            self.page_count.clamp(1, MAX_PAGE_COUNT).to_string(),
        ));

        if let Some(ref ty) = self.disclosure_type {
            params.push(("pblntf_ty".to_string(), ty.clone()));
        }

        if let Some(ref detail) = self.disclosure_detail_type {
            params.push(("pblntf_detail_ty".to_string(), detail.clone()));
        }

        if let Some(ref class) = self.corp_class {
            params.push(("corp_cls".to_string(), class.clone()));
        }

        params
    }
}

/// Market filter of the daily disclosure listing.
#[cfg(feature = "daily")]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CorpClassFilter {
    /// KOSPI (`Y`)
    Kospi,
    /// KOSDAQ (`K`)
    Kosdaq,
    /// KONEX (`N`)
    Konex,
    /// Everything else (`E`)
    Other,
}

#[cfg(feature = "daily")]
impl CorpClassFilter {
    /// Maps the one-letter class used by OpenDART.
    pub fn from_code(code: &str) -> Option<Self> {
        match code.trim() {
            "Y" => Some(Self::Kospi),
            "K" => Some(Self::Kosdaq),
            "N" => Some(Self::Konex),
            "E" => Some(Self::Other),
            _ => None,
        }
    }

    /// Listing page for this filter. `Other` is served by `mainG.do`.
    pub(crate) fn page_name(filter: Option<Self>) -> &'static str {
        match filter {
            Some(Self::Kospi) => "mainY.do",
            Some(Self::Kosdaq) => "mainK.do",
            Some(Self::Konex) => "mainN.do",
            Some(Self::Other) => "mainG.do",
            None => "mainAll.do",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn param<'a>(params: &'a [(String, String)], key: &str) -> Option<&'a str> {
        params.iter().find(|(k, _)| k == key).map(|(_, v)| v.as_str())
    }

    #[test]
    fn test_year_is_clamped() {
        let query = ReportQuery::new(" 00126380 ", 2010, ReportCode::Annual);
        let params = query.to_query_params();
        assert_eq!(param(&params, "corp_code"), Some("00126380"));
        assert_eq!(param(&params, "bsns_year"), Some("2015"));
        assert_eq!(param(&params, "reprt_code"), Some("11011"));

        assert_eq!(ReportQuery::new("00126380", 2022, ReportCode::HalfYear).year, 2022);
    }

    #[test]
    fn test_year_is_clamped_for_struct_literal() {
        let query = ReportQuery {
            corp_code: "00126380".to_string(),
            year: 2010,
            report_code: ReportCode::Annual,
        };
        assert_eq!(param(&query.to_query_params(), "bsns_year"), Some("2015"));
    }

    #[test]
    fn test_multi_joins_codes() {
        let query = ReportQuery::multi(["00126380", " 00164779"], 2023, ReportCode::ThirdQuarter);
        assert_eq!(query.corp_code, "00126380,00164779");
        assert_eq!(query.report_code.to_string(), "11014");
    }

    #[test]
    fn test_date_range_format() {
        let query = DateRangeQuery::new("00126380", date(2021, 1, 5), date(2021, 12, 31));
        let params = query.to_query_params();
        assert_eq!(param(&params, "bgn_de"), Some("20210105"));
        assert_eq!(param(&params, "end_de"), Some("20211231"));
    }

    #[test]
    fn test_search_defaults() {
        let params = SearchOptions::new().query_params_on(date(2024, 3, 15));
        assert_eq!(param(&params, "end_de"), Some("20240315"));
        assert_eq!(param(&params, "bgn_de"), Some("20240214"));
        assert_eq!(param(&params, "last_reprt_at"), Some("Y"));
        assert_eq!(param(&params, "page_no"), Some("1"));
        assert_eq!(param(&params, "page_count"), Some("100"));
        assert_eq!(param(&params, "corp_code"), None);
    }

    #[test]
    fn test_search_clamps_paging() {
        let params = SearchOptions::new()
            .with_page_no(0)
            .with_page_count(500)
            .with_final_report(false)
            .with_end(date(2024, 1, 31))
            .with_corp_class("Y")
            .query_params_on(date(2024, 3, 15));
        assert_eq!(param(&params, "page_no"), Some("1"));
        assert_eq!(param(&params, "page_count"), Some("100"));
        assert_eq!(param(&params, "last_reprt_at"), Some("N"));
        assert_eq!(param(&params, "bgn_de"), Some("20240101"));
        assert_eq!(param(&params, "corp_cls"), Some("Y"));

        let params = SearchOptions::new().with_page_count(0).query_params_on(date(2024, 3, 15));
        assert_eq!(param(&params, "page_count"), Some("1"));
    }

    #[cfg(feature = "daily")]
    #[test]
    fn test_corp_class_pages() {
        assert_eq!(CorpClassFilter::page_name(CorpClassFilter::from_code("E")), "mainG.do");
        assert_eq!(CorpClassFilter::page_name(CorpClassFilter::from_code("K")), "mainK.do");
        assert_eq!(CorpClassFilter::page_name(None), "mainAll.do");
        assert_eq!(CorpClassFilter::from_code("X"), None);
    }
}
