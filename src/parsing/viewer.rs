//! Helpers for saving the DART document viewer as a standalone HTML file.
//!
//! The viewer main page (`/dsaf001/main.do?rcpNo=...`) builds its table of
//! contents from inline script. The parameters of the document body request
//! are read from that script text rather than by running it.

use encoding_rs::{Encoding, UTF_8};
use once_cell::sync::Lazy;
use regex::{Captures, Regex};
use std::collections::HashMap;

static RECEIPT_NO: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[0-9]{14}$").expect("Failed to compile RECEIPT_NO"));

static NODE_ASSIGNMENT: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"node1\['(\w+)'\]\s*=\s*["']([^"']*)["']"#)
        .expect("Failed to compile NODE_ASSIGNMENT")
});

static VIEW_DOC_CALL: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"viewDoc\(([^)]*)\)").expect("Failed to compile VIEW_DOC_CALL"));

static ROOT_RELATIVE_ATTR: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"(?i)\b(href|src)(\s*=\s*)(?:"(/[^"]*)"|'(/[^']*)')"#)
        .expect("Failed to compile ROOT_RELATIVE_ATTR")
});

static META_CHARSET: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"(?i)<meta[^>]+charset\s*=\s*["']?([A-Za-z0-9_\-]+)"#)
        .expect("Failed to compile META_CHARSET")
});

/// Checks the 14-digit receipt number format.
pub fn is_valid_receipt_no(receipt_no: &str) -> bool {
    RECEIPT_NO.is_match(receipt_no)
}

/// Query parameters of `/report/viewer.do`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewerParams {
    pub rcp_no: String,
    pub dcm_no: String,
    pub ele_id: String,
    pub offset: String,
    pub length: String,
    pub dtd: String,
}

impl ViewerParams {
    /// Requests the whole document instead of a single section.
    pub fn whole_document(mut self) -> Self {
        self.offset = "0".to_string();
        self.length = "0".to_string();
        self
    }

    pub fn to_query_params(&self) -> Vec<(String, String)> {
        vec![
            ("rcpNo".to_string(), self.rcp_no.clone()),
            ("dcmNo".to_string(), self.dcm_no.clone()),
            ("eleId".to_string(), self.ele_id.clone()),
            ("offset".to_string(), self.offset.clone()),
            ("length".to_string(), self.length.clone()),
            ("dtd".to_string(), self.dtd.clone()),
        ]
    }
}

/// Extracts viewer parameters from the main page script.
///
/// The first `node1['key'] = "value"` assignments are used; if they are
/// missing, the first `viewDoc('rcpNo', 'dcmNo', ...)` call is.
pub fn parse_viewer_params(page: &str) -> Option<ViewerParams> {
    let mut values: HashMap<&str, &str> = HashMap::new();
    for caps in NODE_ASSIGNMENT.captures_iter(page) {
        let (Some(key), Some(value)) = (caps.get(1), caps.get(2)) else {
            continue;
        };
        values.entry(key.as_str()).or_insert(value.as_str());
    }

    if let (Some(rcp_no), Some(dcm_no)) = (values.get("rcpNo"), values.get("dcmNo")) {
        return Some(ViewerParams {
            rcp_no: rcp_no.to_string(),
            dcm_no: dcm_no.to_string(),
            ele_id: values.get("eleId").unwrap_or(&"0").to_string(),
            offset: values.get("offset").unwrap_or(&"0").to_string(),
            length: values.get("length").unwrap_or(&"0").to_string(),
            dtd: values.get("dtd").unwrap_or(&"dart3.xsd").to_string(),
        });
    }

    VIEW_DOC_CALL.captures_iter(page).find_map(|caps| {
        let args: Vec<String> = caps[1]
            .split(',')
            .map(|a| a.trim().trim_matches(|c| c == '\'' || c == '"').to_string())
            .collect();
        let rcp_no = args.first()?;
        let dcm_no = args.get(1)?;
        if !is_valid_receipt_no(rcp_no) || dcm_no.is_empty() {
            return None;
        }
        let arg = |i: usize, default: &str| {
            args.get(i)
                .filter(|a| !a.is_empty() && a.as_str() != "null")
                .cloned()
                .unwrap_or_else(|| default.to_string())
        };
        Some(ViewerParams {
            rcp_no: rcp_no.clone(),
            dcm_no: dcm_no.clone(),
            ele_id: arg(2, "0"),
            offset: arg(3, "0"),
            length: arg(4, "0"),
            dtd: arg(5, "dart3.xsd"),
        })
    })
}

/// Prefixes root-relative `href` and `src` values with `site`.
///
/// Protocol-relative (`//host/...`) and absolute values are left alone.
pub fn rewrite_root_relative(html: &str, site: &str) -> String {
    let site = site.trim_end_matches('/');
    ROOT_RELATIVE_ATTR
        .replace_all(html, |caps: &Captures| {
            let (value, quote) = match (caps.get(3), caps.get(4)) {
                (Some(v), _) => (v.as_str(), '"'),
                (None, Some(v)) => (v.as_str(), '\''),
                (None, None) => return caps[0].to_string(),
            };
            if value.starts_with("//") {
                return caps[0].to_string();
            }
            format!("{}{}{}{}{}{}", &caps[1], &caps[2], quote, site, value, quote)
        })
        .into_owned()
}

/// Picks the page encoding: `charset` of the content type, then a `<meta>`
/// declaration, then UTF-8.
pub fn detect_encoding(content_type: Option<&str>, body: &[u8]) -> &'static Encoding {
    let from_header = content_type.and_then(|ct| {
        ct.split(';')
            .filter_map(|part| part.trim().strip_prefix("charset="))
            .find_map(|label| Encoding::for_label(label.trim_matches('"').as_bytes()))
    });
    if let Some(encoding) = from_header {
        return encoding;
    }

    let head = String::from_utf8_lossy(&body[..body.len().min(2048)]);
    META_CHARSET
        .captures(&head)
        .and_then(|caps| Encoding::for_label(caps[1].as_bytes()))
        .unwrap_or(UTF_8)
}

#[cfg(test)]
mod tests {
    use super::*;

    const MAIN_PAGE: &str = r#"
<script type="text/javascript">
    function viewDoc(rcpNo, dcmNo, eleId, offset, length, dtd) { }
    var node1 = {};
    node1['text'] = "표지";
    node1['id'] = "1";
    node1['rcpNo'] = "20210309000744";
    node1['dcmNo'] = "8025584";
    node1['eleId'] = "1";
    node1['offset'] = "649";
    node1['length'] = "1213";
    node1['dtd'] = "dart3.xsd";
    var node1 = {};
    node1['rcpNo'] = "20210309000744";
    node1['dcmNo'] = "9999999";
</script>"#;

    #[test]
    fn test_parse_viewer_params_from_tree_nodes() {
        let params = parse_viewer_params(MAIN_PAGE).unwrap();
        assert_eq!(params.rcp_no, "20210309000744");
        assert_eq!(params.dcm_no, "8025584");
        assert_eq!(params.ele_id, "1");
        assert_eq!(params.offset, "649");

        let whole = params.whole_document();
        assert_eq!(whole.offset, "0");
        assert_eq!(whole.length, "0");
        assert_eq!(whole.to_query_params()[5], ("dtd".to_string(), "dart3.xsd".to_string()));
    }

    #[test]
    fn test_parse_viewer_params_from_view_doc_call() {
        let page = r#"function viewDoc(rcpNo, dcmNo) {}
            viewDoc('20210309000744', '8025584', null, null, null, 'dart3.xsd', '');"#;
        let params = parse_viewer_params(page).unwrap();
        assert_eq!(params.dcm_no, "8025584");
        assert_eq!(params.ele_id, "0");
        assert_eq!(params.dtd, "dart3.xsd");
    }

    #[test]
    fn test_parse_viewer_params_missing() {
        assert_eq!(parse_viewer_params("<html></html>"), None);
    }

    #[test]
    fn test_rewrite_root_relative() {
        let html = r#"<link href="/css/report.css"><img src='/img/a.gif'><a href="//cdn.x/y"></a><img src="http://x/b.gif">"#;
        let rewritten = rewrite_root_relative(html, "https://dart.fss.or.kr");
        assert_eq!(
            rewritten,
            r#"<link href="https://dart.fss.or.kr/css/report.css"><img src='https://dart.fss.or.kr/img/a.gif'><a href="//cdn.x/y"></a><img src="http://x/b.gif">"#
        );
        assert_eq!(rewrite_root_relative(&rewritten, "https://dart.fss.or.kr"), rewritten);
    }

    #[test]
    fn test_receipt_no_format() {
        assert!(is_valid_receipt_no("20210309000744"));
        assert!(!is_valid_receipt_no("2021030900074"));
        assert!(!is_valid_receipt_no("2021030900074a"));
    }

    #[test]
    fn test_detect_encoding() {
        assert_eq!(detect_encoding(Some("text/html; charset=EUC-KR"), b""), encoding_rs::EUC_KR);
        assert_eq!(
            detect_encoding(None, br#"<html><head><meta charset="euc-kr"></head>"#),
            encoding_rs::EUC_KR
        );
        assert_eq!(detect_encoding(Some("text/html"), b"<html>"), UTF_8);
    }
}
