//! Flat row extraction from OpenDART XML payloads.
//!
//! The registry file and the error envelope share one shape: a repeated
//! element whose direct children are simple text fields.
//!
//! ```xml
//! <result>
//!   <list>
//!     <corp_code>00434003</corp_code>
//!     <corp_name>다코</corp_name>
//!     <stock_code> </stock_code>
//!     <modify_date>20170630</modify_date>
//!   </list>
//! </result>
//! ```

use quick_xml::Reader;
use quick_xml::events::Event;
use std::collections::HashMap;

use crate::Result;

/// One parsed element: child tag name to trimmed text.
pub type XmlRow = HashMap<String, String>;

/// Collects the text children of every `row_tag` element in document order.
///
/// Children nested deeper than one level contribute their text to the
/// enclosing field. Empty elements yield empty strings.
pub fn parse_rows(xml: &[u8], row_tag: &str) -> Result<Vec<XmlRow>> {
    let mut reader = Reader::from_reader(xml);
    reader.config_mut().trim_text(true);

    let mut rows = Vec::new();
    let mut row: Option<XmlRow> = None;
    let mut field: Option<(String, String)> = None;
    let mut depth = 0usize;
    let mut buf = Vec::new();

    loop {
        match reader.read_event_into(&mut buf)? {
            Event::Start(e) => {
                let name = String::from_utf8_lossy(e.local_name().as_ref()).into_owned();
                if row.is_none() {
                    if name == row_tag {
                        row = Some(XmlRow::new());
                    }
                } else if field.is_none() {
                    field = Some((name, String::new()));
                } else {
                    depth += 1;
                }
            }
            Event::Empty(e) => {
                if let (Some(current), None) = (row.as_mut(), field.as_ref()) {
                    let name = String::from_utf8_lossy(e.local_name().as_ref()).into_owned();
                    current.entry(name).or_default();
                }
            }
            Event::Text(t) => {
                if let Some((_, value)) = field.as_mut() {
                    let text = t
                        .unescape()
                        .map(|c| c.into_owned())
                        .unwrap_or_else(|_| String::from_utf8_lossy(&t).into_owned());
                    value.push_str(&text);
                }
            }
            Event::CData(c) => {
                if let Some((_, value)) = field.as_mut() {
                    value.push_str(&String::from_utf8_lossy(&c));
                }
            }
            Event::End(e) => {
                if depth > 0 {
                    depth -= 1;
                } else if let Some((name, value)) = field.take() {
                    if let Some(current) = row.as_mut() {
                        current.insert(name, value.trim().to_string());
                    }
                } else if e.local_name().as_ref() == row_tag.as_bytes() {
                    if let Some(done) = row.take() {
                        rows.push(done);
                    }
                }
            }
            Event::Eof => break,
            _ => {}
        }
        buf.clear();
    }

    Ok(rows)
}

/// Reads the `<result><status/><message/></result>` envelope.
///
/// Returns `None` when the body is not such an envelope.
pub fn parse_status_envelope(xml: &[u8]) -> Option<(i32, String)> {
    let rows = parse_rows(xml, "result").ok()?;
    let row = rows.into_iter().next()?;
    let status = row.get("status")?.trim().parse().ok()?;
    let message = row.get("message").cloned().unwrap_or_default();
    Some((status, message))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_rows() {
        let xml = r#"<?xml version="1.0" encoding="UTF-8"?>
<result>
    <list>
        <corp_code>00434003</corp_code>
        <corp_name>다코</corp_name>
        <stock_code> </stock_code>
        <modify_date>20170630</modify_date>
    </list>
    <list>
        <corp_code>00126380</corp_code>
        <corp_name>삼성전자</corp_name>
        <stock_code>005930</stock_code>
        <modify_date>20230110</modify_date>
    </list>
</result>"#;

        let rows = parse_rows(xml.as_bytes(), "list").unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0]["corp_code"], "00434003");
        assert_eq!(rows[0]["stock_code"], "");
        assert_eq!(rows[1]["corp_name"], "삼성전자");
        assert_eq!(rows[1]["stock_code"], "005930");
    }

    #[test]
    fn test_parse_rows_handles_empty_elements_and_entities() {
        let xml = "<result><list><corp_name>R&amp;D Co</corp_name><stock_code/></list></result>";
        let rows = parse_rows(xml.as_bytes(), "list").unwrap();
        assert_eq!(rows[0]["corp_name"], "R&D Co");
        assert_eq!(rows[0]["stock_code"], "");
    }

    #[test]
    fn test_parse_status_envelope() {
        let xml = "<result><status>013</status><message>조회된 데이타가 없습니다.</message></result>";
        assert_eq!(
            parse_status_envelope(xml.as_bytes()),
            Some((13, "조회된 데이타가 없습니다.".to_string()))
        );
        assert_eq!(parse_status_envelope(b"not xml at all"), None);
    }
}
