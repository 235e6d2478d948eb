//! Repair of raw disclosure XML.
//!
//! Documents are delivered in EUC-KR and are not well-formed as XML: they
//! contain bare ampersands in a few well-known abbreviations, a custom `&cr;`
//! marker and `<주...>` annotation brackets that look like tags. The repair
//! pass fixes these and yields UTF-8 text. Running it twice changes nothing.

use encoding_rs::EUC_KR;
use once_cell::sync::Lazy;
use regex::{Captures, Regex};

use crate::config::Replacement;

static ANNOTATION_BRACKET: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"<주[^>]*>").expect("Failed to compile ANNOTATION_BRACKET"));

static EUC_KR_DECLARATION: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"(?i)(<\?xml[^>]*encoding\s*=\s*["'])euc-kr(["'])"#)
        .expect("Failed to compile EUC_KR_DECLARATION")
});

/// Decodes document bytes: UTF-8 when valid, EUC-KR otherwise.
pub fn decode_document(bytes: &[u8]) -> String {
    match std::str::from_utf8(bytes) {
        Ok(text) => text.to_string(),
        Err(_) => {
            let (text, _, had_errors) = EUC_KR.decode(bytes);
            if had_errors {
                tracing::warn!("document contains bytes that are not valid EUC-KR");
            }
            text.into_owned()
        }
    }
}

/// Applies the substitutions in order, escapes annotation brackets and
/// declares the text as UTF-8.
pub fn repair_document(text: &str, replacements: &[Replacement]) -> String {
    let mut repaired = text.to_string();
    for rule in replacements {
        if !rule.from.is_empty() {
            repaired = repaired.replace(&rule.from, &rule.to);
        }
    }

    let repaired = ANNOTATION_BRACKET.replace_all(&repaired, |caps: &Captures| {
        let bracket = &caps[0];
        format!("&lt;{}&gt;", &bracket[1..bracket.len() - 1])
    });

    EUC_KR_DECLARATION
        .replace(&repaired, "${1}utf-8${2}")
        .into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Settings;

    fn rules() -> Vec<Replacement> {
        Settings::default().replacements
    }

    #[test]
    fn test_replacements_and_brackets() {
        let source = "<P>M&A 및 R&D&cr;</P><P><주1> 참고</P><P>S&P 등급 <주석 2></P>";
        let repaired = repair_document(source, &rules());
        assert_eq!(
            repaired,
            "<P>M&amp;A 및 R&amp;D&#13;</P><P>&lt;주1&gt; 참고</P><P>S&amp;P 등급 &lt;주석 2&gt;</P>"
        );
    }

    #[test]
    fn test_repair_is_idempotent() {
        let source = "<?xml version=\"1.0\" encoding=\"euc-kr\"?>\n<DOCUMENT>M&A <주1> R&D &cr; S&P</DOCUMENT>";
        let once = repair_document(source, &rules());
        let twice = repair_document(&once, &rules());
        assert_eq!(once, twice);
        assert!(once.starts_with("<?xml version=\"1.0\" encoding=\"utf-8\"?>"));
    }

    #[test]
    fn test_decode_euc_kr() {
        let (encoded, _, _) = EUC_KR.encode("<P>사업보고서</P>");
        assert_eq!(decode_document(&encoded), "<P>사업보고서</P>");
        assert_eq!(decode_document("이미 UTF-8".as_bytes()), "이미 UTF-8");
    }
}
