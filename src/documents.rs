use async_trait::async_trait;
use std::fs;
use std::path::{Path, PathBuf};

use super::core::OpenDart;
use super::error::{OpenDartError, Result};
use super::options::ReportCode;
use super::parsing::repair::{decode_document, repair_document};
use super::parsing::viewer::{
    detect_encoding, is_valid_receipt_no, parse_viewer_params, rewrite_root_relative,
};
use super::traits::DocumentOperations;

const DOCUMENT_PATH: &str = "document.xml";
const XBRL_PATH: &str = "fnlttXbrl.xml";
const VIEWER_MAIN_PATH: &str = "dsaf001/main.do";
const VIEWER_BODY_PATH: &str = "report/viewer.do";

/// Extensions removed by [`DocumentOperations::clear_document_files`].
const DOCUMENT_EXTENSIONS: [&str; 2] = ["xml", "html"];

/// Trims `receipt_no` and rejects anything but 14 digits before it reaches a path.
fn checked_receipt_no(receipt_no: &str) -> Result<&str> {
    let receipt_no = receipt_no.trim();
    if !is_valid_receipt_no(receipt_no) {
        tracing::error!("document number ({}) is not well-formed", receipt_no);
        return Err(OpenDartError::InvalidReceiptNo(receipt_no.to_string()));
    }
    Ok(receipt_no)
}

fn remove_file_if_exists(path: &Path) -> Result<()> {
    if path.is_file() {
        fs::remove_file(path)?;
        tracing::debug!("removed {}", path.display());
    }
    Ok(())
}

impl OpenDart {
    pub(crate) fn raw_document_path(&self, receipt_no: &str) -> PathBuf {
        self.data_dir.join(format!("{}.xml", receipt_no))
    }

    pub(crate) fn html_document_path(&self, receipt_no: &str) -> PathBuf {
        self.data_dir.join(format!("{}.html", receipt_no))
    }

    pub(crate) fn financial_statements_dir(&self, receipt_no: &str, report_code: ReportCode) -> PathBuf {
        self.data_dir
            .join(format!("fs_{}_{}", receipt_no, report_code.as_str()))
    }

    /// Rewrites an extracted document as repaired UTF-8 text.
    fn repair_document_file(&self, path: &Path) -> Result<()> {
        let bytes = fs::read(path)?;
        let repaired = repair_document(&decode_document(&bytes), &self.settings.replacements);
        fs::write(path, repaired)?;
        tracing::info!("repaired document encoding ({})", path.display());
        Ok(())
    }

    /// Fetches the viewer page and returns it encoded as served.
    async fn render_viewer_html(&self, receipt_no: &str) -> Result<Vec<u8>> {
        let main_url = format!("{}/{}", self.dart_url, VIEWER_MAIN_PATH);
        let main_page = self
            .get_text(&main_url, &[("rcpNo".to_string(), receipt_no.to_string())])
            .await?;

        let params = parse_viewer_params(&main_page)
            .ok_or_else(|| {
                OpenDartError::InvalidResponse(format!(
                    "viewer parameters not found for {}",
                    receipt_no
                ))
            })?
            .whole_document();
        tracing::info!("viewer parameters - {:?}", params);

        let viewer_url = format!("{}/{}", self.dart_url, VIEWER_BODY_PATH);
        let page = self.get_page(&viewer_url, &params.to_query_params()).await?;

        let encoding = detect_encoding(page.content_type.as_deref(), &page.body);
        let (text, _, _) = encoding.decode(&page.body);
        let html = rewrite_root_relative(&text, &self.dart_url);
        let (bytes, _, unmappable) = encoding.encode(&html);
        if unmappable {
            tracing::warn!("characters not representable in {} were replaced", encoding.name());
        }
        Ok(bytes.into_owned())
    }
}

#[async_trait]
impl DocumentOperations for OpenDart {
    /// Downloads `document.xml` for a receipt number into the data directory.
    ///
    /// The archive is extracted as delivered (the main document plus any
    /// attachments), then `{receipt_no}.xml` is repaired in place. A status
    /// error from the service is logged and leaves no file behind; the path
    /// is returned either way.
    async fn download_raw_file(&self, receipt_no: &str, reload: bool) -> Result<PathBuf> {
        let receipt_no = checked_receipt_no(receipt_no)?;
        let path = self.raw_document_path(receipt_no);
        if reload {
            remove_file_if_exists(&path)?;
        }
        if path.is_file() {
            return Ok(path);
        }

        tracing::info!("download document raw file (doc no: {})", receipt_no);
        let params = vec![("rcept_no".to_string(), receipt_no.to_string())];
        match self.get_zip(DOCUMENT_PATH, &params).await {
            Ok(mut archive) => {
                if let Err(e) = self.extract_zip(&mut archive, &self.data_dir) {
                    remove_file_if_exists(&path)?;
                    return Err(e);
                }
            }
            Err(OpenDartError::Api { .. }) => {}
            Err(e) => return Err(e),
        }

        if path.is_file() {
            self.repair_document_file(&path)?;
        }
        Ok(path)
    }

    async fn read_raw_xml(&self, receipt_no: &str, reload: bool) -> Result<String> {
        let path = self.download_raw_file(receipt_no, reload).await?;
        if !path.is_file() {
            return Ok(String::new());
        }
        Ok(fs::read_to_string(path)?)
    }

    /// Saves the viewer rendering of a disclosure as `{receipt_no}.html`.
    ///
    /// Asset links are made absolute so the file opens offline. The observer
    /// is told about the file even when it was already cached.
    ///
    /// # Errors
    ///
    /// `OpenDartError::InvalidReceiptNo` unless `receipt_no` has 14 digits;
    /// `OpenDartError::InvalidResponse` when the viewer page carries no
    /// document parameters.
    async fn download_as_html(&self, receipt_no: &str, reload: bool) -> Result<PathBuf> {
        let receipt_no = checked_receipt_no(receipt_no)?;
        let path = self.html_document_path(receipt_no);
        if reload {
            remove_file_if_exists(&path)?;
        }

        if !path.is_file() {
            tracing::info!("download document as html file (doc no: {})", receipt_no);
            let html = self.render_viewer_html(receipt_no).await?;
            fs::write(&path, html)?;
        }

        self.observer.on_html_download_done(receipt_no, &path);
        Ok(path)
    }

    async fn read_html(&self, receipt_no: &str, reload: bool) -> Result<String> {
        let path = self.download_as_html(receipt_no, reload).await?;
        if !path.is_file() {
            return Ok(String::new());
        }
        let bytes = fs::read(path)?;
        let (text, _, _) = detect_encoding(None, &bytes).decode(&bytes);
        Ok(text.into_owned())
    }

    /// Downloads the XBRL package of a report into `fs_{receipt_no}_{report_code}`.
    ///
    /// The package is extracted next to the target and renamed into place, so
    /// the directory only exists once every entry was written.
    async fn download_financial_statements_raw_file(
        &self,
        receipt_no: &str,
        report_code: ReportCode,
        reload: bool,
    ) -> Result<PathBuf> {
        let receipt_no = checked_receipt_no(receipt_no)?;
        let dir = self.financial_statements_dir(receipt_no, report_code);
        if reload && dir.is_dir() {
            fs::remove_dir_all(&dir)?;
        }
        if dir.is_dir() {
            return Ok(dir);
        }

        tracing::info!(
            "download financial statements raw file (receipt no: {}, report code: {})",
            receipt_no,
            report_code
        );
        let params = vec![
            ("rcept_no".to_string(), receipt_no.to_string()),
            ("reprt_code".to_string(), report_code.as_str().to_string()),
        ];
        match self.get_zip(XBRL_PATH, &params).await {
            Ok(mut archive) => {
                let staging = dir.with_extension("partial");
                if staging.is_dir() {
                    fs::remove_dir_all(&staging)?;
                }
                if let Err(e) = self.extract_zip(&mut archive, &staging) {
                    tracing::error!("extracting {} failed: {}", dir.display(), e);
                    let _ = fs::remove_dir_all(&staging);
                    return Err(e);
                }
                fs::rename(&staging, &dir)?;
            }
            Err(OpenDartError::Api { .. }) => {}
            Err(e) => return Err(e),
        }
        Ok(dir)
    }

    fn clear_document_files(&self) -> Result<usize> {
        let mut removed = 0;
        for entry in fs::read_dir(&self.data_dir)? {
            let path = entry?.path();
            let is_document = path
                .extension()
                .and_then(|e| e.to_str())
                .map(|e| DOCUMENT_EXTENSIONS.contains(&e))
                .unwrap_or(false);
            if is_document && path.is_file() {
                fs::remove_file(&path)?;
                removed += 1;
            }
        }
        if removed > 0 {
            tracing::info!("removed {} document files", removed);
        }
        Ok(removed)
    }
}
