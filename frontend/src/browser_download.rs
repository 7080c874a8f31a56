//! Browser file downloads for CSV exports.

use anyhow::{Context, anyhow};
use common::csv_export::{CsvDocument, CsvDownloadSink, CsvExportOptions, CsvRecord, export_csv, records_from_serialize};
use dioxus::logger::tracing;
use serde::Serialize;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Blob, BlobPropertyBag, HtmlAnchorElement, Url};

fn js_err(e: JsValue) -> anyhow::Error {
    anyhow!("{:?}", e)
}

/// Object URL pointing at a blob; revoked when dropped.
struct ObjectUrl(String);

impl ObjectUrl {
    fn create(blob: &Blob) -> anyhow::Result<Self> {
        let url = Url::create_object_url_with_blob(blob).map_err(js_err)?;
        Ok(Self(url))
    }
}

impl Drop for ObjectUrl {
    fn drop(&mut self) {
        if let Err(e) = Url::revoke_object_url(&self.0) {
            tracing::warn!("Failed to revoke object url {}: {:?}", self.0, e);
        }
    }
}

/// Triggers a download through a transient `<a download>` link.
pub struct BrowserDownload;

impl CsvDownloadSink for BrowserDownload {
    type Error = anyhow::Error;

    fn deliver(&mut self, document: &CsvDocument) -> anyhow::Result<()> {
        let parts = js_sys::Array::new();
        parts.push(&JsValue::from_str(&document.content));
        let options = BlobPropertyBag::new();
        options.set_type(&document.mime_type);
        let blob = Blob::new_with_str_sequence_and_options(&parts, &options).map_err(js_err)?;

        let url = ObjectUrl::create(&blob)?;
        let html_document = web_sys::window()
            .context("no window")?
            .document()
            .context("no document")?;
        let link: HtmlAnchorElement = html_document
            .create_element("a")
            .map_err(js_err)?
            .dyn_into()
            .map_err(|_| anyhow!("created element is not an anchor"))?;
        link.set_href(&url.0);
        link.set_download(&document.filename);
        link.click();
        tracing::info!("Download started: {} ({} bytes)", document.filename, document.as_bytes().len());
        Ok(())
    }
}

/// Rows that fail to serialize are logged and exported as an empty table.
pub fn to_csv_records<T: Serialize>(rows: &[T]) -> Vec<CsvRecord> {
    match records_from_serialize(rows) {
        Ok(records) => records,
        Err(e) => {
            tracing::error!("Failed to convert rows to csv records: {e}");
            vec![]
        }
    }
}

/// Export `records` as `filename`. `Ok(false)` when there was nothing to export.
pub fn download_csv(filename: &str, records: &[CsvRecord]) -> anyhow::Result<bool> {
    export_csv(filename, records, &CsvExportOptions::default(), &mut BrowserDownload)
}
