use std::str::FromStr;

use axum::{body::Body, extract::Path, http::StatusCode, response::{IntoResponse, Response}};
use common::{
    company_config::CompanyConfig,
    csv_export::{CsvDocument, CsvExportOptions, CsvRecord, build_csv_document, records_from_serialize},
};
use tracing::info;

use crate::api::{list_kap_notifications, list_kpis, list_portfolio};

/// Tables that can be exported.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportDataset {
    Kap,
    Kpi,
    Portfolio,
}

impl ExportDataset {
    pub fn as_str(&self) -> &'static str {
        match self {
            ExportDataset::Kap => "kap",
            ExportDataset::Kpi => "kpi",
            ExportDataset::Portfolio => "portfolio",
        }
    }
}

impl FromStr for ExportDataset {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim_end_matches(".csv") {
            "kap" => Ok(ExportDataset::Kap),
            "kpi" => Ok(ExportDataset::Kpi),
            "portfolio" => Ok(ExportDataset::Portfolio),
            other => anyhow::bail!("unknown export dataset: {other}"),
        }
    }
}

async fn fetch_records(dataset: ExportDataset) -> anyhow::Result<Vec<CsvRecord>> {
    let records = match dataset {
        ExportDataset::Kap => records_from_serialize(&list_kap_notifications().await?)?,
        ExportDataset::Kpi => records_from_serialize(&list_kpis().await?)?,
        ExportDataset::Portfolio => records_from_serialize(&list_portfolio().await?)?,
    };
    Ok(records)
}

/// `204 No Content` when there was nothing to export.
pub fn csv_response(document: Option<CsvDocument>) -> Response {
    let Some(document) = document else {
        return StatusCode::NO_CONTENT.into_response();
    };
    let headers: [(String, String); 2] = [
        ("Content-Type".to_string(), document.mime_type.clone()),
        (
            "Content-Disposition".to_string(),
            format!("attachment; filename=\"{}\"", document.filename),
        ),
    ];
    (headers, Body::from(document.content)).into_response()
}

async fn _export_dataset_csv(dataset: ExportDataset) -> anyhow::Result<Response> {
    let records = fetch_records(dataset).await?;
    info!("Exporting {} rows of {}", records.len(), dataset.as_str());
    let filename = CompanyConfig::default().export_filename(dataset.as_str());
    let document = build_csv_document(&filename, &records, &CsvExportOptions::default());
    Ok(csv_response(document))
}

pub async fn export_dataset_csv(Path(dataset): Path<String>) -> Response {
    let dataset = match dataset.parse::<ExportDataset>() {
        Ok(dataset) => dataset,
        Err(e) => return (StatusCode::NOT_FOUND, Body::from(e.to_string())).into_response(),
    };
    match _export_dataset_csv(dataset).await {
        Ok(response) => response,
        Err(e) => {
            tracing::error!("export_dataset_csv: request failed: {:#?}", e);
            (StatusCode::INTERNAL_SERVER_ERROR, Body::from(e.to_string())).into_response()
        }
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dataset_names() {
        assert_eq!("kap".parse::<ExportDataset>().unwrap(), ExportDataset::Kap);
        assert_eq!("portfolio.csv".parse::<ExportDataset>().unwrap(), ExportDataset::Portfolio);
        assert!("nav".parse::<ExportDataset>().is_err());
    }

    #[test]
    fn empty_export_has_no_body() {
        let response = csv_response(None);
        assert_eq!(response.status(), StatusCode::NO_CONTENT);
    }

    #[test]
    fn export_is_sent_as_attachment() {
        let rows = vec![CsvRecord::new().with("a", 1)];
        let document = build_csv_document("tsgyo-kpi.csv", &rows, &CsvExportOptions::default());
        let response = csv_response(document);
        assert_eq!(response.status(), StatusCode::OK);
        let headers = response.headers();
        assert_eq!(headers["content-type"], "text/csv;charset=utf-8");
        assert_eq!(headers["content-disposition"], "attachment; filename=\"tsgyo-kpi.csv\"");
    }

    #[tokio::test]
    async fn unknown_dataset_is_not_found() {
        let response = export_dataset_csv(Path("nav".to_string())).await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
