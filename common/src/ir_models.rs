//! Investor-relations API models shared between frontend and backend.

use serde::{Deserialize, Serialize};


#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetaResponse {
    pub company_code: String,
    pub company_name: String,
    pub demo: bool,
}

/// A public disclosure published on KAP.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KapNotification {
    pub id: i64,
    pub company_code: String,
    pub kap_id: String,
    #[serde(rename = "type", default)]
    pub notification_type: Option<String>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub publish_datetime: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
}

impl KapNotification {
    pub fn kind(&self) -> KapNotificationKind {
        KapNotificationKind::classify(self.notification_type.as_deref().unwrap_or_default())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum KapNotificationKind {
    Financial,
    SpecialSituation,
    Other,
}

impl KapNotificationKind {
    /// Classify by the free-text notification type (`Finansal Rapor`, `Özel Durum`, ...).
    pub fn classify(notification_type: &str) -> Self {
        let lower = notification_type.to_lowercase();
        if lower.contains("finansal") {
            KapNotificationKind::Financial
        } else if lower.contains("özel") {
            KapNotificationKind::SpecialSituation
        } else {
            KapNotificationKind::Other
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KapSyncResult {
    pub status: String,
    pub count: u64,
}

/// Balance sheet and income figures for one reporting period, in TL.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FinancialKpi {
    pub id: i64,
    pub period: String,
    #[serde(default)]
    pub total_assets: Option<f64>,
    #[serde(default)]
    pub equity: Option<f64>,
    #[serde(default)]
    pub investment_properties: Option<f64>,
    #[serde(default)]
    pub net_rental_income: Option<f64>,
    #[serde(default)]
    pub net_profit: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PortfolioProperty {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub property_type: Option<String>,
    #[serde(default)]
    pub city: Option<String>,
    #[serde(default)]
    pub gross_area_sqm: Option<f64>,
    #[serde(default)]
    pub gla_sqm: Option<f64>,
    #[serde(default)]
    pub rooms: Option<i64>,
    #[serde(default)]
    pub valuation_value_tl: Option<f64>,
    #[serde(default)]
    pub valuation_date: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssistantQuestion {
    pub question: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssistantResponse {
    pub answer: String,
    #[serde(default)]
    pub sources: Option<Vec<KapNotification>>,
}

impl AssistantResponse {
    pub fn sources(&self) -> &[KapNotification] {
        self.sources.as_deref().unwrap_or_default()
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kap_notification_reads_type_field() {
        let json = r#"{
            "id": 3,
            "company_code": "TSGYO",
            "kap_id": "1495001",
            "type": "Finansal Rapor",
            "title": "2024/06 Ara Dönem Finansal Rapor",
            "publish_datetime": "2024-07-31 18:30:00",
            "url": "https://www.kap.org.tr/tr/Bildirim/1495001"
        }"#;
        let n: KapNotification = serde_json::from_str(json).unwrap();
        assert_eq!(n.notification_type.as_deref(), Some("Finansal Rapor"));
        assert_eq!(n.created_at, None);
        assert_eq!(n.kind(), KapNotificationKind::Financial);
    }

    #[test]
    fn kind_classification() {
        assert_eq!(KapNotificationKind::classify("Özel Durum"), KapNotificationKind::SpecialSituation);
        assert_eq!(KapNotificationKind::classify("FINANSAL RAPOR"), KapNotificationKind::Financial);
        assert_eq!(KapNotificationKind::classify("finansal rapor"), KapNotificationKind::Financial);
        assert_eq!(KapNotificationKind::classify("Faaliyet Raporu"), KapNotificationKind::Other);
        assert_eq!(KapNotificationKind::classify(""), KapNotificationKind::Other);
    }

    #[test]
    fn assistant_response_without_sources() {
        let r: AssistantResponse = serde_json::from_str(r#"{"answer": "Demo modundayım."}"#).unwrap();
        assert!(r.sources().is_empty());
    }

    #[test]
    fn kpi_with_null_figures() {
        let k: FinancialKpi = serde_json::from_str(r#"{"id": 1, "period": "2023/12", "equity": null}"#).unwrap();
        assert_eq!(k.equity, None);
        assert_eq!(k.total_assets, None);
    }
}
