//! Branding and copy for the dashboard.

use serde::{Deserialize, Serialize};

use crate::text_highlight::HighlightConfig;


#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssistantConfig {
    pub title: String,
    pub subtitle: String,
    pub planned_features: String,
    pub sample_questions: Vec<String>,
    pub highlight: HighlightConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompanyConfig {
    /// Exchange ticker, also the prefix of exported file names.
    pub code: String,
    pub name: String,
    pub tagline: String,
    pub logo_url: String,
    pub primary_color: String,
    pub footer_disclaimer: String,
    /// Property whose share is called out in the portfolio summary.
    pub featured_property: String,
    pub assistant: AssistantConfig,
}

impl CompanyConfig {
    /// `tsgyo-kap.csv`
    pub fn export_filename(&self, dataset: &str) -> String {
        format!("{}-{}.csv", self.code.to_lowercase(), dataset)
    }
}

impl Default for CompanyConfig {
    fn default() -> Self {
        Self {
            code: "TSGYO".to_string(),
            name: "TSKB GYO".to_string(),
            tagline: "Portföy & NAV kokpiti · Demo".to_string(),
            logo_url: "https://tskb-app.fra1.digitaloceanspaces.com/files/logo/logo_image_file_url_1/ff4705ef-29e9-4768-a05c-d53eb4872383.svg?1688739387131".to_string(),
            primary_color: "#881506".to_string(),
            footer_disclaimer: "Uygulamadaki veriler tanıtım amaçlıdır ve kamuya açık kaynaklardan yaklaşık olarak alınmıştır. Yatırım kararı için kullanılmamalıdır.".to_string(),
            featured_property: "Pendorya".to_string(),
            assistant: AssistantConfig {
                title: "IR Asistanı".to_string(),
                subtitle: "Portföy, NAV ve KAP sorularınıza hızlı yanıtlar. Yatırımcı ilişkileri ve yönetim ekibini desteklemek için tasarlanmış, kurum içi bir asistan.".to_string(),
                planned_features: "Planlanan geliştirmeler: canlı KAP entegrasyonu, iç raporlardan tam metin arama ve OpenAI orkestrasyonuyla gelişmiş senaryo analizleri.".to_string(),
                sample_questions: vec![
                    "Portföy toplam değeri nedir?".to_string(),
                    "Pendorya AVM portföy içindeki payı nedir?".to_string(),
                    "Divan Adana oteli için özet verir misin?".to_string(),
                    "Son özkaynak değeri ve NAV ne durumda?".to_string(),
                ],
                highlight: HighlightConfig::default(),
            },
        }
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn export_filename_uses_lowercase_code() {
        let config = CompanyConfig::default();
        assert_eq!(config.export_filename("kap"), "tsgyo-kap.csv");
    }
}
