//! Ratios and summaries derived from KPI series and the property portfolio.

use serde::{Deserialize, Serialize};

use crate::ir_models::{FinancialKpi, PortfolioProperty};

const LOW_EQUITY_RATIO: f64 = 0.35;
const BALANCED_EQUITY_RATIO: f64 = 0.55;
const CHART_HEADROOM: f64 = 1.2;

/// The API returns periods in ascending order, so the last one is current.
pub fn latest_kpi(kpis: &[FinancialKpi]) -> Option<&FinancialKpi> {
    kpis.last()
}

pub fn ratio(numerator: Option<f64>, denominator: Option<f64>) -> Option<f64> {
    match (numerator, denominator) {
        (Some(n), Some(d)) if d != 0.0 => Some(n / d),
        _ => None,
    }
}

/// Equity to total assets, bucketed for the recommendation panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EquityStrength {
    Missing,
    Low,
    Balanced,
    Strong,
}

impl EquityStrength {
    pub fn classify(equity_ratio: Option<f64>) -> Self {
        match equity_ratio {
            None => EquityStrength::Missing,
            Some(r) if r < LOW_EQUITY_RATIO => EquityStrength::Low,
            Some(r) if r <= BALANCED_EQUITY_RATIO => EquityStrength::Balanced,
            Some(_) => EquityStrength::Strong,
        }
    }

    pub fn commentary(&self) -> &'static str {
        match self {
            EquityStrength::Missing => "Özkaynak oranı hesaplanamadı.",
            EquityStrength::Low => {
                "Özkaynak / toplam varlık oranı görece düşük, kaldıraç seviyesi dikkatle izlenmelidir."
            }
            EquityStrength::Balanced => "Özkaynak / toplam varlık oranı dengeli bir seviyede.",
            EquityStrength::Strong => {
                "Özkaynak / toplam varlık oranı güçlü bir sermaye yapısına işaret ediyor."
            }
        }
    }
}

/// Headline ratios of the latest period.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct KpiRatios {
    pub equity_to_assets: Option<f64>,
    pub investment_properties_to_assets: Option<f64>,
}

impl KpiRatios {
    pub fn from_kpi(kpi: &FinancialKpi) -> Self {
        Self {
            equity_to_assets: ratio(kpi.equity, kpi.total_assets),
            investment_properties_to_assets: ratio(kpi.investment_properties, kpi.total_assets),
        }
    }

    pub fn equity_strength(&self) -> EquityStrength {
        EquityStrength::classify(self.equity_to_assets)
    }
}

/// Upper bound of the trend chart's y axis: the largest asset or equity
/// figure plus 20% headroom. `None` lets the chart pick its own scale.
pub fn chart_y_max(kpis: &[FinancialKpi]) -> Option<f64> {
    let max = kpis
        .iter()
        .flat_map(|k| [k.total_assets, k.equity])
        .flatten()
        .fold(0.0_f64, f64::max);
    if max > 0.0 { Some(max * CHART_HEADROOM) } else { None }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PortfolioSummary {
    pub total_valuation_tl: f64,
    pub featured: Option<PortfolioProperty>,
    /// Featured property's share of the total valuation, in percent.
    pub featured_share_percent: Option<f64>,
}

impl PortfolioSummary {
    /// Properties without a valuation count as zero. `featured_name` is
    /// matched case-insensitively as a substring of the property name.
    pub fn from_properties(properties: &[PortfolioProperty], featured_name: &str) -> Self {
        let total_valuation_tl: f64 = properties.iter().filter_map(|p| p.valuation_value_tl).sum();
        let needle = featured_name.to_lowercase();
        let featured = properties
            .iter()
            .find(|p| !needle.is_empty() && p.name.to_lowercase().contains(&needle))
            .cloned();
        let featured_share_percent = match featured.as_ref().and_then(|p| p.valuation_value_tl) {
            Some(v) if total_valuation_tl > 0.0 && v != 0.0 => Some(v / total_valuation_tl * 100.0),
            _ => None,
        };
        Self { total_valuation_tl, featured, featured_share_percent }
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    fn kpi(period: &str, total_assets: Option<f64>, equity: Option<f64>, ip: Option<f64>) -> FinancialKpi {
        FinancialKpi {
            id: 0,
            period: period.to_string(),
            total_assets,
            equity,
            investment_properties: ip,
            net_rental_income: None,
            net_profit: None,
        }
    }

    fn property(name: &str, valuation: Option<f64>) -> PortfolioProperty {
        PortfolioProperty {
            id: 0,
            name: name.to_string(),
            property_type: None,
            city: None,
            gross_area_sqm: None,
            gla_sqm: None,
            rooms: None,
            valuation_value_tl: valuation,
            valuation_date: None,
        }
    }

    #[test]
    fn equity_strength_thresholds() {
        assert_eq!(EquityStrength::classify(None), EquityStrength::Missing);
        assert_eq!(EquityStrength::classify(Some(0.2)), EquityStrength::Low);
        assert_eq!(EquityStrength::classify(Some(0.35)), EquityStrength::Balanced);
        assert_eq!(EquityStrength::classify(Some(0.55)), EquityStrength::Balanced);
        assert_eq!(EquityStrength::classify(Some(0.8)), EquityStrength::Strong);
    }

    #[test]
    fn ratios_of_latest_period() {
        let kpis = vec![
            kpi("2023/12", Some(100.0), Some(30.0), Some(80.0)),
            kpi("2024/12", Some(200.0), Some(120.0), None),
        ];
        let latest = latest_kpi(&kpis).unwrap();
        assert_eq!(latest.period, "2024/12");
        let ratios = KpiRatios::from_kpi(latest);
        assert_eq!(ratios.equity_to_assets, Some(0.6));
        assert_eq!(ratios.investment_properties_to_assets, None);
        assert_eq!(ratios.equity_strength(), EquityStrength::Strong);
    }

    #[test]
    fn ratio_with_zero_denominator() {
        assert_eq!(ratio(Some(5.0), Some(0.0)), None);
        assert_eq!(ratio(Some(5.0), None), None);
    }

    #[test]
    fn chart_headroom() {
        let kpis = vec![kpi("a", Some(100.0), Some(40.0), None), kpi("b", None, Some(150.0), None)];
        assert_eq!(chart_y_max(&kpis), Some(180.0));
        assert_eq!(chart_y_max(&[]), None);
    }

    #[test]
    fn portfolio_summary_with_featured_share() {
        let props = vec![
            property("Pendorya AVM", Some(250.0)),
            property("Divan Adana Oteli", Some(750.0)),
            property("Arsa", None),
        ];
        let summary = PortfolioSummary::from_properties(&props, "pendorya");
        assert_eq!(summary.total_valuation_tl, 1000.0);
        assert_eq!(summary.featured.as_ref().map(|p| p.name.as_str()), Some("Pendorya AVM"));
        assert_eq!(summary.featured_share_percent, Some(25.0));
    }

    #[test]
    fn portfolio_summary_without_valuations() {
        let props = vec![property("Pendorya AVM", None)];
        let summary = PortfolioSummary::from_properties(&props, "Pendorya");
        assert_eq!(summary.total_valuation_tl, 0.0);
        assert!(summary.featured.is_some());
        assert_eq!(summary.featured_share_percent, None);
    }
}
