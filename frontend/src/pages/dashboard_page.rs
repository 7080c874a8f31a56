//! Financial summary: KPI cards, trend chart, recommendations and portfolio.

use common::{
    company_config::CompanyConfig,
    format::{format_percent, format_tl},
    ir_models::FinancialKpi,
    kpi_analysis::{latest_kpi, KpiRatios},
};
use dioxus::prelude::*;

use crate::{
    api::ir_api::get_kpis,
    browser_download::to_csv_records,
    components::{
        csv_export_button::CsvExportButton,
        error_boundary::ComponentErrorDisplay,
        kpi_card::KpiCard,
        page_section::{EmptyState, PageSection},
        portfolio_section::PortfolioSection,
        suspend_boundary::{LoadingIndicator, SuspendWrapper},
        trend_chart::TrendChart,
    },
};


/// Dashboard page
#[component]
pub fn DashboardPage() -> Element {
    let config = use_context::<CompanyConfig>();
    let kpis = use_resource(|| get_kpis());
    let kpis = match kpis.read().clone() {
        Some(Ok(kpis)) => kpis,
        Some(Err(e)) => {
            dioxus::logger::tracing::error!("Failed to load KPIs: {e}");
            return rsx! {
                Title { "{config.name} - Finansal Özet" }
                ComponentErrorDisplay { error_txt: format!("Finansal veriler alınamadı: {e}") }
            };
        }
        None => {
            return rsx! {
                Title { "{config.name} - Finansal Özet" }
                LoadingIndicator { message: "Finansal veriler yükleniyor..." }
            };
        }
    };
    let Some(latest) = latest_kpi(&kpis).cloned() else {
        return rsx! {
            Title { "{config.name} - Finansal Özet" }
            EmptyState { message: "Gösterilecek finansal veri bulunamadı." }
        };
    };
    let records = to_csv_records(&kpis);

    rsx! {
        Title { "{config.name} - Finansal Özet" }
        div {
            style: "
                display: flex;
                flex-direction: row;
                flex-wrap: wrap;
                align-items: center;
                justify-content: space-between;
                gap: 12px;
                margin-bottom: 24px;
            ",
            div {
                style: "display: flex; flex-direction: row; align-items: center; gap: 12px;",
                h1 { style: "font-size: 24px; font-weight: 700; color: #0F172A; margin: 0;", "Finansal Özet" }
                CsvExportButton {
                    label: "KPI'ları Excel'e aktar",
                    filename: config.export_filename("kpi"),
                    records,
                }
            }
            span {
                style: "
                    background: #DBEAFE;
                    color: #1E40AF;
                    font-size: 12px;
                    font-weight: 600;
                    padding: 2px 10px;
                    border-radius: 4px;
                ",
                "Dönem: {latest.period}"
            }
        }
        KpiCards { latest: latest.clone() }
        PageSection {
            title: "Büyüme Trendi (Varlıklar vs Özkaynak)",
            TrendChart { kpis }
        }
        Recommendations { latest }
        SuspendWrapper {
            PortfolioSection {}
        }
    }
}

#[component]
fn KpiCards(latest: FinancialKpi) -> Element {
    rsx! {
        div {
            style: "
                display: grid;
                grid-template-columns: repeat(auto-fill, minmax(200px, 1fr));
                gap: 16px;
                margin-bottom: 24px;
            ",
            KpiCard { label: "Toplam Varlıklar", value: format_tl(latest.total_assets) }
            KpiCard { label: "Özkaynaklar", value: format_tl(latest.equity) }
            KpiCard { label: "Yatırım Amaçlı Gayrimenkuller", value: format_tl(latest.investment_properties) }
            KpiCard { label: "Net Kâr", value: format_tl(latest.net_profit) }
            KpiCard {
                label: "Özkaynak / Toplam Varlık (%)",
                value: format_percent(latest.equity, latest.total_assets),
            }
            KpiCard {
                label: "Yatırım Amaçlı GM / Toplam Varlık (%)",
                value: format_percent(latest.investment_properties, latest.total_assets),
                hint: format!("Net kira geliri: {}", format_tl(latest.net_rental_income)),
            }
        }
    }
}

#[component]
fn Recommendations(latest: FinancialKpi) -> Element {
    let ratios = KpiRatios::from_kpi(&latest);
    let equity_comment = ratios.equity_strength().commentary();
    let investment_comment = match ratios.investment_properties_to_assets {
        Some(r) => format!(
            "Yatırım amaçlı gayrimenkullerin toplam varlıklara oranı yaklaşık {:.1} %. Portföyün varlık kompozisyonu ağırlıklı olarak gayrimenkullerde yoğunlaşmış durumda.",
            r * 100.0
        ),
        None => "Yatırım amaçlı gayrimenkul oranı hesaplanamadı.".to_string(),
    };
    rsx! {
        PageSection {
            title: "Öneri Merkezi (beta)",
            actions: rsx! {
                span {
                    style: "
                        font-size: 12px;
                        padding: 2px 8px;
                        border-radius: 999px;
                        background: #EEF2FF;
                        color: #4338CA;
                        border: 1px solid #E0E7FF;
                    ",
                    "Deneme"
                }
            },
            ul {
                style: "margin: 0; padding-left: 20px; font-size: 14px; color: #334155; line-height: 1.6;",
                li { "{equity_comment}" }
                li { "{investment_comment}" }
            }
            p {
                style: "font-size: 12px; color: #6B7280; margin: 12px 0 0 0;",
                "Bu alan, tam sürümde KAP ve finansal verilerden beslenen AI tabanlı önerilerle dinamik hale gelecektir."
            }
        }
    }
}
