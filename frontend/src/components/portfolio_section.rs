//! Property portfolio table with valuation summary.

use common::{
    company_config::CompanyConfig,
    format::{format_area, format_date, format_number, format_tl, NumberLocale, MISSING_VALUE},
    ir_models::PortfolioProperty,
    kpi_analysis::PortfolioSummary,
};
use dioxus::prelude::*;

use crate::{
    api::ir_api::get_portfolio,
    browser_download::to_csv_records,
    components::{
        csv_export_button::CsvExportButton,
        error_boundary::ComponentErrorDisplay,
        page_section::{EmptyState, PageSection},
        suspend_boundary::LoadingIndicator,
    },
};

#[component]
pub fn PortfolioSection() -> Element {
    let config = use_context::<CompanyConfig>();
    let portfolio = use_resource(|| get_portfolio());
    let properties = match portfolio.read().clone() {
        Some(Ok(properties)) => properties,
        Some(Err(e)) => {
            return rsx! {
                PageSection {
                    title: "Portföy",
                    ComponentErrorDisplay {
                        error_txt: format!("Portföy verisi alınamadı: {e}"),
                    }
                }
            };
        }
        None => {
            return rsx! {
                PageSection {
                    title: "Portföy",
                    LoadingIndicator { message: "Portföy yükleniyor..." }
                }
            };
        }
    };

    let summary = PortfolioSummary::from_properties(&properties, &config.featured_property);
    let records = to_csv_records(&properties);
    let filename = config.export_filename("portfolio");

    rsx! {
        PageSection {
            title: "Portföy",
            subtitle: format!("{} varlık · Toplam değer {}", properties.len(), format_tl(Some(summary.total_valuation_tl))),
            actions: rsx! {
                CsvExportButton { filename, records }
            },
            if properties.is_empty() {
                EmptyState { message: "Portföy verisi bulunamadı." }
            } else {
                FeaturedPropertyBadge { summary: summary.clone() }
                PortfolioTable { properties }
            }
        }
    }
}

#[component]
fn FeaturedPropertyBadge(summary: PortfolioSummary) -> Element {
    let (Some(featured), Some(share)) = (summary.featured, summary.featured_share_percent) else {
        return rsx! {};
    };
    let share = format_number(share, &NumberLocale::turkish().with_max_fraction_digits(1));
    rsx! {
        div {
            style: "
                display: inline-flex;
                align-items: center;
                gap: 8px;
                margin-bottom: 16px;
                padding: 6px 12px;
                border-radius: 999px;
                background: #FEF2F2;
                color: #881506;
                font-size: 13px;
                font-weight: 500;
            ",
            "{featured.name} portföy değerinin %{share}'ini oluşturuyor"
        }
    }
}

#[component]
fn PortfolioTable(properties: Vec<PortfolioProperty>) -> Element {
    let rows = properties.into_iter().map(|p| {
        let property_type = p.property_type.unwrap_or_else(|| MISSING_VALUE.to_string());
        let city = p.city.unwrap_or_else(|| MISSING_VALUE.to_string());
        let rooms = p.rooms.map(|r| r.to_string()).unwrap_or_else(|| MISSING_VALUE.to_string());
        let gross_area = format_area(p.gross_area_sqm);
        let gla = format_area(p.gla_sqm);
        let valuation = format_tl(p.valuation_value_tl);
        let valuation_date = format_date(p.valuation_date.as_deref());
        rsx! {
            tr {
                class: "ir-table-row",
                td { style: "{CELL_STYLE} font-weight: 500; color: #0F172A;", "{p.name}" }
                td { style: CELL_STYLE, "{property_type}" }
                td { style: CELL_STYLE, "{city}" }
                td { style: "{CELL_STYLE} text-align: right;", "{gross_area}" }
                td { style: "{CELL_STYLE} text-align: right;", "{gla}" }
                td { style: "{CELL_STYLE} text-align: right;", "{rooms}" }
                td { style: "{CELL_STYLE} text-align: right;", "{valuation}" }
                td { style: CELL_STYLE, "{valuation_date}" }
            }
        }
    }).collect::<Vec<_>>();
    rsx! {
        div {
            style: "overflow-x: auto;",
            table {
                style: "width: 100%; border-collapse: collapse; font-size: 13px;",
                thead {
                    tr {
                        for header in ["Varlık", "Tür", "Şehir", "Brüt alan", "Kiralanabilir alan", "Oda", "Ekspertiz değeri", "Ekspertiz tarihi"] {
                            th { style: HEADER_STYLE, "{header}" }
                        }
                    }
                }
                tbody {
                    {rows.into_iter()}
                }
            }
        }
    }
}

const CELL_STYLE: &str = "padding: 8px 12px; border-bottom: 1px solid #F1F5F9; color: #334155;";
const HEADER_STYLE: &str = "padding: 8px 12px; border-bottom: 1px solid #E5E7EB; text-align: left; font-weight: 600; color: #64748B; white-space: nowrap;";
