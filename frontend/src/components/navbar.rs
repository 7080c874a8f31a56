//! Header with tab navigation, page outlet and footer.

use common::company_config::CompanyConfig;
use dioxus::prelude::*;
use dioxus_free_icons::icons::md_action_icons::{MdDashboard, MdList};
use dioxus_free_icons::icons::md_communication_icons::MdChat;
use dioxus_free_icons::Icon;

use crate::api::ir_api::get_meta;
use crate::components::error_boundary::GlobalErrorBoundary;
use crate::routes::Route;


/// Shared layout for every page.
#[component]
pub fn Navbar() -> Element {
    let config = use_context::<CompanyConfig>();
    rsx! {
        div {
            id: "x-layout",
            style: "
                display: flex;
                flex-direction: column;
                min-height: 100vh;
                background: #F9FAFB;
            ",

            header {
                id: "x-header",
                style: "
                    position: sticky;
                    top: 0;
                    z-index: 10;
                    background-color: {config.primary_color};
                    color: white;
                    box-shadow: 0 1px 3px rgba(0,0,0,0.15);
                ",
                div {
                    style: "
                        display: flex;
                        flex-direction: row;
                        align-items: center;
                        justify-content: space-between;
                        max-width: 1152px;
                        height: 80px;
                        margin: 0 auto;
                        padding: 0 16px;
                    ",
                    NavbarBrand {}
                    NavbarTabs {}
                }
            }

            main {
                id: "x-page-container",
                style: "
                    flex: 1;
                    width: 100%;
                    max-width: 1152px;
                    margin: 0 auto;
                    padding: 32px 16px;
                    box-sizing: border-box;
                ",
                GlobalErrorBoundary {
                    boundary_name: "Navbar".to_string(),
                    Outlet::<Route> {}
                }
            }

            NavbarFooter {}
        }
    }
}

#[component]
fn NavbarBrand() -> Element {
    let config = use_context::<CompanyConfig>();
    rsx! {
        Link {
            to: Route::DashboardPage {},
            style: "display: flex; align-items: center; gap: 12px; color: white; text-decoration: none;",
            img {
                src: "{config.logo_url}",
                alt: "{config.name}",
                style: "height: 48px; width: auto; object-fit: contain;",
            }
            div {
                div { style: "font-size: 18px; font-weight: 700; letter-spacing: 0.02em;", "{config.name}" }
                div { style: "font-size: 12px; color: rgba(255,255,255,0.8);", "{config.tagline}" }
            }
        }
    }
}

#[component]
fn NavbarTabs() -> Element {
    let route = use_route::<Route>();
    rsx! {
        nav {
            style: "
                display: flex;
                flex-direction: row;
                gap: 4px;
                padding: 4px;
                border-radius: 8px;
                background: rgba(255,255,255,0.05);
            ",
            TabLink {
                to: Route::DashboardPage {},
                active: matches!(route, Route::DashboardPage {}),
                label: "Özet",
                Icon { icon: MdDashboard, style: "width: 16px; height: 16px;" }
            }
            TabLink {
                to: Route::KapPage {},
                active: matches!(route, Route::KapPage {}),
                label: "KAP Bildirimleri",
                Icon { icon: MdList, style: "width: 16px; height: 16px;" }
            }
            TabLink {
                to: Route::AssistantPage {},
                active: matches!(route, Route::AssistantPage {}),
                label: "IR Asistanı",
                Icon { icon: MdChat, style: "width: 16px; height: 16px;" }
            }
        }
    }
}

#[component]
fn TabLink(to: Route, active: bool, label: String, children: Element) -> Element {
    let background = if active { "rgba(255,255,255,0.15)" } else { "transparent" };
    rsx! {
        Link {
            to: to,
            class: "ir-tab-link",
            style: "
                display: flex;
                align-items: center;
                gap: 8px;
                padding: 8px 16px;
                border-radius: 8px;
                font-size: 14px;
                font-weight: 500;
                color: white;
                text-decoration: none;
                background: {background};
            ",
            {children}
            span { "{label}" }
        }
    }
}

#[component]
fn NavbarFooter() -> Element {
    let config = use_context::<CompanyConfig>();
    let meta = use_resource(|| get_meta());
    // assume demo data until the API says otherwise
    let demo_mode = match meta.read().as_ref() {
        Some(Ok(meta)) => meta.demo,
        _ => true,
    };
    rsx! {
        footer {
            style: "
                background: white;
                border-top: 1px solid #E5E7EB;
                padding: 24px 16px;
                text-align: center;
                color: #64748B;
                font-size: 14px;
            ",
            "© 2025 {config.name} Demo."
            if demo_mode {
                " {config.footer_disclaimer}"
            }
        }
    }
}
