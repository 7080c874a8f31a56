use common::company_config::CompanyConfig;
use dioxus::prelude::*;

use crate::components::error_boundary::GlobalErrorBoundary;
use crate::routes::Route;
const MAIN_CSS: Asset = asset!("/assets/main.css");

#[component]
pub fn App() -> Element {
    use_context_provider(CompanyConfig::default);
    rsx! {
        document::Link { rel: "preconnect", href: "https://fonts.googleapis.com" }
        document::Link { rel: "preconnect", href: "https://fonts.gstatic.com" }
        document::Link { rel: "stylesheet", href: "https://fonts.googleapis.com/css2?family=Inter:wght@400;500;600;700&display=swap" }

        document::Link { rel: "stylesheet", href: MAIN_CSS }
        GlobalErrorBoundary {
            boundary_name: "App".to_string(),
            Router::<Route> {}
        }
    }
}
