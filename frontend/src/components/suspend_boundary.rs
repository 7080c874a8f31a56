use dioxus::prelude::*;

use crate::components::error_boundary::ComponentErrorBoundary;

#[component]
pub fn SuspendWrapper(children: Element) -> Element {
    rsx! {
        SuspenseBoundary {
            fallback: |_s: SuspenseContext| rsx! {
                LoadingIndicator { message: "Yükleniyor..." }
            },
            ComponentErrorBoundary {
                children
            }
        }
    }
}

#[component]
pub fn LoadingIndicator(#[props(default = "Yükleniyor...".to_string())] message: String) -> Element {
    rsx! {
        div {
            style: "padding: 32px; text-align: center; color: #6B7280; font-size: 14px;",
            "{message}"
        }
    }
}
