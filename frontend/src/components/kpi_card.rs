use dioxus::prelude::*;

/// A single headline figure on the dashboard.
#[component]
pub fn KpiCard(label: String, value: String, #[props(default)] hint: String) -> Element {
    rsx! {
        div {
            style: "
                display: flex;
                flex-direction: column;
                gap: 6px;
                padding: 16px;
                border: 1px solid #E5E7EB;
                border-radius: 12px;
                background: white;
                min-width: 0;
            ",
            span {
                style: "font-size: 12px; font-weight: 500; color: #64748B; text-transform: uppercase; letter-spacing: 0.04em;",
                "{label}"
            }
            span {
                style: "font-size: 22px; font-weight: 700; color: #0F172A; overflow: hidden; text-overflow: ellipsis; white-space: nowrap;",
                "{value}"
            }
            if !hint.is_empty() {
                span {
                    style: "font-size: 12px; color: #94A3B8;",
                    "{hint}"
                }
            }
        }
    }
}
