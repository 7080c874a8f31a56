//! Card-like section wrapper used by every page.

use dioxus::prelude::*;

#[component]
pub fn PageSection(
    title: String,
    #[props(default)] subtitle: String,
    #[props(default = VNode::empty())] actions: Element,
    children: Element,
) -> Element {
    rsx! {
        section {
            style: "
                background: white;
                border: 1px solid #E5E7EB;
                border-radius: 12px;
                box-shadow: 0 1px 2px rgba(0,0,0,0.04);
                padding: 20px 24px;
                margin-bottom: 24px;
            ",
            div {
                style: "
                    display: flex;
                    flex-direction: row;
                    align-items: flex-start;
                    justify-content: space-between;
                    gap: 16px;
                    margin-bottom: 16px;
                ",
                div {
                    h2 {
                        style: "font-size: 18px; font-weight: 600; color: #0F172A; margin: 0;",
                        "{title}"
                    }
                    if !subtitle.is_empty() {
                        p {
                            style: "font-size: 13px; color: #64748B; margin: 4px 0 0 0;",
                            "{subtitle}"
                        }
                    }
                }
                div {
                    style: "display: flex; flex-direction: row; align-items: center; gap: 8px; flex-shrink: 0;",
                    {actions}
                }
            }
            {children}
        }
    }
}

/// Dashed placeholder for sections without data.
#[component]
pub fn EmptyState(message: String, children: Element) -> Element {
    rsx! {
        div {
            style: "
                display: flex;
                flex-direction: column;
                align-items: center;
                gap: 12px;
                padding: 32px 16px;
                border: 1px dashed #CBD5E1;
                border-radius: 12px;
                color: #64748B;
                font-size: 14px;
                text-align: center;
            ",
            p { style: "margin: 0;", "{message}" }
            {children}
        }
    }
}
