//! Error boundary component for rendering failures.

use dioxus::prelude::*;

#[component]
pub fn GlobalErrorBoundary(boundary_name: ReadSignal<String>, children: Element) -> Element {
    rsx! {
        ErrorBoundary {
            handle_error: move |_err: ErrorContext| {
                rsx! {
                    div {
                        style: "max-width: 900px; margin: 32px auto; padding: 24px; border: 1px solid #FCA5A5; border-radius: 12px; background: #FEF2F2;",
                        h1 {
                            style: "color: #B91C1C; font-size: 28px; margin: 0 0 8px 0;",
                            "Beklenmeyen bir hata oluştu",
                        }
                        p {
                            style: "color: #7F1D1D; font-size: 14px;",
                            "Bölüm: {boundary_name}"
                        }
                        a {
                            href: "/",
                            style: "color: #1D4ED8; font-size: 14px;",
                            "Özet sayfasına dön"
                        }
                        pre {
                            style: "color: #111827; background: white; border: 1px solid #FECACA; padding: 10px; border-radius: 8px; margin-top: 12px; text-wrap: auto;",
                            "{_err:#?}"
                        }
                    }
                }
            },
            children
        }
    }
}

#[component]
pub fn ComponentErrorBoundary(children: Element) -> Element {
    rsx! {
        ErrorBoundary {
            handle_error: |_err: ErrorContext| {
                let error = _err.error();
                let error_txt = if let Some(err) = error {
                    format!("{:#?}", err.0)
                } else {
                    "Bilinmeyen hata".to_string()
                };
                rsx! {
                    ComponentErrorDisplay {
                        error_txt,
                        button {
                            style: "font-size: 13px; padding: 6px 14px; border: 1px solid #E5E7EB; border-radius: 8px; background: white; cursor: pointer;",
                            onclick: move |_| {
                                _err.clear_errors();
                            },
                            "Tekrar dene"
                        }
                    }
                }
            },
            div {
                width: "100%",
                {children}
            }
        }
    }
}

/// Inline error banner, also used for failed server calls.
#[component]
pub fn ComponentErrorDisplay(error_txt: ReadSignal<String>, children: Element) -> Element {
    rsx! {
        div {
            style: "
                display: flex;
                flex-direction: row;
                align-items: center;
                gap: 12px;
                background: #FEF2F2;
                color: #B91C1C;
                padding: 14px 16px;
                border-radius: 10px;
                font-size: 14px;
            ",
            span { style: "flex: 1;", "{error_txt}" }
            {children}
        }
    }
}
