use common::text_highlight::HighlightTextSpan;
use dioxus::prelude::*;

/// Renders highlight spans as a run of inline `span`s; marked spans get a
/// tinted background.
#[component]
pub fn HighlightedText(spans: Vec<HighlightTextSpan>) -> Element {
    rsx! {
        span {
            style: "white-space: pre-wrap;",
            {render_highlight_text_span(spans)}
        }
    }
}

fn render_highlight_text_span(spans: Vec<HighlightTextSpan>) -> Element {
    let spans = spans.into_iter().map(|i| {
        if i.is_highlighted {
            rsx! {
                span {
                    style: "background-color: #FEF08A; color: #0F172A; border-radius: 2px; padding: 0 1px;",
                    "{i.text}"
                }
            }
        } else {
            rsx! {
                span {
                    "{i.text}"
                }
            }
        }
    }).collect::<Vec<_>>();
    rsx! {
        {spans.into_iter()}
    }
}
