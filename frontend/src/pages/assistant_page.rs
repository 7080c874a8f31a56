//! IR assistant chat with keyword-highlighted answers.

use common::{
    company_config::CompanyConfig,
    ir_models::KapNotification,
    text_highlight::{highlight_keywords, HighlightConfig},
};
use dioxus::{logger::tracing, prelude::*};
use dioxus_free_icons::{Icon, icons::{md_action_icons::{MdDescription, MdQuestionAnswer}, md_communication_icons::MdChat, md_social_icons::MdPerson}};

use crate::{
    api::ir_api::ask_assistant,
    components::highlighted_text::HighlightedText,
    data_definitions::chat_message::ChatMessage,
};


/// Assistant page
#[component]
pub fn AssistantPage() -> Element {
    let config = use_context::<CompanyConfig>();
    let mut question = use_signal(|| "".to_string());
    let mut messages = use_signal(Vec::<ChatMessage>::new);
    let mut loading = use_signal(|| false);
    let mut next_id = use_signal(|| 0_u64);

    let ask = use_callback(move |raw: String| {
        let trimmed = raw.trim().to_string();
        if trimmed.is_empty() || *loading.read() {
            return;
        }
        let user_id = *next_id.read();
        next_id.set(user_id + 2);
        messages.write().push(ChatMessage::user(user_id, trimmed.clone()));
        question.set("".to_string());
        loading.set(true);
        spawn(async move {
            let reply = match ask_assistant(trimmed).await {
                Ok(answer) => ChatMessage::assistant(user_id + 1, answer),
                Err(e) => {
                    tracing::error!("Assistant request failed: {e}");
                    ChatMessage::assistant_error(user_id + 1)
                }
            };
            messages.write().push(reply);
            loading.set(false);
        });
    });

    let assistant = config.assistant.clone();
    let is_loading = *loading.read();
    let can_send = !is_loading && !question.read().trim().is_empty();
    let send_opacity = if can_send { "1" } else { "0.6" };

    rsx! {
        Title { "{config.name} - {assistant.title}" }
        div {
            style: "display: flex; flex-direction: column; gap: 12px; padding-bottom: 40px;",
            div {
                h1 { style: "font-size: 24px; font-weight: 700; color: #0F172A; margin: 0;", "{assistant.title}" }
                p { style: "font-size: 14px; color: #64748B; margin: 4px 0 0 0;", "{assistant.subtitle}" }
            }
            p { style: "font-size: 12px; color: #94A3B8; max-width: 768px; margin: 0;", "{assistant.planned_features}" }

            section {
                style: "
                    background: #0F172A;
                    color: white;
                    border-radius: 16px;
                    padding: 24px;
                    min-height: 400px;
                ",
                AssistantIntro { company_name: config.name.clone() }
                div {
                    style: "
                        display: flex;
                        flex-direction: column;
                        min-height: 430px;
                        padding: 24px;
                        border-radius: 12px;
                        background: rgba(255,255,255,0.05);
                    ",
                    if messages.read().is_empty() {
                        SampleQuestionList { questions: assistant.sample_questions.clone() }
                    } else {
                        div {
                            style: "flex: 1; display: flex; flex-direction: column; gap: 16px; max-height: 320px; overflow-y: auto; padding-right: 4px;",
                            for message in messages.read().iter().cloned() {
                                ChatBubble { key: "{message.id}", message, highlight: assistant.highlight.clone() }
                            }
                        }
                    }

                    if is_loading {
                        div {
                            style: "display: flex; align-items: center; gap: 8px; margin-top: 12px; font-size: 11px; color: #CBD5E1;",
                            span { class: "ir-pulse", style: "display: inline-flex; width: 8px; height: 8px; border-radius: 999px; background: #38BDF8;" }
                            span { "Asistan yanıt hazırlıyor…" }
                        }
                    }

                    div {
                        style: "display: flex; flex-direction: row; gap: 8px; margin-top: 16px;",
                        input {
                            r#type: "text",
                            value: "{question}",
                            placeholder: "Sorunuzu buraya yazın...",
                            disabled: is_loading,
                            style: "
                                flex: 1;
                                font-size: 14px;
                                border-radius: 8px;
                                border: 1px solid #E2E8F0;
                                padding: 8px 12px;
                                outline: none;
                                background: white;
                                color: #0F172A;
                            ",
                            oninput: move |e| {
                                question.set(e.value());
                            },
                            onkeypress: move |e| {
                                if e.key() == Key::Enter {
                                    e.prevent_default();
                                    let q = question.read().clone();
                                    ask(q);
                                }
                            },
                        }
                        button {
                            disabled: !can_send,
                            title: "Gönder",
                            style: "
                                display: inline-flex;
                                align-items: center;
                                justify-content: center;
                                padding: 8px 16px;
                                border: none;
                                border-radius: 8px;
                                background: #0284C7;
                                color: white;
                                cursor: pointer;
                                opacity: {send_opacity};
                            ",
                            onclick: move |_| {
                                let q = question.read().clone();
                                ask(q);
                            },
                            Icon { icon: MdChat, style: "width: 16px; height: 16px;" }
                        }
                    }

                    div {
                        style: "display: flex; flex-wrap: wrap; gap: 8px; margin-top: 8px;",
                        for sample in assistant.sample_questions.iter().cloned() {
                            button {
                                key: "{sample}",
                                class: "ir-hover-shadow-background",
                                style: "
                                    font-size: 11px;
                                    padding: 4px 12px;
                                    border-radius: 999px;
                                    border: 1px solid #E2E8F0;
                                    background: rgba(255,255,255,0.8);
                                    color: #334155;
                                    cursor: pointer;
                                ",
                                onclick: {
                                    let sample = sample.clone();
                                    move |_| ask(sample.clone())
                                },
                                "{sample}"
                            }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn AssistantIntro(company_name: String) -> Element {
    rsx! {
        div {
            style: "display: flex; align-items: flex-start; gap: 12px; margin-bottom: 20px;",
            div {
                style: "width: 40px; height: 40px; border-radius: 999px; background: #1E293B; display: flex; align-items: center; justify-content: center; flex-shrink: 0; color: #7DD3FC;",
                Icon { icon: MdQuestionAnswer, style: "width: 20px; height: 20px;" }
            }
            div {
                h3 { style: "font-size: 16px; font-weight: 600; margin: 0;", "Yatırımcı İlişkileri Asistanı" }
                p {
                    style: "margin: 4px 0 0 0; font-size: 12px; color: #CBD5E1; line-height: 1.6;",
                    "{company_name} hakkında portföy, NAV, KAP bildirimleri ve temel finansal sorularınızı doğal dilde sorabilirsiniz. Yanıtlar, demo amaçlı veri seti üzerinden üretilmektedir."
                }
            }
        }
    }
}

#[component]
fn SampleQuestionList(questions: Vec<String>) -> Element {
    rsx! {
        div {
            style: "flex: 1; display: flex; flex-direction: column; align-items: center; justify-content: center; gap: 12px; text-align: center; color: #E2E8F0;",
            div { style: "font-size: 14px; font-weight: 500;", "Örnek sorular:" }
            div {
                style: "font-size: 12px;",
                for q in questions {
                    p { style: "margin: 4px 0;", "• {q}" }
                }
            }
        }
    }
}

#[component]
fn ChatBubble(message: ChatMessage, highlight: HighlightConfig) -> Element {
    let is_user = message.is_user();
    let justify = if is_user { "flex-end" } else { "flex-start" };
    let (background, color, corner) = if is_user {
        ("#0284C7", "white", "border-bottom-right-radius: 2px;")
    } else {
        ("rgba(255,255,255,0.95)", "#0F172A", "border-bottom-left-radius: 2px;")
    };
    let sources = message.answer.as_ref().map(|a| a.sources().to_vec()).unwrap_or_default();
    let spans = message.answer.as_ref().map(|a| highlight_keywords(&a.answer, &highlight));

    rsx! {
        div {
            style: "display: flex; justify-content: {justify};",
            div {
                style: "
                    max-width: 576px;
                    border-radius: 16px;
                    {corner}
                    padding: 12px 16px;
                    font-size: 14px;
                    background: {background};
                    color: {color};
                    box-shadow: 0 1px 2px rgba(0,0,0,0.08);
                ",
                div {
                    style: "display: flex; align-items: center; gap: 8px; margin-bottom: 4px; font-size: 12px; color: #94A3B8;",
                    if is_user {
                        Icon { icon: MdPerson, style: "width: 14px; height: 14px;" }
                        span { "Kullanıcı" }
                    } else {
                        Icon { icon: MdQuestionAnswer, style: "width: 14px; height: 14px;" }
                        span { "Asistan" }
                    }
                }
                p {
                    style: "margin: 0; white-space: pre-line;",
                    if let Some(spans) = spans {
                        HighlightedText { spans }
                    } else {
                        "{message.content}"
                    }
                }
                if !sources.is_empty() {
                    KapSourceList { sources }
                }
            }
        }
    }
}

#[component]
fn KapSourceList(sources: Vec<KapNotification>) -> Element {
    let links = sources.into_iter().map(|s| {
        let href = s.url.unwrap_or_default();
        let label = s.title.unwrap_or(s.kap_id);
        (s.id, href, label)
    }).collect::<Vec<_>>();
    rsx! {
        div {
            style: "margin-top: 12px; border-top: 1px solid #F1F5F9; padding-top: 8px;",
            p { style: "font-size: 11px; font-weight: 500; color: #64748B; margin: 0 0 4px 0;", "İlgili KAP kayıtları:" }
            ul {
                style: "list-style: none; margin: 0; padding: 0; display: flex; flex-direction: column; gap: 4px;",
                for (id, href, label) in links {
                    li {
                        key: "{id}",
                        style: "display: flex; align-items: center; gap: 8px; font-size: 11px; color: #475569;",
                        Icon { icon: MdDescription, style: "width: 12px; height: 12px; flex-shrink: 0;" }
                        a {
                            href: "{href}",
                            target: "_blank",
                            rel: "noreferrer",
                            style: "color: inherit; text-decoration: underline; text-underline-offset: 2px;",
                            "{label}"
                        }
                    }
                }
            }
        }
    }
}
