//! Question answering over the company's IR data.

use common::ir_models::{AssistantQuestion, AssistantResponse};

use crate::api_utils::http_client::api_post_json;

pub async fn ask_assistant(question: String) -> anyhow::Result<AssistantResponse> {
    let question = question.trim();
    if question.is_empty() {
        anyhow::bail!("question is empty");
    }
    tracing::info!("assistant question: {question:?}");
    let body = AssistantQuestion { question: question.to_string() };
    api_post_json("/assistant/ask", Some(&body)).await
}


#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn blank_question_is_rejected_before_any_request() {
        let err = ask_assistant("   \n".to_string()).await.unwrap_err();
        assert_eq!(err.to_string(), "question is empty");
    }
}
