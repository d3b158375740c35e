use crate::error::ApiError;
use crate::models::{ChatMessage, ChatRequest, ChatResponse, ResponseFormat};
use crate::prompt::NUTRITION_SYSTEM_PROMPT;

// Base URL and model are fixed, not configuration.
const CHAT_COMPLETIONS_URL: &str = "https://api.openai.com/v1/chat/completions";
const MODEL: &str = "gpt-4o-mini";

// Send one meal description to the completion provider and return the raw
// content of the first choice. Low temperature keeps the numbers stable,
// json_object mode keeps the reply parseable.
pub async fn request_estimate(
    client: &reqwest::Client,
    api_key: &str,
    user_input: &str,
) -> Result<String, ApiError> {
    let request = ChatRequest {
        model: MODEL,
        messages: vec![
            ChatMessage {
                role: "system",
                content: NUTRITION_SYSTEM_PROMPT.to_string(),
            },
            ChatMessage {
                role: "user",
                content: user_input.to_string(),
            },
        ],
        temperature: 0.3,
        response_format: ResponseFormat {
            format: "json_object",
        },
    };

    let response = client
        .post(CHAT_COMPLETIONS_URL)
        .bearer_auth(api_key)
        .json(&request)
        .send()
        .await
        .map_err(|e| ApiError::Upstream(format!("AI service request failed: {e}")))?;

    if !response.status().is_success() {
        return Err(ApiError::Upstream(format!(
            "AI service returned status {}",
            response.status().as_u16()
        )));
    }

    let body: ChatResponse = response
        .json()
        .await
        .map_err(|e| ApiError::Upstream(format!("invalid response from AI service: {e}")))?;

    body.choices
        .into_iter()
        .next()
        .and_then(|choice| choice.message.content)
        .ok_or_else(|| ApiError::Upstream("no response from AI service".to_string()))
}
