use base64::{Engine as _, engine::general_purpose};
use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::domain::{
    common::entities::app_errors::CoreError,
    food_analysis::{entities::ImagePayload, ports::LLMClient},
};

/// Client for the OpenAI Responses API.
#[derive(Debug, Clone)]
pub struct OpenAILLMClient {
    api_key: String,
    model_name: String,
    base_url: String,
    client: Client,
}

#[derive(Debug, Serialize)]
struct ResponsesRequest {
    model: String,
    input: Input,
    store: bool,
}

#[derive(Debug, Serialize)]
#[serde(untagged)]
enum Input {
    Text(String),
    Messages(Vec<InputMessage>),
}

#[derive(Debug, Serialize)]
struct InputMessage {
    role: &'static str,
    content: Vec<InputContent>,
}

#[derive(Debug, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
enum InputContent {
    InputText { text: String },
    InputImage { image_url: String },
}

#[derive(Debug, Deserialize)]
struct ResponsesResponse {
    output_text: Option<String>,
    #[serde(default)]
    output: Vec<OutputItem>,
}

#[derive(Debug, Deserialize)]
struct OutputItem {
    #[serde(default)]
    content: Vec<OutputContent>,
}

#[derive(Debug, Deserialize)]
struct OutputContent {
    #[serde(rename = "type", default)]
    kind: String,
    text: Option<String>,
}

impl ResponsesResponse {
    fn into_text(self) -> Option<String> {
        if let Some(text) = self.output_text.filter(|t| !t.is_empty()) {
            return Some(text);
        }

        let texts: Vec<String> = self
            .output
            .into_iter()
            .flat_map(|item| item.content)
            .filter(|c| c.kind == "output_text")
            .filter_map(|c| c.text)
            .collect();

        if texts.is_empty() {
            None
        } else {
            Some(texts.concat())
        }
    }
}

impl OpenAILLMClient {
    pub fn new(api_key: String, model_name: String, base_url: String) -> Self {
        Self {
            api_key,
            model_name,
            base_url: base_url.trim_end_matches('/').to_string(),
            client: Client::new(),
        }
    }

    async fn call_responses_api(&self, input: Input) -> Result<String, CoreError> {
        let url = format!("{}/v1/responses", self.base_url);
        let request = ResponsesRequest {
            model: self.model_name.clone(),
            input,
            store: true,
        };

        let response = self
            .client
            .post(&url)
            .bearer_auth(&self.api_key)
            .json(&request)
            .send()
            .await
            .map_err(|e| {
                tracing::error!("OpenAI API request failed: {}", e);
                CoreError::ExternalServiceError(format!("LLM API error: {}", e))
            })?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().await.unwrap_or_default();
            tracing::error!("OpenAI API error: {} - {}", status, error_text);
            return Err(CoreError::ExternalServiceError(format!(
                "LLM API returned error: {} - {}",
                status, error_text
            )));
        }

        let parsed: ResponsesResponse = response.json().await.map_err(|e| {
            tracing::error!("Failed to parse OpenAI response: {}", e);
            CoreError::ExternalServiceError(format!("Failed to parse LLM response: {}", e))
        })?;

        parsed
            .into_text()
            .ok_or_else(|| CoreError::ExternalServiceError("No response from LLM".to_string()))
    }
}

impl LLMClient for OpenAILLMClient {
    async fn generate_with_image(
        &self,
        prompt: String,
        image: ImagePayload,
    ) -> Result<String, CoreError> {
        let data_url = format!(
            "data:{};base64,{}",
            image.mime_type,
            general_purpose::STANDARD.encode(&image.data)
        );

        let input = Input::Messages(vec![InputMessage {
            role: "user",
            content: vec![
                InputContent::InputText { text: prompt },
                InputContent::InputImage {
                    image_url: data_url,
                },
            ],
        }]);

        self.call_responses_api(input).await
    }

    async fn generate_with_text(&self, prompt: String) -> Result<String, CoreError> {
        self.call_responses_api(Input::Text(prompt)).await
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;
    use wiremock::matchers::{body_json, body_partial_json, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use super::*;

    fn client(server: &MockServer) -> OpenAILLMClient {
        OpenAILLMClient::new("sk-test".to_string(), "gpt-4o".to_string(), server.uri())
    }

    #[tokio::test]
    async fn text_prompt_is_sent_as_plain_input() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/v1/responses"))
            .and(header("authorization", "Bearer sk-test"))
            .and(body_json(json!({
                "model": "gpt-4o",
                "input": "tell me a fact",
                "store": true
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "output": [{
                    "type": "message",
                    "role": "assistant",
                    "content": [{ "type": "output_text", "text": "Mustard counts." }]
                }]
            })))
            .expect(1)
            .mount(&server)
            .await;

        let text = client(&server)
            .generate_with_text("tell me a fact".to_string())
            .await
            .unwrap();

        assert_eq!(text, "Mustard counts.");
    }

    #[tokio::test]
    async fn image_is_sent_as_data_url() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(body_partial_json(json!({
                "input": [{
                    "role": "user",
                    "content": [
                        { "type": "input_text", "text": "ingredients?" },
                        { "type": "input_image", "image_url": "data:image/jpeg;base64,AQID" }
                    ]
                }]
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "output_text": "{rice}"
            })))
            .expect(1)
            .mount(&server)
            .await;

        let text = client(&server)
            .generate_with_image(
                "ingredients?".to_string(),
                ImagePayload::new(vec![1u8, 2, 3], "image/jpeg"),
            )
            .await
            .unwrap();

        assert_eq!(text, "{rice}");
    }

    #[tokio::test]
    async fn reasoning_only_output_is_an_error() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "output": [{ "type": "reasoning", "content": [] }]
            })))
            .mount(&server)
            .await;

        let err = client(&server)
            .generate_with_text("hi".to_string())
            .await
            .unwrap_err();

        assert!(matches!(err, CoreError::ExternalServiceError(_)));
    }

    #[tokio::test]
    async fn error_status_is_external_service_error() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(429).set_body_string("rate limited"))
            .mount(&server)
            .await;

        let err = client(&server)
            .generate_with_text("hi".to_string())
            .await
            .unwrap_err();

        assert!(err.to_string().contains("429"));
    }
}
