//! Gemini API連携（画像編集）
//!
//! `models/{model}:generateContent` に入力画像と指示文を1回送信し、
//! 返ってきたパートをそのまま `ResponsePart` に変換する。

use super::{GenerationRequest, ImageProvider, InlineImage, ResponsePart};
use crate::error::{IdPhotoError, Result};
use serde::{Deserialize, Serialize};
use std::time::Duration;

pub const DEFAULT_API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta";
pub const DEFAULT_MODEL: &str = "gemini-2.5-flash-image";

/// Gemini APIリクエスト
#[derive(Serialize)]
struct GeminiRequest<'a> {
    contents: Vec<Content<'a>>,
}

#[derive(Serialize)]
struct Content<'a> {
    parts: Vec<Part<'a>>,
}

#[derive(Serialize)]
#[serde(untagged)]
enum Part<'a> {
    InlineData {
        #[serde(rename = "inlineData")]
        inline_data: InlineData<'a>,
    },
    Text {
        text: &'a str,
    },
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct InlineData<'a> {
    mime_type: &'a str,
    data: &'a str,
}

/// Gemini APIレスポンス
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct GeminiResponse {
    candidates: Vec<Candidate>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct Candidate {
    content: Option<ResponseContent>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct ResponseContent {
    parts: Vec<GeminiPart>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
struct GeminiPart {
    text: Option<String>,
    #[serde(alias = "inline_data")]
    inline_data: Option<GeminiInlineData>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
struct GeminiInlineData {
    #[serde(alias = "mime_type")]
    mime_type: String,
    data: String,
}

fn build_request(request: &GenerationRequest) -> GeminiRequest<'_> {
    GeminiRequest {
        contents: vec![Content {
            parts: vec![
                Part::InlineData {
                    inline_data: InlineData {
                        mime_type: &request.mime_type,
                        data: request.image.as_str(),
                    },
                },
                Part::Text { text: &request.instruction },
            ],
        }],
    }
}

/// 最初の候補のパートを変換
fn into_parts(response: GeminiResponse) -> Vec<ResponsePart> {
    response
        .candidates
        .into_iter()
        .next()
        .and_then(|c| c.content)
        .map(|content| {
            content
                .parts
                .into_iter()
                .map(|part| ResponsePart {
                    text: part.text,
                    inline_image: part.inline_data.map(|d| InlineImage {
                        mime_type: d.mime_type,
                        data: d.data,
                    }),
                })
                .collect()
        })
        .unwrap_or_default()
}

/// エラーメッセージからAPIキーを伏せる
fn redact(text: &str, api_key: &str) -> String {
    let key = api_key.trim();
    if key.is_empty() {
        return text.to_string();
    }
    text.replace(key, "[redacted]")
}

/// 2xx以外のHTTPステータスを生成エラーに変換
fn status_error(status: reqwest::StatusCode, body: &str, api_key: &str) -> IdPhotoError {
    IdPhotoError::generation(redact(&format!("API error {}: {}", status, body), api_key))
}

/// Gemini REST APIを使う画像生成プロバイダ
#[derive(Clone)]
pub struct GeminiProvider {
    client: reqwest::Client,
    api_base: String,
    model: String,
    api_key: String,
}

impl GeminiProvider {
    pub fn new(api_key: impl Into<String>, model: impl Into<String>) -> Result<Self> {
        Self::with_options(api_key, model, DEFAULT_API_BASE, None)
    }

    pub fn with_options(
        api_key: impl Into<String>,
        model: impl Into<String>,
        api_base: impl Into<String>,
        timeout: Option<Duration>,
    ) -> Result<Self> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder
            .build()
            .map_err(|e| IdPhotoError::Config(format!("HTTPクライアント作成エラー: {}", e)))?;

        Ok(Self {
            client,
            api_base: api_base.into().trim_end_matches('/').to_string(),
            model: model.into(),
            api_key: api_key.into(),
        })
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    fn endpoint(&self) -> String {
        format!("{}/models/{}:generateContent", self.api_base, self.model)
    }
}

impl ImageProvider for GeminiProvider {
    async fn generate_content(&self, request: &GenerationRequest) -> Result<Vec<ResponsePart>> {
        let body = build_request(request);

        tracing::debug!(
            model = %self.model,
            mime_type = %request.mime_type,
            image_len = request.image.len(),
            instruction_len = request.instruction.len(),
            "Gemini API呼び出し"
        );

        let response = self
            .client
            .post(self.endpoint())
            .header("x-goog-api-key", &self.api_key)
            .json(&body)
            .send()
            .await
            .map_err(|e| {
                let message = redact(&format!("API呼び出しエラー: {}", e), &self.api_key);
                IdPhotoError::generation_caused_by(message, e)
            })?;

        let status = response.status();
        if !status.is_success() {
            let text = response.text().await.unwrap_or_default();
            return Err(status_error(status, &text, &self.api_key));
        }

        let payload: GeminiResponse = response
            .json()
            .await
            .map_err(|e| IdPhotoError::generation_caused_by("レスポンスのパースに失敗", e))?;

        Ok(into_parts(payload))
    }
}
