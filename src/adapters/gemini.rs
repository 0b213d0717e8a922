use crate::domain::model::Package;
use crate::domain::ports::{AnswerGenerator, ConfigProvider};
use crate::utils::error::{Result, TourError};
use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use serde_json::json;
use std::time::Duration;

const SYSTEM_PROMPT: &str = "You are a friendly and knowledgeable travel assistant for NZ Tours, \
a New Zealand travel agency. You help customers plan their perfect New Zealand adventure.\n\n\
Key points about you:\n\
- You greet customers with \"Kia Ora\" (Maori greeting)\n\
- You're enthusiastic about New Zealand's natural beauty, culture, and adventures\n\
- You provide helpful tips about weather, best seasons, and local customs\n\
- You can recommend packages based on customer preferences\n\
- You're knowledgeable about both North and South Islands\n\
- You use New Zealand English spellings where appropriate\n\
- If you don't know something, you honestly say so and offer to help find out\n\n\
Keep responses concise (2-3 paragraphs max).";

const MODEL: &str = "gemini-2.5-flash";

#[derive(Debug, Deserialize, Default)]
struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize, Default)]
struct Candidate {
    #[serde(default)]
    content: Content,
}

#[derive(Debug, Deserialize, Default)]
struct Content {
    #[serde(default)]
    parts: Vec<Part>,
}

#[derive(Debug, Deserialize, Default)]
struct Part {
    #[serde(default)]
    text: String,
}

/// Answer generator backed by a Gemini-style generateContent endpoint.
pub struct GeminiClient {
    client: Client,
    endpoint: String,
    api_key: String,
}

impl GeminiClient {
    pub fn new<C: ConfigProvider>(config: &C) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_seconds()))
            .build()?;

        Ok(Self {
            client,
            endpoint: config.gemini_endpoint().trim_end_matches('/').to_string(),
            api_key: config.gemini_api_key().to_string(),
        })
    }

    fn build_prompt(user_text: &str, packages: &[Package]) -> String {
        let mut prompt = format!("{}\n", SYSTEM_PROMPT);

        if !packages.is_empty() {
            prompt.push_str("\nCurrent Available Tour Packages:\n");
            for package in packages.iter().take(5) {
                let highlights: Vec<&str> = package
                    .highlights
                    .iter()
                    .take(3)
                    .map(String::as_str)
                    .collect();
                prompt.push_str(&format!(
                    "- {} ({}, {})\n  Duration: {} days | Price: ${} NZD\n  Highlights: {}\n",
                    package.name,
                    package.region,
                    package.category,
                    package.duration,
                    package.price,
                    highlights.join(", ")
                ));
            }
        }

        prompt.push_str(&format!("\nCustomer message: {}\n\nYour response:", user_text));
        prompt
    }
}

#[async_trait]
impl AnswerGenerator for GeminiClient {
    async fn generate(&self, user_text: &str, packages: &[Package]) -> Result<String> {
        if self.api_key.is_empty() {
            return Err(TourError::MissingConfigError {
                field: "gemini_api_key".to_string(),
            });
        }

        let url = format!(
            "{}/v1beta/models/{}:generateContent",
            self.endpoint, MODEL
        );
        let body = json!({
            "contents": [{ "parts": [{ "text": Self::build_prompt(user_text, packages) }] }]
        });

        let response = self
            .client
            .post(&url)
            .query(&[("key", self.api_key.as_str())])
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(TourError::GenerationError {
                message: format!("generation API returned {}", status),
            });
        }

        let parsed: GenerateResponse = response.json().await?;
        let text = parsed
            .candidates
            .into_iter()
            .next()
            .and_then(|c| c.content.parts.into_iter().next())
            .map(|p| p.text)
            .filter(|t| !t.is_empty());

        text.ok_or_else(|| TourError::GenerationError {
            message: "empty candidate in generation response".to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use httpmock::prelude::*;

    struct TestConfig {
        endpoint: String,
        api_key: String,
    }

    impl ConfigProvider for TestConfig {
        fn sheets_endpoint(&self) -> &str {
            ""
        }
        fn sheet_id(&self) -> &str {
            ""
        }
        fn sheets_api_key(&self) -> &str {
            ""
        }
        fn gemini_endpoint(&self) -> &str {
            &self.endpoint
        }
        fn gemini_api_key(&self) -> &str {
            &self.api_key
        }
        fn cache_ttl_seconds(&self) -> u64 {
            300
        }
        fn request_timeout_seconds(&self) -> u64 {
            10
        }
    }

    #[tokio::test]
    async fn test_generate_parses_first_candidate() {
        let server = MockServer::start();
        let mock = server.mock(|when, then| {
            when.method(POST)
                .path(format!("/v1beta/models/{}:generateContent", MODEL))
                .query_param("key", "test-key");
            then.status(200)
                .header("Content-Type", "application/json")
                .json_body(serde_json::json!({
                    "candidates": [
                        { "content": { "parts": [ { "text": "Kia Ora! Queenstown awaits." } ] } }
                    ]
                }));
        });

        let config = TestConfig {
            endpoint: server.base_url(),
            api_key: "test-key".to_string(),
        };
        let client = GeminiClient::new(&config).unwrap();
        let answer = client.generate("Tell me about Queenstown", &[]).await.unwrap();

        mock.assert();
        assert_eq!(answer, "Kia Ora! Queenstown awaits.");
    }

    #[tokio::test]
    async fn test_generate_without_key_fails_fast() {
        let config = TestConfig {
            endpoint: "http://localhost:1".to_string(),
            api_key: String::new(),
        };
        let client = GeminiClient::new(&config).unwrap();
        assert!(client.generate("anything", &[]).await.is_err());
    }

    #[tokio::test]
    async fn test_generate_surfaces_http_errors() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(POST);
            then.status(429);
        });

        let config = TestConfig {
            endpoint: server.base_url(),
            api_key: "test-key".to_string(),
        };
        let client = GeminiClient::new(&config).unwrap();
        assert!(client.generate("anything", &[]).await.is_err());
    }

    #[test]
    fn test_prompt_includes_at_most_five_packages() {
        let packages: Vec<Package> = (0..7)
            .map(|i| Package {
                id: i.to_string(),
                name: format!("Tour {}", i),
                region: "Both".to_string(),
                category: "Mixed".to_string(),
                duration: 5,
                price: 1000.0,
                group_size_min: 1,
                group_size_max: 10,
                description: String::new(),
                highlights: vec![],
                itinerary: vec![],
                inclusions: vec![],
                exclusions: vec![],
                image_url: String::new(),
                gallery: vec![],
                season: vec![],
                status: "Active".to_string(),
            })
            .collect();

        let prompt = GeminiClient::build_prompt("hello", &packages);
        assert!(prompt.contains("Tour 4"));
        assert!(!prompt.contains("Tour 5"));
    }
}
