#![allow(dead_code)]

use content_service::config::{ContentConfig, GeminiSettings, TitleSettings, TranscriptionSettings};
use content_service::services::providers::{GenerativeProvider, MockProvider, ProviderError};
use content_service::startup::Application;
use service_core::config::Config as CoreConfig;
use std::sync::Arc;

pub struct TestApp {
    pub address: String,
    pub port: u16,
    pub provider: Arc<MockProvider>,
    pub client: reqwest::Client,
}

pub fn test_config() -> ContentConfig {
    ContentConfig {
        common: CoreConfig {
            port: 0,
            ..CoreConfig::default()
        },
        gemini: GeminiSettings {
            api_key: "test-api-key".to_string(),
            model: "gemini-1.5-flash".to_string(),
            api_base: "http://127.0.0.1:9".to_string(),
            timeout_secs: 5,
        },
        titles: TitleSettings::default(),
        transcription: TranscriptionSettings {
            max_upload_bytes: 1024 * 1024,
        },
    }
}

impl TestApp {
    /// Spawn the service with a provider that always replies `text`.
    pub async fn replying(text: &str) -> Self {
        Self::spawn(MockProvider::replying(text)).await
    }

    /// Spawn the service with a provider whose calls always fail.
    pub async fn failing() -> Self {
        Self::spawn(MockProvider::failing(ProviderError::Network(
            "connection refused".to_string(),
        )))
        .await
    }

    pub async fn spawn(provider: MockProvider) -> Self {
        let provider = Arc::new(provider);
        let app = Application::build_with_provider(
            test_config(),
            provider.clone() as Arc<dyn GenerativeProvider>,
        )
        .await
        .expect("Failed to build test application");

        let port = app.port();
        let address = format!("http://127.0.0.1:{}", port);

        tokio::spawn(async move {
            app.run_until_stopped().await.ok();
        });

        // Wait for HTTP server to be ready by polling health endpoint
        let client = reqwest::Client::new();
        let health_url = format!("{}/health", address);
        for _ in 0..50 {
            if client.get(&health_url).send().await.is_ok() {
                break;
            }
            tokio::time::sleep(tokio::time::Duration::from_millis(50)).await;
        }

        TestApp {
            address,
            port,
            provider,
            client,
        }
    }

    pub async fn suggest_titles(&self, body: serde_json::Value) -> reqwest::Response {
        self.client
            .post(format!("{}/api/v1/suggest-titles", self.address))
            .json(&body)
            .send()
            .await
            .expect("Failed to execute request")
    }

    pub async fn transcribe(&self, bytes: Vec<u8>, mime_type: &str) -> reqwest::Response {
        let part = reqwest::multipart::Part::bytes(bytes)
            .file_name("upload.bin")
            .mime_str(mime_type)
            .expect("Invalid mime type");
        let form = reqwest::multipart::Form::new().part("file", part);

        self.client
            .post(format!("{}/api/v1/transcribe", self.address))
            .multipart(form)
            .send()
            .await
            .expect("Failed to execute request")
    }
}
