use medflow_gateway::{
    FlowGateway, Result,
    config::{Config, LlmConfig, LogsConfig, ServerConfig},
    flows::GenerationSettings,
};
use std::sync::Arc;
use tempfile::TempDir;
use tokio::fs;

use super::mocks::MockLlmClient;

/// Create a test LLM configuration pointing at the given base URL
pub fn create_test_llm_config(base_url: &str) -> LlmConfig {
    LlmConfig {
        provider: "googleai".to_string(),
        base_url: base_url.to_string(),
        api_key: "test-api-key".to_string(),
        model: "gemini-2.0-flash".to_string(),
        system_prompt: None,
        temperature: Some(0.2),
        max_tokens: None,
        timeout_secs: 5,
    }
}

/// Create a test configuration with sensible defaults
pub fn create_test_config() -> Config {
    Config {
        server: ServerConfig {
            host: "127.0.0.1".to_string(),
            port: 8080,
            logs: LogsConfig {
                level: "debug".to_string(),
            },
        },
        llm: create_test_llm_config("https://generativelanguage.googleapis.com/v1beta/openai"),
    }
}

/// Wrap a mock provider in a gateway, keeping a handle for assertions
pub fn create_gateway(mock: MockLlmClient) -> (FlowGateway, Arc<MockLlmClient>) {
    let mock = Arc::new(mock);
    let gateway = FlowGateway::with_client(mock.clone(), GenerationSettings::default());
    (gateway, mock)
}

/// Create a temporary directory for test files
pub fn create_temp_dir() -> TempDir {
    tempfile::tempdir().expect("Failed to create temp directory")
}

/// Create a test config YAML file
pub async fn create_test_config_file(dir: &TempDir, content: &str) -> Result<String> {
    let config_path = dir.path().join("config.yaml");
    fs::write(&config_path, content).await?;
    Ok(config_path.to_string_lossy().to_string())
}

/// Sample configuration YAML for testing
pub const SAMPLE_CONFIG_YAML: &str = r#"
server:
  host: "127.0.0.1"
  port: 9090
  logs:
    level: "debug"

llm:
  provider: "googleai"
  base_url: "https://generativelanguage.googleapis.com/v1beta/openai"
  api_key: "test-api-key"
  model: "gemini-2.0-flash"
  system_prompt: "Answer as a cautious clinician."
  temperature: 0.2
  max_tokens: 1024
  timeout_secs: 20
"#;

/// Minimal configuration relying on defaults
pub const MINIMAL_CONFIG_YAML: &str = r#"
llm:
  model: "gemini-2.0-flash"
"#;

/// Invalid configuration YAML for testing error cases
pub const INVALID_CONFIG_YAML: &str = r#"
server:
  port: "not-a-number"

llm:
  provider: "unknown"
  # missing model
"#;

pub const FAQ_ANSWER_JSON: &str =
    r#"{"answer": "Paracetamol is usually well tolerated; rare side effects include rash and liver damage at high doses."}"#;

pub const SYMPTOM_ANALYSIS_JSON: &str = r#"{
  "potentialConditions": ["Common cold", "Influenza", "COVID-19"],
  "nextSteps": "Rest, drink fluids and see a doctor if the fever lasts more than three days."
}"#;

pub const TEST_YOURSELF_JSON: &str = r#"{
  "potentialDiseases": "Migraine, tension headache, inner ear infection",
  "treatmentPreventionInfo": "Rest in a dark room, stay hydrated and consult a doctor if dizziness persists."
}"#;
