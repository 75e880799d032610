use super::{
    Flow, MedicalFaq, MedicalFaqInput, MedicalFaqOutput, SymptomAnalyzer, SymptomAnalyzerInput,
    SymptomAnalyzerOutput, TestYourself, TestYourselfInput, TestYourselfOutput,
    output::parse_model_json,
};
use crate::{
    Error, Result,
    config::LlmConfig,
    llm::{ChatCompletionRequest, ChatMessage, LlmClient, OpenAiClient, ResponseSchema},
};
use serde::Serialize;
use std::sync::Arc;
use tracing::{Instrument, debug, info, info_span, warn};
use uuid::Uuid;

/// Sampling options forwarded with every flow call.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GenerationSettings {
    pub system_prompt: Option<String>,
    pub temperature: Option<f32>,
    pub max_tokens: Option<u32>,
}

/// Name and declared schemas of one flow.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FlowDescriptor {
    pub name: &'static str,
    pub input_schema: serde_json::Value,
    pub output_schema: serde_json::Value,
}

#[derive(Clone)]
pub struct FlowGateway {
    client: Arc<dyn LlmClient>,
    settings: GenerationSettings,
}

impl FlowGateway {
    pub fn new(config: LlmConfig) -> Result<Self> {
        info!(
            "Initializing flow gateway with provider '{}' and model '{}'",
            config.provider, config.model
        );

        let settings = GenerationSettings::from(&config);
        let client = OpenAiClient::new(config)?;

        Ok(Self::with_client(Arc::new(client), settings))
    }

    pub fn with_client(client: Arc<dyn LlmClient>, settings: GenerationSettings) -> Self {
        Self { client, settings }
    }

    pub async fn answer_medical_question(
        &self,
        question: impl Into<String>,
    ) -> Result<MedicalFaqOutput> {
        self.run::<MedicalFaq>(&MedicalFaqInput::new(question)).await
    }

    pub async fn analyze_symptoms(
        &self,
        symptoms_description: impl Into<String>,
    ) -> Result<SymptomAnalyzerOutput> {
        self.run::<SymptomAnalyzer>(&SymptomAnalyzerInput::new(symptoms_description))
            .await
    }

    pub async fn test_yourself(&self, symptoms: impl Into<String>) -> Result<TestYourselfOutput> {
        self.run::<TestYourself>(&TestYourselfInput::new(symptoms))
            .await
    }

    /// Validates the input, renders the prompt, calls the provider once and
    /// validates the reply. Nothing is retried.
    pub async fn run<F: Flow>(&self, input: &F::Input) -> Result<F::Output> {
        let invocation = Uuid::new_v4();
        let span = info_span!("flow", flow = F::NAME, %invocation);

        self.execute::<F>(input).instrument(span).await
    }

    async fn execute<F: Flow>(&self, input: &F::Input) -> Result<F::Output> {
        let input_value = serde_json::to_value(input)?;
        if let Err(violations) = F::input_schema().validate(&input_value) {
            warn!("Rejected input: {}", violations);
            return Err(Error::Validation {
                flow: F::NAME,
                violations,
            });
        }

        let prompt = F::prompt().render(&input_value)?;
        debug!("Rendered prompt: {}", prompt);

        let request = self.build_request::<F>(prompt);
        let response = self.client.create_chat_completion(request).await?;

        let content = response
            .first_content()
            .ok_or_else(|| Error::shape(F::NAME, "model returned no content"))?;

        let output_value = parse_model_json(content).map_err(|e| {
            debug!("Unparseable model output: {}", content);
            Error::shape(F::NAME, format!("output is not valid JSON: {}", e))
        })?;

        F::output_schema()
            .validate(&output_value)
            .map_err(|violations| Error::shape(F::NAME, violations.to_string()))?;

        let output: F::Output = serde_json::from_value(output_value)
            .map_err(|e| Error::shape(F::NAME, e.to_string()))?;

        info!("Flow completed");
        Ok(output)
    }

    fn build_request<F: Flow>(&self, prompt: String) -> ChatCompletionRequest {
        let mut messages = Vec::with_capacity(2);
        if let Some(system_prompt) = self
            .settings
            .system_prompt
            .as_deref()
            .filter(|p| !p.trim().is_empty())
        {
            messages.push(ChatMessage::system(system_prompt));
        }
        messages.push(ChatMessage::user(prompt));

        let output_schema = F::output_schema();
        ChatCompletionRequest {
            messages,
            response_schema: Some(ResponseSchema {
                name: F::NAME.to_string(),
                description: Some(output_schema.description.to_string()),
                schema: output_schema.to_response_format_schema(),
            }),
            max_tokens: self.settings.max_tokens,
            temperature: self.settings.temperature,
        }
    }

    pub fn catalog() -> Vec<FlowDescriptor> {
        vec![
            FlowDescriptor::of::<MedicalFaq>(),
            FlowDescriptor::of::<SymptomAnalyzer>(),
            FlowDescriptor::of::<TestYourself>(),
        ]
    }
}

impl FlowDescriptor {
    pub fn of<F: Flow>() -> Self {
        Self {
            name: F::NAME,
            input_schema: F::input_schema().to_json_schema(),
            output_schema: F::output_schema().to_json_schema(),
        }
    }
}

impl From<&LlmConfig> for GenerationSettings {
    fn from(config: &LlmConfig) -> Self {
        Self {
            system_prompt: config.system_prompt.clone(),
            temperature: config.temperature,
            max_tokens: config.max_tokens,
        }
    }
}
