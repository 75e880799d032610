use super::{Field, FieldKind, Flow, PromptTemplate, Schema};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MedicalFaqInput {
    pub question: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MedicalFaqOutput {
    pub answer: String,
}

static INPUT_SCHEMA: Schema = Schema {
    name: "MedicalFaqInput",
    description: "A medical or healthcare question asked by a patient.",
    fields: &[Field {
        name: "question",
        kind: FieldKind::Text,
        description: "The medical question to be answered.",
    }],
};

static OUTPUT_SCHEMA: Schema = Schema {
    name: "MedicalFaqOutput",
    description: "An answer to a medical question.",
    fields: &[Field {
        name: "answer",
        kind: FieldKind::Text,
        description: "The concise and accurate answer to the medical question.",
    }],
};

const PROMPT: PromptTemplate = PromptTemplate::new(
    "You are a medical expert. Answer the following question about medicine or healthcare. \
Provide a concise and accurate answer that a patient can understand, and recommend \
consulting a healthcare professional where appropriate.

Question: {{question}}",
);

pub struct MedicalFaq;

impl Flow for MedicalFaq {
    const NAME: &'static str = "medicalFaq";

    type Input = MedicalFaqInput;
    type Output = MedicalFaqOutput;

    fn input_schema() -> &'static Schema {
        &INPUT_SCHEMA
    }

    fn output_schema() -> &'static Schema {
        &OUTPUT_SCHEMA
    }

    fn prompt() -> PromptTemplate {
        PROMPT
    }
}

impl MedicalFaqInput {
    pub fn new(question: impl Into<String>) -> Self {
        Self {
            question: question.into(),
        }
    }
}
