use super::{Field, FieldKind, Flow, PromptTemplate, Schema};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SymptomAnalyzerInput {
    pub symptoms_description: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SymptomAnalyzerOutput {
    /// Most likely first.
    pub potential_conditions: Vec<String>,
    pub next_steps: String,
}

static INPUT_SCHEMA: Schema = Schema {
    name: "SymptomAnalyzerInput",
    description: "A free-text description of the symptoms a user is experiencing.",
    fields: &[Field {
        name: "symptomsDescription",
        kind: FieldKind::Text,
        description: "A detailed description of the symptoms the user is experiencing.",
    }],
};

static OUTPUT_SCHEMA: Schema = Schema {
    name: "SymptomAnalyzerOutput",
    description: "Potential conditions and recommended next steps for described symptoms.",
    fields: &[
        Field {
            name: "potentialConditions",
            kind: FieldKind::TextList,
            description: "A list of potential medical conditions based on the symptoms provided.",
        },
        Field {
            name: "nextSteps",
            kind: FieldKind::Text,
            description: "Recommended next steps, such as consulting a doctor or specific tests.",
        },
    ],
};

const PROMPT: PromptTemplate = PromptTemplate::new(
    "You are an AI-powered symptom analyzer. Analyze the symptoms described by the user, \
list the potential medical conditions that could explain them, ordered from most to least \
likely, and recommend next steps such as seeing a doctor or getting specific tests. \
You are not a substitute for professional medical advice; say so in the next steps.

Symptoms: {{symptomsDescription}}",
);

pub struct SymptomAnalyzer;

impl Flow for SymptomAnalyzer {
    const NAME: &'static str = "symptomAnalyzer";

    type Input = SymptomAnalyzerInput;
    type Output = SymptomAnalyzerOutput;

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

impl SymptomAnalyzerInput {
    pub fn new(symptoms_description: impl Into<String>) -> Self {
        Self {
            symptoms_description: symptoms_description.into(),
        }
    }
}
