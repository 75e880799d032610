use super::{Field, FieldKind, Flow, PromptTemplate, Schema};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TestYourselfInput {
    pub symptoms: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TestYourselfOutput {
    pub potential_diseases: String,
    pub treatment_prevention_info: String,
}

static INPUT_SCHEMA: Schema = Schema {
    name: "TestYourselfInput",
    description: "Symptoms entered by the user for a self-check.",
    fields: &[Field {
        name: "symptoms",
        kind: FieldKind::Text,
        description: "The symptoms the user is experiencing.",
    }],
};

static OUTPUT_SCHEMA: Schema = Schema {
    name: "TestYourselfOutput",
    description: "Suggested diseases with treatment and prevention information.",
    fields: &[
        Field {
            name: "potentialDiseases",
            kind: FieldKind::Text,
            description: "Potential diseases that match the symptoms.",
        },
        Field {
            name: "treatmentPreventionInfo",
            kind: FieldKind::Text,
            description: "Information about treatment and prevention of the potential diseases.",
        },
    ],
};

const PROMPT: PromptTemplate = PromptTemplate::new(
    "You are a medical expert. Based on the symptoms provided by the user, suggest potential \
diseases and give information on how each can be treated and prevented. Remind the user \
to consult a doctor for an accurate diagnosis.

Symptoms: {{symptoms}}",
);

pub struct TestYourself;

impl Flow for TestYourself {
    const NAME: &'static str = "testYourself";

    type Input = TestYourselfInput;
    type Output = TestYourselfOutput;

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

impl TestYourselfInput {
    pub fn new(symptoms: impl Into<String>) -> Self {
        Self {
            symptoms: symptoms.into(),
        }
    }
}
