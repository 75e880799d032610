//! Typed AI flows: each binds a request schema, a prompt template and a
//! response schema around a single model call.

mod gateway;
mod medical_faq;
mod output;
mod prompt;
mod schema;
mod symptom_analyzer;
mod test_yourself;

pub use gateway::{FlowDescriptor, FlowGateway, GenerationSettings};
pub use medical_faq::{MedicalFaq, MedicalFaqInput, MedicalFaqOutput};
pub use output::parse_model_json;
pub use prompt::PromptTemplate;
pub use schema::{Field, FieldKind, Problem, Schema, Violation, Violations};
pub use symptom_analyzer::{SymptomAnalyzer, SymptomAnalyzerInput, SymptomAnalyzerOutput};
pub use test_yourself::{TestYourself, TestYourselfInput, TestYourselfOutput};

use serde::{Serialize, de::DeserializeOwned};

/// A named request/response contract backed by one generative-model call.
pub trait Flow {
    /// Flow name, used for tracing and as the declared response format name.
    const NAME: &'static str;

    type Input: Serialize + Send + Sync;
    type Output: DeserializeOwned + Send;

    fn input_schema() -> &'static Schema;
    fn output_schema() -> &'static Schema;
    fn prompt() -> PromptTemplate;
}
