use crate::{Error, Result};
use serde_json::Value;

/// Fixed prompt text with `{{field}}` placeholders filled from the request record.
#[derive(Debug, Clone, Copy)]
pub struct PromptTemplate(&'static str);

impl PromptTemplate {
    pub const fn new(template: &'static str) -> Self {
        Self(template)
    }

    pub fn render(&self, input: &Value) -> Result<String> {
        let object = input
            .as_object()
            .ok_or_else(|| Error::template("prompt input must be a JSON object"))?;

        let mut rendered = String::with_capacity(self.0.len());
        let mut rest = self.0;

        while let Some(start) = rest.find("{{") {
            rendered.push_str(&rest[..start]);
            let after_open = &rest[start + 2..];
            let end = after_open
                .find("}}")
                .ok_or_else(|| Error::template("unterminated placeholder in prompt template"))?;
            let key = after_open[..end].trim();

            match object.get(key) {
                Some(Value::String(text)) => rendered.push_str(text),
                Some(Value::Array(items)) => {
                    let parts: Vec<String> = items.iter().map(render_scalar).collect();
                    rendered.push_str(&parts.join(", "));
                }
                Some(other) => rendered.push_str(&render_scalar(other)),
                None => {
                    return Err(Error::template(format!(
                        "placeholder '{}' has no matching input field",
                        key
                    )));
                }
            }

            rest = &after_open[end + 2..];
        }

        rendered.push_str(rest);
        Ok(rendered)
    }
}

fn render_scalar(value: &Value) -> String {
    match value {
        Value::String(text) => text.clone(),
        other => other.to_string(),
    }
}
