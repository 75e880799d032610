use serde_json::Value;

/// Parses model text as a JSON value, accepting one surrounding Markdown code fence.
pub fn parse_model_json(content: &str) -> Result<Value, serde_json::Error> {
    serde_json::from_str(strip_code_fence(content))
}

fn strip_code_fence(content: &str) -> &str {
    let trimmed = content.trim();
    let Some(body) = trimmed.strip_prefix("```") else {
        return trimmed;
    };
    let Some(body) = body.strip_suffix("```") else {
        return trimmed;
    };

    // Drop the info string ("json") on the opening fence line.
    match body.find('\n') {
        Some(newline) => body[newline + 1..].trim(),
        None => body.trim(),
    }
}
