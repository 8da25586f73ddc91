const MAX_VISIBLE_LENGTH: usize = 100;

/// Secret-bearing markers whose trailing value must never reach the logs.
const SECRET_MARKERS: [&str; 5] = ["Bearer ", "api_key=", "password=", "secret=", "token="];

/// Prepares prompt text for logging: trims, clips long prompts to a
/// readable prefix and redacts credential-looking fragments.
pub fn sanitize_prompt(prompt: &str) -> String {
    let trimmed = prompt.trim();

    if trimmed.is_empty() {
        return String::from("[EMPTY]");
    }

    redact_secrets(&clip(trimmed))
}

fn clip(text: &str) -> String {
    if text.len() <= MAX_VISIBLE_LENGTH {
        return text.to_string();
    }

    // Clip on a char boundary so multi-byte text cannot panic the slice.
    let mut cut = MAX_VISIBLE_LENGTH;
    while !text.is_char_boundary(cut) {
        cut -= 1;
    }

    format!("{}... ({} chars total)", &text[..cut], text.len())
}

fn redact_secrets(text: &str) -> String {
    let mut result = text.to_string();

    for marker in SECRET_MARKERS {
        if let Some(start) = result.find(marker) {
            let value_start = start + marker.len();
            let value_end = result[value_start..]
                .find(|c: char| c.is_whitespace() || matches!(c, '&' | '"' | '\''))
                .map_or(result.len(), |i| value_start + i);
            result.replace_range(value_start..value_end, "[REDACTED]");
        }
    }

    result
}
