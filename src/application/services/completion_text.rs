/// Normalizes raw text-completion output before it is used as an image
/// prompt or parsed as structured data.
///
/// Models habitually wrap answers in Markdown code fences and prefix them
/// with a "Prompt:" label; both are formatting artifacts, not content.
/// Stripping repeats until a fixpoint so the operation is idempotent:
/// normalizing an already-normalized string returns it unchanged.
pub fn normalize_completion(raw: &str) -> String {
    let mut text = raw.trim();

    loop {
        let before = text;

        if let Some(rest) = text.strip_prefix("```") {
            let rest = strip_prefix_ignore_case(rest, "json").unwrap_or(rest);
            text = rest.trim_start();
        }

        if let Some(rest) = text.strip_suffix("```") {
            text = rest.trim_end();
        }

        if let Some(rest) = strip_prefix_ignore_case(text, "prompt:") {
            text = rest.trim_start();
        }

        if text == before {
            return text.to_string();
        }
    }
}

fn strip_prefix_ignore_case<'a>(text: &'a str, prefix: &str) -> Option<&'a str> {
    let head = text.get(..prefix.len())?;
    if head.eq_ignore_ascii_case(prefix) {
        Some(&text[prefix.len()..])
    } else {
        None
    }
}
