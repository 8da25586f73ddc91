use atelier::infrastructure::observability::sanitize_prompt;

#[test]
fn given_empty_prompt_when_sanitizing_then_returns_empty_marker() {
    assert_eq!(sanitize_prompt(""), "[EMPTY]");
    assert_eq!(sanitize_prompt("   "), "[EMPTY]");
}

#[test]
fn given_short_prompt_when_sanitizing_then_returns_unchanged() {
    let prompt = "A calm shore at dusk";
    assert_eq!(sanitize_prompt(prompt), prompt);
}

#[test]
fn given_whitespace_padded_prompt_when_sanitizing_then_trims() {
    assert_eq!(sanitize_prompt("  A calm shore  "), "A calm shore");
}

#[test]
fn given_long_prompt_when_sanitizing_then_clips_and_reports_length() {
    let prompt = "a".repeat(150);
    let result = sanitize_prompt(&prompt);
    assert!(result.starts_with(&"a".repeat(100)));
    assert!(result.ends_with("... (150 chars total)"));
}

#[test]
fn given_multibyte_prompt_when_clipping_then_respects_char_boundaries() {
    let prompt = "é".repeat(120);
    let result = sanitize_prompt(&prompt);
    assert!(result.contains("chars total)"));
}

#[test]
fn given_credential_fragments_when_sanitizing_then_redacts_values() {
    let cases = [
        (
            "Authorization: Bearer sk-abc123xyz",
            "Bearer [REDACTED]",
            "sk-abc123xyz",
        ),
        (
            "call it with api_key=secret123 please",
            "api_key=[REDACTED]",
            "secret123",
        ),
        (
            "password=hunter2 was sent",
            "password=[REDACTED]",
            "hunter2",
        ),
        ("use token=tok_55 for auth", "token=[REDACTED]", "tok_55"),
    ];

    for (input, redacted, leaked) in cases {
        let result = sanitize_prompt(input);
        assert!(result.contains(redacted), "no redaction in {:?}", result);
        assert!(!result.contains(leaked), "leaked value in {:?}", result);
    }
}

#[test]
fn given_quoted_secret_when_sanitizing_then_stops_at_quote() {
    let result = sanitize_prompt(r#"config secret=abc"rest"#);
    assert!(result.contains("secret=[REDACTED]\"rest"));
}
