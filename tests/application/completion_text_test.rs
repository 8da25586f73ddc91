use atelier::application::services::normalize_completion;

#[test]
fn given_plain_text_when_normalizing_then_returns_trimmed_text() {
    let result = normalize_completion("  A misty harbor at dawn  ");
    assert_eq!(result, "A misty harbor at dawn");
}

#[test]
fn given_fenced_output_when_normalizing_then_strips_fences() {
    let raw = "```\nA misty harbor at dawn\n```";
    assert_eq!(normalize_completion(raw), "A misty harbor at dawn");
}

#[test]
fn given_json_fence_when_normalizing_then_strips_language_tag() {
    let raw = "```json\n{\"title\": \"Harbor\"}\n```";
    assert_eq!(normalize_completion(raw), "{\"title\": \"Harbor\"}");
}

#[test]
fn given_prompt_label_when_normalizing_then_strips_label() {
    assert_eq!(
        normalize_completion("Prompt: A misty harbor at dawn"),
        "A misty harbor at dawn"
    );
}

#[test]
fn given_uppercase_label_when_normalizing_then_strips_case_insensitively() {
    assert_eq!(
        normalize_completion("PROMPT: A misty harbor at dawn"),
        "A misty harbor at dawn"
    );
}

#[test]
fn given_label_inside_fence_when_normalizing_then_strips_both() {
    let raw = "```\nPrompt: A misty harbor at dawn\n```";
    assert_eq!(normalize_completion(raw), "A misty harbor at dawn");
}

#[test]
fn given_repeated_label_when_normalizing_then_strips_all_occurrences() {
    assert_eq!(
        normalize_completion("Prompt: Prompt: A misty harbor at dawn"),
        "A misty harbor at dawn"
    );
}

#[test]
fn given_already_normalized_text_when_normalizing_again_then_is_unchanged() {
    let raw = "```json\nPrompt: A misty harbor at dawn\n```";
    let once = normalize_completion(raw);
    let twice = normalize_completion(&once);
    assert_eq!(once, twice);
}

#[test]
fn given_text_mentioning_prompt_mid_sentence_when_normalizing_then_keeps_it() {
    let raw = "A painting about a Prompt: sign in a gallery";
    assert_eq!(normalize_completion(raw), raw);
}

#[test]
fn given_empty_input_when_normalizing_then_returns_empty() {
    assert_eq!(normalize_completion(""), "");
    assert_eq!(normalize_completion("   "), "");
}
