use std::sync::{Arc, Mutex};

use atelier::application::ports::{
    ChatModel, ChatModelError, CompletionRequest, ImageModel, ImageModelError,
};
use atelier::application::services::ArtifactGenerator;

struct CaptionChatModel {
    caption_json: String,
}

#[async_trait::async_trait]
impl ChatModel for CaptionChatModel {
    async fn complete(&self, request: CompletionRequest) -> Result<String, ChatModelError> {
        assert!(request.json_object);
        Ok(self.caption_json.clone())
    }
}

struct FailingChatModel;

#[async_trait::async_trait]
impl ChatModel for FailingChatModel {
    async fn complete(&self, _request: CompletionRequest) -> Result<String, ChatModelError> {
        Err(ChatModelError::ApiRequestFailed("chat down".to_string()))
    }
}

struct CapturingImageModel {
    seen: Mutex<Vec<String>>,
}

impl CapturingImageModel {
    fn new() -> Self {
        Self {
            seen: Mutex::new(Vec::new()),
        }
    }
}

#[async_trait::async_trait]
impl ImageModel for CapturingImageModel {
    async fn generate(&self, prompt: &str) -> Result<String, ImageModelError> {
        self.seen.lock().unwrap().push(prompt.to_string());
        Ok("https://images.example/one.png".to_string())
    }
}

struct FailingImageModel;

#[async_trait::async_trait]
impl ImageModel for FailingImageModel {
    async fn generate(&self, _prompt: &str) -> Result<String, ImageModelError> {
        Err(ImageModelError::ApiRequestFailed("image down".to_string()))
    }
}

fn caption_model() -> Arc<CaptionChatModel> {
    Arc::new(CaptionChatModel {
        caption_json: r#"{"title": "Calm Shore", "description": "A lone figure by the water."}"#
            .to_string(),
    })
}

#[tokio::test]
async fn given_base_prompt_when_generating_then_appends_variation_marker() {
    let image_model = Arc::new(CapturingImageModel::new());
    let generator = ArtifactGenerator::new(caption_model(), Arc::clone(&image_model));

    let draft = generator.generate("A calm shore", 1).await.unwrap();

    assert_eq!(draft.prompt, "A calm shore (Variation 2)");
    let seen = image_model.seen.lock().unwrap();
    assert_eq!(seen[0], "A calm shore (Variation 2)");
}

#[tokio::test]
async fn given_valid_caption_when_generating_then_uses_curator_fields() {
    let generator = ArtifactGenerator::new(caption_model(), Arc::new(CapturingImageModel::new()));

    let draft = generator.generate("A calm shore", 0).await.unwrap();

    assert_eq!(draft.image_url, "https://images.example/one.png");
    assert_eq!(draft.title, "Calm Shore");
    assert_eq!(draft.description, "A lone figure by the water.");
}

#[tokio::test]
async fn given_fenced_caption_json_when_generating_then_parses_it() {
    let chat_model = Arc::new(CaptionChatModel {
        caption_json: "```json\n{\"title\": \"Calm Shore\", \"description\": \"desc\"}\n```"
            .to_string(),
    });
    let generator = ArtifactGenerator::new(chat_model, Arc::new(CapturingImageModel::new()));

    let draft = generator.generate("A calm shore", 0).await.unwrap();

    assert_eq!(draft.title, "Calm Shore");
}

#[tokio::test]
async fn given_unparsable_caption_when_generating_then_substitutes_defaults() {
    let chat_model = Arc::new(CaptionChatModel {
        caption_json: "certainly, here is a caption".to_string(),
    });
    let generator = ArtifactGenerator::new(chat_model, Arc::new(CapturingImageModel::new()));

    let draft = generator.generate("A calm shore", 0).await.unwrap();

    assert_eq!(draft.title, "Generated Title");
    assert_eq!(draft.description, "Generated Description");
    assert_eq!(draft.image_url, "https://images.example/one.png");
}

#[tokio::test]
async fn given_caption_transport_failure_when_generating_then_substitutes_defaults() {
    let generator =
        ArtifactGenerator::new(Arc::new(FailingChatModel), Arc::new(CapturingImageModel::new()));

    let draft = generator.generate("A calm shore", 2).await.unwrap();

    assert_eq!(draft.title, "Generated Title");
    assert_eq!(draft.description, "Generated Description");
}

#[tokio::test]
async fn given_image_failure_when_generating_then_fails_with_variant_index() {
    let generator = ArtifactGenerator::new(caption_model(), Arc::new(FailingImageModel));

    let failure = generator.generate("A calm shore", 2).await.unwrap_err();

    assert_eq!(failure.index, 2);
    assert!(matches!(
        failure.source,
        ImageModelError::ApiRequestFailed(_)
    ));
}
