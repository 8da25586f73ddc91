use std::env;
use std::net::SocketAddr;
use std::sync::Arc;

use tokio::net::TcpListener;

use atelier::application::ports::{ConversationRepository, PaintingRepository};
use atelier::application::services::{
    ArtifactGenerator, GenerationOrchestrator, PromptSynthesizer, ReplyService,
};
use atelier::infrastructure::image::ModelsLabClient;
use atelier::infrastructure::llm::GroqClient;
use atelier::infrastructure::observability::{TracingConfig, init_tracing};
use atelier::infrastructure::persistence::MemoryStore;
use atelier::presentation::{AppState, Environment, Settings, create_router};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let environment: Environment = env::var("APP_ENVIRONMENT")
        .unwrap_or_else(|_| "local".into())
        .try_into()
        .map_err(|e: String| anyhow::anyhow!(e))?;

    let settings = Settings::load(environment)?;

    init_tracing(
        TracingConfig::from_settings(environment.as_str(), &settings.logging),
        settings.server.port,
    );

    let chat_model = Arc::new(GroqClient::new(&settings.chat));
    let image_model = Arc::new(ModelsLabClient::new(&settings.image));

    let store = Arc::new(MemoryStore::new());
    let conversation_repository: Arc<dyn ConversationRepository> = store.clone();
    let painting_repository: Arc<dyn PaintingRepository> = store;

    let reply_service = Arc::new(ReplyService::new(Arc::clone(&chat_model)));
    let prompt_synthesizer = Arc::new(PromptSynthesizer::new(Arc::clone(&chat_model)));
    let artifact_generator = Arc::new(ArtifactGenerator::new(
        Arc::clone(&chat_model),
        Arc::clone(&image_model),
    ));
    let generation_orchestrator = Arc::new(GenerationOrchestrator::new(
        prompt_synthesizer,
        artifact_generator,
        Arc::clone(&conversation_repository),
        Arc::clone(&painting_repository),
        settings.generation.variant_count,
        settings.generation.fanout,
    ));

    let state = AppState {
        reply_service,
        generation_orchestrator,
        conversation_repository,
        painting_repository,
    };

    let router = create_router(state);

    let addr: SocketAddr = format!("{}:{}", settings.server.host, settings.server.port).parse()?;
    tracing::info!("Listening on {}", addr);

    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, router).await?;

    Ok(())
}
