mod artifact_generator;
mod completion_text;
mod generation_orchestrator;
mod prompt_synthesizer;
mod reply_service;

pub use artifact_generator::{ArtifactDraft, ArtifactGenerator, VariantFailure};
pub use completion_text::normalize_completion;
pub use generation_orchestrator::{
    FanoutPolicy, GenerationError, GenerationOrchestrator, GenerationOutcome,
};
pub use prompt_synthesizer::{PromptSynthesizer, SynthesisError};
pub use reply_service::{ReplyError, ReplyService};
