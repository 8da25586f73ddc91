mod environment;
mod settings;

pub use environment::Environment;
pub use settings::{
    ChatSettings, GenerationSettings, ImageSettings, LoggingSettings, ServerSettings, Settings,
};
