mod modelslab_client;

pub use modelslab_client::ModelsLabClient;
