//! End-to-end test through the facade surface.

use async_trait::async_trait;
use dossier::{
    CallDispatcher, DispatchSettings, GenerateRequest, GenerationBackend, GenerationError,
};

struct CannedBackend(&'static str);

#[async_trait]
impl GenerationBackend for CannedBackend {
    async fn generate(&self, _: &GenerateRequest) -> Result<String, GenerationError> {
        Ok(self.0.to_string())
    }
}

#[tokio::test]
async fn settings_drive_a_working_dispatcher() {
    tracing_subscriber::fmt()
        .with_env_filter("dossier_dispatch=debug")
        .try_init()
        .ok();

    let settings = DispatchSettings::default();
    let dispatcher = CallDispatcher::new(
        CannedBackend("classified: testimony"),
        settings.dispatcher_config(),
    );

    let text = dispatcher
        .submit(GenerateRequest::text("Classify the attached statement."))
        .await
        .unwrap();

    assert_eq!(text, "classified: testimony");
}
