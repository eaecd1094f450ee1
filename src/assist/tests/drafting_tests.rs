//! Service orchestration tests for text drafting.

use crate::assist::{
    adapters::CannedAssistant,
    ports::AssistantError,
    services::{DraftingError, DraftingService},
};
use eyre::{bail, ensure};
use rstest::{fixture, rstest};
use std::sync::Arc;

#[fixture]
fn assistant() -> CannedAssistant {
    CannedAssistant::with_reply("Prepare and reconcile the Q3 figures.")
}

fn service(assistant: &CannedAssistant) -> DraftingService<CannedAssistant> {
    DraftingService::new(Arc::new(assistant.clone()))
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn task_description_sends_the_rendered_prompt(
    assistant: CannedAssistant,
) -> eyre::Result<()> {
    let service = service(&assistant);

    let suggestion = service
        .suggest_task_description("Quarterly close", "Finance")
        .await?;

    ensure!(suggestion == "Prepare and reconcile the Q3 figures.");
    let prompts = assistant.prompts();
    let Some(prompt) = prompts.first() else {
        bail!("expected one recorded prompt");
    };
    ensure!(prompt.contains("Quarterly close"));
    ensure!(prompt.contains("Finance"));
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn email_draft_passes_the_reply_context(assistant: CannedAssistant) -> eyre::Result<()> {
    let service = service(&assistant);

    service
        .draft_email("accept the proposal", Some("Can we proceed with option B?"))
        .await?;

    let prompts = assistant.prompts();
    let Some(prompt) = prompts.first() else {
        bail!("expected one recorded prompt");
    };
    ensure!(prompt.contains("option B"));
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn summary_returns_the_assistant_reply(assistant: CannedAssistant) -> eyre::Result<()> {
    let service = service(&assistant);

    let summary = service.summarize_email("Long email body here.").await?;

    ensure!(summary == "Prepare and reconcile the Q3 figures.");
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn assistant_failures_surface_as_drafting_errors(
    assistant: CannedAssistant,
) -> eyre::Result<()> {
    assistant.fail_next(AssistantError::MissingCredentials);
    let service = service(&assistant);

    let result = service.summarize_email("Anything").await;

    if !matches!(
        result,
        Err(DraftingError::Assistant(AssistantError::MissingCredentials))
    ) {
        bail!("expected a missing-credentials failure, got {result:?}");
    }
    Ok(())
}
