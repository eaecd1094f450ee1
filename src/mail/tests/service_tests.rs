//! Service orchestration tests for mailbox refresh and the two-phase send.

use crate::mail::{
    adapters::InMemoryMailGateway,
    domain::{Folder, MailMessage, Mailbox, OutboundEnvelope},
    ports::MailGatewayError,
    services::{MailboxError, MailboxService, SendOutcome},
};
use chrono::{Duration, Utc};
use eyre::{bail, ensure};
use mockable::DefaultClock;
use rstest::{fixture, rstest};
use std::sync::Arc;

type TestService = MailboxService<InMemoryMailGateway, DefaultClock>;

#[fixture]
fn gateway() -> InMemoryMailGateway {
    InMemoryMailGateway::new()
}

fn service(gateway: &InMemoryMailGateway) -> TestService {
    MailboxService::new(Arc::new(gateway.clone()), Arc::new(DefaultClock))
}

fn incoming(id: &str, subject: &str, minutes_ago: i64) -> MailMessage {
    MailMessage::incoming(
        id,
        "Nora Klein",
        "nora@example.com",
        subject,
        "See attached.",
        Utc::now() - Duration::minutes(minutes_ago),
    )
}

fn envelope() -> OutboundEnvelope {
    OutboundEnvelope::new("nora@example.com", "Re: Budget", "Approved, thanks.")
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn refresh_replaces_the_folder_with_fetched_messages(
    gateway: InMemoryMailGateway,
) -> eyre::Result<()> {
    gateway.seed_messages(
        "label:INBOX",
        vec![incoming("m1", "Budget", 30), incoming("m2", "Renewal", 10)],
    );
    let service = service(&gateway);
    let mut mailbox = Mailbox::new();
    mailbox.insert(incoming("stale", "Old state", 90));

    let count = service.refresh(&mut mailbox, Folder::Inbox, 50).await?;

    ensure!(count == 2);
    ensure!(mailbox.message("stale").is_none());
    ensure!(mailbox.visible(Folder::Inbox, "").len() == 2);
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn refresh_honours_the_listing_limit(gateway: InMemoryMailGateway) -> eyre::Result<()> {
    gateway.seed_messages(
        "label:INBOX",
        vec![
            incoming("m1", "One", 30),
            incoming("m2", "Two", 20),
            incoming("m3", "Three", 10),
        ],
    );
    let service = service(&gateway);
    let mut mailbox = Mailbox::new();

    let count = service.refresh(&mut mailbox, Folder::Inbox, 2).await?;

    ensure!(count == 2);
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn refresh_retags_messages_with_the_requested_folder(
    gateway: InMemoryMailGateway,
) -> eyre::Result<()> {
    gateway.seed_messages("in:snoozed", vec![incoming("m1", "Later", 30)]);
    let service = service(&gateway);
    let mut mailbox = Mailbox::new();

    service.refresh(&mut mailbox, Folder::Snoozed, 50).await?;

    let Some(message) = mailbox.message("m1") else {
        bail!("expected the fetched message");
    };
    ensure!(message.folder == Folder::Snoozed);
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn empty_inbox_refresh_inserts_the_welcome_placeholder(
    gateway: InMemoryMailGateway,
) -> eyre::Result<()> {
    let service = service(&gateway);
    let mut mailbox = Mailbox::new();

    let count = service.refresh(&mut mailbox, Folder::Inbox, 50).await?;

    ensure!(count == 0);
    let Some(welcome) = mailbox.message("welcome") else {
        bail!("expected the welcome placeholder");
    };
    ensure!(welcome.is_starred);
    ensure!(welcome.folder == Folder::Inbox);
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn empty_non_inbox_refresh_stays_empty(gateway: InMemoryMailGateway) -> eyre::Result<()> {
    let service = service(&gateway);
    let mut mailbox = Mailbox::new();

    let count = service.refresh(&mut mailbox, Folder::Snoozed, 50).await?;

    ensure!(count == 0);
    ensure!(mailbox.messages().is_empty());
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn listing_failure_degrades_to_a_visible_placeholder(
    gateway: InMemoryMailGateway,
) -> eyre::Result<()> {
    gateway.fail_next(MailGatewayError::Provider("quota exceeded".to_owned()));
    let service = service(&gateway);
    let mut mailbox = Mailbox::new();

    let count = service.refresh(&mut mailbox, Folder::Inbox, 50).await?;

    ensure!(count == 0);
    let Some(placeholder) = mailbox.message("load-error") else {
        bail!("expected the load-failure placeholder");
    };
    ensure!(placeholder.body.contains("quota exceeded"));
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn expired_session_aborts_the_refresh(gateway: InMemoryMailGateway) -> eyre::Result<()> {
    gateway.fail_next(MailGatewayError::AuthExpired);
    let service = service(&gateway);
    let mut mailbox = Mailbox::new();
    mailbox.insert(incoming("m1", "Keep me", 30));

    let result = service.refresh(&mut mailbox, Folder::Inbox, 50).await;

    ensure!(result == Err(MailboxError::SessionExpired));
    ensure!(mailbox.message("m1").is_some());
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn begin_send_applies_a_provisional_sent_entity(
    gateway: InMemoryMailGateway,
) -> eyre::Result<()> {
    let service = service(&gateway);
    let mut mailbox = Mailbox::new();

    let provisional_id =
        service.begin_send(&mut mailbox, &envelope(), "Ada Lindgren", "ada@example.com");

    ensure!(provisional_id.starts_with("pending-"));
    ensure!(mailbox.is_pending(&provisional_id));
    let Some(provisional) = mailbox.message(&provisional_id) else {
        bail!("expected the provisional message");
    };
    ensure!(provisional.folder == Folder::Sent);
    ensure!(provisional.is_read);
    ensure!(gateway.sent().is_empty());
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn confirmed_send_adopts_the_provider_receipt(
    gateway: InMemoryMailGateway,
) -> eyre::Result<()> {
    let service = service(&gateway);
    let mut mailbox = Mailbox::new();

    let outcome = service
        .send(&mut mailbox, &envelope(), "Ada Lindgren", "ada@example.com")
        .await?;

    let SendOutcome::Confirmed(receipt) = outcome else {
        bail!("expected a confirmed send, got {outcome:?}");
    };
    ensure!(receipt.id == "msg-1");
    ensure!(mailbox.message("msg-1").is_some());
    ensure!(!mailbox.is_pending("msg-1"));
    ensure!(gateway.sent().len() == 1);
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn reply_thread_survives_the_round_trip(gateway: InMemoryMailGateway) -> eyre::Result<()> {
    let service = service(&gateway);
    let mut mailbox = Mailbox::new();
    let reply = envelope().with_reply("thread-9", "<abc@mail.example.com>");

    let outcome = service
        .send(&mut mailbox, &reply, "Ada Lindgren", "ada@example.com")
        .await?;

    let SendOutcome::Confirmed(receipt) = outcome else {
        bail!("expected a confirmed send, got {outcome:?}");
    };
    ensure!(receipt.thread_id.as_deref() == Some("thread-9"));
    let Some(sent) = mailbox.message(&receipt.id) else {
        bail!("expected the confirmed message");
    };
    ensure!(sent.thread_id.as_deref() == Some("thread-9"));
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn failed_send_rolls_the_provisional_back(gateway: InMemoryMailGateway) -> eyre::Result<()> {
    gateway.fail_next(MailGatewayError::Provider("recipient refused".to_owned()));
    let service = service(&gateway);
    let mut mailbox = Mailbox::new();

    let result = service
        .send(&mut mailbox, &envelope(), "Ada Lindgren", "ada@example.com")
        .await;

    let Err(MailboxError::SendFailed(reason)) = result else {
        bail!("expected a send failure, got {result:?}");
    };
    ensure!(reason.contains("recipient refused"));
    ensure!(mailbox.messages().is_empty());
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn expired_session_rolls_back_and_signals(gateway: InMemoryMailGateway) -> eyre::Result<()> {
    gateway.fail_next(MailGatewayError::AuthExpired);
    let service = service(&gateway);
    let mut mailbox = Mailbox::new();

    let result = service
        .send(&mut mailbox, &envelope(), "Ada Lindgren", "ada@example.com")
        .await;

    ensure!(result == Err(MailboxError::SessionExpired));
    ensure!(mailbox.messages().is_empty());
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn completion_for_a_deleted_provisional_is_discarded(
    gateway: InMemoryMailGateway,
) -> eyre::Result<()> {
    let service = service(&gateway);
    let mut mailbox = Mailbox::new();
    let message = envelope();
    let provisional_id =
        service.begin_send(&mut mailbox, &message, "Ada Lindgren", "ada@example.com");
    ensure!(mailbox.remove(&provisional_id).is_some());

    let outcome = service
        .complete_send(&mut mailbox, &provisional_id, &message)
        .await?;

    ensure!(outcome == SendOutcome::DiscardedStale);
    ensure!(mailbox.messages().is_empty());
    ensure!(gateway.sent().is_empty());
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn profile_loads_from_the_gateway(gateway: InMemoryMailGateway) -> eyre::Result<()> {
    let service = service(&gateway);

    let profile = service.load_profile().await?;

    ensure!(profile.email == "account@example.com");
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn profile_fetch_maps_auth_expiry(gateway: InMemoryMailGateway) -> eyre::Result<()> {
    gateway.fail_next(MailGatewayError::AuthExpired);
    let service = service(&gateway);

    let result = service.load_profile().await;

    ensure!(result == Err(MailboxError::SessionExpired));
    Ok(())
}
