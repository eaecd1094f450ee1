//! Unit tests for the session mailbox read models and pending-send tags.

use crate::mail::domain::{Folder, MailMessage, Mailbox, SendReceipt};
use chrono::{Duration, Utc};
use eyre::{bail, ensure};
use rstest::rstest;

fn inbox_message(id: &str, subject: &str, minutes_ago: i64) -> MailMessage {
    MailMessage::incoming(
        id,
        "Nora Klein",
        "nora@example.com",
        subject,
        "Let me know what you think.",
        Utc::now() - Duration::minutes(minutes_ago),
    )
}

fn seeded_mailbox() -> Mailbox {
    let mut mailbox = Mailbox::new();
    mailbox.insert(inbox_message("m1", "Budget sign-off", 30));
    mailbox.insert(inbox_message("m2", "Lunch on Friday?", 20));
    mailbox.insert(inbox_message("m3", "Contract renewal", 10));
    mailbox
}

#[rstest]
fn visible_orders_newest_first() -> eyre::Result<()> {
    let mailbox = seeded_mailbox();

    let visible = mailbox.visible(Folder::Inbox, "");
    let ids: Vec<&str> = visible.iter().map(|message| message.id.as_str()).collect();

    ensure!(ids == ["m3", "m2", "m1"]);
    Ok(())
}

#[rstest]
#[case("contract", &["m3"])]
#[case("NORA", &["m3", "m2", "m1"])]
#[case("let me know", &["m3", "m2", "m1"])]
#[case("quarterly", &[])]
fn search_matches_subject_sender_and_body(
    #[case] needle: &str,
    #[case] expected: &[&str],
) -> eyre::Result<()> {
    let mailbox = seeded_mailbox();

    let visible = mailbox.visible(Folder::Inbox, needle);
    let ids: Vec<&str> = visible.iter().map(|message| message.id.as_str()).collect();

    ensure!(ids == expected);
    Ok(())
}

#[rstest]
fn starred_folder_selects_by_flag_across_folders() -> eyre::Result<()> {
    let mut mailbox = seeded_mailbox();
    let mut sent = inbox_message("s1", "Re: Budget sign-off", 5);
    sent.folder = Folder::Sent;
    sent.is_starred = true;
    mailbox.insert(sent);
    ensure!(mailbox.toggle_star("m1"));

    let visible = mailbox.visible(Folder::Starred, "");
    let ids: Vec<&str> = visible.iter().map(|message| message.id.as_str()).collect();

    ensure!(ids == ["s1", "m1"]);
    Ok(())
}

#[rstest]
fn unread_count_tracks_inbox_reads() -> eyre::Result<()> {
    let mut mailbox = seeded_mailbox();
    ensure!(mailbox.unread_count() == 3);

    ensure!(mailbox.mark_read("m2"));

    ensure!(mailbox.unread_count() == 2);
    ensure!(!mailbox.mark_read("missing"));
    Ok(())
}

#[rstest]
fn trashed_messages_leave_the_inbox_view() -> eyre::Result<()> {
    let mut mailbox = seeded_mailbox();

    ensure!(mailbox.move_to_trash("m1"));

    ensure!(mailbox.visible(Folder::Inbox, "").len() == 2);
    ensure!(mailbox.visible(Folder::Trash, "").len() == 1);
    Ok(())
}

#[rstest]
fn replace_folder_leaves_other_folders_untouched() -> eyre::Result<()> {
    let mut mailbox = seeded_mailbox();
    let mut sent = inbox_message("s1", "Sent earlier", 60);
    sent.folder = Folder::Sent;
    mailbox.insert(sent);

    mailbox.replace_folder(Folder::Inbox, vec![inbox_message("fresh", "New thread", 1)]);

    ensure!(mailbox.visible(Folder::Inbox, "").len() == 1);
    ensure!(mailbox.visible(Folder::Sent, "").len() == 1);
    ensure!(mailbox.message("m1").is_none());
    Ok(())
}

#[rstest]
fn confirm_send_adopts_the_provider_receipt() -> eyre::Result<()> {
    let mut mailbox = Mailbox::new();
    let mut provisional = inbox_message("pending-1", "Outgoing", 0);
    provisional.folder = Folder::Sent;
    mailbox.insert(provisional);
    mailbox.begin_pending("pending-1");

    let receipt = SendReceipt {
        id: "msg-77".to_owned(),
        thread_id: Some("thread-9".to_owned()),
    };
    ensure!(mailbox.confirm_send("pending-1", &receipt));

    ensure!(!mailbox.is_pending("pending-1"));
    ensure!(mailbox.message("pending-1").is_none());
    let Some(confirmed) = mailbox.message("msg-77") else {
        bail!("expected the confirmed message under its provider id");
    };
    ensure!(confirmed.thread_id.as_deref() == Some("thread-9"));
    Ok(())
}

#[rstest]
fn deleting_a_provisional_drops_its_pending_tag() -> eyre::Result<()> {
    let mut mailbox = Mailbox::new();
    let mut provisional = inbox_message("pending-1", "Outgoing", 0);
    provisional.folder = Folder::Sent;
    mailbox.insert(provisional);
    mailbox.begin_pending("pending-1");

    ensure!(mailbox.remove("pending-1").is_some());

    ensure!(!mailbox.is_pending("pending-1"));
    let receipt = SendReceipt {
        id: "msg-1".to_owned(),
        thread_id: None,
    };
    ensure!(!mailbox.confirm_send("pending-1", &receipt));
    Ok(())
}

#[rstest]
fn trashing_a_provisional_also_drops_its_pending_tag() -> eyre::Result<()> {
    let mut mailbox = Mailbox::new();
    let mut provisional = inbox_message("pending-1", "Outgoing", 0);
    provisional.folder = Folder::Sent;
    mailbox.insert(provisional);
    mailbox.begin_pending("pending-1");

    ensure!(mailbox.move_to_trash("pending-1"));

    ensure!(!mailbox.is_pending("pending-1"));
    Ok(())
}
