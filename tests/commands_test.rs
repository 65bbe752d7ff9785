//! Stateless command integration tests

mod helpers;

use assert_matches::assert_matches;
use assistant_bot::gateway::Keyboard;
use assistant_bot::handlers::Command;
use assistant_bot::models::{UnitSystem, User};
use helpers::*;

#[tokio::test]
async fn test_weather_report_for_saved_location() {
    let ctx = TestContext::new().await;
    ctx.users.insert_user(located_user(USER_ID, UnitSystem::Imperial));
    ctx.mock_weather("Syria-Jableh", weather_body()).await;

    ctx.send(command(USER_ID, Command::Weather)).await;

    let report = ctx.messenger.last_text().unwrap();
    assert!(report.contains("Temperature: 84"));
    assert!(report.contains("Wind: 8 mph WSW"));
    assert!(report.contains("City: Jableh"));
    assert!(report.contains("Units: imperial"));
}

#[tokio::test]
async fn test_weather_without_location() {
    let ctx = TestContext::new().await;
    ctx.users.insert_user(User::new(USER_ID, "Ada", None));

    ctx.send(command(USER_ID, Command::Weather)).await;

    assert_eq!(
        ctx.messenger.last_text().unwrap(),
        "I don't know your location yet. Set it with /location"
    );
}

#[tokio::test]
async fn test_weather_with_blank_stored_city() {
    let ctx = TestContext::new().await;
    let mut user = located_user(USER_ID, UnitSystem::Metric);
    user.city = Some(String::new());
    ctx.users.insert_user(user);

    ctx.send(command(USER_ID, Command::Weather)).await;

    assert_eq!(
        ctx.messenger.last_text().unwrap(),
        "I don't know your location yet. Set it with /location"
    );
    let requests = ctx.server.received_requests().await.unwrap_or_default();
    assert!(requests.is_empty());
}

#[tokio::test]
async fn test_weather_provider_failure() {
    let ctx = TestContext::new().await;
    ctx.users.insert_user(located_user(USER_ID, UnitSystem::Metric));
    ctx.mock_weather("Syria-Jableh", serde_json::json!({ "current_condition": [] })).await;

    ctx.send(command(USER_ID, Command::Weather)).await;

    assert_eq!(
        ctx.messenger.last_text().unwrap(),
        "Error getting weather information. Please try again later."
    );
}

#[tokio::test]
async fn test_inspire_offers_save_button() {
    let ctx = TestContext::new().await;
    ctx.mock_quote(200, quote_body()).await;

    ctx.send(command(USER_ID, Command::Inspire)).await;

    let sent = ctx.messenger.last().unwrap();
    assert!(sent.text.contains("Simplicity is prerequisite for reliability."));
    assert!(sent.text.contains("Edsger W. Dijkstra"));
    assert_matches!(
        sent.keyboard,
        Some(Keyboard::Inline(rows)) if rows[0][0].data == "save_to_notes"
    );
}

#[tokio::test]
async fn test_inspire_failure() {
    let ctx = TestContext::new().await;
    ctx.mock_quote(503, serde_json::json!({})).await;

    ctx.send(command(USER_ID, Command::Inspire)).await;

    assert_eq!(ctx.messenger.last_text().unwrap(), "Error Getting Quote");
}

#[tokio::test]
async fn test_help_lists_commands() {
    let ctx = TestContext::new().await;

    ctx.send(command(USER_ID, Command::Help)).await;

    let help = ctx.messenger.last_text().unwrap();
    assert!(help.contains("/weather"));
    assert!(help.contains("/notes"));
}

#[tokio::test]
async fn test_placeholder_commands() {
    let ctx = TestContext::new().await;

    for cmd in [Command::Brief, Command::Calendar, Command::Remind, Command::Request] {
        ctx.send(command(USER_ID, cmd)).await;
        assert_eq!(ctx.messenger.last_text().unwrap(), "This feature is not available yet.");
    }
    assert_eq!(ctx.state(USER_ID).await, None);
}

#[tokio::test]
async fn test_cancel_without_dialogue() {
    let ctx = TestContext::new().await;

    ctx.send(command(USER_ID, Command::Cancel)).await;

    assert_eq!(ctx.messenger.last_text().unwrap(), "Nothing to cancel.");
}
