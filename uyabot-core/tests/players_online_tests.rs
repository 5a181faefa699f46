// File: uyabot-core/tests/players_online_tests.rs

use std::collections::HashMap;
use std::time::Duration;

use async_trait::async_trait;
use mockall::mock;
use twilight_model::channel::ChannelType;
use twilight_model::channel::message::Embed;
use twilight_model::id::Id;
use twilight_model::id::marker::ChannelMarker;

use uyabot_common::error::{Endpoint, FetchError, PublishError};
use uyabot_common::models::{LookupTables, PublishedMessage, TextChannel};
use uyabot_common::traits::api::StatusChannelApi;
use uyabot_core::fetch::fetch_snapshot;
use uyabot_core::publisher::PublisherState;
use uyabot_core::tasks::players_online::{CycleOutcome, run_cycle};
use uyabot_core::{Error, HttpClient, HttpResponse, StatusConfig};

mock! {
    ChannelApi {}
    #[async_trait]
    impl StatusChannelApi for ChannelApi {
        async fn resolve_channel(&self, channel_id: Id<ChannelMarker>) -> Result<Option<TextChannel>, PublishError>;
        async fn send_embed(&self, channel: &TextChannel, embed: &Embed) -> Result<PublishedMessage, PublishError>;
        async fn edit_embed(&self, message: &PublishedMessage, embed: &Embed) -> Result<(), PublishError>;
    }
}

mock! {
    Http {}
    #[async_trait]
    impl HttpClient for Http {
        async fn get(&self, url: &str, headers: HashMap<String, String>) -> Result<HttpResponse, Error>;
    }
}

const CHANNEL_ID: u64 = 1234;
const MESSAGE_ID: u64 = 5678;

const PLAYERS_JSON: &str = r#"[
    {"username": "Ratchet", "region": "NA", "clan": "Lombax", "clan_tag": "LMB", "status": 1},
    {"username": "Clank", "region": "EU", "clan": "", "clan_tag": "", "status": 1}
]"#;

const GAMES_JSON: &str = r#"[
    {
        "game_name": "RnJpZGF5IENURg==",
        "game_mode": "CTF",
        "submode": "Normal",
        "map": "Bakisi_Isles",
        "game_length": "15",
        "frag": null,
        "cap_limit": 3,
        "max_players": 8,
        "started_date": 0,
        "players": [{"username": "Ratchet"}, {"username": "Clank"}]
    }
]"#;

fn config() -> StatusConfig {
    StatusConfig::new(
        "http://uya.local:8281",
        CHANNEL_ID,
        Duration::from_secs(60),
        LookupTables::default(),
    )
    .unwrap()
}

fn text_channel() -> TextChannel {
    TextChannel {
        id: Id::new(CHANNEL_ID),
        kind: ChannelType::GuildText,
    }
}

fn published() -> PublishedMessage {
    PublishedMessage {
        channel_id: Id::new(CHANNEL_ID),
        message_id: Id::new(MESSAGE_ID),
    }
}

fn healthy_server() -> MockHttp {
    let mut http = MockHttp::new();
    http.expect_get()
        .withf(|url, _| url.ends_with("/robo/players"))
        .returning(|_, _| Ok(HttpResponse::new(200, PLAYERS_JSON)));
    http.expect_get()
        .withf(|url, _| url.ends_with("/robo/games"))
        .returning(|_, _| Ok(HttpResponse::new(200, GAMES_JSON)));
    http
}

fn channel_api_that_resolves() -> MockChannelApi {
    let mut api = MockChannelApi::new();
    api.expect_resolve_channel()
        .returning(|_| Ok(Some(text_channel())));
    api
}

#[tokio::test]
async fn test_first_cycle_sends_then_later_cycles_edit() -> Result<(), Error> {
    let http = healthy_server();
    let mut api = channel_api_that_resolves();
    api.expect_send_embed()
        .times(1)
        .withf(|channel, embed| {
            channel.id.get() == CHANNEL_ID
                && embed.title.as_deref() == Some("Players Online - 2")
                && embed.fields.iter().any(|f| f.name == "Friday CTF  -  (2/8)")
        })
        .returning(|_, _| Ok(published()));
    api.expect_edit_embed()
        .times(2)
        .withf(|message, _| message.message_id.get() == MESSAGE_ID)
        .returning(|_, _| Ok(()));

    let config = config();
    let mut state = PublisherState::new();

    for _ in 0..3 {
        let outcome = run_cycle(&api, &http, &config, &mut state).await?;
        assert_eq!(outcome, CycleOutcome::Published);
        assert_eq!(state.message(), Some(&published()));
    }
    Ok(())
}

#[tokio::test]
async fn test_players_failure_stops_cycle_before_publish() {
    let mut http = MockHttp::new();
    http.expect_get()
        .withf(|url, _| url.ends_with("/robo/players"))
        .returning(|_, _| Ok(HttpResponse::new(500, "database offline")));
    http.expect_get()
        .withf(|url, _| url.ends_with("/robo/games"))
        .returning(|_, _| Ok(HttpResponse::new(200, GAMES_JSON)));

    let mut api = channel_api_that_resolves();
    api.expect_send_embed().times(0);
    api.expect_edit_embed().times(0);

    let mut state = PublisherState::new();
    let result = run_cycle(&api, &http, &config(), &mut state).await;

    match result {
        Err(Error::Fetch(FetchError::Status { endpoint, status, detail })) => {
            assert_eq!(endpoint, Endpoint::Players);
            assert_eq!(status, 500);
            assert_eq!(detail, "database offline");
        }
        other => panic!("expected players fetch error, got {other:?}"),
    }
    assert!(state.message().is_none());
}

#[tokio::test]
async fn test_missing_channel_is_a_silent_no_op() -> Result<(), Error> {
    let mut http = MockHttp::new();
    http.expect_get().times(0);

    let mut api = MockChannelApi::new();
    api.expect_resolve_channel().returning(|_| Ok(None));
    api.expect_send_embed().times(0);
    api.expect_edit_embed().times(0);

    let mut state = PublisherState::new();
    let outcome = run_cycle(&api, &http, &config(), &mut state).await?;
    assert_eq!(outcome, CycleOutcome::Skipped);
    Ok(())
}

#[tokio::test]
async fn test_failed_edit_keeps_handle_for_next_cycle() -> Result<(), Error> {
    let http = healthy_server();
    let mut api = channel_api_that_resolves();
    api.expect_send_embed().times(1).returning(|_, _| Ok(published()));

    let mut seq = mockall::Sequence::new();
    api.expect_edit_embed()
        .times(1)
        .in_sequence(&mut seq)
        .returning(|message, _| {
            Err(PublishError::Edit {
                message_id: message.message_id.get(),
                detail: "Unknown Message".into(),
            })
        });
    api.expect_edit_embed()
        .times(1)
        .in_sequence(&mut seq)
        .withf(|message, _| message.message_id.get() == MESSAGE_ID)
        .returning(|_, _| Ok(()));

    let config = config();
    let mut state = PublisherState::new();

    run_cycle(&api, &http, &config, &mut state).await?;

    let second = run_cycle(&api, &http, &config, &mut state).await;
    assert!(matches!(second, Err(Error::Publish(PublishError::Edit { .. }))));
    assert_eq!(state.message(), Some(&published()));

    run_cycle(&api, &http, &config, &mut state).await?;
    assert_eq!(state.message(), Some(&published()));
    Ok(())
}

#[tokio::test]
async fn test_failed_first_send_retains_nothing() {
    let http = healthy_server();
    let mut api = channel_api_that_resolves();
    api.expect_send_embed().times(1).returning(|channel, _| {
        Err(PublishError::Send {
            channel_id: channel.id.get(),
            detail: "Missing Permissions".into(),
        })
    });
    api.expect_edit_embed().times(0);

    let mut state = PublisherState::new();
    let result = run_cycle(&api, &http, &config(), &mut state).await;
    assert!(matches!(result, Err(Error::Publish(PublishError::Send { .. }))));
    assert!(state.message().is_none());
}

#[tokio::test]
async fn test_fetch_snapshot_parses_both_endpoints() -> Result<(), FetchError> {
    let http = healthy_server();
    let snapshot = fetch_snapshot(&http, &config().api_url).await?;

    assert_eq!(snapshot.players.len(), 2);
    assert_eq!(snapshot.players[0].clan_tag, "LMB");
    assert_eq!(snapshot.players[0].status, "1");
    assert_eq!(snapshot.games.len(), 1);
    assert_eq!(snapshot.games[0].cap_limit, Some(3));
    assert_eq!(snapshot.games[0].players.len(), 2);
    Ok(())
}

#[tokio::test]
async fn test_fetch_snapshot_reports_games_endpoint() {
    let mut http = MockHttp::new();
    http.expect_get()
        .withf(|url, _| url.to_string() == "http://uya.local:8281/robo/players")
        .returning(|_, _| Ok(HttpResponse::new(200, "[]")));
    http.expect_get()
        .withf(|url, _| url.to_string() == "http://uya.local:8281/robo/games")
        .returning(|_, _| Ok(HttpResponse::new(200, r#"{"error": "not a list"}"#)));

    let err = fetch_snapshot(&http, &config().api_url).await.unwrap_err();
    assert_eq!(err.endpoint(), Endpoint::Games);
    assert!(matches!(err, FetchError::Decode { .. }));
}

#[tokio::test]
async fn test_fetch_snapshot_maps_transport_errors() {
    let mut http = MockHttp::new();
    http.expect_get()
        .returning(|_, _| Err(Error::Config("connection refused".into())));

    let err = fetch_snapshot(&http, &config().api_url).await.unwrap_err();
    assert!(matches!(err, FetchError::Transport { endpoint: Endpoint::Players, .. }));
}
