mod common;

use common::{fixture_bundle, sheffield_cli, sheffield_location, state_with_weather};
use crossterm::event::{Event, KeyCode, KeyEvent, KeyModifiers};
use skycast::{
    app::{
        events::AppEvent,
        state::{AppMode, AppState, DayFocus},
    },
    cli::DemoArg,
    domain::weather::Units,
};
use tokio::sync::mpsc;

async fn press(state: &mut AppState, tx: &mpsc::Sender<AppEvent>, code: KeyCode) {
    let cli = sheffield_cli();
    state
        .handle_event(
            AppEvent::Input(Event::Key(KeyEvent::new(code, KeyModifiers::NONE))),
            tx,
            &cli,
        )
        .await
        .unwrap();
}

#[tokio::test]
async fn flow_unit_toggle_changes_display_units() {
    let cli = sheffield_cli();
    let mut state = state_with_weather(&cli, fixture_bundle(3));
    let (tx, _rx) = mpsc::channel(8);

    press(&mut state, &tx, KeyCode::Char('f')).await;
    assert_eq!(state.units, Units::Fahrenheit);

    press(&mut state, &tx, KeyCode::Char('c')).await;
    assert_eq!(state.units, Units::Celsius);
}

#[tokio::test]
async fn flow_fetch_success_mounts_the_scene() {
    let cli = sheffield_cli();
    let mut state = AppState::new(&cli);
    state.resize(80, 24);
    let (tx, _rx) = mpsc::channel(8);

    state
        .handle_event(AppEvent::FetchSucceeded(fixture_bundle(65)), &tx, &cli)
        .await
        .unwrap();

    assert_eq!(state.mode, AppMode::Ready);
    assert!(state.weather.is_some());
    assert!(state.last_error.is_none());
    assert_eq!(state.day_focus, DayFocus::Current);
    assert!(state.scene.has_rain());
    assert!(state.scene.has_clouds());
    assert!(!state.scene.has_snow());
}

#[tokio::test]
async fn flow_fetch_failure_clears_weather_and_unmounts_effects() {
    let cli = sheffield_cli();
    let mut state = AppState::new(&cli);
    state.resize(80, 24);
    let (tx, _rx) = mpsc::channel(8);

    state
        .handle_event(AppEvent::FetchSucceeded(fixture_bundle(65)), &tx, &cli)
        .await
        .unwrap();
    assert!(state.scene.mounted_count() > 0);

    state
        .handle_event(
            AppEvent::FetchFailed {
                message: "Could not load forecast".to_string(),
                retryable: true,
            },
            &tx,
            &cli,
        )
        .await
        .unwrap();

    assert_eq!(state.mode, AppMode::Error);
    assert!(state.weather.is_none());
    assert_eq!(state.last_error.as_deref(), Some("Could not load forecast"));
    assert_eq!(state.scene.mounted_count(), 0);
}

#[tokio::test]
async fn flow_demo_scenario_bypasses_the_network() {
    let mut cli = sheffield_cli();
    cli.demo = Some(DemoArg::Storm);
    let mut state = AppState::new(&cli);
    state.resize(80, 24);
    let (tx, mut rx) = mpsc::channel(8);

    // 'r' goes through the same fetch path as startup.
    state
        .handle_event(
            AppEvent::Input(Event::Key(KeyEvent::new(
                KeyCode::Char('r'),
                KeyModifiers::NONE,
            ))),
            &tx,
            &cli,
        )
        .await
        .unwrap();

    let started = rx.recv().await.unwrap();
    assert!(matches!(started, AppEvent::FetchStarted));
    let succeeded = rx.recv().await.unwrap();
    state.handle_event(started, &tx, &cli).await.unwrap();
    state.handle_event(succeeded, &tx, &cli).await.unwrap();

    let bundle = state.weather.as_ref().unwrap();
    assert_eq!(bundle.location, "Storm (Demo)");
    assert_eq!(state.mode, AppMode::Ready);
    assert!(state.scene.has_rain());
    assert!(!state.neo.loading);
}

#[tokio::test]
async fn flow_day_focus_clamps_at_the_last_day() {
    let cli = sheffield_cli();
    let mut state = state_with_weather(&cli, fixture_bundle(3));
    let (tx, _rx) = mpsc::channel(8);

    for _ in 0..10 {
        press(&mut state, &tx, KeyCode::Right).await;
    }
    assert_eq!(state.day_focus, DayFocus::Day(6));

    for _ in 0..10 {
        press(&mut state, &tx, KeyCode::Left).await;
    }
    assert_eq!(state.day_focus, DayFocus::Current);
}

#[tokio::test]
async fn flow_day_focus_needs_weather() {
    let cli = sheffield_cli();
    let mut state = AppState::new(&cli);
    let (tx, _rx) = mpsc::channel(8);

    press(&mut state, &tx, KeyCode::Right).await;
    assert_eq!(state.day_focus, DayFocus::Current);
}

#[tokio::test]
async fn flow_submitting_a_suggestion_requests_that_place() {
    let cli = sheffield_cli();
    let mut state = state_with_weather(&cli, fixture_bundle(3));
    let (tx, mut rx) = mpsc::channel(8);

    press(&mut state, &tx, KeyCode::Char('/')).await;
    assert!(state.search.active);

    state.search.suggestions = vec![sheffield_location()];
    state.search.selected = 0;
    press(&mut state, &tx, KeyCode::Enter).await;

    assert!(!state.search.active);
    assert!(matches!(rx.recv().await.unwrap(), AppEvent::FetchStarted));
    match rx.recv().await.unwrap() {
        AppEvent::Located(location) => assert_eq!(location.name, "Sheffield"),
        other => panic!("expected Located, got {other:?}"),
    }
}

#[tokio::test]
async fn flow_typing_a_scenario_name_loads_canned_weather() {
    let cli = sheffield_cli();
    let mut state = state_with_weather(&cli, fixture_bundle(3));
    let (tx, mut rx) = mpsc::channel(32);

    press(&mut state, &tx, KeyCode::Char('/')).await;
    for c in "storm".chars() {
        press(&mut state, &tx, KeyCode::Char(c)).await;
    }
    press(&mut state, &tx, KeyCode::Enter).await;
    assert!(!state.search.active);

    let started = rx.recv().await.unwrap();
    assert!(matches!(started, AppEvent::FetchStarted));
    let succeeded = rx.recv().await.unwrap();
    state.handle_event(started, &tx, &cli).await.unwrap();
    state.handle_event(succeeded, &tx, &cli).await.unwrap();

    let bundle = state.weather.as_ref().unwrap();
    assert_eq!(bundle.location, "Storm (Demo)");
    assert_eq!(state.mode, AppMode::Ready);
    assert!(state.scene.has_rain());
}

#[tokio::test]
async fn flow_stale_suggestion_responses_are_dropped() {
    let cli = sheffield_cli();
    let mut state = state_with_weather(&cli, fixture_bundle(3));
    let (tx, _rx) = mpsc::channel(32);

    press(&mut state, &tx, KeyCode::Char('/')).await;
    for c in "shef".chars() {
        press(&mut state, &tx, KeyCode::Char(c)).await;
    }
    let generation = state.search.generation;

    // A response for an older keystroke must not overwrite the list.
    state
        .handle_event(
            AppEvent::SuggestionsReady {
                generation: generation - 1,
                query: "she".to_string(),
                result: Ok(vec![sheffield_location()]),
            },
            &tx,
            &cli,
        )
        .await
        .unwrap();
    assert!(state.search.suggestions.is_empty());

    state
        .handle_event(
            AppEvent::SuggestionsReady {
                generation,
                query: "shef".to_string(),
                result: Ok(vec![sheffield_location()]),
            },
            &tx,
            &cli,
        )
        .await
        .unwrap();
    assert_eq!(state.search.suggestions.len(), 1);
    assert!(!state.search.loading);
}

#[tokio::test]
async fn flow_repeated_query_answers_from_the_cache() {
    let cli = sheffield_cli();
    let mut state = state_with_weather(&cli, fixture_bundle(3));
    let (tx, _rx) = mpsc::channel(32);

    press(&mut state, &tx, KeyCode::Char('/')).await;
    for c in "shef".chars() {
        press(&mut state, &tx, KeyCode::Char(c)).await;
    }
    state
        .handle_event(
            AppEvent::SuggestionsReady {
                generation: state.search.generation,
                query: "shef".to_string(),
                result: Ok(vec![sheffield_location()]),
            },
            &tx,
            &cli,
        )
        .await
        .unwrap();

    press(&mut state, &tx, KeyCode::Esc).await;
    assert!(!state.search.active);

    press(&mut state, &tx, KeyCode::Char('/')).await;
    for c in "shef".chars() {
        press(&mut state, &tx, KeyCode::Char(c)).await;
    }
    // The full query was seen before, so the list fills without a lookup.
    assert_eq!(state.search.suggestions.len(), 1);
    assert!(!state.search.loading);
}

#[tokio::test]
async fn flow_failed_suggestions_clear_quietly() {
    let cli = sheffield_cli();
    let mut state = state_with_weather(&cli, fixture_bundle(3));
    let (tx, _rx) = mpsc::channel(32);

    press(&mut state, &tx, KeyCode::Char('/')).await;
    for c in "oslo".chars() {
        press(&mut state, &tx, KeyCode::Char(c)).await;
    }
    state
        .handle_event(
            AppEvent::SuggestionsReady {
                generation: state.search.generation,
                query: "oslo".to_string(),
                result: Err("Could not look up that city".to_string()),
            },
            &tx,
            &cli,
        )
        .await
        .unwrap();

    assert!(state.search.suggestions.is_empty());
    assert!(state.last_error.is_none());
    assert!(state.search.active);
}

#[tokio::test]
async fn flow_quit_key_routes_through_the_event_channel() {
    let cli = sheffield_cli();
    let mut state = state_with_weather(&cli, fixture_bundle(3));
    let (tx, mut rx) = mpsc::channel(8);

    press(&mut state, &tx, KeyCode::Char('q')).await;
    let event = rx.recv().await.unwrap();
    assert!(matches!(event, AppEvent::Quit));

    state.handle_event(event, &tx, &cli).await.unwrap();
    assert_eq!(state.mode, AppMode::Quit);
}

#[tokio::test]
async fn flow_ctrl_c_quits_even_inside_the_search_popup() {
    let cli = sheffield_cli();
    let mut state = state_with_weather(&cli, fixture_bundle(3));
    let (tx, mut rx) = mpsc::channel(8);

    press(&mut state, &tx, KeyCode::Char('/')).await;
    state
        .handle_event(
            AppEvent::Input(Event::Key(KeyEvent::new(
                KeyCode::Char('c'),
                KeyModifiers::CONTROL,
            ))),
            &tx,
            &cli,
        )
        .await
        .unwrap();

    assert!(state.search.query.is_empty());
    assert!(matches!(rx.recv().await.unwrap(), AppEvent::Quit));
}

#[tokio::test]
async fn flow_neo_results_land_in_the_panel() {
    let cli = sheffield_cli();
    let mut state = AppState::new(&cli);
    let (tx, _rx) = mpsc::channel(8);

    state.neo.loading = true;
    state
        .handle_event(AppEvent::NeoLoaded(Ok(Vec::new())), &tx, &cli)
        .await
        .unwrap();
    assert!(!state.neo.loading);
    assert!(state.neo.error.is_none());

    state
        .handle_event(
            AppEvent::NeoLoaded(Err("Could not load NASA flybys".to_string())),
            &tx,
            &cli,
        )
        .await
        .unwrap();
    assert_eq!(
        state.neo.error.as_deref(),
        Some("Could not load NASA flybys")
    );
}

#[tokio::test]
async fn flow_flyby_panel_toggles_expansion() {
    let cli = sheffield_cli();
    let mut state = state_with_weather(&cli, fixture_bundle(3));
    let (tx, _rx) = mpsc::channel(8);

    assert!(!state.neo.expanded);
    press(&mut state, &tx, KeyCode::Char('n')).await;
    assert!(state.neo.expanded);
    press(&mut state, &tx, KeyCode::Char('n')).await;
    assert!(!state.neo.expanded);
}
