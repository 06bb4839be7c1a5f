use std::time::Duration;

use crossterm::event::{Event, EventStream};
use futures::StreamExt;
use rand::Rng;
use tokio::time::{interval, sleep};

use crate::data::neo::NeoFlyby;
use crate::domain::weather::{ForecastBundle, Location};

/// Pause between the last keystroke in the search box and the suggestion
/// lookup, so we do not hit the geocoder on every character.
const SUGGEST_DEBOUNCE: Duration = Duration::from_millis(300);

#[derive(Debug)]
pub enum AppEvent {
    Bootstrap,
    TickFrame,
    TickRefresh,
    Input(Event),
    FetchStarted,
    Located(Location),
    FetchSucceeded(ForecastBundle),
    FetchFailed {
        message: String,
        retryable: bool,
    },
    SuggestElapsed {
        generation: u64,
        query: String,
    },
    SuggestionsReady {
        generation: u64,
        query: String,
        result: Result<Vec<Location>, String>,
    },
    NeoLoaded(Result<Vec<NeoFlyby>, String>),
    Quit,
}

pub fn spawn_input_task() -> impl futures::Stream<Item = Event> {
    EventStream::new().filter_map(|event| async move { event.ok() })
}

/// Animation clock. Callers decide the effective rate; anything below
/// 1 fps is clamped so the ticker never stalls.
pub fn start_frame_task(tx: tokio::sync::mpsc::Sender<AppEvent>, fps: u8) {
    let fps = fps.max(1);
    tokio::spawn(async move {
        let mut ticker = interval(Duration::from_millis(1000_u64 / u64::from(fps)));
        loop {
            ticker.tick().await;
            if tx.send(AppEvent::TickFrame).await.is_err() {
                break;
            }
        }
    });
}

/// Periodic forecast refresh with a little jitter so restarting a fleet of
/// terminals does not synchronise their requests.
pub fn start_refresh_task(tx: tokio::sync::mpsc::Sender<AppEvent>, refresh_secs: u64) {
    tokio::spawn(async move {
        let base = refresh_secs.max(10) as f32;
        loop {
            let jitter = rand::rng().random_range(0.9..1.1);
            sleep(Duration::from_secs_f32(base * jitter)).await;
            if tx.send(AppEvent::TickRefresh).await.is_err() {
                break;
            }
        }
    });
}

pub fn schedule_retry(tx: tokio::sync::mpsc::Sender<AppEvent>, delay: Duration) {
    tokio::spawn(async move {
        sleep(delay.max(Duration::from_secs(1))).await;
        let _ = tx.send(AppEvent::TickRefresh).await;
    });
}

/// Fires `SuggestElapsed` after the debounce window. The generation lets
/// the state discard timers made stale by further typing.
pub fn schedule_suggest(tx: tokio::sync::mpsc::Sender<AppEvent>, generation: u64, query: String) {
    tokio::spawn(async move {
        sleep(SUGGEST_DEBOUNCE).await;
        let _ = tx
            .send(AppEvent::SuggestElapsed { generation, query })
            .await;
    });
}
