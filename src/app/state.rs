use std::num::NonZeroUsize;
use std::time::Duration;

use anyhow::Result;
use chrono::Local;
use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use lru::LruCache;
use tokio::sync::mpsc;

use crate::{
    app::events::{
        AppEvent, schedule_retry, schedule_suggest, start_frame_task, start_refresh_task,
    },
    cli::{Cli, UnitsArg},
    data::{forecast::ForecastClient, geocode::GeocodeClient, neo::NeoClient, neo::NeoFlyby},
    domain::{
        demo,
        weather::{ForecastBundle, Location, Units},
    },
    resilience::backoff::Backoff,
    scene::{SceneParams, SceneStack, WeatherSnapshot, compose},
};

const SUGGEST_CACHE_SIZE: NonZeroUsize = NonZeroUsize::new(64).unwrap();
const SUGGESTION_COUNT: u8 = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppMode {
    Loading,
    Ready,
    Error,
    Quit,
}

/// Which day the detail panel describes. `Current` follows the live
/// observation; `Day(i)` pins the i-th forecast day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DayFocus {
    #[default]
    Current,
    Day(usize),
}

#[derive(Debug, Default)]
pub struct SearchState {
    pub active: bool,
    pub query: String,
    pub suggestions: Vec<Location>,
    pub selected: usize,
    pub loading: bool,
    pub generation: u64,
}

#[derive(Debug, Default)]
pub struct NeoPanel {
    pub flybys: Vec<NeoFlyby>,
    pub expanded: bool,
    pub loading: bool,
    pub error: Option<String>,
}

pub struct AppState {
    pub mode: AppMode,
    pub running: bool,
    pub loading_message: String,
    pub last_error: Option<String>,
    pub location: Option<Location>,
    pub weather: Option<ForecastBundle>,
    pub units: Units,
    pub day_focus: DayFocus,
    pub search: SearchState,
    pub neo: NeoPanel,
    pub scene_params: SceneParams,
    pub scene: SceneStack,
    pub animate: bool,
    pub fetch_in_flight: bool,
    pub backoff: Backoff,
    suggest_cache: LruCache<String, Vec<Location>>,
}

impl AppState {
    pub fn new(cli: &Cli) -> Self {
        Self {
            mode: AppMode::Loading,
            running: true,
            loading_message: "Starting up...".to_string(),
            last_error: None,
            location: None,
            weather: None,
            units: match cli.units {
                UnitsArg::Celsius => Units::Celsius,
                UnitsArg::Fahrenheit => Units::Fahrenheit,
            },
            day_focus: DayFocus::default(),
            search: SearchState::default(),
            neo: NeoPanel::default(),
            scene_params: SceneParams::default(),
            scene: SceneStack::default(),
            animate: !cli.no_animation,
            fetch_in_flight: false,
            backoff: Backoff::new(Duration::from_secs(10), Duration::from_secs(300)),
            suggest_cache: LruCache::new(SUGGEST_CACHE_SIZE),
        }
    }

    pub fn resize(&mut self, width: u16, height: u16) {
        self.scene.resize(width, height);
    }

    pub async fn handle_event(
        &mut self,
        event: AppEvent,
        tx: &mpsc::Sender<AppEvent>,
        cli: &Cli,
    ) -> Result<()> {
        match event {
            AppEvent::Bootstrap => {
                let fps = if cli.reduced_motion {
                    (cli.fps / 2).max(1)
                } else {
                    cli.fps
                };
                start_frame_task(tx.clone(), fps);
                start_refresh_task(tx.clone(), cli.refresh_interval);
                self.start_fetch(tx, cli).await?;
                self.start_neo_fetch(tx, cli);
            }
            AppEvent::TickFrame => {
                if self.animate {
                    self.scene.tick();
                }
            }
            AppEvent::TickRefresh => {
                if self.mode != AppMode::Quit {
                    self.start_fetch(tx, cli).await?;
                }
            }
            AppEvent::Input(event) => self.handle_input(event, tx, cli).await?,
            AppEvent::FetchStarted => {
                self.fetch_in_flight = true;
                if self.weather.is_none() {
                    self.mode = AppMode::Loading;
                }
            }
            AppEvent::Located(location) => {
                self.loading_message = format!("Loading forecast for {}...", location.name);
                self.location = Some(location.clone());
                self.fetch_forecast(tx, cli, location);
            }
            AppEvent::FetchSucceeded(bundle) => {
                self.fetch_in_flight = false;
                self.last_error = None;
                self.mode = AppMode::Ready;
                self.backoff.reset();
                self.day_focus = DayFocus::Current;
                self.apply_weather(&bundle);
                self.weather = Some(bundle);
            }
            AppEvent::FetchFailed { message, retryable } => {
                self.fetch_in_flight = false;
                self.mode = AppMode::Error;
                self.last_error = Some(message);
                self.weather = None;
                self.scene_params = SceneParams::default();
                self.scene.clear();
                if retryable {
                    schedule_retry(tx.clone(), self.backoff.next_delay());
                }
            }
            AppEvent::SuggestElapsed { generation, query } => {
                if self.search.active && generation == self.search.generation {
                    self.spawn_suggest_lookup(tx, cli, generation, query);
                }
            }
            AppEvent::SuggestionsReady {
                generation,
                query,
                result,
            } => {
                if self.search.active && generation == self.search.generation {
                    self.search.loading = false;
                    match result {
                        Ok(suggestions) => {
                            self.suggest_cache.put(query, suggestions.clone());
                            self.search.suggestions = suggestions;
                            self.search.selected = 0;
                        }
                        // Suggestion lookups fail quietly; submitting the
                        // query still goes through the full fetch path.
                        Err(_) => self.search.suggestions.clear(),
                    }
                }
            }
            AppEvent::NeoLoaded(result) => {
                self.neo.loading = false;
                match result {
                    Ok(flybys) => {
                        self.neo.flybys = flybys;
                        self.neo.error = None;
                    }
                    Err(message) => self.neo.error = Some(message),
                }
            }
            AppEvent::Quit => {
                self.mode = AppMode::Quit;
            }
        }

        Ok(())
    }

    async fn handle_input(
        &mut self,
        event: Event,
        tx: &mpsc::Sender<AppEvent>,
        cli: &Cli,
    ) -> Result<()> {
        match event {
            Event::Key(key) if key.kind == KeyEventKind::Press => {
                if ctrl_char(key, 'c') {
                    tx.send(AppEvent::Quit).await?;
                    return Ok(());
                }
                if self.search.active {
                    self.handle_search_key(key.code, tx, cli).await?;
                } else {
                    self.handle_dashboard_key(key.code, tx, cli).await?;
                }
            }
            Event::Resize(width, height) => {
                self.resize(width, height);
            }
            _ => {}
        }

        Ok(())
    }

    async fn handle_dashboard_key(
        &mut self,
        code: KeyCode,
        tx: &mpsc::Sender<AppEvent>,
        cli: &Cli,
    ) -> Result<()> {
        match code {
            KeyCode::Esc | KeyCode::Char('q') => {
                tx.send(AppEvent::Quit).await?;
            }
            KeyCode::Char('/') | KeyCode::Char('s') => self.open_search(),
            KeyCode::Char('r') => {
                self.start_fetch(tx, cli).await?;
                self.start_neo_fetch(tx, cli);
            }
            KeyCode::Char('f') => self.units = Units::Fahrenheit,
            KeyCode::Char('c') => self.units = Units::Celsius,
            KeyCode::Char('n') => self.neo.expanded = !self.neo.expanded,
            KeyCode::Left => self.focus_prev_day(),
            KeyCode::Right => self.focus_next_day(),
            _ => {}
        }
        Ok(())
    }

    async fn handle_search_key(
        &mut self,
        code: KeyCode,
        tx: &mpsc::Sender<AppEvent>,
        cli: &Cli,
    ) -> Result<()> {
        match code {
            KeyCode::Esc => self.close_search(),
            KeyCode::Enter => self.submit_search(tx, cli).await?,
            KeyCode::Up => {
                self.search.selected = self.search.selected.saturating_sub(1);
            }
            KeyCode::Down => {
                if !self.search.suggestions.is_empty() {
                    self.search.selected =
                        (self.search.selected + 1).min(self.search.suggestions.len() - 1);
                }
            }
            KeyCode::Backspace => {
                self.search.query.pop();
                self.queue_suggest(tx);
            }
            KeyCode::Char(c) => {
                self.search.query.push(c);
                self.queue_suggest(tx);
            }
            _ => {}
        }
        Ok(())
    }

    fn open_search(&mut self) {
        self.search.active = true;
        self.search.query.clear();
        self.search.suggestions.clear();
        self.search.selected = 0;
        self.search.loading = false;
    }

    fn close_search(&mut self) {
        self.search.active = false;
        self.search.suggestions.clear();
        self.search.loading = false;
    }

    /// Bumps the generation and arms the debounce timer. Cached queries
    /// answer immediately without arming anything.
    fn queue_suggest(&mut self, tx: &mpsc::Sender<AppEvent>) {
        self.search.generation = self.search.generation.wrapping_add(1);
        self.search.selected = 0;
        let query = self.search.query.trim().to_string();
        if query.is_empty() {
            self.search.suggestions.clear();
            self.search.loading = false;
            return;
        }
        if let Some(hit) = self.suggest_cache.get(&query) {
            self.search.suggestions = hit.clone();
            self.search.loading = false;
            return;
        }
        self.search.loading = true;
        schedule_suggest(tx.clone(), self.search.generation, query);
    }

    async fn submit_search(&mut self, tx: &mpsc::Sender<AppEvent>, cli: &Cli) -> Result<()> {
        let chosen = self.search.suggestions.get(self.search.selected).cloned();
        let query = self.search.query.trim().to_string();
        self.close_search();

        // A scenario name typed verbatim loads its canned weather offline.
        if let Some(scenario) = demo::find(&query) {
            tx.send(AppEvent::FetchStarted).await?;
            tx.send(AppEvent::FetchSucceeded(demo::bundle(scenario)))
                .await?;
            return Ok(());
        }

        if let Some(location) = chosen {
            tx.send(AppEvent::FetchStarted).await?;
            tx.send(AppEvent::Located(location)).await?;
            return Ok(());
        }
        if query.is_empty() {
            return Ok(());
        }
        tx.send(AppEvent::FetchStarted).await?;
        self.spawn_lookup(tx, cli, query);
        Ok(())
    }

    async fn start_fetch(&mut self, tx: &mpsc::Sender<AppEvent>, cli: &Cli) -> Result<()> {
        if self.fetch_in_flight {
            return Ok(());
        }

        if let Some(scenario) = cli.demo_scenario() {
            tx.send(AppEvent::FetchStarted).await?;
            tx.send(AppEvent::FetchSucceeded(demo::bundle(scenario))).await?;
            return Ok(());
        }

        tx.send(AppEvent::FetchStarted).await?;

        if let Some(location) = self.location.clone() {
            self.fetch_forecast(tx, cli, location);
            return Ok(());
        }

        if let (Some(lat), Some(lon)) = (cli.lat, cli.lon) {
            tx.send(AppEvent::Located(Location::from_coords(lat, lon)))
                .await?;
            return Ok(());
        }

        self.spawn_lookup(tx, cli, cli.default_city());
        Ok(())
    }

    fn spawn_lookup(&mut self, tx: &mpsc::Sender<AppEvent>, cli: &Cli, city: String) {
        self.loading_message = format!("Finding {city}...");
        let client = geocode_client(cli);
        let country = cli.country_code.clone();
        let tx2 = tx.clone();
        tokio::spawn(async move {
            match client.lookup(&city, country.as_deref()).await {
                Ok(location) => {
                    let _ = tx2.send(AppEvent::Located(location)).await;
                }
                Err(err) => {
                    let _ = tx2
                        .send(AppEvent::FetchFailed {
                            message: err.to_string(),
                            retryable: err.is_retryable(),
                        })
                        .await;
                }
            }
        });
    }

    fn fetch_forecast(&mut self, tx: &mpsc::Sender<AppEvent>, cli: &Cli, location: Location) {
        let client = forecast_client(cli);
        let tx2 = tx.clone();
        tokio::spawn(async move {
            match client.fetch(&location).await {
                Ok(bundle) => {
                    let _ = tx2.send(AppEvent::FetchSucceeded(bundle)).await;
                }
                Err(err) => {
                    let _ = tx2
                        .send(AppEvent::FetchFailed {
                            message: err.to_string(),
                            retryable: err.is_retryable(),
                        })
                        .await;
                }
            }
        });
    }

    fn spawn_suggest_lookup(
        &self,
        tx: &mpsc::Sender<AppEvent>,
        cli: &Cli,
        generation: u64,
        query: String,
    ) {
        let client = geocode_client(cli);
        let country = cli.country_code.clone();
        let tx2 = tx.clone();
        tokio::spawn(async move {
            let result = client
                .search(&query, SUGGESTION_COUNT, country.as_deref())
                .await
                .map_err(|err| err.to_string());
            let _ = tx2
                .send(AppEvent::SuggestionsReady {
                    generation,
                    query,
                    result,
                })
                .await;
        });
    }

    fn start_neo_fetch(&mut self, tx: &mpsc::Sender<AppEvent>, cli: &Cli) {
        if cli.demo.is_some() {
            return;
        }
        self.neo.loading = true;
        let client = neo_client(cli);
        let api_key = cli.api_key();
        let tx2 = tx.clone();
        tokio::spawn(async move {
            let start = Local::now().date_naive();
            let end = start + chrono::Duration::days(2);
            let result = client
                .feed(start, end, &api_key)
                .await
                .map_err(|err| err.to_string());
            let _ = tx2.send(AppEvent::NeoLoaded(result)).await;
        });
    }

    /// Recomputes the effect parameters from the fresh observation and
    /// reconciles the layer stack against them.
    fn apply_weather(&mut self, bundle: &ForecastBundle) {
        let snapshot = WeatherSnapshot {
            weather_code: bundle.current.weather_code,
            wind_speed: bundle.current.wind_speed,
            wind_gusts: bundle.current.wind_gusts,
            is_day: bundle.current.is_day,
        };
        self.scene_params = compose(&snapshot);
        self.scene.apply(&self.scene_params);
    }

    fn focus_next_day(&mut self) {
        let Some(bundle) = &self.weather else {
            return;
        };
        if bundle.daily.is_empty() {
            return;
        }
        self.day_focus = match self.day_focus {
            DayFocus::Current => DayFocus::Day(0),
            DayFocus::Day(i) => DayFocus::Day((i + 1).min(bundle.daily.len() - 1)),
        };
    }

    fn focus_prev_day(&mut self) {
        self.day_focus = match self.day_focus {
            DayFocus::Current | DayFocus::Day(0) => DayFocus::Current,
            DayFocus::Day(i) => DayFocus::Day(i - 1),
        };
    }
}

pub(crate) fn geocode_client(cli: &Cli) -> GeocodeClient {
    match &cli.geocode_url {
        Some(url) => GeocodeClient::with_base_url(url.clone()),
        None => GeocodeClient::new(),
    }
}

pub(crate) fn forecast_client(cli: &Cli) -> ForecastClient {
    match &cli.forecast_url {
        Some(url) => ForecastClient::with_base_url(url.clone()),
        None => ForecastClient::new(),
    }
}

fn neo_client(cli: &Cli) -> NeoClient {
    match &cli.neo_url {
        Some(url) => NeoClient::with_base_url(url.clone()),
        None => NeoClient::new(),
    }
}

fn ctrl_char(key: KeyEvent, target: char) -> bool {
    key.modifiers.contains(KeyModifiers::CONTROL)
        && matches!(key.code, KeyCode::Char(ch) if ch.eq_ignore_ascii_case(&target))
}
