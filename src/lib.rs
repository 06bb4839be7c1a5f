pub mod app;
pub mod cli;
pub mod data;
pub mod domain;
pub mod resilience;
pub mod scene;
pub mod ui;

#[cfg(test)]
pub(crate) mod test_support;

use std::io::{self, Stdout};

use anyhow::Result;
use app::events::{AppEvent, spawn_input_task};
use app::state::{AppMode, AppState, forecast_client, geocode_client};
use cli::{Cli, UnitsArg};
use crossterm::{
    event::DisableMouseCapture,
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use domain::{
    demo,
    format::format_temp,
    summary::current_summary,
    weather::{ForecastBundle, Location, Units, convert_temp},
};
use futures::StreamExt;
use ratatui::{Terminal, backend::CrosstermBackend};
use scene::classify::condition_from_code;
use tokio::sync::mpsc;

pub async fn run(cli: Cli) -> Result<()> {
    if cli.one_shot {
        return run_one_shot(&cli).await;
    }

    let mut terminal = setup_terminal()?;
    let result = run_inner(&mut terminal, cli).await;
    restore_terminal(&mut terminal)?;
    result
}

async fn run_inner(terminal: &mut Terminal<CrosstermBackend<Stdout>>, cli: Cli) -> Result<()> {
    let (tx, mut rx) = mpsc::channel::<AppEvent>(256);
    let input_stream = spawn_input_task();
    tokio::pin!(input_stream);

    let mut app = AppState::new(&cli);
    let size = terminal.size()?;
    app.resize(size.width, size.height);

    tx.send(AppEvent::Bootstrap).await?;

    while app.running {
        tokio::select! {
            maybe_input = input_stream.next() => {
                if let Some(input) = maybe_input {
                    app.handle_event(AppEvent::Input(input), &tx, &cli).await?;
                }
            }
            maybe_event = rx.recv() => {
                if let Some(event) = maybe_event {
                    app.handle_event(event, &tx, &cli).await?;
                }
            }
        }

        terminal.draw(|frame| ui::render(frame, &app))?;

        if app.mode == AppMode::Quit {
            app.running = false;
        }
    }

    Ok(())
}

/// Non-interactive mode: fetch once, print a short report, exit.
async fn run_one_shot(cli: &Cli) -> Result<()> {
    let bundle = fetch_snapshot(cli).await?;
    let units = match cli.units {
        UnitsArg::Celsius => Units::Celsius,
        UnitsArg::Fahrenheit => Units::Fahrenheit,
    };

    let temp = bundle.current.temperature.map(|t| convert_temp(t, units));
    println!("{}", bundle.location);
    println!(
        "{}{}  {}",
        format_temp(temp),
        units.suffix(),
        condition_from_code(bundle.current.weather_code)
    );
    if let (Some(high), Some(low)) = (bundle.today_high(), bundle.today_low()) {
        println!(
            "H {}{}  L {}{}",
            format_temp(Some(convert_temp(high, units))),
            units.suffix(),
            format_temp(Some(convert_temp(low, units))),
            units.suffix()
        );
    }
    let summary = current_summary(&bundle.current);
    if !summary.is_empty() {
        println!("{summary}");
    }
    Ok(())
}

async fn fetch_snapshot(cli: &Cli) -> Result<ForecastBundle> {
    if let Some(scenario) = cli.demo_scenario() {
        return Ok(demo::bundle(scenario));
    }
    let location = if let (Some(lat), Some(lon)) = (cli.lat, cli.lon) {
        Location::from_coords(lat, lon)
    } else {
        geocode_client(cli)
            .lookup(&cli.default_city(), cli.country_code.as_deref())
            .await?
    };
    Ok(forecast_client(cli).fetch(&location).await?)
}

fn setup_terminal() -> Result<Terminal<CrosstermBackend<Stdout>>> {
    install_panic_hook();
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    Ok(Terminal::new(backend)?)
}

fn restore_terminal(terminal: &mut Terminal<CrosstermBackend<Stdout>>) -> Result<()> {
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;
    Ok(())
}

fn install_panic_hook() {
    let existing = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic| {
        let _ = disable_raw_mode();
        let mut stdout = io::stdout();
        let _ = execute!(stdout, LeaveAlternateScreen, DisableMouseCapture);
        existing(panic);
    }));
}
