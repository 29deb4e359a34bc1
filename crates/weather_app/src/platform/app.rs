use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::time::{Duration, Instant};

use anyhow::Context;
use chrono::Local;
use log::LevelFilter;
use weather_core::{AppState, Dashboard, Msg};
use weather_logging::{weather_info, weather_warn};

use super::config::{self, AppConfig, CONFIG_FILENAME};
use super::effects::EffectRunner;
use super::ui::commands::{self, Command, HELP};
use super::ui::render;

pub fn run_app() -> anyhow::Result<()> {
    let config_path = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(CONFIG_FILENAME));
    let loaded = config::load(&config_path);
    let config = match &loaded {
        Ok(Some(config)) => config.clone(),
        Ok(None) | Err(_) => AppConfig::default(),
    };

    let log_dir = std::env::current_dir().context("resolving working directory")?;
    weather_logging::initialize(config.log_destination, LevelFilter::Info, &log_dir);
    match loaded {
        Ok(Some(_)) => weather_info!("Loaded configuration from {:?}", config_path),
        Ok(None) => weather_info!("No configuration at {:?}, using defaults", config_path),
        Err(err) => weather_warn!("{}; using defaults", err),
    }

    let mut dashboard = Dashboard::new(AppState::new());
    // Registered for the lifetime of the session and released on exit.
    let printer = dashboard.subscribe(|event| {
        println!("[{}] {}", Local::now().format("%H:%M:%S"), render::describe(event));
    });

    let mut runner = EffectRunner::new(config.fetch_settings());
    let effects = dashboard.dispatch(Msg::Started);
    report(runner.run(effects));
    wait_for_initial_fetches(&mut dashboard, &mut runner, &config);
    print_view(&mut dashboard);
    println!("{HELP}");

    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut line = String::new();
    loop {
        print!("> ");
        io::stdout().flush().context("flushing prompt")?;
        line.clear();
        if input.read_line(&mut line).context("reading command")? == 0 {
            break;
        }

        for msg in runner.poll() {
            let effects = dashboard.dispatch(msg);
            report(runner.run(effects));
        }

        match commands::parse(&line) {
            Ok(None) => continue,
            Ok(Some(Command::Quit)) => break,
            Ok(Some(Command::Help)) => println!("{HELP}"),
            Ok(Some(Command::Show)) => {
                for row in render::render(&dashboard.view()) {
                    println!("{row}");
                }
            }
            Ok(Some(Command::Dispatch(msg))) => {
                let effects = dashboard.dispatch(msg);
                report(runner.run(effects));
            }
            Err(err) => println!("{err}"),
        }
        print_view(&mut dashboard);
    }

    dashboard.unsubscribe(printer);
    weather_info!("Session finished");
    Ok(())
}

fn wait_for_initial_fetches(
    dashboard: &mut Dashboard,
    runner: &mut EffectRunner,
    config: &AppConfig,
) {
    let deadline = Instant::now() + Duration::from_secs(config.request_timeout_secs.max(1) + 5);
    while runner.in_flight() > 0 {
        let remaining = deadline.saturating_duration_since(Instant::now());
        if remaining.is_zero() {
            weather_warn!("Gave up waiting for {} fetches", runner.in_flight());
            break;
        }
        let Some(msg) = runner.wait(remaining) else {
            continue;
        };
        let effects = dashboard.dispatch(msg);
        report(runner.run(effects));
    }
}

fn print_view(dashboard: &mut Dashboard) {
    if !dashboard.consume_dirty() {
        return;
    }
    for row in render::render(&dashboard.view()) {
        println!("{row}");
    }
}

fn report(messages: Vec<String>) {
    for message in messages {
        println!("{message}");
    }
}
