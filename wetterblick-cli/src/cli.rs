use anyhow::Context;
use clap::Parser;
use inquire::Confirm;
use wetterblick_core::{Coordinate, OpenMeteoProvider, ViewState, WeatherController};

use crate::{locator::TerminalLocator, render};

/// Top-level CLI struct.
#[derive(Debug, Parser)]
#[command(
    name = "wetterblick",
    version,
    about = "Aktuelles Wetter und 7-Tage-Vorhersage im Terminal"
)]
pub struct Cli {
    /// Breitengrad des Standorts
    #[arg(long, allow_negative_numbers = true)]
    pub lat: f64,

    /// Längengrad des Standorts
    #[arg(long, allow_negative_numbers = true)]
    pub lon: f64,

    /// Anzeigename für den Standort, z. B. "Aktueller Standort"
    #[arg(long)]
    pub name: Option<String>,

    /// Standortfreigabe ohne Rückfrage erteilen
    #[arg(long)]
    pub allow_location: bool,

    /// Nur einmal abrufen und beenden
    #[arg(long)]
    pub one_shot: bool,
}

impl Cli {
    pub async fn run(self) -> anyhow::Result<()> {
        let Cli { lat, lon, name, allow_location, one_shot } = self;

        let locator = TerminalLocator::new(Coordinate::new(lat, lon), allow_location);
        let provider =
            OpenMeteoProvider::new().context("HTTP-Client konnte nicht initialisiert werden")?;

        let mut controller = WeatherController::new(locator, provider);
        if let Some(name) = name {
            controller = controller.with_label(name);
        }

        loop {
            println!("{}", render::render(&ViewState::Loading));
            let state = controller.refresh().await.clone();
            println!("{}", render::render(&state));

            match state {
                ViewState::Ready(_) => {
                    if one_shot {
                        return Ok(());
                    }
                    if !confirm("Aktualisieren?", false) {
                        return Ok(());
                    }
                }
                ViewState::Error(message) => {
                    if one_shot || !confirm("Erneut versuchen?", true) {
                        anyhow::bail!(message);
                    }
                }
                // refresh() always settles in Ready or Error.
                ViewState::Loading => {}
            }
        }
    }
}

fn confirm(question: &str, default: bool) -> bool {
    // A failed prompt (e.g. no terminal) counts as "no".
    Confirm::new(question).with_default(default).prompt().unwrap_or(false)
}
