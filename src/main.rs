//! Transit Scheme Editor (Kommandozeile).
//!
//! Prüft, normalisiert und rendert Liniennetzpläne im JSON-Format. Alle
//! Schritte laufen über denselben `AppController` wie eine interaktive UI.

use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::{Parser, Subcommand};
use transit_scheme_editor::{AppController, AppIntent, AppState, EditorOptions, Notification};

/// Kommandozeilen-Werkzeug für schematische Liniennetzpläne.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Cli {
    /// Optionen-Datei (TOML); Standard: neben der Binary
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Liest ein Schema und prüft alle Invarianten
    Check {
        /// Eingabedatei (JSON)
        input: PathBuf,
    },
    /// Schreibt ein Schema normalisiert (bereinigt, formatiert) neu
    Format {
        /// Eingabedatei (JSON)
        input: PathBuf,
        /// Ausgabedatei; ohne Angabe wird die Eingabe überschrieben
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Rendert ein Schema als PNG oder SVG (nach Dateiendung)
    Render {
        /// Eingabedatei (JSON)
        input: PathBuf,
        /// Ausgabedatei (.png oder .svg)
        output: PathBuf,
    },
}

fn main() -> anyhow::Result<()> {
    // Logger initialisieren
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    log::info!(
        "Transit Scheme Editor v{} startet...",
        env!("CARGO_PKG_VERSION")
    );

    let cli = Cli::parse();
    let config_path = cli.config.unwrap_or_else(EditorOptions::config_path);
    let options = EditorOptions::load_from_file(&config_path);

    let mut state = AppState::with_options(options);
    let mut controller = AppController::new();

    match cli.command {
        Command::Check { input } => {
            let json = std::fs::read_to_string(&input)
                .with_context(|| format!("{} nicht lesbar", input.display()))?;
            let scheme = transit_scheme_editor::parse_scheme(&json)?;
            scheme.check_invariants()?;
            println!(
                "{}: {} Haltestellen, {} Linien, {} Segmente",
                input.display(),
                scheme.stop_count(),
                scheme.route_count(),
                scheme.segments().count()
            );
        }
        Command::Format { input, output } => {
            load(&mut controller, &mut state, &input)?;
            let path = output.unwrap_or(input);
            controller.handle_intent(
                &mut state,
                AppIntent::SaveFilePathSelected {
                    path: path_string(&path),
                },
            )?;
        }
        Command::Render { input, output } => {
            load(&mut controller, &mut state, &input)?;
            let path = path_string(&output);
            let intent = match output.extension().and_then(|ext| ext.to_str()) {
                Some(ext) if ext.eq_ignore_ascii_case("svg") => {
                    AppIntent::ExportSvgRequested { path }
                }
                Some(ext) if ext.eq_ignore_ascii_case("png") => {
                    AppIntent::ExportPngRequested { path }
                }
                _ => anyhow::bail!("Unbekanntes Ausgabeformat: {}", output.display()),
            };
            controller.handle_intent(&mut state, intent)?;
        }
    }

    Ok(())
}

/// Lädt die Eingabedatei über den Controller; Importfehler brechen ab.
fn load(controller: &mut AppController, state: &mut AppState, input: &Path) -> anyhow::Result<()> {
    controller.handle_intent(
        state,
        AppIntent::FileSelected {
            path: path_string(input),
        },
    )?;

    for notification in state.take_notifications() {
        match notification {
            Notification::Failure(message) => {
                anyhow::bail!("{}: {}", input.display(), message)
            }
            Notification::Info(message) => log::info!("{}", message),
            Notification::SegmentPointCommitted { .. } => {}
        }
    }
    Ok(())
}

fn path_string(path: &Path) -> String {
    path.to_string_lossy().into_owned()
}
