use clap::Parser;
use dialoguer::theme::ColorfulTheme;
use dialoguer::{Input, Select};
use showhunt::{
    App, Effect, InputEvent, LocalShowCatalog, ShowHuntError, TvMazeCatalog, render_episode,
};
use std::process;
use tracing_subscriber::EnvFilter;

/// Search the TVmaze show directory and browse show details and episodes.
#[derive(Debug, Parser)]
#[command(name = "showhunt", version, about)]
struct Cli {
    /// Run this search immediately instead of prompting for a query
    query: Option<String>,

    /// Base URL of the show catalog API
    #[arg(long, default_value = "https://api.tvmaze.com")]
    base_url: String,
}

/// Applies one display effect to the terminal.
fn apply(effect: &Effect) {
    match effect {
        // The prompt loop reads the enabled state off the application itself
        Effect::SetSubmitEnabled(_) => {}
        Effect::ShowResults(text) => println!("{text}"),
        Effect::ShowDetail { show, episodes } => {
            println!("{show}");
            println!("{episodes}");
        }
    }
}

/// Lets the user expand individual episodes of the currently displayed show.
fn browse_episodes<C: LocalShowCatalog>(
    app: &App<C>,
    theme: &ColorfulTheme,
) -> Result<(), ShowHuntError> {
    if app.state().episodes.is_empty() {
        return Ok(());
    }

    loop {
        let mut entries: Vec<String> = app
            .state()
            .episodes
            .iter()
            .map(|episode| format!("S{} - {}", episode.season, episode.name))
            .collect();
        entries.push("(back)".to_string());

        let choice = Select::with_theme(theme)
            .with_prompt("Expand an episode")
            .items(&entries)
            .default(entries.len() - 1)
            .interact()?;

        // The trailing "(back)" entry falls outside the episode list
        match app.state().episodes.get(choice) {
            Some(episode) => println!("{}", render_episode(episode)),
            None => return Ok(()),
        }
    }
}

/// The interactive loop: search, pick a show, view its detail and episodes.
async fn run<C: LocalShowCatalog>(
    app: &mut App<C>,
    initial_query: Option<String>,
) -> Result<(), ShowHuntError> {
    let theme = ColorfulTheme::default();
    let mut pending = initial_query;

    loop {
        let query: String = match pending.take() {
            Some(query) => query,
            None => Input::with_theme(&theme)
                .with_prompt("Search shows (empty input quits)")
                .allow_empty(true)
                .interact_text()?,
        };

        let effects = app.handle(InputEvent::QueryChanged(query)).await;
        if effects.contains(&Effect::SetSubmitEnabled(false)) {
            // An empty query keeps the submit control disabled; in the
            // terminal that doubles as the way out.
            return Ok(());
        }

        for effect in app.handle(InputEvent::SearchSubmitted).await {
            apply(&effect);
        }

        if app.state().results.is_empty() {
            continue;
        }

        // Picking a result mirrors clicking a list entry
        loop {
            let mut entries: Vec<String> = app
                .state()
                .results
                .iter()
                .map(|show| show.name.clone())
                .collect();
            entries.push("(new search)".to_string());

            let choice = Select::with_theme(&theme)
                .with_prompt("Pick a show")
                .items(&entries)
                .default(0)
                .interact()?;

            let Some(selected) = app.state().results.get(choice) else {
                break;
            };
            let id = selected.id;

            for effect in app.handle(InputEvent::ShowSelected(Some(id))).await {
                apply(&effect);
            }

            browse_episodes(app, &theme)?;
        }
    }
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("showhunt=warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let catalog = TvMazeCatalog::with_base_url(cli.base_url);
    let mut app = App::new(catalog);

    if let Err(e) = run(&mut app, cli.query).await {
        eprintln!("Error: {e}");
        process::exit(1);
    }
}
