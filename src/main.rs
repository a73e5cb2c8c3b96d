use log::info;
use std::env;

use snackhack::{App, AppConfig, FetchState};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let config = AppConfig::load()?;
    let mut app = App::builder().config(config).build();

    for name in env::args().skip(1) {
        app.add_ingredient(&name);
    }
    if app.ingredients().is_empty() {
        return Err("Please provide at least one ingredient as an argument".into());
    }

    info!("Cooking with {:?}", app.ingredients());
    app.cook().await;

    if app.fetch_state() == FetchState::PopulatedFallback {
        info!("Service unavailable, showing sample recipes");
    }

    for recipe in app.visible_recipes() {
        println!(
            "{} ({}, {}, serves {})",
            recipe.title, recipe.duration, recipe.difficulty, recipe.servings
        );
        println!("  {}", recipe.description);
        for step in &recipe.steps {
            println!("  - {}", step);
        }
        if let Some(notes) = &recipe.notes {
            println!("  Tip: {}", notes);
        }
    }

    Ok(())
}
