//! Command-level tests over a catalog file on disk.

use std::io::Write;
use std::path::PathBuf;

use clap::Parser;
use recipebox_cli::handlers::session::{Outcome, apply};
use recipebox_cli::{Cli, CliConfig, CliError, Commands, Engine, EngineKind, SessionEvent, bootstrap};
use recipebox_core::{LanguageCode, ScreenId};

const CATALOG: &str = r#"{
    "categories": [{"id": 7, "name": {"en": "Desserts", "fr": "Desserts"}}],
    "recipes": [{
        "recipeId": "mousse", "categoryId": 7, "ingredientId": 70,
        "title": {"en": "Chocolate Mousse", "fr": "Mousse au chocolat"},
        "description": {"en": "Rich and airy.", "fr": "Riche et aérienne."},
        "preptime": "20m", "cooktime": "0m"
    }],
    "directions": [{"ingredientId": 70, "steps": {"en": ["Melt", "Fold", "Chill"]}}]
}"#;

fn catalog_file() -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(CATALOG.as_bytes()).unwrap();
    file
}

#[test]
fn session_arguments_parse() {
    let cli = Cli::parse_from([
        "recipebox",
        "session",
        "mousse",
        "speak",
        "hardware-back",
        "hint-prep",
        "--from",
        "Favorites",
    ]);
    match cli.command {
        Some(Commands::Session {
            recipe_id,
            events,
            from,
            engine,
            json,
        }) => {
            assert_eq!(recipe_id, "mousse");
            assert_eq!(
                events,
                vec![
                    SessionEvent::Speak,
                    SessionEvent::HardwareBack,
                    SessionEvent::HintPrep
                ]
            );
            assert_eq!(from, "Favorites");
            assert_eq!(engine, EngineKind::Log);
            assert!(!json);
        }
        _ => panic!("expected session command"),
    }
}

#[test]
fn catalog_file_drives_the_screen() {
    let file = catalog_file();
    let ctx = bootstrap(&CliConfig {
        catalog_path: Some(file.path().to_path_buf()),
        language: Some(LanguageCode::En),
        ..CliConfig::default()
    })
    .unwrap();

    let engine = Engine::new(EngineKind::Log);
    let (screen, _nav) = ctx.open_screen("mousse", "Recipes", engine.port()).unwrap();
    let view = screen.view();
    assert_eq!(view.category.as_deref(), Some("Desserts"));
    assert!(view.ingredients.is_empty());
    assert_eq!(view.directions, vec!["1. Melt", "2. Fold", "3. Chill"]);

    let script = screen.narration_script();
    assert!(script.contains("Chocolate Mousse"));
    assert!(!script.to_lowercase().contains("ingredients"));
}

#[test]
fn replayed_back_events_stop_narration_once() {
    let file = catalog_file();
    let ctx = bootstrap(&CliConfig {
        catalog_path: Some(file.path().to_path_buf()),
        ..CliConfig::default()
    })
    .unwrap();
    let engine = Engine::new(EngineKind::Log);
    let (mut screen, nav) = ctx.open_screen("mousse", "Favorites", engine.port()).unwrap();

    for event in [SessionEvent::Speak, SessionEvent::Blur, SessionEvent::Stop] {
        apply(&mut screen, &nav, event);
    }
    assert_eq!(
        apply(&mut screen, &nav, SessionEvent::Stop),
        Outcome::Applied("already idle".to_string())
    );

    apply(&mut screen, &nav, SessionEvent::Back);
    assert_eq!(nav.current(), ScreenId::new("Favorites"));
}

#[test]
fn missing_catalog_file_is_io_error() {
    let err = bootstrap(&CliConfig {
        catalog_path: Some(PathBuf::from("/nonexistent/recipebox/catalog.json")),
        ..CliConfig::default()
    })
    .err()
    .unwrap();
    assert!(matches!(err, CliError::Io(_)));
    assert_eq!(err.exit_code(), 74);
}

#[test]
fn unknown_recipe_is_usage_error() {
    let ctx = bootstrap(&CliConfig::default()).unwrap();
    let engine = Engine::new(EngineKind::Log);
    let err = ctx.open_screen("nope", "Recipes", engine.port()).err().unwrap();
    assert_eq!(err.exit_code(), 2);
}
