//! Loading a catalog from disk and answering lookups through the port.

use std::io::Write;
use std::sync::Arc;

use recipebox_core::{
    FavoritesStore, FavoritesToggle, LanguageCode, LookupError, MeasurementSystem, RecipeId,
    RecipeLookup,
};
use recipebox_data::{InMemoryFavoritesStore, InMemoryRecipeCatalog};

const CATALOG: &str = r#"{
    "categories": [{"id": 2, "name": {"en": "Dessert", "fr": "Dessert"}}],
    "recipes": [{
        "recipeId": "tart", "categoryId": 2, "ingredientId": 5,
        "title": {"en": "Apple Tart", "fr": "Tarte aux pommes"},
        "description": {"en": "Crisp and sweet", "fr": "Croustillante et sucrée"},
        "preptime": "20m", "cooktime": "35m", "isVeg": true
    }],
    "ingredients": [{"ingredientId": 5, "metric": {"fr": ["4 pommes", "250 g de pâte"]}}]
}"#;

#[test]
fn loads_catalog_from_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(CATALOG.as_bytes()).unwrap();

    let catalog = InMemoryRecipeCatalog::from_path(file.path()).unwrap();
    let lookup: Arc<dyn RecipeLookup> = Arc::new(catalog.clone());

    let tart = catalog.recipe(&RecipeId::new("tart")).unwrap();
    assert_eq!(
        lookup.category_name(tart.category_id, LanguageCode::En).as_deref(),
        Some("Dessert")
    );
    let ingredients = lookup
        .ingredients(tart.ingredient_id, LanguageCode::Fr, MeasurementSystem::Metric)
        .unwrap();
    assert_eq!(ingredients.to_string(), "4 pommes, 250 g de pâte");
    assert!(lookup.directions(tart.ingredient_id, LanguageCode::Fr).is_none());
}

#[test]
fn missing_file_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = InMemoryRecipeCatalog::from_path(&dir.path().join("missing.json")).unwrap_err();
    assert!(matches!(err, LookupError::Io(_)));
}

#[test]
fn toggle_through_store_restores_original_size() {
    let store = Arc::new(InMemoryFavoritesStore::with_favorites([RecipeId::new("soup")]));
    let toggle = FavoritesToggle::new(store.clone());
    let tart = RecipeId::new("tart");

    toggle.toggle(&tart).unwrap();
    assert_eq!(store.favorites().len(), 2);
    toggle.toggle(&tart).unwrap();
    assert_eq!(store.favorites(), vec![RecipeId::new("soup")]);
}
