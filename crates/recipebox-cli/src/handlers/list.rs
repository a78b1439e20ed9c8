//! List command handler.

use recipebox_core::RecipeLookup;

use crate::bootstrap::CliContext;
use crate::presentation::{print_separator, truncate_string};

/// Print every recipe with its localized title and category.
pub fn execute(ctx: &CliContext) {
    let language = ctx.settings.effective_language();
    let recipes = ctx.catalog.recipes();

    if recipes.is_empty() {
        println!("The catalog has no recipes.");
        return;
    }

    println!(
        "{:<16} {:<28} {:<18} {:<6} {:<6} Veg",
        "ID", "Title", "Category", "Prep", "Cook"
    );
    print_separator(82);

    for recipe in recipes {
        let category = ctx
            .catalog
            .category_name(recipe.category_id, language)
            .unwrap_or_else(|| "--".to_string());
        println!(
            "{:<16} {:<28} {:<18} {:<6} {:<6} {}",
            truncate_string(recipe.recipe_id.as_str(), 15),
            truncate_string(recipe.title(language).unwrap_or("--"), 27),
            truncate_string(&category, 17),
            recipe.preptime,
            recipe.cooktime,
            if recipe.is_veg { "yes" } else { "no" }
        );
    }
}
