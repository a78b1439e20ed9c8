#![doc = include_str!(concat!(env!("OUT_DIR"), "/README_GENERATED.md"))]
#![deny(unused_crate_dependencies)]

#[cfg(test)]
use recipebox_data as _;
#[cfg(test)]
use serde_json as _;

mod deps;
mod error;
mod navigator;
mod screen;
mod view;

pub use deps::ScreenDeps;
pub use error::ScreenError;
pub use navigator::StackNavigator;
pub use screen::{RECIPE_DETAILS_SCREEN, RecipeDetailsParams, RecipeDetailsScreen};
pub use view::{HintView, RecipeDetailsView};
