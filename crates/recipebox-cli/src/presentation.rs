//! Text rendering for CLI output.

use std::fmt::Write;

use recipebox_screen::RecipeDetailsView;
use recipebox_voice::NarrationState;

/// Truncates a string to a maximum number of characters, adding "..." if needed.
pub fn truncate_string(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else {
        let kept: String = s.chars().take(max_len.saturating_sub(3)).collect();
        format!("{kept}...")
    }
}

/// Print a horizontal separator line.
pub fn print_separator(width: usize) {
    println!("{}", "-".repeat(width));
}

/// Render the details screen as plain text.
pub fn render_view(view: &RecipeDetailsView) -> String {
    let labels = &view.labels;
    let mut out = String::new();

    let title = view.title.as_deref().unwrap_or("--");
    let veg = if view.is_veg { " (veg)" } else { "" };
    let _ = writeln!(out, "{title}{veg}");
    if let Some(category) = &view.category {
        let _ = writeln!(out, "{category}");
    }

    let speaker = match view.narration {
        NarrationState::Idle => "[speak]",
        NarrationState::Speaking => "[speaking]",
    };
    let heart = if view.is_favorite { "[♥]" } else { "[♡]" };
    let _ = writeln!(
        out,
        "{}: {}   {}: {}   {speaker} {heart}",
        labels.prep_time, view.prep_time, labels.cook_time, view.cook_time
    );
    if let Some(hint) = &view.hint {
        let _ = writeln!(out, "  > {} ({} ms) [{}]", hint.text, hint.duration_ms, hint.dismiss_label);
    }

    if !view.ingredients.is_empty() {
        let _ = writeln!(out, "\n{}", labels.ingredients);
        for item in &view.ingredients {
            let _ = writeln!(out, "  - {item}");
        }
    }
    if !view.directions.is_empty() {
        let _ = writeln!(out, "\n{}", labels.directions);
        for step in &view.directions {
            let _ = writeln!(out, "  {step}");
        }
    }
    if let Some(description) = &view.description {
        let _ = writeln!(out, "\n{}\n  {description}", labels.description);
    }
    out
}
