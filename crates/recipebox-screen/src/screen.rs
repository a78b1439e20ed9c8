//! Recipe details screen controller.
//!
//! Owns the narration controller, the info-hint state and the favorites
//! toggle for one recipe. Mounting subscribes to hardware back, focus and
//! blur on the navigation host; every subscription is a [`ListenerGuard`],
//! so unmounting or dropping the screen releases all of them before the
//! narration is stopped. While another screen is current the speak button
//! and the info hints are refused with [`ScreenError::NotFocused`].
//!
//! Listener closures only hold weak references to the screen state and the
//! host. Navigation is always requested after the state lock is released,
//! because a host may deliver `Blur` to this screen from inside `navigate`.

use std::fmt;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError, Weak};

use tokio::sync::mpsc;

use recipebox_core::{
    EventDisposition, FavoriteStatus, FavoritesToggle, InfoHint, InfoHintState, LanguageCode,
    ListenerGuard, MeasurementSystem, NarrationComposer, NarrationInput, NavigationHost, Recipe,
    RecipeId, RecipeLookup, ScreenEventKind, ScreenId, ScreenLabels, ScreenListener, Settings,
    Utterance,
};
use recipebox_voice::{NarrationController, NarrationEvent, NarrationState, StopTrigger};

use crate::deps::ScreenDeps;
use crate::error::ScreenError;
use crate::view::{HintView, RecipeDetailsView};

/// Route name of the recipe details screen.
pub const RECIPE_DETAILS_SCREEN: &str = "RecipeDetails";

/// Entry parameters supplied by the screen that opened the details.
#[derive(Debug, Clone)]
pub struct RecipeDetailsParams {
    pub recipe: Recipe,
    /// Where back navigation returns to (e.g. `"Recipes"` or `"Favorites"`).
    pub source_screen: ScreenId,
}

// ── State ──────────────────────────────────────────────────────────

/// What narration needs to build a script.
struct NarrationContext {
    recipe: Recipe,
    language: LanguageCode,
    measurement: MeasurementSystem,
    speech_rate: f32,
    speech_voice: Option<String>,
    composer: NarrationComposer,
    lookup: Arc<dyn RecipeLookup>,
}

impl NarrationContext {
    fn script(&self) -> String {
        let recipe = &self.recipe;
        let category = self.lookup.category_name(recipe.category_id, self.language);
        let ingredients =
            self.lookup
                .ingredients(recipe.ingredient_id, self.language, self.measurement);
        let directions = self.lookup.directions(recipe.ingredient_id, self.language);

        let input = NarrationInput::for_recipe(
            recipe,
            self.language,
            category.as_deref(),
            ingredients.as_ref(),
            directions.as_ref(),
        );
        self.composer.compose(self.language, &input)
    }

    fn utterance(&self) -> Utterance {
        Utterance::new(self.script(), self.language)
            .with_rate(self.speech_rate)
            .with_voice(self.speech_voice.clone())
    }
}

struct ScreenState {
    context: NarrationContext,
    source_screen: ScreenId,
    hint_duration_ms: u64,
    narration: NarrationController,
    hints: InfoHintState,
    mounted: bool,
    /// Cleared when the host moves away; set again on `Focus`.
    focused: bool,
}

fn lock_state(state: &Mutex<ScreenState>) -> MutexGuard<'_, ScreenState> {
    state.lock().unwrap_or_else(PoisonError::into_inner)
}

/// Stop narration and report where back navigation should go.
///
/// Returns `None` once the screen is unmounted.
fn leave(state: &Mutex<ScreenState>, trigger: StopTrigger) -> Option<ScreenId> {
    let mut state = lock_state(state);
    if !state.mounted {
        return None;
    }
    state.focused = false;
    state.narration.stop(trigger);
    Some(state.source_screen.clone())
}

// ── Listeners ──────────────────────────────────────────────────────

fn hardware_back_listener(
    state: Weak<Mutex<ScreenState>>,
    host: Weak<dyn NavigationHost>,
) -> ScreenListener {
    Arc::new(move |_| {
        let Some(state) = state.upgrade() else {
            return EventDisposition::Default;
        };
        let Some(destination) = leave(&state, StopTrigger::HardwareBack) else {
            return EventDisposition::Default;
        };
        if let Some(host) = host.upgrade() {
            host.navigate(&destination);
        }
        EventDisposition::Handled
    })
}

fn blur_listener(state: Weak<Mutex<ScreenState>>) -> ScreenListener {
    Arc::new(move |_| {
        if let Some(state) = state.upgrade() {
            let mut state = lock_state(&state);
            if state.mounted {
                state.focused = false;
                state.narration.stop(StopTrigger::Blur);
            }
        }
        EventDisposition::Default
    })
}

fn focus_listener(state: Weak<Mutex<ScreenState>>, recipe_id: RecipeId) -> ScreenListener {
    Arc::new(move |_| {
        if let Some(state) = state.upgrade() {
            let mut state = lock_state(&state);
            if state.mounted {
                state.focused = true;
                tracing::debug!(recipe_id = %recipe_id, "Recipe details focused");
            }
        }
        EventDisposition::Default
    })
}

// ── Screen ─────────────────────────────────────────────────────────

/// A mounted recipe details screen.
pub struct RecipeDetailsScreen {
    recipe_id: RecipeId,
    state: Arc<Mutex<ScreenState>>,
    favorites: FavoritesToggle,
    navigation: Arc<dyn NavigationHost>,
    listeners: Vec<ListenerGuard>,
    narration_events: Option<mpsc::UnboundedReceiver<NarrationEvent>>,
}

impl RecipeDetailsScreen {
    /// Mount the screen and subscribe to the host's lifecycle events.
    pub fn mount(params: RecipeDetailsParams, deps: ScreenDeps, settings: &Settings) -> Self {
        let ScreenDeps {
            lookup,
            favorites,
            speech,
            navigation,
        } = deps;
        let RecipeDetailsParams {
            recipe,
            source_screen,
        } = params;
        let recipe_id = recipe.recipe_id.clone();

        let (narration, narration_events) = NarrationController::new(speech);
        let state = Arc::new(Mutex::new(ScreenState {
            context: NarrationContext {
                recipe,
                language: settings.effective_language(),
                measurement: settings.effective_measurement(),
                speech_rate: settings.effective_speech_rate(),
                speech_voice: settings.speech_voice.clone(),
                composer: NarrationComposer::default(),
                lookup,
            },
            source_screen: source_screen.clone(),
            hint_duration_ms: settings.effective_hint_duration_ms(),
            narration,
            hints: InfoHintState::new(),
            mounted: true,
            focused: true,
        }));

        let listeners = vec![
            ListenerGuard::register(
                Arc::clone(&navigation),
                ScreenEventKind::HardwareBack,
                hardware_back_listener(Arc::downgrade(&state), Arc::downgrade(&navigation)),
            ),
            ListenerGuard::register(
                Arc::clone(&navigation),
                ScreenEventKind::Focus,
                focus_listener(Arc::downgrade(&state), recipe_id.clone()),
            ),
            ListenerGuard::register(
                Arc::clone(&navigation),
                ScreenEventKind::Blur,
                blur_listener(Arc::downgrade(&state)),
            ),
        ];

        tracing::info!(
            recipe_id = %recipe_id,
            source = %source_screen,
            language = %settings.effective_language(),
            "Recipe details mounted"
        );

        Self {
            recipe_id,
            state,
            favorites: FavoritesToggle::new(favorites),
            navigation,
            listeners,
            narration_events: Some(narration_events),
        }
    }

    pub const fn recipe_id(&self) -> &RecipeId {
        &self.recipe_id
    }

    pub fn is_mounted(&self) -> bool {
        lock_state(&self.state).mounted
    }

    /// Whether the screen is the host's current screen.
    pub fn is_focused(&self) -> bool {
        let state = lock_state(&self.state);
        state.mounted && state.focused
    }

    /// Take the narration event stream. Only the first call returns it.
    pub fn take_narration_events(
        &mut self,
    ) -> Option<mpsc::UnboundedReceiver<NarrationEvent>> {
        self.narration_events.take()
    }

    // ── Narration ──────────────────────────────────────────────────

    pub fn narration_state(&self) -> NarrationState {
        lock_state(&self.state).narration.state()
    }

    /// The script the speak button would narrate right now.
    pub fn narration_script(&self) -> String {
        lock_state(&self.state).context.script()
    }

    /// Speak button: start narration when idle, stop it when speaking.
    pub fn press_speak(&self) -> Result<NarrationState, ScreenError> {
        let mut guard = self.focused_state()?;
        let ScreenState {
            context, narration, ..
        } = &mut *guard;
        Ok(narration.toggle(|| context.utterance())?)
    }

    /// Stop narration without leaving the screen. Returns whether it was playing.
    pub fn stop_narration(&self) -> Result<bool, ScreenError> {
        Ok(self.mounted_state()?.narration.stop(StopTrigger::UserStop))
    }

    /// App-bar back: stop narration and return to the source screen.
    pub fn press_back(&self) -> Result<(), ScreenError> {
        let destination = leave(&self.state, StopTrigger::BackNavigation)
            .ok_or(ScreenError::Unmounted)?;
        self.navigation.navigate(&destination);
        Ok(())
    }

    // ── Favorites ──────────────────────────────────────────────────

    pub fn is_favorite(&self) -> bool {
        self.favorites.is_favorite(&self.recipe_id)
    }

    /// Heart icon: add or remove this recipe from the favorites.
    pub fn press_favorite(&self) -> Result<FavoriteStatus, ScreenError> {
        self.mounted_state()?;
        self.favorites.toggle(&self.recipe_id).map_err(|e| {
            tracing::warn!(recipe_id = %self.recipe_id, error = %e, "Favorite toggle failed");
            ScreenError::from(e)
        })
    }

    // ── Hints ──────────────────────────────────────────────────────

    /// Long press on a time icon. Supersedes any visible hint.
    pub fn long_press_hint(&self, hint: InfoHint) -> Result<(), ScreenError> {
        self.focused_state()?.hints.show(hint);
        Ok(())
    }

    pub fn dismiss_hint(&self) -> Result<(), ScreenError> {
        self.mounted_state()?.hints.dismiss();
        Ok(())
    }

    // ── Rendering ──────────────────────────────────────────────────

    pub fn view(&self) -> RecipeDetailsView {
        let state = lock_state(&self.state);
        let context = &state.context;
        let recipe = &context.recipe;
        let language = context.language;
        let labels = *ScreenLabels::for_language(language);

        let hint = state.hints.current().map(|hint| {
            let value = match hint {
                InfoHint::PrepTime => recipe.preptime.as_str(),
                InfoHint::CookTime => recipe.cooktime.as_str(),
            };
            HintView {
                hint,
                text: labels.hint_text(hint, value),
                duration_ms: state.hint_duration_ms,
                dismiss_label: labels.dismiss,
            }
        });

        let ingredients = context
            .lookup
            .ingredients(recipe.ingredient_id, language, context.measurement)
            .map(|list| list.items().to_vec())
            .unwrap_or_default();
        let directions = context
            .lookup
            .directions(recipe.ingredient_id, language)
            .map(|list| list.numbered())
            .unwrap_or_default();

        RecipeDetailsView {
            recipe_id: recipe.recipe_id.clone(),
            language,
            title: recipe.title(language).map(str::to_string),
            category: context.lookup.category_name(recipe.category_id, language),
            is_veg: recipe.is_veg,
            photo_url: recipe.photo_url.clone(),
            prep_time: recipe.preptime.clone(),
            cook_time: recipe.cooktime.clone(),
            narration: state.narration.state(),
            hint,
            ingredients,
            directions,
            description: recipe.description(language).map(str::to_string),
            is_favorite: self.favorites.is_favorite(&recipe.recipe_id),
            labels,
        }
    }

    // ── Teardown ───────────────────────────────────────────────────

    /// Release the listeners, then stop narration. Idempotent.
    pub fn unmount(&mut self) {
        self.listeners.clear();

        let mut state = lock_state(&self.state);
        if !state.mounted {
            return;
        }
        state.mounted = false;
        state.hints.dismiss();
        let stopped = state.narration.stop(StopTrigger::Unmount);
        tracing::info!(recipe_id = %self.recipe_id, stopped, "Recipe details unmounted");
    }

    fn mounted_state(&self) -> Result<MutexGuard<'_, ScreenState>, ScreenError> {
        let state = lock_state(&self.state);
        if state.mounted {
            Ok(state)
        } else {
            Err(ScreenError::Unmounted)
        }
    }

    fn focused_state(&self) -> Result<MutexGuard<'_, ScreenState>, ScreenError> {
        let state = self.mounted_state()?;
        if state.focused {
            Ok(state)
        } else {
            Err(ScreenError::NotFocused)
        }
    }
}

impl fmt::Debug for RecipeDetailsScreen {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RecipeDetailsScreen")
            .field("recipe_id", &self.recipe_id)
            .field("listeners", &self.listeners)
            .finish_non_exhaustive()
    }
}

impl Drop for RecipeDetailsScreen {
    fn drop(&mut self) {
        self.unmount();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use recipebox_core::ports::{MockFavoritesStore, MockRecipeLookup, MockSpeechEngine};
    use recipebox_core::{
        CategoryId, DirectionList, FavoritesError, IngredientList, IngredientSetId, LocalizedText,
    };

    use crate::navigator::StackNavigator;

    fn pancakes() -> Recipe {
        Recipe {
            recipe_id: RecipeId::new("r1"),
            category_id: CategoryId(1),
            ingredient_id: IngredientSetId(10),
            title: LocalizedText::new()
                .with(LanguageCode::En, "Pancakes")
                .with(LanguageCode::Fr, "Crêpes"),
            description: LocalizedText::new()
                .with(LanguageCode::En, "Fluffy and light")
                .with(LanguageCode::Fr, "Légères"),
            preptime: "10m".to_string(),
            cooktime: "15m".to_string(),
            is_veg: true,
            photo_url: "https://example.org/pancakes.jpg".to_string(),
        }
    }

    fn lookup() -> MockRecipeLookup {
        let mut lookup = MockRecipeLookup::new();
        lookup
            .expect_category_name()
            .returning(|_, _| Some("Breakfast".to_string()));
        lookup.expect_ingredients().returning(|_, _, _| {
            Some(IngredientList::new(vec![
                "Flour".to_string(),
                "Milk".to_string(),
            ]))
        });
        lookup.expect_directions().returning(|_, _| {
            Some(DirectionList::new(vec!["Mix".to_string(), "Cook".to_string()]))
        });
        lookup
    }

    fn navigator() -> Arc<StackNavigator> {
        let nav = Arc::new(StackNavigator::new(ScreenId::new("Recipes")));
        nav.navigate(&ScreenId::new(RECIPE_DETAILS_SCREEN));
        nav
    }

    fn mount_with(
        speech: MockSpeechEngine,
        favorites: MockFavoritesStore,
        nav: &Arc<StackNavigator>,
    ) -> RecipeDetailsScreen {
        let deps = ScreenDeps::new(
            Arc::new(lookup()),
            Arc::new(favorites),
            Arc::new(speech),
            nav.clone(),
        );
        let params = RecipeDetailsParams {
            recipe: pancakes(),
            source_screen: ScreenId::new("Recipes"),
        };
        RecipeDetailsScreen::mount(params, deps, &Settings::with_defaults())
    }

    fn idle_favorites() -> MockFavoritesStore {
        let mut favorites = MockFavoritesStore::new();
        favorites.expect_contains().returning(|_| false);
        favorites
    }

    #[test]
    fn test_mount_registers_three_listeners() {
        let nav = navigator();
        let screen = mount_with(MockSpeechEngine::new(), idle_favorites(), &nav);
        assert_eq!(nav.listener_count(), 3);
        drop(screen);
        assert_eq!(nav.listener_count(), 0);
    }

    #[test]
    fn test_speak_then_hardware_back_stops_once_and_returns() {
        let mut speech = MockSpeechEngine::new();
        speech.expect_speak().times(1).returning(|_| Ok(()));
        speech.expect_stop().times(1).return_const(());

        let nav = navigator();
        let screen = mount_with(speech, idle_favorites(), &nav);
        assert_eq!(screen.press_speak().unwrap(), NarrationState::Speaking);

        assert_eq!(nav.press_hardware_back(), EventDisposition::Handled);
        assert_eq!(nav.current(), ScreenId::new("Recipes"));
        assert_eq!(screen.narration_state(), NarrationState::Idle);
    }

    #[test]
    fn test_blur_stops_narration() {
        let mut speech = MockSpeechEngine::new();
        speech.expect_speak().times(1).returning(|_| Ok(()));
        speech.expect_stop().times(1).return_const(());

        let nav = navigator();
        let screen = mount_with(speech, idle_favorites(), &nav);
        screen.press_speak().unwrap();
        nav.navigate(&ScreenId::new("Favorites"));
        assert_eq!(screen.narration_state(), NarrationState::Idle);
    }

    #[test]
    fn test_press_back_navigates_to_source() {
        let mut speech = MockSpeechEngine::new();
        speech.expect_speak().times(1).returning(|_| Ok(()));
        speech.expect_stop().times(1).return_const(());

        let nav = navigator();
        let screen = mount_with(speech, idle_favorites(), &nav);
        screen.press_speak().unwrap();
        screen.press_back().unwrap();
        assert_eq!(nav.current(), ScreenId::new("Recipes"));
    }

    #[test]
    fn test_speak_after_back_is_refused() {
        let mut speech = MockSpeechEngine::new();
        speech.expect_speak().times(0);
        speech.expect_stop().times(0);

        let nav = navigator();
        let screen = mount_with(speech, idle_favorites(), &nav);
        screen.press_back().unwrap();

        assert!(!screen.is_focused());
        assert!(matches!(screen.press_speak(), Err(ScreenError::NotFocused)));
        assert!(matches!(
            screen.long_press_hint(InfoHint::PrepTime),
            Err(ScreenError::NotFocused)
        ));
        assert_eq!(screen.narration_state(), NarrationState::Idle);
    }

    #[test]
    fn test_refocus_allows_narration_again() {
        let mut speech = MockSpeechEngine::new();
        speech.expect_speak().times(1).returning(|_| Ok(()));
        speech.expect_stop().times(1).return_const(());

        let nav = navigator();
        let screen = mount_with(speech, idle_favorites(), &nav);
        nav.navigate(&ScreenId::new("Settings"));
        assert!(matches!(screen.press_speak(), Err(ScreenError::NotFocused)));

        nav.navigate(&ScreenId::new(RECIPE_DETAILS_SCREEN));
        assert!(screen.is_focused());
        assert_eq!(screen.press_speak().unwrap(), NarrationState::Speaking);
    }

    #[test]
    fn test_utterance_uses_settings_and_script() {
        let mut speech = MockSpeechEngine::new();
        speech
            .expect_speak()
            .withf(|u| {
                u.language == LanguageCode::En
                    && u.text.starts_with("The title of the recipe is Pancakes.")
                    && u.text.contains("Flour, Milk")
            })
            .times(1)
            .returning(|_| Ok(()));
        speech.expect_stop().times(1).return_const(());

        let nav = navigator();
        let screen = mount_with(speech, idle_favorites(), &nav);
        screen.press_speak().unwrap();
    }

    #[test]
    fn test_unmount_stops_and_refuses_actions() {
        let mut speech = MockSpeechEngine::new();
        speech.expect_speak().times(1).returning(|_| Ok(()));
        speech.expect_stop().times(1).return_const(());

        let nav = navigator();
        let mut screen = mount_with(speech, idle_favorites(), &nav);
        screen.press_speak().unwrap();
        screen.unmount();
        screen.unmount();

        assert!(!screen.is_mounted());
        assert_eq!(nav.listener_count(), 0);
        assert!(matches!(screen.press_speak(), Err(ScreenError::Unmounted)));
        assert!(matches!(screen.press_back(), Err(ScreenError::Unmounted)));
    }

    #[test]
    fn test_favorite_failure_is_propagated() {
        let mut favorites = MockFavoritesStore::new();
        favorites.expect_contains().returning(|_| false);
        favorites
            .expect_add()
            .times(1)
            .returning(|_| Err(FavoritesError::Unavailable("offline".to_string())));

        let nav = navigator();
        let screen = mount_with(MockSpeechEngine::new(), favorites, &nav);
        let err = screen.press_favorite().unwrap_err();
        assert!(matches!(err, ScreenError::Favorites(_)));
        assert!(!screen.view().is_favorite);
    }

    #[test]
    fn test_hint_supersedes_and_dismisses() {
        let nav = navigator();
        let screen = mount_with(MockSpeechEngine::new(), idle_favorites(), &nav);

        screen.long_press_hint(InfoHint::PrepTime).unwrap();
        screen.long_press_hint(InfoHint::CookTime).unwrap();
        let hint = screen.view().hint.unwrap();
        assert_eq!(hint.hint, InfoHint::CookTime);
        assert_eq!(hint.text, "Cooking Time: 15m");
        assert_eq!(hint.duration_ms, 3000);

        screen.dismiss_hint().unwrap();
        assert!(screen.view().hint.is_none());
    }

    #[test]
    fn test_view_contents() {
        let nav = navigator();
        let screen = mount_with(MockSpeechEngine::new(), idle_favorites(), &nav);
        let view = screen.view();

        assert_eq!(view.title.as_deref(), Some("Pancakes"));
        assert_eq!(view.category.as_deref(), Some("Breakfast"));
        assert_eq!(view.ingredients, vec!["Flour", "Milk"]);
        assert_eq!(view.directions, vec!["1. Mix", "2. Cook"]);
        assert_eq!(view.narration, NarrationState::Idle);
        assert!(view.is_veg);
        assert!(!view.is_favorite);
    }
}
