use log::debug;

use crate::client::{FetchOutcome, HttpRecipeSource, RecipeClient, RecipeSource};
use crate::config::AppConfig;
use crate::filters::FilterSet;
use crate::ingredients::IngredientList;
use crate::likes::LikedRecipes;
use crate::model::Recipe;
use crate::storage::{JsonFileStorage, LikeStorage};

/// State change notifications delivered to subscribers.
///
/// One event is emitted per area of state an operation changes, so a shell
/// can re-render only what moved.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppEvent {
    IngredientsChanged,
    FiltersChanged,
    RecipesChanged,
    LikesChanged,
    SelectionChanged,
    ThemeChanged,
    LoadingChanged,
}

/// Lifecycle of one recipe fetch.
///
/// `Idle → Loading → {Populated, PopulatedFallback}`, re-entering `Loading`
/// on the next cook action. There is no failure state: a failed fetch lands
/// in `PopulatedFallback` with the sample recipes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FetchState {
    #[default]
    Idle,
    Loading,
    Populated,
    PopulatedFallback,
}

type Listener = Box<dyn Fn(AppEvent)>;

/// The view controller: composes the ingredient list, filter set, fetch
/// client and liked-recipes store into the state a shell renders.
///
/// All methods take `&mut self` and run on one thread; the only suspension
/// point is the fetch await inside [`App::cook`].
pub struct App {
    ingredients: IngredientList,
    filters: FilterSet,
    client: RecipeClient,
    likes: LikedRecipes,
    recipes: Vec<Recipe>,
    fetch_state: FetchState,
    selected: Option<Recipe>,
    show_only_liked: bool,
    dark_mode: bool,
    listeners: Vec<Listener>,
}

impl App {
    /// Creates a builder for assembling an app with injected collaborators
    pub fn builder() -> AppBuilder {
        AppBuilder::default()
    }

    /// Assembles an app with the HTTP source and file storage from `config`
    pub fn new(config: AppConfig) -> Self {
        Self::builder().config(config).build()
    }

    /// Registers a listener invoked synchronously on every state change
    pub fn subscribe(&mut self, listener: impl Fn(AppEvent) + 'static) {
        self.listeners.push(Box::new(listener));
    }

    fn emit(&self, event: AppEvent) {
        for listener in &self.listeners {
            listener(event);
        }
    }

    // --- ingredient entry ---

    pub fn ingredients(&self) -> &[String] {
        self.ingredients.items()
    }

    pub fn pending_ingredient(&self) -> &str {
        self.ingredients.pending()
    }

    pub fn set_pending_ingredient(&mut self, text: impl Into<String>) {
        self.ingredients.set_pending(text);
        self.emit(AppEvent::IngredientsChanged);
    }

    pub fn add_ingredient(&mut self, name: &str) {
        if self.ingredients.add(name) {
            self.emit(AppEvent::IngredientsChanged);
        }
    }

    /// Adds the pending entry text as an ingredient
    pub fn add_pending_ingredient(&mut self) {
        if self.ingredients.add_pending() {
            self.emit(AppEvent::IngredientsChanged);
        }
    }

    /// Adds an autocomplete suggestion and clears the entry text
    pub fn accept_suggestion(&mut self, name: &str) {
        self.add_ingredient(name);
    }

    /// Removes an ingredient. Displayed results are cleared as well: they
    /// were generated for a set that no longer exists.
    pub fn remove_ingredient(&mut self, name: &str) {
        if !self.ingredients.remove(name) {
            return;
        }
        self.emit(AppEvent::IngredientsChanged);

        if !self.recipes.is_empty() || self.fetch_state != FetchState::Idle {
            self.recipes.clear();
            if self.fetch_state != FetchState::Loading {
                self.fetch_state = FetchState::Idle;
            }
            self.emit(AppEvent::RecipesChanged);
        }
    }

    /// Autocomplete matches for the pending entry text
    pub fn suggestions(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.ingredients.suggest(self.ingredients.pending())
    }

    // --- filters ---

    pub fn active_filters(&self) -> &[String] {
        self.filters.active()
    }

    pub fn is_filter_active(&self, name: &str) -> bool {
        self.filters.is_active(name)
    }

    pub fn toggle_filter(&mut self, name: &str) {
        self.filters.toggle(name);
        self.emit(AppEvent::FiltersChanged);
    }

    // --- likes ---

    pub fn liked_titles(&self) -> &[String] {
        self.likes.titles()
    }

    pub fn is_liked(&self, title: &str) -> bool {
        self.likes.is_liked(title)
    }

    pub fn toggle_like(&mut self, title: &str) {
        self.likes.toggle(title);
        self.emit(AppEvent::LikesChanged);
    }

    pub fn show_only_liked(&self) -> bool {
        self.show_only_liked
    }

    pub fn toggle_show_only_liked(&mut self) {
        self.show_only_liked = !self.show_only_liked;
        self.emit(AppEvent::RecipesChanged);
    }

    // --- fetch lifecycle ---

    pub fn fetch_state(&self) -> FetchState {
        self.fetch_state
    }

    pub fn is_loading(&self) -> bool {
        self.fetch_state == FetchState::Loading
    }

    /// Runs one cook action: clears the displayed results, fetches recipes
    /// for the current ingredients and filters, and lands in `Populated` or
    /// `PopulatedFallback`. A cook issued while one is in flight is ignored.
    pub async fn cook(&mut self) {
        if self.fetch_state == FetchState::Loading {
            debug!("Cook ignored, a fetch is already in flight");
            return;
        }

        self.recipes.clear();
        self.fetch_state = FetchState::Loading;
        self.emit(AppEvent::RecipesChanged);
        self.emit(AppEvent::LoadingChanged);

        let FetchOutcome { recipes, degraded } = self
            .client
            .fetch(self.ingredients.items(), self.filters.active())
            .await;

        self.recipes = recipes;
        self.fetch_state = if degraded {
            FetchState::PopulatedFallback
        } else {
            FetchState::Populated
        };
        self.emit(AppEvent::LoadingChanged);
        self.emit(AppEvent::RecipesChanged);
    }

    // --- displayed list and detail view ---

    /// The full fetched list, regardless of the liked-only toggle
    pub fn recipes(&self) -> &[Recipe] {
        &self.recipes
    }

    /// The list a shell renders: the fetched recipes, narrowed to liked
    /// titles when the liked-only toggle is on. Fetch order is preserved.
    pub fn visible_recipes(&self) -> Vec<&Recipe> {
        self.recipes
            .iter()
            .filter(|r| !self.show_only_liked || self.likes.is_liked(&r.title))
            .collect()
    }

    pub fn selected_recipe(&self) -> Option<&Recipe> {
        self.selected.as_ref()
    }

    /// Opens the detail view for a displayed recipe. Returns whether a
    /// recipe with that title was found in the current results.
    pub fn select_recipe(&mut self, title: &str) -> bool {
        match self.recipes.iter().find(|r| r.title == title) {
            Some(recipe) => {
                self.selected = Some(recipe.clone());
                self.emit(AppEvent::SelectionChanged);
                true
            }
            None => false,
        }
    }

    pub fn close_recipe(&mut self) {
        if self.selected.take().is_some() {
            self.emit(AppEvent::SelectionChanged);
        }
    }

    // --- display mode ---

    pub fn dark_mode(&self) -> bool {
        self.dark_mode
    }

    pub fn toggle_dark_mode(&mut self) {
        self.dark_mode = !self.dark_mode;
        self.emit(AppEvent::ThemeChanged);
    }
}

/// Builder for assembling an [`App`] with injected collaborators
///
/// The recipe source and like storage default to the HTTP source and the
/// JSON file storage derived from the configuration.
#[derive(Default)]
pub struct AppBuilder {
    config: Option<AppConfig>,
    source: Option<Box<dyn RecipeSource>>,
    storage: Option<Box<dyn LikeStorage>>,
}

impl AppBuilder {
    pub fn config(mut self, config: AppConfig) -> Self {
        self.config = Some(config);
        self
    }

    pub fn source(mut self, source: impl RecipeSource + 'static) -> Self {
        self.source = Some(Box::new(source));
        self
    }

    pub fn storage(mut self, storage: impl LikeStorage + 'static) -> Self {
        self.storage = Some(Box::new(storage));
        self
    }

    pub fn build(self) -> App {
        let config = self.config.unwrap_or_default();
        let source = self
            .source
            .unwrap_or_else(|| Box::new(HttpRecipeSource::new(&config)));
        let storage = self
            .storage
            .unwrap_or_else(|| Box::new(JsonFileStorage::new(&config.likes_path)));

        App {
            ingredients: IngredientList::new(),
            filters: FilterSet::new(),
            client: RecipeClient::new(source),
            likes: LikedRecipes::load(storage),
            recipes: Vec::new(),
            fetch_state: FetchState::default(),
            selected: None,
            show_only_liked: false,
            dark_mode: false,
            listeners: Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AppError;
    use crate::storage::MemoryStorage;
    use async_trait::async_trait;
    use std::cell::RefCell;
    use std::rc::Rc;

    struct FixedSource {
        recipes: Vec<Recipe>,
    }

    #[async_trait]
    impl RecipeSource for FixedSource {
        fn source_name(&self) -> &str {
            "fixed"
        }

        async fn generate(
            &self,
            _ingredients: &[String],
            _filters: &[String],
        ) -> Result<Vec<Recipe>, AppError> {
            Ok(self.recipes.clone())
        }
    }

    struct FailingSource;

    #[async_trait]
    impl RecipeSource for FailingSource {
        fn source_name(&self) -> &str {
            "failing"
        }

        async fn generate(
            &self,
            _ingredients: &[String],
            _filters: &[String],
        ) -> Result<Vec<Recipe>, AppError> {
            Err(AppError::Status(502))
        }
    }

    fn recipe(title: &str) -> Recipe {
        Recipe {
            title: title.to_string(),
            description: format!("{} description", title),
            duration: "10 min".to_string(),
            difficulty: "Easy".to_string(),
            servings: 1,
            ingredients: vec!["egg".to_string()],
            steps: vec!["Cook.".to_string()],
            notes: None,
            image_url: None,
        }
    }

    fn test_app(source: impl RecipeSource + 'static) -> App {
        App::builder()
            .source(source)
            .storage(MemoryStorage::new())
            .build()
    }

    #[tokio::test]
    async fn test_cook_populates_and_sets_state() {
        let mut app = test_app(FixedSource {
            recipes: vec![recipe("Fried Rice")],
        });

        assert_eq!(app.fetch_state(), FetchState::Idle);
        app.cook().await;
        assert_eq!(app.fetch_state(), FetchState::Populated);
        assert_eq!(app.recipes().len(), 1);
    }

    #[tokio::test]
    async fn test_cook_failure_lands_in_fallback_state() {
        let mut app = test_app(FailingSource);

        app.cook().await;
        assert_eq!(app.fetch_state(), FetchState::PopulatedFallback);
        assert_eq!(app.recipes().len(), 2);

        // the cycle repeats: the next cook leaves the fallback state again
        app.cook().await;
        assert_eq!(app.fetch_state(), FetchState::PopulatedFallback);
    }

    #[tokio::test]
    async fn test_cook_is_ignored_while_in_flight() {
        let mut app = test_app(FixedSource {
            recipes: vec![recipe("Fried Rice")],
        });
        app.fetch_state = FetchState::Loading;

        app.cook().await;
        // the guard left everything untouched
        assert_eq!(app.fetch_state(), FetchState::Loading);
        assert!(app.recipes().is_empty());
    }

    #[tokio::test]
    async fn test_remove_ingredient_clears_results() {
        let mut app = test_app(FixedSource {
            recipes: vec![recipe("Fried Rice")],
        });
        app.add_ingredient("egg");
        app.add_ingredient("milk");
        app.cook().await;
        assert!(!app.recipes().is_empty());

        app.remove_ingredient("egg");
        assert_eq!(app.ingredients(), ["milk"]);
        assert!(app.recipes().is_empty());
        assert_eq!(app.fetch_state(), FetchState::Idle);
    }

    #[tokio::test]
    async fn test_liked_only_view_preserves_fetch_order() {
        let mut app = test_app(FixedSource {
            recipes: vec![recipe("Fried Rice"), recipe("Spinach Omelette")],
        });
        app.cook().await;
        app.toggle_like("Spinach Omelette");
        app.toggle_show_only_liked();

        let visible: Vec<_> = app.visible_recipes().iter().map(|r| &r.title).collect();
        assert_eq!(visible, ["Spinach Omelette"]);

        app.toggle_show_only_liked();
        let visible: Vec<_> = app.visible_recipes().iter().map(|r| &r.title).collect();
        assert_eq!(visible, ["Fried Rice", "Spinach Omelette"]);
    }

    #[tokio::test]
    async fn test_select_and_close_do_not_touch_the_list() {
        let mut app = test_app(FixedSource {
            recipes: vec![recipe("Fried Rice")],
        });
        app.cook().await;

        assert!(app.select_recipe("Fried Rice"));
        assert_eq!(app.selected_recipe().unwrap().title, "Fried Rice");
        assert_eq!(app.recipes().len(), 1);

        app.close_recipe();
        assert!(app.selected_recipe().is_none());
        assert!(!app.select_recipe("Unknown"));
    }

    #[tokio::test]
    async fn test_events_follow_state_areas() {
        let mut app = test_app(FixedSource {
            recipes: vec![recipe("Fried Rice")],
        });
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);
        app.subscribe(move |event| sink.borrow_mut().push(event));

        app.add_ingredient("egg");
        app.toggle_filter("Vegan");
        app.toggle_like("Fried Rice");
        app.toggle_dark_mode();
        assert_eq!(
            *seen.borrow(),
            [
                AppEvent::IngredientsChanged,
                AppEvent::FiltersChanged,
                AppEvent::LikesChanged,
                AppEvent::ThemeChanged,
            ]
        );

        seen.borrow_mut().clear();
        app.cook().await;
        assert_eq!(
            *seen.borrow(),
            [
                AppEvent::RecipesChanged,
                AppEvent::LoadingChanged,
                AppEvent::LoadingChanged,
                AppEvent::RecipesChanged,
            ]
        );
    }

    #[tokio::test]
    async fn test_no_event_for_rejected_add() {
        let mut app = test_app(FixedSource { recipes: vec![] });
        let count = Rc::new(RefCell::new(0));
        let sink = Rc::clone(&count);
        app.subscribe(move |_| *sink.borrow_mut() += 1);

        app.add_ingredient("egg");
        app.add_ingredient("egg");
        assert_eq!(*count.borrow(), 1);
    }

    #[tokio::test]
    async fn test_dark_mode_is_display_only() {
        let mut app = test_app(FixedSource {
            recipes: vec![recipe("Fried Rice")],
        });
        app.cook().await;
        let before = app.recipes().to_vec();

        app.toggle_dark_mode();
        assert!(app.dark_mode());
        assert_eq!(app.recipes(), before);

        app.toggle_dark_mode();
        assert!(!app.dark_mode());
    }
}
