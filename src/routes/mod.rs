// Views and in-app navigation
pub mod home;
pub mod matches;

use std::rc::Rc;

use chrono::NaiveDate;
use serde::Serialize;

use crate::config::Settings;
use crate::core::profile::{default_profile, ProfileEditor};
use crate::error::{QuickstayError, Result};
use crate::models::Listing;
use crate::services::{generate_listings, initial_cards};

pub use home::HomeView;
pub use matches::MatchesView;

const APP_TITLE: &str = "Quickstay";

/// Routable page
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum View {
    Home,
    Alternate,
    Matches,
    Profile,
}

impl View {
    pub fn path(&self) -> &'static str {
        match self {
            View::Home => "/",
            View::Alternate => "/alternate",
            View::Matches => "/matches",
            View::Profile => "/profile",
        }
    }

    /// Resolve a browser path; unknown paths are not found
    pub fn resolve(path: &str) -> Result<Self> {
        match path {
            "/" | "" => Ok(View::Home),
            "/alternate" => Ok(View::Alternate),
            "/matches" => Ok(View::Matches),
            "/profile" => Ok(View::Profile),
            other => Err(QuickstayError::RouteNotFound(other.to_string())),
        }
    }
}

/// Header title for a path; anything unrecognised shows the app name
pub fn header_title(path: &str) -> &'static str {
    match path {
        "/matches" => "Matches",
        "/profile" => "Profile",
        _ => APP_TITLE,
    }
}

/// Entry in the header navigation
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NavItem {
    pub view: View,
    pub path: &'static str,
    pub active: bool,
}

/// Header links, with the one for `current_path` marked active
pub fn nav_items(current_path: &str) -> Vec<NavItem> {
    [View::Home, View::Matches, View::Profile]
        .into_iter()
        .map(|view| NavItem {
            view,
            path: view.path(),
            active: view.path() == current_path,
        })
        .collect()
}

/// State owned by the page on screen
#[derive(Debug)]
pub enum ViewState {
    Home(HomeView),
    Alternate(HomeView),
    Matches(MatchesView),
    Profile(ProfileEditor),
}

/// One interactive session
///
/// The listing catalogue is generated once and shared by every visit to the
/// matches page. Page state is rebuilt on each navigation, so leaving a page
/// discards its deck, criteria or unsaved profile edits.
#[derive(Debug)]
pub struct Session {
    settings: Settings,
    today: NaiveDate,
    catalog: Rc<[Listing]>,
    path: &'static str,
    state: ViewState,
}

impl Session {
    pub fn start(settings: Settings, today: NaiveDate) -> Self {
        let catalog: Rc<[Listing]> =
            generate_listings(settings.catalog.size, settings.catalog.seed, today).into();

        tracing::info!(
            "Session started on {} with {} listings",
            today,
            catalog.len()
        );

        let state = build_state(View::Home, &settings, today, &catalog);
        Self {
            settings,
            today,
            catalog,
            path: View::Home.path(),
            state,
        }
    }

    pub fn catalog(&self) -> &[Listing] {
        &self.catalog
    }

    pub fn path(&self) -> &'static str {
        self.path
    }

    pub fn title(&self) -> &'static str {
        header_title(self.path)
    }

    pub fn nav(&self) -> Vec<NavItem> {
        nav_items(self.path)
    }

    pub fn state(&self) -> &ViewState {
        &self.state
    }

    pub fn state_mut(&mut self) -> &mut ViewState {
        &mut self.state
    }

    /// Go to `path`, replacing the current page state with a fresh one
    pub fn navigate(&mut self, path: &str) -> Result<&mut ViewState> {
        let view = View::resolve(path)?;
        tracing::info!("Navigating {} -> {}", self.path, view.path());

        self.state = build_state(view, &self.settings, self.today, &self.catalog);
        self.path = view.path();
        Ok(&mut self.state)
    }

    pub fn home(&mut self) -> Option<&mut HomeView> {
        match &mut self.state {
            ViewState::Home(view) | ViewState::Alternate(view) => Some(view),
            _ => None,
        }
    }

    pub fn matches(&mut self) -> Option<&mut MatchesView> {
        match &mut self.state {
            ViewState::Matches(view) => Some(view),
            _ => None,
        }
    }

    pub fn profile(&mut self) -> Option<&mut ProfileEditor> {
        match &mut self.state {
            ViewState::Profile(editor) => Some(editor),
            _ => None,
        }
    }
}

fn build_state(view: View, settings: &Settings, today: NaiveDate, catalog: &Rc<[Listing]>) -> ViewState {
    match view {
        View::Home => ViewState::Home(HomeView::with_gestures(
            initial_cards(),
            settings.deck.swipe_threshold_px,
        )),
        View::Alternate => ViewState::Alternate(HomeView::buttons_only(initial_cards())),
        View::Matches => ViewState::Matches(MatchesView::new(
            Rc::clone(catalog),
            settings.search.options(),
            settings.search.cache_size,
            settings.filters.clone(),
        )),
        View::Profile => ViewState::Profile(ProfileEditor::new(default_profile(today))),
    }
}
