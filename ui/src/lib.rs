// The client-side Dioxus application logic.

use dioxus::prelude::*;

pub mod app_state;
pub mod compat;
mod components;
pub mod hooks;
pub mod remote;
pub mod route_match;
mod screens;
pub mod theme;
pub mod view_state;

use app_state::AppState;
use components::base::Container;
use remote::FetchCache;
use screens::chart::ChartScreen;
use screens::coin::CoinOverview;
use screens::coin::CoinScreen;
use screens::coins::CoinsScreen;
use screens::price::PriceScreen;
use theme::use_theme;

/// Context a coin page shares with whatever fills its outlet.
///
/// Scoped to the current match; rebuilt when the user navigates to another
/// coin.
#[derive(Clone, Debug, PartialEq)]
pub struct CoinContext {
    pub coin_id: String,
    /// Display name the parent has resolved so far (hint or fetched).
    pub resolved_name: Option<String>,
}

/// The Route enum defines the structure of internal routes in our app. Each
/// variant is a URL pattern; the component named after the variant renders
/// when that pattern matches.
#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Shell)]
        #[route("/")]
        CoinsScreen {},
        #[nest("/:coin_id")]
            #[layout(CoinScreen)]
                // `name` is the navigation hint: the listing links carry the
                // coin's name so the header renders before any fetch lands.
                #[route("/?:name")]
                CoinOverview { coin_id: String, name: Option<String> },
                #[route("/price")]
                PriceScreen { coin_id: String },
                #[route("/chart")]
                ChartScreen { coin_id: String },
            #[end_layout]
        #[end_nest]
    #[end_layout]
    #[route("/:..segments")]
    NotFound { segments: Vec<String> },
}

impl Route {
    /// The navigation-supplied name hint, if present and non-empty.
    pub fn name_hint(&self) -> Option<&str> {
        match self {
            Route::CoinOverview { name: Some(name), .. } if !name.is_empty() => {
                Some(name.as_str())
            }
            _ => None,
        }
    }
}

// The handful of rules inline styles cannot express.
const GLOBAL_CSS: &str = r#"
* { box-sizing: border-box; }
body { margin: 0; font-family: 'Source Sans Pro', sans-serif; line-height: 1.4; }
a { text-decoration: none; color: inherit; }
a:hover { opacity: 0.85; }
.tab-link a { display: block; padding: 7px 0; }
"#;

/// Layout wrapping every route: paints the active palette and hosts the
/// theme toggle.
#[component]
fn Shell() -> Element {
    let mut theme = use_theme();
    let palette = theme.palette();
    let toggle_label = if theme.current().is_dark() {
        "Light Mode"
    } else {
        "Dark Mode"
    };

    rsx! {
        style { "{GLOBAL_CSS}" }
        div { style: "min-height: 100vh; background-color: {palette.bg_color}; color: {palette.text_color};",
            nav { style: "display: flex; justify-content: flex-end; padding: 10px 20px;",
                button {
                    style: "background: none; border: 1px solid {palette.accent_color}; color: {palette.accent_color}; border-radius: 8px; padding: 5px 12px; cursor: pointer;",
                    onclick: move |_| theme.toggle(),
                    "{toggle_label}"
                }
            }
            Container {
                Outlet::<Route> {}
            }
        }
    }
}

#[component]
fn NotFound(segments: Vec<String>) -> Element {
    let path = segments.join("/");
    let palette = use_theme().palette();

    rsx! {
        style { "{GLOBAL_CSS}" }
        div { style: "min-height: 100vh; background-color: {palette.bg_color}; color: {palette.text_color};",
            Container {
                header { style: "height: 15vh; display: flex; justify-content: center; align-items: center;",
                    h1 { style: "font-size: 48px; margin: 0; color: {palette.accent_color};", "Page not found" }
                }
                p { style: "text-align: center;", "Nothing lives at /{path}" }
                p { style: "text-align: center;",
                    Link { to: Route::CoinsScreen {}, "Back to the coin list" }
                }
            }
        }
    }
}

/// Root component: installs the shared context and mounts the router.
#[allow(non_snake_case)]
pub fn App() -> Element {
    use_context_provider(FetchCache::new);
    use_context_provider(AppState::new);
    theme::provide_theme();

    rsx! {
        Router::<Route> {}
    }
}
