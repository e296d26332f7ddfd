//! The coin listing screen.

use std::time::Duration;

use api::CoinListing;
use api::MarketDataProvider;
use dioxus::prelude::*;

use crate::app_state::AppState;
use crate::components::base::ErrorCard;
use crate::components::base::Loader;
use crate::hooks::use_remote;
use crate::remote::FetchKey;
use crate::remote::RemoteOptions;
use crate::remote::ResourceState;
use crate::theme::use_theme;
use crate::Route;

/// Listings older than this are refetched on the next observation.
const LISTING_MAX_AGE: Duration = Duration::from_secs(60);

const TOP_COINS: usize = 100;

#[component]
pub fn CoinsScreen() -> Element {
    let market = use_context::<AppState>().market.clone();
    let listings = use_remote(
        FetchKey::new("coins"),
        RemoteOptions {
            max_age: Some(LISTING_MAX_AGE),
            ..Default::default()
        },
        move || {
            let market = market.clone();
            async move { market.coin_listings().await }
        },
    );
    let palette = use_theme().palette();

    rsx! {
        document::Title { "Coindeck" }
        header { style: "height: 15vh; display: flex; justify-content: center; align-items: center;",
            h1 { style: "font-size: 48px; margin: 0; color: {palette.accent_color};", "Coindeck" }
        }
        match &*listings.state.read() {
            ResourceState::Idle | ResourceState::Loading => rsx! {
                Loader {}
            },
            ResourceState::Failed(err) => rsx! {
                ErrorCard {
                    message: "Failed to load coins: {err}",
                    on_retry: move |_| listings.restart(),
                }
            },
            ResourceState::Ready(coins) => rsx! {
                ul { style: "list-style: none; padding: 0;",
                    for coin in coins.iter().take(TOP_COINS).cloned() {
                        CoinRow { coin }
                    }
                }
            },
        }
    }
}

#[component]
fn CoinRow(coin: CoinListing) -> Element {
    let palette = use_theme().palette();
    let icon = format!(
        "https://coinicons-api.vercel.app/api/icon/{}",
        coin.symbol.to_lowercase()
    );

    rsx! {
        li {
            style: "background-color: rgba(0, 0, 0, 0.5); border-radius: 15px; margin-bottom: 10px; font-weight: bold;",
            Link {
                to: Route::CoinOverview {
                    coin_id: coin.id.clone(),
                    name: Some(coin.name.clone()),
                },
                div { style: "display: flex; align-items: center; gap: 10px; padding: 20px;",
                    img { src: "{icon}", width: "25", height: "25", alt: "{coin.symbol}" }
                    span { "{coin.name}" }
                    span { style: "margin-left: auto; color: {palette.accent_color};", "#{coin.rank}" }
                }
            }
        }
    }
}
