//! Coin detail: header, overview blocks, tabs, and the nested outlet.

use std::time::Duration;

use api::MarketDataProvider;
use dioxus::prelude::*;

use crate::app_state::AppState;
use crate::components::base::Card;
use crate::components::base::ErrorCard;
use crate::components::base::Grid;
use crate::components::base::Loader;
use crate::components::base::TabLink;
use crate::hooks::use_remote;
use crate::remote::FetchKey;
use crate::remote::RemoteOptions;
use crate::route_match::pattern_matches;
use crate::theme::use_theme;
use crate::view_state::derive_view_state;
use crate::view_state::HintPrecedence;
use crate::CoinContext;
use crate::Route;

/// Tickers are polled on this schedule while the screen is mounted.
const TICKER_POLL: Duration = Duration::from_secs(5);

/// Layout for the `/:coin_id` routes.
///
/// Takes the id from the matched nest segment and the navigation hint from
/// the matched route, and remounts the detail body whenever either changes,
/// so every hook observes one coin for its whole lifetime.
#[component]
pub fn CoinScreen(coin_id: String) -> Element {
    let route = use_route::<Route>();
    let hint = route.name_hint().map(str::to_string);
    let detail_key = format!("{coin_id}?{}", hint.clone().unwrap_or_default());

    rsx! {
        CoinDetail { key: "{detail_key}", coin_id, hint }
    }
}

/// The `/:coin_id` overview route adds nothing below the parent's blocks;
/// the outlet stays empty until a tab is picked.
#[component]
pub fn CoinOverview(coin_id: String, name: Option<String>) -> Element {
    let _ = (coin_id, name);
    rsx! {}
}

#[component]
fn CoinDetail(coin_id: String, hint: Option<String>) -> Element {
    let market = use_context::<AppState>().market.clone();

    let info = use_remote(FetchKey::new("info").join(coin_id.as_str()), RemoteOptions::default(), {
        let market = market.clone();
        let id = coin_id.clone();
        move || {
            let market = market.clone();
            let id = id.clone();
            async move { market.coin_info(&id).await }
        }
    });
    let tickers = use_remote(
        FetchKey::new("tickers").join(coin_id.as_str()),
        RemoteOptions {
            refetch_interval: Some(TICKER_POLL),
            ..Default::default()
        },
        {
            let id = coin_id.clone();
            move || {
                let market = market.clone();
                let id = id.clone();
                async move { market.coin_tickers(&id).await }
            }
        },
    );

    let derived = derive_view_state(
        &[info.state.read().name_probe(), tickers.state.read().name_probe()],
        hint.as_deref(),
        HintPrecedence::default(),
    );

    // Shared with whatever fills the outlet below the tabs.
    let mut ctx = use_context_provider(|| {
        Signal::new(CoinContext {
            coin_id: coin_id.clone(),
            resolved_name: None,
        })
    });
    {
        let info_state = info.state;
        let tickers_state = tickers.state;
        let coin_id = coin_id.clone();
        let hint = hint.clone();
        use_effect(move || {
            let derived = derive_view_state(
                &[info_state.read().name_probe(), tickers_state.read().name_probe()],
                hint.as_deref(),
                HintPrecedence::default(),
            );
            let next = CoinContext {
                coin_id: coin_id.clone(),
                resolved_name: derived.display_name,
            };
            if *ctx.peek() != next {
                ctx.set(next);
            }
        });
    }

    let palette = use_theme().palette();
    let title = derived.display_name.clone().unwrap_or_default();
    let error_message = derived
        .error
        .as_ref()
        .map(|err| format!("Failed to load coin: {err}"))
        .unwrap_or_default();

    let current = use_route::<Route>().to_string();
    let chart_active = pattern_matches("/:coin_id/chart", &current);
    let price_active = pattern_matches("/:coin_id/price", &current);

    rsx! {
        document::Title { "{title}" }
        header { style: "height: 15vh; display: flex; justify-content: center; align-items: center;",
            h1 { style: "font-size: 48px; margin: 0; color: {palette.accent_color};", "{title}" }
        }
        if derived.has_error {
            ErrorCard {
                message: error_message,
                on_retry: move |_| {
                    info.restart();
                    tickers.restart();
                },
            }
        } else if derived.is_loading {
            Loader {}
        } else {
            {
                let info_guard = info.state.read();
                let tickers_guard = tickers.state.read();
                match (info_guard.data(), tickers_guard.data()) {
                    (Some(meta), Some(ticker)) => {
                        let price = format!("${:.3}", ticker.quotes.usd.price);
                        let total_supply = format!("{:.0}", ticker.total_supply);
                        let max_supply = format!("{:.0}", ticker.max_supply);
                        let description = meta.description.clone().unwrap_or_default();
                        rsx! {
                            Card {
                                div { style: "display: flex; justify-content: space-between;",
                                    OverviewItem { label: "Rank:", value: meta.rank.to_string() }
                                    OverviewItem { label: "Symbol:", value: meta.symbol.clone() }
                                    OverviewItem { label: "Price:", value: price }
                                }
                            }
                            p { style: "margin: 20px 0;", "{description}" }
                            Card {
                                div { style: "display: flex; justify-content: space-between;",
                                    OverviewItem { label: "Total Supply:", value: total_supply }
                                    OverviewItem { label: "Max Supply:", value: max_supply }
                                }
                            }
                            Grid {
                                TabLink {
                                    to: Route::ChartScreen { coin_id: coin_id.clone() },
                                    active: chart_active,
                                    "Chart"
                                }
                                TabLink {
                                    to: Route::PriceScreen { coin_id: coin_id.clone() },
                                    active: price_active,
                                    "Price"
                                }
                            }
                            Outlet::<Route> {}
                        }
                    }
                    _ => rsx! {
                        Loader {}
                    },
                }
            }
        }
    }
}

#[component]
fn OverviewItem(label: &'static str, value: String) -> Element {
    rsx! {
        div { style: "display: flex; flex-direction: column; align-items: center;",
            span { style: "font-size: 10px; font-weight: 400; text-transform: uppercase; margin-bottom: 5px;",
                "{label}"
            }
            span { "{value}" }
        }
    }
}
