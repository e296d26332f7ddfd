//! The price tab: the USD quote in detail.

use api::MarketDataProvider;
use api::UsdQuote;
use dioxus::prelude::*;

use crate::app_state::AppState;
use crate::components::base::Card;
use crate::components::base::ErrorCard;
use crate::components::base::Loader;
use crate::hooks::use_remote;
use crate::remote::FetchKey;
use crate::remote::RemoteOptions;
use crate::remote::ResourceState;
use crate::CoinContext;

#[component]
pub fn PriceScreen(coin_id: String) -> Element {
    let ctx = use_context::<Signal<CoinContext>>();
    let market = use_context::<AppState>().market.clone();

    // Same key as the parent's poll, so this resolves from cache instantly.
    let tickers = use_remote(
        FetchKey::new("tickers").join(coin_id.as_str()),
        RemoteOptions::default(),
        {
            let id = coin_id.clone();
            move || {
                let market = market.clone();
                let id = id.clone();
                async move { market.coin_tickers(&id).await }
            }
        },
    );

    let resolved_name = ctx.read().resolved_name.clone().unwrap_or_default();

    rsx! {
        match &*tickers.state.read() {
            ResourceState::Idle | ResourceState::Loading => rsx! {
                Loader { label: "Loading price..." }
            },
            ResourceState::Failed(err) => rsx! {
                ErrorCard {
                    message: "Failed to load price: {err}",
                    on_retry: move |_| tickers.restart(),
                }
            },
            ResourceState::Ready(ticker) => {
                let quote = ticker.quotes.usd.clone();
                let ath_price = format!("${:.2}", quote.ath_price);
                let ath_date = quote.ath_date.clone().unwrap_or_default();
                let from_ath = format!("{:+.2}%", quote.percent_from_price_ath);
                rsx! {
                    Card {
                        h3 { style: "margin-top: 0;", "{resolved_name} price" }
                        p { style: "margin-bottom: 0;", "All-time high {ath_price} on {ath_date} ({from_ath} since)" }
                    }
                    ChangeGrid { quote }
                }
            }
        }
    }
}

#[component]
fn ChangeGrid(quote: UsdQuote) -> Element {
    let windows = [
        ("15m", quote.percent_change_15m),
        ("30m", quote.percent_change_30m),
        ("1h", quote.percent_change_1h),
        ("6h", quote.percent_change_6h),
        ("12h", quote.percent_change_12h),
        ("24h", quote.percent_change_24h),
        ("7d", quote.percent_change_7d),
        ("30d", quote.percent_change_30d),
        ("1y", quote.percent_change_1y),
    ];

    rsx! {
        div { style: "display: grid; grid-template-columns: 1fr 1fr 1fr; gap: 10px;",
            for (label, value) in windows {
                ChangeCell { label, value }
            }
        }
    }
}

#[component]
fn ChangeCell(label: &'static str, value: f64) -> Element {
    // Green up, red down.
    let color = if value >= 0.0 { "#4cd137" } else { "#e84118" };
    let formatted = format!("{value:+.2}%");

    rsx! {
        div {
            style: "background-color: rgba(0, 0, 0, 0.5); border-radius: 10px; padding: 12px; display: flex; flex-direction: column; align-items: center;",
            span { style: "font-size: 10px; text-transform: uppercase; margin-bottom: 5px;", "{label}" }
            span { style: "color: {color};", "{formatted}" }
        }
    }
}
