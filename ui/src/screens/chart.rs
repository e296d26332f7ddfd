//! The chart tab: daily closing prices as a line.

use api::MarketDataProvider;
use dioxus::prelude::*;

use crate::app_state::AppState;
use crate::components::base::ErrorCard;
use crate::components::base::Loader;
use crate::components::line_chart::LineChart;
use crate::components::line_chart::PricePoint;
use crate::hooks::use_remote;
use crate::remote::FetchKey;
use crate::remote::RemoteOptions;
use crate::remote::ResourceState;
use crate::theme::use_theme;
use crate::CoinContext;

#[component]
pub fn ChartScreen(coin_id: String) -> Element {
    let ctx = use_context::<Signal<CoinContext>>();
    let market = use_context::<AppState>().market.clone();

    let history = use_remote(
        FetchKey::new("ohlcv").join(coin_id.as_str()),
        RemoteOptions::default(),
        {
            let id = coin_id.clone();
            move || {
                let market = market.clone();
                let id = id.clone();
                async move { market.coin_history(&id).await }
            }
        },
    );

    let dark = use_theme().current().is_dark();
    let resolved_name = ctx.read().resolved_name.clone().unwrap_or_default();

    rsx! {
        match &*history.state.read() {
            ResourceState::Idle | ResourceState::Loading => rsx! {
                Loader { label: "Loading chart..." }
            },
            ResourceState::Failed(err) => rsx! {
                ErrorCard {
                    message: "Failed to load chart: {err}",
                    on_retry: move |_| history.restart(),
                }
            },
            ResourceState::Ready(candles) => {
                let points: Vec<PricePoint> = candles
                    .iter()
                    .filter_map(|candle| {
                        Some(PricePoint {
                            timestamp: candle.time_close,
                            close: candle.close_price()?,
                        })
                    })
                    .collect();
                rsx! {
                    h4 { style: "text-align: center;", "{resolved_name} closing price" }
                    LineChart { points, dark }
                }
            }
        }
    }
}
