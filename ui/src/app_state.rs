use std::ops::Deref;
use std::sync::Arc;

use api::CoinPaprika;

#[derive(Debug)]
pub struct AppStateData {
    pub market: CoinPaprika,
}

/// Stable, non-reactive application context: the shared market-data client.
#[derive(Clone, Debug)]
pub struct AppState(Arc<AppStateData>);

impl Deref for AppState {
    type Target = AppStateData;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl AppState {
    pub fn new() -> Self {
        Self(Arc::new(AppStateData {
            market: CoinPaprika::new(),
        }))
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
