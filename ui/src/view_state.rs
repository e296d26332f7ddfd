//! Reduces one or more resource states into what a page actually renders.
//!
//! Every data-bearing screen derives the same three facts from its fetches:
//! are we still waiting, did anything fail, and what name goes in the header.
//! The navigation hint exists so a coin's name shows instantly when the user
//! arrives from the listing, before any request resolves.

use api::ApiError;
use api::CoinInfo;
use api::CoinListing;
use api::TickerData;

use crate::remote::ResourceState;

/// Placeholder shown while the display name is still in flight.
pub const LOADING_PLACEHOLDER: &str = "Loading...";

/// A resource reduced to its phase plus the display name it may carry.
pub type NameProbe = ResourceState<Option<String>>;

/// Records that can contribute a display name to the page header.
pub trait NamedRecord {
    fn display_name(&self) -> Option<&str>;
}

impl NamedRecord for CoinInfo {
    fn display_name(&self) -> Option<&str> {
        Some(&self.name)
    }
}

impl NamedRecord for TickerData {
    fn display_name(&self) -> Option<&str> {
        Some(&self.name)
    }
}

impl NamedRecord for CoinListing {
    fn display_name(&self) -> Option<&str> {
        Some(&self.name)
    }
}

impl<T: NamedRecord> ResourceState<T> {
    /// Reduces to phase + name for [`derive_view_state`].
    pub fn name_probe(&self) -> NameProbe {
        match self {
            ResourceState::Idle => ResourceState::Idle,
            ResourceState::Loading => ResourceState::Loading,
            ResourceState::Ready(value) => {
                ResourceState::Ready(value.display_name().map(str::to_string))
            }
            ResourceState::Failed(err) => ResourceState::Failed(err.clone()),
        }
    }
}

/// Who wins when a navigation hint and fetched data disagree on the name.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum HintPrecedence {
    /// A non-empty hint beats fetched data even after the fetch completes.
    #[default]
    AlwaysHint,
    /// The hint only bridges the gap until a fetched name is available.
    PreferFetched,
}

/// What a page needs to know to render. Computed, never stored.
#[derive(Clone, Debug, PartialEq, Default)]
pub struct DerivedViewState {
    pub is_loading: bool,
    pub has_error: bool,
    /// First failure encountered, in input order.
    pub error: Option<ApiError>,
    pub display_name: Option<String>,
}

/// Pure reduction of resource states + optional hint into a view state.
///
/// An empty `resources` slice is vacuously loading: nothing has resolved, so
/// nothing can be shown.
pub fn derive_view_state(
    resources: &[NameProbe],
    hint: Option<&str>,
    precedence: HintPrecedence,
) -> DerivedViewState {
    let is_loading = resources.is_empty() || resources.iter().any(ResourceState::is_pending);
    let error = resources.iter().find_map(|r| r.error().cloned());

    let fetched = resources.iter().find_map(|r| match r {
        ResourceState::Ready(Some(name)) if !name.is_empty() => Some(name.clone()),
        _ => None,
    });
    let hint = hint.filter(|h| !h.is_empty()).map(str::to_string);

    let named = match precedence {
        HintPrecedence::AlwaysHint => hint.or(fetched),
        HintPrecedence::PreferFetched => fetched.or(hint),
    };
    let display_name = named.or_else(|| is_loading.then(|| LOADING_PLACEHOLDER.to_string()));

    DerivedViewState {
        is_loading,
        has_error: error.is_some(),
        error,
        display_name,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ready(name: &str) -> NameProbe {
        ResourceState::Ready(Some(name.to_string()))
    }

    #[test]
    fn loading_input_yields_loading_placeholder() {
        let derived = derive_view_state(&[ResourceState::Loading], None, HintPrecedence::default());
        assert!(derived.is_loading);
        assert!(!derived.has_error);
        assert_eq!(derived.display_name.as_deref(), Some(LOADING_PLACEHOLDER));
    }

    #[test]
    fn ready_input_surfaces_the_fetched_name() {
        let derived = derive_view_state(&[ready("Bitcoin")], None, HintPrecedence::default());
        assert!(!derived.is_loading);
        assert!(!derived.has_error);
        assert_eq!(derived.display_name.as_deref(), Some("Bitcoin"));
    }

    #[test]
    fn hint_beats_fetched_data_by_default() {
        let derived = derive_view_state(&[ready("Bitcoin")], Some("BTC Coin"), HintPrecedence::default());
        assert_eq!(derived.display_name.as_deref(), Some("BTC Coin"));
    }

    #[test]
    fn any_failure_sets_has_error() {
        let derived = derive_view_state(
            &[ready("Bitcoin"), ResourceState::Failed(ApiError::Status(500))],
            None,
            HintPrecedence::default(),
        );
        assert!(derived.has_error);
        assert!(!derived.is_loading);
    }

    #[test]
    fn error_content_comes_from_the_first_failure() {
        let derived = derive_view_state(
            &[
                ResourceState::Failed(ApiError::NotFound("x".into())),
                ResourceState::Failed(ApiError::Status(500)),
            ],
            None,
            HintPrecedence::default(),
        );
        assert_eq!(derived.error, Some(ApiError::NotFound("x".into())));
    }

    #[test]
    fn idle_counts_as_loading() {
        let derived = derive_view_state(&[ResourceState::Idle], None, HintPrecedence::default());
        assert!(derived.is_loading);
    }

    #[test]
    fn empty_input_is_vacuously_loading() {
        let derived = derive_view_state(&[], None, HintPrecedence::default());
        assert!(derived.is_loading);
        assert!(!derived.has_error);
        assert_eq!(derived.display_name.as_deref(), Some(LOADING_PLACEHOLDER));
    }

    #[test]
    fn blank_hint_is_ignored() {
        let derived = derive_view_state(&[ready("Bitcoin")], Some(""), HintPrecedence::default());
        assert_eq!(derived.display_name.as_deref(), Some("Bitcoin"));
    }

    #[test]
    fn hint_bridges_loading_even_when_preferring_fetched() {
        let derived = derive_view_state(
            &[ResourceState::Loading],
            Some("BTC Coin"),
            HintPrecedence::PreferFetched,
        );
        assert_eq!(derived.display_name.as_deref(), Some("BTC Coin"));
    }

    #[test]
    fn prefer_fetched_lets_data_replace_the_hint() {
        let derived = derive_view_state(
            &[ready("Bitcoin")],
            Some("BTC Coin"),
            HintPrecedence::PreferFetched,
        );
        assert_eq!(derived.display_name.as_deref(), Some("Bitcoin"));
    }

    #[test]
    fn derivation_is_idempotent() {
        let inputs: Vec<NameProbe> = vec![ready("Bitcoin"), ResourceState::Loading];
        let first = derive_view_state(&inputs, Some("hint"), HintPrecedence::default());
        let second = derive_view_state(&inputs, Some("hint"), HintPrecedence::default());
        assert_eq!(first, second);
    }

    #[test]
    fn name_comes_from_the_first_ready_resource_that_has_one() {
        let derived = derive_view_state(
            &[
                ResourceState::Ready(None),
                ready("Bitcoin"),
                ready("Ethereum"),
            ],
            None,
            HintPrecedence::default(),
        );
        assert_eq!(derived.display_name.as_deref(), Some("Bitcoin"));
    }
}
