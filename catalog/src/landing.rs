use anyhow::Result;
use tracing::{debug, info};

use crate::skin_type::SkinType;

// the routing layer, handed to the landing page rather than reached for globally
//
// navigation is fire-and-forget: nothing is returned and failures belong to
// whoever implements this
pub trait Navigate {
    fn navigate(&self, skin_type: SkinType);
}

// everything the landing page remembers during one page view
//
// mounted only ever goes false -> true, and the selection is dropped along
// with the rest of the page when the visitor navigates away
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct LandingState {
    mounted: bool,
    selection: Option<SkinType>,
}

impl LandingState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Flip the mount latch.  Returns true only the first time.
    pub fn mount(&mut self) -> bool {
        if self.mounted {
            return false;
        }

        debug!("landing page mounted");
        self.mounted = true;
        true
    }

    pub fn is_mounted(&self) -> bool {
        self.mounted
    }

    /// The selector's current value; empty when nothing is chosen.
    pub fn selected_value(&self) -> &'static str {
        self.selection.map(SkinType::label).unwrap_or("")
    }

    // handles a change event from the selector
    //
    // the empty string is the placeholder option and clears the selection;
    // anything else has to name a known category or the state is left alone
    pub fn select(&mut self, value: &str) -> Result<()> {
        let selection = match value {
            "" => None,
            v => Some(v.parse::<SkinType>()?),
        };

        if selection != self.selection {
            debug!(selection = ?selection, "skin type selection changed");
        }

        self.selection = selection;
        Ok(())
    }

    pub fn can_find_products(&self) -> bool {
        self.selection.is_some()
    }

    // the "Find Products" action
    //
    // the button is disabled while nothing is selected, so the empty case is
    // a no-op rather than an error
    pub fn find_products<N: Navigate + ?Sized>(&self, navigator: &N) -> bool {
        match self.selection {
            Some(skin_type) => {
                info!(path = %skin_type.path(), "navigating to skin type");
                navigator.navigate(skin_type);
                true
            }
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use super::*;
    use crate::skin_type::SKIN_TYPES;

    #[derive(Default)]
    struct RecordingNavigator {
        visited: RefCell<Vec<String>>,
    }

    impl Navigate for RecordingNavigator {
        fn navigate(&self, skin_type: SkinType) {
            self.visited.borrow_mut().push(skin_type.path());
        }
    }

    fn mounted() -> LandingState {
        let mut state = LandingState::new();
        state.mount();
        state
    }

    #[test]
    fn starts_unmounted_and_empty() {
        let state = LandingState::new();

        assert!(!state.is_mounted());
                assert_eq!(state.selected_value(), "");
        assert!(!state.can_find_products());
    }

    #[test]
    fn mount_latch_fires_once() {
        let mut state = LandingState::new();

        assert!(state.mount());
        assert!(state.is_mounted());

        assert!(!state.mount());
        assert!(state.is_mounted());
    }

    #[test]
    fn find_products_enabled_only_with_selection() {
        let mut state = mounted();
        assert!(!state.can_find_products());

        for entry in SKIN_TYPES.iter() {
            state.select(entry.label()).unwrap();
            assert!(state.can_find_products());
            assert_eq!(state.selected_value(), entry.label());
        }

        state.select("").unwrap();
        assert!(!state.can_find_products());
    }

    #[test]
    fn select_dry_then_find_products() {
        let nav = RecordingNavigator::default();
        let mut state = mounted();

        state.select("Dry").unwrap();
        assert!(state.find_products(&nav));

        assert_eq!(*nav.visited.borrow(), vec!["/skin-type/dry".to_owned()]);
    }

    #[test]
    fn find_products_without_selection_does_nothing() {
        let nav = RecordingNavigator::default();
        let state = mounted();

        assert!(!state.find_products(&nav));
        assert!(nav.visited.borrow().is_empty());
    }

    #[test]
    fn reselecting_is_idempotent() {
        let mut state = mounted();

        state.select("Sensitive").unwrap();
        let once = state;

        state.select("Sensitive").unwrap();
        assert_eq!(state, once);
        assert_eq!(state.selected_value(), "Sensitive");
    }

    #[test]
    fn unknown_value_leaves_state_alone() {
        let mut state = mounted();
        state.select("Oily").unwrap();

        assert!(state.select("Normal").is_err());
        assert_eq!(state.selected_value(), "Oily");
    }

    #[test]
    fn latest_selection_wins() {
        let nav = RecordingNavigator::default();
        let mut state = mounted();

        state.select("Oily").unwrap();
        state.select("Combination").unwrap();
        state.find_products(&nav);

        assert_eq!(
            *nav.visited.borrow(),
            vec!["/skin-type/combination".to_owned()]
        );
    }
}
