// Show/hide state for sensors and groups
use std::collections::HashMap;

/// Hidden flags keyed by series id (sensor name or group id). Entries
/// materialize at the configured default the first time an id is toggled
/// and are never removed within a session.
#[derive(Debug, Clone, Default)]
pub struct VisibilityState {
    hidden: HashMap<String, bool>,
    default_hidden: bool,
}

impl VisibilityState {
    pub fn new(default_hidden: bool) -> Self {
        Self {
            hidden: HashMap::new(),
            default_hidden,
        }
    }

    /// Flip the flag for `id` and return the new hidden state.
    pub fn toggle(&mut self, id: &str) -> bool {
        let flag = self
            .hidden
            .entry(id.to_string())
            .or_insert(self.default_hidden);
        *flag = !*flag;
        *flag
    }

    pub fn is_hidden(&self, id: &str) -> bool {
        self.hidden.get(id).copied().unwrap_or(self.default_hidden)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_double_toggle_round_trips() {
        let mut state = VisibilityState::new(false);
        assert!(!state.is_hidden("Paris"));
        assert!(state.toggle("Paris"));
        assert!(state.is_hidden("Paris"));
        assert!(!state.toggle("Paris"));
        assert!(!state.is_hidden("Paris"));
    }

    #[test]
    fn test_configured_default_applies_to_unseen_ids() {
        let mut start_hidden = VisibilityState::new(true);
        assert!(start_hidden.is_hidden("Bureau"));
        // First toggle flips from the default, not from false
        assert!(!start_hidden.toggle("Bureau"));
    }

    #[test]
    fn test_ids_are_independent() {
        let mut state = VisibilityState::new(false);
        state.toggle("Paris");
        assert!(state.is_hidden("Paris"));
        assert!(!state.is_hidden("Bureau"));
    }
}
