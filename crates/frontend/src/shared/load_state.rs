/// Progress of an async load that feeds a view.
///
/// `Idle → Loading → Populated | Failed`. A resolution that arrives while the
/// state is not `Loading` (reset in between) is ignored.
#[derive(Debug, Clone, PartialEq)]
pub enum LoadState<T> {
    Idle,
    Loading,
    Populated(T),
    Failed(String),
}

impl<T> Default for LoadState<T> {
    fn default() -> Self {
        LoadState::Idle
    }
}

impl<T> LoadState<T> {
    pub fn begin(&mut self) {
        *self = LoadState::Loading;
    }

    /// Returns whether the outcome was applied
    pub fn resolve(&mut self, outcome: Result<T, String>) -> bool {
        if !self.is_loading() {
            return false;
        }
        *self = match outcome {
            Ok(value) => LoadState::Populated(value),
            Err(message) => LoadState::Failed(message),
        };
        true
    }

    pub fn reset(&mut self) {
        *self = LoadState::Idle;
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, LoadState::Loading)
    }

    pub fn value(&self) -> Option<&T> {
        match self {
            LoadState::Populated(value) => Some(value),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            LoadState::Failed(message) => Some(message),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_happy_path() {
        let mut state: LoadState<u32> = LoadState::default();
        assert_eq!(state, LoadState::Idle);
        state.begin();
        assert!(state.is_loading());
        assert!(state.resolve(Ok(7)));
        assert_eq!(state.value(), Some(&7));
        assert!(!state.is_loading());
    }

    #[test]
    fn test_failure_keeps_message() {
        let mut state: LoadState<u32> = LoadState::default();
        state.begin();
        state.resolve(Err("HTTP 500".into()));
        assert_eq!(state.error(), Some("HTTP 500"));
        assert_eq!(state.value(), None);
    }

    #[test]
    fn test_late_resolution_after_reset_is_dropped() {
        let mut state: LoadState<u32> = LoadState::default();
        state.begin();
        state.reset();
        assert!(!state.resolve(Ok(1)));
        assert_eq!(state, LoadState::Idle);
    }
}
