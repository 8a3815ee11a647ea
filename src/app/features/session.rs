use crate::app::{
    action::{Action, UpdateResult},
    command::Command,
    shared::Slot,
    state::{AppState, UserFetch},
};
use crate::domain::models::CurrentUser;

/// Mirrors fetched users into the shared current-user slot.
///
/// Writes happen only for a present user that differs from the last one
/// written. A missing user leaves the slot untouched, so a failed refetch
/// keeps the previous user visible.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UserProvider {
    last_synced: Option<CurrentUser>,
}

impl UserProvider {
    pub fn sync(&mut self, fetched: Option<&CurrentUser>, slot: &Slot<Option<CurrentUser>>) -> bool {
        let Some(user) = fetched else {
            return false;
        };
        if self.last_synced.as_ref() == Some(user) {
            return false;
        }
        self.last_synced = Some(user.clone());
        slot.set(Some(user.clone()));
        tracing::info!(user = %user.id, "current user hydrated");
        true
    }
}

pub fn update(state: &mut AppState, action: &Action) -> UpdateResult {
    match action {
        Action::SessionChanged => match state.shared.token_pair.get() {
            Some(tokens) => {
                state.user_fetch = UserFetch::Loading;
                UpdateResult::Handled(Some(Command::FetchCurrentUser(tokens)))
            }
            None => {
                state.user_fetch = UserFetch::NoSession;
                UpdateResult::Handled(None)
            }
        },
        Action::CurrentUserFetched(tokens, outcome) => {
            // Answers for a replaced token pair are dropped
            if state.shared.token_pair.get().as_ref() != Some(tokens) {
                tracing::debug!("dropping user fetch for a stale session");
                return UpdateResult::Handled(None);
            }
            if let UserFetch::Failed(reason) = outcome {
                tracing::warn!(%reason, "current user fetch failed");
            }
            state.user_fetch = outcome.clone();
            state
                .user_provider
                .sync(outcome.user(), &state.shared.current_user);
            UpdateResult::Handled(None)
        }
        _ => UpdateResult::NotHandled,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::models::TokenPair;

    fn user(id: &str) -> CurrentUser {
        CurrentUser {
            id: id.into(),
            email: format!("{id}@example.com"),
            ..Default::default()
        }
    }

    #[test]
    fn test_missing_user_never_clears_slot() {
        let slot = Slot::new(None);
        let mut provider = UserProvider::default();
        let (u1, u2) = (user("u1"), user("u2"));

        let mut observed = Vec::new();
        for fetched in [None, Some(&u1), None, Some(&u2)] {
            provider.sync(fetched, &slot);
            observed.push(slot.get());
        }

        assert_eq!(
            observed,
            vec![None, Some(u1.clone()), Some(u1), Some(u2)]
        );
    }

    #[test]
    fn test_same_user_is_written_once() {
        let slot = Slot::new(None);
        let mut rx = slot.subscribe();
        let mut provider = UserProvider::default();
        let u1 = user("u1");

        assert!(provider.sync(Some(&u1), &slot));
        assert!(rx.has_changed().unwrap());
        rx.borrow_and_update();

        assert!(!provider.sync(Some(&u1.clone()), &slot));
        assert!(!rx.has_changed().unwrap());
    }

    #[test]
    fn test_session_change_without_tokens_is_no_session() {
        let mut state = AppState::default();
        let result = update(&mut state, &Action::SessionChanged);
        assert!(matches!(result, UpdateResult::Handled(None)));
        assert_eq!(state.user_fetch, UserFetch::NoSession);
    }

    #[test]
    fn test_session_change_fetches_user() {
        let mut state = AppState::default();
        let tokens = TokenPair {
            access_token: "a".to_string(),
            refresh_token: "r".to_string(),
        };
        state.shared.token_pair.set(Some(tokens.clone()));

        let result = update(&mut state, &Action::SessionChanged);
        assert!(matches!(
            result,
            UpdateResult::Handled(Some(Command::FetchCurrentUser(t))) if t == tokens
        ));
        assert_eq!(state.user_fetch, UserFetch::Loading);
    }

    fn token(access: &str) -> TokenPair {
        TokenPair {
            access_token: access.to_string(),
            refresh_token: "r".to_string(),
        }
    }

    #[test]
    fn test_failed_fetch_keeps_previous_user() {
        let mut state = AppState::default();
        state.shared.token_pair.set(Some(token("t1")));
        update(
            &mut state,
            &Action::CurrentUserFetched(token("t1"), UserFetch::Resolved(user("u1"))),
        );
        update(
            &mut state,
            &Action::CurrentUserFetched(token("t1"), UserFetch::Failed("timeout".to_string())),
        );

        assert_eq!(state.shared.current_user.get(), Some(user("u1")));
        assert_eq!(state.user_fetch, UserFetch::Failed("timeout".to_string()));
    }

    #[test]
    fn test_late_answer_for_replaced_tokens_is_dropped() {
        let mut state = AppState::default();
        let (u1, u2) = (user("u1"), user("u2"));

        state.shared.token_pair.set(Some(token("t1")));
        update(&mut state, &Action::SessionChanged);
        state.shared.token_pair.set(Some(token("t2")));
        update(&mut state, &Action::SessionChanged);

        update(
            &mut state,
            &Action::CurrentUserFetched(token("t2"), UserFetch::Resolved(u2.clone())),
        );
        update(
            &mut state,
            &Action::CurrentUserFetched(token("t1"), UserFetch::Resolved(u1)),
        );

        assert_eq!(state.shared.current_user.get(), Some(u2.clone()));
        assert_eq!(state.user_fetch, UserFetch::Resolved(u2));
    }

    #[test]
    fn test_answer_after_sign_out_is_dropped() {
        let mut state = AppState::default();
        update(
            &mut state,
            &Action::CurrentUserFetched(token("t1"), UserFetch::Resolved(user("u1"))),
        );
        assert_eq!(state.shared.current_user.get(), None);
        assert_eq!(state.user_fetch, UserFetch::NoSession);
    }
}
