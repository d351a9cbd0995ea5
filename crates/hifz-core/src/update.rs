//! Update function for the cascade state machine (TEA pattern)
//!
//! The adapter feeds every DOM event and load settlement through
//! [`update`]; the returned [`Command`] is the only way a fetch gets
//! dispatched. In-flight loads are never cancelled -- staleness is decided
//! here by comparing generations.

use crate::cascade::CascadeState;
use crate::message::{CascadeMsg, Command};
use crate::prelude::{debug, warn};

/// Process a message and update state.
/// Returns the effect the adapter should perform, if any.
pub fn update(state: &mut CascadeState, msg: CascadeMsg) -> Option<Command> {
    match msg {
        CascadeMsg::SourateChanged { value } => {
            if value.is_empty() {
                state.reset_awaiting();
                None
            } else {
                let seq = state.begin_load();
                Some(Command::FetchPages {
                    sourate_index: value,
                    seq,
                })
            }
        }

        CascadeMsg::PagesLoaded { seq, result } => {
            if seq != state.seq() {
                debug!(seq, current = state.seq(), "discarding stale page load");
                return None;
            }
            match result {
                Ok(pages) => state.finish(pages),
                Err(err) if err.is_server_reported() => {
                    // The selects stay in their loading placeholder state.
                    warn!("sourate pages endpoint reported: {err}");
                }
                Err(err) => {
                    warn!("page load failed: {err}");
                    state.fail();
                }
            }
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cascade::{
        CascadePhase, PLACEHOLDER_AWAITING_SOURATE, PLACEHOLDER_LOADING, PLACEHOLDER_LOAD_ERROR,
        PLACEHOLDER_NO_PAGES,
    };
    use crate::error::LoadError;
    use crate::pages::PageOption;

    fn pages(n: usize) -> Vec<PageOption> {
        (1..=n)
            .map(|i| PageOption::new(i.to_string(), format!("Page {i}")))
            .collect()
    }

    fn select_sourate(state: &mut CascadeState, value: &str) -> Option<Command> {
        update(
            state,
            CascadeMsg::SourateChanged {
                value: value.to_string(),
            },
        )
    }

    fn settle(state: &mut CascadeState, seq: u64, result: Result<Vec<PageOption>, LoadError>) {
        let cmd = update(state, CascadeMsg::PagesLoaded { seq, result });
        assert!(cmd.is_none());
    }

    /// Pull the generation out of the fetch command a selection produced.
    fn issued_seq(cmd: Option<Command>) -> u64 {
        match cmd {
            Some(Command::FetchPages { seq, .. }) => seq,
            None => panic!("expected a fetch command"),
        }
    }

    #[test]
    fn test_empty_sourate_resets_to_awaiting() {
        let mut state = CascadeState::new();
        state.finish(pages(3));

        let cmd = select_sourate(&mut state, "");

        assert!(cmd.is_none());
        assert_eq!(state.phase, CascadePhase::AwaitingSourate);
        assert_eq!(state.placeholder(), Some(PLACEHOLDER_AWAITING_SOURATE));
        assert!(state.disabled());
        assert!(state.options.is_empty());
    }

    #[test]
    fn test_sourate_change_begins_load() {
        let mut state = CascadeState::new();

        let cmd = select_sourate(&mut state, "2");

        assert_eq!(
            cmd,
            Some(Command::FetchPages {
                sourate_index: "2".to_string(),
                seq: 1,
            })
        );
        assert_eq!(state.phase, CascadePhase::Loading);
        assert_eq!(state.placeholder(), Some(PLACEHOLDER_LOADING));
        assert!(state.disabled());
    }

    #[test]
    fn test_successful_load_populates_options() {
        let mut state = CascadeState::new();
        let seq = issued_seq(select_sourate(&mut state, "2"));

        settle(&mut state, seq, Ok(pages(2)));

        assert_eq!(state.phase, CascadePhase::Ready);
        assert_eq!(state.options, pages(2));
        assert_eq!(state.placeholder(), None);
        assert!(!state.disabled());
    }

    #[test]
    fn test_network_failure_shows_error_placeholder() {
        let mut state = CascadeState::new();
        let seq = issued_seq(select_sourate(&mut state, "2"));

        settle(&mut state, seq, Err(LoadError::network("connection refused")));

        assert_eq!(state.phase, CascadePhase::Failed);
        assert_eq!(state.placeholder(), Some(PLACEHOLDER_LOAD_ERROR));
        assert!(state.disabled());
    }

    #[test]
    fn test_http_failure_shows_error_placeholder() {
        let mut state = CascadeState::new();
        let seq = issued_seq(select_sourate(&mut state, "2"));

        settle(&mut state, seq, Err(LoadError::Status { status: 500 }));

        assert_eq!(state.phase, CascadePhase::Failed);
        assert_eq!(state.placeholder(), Some(PLACEHOLDER_LOAD_ERROR));
    }

    #[test]
    fn test_server_reported_error_leaves_loading_state() {
        let mut state = CascadeState::new();
        let seq = issued_seq(select_sourate(&mut state, "5"));

        settle(&mut state, seq, Err(LoadError::api("not found")));

        assert_eq!(state.phase, CascadePhase::Loading);
        assert_eq!(state.placeholder(), Some(PLACEHOLDER_LOADING));
        assert!(state.disabled());
    }

    #[test]
    fn test_empty_page_list_is_ready_but_disabled() {
        let mut state = CascadeState::new();
        let seq = issued_seq(select_sourate(&mut state, "2"));

        settle(&mut state, seq, Ok(Vec::new()));

        assert_eq!(state.phase, CascadePhase::Ready);
        assert_eq!(state.placeholder(), Some(PLACEHOLDER_NO_PAGES));
        assert!(state.disabled());
    }

    #[test]
    fn test_stale_response_is_discarded() {
        let mut state = CascadeState::new();
        let first = issued_seq(select_sourate(&mut state, "2"));
        let second = issued_seq(select_sourate(&mut state, "5"));
        assert_ne!(first, second);

        // The superseded load settles first: nothing changes.
        settle(&mut state, first, Ok(pages(3)));
        assert_eq!(state.phase, CascadePhase::Loading);
        assert!(state.options.is_empty());

        // The current load settles: its pages win.
        settle(&mut state, second, Ok(pages(2)));
        assert_eq!(state.options, pages(2));
        assert!(!state.disabled());
    }

    #[test]
    fn test_out_of_order_settlement_keeps_latest() {
        let mut state = CascadeState::new();
        let first = issued_seq(select_sourate(&mut state, "2"));
        let second = issued_seq(select_sourate(&mut state, "5"));

        // The current load settles before the superseded one.
        settle(&mut state, second, Ok(pages(4)));
        settle(&mut state, first, Ok(pages(3)));

        assert_eq!(state.options, pages(4));
    }

    #[test]
    fn test_late_response_after_clear_is_discarded() {
        let mut state = CascadeState::new();
        let seq = issued_seq(select_sourate(&mut state, "2"));
        select_sourate(&mut state, "");

        settle(&mut state, seq, Ok(pages(3)));

        assert_eq!(state.phase, CascadePhase::AwaitingSourate);
        assert!(state.options.is_empty());
        assert!(state.disabled());
    }

    #[test]
    fn test_stale_failure_does_not_clobber_ready_state() {
        let mut state = CascadeState::new();
        let first = issued_seq(select_sourate(&mut state, "2"));
        let second = issued_seq(select_sourate(&mut state, "5"));

        settle(&mut state, second, Ok(pages(2)));
        settle(&mut state, first, Err(LoadError::network("timeout")));

        assert_eq!(state.phase, CascadePhase::Ready);
        assert_eq!(state.options, pages(2));
    }

    #[test]
    fn test_reload_same_sourate_is_idempotent() {
        let mut state = CascadeState::new();

        let seq = issued_seq(select_sourate(&mut state, "2"));
        settle(&mut state, seq, Ok(pages(2)));
        let first_options = state.options.clone();

        let seq = issued_seq(select_sourate(&mut state, "2"));
        settle(&mut state, seq, Ok(pages(2)));

        assert_eq!(state.options, first_options);
        assert_eq!(state.phase, CascadePhase::Ready);
        assert!(!state.disabled());
    }
}
