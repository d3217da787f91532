//! URL submission and the "fetch all" refresh.

use std::sync::OnceLock;

use regex::Regex;

use crate::error::{AppError, Result};
use crate::io::Gateway;
use crate::workspace::StateHandle;

fn scheme_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"^https?://").expect("static pattern"))
}

/// Checks user input before anything reaches the gateway.
pub fn validate_url(input: &str) -> Result<&str> {
    if input.trim().is_empty() {
        return Err(AppError::EmptyUrl);
    }
    if !scheme_pattern().is_match(input) {
        return Err(AppError::InvalidUrl(input.to_string()));
    }
    Ok(input)
}

/// Validates `input`, submits it, and stores the answer in the latest slot.
///
/// On any failure the state is left as it was apart from a new blocking
/// notice.
pub async fn submit<S, G>(state: &S, gateway: &G, input: &str) -> Result<()>
where
    S: StateHandle + ?Sized,
    G: Gateway + ?Sized,
{
    let url = match validate_url(input) {
        Ok(url) => url,
        Err(err) => {
            tracing::info!("[SUBMIT] Rejected input {:?}: {}", input, err);
            state.update(|ws| ws.notices.report(&err));
            return Err(err);
        }
    };

    tracing::info!("[SUBMIT] Analyzing {}", url);
    match gateway.analyze(url).await {
        Ok(result) => {
            state.update(|ws| ws.repository.set_latest(result));
            Ok(())
        }
        Err(err) => {
            tracing::error!("[SUBMIT] Analysis of {} failed: {}", url, err);
            state.update(|ws| ws.notices.report(&err));
            Err(err)
        }
    }
}

/// Replaces the collection with the remote listing.
///
/// A failed listing keeps the current collection intact.
pub async fn refresh<S, G>(state: &S, gateway: &G) -> Result<()>
where
    S: StateHandle + ?Sized,
    G: Gateway + ?Sized,
{
    match gateway.list_results().await {
        Ok(results) => {
            tracing::info!("[REFRESH] Loaded {} results", results.len());
            state.update(|ws| ws.repository.set_all(results));
            Ok(())
        }
        Err(err) => {
            tracing::error!("[REFRESH] {}", err);
            state.update(|ws| ws.notices.report(&err));
            Err(err)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::fixtures::{example_result, result_with_id};
    use crate::test_utils::RecordingGateway;
    use crate::workspace::{NoticeLevel, WorkspaceState};
    use std::cell::RefCell;

    #[test]
    fn validate_url_rules() {
        assert_eq!(validate_url(""), Err(AppError::EmptyUrl));
        assert_eq!(validate_url("   "), Err(AppError::EmptyUrl));
        assert!(matches!(validate_url("example.com"), Err(AppError::InvalidUrl(_))));
        assert!(matches!(validate_url("ftp://x"), Err(AppError::InvalidUrl(_))));
        assert!(matches!(validate_url(" https://x"), Err(AppError::InvalidUrl(_))));
        assert_eq!(validate_url("http://x"), Ok("http://x"));
        assert_eq!(validate_url("https://example.com"), Ok("https://example.com"));
    }

    #[tokio::test]
    async fn test_invalid_input_issues_no_calls() {
        let state = RefCell::new(WorkspaceState::new());
        let gateway = RecordingGateway::new();

        for input in ["", "  ", "example.com", "mailto:a@b.c"] {
            let err = submit(&state, &gateway, input).await.unwrap_err();
            assert!(err.is_validation());
        }

        assert!(gateway.calls().is_empty());
        let ws = state.borrow();
        assert!(ws.repository.latest().is_none());
        assert_eq!(ws.notices.len(), 4);
        assert!(ws.notices.iter().all(|n| n.level == NoticeLevel::Blocking));
    }

    #[tokio::test]
    async fn test_successful_submit_sets_latest_only() {
        let state = RefCell::new(WorkspaceState::new());
        let gateway = RecordingGateway::new();
        gateway.push_analyze(Ok(example_result()));

        submit(&state, &gateway, "https://example.com").await.unwrap();

        let ws = state.borrow();
        assert_eq!(ws.repository.latest(), Some(&example_result()));
        assert!(ws.repository.is_empty());
        assert!(ws.notices.is_empty());
        assert_eq!(gateway.analyzed_urls(), ["https://example.com"]);
    }

    #[tokio::test]
    async fn test_failed_submit_keeps_previous_latest() {
        let state = RefCell::new(WorkspaceState::new());
        let gateway = RecordingGateway::new();
        gateway.push_analyze(Ok(result_with_id(1)));
        gateway.push_analyze(Err(AppError::analysis("connection refused")));

        submit(&state, &gateway, "https://site-1.example").await.unwrap();
        let before = state.borrow().repository.clone();
        let err = submit(&state, &gateway, "https://down.example").await.unwrap_err();

        let ws = state.borrow();
        assert_eq!(err, AppError::Analysis("connection refused".into()));
        assert_eq!(ws.repository, before);
        assert_eq!(
            ws.notices.current().map(|n| n.message.as_str()),
            Some("Error: connection refused")
        );
    }

    #[tokio::test]
    async fn test_refresh_replaces_collection() {
        let state = RefCell::new(WorkspaceState::new());
        let gateway = RecordingGateway::new();
        gateway.push_list(Ok(vec![result_with_id(1), result_with_id(2)]));

        refresh(&state, &gateway).await.unwrap();

        assert_eq!(state.borrow().repository.len(), 2);
        assert_eq!(gateway.list_calls(), 1);
    }

    #[tokio::test]
    async fn test_failed_refresh_leaves_collection_untouched() {
        let state = RefCell::new(WorkspaceState::new());
        let gateway = RecordingGateway::new();
        gateway.push_list(Ok(vec![result_with_id(1)]));
        gateway.push_list(Err(AppError::fetch("timed out")));

        refresh(&state, &gateway).await.unwrap();
        assert!(refresh(&state, &gateway).await.is_err());

        let ws = state.borrow();
        assert_eq!(ws.repository.len(), 1);
        assert_eq!(ws.notices.current().map(|n| n.level), Some(NoticeLevel::Blocking));
    }

    #[tokio::test]
    async fn test_submit_then_fetch_all_end_to_end() {
        let state = RefCell::new(WorkspaceState::new());
        let gateway = RecordingGateway::new();
        gateway.push_analyze(Ok(example_result()));
        gateway.push_list(Ok(vec![example_result()]));

        submit(&state, &gateway, "https://example.com").await.unwrap();
        assert_eq!(state.borrow().repository.latest(), Some(&example_result()));

        refresh(&state, &gateway).await.unwrap();
        assert_eq!(state.borrow().repository.results(), &[example_result()]);
    }
}
