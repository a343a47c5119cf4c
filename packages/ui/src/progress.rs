use store::{ProgressError, ProgressRecord, ProgressSource};

/// Reads progress rows through the `get_user_progress` server function.
#[derive(Clone, Copy, Debug, Default)]
pub struct ApiProgressSource;

impl ProgressSource for ApiProgressSource {
    async fn fetch_progress(&self, user_id: &str) -> Result<Vec<ProgressRecord>, ProgressError> {
        api::get_user_progress(user_id.to_string())
            .await
            .map_err(|e| progress_error(e.to_string()))
    }
}

fn progress_error(message: String) -> ProgressError {
    if message.contains(api::NOT_AUTHENTICATED) {
        ProgressError::Unauthenticated
    } else {
        ProgressError::Request(message)
    }
}

#[cfg(test)]
mod tests {
    use dioxus::prelude::ServerFnError;

    use super::*;

    #[test]
    fn test_missing_session_is_unauthenticated() {
        let err = ServerFnError::new(api::NOT_AUTHENTICATED);
        assert_eq!(progress_error(err.to_string()), ProgressError::Unauthenticated);
    }

    #[test]
    fn test_other_failures_keep_message() {
        let err = progress_error(ServerFnError::new("Forbidden").to_string());
        match err {
            ProgressError::Request(message) => assert!(message.contains("Forbidden")),
            other => panic!("unexpected error: {other:?}"),
        }
    }
}
