use std::future::Future;

use futures::future::{select, Either};
use gloo_timers::future::TimeoutFuture;

use crate::error::SiteError;

/// Races `request` against a timer; the loser is dropped.
pub async fn with_timeout<T, F>(timeout_ms: u32, request: F) -> Result<T, SiteError>
where
    F: Future<Output = Result<T, SiteError>>,
{
    race(timeout_ms, request, TimeoutFuture::new(timeout_ms)).await
}

/// `deadline` finishing first turns into `SiteError::Timeout(timeout_ms)`.
async fn race<T, F, D>(timeout_ms: u32, request: F, deadline: D) -> Result<T, SiteError>
where
    F: Future<Output = Result<T, SiteError>>,
    D: Future<Output = ()>,
{
    match select(Box::pin(request), Box::pin(deadline)).await {
        Either::Left((result, _)) => result,
        Either::Right(_) => {
            log::warn!("Request timed out after {} ms", timeout_ms);
            Err(SiteError::Timeout(timeout_ms))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;
    use futures::future::{pending, ready};

    #[test]
    fn expired_deadline_becomes_timeout() {
        let outcome = block_on(race(20_000, pending::<Result<u8, SiteError>>(), ready(())));
        assert_eq!(outcome, Err(SiteError::Timeout(20_000)));
    }

    #[test]
    fn finished_request_wins() {
        assert_eq!(block_on(race(10, ready(Ok(7u8)), pending())), Ok(7));
        let failed = block_on(race(10, ready(Err::<u8, _>(SiteError::Network("offline".into()))), pending()));
        assert_eq!(failed, Err(SiteError::Network("offline".into())));
    }

    #[test]
    fn timeout_is_shown_as_a_connection_problem() {
        let outcome = block_on(race(5, pending::<Result<(), SiteError>>(), ready(())));
        let message = outcome.err().map(|e| e.user_message()).unwrap_or_default();
        assert!(message.contains("couldn't reach the server"));
    }
}
