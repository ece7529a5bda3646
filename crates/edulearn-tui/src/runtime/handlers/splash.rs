use std::time::Duration;

use crate::events::UiEvent;

/// One-shot splash timer.
pub async fn splash_timer(delay: Duration) -> UiEvent {
    tokio::time::sleep(delay).await;
    UiEvent::SplashElapsed
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_fires_after_delay() {
        tokio::time::pause();
        let start = tokio::time::Instant::now();

        let event = splash_timer(Duration::from_millis(2000)).await;

        assert!(matches!(event, UiEvent::SplashElapsed));
        assert!(start.elapsed() >= Duration::from_millis(2000));
    }
}
