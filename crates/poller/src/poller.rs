use std::time::Duration;

use herald_common::error::PollError;
use herald_common::types::PollCursor;
use herald_notifier::{MessageSender, Notifier};

use crate::clock::Clock;
use crate::fetcher::{HttpTransport, ReviewApi};
use crate::interpreter::interpret;
use crate::validator::validate;

/// Where the loop is between cycles.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PollerState {
    /// No cycle has completed yet.
    Startup,
    /// Last cycle succeeded.
    Polling,
    /// Last cycle failed. The wait is the same as in `Polling`.
    Backoff,
}

/// Result of a single [`StatusPoller::run_cycle`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CycleOutcome {
    /// The newest submission was interpreted and this text was sent.
    StatusChanged(String),
    /// The response held no submissions.
    NoUpdates,
    /// The cycle aborted. `notified` is false when the error was internal or a
    /// repeat of the last notified error.
    Failed { message: String, notified: bool },
}

/// Review status poller: fetch → validate → interpret → notify, then sleep.
///
/// Owns all loop state. The cursor only advances when a cycle gets past
/// validation and interpretation; `last_error` holds the most recently
/// notified error text and is not cleared by successful cycles.
pub struct StatusPoller<T, S, C> {
    api: ReviewApi<T>,
    notifier: Notifier<S>,
    clock: C,
    retry_period: Duration,
    cursor: PollCursor,
    last_error: Option<String>,
    state: PollerState,
}

impl<T, S, C> StatusPoller<T, S, C>
where
    T: HttpTransport,
    S: MessageSender,
    C: Clock,
{
    /// Create a poller whose first query window starts at the clock's current time.
    pub fn new(api: ReviewApi<T>, notifier: Notifier<S>, clock: C, retry_period: Duration) -> Self {
        let cursor = PollCursor::new(clock.now());
        Self {
            api,
            notifier,
            clock,
            retry_period,
            cursor,
            last_error: None,
            state: PollerState::Startup,
        }
    }

    /// Start from an explicit cursor instead of the current time.
    pub fn with_cursor(mut self, cursor: PollCursor) -> Self {
        self.cursor = cursor;
        self
    }

    pub fn cursor(&self) -> PollCursor {
        self.cursor
    }

    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    pub fn state(&self) -> PollerState {
        self.state
    }

    /// Start the polling loop. Runs until the task is cancelled.
    pub async fn run(&mut self) {
        tracing::info!(
            cursor = self.cursor.timestamp(),
            retry_period_secs = self.retry_period.as_secs(),
            chat_id = %self.notifier.chat_id(),
            "Status poller started"
        );

        loop {
            self.run_cycle().await;
            tokio::time::sleep(self.retry_period).await;
        }
    }

    /// Execute one cycle without the trailing sleep.
    pub async fn run_cycle(&mut self) -> CycleOutcome {
        match self.check_statuses().await {
            Ok(outcome) => {
                self.state = PollerState::Polling;
                outcome
            }
            Err(e) => {
                self.state = PollerState::Backoff;
                let message = e.notification();
                let notified = self.report_failure(&e, &message).await;
                CycleOutcome::Failed { message, notified }
            }
        }
    }

    async fn check_statuses(&mut self) -> Result<CycleOutcome, PollError> {
        let response = self.api.fetch(self.cursor).await?;
        let homeworks = validate(response)?;

        // The API lists submissions newest first; only the head is reported.
        let outcome = match homeworks.first() {
            Some(newest) => {
                let text = interpret(newest)?.notification();
                tracing::info!(message = %text, "Homework status changed");
                self.notifier.notify(&text).await;
                CycleOutcome::StatusChanged(text)
            }
            None => {
                tracing::debug!(cursor = self.cursor.timestamp(), "There are no new statuses");
                CycleOutcome::NoUpdates
            }
        };

        self.cursor.advance_to(self.clock.now());
        Ok(outcome)
    }

    /// Log a cycle failure and forward it to the chat unless it is internal or
    /// identical to the last notified error. Returns whether a send was attempted.
    async fn report_failure(&mut self, error: &PollError, message: &str) -> bool {
        tracing::error!(
            error = %error,
            cursor = self.cursor.timestamp(),
            "Polling cycle failed"
        );

        if !error.is_notifiable() {
            tracing::debug!("Internal error, not forwarded to chat");
            return false;
        }
        if self.last_error.as_deref() == Some(message) {
            tracing::debug!("Same error already notified, suppressing");
            return false;
        }

        self.notifier.notify(message).await;
        self.last_error = Some(message.to_string());
        true
    }
}
