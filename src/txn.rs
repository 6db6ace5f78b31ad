//! Storage transaction helper.
//!
//! [`with_transaction`] owns the commit/rollback ceremony so storage code
//! only writes the work itself: commit on success, roll back on error,
//! hand the original error back untouched. [`with_retry`] layers a
//! [`RetryPolicy`] on top, re-running the transaction while the returned
//! error matches one of the policy's retryable sentinels.
//!
//! The retry decision goes through the chain comparison API ([`one_of`])
//! only; the helper never inspects messages or codes directly. Rollback on
//! panic is the [`Transaction`] implementation's job (typically in `Drop`).

use std::error::Error as StdError;
use std::time::Duration;

use async_trait::async_trait;
use futures::future::BoxFuture;
use tracing::{error, warn};

use crate::error::{one_of, Error};

/// A transaction handle. Implementations are provided by the storage
/// layer; the helper only ever commits or rolls back.
#[async_trait]
pub trait Transaction: Send {
    /// Makes the transaction's writes durable.
    async fn commit(&mut self) -> Result<(), Error>;
    /// Discards the transaction's writes.
    async fn rollback(&mut self) -> Result<(), Error>;
}

/// A storage handle that can open transactions.
#[async_trait]
pub trait Store: Send + Sync {
    /// The transaction type this store hands out.
    type Tx: Transaction;

    /// Opens a new transaction.
    async fn begin(&self) -> Result<Self::Tx, Error>;
}

/// Runs `f` inside a transaction and handles commit/rollback based on the
/// result it returns.
///
/// On success the transaction is committed and the value returned. On
/// error the transaction is rolled back (rollback failures are logged, not
/// returned) and the original error is propagated.
pub async fn with_transaction<S, T, F>(store: &S, f: F) -> Result<T, Error>
where
    S: Store,
    F: for<'tx> FnOnce(&'tx mut S::Tx) -> BoxFuture<'tx, Result<T, Error>>,
{
    let mut tx = store.begin().await?;
    let result = f(&mut tx).await;
    match result {
        Ok(value) => match tx.commit().await {
            Ok(()) => Ok(value),
            Err(err) => {
                error!(error = %err, "couldn't commit transaction");
                Err(err)
            }
        },
        Err(err) => {
            error!(error = %err, "an error occurred while executing transaction");
            if let Err(rollback_err) = tx.rollback().await {
                error!(error = %rollback_err, "couldn't rollback transaction");
            }
            Err(err)
        }
    }
}

/// Configuration for transaction retry with exponential backoff.
///
/// An error is retryable when the chain matches one of the policy's
/// sentinels; everything else aborts immediately.
#[derive(Clone, Debug)]
pub struct RetryPolicy {
    /// Base delay for the first retry attempt.
    pub base_delay: Duration,
    /// Maximum delay cap for any retry attempt.
    pub max_delay: Duration,
    /// Maximum number of attempts, the first one included.
    pub max_attempts: u32,
    retry_on: Vec<Error>,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            base_delay: Duration::from_millis(100),
            max_delay: Duration::from_secs(10),
            max_attempts: 3,
            retry_on: Vec::new(),
        }
    }
}

impl RetryPolicy {
    /// Creates a policy with the given backoff parameters and no
    /// retryable sentinels.
    pub fn new(base_delay: Duration, max_delay: Duration, max_attempts: u32) -> Self {
        Self {
            base_delay,
            max_delay,
            max_attempts,
            retry_on: Vec::new(),
        }
    }

    /// Adds a sentinel whose presence anywhere in a returned error's chain
    /// makes the transaction retryable.
    pub fn retry_on(mut self, sentinel: Error) -> Self {
        self.retry_on.push(sentinel);
        self
    }

    /// Calculates the delay before the next attempt: `base_delay *
    /// 2^(attempt - 1)`, capped at `max_delay`.
    pub fn delay(&self, attempt: u32) -> Duration {
        if attempt == 0 {
            return self.base_delay;
        }
        let exponent = (attempt - 1).min(31);
        let multiplier = 1u64 << exponent;
        let base_millis = self.base_delay.as_millis() as u64;
        let delay_millis = base_millis.saturating_mul(multiplier);
        Duration::from_millis(delay_millis.min(self.max_delay.as_millis() as u64))
    }

    /// Decides whether a failed attempt should be retried. `attempt` is
    /// 1-based.
    pub fn should_retry(&self, attempt: u32, err: &Error) -> bool {
        if attempt >= self.max_attempts {
            return false;
        }
        let targets: Vec<&dyn StdError> = self
            .retry_on
            .iter()
            .map(|sentinel| sentinel as &dyn StdError)
            .collect();
        one_of(err, &targets)
    }
}

/// Runs `f` inside a transaction, retrying per `policy`.
///
/// Each attempt gets a fresh transaction. Non-retryable errors and
/// exhausted attempts propagate the last error unchanged.
pub async fn with_retry<S, T, F>(store: &S, policy: &RetryPolicy, f: F) -> Result<T, Error>
where
    S: Store,
    F: for<'tx> Fn(&'tx mut S::Tx) -> BoxFuture<'tx, Result<T, Error>>,
{
    let mut attempt = 1u32;
    loop {
        match with_transaction(store, &f).await {
            Ok(value) => return Ok(value),
            Err(err) => {
                if !policy.should_retry(attempt, &err) {
                    return Err(err);
                }
                let delay = policy.delay(attempt);
                warn!(error = %err, attempt, delay_ms = delay.as_millis() as u64, "retrying transaction");
                tokio::time::sleep(delay).await;
                attempt += 1;
            }
        }
    }
}
