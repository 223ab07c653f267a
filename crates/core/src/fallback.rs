//! Ordered provider fallback.
//!
//! A [`FallbackChain`] is a list of labelled tiers, each a deferred provider
//! call. Tiers run strictly one after another and the chain stops at the
//! first success; a tier is never started unless every earlier tier failed.

use std::future::Future;

use futures::future::BoxFuture;
use futures::FutureExt;

use crate::error::ProviderError;

/// Deferred provider call for one tier.
type TierCall<'a, T> = Box<dyn FnOnce() -> BoxFuture<'a, Result<T, ProviderError>> + Send + 'a>;

struct Tier<'a, T> {
    source: &'static str,
    call: TierCall<'a, T>,
}

/// One tier's failure, kept for logging and diagnostics.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TierFailure {
    pub source: &'static str,
    pub error: ProviderError,
}

/// The value produced by the first tier that succeeded.
#[derive(Debug, Clone, PartialEq)]
pub struct Resolved<T> {
    /// Label of the tier that produced `value`.
    pub source: &'static str,
    pub value: T,
    /// `true` when every provider tier failed and `value` is static data.
    pub degraded: bool,
}

/// Ordered list of provider tiers, tried first to last.
pub struct FallbackChain<'a, T> {
    tiers: Vec<Tier<'a, T>>,
}

impl<T> Default for FallbackChain<'_, T> {
    fn default() -> Self {
        Self { tiers: Vec::new() }
    }
}

impl<'a, T: Send + 'a> FallbackChain<'a, T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a tier labelled `source`. `call` is not invoked until the
    /// chain reaches this tier.
    pub fn tier<F, Fut>(mut self, source: &'static str, call: F) -> Self
    where
        F: FnOnce() -> Fut + Send + 'a,
        Fut: Future<Output = Result<T, ProviderError>> + Send + 'a,
    {
        self.tiers.push(Tier {
            source,
            call: Box::new(move || call().boxed()),
        });
        self
    }

    pub fn len(&self) -> usize {
        self.tiers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tiers.is_empty()
    }

    /// Run tiers in order, returning the first success or every failure.
    pub async fn run(self) -> Result<Resolved<T>, Vec<TierFailure>> {
        let mut failures = Vec::with_capacity(self.tiers.len());

        for tier in self.tiers {
            match (tier.call)().await {
                Ok(value) => {
                    tracing::debug!(source = tier.source, "Fallback tier succeeded");
                    return Ok(Resolved {
                        source: tier.source,
                        value,
                        degraded: false,
                    });
                }
                Err(error) => {
                    tracing::warn!(source = tier.source, %error, "Fallback tier failed");
                    failures.push(TierFailure {
                        source: tier.source,
                        error,
                    });
                }
            }
        }

        Err(failures)
    }

    /// Run tiers in order and, if all fail, answer with static data.
    ///
    /// The static tier cannot fail, so this always resolves.
    pub async fn run_or_else<F>(self, source: &'static str, fallback: F) -> Resolved<T>
    where
        F: FnOnce(&[TierFailure]) -> T,
    {
        match self.run().await {
            Ok(resolved) => resolved,
            Err(failures) => {
                tracing::warn!(
                    attempted = failures.len(),
                    source,
                    "All provider tiers failed, answering with static data"
                );
                Resolved {
                    source,
                    value: fallback(&failures),
                    degraded: true,
                }
            }
        }
    }
}
