//! Synchronous publish/subscribe for user creation.

use common::AppResult;
use domain::UserCreated;

/// Receives [`UserCreated`] events.
///
/// Implemented for any `FnMut(&UserCreated) -> AppResult<()>`.
pub trait CreationSubscriber {
    fn on_user_created(&mut self, event: &UserCreated<'_>) -> AppResult<()>;
}

impl<F> CreationSubscriber for F
where
    F: FnMut(&UserCreated<'_>) -> AppResult<()>,
{
    fn on_user_created(&mut self, event: &UserCreated<'_>) -> AppResult<()> {
        self(event)
    }
}

/// Ordered list of subscribers, notified on the publishing thread.
///
/// Dispatch stops at the first subscriber that returns an error; the error
/// is handed back to the publisher and later subscribers are skipped.
#[derive(Default)]
pub struct CreationNotifier<'a> {
    subscribers: Vec<Box<dyn CreationSubscriber + 'a>>,
}

impl<'a> CreationNotifier<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a subscriber after all existing ones
    pub fn subscribe(&mut self, subscriber: impl CreationSubscriber + 'a) {
        self.subscribers.push(Box::new(subscriber));
    }

    /// Builder-style [`subscribe`](Self::subscribe)
    pub fn with(mut self, subscriber: impl CreationSubscriber + 'a) -> Self {
        self.subscribe(subscriber);
        self
    }

    /// Notify every subscriber in registration order
    pub fn publish(&mut self, event: &UserCreated<'_>) -> AppResult<()> {
        let total = self.subscribers.len();
        for (index, subscriber) in self.subscribers.iter_mut().enumerate() {
            tracing::debug!("Dispatching user created event to subscriber {}/{}", index + 1, total);
            if let Err(e) = subscriber.on_user_created(event) {
                tracing::error!(
                    "Subscriber {}/{} failed, skipping the rest: {}",
                    index + 1,
                    total,
                    e
                );
                return Err(e);
            }
        }
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.subscribers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.subscribers.is_empty()
    }
}

impl std::fmt::Debug for CreationNotifier<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CreationNotifier")
            .field("subscribers", &self.subscribers.len())
            .finish()
    }
}
