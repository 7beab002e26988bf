//! Widget instances and their storage.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError, RwLock, RwLockWriteGuard};
use std::time::Duration;

use chrono::{DateTime, Utc};
use tokio::sync::watch;
use tokio::time::Instant;
use tracing::{debug, info, warn};
use uuid::Uuid;

use super::message::Message;
use super::state::{ChatWidget, DEFAULT_SAMPLE_PROMPTS, Phase};
use crate::backend::{QueryBackend, QueryReply};
use crate::error::BackendError;

/// Default idle timeout for widget instances (30 minutes).
pub const DEFAULT_IDLE_TIMEOUT: Duration = Duration::from_secs(30 * 60);

/// Shared handle to one widget instance.
///
/// Cloning the handle is cheap; all clones see the same state.
#[derive(Debug, Clone)]
pub struct WidgetHandle {
    inner: Arc<WidgetInner>,
}

#[derive(Debug)]
struct WidgetInner {
    id: String,
    state: Mutex<ChatWidget>,
    phase: watch::Sender<Phase>,
    created_at: DateTime<Utc>,
    last_activity: RwLock<Instant>,
}

impl WidgetHandle {
    fn new(id: String, widget: ChatWidget) -> Self {
        let now = Utc::now();
        let (phase, _) = watch::channel(widget.phase());
        Self {
            inner: Arc::new(WidgetInner {
                id,
                state: Mutex::new(widget),
                phase,
                created_at: now,
                last_activity: RwLock::new(Instant::now()),
            }),
        }
    }

    /// Get the widget ID.
    #[must_use]
    pub fn id(&self) -> &str {
        &self.inner.id
    }

    /// Copy of the current state, for rendering.
    #[must_use]
    pub fn snapshot(&self) -> ChatWidget {
        self.lock().clone()
    }

    /// Copy of the conversation so far.
    #[must_use]
    pub fn messages(&self) -> Vec<Message> {
        self.lock().messages().to_vec()
    }

    #[must_use]
    pub fn is_in_flight(&self) -> bool {
        self.lock().is_in_flight()
    }

    /// Replace the input text.
    pub fn set_input(&self, text: impl Into<String>) {
        self.update(|widget| widget.set_input(text));
    }

    /// Copy sample prompt `index` into the input. Returns whether it applied.
    pub fn select_sample(&self, index: usize) -> bool {
        self.update(|widget| widget.select_sample(index).is_some())
    }

    /// Start a submission.
    ///
    /// On success the user message is already in the thread and the widget
    /// is waiting; the returned guard must be settled (or dropped, which
    /// settles it as a failure).
    pub fn begin_submit(&self, text: &str) -> Option<PendingQuery> {
        let query = self.update(|widget| widget.submit(text));

        match query {
            Some(query) => {
                info!(
                    name: "widget.submit.accepted",
                    widget_id = %self.inner.id,
                    chars = query.chars().count(),
                    "Query submitted"
                );
                Some(PendingQuery {
                    widget: self.clone(),
                    query,
                    settled: false,
                })
            }
            None => {
                debug!(
                    name: "widget.submit.ignored",
                    widget_id = %self.inner.id,
                    "Submit ignored (blank input or request in flight)"
                );
                None
            }
        }
    }

    /// Submit `text` and wait for the backend.
    ///
    /// Returns the agent message, or `None` when the submit was a no-op.
    pub async fn submit(&self, backend: &dyn QueryBackend, text: &str) -> Option<Message> {
        let pending = self.begin_submit(text)?;
        Some(pending.run(backend).await)
    }

    /// Wait until no query is in flight.
    pub async fn wait_idle(&self) {
        let mut rx = self.inner.phase.subscribe();
        if rx.wait_for(|phase| *phase == Phase::Idle).await.is_err() {
            debug!(name: "widget.wait.closed", widget_id = %self.inner.id, "Phase channel closed");
        }
    }

    /// Check if the widget has been inactive longer than `timeout`.
    ///
    /// Widgets with a query in flight never expire.
    #[must_use]
    pub fn is_expired_with_timeout(&self, timeout: Duration) -> bool {
        if self.is_in_flight() {
            return false;
        }
        let last = *self
            .inner
            .last_activity
            .read()
            .unwrap_or_else(PoisonError::into_inner);
        last.elapsed() >= timeout
    }

    /// Get the widget age.
    #[must_use]
    pub fn age(&self) -> Duration {
        (Utc::now() - self.inner.created_at)
            .to_std()
            .unwrap_or(Duration::ZERO)
    }

    fn lock(&self) -> MutexGuard<'_, ChatWidget> {
        self.inner.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Apply `f` to the state, then record activity and publish the phase.
    ///
    /// The phase is published while the state lock is held so concurrent
    /// updates publish in the order they mutated.
    fn update<R>(&self, f: impl FnOnce(&mut ChatWidget) -> R) -> R {
        let mut widget = self.lock();
        let result = f(&mut widget);

        *self
            .inner
            .last_activity
            .write()
            .unwrap_or_else(PoisonError::into_inner) = Instant::now();
        self.inner.phase.send_replace(widget.phase());

        result
    }
}

/// An in-flight query.
///
/// Holding a `PendingQuery` is holding the widget's in-flight flag. The flag
/// is released exactly once: by [`PendingQuery::settle`], or on drop, which
/// records the query as a connection failure.
#[derive(Debug)]
#[must_use = "dropping a pending query settles it as a failure"]
pub struct PendingQuery {
    widget: WidgetHandle,
    query: String,
    settled: bool,
}

impl PendingQuery {
    /// The text to send to the backend.
    pub fn query(&self) -> &str {
        &self.query
    }

    /// Send the query to `backend` and settle with the outcome.
    pub async fn run(self, backend: &dyn QueryBackend) -> Message {
        let outcome = backend.query(&self.query).await;
        self.settle(outcome)
    }

    /// Settle with `outcome`, returning the agent message appended.
    pub fn settle(mut self, outcome: Result<QueryReply, BackendError>) -> Message {
        self.settled = true;
        let message = self.widget.update(|widget| widget.settle(outcome).clone());

        info!(
            name: "widget.query.settled",
            widget_id = %self.widget.id(),
            message_id = %message.id,
            "Query settled"
        );
        message
    }
}

impl Drop for PendingQuery {
    fn drop(&mut self) {
        if self.settled {
            return;
        }
        warn!(
            name: "widget.query.abandoned",
            widget_id = %self.widget.id(),
            "Pending query dropped before settling"
        );
        self.widget.update(|widget| {
            widget.settle(Err(BackendError::Cancelled));
        });
    }
}

/// Thread-safe index of live widget instances.
///
/// Each instance owns independent state; the store only maps IDs to handles.
#[derive(Debug, Clone)]
pub struct WidgetStore {
    inner: Arc<WidgetStoreInner>,
}

#[derive(Debug)]
struct WidgetStoreInner {
    widgets: RwLock<HashMap<String, WidgetHandle>>,
    sample_prompts: Vec<String>,
}

impl Default for WidgetStore {
    fn default() -> Self {
        Self::new(DEFAULT_SAMPLE_PROMPTS.iter().map(ToString::to_string).collect())
    }
}

impl WidgetStore {
    /// Create a store whose widgets offer `sample_prompts`.
    #[must_use]
    pub fn new(sample_prompts: Vec<String>) -> Self {
        Self {
            inner: Arc::new(WidgetStoreInner {
                widgets: RwLock::new(HashMap::new()),
                sample_prompts,
            }),
        }
    }

    /// Create a new widget instance and return it.
    #[must_use]
    pub fn create(&self) -> WidgetHandle {
        let id = Uuid::new_v4().to_string();
        let widget = WidgetHandle::new(
            id.clone(),
            ChatWidget::new(self.inner.sample_prompts.clone()),
        );
        self.widgets_mut().insert(id, widget.clone());
        widget
    }

    /// Get a widget by ID.
    #[must_use]
    pub fn get(&self, id: &str) -> Option<WidgetHandle> {
        self.inner
            .widgets
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(id)
            .cloned()
    }

    /// Remove a widget by ID.
    pub fn remove(&self, id: &str) -> Option<WidgetHandle> {
        self.widgets_mut().remove(id)
    }

    /// Get the number of live widgets.
    #[must_use]
    pub fn len(&self) -> usize {
        self.inner
            .widgets
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    /// Check if there are no widgets.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Remove widgets that have been inactive longer than the timeout.
    ///
    /// Returns the number of widgets removed.
    pub fn cleanup_expired_with_timeout(&self, timeout: Duration) -> usize {
        let mut widgets = self.widgets_mut();
        let before = widgets.len();
        widgets.retain(|_, widget| !widget.is_expired_with_timeout(timeout));
        before - widgets.len()
    }

    fn widgets_mut(&self) -> RwLockWriteGuard<'_, HashMap<String, WidgetHandle>> {
        self.inner
            .widgets
            .write()
            .unwrap_or_else(PoisonError::into_inner)
    }
}
