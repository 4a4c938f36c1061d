use std::sync::Arc;

use shared::protocol::WeeklyPlanResponse;
use tokio::{
    sync::{broadcast, Mutex},
    task::JoinHandle,
};
use tracing::{debug, error, warn};

use crate::{
    cancel::{cancellation, CancelHandle, CancelToken},
    client::PlanSource,
    error::FetchError,
};

/// Observable load lifecycle. A controller starts at `Loading` and settles
/// at most once; after teardown it stays wherever it was.
#[derive(Debug, Clone)]
pub enum PlanState {
    Loading,
    Error(String),
    Ready(WeeklyPlanResponse),
}

impl PlanState {
    pub fn is_settled(&self) -> bool {
        !matches!(self, Self::Loading)
    }
}

/// Drives the single weekly-plan fetch of one view lifetime.
///
/// `mount` issues the request exactly once, `unmount` cancels whatever is
/// still in flight. Terminal transitions are published on the event channel;
/// `Loading` is the initial state and is never published.
pub struct PlanController {
    source: Arc<dyn PlanSource>,
    inner: Mutex<ControllerState>,
    events: broadcast::Sender<PlanState>,
}

struct ControllerState {
    state: PlanState,
    cancel: Option<CancelHandle>,
    fetch_task: Option<JoinHandle<()>>,
    mounted: bool,
}

impl PlanController {
    pub fn new(source: Arc<dyn PlanSource>) -> Arc<Self> {
        let (events, _) = broadcast::channel(16);
        Arc::new(Self {
            source,
            inner: Mutex::new(ControllerState {
                state: PlanState::Loading,
                cancel: None,
                fetch_task: None,
                mounted: false,
            }),
            events,
        })
    }

    /// Starts the one fetch of this controller's lifetime. Calling it again
    /// keeps the original fetch and does nothing else.
    pub async fn mount(self: &Arc<Self>) {
        let mut inner = self.inner.lock().await;
        if inner.mounted {
            warn!("plan controller mounted twice, keeping the original fetch");
            return;
        }
        inner.mounted = true;

        let (handle, token) = cancellation();
        inner.cancel = Some(handle);

        let controller = Arc::clone(self);
        inner.fetch_task = Some(tokio::spawn(async move {
            controller.run_fetch(token).await;
        }));
    }

    /// Tears the controller down: cancels any in-flight fetch and waits for
    /// the fetch task to finish, so no transition can land afterwards.
    pub async fn unmount(&self) {
        let (cancel, fetch_task) = {
            let mut inner = self.inner.lock().await;
            (inner.cancel.take(), inner.fetch_task.take())
        };
        if let Some(cancel) = cancel {
            cancel.cancel();
        }
        if let Some(fetch_task) = fetch_task {
            let _ = fetch_task.await;
        }
    }

    pub async fn state(&self) -> PlanState {
        self.inner.lock().await.state.clone()
    }

    pub fn subscribe_events(&self) -> broadcast::Receiver<PlanState> {
        self.events.subscribe()
    }

    async fn run_fetch(self: Arc<Self>, token: CancelToken) {
        let outcome = self.source.fetch_weekly_plan(token.clone()).await;

        // A torn-down view must never observe a late terminal state, even
        // when the response and the cancellation race.
        if token.is_cancelled() {
            debug!("weekly plan fetch settled after teardown, dropping outcome");
            return;
        }

        let next = match outcome {
            Ok(plan) => PlanState::Ready(plan),
            Err(FetchError::Cancelled) => return,
            Err(err) => {
                error!(error = %err, "failed to load weekly plan");
                PlanState::Error(err.user_message().to_string())
            }
        };

        {
            let mut inner = self.inner.lock().await;
            inner.state = next.clone();
        }
        let _ = self.events.send(next);
    }
}
