//! Timed replay of a search run.
//!
//! [`schedule`] turns a visited-order sequence and a path into an ordered
//! list of events with absolute deadlines `0, d, 2d, ...`: one
//! [`PlaybackEvent::Visit`] per visited node, one [`PlaybackEvent::PathStart`]
//! right after the last visit, then one [`PlaybackEvent::PathStep`] per path
//! node. A single loop ([`Playback::run`] or repeated
//! [`Playback::advance_to`] calls from a render loop) dispatches them in
//! order. Cancelling through a [`CancelHandle`] stops dispatch before the next
//! event; it never touches the search state the sequences came from.

use std::collections::VecDeque;
use std::fmt;
use std::hash::Hash;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};

use crate::search::SearchOutcome;

/// Per-step delay used by the reference animation.
pub const DEFAULT_STEP_DELAY: Duration = Duration::from_millis(20);

/// A single replay step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaybackEvent<N> {
    /// A node from the visited order is rendered as visited.
    Visit(N),
    /// Every visit has fired; path rendering begins.
    PathStart,
    /// A node of the path is rendered as on-path.
    PathStep(N),
}

/// Event with its absolute deadline relative to scheduling time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScheduledEvent<N> {
    pub at: Duration,
    pub event: PlaybackEvent<N>,
}

/// Cooperative cancellation token shared between a playback and its owner.
///
/// Cancelling is idempotent and can happen from any thread; the playback
/// observes it before dispatching each event.
#[derive(Clone, Debug, Default)]
pub struct CancelHandle {
    cancelled: Arc<AtomicBool>,
}

impl CancelHandle {
    pub fn new() -> Self {
        Self::default()
    }

    /// Request cancellation of every pending event.
    pub fn cancel(&self) {
        if !self.cancelled.swap(true, Ordering::SeqCst) {
            tracing::debug!("playback cancelled");
        }
    }

    #[inline]
    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::SeqCst)
    }
}

/// Time source driving [`Playback::run`].
pub trait Clock {
    /// Time elapsed since the playback was scheduled.
    fn elapsed(&self) -> Duration;

    /// Block until `deadline` has elapsed.
    fn wait_until(&mut self, deadline: Duration);
}

/// Wall clock that sleeps the current thread.
#[derive(Debug, Clone, Copy)]
pub struct SystemClock {
    origin: Instant,
}

impl SystemClock {
    pub fn start() -> Self {
        Self {
            origin: Instant::now(),
        }
    }
}

impl Clock for SystemClock {
    fn elapsed(&self) -> Duration {
        self.origin.elapsed()
    }

    fn wait_until(&mut self, deadline: Duration) {
        let now = self.elapsed();
        if deadline > now {
            std::thread::sleep(deadline - now);
        }
    }
}

/// Clock that jumps straight to each deadline. Used in tests and for
/// instant replays.
#[derive(Debug, Clone, Copy, Default)]
pub struct ManualClock {
    now: Duration,
}

impl ManualClock {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn advance(&mut self, by: Duration) {
        self.now += by;
    }
}

impl Clock for ManualClock {
    fn elapsed(&self) -> Duration {
        self.now
    }

    fn wait_until(&mut self, deadline: Duration) {
        self.now = self.now.max(deadline);
    }
}

/// Where a playback stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaybackStatus {
    Pending,
    Completed,
    Cancelled,
}

type Callback<'a, N> = Box<dyn FnMut(N) + 'a>;

/// Ordered, cancellable schedule of replay events.
pub struct Playback<'a, N> {
    events: VecDeque<ScheduledEvent<N>>,
    on_visit: Callback<'a, N>,
    on_path_step: Callback<'a, N>,
    cancel: CancelHandle,
    scheduled: usize,
    fired: usize,
}

/// Schedule the replay of `visited` followed by `path`.
///
/// Event `i` is due at `i * step_delay`. The path-start marker is due right
/// after the last visit, together with the first path step.
pub fn schedule<'a, N, V, P>(
    visited: &[N],
    path: &[N],
    on_visit: V,
    on_path_step: P,
    step_delay: Duration,
) -> Playback<'a, N>
where
    N: Copy,
    V: FnMut(N) + 'a,
    P: FnMut(N) + 'a,
{
    let visits = visited.iter().map(|&node| PlaybackEvent::Visit(node));
    let path_start = visited.len();
    let steps = path
        .iter()
        .enumerate()
        .map(|(j, &node)| (path_start + j, PlaybackEvent::PathStep(node)));

    let mut events = VecDeque::with_capacity(visited.len() + 1 + path.len());
    events.extend(visits.enumerate().map(|(i, event)| ScheduledEvent {
        at: step_delay * step_index(i),
        event,
    }));
    events.push_back(ScheduledEvent {
        at: step_delay * step_index(path_start),
        event: PlaybackEvent::PathStart,
    });
    events.extend(steps.map(|(i, event)| ScheduledEvent {
        at: step_delay * step_index(i),
        event,
    }));

    tracing::debug!(
        "scheduled playback of {} visits and {} path steps at {:?} per step",
        visited.len(),
        path.len(),
        step_delay
    );

    let scheduled = events.len();
    Playback {
        events,
        on_visit: Box::new(on_visit),
        on_path_step: Box::new(on_path_step),
        cancel: CancelHandle::new(),
        scheduled,
        fired: 0,
    }
}

/// Schedule the replay of a finished search.
pub fn schedule_outcome<'a, N, V, P>(
    outcome: &SearchOutcome<N>,
    on_visit: V,
    on_path_step: P,
    step_delay: Duration,
) -> Playback<'a, N>
where
    N: Copy + Eq + Hash,
    V: FnMut(N) + 'a,
    P: FnMut(N) + 'a,
{
    schedule(
        &outcome.visited,
        &outcome.path,
        on_visit,
        on_path_step,
        step_delay,
    )
}

impl<'a, N: Copy> Playback<'a, N> {
    /// Share an existing cancellation handle, e.g. one owned by a controller
    /// that cancels every playback on reset.
    pub fn with_cancel_handle(mut self, cancel: CancelHandle) -> Self {
        self.cancel = cancel;
        self
    }

    /// Handle that cancels this playback as a batch.
    pub fn cancel_handle(&self) -> CancelHandle {
        self.cancel.clone()
    }

    /// Cancel every pending event.
    pub fn cancel(&mut self) {
        self.cancel.cancel();
        self.events.clear();
    }

    /// Total events scheduled, including the path-start marker.
    pub fn scheduled(&self) -> usize {
        self.scheduled
    }

    pub fn fired(&self) -> usize {
        self.fired
    }

    pub fn pending(&self) -> usize {
        self.events.len()
    }

    /// Pending events in dispatch order.
    pub fn events(&self) -> impl Iterator<Item = &ScheduledEvent<N>> {
        self.events.iter()
    }

    /// Deadline of the next pending event.
    pub fn next_deadline(&self) -> Option<Duration> {
        if self.cancel.is_cancelled() {
            return None;
        }
        self.events.front().map(|event| event.at)
    }

    pub fn status(&self) -> PlaybackStatus {
        if self.cancel.is_cancelled() {
            PlaybackStatus::Cancelled
        } else if self.events.is_empty() {
            PlaybackStatus::Completed
        } else {
            PlaybackStatus::Pending
        }
    }

    /// Dispatch every pending event due at or before `elapsed`, in order.
    /// Returns how many fired.
    pub fn advance_to(&mut self, elapsed: Duration) -> usize {
        let mut fired = 0;
        while let Some(next) = self.events.front() {
            if self.cancel.is_cancelled() {
                self.events.clear();
                break;
            }
            if next.at > elapsed {
                break;
            }
            if let Some(scheduled) = self.events.pop_front() {
                self.dispatch(scheduled.event);
                fired += 1;
            }
        }
        self.fired += fired;
        fired
    }

    /// Drive the playback to completion or cancellation.
    pub fn run<C: Clock>(&mut self, clock: &mut C) -> PlaybackStatus {
        while let Some(deadline) = self.next_deadline() {
            clock.wait_until(deadline);
            self.advance_to(clock.elapsed());
        }
        if self.cancel.is_cancelled() {
            self.events.clear();
        }
        self.status()
    }

    fn dispatch(&mut self, event: PlaybackEvent<N>) {
        match event {
            PlaybackEvent::Visit(node) => (self.on_visit)(node),
            PlaybackEvent::PathStart => tracing::trace!("path playback started"),
            PlaybackEvent::PathStep(node) => (self.on_path_step)(node),
        }
    }
}

impl<N: fmt::Debug> fmt::Debug for Playback<'_, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Playback")
            .field("pending", &self.events.len())
            .field("scheduled", &self.scheduled)
            .field("fired", &self.fired)
            .field("cancelled", &self.cancel.is_cancelled())
            .finish()
    }
}

fn step_index(i: usize) -> u32 {
    u32::try_from(i).unwrap_or(u32::MAX)
}
