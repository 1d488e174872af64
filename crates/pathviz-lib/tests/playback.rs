mod common;

use std::cell::Cell as Counter;
use std::time::Duration;

use pathviz_lib::{
    schedule, schedule_outcome, Algorithm, CancelHandle, Clock, ManualClock, PlaybackEvent,
    PlaybackStatus, DEFAULT_STEP_DELAY,
};

use common::{reference_grid, search};

#[test]
fn cancelling_before_any_event_fires_nothing() {
    let grid = reference_grid();
    let outcome = search(&grid, Algorithm::Bfs);
    let visits = Counter::new(0usize);
    let steps = Counter::new(0usize);

    let mut playback = schedule_outcome(
        &outcome,
        |_| visits.set(visits.get() + 1),
        |_| steps.set(steps.get() + 1),
        DEFAULT_STEP_DELAY,
    );
    assert_eq!(
        playback.scheduled(),
        outcome.visited.len() + 1 + outcome.path.len()
    );

    playback.cancel();
    let mut clock = ManualClock::new();
    assert_eq!(playback.run(&mut clock), PlaybackStatus::Cancelled);
    assert_eq!(playback.advance_to(Duration::from_secs(3600)), 0);
    drop(playback);

    assert_eq!(visits.get(), 0);
    assert_eq!(steps.get(), 0);
}

#[test]
fn replay_dispatches_visits_before_path() {
    let grid = reference_grid();
    let outcome = search(&grid, Algorithm::Dijkstra);
    let log = std::cell::RefCell::new(Vec::new());

    let mut playback = schedule_outcome(
        &outcome,
        |cell| log.borrow_mut().push(("visit", cell)),
        |cell| log.borrow_mut().push(("path", cell)),
        DEFAULT_STEP_DELAY,
    );
    let mut clock = ManualClock::new();
    assert_eq!(playback.run(&mut clock), PlaybackStatus::Completed);
    let last_step = (outcome.visited.len() + outcome.path.len() - 1) as u32;
    let last_deadline = DEFAULT_STEP_DELAY * last_step;
    assert_eq!(clock.elapsed(), last_deadline);
    drop(playback);

    let log = log.into_inner();
    let (visits, path): (Vec<_>, Vec<_>) = log.iter().partition(|(kind, _)| *kind == "visit");
    assert_eq!(visits.len(), outcome.visited.len());
    assert_eq!(path.len(), outcome.path.len());
    let first_path = log.iter().position(|(kind, _)| *kind == "path").unwrap();
    assert_eq!(first_path, outcome.visited.len());
    let replayed: Vec<_> = path.iter().map(|(_, cell)| *cell).collect();
    assert_eq!(replayed, outcome.path);
}

#[test]
fn path_start_marker_follows_last_visit() {
    let step = Duration::from_millis(5);
    let playback = schedule(&['a', 'b'], &['a', 'b'], |_| {}, |_| {}, step);
    let events: Vec<_> = playback.events().map(|e| (e.at, e.event)).collect();
    assert_eq!(events[2], (step * 2, PlaybackEvent::PathStart));
    assert_eq!(events[3], (step * 2, PlaybackEvent::PathStep('a')));
    assert_eq!(events[4], (step * 3, PlaybackEvent::PathStep('b')));
}

#[test]
fn one_handle_cancels_several_playbacks() {
    let handle = CancelHandle::new();
    let fired = Counter::new(0usize);
    let bump = |_: i32| fired.set(fired.get() + 1);
    let mut first = schedule(&[1, 2], &[1, 2], bump, |_| {}, DEFAULT_STEP_DELAY)
        .with_cancel_handle(handle.clone());
    let mut second = schedule(&[3, 4], &[3, 4], bump, |_| {}, DEFAULT_STEP_DELAY)
        .with_cancel_handle(handle.clone());

    assert_eq!(first.advance_to(Duration::ZERO), 1);
    handle.cancel();
    assert_eq!(first.advance_to(Duration::from_secs(1)), 0);
    assert_eq!(second.advance_to(Duration::from_secs(1)), 0);
    assert_eq!(first.status(), PlaybackStatus::Cancelled);
    assert_eq!(second.status(), PlaybackStatus::Cancelled);
    drop((first, second));
    assert_eq!(fired.get(), 1);
}
