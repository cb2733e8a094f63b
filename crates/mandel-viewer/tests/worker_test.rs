//! Background worker and session: frames, supersession, errors.

use std::time::{Duration, Instant};

use mandel_core::config::MandelConfig;
use mandel_core::errors::{MandelErrorCode, ViewerError};
use mandel_core::events::EventDispatcher;
use mandel_core::types::{Direction, Projection};
use mandel_render::{Action, RenderSettings, Renderer, ViewState};
use mandel_viewer::session::Session;
use mandel_viewer::worker::{Frame, RenderWorker, WorkerEvent};

const WAIT: Duration = Duration::from_secs(10);

fn small_renderer() -> Renderer {
    let settings = RenderSettings::new(40, 30, Projection::FixedPlane)
        .unwrap()
        .with_max_iterations(48);
    Renderer::new(settings).unwrap()
}

fn next_frame(worker: &RenderWorker) -> Frame {
    let deadline = Instant::now() + WAIT;
    while Instant::now() < deadline {
        match worker.recv_timeout(Duration::from_millis(100)).unwrap() {
            Some(WorkerEvent::Frame(frame)) => return frame,
            Some(WorkerEvent::Failed { error, .. }) => panic!("render failed: {error}"),
            None => {}
        }
    }
    panic!("no frame within {WAIT:?}");
}

fn settle(session: &mut Session) -> Option<Frame> {
    let deadline = Instant::now() + WAIT;
    let mut last = None;
    while Instant::now() < deadline {
        if let Some(frame) = session.poll_timeout(Duration::from_millis(50)).unwrap() {
            last = Some(frame);
        }
        if !session.is_rendering() {
            return last;
        }
    }
    panic!("session still rendering after {WAIT:?}");
}

#[test]
fn test_initial_frame_is_queued() {
    let renderer = small_renderer();
    let expected = renderer.image().clone();
    let worker = RenderWorker::spawn(renderer).unwrap();
    let frame = next_frame(&worker);
    assert_eq!(frame.generation, 0);
    assert_eq!(frame.image, expected);
    assert_eq!(worker.latest_generation(), 0);
}

#[test]
fn test_submitted_view_comes_back() {
    let mut worker = RenderWorker::spawn(small_renderer()).unwrap();
    let initial = next_frame(&worker);

    let view = ViewState {
        zoom: 4.0,
        shift_x: -0.75,
        ..initial.view
    };
    assert_eq!(worker.submit(view).unwrap(), 1);
    let frame = next_frame(&worker);
    assert_eq!(frame.generation, 1);
    assert_eq!(frame.view, view);
    assert_ne!(frame.image, initial.image);
}

#[test]
fn test_burst_of_submissions_ends_on_latest() {
    let mut worker = RenderWorker::spawn(small_renderer()).unwrap();
    next_frame(&worker);

    let mut view = ViewState {
        max_iterations: 48,
        ..ViewState::default()
    };
    for _ in 0..20 {
        view.zoom *= 1.5;
        worker.submit(view).unwrap();
    }

    let mut frame = next_frame(&worker);
    while frame.generation < 20 {
        frame = next_frame(&worker);
    }
    assert_eq!(frame.generation, 20);
    assert_eq!(frame.view, view);
}

#[test]
fn test_invalid_view_reports_failure() {
    let mut worker = RenderWorker::spawn(small_renderer()).unwrap();
    next_frame(&worker);
    worker
        .submit(ViewState {
            zoom: f64::INFINITY,
            ..ViewState::default()
        })
        .unwrap();

    let deadline = Instant::now() + WAIT;
    loop {
        assert!(Instant::now() < deadline, "no failure reported");
        if let Some(WorkerEvent::Failed { generation, error }) =
            worker.recv_timeout(Duration::from_millis(100)).unwrap()
        {
            assert_eq!(generation, 1);
            assert_eq!(error.error_code(), "RENDER_ERROR");
            break;
        }
    }
}

#[test]
fn test_session_navigation_reaches_screen() {
    let config = MandelConfig::from_toml(
        r#"
        [render]
        width = 32
        height = 24
        max_iterations = 40
        projection = "centered_scale"
        "#,
    )
    .unwrap();
    let mut session = Session::start(&config, EventDispatcher::new()).unwrap();
    assert_eq!(session.projection(), Projection::CenteredScale);
    assert_eq!(session.dimensions().width(), 32);
    settle(&mut session);

    assert!(session.apply(Action::ZoomIn).unwrap());
    assert!(session.apply(Action::Pan(Direction::Right)).unwrap());
    assert!(session.is_rendering());
    let target = *session.view();
    assert_eq!(target.shift_x, 30.0);

    let frame = settle(&mut session).expect("frame for the new view");
    assert_eq!(frame.view, target);
    assert_eq!(*session.shown_view(), target);
    assert_eq!(session.last_error(), None);
}

#[test]
fn test_session_unchanged_view_queues_nothing() {
    let mut session = Session::with_renderer(small_renderer()).unwrap();
    settle(&mut session);
    assert!(!session.apply(Action::Reset).unwrap());
    assert!(!session.is_rendering());
}

#[test]
fn test_session_rejects_bad_config() {
    let config = MandelConfig::from_toml("[render]\nthreads = 0\n").unwrap();
    let err = Session::start(&config, EventDispatcher::new()).unwrap_err();
    assert!(matches!(err, ViewerError::Render(_)));
    assert_eq!(err.error_code(), "RENDER_ERROR");
}
