//! Calibration runs driven through the full session

mod common;

use common::ts;
use nalgebra::Point2;
use roomscan::{ScanConfig, ScanEvent, ScanSession, ScanState, Viewport};

fn p(x: f64, y: f64) -> Point2<f64> {
    Point2::new(x, y)
}

fn new_session() -> ScanSession {
    ScanSession::new(ScanConfig::default(), Viewport::new(800.0, 600.0))
}

fn calibrate(session: &mut ScanSession, a: Point2<f64>, b: Point2<f64>, real_distance: f64) {
    session.process_event(ScanEvent::ToggleCalibration);
    session.process_event(ScanEvent::CapturePoint(a));
    session.process_event(ScanEvent::CapturePoint(b));
    session.process_event(ScanEvent::FinishCalibration { real_distance });
}

#[test]
fn test_scale_applies_to_area_conversion() {
    let _ = env_logger::builder().is_test(true).try_init();

    let mut session = new_session();
    calibrate(&mut session, p(0.0, 0.0), p(100.0, 0.0), 10.0);
    assert!((session.scale() - 10.0).abs() < 1e-12);

    // 100 px square: 10,000 px² becomes 100 real units²
    for point in [
        p(0.0, 0.0),
        p(100.0, 0.0),
        p(100.0, 100.0),
        p(0.0, 100.0),
        p(2.0, 2.0),
    ] {
        session.process_event(ScanEvent::CapturePoint(point));
    }
    assert!(session.is_closed());

    let live = session.live_measurement();
    assert!((live.area - 100.0).abs() < 1e-9);
    assert!((live.perimeter - 40.0).abs() < 1e-9);
}

#[test]
fn test_invalid_distance_keeps_calibration_open() {
    let _ = env_logger::builder().is_test(true).try_init();

    let mut session = new_session();
    session.process_event(ScanEvent::ToggleCalibration);
    session.process_event(ScanEvent::CapturePoint(p(0.0, 0.0)));
    session.process_event(ScanEvent::CapturePoint(p(50.0, 0.0)));

    session.process_event(ScanEvent::FinishCalibration {
        real_distance: -1.0,
    });

    // Rejected: still calibrating, scale untouched, references preserved
    assert!(session.is_calibrating());
    assert!((session.scale() - 35.0).abs() < 1e-12);
    assert_eq!(session.reference_points().len(), 2);

    // User retries with a valid distance
    session.process_event(ScanEvent::FinishCalibration { real_distance: 5.0 });
    assert!(!session.is_calibrating());
    assert!((session.scale() - 10.0).abs() < 1e-12);
}

#[test]
fn test_finish_without_references_rejected() {
    let mut session = new_session();
    session.process_event(ScanEvent::ToggleCalibration);
    session.process_event(ScanEvent::CapturePoint(p(0.0, 0.0)));

    session.process_event(ScanEvent::FinishCalibration { real_distance: 10.0 });

    assert!(session.is_calibrating());
    assert_eq!(
        session.state(),
        &ScanState::Calibrating {
            references_captured: 1
        }
    );
    assert!((session.scale() - 35.0).abs() < 1e-12);
}

#[test]
fn test_recalibration_resets_polygon() {
    let _ = env_logger::builder().is_test(true).try_init();

    let mut session = new_session();
    session.process_event(ScanEvent::CapturePoint(p(10.0, 10.0)));
    session.process_event(ScanEvent::CapturePoint(p(200.0, 10.0)));
    assert_eq!(session.vertices().len(), 2);

    // A completed run under a new scale invalidates captured vertices
    calibrate(&mut session, p(0.0, 0.0), p(70.0, 0.0), 2.0);

    assert!(session.vertices().is_empty());
    assert!((session.scale() - 35.0).abs() < 1e-12);
    assert_eq!(session.state(), &ScanState::MeasuringOpen);
}

#[test]
fn test_toggle_out_keeps_scale_and_polygon() {
    let mut session = new_session();
    session.process_event(ScanEvent::CapturePoint(p(10.0, 10.0)));

    session.process_event(ScanEvent::ToggleCalibration);
    assert!(session.is_calibrating());
    session.process_event(ScanEvent::CapturePoint(p(0.0, 0.0)));

    // Leaving without finishing changes nothing
    session.process_event(ScanEvent::ToggleCalibration);
    assert!(!session.is_calibrating());
    assert!((session.scale() - 35.0).abs() < 1e-12);
    assert_eq!(session.vertices().len(), 1);

    // Re-entering starts a fresh run
    session.process_event(ScanEvent::ToggleCalibration);
    assert!(session.reference_points().is_empty());
}

#[test]
fn test_reference_capture_ignores_stability_clock() {
    let mut session = new_session();
    session.process_event(ScanEvent::ToggleCalibration);

    // Ticks during calibration must not capture reference points
    session.process_event(ScanEvent::MotionSample {
        magnitude: 0.9,
        at: ts(0),
    });
    for t in (50..=2000).step_by(50) {
        session.process_event(ScanEvent::Tick { at: ts(t) });
    }

    assert!(session.reference_points().is_empty());

    // Manual confirmations still work
    session.process_event(ScanEvent::CapturePoint(p(10.0, 0.0)));
    session.process_event(ScanEvent::CapturePoint(p(80.0, 0.0)));
    assert_eq!(session.reference_points().len(), 2);
}
