// src/services/ar_session_service_tests.rs
//
// Session lifecycle tests against a mocked view host. The interesting cases
// are the idempotence gaps: starting twice must attach once, stopping while
// inactive must not detach at all.

use std::sync::Arc;

use serde_json::json;

use crate::error::AppError;
use crate::integrations::view_host::MockViewHost;
use crate::services::ArSessionService;

fn sample_args() -> serde_json::Value {
    json!({
        "landmarks": { "toe": [0.1, 0.2], "heel": [0.3, 0.4] },
        "rotation": 12.5,
        "scale": { "x": 1.0, "y": 1.0 }
    })
}

#[test]
fn test_start_session_attaches_once() {
    let mut host = MockViewHost::new();
    host.expect_attach().times(1).returning(|_| Ok(()));

    let mut service = ArSessionService::new(Arc::new(host));
    service.initialize(Some("license-123")).unwrap();

    assert!(service.start_session().is_ok());
    assert!(service.is_active());

    // Second start is a no-op; the mock rejects a second attach call
    assert!(service.start_session().is_ok());
    assert!(service.is_active());
}

#[test]
fn test_start_session_without_surface_is_noop() {
    let mut host = MockViewHost::new();
    host.expect_attach().times(0);

    let mut service = ArSessionService::new(Arc::new(host));

    assert!(service.start_session().is_ok());
    assert!(!service.is_active());
}

#[test]
fn test_stop_session_while_inactive_is_noop() {
    let mut host = MockViewHost::new();
    host.expect_detach().times(0);

    let mut service = ArSessionService::new(Arc::new(host));
    service.initialize(None).unwrap();

    assert!(service.stop_session().is_ok());
    assert!(!service.is_active());
}

#[test]
fn test_stop_session_detaches_active_session() {
    let mut host = MockViewHost::new();
    host.expect_attach().times(1).returning(|_| Ok(()));
    host.expect_detach().times(1).returning(|| Ok(()));

    let mut service = ArSessionService::new(Arc::new(host));
    service.initialize(None).unwrap();
    service.start_session().unwrap();

    assert!(service.stop_session().is_ok());
    assert!(!service.is_active());
}

#[test]
fn test_attach_failure_propagates_and_keeps_session_inactive() {
    let mut host = MockViewHost::new();
    host.expect_attach()
        .times(1)
        .returning(|_| Err(AppError::Host("UI tree unavailable".to_string())));

    let mut service = ArSessionService::new(Arc::new(host));
    service.initialize(None).unwrap();

    assert!(service.start_session().is_err());
    assert!(!service.is_active());
}

#[test]
fn test_initialize_replaces_surface() {
    let mut host = MockViewHost::new();
    host.expect_attach().times(0);

    let mut service = ArSessionService::new(Arc::new(host));
    service.initialize(None).unwrap();
    service.switch_effect("effects/glitter.deepar").unwrap();

    // Re-initializing constructs a fresh surface with no effect stored
    service.initialize(None).unwrap();
    assert_eq!(service.surface().unwrap().current_effect(), None);
}

#[test]
fn test_switch_effect_refreshes_active_surface() {
    let mut host = MockViewHost::new();
    host.expect_attach().times(1).returning(|_| Ok(()));
    host.expect_refresh()
        .times(1)
        .withf(|status| status.contains("Effect: glitter.deepar"))
        .returning(|_| Ok(()));

    let mut service = ArSessionService::new(Arc::new(host));
    service.initialize(None).unwrap();
    service.start_session().unwrap();

    assert!(service.switch_effect("effects/glitter.deepar").is_ok());
}

#[test]
fn test_switch_effect_without_surface_succeeds() {
    let mut host = MockViewHost::new();
    host.expect_refresh().times(0);

    let mut service = ArSessionService::new(Arc::new(host));

    assert!(service.switch_effect("effects/glitter.deepar").is_ok());
    assert!(service.surface().is_none());
}

#[test]
fn test_update_shoe_position_stores_sample() {
    let mut host = MockViewHost::new();
    host.expect_attach().times(0);

    let mut service = ArSessionService::new(Arc::new(host));
    service.initialize(None).unwrap();

    let args = sample_args();
    assert!(service.update_shoe_position(Some(&args)).is_ok());

    let stored = service.surface().unwrap().tracking().unwrap();
    assert_eq!(stored.rotation, 12.5);
}

#[test]
fn test_update_shoe_position_without_ar_data_fails() {
    let host = MockViewHost::new();
    let mut service = ArSessionService::new(Arc::new(host));
    service.initialize(None).unwrap();

    assert!(service.update_shoe_position(None).is_err());
}

#[test]
fn test_rejected_update_keeps_previous_sample() {
    let mut host = MockViewHost::new();
    host.expect_attach().times(0);

    let mut service = ArSessionService::new(Arc::new(host));
    service.initialize(None).unwrap();
    service.update_shoe_position(Some(&sample_args())).unwrap();

    let missing_scale = json!({ "landmarks": { "toe": [0.5] } });
    assert!(service.update_shoe_position(Some(&missing_scale)).is_err());

    // The earlier sample is untouched
    let stored = service.surface().unwrap().tracking().unwrap();
    assert_eq!(stored.rotation, 12.5);
    assert!(stored.landmarks.contains_key("heel"));
}

#[test]
fn test_placeholders_are_fixed() {
    let host = MockViewHost::new();
    let mut service = ArSessionService::new(Arc::new(host));

    assert_eq!(service.take_screenshot().unwrap(), "screenshot_path.jpg");
    assert!(service.start_recording().is_ok());
    assert_eq!(service.stop_recording().unwrap(), "video_path.mp4");
}

#[test]
fn test_available_effects_catalog() {
    let host = MockViewHost::new();
    let service = ArSessionService::new(Arc::new(host));

    assert_eq!(
        service.available_effects(),
        vec!["effect1.deepar", "effect2.deepar", "effect3.deepar"]
    );
    assert!(service.is_available());
}
