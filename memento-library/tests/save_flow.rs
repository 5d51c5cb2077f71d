//! Recording through the capture controller and saving into a user's library.

use chrono::NaiveDate;

use memento_capture_core::{
    CaptureConfiguration, CaptureError, CaptureMode, CaptureSink, MediaConstraints,
    MediaSourceProvider, MediaStream, MockSink, RecordingController, RecordingSession,
    SessionState,
};
use memento_library::{
    AppContext, Category, LibraryError, MessageStore, SaveMessageRequest, Viewer,
};

struct NoCamera;

impl MediaSourceProvider for NoCamera {
    fn acquire(&mut self, _constraints: &MediaConstraints) -> Result<MediaStream, CaptureError> {
        Err(CaptureError::DeviceUnavailable("permission denied".into()))
    }

    fn create_sink(&mut self, _stream: &MediaStream) -> Result<Box<dyn CaptureSink>, CaptureError> {
        Ok(Box::new(MockSink::new()))
    }

    fn release(&mut self, _stream: MediaStream) {}
}

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 10, 19).unwrap()
}

fn reviewable_controller(prompt: Option<&str>, seconds: u32) -> RecordingController {
    let mut controller =
        RecordingController::new(Box::new(NoCamera), CaptureConfiguration::default()).unwrap();
    controller.set_prompt(prompt.map(str::to_string));
    controller.request_start().unwrap();
    controller.request_start().unwrap();
    for _ in 0..seconds {
        controller.tick().unwrap();
    }
    controller.request_stop().unwrap();
    assert_eq!(controller.state(), SessionState::Reviewable);
    controller
}

fn request() -> SaveMessageRequest {
    SaveMessageRequest {
        title: "Birthday message for Sarah".into(),
        category: Category::Love,
        delivery_date: NaiveDate::from_ymd_opt(2027, 3, 1),
        viewers: vec![Viewer::with_email("Sarah", "sarah@example.com")],
        ..Default::default()
    }
}

#[test]
fn mock_recording_lands_in_the_library_with_its_prompt() {
    let mut ctx = AppContext::new();
    ctx.sign_in("user-1").unwrap();
    let prompt = ctx.prompts_mut().unwrap().select_guided(2).unwrap().text;

    let mut controller = reviewable_controller(Some(prompt), 8);
    let saved = ctx.save_recording(&mut controller, request(), today()).unwrap();

    assert_eq!(controller.state(), SessionState::Idle);
    assert_eq!(saved.prompt.as_deref(), Some(prompt));
    assert_eq!(saved.duration_label, "0:08");
    assert_eq!(saved.artifact.mode, CaptureMode::Mock);
    assert!(!saved.video.is_empty());
    assert_eq!(ctx.library().unwrap().len(), 1);
    assert_eq!(ctx.prompts().unwrap().current_prompt(), None);
}

#[test]
fn rejected_form_keeps_the_recording_reviewable() {
    let mut ctx = AppContext::new();
    ctx.sign_in("user-1").unwrap();
    let mut controller = reviewable_controller(None, 3);

    let mut bad = request();
    bad.viewers.clear();
    assert_eq!(
        ctx.save_recording(&mut controller, bad, today()).unwrap_err(),
        LibraryError::NoViewers
    );
    assert_eq!(controller.state(), SessionState::Reviewable);

    let saved = ctx.save_recording(&mut controller, request(), today()).unwrap();
    assert_eq!(saved.prompt, None);
    assert_eq!(ctx.library().unwrap().list()[0].id, saved.id);
}

#[test]
fn saving_twice_is_refused_by_the_controller() {
    let mut ctx = AppContext::new();
    ctx.sign_in("user-1").unwrap();
    let mut controller = reviewable_controller(None, 2);

    ctx.save_recording(&mut controller, request(), today()).unwrap();
    assert!(matches!(
        ctx.save_recording(&mut controller, request(), today()),
        Err(LibraryError::Capture(CaptureError::InvalidTransition { .. }))
    ));
    assert_eq!(ctx.library().unwrap().len(), 1);
}

#[test]
fn signing_out_hands_back_the_library_for_export() {
    let mut ctx = AppContext::new();
    ctx.sign_in("user-1").unwrap();
    let mut controller = reviewable_controller(None, 1);
    ctx.save_recording(&mut controller, request(), today()).unwrap();

    let library = ctx.sign_out().unwrap();
    let json = library.export_json().unwrap();
    assert!(ctx.library().is_err());

    ctx.restore("user-1", &json).unwrap();
    assert_eq!(ctx.library().unwrap().len(), 1);
}
