use std::sync::Arc;
use std::time::{Duration, Instant};

use socialboost::async_task::{AuthOutcome, AuthRequest, TaskManager};
use socialboost::auth::{AuthProvider, DemoAccount};
use socialboost::key_handler::{ActionContext, ActionProcessor, Command, Focus, KeyAction};
use socialboost::route::Redirect;
use socialboost::{Credentials, LocalProvider, Route, Router, SessionManager, Severity, Toasts};
use tempfile::TempDir;

fn provider(dir: &TempDir) -> Arc<LocalProvider> {
    Arc::new(LocalProvider::new(
        vec![DemoAccount::default()],
        dir.path().join("session.json"),
    ))
}

fn demo_credentials() -> Credentials {
    let account = DemoAccount::default();
    Credentials::new(account.email, account.password)
}

fn key_context(session: &SessionManager, route: Route) -> ActionContext {
    ActionContext {
        route,
        focus: Focus::View,
        show_help: false,
        text_input: route == Route::Login,
        modal_open: false,
        authenticated: session.is_authenticated(),
        loading: session.is_loading(),
    }
}

fn wait_for(tm: &mut TaskManager) -> AuthOutcome {
    let deadline = Instant::now() + Duration::from_secs(5);
    while Instant::now() < deadline {
        if let Some(outcome) = tm.try_recv() {
            return outcome;
        }
        std::thread::sleep(Duration::from_millis(5));
    }
    panic!("background request did not complete");
}

#[test]
fn test_background_login_and_logout_round_trip() {
    let dir = TempDir::new().unwrap();
    let provider = provider(&dir);
    let mut session = SessionManager::new(provider.clone());
    let mut router = Router::default();
    let mut tasks = TaskManager::new();
    let mut toasts = Toasts::default();

    session.subscribe();
    tasks.spawn_request(session.provider(), AuthRequest::LoadSession);
    match wait_for(&mut tasks) {
        AuthOutcome::SessionLoaded(result) => session.finish_initialize(result),
        other => panic!("unexpected outcome {:?}", other),
    }
    assert!(!session.is_loading());
    assert!(!session.is_authenticated());
    assert_eq!(router.resolve(false, false), None);

    tasks.spawn_request(session.provider(), AuthRequest::Login(demo_credentials()));
    match wait_for(&mut tasks) {
        AuthOutcome::LoggedIn(result) => assert!(session.report_login(result, &mut toasts)),
        other => panic!("unexpected outcome {:?}", other),
    }
    assert_eq!(session.pump_events(&mut toasts), 1);
    assert!(session.is_authenticated());
    assert!(!session.is_awaiting_event());
    assert_eq!(toasts.count(Severity::Success), 1);
    assert_eq!(
        router.resolve(false, true),
        Some(Redirect {
            from: Route::Login,
            to: Route::Dashboard
        })
    );

    tasks.spawn_request(session.provider(), AuthRequest::Logout);
    match wait_for(&mut tasks) {
        AuthOutcome::LoggedOut(result) => assert!(session.report_logout(result, &mut toasts)),
        other => panic!("unexpected outcome {:?}", other),
    }
    assert_eq!(session.pump_events(&mut toasts), 1);
    assert!(!session.is_authenticated());
    assert_eq!(router.resolve(false, false).map(|r| r.to), Some(Route::Login));
    assert!(!provider.session_path().exists());
}

#[test]
fn test_session_restored_after_restart() {
    let dir = TempDir::new().unwrap();
    {
        let first = provider(&dir);
        first.sign_in_with_password(&demo_credentials()).unwrap();
    }

    let mut session = SessionManager::new(provider(&dir));
    assert!(session.is_loading());
    session.initialize();
    assert!(!session.is_loading());
    assert_eq!(
        session.user().map(|u| u.email.as_str()),
        Some("demo@socialboost.app")
    );
}

#[test]
fn test_rejected_login_notifies_once() {
    let dir = TempDir::new().unwrap();
    let mut session = SessionManager::new(provider(&dir));
    let mut toasts = Toasts::default();
    session.subscribe();
    session.initialize();

    let result = session.login(&Credentials::new("demo@socialboost.app", "nope"));
    assert!(!session.report_login(result, &mut toasts));
    assert_eq!(session.pump_events(&mut toasts), 0);

    assert!(!session.is_authenticated());
    assert_eq!(toasts.len(), 1);
    assert_eq!(
        toasts.latest().map(|t| t.message.as_str()),
        Some("Invalid login credentials")
    );
}

#[test]
fn test_unsubscribed_manager_ignores_provider_events() {
    let dir = TempDir::new().unwrap();
    let provider = provider(&dir);
    let mut session = SessionManager::new(provider.clone());
    let mut toasts = Toasts::default();
    session.subscribe();
    session.initialize();
    assert_eq!(provider.listener_count(), 1);

    session.unsubscribe();
    assert_eq!(provider.listener_count(), 0);

    provider.sign_in_with_password(&demo_credentials()).unwrap();
    assert_eq!(session.pump_events(&mut toasts), 0);
    assert!(!session.is_authenticated());
    assert!(toasts.is_empty());
}

#[test]
fn test_no_navigation_until_session_is_known() {
    let dir = TempDir::new().unwrap();
    let mut session = SessionManager::new(provider(&dir));
    let mut router = Router::new(Route::Dashboard);
    assert!(session.is_loading());

    let ctx = key_context(&session, router.current());
    assert_eq!(ActionProcessor::process(KeyAction::NextView, &ctx), Command::None);
    assert_eq!(ActionProcessor::process(KeyAction::InputChar('3'), &ctx), Command::None);
    assert_eq!(router.resolve(session.is_loading(), session.is_authenticated()), None);
    assert_eq!(router.current(), Route::Dashboard);

    let ctx = key_context(&session, Route::Login);
    assert_eq!(ActionProcessor::process(KeyAction::Select, &ctx), Command::None);
    assert_eq!(ActionProcessor::process(KeyAction::Quit, &ctx), Command::Quit);

    session.finish_initialize(Ok(None));
    assert!(!session.is_loading());
    assert_eq!(
        router.resolve(session.is_loading(), session.is_authenticated()).map(|r| r.to),
        Some(Route::Login)
    );
    let ctx = key_context(&session, router.current());
    assert_eq!(ActionProcessor::process(KeyAction::Select, &ctx), Command::Submit);
}
