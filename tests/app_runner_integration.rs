use std::sync::Arc;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use tokio::sync::Mutex;

use voices::{
    core::cmd_executor::CmdExecutor,
    infrastructure::{
        config::Config,
        tui::{test::TestTui, Event, TuiLike},
    },
    integration::app_runner::AppRunner,
    test_helpers::{timeline_response, tweet, user, FakeTwitterService},
    State,
};

fn key(c: char) -> Event {
    Event::Key(KeyEvent::new(KeyCode::Char(c), KeyModifiers::NONE))
}

fn config() -> Config {
    Config::load(
        &std::env::temp_dir().join("voices-app-runner-test-missing"),
        &std::env::temp_dir(),
    )
    .expect("default config loads")
}

#[tokio::test]
async fn test_run_with_default_keybindings_until_quit() {
    let response = timeline_response(
        vec![tweet("t1", "u1"), tweet("t2", "u2")],
        vec![user("u1", "alice"), user("u2", "bob")],
    );
    let executor = CmdExecutor::new(FakeTwitterService::with_timeline(response), 4);
    let test_tui = Arc::new(Mutex::new(
        TestTui::with_events(
            80,
            24,
            [Event::Init, Event::Render, key('j'), key('k'), key('q')],
        )
        .unwrap(),
    ));
    let mut runner = AppRunner::new(
        config(),
        Arc::new(executor),
        Arc::clone(&test_tui) as Arc<Mutex<dyn TuiLike + Send>>,
    );

    runner.run().await.unwrap();

    let tui = test_tui.lock().await;
    assert!(tui.entered());
    assert!(tui.exited());
    assert!(tui.draw_count() >= 1);
    assert_eq!(tui.pending_events(), 0);
    assert_ne!(runner.runtime().state(), &State::Idle);
}

#[tokio::test]
async fn test_closed_event_source_ends_run() {
    let executor = CmdExecutor::new(
        FakeTwitterService::with_timeline(timeline_response(vec![], vec![])),
        4,
    );
    let test_tui = Arc::new(Mutex::new(TestTui::new(40, 10).unwrap()));
    let mut runner = AppRunner::new(
        config(),
        Arc::new(executor),
        Arc::clone(&test_tui) as Arc<Mutex<dyn TuiLike + Send>>,
    );

    runner.run().await.unwrap();

    assert!(runner.should_quit());
    assert!(test_tui.lock().await.exited());
}
