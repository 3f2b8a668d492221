use crate::{
    Rect,
    tests::support::{ScriptedRunner, runner_with},
};

/// WHAT: Application control steps build the expected commands
/// WHY: These steps are unverified, so the command text is all there is
#[tokio::test(start_paused = true)]
#[allow(clippy::unwrap_used)]
async fn given_app_steps_when_running_then_commands_issued() {
    // Given: One of each application step
    let process = ScriptedRunner::succeeding();
    let runner = runner_with(&process);
    runner
        .open_app("System Preferences", "--background")
        .activate_app("Finder")
        .move_and_resize_app("Finder", Rect::new(10, 20, 800, 600))
        .kill_app("Finder");

    // When: Running
    runner.run().await.unwrap();

    // Then: Bounds are absolute right/bottom coordinates
    assert_eq!(
        process.calls(),
        vec![
            "open -a \"System Preferences\" --background",
            "osascript -e 'tell application \"Finder\" to activate'",
            "osascript -e 'tell application \"Finder\" to set the bounds of the first window to {10, 20, 810, 620}'",
            "killall Finder",
        ]
    );
}

/// WHAT: Each application step pays the default settle delay
/// WHY: Window animations need time before the next step
#[tokio::test(start_paused = true)]
#[allow(clippy::unwrap_used)]
async fn given_two_app_steps_when_running_then_settle_between() {
    let process = ScriptedRunner::succeeding();
    let runner = runner_with(&process);
    runner.activate_app("Finder").kill_app("Finder");

    runner.run().await.unwrap();

    let calls = process.timed_calls();
    assert!(calls[1].0 - calls[0].0 >= std::time::Duration::from_millis(1000));
}
