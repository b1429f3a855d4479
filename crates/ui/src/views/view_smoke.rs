use super::test_harness::{drive_dom, setup_view_harness, ViewHarness};
use crate::vm::{RunIntent, WalkthroughIntent};

fn begin(harness: &mut ViewHarness) {
    harness.rebuild();
    harness
        .walkthrough_handles
        .dispatch()
        .call(WalkthroughIntent::Begin);
    drive_dom(&mut harness.dom);
}

fn run_module(harness: &mut ViewHarness, selected: usize) {
    for intent in [
        RunIntent::FinishWatching,
        RunIntent::ShowQuiz,
        RunIntent::Select(selected),
        RunIntent::Submit,
        RunIntent::Continue,
    ] {
        harness.module_handles.dispatch().call(intent);
        drive_dom(&mut harness.dom);
    }
}

#[tokio::test(flavor = "current_thread")]
async fn intro_smoke_renders_course_header() {
    let mut harness = setup_view_harness();
    harness.rebuild();
    let html = harness.render();

    assert!(html.contains("RCT Quest"), "missing title in {html}");
    assert!(
        html.contains("Unlock the secrets of medical research"),
        "missing tagline in {html}"
    );
    assert!(html.contains("Start Your Quest"), "missing start CTA in {html}");
    for pill in ["Start", "What", "How", "Why", "Victory"] {
        assert!(html.contains(pill), "missing pill {pill} in {html}");
    }
    assert!(html.contains("width: 0%"), "missing empty progress in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn begin_shows_the_first_module() {
    let mut harness = setup_view_harness();
    begin(&mut harness);
    let html = harness.render();

    assert!(html.contains("What Are RCTs?"), "missing module title in {html}");
    assert!(
        html.contains("Watch the video to unlock the quiz"),
        "missing watch hint in {html}"
    );
    assert!(html.contains("Play Video"), "missing play control in {html}");
    assert!(html.contains("width: 25%"), "missing progress in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn back_returns_to_the_intro() {
    let mut harness = setup_view_harness();
    begin(&mut harness);
    harness
        .walkthrough_handles
        .dispatch()
        .call(WalkthroughIntent::Back);
    drive_dom(&mut harness.dom);
    let html = harness.render();

    assert!(html.contains("Start Your Quest"), "missing intro in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn watching_unlocks_the_quiz() {
    let mut harness = setup_view_harness();
    begin(&mut harness);

    harness
        .module_handles
        .dispatch()
        .call(RunIntent::TogglePlayback);
    drive_dom(&mut harness.dom);
    let html = harness.render();
    assert!(html.contains("Video playing..."), "missing playback in {html}");

    // Let the zero-delay watch timer fire.
    harness.drive_async().await;
    harness.drive_async().await;
    let html = harness.render();
    assert!(
        html.contains("Continue to Quiz"),
        "missing quiz unlock in {html}"
    );

    harness.module_handles.dispatch().call(RunIntent::ShowQuiz);
    drive_dom(&mut harness.dom);
    let html = harness.render();
    assert!(
        html.contains("What is the main purpose of randomisation in an RCT?"),
        "missing question in {html}"
    );
    assert!(
        html.contains("To ensure groups are similar except for the treatment"),
        "missing options in {html}"
    );
    assert!(html.contains("Submit Answer"), "missing submit in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn wrong_answer_shows_gentle_feedback() {
    let mut harness = setup_view_harness();
    begin(&mut harness);

    for intent in [
        RunIntent::FinishWatching,
        RunIntent::ShowQuiz,
        RunIntent::Select(0),
        RunIntent::Submit,
    ] {
        harness.module_handles.dispatch().call(intent);
        drive_dom(&mut harness.dom);
    }
    let html = harness.render();

    assert!(
        html.contains("Not quite, but that's okay!"),
        "missing feedback in {html}"
    );
    assert!(
        html.contains("Randomisation ensures that the groups"),
        "missing explanation in {html}"
    );
    assert!(html.contains("quiz-option--wrong"), "missing wrong mark in {html}");
    assert!(
        html.contains("quiz-option--correct"),
        "missing correct mark in {html}"
    );
    assert!(html.contains("Continue"), "missing continue in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn full_pass_reaches_results_and_restarts() {
    let mut harness = setup_view_harness();
    begin(&mut harness);

    // Correct answers are (1, 1, 2); miss the second module on purpose.
    run_module(&mut harness, 1);
    run_module(&mut harness, 0);
    run_module(&mut harness, 2);

    let html = harness.render();
    assert!(
        html.contains("You scored 2 out of 3"),
        "missing score in {html}"
    );
    assert!(
        html.contains("Great detective work!"),
        "missing headline in {html}"
    );
    assert!(html.contains("Start Over"), "missing restart in {html}");
    assert!(html.contains("width: 100%"), "missing full progress in {html}");

    harness
        .walkthrough_handles
        .dispatch()
        .call(WalkthroughIntent::Restart);
    drive_dom(&mut harness.dom);
    let html = harness.render();
    assert!(html.contains("Start Your Quest"), "missing intro in {html}");
    assert!(html.contains("width: 0%"), "missing reset progress in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn perfect_pass_crowns_a_champion() {
    let mut harness = setup_view_harness();
    begin(&mut harness);

    for selected in [1, 1, 2] {
        run_module(&mut harness, selected);
    }

    let html = harness.render();
    assert!(
        html.contains("You scored 3 out of 3"),
        "missing score in {html}"
    );
    assert!(
        html.contains("Champion researcher!"),
        "missing headline in {html}"
    );
}
