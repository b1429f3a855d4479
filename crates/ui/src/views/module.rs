use dioxus::prelude::*;

use quest_core::model::ModuleIndex;

use crate::context::AppContext;
use crate::vm::{ModuleCardVm, ModuleRunVm, RunIntent, RunPhase};

#[cfg(test)]
use std::cell::RefCell;
#[cfg(test)]
use std::rc::Rc;

/// The module runner: video mock first, quiz once the video is watched.
///
/// Reports `(module_index, is_correct)` through `on_complete` when the
/// learner continues past the feedback.
#[component]
pub fn ModuleView(
    module: ModuleCardVm,
    on_complete: EventHandler<(ModuleIndex, bool)>,
    on_back: EventHandler<()>,
) -> Element {
    let ctx = use_context::<AppContext>();
    let watch_delay = ctx.watch_delay();
    let module_index = module.index;
    let correct_option = module.correct_option;

    let vm = use_signal(move || ModuleRunVm::new(correct_option));

    let dispatch_intent = use_callback(move |intent: RunIntent| {
        let mut vm = vm;
        match intent {
            RunIntent::TogglePlayback => {
                let schedule_timer = vm.write().toggle_playback();
                if schedule_timer {
                    // One-shot simulated playback; finish_watching is
                    // idempotent, so a stray timer is harmless.
                    spawn(async move {
                        tokio::time::sleep(watch_delay).await;
                        let mut vm = vm;
                        vm.write().finish_watching();
                    });
                }
            }
            RunIntent::FinishWatching => vm.write().finish_watching(),
            RunIntent::ShowQuiz => vm.write().show_quiz(),
            RunIntent::Select(option) => vm.write().select(option),
            RunIntent::Submit => vm.write().submit(),
            RunIntent::Continue => {
                if let Some(is_correct) = vm.read().result() {
                    on_complete.call((module_index, is_correct));
                }
            }
        }
    });

    #[cfg(test)]
    {
        let mut registered = use_signal(|| false);
        if !registered() {
            registered.set(true);
            if let Some(handles) = try_consume_context::<ModuleRunTestHandles>() {
                handles.register(dispatch_intent);
            }
        }
    }

    let run = *vm.read();

    match run.phase() {
        RunPhase::Watching => render_watch_phase(&module, run, dispatch_intent, on_back),
        RunPhase::Quiz => render_quiz_phase(&module, run, dispatch_intent, on_back),
    }
}

fn render_watch_phase(
    module: &ModuleCardVm,
    run: ModuleRunVm,
    dispatch_intent: Callback<RunIntent>,
    on_back: EventHandler<()>,
) -> Element {
    let play_label = if run.is_playing() {
        "Pause"
    } else if run.has_watched() {
        "Replay"
    } else {
        "Play Video"
    };
    let player_label = if run.is_playing() { "Pause video" } else { "Play video" };

    rsx! {
        div { class: "step-panel module-watch",
            button {
                class: "btn btn-ghost step-back",
                r#type: "button",
                onclick: move |_| on_back.call(()),
                "Back"
            }
            div { class: "step-heading",
                span { class: "step-badge", "{module.level_label}" }
                h2 { class: "step-title", "{module.title}" }
                p { class: "step-subtitle", "Watch the video to unlock the quiz" }
            }
            div { class: "video-card",
                div { class: "video-card-header",
                    h3 { class: "video-card-title", "{module.video_title}" }
                    p { class: "video-card-hint", "A quick explanation of this key concept" }
                }
                button {
                    class: "video-player",
                    r#type: "button",
                    aria_label: "{player_label}",
                    onclick: move |_| dispatch_intent.call(RunIntent::TogglePlayback),
                    if run.is_playing() {
                        div { class: "video-playing",
                            p { class: "video-playing-label", "Video playing..." }
                            p { class: "video-playing-text", "{module.video_description}" }
                        }
                    } else {
                        div { class: "video-idle",
                            span { class: "video-play-icon", "▶" }
                            p { class: "video-idle-hint", "Click to watch" }
                        }
                    }
                }
                div { class: "video-controls",
                    button {
                        class: "btn btn-secondary",
                        r#type: "button",
                        onclick: move |_| dispatch_intent.call(RunIntent::TogglePlayback),
                        "{play_label}"
                    }
                    if run.has_watched() {
                        button {
                            class: "btn btn-primary",
                            r#type: "button",
                            onclick: move |_| dispatch_intent.call(RunIntent::ShowQuiz),
                            "Continue to Quiz"
                        }
                    }
                }
            }
        }
    }
}

fn render_quiz_phase(
    module: &ModuleCardVm,
    run: ModuleRunVm,
    dispatch_intent: Callback<RunIntent>,
    on_back: EventHandler<()>,
) -> Element {
    let correct_option = module.correct_option;

    let option_nodes = module.options.iter().enumerate().map(|(position, option)| {
        let class = if run.feedback_shown() {
            if position == correct_option {
                "quiz-option quiz-option--correct"
            } else if run.selected() == Some(position) {
                "quiz-option quiz-option--wrong"
            } else {
                "quiz-option"
            }
        } else if run.selected() == Some(position) {
            "quiz-option quiz-option--selected"
        } else {
            "quiz-option"
        };
        let label = option.clone();
        let show_correct_mark = run.feedback_shown() && position == correct_option;
        let show_wrong_mark = run.feedback_shown()
            && run.selected() == Some(position)
            && position != correct_option;
        rsx! {
            button {
                key: "{position}",
                class: "{class}",
                r#type: "button",
                disabled: run.feedback_shown(),
                onclick: move |_| dispatch_intent.call(RunIntent::Select(position)),
                span { class: "quiz-option-label", "{label}" }
                if show_correct_mark {
                    span { class: "quiz-option-mark quiz-option-mark--correct", "✓" }
                }
                if show_wrong_mark {
                    span { class: "quiz-option-mark quiz-option-mark--wrong", "✗" }
                }
            }
        }
    });

    let feedback = run.result().map(|is_correct| {
        let (class, headline) = if is_correct {
            (
                "module-feedback module-feedback--correct",
                "Amazing! You got it right!",
            )
        } else {
            (
                "module-feedback module-feedback--wrong",
                "Not quite, but that's okay!",
            )
        };
        let explanation = module.explanation.clone();
        rsx! {
            div { class: "{class}",
                p { class: "module-feedback-headline", "{headline}" }
                p { class: "module-feedback-text", "{explanation}" }
            }
        }
    });

    rsx! {
        div { class: "step-panel module-quiz",
            button {
                class: "btn btn-ghost step-back",
                r#type: "button",
                onclick: move |_| on_back.call(()),
                "Back"
            }
            div { class: "step-heading",
                span { class: "step-badge", "Quiz Time" }
                h2 { class: "step-title", "Test Your Knowledge" }
                p { class: "step-subtitle", "Answer this question to continue" }
            }
            div { class: "quiz-card",
                h3 { class: "quiz-question", "{module.question}" }
                div { class: "quiz-options",
                    {option_nodes}
                }
                {feedback}
                div { class: "step-actions",
                    if run.feedback_shown() {
                        button {
                            class: "btn btn-primary",
                            r#type: "button",
                            onclick: move |_| dispatch_intent.call(RunIntent::Continue),
                            "Continue"
                        }
                    } else {
                        button {
                            class: "btn btn-primary",
                            r#type: "button",
                            disabled: !run.can_submit(),
                            onclick: move |_| dispatch_intent.call(RunIntent::Submit),
                            "Submit Answer"
                        }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
#[derive(Clone, Default)]
pub(crate) struct ModuleRunTestHandles {
    dispatch: Rc<RefCell<Option<Callback<RunIntent>>>>,
}

#[cfg(test)]
impl ModuleRunTestHandles {
    pub(crate) fn register(&self, dispatch: Callback<RunIntent>) {
        *self.dispatch.borrow_mut() = Some(dispatch);
    }

    pub(crate) fn dispatch(&self) -> Callback<RunIntent> {
        (*self.dispatch.borrow()).expect("module dispatch registered")
    }
}
