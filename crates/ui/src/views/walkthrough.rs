use dioxus::prelude::*;

use quest_core::model::Step;

use crate::context::AppContext;
use crate::views::{IntroView, ModuleView, ResultsView};
use crate::vm::{
    PillState, WalkthroughIntent, WalkthroughVm, map_module_card, map_results, map_step_pills,
};

#[cfg(test)]
use std::cell::RefCell;
#[cfg(test)]
use std::rc::Rc;

/// The orchestrator screen: header with step pills and progress bar, plus
/// exactly one step panel for the current walkthrough position.
#[component]
pub fn WalkthroughView() -> Element {
    let ctx = use_context::<AppContext>();
    let course = ctx.course();
    let walkthroughs = ctx.walkthroughs();

    let vm = use_signal({
        let walkthroughs = walkthroughs.clone();
        move || WalkthroughVm::start(&walkthroughs)
    });

    let dispatch_intent = use_callback({
        let walkthroughs = walkthroughs.clone();
        move |intent: WalkthroughIntent| {
            tracing::debug!(?intent, "walkthrough intent");
            let mut vm = vm;
            vm.write().apply(&walkthroughs, intent);
        }
    });

    #[cfg(test)]
    {
        let mut registered = use_signal(|| false);
        if !registered() {
            registered.set(true);
            if let Some(handles) = try_consume_context::<WalkthroughTestHandles>() {
                handles.register(dispatch_intent);
            }
        }
    }

    let step = vm.read().current_step();
    let progress = vm.read().progress();
    let pills = map_step_pills(&course, vm.read().walkthrough());
    let title = course.catalog().title().to_string();
    let tagline = course.catalog().tagline().to_string();

    let pill_nodes = pills.iter().map(|pill| {
        let class = match pill.state {
            PillState::Current => "walkthrough-pill walkthrough-pill--current",
            PillState::Done => "walkthrough-pill walkthrough-pill--done",
            PillState::Upcoming => "walkthrough-pill",
        };
        let label = pill.label.clone();
        rsx! {
            span { key: "{label}", class: "{class}", "{label}" }
        }
    });

    let content = match step {
        Step::Intro => rsx! {
            IntroView {
                on_next: move |()| dispatch_intent.call(WalkthroughIntent::Begin),
            }
        },
        Step::Module(index) => {
            let card = map_module_card(course.module(index));
            rsx! {
                ModuleView {
                    key: "{index}",
                    module: card,
                    on_complete: move |(module, is_correct)| {
                        dispatch_intent.call(WalkthroughIntent::Complete { module, is_correct });
                    },
                    on_back: move |()| dispatch_intent.call(WalkthroughIntent::Back),
                }
            }
        }
        Step::Results => {
            let summary = vm.read().summary(&walkthroughs);
            let results = map_results(&course, vm.read().session(), summary.as_ref());
            rsx! {
                ResultsView {
                    results,
                    on_restart: move |()| dispatch_intent.call(WalkthroughIntent::Restart),
                    on_back: move |()| dispatch_intent.call(WalkthroughIntent::Back),
                }
            }
        }
    };

    rsx! {
        div { class: "page walkthrough-page",
            header { class: "walkthrough-header",
                div { class: "walkthrough-heading",
                    h1 { class: "walkthrough-title", "{title}" }
                    p { class: "walkthrough-tagline", "{tagline}" }
                }
                div { class: "walkthrough-pills",
                    {pill_nodes}
                }
                div { class: "walkthrough-progress",
                    div {
                        class: "walkthrough-progress-fill",
                        style: "width: {progress.percent}%",
                    }
                }
            }
            section { class: "walkthrough-content",
                {content}
            }
        }
    }
}

#[cfg(test)]
#[derive(Clone, Default)]
pub(crate) struct WalkthroughTestHandles {
    dispatch: Rc<RefCell<Option<Callback<WalkthroughIntent>>>>,
}

#[cfg(test)]
impl WalkthroughTestHandles {
    pub(crate) fn register(&self, dispatch: Callback<WalkthroughIntent>) {
        *self.dispatch.borrow_mut() = Some(dispatch);
    }

    pub(crate) fn dispatch(&self) -> Callback<WalkthroughIntent> {
        (*self.dispatch.borrow()).expect("walkthrough dispatch registered")
    }
}
