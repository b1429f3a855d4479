use dioxus::prelude::*;

use crate::vm::ResultsVm;

#[component]
pub fn ResultsView(
    results: ResultsVm,
    on_restart: EventHandler<()>,
    on_back: EventHandler<()>,
) -> Element {
    let outcome_nodes = results.outcomes.iter().map(|outcome| {
        let (class, mark) = match outcome.is_correct {
            Some(true) => ("results-outcome results-outcome--correct", "✓"),
            Some(false) => ("results-outcome results-outcome--wrong", "✗"),
            None => ("results-outcome", "–"),
        };
        let title = outcome.title.clone();
        rsx! {
            li { key: "{title}", class: "{class}",
                span { class: "results-outcome-mark", "{mark}" }
                span { class: "results-outcome-title", "{title}" }
            }
        }
    });

    rsx! {
        div { class: "step-panel results",
            button {
                class: "btn btn-ghost step-back",
                r#type: "button",
                onclick: move |_| on_back.call(()),
                "Back"
            }
            div { class: "step-heading",
                span { class: "step-badge", "Victory" }
                span { class: "results-trophy", "🏆" }
                h2 { class: "step-title", "{results.headline}" }
                p { class: "results-score", "{results.score_line}" }
                if let Some(duration_line) = results.duration_line.as_ref() {
                    p { class: "results-duration", "{duration_line}" }
                }
            }
            ul { class: "results-outcomes",
                {outcome_nodes}
            }
            div { class: "step-actions",
                button {
                    class: "btn btn-primary",
                    r#type: "button",
                    onclick: move |_| on_restart.call(()),
                    "Start Over"
                }
            }
        }
    }
}
