use dioxus::prelude::*;

use crate::context::AppContext;

#[component]
pub fn IntroView(on_next: EventHandler<()>) -> Element {
    let ctx = use_context::<AppContext>();
    let course = ctx.course();

    let mission_nodes = course
        .catalog()
        .modules()
        .iter()
        .enumerate()
        .map(|(position, module)| {
            let number = (position + 1).to_string();
            let title = module.title().to_string();
            rsx! {
                div { key: "{number}", class: "intro-mission",
                    span { class: "intro-mission-number", "{number}" }
                    span { class: "intro-mission-title", "{title}" }
                }
            }
        });

    rsx! {
        div { class: "step-panel intro",
            div { class: "step-heading",
                span { class: "step-badge", "Welcome" }
                h2 { class: "step-title", "Become an RCT Detective" }
                p { class: "step-subtitle",
                    "Three short missions stand between you and the gold standard of medical evidence. Watch each video, pass each quiz, claim the trophy."
                }
            }
            div { class: "intro-missions",
                {mission_nodes}
            }
            div { class: "step-actions",
                button {
                    class: "btn btn-primary intro-start",
                    r#type: "button",
                    onclick: move |_| on_next.call(()),
                    "Start Your Quest"
                }
            }
        }
    }
}
