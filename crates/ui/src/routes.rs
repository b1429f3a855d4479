use dioxus::prelude::*;
use dioxus_router::{Outlet, Routable};

use crate::views::WalkthroughView;

#[derive(Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Layout)]
        #[route("/", WalkthroughView)] Walkthrough {},
}

#[component]
fn Layout() -> Element {
    rsx! {
        div { class: "app",
            main { class: "content",
                Outlet::<Route> {}
            }
        }
    }
}
