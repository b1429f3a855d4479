use std::sync::Arc;
use std::time::Duration;

use dioxus::core::NoOpMutations;
use dioxus::prelude::*;
use quest_core::{Clock, fixed_now};
use services::{CourseService, WalkthroughService};

use crate::context::{UiApp, build_app_context};
use crate::views::WalkthroughView;
use crate::views::module::ModuleRunTestHandles;
use crate::views::walkthrough::WalkthroughTestHandles;

#[derive(Clone)]
struct TestApp {
    course: Arc<CourseService>,
    walkthroughs: Arc<WalkthroughService>,
}

impl UiApp for TestApp {
    fn watch_delay(&self) -> Duration {
        // Zero so the simulated playback finishes on the next poll.
        Duration::ZERO
    }

    fn course(&self) -> Arc<CourseService> {
        Arc::clone(&self.course)
    }

    fn walkthroughs(&self) -> Arc<WalkthroughService> {
        Arc::clone(&self.walkthroughs)
    }
}

#[derive(Props, Clone)]
struct HarnessProps {
    app: Arc<TestApp>,
    walkthrough_handles: WalkthroughTestHandles,
    module_handles: ModuleRunTestHandles,
}

impl PartialEq for HarnessProps {
    fn eq(&self, _other: &Self) -> bool {
        true
    }
}

impl Eq for HarnessProps {}

#[component]
fn HarnessRoot(props: HarnessProps) -> Element {
    let app: Arc<dyn UiApp> = props.app.clone();
    use_context_provider(|| build_app_context(&app));
    use_context_provider(|| props.walkthrough_handles.clone());
    use_context_provider(|| props.module_handles.clone());
    rsx! { WalkthroughView {} }
}

pub struct ViewHarness {
    pub dom: VirtualDom,
    pub walkthrough_handles: WalkthroughTestHandles,
    pub module_handles: ModuleRunTestHandles,
}

impl ViewHarness {
    pub fn rebuild(&mut self) {
        self.dom.rebuild_in_place();
        drive_dom(&mut self.dom);
    }

    pub async fn drive_async(&mut self) {
        let _ = tokio::time::timeout(
            std::time::Duration::from_millis(50),
            self.dom.wait_for_work(),
        )
        .await;
        self.dom.render_immediate(&mut NoOpMutations);
        self.dom.process_events();
    }

    pub fn render(&self) -> String {
        dioxus_ssr::render(&self.dom)
    }
}

pub fn drive_dom(dom: &mut VirtualDom) {
    dom.process_events();
    dom.render_immediate(&mut NoOpMutations);
    dom.process_events();
}

pub fn setup_view_harness() -> ViewHarness {
    let course = Arc::new(CourseService::builtin().expect("embedded catalog is valid"));
    let walkthroughs = Arc::new(WalkthroughService::new(
        Clock::fixed(fixed_now()),
        Arc::clone(&course),
    ));
    let app = Arc::new(TestApp {
        course,
        walkthroughs,
    });

    let walkthrough_handles = WalkthroughTestHandles::default();
    let module_handles = ModuleRunTestHandles::default();
    let dom = VirtualDom::new_with_props(
        HarnessRoot,
        HarnessProps {
            app,
            walkthrough_handles: walkthrough_handles.clone(),
            module_handles: module_handles.clone(),
        },
    );

    ViewHarness {
        dom,
        walkthrough_handles,
        module_handles,
    }
}
