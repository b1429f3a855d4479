use quest_core::model::{ModuleIndex, Step, Walkthrough, WalkthroughSummary};
use services::{CourseService, WalkthroughProgress, WalkthroughService, WalkthroughSession};

/// Navigation events the walkthrough view dispatches.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum WalkthroughIntent {
    /// Leave the intro screen for the first module.
    Begin,
    /// Step back one screen.
    Back,
    /// A module runner finished and reports its grade.
    Complete {
        module: ModuleIndex,
        is_correct: bool,
    },
    /// Start the pass over from the intro screen.
    Restart,
}

/// View model owning one walkthrough pass.
#[derive(Clone, Debug, PartialEq)]
pub struct WalkthroughVm {
    session: WalkthroughSession,
}

impl WalkthroughVm {
    #[must_use]
    pub fn start(service: &WalkthroughService) -> Self {
        Self {
            session: service.start(),
        }
    }

    #[must_use]
    pub fn current_step(&self) -> Step {
        self.session.current_step()
    }

    #[must_use]
    pub fn walkthrough(&self) -> &Walkthrough {
        self.session.walkthrough()
    }

    #[must_use]
    pub fn session(&self) -> &WalkthroughSession {
        &self.session
    }

    #[must_use]
    pub fn progress(&self) -> WalkthroughProgress {
        WalkthroughProgress::of(self.session.walkthrough())
    }

    /// Pass summary, available once the results screen has been reached.
    #[must_use]
    pub fn summary(&self, service: &WalkthroughService) -> Option<WalkthroughSummary> {
        service.summary(&self.session).ok()
    }

    pub fn apply(&mut self, service: &WalkthroughService, intent: WalkthroughIntent) {
        match intent {
            WalkthroughIntent::Begin => service.advance(&mut self.session),
            WalkthroughIntent::Back => service.retreat(&mut self.session),
            WalkthroughIntent::Complete { module, is_correct } => {
                service.record_module_result(&mut self.session, module, is_correct);
            }
            WalkthroughIntent::Restart => service.restart(&mut self.session),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PillState {
    Current,
    Done,
    Upcoming,
}

/// One header pill: a step label plus how to style it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StepPillVm {
    pub label: String,
    pub state: PillState,
}

#[must_use]
pub fn map_step_pills(course: &CourseService, walkthrough: &Walkthrough) -> Vec<StepPillVm> {
    let mut labels = Vec::with_capacity(quest_core::model::STEP_COUNT);
    labels.push("Start".to_string());
    for module in course.catalog().modules() {
        labels.push(module.short_label().to_string());
    }
    labels.push("Victory".to_string());

    labels
        .into_iter()
        .enumerate()
        .map(|(ordinal, label)| {
            let step = Step::from_ordinal(ordinal).expect("pill ordinal in range");
            let state = if walkthrough.current_step() == step {
                PillState::Current
            } else if walkthrough.is_completed(step) {
                PillState::Done
            } else {
                PillState::Upcoming
            };
            StepPillVm { label, state }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use quest_core::{Clock, fixed_now};

    fn service() -> WalkthroughService {
        let course = Arc::new(CourseService::builtin().expect("embedded catalog is valid"));
        WalkthroughService::new(Clock::fixed(fixed_now()), course)
    }

    fn index(raw: usize) -> ModuleIndex {
        ModuleIndex::new(raw).unwrap()
    }

    #[test]
    fn begin_moves_to_the_first_module() {
        let service = service();
        let mut vm = WalkthroughVm::start(&service);
        vm.apply(&service, WalkthroughIntent::Begin);
        assert_eq!(vm.current_step(), Step::Module(index(0)));
        assert_eq!(vm.progress().percent, 25);
    }

    #[test]
    fn completing_all_modules_reaches_results() {
        let service = service();
        let mut vm = WalkthroughVm::start(&service);
        vm.apply(&service, WalkthroughIntent::Begin);
        for raw in 0..3 {
            vm.apply(
                &service,
                WalkthroughIntent::Complete {
                    module: index(raw),
                    is_correct: raw != 1,
                },
            );
        }

        assert_eq!(vm.current_step(), Step::Results);
        let summary = vm.summary(&service).expect("complete pass has a summary");
        assert_eq!(summary.correct(), 2);
    }

    #[test]
    fn restart_returns_to_intro_without_summary() {
        let service = service();
        let mut vm = WalkthroughVm::start(&service);
        vm.apply(&service, WalkthroughIntent::Begin);
        vm.apply(
            &service,
            WalkthroughIntent::Complete { module: index(0), is_correct: true },
        );
        vm.apply(&service, WalkthroughIntent::Restart);

        assert_eq!(vm.current_step(), Step::Intro);
        assert!(vm.summary(&service).is_none());
    }

    #[test]
    fn pills_track_current_and_done_steps() {
        let service = service();
        let course = service.course();
        let mut vm = WalkthroughVm::start(&service);

        let pills = map_step_pills(&course, vm.walkthrough());
        let labels: Vec<&str> = pills.iter().map(|pill| pill.label.as_str()).collect();
        assert_eq!(labels, vec!["Start", "What", "How", "Why", "Victory"]);
        assert_eq!(pills[0].state, PillState::Current);
        assert_eq!(pills[1].state, PillState::Upcoming);

        vm.apply(&service, WalkthroughIntent::Begin);
        let pills = map_step_pills(&course, vm.walkthrough());
        assert_eq!(pills[0].state, PillState::Done);
        assert_eq!(pills[1].state, PillState::Current);
    }
}
