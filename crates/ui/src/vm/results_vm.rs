use quest_core::model::WalkthroughSummary;
use services::{CourseService, WalkthroughSession};

/// One row of the per-module breakdown on the results screen.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ModuleOutcomeVm {
    pub title: String,
    pub is_correct: Option<bool>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ResultsVm {
    pub headline: String,
    pub score_line: String,
    pub duration_line: Option<String>,
    pub outcomes: Vec<ModuleOutcomeVm>,
}

#[must_use]
pub fn map_results(
    course: &CourseService,
    session: &WalkthroughSession,
    summary: Option<&WalkthroughSummary>,
) -> ResultsVm {
    let walkthrough = session.walkthrough();
    let correct = walkthrough.total_correct();
    let total = course.catalog().modules().len();

    let headline = match correct {
        n if n == total => "Champion researcher!",
        0 => "Every expert starts somewhere!",
        _ => "Great detective work!",
    }
    .to_string();

    let outcomes = course
        .catalog()
        .modules()
        .iter()
        .map(|module| ModuleOutcomeVm {
            title: module.title().to_string(),
            is_correct: walkthrough.score(module.index()),
        })
        .collect();

    ResultsVm {
        headline,
        score_line: format!("You scored {correct} out of {total}"),
        duration_line: summary.map(|summary| {
            format!("Completed in {}", format_duration(summary.duration()))
        }),
        outcomes,
    }
}

fn format_duration(duration: chrono::Duration) -> String {
    let seconds = duration.num_seconds().max(0);
    let minutes = seconds / 60;
    let remainder = seconds % 60;
    if minutes > 0 {
        format!("{minutes}m {remainder:02}s")
    } else {
        format!("{remainder}s")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use chrono::Duration;
    use quest_core::model::ModuleIndex;
    use quest_core::{Clock, fixed_now};
    use services::WalkthroughService;

    fn completed_session(results: [bool; 3]) -> (WalkthroughService, WalkthroughSession) {
        let course = Arc::new(CourseService::builtin().expect("embedded catalog is valid"));
        let service = WalkthroughService::new(Clock::fixed(fixed_now()), course);
        let mut session = service.start();
        service.advance(&mut session);
        for (raw, is_correct) in results.into_iter().enumerate() {
            service.record_module_result(
                &mut session,
                ModuleIndex::new(raw).unwrap(),
                is_correct,
            );
        }
        (service, session)
    }

    #[test]
    fn score_line_counts_correct_modules() {
        let (service, session) = completed_session([true, false, true]);
        let summary = service.summary(&session).unwrap();
        let results = map_results(&service.course(), &session, Some(&summary));

        assert_eq!(results.score_line, "You scored 2 out of 3");
        assert_eq!(results.headline, "Great detective work!");
        assert_eq!(results.outcomes.len(), 3);
        assert_eq!(results.outcomes[0].is_correct, Some(true));
        assert_eq!(results.outcomes[1].is_correct, Some(false));
        assert_eq!(results.duration_line.as_deref(), Some("Completed in 0s"));
    }

    #[test]
    fn perfect_score_gets_the_champion_headline() {
        let (service, session) = completed_session([true, true, true]);
        let results = map_results(&service.course(), &session, None);
        assert_eq!(results.headline, "Champion researcher!");
        assert_eq!(results.duration_line, None);
    }

    #[test]
    fn zero_score_stays_encouraging() {
        let (service, session) = completed_session([false, false, false]);
        let results = map_results(&service.course(), &session, None);
        assert_eq!(results.headline, "Every expert starts somewhere!");
        assert_eq!(results.score_line, "You scored 0 out of 3");
    }

    #[test]
    fn durations_render_minutes_and_seconds() {
        assert_eq!(format_duration(Duration::seconds(42)), "42s");
        assert_eq!(format_duration(Duration::seconds(83)), "1m 23s");
        assert_eq!(format_duration(Duration::seconds(-5)), "0s");
    }
}
