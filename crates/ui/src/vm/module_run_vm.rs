use quest_core::model::{CourseModule, ModuleIndex};

/// Events the module runner view dispatches.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RunIntent {
    TogglePlayback,
    /// The simulated playback timer fired.
    FinishWatching,
    ShowQuiz,
    Select(usize),
    Submit,
    /// Report the grade upward and leave the module.
    Continue,
}

/// The two screens of a module: the video mock, then the quiz.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RunPhase {
    Watching,
    Quiz,
}

/// Presentation state machine for a single module run.
///
/// WatchingMedia → QuizVisible → AnswerSelected → FeedbackShown, where the
/// latter two are `Quiz` with a selection and with a computed grade.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ModuleRunVm {
    correct_option: usize,
    phase: RunPhase,
    playing: bool,
    watched: bool,
    selected: Option<usize>,
    is_correct: Option<bool>,
}

impl ModuleRunVm {
    #[must_use]
    pub fn new(correct_option: usize) -> Self {
        Self {
            correct_option,
            phase: RunPhase::Watching,
            playing: false,
            watched: false,
            selected: None,
            is_correct: None,
        }
    }

    #[must_use]
    pub fn phase(&self) -> RunPhase {
        self.phase
    }

    #[must_use]
    pub fn is_playing(&self) -> bool {
        self.playing
    }

    #[must_use]
    pub fn has_watched(&self) -> bool {
        self.watched
    }

    #[must_use]
    pub fn selected(&self) -> Option<usize> {
        self.selected
    }

    #[must_use]
    pub fn feedback_shown(&self) -> bool {
        self.is_correct.is_some()
    }

    /// The computed grade, present once feedback is shown.
    #[must_use]
    pub fn result(&self) -> Option<bool> {
        self.is_correct
    }

    #[must_use]
    pub fn correct_option(&self) -> usize {
        self.correct_option
    }

    /// Toggles play/pause. Returns true when a watch timer should be
    /// scheduled: only on the first transition into playback.
    pub fn toggle_playback(&mut self) -> bool {
        self.playing = !self.playing;
        self.playing && !self.watched
    }

    /// Marks the video watched and stops playback. Idempotent.
    pub fn finish_watching(&mut self) {
        self.watched = true;
        self.playing = false;
    }

    /// Moves to the quiz, but only once the video has been watched.
    pub fn show_quiz(&mut self) {
        if self.watched {
            self.phase = RunPhase::Quiz;
        }
    }

    /// Picks an option. Ignored before the quiz and after feedback.
    pub fn select(&mut self, option: usize) {
        if self.phase == RunPhase::Quiz && self.is_correct.is_none() {
            self.selected = Some(option);
        }
    }

    #[must_use]
    pub fn can_submit(&self) -> bool {
        self.phase == RunPhase::Quiz && self.selected.is_some() && self.is_correct.is_none()
    }

    /// Grades the selection against the answer key and shows feedback.
    ///
    /// Without a selection this is a no-op; the submit control is disabled in
    /// that state anyway.
    pub fn submit(&mut self) {
        if !self.can_submit() {
            return;
        }
        self.is_correct = self.selected.map(|selected| selected == self.correct_option);
    }
}

/// Display-ready content for one module screen.
#[derive(Clone, Debug, PartialEq)]
pub struct ModuleCardVm {
    pub index: ModuleIndex,
    pub level_label: String,
    pub title: String,
    pub video_title: String,
    pub video_description: String,
    pub question: String,
    pub options: Vec<String>,
    pub correct_option: usize,
    pub explanation: String,
}

#[must_use]
pub fn map_module_card(module: &CourseModule) -> ModuleCardVm {
    ModuleCardVm {
        index: module.index(),
        level_label: format!("Level {}", module.index().value() + 1),
        title: module.title().to_string(),
        video_title: module.video().title().to_string(),
        video_description: module.video().description().to_string(),
        question: module.quiz().question().to_string(),
        options: module.quiz().options().to_vec(),
        correct_option: module.quiz().correct_option(),
        explanation: module.quiz().explanation().to_string(),
    }
}
