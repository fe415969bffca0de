use rand::SeedableRng;
use rand::rngs::SmallRng;

use crate::config::Config;
use crate::engine::progress::ProgressState;
use crate::event::Event;
use crate::generator::SentenceGenerator;
use crate::generator::patterns::WordBank;
use crate::session::result::SessionSummary;
use crate::session::typing::{SessionDelta, TypingSession};
use crate::store::JsonStore;

/// Ties the generator, the active session, and the persistent progression
/// together. The rendering layer calls in with input changes and control
/// actions, then drains the queued events.
pub struct Trainer {
    pub config: Config,
    pub progress: ProgressState,
    session: TypingSession,
    generator: SentenceGenerator,
    store: Option<JsonStore>,
    events: Vec<Event>,
}

impl Trainer {
    pub fn new(config: Config) -> Self {
        Self::build(config, None, SmallRng::from_entropy())
    }

    /// Load progress from `store` and persist every mutation back to it.
    pub fn with_store(config: Config, store: JsonStore) -> Self {
        Self::build(config, Some(store), SmallRng::from_entropy())
    }

    /// Deterministic generation for tests.
    pub fn with_rng(config: Config, rng: SmallRng) -> Self {
        Self::build(config, None, rng)
    }

    pub fn with_store_and_rng(config: Config, store: JsonStore, rng: SmallRng) -> Self {
        Self::build(config, Some(store), rng)
    }

    fn build(mut config: Config, store: Option<JsonStore>, rng: SmallRng) -> Self {
        config.validate();
        let progress = store
            .as_ref()
            .map(|s| ProgressState::from_data(s.load_progress()))
            .unwrap_or_default();
        let generator = SentenceGenerator::from_config(&config, WordBank::load(), rng);

        let mut trainer = Self {
            config,
            progress,
            session: TypingSession::new(""),
            generator,
            store,
            events: Vec::new(),
        };
        trainer.next_sentence();
        trainer
    }

    pub fn session(&self) -> &TypingSession {
        &self.session
    }

    pub fn current_target(&self) -> String {
        self.session.target_text()
    }

    /// Queued notifications since the last drain.
    pub fn take_events(&mut self) -> Vec<Event> {
        std::mem::take(&mut self.events)
    }

    /// Generate a fresh sentence at the current level and start an `Idle`
    /// session over it.
    pub fn next_sentence(&mut self) -> String {
        let text = self.generator.generate_sentence(self.progress.level);
        self.session = TypingSession::new(&text);
        self.events.push(Event::SentenceGenerated { text: text.clone() });
        text
    }

    /// Forward the full current input. Completion commits the sentence
    /// into the progression and persists the snapshot.
    pub fn on_input_changed(&mut self, input: &str) -> SessionDelta {
        let policy = self.config.metrics_policy();
        let delta = self.session.on_input_changed(input, &policy, &self.progress);

        self.events.push(Event::MetricsUpdated {
            accuracy_pct: delta.accuracy_pct,
            wpm: delta.wpm,
        });

        if delta.just_completed {
            self.complete_sentence();
        }
        delta
    }

    fn complete_sentence(&mut self) {
        let accuracy_pct = self.session.sentence_accuracy();
        let outcome = self.progress.record_sentence(
            self.session.typed_len(),
            self.session.error_count(),
            accuracy_pct,
            self.config.level_threshold,
        );

        self.events.push(Event::SentenceCompleted { accuracy_pct });
        if let Some(message) = outcome.achievement {
            self.events.push(Event::Achievement { message });
        }
        if let Some(level) = outcome.new_level {
            self.events.push(Event::LevelUp { level });
        }

        let summary = SessionSummary::from_session(&self.session, &self.progress, accuracy_pct);
        self.events.push(Event::SummaryReady { summary });

        self.persist();
    }

    /// Abandon the current attempt and move on. Breaks the streak, commits
    /// no characters.
    pub fn skip_sentence(&mut self) -> String {
        self.session.abandon();
        self.progress.abandon_sentence();
        self.persist();
        self.next_sentence()
    }

    /// Fresh `Idle` session over the same target text.
    pub fn restart_sentence(&mut self) {
        let target = self.session.target_text();
        self.session = TypingSession::new(&target);
    }

    /// Back to level 1 with zeroed counters, persisted immediately.
    pub fn reset_progress(&mut self) {
        self.progress.reset();
        self.persist();
        self.restart_sentence();
    }

    fn persist(&mut self) {
        if let Some(ref store) = self.store {
            let _ = store.save_progress(&self.progress.to_data());
        }
    }
}
