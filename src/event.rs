use crate::session::result::SessionSummary;

/// Notifications for the rendering layer. The core never touches a
/// display surface; the collaborator drains these after each call and
/// decides what to show.
#[derive(Clone, Debug, PartialEq)]
pub enum Event {
    SentenceGenerated { text: String },
    MetricsUpdated { accuracy_pct: u32, wpm: u32 },
    SentenceCompleted { accuracy_pct: u32 },
    LevelUp { level: u32 },
    Achievement { message: &'static str },
    SummaryReady { summary: SessionSummary },
}
