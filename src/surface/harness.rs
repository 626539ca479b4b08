use std::panic::AssertUnwindSafe;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::mpsc::Sender;
use std::sync::Arc;
use std::thread;
use std::time::Duration;

use crate::llm::ChatModel;
use crate::pipeline::{prompt, ResponseOrchestrator};

use super::SurfaceEvent;

/// Typing-indicator animation frames.
pub const INDICATOR_FRAMES: [&str; 5] = ["•  ", "•• ", "•••", " ••", "  •"];

/// Interval between indicator frames.
pub const INDICATOR_TICK: Duration = Duration::from_millis(450);

/// Runs one `respond` call per user submission without blocking the
/// surface loop.
///
/// Each submission spawns an ephemeral worker thread plus an indicator
/// thread; both report back only through the event channel. Submissions
/// run concurrently with no cancellation and no ordering guarantee —
/// replies may arrive out of submission order.
pub struct ResponseHarness<M: ChatModel + Send + Sync + 'static> {
    orchestrator: Arc<ResponseOrchestrator<M>>,
    events: Sender<SurfaceEvent>,
    next_submission: AtomicU64,
    indicator_tick: Duration,
}

impl<M: ChatModel + Send + Sync + 'static> ResponseHarness<M> {
    pub fn new(orchestrator: Arc<ResponseOrchestrator<M>>, events: Sender<SurfaceEvent>) -> Self {
        Self {
            orchestrator,
            events,
            next_submission: AtomicU64::new(0),
            indicator_tick: INDICATOR_TICK,
        }
    }

    /// Override the indicator interval (tests use a short tick).
    pub fn with_indicator_tick(mut self, tick: Duration) -> Self {
        self.indicator_tick = tick;
        self
    }

    /// Accept one user submission. Returns its submission number.
    pub fn submit(&self, text: &str) -> u64 {
        let submission = self.next_submission.fetch_add(1, Ordering::Relaxed);
        let _ = self.events.send(SurfaceEvent::UserMessage(text.to_string()));

        let stop = Arc::new(AtomicBool::new(false));
        let indicator = spawn_indicator(
            submission,
            self.events.clone(),
            Arc::clone(&stop),
            self.indicator_tick,
        );

        let orchestrator = Arc::clone(&self.orchestrator);
        let events = self.events.clone();
        let text = text.to_string();
        thread::spawn(move || {
            let reply = std::panic::catch_unwind(AssertUnwindSafe(|| orchestrator.respond(&text)))
                .unwrap_or_else(|_| {
                    tracing::error!(submission, "Response worker panicked");
                    prompt::GENERIC_WORKER_ERROR.to_string()
                });

            // Stop the indicator before rendering the reply. The join is
            // unconditional: the indicator never outlives its submission.
            stop.store(true, Ordering::Relaxed);
            let _ = indicator.join();
            let _ = events.send(SurfaceEvent::IndicatorCleared { submission });
            let _ = events.send(SurfaceEvent::BotMessage(reply));
        });

        submission
    }
}

fn spawn_indicator(
    submission: u64,
    events: Sender<SurfaceEvent>,
    stop: Arc<AtomicBool>,
    tick: Duration,
) -> thread::JoinHandle<()> {
    thread::spawn(move || {
        // The first frame renders unconditionally, even for instant replies.
        let mut index = 0usize;
        loop {
            let frame = INDICATOR_FRAMES[index % INDICATOR_FRAMES.len()];
            if events
                .send(SurfaceEvent::IndicatorFrame { submission, frame })
                .is_err()
            {
                break;
            }
            index += 1;
            thread::sleep(tick);
            if stop.load(Ordering::Relaxed) {
                break;
            }
        }
    })
}

#[cfg(test)]
mod tests {
    use std::sync::mpsc;
    use std::time::Duration;

    use super::*;
    use crate::config::GenerationConfig;
    use crate::db::KnowledgeStore;
    use crate::llm::{ChatRequest, GenerationError, MockChatModel};
    use tempfile::TempDir;

    const RECV_TIMEOUT: Duration = Duration::from_secs(5);

    fn harness(
        model: MockChatModel,
    ) -> (
        TempDir,
        ResponseHarness<MockChatModel>,
        mpsc::Receiver<SurfaceEvent>,
    ) {
        let dir = TempDir::new().unwrap();
        let store = KnowledgeStore::open(&dir.path().join("health.db")).unwrap();
        let orchestrator = Arc::new(ResponseOrchestrator::new(
            store,
            model,
            GenerationConfig::default(),
        ));
        let (tx, rx) = mpsc::channel();
        let harness = ResponseHarness::new(orchestrator, tx)
            .with_indicator_tick(Duration::from_millis(10));
        (dir, harness, rx)
    }

    /// Drain events until the bot reply for any submission arrives.
    fn collect_until_reply(rx: &mpsc::Receiver<SurfaceEvent>) -> Vec<SurfaceEvent> {
        let mut events = Vec::new();
        loop {
            let event = rx.recv_timeout(RECV_TIMEOUT).expect("reply never arrived");
            let done = matches!(event, SurfaceEvent::BotMessage(_));
            events.push(event);
            if done {
                return events;
            }
        }
    }

    #[test]
    fn user_message_is_rendered_first() {
        let (_dir, harness, rx) = harness(MockChatModel::replying("hello"));
        harness.submit("I have a fever");
        let events = collect_until_reply(&rx);
        assert_eq!(
            events[0],
            SurfaceEvent::UserMessage("I have a fever".to_string())
        );
    }

    #[test]
    fn indicator_animates_then_clears_before_reply() {
        let (_dir, harness, rx) = harness(MockChatModel::replying("hello"));
        let submission = harness.submit("I have a fever");
        let events = collect_until_reply(&rx);

        let frames = events
            .iter()
            .filter(|e| matches!(e, SurfaceEvent::IndicatorFrame { .. }))
            .count();
        assert!(frames >= 1, "expected at least one indicator frame");

        let cleared = events
            .iter()
            .position(|e| *e == SurfaceEvent::IndicatorCleared { submission })
            .expect("indicator never cleared");
        let reply = events
            .iter()
            .position(|e| matches!(e, SurfaceEvent::BotMessage(_)))
            .unwrap();
        assert!(cleared < reply, "indicator must clear before the reply");

        // No frames after the clear: the indicator thread was joined.
        assert!(events[cleared..]
            .iter()
            .all(|e| !matches!(e, SurfaceEvent::IndicatorFrame { .. })));
    }

    #[test]
    fn reply_carries_orchestrator_output() {
        let (_dir, harness, rx) = harness(MockChatModel::replying("drink water"));
        harness.submit("I have a fever");
        let events = collect_until_reply(&rx);
        assert_eq!(
            events.last(),
            Some(&SurfaceEvent::BotMessage("drink water".to_string()))
        );
    }

    #[test]
    fn submissions_get_distinct_numbers() {
        let (_dir, harness, rx) = harness(MockChatModel::replying("ok"));
        let first = harness.submit("I have a fever");
        let second = harness.submit("I have a cough");
        assert_ne!(first, second);
        // Both replies arrive.
        let mut replies = 0;
        while replies < 2 {
            if matches!(
                rx.recv_timeout(RECV_TIMEOUT).expect("missing reply"),
                SurfaceEvent::BotMessage(_)
            ) {
                replies += 1;
            }
        }
    }

    /// A model that delays submissions mentioning "slow", so a later
    /// submission can finish first.
    struct KeyedDelayModel;

    impl ChatModel for KeyedDelayModel {
        fn complete(&self, request: &ChatRequest) -> Result<String, GenerationError> {
            let prompt = &request.messages[1].content;
            if prompt.contains("slow") {
                thread::sleep(Duration::from_millis(300));
                Ok("slow reply".to_string())
            } else {
                Ok("fast reply".to_string())
            }
        }
    }

    #[test]
    fn replies_may_arrive_out_of_submission_order() {
        let dir = TempDir::new().unwrap();
        let store = KnowledgeStore::open(&dir.path().join("health.db")).unwrap();
        let orchestrator = Arc::new(ResponseOrchestrator::new(
            store,
            KeyedDelayModel,
            GenerationConfig::default(),
        ));
        let (tx, rx) = mpsc::channel();
        let harness =
            ResponseHarness::new(orchestrator, tx).with_indicator_tick(Duration::from_millis(10));

        harness.submit("my slow knee clicks");
        harness.submit("my knee clicks");

        let mut replies = Vec::new();
        while replies.len() < 2 {
            if let SurfaceEvent::BotMessage(text) =
                rx.recv_timeout(RECV_TIMEOUT).expect("missing reply")
            {
                replies.push(text);
            }
        }
        assert_eq!(replies, vec!["fast reply", "slow reply"]);
    }

    /// A model that panics, standing in for an unexpected internal error.
    struct PanickingModel;

    impl ChatModel for PanickingModel {
        fn complete(&self, _request: &ChatRequest) -> Result<String, GenerationError> {
            panic!("boom");
        }
    }

    #[test]
    fn worker_panic_becomes_generic_error_reply() {
        let dir = TempDir::new().unwrap();
        let store = KnowledgeStore::open(&dir.path().join("health.db")).unwrap();
        let orchestrator = Arc::new(ResponseOrchestrator::new(
            store,
            PanickingModel,
            GenerationConfig::default(),
        ));
        let (tx, rx) = mpsc::channel();
        let harness =
            ResponseHarness::new(orchestrator, tx).with_indicator_tick(Duration::from_millis(10));

        harness.submit("I have a fever");
        let reply = loop {
            match rx.recv_timeout(RECV_TIMEOUT).expect("missing reply") {
                SurfaceEvent::BotMessage(text) => break text,
                _ => continue,
            }
        };
        assert_eq!(reply, prompt::GENERIC_WORKER_ERROR);
    }
}
