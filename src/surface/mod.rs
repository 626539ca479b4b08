pub mod harness;

pub use harness::ResponseHarness;

/// Events marshaled onto the surface's single render loop.
///
/// Background units never touch the renderer directly: every surface
/// mutation travels through the channel as one of these.
#[derive(Debug, Clone, PartialEq)]
pub enum SurfaceEvent {
    /// A line of user text accepted by the input reader.
    Input(String),
    /// Render the user's message.
    UserMessage(String),
    /// Render the bot's reply.
    BotMessage(String),
    /// Render one frame of the typing indicator for a submission.
    IndicatorFrame { submission: u64, frame: &'static str },
    /// The submission's indicator is done; clear it.
    IndicatorCleared { submission: u64 },
    /// The input stream ended; the render loop should exit.
    InputClosed,
}
