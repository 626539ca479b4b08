use crate::llm::GenerationError;

/// Fixed persona sent as the system message on every generation call.
pub const SYSTEM_PERSONA: &str = "You are Susi, a virtual health assistant. \
Use local information about hospitals, doctors and symptoms to enrich your answers. \
Be empathetic, direct and professional. \
Never diagnose; recommend seeing a doctor when the situation calls for it.";

/// Reply for a blank submission. Returned without calling the service.
pub const EMPTY_INPUT_PROMPT: &str = "Please describe your symptoms or health questions.";

/// Reply for an emergency short-circuit. Returned without calling the service.
pub const EMERGENCY_MESSAGE: &str =
    "🚨 This may be an emergency. Seek medical care IMMEDIATELY.";

/// First bot message of a session.
pub const GREETING: &str = "Hi! I'm Susi. Describe your symptoms or health questions \
and I can suggest local specialists and hospitals.";

/// Bot message after the transcript is cleared.
pub const CLEARED_GREETING: &str =
    "Chat cleared. Describe your symptoms or health questions.";

/// Reply when the background unit fails in an unexpected way.
pub const GENERIC_WORKER_ERROR: &str =
    "Something went wrong while preparing your reply. Please try again.";

/// Prompt for a submission with matched symptoms: the verbatim user text,
/// the no-diagnosis instruction, and the composed local context.
pub fn build_context_prompt(user_text: &str, context: &str) -> String {
    format!(
        "The user reported: '{user_text}'. Using the local information below, \
         offer empathetic guidance without diagnosing.\n\n{context}"
    )
}

/// Minimal prompt when no known symptom was found.
pub fn build_generic_prompt(user_text: &str) -> String {
    format!(
        "The user said: '{user_text}'. Give a brief, empathetic reply about \
         their health concern, without diagnosing."
    )
}

/// Inline reply shown when the generation service fails. The session
/// continues; the failure is never propagated past the orchestrator.
pub fn service_failure_reply(error: &GenerationError) -> String {
    format!("I could not reach the assistance service right now ({error}). Please try again in a moment.")
}
