use std::io::{self, BufRead, Write};
use std::sync::mpsc;
use std::sync::Arc;
use std::thread;

use tracing_subscriber::EnvFilter;

use susi::config::{self, GenerationConfig};
use susi::db::KnowledgeStore;
use susi::llm::OpenAiClient;
use susi::pipeline::{prompt, ResponseOrchestrator};
use susi::surface::{ResponseHarness, SurfaceEvent};

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config::default_log_filter())),
        )
        .init();

    tracing::info!("{} starting v{}", config::APP_NAME, config::APP_VERSION);

    let generation = GenerationConfig::from_env();
    if generation.api_key.is_empty() {
        tracing::warn!("OPENAI_API_KEY is not set; generation calls will fail");
    }

    let data_dir = config::app_data_dir();
    if let Err(e) = std::fs::create_dir_all(&data_dir) {
        eprintln!("Cannot create data directory {}: {e}", data_dir.display());
        std::process::exit(1);
    }

    let store = match KnowledgeStore::open(&config::db_path()) {
        Ok(store) => store,
        Err(e) => {
            eprintln!("Cannot open care directory: {e}");
            std::process::exit(1);
        }
    };

    let client = OpenAiClient::new(&generation);
    let orchestrator = Arc::new(ResponseOrchestrator::new(store, client, generation));

    let (events_tx, events_rx) = mpsc::channel();
    let harness = ResponseHarness::new(orchestrator, events_tx.clone());

    spawn_input_reader(events_tx);

    render_bot_message(prompt::GREETING);
    println!("(type /clear to reset, /quit to leave)");

    // The single render loop: every surface mutation happens here.
    for event in events_rx {
        match event {
            SurfaceEvent::Input(line) => {
                let text = line.trim();
                if text.is_empty() {
                    continue;
                }
                match text {
                    "/quit" | "/exit" => break,
                    "/clear" => {
                        println!("\n----------------------------------------\n");
                        render_bot_message(prompt::CLEARED_GREETING);
                    }
                    _ => {
                        harness.submit(text);
                    }
                }
            }
            SurfaceEvent::UserMessage(text) => render_message("you", &text),
            SurfaceEvent::BotMessage(text) => render_bot_message(&text),
            SurfaceEvent::IndicatorFrame { frame, .. } => {
                print!("\r{frame}");
                let _ = io::stdout().flush();
            }
            SurfaceEvent::IndicatorCleared { .. } => {
                print!("\r   \r");
                let _ = io::stdout().flush();
            }
            SurfaceEvent::InputClosed => break,
        }
    }

    tracing::info!("{} shutting down", config::APP_NAME);
}

/// Forward stdin lines to the render loop as input events.
fn spawn_input_reader(events: mpsc::Sender<SurfaceEvent>) {
    thread::spawn(move || {
        let stdin = io::stdin();
        for line in stdin.lock().lines() {
            match line {
                Ok(line) => {
                    if events.send(SurfaceEvent::Input(line)).is_err() {
                        return;
                    }
                }
                Err(e) => {
                    tracing::warn!(error = %e, "Input read failed");
                    break;
                }
            }
        }
        let _ = events.send(SurfaceEvent::InputClosed);
    });
}

fn render_message(who: &str, text: &str) {
    let timestamp = chrono::Local::now().format("%H:%M");
    println!("[{timestamp}] {who}: {text}");
}

fn render_bot_message(text: &str) {
    render_message("susi", text);
}
