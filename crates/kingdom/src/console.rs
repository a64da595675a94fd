//! Colorful console output for household events.
//!
//! Provides a custom `tracing` layer that renders kingdom events with
//! colors. Enabled with the `console` feature.

use owo_colors::OwoColorize;
use std::io::{self, Write};
use std::sync::OnceLock;
use tracing::field::{Field, Visit};
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::layer::Context;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer};

static INIT: OnceLock<()> = OnceLock::new();

/// Initializes console output.
///
/// Safe to call multiple times - only the first call has effect. The
/// filter comes from `RUST_LOG` and always admits `kingdom=info`.
pub fn init() {
    INIT.get_or_init(|| {
        let mut filter = EnvFilter::from_default_env();
        if let Ok(directive) = "kingdom=info".parse() {
            filter = filter.add_directive(directive);
        }

        // Another subscriber may already be installed by the host.
        let _ = tracing_subscriber::registry()
            .with(filter)
            .with(KingdomConsoleLayer)
            .try_init();
    });
}

/// A tracing layer that formats kingdom events with colors.
pub struct KingdomConsoleLayer;

impl<S: Subscriber> Layer<S> for KingdomConsoleLayer {
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        let metadata = event.metadata();
        if !metadata.target().starts_with("kingdom") {
            return;
        }

        let mut visitor = EventVisitor::default();
        event.record(&mut visitor);

        let output = format_event(*metadata.level(), &visitor);
        if !output.is_empty() {
            let _ = writeln!(io::stdout(), "{}", output);
        }
    }
}

#[derive(Default)]
struct EventVisitor {
    event: Option<String>,
    message: Option<String>,
    profile: Option<String>,
    owner: Option<String>,
    title: Option<String>,
    assignee: Option<String>,
    chore: Option<String>,
    collection: Option<String>,
    op: Option<String>,
    error: Option<String>,
    total: Option<String>,
    vibe: Option<String>,
    deeds: Option<u64>,
    items: Option<u64>,
}

impl EventVisitor {
    fn set_str(&mut self, name: &str, value: String) {
        match name {
            "event" => self.event = Some(value),
            "message" => self.message = Some(value),
            "profile" => self.profile = Some(value),
            "owner" => self.owner = Some(value),
            "title" => self.title = Some(value),
            "assignee" => self.assignee = Some(value),
            "chore" => self.chore = Some(value),
            "collection" => self.collection = Some(value),
            "op" => self.op = Some(value),
            "error" => self.error = Some(value),
            "total" => self.total = Some(value),
            "vibe" => self.vibe = Some(value),
            _ => {}
        }
    }
}

impl Visit for EventVisitor {
    fn record_debug(&mut self, field: &Field, value: &dyn std::fmt::Debug) {
        let s = format!("{:?}", value);
        self.set_str(field.name(), s.trim_matches('"').to_string());
    }

    fn record_u64(&mut self, field: &Field, value: u64) {
        match field.name() {
            "deeds" => self.deeds = Some(value),
            "items" => self.items = Some(value),
            _ => {}
        }
    }

    fn record_i64(&mut self, field: &Field, value: i64) {
        self.record_u64(field, value.max(0) as u64);
    }

    fn record_str(&mut self, field: &Field, value: &str) {
        self.set_str(field.name(), value.to_string());
    }
}

fn format_event(level: Level, v: &EventVisitor) -> String {
    let unknown = "?";
    let body = match v.event.as_deref().unwrap_or("") {
        "session_open" => format!(
            "{} joined the kingdom",
            v.profile.as_deref().unwrap_or(unknown).bright_white().bold()
        ),
        "coupon_unlocked" => format!(
            "{} unlocked {} for {} deeds",
            v.owner.as_deref().unwrap_or(unknown).bright_white().bold(),
            v.title.as_deref().unwrap_or(unknown).bright_magenta(),
            v.deeds.unwrap_or(0).to_string().yellow()
        ),
        "date_night_logged" => format!(
            "{} date night logged, {} deeds spent",
            v.vibe.as_deref().unwrap_or(unknown).bright_magenta(),
            v.deeds.unwrap_or(0).to_string().yellow()
        ),
        "chore_assigned" => format!(
            "chore {} goes to {}",
            v.chore.as_deref().unwrap_or(unknown).white(),
            v.assignee.as_deref().unwrap_or(unknown).bright_white().bold()
        ),
        "vote_conflict" => format!(
            "conflict on chore {}, discuss it",
            v.chore.as_deref().unwrap_or(unknown).white()
        ),
        "shopping_finished" => format!(
            "shopping trip of {} with {} items",
            format!("${}", v.total.as_deref().unwrap_or("0")).bright_green(),
            v.items.unwrap_or(0).to_string().yellow()
        ),
        "write_failed" => format!(
            "{} on {} failed: {}",
            v.op.as_deref().unwrap_or(unknown),
            v.collection.as_deref().unwrap_or(unknown).white(),
            v.error.as_deref().unwrap_or(unknown).bright_red()
        ),
        "decode_failed" => format!(
            "skipped a {} document: {}",
            v.collection.as_deref().unwrap_or(unknown).white(),
            v.error.as_deref().unwrap_or(unknown).yellow()
        ),
        _ => match &v.message {
            Some(message) if level <= Level::INFO => message.clone(),
            _ => return String::new(),
        },
    };

    format!(
        "{} {} {} {}",
        timestamp().bright_black(),
        format_level(level),
        "[Kingdom]".bright_cyan(),
        body
    )
}

fn format_level(level: Level) -> String {
    match level {
        Level::ERROR => "ERROR".bright_red().to_string(),
        Level::WARN => " WARN".yellow().to_string(),
        Level::INFO => " INFO".bright_green().to_string(),
        Level::DEBUG => "DEBUG".bright_blue().to_string(),
        Level::TRACE => "TRACE".bright_black().to_string(),
    }
}

fn timestamp() -> String {
    std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| {
            let secs = d.as_secs() % 100000;
            let millis = d.subsec_millis();
            format!("{:5}.{:03}", secs, millis)
        })
        .unwrap_or_else(|_| "    0.000".to_string())
}
