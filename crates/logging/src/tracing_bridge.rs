//! crates/logging/src/tracing_bridge.rs
//! Bridge between the tracing crate and the raybug registry.
//!
//! This module lets code written against the standard tracing macros
//! (`error!`, `warn!`, `debug!`, ...) land in the same two log files as
//! direct [`bug`](crate::LogRegistry::bug) calls. Events whose target names
//! a `track` segment route to the tracking logger; everything else routes by
//! level.
//!
//! # Usage
//!
//! ```rust,ignore
//! use std::sync::{Arc, Mutex};
//! use raybug_logging::{init_tracing, LogConfig, LogRegistry};
//!
//! let registry = Arc::new(Mutex::new(LogRegistry::new(LogConfig::default())?));
//! init_tracing(Arc::clone(&registry));
//!
//! tracing::warn!("couch model not calibrated");
//! tracing::info!(target: "raybug::track", "user approved plan");
//! ```

use std::sync::{Arc, Mutex};

use tracing::{Level, Subscriber};
use tracing_subscriber::layer::{Context, Layer, SubscriberExt as _};
use tracing_subscriber::registry::LookupSpan;
use tracing_subscriber::util::SubscriberInitExt as _;

use crate::registry::LogRegistry;

/// A registry handle shared with the tracing layer.
///
/// The mutex serializes emits from concurrent tracing callers; this is the
/// exclusive-lock option for making dispatch safe outside the single-caller
/// scripting model.
pub type SharedRegistry = Arc<Mutex<LogRegistry>>;

/// A tracing layer that forwards events into a [`LogRegistry`].
pub struct RayBugLayer {
    registry: SharedRegistry,
}

impl RayBugLayer {
    /// Creates a layer forwarding into the given registry handle.
    #[must_use]
    pub fn new(registry: SharedRegistry) -> Self {
        Self { registry }
    }

    /// Reports whether a target names the tracking route.
    fn target_is_track(target: &str) -> bool {
        target == "track" || target.ends_with("::track") || target.contains("::track::")
    }

    /// Maps a tracing level to the dispatch-level string `bug` understands.
    const fn level_to_dispatch(level: &Level) -> &'static str {
        match *level {
            Level::ERROR => "error",
            Level::WARN => "warning",
            _ => "debug",
        }
    }
}

impl<S> Layer<S> for RayBugLayer
where
    S: Subscriber + for<'a> LookupSpan<'a>,
{
    fn on_event(&self, event: &tracing::Event<'_>, _ctx: Context<'_, S>) {
        let metadata = event.metadata();

        let mut visitor = MessageVisitor::default();
        event.record(&mut visitor);
        let Some(message) = visitor.message else {
            return;
        };

        let level = if Self::target_is_track(metadata.target()) {
            "track"
        } else {
            Self::level_to_dispatch(metadata.level())
        };

        if let Ok(mut registry) = self.registry.lock() {
            // Sink failures have nowhere useful to go from inside a layer.
            let _ = registry.bug(&message, level, false);
        }
    }
}

/// Visitor extracting the `message` field from a tracing event.
#[derive(Default)]
struct MessageVisitor {
    message: Option<String>,
}

impl tracing::field::Visit for MessageVisitor {
    fn record_debug(&mut self, field: &tracing::field::Field, value: &dyn std::fmt::Debug) {
        if field.name() == "message" {
            self.message = Some(format!("{value:?}"));
        }
    }

    fn record_str(&mut self, field: &tracing::field::Field, value: &str) {
        if field.name() == "message" {
            self.message = Some(value.to_owned());
        }
    }
}

/// Installs a global tracing subscriber forwarding into `registry`.
///
/// Intended to be called once, early in `main`. Panics if a global
/// subscriber is already set, matching `tracing_subscriber`'s `init`
/// contract.
pub fn init_tracing(registry: SharedRegistry) {
    tracing_subscriber::registry()
        .with(RayBugLayer::new(registry))
        .init();
}
