//! Top-level engine: session state, verdict ingestion, and host actions.
//!
//! DESIGN
//! ======
//! All session state lives in one place: the selected radius, the history,
//! and a pending-submission flag. Operations return [`Action`] values for the
//! host to process (show a toast, repaint) instead of reaching into the DOM.
//! Submissions are serialized — while one is in flight, [`EngineCore::begin_check`]
//! refuses to start another, so history appends can never arrive out of order.
//!
//! `EngineCore` holds all logic that doesn't depend on the browser and is
//! tested natively. [`Engine`] wraps it for the wasm host: it owns the canvas
//! element, runs the renderer, and round-trips the history through
//! localStorage after every append and every clear.

#[cfg(test)]
#[path = "engine_test.rs"]
mod engine_test;

use serde::{Deserialize, Serialize};
use wasm_bindgen::prelude::wasm_bindgen;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use crate::consts::DEFAULT_RADIUS;
use crate::history::{History, Point};
use crate::input::{self, Submission};
use crate::viewport::Viewport;
use crate::{domain, render, storage};

// =============================================================
// Actions
// =============================================================

/// Toast severity understood by the host notification sink.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ToastLevel {
    Info,
    Success,
    Warning,
    Error,
}

impl ToastLevel {
    /// Auto-dismiss duration the host applies to this severity.
    #[must_use]
    pub fn duration_ms(self) -> u32 {
        match self {
            Self::Info | Self::Success => 3000,
            Self::Warning => 4000,
            Self::Error => 5000,
        }
    }
}

/// Host-visible effects returned from engine operations.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Action {
    /// Show a transient notification.
    Toast { level: ToastLevel, message: String, duration_ms: u32 },
    /// The plot must be repainted.
    RenderNeeded,
}

impl Action {
    fn toast(level: ToastLevel, message: impl Into<String>) -> Self {
        Self::Toast { level, message: message.into(), duration_ms: level.duration_ms() }
    }
}

/// Result of starting a check: the validated submission to send (if any)
/// plus actions for the host.
#[derive(Debug, Serialize)]
pub struct CheckOutcome {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub submit: Option<Submission>,
    pub actions: Vec<Action>,
}

/// Evaluator reply: either a verdict record or an error payload.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum Reply {
    Verdict(Point),
    Error { error: String },
}

// =============================================================
// Core (browser-independent)
// =============================================================

/// Core engine state — all logic that doesn't depend on the canvas element.
///
/// Separated from `Engine` so it can be tested without WASM/browser dependencies.
pub struct EngineCore {
    /// Currently selected radius.
    pub radius: f64,
    /// Append-only log of evaluated points.
    pub history: History,
    /// A submission is in flight; further submissions are refused until the
    /// verdict (or its failure) arrives.
    pending: bool,
}

impl Default for EngineCore {
    fn default() -> Self {
        Self { radius: DEFAULT_RADIUS, history: History::new(), pending: false }
    }
}

impl EngineCore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether a submission is currently in flight.
    #[must_use]
    pub fn pending(&self) -> bool {
        self.pending
    }

    // --- Session state ---

    /// Hydrate the history from a persisted slot. A missing slot is an empty
    /// history; a corrupt slot is logged and ignored.
    pub fn hydrate(&mut self, slot: Option<&str>) -> Vec<Action> {
        let Some(raw) = slot else {
            return Vec::new();
        };
        match History::from_json(raw) {
            Ok(history) => {
                self.history = history;
                vec![Action::RenderNeeded]
            }
            Err(e) => {
                log::warn!("ignoring corrupt persisted history: {e}");
                Vec::new()
            }
        }
    }

    /// Switch the selected radius. Points recorded under other radii stay in
    /// the history but disappear from the plot until their radius is selected
    /// again.
    pub fn set_radius(&mut self, r: f64) -> Vec<Action> {
        if !domain::valid_r(r) {
            return vec![Action::toast(ToastLevel::Error, "R must be one of the allowed radii")];
        }
        self.radius = r;
        vec![Action::RenderNeeded]
    }

    // --- Check lifecycle ---

    /// Validate form input and reserve the submission slot.
    ///
    /// Returns the triple to POST when the input is legal and no other check
    /// is in flight; otherwise only actions (a toast) and no submission.
    pub fn begin_check(&mut self, x_raw: &str, y_raw: &str) -> CheckOutcome {
        if self.pending {
            return CheckOutcome {
                submit: None,
                actions: vec![Action::toast(ToastLevel::Info, "A check is already in flight")],
            };
        }
        match input::validate(x_raw, y_raw, self.radius) {
            Ok(submission) => {
                self.pending = true;
                CheckOutcome { submit: Some(submission), actions: Vec::new() }
            }
            Err(e) => CheckOutcome {
                submit: None,
                actions: vec![Action::toast(ToastLevel::Warning, e.to_string())],
            },
        }
    }

    /// Ingest the evaluator's response body.
    ///
    /// A verdict record appends to the history; an error payload or an
    /// unusable body leaves the history untouched and surfaces a toast.
    pub fn apply_verdict(&mut self, body: &str) -> Vec<Action> {
        self.pending = false;
        match serde_json::from_str::<Reply>(body) {
            Ok(Reply::Verdict(point)) => {
                let (level, outcome) = if point.hit {
                    (ToastLevel::Success, "inside the region")
                } else {
                    (ToastLevel::Warning, "outside the region")
                };
                let message = format!("Point ({}, {}) is {outcome}", point.x, point.y);
                self.history.append(point);
                vec![Action::toast(level, message), Action::RenderNeeded]
            }
            Ok(Reply::Error { error }) => {
                vec![Action::toast(ToastLevel::Error, format!("Check rejected: {error}"))]
            }
            Err(e) => {
                log::warn!("unusable evaluator response: {e}");
                vec![Action::toast(ToastLevel::Error, "The evaluator returned an unusable response")]
            }
        }
    }

    /// The submission never produced a response (network failure, non-2xx
    /// status). No history mutation; the failure is surfaced, not dropped.
    pub fn submission_failed(&mut self, cause: &str) -> Vec<Action> {
        self.pending = false;
        vec![Action::toast(ToastLevel::Error, format!("Could not reach the evaluator: {cause}"))]
    }

    /// Empty the history. The only mutation besides append.
    pub fn clear_history(&mut self) -> Vec<Action> {
        self.history.clear();
        vec![Action::toast(ToastLevel::Warning, "History cleared"), Action::RenderNeeded]
    }
}

// =============================================================
// Wasm wrapper
// =============================================================

fn init_browser_logging() {
    use std::sync::Once;
    static INIT: Once = Once::new();
    INIT.call_once(|| {
        console_error_panic_hook::set_once();
        if console_log::init_with_level(log::Level::Info).is_err() {
            log::debug!("browser logger was already initialized");
        }
    });
}

fn actions_json(actions: &[Action]) -> String {
    serde_json::to_string(actions).unwrap_or_else(|_| "[]".to_owned())
}

/// The full plot engine. Wraps [`EngineCore`] and owns the browser canvas.
///
/// Every method returns the resulting actions serialized as JSON for the
/// host; repaints implied by `RenderNeeded` are performed before returning.
#[wasm_bindgen]
pub struct Engine {
    canvas: HtmlCanvasElement,
    core: EngineCore,
}

#[wasm_bindgen]
impl Engine {
    /// Create a new engine bound to the given canvas element.
    #[wasm_bindgen(constructor)]
    #[must_use]
    pub fn new(canvas: HtmlCanvasElement) -> Engine {
        init_browser_logging();
        Engine { canvas, core: EngineCore::new() }
    }

    /// Load the persisted history and paint the first frame.
    pub fn bootstrap(&mut self) -> String {
        let slot = match storage::load() {
            Ok(slot) => slot,
            Err(e) => {
                log::warn!("history load failed: {e}");
                None
            }
        };
        let actions = self.core.hydrate(slot.as_deref());
        self.render();
        actions_json(&actions)
    }

    /// Switch the selected radius and repaint.
    pub fn set_radius(&mut self, r: f64) -> String {
        let actions = self.core.set_radius(r);
        self.finish(actions)
    }

    /// Validate form input and reserve the submission slot. Returns a
    /// [`CheckOutcome`] as JSON: `submit` (the triple to POST, when legal)
    /// and `actions`.
    pub fn begin_check(&mut self, x_raw: &str, y_raw: &str) -> String {
        let outcome = self.core.begin_check(x_raw, y_raw);
        serde_json::to_string(&outcome).unwrap_or_else(|_| r#"{"actions":[]}"#.to_owned())
    }

    /// Ingest the evaluator's response body; persists and repaints on append.
    pub fn apply_verdict(&mut self, body: &str) -> String {
        let before = self.core.history.len();
        let actions = self.core.apply_verdict(body);
        if self.core.history.len() != before {
            self.persist();
        }
        self.finish(actions)
    }

    /// Report a transport-level submission failure.
    pub fn submission_failed(&mut self, cause: &str) -> String {
        let actions = self.core.submission_failed(cause);
        self.finish(actions)
    }

    /// Empty the history, drop the persisted slot, and repaint.
    pub fn clear_history(&mut self) -> String {
        let actions = self.core.clear_history();
        if let Err(e) = storage::remove() {
            log::warn!("history slot removal failed: {e}");
        }
        self.finish(actions)
    }

    /// Repaint the plot surface from current state. Idempotent.
    pub fn render(&self) {
        if let Err(e) = self.draw() {
            log::error!("render failed: {e:?}");
        }
    }

    // --- Queries ---

    /// The currently selected radius.
    #[must_use]
    pub fn radius(&self) -> f64 {
        self.core.radius
    }

    /// The full history in insertion order, as JSON, for the results table.
    #[must_use]
    pub fn history_json(&self) -> String {
        self.core.history.to_json().unwrap_or_else(|_| "[]".to_owned())
    }

    // --- Internals ---

    fn finish(&mut self, actions: Vec<Action>) -> String {
        if actions.iter().any(|a| matches!(a, Action::RenderNeeded)) {
            self.render();
        }
        actions_json(&actions)
    }

    fn persist(&self) {
        let raw = match self.core.history.to_json() {
            Ok(raw) => raw,
            Err(e) => {
                log::warn!("history serialization failed: {e}");
                return;
            }
        };
        if let Err(e) = storage::save(&raw) {
            log::warn!("history persistence failed: {e}");
        }
    }

    fn draw(&self) -> Result<(), JsValue> {
        let ctx = self
            .canvas
            .get_context("2d")?
            .ok_or_else(|| JsValue::from_str("2d context unavailable"))?
            .dyn_into::<CanvasRenderingContext2d>()
            .map_err(|_| JsValue::from_str("2d context has unexpected type"))?;
        let vp = Viewport::new(f64::from(self.canvas.width()), f64::from(self.canvas.height()));
        render::draw(&ctx, &vp, self.core.radius, &self.core.history)
    }
}
