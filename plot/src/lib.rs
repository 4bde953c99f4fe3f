//! Plot engine for the point-in-region checker.
//!
//! This crate is compiled to WebAssembly and runs in the browser. It owns the
//! full client-side lifecycle of a check: validating form input, tracking the
//! selected radius, ingesting verdicts from the evaluator server, keeping the
//! append-only history (persisted to localStorage), and repainting the plot.
//! The host JavaScript layer is responsible only for wiring DOM events to the
//! engine and carrying the one HTTP request to the server.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`engine`] | Top-level engine and testable [`engine::EngineCore`] |
//! | [`region`] | Region membership predicates |
//! | [`domain`] | Allowed input domain (x range, y set, r set) |
//! | [`input`] | Form input parsing and pre-flight validation |
//! | [`history`] | Evaluated points and the append-only history |
//! | [`storage`] | localStorage slot for the persisted history |
//! | [`viewport`] | Logical-to-pixel coordinate transform |
//! | [`render`] | Plot rendering (axes, ticks, shapes, markers) |
//! | [`consts`] | Shared numeric constants (scale, colors, durations) |

pub mod consts;
pub mod domain;
pub mod engine;
pub mod history;
pub mod input;
pub mod region;
pub mod render;
pub mod storage;
pub mod viewport;
