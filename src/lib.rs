//! Interactive 2D layout editor for depth cameras and the regions they watch.
//!
//! This crate is compiled to WebAssembly and runs in the browser. It owns the
//! interaction model of the canvas: mapping pointer events between canvas
//! pixels and world units, hit-testing objects with zoom-independent
//! tolerance, driving each object's move/resize/rotate state machine, keeping
//! the side panel in step with the selection, and drawing the scene once per
//! frame. The host JavaScript layer only wires DOM events to the engine and
//! implements the [`panel::Panel`] form.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`engine`] | Top-level engine and testable [`engine::EngineCore`] |
//! | [`mapper`] | Pan/zoom state and world <-> canvas conversions |
//! | [`hit`] | Pixel-tolerance hit-testing |
//! | [`rectangle`] | Rectangular regions and their resize handles |
//! | [`camera`] | Depth cameras, models, and field-of-view wedges |
//! | [`input`] | Buttons, wheel deltas, cursors, selection, gesture state |
//! | [`panel`] | Side-panel contract |
//! | [`grid`] | Background grid line placement |
//! | [`render`] | Scene rendering |
//! | [`frame_loop`] | `requestAnimationFrame` render driver |
//! | [`config`] | Tunable design constants |
//! | [`error`] | Edit and config errors |
//! | [`consts`] | Shared numeric constants (zoom limits, tolerances, sizes) |

pub mod camera;
pub mod config;
pub mod consts;
pub mod engine;
pub mod error;
pub mod frame_loop;
pub mod grid;
pub mod hit;
pub mod input;
pub mod mapper;
pub mod panel;
pub mod rectangle;
pub mod render;
