//=========================================================================
// stagepaint - Library Root
//
// A frame-stepped scene director (Title → Game → Result across three
// stages, with a carried coin tally) and a freehand paint overlay, run
// by a small winit runtime.
//
// Typical usage:
// ```no_run
// use stagepaint::prelude::*;
//
// EngineBuilder::new()
//     .build()
//     .init(|systems| { /* register the three scenes */ })
//     .run()?;
// ```
//
//=========================================================================

//--- Public Modules ------------------------------------------------------
//
// `core` holds everything that runs on the logic thread: input, scenes,
// the paint tool and the render seam. It is public so applications can
// drive `GlobalSystems` directly (tests, headless runs).
//
pub mod core;
pub mod prelude;

//--- Internal Modules ----------------------------------------------------
//
// `platform` owns the window and winit event loop; `engine` wires it to
// the core thread.
//
mod engine;
mod platform;

//--- Public Exports ------------------------------------------------------

pub use engine::{Engine, EngineBuilder, EngineError};
