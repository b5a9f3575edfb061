//=========================================================================
// Core Systems Orchestrator
//
// Central coordinator for everything that runs on the logic
// (non-platform) thread.
//
// Responsibilities:
// - Own the scene director, the paint tool and their shared context
// - Receive platform input via the bounded channel
// - Tick at a fixed rate (TPS): update, then draw into the frame's DrawList
// - Hand each finished DrawList to the frame sink
//
// Notes:
// The orchestrator never touches the window. Communication with the
// platform happens only through `PlatformEvent` messages.
//
//=========================================================================

//=== Standard Library Imports ============================================

use std::thread;
use std::time::{Duration, Instant};

//=== External Crates =====================================================

use crossbeam_channel::Receiver;
use log::{info, trace};

//=== Public Modules ======================================================

pub mod globals;
pub mod input;
pub mod paint;
pub mod render;
pub mod scene;

//=== Internal Modules ====================================================

pub(crate) mod platform_bridge;

//=== Re-exports ==========================================================

pub use platform_bridge::PlatformError;

use globals::{GlobalContext, GlobalSystems};
use platform_bridge::{EventCollector, PlatformEvent, TickControl};
use render::{DrawList, FrameSink};
use scene::SceneError;

//=== CoreSystemsOrchestrator =============================================

/// Owns the logic-thread state and runs the fixed-rate tick loop.
pub(crate) struct CoreSystemsOrchestrator {
    systems: GlobalSystems,
    context: GlobalContext,
    draw_list: DrawList,
    frame_sink: FrameSink,
}

impl CoreSystemsOrchestrator {
    //--- Construction -----------------------------------------------------

    pub(crate) fn new(systems: GlobalSystems, frame_sink: FrameSink) -> Self {
        Self {
            systems,
            context: GlobalContext::new(),
            draw_list: DrawList::with_capacity(1024),
            frame_sink,
        }
    }

    /// Gives the application mutable access to the systems before start.
    pub(crate) fn init_systems<F>(&mut self, init_fn: F)
    where
        F: FnOnce(&mut GlobalSystems),
    {
        init_fn(&mut self.systems);
    }

    /// Validates scenes and runs the initial `init` calls.
    pub(crate) fn start(&mut self) -> Result<(), SceneError> {
        self.systems.start(&mut self.context)
    }

    //--- tick() -----------------------------------------------------------
    //
    // One logic step: update all systems, redraw the frame, emit it.
    //
    pub(crate) fn tick(&mut self) {
        self.systems.update(&mut self.context);

        self.draw_list.clear();
        self.systems.draw(&mut self.context, &mut self.draw_list);
        trace!("Frame drawn with {} segments", self.draw_list.len());

        (self.frame_sink)(&self.draw_list);
    }

    //--- spawn_core_thread() ---------------------------------------------
    //
    // Spawns the logic thread. Each tick:
    //  1. Collects platform input (exits on WindowClosed / disconnect)
    //  2. Runs tick()
    //  3. Sleeps to maintain fixed pacing
    //
    pub(crate) fn spawn_core_thread(
        mut self,
        receiver: Receiver<PlatformEvent>,
        tps: f64,
    ) -> thread::JoinHandle<()> {
        let frame_duration = Duration::from_secs_f64(1.0 / tps);

        thread::spawn(move || {
            let mut collector = EventCollector::new(receiver);

            loop {
                let frame_start = Instant::now();

                //--- Step 1: Gather platform events ------------------------
                if collector.collect_frame(&mut self.context) == TickControl::Exit {
                    info!("Core thread exiting");
                    break;
                }

                //--- Step 2: Update and draw -------------------------------
                self.tick();

                //--- Step 3: Maintain deterministic pacing ----------------
                let elapsed = frame_start.elapsed();
                if elapsed < frame_duration {
                    thread::sleep(frame_duration - elapsed);
                }
            }

            self.systems.shutdown(&mut self.context);
        })
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::input::{InputEvent, Modifiers, MouseButton};
    use crate::core::paint::PaintConfig;
    use crate::core::scene::{Scene, SceneKind, Stage};
    use crossbeam_channel::unbounded;
    use std::sync::{Arc, Mutex};

    struct Idle;

    impl Scene for Idle {
        fn update(&mut self, _ctx: &mut GlobalContext) {}
    }

    fn orchestrator(frames: Arc<Mutex<Vec<usize>>>) -> CoreSystemsOrchestrator {
        let systems = GlobalSystems::new(SceneKind::Title, Stage::FIRST, PaintConfig::default());
        let sink: FrameSink = Box::new(move |list: &DrawList| {
            frames.lock().unwrap().push(list.len());
        });

        let mut orchestrator = CoreSystemsOrchestrator::new(systems, sink);
        orchestrator.init_systems(|systems| {
            for kind in SceneKind::ALL {
                systems.director.register(kind, Idle);
            }
        });
        orchestrator
    }

    #[test]
    fn start_fails_without_scenes() {
        let systems = GlobalSystems::new(SceneKind::Title, Stage::FIRST, PaintConfig::default());
        let mut orchestrator = CoreSystemsOrchestrator::new(systems, Box::new(|_: &DrawList| {}));

        assert!(orchestrator.start().is_err());
    }

    #[test]
    fn tick_emits_one_frame_per_call() {
        let frames = Arc::new(Mutex::new(Vec::new()));
        let mut orchestrator = orchestrator(Arc::clone(&frames));
        orchestrator.start().unwrap();

        orchestrator.context.push_input(vec![InputEvent::MouseButtonDown {
            button: MouseButton::Left,
            modifiers: Modifiers::NONE,
        }]);
        orchestrator.tick();
        orchestrator.tick();

        // One dot, then dot + zero-length repeat at the same position
        assert_eq!(*frames.lock().unwrap(), vec![1, 2]);
    }

    #[test]
    fn core_thread_stops_on_window_closed() {
        let frames = Arc::new(Mutex::new(Vec::new()));
        let mut orchestrator = orchestrator(Arc::clone(&frames));
        orchestrator.start().unwrap();

        let (tx, rx) = unbounded();
        tx.send(PlatformEvent::WindowClosed).unwrap();

        let handle = orchestrator.spawn_core_thread(rx, 240.0);
        assert!(handle.join().is_ok());
        assert!(frames.lock().unwrap().is_empty());
    }
}
