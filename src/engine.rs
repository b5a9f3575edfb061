//=========================================================================
// Engine
//
// Entry point that wires the core thread to the platform window.
//
// Architecture:
// ```text
//     EngineBuilder  ──build()──>  Engine  ──init()──>  ──run()──>  [Runtime]
//         │                          │
//         ├─ with_tps()              └─ validates scenes
//         ├─ with_channel_capacity()    spawns the core thread
//         ├─ with_window_*()            runs the platform loop
//         ├─ with_initial_*()           joins on exit
//         ├─ with_paint_config()
//         └─ with_frame_sink()
// ```
//
//=========================================================================

//=== External Dependencies ===============================================

use crossbeam_channel::bounded;
use log::{error, info, trace};
use thiserror::Error;

//=== Internal Dependencies ===============================================

use crate::core::globals::GlobalSystems;
use crate::core::paint::PaintConfig;
use crate::core::platform_bridge::PlatformError;
use crate::core::render::{DrawList, FrameSink};
use crate::core::scene::{SceneError, SceneKind, Stage};
use crate::core::CoreSystemsOrchestrator;
use crate::platform::{Platform, WindowConfig};

//=== EngineError =========================================================

/// Fatal errors surfaced by [`Engine::run`].
#[derive(Debug, Error)]
pub enum EngineError {
    /// Scene setup was incomplete when the engine started.
    #[error(transparent)]
    Scene(#[from] SceneError),

    /// The window or event loop could not be run.
    #[error(transparent)]
    Platform(#[from] PlatformError),
}

//=== EngineBuilder =======================================================

/// Fluent configuration for an [`Engine`].
///
/// # Default Values
///
/// - **TPS**: 60.0
/// - **Channel capacity**: 128 platform messages
/// - **Window**: "stagepaint", 800x600
/// - **Initial scene / stage**: Title, Stage 1
/// - **Frame sink**: logs the segment count at trace level
///
/// # Examples
///
/// ```no_run
/// use stagepaint::prelude::*;
///
/// struct Blank;
/// impl Scene for Blank {
///     fn update(&mut self, _ctx: &mut GlobalContext) {}
/// }
///
/// EngineBuilder::new()
///     .with_tps(30.0)
///     .with_window_title("demo")
///     .build()
///     .init(|systems| {
///         for kind in SceneKind::ALL {
///             systems.director.register(kind, Blank);
///         }
///     })
///     .run()
///     .expect("engine failed");
/// ```
pub struct EngineBuilder {
    tps: f64,
    channel_capacity: usize,
    window: WindowConfig,
    initial_scene: SceneKind,
    initial_stage: Stage,
    paint_config: PaintConfig,
    frame_sink: FrameSink,
}

impl EngineBuilder {
    pub fn new() -> Self {
        Self {
            tps: 60.0,
            channel_capacity: 128,
            window: WindowConfig {
                title: "stagepaint".to_string(),
                width: 800,
                height: 600,
            },
            initial_scene: SceneKind::Title,
            initial_stage: Stage::FIRST,
            paint_config: PaintConfig::default(),
            frame_sink: Box::new(|frame: &DrawList| {
                trace!("Frame ready: {} segments", frame.len());
            }),
        }
    }

    /// Sets the logic tick rate.
    ///
    /// # Panics
    ///
    /// Panics if `tps <= 0.0`.
    pub fn with_tps(mut self, tps: f64) -> Self {
        assert!(tps > 0.0, "TPS must be positive, got {}", tps);
        self.tps = tps;
        self
    }

    /// Sets how many platform messages may queue before the window blocks.
    ///
    /// # Panics
    ///
    /// Panics if `capacity == 0`.
    pub fn with_channel_capacity(mut self, capacity: usize) -> Self {
        assert!(capacity > 0, "Channel capacity must be positive");
        self.channel_capacity = capacity;
        self
    }

    pub fn with_window_title(mut self, title: impl Into<String>) -> Self {
        self.window.title = title.into();
        self
    }

    /// Sets the logical window size.
    ///
    /// # Panics
    ///
    /// Panics if either dimension is zero.
    pub fn with_window_size(mut self, width: u32, height: u32) -> Self {
        assert!(width > 0 && height > 0, "Window size must be non-zero, got {}x{}", width, height);
        self.window.width = width;
        self.window.height = height;
        self
    }

    /// Scene entered on start; Title unless overridden.
    pub fn with_initial_scene(mut self, scene: SceneKind) -> Self {
        self.initial_scene = scene;
        self
    }

    pub fn with_initial_stage(mut self, stage: Stage) -> Self {
        self.initial_stage = stage;
        self
    }

    pub fn with_paint_config(mut self, config: PaintConfig) -> Self {
        self.paint_config = config;
        self
    }

    /// Replaces the callback that receives each finished frame.
    ///
    /// Runs on the core thread once per tick.
    pub fn with_frame_sink<F>(mut self, sink: F) -> Self
    where
        F: FnMut(&DrawList) + Send + 'static,
    {
        self.frame_sink = Box::new(sink);
        self
    }

    pub fn build(self) -> Engine {
        info!(
            "Building engine (TPS: {}, channel: {}, start: {} {})",
            self.tps, self.channel_capacity, self.initial_scene, self.initial_stage
        );

        let systems = GlobalSystems::new(self.initial_scene, self.initial_stage, self.paint_config);

        Engine {
            orchestrator: CoreSystemsOrchestrator::new(systems, self.frame_sink),
            tps: self.tps,
            channel_capacity: self.channel_capacity,
            window: self.window,
        }
    }
}

impl Default for EngineBuilder {
    fn default() -> Self {
        Self::new()
    }
}

//=== Engine ==============================================================

/// Runtime that owns the core thread and the window.
///
/// ```text
/// Engine (main thread)
///   ├─► CoreSystemsOrchestrator (core thread @ TPS)
///   │     └─► SceneDirector, PaintTool → DrawList → frame sink
///   │
///   └─► Platform (winit event loop)
///         └─► Window, input batching
/// ```
pub struct Engine {
    orchestrator: CoreSystemsOrchestrator,
    tps: f64,
    channel_capacity: usize,
    window: WindowConfig,
}

impl Engine {
    //--- Initialization ---------------------------------------------------

    /// Registers scenes (and anything else) before the engine starts.
    pub fn init<F>(mut self, init_fn: F) -> Self
    where
        F: FnOnce(&mut GlobalSystems),
    {
        info!("Initializing engine systems");
        self.orchestrator.init_systems(init_fn);
        self
    }

    //--- Execution --------------------------------------------------------

    /// Runs until the window closes.
    ///
    /// # Lifecycle
    ///
    /// 1. Validates scene registration and inits the initial scene
    /// 2. Creates the bounded platform → core channel
    /// 3. Spawns the core thread at the configured TPS
    /// 4. Runs the platform event loop (blocks)
    /// 5. Joins the core thread
    ///
    /// # Errors
    ///
    /// [`EngineError::Scene`] if a scene kind was never registered; nothing
    /// is spawned in that case. [`EngineError::Platform`] if the event loop
    /// fails, after the core thread has been joined.
    pub fn run(mut self) -> Result<(), EngineError> {
        info!("Starting engine runtime (TPS: {})", self.tps);

        //--- 1. Validate and start systems -------------------------------
        self.orchestrator.start()?;

        //--- 2. Create communication channel -----------------------------
        let (tx, rx) = bounded(self.channel_capacity);

        //--- 3. Spawn the core thread -------------------------------------
        let core_handle = self.orchestrator.spawn_core_thread(rx, self.tps);
        info!("Core thread spawned");

        //--- 4. Run the platform ------------------------------------------
        let platform_result = Platform::new(tx, self.window).run();
        if let Err(e) = &platform_result {
            error!("Platform error: {}", e);
        }
        info!("Platform event loop exited");

        //--- 5. Join the core thread --------------------------------------
        // The sender was moved into the platform and is dropped by now, so
        // the core thread sees a disconnect even without WindowClosed.
        match core_handle.join() {
            Ok(()) => info!("Core thread terminated cleanly"),
            Err(e) => error!("Core thread panicked: {:?}", e),
        }

        info!("Engine shutdown complete");
        platform_result.map_err(EngineError::from)
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
