//=========================================================================
// Platform Subsystem
//
// Bridges winit (OS-level events) with the core thread over a bounded
// crossbeam channel.
//
// Architecture:
// ```text
//  Main Thread:                     Core Thread:
//  ┌──────────────────────────┐    ┌──────────────────────┐
//  │  winit Event Loop        │    │  EventCollector      │
//  │   ↓                      │    │   ↓                  │
//  │  InputProcessor          │    │  StateTracker        │
//  │   └─ stamps modifiers    │    │   ↓                  │
//  │   ↓                      │    │  SceneDirector       │
//  │  InputBuffer             │    │  PaintTool           │
//  │   ├─ discrete: Vec<>     │    │   ↓                  │
//  │   └─ continuous: Set<>   │    │  DrawList → sink     │
//  │   ↓                      │    └──────────────────────┘
//  │  RedrawRequested (flush) │               ↑
//  │   ↓                      │               │
//  │  Sender ─────────────────┼───────────────┘
//  └──────────────────────────┘    PlatformEvent
// ```
//
// Notes:
// - RedrawRequested is the frame boundary; input buffered since the last
//   redraw is sent as one message. Empty frames send nothing.
// - A full channel blocks the platform thread until the core catches up.
// - If the core thread is gone, input is dropped with a warning so the
//   window can still be closed.
// - winit requires the main thread on macOS/iOS, so this runs on the
//   thread that called `Engine::run()`.
//
//=========================================================================

//=== Submodules ==========================================================

mod input_buffer;
mod input_processor;

//=== External Crates =====================================================

use crossbeam_channel::Sender;
use log::*;
use winit::{
    application::ApplicationHandler,
    dpi::LogicalSize,
    event::WindowEvent,
    event_loop::{ActiveEventLoop, EventLoop},
    window::{Window, WindowAttributes, WindowId},
};

//=== Internal Imports ====================================================

use crate::core::platform_bridge::{PlatformError, PlatformEvent};
use input_buffer::InputBuffer;
use input_processor::InputProcessor;

//=== WindowConfig ========================================================

/// Attributes for the single application window.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct WindowConfig {
    pub(crate) title: String,
    pub(crate) width: u32,
    pub(crate) height: u32,
}

//=== Platform ============================================================

/// Window owner and input batcher.
///
/// Not `Send`; lives on the main thread and talks to the core thread only
/// through `event_sender`.
pub(crate) struct Platform {
    /// Created lazily in `resumed()`.
    window: Option<Window>,
    window_config: WindowConfig,
    buffer: InputBuffer,
    event_sender: Sender<PlatformEvent>,
    input_processor: InputProcessor,
}

impl Platform {
    //--- Construction -----------------------------------------------------

    pub(crate) fn new(event_sender: Sender<PlatformEvent>, window_config: WindowConfig) -> Self {
        info!(target: "platform", "Platform subsystem initialized");
        Self {
            window: None,
            window_config,
            buffer: InputBuffer::new(),
            event_sender,
            input_processor: InputProcessor::new(),
        }
    }

    //--- Execution --------------------------------------------------------

    /// Runs the winit event loop until the window closes.
    ///
    /// # Errors
    ///
    /// [`PlatformError::EventLoopCreation`] if no event loop can be made,
    /// [`PlatformError::EventLoopExecution`] if the loop exits abnormally.
    ///
    /// # Panics
    ///
    /// winit panics when called off the main thread on macOS/iOS.
    pub(crate) fn run(mut self) -> Result<(), PlatformError> {
        debug!(target: "platform", "Starting winit event loop");

        let event_loop = EventLoop::new().map_err(PlatformError::EventLoopCreation)?;

        event_loop
            .run_app(&mut self)
            .map_err(PlatformError::EventLoopExecution)
    }

    //--- Internal Helpers -------------------------------------------------

    /// Sends everything buffered since the last redraw.
    fn flush_input_buffer(&mut self) {
        let Some((discrete, continuous)) = self.buffer.drain() else {
            return;
        };

        let discrete_count = discrete.len();
        let continuous_count = continuous.len();

        trace!(
            target: "platform::input",
            "Flushing {} discrete + {} continuous events",
            discrete_count,
            continuous_count
        );

        if self
            .event_sender
            .send(PlatformEvent::Inputs { discrete, continuous })
            .is_err()
        {
            warn!(
                target: "platform::input",
                "Core thread gone, dropping {} events",
                discrete_count + continuous_count
            );
        }
    }

    fn close(&mut self, event_loop: &ActiveEventLoop) {
        let _ = self.event_sender.send(PlatformEvent::WindowClosed);
        event_loop.exit();
    }
}

//=== winit Integration ===================================================

impl ApplicationHandler for Platform {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            debug!(target: "platform", "Resumed with existing window");
            return;
        }

        let attrs = WindowAttributes::default()
            .with_title(self.window_config.title.as_str())
            .with_inner_size(LogicalSize::new(
                self.window_config.width,
                self.window_config.height,
            ));

        match event_loop.create_window(attrs) {
            Ok(window) => {
                info!(
                    target: "platform",
                    "Window created: {}x{} @ {}x DPI",
                    window.inner_size().width,
                    window.inner_size().height,
                    window.scale_factor()
                );
                window.request_redraw();
                self.window = Some(window);
            }
            Err(e) => {
                error!(target: "platform", "Window creation failed: {}", e);
                self.close(event_loop);
            }
        }
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _window_id: WindowId, event: WindowEvent) {
        match event {
            WindowEvent::CloseRequested => {
                info!(target: "platform", "Window close requested");
                self.close(event_loop);
            }

            WindowEvent::ModifiersChanged(modifiers) => {
                trace!(target: "platform::input", "Modifiers changed: {:?}", modifiers);
                self.input_processor.update_modifiers(modifiers.state());
            }

            WindowEvent::CursorMoved { position, .. } => {
                let event = self.input_processor.pointer_moved(position.x, position.y);
                self.buffer.push_continuous(event);
            }

            WindowEvent::KeyboardInput { event, .. } => {
                match self.input_processor.key(&event) {
                    Some(input) => self.buffer.push_discrete(input),
                    None => trace!(target: "platform::input", "Key ignored: {:?}", event.physical_key),
                }
            }

            WindowEvent::MouseInput { state, button, .. } => {
                let input = self.input_processor.button(button, state);
                self.buffer.push_discrete(input);
            }

            WindowEvent::RedrawRequested => {
                self.flush_input_buffer();

                if let Some(window) = &self.window {
                    window.request_redraw();
                }
            }

            _ => {}
        }
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
