//=========================================================================
// Global Systems
//=========================================================================
//
// Container for engine-level systems with logic.
//
// Holds the scene director and the paint tool and runs them in a fixed
// order each tick. Systems operate on GlobalContext data.
//
//=========================================================================

//=== External Dependencies ===============================================

use log::debug;

//=== Internal Dependencies ===============================================

use super::GlobalContext;
use crate::core::paint::{PaintConfig, PaintTool};
use crate::core::render::Canvas;
use crate::core::scene::{SceneDirector, SceneError, SceneKind, Stage};

//=== GlobalSystems =======================================================

/// Container for engine-level logic systems.
///
/// # Available Systems
///
/// - `director`: scene/stage state machine; register scenes here
/// - `paint`: freehand stroke overlay drawn above the active scene
pub struct GlobalSystems {
    /// Scene registration, dispatch and transitions.
    pub director: SceneDirector,

    /// Stroke recorder driven by the pointer and the clear chord.
    pub paint: PaintTool,
}

impl GlobalSystems {
    /// Creates the systems with no scenes registered.
    pub fn new(initial_scene: SceneKind, initial_stage: Stage, paint: PaintConfig) -> Self {
        Self {
            director: SceneDirector::new(initial_scene, initial_stage),
            paint: PaintTool::new(paint),
        }
    }

    /// Validates scene registration and runs the initial `init` calls.
    pub fn start(&mut self, ctx: &mut GlobalContext) -> Result<(), SceneError> {
        self.director.start(ctx)?;
        self.paint.init();
        Ok(())
    }

    //--- Update Loop ------------------------------------------------------

    /// Runs one tick.
    ///
    /// # Processing Pipeline
    ///
    /// 1. **Input**: folds this tick's event batches into `input_state`
    /// 2. **Scene update**: the active scene reads input, queues requests
    /// 3. **Requests**: the director applies queued requests
    /// 4. **Paint**: records or clears strokes
    /// 5. **Transition**: `execute_stage` switches scenes if requested
    pub fn update(&mut self, ctx: &mut GlobalContext) {
        // 1. Input
        ctx.input_state.clear();
        for batch in ctx.frame_events.drain(..) {
            ctx.input_state.process_events(&batch);
        }
        ctx.input_state.finalize_frame();

        // 2-3. Scene logic and its requests
        self.director.update(ctx);
        self.director.apply_requests(ctx);

        // 4. Paint overlay
        self.paint.update(&ctx.input_state);

        // 5. Scene transition
        if self.director.execute_stage(ctx) {
            debug!(
                "Now in {} at {}",
                self.director.current_scene(),
                self.director.current_stage()
            );
        }
    }

    /// Draws the active scene, then the strokes on top.
    pub fn draw(&self, ctx: &mut GlobalContext, canvas: &mut dyn Canvas) {
        self.director.draw(ctx, canvas);
        self.paint.draw(canvas);
    }

    /// Runs `uninit` on the active scene and the paint tool.
    pub fn shutdown(&mut self, ctx: &mut GlobalContext) {
        self.director.uninit(ctx);
        self.paint.uninit();
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::input::{InputEvent, KeyCode, Modifiers, MouseButton};
    use crate::core::render::{Color, DrawList, Point};
    use crate::core::scene::{Scene, SceneRequest};

    //--- Test Helpers -----------------------------------------------------

    /// Moves to `target` when Enter is pressed; Game counts Space presses.
    struct Hop {
        target: SceneKind,
        coins: u32,
        inits: u32,
    }

    impl Hop {
        fn to(target: SceneKind) -> Self {
            Self { target, coins: 0, inits: 0 }
        }
    }

    impl Scene for Hop {
        fn init(&mut self, _ctx: &mut GlobalContext) {
            self.inits += 1;
            self.coins = 0;
        }

        fn update(&mut self, ctx: &mut GlobalContext) {
            if ctx.input_state.is_key_pressed(KeyCode::Space) {
                self.coins += 1;
            }
            if ctx.input_state.is_key_pressed(KeyCode::Enter) {
                ctx.scene_requests.push(SceneRequest::Change(self.target));
            }
        }

        fn draw(&self, _ctx: &GlobalContext, canvas: &mut dyn Canvas) {
            canvas.draw_line(Point::ZERO, Point::new(0.0, 1.0), Color::YELLOW);
        }

        fn coin_count(&self) -> u32 {
            self.coins
        }
    }

    fn systems() -> (GlobalSystems, GlobalContext) {
        let mut systems = GlobalSystems::new(SceneKind::Title, Stage::FIRST, PaintConfig::default());
        systems.director.register(SceneKind::Title, Hop::to(SceneKind::Game));
        systems.director.register(SceneKind::Game, Hop::to(SceneKind::Result));
        systems.director.register(SceneKind::Result, Hop::to(SceneKind::Title));

        let mut ctx = GlobalContext::new();
        assert_eq!(systems.start(&mut ctx), Ok(()));
        (systems, ctx)
    }

    fn press(key: KeyCode) -> Vec<InputEvent> {
        vec![
            InputEvent::KeyDown { key, modifiers: Modifiers::NONE },
            InputEvent::KeyUp { key, modifiers: Modifiers::NONE },
        ]
    }

    fn tick(systems: &mut GlobalSystems, ctx: &mut GlobalContext, batch: Vec<InputEvent>) {
        ctx.push_input(batch);
        systems.update(ctx);
    }

    //=====================================================================
    // Pipeline
    //=====================================================================

    #[test]
    fn start_requires_all_scenes() {
        let mut systems = GlobalSystems::new(SceneKind::Title, Stage::FIRST, PaintConfig::default());
        systems.director.register(SceneKind::Title, Hop::to(SceneKind::Game));

        let mut ctx = GlobalContext::new();
        assert_eq!(
            systems.start(&mut ctx),
            Err(SceneError::Unregistered(SceneKind::Game))
        );
    }

    #[test]
    fn scene_request_switches_within_the_same_tick() {
        let (mut systems, mut ctx) = systems();

        tick(&mut systems, &mut ctx, press(KeyCode::Enter));

        assert_eq!(systems.director.current_scene(), SceneKind::Game);
        assert_eq!(ctx.progress.scene, SceneKind::Game);
    }

    #[test]
    fn full_loop_advances_stage_and_keeps_coins() {
        let (mut systems, mut ctx) = systems();

        tick(&mut systems, &mut ctx, press(KeyCode::Enter)); // Title -> Game
        tick(&mut systems, &mut ctx, press(KeyCode::Space));
        tick(&mut systems, &mut ctx, press(KeyCode::Space));
        tick(&mut systems, &mut ctx, press(KeyCode::Enter)); // Game -> Result

        assert_eq!(systems.director.current_scene(), SceneKind::Result);
        assert_eq!(systems.director.current_stage(), Stage::Stage2);
        assert_eq!(systems.director.coin_count(), 2);
        assert_eq!(ctx.progress.coin_count, 2);
    }

    #[test]
    fn paint_records_pointer_through_pipeline() {
        let (mut systems, mut ctx) = systems();

        tick(
            &mut systems,
            &mut ctx,
            vec![
                InputEvent::MouseMoved { x: 5.0, y: 5.0 },
                InputEvent::MouseButtonDown { button: MouseButton::Left, modifiers: Modifiers::NONE },
            ],
        );
        tick(&mut systems, &mut ctx, vec![InputEvent::MouseMoved { x: 6.0, y: 7.0 }]);
        tick(
            &mut systems,
            &mut ctx,
            vec![InputEvent::MouseButtonUp { button: MouseButton::Left, modifiers: Modifiers::NONE }],
        );

        assert_eq!(systems.paint.line_index(), 1);
        assert_eq!(
            systems.paint.stroke(0).map(|s| s.points().to_vec()),
            Some(vec![Point::new(5.0, 5.0), Point::new(6.0, 7.0)])
        );
    }

    #[test]
    fn ctrl_z_clears_strokes_through_pipeline() {
        let (mut systems, mut ctx) = systems();
        let left = MouseButton::Left;

        tick(&mut systems, &mut ctx, vec![InputEvent::MouseButtonDown { button: left, modifiers: Modifiers::NONE }]);
        tick(&mut systems, &mut ctx, vec![InputEvent::MouseButtonUp { button: left, modifiers: Modifiers::NONE }]);
        assert_eq!(systems.paint.line_index(), 1);

        // Ctrl's own event carries stale flags; Z arrives with Ctrl set
        tick(
            &mut systems,
            &mut ctx,
            vec![
                InputEvent::KeyDown { key: KeyCode::ControlLeft, modifiers: Modifiers::NONE },
                InputEvent::KeyDown { key: KeyCode::KeyZ, modifiers: Modifiers::CTRL },
            ],
        );
        assert_eq!(systems.paint.line_index(), 0);
        assert!(systems.paint.strokes().iter().all(|s| s.is_empty()));

        // Still held: a new stroke is not wiped again
        tick(&mut systems, &mut ctx, vec![InputEvent::MouseButtonDown { button: left, modifiers: Modifiers::CTRL }]);
        tick(&mut systems, &mut ctx, vec![]);
        assert_eq!(systems.paint.stroke(0).map(|s| s.len()), Some(2));
    }

    #[test]
    fn draw_puts_strokes_above_scene() {
        let (mut systems, mut ctx) = systems();
        tick(
            &mut systems,
            &mut ctx,
            vec![InputEvent::MouseButtonDown { button: MouseButton::Left, modifiers: Modifiers::NONE }],
        );

        let mut canvas = DrawList::new();
        systems.draw(&mut ctx, &mut canvas);

        let colors: Vec<_> = canvas.segments().iter().map(|s| s.color).collect();
        assert_eq!(colors, vec![Color::YELLOW, Color::WHITE]);
    }
}
