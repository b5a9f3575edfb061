//=========================================================================
// Paint Demo
//
// Three-scene loop with the paint overlay.
//
// Controls:
//   Title:  Enter → Game (restarts at stage 1 with no coins)
//   Game:   Space collects a coin, R replays, Enter/Escape → Result
//   Result: Enter → Title
//   Any:    drag with the left button to paint, Ctrl+Z clears strokes
//
// Run with `RUST_LOG=debug cargo run --example paint_demo`.
//
//=========================================================================

use stagepaint::prelude::*;

//=== Scenes ==============================================================

struct TitleScene;

impl Scene for TitleScene {
    fn init(&mut self, ctx: &mut GlobalContext) {
        log::info!("Title (last run: {} coins)", ctx.progress.coin_count);
    }

    fn update(&mut self, ctx: &mut GlobalContext) {
        if ctx.input_state.is_key_pressed(KeyCode::Enter) {
            ctx.scene_requests.push(SceneRequest::ResetStage);
            ctx.scene_requests.push(SceneRequest::ResetCoinCount);
            ctx.scene_requests.push(SceneRequest::Change(SceneKind::Game));
        }
    }

    fn draw(&self, _ctx: &GlobalContext, canvas: &mut dyn Canvas) {
        underline(canvas, 300.0, Color::WHITE);
    }
}

#[derive(Default)]
struct GameScene {
    coins: u32,
}

impl Scene for GameScene {
    fn init(&mut self, ctx: &mut GlobalContext) {
        self.coins = 0;
        log::info!("Playing {}", ctx.progress.stage);
    }

    fn update(&mut self, ctx: &mut GlobalContext) {
        let input = &ctx.input_state;

        if input.is_key_pressed(KeyCode::Space) {
            self.coins += 1;
            log::debug!("Coin! ({})", self.coins);
        }

        if input.is_key_pressed(KeyCode::KeyR) {
            ctx.scene_requests.push(SceneRequest::Replay);
        } else if input.is_key_pressed(KeyCode::Enter) || input.is_key_pressed(KeyCode::Escape) {
            ctx.scene_requests.push(SceneRequest::Change(SceneKind::Result));
        }
    }

    fn draw(&self, ctx: &GlobalContext, canvas: &mut dyn Canvas) {
        // One tick mark per stage, one short bar per coin
        for i in 0..=ctx.progress.stage.index() {
            let x = 20.0 + 12.0 * i as f32;
            canvas.draw_line(Point::new(x, 20.0), Point::new(x, 40.0), Color::YELLOW);
        }
        for i in 0..self.coins.min(50) {
            let x = 20.0 + 6.0 * i as f32;
            canvas.draw_line(Point::new(x, 560.0), Point::new(x, 580.0), Color::PINK);
        }
    }

    fn coin_count(&self) -> u32 {
        self.coins
    }
}

struct ResultScene;

impl Scene for ResultScene {
    fn init(&mut self, ctx: &mut GlobalContext) {
        log::info!(
            "Result: {} coins, next up {}",
            ctx.progress.coin_count,
            ctx.progress.stage
        );
    }

    fn update(&mut self, ctx: &mut GlobalContext) {
        if ctx.input_state.is_key_pressed(KeyCode::Enter) {
            ctx.scene_requests.push(SceneRequest::Change(SceneKind::Title));
        }
    }

    fn draw(&self, _ctx: &GlobalContext, canvas: &mut dyn Canvas) {
        underline(canvas, 300.0, Color::PINK);
    }
}

fn underline(canvas: &mut dyn Canvas, y: f32, color: Color) {
    canvas.draw_line(Point::new(250.0, y), Point::new(550.0, y), color);
}

//=== Entry Point =========================================================

fn main() -> Result<(), EngineError> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let mut frames: u64 = 0;

    EngineBuilder::new()
        .with_window_title("stagepaint demo")
        .with_frame_sink(move |frame: &DrawList| {
            frames += 1;
            if frames % 300 == 0 {
                log::info!("Frame {}: {} segments", frames, frame.len());
            }
        })
        .build()
        .init(|systems| {
            systems.director.register(SceneKind::Title, TitleScene);
            systems.director.register(SceneKind::Game, GameScene::default());
            systems.director.register(SceneKind::Result, ResultScene);
        })
        .run()
}
