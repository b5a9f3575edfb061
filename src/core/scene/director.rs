//=========================================================================
// Scene Director
//=========================================================================
//
// Owns the active scene, the requested next scene, the current stage and
// the coin snapshot taken when the Game scene is left.
//
// Scenes live in a table indexed by `SceneKind::index()`, so a scene id
// can never address outside the table. Missing registrations are caught
// once by `start()`.
//
//=========================================================================

//=== External Dependencies ===============================================

use log::{debug, info, warn};

//=== Internal Dependencies ===============================================

use super::{Scene, SceneError, SceneKind, SceneRequest, Stage};
use crate::core::globals::{GlobalContext, Progress};
use crate::core::render::Canvas;

//=== SceneDirector =======================================================

/// Scene/stage state machine.
///
/// Transitions are requested with [`set_next_scene`](Self::set_next_scene)
/// and carried out by [`execute_stage`](Self::execute_stage), normally
/// once per tick at the end of the update phase.
pub struct SceneDirector {
    scenes: [Option<Box<dyn Scene>>; SceneKind::COUNT],
    current: SceneKind,
    next: SceneKind,
    stage: Stage,
    coin_count: u32,
}

impl SceneDirector {
    //--- Construction -----------------------------------------------------

    /// Creates a director with no scenes registered.
    pub fn new(initial_scene: SceneKind, initial_stage: Stage) -> Self {
        Self {
            scenes: [None, None, None],
            current: initial_scene,
            next: initial_scene,
            stage: initial_stage,
            coin_count: 0,
        }
    }

    //--- Registration -----------------------------------------------------

    /// Registers the scene object for `kind`, replacing any previous one.
    pub fn register<T>(&mut self, kind: SceneKind, scene: T)
    where
        T: Scene + 'static,
    {
        if self.scenes[kind.index()].replace(Box::new(scene)).is_some() {
            warn!("Scene {} was already registered and has been replaced", kind);
        }
    }

    pub fn is_registered(&self, kind: SceneKind) -> bool {
        self.scenes[kind.index()].is_some()
    }

    /// Fails with the first scene kind that has no registration.
    pub fn validate(&self) -> Result<(), SceneError> {
        match SceneKind::ALL.into_iter().find(|&kind| !self.is_registered(kind)) {
            Some(kind) => Err(SceneError::Unregistered(kind)),
            None => Ok(()),
        }
    }

    /// Checks the table and runs `init` on the startup scene.
    pub fn start(&mut self, ctx: &mut GlobalContext) -> Result<(), SceneError> {
        self.validate()?;
        info!("Starting scene director in {} at {}", self.current, self.stage);
        self.init(ctx);
        Ok(())
    }

    //--- Lifecycle Dispatch -----------------------------------------------

    /// Runs `init` on the current scene.
    pub fn init(&mut self, ctx: &mut GlobalContext) {
        self.publish_progress(ctx);
        if let Some(scene) = self.scene_mut(self.current) {
            scene.init(ctx);
        }
    }

    /// Runs `update` on the current scene.
    pub fn update(&mut self, ctx: &mut GlobalContext) {
        self.publish_progress(ctx);
        if let Some(scene) = self.scene_mut(self.current) {
            scene.update(ctx);
        }
    }

    /// Runs `draw` on the current scene.
    pub fn draw(&self, ctx: &mut GlobalContext, canvas: &mut dyn Canvas) {
        self.publish_progress(ctx);
        match &self.scenes[self.current.index()] {
            Some(scene) => scene.draw(ctx, canvas),
            None => warn!("Scene {} is not registered, nothing to draw", self.current),
        }
    }

    /// Runs `uninit` on the current scene.
    pub fn uninit(&mut self, ctx: &mut GlobalContext) {
        self.publish_progress(ctx);
        if let Some(scene) = self.scene_mut(self.current) {
            scene.uninit(ctx);
        }
    }

    /// Restarts the current scene without switching.
    pub fn replay(&mut self, ctx: &mut GlobalContext) {
        debug!("Replaying scene {}", self.current);
        self.init(ctx);
    }

    //--- Transitions ------------------------------------------------------

    /// Records the scene to switch to at the next `execute_stage`.
    pub fn set_next_scene(&mut self, scene: SceneKind) {
        if scene != self.next {
            debug!("Next scene set to {}", scene);
        }
        self.next = scene;
    }

    /// Performs the pending transition, if any.
    ///
    /// Leaving Game snapshots its coin counter before `uninit` and
    /// advances the stage after it. Returns `true` if the scene changed.
    pub fn execute_stage(&mut self, ctx: &mut GlobalContext) -> bool {
        if self.current == self.next {
            return false;
        }

        let leaving = self.current;

        if leaving == SceneKind::Game {
            if let Some(game) = &self.scenes[SceneKind::Game.index()] {
                self.coin_count = game.coin_count();
                debug!("Captured {} coins from {}", self.coin_count, self.stage);
            }
        }

        self.uninit(ctx);

        if leaving == SceneKind::Game {
            self.advance_stage();
        }

        self.current = self.next;
        debug!("Scene transition {} -> {}", leaving, self.current);

        self.init(ctx);
        true
    }

    /// Applies every request queued by scenes this tick, in order.
    pub fn apply_requests(&mut self, ctx: &mut GlobalContext) {
        for request in ctx.scene_requests.take() {
            match request {
                SceneRequest::Change(kind) => self.set_next_scene(kind),
                SceneRequest::Replay => self.replay(ctx),
                SceneRequest::ResetStage => self.reset_stage(),
                SceneRequest::ResetCoinCount => self.reset_coin_count(),
            }
        }
    }

    //--- Stage & Coins ----------------------------------------------------

    pub fn current_scene(&self) -> SceneKind {
        self.current
    }

    pub fn next_scene(&self) -> SceneKind {
        self.next
    }

    pub fn current_stage(&self) -> Stage {
        self.stage
    }

    /// Coins captured the last time Game was left.
    pub fn coin_count(&self) -> u32 {
        self.coin_count
    }

    pub fn reset_coin_count(&mut self) {
        self.coin_count = 0;
    }

    /// Returns to [`Stage::FIRST`].
    pub fn reset_stage(&mut self) {
        if self.stage != Stage::FIRST {
            debug!("Stage reset from {}", self.stage);
        }
        self.stage = Stage::FIRST;
    }

    //--- Internal Helpers -------------------------------------------------

    fn advance_stage(&mut self) {
        match self.stage.next() {
            Some(next) => {
                info!("Advancing from {} to {}", self.stage, next);
                self.stage = next;
            }
            None => warn!("Already at {}, stage not advanced", self.stage),
        }
    }

    fn scene_mut(&mut self, kind: SceneKind) -> Option<&mut Box<dyn Scene>> {
        let slot = self.scenes[kind.index()].as_mut();
        if slot.is_none() {
            warn!("Scene {} is not registered, skipping dispatch", kind);
        }
        slot
    }

    fn publish_progress(&self, ctx: &mut GlobalContext) {
        ctx.progress = Progress {
            scene: self.current,
            stage: self.stage,
            coin_count: self.coin_count,
        };
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
