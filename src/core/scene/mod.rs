//=========================================================================
// Scene System
//=========================================================================
//
// Scene/stage identifiers, the scene lifecycle trait and the director
// that switches between scenes once per tick.
//
// Architecture:
//   SceneDirector
//     ├─ scenes: [Option<Box<dyn Scene>>; SceneKind::COUNT]
//     ├─ current / next: SceneKind
//     └─ stage: Stage, coin_count: u32
//
// Flow (one tick):
//   update() → apply_requests() → execute_stage() → draw()
//
//=========================================================================

//=== External Dependencies ===============================================

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

//=== Internal Dependencies ===============================================

use crate::core::globals::GlobalContext;
use crate::core::render::Canvas;

//=== Module Declarations =================================================

mod director;
mod request_queue;

//=== Public API ==========================================================

pub use director::SceneDirector;
pub use request_queue::{RequestQueue, SceneRequest};

//=== SceneError ==========================================================

/// Errors raised while configuring or parsing scene identifiers.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SceneError {
    /// Name or id that does not denote a scene.
    #[error("unknown scene `{0}`")]
    UnknownScene(String),

    /// Name or id that does not denote a stage.
    #[error("unknown stage `{0}`")]
    UnknownStage(String),

    /// A scene kind has no registered scene object.
    #[error("scene {0} has no registered implementation")]
    Unregistered(SceneKind),
}

//=== SceneKind ===========================================================

/// Top-level mode of the program.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SceneKind {
    Title,
    Game,
    Result,
}

impl SceneKind {
    /// Number of scene kinds.
    pub const COUNT: usize = 3;

    /// Every scene kind, in table order.
    pub const ALL: [SceneKind; Self::COUNT] = [Self::Title, Self::Game, Self::Result];

    /// Position of this kind in per-scene tables.
    #[inline]
    pub const fn index(self) -> usize {
        match self {
            Self::Title => 0,
            Self::Game => 1,
            Self::Result => 2,
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::Title => "title",
            Self::Game => "game",
            Self::Result => "result",
        }
    }
}

impl fmt::Display for SceneKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for SceneKind {
    type Err = SceneError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| SceneError::UnknownScene(s.to_owned()))
    }
}

impl TryFrom<u8> for SceneKind {
    type Error = SceneError;

    fn try_from(id: u8) -> Result<Self, Self::Error> {
        Self::ALL
            .get(usize::from(id))
            .copied()
            .ok_or_else(|| SceneError::UnknownScene(id.to_string()))
    }
}

//=== Stage ===============================================================

/// Level index; advances each time the Game scene is left.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Stage {
    Stage1,
    Stage2,
    Stage3,
}

impl Stage {
    pub const FIRST: Stage = Stage::Stage1;
    pub const LAST: Stage = Stage::Stage3;

    /// Every stage in play order.
    pub const ALL: [Stage; 3] = [Stage::Stage1, Stage::Stage2, Stage::Stage3];

    /// Zero-based position in play order.
    pub const fn index(self) -> usize {
        match self {
            Self::Stage1 => 0,
            Self::Stage2 => 1,
            Self::Stage3 => 2,
        }
    }

    /// The following stage, or `None` at [`Stage::LAST`].
    pub fn next(self) -> Option<Stage> {
        Self::ALL.get(self.index() + 1).copied()
    }
}

impl Default for Stage {
    fn default() -> Self {
        Self::FIRST
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "stage {}", self.index() + 1)
    }
}

impl FromStr for Stage {
    type Err = SceneError;

    /// Accepts `"1"`, `"stage1"` or `"Stage1"`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.trim().to_ascii_lowercase();
        let digits = lower.strip_prefix("stage").unwrap_or(&lower);

        digits
            .parse::<usize>()
            .ok()
            .and_then(|n| n.checked_sub(1))
            .and_then(|i| Self::ALL.get(i).copied())
            .ok_or_else(|| SceneError::UnknownStage(s.to_owned()))
    }
}

impl TryFrom<u8> for Stage {
    type Error = SceneError;

    /// Zero-based, matching [`Stage::index`].
    fn try_from(id: u8) -> Result<Self, Self::Error> {
        Self::ALL
            .get(usize::from(id))
            .copied()
            .ok_or_else(|| SceneError::UnknownStage(id.to_string()))
    }
}

//=== Scene Trait =========================================================

/// Lifecycle of one top-level mode.
///
/// Scenes are registered once with the [`SceneDirector`] and keep their
/// state between activations. Only `update()` is required.
///
/// ```rust
/// # use stagepaint::prelude::*;
/// struct Title;
///
/// impl Scene for Title {
///     fn update(&mut self, ctx: &mut GlobalContext) {
///         if ctx.input_state.is_key_pressed(KeyCode::Enter) {
///             ctx.scene_requests.push(SceneRequest::Change(SceneKind::Game));
///         }
///     }
/// }
/// ```
pub trait Scene: Send {
    /// Called when the scene becomes active, and again on replay.
    fn init(&mut self, _ctx: &mut GlobalContext) {}

    /// Called every tick while the scene is active.
    fn update(&mut self, ctx: &mut GlobalContext);

    /// Called every tick after update while the scene is active.
    fn draw(&self, _ctx: &GlobalContext, _canvas: &mut dyn Canvas) {}

    /// Called when the scene stops being active.
    fn uninit(&mut self, _ctx: &mut GlobalContext) {}

    /// Coins collected so far.
    ///
    /// Only read from the Game scene, at the moment it is left.
    fn coin_count(&self) -> u32 {
        0
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
