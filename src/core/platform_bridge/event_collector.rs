//=========================================================================
// Event Collector
//=========================================================================
//
// Core-side receiver for platform events with bounded draining and
// shutdown detection.
//
// Architecture:
//   Receiver<PlatformEvent> → collect_frame() → GlobalContext → TickControl
//
// Draining is bounded so a flooded channel cannot starve the tick.
//
//=========================================================================

//=== External Dependencies ===============================================

use crossbeam_channel::{Receiver, TryRecvError};
use log::warn;

//=== Internal Dependencies ===============================================

use super::PlatformEvent;
use crate::core::globals::GlobalContext;

//=== TickControl =========================================================

/// Update loop control signal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum TickControl {
    Continue,
    Exit,
}

//=== EventCollector ======================================================

/// Moves pending platform input into the context once per tick.
pub(crate) struct EventCollector {
    receiver: Receiver<PlatformEvent>,
}

impl EventCollector {
    const MAX_EVENTS_PER_FRAME: usize = 100;

    pub(crate) fn new(receiver: Receiver<PlatformEvent>) -> Self {
        Self { receiver }
    }

    /// Drains up to `MAX_EVENTS_PER_FRAME` events into `ctx`.
    ///
    /// Returns `Exit` on `WindowClosed` or when the platform side hung up.
    pub(crate) fn collect_frame(&mut self, ctx: &mut GlobalContext) -> TickControl {
        let mut drained = 0;

        while drained < Self::MAX_EVENTS_PER_FRAME {
            match self.receiver.try_recv() {
                Ok(PlatformEvent::Inputs { discrete, continuous }) => {
                    ctx.push_input(discrete);
                    ctx.push_input(continuous);
                    drained += 1;
                }
                Ok(PlatformEvent::WindowClosed) => return TickControl::Exit,
                Err(TryRecvError::Disconnected) => return TickControl::Exit,
                Err(TryRecvError::Empty) => break,
            }
        }

        if drained >= Self::MAX_EVENTS_PER_FRAME {
            warn!("Event queue backlog: drained {} events this tick", drained);
        }

        TickControl::Continue
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::input::{InputEvent, KeyCode, Modifiers};
    use crossbeam_channel::unbounded;

    fn key_batch() -> PlatformEvent {
        PlatformEvent::Inputs {
            discrete: vec![InputEvent::KeyDown { key: KeyCode::KeyA, modifiers: Modifiers::NONE }],
            continuous: vec![],
        }
    }

    #[test]
    fn empty_queue_continues() {
        let (_tx, rx) = unbounded::<PlatformEvent>();
        let mut collector = EventCollector::new(rx);
        let mut ctx = GlobalContext::new();

        assert_eq!(collector.collect_frame(&mut ctx), TickControl::Continue);
        assert!(ctx.frame_events.is_empty());
    }

    #[test]
    fn non_empty_halves_become_batches() {
        let (tx, rx) = unbounded();
        let mut collector = EventCollector::new(rx);
        let mut ctx = GlobalContext::new();

        tx.send(key_batch()).unwrap();
        tx.send(PlatformEvent::Inputs {
            discrete: vec![],
            continuous: vec![InputEvent::MouseMoved { x: 10.0, y: 20.0 }],
        })
        .unwrap();

        assert_eq!(collector.collect_frame(&mut ctx), TickControl::Continue);
        assert_eq!(ctx.frame_events.len(), 2);
    }

    #[test]
    fn window_closed_exits() {
        let (tx, rx) = unbounded();
        let mut collector = EventCollector::new(rx);
        let mut ctx = GlobalContext::new();

        tx.send(key_batch()).unwrap();
        tx.send(PlatformEvent::WindowClosed).unwrap();

        assert_eq!(collector.collect_frame(&mut ctx), TickControl::Exit);
    }

    #[test]
    fn disconnect_exits() {
        let (tx, rx) = unbounded::<PlatformEvent>();
        let mut collector = EventCollector::new(rx);
        drop(tx);

        assert_eq!(collector.collect_frame(&mut GlobalContext::new()), TickControl::Exit);
    }

    #[test]
    fn backlog_is_bounded_per_tick() {
        let (tx, rx) = unbounded();
        let mut collector = EventCollector::new(rx);
        let mut ctx = GlobalContext::new();

        for _ in 0..(EventCollector::MAX_EVENTS_PER_FRAME + 5) {
            tx.send(key_batch()).unwrap();
        }

        collector.collect_frame(&mut ctx);
        assert_eq!(ctx.frame_events.len(), EventCollector::MAX_EVENTS_PER_FRAME);
        assert_eq!(rx_len(&collector), 5);
    }

    fn rx_len(collector: &EventCollector) -> usize {
        collector.receiver.len()
    }
}
