use crate::{update, AppState, DashboardView, Effect, Event, EventEmitter, Msg, SubscriptionId};

/// Owns the dashboard state and its subscribers.
///
/// Events produced by a message are dispatched only after the update has
/// finished, so listeners never observe a half-applied move.
#[derive(Debug, Default)]
pub struct Dashboard {
    state: AppState,
    emitter: EventEmitter,
}

impl Dashboard {
    pub fn new(state: AppState) -> Self {
        Self {
            state,
            emitter: EventEmitter::new(),
        }
    }

    pub fn subscribe(&mut self, listener: impl FnMut(&Event) + 'static) -> SubscriptionId {
        self.emitter.subscribe(listener)
    }

    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.emitter.unsubscribe(id)
    }

    /// Applies `msg`, notifies subscribers, and returns the effects the caller
    /// still has to run (fetches and error reports).
    pub fn dispatch(&mut self, msg: Msg) -> Vec<Effect> {
        let state = std::mem::take(&mut self.state);
        let (state, effects) = update(state, msg);
        self.state = state;

        let mut pending = Vec::new();
        for effect in effects {
            match effect {
                Effect::Emit(event) => self.emitter.emit(&event),
                other => pending.push(other),
            }
        }
        pending
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    pub fn view(&self) -> DashboardView {
        self.state.view()
    }

    pub fn consume_dirty(&mut self) -> bool {
        self.state.consume_dirty()
    }
}
