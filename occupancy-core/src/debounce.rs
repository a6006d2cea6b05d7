//! Refractory-window debounce for mechanical button edges
//!
//! Each button owns one gate, updated only from the task that watches
//! that button. On this firmware all button handling runs on a single
//! core, so the single-writer assumption holds by construction; a port
//! to multi-core interrupt delivery would need to put each gate behind
//! its own synchronization.

/// Rejects edges arriving within a refractory window of the last
/// accepted one. Constant-time and allocation-free, safe to run on the
/// interrupt-priority path.
#[derive(Debug, Clone, Copy)]
pub struct DebounceGate {
    window_ms: u64,
    last_accepted: Option<u64>,
}

impl DebounceGate {
    /// Creates a gate with the given refractory window in milliseconds.
    /// No edge has been accepted yet, so the first one always passes.
    pub const fn new(window_ms: u64) -> Self {
        Self {
            window_ms,
            last_accepted: None,
        }
    }

    /// Accepts the edge at `now_ms` iff strictly more than the window has
    /// elapsed since the last accepted edge. Accepting records `now_ms`
    /// as the new window start.
    pub fn accept(&mut self, now_ms: u64) -> bool {
        let accepted = match self.last_accepted {
            None => true,
            Some(last) => now_ms.saturating_sub(last) > self.window_ms,
        };
        if accepted {
            self.last_accepted = Some(now_ms);
        }
        accepted
    }
}
