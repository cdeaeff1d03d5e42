/// Decides when a new frame is worth drawing.
///
/// Redraws on any change of the scene fingerprint or the viewport, and at most
/// once per `idle_interval_ms` otherwise (keeps the terminal honest if another
/// process scribbled on it).
#[derive(Debug, Clone)]
pub struct RedrawGate {
    idle_interval_ms: u64,
    last_draw_ms: u64,
    last_key: Option<(u64, u16, u16)>,
}

impl RedrawGate {
    pub fn new(idle_interval_ms: u64) -> Self {
        Self {
            idle_interval_ms,
            last_draw_ms: 0,
            last_key: None,
        }
    }

    pub fn should_draw(&mut self, now_ms: u64, fingerprint: u64, width: u16, height: u16) -> bool {
        let key = (fingerprint, width, height);
        let changed = self.last_key != Some(key);
        let stale = now_ms.saturating_sub(self.last_draw_ms) >= self.idle_interval_ms;
        if changed || stale {
            self.last_key = Some(key);
            self.last_draw_ms = now_ms;
            return true;
        }
        false
    }

    /// Forget the last frame so the next check always draws.
    pub fn invalidate(&mut self) {
        self.last_key = None;
    }
}
