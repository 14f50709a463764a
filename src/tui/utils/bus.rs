use flume::{Receiver, Sender};

/// Messages sent from the UI/input side to the core worker thread.
#[derive(Debug)]
pub enum UiToCore {
    /// Something changed; core acknowledges so the UI redraws promptly.
    Refresh,
    /// Write the current page document to disk.
    SavePage,
    /// Graceful shutdown request.
    Quit,
}

/// Messages sent from the core worker thread back to the UI thread.
#[derive(Debug)]
pub enum CoreToUi {
    /// Core completed a cycle of background work; UI may redraw.
    Tick,
    /// Core applied a refresh; UI may want to redraw sooner.
    Refreshed,
    /// Core encountered an error condition (already stored in Status, provided for wake-up).
    Error,
}

/// Holder passed into the UI loop containing the receiving side from core
/// and the sending side to core.
#[derive(Clone)]
pub struct Bus {
    pub core_rx: Receiver<CoreToUi>,
    pub ui_tx: Sender<UiToCore>,
}

impl Bus {
    pub fn new(core_rx: Receiver<CoreToUi>, ui_tx: Sender<UiToCore>) -> Self {
        Self { core_rx, ui_tx }
    }
}
