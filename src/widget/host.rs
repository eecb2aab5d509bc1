//! `FrameHost` backed by an egui context

use crate::sphere::lifecycle::{FrameHandle, FrameHost, ListenerHandle};

/// Schedules frames through `request_repaint` and gates surface-wide pointer input.
///
/// egui repaint requests are one-shot, so cancelling just means never asking again.
pub struct EguiHost {
    ctx: egui::Context,
    next_id: u64,
    listening: bool,
}

impl EguiHost {
    pub fn new(ctx: egui::Context) -> Self {
        Self {
            ctx,
            next_id: 0,
            listening: false,
        }
    }

    fn next_handle(&mut self) -> u64 {
        self.next_id += 1;
        self.next_id
    }

    pub fn is_listening(&self) -> bool {
        self.listening
    }
}

impl FrameHost for EguiHost {
    fn request_frame(&mut self) -> FrameHandle {
        self.ctx.request_repaint();
        FrameHandle(self.next_handle())
    }

    fn cancel_frame(&mut self, handle: FrameHandle) {
        log::trace!("Frame {:?} cancelled", handle);
    }

    fn add_global_listeners(&mut self) -> ListenerHandle {
        self.listening = true;
        ListenerHandle(self.next_handle())
    }

    fn remove_global_listeners(&mut self, _handle: ListenerHandle) {
        self.listening = false;
    }
}
