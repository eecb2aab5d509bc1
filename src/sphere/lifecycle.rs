//! Frame scheduling and global pointer subscriptions scoped to a mounted widget
//!
//! A `MountGuard` owns the outstanding frame request and the global
//! listener registration. Dropping it (or calling `unmount`) releases both,
//! so a detached widget can never receive another frame or pointer event.

/// Handle to a scheduled frame callback
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FrameHandle(pub u64);

/// Handle to a set of page-wide pointer/touch listeners
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ListenerHandle(pub u64);

/// What the widget needs from the surface hosting it
pub trait FrameHost {
    /// Requests one more frame callback
    fn request_frame(&mut self) -> FrameHandle;

    /// Cancels a pending frame callback
    fn cancel_frame(&mut self, handle: FrameHandle);

    /// Starts delivering pointer move/up and touch move/end from anywhere on the surface
    fn add_global_listeners(&mut self) -> ListenerHandle;

    /// Stops delivering global pointer events
    fn remove_global_listeners(&mut self, handle: ListenerHandle);
}

/// Registration held while the widget is mounted
pub struct MountGuard<H: FrameHost> {
    host: H,
    frame: Option<FrameHandle>,
    listeners: Option<ListenerHandle>,
}

impl<H: FrameHost> MountGuard<H> {
    /// Registers global listeners and schedules the first frame
    pub fn mount(mut host: H) -> Self {
        let listeners = host.add_global_listeners();
        let frame = host.request_frame();
        log::debug!("Sphere mounted (frame {:?}, listeners {:?})", frame, listeners);
        Self {
            host,
            frame: Some(frame),
            listeners: Some(listeners),
        }
    }

    /// Whether frames and global events are still being delivered
    pub fn is_active(&self) -> bool {
        self.frame.is_some()
    }

    /// Whether page-wide pointer events should be consumed
    pub fn listening(&self) -> bool {
        self.listeners.is_some()
    }

    /// Called from the frame callback. Re-registers for the next frame and
    /// returns true, or returns false once unmounted.
    pub fn on_frame(&mut self) -> bool {
        if self.frame.is_none() {
            return false;
        }
        self.frame = Some(self.host.request_frame());
        true
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    /// Cancels the pending frame and removes global listeners. Idempotent.
    pub fn unmount(&mut self) {
        let had_frame = self.frame.is_some();
        if let Some(frame) = self.frame.take() {
            self.host.cancel_frame(frame);
        }
        if let Some(listeners) = self.listeners.take() {
            self.host.remove_global_listeners(listeners);
        }
        if had_frame {
            log::debug!("Sphere unmounted");
        }
    }
}

impl<H: FrameHost> Drop for MountGuard<H> {
    fn drop(&mut self) {
        self.unmount();
    }
}
