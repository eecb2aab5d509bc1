//! egui front end for the interactive sphere
//!
//! `SphereGallery` turns egui input into `SphereEvent`s, steps the sphere
//! once per frame while mounted, and paints the result.

pub mod host;
pub mod overlay;
pub mod rendering;

use egui::{Event, InnerResponse, PointerButton, Rect, Sense, TouchPhase, Ui, Vec2};
use glam::Vec2 as GVec2;

use crate::config::SphereConfig;
use crate::sphere::lifecycle::MountGuard;
use crate::sphere::{SphereEvent, SphereItem, SphereWidgetState};
pub use host::EguiHost;
pub use overlay::OverlayAction;
use rendering::ItemGeometry;

/// Which placeholder or surface was drawn this frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SurfaceState {
    Loading,
    Empty,
    Interactive,
}

/// Interactive sphere of items
pub struct SphereGallery {
    id: egui::Id,
    state: SphereWidgetState,
    mount: Option<MountGuard<EguiHost>>,
}

impl SphereGallery {
    pub fn new(id_salt: impl std::hash::Hash, config: SphereConfig, items: Vec<SphereItem>) -> Self {
        Self {
            id: egui::Id::new(id_salt),
            state: SphereWidgetState::new(config, items),
            mount: None,
        }
    }

    /// Wraps an existing state, e.g. one built with a fixed seed
    pub fn from_state(id_salt: impl std::hash::Hash, state: SphereWidgetState) -> Self {
        Self {
            id: egui::Id::new(id_salt),
            state,
            mount: None,
        }
    }

    pub fn state(&self) -> &SphereWidgetState {
        &self.state
    }

    pub fn state_mut(&mut self) -> &mut SphereWidgetState {
        &mut self.state
    }

    pub fn is_mounted(&self) -> bool {
        self.mount.as_ref().is_some_and(|m| m.is_active())
    }

    /// Releases the frame registration and global listeners and abandons any
    /// drag in progress. The next `show` starts over from the loading placeholder.
    pub fn unmount(&mut self) {
        if let Some(mut guard) = self.mount.take() {
            guard.unmount();
        }
        self.state.update(SphereEvent::CancelGesture);
    }

    /// Draws the widget at its configured size. The response covers the
    /// whole container, whichever surface was drawn.
    pub fn show(&mut self, ui: &mut Ui) -> InnerResponse<SurfaceState> {
        let size = Vec2::splat(self.state.config().container_size);
        let (rect, response) = ui.allocate_exact_size(size, Sense::click_and_drag());

        if self.mount.is_none() {
            rendering::paint_loading(ui, rect);
            self.mount = Some(MountGuard::mount(EguiHost::new(ui.ctx().clone())));
            return InnerResponse::new(SurfaceState::Loading, response);
        }

        if self.state.is_empty() {
            rendering::paint_empty(ui, rect);
            return InnerResponse::new(SurfaceState::Empty, response);
        }

        self.feed_input(ui, rect, &response);

        let frame_due = self.mount.as_mut().is_some_and(|m| m.on_frame());
        if frame_due {
            self.state.update(SphereEvent::Frame);
        }

        let world = self.state.project();
        let hovered = self.state.selection().hovered();
        let geometry = rendering::layout_items(&world, rect, self.state.config(), hovered);

        self.update_hover(&geometry, response.hover_pos());
        if response.clicked() {
            if let Some(index) = response
                .interact_pointer_pos()
                .and_then(|pos| rendering::hit_test(&geometry, pos))
            {
                self.state.update(SphereEvent::Click(index));
            }
        }

        for g in &geometry {
            if let Some(item) = self.state.items().get(g.index) {
                rendering::paint_item(ui, item, g);
            }
        }

        if self.state.is_dragging() {
            ui.ctx().set_cursor_icon(egui::CursorIcon::Grabbing);
        } else if response.hovered() {
            ui.ctx().set_cursor_icon(egui::CursorIcon::Grab);
        }

        self.show_overlay(ui.ctx());
        InnerResponse::new(SurfaceState::Interactive, response)
    }

    fn show_overlay(&mut self, ctx: &egui::Context) {
        let Some(item) = self.state.selection().selected_item().cloned() else {
            return;
        };
        match overlay::show_overlay(ctx, self.id.with("spotlight"), &item) {
            OverlayAction::Dismiss => self.state.update(SphereEvent::DismissOverlay),
            OverlayAction::OpenedLink(_) | OverlayAction::None => {}
        }
    }

    fn update_hover(&mut self, geometry: &[ItemGeometry], pointer: Option<egui::Pos2>) {
        let under_pointer = if self.state.is_dragging() {
            None
        } else {
            pointer.and_then(|pos| rendering::hit_test(geometry, pos))
        };
        let current = self.state.selection().hovered();
        if under_pointer == current {
            return;
        }
        if let Some(previous) = current {
            self.state.update(SphereEvent::HoverLeave(previous));
        }
        if let Some(index) = under_pointer {
            self.state.update(SphereEvent::HoverEnter(index));
        }
    }

    /// Translates this frame's raw input into sphere events, in order.
    ///
    /// Gestures only start inside `rect`; moves and releases are taken from
    /// the whole surface while the host has global listeners registered.
    /// Pointer moves are dropped unless a mouse drag is in progress. When
    /// egui delivers touch events, the pointer events it synthesizes from
    /// them are skipped.
    fn feed_input(&mut self, ui: &Ui, rect: Rect, response: &egui::Response) {
        let listening = self
            .mount
            .as_ref()
            .is_some_and(|m| m.listening() && m.host().is_listening());
        if !listening {
            return;
        }
        let overlay_open = self.state.selection().selected().is_some();
        let can_start = !overlay_open && response.contains_pointer();
        let events = ui.input(|i| i.events.clone());
        let has_touch = events.iter().any(|e| matches!(e, Event::Touch { .. }));

        for event in events {
            let sphere_event = match event {
                Event::PointerButton { pos, button: PointerButton::Primary, pressed: true, .. }
                    if !has_touch && can_start && rect.contains(pos) =>
                {
                    Some(SphereEvent::PointerDown(to_glam(pos)))
                }
                Event::PointerButton { button: PointerButton::Primary, pressed: false, .. } if !has_touch => {
                    Some(SphereEvent::PointerUp)
                }
                Event::PointerGone if !has_touch => Some(SphereEvent::PointerUp),
                Event::PointerMoved(pos) if !has_touch && self.state.is_dragging() => {
                    Some(SphereEvent::PointerMove(to_glam(pos)))
                }
                Event::Touch { id, phase, pos, .. } => match phase {
                    TouchPhase::Start if !overlay_open && rect.contains(pos) => {
                        Some(SphereEvent::TouchStart { id: id.0, pos: to_glam(pos) })
                    }
                    TouchPhase::Move => Some(SphereEvent::TouchMove { id: id.0, pos: to_glam(pos) }),
                    TouchPhase::End | TouchPhase::Cancel => Some(SphereEvent::TouchEnd { id: id.0 }),
                    _ => None,
                },
                _ => None,
            };
            if let Some(sphere_event) = sphere_event {
                self.state.update(sphere_event);
            }
        }
    }
}

impl Drop for SphereGallery {
    fn drop(&mut self) {
        self.unmount();
    }
}

fn to_glam(pos: egui::Pos2) -> GVec2 {
    GVec2::new(pos.x, pos.y)
}
