// Copyright 2025 Eric Jingryd (tidynest@proton.me)
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Slide-in menu state machine
//!
//! The menu panel rests just off the right edge of the UI and slides in
//! over a dimming mask. Whether it is shown is an explicit [`MenuState`]
//! set at the start of each transition, never derived from the panel's
//! animated position.
//!
//! ```text
//!            show()                       hide() / tap mask / Back
//!   Hidden ──────────▶ Shown  ───────────────────────────────▶ Hidden
//!   (x = ui_width)     (x = ui_width - menu_width)
//! ```
//!
//! Each transition cancels the in-flight tweens on the panel and the
//! mask before starting its own, so rapid toggling never runs two tweens
//! on the same property.

use crate::core::Size;

/// Duration of the slide and fade transitions, in seconds.
pub const UI_ACTION_DURATION: f32 = 0.3;

/// Mask opacity (0-255) while the menu is shown.
pub const MASK_SHOWN_OPACITY: f32 = 128.0;

/// Explicit open/closed state of the menu.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum MenuState {
    #[default]
    Hidden,
    Shown,
}

/// Easing curve of a tween.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Easing {
    Linear,
    QuadraticOut,
}

impl Easing {
    fn apply(self, t: f32) -> f32 {
        match self {
            Easing::Linear => t,
            Easing::QuadraticOut => -t * (t - 2.0),
        }
    }
}

/// A timed transition of one scalar property.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Tween {
    from: f32,
    to: f32,
    duration: f32,
    elapsed: f32,
    easing: Easing,
}

impl Tween {
    pub fn new(from: f32, to: f32, duration: f32, easing: Easing) -> Self {
        Self {
            from,
            to,
            duration,
            elapsed: 0.0,
            easing,
        }
    }

    pub fn target(&self) -> f32 {
        self.to
    }

    pub fn is_finished(&self) -> bool {
        self.elapsed >= self.duration
    }

    /// Current value of the property.
    pub fn value(&self) -> f32 {
        if self.duration <= 0.0 || self.is_finished() {
            return self.to;
        }
        let t = self.easing.apply(self.elapsed / self.duration);
        self.from + (self.to - self.from) * t
    }

    /// Advances by `dt` seconds and returns the new value.
    pub fn advance(&mut self, dt: f32) -> f32 {
        self.elapsed = (self.elapsed + dt.max(0.0)).min(self.duration);
        self.value()
    }
}

/// Panel geometry for a given UI size.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MenuGeometry {
    pub ui_size: Size,
    /// On-screen width of the panel
    pub menu_width: f32,
}

impl MenuGeometry {
    /// One third of the width in landscape, 60% in portrait.
    pub fn for_ui(ui_size: Size) -> Self {
        let menu_width = if ui_size.is_landscape() {
            ui_size.width / 3.0
        } else {
            ui_size.width * 0.6
        };
        Self { ui_size, menu_width }
    }

    /// Resting x of the hidden panel (just past the right edge).
    pub fn hidden_x(&self) -> f32 {
        self.ui_size.width
    }

    /// Resting x of the fully shown panel.
    pub fn shown_x(&self) -> f32 {
        self.ui_size.width - self.menu_width
    }
}

/// Entries of the menu list, in display order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum MenuEntry {
    Rotate,
    GlobalPref,
    NewLocalPref,
    LocalPref,
    Help,
    About,
    Exit,
}

impl MenuEntry {
    pub const ALL: [MenuEntry; 7] = [
        MenuEntry::Rotate,
        MenuEntry::GlobalPref,
        MenuEntry::NewLocalPref,
        MenuEntry::LocalPref,
        MenuEntry::Help,
        MenuEntry::About,
        MenuEntry::Exit,
    ];

    /// Caption key of the entry title.
    pub fn caption(self) -> &'static str {
        match self {
            MenuEntry::Rotate => "menu_rotate",
            MenuEntry::GlobalPref => "menu_global_pref",
            MenuEntry::NewLocalPref => "menu_new_local_pref",
            MenuEntry::LocalPref => "menu_local_pref",
            MenuEntry::Help => "menu_help",
            MenuEntry::About => "menu_about",
            MenuEntry::Exit => "menu_exit",
        }
    }
}

/// Key presses the menu reacts to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MenuKey {
    Back,
    Menu,
    Other,
}

/// The slide-in menu model.
///
/// The panel is built lazily on the first `show`; until then `hide` and
/// the geometry queries are no-ops.
#[derive(Clone, Debug, Default)]
pub struct SlideMenu {
    geometry: Option<MenuGeometry>,
    state: MenuState,
    menu_x: f32,
    mask_opacity: f32,
    position_tween: Option<Tween>,
    mask_tween: Option<Tween>,
    capture_enabled: bool,
    local_pref_exists: bool,
}

impl SlideMenu {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> MenuState {
        self.state
    }

    pub fn is_shown(&self) -> bool {
        self.state == MenuState::Shown
    }

    pub fn is_hidden(&self) -> bool {
        self.state == MenuState::Hidden
    }

    pub fn is_built(&self) -> bool {
        self.geometry.is_some()
    }

    pub fn geometry(&self) -> Option<MenuGeometry> {
        self.geometry
    }

    /// Current x of the panel's left edge.
    pub fn menu_x(&self) -> f32 {
        self.menu_x
    }

    /// Current mask opacity, 0-255.
    pub fn mask_opacity(&self) -> u8 {
        self.mask_opacity.round().clamp(0.0, 255.0) as u8
    }

    /// Whether the full-screen tap-to-dismiss region takes input.
    pub fn capture_enabled(&self) -> bool {
        self.capture_enabled
    }

    pub fn is_animating(&self) -> bool {
        self.position_tween.is_some() || self.mask_tween.is_some()
    }

    /// Updates the geometry after a resize, keeping the panel at the
    /// resting position of its current state.
    pub fn resize(&mut self, ui_size: Size) {
        if self.geometry.is_none() {
            return;
        }
        let geometry = MenuGeometry::for_ui(ui_size);
        self.geometry = Some(geometry);
        self.position_tween = None;
        self.menu_x = match self.state {
            MenuState::Shown => geometry.shown_x(),
            MenuState::Hidden => geometry.hidden_x(),
        };
    }

    /// Slides the menu in. `local_pref_exists` picks which of the two
    /// local preference entries is offered.
    ///
    /// Returns `false` (and does nothing) when already shown.
    pub fn show(&mut self, ui_size: Size, local_pref_exists: bool) -> bool {
        let geometry = match self.geometry {
            Some(geometry) => geometry,
            None => {
                let geometry = MenuGeometry::for_ui(ui_size);
                self.geometry = Some(geometry);
                self.menu_x = geometry.hidden_x();
                self.mask_opacity = 0.0;
                geometry
            }
        };

        if self.is_shown() {
            return false;
        }

        self.state = MenuState::Shown;
        self.local_pref_exists = local_pref_exists;
        self.position_tween = Some(Tween::new(
            self.menu_x,
            geometry.shown_x(),
            UI_ACTION_DURATION,
            Easing::QuadraticOut,
        ));
        self.mask_tween = Some(Tween::new(
            self.mask_opacity,
            MASK_SHOWN_OPACITY,
            UI_ACTION_DURATION,
            Easing::Linear,
        ));
        self.capture_enabled = true;

        true
    }

    /// Slides the menu out. No-op before the menu was first shown.
    pub fn hide(&mut self) {
        let Some(geometry) = self.geometry else {
            return;
        };

        self.state = MenuState::Hidden;
        self.position_tween = Some(Tween::new(
            self.menu_x,
            geometry.hidden_x(),
            UI_ACTION_DURATION,
            Easing::QuadraticOut,
        ));
        self.mask_tween = Some(Tween::new(self.mask_opacity, 0.0, UI_ACTION_DURATION, Easing::Linear));
        self.capture_enabled = false;
    }

    /// Tap on the capture region: hides the menu if shown.
    pub fn on_capture_tap(&mut self) -> bool {
        if self.is_shown() {
            self.hide();
            true
        } else {
            false
        }
    }

    /// Advances the running tweens by `dt` seconds.
    pub fn tick(&mut self, dt: f32) {
        if let Some(tween) = self.position_tween.as_mut() {
            self.menu_x = tween.advance(dt);
            if tween.is_finished() {
                self.position_tween = None;
            }
        }
        if let Some(tween) = self.mask_tween.as_mut() {
            self.mask_opacity = tween.advance(dt);
            if tween.is_finished() {
                self.mask_tween = None;
            }
        }
    }

    /// Entries currently offered: exactly one of the two local preference
    /// entries is included.
    pub fn visible_entries(&self) -> Vec<MenuEntry> {
        MenuEntry::ALL
            .into_iter()
            .filter(|entry| match entry {
                MenuEntry::LocalPref => self.local_pref_exists,
                MenuEntry::NewLocalPref => !self.local_pref_exists,
                _ => true,
            })
            .collect()
    }

    pub fn is_entry_visible(&self, entry: MenuEntry) -> bool {
        self.visible_entries().contains(&entry)
    }
}
