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

//! Preference screens and the registry that builds them
//!
//! The registry is constructed once and handed to whichever form shows
//! preferences. Screens are immutable after construction; the only state
//! is in the configuration store the items bind to.

use std::rc::Rc;

use crate::config::ConfigStore;
use crate::core::Size;
use crate::locale::Locale;
use crate::prefs::descriptor::PreferenceInfo;
use crate::prefs::item::PreferenceItem;

/// A titled, ordered list of descriptors.
#[derive(Clone, Debug, PartialEq)]
pub struct PreferenceScreen {
    /// Caption key of the screen title
    pub title: String,
    pub preferences: Vec<PreferenceInfo>,
}

impl PreferenceScreen {
    pub fn new(title: &str, preferences: Vec<PreferenceInfo>) -> Self {
        Self {
            title: title.to_string(),
            preferences,
        }
    }

    pub fn len(&self) -> usize {
        self.preferences.len()
    }

    pub fn is_empty(&self) -> bool {
        self.preferences.is_empty()
    }

    /// Descriptor persisted under `key`, if any.
    pub fn find(&self, key: &str) -> Option<&PreferenceInfo> {
        self.preferences.iter().find(|info| info.key() == Some(key))
    }

    /// Persistence keys in display order (sub-screen launchers skipped).
    pub fn keys(&self) -> Vec<&str> {
        self.preferences.iter().filter_map(PreferenceInfo::key).collect()
    }

    /// Builds one bound item per descriptor, each laid out for `size`.
    pub fn create_items(&self, env: &PreferenceEnv, size: Size) -> Vec<PreferenceItem> {
        self.preferences
            .iter()
            .map(|info| info.create_item(env, size))
            .collect()
    }
}

/// The two renderer-specific option screens.
#[derive(Clone, Debug, PartialEq)]
pub struct RendererScreens {
    pub opengl: Rc<PreferenceScreen>,
    pub software: Rc<PreferenceScreen>,
}

impl RendererScreens {
    /// Store key holding the selected renderer.
    pub const RENDERER_KEY: &'static str = "renderer";

    /// Renderer in effect while the key is unset.
    pub const DEFAULT_RENDERER: &'static str = "software";

    /// Options screen for `renderer`, `None` when unrecognised.
    pub fn for_renderer(&self, renderer: &str) -> Option<Rc<PreferenceScreen>> {
        match renderer {
            "opengl" => Some(Rc::clone(&self.opengl)),
            "software" => Some(Rc::clone(&self.software)),
            _ => None,
        }
    }
}

/// Collaborators every bound item needs.
#[derive(Clone)]
pub struct PreferenceEnv {
    pub store: Rc<dyn ConfigStore>,
    pub locale: Rc<dyn Locale>,
    pub renderer_screens: Rc<RendererScreens>,
}

/// Which optional entries the root screen carries.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RegistryOptions {
    /// Global-only entries such as "remember last path"
    pub global_preference: bool,
    /// Android-only entries (system button hiding)
    pub android: bool,
}

impl RegistryOptions {
    /// Global preference screen for the current platform.
    pub fn global() -> Self {
        Self {
            global_preference: true,
            android: cfg!(target_os = "android"),
        }
    }

    /// Per-game preference screen.
    pub fn local() -> Self {
        Self {
            global_preference: false,
            android: cfg!(target_os = "android"),
        }
    }
}

impl Default for RegistryOptions {
    fn default() -> Self {
        Self::global()
    }
}

/// Owns the root screen and the renderer sub-screens.
///
/// # Example
///
/// ```
/// use vn_launcher::config::MemoryConfigStore;
/// use vn_launcher::core::Size;
/// use vn_launcher::locale::LocaleTable;
/// use vn_launcher::prefs::{PreferenceRegistry, RegistryOptions};
/// use std::rc::Rc;
///
/// let registry = PreferenceRegistry::new(RegistryOptions::global());
/// let env = registry.env(Rc::new(MemoryConfigStore::new()), Rc::new(LocaleTable::english()));
/// let items = registry.root().create_items(&env, Size::new(480.0, 64.0));
/// assert_eq!(items.len(), registry.root().len());
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct PreferenceRegistry {
    root: Rc<PreferenceScreen>,
    renderer_screens: Rc<RendererScreens>,
}

impl PreferenceRegistry {
    pub fn new(options: RegistryOptions) -> Self {
        Self {
            root: Rc::new(root_screen(options)),
            renderer_screens: Rc::new(RendererScreens {
                opengl: Rc::new(opengl_screen()),
                software: Rc::new(software_screen()),
            }),
        }
    }

    pub fn root(&self) -> &Rc<PreferenceScreen> {
        &self.root
    }

    pub fn renderer_screens(&self) -> &Rc<RendererScreens> {
        &self.renderer_screens
    }

    /// All screens, root first.
    pub fn screens(&self) -> Vec<&Rc<PreferenceScreen>> {
        vec![
            &self.root,
            &self.renderer_screens.opengl,
            &self.renderer_screens.software,
        ]
    }

    /// Screen whose title key is `title`.
    pub fn screen(&self, title: &str) -> Option<Rc<PreferenceScreen>> {
        self.screens()
            .into_iter()
            .find(|screen| screen.title == title)
            .cloned()
    }

    /// Finds the descriptor for `key` on any screen.
    pub fn find(&self, key: &str) -> Option<&PreferenceInfo> {
        self.screens().into_iter().find_map(|screen| screen.find(key))
    }

    /// Bundles the collaborators items of this registry bind to.
    pub fn env(&self, store: Rc<dyn ConfigStore>, locale: Rc<dyn Locale>) -> PreferenceEnv {
        PreferenceEnv {
            store,
            locale,
            renderer_screens: Rc::clone(&self.renderer_screens),
        }
    }
}

fn root_screen(options: RegistryOptions) -> PreferenceScreen {
    let mut preferences = vec![
        PreferenceInfo::check_box("preference_output_log", "outputlog", true),
        PreferenceInfo::check_box("preference_show_fps", "showfps", false),
        PreferenceInfo::select_list(
            "preference_select_renderer",
            RendererScreens::RENDERER_KEY,
            RendererScreens::DEFAULT_RENDERER,
            &[("preference_opengl", "opengl"), ("preference_software", "software")],
        ),
        PreferenceInfo::sub_pref("preference_renderer_opt"),
        PreferenceInfo::select_file("preference_default_font", "default_font", ""),
        PreferenceInfo::select_list(
            "preference_mem_limit",
            "memusage",
            "unlimited",
            &[
                ("preference_mem_unlimited", "unlimited"),
                ("preference_mem_high", "high"),
                ("preference_mem_medium", "medium"),
                ("preference_mem_low", "low"),
            ],
        ),
        PreferenceInfo::check_box("preference_keep_screen_alive", "keep_screen_alive", true),
        PreferenceInfo::slider_icon("preference_virtual_cursor_scale", "vcursor_scale", 0.5),
        PreferenceInfo::slider_text("preference_menu_handler_opacity", "menu_handler_opa", 0.15),
    ];

    if options.global_preference {
        preferences.push(PreferenceInfo::check_box(
            "preference_remember_last_path",
            "remember_last_path",
            true,
        ));
        if options.android {
            preferences.push(PreferenceInfo::check_box(
                "preference_hide_android_sys_btn",
                "hide_android_sys_btn",
                false,
            ));
        }
    }

    PreferenceScreen::new("preference_title", preferences)
}

fn software_screen() -> PreferenceScreen {
    PreferenceScreen::new(
        "preference_soft_renderer_opt",
        vec![
            PreferenceInfo::select_list(
                "preference_multi_draw_thread",
                "software_draw_thread",
                "0",
                &[
                    ("preference_draw_thread_auto", "0"),
                    ("preference_draw_thread_1", "1"),
                    ("preference_draw_thread_2", "2"),
                    ("preference_draw_thread_3", "3"),
                    ("preference_draw_thread_4", "4"),
                    ("preference_draw_thread_5", "5"),
                    ("preference_draw_thread_6", "6"),
                    ("preference_draw_thread_7", "7"),
                    ("preference_draw_thread_8", "8"),
                ],
            ),
            PreferenceInfo::select_list(
                "preference_software_compress_tex",
                "software_compress_tex",
                "none",
                &[
                    ("preference_soft_compress_tex_none", "none"),
                    ("preference_soft_compress_tex_halfline", "halfline"),
                ],
            ),
        ],
    )
}

fn opengl_screen() -> PreferenceScreen {
    PreferenceScreen::new(
        "preference_opengl_renderer_opt",
        vec![
            PreferenceInfo::check_box("preference_ogl_accurate_render", "ogl_accurate_render", false),
            PreferenceInfo::check_box("preference_opengl_dup_target", "ogl_dup_target", true),
            PreferenceInfo::select_list(
                "preference_ogl_max_texsize",
                "ogl_max_texsize",
                "0",
                &[
                    ("preference_ogl_texsize_auto", "0"),
                    ("preference_ogl_texsize_1024", "1024"),
                    ("preference_ogl_texsize_2048", "2048"),
                    ("preference_ogl_texsize_4096", "4096"),
                    ("preference_ogl_texsize_8192", "8192"),
                    ("preference_ogl_texsize_16384", "16384"),
                ],
            ),
            PreferenceInfo::select_list(
                "preference_ogl_compress_tex",
                "ogl_compress_tex",
                "none",
                &[
                    ("preference_ogl_compress_tex_none", "none"),
                    ("preference_ogl_compress_tex_half", "half"),
                ],
            ),
        ],
    )
}
