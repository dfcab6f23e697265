//! Localization lookup
//!
//! Every caption in the browser, the menu and the preference screens is a
//! key resolved through [`Locale`]. Unknown keys render as the key itself
//! so a missing translation is visible rather than blank.

use std::collections::HashMap;

/// Resolves caption keys to display text.
pub trait Locale {
    fn text(&self, key: &str) -> String;
}

/// Table-backed [`Locale`].
#[derive(Clone, Debug, Default)]
pub struct LocaleTable {
    strings: HashMap<String, String>,
}

impl LocaleTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds or replaces one entry.
    pub fn insert(&mut self, key: impl Into<String>, text: impl Into<String>) {
        self.strings.insert(key.into(), text.into());
    }

    pub fn len(&self) -> usize {
        self.strings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.strings.is_empty()
    }

    /// Built-in English strings for every caption the crate uses.
    pub fn english() -> Self {
        let mut table = Self::new();
        for (key, text) in ENGLISH {
            table.insert(*key, *text);
        }
        table
    }
}

impl Locale for LocaleTable {
    fn text(&self, key: &str) -> String {
        self.strings
            .get(key)
            .cloned()
            .unwrap_or_else(|| key.to_string())
    }
}

const ENGLISH: &[(&str, &str)] = &[
    // Menu
    ("menu_rotate", "Rotate Screen"),
    ("menu_global_pref", "Global Preferences"),
    ("menu_new_local_pref", "Create Local Preferences"),
    ("menu_local_pref", "Local Preferences"),
    ("menu_help", "Help"),
    ("menu_about", "About"),
    ("menu_exit", "Exit"),
    ("about_content", "A visual novel player."),
    ("sure_to_exit", "Are you sure you want to exit?"),
    ("help_content", "Pick a folder containing startup.tjs or an .xp3 archive to start a game. Recently played games are listed on the right."),
    ("launch_failed", "The game could not be started."),
    ("cancel", "Cancel"),
    ("ok", "OK"),
    ("reactive", "Reactivate"),
    ("recent_title", "Recent"),
    // Root screen
    ("preference_title", "Preferences"),
    ("preference_output_log", "Output log"),
    ("preference_show_fps", "Show FPS"),
    ("preference_select_renderer", "Renderer"),
    ("preference_opengl", "OpenGL"),
    ("preference_software", "Software"),
    ("preference_renderer_opt", "Renderer options"),
    ("preference_default_font", "Default font"),
    ("preference_mem_limit", "Memory usage limit"),
    ("preference_mem_unlimited", "Unlimited"),
    ("preference_mem_high", "High"),
    ("preference_mem_medium", "Medium"),
    ("preference_mem_low", "Low"),
    ("preference_keep_screen_alive", "Keep screen on"),
    ("preference_virtual_cursor_scale", "Virtual cursor size"),
    ("preference_menu_handler_opacity", "Menu handle opacity"),
    ("preference_remember_last_path", "Remember last path"),
    ("preference_hide_android_sys_btn", "Hide system buttons"),
    // Software renderer screen
    ("preference_soft_renderer_opt", "Software renderer options"),
    ("preference_multi_draw_thread", "Draw threads"),
    ("preference_draw_thread_auto", "Auto"),
    ("preference_draw_thread_1", "1"),
    ("preference_draw_thread_2", "2"),
    ("preference_draw_thread_3", "3"),
    ("preference_draw_thread_4", "4"),
    ("preference_draw_thread_5", "5"),
    ("preference_draw_thread_6", "6"),
    ("preference_draw_thread_7", "7"),
    ("preference_draw_thread_8", "8"),
    ("preference_software_compress_tex", "Texture compression"),
    ("preference_soft_compress_tex_none", "None"),
    ("preference_soft_compress_tex_halfline", "Half line"),
    // OpenGL renderer screen
    ("preference_opengl_renderer_opt", "OpenGL renderer options"),
    ("preference_ogl_accurate_render", "Accurate rendering"),
    ("preference_opengl_dup_target", "Duplicate render target"),
    ("preference_ogl_max_texsize", "Maximum texture size"),
    ("preference_ogl_texsize_auto", "Auto"),
    ("preference_ogl_texsize_1024", "1024"),
    ("preference_ogl_texsize_2048", "2048"),
    ("preference_ogl_texsize_4096", "4096"),
    ("preference_ogl_texsize_8192", "8192"),
    ("preference_ogl_texsize_16384", "16384"),
    ("preference_ogl_compress_tex", "Texture compression"),
    ("preference_ogl_compress_tex_none", "None"),
    ("preference_ogl_compress_tex_half", "Half"),
];
