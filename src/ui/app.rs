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

//! GTK4 Application wrapper
//!
//! This module sets up the GTK4 application lifecycle and creates
//! the file selector window. All decisions go through the
//! [`FileSelectorController`]; this file only wires widgets to it.
//!
//! # Architecture
//!
//! ```text
//! App (GTK4 Application)
//!   ├─ Header: up button, current path, menu button
//!   ├─ Overlay
//!   │    ├─ Paned: FileList | HistoryList
//!   │    └─ MenuPanel (mask + slide-in entries, driven by a tick callback)
//!   └─ Preference windows opened from the menu or a history row
//! ```

use gtk4::prelude::*;
use gtk4::{
    gdk, Application, ApplicationWindow, Box as GtkBox, Button, CssProvider,
    EventControllerKey, HeaderBar, Label, Orientation, Overlay, Paned, Window,
};
use std::cell::Cell;
use std::rc::Rc;
use tracing::{debug, info, warn};

use crate::config::ConfigStore;
use crate::core::Size;
use crate::locale::Locale;
use crate::prefs::{PreferenceRegistry, RegistryOptions};
use crate::ui::components::{show_preference_window, FileList, HistoryList, MenuPanel};
use crate::ui::controller::{ClickOutcome, FileSelectorController, MenuAction, StartupOutcome};
use crate::ui::menu::{MenuEntry, MenuKey};

const APPLICATION_ID: &str = "io.github.tidynest.vn-launcher";

/// Everything the window callbacks share
struct AppState {
    controller: Rc<FileSelectorController>,
    global_store: Rc<dyn ConfigStore>,
    locale: Rc<dyn Locale>,
    global_registry: PreferenceRegistry,
    local_registry: PreferenceRegistry,
}

/// GTK4 Application for the file selector
pub struct App {
    /// GTK4 Application instance
    app: Application,
    state: Rc<AppState>,
}

impl App {
    /// Creates the application around an already configured controller
    ///
    /// # Arguments
    ///
    /// * `controller` - File selector controller (history, launcher, roots)
    /// * `global_store` - Store backing the global preference screen
    /// * `locale` - Caption lookup
    pub fn new(
        controller: Rc<FileSelectorController>,
        global_store: Rc<dyn ConfigStore>,
        locale: Rc<dyn Locale>,
    ) -> Self {
        let app = Application::builder().application_id(APPLICATION_ID).build();

        let state = Rc::new(AppState {
            controller,
            global_store,
            locale,
            global_registry: PreferenceRegistry::new(RegistryOptions::global()),
            local_registry: PreferenceRegistry::new(RegistryOptions::local()),
        });

        Self { app, state }
    }

    /// Runs the GTK4 main loop. Blocks until the application exits.
    pub fn run(self) {
        let state = Rc::clone(&self.state);

        self.app.connect_activate(move |app| {
            Self::build_ui(app, Rc::clone(&state));
        });

        self.app.run_with_args::<&str>(&[]);
    }

    /// Applies `style.css` to the default display
    fn load_css() {
        let provider = CssProvider::new();
        provider.load_from_string(include_str!("style.css"));

        match gdk::Display::default() {
            Some(display) => gtk4::style_context_add_provider_for_display(
                &display,
                &provider,
                gtk4::STYLE_PROVIDER_PRIORITY_APPLICATION,
            ),
            None => warn!("no display available for styling"),
        }
    }

    fn build_ui(app: &Application, state: Rc<AppState>) {
        Self::load_css();

        let controller = Rc::clone(&state.controller);
        let start_dir = controller.show();
        info!(dir = %start_dir.display(), "file selector opened");

        let window = ApplicationWindow::builder()
            .application(app)
            .title("VN Launcher")
            .default_width(1000)
            .default_height(700)
            .build();

        // Header
        let header = HeaderBar::new();
        let up_button = Button::from_icon_name("go-up-symbolic");
        let menu_button = Button::from_icon_name("open-menu-symbolic");
        let path_label = Label::builder()
            .label(start_dir.to_string_lossy().as_ref())
            .ellipsize(gtk4::pango::EllipsizeMode::Start)
            .build();
        header.pack_start(&up_button);
        header.pack_end(&menu_button);
        header.set_title_widget(Some(&path_label));
        window.set_titlebar(Some(&header));

        // Listing and history side by side
        let file_list = Rc::new(FileList::new(Rc::clone(&controller)));
        let history_list = Rc::new(HistoryList::new(Rc::clone(&controller)));

        let history_box = GtkBox::new(Orientation::Vertical, 4);
        let history_title = Label::builder()
            .label(state.locale.text("recent_title"))
            .css_classes(["title-4"])
            .margin_top(6)
            .build();
        history_box.append(&history_title);
        history_box.append(history_list.widget());

        let paned = Paned::new(Orientation::Horizontal);
        paned.set_start_child(Some(file_list.widget()));
        paned.set_end_child(Some(&history_box));
        paned.set_position(600);

        // Menu over everything
        let menu_panel = Rc::new(MenuPanel::new(Rc::clone(&state.locale)));
        let overlay = Overlay::new();
        overlay.set_child(Some(&paned));
        overlay.add_overlay(menu_panel.mask());
        overlay.add_overlay(menu_panel.panel());
        window.set_child(Some(&overlay));

        let refresh_listing: Rc<dyn Fn()> = {
            let file_list = Rc::clone(&file_list);
            let controller = Rc::clone(&controller);
            let path_label = path_label.clone();
            Rc::new(move || {
                file_list.refresh();
                path_label.set_text(&controller.current_path().to_string_lossy());
            })
        };
        let refresh_history: Rc<dyn Fn()> = {
            let history_list = Rc::clone(&history_list);
            Rc::new(move || history_list.refresh())
        };

        // Local preference button on history rows
        {
            let window = window.clone();
            let state = Rc::clone(&state);
            history_list.connect_open_config(move |dir| {
                Self::handle_menu_action(&window, &state, MenuAction::OpenLocalPreference(dir));
            });
        }
        {
            let refresh_listing = Rc::clone(&refresh_listing);
            history_list.connect_jump(move || refresh_listing());
        }

        refresh_listing();
        refresh_history();

        // Listing clicks
        {
            let window = window.clone();
            let state = Rc::clone(&state);
            let refresh_listing = Rc::clone(&refresh_listing);
            let refresh_history = Rc::clone(&refresh_history);
            file_list.list_box().connect_row_activated(move |_, row| {
                let outcome = state.controller.on_cell_clicked(row.index() as usize);
                refresh_listing();
                if let ClickOutcome::Startup(outcome) = outcome {
                    Self::handle_startup(&window, &state, outcome, Rc::clone(&refresh_history));
                }
            });
        }

        // History clicks
        {
            let window = window.clone();
            let state = Rc::clone(&state);
            let history = Rc::clone(&history_list);
            let refresh_history = Rc::clone(&refresh_history);
            history_list.list_box().connect_row_activated(move |_, row| {
                let Some(path) = history.path_at_index(row.index() as usize) else {
                    return;
                };
                let outcome = state.controller.startup(&path);
                Self::handle_startup(&window, &state, outcome, Rc::clone(&refresh_history));
            });
        }

        {
            let controller = Rc::clone(&controller);
            let refresh_listing = Rc::clone(&refresh_listing);
            up_button.connect_clicked(move |_| {
                if controller.navigate_up() {
                    refresh_listing();
                }
            });
        }

        // Menu
        let on_entry: Rc<dyn Fn(MenuEntry)> = {
            let window = window.clone();
            let state = Rc::clone(&state);
            Rc::new(move |entry| {
                if let Some(action) = state.controller.activate_menu_entry(entry) {
                    Self::handle_menu_action(&window, &state, action);
                }
            })
        };
        let open_menu: Rc<dyn Fn() -> bool> = {
            let controller = Rc::clone(&controller);
            let menu_panel = Rc::clone(&menu_panel);
            Rc::new(move || {
                if !controller.show_menu() {
                    return false;
                }
                let entries = controller.with_menu(|menu| menu.visible_entries());
                menu_panel.set_entries(&entries, Rc::clone(&on_entry));
                true
            })
        };

        {
            let open_menu = Rc::clone(&open_menu);
            menu_button.connect_clicked(move |_| {
                open_menu();
            });
        }
        {
            let controller = Rc::clone(&controller);
            menu_panel.connect_mask_tap(move || {
                controller.on_menu_capture_tap();
            });
        }

        let key_controller = EventControllerKey::new();
        {
            let controller = Rc::clone(&controller);
            key_controller.connect_key_pressed(move |_, key, _, _| {
                let key = match key {
                    gdk::Key::Escape => MenuKey::Back,
                    gdk::Key::Menu | gdk::Key::F10 => MenuKey::Menu,
                    _ => MenuKey::Other,
                };
                let consumed = if key == MenuKey::Menu {
                    controller.with_menu(|menu| menu.is_hidden()) && open_menu()
                } else {
                    controller.on_key_pressed(key)
                };
                if consumed {
                    glib::Propagation::Stop
                } else {
                    glib::Propagation::Proceed
                }
            });
        }
        window.add_controller(key_controller);

        // Drive the menu animation from the frame clock
        let last_frame = Cell::new(0_i64);
        let ui_size = Cell::new(Size::ZERO);
        {
            let controller = Rc::clone(&controller);
            let menu_panel = Rc::clone(&menu_panel);
            window.add_tick_callback(move |widget, clock| {
                let now = clock.frame_time();
                let last = last_frame.replace(now);
                let dt = if last == 0 { 0.0 } else { (now - last) as f32 / 1_000_000.0 };

                let size = Size::new(widget.width() as f32, widget.height() as f32);
                if size != ui_size.get() {
                    ui_size.set(size);
                    controller.set_ui_size(size);
                }

                controller.tick_menu(dt);
                controller.with_menu(|menu| menu_panel.sync(menu));
                glib::ControlFlow::Continue
            });
        }

        window.present();
    }

    fn handle_startup(
        window: &ApplicationWindow,
        state: &Rc<AppState>,
        outcome: StartupOutcome,
        on_launched: Rc<dyn Fn()>,
    ) {
        match outcome {
            StartupOutcome::ShowTipsFirst(path) => {
                let dialog = gtk4::AlertDialog::builder()
                    .modal(true)
                    .message(state.locale.text("menu_help"))
                    .detail(state.locale.text("help_content"))
                    .buttons(vec![state.locale.text("ok")])
                    .build();

                let window_for_inner = window.clone();
                let state = Rc::clone(state);
                dialog.choose(Some(window), None::<&gtk4::gio::Cancellable>, move |_| {
                    let outcome = state.controller.do_startup(&path);
                    Self::handle_startup(&window_for_inner, &state, outcome, on_launched);
                });
            }
            StartupOutcome::Launched(path) => {
                debug!(path = %path.display(), "launch handed to engine");
                on_launched();
            }
            StartupOutcome::LaunchFailed(path) => {
                Self::show_message(
                    window,
                    &state.locale.text("launch_failed"),
                    &path.to_string_lossy(),
                );
            }
            StartupOutcome::Rejected(path) => {
                debug!(path = %path.display(), "ignored non-game selection");
            }
        }
    }

    fn handle_menu_action(window: &ApplicationWindow, state: &Rc<AppState>, action: MenuAction) {
        let parent = window.upcast_ref::<Window>();

        match action {
            MenuAction::RotateScreen => {
                let (width, height) = (window.width(), window.height());
                window.set_default_size(height, width);
            }
            MenuAction::OpenGlobalPreference => {
                let env = state
                    .global_registry
                    .env(Rc::clone(&state.global_store), Rc::clone(&state.locale));
                show_preference_window(Some(parent), state.global_registry.root(), &env);
            }
            MenuAction::OpenLocalPreference(dir) => {
                match state.controller.open_local_preference_at(&dir) {
                    Ok(store) => {
                        let env = state
                            .local_registry
                            .env(Rc::new(store), Rc::clone(&state.locale));
                        show_preference_window(Some(parent), state.local_registry.root(), &env);
                    }
                    Err(e) => {
                        warn!(dir = %dir.display(), error = %e, "failed to open local preference");
                        Self::show_message(window, &state.locale.text("menu_local_pref"), &e.to_string());
                    }
                }
            }
            MenuAction::ShowHelp => {
                Self::show_message(window, &state.locale.text("menu_help"), &state.locale.text("help_content"));
            }
            MenuAction::ShowAbout(text) => {
                Self::show_message(window, &state.locale.text("menu_about"), &text);
            }
            MenuAction::ConfirmExit(text) => {
                let dialog = gtk4::AlertDialog::builder()
                    .modal(true)
                    .message(text)
                    .buttons(vec![state.locale.text("cancel"), state.locale.text("ok")])
                    .cancel_button(0)
                    .default_button(1)
                    .build();

                let app = window.application();
                dialog.choose(Some(window), None::<&gtk4::gio::Cancellable>, move |response| {
                    if let (Ok(1), Some(app)) = (response, app) {
                        app.quit();
                    }
                });
            }
        }
    }

    fn show_message(window: &ApplicationWindow, message: &str, detail: &str) {
        let dialog = gtk4::AlertDialog::builder()
            .modal(true)
            .message(message)
            .detail(detail)
            .buttons(vec!["OK"])
            .build();
        dialog.show(Some(window));
    }
}
