//! MVC Controller - Mediates between the model and the file selector view
//!
//! # Responsibilities
//!
//! - Restore the browsed directory from the recent-path history
//! - List directories and react to cell clicks
//! - Hand launchable paths to the [`Launcher`] and record them on success
//! - Present the history as display cells
//! - Drive the slide-in menu and map its entries to view actions
//!
//! # Architecture
//!
//! The Controller holds the model collaborators but doesn't know about
//! GTK4 widgets, so everything here runs headless in tests and the CLI.

use std::cell::{Cell, RefCell};
use std::path::{Path, PathBuf};
use std::rc::Rc;
use tracing::{debug, info, warn};

use crate::config::{self, ConfigError, ConfigStore, XmlConfigStore};
use crate::core::{
    has_launch_script, is_archive_file, is_game_folder, read_listing, split_path, FileInfo,
    FileSystem, Size, StdFileSystem,
};
use crate::history::HistoryStore;
use crate::locale::Locale;
use crate::ui::launcher::Launcher;
use crate::ui::menu::{MenuEntry, MenuKey, SlideMenu};

/// Store key controlling whether launched paths are recorded.
pub const REMEMBER_LAST_PATH_KEY: &str = "remember_last_path";

/// Result of asking the controller to start a game.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum StartupOutcome {
    /// First launch: show the help form, then call `do_startup`
    ShowTipsFirst(PathBuf),
    /// The launcher accepted the path
    Launched(PathBuf),
    /// The launcher refused or failed
    LaunchFailed(PathBuf),
    /// Neither a game folder nor an archive file
    Rejected(PathBuf),
}

/// What a click on a listing cell did.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ClickOutcome {
    /// Moved into a directory
    Navigated(PathBuf),
    /// Attempted to start a game
    Startup(StartupOutcome),
    /// Plain file or stale index
    Ignored,
}

/// Action the view performs after a menu entry was activated.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum MenuAction {
    RotateScreen,
    OpenGlobalPreference,
    /// A local preference file exists (or was just created) in this directory
    OpenLocalPreference(PathBuf),
    ShowHelp,
    ShowAbout(String),
    ConfirmExit(String),
}

/// One row of the recent-path list.
///
/// `/games/sub/data.xp3` is split into `prefix = "/games/"`,
/// `dir_name = "sub"`, `file_name = "/data.xp3"`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HistoryCell {
    pub full_path: String,
    pub prefix: String,
    pub dir_name: String,
    pub file_name: String,
    /// Directory holding the entry; the jump button lists it
    pub game_dir: PathBuf,
    /// Game directory, when it carries a local preference file
    pub config_dir: Option<PathBuf>,
}

/// MVC Controller for the file selector form
///
/// Holds the history, the preference store and the launcher, and keeps
/// the navigation state the view renders from.
pub struct FileSelectorController {
    fs: Rc<dyn FileSystem>,
    store: Rc<dyn ConfigStore>,
    locale: Rc<dyn Locale>,
    launcher: Rc<dyn Launcher>,
    history: Rc<RefCell<HistoryStore>>,
    /// Root directories offered as shortcuts; the first is the fallback
    roots: Vec<PathBuf>,
    current_path: RefCell<PathBuf>,
    current_list: RefCell<Vec<FileInfo>>,
    menu: RefCell<SlideMenu>,
    ui_size: Cell<Size>,
}

impl FileSelectorController {
    /// Creates a controller over the real filesystem.
    ///
    /// # Arguments
    ///
    /// * `history` - Loaded recent-path history
    /// * `store` - Global preference store
    /// * `locale` - Caption lookup for menu texts
    /// * `launcher` - Engine entry point
    ///
    /// # Example
    ///
    /// ```no_run
    /// use vn_launcher::config::MemoryConfigStore;
    /// use vn_launcher::history::HistoryStore;
    /// use vn_launcher::locale::LocaleTable;
    /// use vn_launcher::ui::{DryRunLauncher, FileSelectorController};
    /// use std::rc::Rc;
    ///
    /// let controller = FileSelectorController::new(
    ///     HistoryStore::load("/tmp/recentpath.xml"),
    ///     Rc::new(MemoryConfigStore::new()),
    ///     Rc::new(LocaleTable::english()),
    ///     Rc::new(DryRunLauncher),
    /// );
    /// let dir = controller.show();
    /// println!("Browsing {}", dir.display());
    /// ```
    pub fn new(
        history: HistoryStore,
        store: Rc<dyn ConfigStore>,
        locale: Rc<dyn Locale>,
        launcher: Rc<dyn Launcher>,
    ) -> Self {
        Self {
            fs: Rc::new(StdFileSystem),
            store,
            locale,
            launcher,
            history: Rc::new(RefCell::new(history)),
            roots: default_roots(),
            current_path: RefCell::new(PathBuf::new()),
            current_list: RefCell::new(Vec::new()),
            menu: RefCell::new(SlideMenu::new()),
            ui_size: Cell::new(Size::ZERO),
        }
    }

    /// Replaces the filesystem collaborator.
    pub fn with_file_system(mut self, fs: Rc<dyn FileSystem>) -> Self {
        self.fs = fs;
        self
    }

    /// Replaces the root directories. An empty list keeps the defaults.
    pub fn with_roots(mut self, roots: Vec<PathBuf>) -> Self {
        if !roots.is_empty() {
            self.roots = roots;
        }
        self
    }

    /// Shared handle to the history, for views that render it directly.
    pub fn history(&self) -> Rc<RefCell<HistoryStore>> {
        Rc::clone(&self.history)
    }

    pub fn roots(&self) -> &[PathBuf] {
        &self.roots
    }

    pub fn current_path(&self) -> PathBuf {
        self.current_path.borrow().clone()
    }

    /// Listing of the current directory.
    pub fn current_list(&self) -> Vec<FileInfo> {
        self.current_list.borrow().clone()
    }

    pub fn is_first_launch(&self) -> bool {
        self.history.borrow().is_first_launch()
    }

    /// Prunes the history and lists the directory to start browsing in.
    ///
    /// # Returns
    ///
    /// The directory now listed.
    pub fn show(&self) -> PathBuf {
        let most_recent = {
            let mut history = self.history.borrow_mut();
            let entries = history.list(self.fs.as_ref());
            if history.allows_navigation_restore() {
                entries.into_iter().next()
            } else {
                None
            }
        };

        let dir = self.restore_dir(most_recent.as_deref());
        self.list_dir(&dir);
        dir
    }

    /// Nearest existing ancestor of the most recent path, or the first
    /// root once the walk reaches the filesystem root.
    fn restore_dir(&self, most_recent: Option<&str>) -> PathBuf {
        let fallback = self.default_root();
        let Some(most_recent) = most_recent else {
            return fallback;
        };

        let mut last = PathBuf::from(most_recent);
        loop {
            let (parent, leaf) = split_path(&last);
            if leaf.is_empty() || parent.as_os_str().is_empty() || parent.parent().is_none() {
                return fallback;
            }
            last = parent;
            if self.fs.is_dir(&last) {
                debug!(dir = %last.display(), "restored navigation from history");
                return last;
            }
        }
    }

    fn default_root(&self) -> PathBuf {
        self.roots
            .first()
            .cloned()
            .unwrap_or_else(|| PathBuf::from("/"))
    }

    /// Lists `path`, directories first, hidden entries skipped.
    pub fn list_dir(&self, path: &Path) -> Vec<FileInfo> {
        let list = read_listing(self.fs.as_ref(), path);
        debug!(dir = %path.display(), entries = list.len(), "listed directory");
        *self.current_path.borrow_mut() = path.to_path_buf();
        *self.current_list.borrow_mut() = list.clone();
        list
    }

    /// Moves one level up. Returns `false` at the filesystem root.
    pub fn navigate_up(&self) -> bool {
        let parent = self.current_path.borrow().parent().map(Path::to_path_buf);
        match parent {
            Some(parent) => {
                self.list_dir(&parent);
                true
            }
            None => false,
        }
    }

    /// Handles a click on listing cell `index`.
    ///
    /// Directories are entered; a directory carrying the launch script is
    /// started as well. Archive files are started. Anything else is
    /// ignored.
    pub fn on_cell_clicked(&self, index: usize) -> ClickOutcome {
        let Some(info) = self.current_list.borrow().get(index).cloned() else {
            return ClickOutcome::Ignored;
        };

        if info.is_dir {
            self.list_dir(&info.full_path);
            if has_launch_script(self.fs.as_ref(), &info.full_path) {
                return ClickOutcome::Startup(self.startup(&info.full_path));
            }
            return ClickOutcome::Navigated(info.full_path);
        }

        if is_archive_file(self.fs.as_ref(), &info.full_path) {
            return ClickOutcome::Startup(self.startup(&info.full_path));
        }

        ClickOutcome::Ignored
    }

    /// Whether `path` is a game folder or an archive file.
    pub fn can_launch(&self, path: &Path) -> bool {
        if self.fs.is_dir(path) {
            is_game_folder(self.fs.as_ref(), path)
        } else {
            is_archive_file(self.fs.as_ref(), path)
        }
    }

    /// Starts `path`, or asks the view to show tips first on first launch.
    pub fn startup(&self, path: &Path) -> StartupOutcome {
        if !self.can_launch(path) {
            debug!(path = %path.display(), "not a launchable path");
            return StartupOutcome::Rejected(path.to_path_buf());
        }
        if self.is_first_launch() {
            return StartupOutcome::ShowTipsFirst(path.to_path_buf());
        }
        self.do_startup(path)
    }

    /// Hands `path` to the launcher and records it on success.
    pub fn do_startup(&self, path: &Path) -> StartupOutcome {
        if !self.launcher.startup_from(path) {
            warn!(path = %path.display(), "launcher refused path");
            return StartupOutcome::LaunchFailed(path.to_path_buf());
        }

        info!(path = %path.display(), "game started");
        if self.store.get_bool(REMEMBER_LAST_PATH_KEY, true) {
            self.history
                .borrow_mut()
                .add(path.to_string_lossy().into_owned());
        }
        StartupOutcome::Launched(path.to_path_buf())
    }

    /// Pruned history as display cells, most recent first.
    pub fn history_cells(&self) -> Vec<HistoryCell> {
        let entries = self.history.borrow_mut().list(self.fs.as_ref());
        entries
            .into_iter()
            .map(|full_path| {
                let (game_dir, leaf) = split_path(Path::new(&full_path));
                let (parent, dir_name) = split_path(&game_dir);
                let mut prefix = parent.to_string_lossy().into_owned();
                if !prefix.ends_with('/') {
                    prefix.push('/');
                }
                let config_dir = config::has_local_preference(self.fs.as_ref(), &game_dir)
                    .then(|| game_dir.clone());

                HistoryCell {
                    prefix,
                    dir_name,
                    file_name: format!("/{}", leaf),
                    game_dir,
                    config_dir,
                    full_path,
                }
            })
            .collect()
    }

    /// Lists the directory holding history entry `full_path`.
    ///
    /// Returns `false` without navigating when that directory is gone.
    pub fn jump_to_history_dir(&self, full_path: &str) -> bool {
        let (game_dir, _) = split_path(Path::new(full_path));
        if !self.fs.is_dir(&game_dir) {
            debug!(dir = %game_dir.display(), "history directory no longer exists");
            return false;
        }
        self.list_dir(&game_dir);
        true
    }

    pub fn remove_history(&self, path: &str) {
        self.history.borrow_mut().remove(path);
    }

    /// Directory of the most recent entry followed by the roots.
    pub fn shortcut_dirs(&self) -> Vec<PathBuf> {
        let mut dirs = Vec::new();
        if let Some(front) = self.history.borrow().front() {
            let (parent, _) = split_path(Path::new(front));
            if self.fs.is_dir(&parent) {
                dirs.push(parent);
            }
        }
        for root in &self.roots {
            if !dirs.contains(root) {
                dirs.push(root.clone());
            }
        }
        dirs
    }

    pub fn has_local_preference_here(&self) -> bool {
        config::has_local_preference(self.fs.as_ref(), &self.current_path.borrow())
    }

    /// Creates the local preference file in the current directory.
    pub fn create_local_preference_here(&self) -> Result<XmlConfigStore, ConfigError> {
        let dir = self.current_path();
        config::create_local_preference_at(&dir)
    }

    /// Opens the local preference file in `dir`.
    pub fn open_local_preference_at(&self, dir: &Path) -> Result<XmlConfigStore, ConfigError> {
        config::open_local_preference(dir)
    }

    /// Records the UI size the menu lays itself out for.
    pub fn set_ui_size(&self, size: Size) {
        self.ui_size.set(size);
        self.menu.borrow_mut().resize(size);
    }

    /// Read access to the menu model.
    pub fn with_menu<R>(&self, f: impl FnOnce(&SlideMenu) -> R) -> R {
        f(&self.menu.borrow())
    }

    /// Slides the menu in, offering the local preference entry that fits
    /// the current directory. Returns `false` when already shown.
    pub fn show_menu(&self) -> bool {
        let local = self.has_local_preference_here();
        self.menu.borrow_mut().show(self.ui_size.get(), local)
    }

    pub fn hide_menu(&self) {
        self.menu.borrow_mut().hide();
    }

    pub fn tick_menu(&self, dt: f32) {
        self.menu.borrow_mut().tick(dt);
    }

    /// Tap on the dimmed area around the menu.
    pub fn on_menu_capture_tap(&self) -> bool {
        self.menu.borrow_mut().on_capture_tap()
    }

    /// Back hides a shown menu, Menu shows a hidden one.
    ///
    /// # Returns
    ///
    /// `true` when the key was consumed.
    pub fn on_key_pressed(&self, key: MenuKey) -> bool {
        match key {
            MenuKey::Back if self.menu.borrow().is_shown() => {
                self.hide_menu();
                true
            }
            MenuKey::Menu if self.menu.borrow().is_hidden() => self.show_menu(),
            _ => false,
        }
    }

    /// Maps an activated menu entry to the view action.
    ///
    /// `NewLocalPref` creates the file in the current directory first and
    /// hides the menu; it yields `None` when creation failed.
    pub fn activate_menu_entry(&self, entry: MenuEntry) -> Option<MenuAction> {
        match entry {
            MenuEntry::Rotate => Some(MenuAction::RotateScreen),
            MenuEntry::GlobalPref => Some(MenuAction::OpenGlobalPreference),
            MenuEntry::NewLocalPref => match self.create_local_preference_here() {
                Ok(_) => {
                    self.hide_menu();
                    Some(MenuAction::OpenLocalPreference(self.current_path()))
                }
                Err(e) => {
                    warn!(dir = %self.current_path().display(), error = %e, "failed to create local preference");
                    None
                }
            },
            MenuEntry::LocalPref => Some(MenuAction::OpenLocalPreference(self.current_path())),
            MenuEntry::Help => Some(MenuAction::ShowHelp),
            MenuEntry::About => Some(MenuAction::ShowAbout(self.about_text())),
            MenuEntry::Exit => Some(MenuAction::ConfirmExit(self.locale.text("sure_to_exit"))),
        }
    }

    /// Version line followed by the localized about text.
    pub fn about_text(&self) -> String {
        format!(
            "Version {}\n{}",
            env!("CARGO_PKG_VERSION"),
            self.locale.text("about_content")
        )
    }
}

/// The home directory, or `/` when it cannot be determined.
pub fn default_roots() -> Vec<PathBuf> {
    vec![dirs::home_dir().unwrap_or_else(|| PathBuf::from("/"))]
}
