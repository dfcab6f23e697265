//! CLI entry point for vn-launcher
//!
//! Provides command-line access to the recent-path history, game folder
//! checks, preference screens and launching, plus the GTK4 browser when
//! built with the `gui` feature.

use anyhow::Context;
use clap::{ArgAction, Parser, Subcommand};
use colored::*;
use std::path::{Path, PathBuf};
use std::rc::Rc;
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::EnvFilter;

use vn_launcher::config::{self, ConfigStore, XmlConfigStore, GLOBAL_PREFERENCE_FILE};
use vn_launcher::core::{is_archive_file, is_game_folder, FileSystem, StdFileSystem};
use vn_launcher::history::HistoryStore;
use vn_launcher::locale::{Locale, LocaleTable};
use vn_launcher::prefs::{
    PreferenceEnv, PreferenceRegistry, PreferenceScreen, RegistryOptions, RendererScreens,
};
use vn_launcher::ui::{
    DryRunLauncher, FileSelectorController, Launcher, ProcessLauncher, StartupOutcome,
};

#[derive(Parser)]
#[command(name = "vn-launcher")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Preference directory (defaults to the platform config dir)
    #[arg(long, global = true)]
    prefs_dir: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show or edit the recent-path history
    History {
        #[command(subcommand)]
        action: Option<HistoryAction>,
    },

    /// Check whether a folder or archive can be launched
    Check {
        /// Folder or archive to check
        path: PathBuf,
    },

    /// List a directory the way the browser shows it
    Browse {
        /// Directory to list (defaults to where the browser would start)
        dir: Option<PathBuf>,
    },

    /// Show preference screens with their current values
    Prefs {
        /// Screen title key (defaults to the root screen)
        #[arg(short, long)]
        screen: Option<String>,

        /// Game folder whose local preference file to show
        #[arg(short, long)]
        local: Option<PathBuf>,
    },

    /// Set a preference value
    Set {
        /// Preference key, e.g. "renderer"
        key: String,

        /// New value
        value: String,

        /// Game folder whose local preference file to edit
        #[arg(short, long)]
        local: Option<PathBuf>,
    },

    /// Show the options screen for the configured renderer
    RendererOptions,

    /// Create a local preference file in a game folder
    CreateLocal {
        /// Game folder
        dir: PathBuf,
    },

    /// Start a game and record it in the history
    Launch {
        /// Game folder or archive
        path: PathBuf,

        /// Engine executable (dry run when omitted)
        #[arg(short, long)]
        engine: Option<PathBuf>,
    },

    /// Launch the GTK4 browser
    Gui {
        /// Engine executable (dry run when omitted)
        #[arg(short, long)]
        engine: Option<PathBuf>,
    },
}

#[derive(Subcommand)]
enum HistoryAction {
    /// List entries, most recent first (stale entries are pruned)
    List,
    /// Record a path as most recent
    Add { path: PathBuf },
    /// Remove a path
    Remove { path: PathBuf },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let prefs_dir = match &cli.prefs_dir {
        Some(dir) => Some(expand(dir)?),
        None => None,
    };
    let prefs_dir = config::preference_dir(prefs_dir).context("Failed to resolve preference directory")?;
    let locale: Rc<dyn Locale> = Rc::new(LocaleTable::english());

    match cli.command {
        Commands::History { action } => history_command(&prefs_dir, action.unwrap_or(HistoryAction::List))?,
        Commands::Check { path } => check_path(&expand(&path)?),
        Commands::Browse { dir } => browse(&prefs_dir, dir, locale)?,
        Commands::Prefs { screen, local } => show_prefs(&prefs_dir, screen, local, locale)?,
        Commands::Set { key, value, local } => set_pref(&prefs_dir, &key, &value, local, locale)?,
        Commands::RendererOptions => renderer_options(&prefs_dir, locale),
        Commands::CreateLocal { dir } => {
            let dir = expand(&dir)?;
            let store = config::create_local_preference_at(&dir)
                .with_context(|| format!("Failed to create local preference in {}", dir.display()))?;
            println!("{} Local preference: {}", "✓".green(), store.path().display());
        }
        Commands::Launch { path, engine } => launch(&prefs_dir, &expand(&path)?, engine, locale)?,
        Commands::Gui { engine } => run_gui(&prefs_dir, engine, locale)?,
    }

    Ok(())
}

/// Logs to stderr; `RUST_LOG` overrides the `-v` level.
fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => LevelFilter::WARN,
        1 => LevelFilter::INFO,
        2 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    };
    let filter = EnvFilter::builder()
        .with_default_directive(level.into())
        .from_env_lossy();

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Expands a leading `~` in a user-supplied path
fn expand(path: &Path) -> anyhow::Result<PathBuf> {
    let raw = path
        .to_str()
        .ok_or_else(|| anyhow::anyhow!("Invalid path encoding"))?;
    Ok(PathBuf::from(shellexpand::tilde(raw).as_ref()))
}

fn global_store(prefs_dir: &Path) -> Rc<XmlConfigStore> {
    Rc::new(XmlConfigStore::open(prefs_dir.join(GLOBAL_PREFERENCE_FILE)))
}

fn make_launcher(engine: Option<PathBuf>) -> anyhow::Result<Rc<dyn Launcher>> {
    Ok(match engine {
        Some(engine) => Rc::new(ProcessLauncher::new(expand(&engine)?)),
        None => Rc::new(DryRunLauncher),
    })
}

fn make_controller(
    prefs_dir: &Path,
    store: Rc<dyn ConfigStore>,
    locale: Rc<dyn Locale>,
    launcher: Rc<dyn Launcher>,
) -> FileSelectorController {
    FileSelectorController::new(HistoryStore::load_from_dir(prefs_dir), store, locale, launcher)
}

fn history_command(prefs_dir: &Path, action: HistoryAction) -> anyhow::Result<()> {
    let mut history = HistoryStore::load_from_dir(prefs_dir);

    match action {
        HistoryAction::List => {
            let entries = history.list(&StdFileSystem);
            println!("{}", format!("Recent paths from: {}\n", history.path().display()).bold());
            if entries.is_empty() {
                println!("{}", "No recent paths".dimmed());
            }
            for (i, entry) in entries.iter().enumerate() {
                println!("{} {}", format!("{}.", i + 1).dimmed(), entry.cyan());
            }
        }
        HistoryAction::Add { path } => {
            let path = expand(&path)?;
            history.add(path.to_string_lossy().into_owned());
            println!("{} Added {}", "✓".green(), path.display());
        }
        HistoryAction::Remove { path } => {
            let path = expand(&path)?;
            let key = path.to_string_lossy();
            if history.contains(&key) {
                history.remove(&key);
                println!("{} Removed {}", "✓".green(), path.display());
            } else {
                println!("{} {} is not in the history", "⚠".yellow(), path.display());
            }
        }
    }

    Ok(())
}

fn check_path(path: &Path) {
    let fs = StdFileSystem;
    let launchable = if fs.is_dir(path) {
        is_game_folder(&fs, path)
    } else {
        is_archive_file(&fs, path)
    };

    if launchable {
        println!("{} {} can be launched", "✓".green().bold(), path.display());
    } else {
        println!("{} {} is not a game folder or archive", "✗".red().bold(), path.display());
        std::process::exit(1);
    }
}

fn browse(prefs_dir: &Path, dir: Option<PathBuf>, locale: Rc<dyn Locale>) -> anyhow::Result<()> {
    let controller = make_controller(prefs_dir, global_store(prefs_dir), Rc::clone(&locale), Rc::new(DryRunLauncher));
    let dir = match dir {
        Some(dir) => {
            let dir = expand(&dir)?;
            controller.list_dir(&dir);
            dir
        }
        None => controller.show(),
    };

    println!("{}", format!("{}\n", dir.display()).bold());
    for info in controller.current_list() {
        let marker = if controller.can_launch(&info.full_path) { "▶" } else { " " };
        if info.is_dir {
            println!("{} {}/", marker.green(), info.name.blue().bold());
        } else {
            println!("{} {}", marker.green(), info.name);
        }
    }

    let cells = controller.history_cells();
    if !cells.is_empty() {
        println!("\n{}", locale.text("recent_title").bold());
        for cell in cells {
            let marker = if cell.config_dir.is_some() { " ⚙" } else { "" };
            println!(
                "  {}{}{}{}",
                cell.prefix.dimmed(),
                cell.dir_name.bold(),
                cell.file_name,
                marker
            );
        }
    }

    Ok(())
}

/// Store and registry for the global screen, or a game's local one.
fn select_store(
    prefs_dir: &Path,
    local: Option<PathBuf>,
) -> anyhow::Result<(Rc<dyn ConfigStore>, PreferenceRegistry)> {
    match local {
        Some(dir) => {
            let dir = expand(&dir)?;
            let store = config::open_local_preference(&dir)
                .with_context(|| format!("No local preference in {}", dir.display()))?;
            Ok((Rc::new(store), PreferenceRegistry::new(RegistryOptions::local())))
        }
        None => Ok((
            global_store(prefs_dir),
            PreferenceRegistry::new(RegistryOptions::global()),
        )),
    }
}

fn print_screen(screen: &PreferenceScreen, env: &PreferenceEnv) {
    println!("{}", env.locale.text(&screen.title).bold());
    for item in screen.create_items(env, Default::default()) {
        let key = item.key.as_deref().unwrap_or("");
        println!(
            "  {:<40} {:<24} {}",
            item.caption,
            key.dimmed(),
            item.value_text().green()
        );
    }
}

fn show_prefs(
    prefs_dir: &Path,
    screen: Option<String>,
    local: Option<PathBuf>,
    locale: Rc<dyn Locale>,
) -> anyhow::Result<()> {
    let (store, registry) = select_store(prefs_dir, local)?;
    let env = registry.env(store, locale);

    let screen = match screen {
        Some(title) => registry
            .screen(&title)
            .ok_or_else(|| anyhow::anyhow!("Unknown preference screen: {}", title))?,
        None => registry.root().clone(),
    };
    print_screen(&screen, &env);

    Ok(())
}

fn set_pref(
    prefs_dir: &Path,
    key: &str,
    value: &str,
    local: Option<PathBuf>,
    locale: Rc<dyn Locale>,
) -> anyhow::Result<()> {
    let (store, registry) = select_store(prefs_dir, local)?;
    let env = registry.env(store, locale);

    let info = registry
        .find(key)
        .ok_or_else(|| anyhow::anyhow!("Unknown preference key: {}", key))?;
    let item = info.create_item(&env, Default::default());
    item.set_from_str(value)?;

    println!("{} {} = {}", "✓".green(), key.cyan(), item.value_text().bold());
    Ok(())
}

fn renderer_options(prefs_dir: &Path, locale: Rc<dyn Locale>) {
    let registry = PreferenceRegistry::new(RegistryOptions::global());
    let store = global_store(prefs_dir);
    let renderer = store.get_string(RendererScreens::RENDERER_KEY, RendererScreens::DEFAULT_RENDERER);
    let env = registry.env(store, locale);

    match registry.renderer_screens().for_renderer(&renderer) {
        Some(screen) => print_screen(&screen, &env),
        None => println!(
            "{} No options for renderer '{}'",
            "⚠".yellow(),
            renderer
        ),
    }
}

fn launch(
    prefs_dir: &Path,
    path: &Path,
    engine: Option<PathBuf>,
    locale: Rc<dyn Locale>,
) -> anyhow::Result<()> {
    let controller = make_controller(prefs_dir, global_store(prefs_dir), Rc::clone(&locale), make_launcher(engine)?);

    let mut outcome = controller.startup(path);
    if let StartupOutcome::ShowTipsFirst(path) = outcome.clone() {
        println!("{}\n", locale.text("help_content").dimmed());
        outcome = controller.do_startup(&path);
    }

    match outcome {
        StartupOutcome::Launched(path) => println!("{} Started {}", "✓".green().bold(), path.display()),
        StartupOutcome::LaunchFailed(path) => {
            anyhow::bail!("{}: {}", locale.text("launch_failed"), path.display())
        }
        StartupOutcome::Rejected(path) => {
            anyhow::bail!("{} is not a game folder or archive", path.display())
        }
        StartupOutcome::ShowTipsFirst(_) => {}
    }

    Ok(())
}

#[cfg(feature = "gui")]
fn run_gui(prefs_dir: &Path, engine: Option<PathBuf>, locale: Rc<dyn Locale>) -> anyhow::Result<()> {
    use vn_launcher::ui::App;

    let store: Rc<dyn ConfigStore> = global_store(prefs_dir);
    let controller = make_controller(prefs_dir, Rc::clone(&store), Rc::clone(&locale), make_launcher(engine)?);
    App::new(Rc::new(controller), store, locale).run();
    Ok(())
}

#[cfg(not(feature = "gui"))]
fn run_gui(_prefs_dir: &Path, _engine: Option<PathBuf>, _locale: Rc<dyn Locale>) -> anyhow::Result<()> {
    println!("{}", "GUI not available in this build".yellow());
    println!("Rebuild with `--features gui`.");
    Ok(())
}
