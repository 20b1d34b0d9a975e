use clap::Args;

use crate::core::{DeskConfig, FileNavPersistence, NavStore};

#[derive(Debug, Args)]
pub struct NavArgs {
    /// Select a top-level menu
    #[arg(long)]
    pub menu: Option<String>,

    /// Open or close a submenu
    #[arg(long)]
    pub submenu: Option<String>,

    /// Forget everything
    #[arg(long, conflicts_with_all = ["menu", "submenu"])]
    pub clear: bool,
}

pub fn run(config: &DeskConfig, args: NavArgs) -> anyhow::Result<()> {
    let mut store = NavStore::new(Box::new(FileNavPersistence::new(config.nav_path())));
    if args.clear {
        store.clear();
    }
    if let Some(menu) = args.menu {
        store.select_menu(menu);
    }
    if let Some(submenu) = args.submenu {
        store.toggle_submenu(submenu);
    }
    let state = store.state();
    println!(
        "menu: {}\nsubmenu: {}",
        state.active_menu.as_deref().unwrap_or("-"),
        state.open_submenu.as_deref().unwrap_or("-")
    );
    Ok(())
}
