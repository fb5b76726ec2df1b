mod app;
mod cli;
mod data;
mod error;
mod terminal;

use std::fs::File;
use std::path::Path;

use clap::Parser;
use log::info;
use simplelog::{Config, LevelFilter, WriteLogger};
use treeselect::{Event, TreeNode, node};

use app::App;
use cli::Cli;
use error::DemoError;
use terminal::Terminal;

fn load_tree(path: Option<&Path>) -> Result<Vec<TreeNode>, DemoError> {
    let Some(path) = path else {
        return Ok(data::sample_tree());
    };
    let tree = node::load_json(path)?;
    node::validate(&tree)?;
    info!("loaded {} nodes from {}", node::walk(&tree).count(), path.display());
    Ok(tree)
}

fn run(cli: Cli) -> Result<(), DemoError> {
    let tree = load_tree(cli.tree.as_deref())?;
    let mut app = App::new(tree, cli.match_mode());

    let mut terminal = Terminal::new()?;
    app.draw(&mut terminal)?;
    while !app.should_quit() {
        for event in terminal.poll()? {
            if let Some(event) = Event::from_crossterm(&event) {
                app.handle(&event);
            }
        }
        app.draw(&mut terminal)?;
    }
    Ok(())
}

fn main() {
    let cli = Cli::parse();

    let log_file = File::create("treeselect-demo.log").expect("Failed to create log file");
    WriteLogger::init(LevelFilter::Debug, Config::default(), log_file)
        .expect("Failed to initialize logger");

    if let Err(e) = run(cli) {
        eprintln!("Error: {}", e);
    }
}
