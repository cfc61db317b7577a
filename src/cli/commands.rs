use std::rc::Rc;
use clap::{Parser, Subcommand};
use anyhow::{Context, Result};
use crate::cli::abbrev;
use crate::cli::error::{user_error, validate_index, validate_non_empty};
use crate::cli::output::{format_board, RenderOptions};
use crate::cli::parser::{join_text, parse_color_arg, parse_column, parse_direction};
use crate::cli::view::BoardView;
use crate::config::Config;
use crate::models::{Column, Direction};
use crate::storage::{format, BoardStorage, JsonFileStorage};
use crate::store::BoardStore;

#[derive(Parser)]
#[command(name = "stickerboard")]
#[command(about = "Sticker Board - a four-column Kanban board (Queue, In Progress, Review, Done)")]
#[command(version = env!("CARGO_PKG_VERSION"))]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Add a sticker to the end of a column
    Add {
        /// Column to add to (default: Queue)
        #[arg(short, long)]
        column: Option<String>,
        /// Background color (#RRGGBB, #RGB, grayN, or a color name)
        #[arg(long)]
        color: Option<String>,
        /// Sticker text
        #[arg(trailing_var_arg = true, allow_hyphen_values = true, required = true)]
        text: Vec<String>,
    },
    /// Show the board
    #[command(visible_alias = "board")]
    List {
        /// Output the board file JSON
        #[arg(long)]
        json: bool,
    },
    /// Move a sticker to the neighbouring column (left or right)
    Move {
        /// Column holding the sticker
        column: String,
        /// Sticker index within the column (0-based)
        index: String,
        /// Direction: left or right
        direction: String,
    },
    /// Move a sticker one column to the left
    Left {
        /// Column holding the sticker
        column: String,
        /// Sticker index within the column (0-based)
        index: String,
    },
    /// Move a sticker one column to the right
    Right {
        /// Column holding the sticker
        column: String,
        /// Sticker index within the column (0-based)
        index: String,
    },
    /// Move a sticker to any column
    Transfer {
        /// Column holding the sticker
        from: String,
        /// Destination column
        to: String,
        /// Sticker index within the source column (0-based)
        index: String,
    },
    /// Delete a sticker
    Delete {
        /// Column holding the sticker
        column: String,
        /// Sticker index within the column (0-based)
        index: String,
    },
    /// Change a sticker's background color
    Color {
        /// Column holding the sticker
        column: String,
        /// Sticker index within the column (0-based)
        index: String,
        /// New background color
        color: String,
    },
    /// Print the board file location
    Path,
}

pub fn run() -> Result<()> {
    let args: Vec<String> = std::env::args().skip(1).collect();

    // Expand command abbreviations before clap sees them
    let args = match abbrev::expand_command_abbreviations(args) {
        Ok(expanded) => expanded,
        Err(e) => user_error(&e),
    };

    let cli = Cli::parse_from(std::iter::once("stickerboard".to_string()).chain(args));
    let config = Config::load().context("Failed to load configuration")?;
    execute(cli.command, &config)
}

/// Run one command against the configured board file
pub fn execute(command: Commands, config: &Config) -> Result<()> {
    if let Commands::Path = command {
        println!("{}", config.data_location.display());
        return Ok(());
    }

    let storage = JsonFileStorage::new(&config.data_location);
    let mut store = BoardStore::open(storage).with_default_color(config.default_color.clone());

    let view = Rc::new(BoardView::new());
    view.rebuild(store.board());
    store.attach(view.clone());

    dispatch(command, &mut store, &view)?;

    for message in view.take_messages() {
        println!("{}", message);
    }

    if store.is_dirty() {
        anyhow::bail!("Failed to save board to {}", config.data_location.display());
    }
    Ok(())
}

/// Apply a command to a store; change messages accumulate in `view`
pub fn dispatch<S: BoardStorage>(command: Commands, store: &mut BoardStore<S>, view: &BoardView) -> Result<()> {
    match command {
        Commands::Add { column, color, text } => handle_add(store, column.as_deref(), color.as_deref(), &text),
        Commands::List { json } => handle_list(store, view, json),
        Commands::Move { column, index, direction } => {
            let direction = parse_direction(&direction)?;
            handle_move(store, &column, &index, direction)
        }
        Commands::Left { column, index } => handle_move(store, &column, &index, Direction::Left),
        Commands::Right { column, index } => handle_move(store, &column, &index, Direction::Right),
        Commands::Transfer { from, to, index } => handle_transfer(store, &from, &to, &index),
        Commands::Delete { column, index } => handle_delete(store, &column, &index),
        Commands::Color { column, index, color } => handle_color(store, &column, &index, &color),
        Commands::Path => Ok(()),
    }
}

/// Parse a (column, index) pair from command arguments
fn resolve_target(column: &str, index: &str) -> Result<(Column, usize)> {
    let column = parse_column(column)?;
    let index = match validate_index(index) {
        Ok(index) => index,
        Err(e) => user_error(&e),
    };
    Ok((column, index))
}

fn handle_add<S: BoardStorage>(
    store: &mut BoardStore<S>,
    column: Option<&str>,
    color: Option<&str>,
    text: &[String],
) -> Result<()> {
    let text = join_text(text);
    if let Err(e) = validate_non_empty(&text, "Sticker text") {
        user_error(&e);
    }
    let column = match column {
        Some(name) => parse_column(name)?,
        None => Column::FIRST,
    };
    let color = color.map(parse_color_arg).transpose()?;

    store.add_sticker(column, text.trim(), color.as_deref());
    Ok(())
}

fn handle_list<S: BoardStorage>(store: &BoardStore<S>, view: &BoardView, json: bool) -> Result<()> {
    if json {
        println!("{}", format::encode(store.board())?);
    } else {
        println!("{}", format_board(&view.snapshot(), RenderOptions::detect()));
    }
    Ok(())
}

fn handle_move<S: BoardStorage>(store: &mut BoardStore<S>, column: &str, index: &str, direction: Direction) -> Result<()> {
    let (column, index) = resolve_target(column, index)?;
    let placement = store.move_sticker(column, index, direction)?;
    if placement.column == column {
        if let Some(sticker) = store.get(column, index) {
            println!("'{}' is already in {}; cannot move {}", sticker.text, column, direction.as_str());
        }
    }
    Ok(())
}

fn handle_transfer<S: BoardStorage>(store: &mut BoardStore<S>, from: &str, to: &str, index: &str) -> Result<()> {
    let (from, index) = resolve_target(from, index)?;
    let to = parse_column(to)?;
    store.transfer_sticker(from, to, index)?;
    if from == to {
        println!("Sticker is already in {}", to);
    }
    Ok(())
}

fn handle_delete<S: BoardStorage>(store: &mut BoardStore<S>, column: &str, index: &str) -> Result<()> {
    let (column, index) = resolve_target(column, index)?;
    store.delete_sticker(column, index)?;
    Ok(())
}

fn handle_color<S: BoardStorage>(store: &mut BoardStore<S>, column: &str, index: &str, color: &str) -> Result<()> {
    let (column, index) = resolve_target(column, index)?;
    let color = parse_color_arg(color)?;
    store.edit_sticker_bg(column, index, &color)?;
    Ok(())
}
