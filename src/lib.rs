//! Starosta — an interactive console manager for a small student roster.
//!
//! Records persist in a pipe-delimited append-only text table. A session
//! loads the table, answers name queries with computed enrollment metrics,
//! and registers new students by appending rows to the backing file.
//!
//! # Quick start
//!
//! ```no_run
//! use starosta::input::ConsoleInput;
//! use starosta::roster::Roster;
//! use starosta::session::Session;
//! use starosta::table::read_roster;
//! use starosta::ui::Renderer;
//! use std::path::PathBuf;
//!
//! let path = PathBuf::from("students.md");
//! let roster = Roster::new(read_roster(&path).unwrap_or_default());
//! let mut session = Session::new(roster, path);
//! session.run(&mut ConsoleInput, &Renderer::new(true));
//! ```

pub mod config;
pub mod error;
pub mod greeting;
pub mod input;
pub mod record;
pub mod registration;
pub mod roster;
pub mod session;
pub mod table;
#[cfg(test)]
pub mod testsupport;
pub mod ui;
