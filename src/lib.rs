//! # Join - kanban board and contact directory client
//!
//! Client side of the Join project management tool: a board of tasks with
//! subtasks and assignees, a contact directory, a summary page and the
//! login/sign-up screens, all backed by a token-authenticated REST API.
//!
//! ## Features
//!
//! - **Board**: columns by progress, search, drag and drop, detail and edit overlays
//! - **Task Composer**: validated add-task form with assignees and subtasks
//! - **Contacts**: alphabetical directory with avatars, add/edit/delete
//! - **Authentication**: login, guest login, sign-up, guest permission gate
//! - **Rendering**: HTML fragments built with `maud`
//!
//! ## Usage
//!
//! ```rust,no_run
//! use join::api::{HttpGateway, JoinClient};
//! use join::libs::config::Config;
//! use join::libs::session::SessionStore;
//! use join::pages::board::Board;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     join::libs::logging::init();
//!     let config = Config::read()?;
//!     let session = SessionStore::open()?;
//!     let gateway = HttpGateway::new(&config.api);
//!     let client = JoinClient::new(gateway);
//!     client.set_token(session.token());
//!
//!     let mut board = Board::new(client, session, &config.ui());
//!     board.load().await?;
//!     println!("{}", board.render_columns().into_string());
//!     Ok(())
//! }
//! ```

pub mod api;
pub mod libs;
pub mod pages;
pub mod views;
