//! HTTP boundary.
//!
//! Three page routes plus a health probe, served by axum:
//!
//! | Route            | Action                                   |
//! |------------------|------------------------------------------|
//! | `GET /`          | Render the current quote and count       |
//! | `POST /generate` | Generate and store a quote, 303 to `/`   |
//! | `POST /clear`    | Delete every quote, 303 to `/`           |
//! | `GET /health`    | `ok`                                     |
//!
//! Failed form posts redirect with a `notice` query the page turns into a
//! visible banner.

pub mod error;
pub mod handler;
pub mod page;
pub mod server;
pub mod state;
