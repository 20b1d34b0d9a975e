//! Lagoon Desk
//!
//! Front-desk, POS and back-office workflows for the Lagoon resort REST API.
//! Screens are modelled as controllers ([`forms::ModalForm`], [`pages::ListPage`],
//! [`pos::PosTerminal`]) that talk to the API through [`lagoon_client`] and
//! report back through the [`core::Notifier`] seam.

pub use lagoon_client;
pub use shared;

pub mod commands;
pub mod core;
pub mod events;
pub mod forms;
pub mod pages;
pub mod pos;
