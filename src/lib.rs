// #![deny(warnings)]
#![warn(missing_docs)]
//! Connect Four for two players at a text console.
//!
//! [`Game`] runs a series of games on a [`Board`] and talks to the players
//! through a [`Console`]. [`Terminal`] is the interactive console.
mod game;
pub use game::*;
