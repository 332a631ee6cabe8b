//! Interactive terminal chat client.
//!
//! A terminal rendering of the chat widget: the controller from
//! `ebios-core` drives the conversation, this module supplies the view,
//! input handling and slash commands. Entry point: `loop_runner::run_chat_loop`.

pub mod banner;
pub mod commands;
pub mod input;
pub mod loop_runner;
pub mod view;
