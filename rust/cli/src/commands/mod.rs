//! One handler per subcommand.
//!
//! Every handler has the shape
//! `handle_COMMAND_command(..., out: &mut dyn Write, ...) -> Result<(), CliError>`:
//! output streams are injected and errors propagate as [`crate::CliError`].

mod cfg;
mod eval;
mod play;
mod sim;

pub use cfg::handle_cfg_command;
pub use eval::handle_eval_command;
pub use play::handle_play_command;
pub use sim::handle_sim_command;
