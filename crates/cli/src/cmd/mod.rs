mod info;
mod matrix;
mod resolve;

pub use info::cmd_info;
pub use matrix::cmd_matrix;
pub use resolve::{ResolveArgs, cmd_resolve};
