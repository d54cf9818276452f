mod directory;
mod registry;
mod relay;
mod relay_command;
mod relay_output;

pub use directory::*;
pub use registry::*;
pub use relay::*;
pub use relay_command::*;
pub use relay_output::*;
