pub mod battery;
pub mod buzzer;
pub mod lights;
pub mod network;
pub mod reader;
pub mod server;
pub mod session;

pub use battery::*;
pub use buzzer::*;
pub use lights::*;
pub use network::*;
pub use reader::*;
pub use server::*;
pub use session::*;
