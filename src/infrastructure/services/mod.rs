mod auth_server;
mod lights;
mod probe;

pub use auth_server::HttpAuthServer;
pub use probe::TcpProbe;
