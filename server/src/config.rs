//! Listener configuration.
//!
//! With no flags and no environment the server listens on `0.0.0.0:8080`.
//!
//! ```bash
//! TODO_PORT=9000 todo-server
//! todo-server --host 127.0.0.1 --port 3000
//! ```

use clap::Parser;

#[derive(Debug, Clone, PartialEq, Eq, Parser)]
#[command(name = "todo-server")]
#[command(about = "In-memory todo list HTTP service")]
#[command(version)]
pub struct Config {
    /// Interface to bind
    #[arg(long, default_value = "0.0.0.0", env = "TODO_HOST")]
    pub host: String,

    /// Port to listen on
    #[arg(short, long, default_value_t = 8080, env = "TODO_PORT")]
    pub port: u16,
}

impl Config {
    /// `host:port`, ready for `TcpListener::bind`.
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_address() {
        let config = Config::try_parse_from(["todo-server"]).unwrap();
        assert_eq!(config.address(), "0.0.0.0:8080");
    }

    #[test]
    fn parse_flags() {
        let config = Config::try_parse_from(["todo-server", "--host", "127.0.0.1", "-p", "3000"]).unwrap();
        assert_eq!(config.address(), "127.0.0.1:3000");
    }

    #[test]
    fn parse_rejects_bad_port() {
        assert!(Config::try_parse_from(["todo-server", "--port", "http"]).is_err());
    }
}
