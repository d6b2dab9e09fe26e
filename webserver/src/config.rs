//! Command line and environment configuration
//!
//! Every flag can also be set through a `PLANNER_*` environment variable,
//! which `main` may have loaded from a `.env` file first.

use std::net::SocketAddr;
use std::path::PathBuf;

use clap::Parser;
use planner::core::{DEFAULT_MAX_PLAYERS, DEFAULT_MAX_ROUNDS, DEFAULT_ROUND_INTERVAL_DAYS};
use planner::PlannerConfig;
use shared::SharedError;

use crate::error::{WebServerError, WebServerResult};

#[derive(Parser, Debug, Clone)]
#[command(name = "webserver")]
#[command(about = "Round-robin tournament planner HTTP server")]
pub struct ServerArgs {
    /// Interface to bind the HTTP server to
    #[arg(long, env = "PLANNER_HOST", default_value = "127.0.0.1")]
    pub host: String,

    /// Port for HTTP server (browser connections)
    #[arg(long, env = "PLANNER_PORT", default_value_t = 8080)]
    pub port: u16,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, env = "PLANNER_LOG_LEVEL", default_value = "info")]
    pub log_level: String,

    /// Static files directory
    #[arg(long, env = "PLANNER_STATIC_DIR", default_value = "./static")]
    pub static_dir: PathBuf,

    /// Keep a copy of every download in this directory
    #[arg(long, env = "PLANNER_EXPORT_DIR")]
    pub export_dir: Option<PathBuf>,

    /// Days between consecutive rounds
    #[arg(long, env = "PLANNER_ROUND_INTERVAL_DAYS", default_value_t = DEFAULT_ROUND_INTERVAL_DAYS)]
    pub round_interval_days: u32,

    /// Largest accepted roster
    #[arg(long, env = "PLANNER_MAX_PLAYERS", default_value_t = DEFAULT_MAX_PLAYERS)]
    pub max_players: usize,

    /// Longest accepted schedule
    #[arg(long, env = "PLANNER_MAX_ROUNDS", default_value_t = DEFAULT_MAX_ROUNDS)]
    pub max_rounds: u32,
}

impl ServerArgs {
    pub fn bind_address(&self) -> WebServerResult<SocketAddr> {
        format!("{}:{}", self.host, self.port)
            .parse()
            .map_err(|e| WebServerError::config(format!("Invalid bind address: {}", e)))
    }

    pub fn planner_config(&self) -> WebServerResult<PlannerConfig> {
        if self.max_players == 0 {
            return Err(SharedError::invalid_config("max_players", self.max_players).into());
        }
        if self.max_rounds == 0 {
            return Err(SharedError::invalid_config("max_rounds", self.max_rounds).into());
        }

        Ok(PlannerConfig {
            round_interval_days: self.round_interval_days,
            max_players: self.max_players,
            max_rounds: self.max_rounds,
        })
    }
}
