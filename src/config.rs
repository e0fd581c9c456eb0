use std::env;
use std::net::SocketAddr;
use std::path::PathBuf;

use crate::error::AppError;

#[derive(Clone, Debug)]
pub struct AppConfig {
    pub data_dir: PathBuf,
    pub rooms_file: String,
    pub schedules_file: String,
    pub addr: SocketAddr,
}

impl AppConfig {
    pub fn new_from_env() -> Result<Self, AppError> {
        let data_dir = env::var("ROOMFINDER_DATA_DIR").unwrap_or_else(|_| "data".to_string());
        let rooms_file =
            env::var("ROOMFINDER_ROOMS_FILE").unwrap_or_else(|_| "cabinets.json".to_string());
        let schedules_file = env::var("ROOMFINDER_SCHEDULES_FILE")
            .unwrap_or_else(|_| "cabinet_schedules.json".to_string());
        let addr = env::var("ROOMFINDER_ADDR").unwrap_or_else(|_| "127.0.0.1:3000".to_string());
        let addr = addr
            .parse::<SocketAddr>()
            .map_err(|e| AppError::Config(format!("ROOMFINDER_ADDR '{}' is invalid: {}", addr, e)))?;

        Ok(Self {
            data_dir: PathBuf::from(data_dir),
            rooms_file,
            schedules_file,
            addr,
        })
    }

    pub fn rooms_path(&self) -> PathBuf {
        self.data_dir.join(&self.rooms_file)
    }

    pub fn schedules_path(&self) -> PathBuf {
        self.data_dir.join(&self.schedules_file)
    }
}
