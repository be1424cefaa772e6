use std::net::{IpAddr, SocketAddr};

use anyhow::{Context, Result};
use clap::Parser;

#[derive(Debug, Clone, Parser)]
#[command(name = "calc-service")]
#[command(about = "Adds or subtracts two integers over HTTP", long_about = None)]
pub struct Config {
    /// 待ち受けるアドレス
    #[arg(long, env = "CALC_HOST", default_value = "0.0.0.0")]
    pub host: String,

    /// 待ち受けるポート
    #[arg(short, long, env = "CALC_PORT", default_value_t = 8080)]
    pub port: u16,
}

impl Config {
    pub fn socket_addr(&self) -> Result<SocketAddr> {
        let ip: IpAddr = self
            .host
            .parse()
            .with_context(|| format!("invalid listen host: {}", self.host))?;
        Ok(SocketAddr::new(ip, self.port))
    }
}
