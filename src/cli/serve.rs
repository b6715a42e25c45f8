use std::net::SocketAddr;

use crate::{config::Config, download::YtDlp, error, server};

pub async fn serve(mut config: Config, addr: Option<SocketAddr>) {
    if let Some(addr) = addr {
        config.server_addr = addr;
    }

    let downloader = YtDlp::from_config(&config);
    if let Err(e) = server::start_api_server(config, downloader).await {
        error!("Server stopped: {}", e);
    }
}
