mod config;
mod handler;
mod http;
mod net;

use config::{ServerConfig, config, set_config};
use handler::files::FileStore;
use net::server::Server;

fn main() -> std::io::Result<()> {
    let cfg = match std::env::args().nth(1) {
        Some(path) => ServerConfig::from_file(&path),
        None => ServerConfig::default(),
    };
    set_config(cfg);

    let store = FileStore::new(&config().files_root);
    let server = Server::new(store);
    async_std::task::block_on(server.run())
}
