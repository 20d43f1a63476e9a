use std::net::{IpAddr, SocketAddr};

pub struct RpcServerConfig {
    pub http_address: IpAddr,

    pub http_port: u16,
}

impl RpcServerConfig {
    pub fn http_socket_address(&self) -> SocketAddr {
        SocketAddr::new(self.http_address, self.http_port)
    }
}
