use std::net::{IpAddr, Ipv4Addr};

#[derive(clap::Parser, Debug)]
pub struct Config {
    /// TCP port to listen on. Any port below 1024 needs superuser privileges on Linux.
    #[arg(long, env, default_value_t = 8080)]
    pub port: u16,

    #[arg(long, env, default_value_t = IpAddr::V4(Ipv4Addr::UNSPECIFIED))]
    pub bind_address: IpAddr,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn defaults_to_unprivileged_port() {
        if std::env::var_os("PORT").is_some() || std::env::var_os("BIND_ADDRESS").is_some() {
            return;
        }
        let config = Config::try_parse_from(["profile-service"]).unwrap();

        assert_eq!(8080, config.port);
        assert_eq!(IpAddr::V4(Ipv4Addr::UNSPECIFIED), config.bind_address);
    }

    #[test]
    fn flags_override_defaults() {
        let config = Config::try_parse_from([
            "profile-service",
            "--port",
            "9000",
            "--bind-address",
            "127.0.0.1",
        ])
        .unwrap();

        assert_eq!(9000, config.port);
        assert_eq!(IpAddr::V4(Ipv4Addr::LOCALHOST), config.bind_address);
    }
}
