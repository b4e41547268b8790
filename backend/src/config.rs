use clap::Parser;

/// Command line and environment configuration of the site server.
#[derive(Parser, Debug, Clone, PartialEq, Eq)]
#[command(name = "chalzart-server", about = "Serves the Chalz Art website")]
pub struct Config {
    /// Address to bind.
    #[arg(long, env = "STUDIO_HOST", default_value = "127.0.0.1")]
    pub host: String,

    /// Port to bind.
    #[arg(long, env = "STUDIO_PORT", default_value_t = 8080)]
    pub port: u16,

    /// Open the site in the default browser once the server is up.
    #[arg(long, env = "STUDIO_OPEN_BROWSER")]
    pub open_browser: bool,
}

impl Config {
    pub fn url(&self) -> String {
        format!("http://{}:{}", self.host, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flags_override_defaults() {
        let config = Config::try_parse_from([
            "chalzart-server",
            "--host",
            "0.0.0.0",
            "--port",
            "9000",
            "--open-browser",
        ])
        .unwrap();

        assert_eq!(config.host, "0.0.0.0");
        assert_eq!(config.port, 9000);
        assert!(config.open_browser);
        assert_eq!(config.url(), "http://0.0.0.0:9000");
    }

    #[test]
    fn rejects_invalid_port() {
        assert!(Config::try_parse_from(["chalzart-server", "--port", "http"]).is_err());
    }
}
