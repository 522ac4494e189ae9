// cli.rs
use clap::{App, Arg, ArgMatches};
use log::LevelFilter;

use crate::faker::IdScheme;
use crate::server::{ServerConfig, DEFAULT_ADDRESS, DEFAULT_PORT};

/// Env var consulted for the port when `--port` is absent.
pub const PORT_ENV_VAR: &str = "BLOG_PORT";

pub fn build_cli() -> App<'static> {
    App::new("blog-server-node")
        .version("1.0")
        .about("Serves CRUD routes over fake in-memory blog posts")
        .arg(
            Arg::new("address")
                .long("address")
                .takes_value(true)
                .default_value(DEFAULT_ADDRESS)
                .help("Address to bind the web server to"),
        )
        .arg(
            Arg::new("port")
                .long("port")
                .takes_value(true)
                .help("Port for the web server (falls back to BLOG_PORT, then 8000)"),
        )
        .arg(
            Arg::new("log_file")
                .long("log-file")
                .takes_value(true)
                .default_value("output.log")
                .help("File the log is mirrored to"),
        )
        .arg(
            Arg::new("log_level")
                .long("log-level")
                .takes_value(true)
                .default_value("debug")
                .help("Maximum log level"),
        )
        .arg(
            Arg::new("legacy_numeric_ids")
                .long("legacy-numeric-ids")
                .help("Give new blogs random numeric ids in [1, 100] (may collide)"),
        )
        .arg(
            Arg::new("seed_count")
                .long("seed-count")
                .takes_value(true)
                .default_value("0")
                .help("Number of fake blogs to create at startup"),
        )
}

pub struct LogConfig {
    pub level: LevelFilter,
    pub file: String,
}

pub fn log_config(matches: &ArgMatches) -> Result<LogConfig, clap::Error> {
    Ok(LogConfig {
        level: matches.value_of_t("log_level")?,
        file: String::from(matches.value_of("log_file").unwrap_or("output.log")),
    })
}

/// Builds the server config. `--port` wins over `env_port`; an unparsable
/// `env_port` falls back to [`DEFAULT_PORT`].
pub fn server_config(
    matches: &ArgMatches,
    env_port: Option<&str>,
) -> Result<ServerConfig, clap::Error> {
    let port = if matches.is_present("port") {
        matches.value_of_t("port")?
    } else {
        env_port
            .and_then(|p| p.parse::<u16>().ok())
            .unwrap_or(DEFAULT_PORT)
    };
    let id_scheme = if matches.is_present("legacy_numeric_ids") {
        IdScheme::LegacyNumeric
    } else {
        IdScheme::Opaque
    };
    Ok(ServerConfig {
        address: String::from(matches.value_of("address").unwrap_or(DEFAULT_ADDRESS)),
        port,
        id_scheme,
        seed_count: matches.value_of_t("seed_count")?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> ArgMatches {
        let mut argv = vec!["blog_server_node"];
        argv.extend_from_slice(args);
        build_cli().try_get_matches_from(argv).unwrap()
    }

    #[test]
    fn test_defaults() {
        let config = server_config(&parse(&[]), None).unwrap();
        assert_eq!(config.address, DEFAULT_ADDRESS);
        assert_eq!(config.port, DEFAULT_PORT);
        assert_eq!(config.id_scheme, IdScheme::Opaque);
        assert_eq!(config.seed_count, 0);

        let logs = log_config(&parse(&[])).unwrap();
        assert_eq!(logs.level, LevelFilter::Debug);
        assert_eq!(logs.file, "output.log");
    }

    #[test]
    fn test_env_port_fallback() {
        let config = server_config(&parse(&[]), Some("9100")).unwrap();
        assert_eq!(config.port, 9100);

        let config = server_config(&parse(&[]), Some("not-a-port")).unwrap();
        assert_eq!(config.port, DEFAULT_PORT);
    }

    #[test]
    fn test_flag_port_beats_env() {
        let config = server_config(&parse(&["--port", "9200"]), Some("9100")).unwrap();
        assert_eq!(config.port, 9200);
    }

    #[test]
    fn test_numeric_ids_and_seed_count() {
        let matches = parse(&["--legacy-numeric-ids", "--seed-count", "5", "--address", "0.0.0.0"]);
        let config = server_config(&matches, None).unwrap();
        assert_eq!(config.id_scheme, IdScheme::LegacyNumeric);
        assert_eq!(config.seed_count, 5);
        assert_eq!(config.address, "0.0.0.0");
    }

    #[test]
    fn test_bad_values_are_errors() {
        assert!(server_config(&parse(&["--port", "99999"]), None).is_err());
        assert!(server_config(&parse(&["--seed-count=many"]), None).is_err());
        assert!(log_config(&parse(&["--log-level", "loud"])).is_err());
    }
}
