use std::env;
use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::str::FromStr;
use std::time::Duration;

use crate::{
    entities::FlatDiscount,
    error::{config_error, Error},
    external::{NominatimConfig, OllamaConfig},
};

const DEFAULT_ALLOWED_ORIGINS: &str = "http://localhost:8081,http://localhost:19006";

#[derive(Clone, Debug)]
pub struct Config {
    pub addr: SocketAddr,
    pub allowed_origins: Vec<String>,
    pub nominatim: NominatimConfig,
    pub ollama: OllamaConfig,
    /// `None` disables the coordinate cache.
    pub geocode_cache_ttl: Option<Duration>,
    pub discount: FlatDiscount,
}

impl Config {
    /// Reads the process environment. Call `dotenv` first to pick up `.env`.
    pub fn from_env() -> Result<Self, Error> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, Error>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        let host: IpAddr = parse_or(&get, "CABFARE_HOST", IpAddr::V4(Ipv4Addr::LOCALHOST))?;
        let port: u16 = parse_or(&get, "CABFARE_PORT", 8000)?;

        let allowed_origins = get("CABFARE_ALLOWED_ORIGINS")
            .unwrap_or_else(|| DEFAULT_ALLOWED_ORIGINS.into())
            .split(',')
            .map(|origin| origin.trim().to_string())
            .filter(|origin| !origin.is_empty())
            .collect();

        let defaults = NominatimConfig::default();
        let nominatim = NominatimConfig {
            api_base: get("NOMINATIM_API_BASE").unwrap_or(defaults.api_base),
            user_agent: get("NOMINATIM_USER_AGENT").unwrap_or(defaults.user_agent),
            timeout: secs_or(&get, "NOMINATIM_TIMEOUT_SECS", defaults.timeout)?,
        };

        let defaults = OllamaConfig::default();
        let ollama = OllamaConfig {
            api_base: get("OLLAMA_API_BASE").unwrap_or(defaults.api_base),
            model: get("OLLAMA_MODEL").unwrap_or(defaults.model),
            timeout: secs_or(&get, "OLLAMA_TIMEOUT_SECS", defaults.timeout)?,
        };

        let geocode_cache_ttl = match get("GEOCODE_CACHE_TTL_SECS") {
            Some(value) => Some(Duration::from_secs(parse("GEOCODE_CACHE_TTL_SECS", &value)?)),
            None => None,
        };

        let defaults = FlatDiscount::default();
        let amount: f64 = parse_or(&get, "COUPON_DISCOUNT", defaults.amount)?;

        if !amount.is_finite() || amount < 0.0 {
            return Err(config_error("COUPON_DISCOUNT"));
        }

        let discount = FlatDiscount::new(get("COUPON_CODE").unwrap_or(defaults.code), amount);

        Ok(Self {
            addr: SocketAddr::new(host, port),
            allowed_origins,
            nominatim,
            ollama,
            geocode_cache_ttl,
            discount,
        })
    }
}

fn parse<T: FromStr>(key: &str, value: &str) -> Result<T, Error> {
    value.trim().parse().map_err(|_| config_error(key))
}

fn parse_or<T, G>(get: &G, key: &str, default: T) -> Result<T, Error>
where
    T: FromStr,
    G: Fn(&str) -> Option<String>,
{
    match get(key) {
        Some(value) => parse(key, &value),
        None => Ok(default),
    }
}

fn secs_or<G>(get: &G, key: &str, default: Duration) -> Result<Duration, Error>
where
    G: Fn(&str) -> Option<String>,
{
    match get(key) {
        Some(value) => Ok(Duration::from_secs(parse(key, &value)?)),
        None => Ok(default),
    }
}
