mod config;

pub use config::{
    config_path, get_api_url, get_default_path, get_token, load_config, load_config_from,
    save_config, save_config_to, Config,
};
