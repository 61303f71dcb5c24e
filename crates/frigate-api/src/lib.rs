pub mod cameras;
pub mod config;
pub mod url;

pub use cameras::{
    merge_camera_selection, ordered_selection, parse_camera_list, string_array,
    RESERVED_CAMERA_KEY,
};
pub use config::ViewerConfig;
pub use url::{
    build_auth_url, config_url, encode_credential, has_credentials, normalize_base_url,
    version_url, CONFIG_PATH, VERSION_PATH,
};
