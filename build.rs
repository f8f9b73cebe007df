use std::{env, error::Error, fs, path::PathBuf};

#[allow(dead_code)]
#[path = "src/validate.rs"]
mod validate;

#[allow(dead_code)]
#[path = "src/settings_file.rs"]
mod settings_file;

use settings_file::{RawConfig, Source, EXAMPLE_SETTINGS_FILE, SETTINGS_FILE, SETTINGS_PATH_ENV};

fn main() -> Result<(), Box<dyn Error>> {
    println!("cargo:rerun-if-changed=src/validate.rs");
    println!("cargo:rerun-if-changed=src/settings_file.rs");
    println!("cargo:rerun-if-env-changed={}", SETTINGS_PATH_ENV);

    let source = Source::resolve(
        env::var_os(SETTINGS_PATH_ENV).map(PathBuf::from),
        PathBuf::from(SETTINGS_FILE).exists(),
    );

    // Tell Cargo to rerun if the file in use changes
    println!("cargo:rerun-if-changed={}", source.path().display());
    if source == Source::Example {
        // still missing, so this reruns until cfg.toml is created
        println!("cargo:rerun-if-changed={}", SETTINGS_FILE);
        println!(
            "cargo:warning={} not found, using {}. Copy it to {} and fill in your values.",
            SETTINGS_FILE, EXAMPLE_SETTINGS_FILE, SETTINGS_FILE
        );
    }

    // Read and parse
    let path = source.path();
    let toml_str = fs::read_to_string(path)
        .map_err(|e| format!("failed to read {}: {}", path.display(), e))?;
    let raw = RawConfig::parse(&toml_str)?;

    // Placeholders only warn so the example settings still build
    let report = raw.check();
    for field in &report.placeholders {
        println!("cargo:warning={} is not set (still {:?})", field, validate::PLACEHOLDER);
    }
    if !report.errors.is_empty() {
        let errors: Vec<String> = report.errors.iter().map(|e| e.to_string()).collect();
        return Err(format!("invalid settings in {}:\n  {}", path.display(), errors.join("\n  ")).into());
    }

    // Generate Rust code
    let code = format!(
        r#"
        pub const SETTINGS: Settings = Settings {{
            wifi_ssid: {ssid:?},
            wifi_password: {psk:?},
            hostname: {host:?},
            port: {port},
            switchbot: ApiEndpoint {{
                hostname: {sb_host:?},
                token: {sb_token:?},
            }},
            myself: ApiEndpoint {{
                hostname: {my_host:?},
                token: {my_token:?},
            }},
            devices: SeasonalDevices {{
                summer: {summer:?},
                winter: {winter:?},
            }},
            scenes: SceneIds {{
                off: {off:?},
                daylight: {daylight:?},
                warm: {warm:?},
            }},
        }};
    "#,
        ssid = raw.wifi_ssid,
        psk = raw.wifi_password,
        host = raw.hostname,
        port = raw.port,
        sb_host = raw.switchbot_api_hostname,
        sb_token = raw.switchbot_api_token,
        my_host = raw.myself_api_hostname,
        my_token = raw.myself_api_token,
        summer = raw.summer_device_id,
        winter = raw.winter_device_id,
        off = raw.scene_id_off,
        daylight = raw.scene_id_daylight,
        warm = raw.scene_id_warm,
    );

    let out_dir = env::var("OUT_DIR")?;
    let dest_path = PathBuf::from(out_dir).join("config.rs");
    fs::write(dest_path, code)?;
    Ok(())
}
