const SETTINGS_PATH: &str = "src/default_settings.toml";

/// `(table, key)` pairs that must hold a positive integer.
const POSITIVE_KEYS: &[(&str, &str)] = &[("candidates", "max_results"), ("io", "read_buf_size")];

fn main() {
    println!("cargo:rerun-if-changed={SETTINGS_PATH}");

    let table: toml::Table = match include_str!("src/default_settings.toml").parse() {
        Ok(t) => t,
        Err(e) => panic!("{SETTINGS_PATH} contains invalid TOML: {e}"),
    };

    for &(section, key) in POSITIVE_KEYS {
        match table.get(section).and_then(|s| s.get(key)) {
            Some(toml::Value::Integer(n)) if *n > 0 => {}
            Some(v) => panic!("{SETTINGS_PATH}: {section}.{key} must be a positive integer, got {v}"),
            None => panic!("{SETTINGS_PATH}: missing {section}.{key}"),
        }
    }
}
