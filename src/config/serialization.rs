//! Config serialization to TOML
//!
//! Single source of truth for config file format.

use super::Config;

impl Config {
    /// Render the config as a commented TOML file
    pub fn to_toml(&self) -> String {
        let people_file = match &self.people_file {
            Some(path) => format!("people_file = {}", toml_string(&path.display().to_string())),
            None => "# people_file = \"~/people.toml\"   # [[people]] tables; built-in seed when unset"
                .to_string(),
        };

        format!(
            r#"# peoplecards configuration
# Precedence: environment variables > this file > built-in defaults

# Color theme: "dark", "light", "nord"  (env: PEOPLECARDS_THEME)
theme = {theme}

# Seed records  (env: PEOPLECARDS_PEOPLE)
{people_file}

[animation]
# Animate expand/collapse (false = snap)
enabled = {anim_enabled}
# Transition length in milliseconds
duration_ms = {duration_ms}
# Redraw interval while animating
frame_ms = {frame_ms}

[logging]
# trace, debug, info, warn, error  (RUST_LOG overrides)
level = {level}
# Write JSON logs to rotating files
file_enabled = {file_enabled}
file_dir = {file_dir}
# hourly, daily, never
file_rotation = {file_rotation}
file_prefix = {file_prefix}
"#,
            theme = toml_string(&self.theme),
            people_file = people_file,
            anim_enabled = self.animation.enabled,
            duration_ms = self.animation.duration_ms,
            frame_ms = self.animation.frame_ms,
            level = toml_string(&self.logging.level),
            file_enabled = self.logging.file_enabled,
            file_dir = toml_string(&self.logging.file_dir.display().to_string()),
            file_rotation = toml_string(self.logging.file_rotation.as_str()),
            file_prefix = toml_string(&self.logging.file_prefix),
        )
    }
}

/// A TOML basic string, escaped the way the parser expects
fn toml_string(s: &str) -> String {
    toml::Value::String(s.to_string()).to_string()
}
