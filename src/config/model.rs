// src/config/model.rs

//! The runner configuration value and its on-disk text form.
//!
//! The file format is deliberately small: one `<key> = <value>` per line,
//! recognized keys `Program` and `Args`. Unrecognized keys and lines that
//! do not split on `=` into exactly two parts are ignored, so a config file
//! from a newer version degrades gracefully rather than failing to load.

/// External runner configuration consumed by the launcher.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunnerConfig {
    /// Name or path of the external program to run entries through.
    pub program: String,
    /// Optional single argument token placed before the entry path.
    /// Empty means no extra argument.
    pub args: String,
}

impl Default for RunnerConfig {
    fn default() -> Self {
        Self {
            program: "wine".to_string(),
            args: String::new(),
        }
    }
}

impl RunnerConfig {
    /// Parse config text, starting from defaults and overriding per
    /// recognized line. Never fails; bad lines are skipped.
    pub fn decode(text: &str) -> Self {
        let mut config = Self::default();

        for line in text.lines() {
            let parts: Vec<&str> = line.split('=').collect();
            if parts.len() != 2 {
                continue;
            }

            let key = parts[0].trim();
            let value = parts[1].trim();

            match key {
                "Program" => config.program = value.to_string(),
                "Args" => config.args = value.to_string(),
                _ => {}
            }
        }

        config
    }

    /// Render the full config as text. Saving always rewrites the whole
    /// file from this.
    pub fn encode(&self) -> String {
        format!("Program = {}\nArgs = {}\n", self.program, self.args)
    }
}
