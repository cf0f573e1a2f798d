//! CLI configuration read from the environment.

/// Log spec used when neither `RUST_LOG` nor `PARAMGUARD_LOG` is set.
const DEFAULT_LOG_SPEC: &str = "info";

#[derive(Clone, Debug)]
pub struct CliConfig {
    /// Fallback log spec for flexi_logger; `RUST_LOG` still takes precedence.
    pub log_spec: String,
}

impl CliConfig {
    /// Reads configuration from environment variables with sensible defaults.
    ///
    /// | Variable         | Default |
    /// |------------------|---------|
    /// | `PARAMGUARD_LOG` | `info`  |
    pub fn from_env() -> Self {
        Self {
            log_spec: std::env::var("PARAMGUARD_LOG")
                .ok()
                .filter(|spec| !spec.trim().is_empty())
                .unwrap_or_else(|| DEFAULT_LOG_SPEC.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_log_spec_is_info() {
        assert_eq!(DEFAULT_LOG_SPEC, "info");
        assert!(!CliConfig::from_env().log_spec.is_empty());
    }
}
