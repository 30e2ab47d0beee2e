/// Compile-time build metadata produced by `build.rs`.
#[derive(Debug, Clone, Copy)]
pub struct BuildMetadata {
    pub version: &'static str,
    pub git_hash: &'static str,
    pub date: &'static str,
    pub profile: &'static str,
}

impl BuildMetadata {
    /// One-line summary printed by `finhealth_cli version`.
    pub fn summary(&self) -> String {
        format!(
            "finhealth {} ({} {}, {})",
            self.version, self.git_hash, self.date, self.profile
        )
    }
}

pub fn current() -> BuildMetadata {
    BuildMetadata {
        version: env!("CARGO_PKG_VERSION"),
        git_hash: option_env!("FINHEALTH_BUILD_HASH").unwrap_or("unknown"),
        date: option_env!("FINHEALTH_BUILD_DATE").unwrap_or("unknown"),
        profile: option_env!("FINHEALTH_BUILD_PROFILE").unwrap_or("unknown"),
    }
}
