use anyhow::Result;
use std::path::PathBuf;

#[derive(Clone, Debug)]
pub struct DashboardConfig {
    pub data_dir: PathBuf,
    pub expand_all: bool,
}

impl DashboardConfig {
    pub fn from_env() -> Result<Self> {
        let data_dir = PathBuf::from(
            std::env::var("ANALYST_DATA_DIR").unwrap_or_else(|_| "analysis_data".to_string()),
        );

        let expand_all = std::env::var("ANALYST_EXPAND_ALL")
            .map(|v| v == "1" || v.eq_ignore_ascii_case("true"))
            .unwrap_or(false);

        Ok(Self {
            data_dir,
            expand_all,
        })
    }
}
