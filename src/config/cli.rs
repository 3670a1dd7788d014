use crate::config::toml_config::SiteConfig;
use crate::utils::error::Result;
use clap::Parser;

#[derive(Debug, Clone, Parser)]
#[command(name = "portfolio-site")]
#[command(about = "Serve a single-page personal portfolio")]
pub struct CliConfig {
    /// Path to a TOML configuration file
    #[arg(short, long)]
    pub config: Option<String>,

    /// Address to listen on, overrides [server].bind
    #[arg(long)]
    pub bind: Option<String>,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Emit logs as JSON lines")]
    pub json_logs: bool,
}

impl CliConfig {
    /// 載入配置檔並套用命令列覆蓋設定
    pub fn load_site_config(&self) -> Result<SiteConfig> {
        let mut site = match &self.config {
            Some(path) => SiteConfig::from_file(path)?,
            None => SiteConfig::default(),
        };

        if let Some(bind) = &self.bind {
            site.server.bind = bind.clone();
        }

        Ok(site)
    }
}
