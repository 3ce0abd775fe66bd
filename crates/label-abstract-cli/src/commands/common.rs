use crate::core::CliError;
use clap::Args;
use label_abstract_toml::LabelsConfig;
use std::path::PathBuf;

#[derive(Debug, Clone, Args)]
pub struct RootArgs {
    /// Root directory the locale paths are relative to (defaults to current directory).
    #[arg(short, long)]
    pub path: Option<PathBuf>,
    /// Path to a labels.toml (defaults to `<path>/labels.toml` when present).
    #[arg(short, long)]
    pub config: Option<PathBuf>,
}

impl RootArgs {
    /// Resolve the root directory and its configuration.
    pub fn resolve(self) -> Result<(PathBuf, LabelsConfig), CliError> {
        let root = self.path.unwrap_or_else(|| PathBuf::from("."));
        let config = LabelsConfig::resolve(&root, self.config.as_deref())?;
        Ok((root, config))
    }
}
