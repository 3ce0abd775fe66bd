//! CLI error types rendered through miette.

use label_abstract_toml::LabelsConfigError;
use miette::Diagnostic;
use thiserror::Error;

#[derive(Debug, Diagnostic, Error)]
pub enum CliError {
    #[error("failed to load labels configuration")]
    #[diagnostic(
        code(abstract_labels::config),
        help(
            "Check labels.toml, e.g.:\n\n  \
              locales_dir = \"frontend/lib/i18n/locales\"\n  \
              languages = [\"en\", \"de\"]\n"
        )
    )]
    Config(#[from] LabelsConfigError),

    #[error("failed to build a locale matching pattern")]
    #[diagnostic(code(abstract_labels::pattern))]
    Pattern(#[from] regex::Error),

    #[error("IO error: {0}")]
    #[diagnostic(code(abstract_labels::io))]
    Io(#[from] std::io::Error),

    #[error("{0}")]
    #[diagnostic(code(abstract_labels::other))]
    Other(String),
}

impl From<anyhow::Error> for CliError {
    fn from(err: anyhow::Error) -> Self {
        CliError::Other(format!("{:#}", err))
    }
}
