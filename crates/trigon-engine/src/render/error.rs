use std::fmt;

/// A pipeline setup failure.
///
/// Setup errors are unrecoverable for the triangle view: without a pipeline no
/// frame can render. The runtime logs them and terminates.
#[derive(Debug, Clone, PartialEq)]
pub enum SetupError {
    /// Shader source failed to parse or validate.
    ShaderCompilation { label: String, message: String },
    /// The library has no entry point with this name.
    MissingEntryPoint { name: String },
    /// The entry point exists but belongs to another pipeline stage.
    WrongStage {
        name: String,
        expected: naga::ShaderStage,
        found: naga::ShaderStage,
    },
    /// The device refused the pipeline configuration.
    PipelineRejected { reason: String },
}

impl SetupError {
    pub(crate) fn missing(name: &str) -> Self {
        Self::MissingEntryPoint { name: name.to_string() }
    }

    pub(crate) fn rejected(reason: impl Into<String>) -> Self {
        Self::PipelineRejected { reason: reason.into() }
    }
}

impl fmt::Display for SetupError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ShaderCompilation { label, message } => {
                write!(f, "failed to compile shader library `{label}`: {message}")
            }
            Self::MissingEntryPoint { name } => {
                write!(f, "shader library has no entry point named `{name}`")
            }
            Self::WrongStage { name, expected, found } => write!(
                f,
                "entry point `{name}` is a {found:?} stage, expected {expected:?}"
            ),
            Self::PipelineRejected { reason } => {
                write!(f, "failed to create render pipeline state: {reason}")
            }
        }
    }
}

impl std::error::Error for SetupError {}
