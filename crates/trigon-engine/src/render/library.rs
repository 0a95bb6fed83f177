use std::borrow::Cow;

use super::error::SetupError;

/// Entry point name of the vertex stage.
pub const VERTEX_ENTRY: &str = "vertexShader";

/// Entry point name of the fragment stage.
pub const FRAGMENT_ENTRY: &str = "fragmentShader";

const DEFAULT_SOURCE: &str = include_str!("shaders/triangle.wgsl");

/// A named entry point inside a [`ShaderLibrary`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShaderFunction {
    name: String,
    stage: naga::ShaderStage,
}

impl ShaderFunction {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn stage(&self) -> naga::ShaderStage {
        self.stage
    }
}

/// Compiled WGSL module plus its entry point table.
///
/// The source is parsed and validated with naga once, at load. After that the
/// library is read-only; the device compiles it again for its own backend when a
/// pipeline is built.
#[derive(Debug, Clone)]
pub struct ShaderLibrary {
    label: String,
    source: Cow<'static, str>,
    functions: Vec<ShaderFunction>,
}

impl ShaderLibrary {
    /// Loads the shader library embedded in the crate.
    pub fn default_library() -> Result<Self, SetupError> {
        Self::from_wgsl("default", DEFAULT_SOURCE)
    }

    /// Parses and validates WGSL source.
    pub fn from_wgsl(
        label: impl Into<String>,
        source: impl Into<Cow<'static, str>>,
    ) -> Result<Self, SetupError> {
        let label = label.into();
        let source = source.into();

        let module = naga::front::wgsl::parse_str(&source).map_err(|e| {
            SetupError::ShaderCompilation {
                label: label.clone(),
                message: e.emit_to_string(&source),
            }
        })?;

        naga::valid::Validator::new(
            naga::valid::ValidationFlags::all(),
            naga::valid::Capabilities::all(),
        )
        .validate(&module)
        .map_err(|e| SetupError::ShaderCompilation {
            label: label.clone(),
            message: e.emit_to_string(&source),
        })?;

        let functions: Vec<ShaderFunction> = module
            .entry_points
            .iter()
            .map(|ep| ShaderFunction {
                name: ep.name.clone(),
                stage: ep.stage,
            })
            .collect();

        log::debug!(
            "shader library `{label}` loaded with {} entry point(s)",
            functions.len()
        );

        Ok(Self { label, source, functions })
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    /// WGSL source text.
    pub fn source(&self) -> &str {
        &self.source
    }

    /// Looks up an entry point by name.
    pub fn function(&self, name: &str) -> Option<&ShaderFunction> {
        self.functions.iter().find(|f| f.name == name)
    }

    /// Looks up an entry point and checks its stage.
    pub fn function_for_stage(
        &self,
        name: &str,
        stage: naga::ShaderStage,
    ) -> Result<&ShaderFunction, SetupError> {
        let function = self.function(name).ok_or_else(|| SetupError::missing(name))?;
        if function.stage != stage {
            return Err(SetupError::WrongStage {
                name: name.to_string(),
                expected: stage,
                found: function.stage,
            });
        }
        Ok(function)
    }

    pub fn functions(&self) -> impl Iterator<Item = &ShaderFunction> {
        self.functions.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_library_has_both_stages() {
        let lib = ShaderLibrary::default_library().unwrap();

        let vs = lib.function(VERTEX_ENTRY).unwrap();
        assert_eq!(vs.stage(), naga::ShaderStage::Vertex);

        let fs = lib.function(FRAGMENT_ENTRY).unwrap();
        assert_eq!(fs.stage(), naga::ShaderStage::Fragment);

        assert_eq!(lib.functions().count(), 2);
    }

    #[test]
    fn lookup_of_unknown_name_is_none() {
        let lib = ShaderLibrary::default_library().unwrap();
        assert!(lib.function("vs_main").is_none());
    }

    #[test]
    fn empty_source_loads_without_entry_points() {
        let lib = ShaderLibrary::from_wgsl("empty", "").unwrap();
        assert_eq!(lib.functions().count(), 0);
        assert_eq!(
            lib.function_for_stage(VERTEX_ENTRY, naga::ShaderStage::Vertex),
            Err(SetupError::missing(VERTEX_ENTRY))
        );
    }

    #[test]
    fn garbage_source_fails_to_compile() {
        let err = ShaderLibrary::from_wgsl("broken", "fn vertexShader( {").unwrap_err();
        match err {
            SetupError::ShaderCompilation { label, message } => {
                assert_eq!(label, "broken");
                assert!(!message.is_empty());
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn stage_mismatch_is_reported() {
        let src = "@fragment fn vertexShader() -> @location(0) vec4<f32> { return vec4<f32>(1.0); }";
        let lib = ShaderLibrary::from_wgsl("swapped", src).unwrap();

        let err = lib
            .function_for_stage(VERTEX_ENTRY, naga::ShaderStage::Vertex)
            .unwrap_err();
        assert_eq!(
            err,
            SetupError::WrongStage {
                name: VERTEX_ENTRY.to_string(),
                expected: naga::ShaderStage::Vertex,
                found: naga::ShaderStage::Fragment,
            }
        );
    }
}
