use std::borrow::Cow;
use std::collections::HashMap;

use anyhow::{bail, Result};

/// WGSL source registry keyed by shader id.
///
/// A shape resolves its stage pair through [`resolve_pair`]; a missing
/// registration fails there, before any device work happens.
#[derive(Debug, Clone, Default)]
pub struct ShaderLibrary {
    sources: HashMap<String, Cow<'static, str>>,
}

impl ShaderLibrary {
    /// Empty library.
    pub fn new() -> Self {
        Self::default()
    }

    /// Library preloaded with the stock shape stage pairs.
    pub fn builtin() -> Self {
        let mut lib = Self::new();
        lib.register("Cone-vertex-shader", include_str!("shaders/cone_vertex.wgsl"));
        lib.register("Cone-fragment-shader", include_str!("shaders/cone_fragment.wgsl"));
        lib.register("Cube-vertex-shader", include_str!("shaders/cube_vertex.wgsl"));
        lib.register("Cube-fragment-shader", include_str!("shaders/cube_fragment.wgsl"));
        lib
    }

    /// Registers (or replaces) a source under `id`.
    pub fn register(&mut self, id: impl Into<String>, source: impl Into<Cow<'static, str>>) {
        self.sources.insert(id.into(), source.into());
    }

    /// Looks up a single source by id.
    pub fn lookup(&self, id: &str) -> Option<&str> {
        self.sources.get(id).map(|s| s.as_ref())
    }

    /// Resolves a vertex/fragment source pair.
    ///
    /// The error names both ids, so a misregistered pair is diagnosable from
    /// the message alone.
    pub fn resolve_pair(&self, vertex_id: &str, fragment_id: &str) -> Result<(&str, &str)> {
        let vertex = self.lookup(vertex_id);
        let fragment = self.lookup(fragment_id);

        if let (Some(vs), Some(fs)) = (vertex, fragment) {
            return Ok((vs, fs));
        }

        let mut missing = Vec::new();
        if vertex.is_none() {
            missing.push(vertex_id);
        }
        if fragment.is_none() {
            missing.push(fragment_id);
        }

        bail!(
            "unregistered shader id(s): {}; wanted vertex shader id {vertex_id:?} \
             and fragment shader id {fragment_id:?}",
            missing.join(", ")
        );
    }
}

/// Derives the conventional shader id pair for a shape name.
pub fn conventional_ids(shape: &str) -> (String, String) {
    (
        format!("{shape}-vertex-shader"),
        format!("{shape}-fragment-shader"),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    // ── conventional ids ──────────────────────────────────────────────────

    #[test]
    fn conventional_ids_follow_the_shape_name() {
        let (vs, fs) = conventional_ids("Cone");
        assert_eq!(vs, "Cone-vertex-shader");
        assert_eq!(fs, "Cone-fragment-shader");
    }

    // ── builtin sources ───────────────────────────────────────────────────

    #[test]
    fn builtin_registers_both_stock_shape_pairs() {
        let lib = ShaderLibrary::builtin();
        for shape in ["Cone", "Cube"] {
            let (vs, fs) = conventional_ids(shape);
            assert!(lib.resolve_pair(&vs, &fs).is_ok());
        }
    }

    #[test]
    fn builtin_sources_declare_both_entry_points() {
        let lib = ShaderLibrary::builtin();
        let (vs_id, fs_id) = conventional_ids("Cube");
        let (vs, fs) = lib.resolve_pair(&vs_id, &fs_id).unwrap();
        assert!(vs.contains("fn vs_main"));
        assert!(fs.contains("fn fs_main"));
    }

    #[test]
    fn builtin_sources_pass_wgsl_validation() {
        // Same front end the device runs at module creation; a source that
        // fails here would trip the build-time validation scope.
        let lib = ShaderLibrary::builtin();
        for shape in ["Cone", "Cube"] {
            let (vs_id, fs_id) = conventional_ids(shape);
            let (vs, fs) = lib.resolve_pair(&vs_id, &fs_id).unwrap();
            for (id, source) in [(&vs_id, vs), (&fs_id, fs)] {
                let module = naga::front::wgsl::parse_str(source)
                    .unwrap_or_else(|err| panic!("{id} does not parse: {err:?}"));
                naga::valid::Validator::new(
                    naga::valid::ValidationFlags::all(),
                    naga::valid::Capabilities::default(),
                )
                .validate(&module)
                .unwrap_or_else(|err| panic!("{id} fails validation: {err:?}"));
            }
        }
    }

    // ── resolution failures ───────────────────────────────────────────────

    #[test]
    fn missing_pair_error_names_both_ids() {
        let lib = ShaderLibrary::builtin();
        let err = lib
            .resolve_pair("Teapot-vertex-shader", "Teapot-fragment-shader")
            .unwrap_err();
        let msg = err.to_string();
        assert!(msg.contains("Teapot-vertex-shader"));
        assert!(msg.contains("Teapot-fragment-shader"));
    }

    #[test]
    fn missing_fragment_error_still_names_both_ids() {
        let lib = ShaderLibrary::builtin();
        let err = lib
            .resolve_pair("Cone-vertex-shader", "Teapot-fragment-shader")
            .unwrap_err();
        let msg = err.to_string();
        assert!(msg.contains("Cone-vertex-shader"));
        assert!(msg.contains("Teapot-fragment-shader"));
    }

    // ── registration ──────────────────────────────────────────────────────

    #[test]
    fn registered_source_resolves() {
        let mut lib = ShaderLibrary::new();
        lib.register("Custom-vertex-shader", "@vertex fn vs_main() {}");
        lib.register("Custom-fragment-shader", "@fragment fn fs_main() {}");
        let (vs, _) = lib
            .resolve_pair("Custom-vertex-shader", "Custom-fragment-shader")
            .unwrap();
        assert!(vs.contains("vs_main"));
    }

    #[test]
    fn register_replaces_an_existing_id() {
        let mut lib = ShaderLibrary::new();
        lib.register("X-vertex-shader", "old");
        lib.register("X-vertex-shader", "new");
        assert_eq!(lib.lookup("X-vertex-shader"), Some("new"));
    }

    #[test]
    fn lookup_of_an_unknown_id_is_none() {
        assert_eq!(ShaderLibrary::new().lookup("nope"), None);
    }
}
