//! WASM bindings for the Zyra compiler.
//!
//! Exposes `compile()` to JavaScript via wasm-bindgen.
//! Returns a JS object `{ html, scripts }` or throws on error.

use serde::Serialize;
use wasm_bindgen::prelude::*;
use zyra_codegen::{Site, SiteOptions};

/// One component's script file.
#[derive(Debug, Serialize)]
pub struct ComponentScript {
    /// Component name; the file is `<name>.js`.
    pub name: String,
    pub script: String,
}

/// Compiled site as handed to JavaScript.
#[derive(Debug, Serialize)]
pub struct CompiledSite {
    /// The full `index.html` document.
    pub html: String,
    /// Component scripts in declaration order.
    pub scripts: Vec<ComponentScript>,
}

impl CompiledSite {
    fn from_site(site: &Site) -> Self {
        Self {
            html: site.render_document(&SiteOptions::default()),
            scripts: site
                .components
                .iter()
                .map(|c| ComponentScript {
                    name: c.name.clone(),
                    script: c.script.clone(),
                })
                .collect(),
        }
    }
}

/// Compile Zyra source into the native output structure.
pub fn compile_site(source: &str) -> Result<CompiledSite, zyra_codegen::BuildError> {
    let site = zyra_codegen::compile(source)?;
    Ok(CompiledSite::from_site(&site))
}

/// Compile Zyra source to an HTML document plus per-component scripts.
///
/// Returns a JS object with `{ html: string, scripts: { name, script }[] }`.
/// Throws a JS error if scanning or parsing fails.
#[wasm_bindgen]
pub fn compile(source: &str) -> Result<JsValue, JsError> {
    let compiled = compile_site(source).map_err(|e| JsError::new(&e.to_string()))?;
    serde_wasm_bindgen::to_value(&compiled).map_err(|e| JsError::new(&e.to_string()))
}

/// Get the compiler version.
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    // =========================================================================
    // Native tests (non-WASM): verify the compile pipeline works
    // =========================================================================

    #[test]
    fn test_empty_source() {
        let compiled = compile_site("").unwrap();
        assert!(compiled.scripts.is_empty());
        assert!(compiled.html.contains("<body>\n</body>"));
    }

    #[test]
    fn test_scripts_in_declaration_order() {
        let compiled = compile_site("component Z { } component A { }").unwrap();
        let names: Vec<&str> = compiled.scripts.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, vec!["Z", "A"]);
        assert!(compiled.scripts[0].script.ends_with("new Z();\n"));
        assert!(compiled.scripts[1].script.ends_with("new A();\n"));
    }

    #[test]
    fn test_document_references_scripts_in_declaration_order() {
        let compiled = compile_site("component Z { } component A { }").unwrap();
        let z = compiled.html.find("<script src=\"Z.js\">").unwrap();
        let a = compiled.html.find("<script src=\"A.js\">").unwrap();
        assert!(z < a);
    }

    #[test]
    fn test_style_alias_reaches_document() {
        let compiled = compile_site("component A { style { cor: \"#fff\" } }").unwrap();
        assert!(compiled.html.contains("  color: #fff;\n"));
    }

    #[test]
    fn test_bound_state_round_trip() {
        let compiled = compile_site(
            "component Perfil { state { nome: \"Ana\" } interface { Campo { texto: nome } } }",
        )
        .unwrap();
        assert!(compiled
            .html
            .contains("<div class=\"Campo\" data-bind=\"nome\">nome</div>"));
        assert!(compiled.scripts[0].script.contains("    this.nome = \"Ana\";\n"));
    }

    #[test]
    fn test_error_message() {
        let err = compile_site("component A {").unwrap_err();
        assert_eq!(
            err.to_string(),
            "Parse error at line 1, column 14: Expected '}' after component body, found end of input"
        );
    }

    #[test]
    fn test_version() {
        assert_eq!(version(), env!("CARGO_PKG_VERSION"));
    }
}
