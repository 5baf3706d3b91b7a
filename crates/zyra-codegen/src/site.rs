//! Site assembly.
//!
//! Collects rendered components and produces the output directory:
//! `index.html` with every component fragment followed by one `<script>`
//! reference per component, plus a `<Name>.js` file for each component.

use std::path::Path;

use crate::BuildError;

/// Options for the generated document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiteOptions {
    /// Contents of the document `<title>`.
    pub title: String,
}

impl Default for SiteOptions {
    fn default() -> Self {
        Self {
            title: "Zyra Site".to_string(),
        }
    }
}

/// The rendered output of a single component.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedComponent {
    pub name: String,
    pub html: String,
    pub script: String,
}

impl RenderedComponent {
    /// The component's script file name, referenced from `index.html`.
    pub fn script_file_name(&self) -> String {
        format!("{}.js", self.name)
    }
}

/// Every rendered component of a source file, in declaration order.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Site {
    pub components: Vec<RenderedComponent>,
}

impl Site {
    /// Build the `index.html` document.
    pub fn render_document(&self, options: &SiteOptions) -> String {
        let mut html = String::new();
        html.push_str("<!DOCTYPE html>\n<html>\n<head>\n");
        html.push_str("<meta charset=\"UTF-8\">\n");
        html.push_str(&format!("<title>{}</title>\n", options.title));
        html.push_str("</head>\n<body>\n");

        for component in &self.components {
            html.push_str(&component.html);
        }
        for component in &self.components {
            html.push_str(&format!(
                "<script src=\"{}\"></script>\n",
                component.script_file_name()
            ));
        }

        html.push_str("</body>\n</html>\n");
        html
    }

    /// Write the site into `dir`, creating it if needed. Existing files are
    /// overwritten. Each file is written and closed before the next one.
    pub fn write_to(&self, dir: &Path, options: &SiteOptions) -> Result<(), BuildError> {
        std::fs::create_dir_all(dir).map_err(|source| BuildError::Io {
            path: dir.to_path_buf(),
            source,
        })?;

        for component in &self.components {
            let path = dir.join(component.script_file_name());
            write_file(&path, &component.script)?;
        }

        write_file(&dir.join("index.html"), &self.render_document(options))
    }
}

fn write_file(path: &Path, contents: &str) -> Result<(), BuildError> {
    std::fs::write(path, contents).map_err(|source| BuildError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    log::debug!("wrote {} ({} bytes)", path.display(), contents.len());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn rendered(name: &str, html: &str) -> RenderedComponent {
        RenderedComponent {
            name: name.into(),
            html: html.into(),
            script: format!("new {name}();\n"),
        }
    }

    // =========================================================================
    // Document
    // =========================================================================

    #[test]
    fn test_empty_document() {
        assert_eq!(
            Site::default().render_document(&SiteOptions::default()),
            "<!DOCTYPE html>\n<html>\n<head>\n<meta charset=\"UTF-8\">\n<title>Zyra Site</title>\n</head>\n<body>\n</body>\n</html>\n"
        );
    }

    #[test]
    fn test_fragments_then_scripts_in_order() {
        let site = Site {
            components: vec![rendered("A", "<div id=\"A\"></div>\n"), rendered("B", "<div id=\"B\"></div>\n")],
        };
        let html = site.render_document(&SiteOptions::default());
        assert!(html.contains(
            "<body>\n<div id=\"A\"></div>\n<div id=\"B\"></div>\n<script src=\"A.js\"></script>\n<script src=\"B.js\"></script>\n</body>"
        ));
    }

    #[test]
    fn test_custom_title() {
        let options = SiteOptions {
            title: "Minha Loja".into(),
        };
        assert!(Site::default()
            .render_document(&options)
            .contains("<title>Minha Loja</title>"));
    }

    // =========================================================================
    // Writing
    // =========================================================================

    #[test]
    fn test_write_creates_directory_and_files() {
        let tmp = tempfile::tempdir().unwrap();
        let out = tmp.path().join("dist").join("site");
        let site = Site {
            components: vec![rendered("A", ""), rendered("B", "")],
        };

        site.write_to(&out, &SiteOptions::default()).unwrap();

        assert_eq!(std::fs::read_to_string(out.join("A.js")).unwrap(), "new A();\n");
        assert_eq!(std::fs::read_to_string(out.join("B.js")).unwrap(), "new B();\n");
        assert_eq!(
            std::fs::read_to_string(out.join("index.html")).unwrap(),
            site.render_document(&SiteOptions::default())
        );
    }

    #[test]
    fn test_write_overwrites_existing_files() {
        let tmp = tempfile::tempdir().unwrap();
        std::fs::write(tmp.path().join("A.js"), "antigo").unwrap();
        std::fs::write(tmp.path().join("index.html"), "antigo").unwrap();
        let site = Site {
            components: vec![rendered("A", "")],
        };

        site.write_to(tmp.path(), &SiteOptions::default()).unwrap();

        assert_eq!(std::fs::read_to_string(tmp.path().join("A.js")).unwrap(), "new A();\n");
        assert!(std::fs::read_to_string(tmp.path().join("index.html"))
            .unwrap()
            .starts_with("<!DOCTYPE html>"));
    }

    #[test]
    fn test_write_into_file_path_fails() {
        let tmp = tempfile::tempdir().unwrap();
        let blocker = tmp.path().join("ocupado");
        std::fs::write(&blocker, "").unwrap();

        let err = Site::default()
            .write_to(&blocker, &SiteOptions::default())
            .unwrap_err();

        assert!(matches!(err, BuildError::Io { ref path, .. } if path == &blocker));
    }
}
