//! Zyra Code Generator
//!
//! Renders parsed components into a static site: one shared HTML document
//! plus one standalone script per component. Text is emitted straight from
//! the syntax tree; each node kind has its own small formatting layer.
//!
//! ```text
//! source → Scanner → Parser → Program
//!        → render_component() per component → Site { index.html, <Name>.js }
//! ```

pub mod css;
pub mod html;
pub mod js;
pub mod site;

use std::path::{Path, PathBuf};

use zyra_lexer::{LexerError, Scanner};
use zyra_parser::ast::{Component, Program};
use zyra_parser::{ParseError, Parser};

pub use site::{RenderedComponent, Site, SiteOptions};

/// Any failure while building a site.
///
/// The three categories stay distinct here; at the program boundary they
/// all become one message and a non-zero exit status.
#[derive(Debug, thiserror::Error)]
pub enum BuildError {
    #[error("I/O error on {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error(transparent)]
    Lex(#[from] LexerError),

    #[error(transparent)]
    Parse(#[from] ParseError),
}

/// Compile source text into a rendered site, without touching the filesystem.
///
/// The whole source is scanned and parsed before anything is rendered, so a
/// malformed component anywhere produces no output at all.
pub fn compile(source: &str) -> Result<Site, BuildError> {
    let tokens = Scanner::tokenize(source)?;
    let program = Parser::new(tokens).parse_program()?;
    Ok(render_program(&program))
}

/// Render every component of a program, in declaration order.
pub fn render_program(program: &Program) -> Site {
    Site {
        components: program.components.iter().map(render_component).collect(),
    }
}

/// Render one component into its HTML fragment and script text.
pub fn render_component(component: &Component) -> RenderedComponent {
    RenderedComponent {
        name: component.name.clone(),
        html: html::component(component),
        script: js::component(component),
    }
}

/// Read a source file, compile it, and write the site into `out_dir`.
pub fn build_file(
    input: &Path,
    out_dir: &Path,
    options: &SiteOptions,
) -> Result<Site, BuildError> {
    let source = std::fs::read_to_string(input).map_err(|source| BuildError::Io {
        path: input.to_path_buf(),
        source,
    })?;

    let site = compile(&source)?;
    site.write_to(out_dir, options)?;
    Ok(site)
}
