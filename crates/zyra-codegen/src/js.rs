//! JavaScript code generator.
//!
//! Each component becomes one class with a fixed runtime convention:
//! `init()` assigns state, `setupEvents()` wires `data-action` buttons to
//! same-named methods, and `updateView()` copies bound state into elements
//! marked with `data-bind`. Event methods call `updateView()` after running.

use zyra_parser::ast::{Component, EventHandler, Node, StateBlock};

/// How a raw state literal is emitted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LiteralKind {
    /// Already quoted, emitted verbatim.
    String,
    /// `true` or `false`.
    Boolean,
    /// A plain number such as `42`, `-1` or `3.5`.
    Number,
    /// Anything else (`ativo`, `50%`, `#fff`), emitted as a string constant.
    Bare,
}

/// Classify a raw literal from a `state` block.
pub fn classify_literal(raw: &str) -> LiteralKind {
    if raw.starts_with('"') {
        LiteralKind::String
    } else if raw == "true" || raw == "false" {
        LiteralKind::Boolean
    } else if is_plain_number(raw) {
        LiteralKind::Number
    } else {
        LiteralKind::Bare
    }
}

/// `-?digits(.digits)?`, the only numeric shape the scanner produces.
fn is_plain_number(raw: &str) -> bool {
    let unsigned = raw.strip_prefix('-').unwrap_or(raw);
    let (integer, fraction) = match unsigned.split_once('.') {
        Some((integer, fraction)) => (integer, Some(fraction)),
        None => (unsigned, None),
    };
    let digits = |part: &str| !part.is_empty() && part.bytes().all(|b| b.is_ascii_digit());
    digits(integer) && fraction.map_or(true, digits)
}

/// Script expression for a raw state literal.
pub fn literal_to_js(raw: &str) -> String {
    match classify_literal(raw) {
        LiteralKind::String | LiteralKind::Boolean | LiteralKind::Number => raw.to_string(),
        LiteralKind::Bare => format!("\"{raw}\""),
    }
}

/// Generate the full script for a component.
pub fn component(component: &Component) -> String {
    let name = &component.name;
    let mut js = String::new();

    js.push_str(&format!("class {name} {{\n"));
    js.push_str("  constructor() {\n");
    js.push_str("    this.init();\n");
    js.push_str("    this.setupEvents();\n");
    js.push_str("  }\n\n");

    js.push_str("  setupEvents() {\n");
    js.push_str(&format!(
        "    const root = document.getElementById('{name}') || document;\n"
    ));
    js.push_str("    root.querySelectorAll('button[data-action]').forEach(button => {\n");
    js.push_str("      const action = button.getAttribute('data-action');\n");
    js.push_str("      if (typeof this[action] === 'function') {\n");
    js.push_str("        button.onclick = () => this[action]();\n");
    js.push_str("      }\n");
    js.push_str("    });\n");
    js.push_str("  }\n\n");

    js.push_str("  updateView() {\n");
    js.push_str(&format!(
        "    const root = document.getElementById('{name}') || document;\n"
    ));
    js.push_str("    root.querySelectorAll('[data-bind]').forEach(element => {\n");
    js.push_str("      const binding = element.getAttribute('data-bind');\n");
    js.push_str("      if (this[binding] !== undefined) {\n");
    js.push_str("        element.textContent = this[binding];\n");
    js.push_str("      }\n");
    js.push_str("    });\n");
    js.push_str("  }\n\n");

    // The constructor always calls init(), so stateless components get an empty one.
    if component.state().is_none() {
        js.push_str(&init(&StateBlock::default()));
    }

    for child in &component.children {
        js.push_str(&node(child));
    }

    js.push_str("}\n\n");
    js.push_str(&format!("new {name}();\n"));
    js
}

/// Script for one block. Style and interface only produce HTML.
pub fn node(node: &Node) -> String {
    match node {
        Node::State(state) => init(state),
        Node::Event(event) => method(event),
        Node::Style(_) | Node::Interface(_) => String::new(),
    }
}

/// Generate `init()` from a state block.
pub fn init(state: &StateBlock) -> String {
    let mut js = String::from("  init() {\n");

    for variable in &state.variables {
        js.push_str(&format!(
            "    this.{} = {};\n",
            variable.name,
            literal_to_js(&variable.value)
        ));
    }

    js.push_str("    this.updateView();\n");
    js.push_str("  }\n\n");
    js
}

/// Generate the method for an event handler.
pub fn method(event: &EventHandler) -> String {
    let mut js = format!("  {}() {{\n", event.name);

    if !event.body.is_empty() {
        js.push_str(&format!("    {}\n", event.body));
    }

    js.push_str("    this.updateView();\n");
    js.push_str("  }\n\n");
    js
}
