//! HTML code generator.
//!
//! Walks a component tree and generates its HTML fragment. Interface
//! elements carry `data-bind` and `data-action` markers that the generated
//! script resolves at runtime.

use crate::css;
use zyra_parser::ast::{Component, Element, InterfaceBlock, Node};

/// Generate the container `div` for a component and its blocks.
pub fn component(component: &Component) -> String {
    let mut html = format!(
        "<div class=\"component {name}\" id=\"{name}\">\n",
        name = component.name
    );

    for child in &component.children {
        html.push_str(&node(child));
    }

    html.push_str("</div>\n");
    html
}

/// HTML for one block. State and events only produce script.
pub fn node(node: &Node) -> String {
    match node {
        Node::Style(style) => css::stylesheet(style),
        Node::Interface(interface) => self::interface(interface),
        Node::State(_) | Node::Event(_) => String::new(),
    }
}

pub fn interface(interface: &InterfaceBlock) -> String {
    interface.elements.iter().map(element).collect()
}

/// Generate one element, e.g.
/// `<button class="Botao" data-action="enviar">Clique</button>`.
pub fn element(element: &Element) -> String {
    let tag = tag_for(&element.name);
    let mut html = format!("<{tag} class=\"{}\"", element.name);

    if let Some(binding) = element.text.as_ref().and_then(|text| text.binding()) {
        html.push_str(&format!(" data-bind=\"{binding}\""));
    }
    if let Some(action) = &element.action {
        html.push_str(&format!(" data-action=\"{action}\""));
    }

    html.push('>');
    if let Some(text) = &element.text {
        html.push_str(text.placeholder());
    }
    html.push_str(&format!("</{tag}>\n"));
    html
}

/// `Botao` is the only element with its own tag; everything else is a `div`.
pub fn tag_for(element_name: &str) -> &'static str {
    match element_name {
        "Botao" => "button",
        _ => "div",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use zyra_parser::ast::{ElementText, StateBlock, StyleBlock};

    fn el(name: &str, text: Option<ElementText>, action: Option<&str>) -> Element {
        Element {
            name: name.into(),
            text,
            action: action.map(String::from),
        }
    }

    // =========================================================================
    // Elements
    // =========================================================================

    #[test]
    fn test_button_with_action() {
        let html = element(&el(
            "Botao",
            Some(ElementText::Literal("Clique".into())),
            Some("enviar"),
        ));
        assert_eq!(html, "<button class=\"Botao\" data-action=\"enviar\">Clique</button>\n");
    }

    #[test]
    fn test_bound_text_placeholder() {
        let html = element(&el("Campo", Some(ElementText::Bound("nome".into())), None));
        assert_eq!(html, "<div class=\"Campo\" data-bind=\"nome\">nome</div>\n");
    }

    #[test]
    fn test_bound_button_attribute_order() {
        let html = element(&el(
            "Botao",
            Some(ElementText::Bound("rotulo".into())),
            Some("alternar"),
        ));
        assert_eq!(
            html,
            "<button class=\"Botao\" data-bind=\"rotulo\" data-action=\"alternar\">rotulo</button>\n"
        );
    }

    #[test]
    fn test_element_without_text() {
        assert_eq!(element(&el("Divisor", None, None)), "<div class=\"Divisor\"></div>\n");
    }

    #[test]
    fn test_tag_mapping_is_exact() {
        assert_eq!(tag_for("Botao"), "button");
        assert_eq!(tag_for("botao"), "div");
        assert_eq!(tag_for("Titulo"), "div");
    }

    // =========================================================================
    // Components
    // =========================================================================

    #[test]
    fn test_empty_component() {
        let c = Component {
            name: "Vazio".into(),
            children: Vec::new(),
        };
        assert_eq!(
            component(&c),
            "<div class=\"component Vazio\" id=\"Vazio\">\n</div>\n"
        );
    }

    #[test]
    fn test_component_children_in_order() {
        let c = Component {
            name: "App".into(),
            children: vec![
                Node::State(StateBlock::default()),
                Node::Interface(InterfaceBlock {
                    elements: vec![el("Titulo", Some(ElementText::Literal("Oi".into())), None)],
                }),
                Node::Style(StyleBlock::default()),
            ],
        };
        let html = component(&c);
        assert!(html.starts_with("<div class=\"component App\" id=\"App\">\n<div class=\"Titulo\">Oi</div>\n<style>\n"));
        assert!(html.ends_with("</style>\n</div>\n"));
    }
}
