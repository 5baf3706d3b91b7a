//! Abstract Syntax Tree for Zyra.
//!
//! The tree is shallow and strictly owned: a `Program` owns its components,
//! each `Component` owns its block nodes. Nothing is shared and nothing is
//! mutated after parsing.

/// A parsed source file: every `component` declaration, in source order.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Program {
    pub components: Vec<Component>,
}

/// A `component Name { ... }` declaration.
///
/// The name doubles as the generated script class name and the output file
/// stem, so the parser only accepts names valid in both places.
#[derive(Debug, Clone, PartialEq)]
pub struct Component {
    pub name: String,
    pub children: Vec<Node>,
}

impl Component {
    pub fn state(&self) -> Option<&StateBlock> {
        self.children.iter().find_map(|node| match node {
            Node::State(state) => Some(state),
            _ => None,
        })
    }

    pub fn events(&self) -> impl Iterator<Item = &EventHandler> {
        self.children.iter().filter_map(|node| match node {
            Node::Event(event) => Some(event),
            _ => None,
        })
    }
}

/// A block inside a component body.
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    /// `state { name: literal ... }`
    State(StateBlock),

    /// `style { property: literal ... }`
    Style(StyleBlock),

    /// `interface { Element { ... } ... }`
    Interface(InterfaceBlock),

    /// One `name -> { ... }` handler from an `eventos` block.
    Event(EventHandler),
}

impl Node {
    /// The keyword that introduces this block.
    pub fn keyword(&self) -> &'static str {
        match self {
            Node::State(_) => "state",
            Node::Style(_) => "style",
            Node::Interface(_) => "interface",
            Node::Event(_) => "eventos",
        }
    }
}

/// A `state` block. Declaration order is rendering order.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct StateBlock {
    pub variables: Vec<StateVariable>,
}

/// A state variable with its literal kept as raw source text (`"hi"`, `42`,
/// `true`, `ativo`). Classification happens at render time.
#[derive(Debug, Clone, PartialEq)]
pub struct StateVariable {
    pub name: String,
    pub value: String,
}

/// A `style` block.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct StyleBlock {
    pub properties: Vec<StyleProperty>,
}

/// A style property. Names like `cor` or `fundo` are translated at render time.
#[derive(Debug, Clone, PartialEq)]
pub struct StyleProperty {
    pub name: String,
    pub value: String,
}

/// An `interface` block.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct InterfaceBlock {
    pub elements: Vec<Element>,
}

/// A UI element instance such as `Botao { texto: "Enviar" acao: enviar }`.
#[derive(Debug, Clone, PartialEq)]
pub struct Element {
    pub name: String,
    /// The `texto` property.
    pub text: Option<ElementText>,
    /// The `acao` property: the method invoked on click.
    pub action: Option<String>,
}

/// Display text of an element.
#[derive(Debug, Clone, PartialEq)]
pub enum ElementText {
    /// Fixed text, quotes already stripped.
    Literal(String),
    /// Text bound to a state variable; the name is shown until the script runs.
    Bound(String),
}

impl ElementText {
    /// Text placed inside the element in the static HTML.
    pub fn placeholder(&self) -> &str {
        match self {
            ElementText::Literal(text) | ElementText::Bound(text) => text,
        }
    }

    pub fn binding(&self) -> Option<&str> {
        match self {
            ElementText::Bound(name) => Some(name),
            ElementText::Literal(_) => None,
        }
    }
}

/// An event handler: a method name plus its pre-joined statement text,
/// with identifiers already rewritten to `this.<name>`.
#[derive(Debug, Clone, PartialEq)]
pub struct EventHandler {
    pub name: String,
    pub body: String,
}
