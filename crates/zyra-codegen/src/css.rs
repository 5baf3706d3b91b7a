//! CSS code generator.
//!
//! A `style` block becomes an inline `<style>` element: one rule for the
//! component container plus a fixed baseline rule for buttons.

use zyra_parser::ast::StyleBlock;

/// Baseline rule appended after every component rule.
const BUTTON_RULE: &str = "button {
  padding: 10px 20px;
  border: none;
  border-radius: 5px;
  cursor: pointer;
  margin: 5px;
}
";

/// Generate the `<style>` element for a style block.
pub fn stylesheet(style: &StyleBlock) -> String {
    let mut css = String::from("<style>\n.component {\n");

    for property in &style.properties {
        css.push_str(&format!(
            "  {}: {};\n",
            css_property_name(&property.name),
            css_value(&property.value)
        ));
    }

    css.push_str("}\n\n");
    css.push_str(BUTTON_RULE);
    css.push_str("</style>\n");
    css
}

/// Translate a Zyra property alias into its CSS name. Other names pass through.
pub fn css_property_name(name: &str) -> &str {
    match name {
        "cor" => "color",
        "fundo" => "background-color",
        "tamanho" => "font-size",
        other => other,
    }
}

/// CSS value for a raw literal: quoted strings lose their quotes.
fn css_value(raw: &str) -> &str {
    raw.strip_prefix('"')
        .and_then(|rest| rest.strip_suffix('"'))
        .unwrap_or(raw)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use zyra_parser::ast::StyleProperty;

    fn style(properties: &[(&str, &str)]) -> StyleBlock {
        StyleBlock {
            properties: properties
                .iter()
                .map(|(name, value)| StyleProperty {
                    name: name.to_string(),
                    value: value.to_string(),
                })
                .collect(),
        }
    }

    #[test]
    fn test_aliases() {
        assert_eq!(css_property_name("cor"), "color");
        assert_eq!(css_property_name("fundo"), "background-color");
        assert_eq!(css_property_name("tamanho"), "font-size");
        assert_eq!(css_property_name("margin-top"), "margin-top");
    }

    #[test]
    fn test_quoted_color_value() {
        let css = stylesheet(&style(&[("cor", "\"#fff\"")]));
        assert!(css.contains("  color: #fff;\n"));
    }

    #[test]
    fn test_declaration_order_is_kept() {
        let css = stylesheet(&style(&[("tamanho", "18px"), ("fundo", "#000"), ("padding", "1rem")]));
        let rule = css.split("}\n").next().unwrap();
        assert_eq!(
            rule,
            "<style>\n.component {\n  font-size: 18px;\n  background-color: #000;\n  padding: 1rem;\n"
        );
    }

    #[test]
    fn test_empty_style_still_has_baseline() {
        assert_eq!(
            stylesheet(&StyleBlock::default()),
            "<style>\n.component {\n}\n\nbutton {\n  padding: 10px 20px;\n  border: none;\n  border-radius: 5px;\n  cursor: pointer;\n  margin: 5px;\n}\n</style>\n"
        );
    }

    #[test]
    fn test_lone_quote_is_kept() {
        assert_eq!(css_value("\""), "\"");
        assert_eq!(css_value("\"\""), "");
    }
}
