use std::fmt::Write;

/// Elements that never have children or a closing tag.
const VOID_TAGS: [&str; 2] = ["img", "br"];

/// A DOM-like display node.
///
/// Built with chained setters, mirroring how a UI toolkit creates an
/// element, adds classes and attributes, sets its text and appends children.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Node {
    pub tag: String,
    pub classes: Vec<String>,
    pub attributes: Vec<(String, String)>,
    pub text: Option<String>,
    pub children: Vec<Node>,
}

impl Node {
    pub fn new(tag: &str) -> Self {
        Self {
            tag: tag.to_string(),
            ..Self::default()
        }
    }

    pub fn class(mut self, class: &str) -> Self {
        self.classes.push(class.to_string());
        self
    }

    /// Sets an attribute, replacing any previous value.
    pub fn attr(mut self, name: &str, value: impl ToString) -> Self {
        let value = value.to_string();
        match self.attributes.iter_mut().find(|(n, _)| n == name) {
            Some(slot) => slot.1 = value,
            None => self.attributes.push((name.to_string(), value)),
        }
        self
    }

    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    pub fn child(mut self, child: Node) -> Self {
        self.children.push(child);
        self
    }

    pub fn append(&mut self, child: Node) {
        self.children.push(child);
    }

    pub fn get_attr(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }

    /// Depth-first search for the first descendant (or self) with `class`.
    pub fn find_by_class(&self, class: &str) -> Option<&Node> {
        if self.has_class(class) {
            return Some(self);
        }
        self.children.iter().find_map(|c| c.find_by_class(class))
    }

    /// All descendants (and self) with `class`, in document order.
    pub fn find_all_by_class<'a>(&'a self, class: &str) -> Vec<&'a Node> {
        let mut found = Vec::new();
        self.collect_by_class(class, &mut found);
        found
    }

    fn collect_by_class<'a>(&'a self, class: &str, found: &mut Vec<&'a Node>) {
        if self.has_class(class) {
            found.push(self);
        }
        for child in &self.children {
            child.collect_by_class(class, found);
        }
    }

    /// Concatenated text of this node and its descendants.
    pub fn text_content(&self) -> String {
        let mut out = String::new();
        self.collect_text(&mut out);
        out
    }

    fn collect_text(&self, out: &mut String) {
        if let Some(text) = &self.text {
            out.push_str(text);
        }
        for child in &self.children {
            child.collect_text(out);
        }
    }

    pub fn to_html(&self) -> String {
        let mut out = String::new();
        self.write_html(&mut out);
        out
    }

    fn write_html(&self, out: &mut String) {
        out.push('<');
        out.push_str(&self.tag);
        if !self.classes.is_empty() {
            let _ = write!(out, " class=\"{}\"", escape(&self.classes.join(" ")));
        }
        for (name, value) in &self.attributes {
            let _ = write!(out, " {}=\"{}\"", name, escape(value));
        }
        out.push('>');

        if VOID_TAGS.contains(&self.tag.as_str()) {
            return;
        }

        if let Some(text) = &self.text {
            out.push_str(&escape(text));
        }
        for child in &self.children {
            child.write_html(out);
        }
        let _ = write!(out, "</{}>", self.tag);
    }
}

fn escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            c => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builds_and_queries_a_tree() {
        let node = Node::new("div")
            .class("product")
            .attr("tabindex", 3)
            .child(Node::new("h1").class("product-name").text("Lip"))
            .child(
                Node::new("div")
                    .class("product-brands")
                    .child(Node::new("span").class("product-brand").text("nyx")),
            );

        assert_eq!(node.get_attr("tabindex"), Some("3"));
        assert_eq!(
            node.find_by_class("product-name").and_then(|n| n.text.as_deref()),
            Some("Lip")
        );
        assert_eq!(node.find_all_by_class("product-brand").len(), 1);
        assert_eq!(node.text_content(), "Lipnyx");
    }

    #[test]
    fn attr_replaces_existing_value() {
        let node = Node::new("img").attr("src", "a.png").attr("src", "b.png");
        assert_eq!(node.attributes.len(), 1);
        assert_eq!(node.get_attr("src"), Some("b.png"));
    }

    #[test]
    fn html_is_escaped_and_void_tags_are_not_closed() {
        let node = Node::new("figure")
            .child(Node::new("img").attr("alt", "Tom & \"Jerry\""))
            .child(Node::new("span").text("<b>"));

        assert_eq!(
            node.to_html(),
            "<figure><img alt=\"Tom &amp; &quot;Jerry&quot;\"><span>&lt;b&gt;</span></figure>"
        );
    }
}
