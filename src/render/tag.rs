use std::fmt;

/// A rendered QML object: an element name, ordered properties, and children.
///
/// Property values are stored as raw QML expressions; callers quote string
/// values themselves (see `format_color_expression` for colors).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QmlTag {
    element: String,
    properties: Vec<(String, String)>,
    children: Vec<QmlTag>,
}

impl QmlTag {
    pub fn new(element: impl Into<String>) -> Self {
        Self {
            element: element.into(),
            properties: Vec::new(),
            children: Vec::new(),
        }
    }

    pub fn add_property(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.properties.push((name.into(), value.into()));
    }

    pub fn with_property(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.add_property(name, value);
        self
    }

    pub fn add_child(&mut self, child: QmlTag) {
        self.children.push(child);
    }

    pub fn with_child(mut self, child: QmlTag) -> Self {
        self.add_child(child);
        self
    }

    pub fn element(&self) -> &str {
        &self.element
    }

    /// Value of the first property with the given name, if present.
    pub fn property(&self, name: &str) -> Option<&str> {
        self.properties
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }

    pub fn children(&self) -> &[QmlTag] {
        &self.children
    }

    fn write_indented(&self, f: &mut fmt::Formatter<'_>, depth: usize) -> fmt::Result {
        let indent = "    ".repeat(depth);
        writeln!(f, "{}{} {{", indent, self.element)?;
        for (name, value) in &self.properties {
            writeln!(f, "{}    {}: {}", indent, name, value)?;
        }
        for child in &self.children {
            child.write_indented(f, depth + 1)?;
        }
        writeln!(f, "{}}}", indent)
    }
}

impl fmt::Display for QmlTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.write_indented(f, 0)
    }
}
