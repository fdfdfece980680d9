use super::{Argument, Block, FormalList, Node, Value};

/// Renders syntax trees in a stable `Variant(field=value, ...)` notation.
///
/// The output only depends on the tree, so it can be diffed between runs.
/// The pretty layout breaks a node over several lines only when its
/// compact form does not fit into the configured width.
#[derive(Debug, Clone)]
pub struct Writer {
    width: Option<usize>,
    indent: usize,
}

// Intermediate form shared by both layouts.
enum Doc {
    Atom(String),
    Record(&'static str, Vec<(&'static str, Doc)>),
    List(Vec<Doc>),
    Pair(Box<Doc>, Box<Doc>),
}

impl Writer {
    pub fn new() -> Self {
        Writer {
            width: None,
            indent: 2,
        }
    }

    pub fn pretty() -> Self {
        Writer {
            width: Some(80),
            indent: 2,
        }
    }

    pub fn write(&self, node: &Node) -> String {
        self.render(&self.node(node))
    }

    pub fn write_block(&self, block: &Block) -> String {
        self.render(&self.block(block))
    }

    fn render(&self, doc: &Doc) -> String {
        let mut out = String::new();
        match self.width {
            None => self.compact(doc, &mut out),
            Some(width) => self.layout(doc, 0, width, &mut out),
        }
        out
    }

    //////////////////////////////
    // Tree to doc
    //////////////////////////////

    fn node(&self, node: &Node) -> Doc {
        match node {
            Node::Block(block) => self.block(block),
            Node::Vector(vector) => Doc::Record(
                "Vector",
                vec![(
                    "values",
                    Doc::List(vector.values.iter().map(|v| self.value(v)).collect()),
                )],
            ),
            Node::Na => Doc::Record("Na", vec![]),
            Node::Symbol(name) => self.symbol(name),
            Node::UnaryOperation { operator, operand } => Doc::Record(
                "UnaryOperation",
                vec![
                    ("operator", string(operator)),
                    ("operand", self.node(operand)),
                ],
            ),
            Node::BinaryOperation {
                operator,
                left,
                right,
            } => Doc::Record(
                "BinaryOperation",
                vec![
                    ("operator", string(operator)),
                    ("left", self.node(left)),
                    ("right", self.node(right)),
                ],
            ),
            Node::Assign { target, value } => Doc::Record(
                "Assign",
                vec![("target", self.node(target)), ("value", self.node(value))],
            ),
            Node::Function { formals, body } => Doc::Record(
                "Function",
                vec![("formals", self.formals(formals)), ("body", self.node(body))],
            ),
            Node::Call {
                function,
                arguments,
            } => Doc::Record(
                "Call",
                vec![
                    ("function", self.node(function)),
                    ("arguments", self.arguments(arguments)),
                ],
            ),
            Node::Index {
                operator,
                target,
                arguments,
            } => Doc::Record(
                "Index",
                vec![
                    ("operator", string(operator)),
                    ("target", self.node(target)),
                    ("arguments", self.arguments(arguments)),
                ],
            ),
        }
    }

    fn block(&self, block: &Block) -> Doc {
        Doc::Record(
            "Block",
            vec![(
                "statements",
                Doc::List(block.iter().map(|n| self.node(n)).collect()),
            )],
        )
    }

    fn symbol(&self, name: &str) -> Doc {
        Doc::Record("Symbol", vec![("name", string(name))])
    }

    fn formals(&self, formals: &FormalList) -> Doc {
        let pairs = formals
            .formals()
            .iter()
            .map(|formal| {
                let default = match &formal.default {
                    Some(node) => self.node(node),
                    None => Doc::Atom("None".into()),
                };
                Doc::Pair(Box::new(self.symbol(&formal.name)), Box::new(default))
            })
            .collect();

        Doc::Record("FormalList", vec![("formals", Doc::List(pairs))])
    }

    fn arguments(&self, arguments: &[Argument]) -> Doc {
        Doc::List(
            arguments
                .iter()
                .map(|argument| {
                    let name = match &argument.name {
                        Some(name) => string(name),
                        None => Doc::Atom("None".into()),
                    };
                    let value = match &argument.value {
                        Some(node) => self.node(node),
                        None => Doc::Atom("None".into()),
                    };
                    Doc::Record("Argument", vec![("name", name), ("value", value)])
                })
                .collect(),
        )
    }

    fn value(&self, value: &Value) -> Doc {
        let (payload, na) = match value {
            Value::Int { value, na } => (value.to_string(), na),
            Value::Float { value, na } => (format!("{:?}", value), na),
            Value::Char { value, na } => (format!("{:?}", value), na),
            Value::Bool { value, na } => (value.to_string(), na),
        };

        Doc::Record(
            value.type_name(),
            vec![("value", Doc::Atom(payload)), ("na", Doc::Atom(na.to_string()))],
        )
    }

    //////////////////////////////
    // Layout
    //////////////////////////////

    fn compact(&self, doc: &Doc, out: &mut String) {
        match doc {
            Doc::Atom(text) => out.push_str(text),
            Doc::Record(name, fields) => {
                out.push_str(name);
                out.push('(');
                for (i, (key, value)) in fields.iter().enumerate() {
                    if i > 0 {
                        out.push_str(", ");
                    }
                    out.push_str(key);
                    out.push('=');
                    self.compact(value, out);
                }
                out.push(')');
            }
            Doc::List(items) => {
                out.push('[');
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        out.push_str(", ");
                    }
                    self.compact(item, out);
                }
                out.push(']');
            }
            Doc::Pair(first, second) => {
                out.push('(');
                self.compact(first, out);
                out.push_str(", ");
                self.compact(second, out);
                out.push(')');
            }
        }
    }

    fn layout(&self, doc: &Doc, level: usize, width: usize, out: &mut String) {
        let mut flat = String::new();
        self.compact(doc, &mut flat);

        if level * self.indent + flat.chars().count() <= width {
            out.push_str(&flat);
            return;
        }

        match doc {
            Doc::Atom(text) => out.push_str(text),
            Doc::Record(name, fields) => {
                out.push_str(name);
                out.push('(');
                for (i, (key, value)) in fields.iter().enumerate() {
                    self.newline(level + 1, out);
                    out.push_str(key);
                    out.push('=');
                    self.layout(value, level + 1, width, out);
                    if i + 1 < fields.len() {
                        out.push(',');
                    }
                }
                self.newline(level, out);
                out.push(')');
            }
            Doc::List(items) => {
                out.push('[');
                for (i, item) in items.iter().enumerate() {
                    self.newline(level + 1, out);
                    self.layout(item, level + 1, width, out);
                    if i + 1 < items.len() {
                        out.push(',');
                    }
                }
                self.newline(level, out);
                out.push(']');
            }
            Doc::Pair(first, second) => {
                out.push('(');
                self.newline(level + 1, out);
                self.layout(first, level + 1, width, out);
                out.push(',');
                self.newline(level + 1, out);
                self.layout(second, level + 1, width, out);
                self.newline(level, out);
                out.push(')');
            }
        }
    }

    fn newline(&self, level: usize, out: &mut String) {
        out.push('\n');
        out.extend(std::iter::repeat(' ').take(level * self.indent));
    }
}

impl Default for Writer {
    fn default() -> Self {
        Self::new()
    }
}

fn string(text: &str) -> Doc {
    Doc::Atom(format!("{:?}", text))
}
