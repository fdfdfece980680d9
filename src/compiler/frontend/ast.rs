pub mod value;
pub mod writer;

pub use value::Value;

/// A node of the syntax tree produced by the parser.
///
/// Nodes own their children. The tree is built bottom-up and never shared,
/// so plain `Box` and `Vec` are enough.
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    Block(Block),
    Vector(Vector),
    /// A literal `NA` before it is given a type.
    Na,
    Symbol(String),
    UnaryOperation {
        operator: String,
        operand: Box<Node>,
    },
    BinaryOperation {
        operator: String,
        left: Box<Node>,
        right: Box<Node>,
    },
    /// `<-`, `->` and `=` all end up here, `target` is always the assignee.
    Assign {
        target: Box<Node>,
        value: Box<Node>,
    },
    Function {
        formals: FormalList,
        body: Box<Node>,
    },
    Call {
        function: Box<Node>,
        arguments: Vec<Argument>,
    },
    /// `x[...]` or `x[[...]]`, `operator` tells which.
    Index {
        operator: String,
        target: Box<Node>,
        arguments: Vec<Argument>,
    },
}

impl Node {
    pub fn symbol<S: Into<String>>(name: S) -> Node {
        Node::Symbol(name.into())
    }

    /// A length-1 vector, which is what R makes of a single literal.
    pub fn scalar(value: Value) -> Node {
        Node::Vector(Vector::new(vec![value]))
    }

    pub fn unary<S: Into<String>>(operator: S, operand: Node) -> Node {
        Node::UnaryOperation {
            operator: operator.into(),
            operand: Box::new(operand),
        }
    }

    pub fn binary<S: Into<String>>(operator: S, left: Node, right: Node) -> Node {
        Node::BinaryOperation {
            operator: operator.into(),
            left: Box::new(left),
            right: Box::new(right),
        }
    }

    pub fn assign(target: Node, value: Node) -> Node {
        Node::Assign {
            target: Box::new(target),
            value: Box::new(value),
        }
    }

    pub fn function(formals: FormalList, body: Node) -> Node {
        Node::Function {
            formals,
            body: Box::new(body),
        }
    }

    pub fn call(function: Node, arguments: Vec<Argument>) -> Node {
        Node::Call {
            function: Box::new(function),
            arguments,
        }
    }

    pub fn index<S: Into<String>>(operator: S, target: Node, arguments: Vec<Argument>) -> Node {
        Node::Index {
            operator: operator.into(),
            target: Box::new(target),
            arguments,
        }
    }
}

impl std::fmt::Display for Node {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&writer::Writer::new().write(self))
    }
}

/// A sequence of statements: a program or the body of `{ ... }`.
///
/// Empty statements are dropped on the way in, so a block never holds
/// placeholders for stray separators.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Block {
    statements: Vec<Node>,
}

impl Block {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_statements<I: IntoIterator<Item = Option<Node>>>(statements: I) -> Self {
        let mut block = Self::new();
        for statement in statements {
            block.append(statement);
        }
        block
    }

    pub fn append(&mut self, statement: Option<Node>) {
        if let Some(node) = statement {
            self.statements.push(node);
        }
    }

    pub fn extend(&mut self, other: Block) {
        self.statements.extend(other.statements);
    }

    pub fn statements(&self) -> &[Node] {
        &self.statements
    }

    pub fn len(&self) -> usize {
        self.statements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.statements.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Node> {
        self.statements.iter()
    }
}

impl From<Vec<Node>> for Block {
    fn from(statements: Vec<Node>) -> Self {
        Self { statements }
    }
}

impl IntoIterator for Block {
    type Item = Node;
    type IntoIter = std::vec::IntoIter<Node>;

    fn into_iter(self) -> Self::IntoIter {
        self.statements.into_iter()
    }
}

impl std::fmt::Display for Block {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&writer::Writer::new().write_block(self))
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Vector {
    pub values: Vec<Value>,
}

impl Vector {
    pub fn new(values: Vec<Value>) -> Self {
        Self { values }
    }
}

/// One parameter of a function literal.
#[derive(Debug, Clone, PartialEq)]
pub struct Formal {
    pub name: String,
    pub default: Option<Node>,
}

/// Parameters of a function literal, in declaration order.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct FormalList {
    formals: Vec<Formal>,
}

impl FormalList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn append<S: Into<String>>(&mut self, name: S, default: Option<Node>) {
        self.formals.push(Formal {
            name: name.into(),
            default,
        })
    }

    pub fn contains(&self, name: &str) -> bool {
        self.formals.iter().any(|f| f.name == name)
    }

    pub fn formals(&self) -> &[Formal] {
        &self.formals
    }

    pub fn len(&self) -> usize {
        self.formals.len()
    }

    pub fn is_empty(&self) -> bool {
        self.formals.is_empty()
    }
}

/// An argument in a call or subscript.
///
/// Both parts are optional: `f(x)` is positional, `f(n = 1)` is named and
/// `x[, 1]` starts with an empty argument.
#[derive(Debug, Clone, PartialEq)]
pub struct Argument {
    pub name: Option<String>,
    pub value: Option<Node>,
}

impl Argument {
    pub fn positional(value: Node) -> Self {
        Self {
            name: None,
            value: Some(value),
        }
    }

    pub fn named<S: Into<String>>(name: S, value: Option<Node>) -> Self {
        Self {
            name: Some(name.into()),
            value,
        }
    }

    pub fn empty() -> Self {
        Self {
            name: None,
            value: None,
        }
    }
}
