//! Typed traversal over a parsed Python module.
//!
//! Nothing here knows about models. The accessors expose class definitions,
//! their written base classes and body statements, and call expressions split
//! into callee, positional argument text, and keyword argument text. All text
//! is returned exactly as written in the source.

use tree_sitter::{Node, Tree};

/// A successfully parsed source file.
pub struct SyntaxTree {
    path: String,
    source: String,
    tree: Tree,
}

impl SyntaxTree {
    pub(crate) fn new(path: String, source: String, tree: Tree) -> Self {
        Self { path, source, tree }
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    /// Every class definition in the file, in pre-order (file order, with
    /// nested classes following their enclosing class).
    pub fn classes(&self) -> ClassDefinitions<'_> {
        ClassDefinitions {
            stack: vec![self.tree.root_node()],
            source: &self.source,
        }
    }
}

impl std::fmt::Debug for SyntaxTree {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SyntaxTree").field("path", &self.path).finish()
    }
}

/// Lazy pre-order iterator over class definitions.
pub struct ClassDefinitions<'t> {
    stack: Vec<Node<'t>>,
    source: &'t str,
}

impl<'t> Iterator for ClassDefinitions<'t> {
    type Item = ClassDef<'t>;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(node) = self.stack.pop() {
            let mut cursor = node.walk();
            let children: Vec<Node<'t>> = node.named_children(&mut cursor).collect();
            self.stack.extend(children.into_iter().rev());

            if node.kind() == "class_definition" {
                return Some(ClassDef {
                    node,
                    source: self.source,
                });
            }
        }
        None
    }
}

/// A `class Name(bases): body` node.
#[derive(Clone, Copy)]
pub struct ClassDef<'t> {
    node: Node<'t>,
    source: &'t str,
}

impl<'t> ClassDef<'t> {
    pub fn name(&self) -> &'t str {
        self.node
            .child_by_field_name("name")
            .map(|n| text(n, self.source))
            .unwrap_or_default()
    }

    /// Base-class expressions as written. Keyword entries (`metaclass=...`)
    /// and splats are not bases.
    pub fn base_names(&self) -> Vec<&'t str> {
        let Some(superclasses) = self.node.child_by_field_name("superclasses") else {
            return Vec::new();
        };
        let mut cursor = superclasses.walk();
        superclasses
            .named_children(&mut cursor)
            .filter(|n| {
                !matches!(
                    n.kind(),
                    "keyword_argument" | "comment" | "list_splat" | "dictionary_splat"
                )
            })
            .map(|n| text(n, self.source))
            .collect()
    }

    /// Direct body statements, in order.
    pub fn body(&self) -> Vec<Statement<'t>> {
        let Some(block) = self.node.child_by_field_name("body") else {
            return Vec::new();
        };
        let mut cursor = block.walk();
        block
            .named_children(&mut cursor)
            .map(|n| Statement::from_node(n, self.source))
            .collect()
    }

    /// 1-based line of the `class` keyword.
    pub fn line(&self) -> u32 {
        self.node.start_position().row as u32 + 1
    }
}

impl std::fmt::Debug for ClassDef<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ClassDef")
            .field("name", &self.name())
            .field("line", &self.line())
            .finish()
    }
}

/// One direct statement of a class body.
#[derive(Debug, Clone, Copy)]
pub enum Statement<'t> {
    Assignment(Assignment<'t>),
    Class(ClassDef<'t>),
    Other,
}

impl<'t> Statement<'t> {
    fn from_node(node: Node<'t>, source: &'t str) -> Self {
        match node.kind() {
            "expression_statement" => {
                let mut cursor = node.walk();
                let first = node.named_children(&mut cursor).next();
                match first {
                    Some(inner) if inner.kind() == "assignment" => {
                        Assignment::from_node(inner, source).map_or(Self::Other, Self::Assignment)
                    }
                    _ => Self::Other,
                }
            }
            "class_definition" => Self::Class(ClassDef { node, source }),
            "decorated_definition" => match node.child_by_field_name("definition") {
                Some(def) if def.kind() == "class_definition" => {
                    Self::Class(ClassDef { node: def, source })
                }
                _ => Self::Other,
            },
            _ => Self::Other,
        }
    }
}

/// Left-hand side of an assignment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AssignTarget<'t> {
    /// A bare identifier: `name = ...` or `name: T = ...`.
    Name(&'t str),
    /// Attribute, subscript, or tuple targets.
    Other(&'t str),
}

/// `target = value`, including annotated assignments that carry a value.
#[derive(Debug, Clone, Copy)]
pub struct Assignment<'t> {
    pub target: AssignTarget<'t>,
    pub value: Expr<'t>,
    pub line: u32,
}

impl<'t> Assignment<'t> {
    fn from_node(node: Node<'t>, source: &'t str) -> Option<Self> {
        let left = node.child_by_field_name("left")?;
        // `x: int` without a value binds nothing.
        let right = node.child_by_field_name("right")?;

        let target = if left.kind() == "identifier" {
            AssignTarget::Name(text(left, source))
        } else {
            AssignTarget::Other(text(left, source))
        };

        // Chained assignments (`a = b = f()`) nest another assignment on the
        // right and are never treated as a single binding.
        let value = if right.kind() == "call" {
            Expr::Call(CallExpr { node: right, source })
        } else {
            Expr::Other(text(right, source))
        };

        Some(Self {
            target,
            value,
            line: node.start_position().row as u32 + 1,
        })
    }

    /// The bound identifier, if the target is a bare name.
    pub fn name(&self) -> Option<&'t str> {
        match self.target {
            AssignTarget::Name(name) => Some(name),
            AssignTarget::Other(_) => None,
        }
    }
}

/// Right-hand side of an assignment.
#[derive(Debug, Clone, Copy)]
pub enum Expr<'t> {
    Call(CallExpr<'t>),
    Other(&'t str),
}

impl<'t> Expr<'t> {
    /// Raw source text of the expression.
    pub fn text(&self) -> &'t str {
        match self {
            Self::Call(call) => call.text(),
            Self::Other(raw) => raw,
        }
    }
}

/// What is being called.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Callee<'t> {
    /// `name` or `a.b.c`, rebuilt from identifiers.
    Dotted(String),
    /// Anything else (`f()()`, `registry[0]()`, `(lambda: x)()`), verbatim.
    Opaque(&'t str),
}

/// A call expression.
#[derive(Clone, Copy)]
pub struct CallExpr<'t> {
    node: Node<'t>,
    source: &'t str,
}

impl<'t> CallExpr<'t> {
    pub fn text(&self) -> &'t str {
        text(self.node, self.source)
    }

    pub fn callee(&self) -> Callee<'t> {
        match self.node.child_by_field_name("function") {
            Some(function) => match dotted_name(function, self.source) {
                Some(dotted) => Callee::Dotted(dotted),
                None => Callee::Opaque(text(function, self.source)),
            },
            None => Callee::Opaque(""),
        }
    }

    /// Positional and keyword argument text, each in declaration order.
    /// `*args` and `**kwargs` are kept as positional text.
    pub fn arguments(&self) -> CallArguments<'t> {
        let mut args = CallArguments::default();
        let Some(list) = self.node.child_by_field_name("arguments") else {
            return args;
        };

        // `f(x for x in y)` passes a bare generator as the argument node.
        if list.kind() != "argument_list" {
            args.positional.push(text(list, self.source));
            return args;
        }

        let mut cursor = list.walk();
        for arg in list.named_children(&mut cursor) {
            match arg.kind() {
                "comment" => {}
                "keyword_argument" => {
                    let name = arg.child_by_field_name("name");
                    let value = arg.child_by_field_name("value");
                    if let (Some(name), Some(value)) = (name, value) {
                        args.keywords
                            .push((text(name, self.source), text(value, self.source)));
                    }
                }
                _ => args.positional.push(text(arg, self.source)),
            }
        }
        args
    }
}

impl std::fmt::Debug for CallExpr<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("CallExpr").field(&self.text()).finish()
    }
}

/// Raw argument text of one call.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CallArguments<'t> {
    pub positional: Vec<&'t str>,
    pub keywords: Vec<(&'t str, &'t str)>,
}

/// `identifier` or a chain of `attribute` nodes over identifiers.
fn dotted_name(node: Node, source: &str) -> Option<String> {
    match node.kind() {
        "identifier" => Some(text(node, source).to_string()),
        "attribute" => {
            let object = dotted_name(node.child_by_field_name("object")?, source)?;
            let attribute = node.child_by_field_name("attribute")?;
            Some(format!("{}.{}", object, text(attribute, source)))
        }
        _ => None,
    }
}

fn text<'t>(node: Node<'t>, source: &'t str) -> &'t str {
    source.get(node.byte_range()).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use crate::parsers::{PythonParser, SourceFile};

    use super::*;

    fn parse(src: &str) -> SyntaxTree {
        PythonParser::new()
            .unwrap()
            .parse(&SourceFile::new("test.py", src))
            .unwrap()
    }

    #[test]
    fn test_classes_in_preorder_with_nested_and_decorated() {
        let tree = parse(
            "class A(x.Base):\n    class Meta:\n        pass\n\n@decorate\nclass B(A, metaclass=M):\n    pass\n",
        );
        let classes: Vec<_> = tree.classes().collect();
        let names: Vec<_> = classes.iter().map(|c| c.name()).collect();
        assert_eq!(names, vec!["A", "Meta", "B"]);
        assert_eq!(classes[0].base_names(), vec!["x.Base"]);
        assert!(classes[1].base_names().is_empty());
        assert_eq!(classes[2].base_names(), vec!["A"]);
        assert_eq!(classes[2].line(), 6);
    }

    #[test]
    fn test_call_arguments_keep_order_and_text() {
        let tree = parse(
            "class A:\n    f = models.ForeignKey(  # target\n        \"self\", on_delete=models.CASCADE, null=True, *extra)\n",
        );
        let class = tree.classes().next().unwrap();
        let body = class.body();
        let Statement::Assignment(assign) = body[0] else {
            panic!("expected assignment");
        };
        assert_eq!(assign.name(), Some("f"));
        let Expr::Call(call) = assign.value else {
            panic!("expected call");
        };
        assert_eq!(call.callee(), Callee::Dotted("models.ForeignKey".into()));
        let args = call.arguments();
        assert_eq!(args.positional, vec!["\"self\"", "*extra"]);
        assert_eq!(
            args.keywords,
            vec![("on_delete", "models.CASCADE"), ("null", "True")]
        );
    }

    #[test]
    fn test_non_dotted_callee_is_opaque() {
        let tree = parse("class A:\n    f = fields[0](max_length=3)\n");
        let class = tree.classes().next().unwrap();
        let Statement::Assignment(assign) = class.body()[0] else {
            panic!("expected assignment");
        };
        let Expr::Call(call) = assign.value else {
            panic!("expected call");
        };
        assert_eq!(call.callee(), Callee::Opaque("fields[0]"));
    }

    #[test]
    fn test_assignment_shapes() {
        let tree = parse(
            "class A:\n    a = 1\n    b: int = f()\n    c: int\n    d = e = f()\n    self.g = f()\n    def h(self):\n        pass\n",
        );
        let class = tree.classes().next().unwrap();
        let body = class.body();
        assert_eq!(body.len(), 6);

        let Statement::Assignment(a) = body[0] else { panic!() };
        assert!(matches!(a.value, Expr::Other("1")));

        let Statement::Assignment(b) = body[1] else { panic!() };
        assert_eq!(b.name(), Some("b"));
        assert!(matches!(b.value, Expr::Call(_)));

        assert!(matches!(body[2], Statement::Other));

        let Statement::Assignment(d) = body[3] else { panic!() };
        assert!(matches!(d.value, Expr::Other(_)));

        let Statement::Assignment(g) = body[4] else { panic!() };
        assert_eq!(g.name(), None);

        assert!(matches!(body[5], Statement::Other));
    }
}
