use std::fmt;

/// Represents a position in the source code
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SourcePosition {
    pub line: usize,
    pub column: usize,
}

/// Represents a span in the source code (start and end positions)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SourceSpan {
    pub start: SourcePosition,
    pub end: SourcePosition,
}

/// unique id of a node inside its `Environment`, only meaningful for the environment that allocated it
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub(crate) usize);

impl NodeId {
    pub fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// The closed set of node kinds.
///
/// Anything that maps over kinds (see `analysis::dispatch`) matches on this enum without a
/// wildcard arm, so adding a kind here is a compile error until every table handles it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeKind {
    Environment,
    Package,
    Program,
    Test,
    Describe,
    Class,
    Mixin,
    Singleton,
    Field,
    Method,
    Constructor,
    Parameter,
    Variable,
    Reference,
    Assignment,
    Try,
    Catch,
    Import,
    Send,
    Super,
    SelfRef,
    New,
    Literal,
    If,
    Throw,
    Return,
    Body,
}

impl NodeKind {
    pub const ALL: [NodeKind; 27] = [
        NodeKind::Environment,
        NodeKind::Package,
        NodeKind::Program,
        NodeKind::Test,
        NodeKind::Describe,
        NodeKind::Class,
        NodeKind::Mixin,
        NodeKind::Singleton,
        NodeKind::Field,
        NodeKind::Method,
        NodeKind::Constructor,
        NodeKind::Parameter,
        NodeKind::Variable,
        NodeKind::Reference,
        NodeKind::Assignment,
        NodeKind::Try,
        NodeKind::Catch,
        NodeKind::Import,
        NodeKind::Send,
        NodeKind::Super,
        NodeKind::SelfRef,
        NodeKind::New,
        NodeKind::Literal,
        NodeKind::If,
        NodeKind::Throw,
        NodeKind::Return,
        NodeKind::Body,
    ];

    pub fn name(self) -> &'static str {
        match self {
            NodeKind::Environment => "Environment",
            NodeKind::Package => "Package",
            NodeKind::Program => "Program",
            NodeKind::Test => "Test",
            NodeKind::Describe => "Describe",
            NodeKind::Class => "Class",
            NodeKind::Mixin => "Mixin",
            NodeKind::Singleton => "Singleton",
            NodeKind::Field => "Field",
            NodeKind::Method => "Method",
            NodeKind::Constructor => "Constructor",
            NodeKind::Parameter => "Parameter",
            NodeKind::Variable => "Variable",
            NodeKind::Reference => "Reference",
            NodeKind::Assignment => "Assignment",
            NodeKind::Try => "Try",
            NodeKind::Catch => "Catch",
            NodeKind::Import => "Import",
            NodeKind::Send => "Send",
            NodeKind::Super => "Super",
            NodeKind::SelfRef => "Self",
            NodeKind::New => "New",
            NodeKind::Literal => "Literal",
            NodeKind::If => "If",
            NodeKind::Throw => "Throw",
            NodeKind::Return => "Return",
            NodeKind::Body => "Body",
        }
    }
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Every node of a linked program, children are referenced by `NodeId`
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    Environment(EnvironmentRoot),
    Package(Package),
    Program(Program),
    Test(Test),
    Describe(Describe),
    Class(Class),
    Mixin(Mixin),
    Singleton(Singleton),
    Field(Field),
    Method(Method),
    Constructor(Constructor),
    Parameter(Parameter),
    Variable(Variable),
    Reference(Reference),
    Assignment(Assignment),
    Try(Try),
    Catch(Catch),
    Import(Import),
    Send(Send),
    Super(Super),
    SelfRef,
    New(New),
    Literal(Literal),
    If(If),
    Throw(Throw),
    Return(Return),
    Body(Body),
}

/// The root of a linked program, its members are the top level packages
#[derive(Debug, Clone, PartialEq)]
pub struct EnvironmentRoot {
    pub members: Vec<NodeId>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Package {
    pub name: String,
    pub imports: Vec<NodeId>,
    pub members: Vec<NodeId>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Program {
    pub name: String,
    pub body: NodeId,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Test {
    pub name: String,
    pub body: NodeId,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Describe {
    pub name: String,
    pub members: Vec<NodeId>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Class {
    pub name: String,
    pub superclass: Option<NodeId>,
    pub mixins: Vec<NodeId>,
    pub members: Vec<NodeId>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Mixin {
    pub name: String,
    pub mixins: Vec<NodeId>,
    pub members: Vec<NodeId>,
}

/// A named object, or an object literal when `name` is `None`
#[derive(Debug, Clone, PartialEq)]
pub struct Singleton {
    pub name: Option<String>,
    pub superclass: Option<NodeId>,
    pub mixins: Vec<NodeId>,
    pub members: Vec<NodeId>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Field {
    pub name: String,
    pub is_read_only: bool,
    pub value: Option<NodeId>,
}

/// A method declaration, `body` is `None` for abstract and native methods
#[derive(Debug, Clone, PartialEq)]
pub struct Method {
    pub name: String,
    pub is_override: bool,
    pub is_native: bool,
    pub parameters: Vec<NodeId>,
    pub body: Option<NodeId>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Constructor {
    pub parameters: Vec<NodeId>,
    pub base_call: Option<BaseCall>,
    pub body: NodeId,
}

/// Delegation to another constructor, either of `super` or of `self`
#[derive(Debug, Clone, PartialEq)]
pub struct BaseCall {
    pub calls_super: bool,
    pub args: Vec<NodeId>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Parameter {
    pub name: String,
    pub is_var_arg: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Variable {
    pub name: String,
    pub is_read_only: bool,
    pub value: Option<NodeId>,
}

/// A (possibly fully qualified, dot separated) name
#[derive(Debug, Clone, PartialEq)]
pub struct Reference {
    pub name: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Assignment {
    pub reference: NodeId,
    pub value: NodeId,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Try {
    pub body: NodeId,
    pub catches: Vec<NodeId>,
    pub always: NodeId,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Catch {
    pub parameter: NodeId,
    pub parameter_type: Option<NodeId>,
    pub body: NodeId,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Import {
    pub reference: NodeId,
    pub is_generic: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Send {
    pub receiver: NodeId,
    pub message: String,
    pub args: Vec<NodeId>,
}

/// A call to the overridden implementation of the current method
#[derive(Debug, Clone, PartialEq)]
pub struct Super {
    pub args: Vec<NodeId>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct New {
    pub instantiated: NodeId,
    pub args: Vec<NodeId>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Literal {
    pub value: LiteralValue,
}

/// Literal values
#[derive(Debug, Clone, PartialEq)]
pub enum LiteralValue {
    Null,
    Boolean(bool),
    Number(f64),
    String(String),
    /// an object literal, pointing at its (usually unnamed) `Singleton`
    Object(NodeId),
}

#[derive(Debug, Clone, PartialEq)]
pub struct If {
    pub condition: NodeId,
    pub then_body: NodeId,
    pub else_body: NodeId,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Throw {
    pub arg: NodeId,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Return {
    pub value: Option<NodeId>,
}

/// A sequence of sentences
#[derive(Debug, Clone, PartialEq)]
pub struct Body {
    pub sentences: Vec<NodeId>,
}

impl Node {
    pub fn kind(&self) -> NodeKind {
        match self {
            Node::Environment(_) => NodeKind::Environment,
            Node::Package(_) => NodeKind::Package,
            Node::Program(_) => NodeKind::Program,
            Node::Test(_) => NodeKind::Test,
            Node::Describe(_) => NodeKind::Describe,
            Node::Class(_) => NodeKind::Class,
            Node::Mixin(_) => NodeKind::Mixin,
            Node::Singleton(_) => NodeKind::Singleton,
            Node::Field(_) => NodeKind::Field,
            Node::Method(_) => NodeKind::Method,
            Node::Constructor(_) => NodeKind::Constructor,
            Node::Parameter(_) => NodeKind::Parameter,
            Node::Variable(_) => NodeKind::Variable,
            Node::Reference(_) => NodeKind::Reference,
            Node::Assignment(_) => NodeKind::Assignment,
            Node::Try(_) => NodeKind::Try,
            Node::Catch(_) => NodeKind::Catch,
            Node::Import(_) => NodeKind::Import,
            Node::Send(_) => NodeKind::Send,
            Node::Super(_) => NodeKind::Super,
            Node::SelfRef => NodeKind::SelfRef,
            Node::New(_) => NodeKind::New,
            Node::Literal(_) => NodeKind::Literal,
            Node::If(_) => NodeKind::If,
            Node::Throw(_) => NodeKind::Throw,
            Node::Return(_) => NodeKind::Return,
            Node::Body(_) => NodeKind::Body,
        }
    }

    /// name of the node for the kinds that have one, unnamed singletons return `None`
    pub fn name(&self) -> Option<&str> {
        match self {
            Node::Package(package) => Some(&package.name),
            Node::Program(program) => Some(&program.name),
            Node::Test(test) => Some(&test.name),
            Node::Describe(describe) => Some(&describe.name),
            Node::Class(class) => Some(&class.name),
            Node::Mixin(mixin) => Some(&mixin.name),
            Node::Singleton(singleton) => singleton.name.as_deref(),
            Node::Field(field) => Some(&field.name),
            Node::Method(method) => Some(&method.name),
            Node::Parameter(parameter) => Some(&parameter.name),
            Node::Variable(variable) => Some(&variable.name),
            Node::Reference(reference) => Some(&reference.name),
            _ => None,
        }
    }

    /// members of the nodes that act as member containers
    pub fn members(&self) -> &[NodeId] {
        match self {
            Node::Environment(root) => &root.members,
            Node::Package(package) => &package.members,
            Node::Describe(describe) => &describe.members,
            Node::Class(class) => &class.members,
            Node::Mixin(mixin) => &mixin.members,
            Node::Singleton(singleton) => &singleton.members,
            _ => &[],
        }
    }

    /// direct children in declaration order
    pub fn children(&self) -> Vec<NodeId> {
        let mut children = Vec::new();
        match self {
            Node::Environment(root) => children.extend(&root.members),
            Node::Package(package) => {
                children.extend(&package.imports);
                children.extend(&package.members);
            }
            Node::Program(program) => children.push(program.body),
            Node::Test(test) => children.push(test.body),
            Node::Describe(describe) => children.extend(&describe.members),
            Node::Class(class) => {
                children.extend(class.superclass);
                children.extend(&class.mixins);
                children.extend(&class.members);
            }
            Node::Mixin(mixin) => {
                children.extend(&mixin.mixins);
                children.extend(&mixin.members);
            }
            Node::Singleton(singleton) => {
                children.extend(singleton.superclass);
                children.extend(&singleton.mixins);
                children.extend(&singleton.members);
            }
            Node::Field(field) => children.extend(field.value),
            Node::Method(method) => {
                children.extend(&method.parameters);
                children.extend(method.body);
            }
            Node::Constructor(constructor) => {
                children.extend(&constructor.parameters);
                if let Some(base_call) = &constructor.base_call {
                    children.extend(&base_call.args);
                }
                children.push(constructor.body);
            }
            Node::Variable(variable) => children.extend(variable.value),
            Node::Assignment(assignment) => {
                children.push(assignment.reference);
                children.push(assignment.value);
            }
            Node::Try(try_node) => {
                children.push(try_node.body);
                children.extend(&try_node.catches);
                children.push(try_node.always);
            }
            Node::Catch(catch) => {
                children.push(catch.parameter);
                children.extend(catch.parameter_type);
                children.push(catch.body);
            }
            Node::Import(import) => children.push(import.reference),
            Node::Send(send) => {
                children.push(send.receiver);
                children.extend(&send.args);
            }
            Node::Super(super_call) => children.extend(&super_call.args),
            Node::New(new) => {
                children.push(new.instantiated);
                children.extend(&new.args);
            }
            Node::Literal(literal) => {
                if let LiteralValue::Object(singleton) = literal.value {
                    children.push(singleton);
                }
            }
            Node::If(if_node) => {
                children.push(if_node.condition);
                children.push(if_node.then_body);
                children.push(if_node.else_body);
            }
            Node::Throw(throw) => children.push(throw.arg),
            Node::Return(ret) => children.extend(ret.value),
            Node::Body(body) => children.extend(&body.sentences),
            Node::Parameter(_) | Node::Reference(_) | Node::SelfRef => {}
        }
        children
    }
}
