//! Abstract Syntax Tree definitions for Cinder
//!
//! This module defines all AST node types produced by the parser. Every node
//! family is a closed sum type with exhaustive matching at its consumers, and
//! parents own their children exclusively: the tree has no sharing, no cycles,
//! and no back-references. Nodes are built exactly once, bottom-up, during the
//! single parse pass and are immutable afterwards.

/// Identifier lexeme.
pub type Ident = String;

/// Type keyword lexeme (`int`, `float`, ...); resolving it is a later phase's job.
pub type TypeName = String;

/// A translation unit is an ordered sequence of top-level declarations.
#[derive(Debug, Clone, PartialEq)]
pub struct TranslationUnit {
    pub declarations: Vec<Declaration>,
}

// ============================================================================
// Declarations
// ============================================================================

/// Top-level and block-scoped declarations.
#[derive(Debug, Clone, PartialEq)]
pub enum Declaration {
    Function(FunctionDecl),
    Var(VarDecl),
}

/// `type declarator ( params ) { body }` or the prototype form with a trailing
/// `;` and no body.
#[derive(Debug, Clone, PartialEq)]
pub struct FunctionDecl {
    pub ty: TypeName,
    pub declarator: Declarator,
    pub params: Vec<ParamDecl>,
    pub body: Option<CompoundStmt>,
}

/// `type declarator [= default]` inside a parameter list.
///
/// Default values are accepted by the grammar; rejecting them is left to a
/// later phase.
#[derive(Debug, Clone, PartialEq)]
pub struct ParamDecl {
    pub ty: TypeName,
    pub declarator: InitDeclarator,
}

/// `type init-declarator (, init-declarator)* ;` with at least one declarator.
#[derive(Debug, Clone, PartialEq)]
pub struct VarDecl {
    pub ty: TypeName,
    pub declarators: Vec<InitDeclarator>,
}

/// A declarator with an optional initializer expression.
#[derive(Debug, Clone, PartialEq)]
pub struct InitDeclarator {
    pub declarator: Declarator,
    pub init: Option<Expr>,
}

/// The binding-name portion of a declaration.
///
/// Single-level pointers only; `**` and array declarators are not part of the
/// grammar.
#[derive(Debug, Clone, PartialEq)]
pub enum Declarator {
    /// `* name`
    Pointer(Ident),
    /// `name`
    Direct(Ident),
}

impl Declarator {
    /// The declared name, independent of the pointer marker.
    pub fn name(&self) -> &str {
        match self {
            Declarator::Pointer(name) | Declarator::Direct(name) => name,
        }
    }
}

// ============================================================================
// Statements
// ============================================================================

#[derive(Debug, Clone, PartialEq)]
pub enum Statement {
    Compound(CompoundStmt),
    Conditional(IfStmt),
    Loop(LoopStmt),
    Jump(JumpStmt),
    /// A variable declaration in statement position (function declarations are
    /// not permitted here).
    Declaration(VarDecl),
    Expr(Expr),
}

/// `{ statement* }`
#[derive(Debug, Clone, PartialEq)]
pub struct CompoundStmt {
    pub statements: Vec<Statement>,
}

/// `if (...) stmt (elif (...) stmt)* [else stmt]`
///
/// The if-branch is mandatory; branch order is source order.
#[derive(Debug, Clone, PartialEq)]
pub struct IfStmt {
    pub if_branch: CondBranch,
    pub elif_branches: Vec<CondBranch>,
    pub else_branch: Option<Box<Statement>>,
}

/// One `( condition ) body` pair of a conditional statement.
#[derive(Debug, Clone, PartialEq)]
pub struct CondBranch {
    pub condition: Expr,
    pub body: Box<Statement>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum LoopStmt {
    While(WhileStmt),
    For(ForStmt),
    Repeat(RepeatStmt),
}

/// `while ( condition ) body`
#[derive(Debug, Clone, PartialEq)]
pub struct WhileStmt {
    pub condition: Expr,
    pub body: Box<Statement>,
}

/// Placeholder for `for` loops. The parser currently rejects the `for` keyword
/// instead of producing this node.
#[derive(Debug, Clone, PartialEq)]
pub struct ForStmt;

/// `repeat body`; there is no loop condition at this level.
#[derive(Debug, Clone, PartialEq)]
pub struct RepeatStmt {
    pub body: Box<Statement>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum JumpStmt {
    /// `break ;`
    Break,
    /// `continue ;`
    Continue,
    /// `return expr ;` (the expression is mandatory).
    Return(Expr),
}

// ============================================================================
// Expressions
// ============================================================================

/// Expression forms.
///
/// Operators are carried as raw lexeme text, and literals wrap their lexeme
/// verbatim; numeric conversion is deferred to a later phase.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// `left op right`
    Binary(Box<Expr>, String, Box<Expr>),
    /// `op operand` for the prefix operator set.
    Prefix(String, Box<Expr>),
    /// `operand ++`
    PostfixIncrement(Box<Expr>),
    /// `operand --`
    PostfixDecrement(Box<Expr>),
    /// `callee ( args )`
    Call(Box<Expr>, Vec<Expr>),
    /// `base [ index ]`
    Subscript(Box<Expr>, Box<Expr>),
    IntLiteral(String),
    FloatLiteral(String),
    CharLiteral(String),
    StringLiteral(String),
    BoolLiteral(String),
    Ident(Ident),
    /// `( inner )`
    Paren(Box<Expr>),
}
