//! # Predicate Abstract Syntax Tree
//!
//! This module defines the AST for boolean predicates over a filtered
//! entity: comparisons, logical connectives, negation, field-access
//! chains, and captured values.
//!
//! ## Architecture Overview
//!
//! The AST module is organized into focused submodules:
//!
//! - **[predicate]** - Predicate nodes (binary/unary operations, field
//!   access, the entity parameter, captured values)
//! - **[operators]** - Binary and unary operators plus their filter-token
//!   table
//!
//! ## Core Concepts
//!
//! A predicate describes *what to filter*, not how to fetch it. The tree
//! is constructed by the caller (directly, via the builder constructors,
//! or decoded from its JSON wire form) and compiled down to an
//! OData-style `$filter` expression string:
//!
//! ```
//! use ofilter::{Compiler, Predicate};
//!
//! let predicate = Predicate::gt(Predicate::field("Amount"), Predicate::capture(1000));
//!
//! let mut compiler = Compiler::new();
//! assert_eq!(compiler.compile(&predicate).unwrap(), "(Amount gt 1000)");
//! ```
//!
//! ### Field-access chains
//!
//! A [`Predicate::Field`] chain rooted at [`Predicate::Param`] names a
//! field of the entity being filtered and compiles to raw text. A chain
//! rooted at a [`Predicate::Capture`] is resolved against the captured
//! value at compile time and compiles to a literal.
//!
//! ### Operator vocabulary
//!
//! [`BinOp`] and [`UnaryOp`] deliberately include operators the filter
//! grammar cannot express (arithmetic, `!=`, arithmetic negation).
//! Compiling those fails with an unsupported-operator error rather than
//! inventing output.

pub mod operators;
pub mod predicate;

pub use operators::{BinOp, UnaryOp};
pub use predicate::Predicate;
