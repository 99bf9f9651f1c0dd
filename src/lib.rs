//! # Classic Design Patterns in Rust
//!
//! This crate is a catalog of the classic object-oriented design patterns,
//! each as a small, self-contained, runnable example:
//!
//! ## Creational Patterns
//! - Singleton (`p1_singleton`) - one lazily-built process-wide instance
//! - Factory Method (`p2_factory_method`) - tag to product, absent on unknown
//! - Abstract Factory (`p3_abstract_factory`) - matched product families
//! - Builder (`p4_builder`) - fluent configuration plus a director recipe
//! - Prototype (`p5_prototype`) - independent field-wise copies
//!
//! ## Structural Patterns
//! - Decorator (`p6_decorator`) - stack behavior behind one capability
//! - Adapter (`p7_adapter`) - translate one interface into another
//!
//! ## Behavioral Patterns
//! - Strategy (`p8_strategy`) - interchangeable algorithms behind one call
//! - Observer (`p9_observer`) - ordered listener registry with fan-out
//! - Command (`p10_command`) - receiver plus action behind `execute()`
//!
//! Every example is independent; none shares state or types with another.
//! Most patterns come in a dynamic-dispatch rendition and a zero-cost
//! (generic or enum) rendition, with tests at the bottom of each file.
//!
//! Run individual examples with:
//! ```bash
//! cargo run --bin p1_singleton
//! cargo run --bin p6_decorator
//! cargo run --bin p10_command
//! ```
