//! Detection of trivial Java accessors.
//!
//! The core is [`classifier::is_accessor`], a pure query over the
//! structural model in [`core`]. The rest of the crate builds that model
//! from Java sources ([`analyzers`]), runs the classifier over files and
//! directories ([`scan`]), and reports the results ([`io`]).

pub mod analyzers;
pub mod classifier;
pub mod cli;
pub mod commands;
pub mod config;
pub mod core;
pub mod io;
pub mod scan;

pub use crate::classifier::{
    classify, classify_indexed, is_accessor, is_accessor_indexed, property_name, AccessorKind,
    AccessorPrefix, FieldIndex,
};
pub use crate::core::errors::{Error, Result};
pub use crate::core::{
    ClassKind, ClassModel, Expression, FieldMember, Member, MethodMember, Modifier, Parameter,
    Statement, TypeRef,
};
pub use crate::scan::{
    scan_paths, scan_source, FileReport, MethodVerdict, ScanReport, ScanSummary,
};
