//! Core library for the org-chart command line application.
//!
//! The library turns a flat list of employee records into a validated
//! management hierarchy and derives two views from it: an indented org chart
//! and the aggregate salary of the organisation or of any subtree. Input
//! decoding lives under [`org::chart::io`], the record shape inside
//! [`org::chart::model`], the tree construction and traversals in
//! [`org::chart::hierarchy`], and the printable report under
//! [`org::chart::report`].

pub mod org;

pub use org::chart::{ChartError, Result, ValidationError, error, hierarchy, io, model, report};
