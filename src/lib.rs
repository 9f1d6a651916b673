//! `nice` is a flag & argument registration library for Rust command line programs.
//!
//! A Cli program declares its flags and positional arguments up front, binding each to a variable it owns.
//! `nice` turns each declaration into a descriptor ([`Flag`] or [`Arg`]) and hands it to a registrar ([`Register`]).
//! Tokenizing `argv`, rendering usage text and so on are left to the registrar/parser consuming those descriptors.
//!
//! # Usage
//! ```no_run
#![doc = include_str!("../demos/verbose.rs")]
//! ```
//!
//! # Options
//! Each declaration takes a name and a list of options.
//! The name does double duty:
//! * A single character name becomes the short name (ex: `"v"` is `-v`).
//! * A longer name becomes the long name (ex: `"verbose"` is `--verbose`).
//! * An empty name sets neither; supply one with [`with_short`] or [`with_long`].
//!
//! Options are then applied in order, each mutating the [`FlagOptions`] (or [`ArgOptions`]) under construction.
//! The merge rules are:
//! * An option only sets what it is about, leaving every other field untouched.
//! * Empty text is a no-op: `with_usage("")` keeps the existing usage rather than clearing it.
//! * [`Necessity`] always overwrites, so the last `Necessity` in the list wins.
//! * A `None` option is skipped, exactly as if it were left out.
//! * A [`FlagOptions`] passed as an option (a *bundle*) copies its set fields and *appends* its aliases.
//!
//! ```
//! use nice::{flag, with_short, with_usage, Necessity, Registry};
//!
//! let mut registry = Registry::default();
//! let verbose = flag::<bool, _>(
//!     &mut registry,
//!     "verbose",
//!     &[&with_short('v'), &with_usage("enable verbose output"), &Necessity::Required],
//! );
//!
//! let registered = registry.flag_by_short('v').unwrap();
//! assert_eq!(registered.to_string(), "Flag(bool,-v/--verbose)");
//! assert!(registered.required());
//! assert!(!*verbose.borrow());
//! ```
//!
//! Custom options are any type implementing [`FlagOptionApplier`] / [`ArgOptionApplier`], or a closure wrapped in [`FlagOptionFn`] / [`ArgOptionFn`].
//!
//! # Values
//! A descriptor never owns the scalar it describes, only a handle ([`Value`]) onto it.
//! * The `*_var` helpers (ex: [`bool_var`]) borrow the caller's variable.
//! * The plain helpers (ex: [`bool_flag`]) allocate a zero value and return the [`Shared`] handle.
//! These discard any registration error; use the `*_var` form to observe it.
//!
//! # Necessity
//! An unset [`Necessity`] reads as optional for a flag ([`Flag::required`]), but as required for an argument ([`Arg::required`]).
//!
//! # Features
//! * `unit_test`: For features that help with unit testing (ex: [`Recorder`]).
//! * `tracing_debug`: Emit `tracing` debug events while building & registering descriptors.
pub use nice_builder::*;
