//! Converts recorded UI interaction traces into persona-weighted perceived
//! time and subjective pain scores, plus a Markdown report.
//!
//! The pipeline is stateless: a persona descriptor is resolved into a
//! complete [`PersonaConfig`], the trace is evaluated into an
//! [`EvaluationResult`], and the result can be rendered into a report.
//! Every stage is a pure, synchronous function of its inputs.

pub mod error;
pub mod evaluation;
pub mod input;
pub mod persona;
pub mod report;
pub mod trace;

pub use error::InputError;
pub use evaluation::{evaluate, EvaluationResult, Grade, SequenceStats, StepBreakdown};
pub use persona::{resolve_persona, PersonaConfig, PersonaInput, PersonaOverrides};
pub use report::render_report;
pub use trace::{Complexity, TimeCategory, TraceStep};
