//! # docv-engine — Document Verification Workflow
//!
//! Owns the verification lifecycle for one uploaded document: validate the
//! file, encode it for transport, build and submit the verification
//! request, and expose the outcome (or failure) to the presentation layer.
//!
//! ## Concurrency Model
//!
//! The engine runs on a single-task cooperative model. The only suspend
//! points are the file read during encoding and the network call; the
//! controller awaits both without blocking other interaction. At most one
//! submission is in flight per [`WorkflowController`] instance, so outcomes
//! always apply in submission order by construction. Nothing is shared
//! across instances; the check-type registry is read-only.

pub mod document;
pub mod workflow;

pub use document::{
    encode, validate, EncodedPayload, EncodingError, FileSource, InvalidFileError, RawFile,
    UploadedDocument,
};
pub use workflow::{
    SelectionUpdate, WorkflowController, WorkflowRejection, WorkflowSnapshot, WorkflowState,
};
