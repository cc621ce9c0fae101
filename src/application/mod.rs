//! Application layer use cases.
//!
//! Use cases orchestrate entities, repositories and runtime ports. They hold
//! no state between calls and take every collaborator at construction time.
//!
//! # Available Use Cases
//!
//! - [`use_cases::CreateDocumentAndIssueCode`] - Store a document and mint its access code
//! - [`use_cases::RedeemCodeForDocument`] - Exchange an access code for document contents

pub mod use_cases;
