//! Orchestrating operations exposed to the transport layer.

pub mod create_document_and_issue_code;
pub mod redeem_code_for_document;

pub use create_document_and_issue_code::{
    CreateDocumentAndIssueCode, CreateDocumentInput, CreateDocumentOutput, MAX_CODE_ATTEMPTS,
};
pub use redeem_code_for_document::{RedeemCodeForDocument, RedeemedDocument};
