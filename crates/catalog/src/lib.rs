// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! sv-catalog: document discovery and outline-markup parsing

pub mod document;
pub mod find;
pub mod parser;

pub use document::{Catalog, Document, DocumentFailure};
pub use find::{collect_documents, load_catalog, CatalogError};
pub use parser::{content_hash, parse_document, ParseError};
