//! Everything the export bridge knows about the Notion API that does not
//! involve the network: identifier normalisation, request validation, page
//! bodies, data-source resolution and user-facing error text.

pub mod error;
pub mod id;
pub mod page;
pub mod record;
pub mod resolve;

/// API version sent with every request; data sources need 2025-09-03 or later.
pub const NOTION_VERSION: &str = "2025-09-03";

/// Title column used when the caller does not name one.
pub const DEFAULT_TITLE_PROPERTY: &str = "Name";

/// Longest text content accepted in a single rich-text object.
pub const MAX_TEXT_CHARS: usize = 2000;
