//! Protocol layer for the Israel Post legacy zip-code lookup endpoint.
//!
//! Everything in this crate is synchronous, pure, and side-effect-free:
//! field validation, the asymmetric percent-encoding scheme the endpoint
//! requires, fixed-order query-string assembly, and the multi-tier parser
//! that extracts a postal code from the free-form response body. The HTTP
//! call itself lives in `mikud-client`.

pub mod address;
pub mod encode;
pub mod parse;
pub mod query;
pub mod result;
pub mod validate;

pub use address::AddressQuery;
pub use encode::{encode_field, EncodeMode};
pub use parse::{parse_response, Candidate};
pub use query::build_query_url;
pub use result::LookupResult;
pub use validate::{validate_query, InvalidAddress};
