//! Read-only access to the hosted content service.
//!
//! The service serves four JSON collections (articles, courses, mitra and
//! testimonials) wrapped in a `{success, data, message}` envelope.

mod client;
mod error;
mod records;

pub use client::{ContentClient, Envelope};
pub use error::ContentError;
pub use records::{
    Article, Collection, ContentRecord, Course, ListingEntry, Partner, Testimonial,
};
