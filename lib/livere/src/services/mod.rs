//! Concrete LiveRe services.
//!
//! Each service is plain data (root URL, service path and method tables)
//! plus thin typed wrappers around [`Resource::call`](crate::Resource::call).

pub mod count;
