//! REST session for the Dashboard API.
//!
//! This module provides the [`RestClient`] type: the four HTTP verbs plus
//! the pager every endpoint method funnels through.

mod client;

pub use client::{PageCount, PageDirection, RestClient};
