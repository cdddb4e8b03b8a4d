#![allow(missing_docs)]

pub(crate) mod db;
pub(crate) mod http;

pub(crate) use db::poison_lock;
pub(crate) use http::{get_header, read_body_text};
