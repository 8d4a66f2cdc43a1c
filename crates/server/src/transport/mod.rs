//! Transport layer for the nearby server

pub mod http;
