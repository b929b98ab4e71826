//! # BFF ミドルウェア

pub mod request_id;
