#![allow(dead_code)]

pub mod app_builder;
pub mod vision_stub;

pub use app_builder::create_test_app;
pub use vision_stub::StubVision;
