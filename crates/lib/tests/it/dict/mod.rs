//! ObjDict integration tests
//!
//! Path addressing, the attribute surface and objects reached through paths.

mod attribute_tests;
mod object_tests;
mod path_tests;
