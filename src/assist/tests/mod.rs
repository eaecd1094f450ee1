//! Unit tests for the assistance module.

mod drafting_tests;
