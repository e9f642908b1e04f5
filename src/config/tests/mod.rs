//! Tests for action input loading and validation.

mod helpers;
