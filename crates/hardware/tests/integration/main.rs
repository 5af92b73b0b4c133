//! End-to-end power-up scenarios driven through the harness.
