//! Integration tests for `dynamic-value`.

mod construction;
mod containers;
mod props;
