//! Tests for numcast.

mod kind;
mod typed;
