//! Unit tests for the task lifecycle engine.
