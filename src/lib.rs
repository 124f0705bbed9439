//! Workspace-level integration tests for fibseq live in `tests/`.
