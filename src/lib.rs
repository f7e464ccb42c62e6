//! Workspace-level golden-file tests live under `tests/`.
