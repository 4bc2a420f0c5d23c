//! Cross-module collision scenarios
