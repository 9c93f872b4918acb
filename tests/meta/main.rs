//! Repository-structure checks run as an integration test
