//! End-to-end pipeline tests against an in-memory forecast source.

mod mock_source;
mod pipeline;
