// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Adapter modules for the remote mirror port

pub mod fake;
pub mod http;
pub mod traits;

// Re-export traits
pub use traits::{MirrorError, MirrorSink};

// Re-export fake adapter
pub use fake::{FakeMirror, MirrorCall};

// Re-export real adapter
pub use http::HttpMirror;
