pub mod sse;

pub use sse::sse_loss;
