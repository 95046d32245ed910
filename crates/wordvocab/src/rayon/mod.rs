//! # Rayon Parallelism
//!
//! Batch-level wrappers which fan encode/decode batches out over the
//! ``rayon`` thread pool.

mod rayon_decoder;
mod rayon_encoder;

#[doc(inline)]
pub use rayon_decoder::ParallelRayonDecoder;
#[doc(inline)]
pub use rayon_encoder::ParallelRayonEncoder;
