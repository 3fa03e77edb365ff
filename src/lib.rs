/*
 * Copyright (c) Radzivon Bartoshyk. All rights reserved.
 *
 * Redistribution and use in source and binary forms, with or without modification,
 * are permitted provided that the following conditions are met:
 *
 * 1.  Redistributions of source code must retain the above copyright notice, this
 * list of conditions and the following disclaimer.
 *
 * 2.  Redistributions in binary form must reproduce the above copyright notice,
 * this list of conditions and the following disclaimer in the documentation
 * and/or other materials provided with the distribution.
 *
 * 3.  Neither the name of the copyright holder nor the names of its
 * contributors may be used to endorse or promote products derived from
 * this software without specific prior written permission.
 *
 * THIS SOFTWARE IS PROVIDED BY THE COPYRIGHT HOLDERS AND CONTRIBUTORS "AS IS"
 * AND ANY EXPRESS OR IMPLIED WARRANTIES, INCLUDING, BUT NOT LIMITED TO, THE
 * IMPLIED WARRANTIES OF MERCHANTABILITY AND FITNESS FOR A PARTICULAR PURPOSE ARE
 * DISCLAIMED. IN NO EVENT SHALL THE COPYRIGHT HOLDER OR CONTRIBUTORS BE LIABLE
 * FOR ANY DIRECT, INDIRECT, INCIDENTAL, SPECIAL, EXEMPLARY, OR CONSEQUENTIAL
 * DAMAGES (INCLUDING, BUT NOT LIMITED TO, PROCUREMENT OF SUBSTITUTE GOODS OR
 * SERVICES; LOSS OF USE, DATA, OR PROFITS; OR BUSINESS INTERRUPTION) HOWEVER
 * CAUSED AND ON ANY THEORY OF LIABILITY, WHETHER IN CONTRACT, STRICT LIABILITY,
 * OR TORT (INCLUDING NEGLIGENCE OR OTHERWISE) ARISING IN ANY WAY OUT OF THE USE
 * OF THIS SOFTWARE, EVEN IF ADVISED OF THE POSSIBILITY OF SUCH DAMAGE.
 */
//! Square integer convolution with min/max normalization into `[0, 255]`.
//!
//! The image can be split among a fixed pool of workers by rows, by columns (walked
//! column-major or row-major) or through a shared queue of tiles. Every method produces
//! exactly the same output as the sequential reference.
//!
//! ```
//! use pic_filter::{Filter2d, BuiltinFilter, ImageStore, ImageStoreMut, ParallelMethod, ThreadingPolicy};
//!
//! let pixels = (0..64 * 48).map(|i| (i % 251) as i32).collect::<Vec<_>>();
//! let source = ImageStore::from_slice(&pixels, 64, 48).unwrap();
//! let mut destination = ImageStoreMut::alloc(64, 48).unwrap();
//!
//! let mut filter = Filter2d::new(BuiltinFilter::Laplacian3x3);
//! filter.set_parallel_method(ParallelMethod::WorkQueue);
//! filter.set_threading_policy(ThreadingPolicy::Fixed(4));
//! filter.set_work_chunk(16);
//! filter.apply(&source, &mut destination).unwrap();
//!
//! assert!(destination.as_bytes().iter().all(|v| (0..=255).contains(v)));
//! ```
#![deny(deprecated)]
// #![deny(unreachable_code, unused)]
#![allow(clippy::too_many_arguments)]

mod convolve;
mod filter;
mod filter2d;
mod filter_error;
mod image_size;
mod image_store;
mod min_max;
mod parallel_method;
mod partition;
mod queue_work;
mod sample;
mod sequential;
mod sharding;
mod threading_policy;
mod unsafe_slice;
mod work_context;
mod work_queue;

pub use filter::{BuiltinFilter, Filter};
pub use filter_error::{FilterBufferMismatch, FilterError};
pub use filter2d::{DEFAULT_WORK_CHUNK, Filter2d, apply_filter2d, apply_filter2d_threaded};
pub use image_size::ImageSize;
pub use image_store::{ImageStore, ImageStoreMut};
pub use min_max::MinMax;
pub use parallel_method::ParallelMethod;
pub use partition::{Tile, Traversal};
pub use sample::FilterSample;
pub use threading_policy::ThreadingPolicy;
