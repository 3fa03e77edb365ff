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

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use pic_filter::{BuiltinFilter, ParallelMethod, apply_filter2d, apply_filter2d_threaded};

#[derive(Arbitrary, Debug)]
struct FilterInput {
    width: u8,
    height: u8,
    threads: u8,
    chunk: u8,
    filter: u8,
    pixels: Vec<i16>,
}

fuzz_target!(|data: FilterInput| {
    filter_methods(data);
});

fn filter_methods(data: FilterInput) {
    let width = data.width as usize % 64;
    let height = data.height as usize % 64;
    let threads = data.threads as usize % 9;
    let chunk = data.chunk as usize % 70;
    if width == 0 || height == 0 || threads == 0 || chunk == 0 || data.pixels.is_empty() {
        return;
    }
    let filter = BuiltinFilter::ALL[data.filter as usize % BuiltinFilter::ALL.len()].filter();
    let original = (0..width * height)
        .map(|i| data.pixels[i % data.pixels.len()] as i32)
        .collect::<Vec<_>>();

    let mut expected = vec![0i32; width * height];
    apply_filter2d(&filter, &original, &mut expected, width, height).unwrap();

    for method in ParallelMethod::ALL {
        let mut target = vec![0i32; width * height];
        apply_filter2d_threaded(
            &filter,
            &original,
            &mut target,
            width,
            height,
            threads,
            method,
            chunk,
        )
        .unwrap();
        assert_eq!(target, expected, "{:?}", method);
    }
}
