use std::time::Instant;

use image::{GenericImageView, ImageReader};
use pic_filter::{
    BuiltinFilter, Filter2d, ImageStore, ImageStoreMut, ParallelMethod, ThreadingPolicy,
};

fn main() {
    let (width, height, pixels) = match std::env::args().nth(1) {
        Some(path) => {
            let img = ImageReader::open(path).unwrap().decode().unwrap();
            let dimensions = img.dimensions();
            let luma = img.to_luma8();
            let pixels = luma.as_raw().iter().map(|&x| x as i32).collect::<Vec<_>>();
            (dimensions.0 as usize, dimensions.1 as usize, pixels)
        }
        None => {
            // diagonal gradient with a bright square in the middle
            let (width, height) = (2048usize, 2048usize);
            let pixels = (0..width * height)
                .map(|i| {
                    let (y, x) = (i / width, i % width);
                    let square = (768..1280).contains(&x) && (768..1280).contains(&y);
                    if square {
                        255
                    } else {
                        ((x + y) / 16 % 256) as i32
                    }
                })
                .collect::<Vec<_>>();
            (width, height, pixels)
        }
    };

    let store = ImageStore::from_slice(&pixels, width, height).unwrap();
    let mut reference = ImageStoreMut::alloc(width, height).unwrap();

    for method in ParallelMethod::ALL {
        let mut filter = Filter2d::new(BuiltinFilter::Laplacian3x3);
        filter.set_parallel_method(method);
        filter.set_threading_policy(ThreadingPolicy::Fixed(4));
        filter.set_work_chunk(64);

        let mut target = ImageStoreMut::alloc(width, height).unwrap();
        let start_time = Instant::now();
        filter.apply(&store, &mut target).unwrap();
        let elapsed_time = start_time.elapsed();
        println!("{:?}: {:.2?}", method, elapsed_time);

        if method == ParallelMethod::Sequential {
            reference = target;
        } else {
            assert_eq!(reference.as_bytes(), target.as_bytes(), "{:?}", method);
        }
    }

    let dst = reference
        .as_bytes()
        .iter()
        .map(|&x| x.clamp(0, 255) as u8)
        .collect::<Vec<_>>();
    image::save_buffer(
        "filtered.png",
        &dst,
        width as u32,
        height as u32,
        image::ColorType::L8,
    )
    .unwrap();
}
