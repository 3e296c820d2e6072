use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;
use std::sync::LazyLock;

use divan::{Bencher, black_box};
use reprint::{Reprint, copy_into, deep_copy};

#[derive(Debug, Clone, PartialEq)]
struct SampleStruct {
    id: u32,
    name: String,
    tags: Vec<String>,
    parent: Option<Box<u32>>,
}

reprint::deep_copy_struct!(SampleStruct {
    id,
    name,
    tags,
    parent
});

const BATCH_SIZE: usize = 512;

fn make_samples() -> Vec<SampleStruct> {
    (0..BATCH_SIZE)
        .map(|i| SampleStruct {
            id: (i as u32) * 17 + 3,
            name: format!("name-{i:04}"),
            tags: (0..i % 4).map(|t| format!("tag-{t}")).collect(),
            parent: (i % 3 == 0).then(|| Box::new(i as u32)),
        })
        .collect()
}

static SAMPLES: LazyLock<Vec<SampleStruct>> = LazyLock::new(make_samples);
static INDEX: LazyLock<HashMap<u32, SampleStruct>> =
    LazyLock::new(|| SAMPLES.iter().map(|s| (s.id, s.clone())).collect());

fn main() {
    divan::main();
}

#[divan::bench]
fn deep_copy_vec_of_structs(bencher: Bencher) {
    let samples = &*SAMPLES;
    bencher.bench(|| black_box(deep_copy(black_box(samples))));
}

#[divan::bench]
fn clone_vec_of_structs(bencher: Bencher) {
    let samples = &*SAMPLES;
    bencher.bench(|| black_box(black_box(samples).clone()));
}

#[divan::bench]
fn deep_copy_map_of_structs(bencher: Bencher) {
    let index = &*INDEX;
    bencher.bench(|| black_box(deep_copy(black_box(index))));
}

#[divan::bench]
fn deep_copy_shared_cells(bencher: Bencher) {
    let shared = Rc::new(RefCell::new(vec![0u64; 64]));
    let cells: Vec<Rc<RefCell<Vec<u64>>>> = (0..BATCH_SIZE).map(|_| shared.clone()).collect();
    bencher.bench_local(|| black_box(deep_copy(black_box(&cells))));
}

#[divan::bench]
fn copy_into_box(bencher: Bencher) {
    let samples = &*SAMPLES;
    bencher.bench_local(|| {
        let mut target = Box::new(Vec::<SampleStruct>::new());
        copy_into(Some(black_box(samples) as &dyn Reprint), Some(&mut target))
            .expect("copy into a box should succeed");
        black_box(target)
    });
}
