//! Benchmarks for chain pipelines.
//!
//! Run with: `cargo bench -p the-chain --bench chain`

use divan::{
  Bencher,
  black_box,
};
use the_chain::{
  Chain,
  Nested,
  chain,
};

fn main() {
  divan::main();
}

fn make_numbers(len: usize) -> Vec<u64> {
  // Cheap LCG so sorts see unordered input.
  let mut state = 0x2545_f491_4f6c_dd1d_u64;
  (0..len)
    .map(|_| {
      state = state.wrapping_mul(6364136223846793005).wrapping_add(1);
      state >> 33
    })
    .collect()
}

fn make_nested(len: usize, width: usize) -> Vec<Nested<u64>> {
  make_numbers(len)
    .chunks(width.max(1))
    .map(|chunk| {
      let inner = chunk.iter().copied().map(Nested::Leaf).collect();
      Nested::Seq(vec![Nested::Seq(inner)])
    })
    .collect()
}

// Streaming links.

mod streaming {
  use super::*;

  #[divan::bench(args = [1_000, 100_000])]
  fn map_filter(bencher: Bencher, len: usize) {
    let numbers: Chain<u64> = chain(make_numbers(len));
    let pipeline = numbers.map(|x, _| x * 3).filter(|x, _| x % 2 == 0);

    bencher.bench(|| black_box(pipeline.to_vec()));
  }

  #[divan::bench(args = [1_000, 100_000])]
  fn first_of_long_pipeline(bencher: Bencher, len: usize) {
    let pipeline = chain(make_numbers(len))
      .map(|x, _| x + 1)
      .filter(|x, _| x % 7 == 0)
      .map(|x, _| x * 2);

    bencher.bench(|| black_box(pipeline.first()));
  }

  #[divan::bench(args = [1, 16, 256])]
  fn flatten(bencher: Bencher, width: usize) {
    let nested = chain(make_nested(10_000, width)).flatten();

    bencher.bench(|| black_box(nested.count()));
  }
}

// Materializing and aggregating links.

mod materializing {
  use super::*;

  #[divan::bench(args = [1_000, 100_000])]
  fn sort(bencher: Bencher, len: usize) {
    let sorted = chain(make_numbers(len)).sort();

    bencher.bench(|| black_box(sorted.to_vec()));
  }

  #[divan::bench(args = [1_000, 100_000])]
  fn reverse(bencher: Bencher, len: usize) {
    let reversed = chain(make_numbers(len)).reverse();

    bencher.bench(|| black_box(reversed.to_vec()));
  }

  #[divan::bench(args = [16, 1024])]
  fn count_by(bencher: Bencher, buckets: u64) {
    let counted = chain(make_numbers(100_000)).count_by(move |x, _| (x % buckets) as usize);

    bencher.bench(|| black_box(counted.to_object()));
  }

  #[divan::bench(args = [16, 1024])]
  fn uniq_by(bencher: Bencher, buckets: u64) {
    let unique = chain(make_numbers(100_000)).uniq_by(move |x, _| x % buckets);

    bencher.bench(|| black_box(unique.to_vec()));
  }
}
