use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

use posit_quire::{p32, p64, q32, q64, Policy, Posit, RoundFrom, Value};

// Establish a baseline by comparing with a single fpu add

fn baseline_fpu_add_f32(c: &mut Criterion) {
  c.bench_function("baseline_fpu_add_f32", |b| {
    b.iter(|| black_box(3.14_f32) + black_box(69.420_f32));
  });
}

fn baseline_fpu_add_f64(c: &mut Criterion) {
  c.bench_function("baseline_fpu_add_f64", |b| {
    b.iter(|| black_box(3.14_f64) + black_box(69.420_f64));
  });
}

// Time taking 1 posit apart, and putting it back together

const NUMS_32: [p32; 4] = [
  unsafe { p32::from_bits_unchecked(0b00101011100101110110111101100011u32 as _) },
  unsafe { p32::from_bits_unchecked(0b00000000010101010100111100100101u32 as _) },
  unsafe { p32::from_bits_unchecked(0b11010100001001010100101000101110u32 as _) },
  unsafe { p32::from_bits_unchecked(0b01110010011111001111001001110000u32 as _) },
];

const NUMS_64: [p64; 4] = [
  unsafe { p64::from_bits_unchecked(0b0010101110010111011011110110001100101001101111011111000111100111u64 as _) },
  unsafe { p64::from_bits_unchecked(0b0000000001010101010011110010010100011000100101110110100010000011u64 as _) },
  unsafe { p64::from_bits_unchecked(0b1101010000100101010010100010111011010010011010111001111111001011u64 as _) },
  unsafe { p64::from_bits_unchecked(0b0111001001111100111100100111000011010111000101000001001101001111u64 as _) },
];

fn fields<const N: u32, const ES: u32, Int: posit_quire::Int>(
  c: &mut Criterion,
  name: &str,
  nums: [Posit<N, ES, Int>; 4],
) {
  let mut g = c.benchmark_group(name);
  for num in nums {
    g.throughput(Throughput::Elements(1));
    g.bench_with_input(BenchmarkId::new("fields", format_args!("{num:?}")), &num, |b, &num| {
      b.iter(|| black_box(num).fields());
    });
    let f = num.fields();
    g.bench_with_input(BenchmarkId::new("from_fields", format_args!("{num:?}")), &f, |b, f| {
      b.iter(|| Posit::<N, ES, Int>::from_fields(
        black_box(f.sign),
        black_box(f.regime),
        black_box(f.exponent),
        black_box(f.fraction),
        black_box(f.fraction_len),
      ));
    });
    g.bench_with_input(BenchmarkId::new("to_value", format_args!("{num:?}")), &num, |b, &num| {
      b.iter(|| Value::from(black_box(num)));
    });
  }
  g.finish();
}

fn fields_p32(c: &mut Criterion) { fields(c, "codec_p32", NUMS_32) }
fn fields_p64(c: &mut Criterion) { fields(c, "codec_p64", NUMS_64) }

// Time the arithmetic operators

fn arithmetic_p32(c: &mut Criterion) {
  let mut g = c.benchmark_group("arithmetic_p32");
  g.throughput(Throughput::Elements(1));
  let (x, y) = (NUMS_32[0], NUMS_32[3]);
  g.bench_function("add", |b| b.iter(|| black_box(x) + black_box(y)));
  g.bench_function("mul", |b| b.iter(|| black_box(x) * black_box(y)));
  g.bench_function("div", |b| b.iter(|| black_box(x) / black_box(y)));
  g.bench_function("round_from_f64", |b| b.iter(|| p32::round_from(black_box(3.14159_f64))));
  g.finish();
}

fn arithmetic_p64(c: &mut Criterion) {
  let mut g = c.benchmark_group("arithmetic_p64");
  g.throughput(Throughput::Elements(1));
  let (x, y) = (NUMS_64[0], NUMS_64[3]);
  g.bench_function("add", |b| b.iter(|| black_box(x) + black_box(y)));
  g.bench_function("mul", |b| b.iter(|| black_box(x) * black_box(y)));
  g.bench_function("div", |b| b.iter(|| black_box(x) / black_box(y)));
  g.bench_function("round_from_f64", |b| b.iter(|| p64::round_from(black_box(3.14159_f64))));
  g.finish();
}

// Time accumulating into the quire

fn quire_p32(c: &mut Criterion) {
  let mut g = c.benchmark_group("quire_p32");
  g.throughput(Throughput::Elements(1));
  let (x, y) = (NUMS_32[0], NUMS_32[3]);
  g.bench_function("add_posit", |b| {
    let mut quire = q32::ZERO;
    b.iter(|| quire.add_posit(black_box(x)));
  });
  g.bench_function("add_product", |b| {
    let mut quire = q32::ZERO;
    b.iter(|| {
      let r = quire.add_product(black_box(x), black_box(y));
      quire.sub_product(black_box(x), black_box(y)).and(r)
    });
  });
  g.bench_function("round_from", |b| {
    let mut quire = q32::from(x);
    let _ = quire.add_product(x, y);
    b.iter(|| p32::round_from(black_box(&quire)));
  });
  g.finish();
}

fn quire_p64(c: &mut Criterion) {
  let mut g = c.benchmark_group("quire_p64");
  g.throughput(Throughput::Elements(1));
  let (x, y) = (NUMS_64[0], NUMS_64[3]);
  g.bench_function("add_product", |b| {
    let mut quire = q64::ZERO;
    b.iter(|| {
      let r = quire.add_product(black_box(x), black_box(y));
      quire.sub_product(black_box(x), black_box(y)).and(r)
    });
  });
  g.bench_function("round_from", |b| {
    let mut quire = q64::from(x);
    let _ = quire.add_product(x, y);
    b.iter(|| p64::round_from(black_box(&quire)));
  });
  g.finish();
}

// Time dot products, fused and naive

fn dot_p32(c: &mut Criterion) {
  let mut g = c.benchmark_group("dot_p32");
  for len in [16, 256, 4096] {
    let x: Vec<p32> = (0 .. len).map(|i| p32::round_from(1. / (i as f64 + 1.))).collect();
    let y: Vec<p32> = (0 .. len).map(|i| p32::round_from(i as f64 - 100.)).collect();
    g.throughput(Throughput::Elements(len as u64));
    g.bench_with_input(BenchmarkId::new("fdp", len), &(&x, &y), |b, (x, y)| {
      b.iter(|| q32::fdp(black_box(x.as_slice()), black_box(y.as_slice()), Policy::Propagate));
    });
    g.bench_with_input(BenchmarkId::new("naive", len), &(&x, &y), |b, (x, y)| {
      b.iter(|| {
        black_box(x).iter().zip(black_box(y).iter()).fold(p32::ZERO, |acc, (a, b)| acc + a * b)
      });
    });
  }
  g.finish();
}

criterion_group!(baseline_fpu,
  baseline_fpu_add_f32,
  baseline_fpu_add_f64,
);

criterion_group!(codec,
  fields_p32,
  fields_p64,
);

criterion_group!(arithmetic,
  arithmetic_p32,
  arithmetic_p64,
);

criterion_group!(quire,
  quire_p32,
  quire_p64,
  dot_p32,
);

criterion_main!(baseline_fpu, codec, arithmetic, quire);
