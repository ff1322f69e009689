use std::fmt::{Display, Write as _};

use arrayvec::ArrayString;
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use num_charconv::{from_chars, to_chars, FromChars, ToChars};
use rand::distributions::uniform::SampleUniform;
use rand::{rngs::StdRng, Rng, SeedableRng};

const SAMPLES: usize = 4096;

trait Sample: Copy + Display + SampleUniform + PartialOrd {
    const ZERO: Self;
    const SIGNED: bool;
    fn max_with_digits(digits: u32) -> Self;
    fn neg(self) -> Self;
}

macro_rules! impl_Sample {
    ($($t:ident => $signed:expr),*) => {$(
        impl Sample for $t {
            const ZERO: Self = 0;
            const SIGNED: bool = $signed;

            fn max_with_digits(digits: u32) -> Self {
                <$t>::pow(10, digits) - 1
            }

            fn neg(self) -> Self {
                <$t>::wrapping_sub(0, self)
            }
        }
    )*};
}

impl_Sample!(i32 => true, u32 => false, i64 => true, u64 => false);

// Random values whose rendering (sign excluded) has exactly `digits` digits.
fn generate_ints<T: Sample>(digits: u32) -> Vec<T> {
    let mut rng = StdRng::seed_from_u64(u64::from(digits));
    let max = T::max_with_digits(digits);
    let min = if T::SIGNED { max.neg() } else { T::ZERO };
    let mut v = Vec::with_capacity(SAMPLES);
    while v.len() < SAMPLES {
        let n = rng.gen_range(min..=max);
        if n.to_string().trim_start_matches('-').len() == digits as usize {
            v.push(n);
        }
    }
    v
}

fn generate_strings<T: Sample>(digits: u32) -> Vec<String> {
    generate_ints::<T>(digits)
        .into_iter()
        .map(|n| n.to_string())
        .collect()
}

fn to_chars_naive(buf: &mut [u8], mut n: u32) -> usize {
    let mut len = 0;
    while n >= 10 {
        buf[len] = b'0' + (n % 10) as u8;
        n /= 10;
        len += 1;
    }
    buf[len] = b'0' + n as u8;
    len += 1;
    buf[..len].reverse();
    len
}

fn from_chars_unchecked(text: &[u8]) -> u32 {
    text.iter().fold(0u32, |acc, &b| {
        acc.wrapping_mul(10).wrapping_add(u32::from(b.wrapping_sub(b'0')))
    })
}

fn bench_to_chars_for<T: Sample + ToChars>(c: &mut Criterion, name: &str, max_digits: u32) {
    let mut group = c.benchmark_group(format!("to_chars/{}", name));
    for digits in 1..=max_digits {
        let v = generate_ints::<T>(digits);
        group.bench_with_input(BenchmarkId::new("num_charconv", digits), &v, |b, v| {
            let mut buf = [0u8; 32];
            let mut i = 0;
            b.iter(|| {
                let end = to_chars(black_box(&mut buf), v[i % v.len()]);
                i += 1;
                black_box(end)
            });
        });
        group.bench_with_input(BenchmarkId::new("core_fmt", digits), &v, |b, v| {
            let mut s = ArrayString::<32>::new();
            let mut i = 0;
            b.iter(|| {
                s.clear();
                let _ = write!(s, "{}", v[i % v.len()]);
                i += 1;
                black_box(s.len())
            });
        });
    }
    group.finish();
}

fn bench_from_chars_for<T>(c: &mut Criterion, name: &str, max_digits: u32)
where
    T: Sample + FromChars + Default + std::str::FromStr,
{
    let mut group = c.benchmark_group(format!("from_chars/{}", name));
    for digits in 1..=max_digits {
        let v = generate_strings::<T>(digits);
        group.bench_with_input(BenchmarkId::new("num_charconv", digits), &v, |b, v| {
            let mut value = T::default();
            let mut i = 0;
            b.iter(|| {
                let res = from_chars(black_box(v[i % v.len()].as_bytes()), &mut value);
                i += 1;
                black_box(res)
            });
        });
        group.bench_with_input(BenchmarkId::new("str_parse", digits), &v, |b, v| {
            let mut i = 0;
            b.iter(|| {
                let res = black_box(v[i % v.len()].as_str()).parse::<T>();
                i += 1;
                black_box(res.is_ok())
            });
        });
    }
    group.finish();
}

fn bench_to_chars(c: &mut Criterion) {
    bench_to_chars_for::<i32>(c, "i32", 9);
    bench_to_chars_for::<u32>(c, "u32", 9);
    bench_to_chars_for::<i64>(c, "i64", 18);
    bench_to_chars_for::<u64>(c, "u64", 19);

    let mut group = c.benchmark_group("to_chars/naive");
    for digits in 1..=9 {
        let v = generate_ints::<u32>(digits);
        group.bench_with_input(BenchmarkId::new("reverse", digits), &v, |b, v| {
            let mut buf = [0u8; 16];
            let mut i = 0;
            b.iter(|| {
                let len = to_chars_naive(black_box(&mut buf), v[i % v.len()]);
                i += 1;
                black_box(len)
            });
        });
    }
    group.finish();
}

fn bench_from_chars(c: &mut Criterion) {
    bench_from_chars_for::<i32>(c, "i32", 9);
    bench_from_chars_for::<u32>(c, "u32", 9);
    bench_from_chars_for::<i64>(c, "i64", 18);
    bench_from_chars_for::<u64>(c, "u64", 19);

    let mut group = c.benchmark_group("from_chars/naive");
    for digits in 1..=9 {
        let v = generate_strings::<u32>(digits);
        group.bench_with_input(BenchmarkId::new("unchecked", digits), &v, |b, v| {
            let mut i = 0;
            b.iter(|| {
                let n = from_chars_unchecked(black_box(v[i % v.len()].as_bytes()));
                i += 1;
                black_box(n)
            });
        });
    }
    group.finish();
}

criterion_group!(benches, bench_to_chars, bench_from_chars);
criterion_main!(benches);
