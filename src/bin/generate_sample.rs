//! Writes `marks.csv`, a deterministic 120-row sample dataset with the
//! columns `Name, Math, Science, English, Grade` and a few missing
//! cells, so the dashboard has something to show out of the box.

use anyhow::{Context, Result};

/// Minimal deterministic PRNG (xoshiro256**)
struct SimpleRng {
    state: [u64; 4],
}

impl SimpleRng {
    fn new(seed: u64) -> Self {
        let mut s = [0u64; 4];
        let mut x = seed;
        for slot in &mut s {
            x = x.wrapping_mul(6364136223846793005).wrapping_add(1);
            *slot = x;
        }
        SimpleRng { state: s }
    }

    fn next_u64(&mut self) -> u64 {
        let result = (self.state[1].wrapping_mul(5))
            .rotate_left(7)
            .wrapping_mul(9);
        let t = self.state[1] << 17;
        self.state[2] ^= self.state[0];
        self.state[3] ^= self.state[1];
        self.state[1] ^= self.state[2];
        self.state[0] ^= self.state[3];
        self.state[2] ^= t;
        self.state[3] = self.state[3].rotate_left(45);
        result
    }

    fn next_f64(&mut self) -> f64 {
        (self.next_u64() >> 11) as f64 / (1u64 << 53) as f64
    }

    /// Box-Muller transform for normal distribution
    fn gauss(&mut self, mean: f64, std_dev: f64) -> f64 {
        let u1 = self.next_f64().max(1e-15);
        let u2 = self.next_f64();
        let z = (-2.0 * u1.ln()).sqrt() * (2.0 * std::f64::consts::PI * u2).cos();
        mean + std_dev * z
    }
}

const FIRST_NAMES: [&str; 12] = [
    "Alice", "Bob", "Carol", "David", "Erin", "Frank", "Grace", "Henry", "Iris", "Jack", "Kate",
    "Liam",
];
const LAST_NAMES: [&str; 10] = [
    "Adams", "Brown", "Chen", "Davis", "Evans", "Garcia", "Hill", "Khan", "Lopez", "Moore",
];

fn mark(rng: &mut SimpleRng, mean: f64) -> i64 {
    rng.gauss(mean, 12.0).clamp(0.0, 100.0).round() as i64
}

fn grade(average: f64) -> &'static str {
    if average >= 85.0 {
        "A"
    } else if average >= 70.0 {
        "B"
    } else if average >= 55.0 {
        "C"
    } else {
        "D"
    }
}

fn main() -> Result<()> {
    let mut rng = SimpleRng::new(42);
    let output_path = "marks.csv";

    let mut writer = csv::Writer::from_path(output_path)
        .with_context(|| format!("creating {output_path}"))?;
    writer.write_record(["Name", "Math", "Science", "English", "Grade"])?;

    let n_rows = 120;
    for i in 0..n_rows {
        let name = format!(
            "{} {}",
            FIRST_NAMES[i % FIRST_NAMES.len()],
            LAST_NAMES[(i / FIRST_NAMES.len()) % LAST_NAMES.len()]
        );
        let ability = 55.0 + rng.next_f64() * 30.0;
        let math = mark(&mut rng, ability);
        let science = mark(&mut rng, ability);
        let english = mark(&mut rng, ability);
        let average = (math + science + english) as f64 / 3.0;

        // Roughly 3% of mark cells are left empty.
        let cell = |v: i64, rng: &mut SimpleRng| {
            if rng.next_f64() < 0.03 {
                String::new()
            } else {
                v.to_string()
            }
        };

        writer.write_record([
            name,
            cell(math, &mut rng),
            cell(science, &mut rng),
            cell(english, &mut rng),
            grade(average).to_string(),
        ])?;
    }
    writer.flush().context("writing CSV")?;

    println!("Wrote {n_rows} rows to {output_path}");
    Ok(())
}
