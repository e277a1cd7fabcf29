//! Generation throughput: serial vs rayon stepping on a sparse grid

use std::time::Instant;

use life_editor::domain::{Cell, GridDimensions, LiveCellStore, presets, step, step_parallel};

/// Tile Gosper guns across the grid so the population keeps growing
fn seed(dims: &GridDimensions) -> LiveCellStore {
    let gun = presets::gosper_gun();
    let mut live = LiveCellStore::new();
    for y in (0..dims.height() - 10).step_by(60) {
        for x in (0..dims.width() - 40).step_by(80) {
            live.extend(gun.offsets().iter().map(|&o| Cell::new(x, y) + o));
        }
    }
    live
}

fn benchmark(
    dims: &GridDimensions,
    generations: u32,
    stepper: fn(&LiveCellStore, &GridDimensions) -> LiveCellStore,
) -> (f64, usize) {
    let mut live = seed(dims);
    let start = Instant::now();
    for _ in 0..generations {
        live = stepper(&live, dims);
    }
    (start.elapsed().as_secs_f64() * 1000.0 / generations as f64, live.count())
}

fn main() {
    println!("=== Life Editor Step Benchmark ===\n");

    let sizes = [201, 501, 1001, 2001, 4001];
    let generations = 50;

    println!("{:>12} {:>12} {:>12} {:>12} {:>10}", "Grid", "Population", "Serial", "Parallel", "Speedup");
    println!("{:-<62}", "");

    for size in sizes {
        let Some(dims) = GridDimensions::new(size, size) else {
            continue;
        };
        let (serial_ms, population) = benchmark(&dims, generations, step);
        let (parallel_ms, parallel_population) = benchmark(&dims, generations, step_parallel);
        assert_eq!(population, parallel_population, "serial and parallel diverged");

        println!(
            "{:>12} {:>12} {:>10.2}ms {:>10.2}ms {:>9.1}x",
            format!("{}x{}", size, size),
            population,
            serial_ms,
            parallel_ms,
            serial_ms / parallel_ms
        );
    }
}
