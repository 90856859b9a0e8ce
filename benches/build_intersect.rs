//! Build, query and refresh timings for the two build modes.

use std::time::Instant;

use bvh_tree::{BuildMode, Bvh, ObjectRef, ObjectStore, AABB};
use glam::Vec3A;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

const OBJECT_COUNT: usize = 100_000;
const QUERY_COUNT: usize = 1_000;

/// Random box inside the 100-unit space with extents up to `max_size`.
fn random_box<R: Rng>(rng: &mut R, max_size: f32) -> AABB<Vec3A> {
    let min = Vec3A::new(
        rng.gen_range(0.0..(100.0 - max_size)),
        rng.gen_range(0.0..(100.0 - max_size)),
        rng.gen_range(0.0..(100.0 - max_size)),
    );
    let size = Vec3A::new(
        rng.gen_range(0.0..max_size),
        rng.gen_range(0.0..max_size),
        rng.gen_range(0.0..max_size),
    );
    AABB::new(min, min + size)
}

fn embedded_bounds(_: &(), object_ref: ObjectRef<'_, AABB<Vec3A>>) -> Option<AABB<Vec3A>> {
    match object_ref {
        ObjectRef::Object(bounds) => Some(*bounds),
        _ => None,
    }
}

fn bench_mode(mode: BuildMode, objects: &[AABB<Vec3A>], query_sets: &[(&str, Vec<AABB<Vec3A>>)]) {
    let mut bvh: Bvh<Vec3A, AABB<Vec3A>> = Bvh::new();

    let start = Instant::now();
    bvh.build(ObjectStore::Embedded(objects.to_vec()), mode, embedded_bounds)
        .unwrap();
    let build = start.elapsed();
    println!(
        "{:?} build, {} objects: {:>9.2}ms",
        mode,
        objects.len(),
        build.as_secs_f64() * 1000.0
    );

    for (label, queries) in query_sets {
        let start = Instant::now();
        let mut hits = 0u64;
        for query in queries {
            hits += u64::from(bvh.intersect_count(query));
        }
        let elapsed = start.elapsed();
        println!(
            "{:?} {} queries x{}: {:>9.2}ms ({} hits)",
            mode,
            label,
            queries.len(),
            elapsed.as_secs_f64() * 1000.0,
            hits
        );
    }

    let start = Instant::now();
    bvh.update(embedded_bounds).unwrap();
    let update = start.elapsed();
    println!("{:?} update: {:>9.2}ms", mode, update.as_secs_f64() * 1000.0);
}

fn main() {
    // Fixed seed so runs are comparable.
    let mut rng = StdRng::seed_from_u64(95756739);

    let objects: Vec<AABB<Vec3A>> = (0..OBJECT_COUNT)
        .map(|_| random_box(&mut rng, 2.0))
        .collect();
    let large: Vec<AABB<Vec3A>> = (0..QUERY_COUNT)
        .map(|_| random_box(&mut rng, 50.0))
        .collect();
    let small: Vec<AABB<Vec3A>> = (0..QUERY_COUNT)
        .map(|_| random_box(&mut rng, 2.0))
        .collect();
    let query_sets = [("large", large), ("small", small)];

    for mode in [BuildMode::Unbalanced, BuildMode::Balanced] {
        bench_mode(mode, &objects, &query_sets);
    }
}
