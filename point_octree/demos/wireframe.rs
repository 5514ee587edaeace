use glam::Vec3;
use point_octree::prelude::*;
use rand::prelude::*;

const DOTS: usize = 20;
const HALF_DIMENSION: f32 = 400.0;

#[derive(Clone, Debug, Position)]
struct Dot {
    position: Vec3,
    radius: f32,
}

// Pairs of corner indices joined by an edge: corners differing by exactly one axis bit.
fn edges() -> impl Iterator<Item = (usize, usize)> {
    (0..8).flat_map(|corner| {
        [4, 2, 1]
            .into_iter()
            .filter(move |bit| corner & bit == 0)
            .map(move |bit| (corner, corner | bit))
    })
}

fn main() -> Result<(), OctreeError> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let mut rng = StdRng::from_entropy();
    let mut octree: Octree<Dot, f32> = Octree::new(Vec3::ZERO, Vec3::splat(HALF_DIMENSION));

    for _ in 0..DOTS {
        let position = Vec3::from(
            [0.0; 3].map(|_: f32| rng.gen_range(-HALF_DIMENSION..HALF_DIMENSION)),
        );
        octree.insert(Dot {
            position,
            radius: 2.0,
        })?;
    }

    log::info!(
        "{} dots in {} nodes ({} leaves), depth {}",
        octree.len(),
        octree.node_count(),
        octree.leaf_count(),
        octree.depth()
    );

    octree.for_each_node(|node| {
        log::info!(
            "{:indent$}box {} at {:?} half-extent {:?}",
            "",
            node.id(),
            node.origin(),
            node.half_extent(),
            indent = 2 * node.depth()
        );

        let corners = node.cuboid().corners();
        for (a, b) in edges() {
            log::debug!("  edge {:?} -> {:?}", corners[a], corners[b]);
        }

        for dot in node.points() {
            log::info!(
                "{:indent$}dot at {} radius {}",
                "",
                dot.position,
                dot.radius,
                indent = 2 * node.depth() + 2
            );
        }
    });

    let mut found = Vec::new();
    let stats = octree.query(Vec3::splat(-100.0), Vec3::splat(100.0), &mut found)?;
    log::info!("{} dots near the center, {stats:?}", found.len());

    Ok(())
}
