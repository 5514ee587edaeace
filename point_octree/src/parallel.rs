use crate::{
    error::Result,
    position::{IntoArray, Position},
    tree::{BoundingBox, Scalar},
    Octree,
};
use rayon::iter::{IntoParallelRefIterator, ParallelIterator};

impl<P, S> Octree<P, S>
where
    P: Position + Clone + Send + Sync,
    P::Vector: IntoArray<Array = [S; 3]>,
    S: Scalar + Send + Sync,
{
    /// Answers several range queries on multiple threads, returning the items found inside each
    /// box in the same order as `boxes`.
    ///
    /// Queries only read the tree, so they can run concurrently; inserting still requires
    /// exclusive access.
    ///
    /// # Errors
    ///
    /// Returns the first error [`query_box`](Self::query_box) reports for any of the boxes.
    pub fn par_query_boxes(&self, boxes: &[BoundingBox<[S; 3]>]) -> Result<Vec<Vec<P>>> {
        boxes
            .par_iter()
            .map(|bbox| {
                let mut found = Vec::new();
                self.query_box(bbox, &mut found)?;
                Ok(found)
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use crate::prelude::*;
    use rand::prelude::*;

    #[test]
    fn parallel_queries_match_sequential() {
        let mut rng = StdRng::seed_from_u64(17);
        let mut octree: Octree<[f64; 3], f64> = Octree::new([0.0; 3], [100.0; 3]);
        for _ in 0..500 {
            octree
                .insert([0.0; 3].map(|_: f64| rng.gen_range(-100.0..=100.0)))
                .unwrap();
        }

        let boxes: Vec<_> = (0..64)
            .map(|_| {
                BoundingBox::with([0; 2].map(|_| [0.0; 3].map(|_: f64| rng.gen_range(-120.0..120.0))))
            })
            .collect();

        let parallel = octree.par_query_boxes(&boxes).unwrap();
        for (bbox, found) in boxes.iter().zip(parallel) {
            let mut sequential = Vec::new();
            octree.query_box(bbox, &mut sequential).unwrap();
            assert_eq!(found, sequential);
        }
    }
}
