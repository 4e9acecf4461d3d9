//! Ordered mutator composition.

use super::Mutator;
use crate::core::{Fitness, Population};
use crate::error::ConfigError;

/// An ordered chain of mutators applied one after another.
///
/// Composition is associative: `a.then(b).then(c)` and
/// `a.then(b.then(c))` apply the same operators in the same order.
/// [`append`](Pipeline::append) splices another pipeline's stages in
/// directly instead of nesting it.
///
/// # Examples
///
/// ```
/// use u_evolve::mutators::{FixedCrossover, PassThrough, Pipeline};
///
/// let pipeline: Pipeline<[u8; 4]> = Pipeline::new()
///     .then(PassThrough)
///     .then(FixedCrossover::new(1).with_seed(42));
/// assert_eq!(pipeline.len(), 2);
/// ```
pub struct Pipeline<G, F = f64> {
    stages: Vec<Box<dyn Mutator<G, F>>>,
}

impl<G, F: Fitness> Pipeline<G, F> {
    /// Creates an empty pipeline, which behaves like
    /// [`PassThrough`](super::PassThrough).
    pub fn new() -> Self {
        Self { stages: Vec::new() }
    }

    /// Appends a stage after the existing ones.
    pub fn then<M>(mut self, mutator: M) -> Self
    where
        M: Mutator<G, F> + 'static,
    {
        self.stages.push(Box::new(mutator));
        self
    }

    /// Appends every stage of `other`, in order.
    pub fn append(mut self, other: Pipeline<G, F>) -> Self {
        self.stages.extend(other.stages);
        self
    }

    /// Number of stages.
    pub fn len(&self) -> usize {
        self.stages.len()
    }

    /// Whether the pipeline has no stages.
    pub fn is_empty(&self) -> bool {
        self.stages.is_empty()
    }
}

impl<G, F: Fitness> Default for Pipeline<G, F> {
    fn default() -> Self {
        Self::new()
    }
}

impl<G, F: Fitness> Mutator<G, F> for Pipeline<G, F> {
    fn mutate(&mut self, population: &mut Population<G, F>) {
        for stage in &mut self.stages {
            stage.mutate(population);
        }
    }

    fn validate(&self, population_size: usize) -> Result<(), ConfigError> {
        self.stages
            .iter()
            .try_for_each(|stage| stage.validate(population_size))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mutators::{FixedCrossover, PassThrough};

    /// Appends a tag to every live genome.
    struct Tag(char);

    impl Mutator<String, f64> for Tag {
        fn mutate(&mut self, population: &mut Population<String, f64>) {
            for c in population.iter_mut().filter(|c| c.alive) {
                c.genome.push(self.0);
            }
        }
    }

    fn population() -> Population<String> {
        Population::from_genomes(["".to_string(), "x".to_string()])
    }

    #[test]
    fn test_stages_run_in_order() {
        let mut pipeline = Pipeline::new().then(Tag('a')).then(Tag('b')).then(Tag('c'));
        let mut pop = population();

        pipeline.mutate(&mut pop);

        assert_eq!(pop[0].genome, "abc");
        assert_eq!(pop[1].genome, "xabc");
    }

    #[test]
    fn test_grouping_is_irrelevant() {
        let mut left = Pipeline::new().then(Tag('a')).then(Tag('b')).then(Tag('c'));
        let mut nested = Pipeline::new()
            .then(Tag('a'))
            .then(Pipeline::new().then(Tag('b')).then(Tag('c')));
        let mut spliced = Pipeline::new()
            .then(Tag('a'))
            .append(Pipeline::new().then(Tag('b')).then(Tag('c')));

        let mut a = population();
        let mut b = population();
        let mut c = population();
        left.mutate(&mut a);
        nested.mutate(&mut b);
        spliced.mutate(&mut c);

        assert_eq!(a, b);
        assert_eq!(a, c);
        assert_eq!(spliced.len(), 3);
        assert_eq!(nested.len(), 2);
    }

    #[test]
    fn test_empty_pipeline_is_identity() {
        let mut pipeline: Pipeline<String> = Pipeline::default();
        let mut pop = population();
        pipeline.mutate(&mut pop);
        assert_eq!(pop, population());
        assert!(pipeline.is_empty());
    }

    #[test]
    fn test_pass_through_then_crossover() {
        let mut pipeline: Pipeline<(i32, f64, char)> = Pipeline::new()
            .then(PassThrough)
            .then(FixedCrossover::new(1).with_seed(42));
        let mut pop = Population::from_genomes([
            (1, 1.0, 'a'),
            (2, 2.0, 'b'),
            (3, 3.0, 'c'),
            (4, 4.0, 'd'),
            (5, 5.0, 'e'),
            (6, 6.0, 'f'),
        ]);

        pipeline.mutate(&mut pop);

        assert_eq!(pop.len(), 6);
        // One-point crossover on arity 3 always moves the first gene.
        assert_eq!(pop[0].genome.0, 2);
        assert_eq!(pop[1].genome.0, 1);
    }

    #[test]
    fn test_validate_reports_first_failing_stage() {
        let pipeline: Pipeline<(i32,)> = Pipeline::new()
            .then(PassThrough)
            .then(FixedCrossover::new(1));
        assert!(matches!(
            pipeline.validate(10),
            Err(ConfigError::GenomeTooShort { arity: 1, .. })
        ));
    }
}
