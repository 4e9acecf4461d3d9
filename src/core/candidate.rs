//! Fitness values and the candidate record.

/// Marker trait for fitness values.
///
/// Fitness must be comparable, cheaply copyable and have a neutral value
/// (its [`Default`]), which is what freshly generated candidates carry
/// until they are evaluated.
///
/// Whether higher or lower is better is **not** part of this trait. It is
/// decided by the evaluator/selector pairing through the `natural` flag
/// of [`Selector::select`](crate::selectors::Selector::select).
///
/// Built-in implementations exist for the primitive float and integer
/// types.
pub trait Fitness: PartialOrd + Copy + Default + Send + Sync + std::fmt::Debug + 'static {
    /// Converts the fitness to `f64` for weighting and statistics.
    fn to_f64(self) -> f64;

    /// Converts an error or match count into a fitness value.
    fn from_count(count: usize) -> Self;
}

macro_rules! impl_fitness {
    ($($t:ty),*) => {
        $(
            impl Fitness for $t {
                fn to_f64(self) -> f64 {
                    self as f64
                }

                fn from_count(count: usize) -> Self {
                    count as $t
                }
            }
        )*
    };
}

impl_fitness!(f64, f32, i32, i64, u32, u64, usize);

/// One population member: a genome, its fitness and an `alive` flag.
///
/// The `alive` flag marks survivors of the last selection. Dead slots are
/// the ones a [`Generator`](crate::generators::Generator) refills.
///
/// [`Candidate::default`] yields a **dead** candidate, which is how a new
/// population starts out before seeding.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Candidate<G, F = f64> {
    /// The domain payload.
    pub genome: G,

    /// Score assigned by the last evaluation.
    pub fitness: F,

    /// Whether this candidate survived the last selection.
    pub alive: bool,
}

impl<G, F: Fitness> Candidate<G, F> {
    /// Creates a live candidate with neutral fitness.
    pub fn new(genome: G) -> Self {
        Self {
            genome,
            fitness: F::default(),
            alive: true,
        }
    }

    /// Creates a live candidate with the given fitness.
    pub fn with_fitness(genome: G, fitness: F) -> Self {
        Self {
            genome,
            fitness,
            alive: true,
        }
    }

    /// Replaces the genome, resetting fitness and marking the slot alive.
    pub(crate) fn respawn(&mut self, genome: G) {
        self.genome = genome;
        self.fitness = F::default();
        self.alive = true;
    }
}
