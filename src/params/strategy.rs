//! Compile-time table of named evolutionary-algorithm strategies.
//!
//! Strategy-kind options select a pluggable component (experiment driver,
//! evolutionary algorithm, task, genotype, variation operator) by name at
//! startup. The set of selectable components is fixed at compile time;
//! resolving a name is a table lookup, never reflection.

/// One selectable component, identified by its canonical name.
///
/// Instances live in the [`STRATEGIES`] table for the lifetime of the
/// process, so options hold `&'static Strategy` references and compare
/// by pointer-free structural equality.
#[derive(Debug, PartialEq, Eq)]
pub struct Strategy {
    /// Canonical name, as written in tokens and parameter files.
    pub name: &'static str,
    /// One-line description of the component's role.
    pub summary: &'static str,
}

macro_rules! strategies {
    ($($konst:ident => ($name:literal, $summary:literal);)+) => {
        $(
            #[doc = $summary]
            pub const $konst: Strategy = Strategy {
                name: $name,
                summary: $summary,
            };
        )+

        /// Every strategy selectable by name.
        pub const STRATEGIES: &[&Strategy] = &[$(&$konst),+];
    };
}

strategies! {
    GENERATIONAL_EXPERIMENT => ("GenerationalExperiment", "Single-population generational experiment bounded by maxGens");
    STEADY_STATE_EXPERIMENT => ("SteadyStateExperiment", "Steady-state experiment logging every steadyStateIndividualsPerGeneration evaluations");
    REPLAY_EXPERIMENT => ("ReplayExperiment", "Replays previously saved genotypes from loadFrom instead of evolving");
    SELECTIVE_BREEDING_EA => ("SelectiveBreedingEA", "Interactive selective breeding of the current population");
    MU_LAMBDA_EA => ("MuLambdaEA", "Classic (mu + lambda) / (mu, lambda) evolution strategy");
    NSGA2 => ("NSGA2", "Non-dominated sorting GA for multiobjective fitness");
    TWEANN_GENOTYPE => ("TWEANNGenotype", "Topology- and weight-evolving neural network genotype");
    REAL_VALUED_GENOTYPE => ("RealValuedGenotype", "Fixed-length real-valued vector genotype");
    TWEANN_CROSSOVER => ("TWEANNCrossover", "Innovation-aligned crossover for TWEANN genotypes");
    UNIFORM_CROSSOVER => ("UniformCrossover", "Per-gene uniform crossover for vector genotypes");
    GAUSSIAN_PERTURBER => ("GaussianPerturber", "Gaussian noise source for weight perturbation");
    CAUCHY_PERTURBER => ("CauchyPerturber", "Heavy-tailed Cauchy noise source for weight perturbation");
    TORUS_PRED_PREY_TASK => ("TorusPredPreyTask", "Predator/prey pursuit on a toroidal grid world");
    MS_PAC_MAN_TASK => ("MsPacManTask", "Ms. Pac-Man arcade simulation task");
    TETRIS_TASK => ("TetrisTask", "Tetris board-clearing task");
    AVERAGE_STAT => ("Average", "Aggregates population scores by mean");
    MAX_STAT => ("Max", "Aggregates population scores by maximum");
    MIN_STAT => ("Min", "Aggregates population scores by minimum");
}

impl Strategy {
    /// Resolves a canonical name against the compiled-in table.
    ///
    /// Returns `None` for names that do not correspond to any linked
    /// component; callers translate that into an unresolved-strategy error.
    #[must_use]
    pub fn resolve(name: &str) -> Option<&'static Self> {
        STRATEGIES.iter().copied().find(|s| s.name == name)
    }
}
